// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Thomas Junier
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{line_editor::LineEditor, InputMode, UI};

// Returns true IFF the user quits.
pub fn handle_key_press(ui: &mut UI, key_event: KeyEvent) -> bool {
    // Ctrl-C quits from anywhere
    if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        return true;
    }
    match ui.input_mode {
        InputMode::Form => {
            handle_form_key(ui, key_event);
            false
        }
        InputMode::Browse => handle_browse_key(ui, key_event),
    }
}

fn handle_form_key(ui: &mut UI, key_event: KeyEvent) {
    match key_event.code {
        KeyCode::Esc => {
            ui.input_mode = InputMode::Browse;
            ui.app.clear_msg();
        }
        KeyCode::Enter => {
            if ui.app.submit() {
                ui.jump_to_begin();
                ui.input_mode = InputMode::Browse;
            }
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => ui.app.form.focus_next(),
        KeyCode::Left => ui.app.form.move_cursor(LineEditor::move_left),
        KeyCode::Right => ui.app.form.move_cursor(LineEditor::move_right),
        KeyCode::Home => ui.app.form.move_cursor(LineEditor::move_home),
        KeyCode::End => ui.app.form.move_cursor(LineEditor::move_end),
        KeyCode::Backspace => ui.app.form.edit(LineEditor::backspace),
        KeyCode::Delete => ui.app.form.edit(LineEditor::delete),
        KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            ui.app.form.edit(LineEditor::clear)
        }
        // Anything printable goes in; the validator decides what is acceptable.
        KeyCode::Char(c)
            if (c.is_ascii_graphic() || c == ' ')
                && !key_event.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            ui.app.form.edit(|e| e.insert_char(c))
        }
        _ => {}
    }
}

// Pasted sequences often come wrapped over several lines; whitespace is dropped. Pasting outside
// the form does nothing.
pub fn handle_paste(ui: &mut UI, text: &str) {
    if ui.input_mode != InputMode::Form {
        return;
    }
    let residues: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    ui.app.form.edit(|e| e.insert_str(&residues));
}

fn handle_browse_key(ui: &mut UI, key_event: KeyEvent) -> bool {
    let mut done = false;
    match key_event.code {
        // Q and q quit
        KeyCode::Char('q') | KeyCode::Char('Q') => done = true,
        KeyCode::Esc => {
            ui.app.dismiss_error();
            ui.app.clear_msg();
        }
        KeyCode::Char('i') | KeyCode::Tab | KeyCode::Enter => {
            ui.input_mode = InputMode::Form;
            ui.app.clear_msg();
        }

        // ----- Motion -----
        KeyCode::Left if key_event.modifiers.contains(KeyModifiers::SHIFT) => {
            ui.scroll_one_screen_left(1)
        }
        KeyCode::Right if key_event.modifiers.contains(KeyModifiers::SHIFT) => {
            ui.scroll_one_screen_right(1)
        }
        KeyCode::Char('h') | KeyCode::Left => ui.scroll_one_col_left(1),
        KeyCode::Char('l') | KeyCode::Right => ui.scroll_one_col_right(1),
        KeyCode::Char('H') => ui.scroll_one_screen_left(1),
        KeyCode::Char('L') => ui.scroll_one_screen_right(1),
        KeyCode::Char('^') | KeyCode::Char('0') | KeyCode::Home => ui.jump_to_begin(),
        KeyCode::Char('$') | KeyCode::End => ui.jump_to_end(),
        _ => {}
    }
    done
}
