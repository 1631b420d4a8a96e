// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{
    alignment::SeqId,
    ui::{
        msg_theme::{style_for, ERROR_STYLE},
        seq_widget::SeqPairPane,
        InputMode, UI,
    },
};

const FORM_HEIGHT: u16 = 6; // 2 x (input + error line) + borders
const RESULT_HEIGHT: u16 = 4; // 2 sequence rows + borders
const FIELD_LABEL_WIDTH: u16 = 12; // "Sequence 1: "

const FORM_HINT: &str = "Enter: compare  Tab: other field  Esc: browse  Ctrl-C: quit";
const BROWSE_HINT: &str = "Drag: copy  h/l: scroll  i: edit  q: quit";

pub fn render_ui(f: &mut Frame, ui: &mut UI) {
    let area = f.area();

    let alert_height = if ui.app.error().is_some() { 1 } else { 0 };
    let result_height = if ui.app.alignment().is_some() {
        RESULT_HEIGHT
    } else {
        0
    };
    let [form_area, alert_area, result_area, _, modeline_area] = Layout::vertical([
        Constraint::Length(FORM_HEIGHT),
        Constraint::Length(alert_height),
        Constraint::Length(result_height),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_form(f, ui, form_area);
    render_alert(f, ui, alert_area);
    render_result(f, ui, result_area);
    render_modeline(f, ui, modeline_area);

    if let Some(toast) = ui.app.toast() {
        toast.render(f, area);
    }
}

// Visible part of an input: the tail, if needed to keep the cursor on screen.
fn visible_input(text: &str, cursor: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let offset = cursor.saturating_sub(width - 1);
    let shown: String = text.chars().skip(offset).take(width).collect();
    (shown, cursor - offset)
}

fn render_form(f: &mut Frame, ui: &mut UI, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Sequences ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let input_width = inner.width.saturating_sub(FIELD_LABEL_WIDTH) as usize;
    let form = &ui.app.form;
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_pos: Option<Position> = None;

    for (i, id) in SeqId::ALL.into_iter().enumerate() {
        let field = form.field(id);
        let focused = ui.input_mode == InputMode::Form && form.focus() == id;
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let (shown, cursor_x) =
            visible_input(&field.editor.text(), field.editor.cursor(), input_width);
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", id), label_style),
            Span::raw(shown),
        ]));
        match &field.error {
            Some(msg) => lines.push(Line::styled(
                format!("{:w$}{}", "", msg, w = FIELD_LABEL_WIDTH as usize),
                Style::default().fg(Color::Red),
            )),
            None => lines.push(Line::raw("")),
        }
        if focused {
            cursor_pos = Some(Position::new(
                inner.x + FIELD_LABEL_WIDTH + cursor_x as u16,
                inner.y + 2 * i as u16,
            ));
        }
    }

    f.render_widget(Paragraph::new(lines), inner);
    if let Some(pos) = cursor_pos {
        if inner.contains(pos) {
            f.set_cursor_position(pos);
        }
    }
}

fn render_alert(f: &mut Frame, ui: &UI, area: Rect) {
    if let Some(msg) = ui.app.error() {
        let text = format!(" ✗ {} (Esc to dismiss)", msg);
        f.render_widget(Paragraph::new(text).style(ERROR_STYLE), area);
    }
}

fn render_result(f: &mut Frame, ui: &mut UI, area: Rect) {
    let Some(aln) = ui.app.alignment() else {
        ui.seq_pane = None;
        return;
    };
    let nb_mismatches = aln.num_mismatches();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Alignment result ")
        .title_bottom(Line::from(format!(
            " {} mismatch(es) / {} columns ",
            nb_mismatches,
            aln.len()
        )));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [label_area, seq_area] = Layout::horizontal([
        Constraint::Length(ui.label_pane_width()),
        Constraint::Min(0),
    ])
    .areas(inner);

    let labels: Vec<Line> = SeqId::ALL
        .into_iter()
        .map(|id| Line::styled(format!("S{}", id.index() + 1), Style::default().fg(Color::Cyan)))
        .collect();
    f.render_widget(Paragraph::new(labels), label_area);

    ui.seq_pane = Some(seq_area);
    ui.adjust_seq_pane_position();

    // Re-borrow after the mutation above.
    let Some(aln) = ui.app.alignment() else {
        return;
    };
    let pane = SeqPairPane {
        alignment: aln,
        selection: ui.app.selection(),
        left_j: ui.leftmost_col as usize,
        theme: ui.theme,
        base_style: Style::default(),
    };
    f.render_widget(pane, seq_area);
}

fn render_modeline(f: &mut Frame, ui: &UI, area: Rect) {
    let msg = ui.app.current_message();
    let line = if msg.message.is_empty() {
        let hint = match ui.input_mode {
            InputMode::Form => FORM_HINT,
            InputMode::Browse => BROWSE_HINT,
        };
        Line::styled(hint, Style::default().fg(Color::DarkGray))
    } else {
        Line::styled(
            format!("{}{}", msg.prefix, msg.message),
            style_for(&msg.kind),
        )
    };
    f.render_widget(Paragraph::new(line), area);
}
