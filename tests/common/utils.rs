// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::sync::{mpsc::Sender, Arc, Mutex};

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use ratatui::{
    backend::TestBackend,
    buffer::Buffer,
    prelude::{Position, Rect, Terminal},
    TerminalOptions, Viewport,
};

use seqpair::{
    app::{form::SequenceForm, App},
    clipboard::{ClipboardWriter, CopyOutcome},
    config::SeqPairConfig,
    ui::{render::render_ui, InputMode, UI},
};

// Everything the app asked the clipboard to hold, in order.
pub type Copied = Arc<Mutex<Vec<String>>>;

// Records writes and answers immediately.
#[derive(Clone, Default)]
pub struct FakeClipboard {
    written: Copied,
}

impl ClipboardWriter for FakeClipboard {
    fn write_text(&mut self, text: String, done: Sender<CopyOutcome>) {
        self.written.lock().expect("lock").push(text.clone());
        done.send(Ok(text)).expect("send");
    }
}

// Starts the way the binary does: both values prefilled means compare right away, in Browse mode.
#[allow(dead_code)]
pub fn with_rig<F>(seq1: &str, seq2: &str, term_width: u16, term_height: u16, mut f: F)
where
    F: FnMut(&mut UI, &mut Terminal<TestBackend>, &Copied),
{
    let clipboard = FakeClipboard::default();
    let copied = clipboard.written.clone();
    let mut app = App::new(
        SequenceForm::with_values(seq1, seq2),
        &SeqPairConfig::default(),
        Box::new(clipboard),
    );
    let mut ui = UI::new(&mut app);
    if !seq1.is_empty() && !seq2.is_empty() && ui.app_mut().submit() {
        ui.set_input_mode(InputMode::Browse);
    }

    let backend = TestBackend::new(term_width, term_height);
    let viewport = Viewport::Fixed(Rect::new(0, 0, term_width, term_height));
    let mut terminal = Terminal::with_options(backend, TerminalOptions { viewport })
        .expect("creating test-backend terminal");
    // Initial draw
    draw(&mut ui, &mut terminal);

    // Events and assertions here
    f(&mut ui, &mut terminal, &copied);
}

#[allow(dead_code)]
pub fn draw(ui: &mut UI, terminal: &mut Terminal<TestBackend>) {
    terminal.draw(|f| render_ui(f, ui)).expect("draw");
}

#[allow(dead_code)]
pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in 0..area.height {
        out.push_str(&screen_line(buf, y));
        out.push('\n');
    }
    out
}

#[allow(dead_code)]
pub fn screen_line(buffer: &Buffer, y: u16) -> String {
    let screen = buffer.area;
    (0..screen.width)
        .map(|x| {
            buffer
                .cell(Position::from((x, y)))
                .expect("Wrong position")
                .symbol()
        })
        .collect()
}

// The residues currently shown, one line per sequence.
#[allow(dead_code)]
pub fn pane_text(buffer: &Buffer, ui: &UI) -> String {
    let pane = ui.seq_pane_area().expect("no sequence pane");
    (pane.top()..pane.bottom())
        .map(|y| {
            (pane.left()..pane.right())
                .map(|x| {
                    buffer
                        .cell(Position::from((x, y)))
                        .expect("Wrong position")
                        .symbol()
                })
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[allow(dead_code)]
pub fn keypress(c: char) -> KeyEvent {
    keycode(KeyCode::Char(c))
}

#[allow(dead_code)]
pub fn keycode(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

#[allow(dead_code)]
pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[allow(dead_code)]
pub fn left_down(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

#[allow(dead_code)]
pub fn left_drag(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
}

#[allow(dead_code)]
pub fn left_up(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}
