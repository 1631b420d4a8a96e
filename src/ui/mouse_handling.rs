// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::UI;

// Left button selects; any release is offered to the copy interceptor, which only acts when the
// release lands on a residue cell.
pub fn handle_mouse_event(ui: &mut UI, mouse_event: MouseEvent, now: Instant) {
    let target = ui.cell_at(mouse_event.column, mouse_event.row);
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => ui.app.pointer_down(target),
        MouseEventKind::Drag(MouseButton::Left) => ui.app.pointer_drag(target),
        MouseEventKind::Up(_) => ui.app.pointer_up(target, now),
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => ui.scroll_one_col_right(1),
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => ui.scroll_one_col_left(1),
        _ => {}
    }
}
