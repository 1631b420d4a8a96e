// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::Widget,
};

use crate::{
    alignment::{Alignment, SeqId},
    ui::{
        selection::{CellPos, Selection},
        style::{get_residue_style, render_row, CellMarks, Theme},
    },
};

// The two sequences, one row each, starting at alignment column `left_j`.
pub struct SeqPairPane<'a> {
    pub alignment: &'a Alignment,
    pub selection: &'a Selection,
    pub left_j: usize,
    pub theme: Theme,
    pub base_style: Style, // for clearing/background
}

impl Widget for SeqPairPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = area.height as usize;
        let cols = area.width as usize;

        // Clear the pane so “extra space” doesn’t show stale cells.
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(' ').set_style(self.base_style);
                }
            }
        }

        for (r, seq_id) in SeqId::ALL.into_iter().enumerate().take(rows) {
            let cells = render_row(self.alignment, seq_id)
                .enumerate()
                .skip(self.left_j)
                .take(cols);
            for (c, (j, cell_style)) in cells.enumerate() {
                let mut marks = CellMarks::NONE;
                if cell_style.mismatch {
                    marks |= CellMarks::MISMATCH;
                }
                if self.selection.contains(CellPos::new(seq_id, j)) {
                    marks |= CellMarks::SELECTED;
                }
                let style = get_residue_style(cell_style.fill, marks, self.theme);

                if let Some(cell) = buf.cell_mut((area.x + c as u16, area.y + r as u16)) {
                    cell.set_char(cell_style.residue).set_style(style);
                }
            }
        }
    }
}
