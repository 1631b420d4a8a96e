// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use crate::alignment::{Alignment, SeqId};

// A rendered residue cell: which row, which (0-based) alignment column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CellPos {
    pub row: SeqId,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: SeqId, col: usize) -> Self {
        CellPos { row, col }
    }
}

// Click-drag text selection over the result grid. Pressing sets the anchor and leaves the
// selection collapsed (empty); dragging moves the head. The selected cells run from the earlier
// to the later of the two, in reading order (row 1 before row 2).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    anchor: Option<CellPos>,
    head: Option<CellPos>,
    dragging: bool,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, pos: CellPos) {
        self.anchor = Some(pos);
        self.head = None;
        self.dragging = true;
    }

    pub fn extend(&mut self, pos: CellPos) {
        if self.dragging && self.anchor.is_some() {
            self.head = Some(pos);
        }
    }

    pub fn finish(&mut self) {
        self.dragging = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_empty(&self) -> bool {
        self.bounds().is_none()
    }

    fn bounds(&self) -> Option<(CellPos, CellPos)> {
        let (anchor, head) = (self.anchor?, self.head?);
        Some((anchor.min(head), anchor.max(head)))
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        match self.bounds() {
            Some((start, end)) => start <= pos && pos <= end,
            None => false,
        }
    }

    // The selected residues; a selection spanning both rows yields one line per row.
    pub fn text(&self, aln: &Alignment) -> String {
        let Some((start, end)) = self.bounds() else {
            return String::new();
        };
        let slice = |row: SeqId, from: usize, to: usize| -> String {
            aln.sequence(row)
                .chars()
                .skip(from)
                .take((to + 1).saturating_sub(from))
                .collect()
        };
        if start.row == end.row {
            slice(start.row, start.col, end.col)
        } else {
            format!(
                "{}\n{}",
                slice(start.row, start.col, usize::MAX - 1),
                slice(end.row, 0, end.col)
            )
        }
    }
}
