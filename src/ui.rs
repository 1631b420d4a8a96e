// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
pub mod color_map;
pub mod copy_interceptor;
pub mod key_handling;
pub mod line_editor;
pub mod mouse_handling;
mod msg_theme;
pub mod render;
pub mod selection;
mod seq_widget;
pub mod style;
pub mod toast;

use std::{cmp::min, time::Instant};

use log::debug;

use ratatui::layout::{Position, Rect};

use crate::{
    alignment::SeqId,
    app::App,
    ui::{selection::CellPos, style::Theme},
};

pub const USER_GUIDE: &str = include_str!("ui/bindings.md");

const LABEL_PANE_WIDTH: u16 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    // Typing into the form
    Form,
    // Looking at (and selecting from) the result
    Browse,
}

// The screen. Creating it mounts the copy-on-release listener; dropping it unmounts it, which also
// cancels a pending selection clear.
pub struct UI<'a> {
    app: &'a mut App,
    theme: Theme,
    input_mode: InputMode,
    leftmost_col: u16,
    // Known only once the layout is solved, i.e. after the first draw. `seq_pane` is where the
    // residues are drawn, None when there is no result to show.
    seq_pane: Option<Rect>,
}

impl<'a> UI<'a> {
    pub fn new(app: &'a mut App) -> Self {
        app.mount_screen();
        UI {
            app,
            theme: Theme::Color,
            input_mode: InputMode::Form,
            leftmost_col: 0,
            seq_pane: None,
        }
    }

    pub fn app(&self) -> &App {
        &*self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut *self.app
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
    }

    pub fn seq_pane_area(&self) -> Option<Rect> {
        self.seq_pane
    }

    // Timers and clipboard outcomes; true iff a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.app.tick(now)
    }

    // ****************************************************************
    // Colors and Styles

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_monochrome(&mut self) {
        self.theme = Theme::Monochrome;
    }

    // ****************************************************************
    // Hit testing

    // The residue cell at screen position (column, row), if there is one.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<CellPos> {
        let pane = self.seq_pane?;
        let aln = self.app.alignment()?;
        if !pane.contains(Position::new(column, row)) {
            return None;
        }
        let seq_id = *SeqId::ALL.get((row - pane.y) as usize)?;
        let col = self.leftmost_col as usize + (column - pane.x) as usize;
        if col < aln.len() {
            Some(CellPos::new(seq_id, col))
        } else {
            None
        }
    }

    // ****************************************************************
    /*
     * Dimensions
     *
     * The layout determines the number of columns shown; this in turn affects the maximal
     * leftmost column.
     * */

    fn max_nb_col_shown(&self) -> u16 {
        self.seq_pane.map_or(0, |pane| pane.width)
    }

    fn aln_len(&self) -> u16 {
        self.app
            .alignment()
            .map_or(0, |aln| aln.len().min(u16::MAX as usize) as u16)
    }

    pub fn max_leftmost_col(&self) -> u16 {
        self.aln_len().saturating_sub(self.max_nb_col_shown())
    }

    pub fn leftmost_col(&self) -> u16 {
        self.leftmost_col
    }

    // Resizing the terminal changes the number of columns shown, so leftmost_col may now exceed
    // its maximum. Call after the layout is solved, before the widgets are drawn.
    pub fn adjust_seq_pane_position(&mut self) {
        if self.leftmost_col > self.max_leftmost_col() {
            debug!("leftmost col {} -> {}", self.leftmost_col, self.max_leftmost_col());
            self.leftmost_col = self.max_leftmost_col();
        }
    }

    pub fn label_pane_width(&self) -> u16 {
        LABEL_PANE_WIDTH
    }

    // ****************************************************************
    // Scrolling

    pub fn scroll_one_col_left(&mut self, count: u16) {
        self.leftmost_col = self.leftmost_col.saturating_sub(count);
    }

    pub fn scroll_one_col_right(&mut self, count: u16) {
        self.leftmost_col = min(
            self.leftmost_col.saturating_add(count),
            self.max_leftmost_col(),
        );
    }

    pub fn scroll_one_screen_left(&mut self, count: u16) {
        self.leftmost_col = self
            .leftmost_col
            .saturating_sub(count.saturating_mul(self.max_nb_col_shown()));
    }

    pub fn scroll_one_screen_right(&mut self, count: u16) {
        self.leftmost_col = min(
            self.leftmost_col
                .saturating_add(count.saturating_mul(self.max_nb_col_shown())),
            self.max_leftmost_col(),
        );
    }

    pub fn jump_to_begin(&mut self) {
        self.leftmost_col = 0
    }

    pub fn jump_to_end(&mut self) {
        self.leftmost_col = self.max_leftmost_col()
    }
}

impl Drop for UI<'_> {
    fn drop(&mut self) {
        self.app.unmount_screen();
    }
}
