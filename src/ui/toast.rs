// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

//! Toast notification
//!
//! A non-blocking overlay that auto-dismisses after a fixed duration.
//! Renders in the bottom-right corner on top of all other content.

use std::time::{Duration, Instant};

use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::{app::MessageKind, ui::msg_theme::style_for};

pub const COPIED_MSG: &str = "Sequence copied";
pub const TOAST_DURATION: Duration = Duration::from_secs(1);

/// A toast notification that auto-dismisses
#[derive(Clone, Debug)]
pub struct Toast {
    pub kind: MessageKind,
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(kind: MessageKind, message: impl Into<String>, now: Instant, duration: Duration) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at: now,
            duration,
        }
    }

    pub fn success(message: impl Into<String>, now: Instant, duration: Duration) -> Self {
        Self::new(MessageKind::Success, message, now, duration)
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    /// Render the toast in the bottom-right corner, above the modeline
    ///
    /// Uses `Clear` so the toast is visible on top of other content.
    pub fn render(&self, f: &mut Frame, area: Rect) {
        // 1 line of text + borders, 2 chars of padding on each side
        let width = (self.message.chars().count() as u16 + 4).min(area.width);
        let height = 3.min(area.height);

        let x = area.right().saturating_sub(width + 1);
        let y = area.bottom().saturating_sub(height + 1);
        let toast_area = Rect::new(x, y, width, height).intersection(area);

        let style = style_for(&self.kind);
        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).style(style));

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}
