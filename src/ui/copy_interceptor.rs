// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::time::{Duration, Instant};

use log::{debug, error};

use crate::{
    alignment::Alignment,
    clipboard::CopyOutcome,
    ui::selection::{CellPos, Selection},
};

pub const SELECTION_CLEAR_DELAY: Duration = Duration::from_millis(200);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyState {
    Idle,
    Copying,
}

// Copy-on-release. Only active between mount() and unmount(); unmounting also drops the pending
// selection clear. Releases are serial (one pointer), so a newer release simply replaces the
// clear deadline of an older one.
#[derive(Debug)]
pub struct CopyInterceptor {
    listening: bool,
    in_flight: usize,
    clear_at: Option<Instant>,
    clear_delay: Duration,
}

impl CopyInterceptor {
    pub fn new(clear_delay: Duration) -> Self {
        CopyInterceptor {
            listening: false,
            in_flight: 0,
            clear_at: None,
            clear_delay,
        }
    }

    pub fn mount(&mut self) {
        debug!("Copy interceptor mounted");
        self.listening = true;
    }

    pub fn unmount(&mut self) {
        debug!("Copy interceptor unmounted");
        self.listening = false;
        self.clear_at = None;
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn state(&self) -> CopyState {
        if self.in_flight > 0 || self.clear_at.is_some() {
            CopyState::Copying
        } else {
            CopyState::Idle
        }
    }

    pub fn clear_deadline(&self) -> Option<Instant> {
        self.clear_at
    }

    // Returns the text to hand to the clipboard, if this release should copy. `target` is the
    // cell under the pointer, None if the release happened anywhere else.
    pub fn on_pointer_release(
        &mut self,
        target: Option<CellPos>,
        selection: &Selection,
        aln: &Alignment,
        now: Instant,
    ) -> Option<String> {
        if !self.listening {
            return None;
        }
        target?;
        let text = selection.text(aln);
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.in_flight += 1;
        // Scheduled whatever the clipboard outcome turns out to be.
        self.clear_at = Some(now + self.clear_delay);
        debug!("Copying {} chars", text.len());
        Some(text.to_string())
    }

    // True iff the copy succeeded and a notification should be shown.
    pub fn on_copy_outcome(&mut self, outcome: &CopyOutcome) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        match outcome {
            Ok(_) => true,
            Err(e) => {
                error!("Could not copy selection automatically: {}", e);
                false
            }
        }
    }

    // True iff the selection-clear deadline has passed; the deadline is consumed.
    pub fn poll_clear(&mut self, now: Instant) -> bool {
        match self.clear_at {
            Some(deadline) if now >= deadline => {
                self.clear_at = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for CopyInterceptor {
    fn default() -> Self {
        Self::new(SELECTION_CLEAR_DELAY)
    }
}
