// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

//! System clipboard access.
//!
//! Writes never block the event loop: the writer reports the outcome on a channel that the app
//! drains on each tick.

use std::{sync::mpsc::Sender, thread};

use arboard::Clipboard;
use log::debug;

use crate::errors::SeqPairError;

/// Result of one clipboard write; `Ok` carries the text that was copied.
pub type CopyOutcome = Result<String, SeqPairError>;

pub trait ClipboardWriter {
    /// Start writing `text`; exactly one outcome must eventually be sent on `done`.
    fn write_text(&mut self, text: String, done: Sender<CopyOutcome>);
}

/// Cross-platform clipboard backed by `arboard`, one worker thread per write.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: String, done: Sender<CopyOutcome>) {
        thread::spawn(move || {
            let outcome = copy_to_clipboard(&text).map(|()| text);
            // The app may have quit in the meantime.
            if done.send(outcome).is_err() {
                debug!("Clipboard outcome dropped: receiver gone");
            }
        });
    }
}

/// Copy text to the system clipboard
///
/// Common failure cases: no display server (headless Linux), permission denied. The clipboard is
/// created fresh each time to avoid holding resources.
pub fn copy_to_clipboard(text: &str) -> Result<(), SeqPairError> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
