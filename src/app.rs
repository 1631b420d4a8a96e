// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod form;

use std::{
    sync::mpsc::{self, Receiver, Sender},
    time::{Duration, Instant},
};

use log::{debug, info, warn};

use crate::{
    alignment::Alignment,
    app::form::SequenceForm,
    clipboard::{ClipboardWriter, CopyOutcome},
    config::SeqPairConfig,
    ui::{
        copy_interceptor::{CopyInterceptor, CopyState},
        selection::{CellPos, Selection},
        toast::{Toast, COPIED_MSG},
    },
};

#[derive(Clone, Debug)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

// Simple, 1-line message (possibly just "")
pub struct CurrentMessage {
    pub prefix: String,
    pub message: String,
    pub kind: MessageKind,
}

// Screen state. `alignment` and `error` are only ever replaced as a whole, by submit() and
// dismiss_error().
pub struct App {
    pub form: SequenceForm,
    alignment: Option<Alignment>,
    error: Option<String>,
    selection: Selection,
    interceptor: CopyInterceptor,
    clipboard: Box<dyn ClipboardWriter>,
    outcome_tx: Sender<CopyOutcome>,
    outcome_rx: Receiver<CopyOutcome>,
    toast: Option<Toast>,
    toast_duration: Duration,
    current_msg: CurrentMessage,
}

impl App {
    pub fn new(form: SequenceForm, config: &SeqPairConfig, clipboard: Box<dyn ClipboardWriter>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel();
        App {
            form,
            alignment: None,
            error: None,
            selection: Selection::new(),
            interceptor: CopyInterceptor::new(config.selection_clear_delay()),
            clipboard,
            outcome_tx,
            outcome_rx,
            toast: None,
            toast_duration: config.toast_duration(),
            current_msg: CurrentMessage {
                prefix: String::from(""),
                message: String::from(""),
                kind: MessageKind::Info,
            },
        }
    }

    pub fn alignment(&self) -> Option<&Alignment> {
        self.alignment.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn copy_state(&self) -> CopyState {
        self.interceptor.state()
    }

    pub fn is_listening(&self) -> bool {
        self.interceptor.is_listening()
    }

    // ****************************************************************
    // Form

    // Invalid fields never reach the alignment; they leave it as it was. Returns true iff a new
    // alignment was built.
    pub fn submit(&mut self) -> bool {
        let Some((seq1, seq2)) = self.form.validate() else {
            self.warning_msg("Please correct the highlighted fields.");
            return false;
        };
        self.selection.clear();
        match Alignment::build(&seq1, &seq2) {
            Ok(aln) => {
                info!("Built alignment of length {}", aln.len());
                let nb_mismatches = aln.num_mismatches();
                self.error = None;
                self.alignment = Some(aln);
                self.info_msg(format!("{} mismatch(es)", nb_mismatches));
                true
            }
            Err(e) => {
                warn!("Alignment rejected: {:?}", e);
                self.error = Some(e.to_string());
                self.alignment = None;
                self.clear_msg();
                false
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    // ****************************************************************
    // Screen lifetime

    pub fn mount_screen(&mut self) {
        self.interceptor.mount();
    }

    pub fn unmount_screen(&mut self) {
        self.interceptor.unmount();
    }

    // ****************************************************************
    // Pointer

    // `target` is the residue cell under the pointer, if any.

    pub fn pointer_down(&mut self, target: Option<CellPos>) {
        match target {
            Some(pos) => self.selection.start(pos),
            None => self.selection.clear(),
        }
    }

    pub fn pointer_drag(&mut self, target: Option<CellPos>) {
        if let Some(pos) = target {
            self.selection.extend(pos);
        }
    }

    pub fn pointer_up(&mut self, target: Option<CellPos>, now: Instant) {
        self.selection.finish();
        let Some(aln) = &self.alignment else {
            return;
        };
        if let Some(text) = self
            .interceptor
            .on_pointer_release(target, &self.selection, aln, now)
        {
            self.clipboard.write_text(text, self.outcome_tx.clone());
        }
    }

    // Processes clipboard outcomes and timers. Returns true iff something visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            if self.interceptor.on_copy_outcome(&outcome) {
                debug!("Copied to clipboard");
                self.toast = Some(Toast::success(COPIED_MSG, now, self.toast_duration));
                changed = true;
            }
        }
        if self.interceptor.poll_clear(now) {
            self.selection.clear();
            changed = true;
        }
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
            changed = true;
        }
        changed
    }

    // ****************************************************************
    // Messages

    pub fn current_message(&self) -> &CurrentMessage {
        &self.current_msg
    }

    pub fn clear_msg(&mut self) {
        self.current_msg = CurrentMessage {
            prefix: String::from(""),
            message: String::from(""),
            kind: MessageKind::Info,
        }
    }

    pub fn info_msg(&mut self, msg: impl Into<String>) {
        self.current_msg = CurrentMessage {
            prefix: String::from(""),
            message: msg.into(),
            kind: MessageKind::Info,
        };
    }

    pub fn warning_msg(&mut self, msg: impl Into<String>) {
        self.current_msg = CurrentMessage {
            prefix: String::from("WARNING: "),
            message: msg.into(),
            kind: MessageKind::Warning,
        };
    }

    pub fn error_msg(&mut self, msg: impl Into<String>) {
        self.current_msg = CurrentMessage {
            prefix: String::from("ERROR: "),
            message: msg.into(),
            kind: MessageKind::Error,
        };
    }
}
