// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, io};

use crate::alignment::SeqId;

pub const LENGTH_MISMATCH_MSG: &str = "Sequence lengths must be equal";

#[derive(Debug)]
pub enum SeqPairError {
    Io(io::Error),
    Format(String),
    // Field-level form error; the message is shown under the field.
    Validation { field: SeqId, message: String },
    LengthMismatch { len1: usize, len2: usize },
    Clipboard(String),
}

// These allow conversion to SeqPairError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for SeqPairError {
    fn from(e: io::Error) -> Self {
        SeqPairError::Io(e)
    }
}

impl From<String> for SeqPairError {
    fn from(s: String) -> Self {
        SeqPairError::Format(s)
    }
}

impl From<serde_json::Error> for SeqPairError {
    fn from(e: serde_json::Error) -> Self {
        SeqPairError::Format(format!("config: {}", e))
    }
}

impl From<arboard::Error> for SeqPairError {
    fn from(e: arboard::Error) -> Self {
        SeqPairError::Clipboard(e.to_string())
    }
}

impl fmt::Display for SeqPairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeqPairError::Io(e) => write!(f, "I/O error: {}", e),
            SeqPairError::Format(msg) => write!(f, "Format error: {}", msg),
            SeqPairError::Validation { message, .. } => write!(f, "{}", message),
            // Users see the same text whatever the lengths; these go to the log.
            SeqPairError::LengthMismatch { .. } => write!(f, "{}", LENGTH_MISMATCH_MSG),
            SeqPairError::Clipboard(msg) => write!(f, "Clipboard error: {}", msg),
        }
    }
}

impl std::error::Error for SeqPairError {}
