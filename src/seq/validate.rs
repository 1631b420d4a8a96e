// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::sync::OnceLock;

use regex::Regex;

use crate::{alignment::SeqId, errors::SeqPairError};

pub const REQUIRED_MSG: &str = "Please enter a sequence";
pub const ALPHABET_MSG: &str = "Only amino-acid letters or the - symbol";

// The 20 standard amino acids plus the gap, in either case.
const SEQ_PATTERN: &str = r"(?i)^[ARNDCEQGHILKMFPSTWYV-]+$";

fn seq_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SEQ_PATTERN).expect("sequence pattern is a valid regex"))
}

// Field-level check of a raw form value. Lengths are not compared here.
pub fn validate_sequence(field: SeqId, raw: &str) -> Result<(), SeqPairError> {
    if raw.is_empty() {
        return Err(SeqPairError::Validation {
            field,
            message: String::from(REQUIRED_MSG),
        });
    }
    if !seq_regex().is_match(raw) {
        return Err(SeqPairError::Validation {
            field,
            message: String::from(ALPHABET_MSG),
        });
    }
    Ok(())
}
