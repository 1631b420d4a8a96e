// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use crate::errors::SeqPairError;
use crate::seq::record::SeqRecord;

// For our purposes, a sequence file is just a Vec of sequence records.
//

pub type SeqFile = Vec<SeqRecord>;

// The comparison needs exactly two sequences; extra records are ignored.
pub fn first_pair(seq_file: &SeqFile) -> Result<(&str, &str), SeqPairError> {
    match seq_file.as_slice() {
        [first, second, ..] => Ok((&first.sequence, &second.sequence)),
        _ => Err(SeqPairError::Format(format!(
            "Expected at least two sequences, found {}",
            seq_file.len()
        ))),
    }
}
