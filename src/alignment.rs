// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fmt;

use itertools::Itertools;
use log::debug;

use crate::errors::SeqPairError;

// Which of the two sequences (form field, result row) something refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeqId {
    First,
    Second,
}

impl SeqId {
    pub const ALL: [SeqId; 2] = [SeqId::First, SeqId::Second];

    pub fn index(self) -> usize {
        match self {
            SeqId::First => 0,
            SeqId::Second => 1,
        }
    }

    pub fn other(self) -> SeqId {
        match self {
            SeqId::First => SeqId::Second,
            SeqId::Second => SeqId::First,
        }
    }
}

impl fmt::Display for SeqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeqId::First => "Sequence 1",
            SeqId::Second => "Sequence 2",
        };
        write!(f, "{}", s)
    }
}

// A pair of equal-length, uppercased sequences. The first one is the reference: only the second
// one's residues are ever flagged as mismatches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment {
    sequence1: String,
    sequence2: String,
}

impl Alignment {
    // Lengths are compared in characters. Uppercasing is ASCII-only so that it cannot change the
    // length of what was just checked.
    pub fn build(seq1: &str, seq2: &str) -> Result<Self, SeqPairError> {
        let len1 = seq1.chars().count();
        let len2 = seq2.chars().count();
        if len1 != len2 {
            debug!("Length mismatch: {} vs {}", len1, len2);
            return Err(SeqPairError::LengthMismatch { len1, len2 });
        }
        Ok(Alignment {
            sequence1: seq1.to_ascii_uppercase(),
            sequence2: seq2.to_ascii_uppercase(),
        })
    }

    pub fn sequence1(&self) -> &str {
        &self.sequence1
    }

    pub fn sequence2(&self) -> &str {
        &self.sequence2
    }

    pub fn sequence(&self, id: SeqId) -> &str {
        match id {
            SeqId::First => &self.sequence1,
            SeqId::Second => &self.sequence2,
        }
    }

    pub fn len(&self) -> usize {
        self.sequence1.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence1.is_empty()
    }

    // 0-based columns where sequence 2 differs from sequence 1.
    pub fn mismatch_positions(&self) -> Vec<usize> {
        self.sequence1
            .chars()
            .zip(self.sequence2.chars())
            .positions(|(r1, r2)| r1 != r2)
            .collect()
    }

    pub fn num_mismatches(&self) -> usize {
        self.mismatch_positions().len()
    }

    // A line of '*' under mismatching columns, for plain-text output.
    pub fn mismatch_line(&self) -> String {
        self.sequence1
            .chars()
            .zip(self.sequence2.chars())
            .map(|(r1, r2)| if r1 != r2 { '*' } else { ' ' })
            .collect::<String>()
            .trim_end()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_uppercases_both() {
        let aln = Alignment::build("vlspADKtn", "VLSPadkTN").unwrap();
        assert_eq!(aln.sequence1(), "VLSPADKTN");
        assert_eq!(aln.sequence2(), "VLSPADKTN");
        assert_eq!(aln.len(), 9);
    }

    #[test]
    fn test_build_keeps_gaps() {
        let aln = Alignment::build("a-a", "AAA").unwrap();
        assert_eq!(aln.sequence1(), "A-A");
        assert_eq!(aln.sequence2(), "AAA");
    }

    #[test]
    fn test_build_length_mismatch() {
        let res = Alignment::build("AAA", "AA");
        assert!(matches!(
            res,
            Err(SeqPairError::LengthMismatch { len1: 3, len2: 2 })
        ));
    }

    #[test]
    fn test_length_mismatch_message_is_fixed() {
        let e1 = Alignment::build("AAA", "AA").unwrap_err();
        let e2 = Alignment::build("A", "AAAAAAAA").unwrap_err();
        assert_eq!(e1.to_string(), e2.to_string());
    }

    #[test]
    fn test_mismatch_positions() {
        let aln = Alignment::build("AAAA", "AAAT").unwrap();
        assert_eq!(aln.mismatch_positions(), vec![3]);
        let aln = Alignment::build("A-A", "AAA").unwrap();
        assert_eq!(aln.mismatch_positions(), vec![1]);
        let aln = Alignment::build("VLSPADKTNIKASWEKIGSHG", "VLSPADKTNIKASWEKIGSHG").unwrap();
        assert_eq!(aln.num_mismatches(), 0);
    }

    #[test]
    fn test_mismatch_line() {
        let aln = Alignment::build("ACDEF", "ACGEW").unwrap();
        assert_eq!(aln.mismatch_line(), "  * *");
        let aln = Alignment::build("ACDEF", "TCDEF").unwrap();
        assert_eq!(aln.mismatch_line(), "*");
    }
}
