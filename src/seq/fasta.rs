// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::errors::SeqPairError;
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, SeqPairError> {
    let file = File::open(path)?;
    let mut result: SeqFile = Vec::new();
    let mut current_record: Option<SeqRecord> = None;

    for line in BufReader::new(file).lines() {
        let l = line?;
        let l = l.trim_end();
        if let Some(hdr) = l.strip_prefix('>') {
            if let Some(record) = current_record.take() {
                result.push(record);
            }
            current_record = Some(SeqRecord {
                header: hdr.to_string(),
                sequence: String::new(),
            });
        } else if let Some(record) = current_record.as_mut() {
            // append line to current record's sequence
            record.sequence.push_str(l.trim());
        } else if !l.trim().is_empty() {
            return Err(SeqPairError::Format(String::from(
                "Sequence data before first FastA header",
            )));
        }
    }
    if let Some(record) = current_record {
        result.push(record);
    }
    debug!("Read {} FastA records", result.len());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::file::first_pair;

    #[test]
    fn test_read_fasta_file_pair() {
        let path = "data/pair.fas";
        let fasta: SeqFile = read_fasta_file(path).expect("Test file not found");
        assert_eq!(fasta.len(), 2);
        assert_eq!(fasta[0].header, "HBA_HUMAN fragment");
        assert_eq!(fasta[0].sequence, "VLSPADKTNVKAAWGKVGAHAGEYGAEALERMF");
        assert_eq!(fasta[1].header, "HBB_HUMAN fragment");
        assert_eq!(fasta[1].sequence, "VHLTPEEKSAVTALWGKVNVDEVGGEALGRLLV");
    }

    #[test]
    fn test_first_pair() {
        let fasta = read_fasta_file("data/pair.fas").expect("Test file not found");
        let (s1, s2) = first_pair(&fasta).unwrap();
        assert_eq!(s1.len(), s2.len());
    }

    #[test]
    fn test_first_pair_single_record() {
        let fasta = read_fasta_file("data/single.fas").expect("Test file not found");
        assert_eq!(fasta.len(), 1);
        assert!(matches!(first_pair(&fasta), Err(SeqPairError::Format(_))));
    }

    #[test]
    fn test_read_fasta_missing_file() {
        assert!(matches!(
            read_fasta_file("data/no-such-file.fas"),
            Err(SeqPairError::Io(_))
        ));
    }
}
