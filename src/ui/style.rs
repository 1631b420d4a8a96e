// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::str::Chars;

use bitflags::bitflags;
use ratatui::style::{Color, Modifier, Style};

use crate::{
    alignment::{Alignment, SeqId},
    ui::color_map::{fill_for, Fill, MISMATCH_FILL},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Color,
    Monochrome,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellStyle {
    pub residue: char,
    pub fill: Fill,
    pub mismatch: bool,
}

/// Per-residue styles of a sequence, in order, one per character.
///
/// Lazy and pure: cloning it (or calling [`render_sequence`] again) starts over and yields the
/// same cells.
#[derive(Clone, Debug)]
pub struct CellStyles<'a> {
    residues: Chars<'a>,
    reference: Option<Chars<'a>>,
}

impl Iterator for CellStyles<'_> {
    type Item = CellStyle;

    fn next(&mut self) -> Option<CellStyle> {
        let residue = self.residues.next()?;
        // A reference that runs out counts as differing.
        let mismatch = match self.reference.as_mut() {
            Some(reference) => reference.next() != Some(residue),
            None => false,
        };
        let fill = if mismatch {
            MISMATCH_FILL
        } else {
            fill_for(residue)
        };
        Some(CellStyle {
            residue,
            fill,
            mismatch,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.residues.size_hint()
    }
}

// An empty reference is the same as no reference at all.
pub fn render_sequence<'a>(sequence: &'a str, compare_with: Option<&'a str>) -> CellStyles<'a> {
    CellStyles {
        residues: sequence.chars(),
        reference: compare_with.filter(|s| !s.is_empty()).map(str::chars),
    }
}

// Sequence 1 is the reference; sequence 2 is compared against it.
pub fn render_row(aln: &Alignment, row: SeqId) -> CellStyles<'_> {
    match row {
        SeqId::First => render_sequence(aln.sequence1(), None),
        SeqId::Second => render_sequence(aln.sequence2(), Some(aln.sequence1())),
    }
}

bitflags! {
    // Display-only state of a cell, on top of its CellStyle.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CellMarks: u8 {
        const NONE     = 0b00;
        const MISMATCH = 0b01;
        const SELECTED = 0b10;
    }
}

pub fn get_residue_style(fill: Fill, marks: CellMarks, theme: Theme) -> Style {
    let mut style = Style::default().add_modifier(Modifier::BOLD);

    match theme {
        Theme::Color => {
            if let Some(bg) = fill.to_color() {
                style = style.fg(Color::Black).bg(bg);
            }
        }
        Theme::Monochrome => {
            style = style.fg(Color::Reset).bg(Color::Reset);
            if marks.contains(CellMarks::MISMATCH) {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
        }
    }

    if marks.contains(CellMarks::SELECTED) {
        style = style.add_modifier(Modifier::REVERSED);
    }

    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::color_map::{DEFAULT_FILL, HYDROPHOBIC};

    fn fills(cells: CellStyles) -> Vec<Fill> {
        cells.map(|c| c.fill).collect()
    }

    fn mismatch_indices(cells: CellStyles) -> Vec<usize> {
        cells
            .enumerate()
            .filter(|(_, c)| c.mismatch)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_render_without_reference_follows_color_map() {
        let seq = "ARNDCEQGHILKMFPSTWYV-";
        let cells: Vec<CellStyle> = render_sequence(seq, None).collect();
        assert_eq!(cells.len(), seq.len());
        for (cell, residue) in cells.iter().zip(seq.chars()) {
            assert_eq!(cell.residue, residue);
            assert_eq!(cell.fill, fill_for(residue));
            assert!(!cell.mismatch);
        }
        assert_eq!(cells[20].fill, Fill::Transparent);
    }

    #[test]
    fn test_render_unknown_residue_is_white() {
        assert_eq!(fills(render_sequence("aX", None)), vec![DEFAULT_FILL, DEFAULT_FILL]);
    }

    #[test]
    fn test_mismatch_overrides_every_fill() {
        // Mismatch at a gap in the sequence itself: the override beats "no fill".
        let cells: Vec<CellStyle> = render_sequence("A-C", Some("AAA")).collect();
        assert_eq!(cells[0].fill, Fill::Solid(HYDROPHOBIC));
        assert_eq!(cells[1].fill, MISMATCH_FILL);
        assert_eq!(cells[2].fill, MISMATCH_FILL);
    }

    #[test]
    fn test_short_reference_counts_as_mismatch() {
        assert_eq!(mismatch_indices(render_sequence("AAAA", Some("AA"))), vec![2, 3]);
    }

    #[test]
    fn test_empty_reference_is_no_reference() {
        assert!(mismatch_indices(render_sequence("AAAA", Some(""))).is_empty());
    }

    #[test]
    fn test_render_is_restartable() {
        let cells = render_sequence("VLSPA-DK", Some("VLTPAADK"));
        let first: Vec<CellStyle> = cells.clone().collect();
        let second: Vec<CellStyle> = cells.collect();
        assert_eq!(first, second);
        let again: Vec<CellStyle> = render_sequence("VLSPA-DK", Some("VLTPAADK")).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn test_identical_sequences_have_no_mismatch() {
        let aln = Alignment::build("VLSPADKTNIKASWEKIGSHG", "VLSPADKTNIKASWEKIGSHG").unwrap();
        assert!(mismatch_indices(render_row(&aln, SeqId::Second)).is_empty());
    }

    #[test]
    fn test_single_substitution() {
        let aln = Alignment::build("AAAA", "AAAT").unwrap();
        assert_eq!(mismatch_indices(render_row(&aln, SeqId::Second)), vec![3]);
        let cells: Vec<CellStyle> = render_row(&aln, SeqId::Second).collect();
        assert_eq!(cells[3].fill, MISMATCH_FILL);
    }

    #[test]
    fn test_gap_in_reference_flags_second_sequence() {
        let aln = Alignment::build("A-A", "AAA").unwrap();
        let cells: Vec<CellStyle> = render_row(&aln, SeqId::Second).collect();
        assert_eq!(mismatch_indices(render_row(&aln, SeqId::Second)), vec![1]);
        assert_eq!(cells[1].fill, MISMATCH_FILL);
    }

    #[test]
    fn test_first_row_never_shows_mismatches() {
        let aln = Alignment::build("AAAA", "TTTT").unwrap();
        assert!(mismatch_indices(render_row(&aln, SeqId::First)).is_empty());
    }

    #[test]
    fn test_residue_style_color_theme() {
        let style = get_residue_style(MISMATCH_FILL, CellMarks::MISMATCH, Theme::Color);
        assert_eq!(style.bg, Some(Color::Rgb(0xFF, 0xCC, 0xCC)));
        assert_eq!(style.fg, Some(Color::Black));
        let gap = get_residue_style(Fill::Transparent, CellMarks::NONE, Theme::Color);
        assert_eq!(gap.bg, None);
    }

    #[test]
    fn test_residue_style_monochrome_and_selection() {
        let style = get_residue_style(
            MISMATCH_FILL,
            CellMarks::MISMATCH | CellMarks::SELECTED,
            Theme::Monochrome,
        );
        assert_eq!(style.bg, Some(Color::Reset));
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }
}
