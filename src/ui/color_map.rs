// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use hex_color::HexColor;
use ratatui::style::Color;

// Background of a residue cell. The gap has an explicit "no fill" entry, which is not the same as
// falling back to the default for an unknown residue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fill {
    Transparent,
    Solid(HexColor),
}

impl Fill {
    pub fn to_color(self) -> Option<Color> {
        match self {
            Fill::Transparent => None,
            Fill::Solid(c) => Some(Color::Rgb(c.r, c.g, c.b)),
        }
    }
}

pub const HYDROPHOBIC: HexColor = HexColor::rgb(0x67, 0xE4, 0xA6);
pub const BASIC: HexColor = HexColor::rgb(0xBB, 0x99, 0xFF);
pub const POLAR: HexColor = HexColor::rgb(0x80, 0xBF, 0xFF);
pub const ACIDIC: HexColor = HexColor::rgb(0xFC, 0x9C, 0xAC);
pub const CYSTEINE: HexColor = HexColor::rgb(0xFF, 0xEA, 0x00);
pub const GLYCINE: HexColor = HexColor::rgb(0xC4, 0xC4, 0xC4);

pub const DEFAULT_FILL: Fill = Fill::Solid(HexColor::rgb(0xFF, 0xFF, 0xFF));
pub const MISMATCH_FILL: Fill = Fill::Solid(HexColor::rgb(0xFF, 0xCC, 0xCC));

// Residue -> fill. Uppercase only: lookups are case-sensitive, sequences are uppercased when the
// alignment is built.
pub const AMINO_ACID_COLORS: [(char, Fill); 21] = [
    ('A', Fill::Solid(HYDROPHOBIC)),
    ('R', Fill::Solid(BASIC)),
    ('N', Fill::Solid(POLAR)),
    ('D', Fill::Solid(ACIDIC)),
    ('C', Fill::Solid(CYSTEINE)),
    ('E', Fill::Solid(ACIDIC)),
    ('Q', Fill::Solid(POLAR)),
    ('G', Fill::Solid(GLYCINE)),
    ('H', Fill::Solid(POLAR)),
    ('I', Fill::Solid(HYDROPHOBIC)),
    ('L', Fill::Solid(HYDROPHOBIC)),
    ('K', Fill::Solid(BASIC)),
    ('M', Fill::Solid(HYDROPHOBIC)),
    ('F', Fill::Solid(HYDROPHOBIC)),
    ('P', Fill::Solid(HYDROPHOBIC)),
    ('S', Fill::Solid(POLAR)),
    ('T', Fill::Solid(POLAR)),
    ('W', Fill::Solid(HYDROPHOBIC)),
    ('Y', Fill::Solid(HYDROPHOBIC)),
    ('V', Fill::Solid(HYDROPHOBIC)),
    ('-', Fill::Transparent),
];

pub fn lookup(residue: char) -> Option<Fill> {
    AMINO_ACID_COLORS
        .iter()
        .find(|(r, _)| *r == residue)
        .map(|(_, fill)| *fill)
}

pub fn fill_for(residue: char) -> Fill {
    lookup(residue).unwrap_or(DEFAULT_FILL)
}

// One "<residue> <color>" line per table entry, for --show-colors.
pub fn describe() -> String {
    AMINO_ACID_COLORS
        .iter()
        .map(|(r, fill)| match fill {
            Fill::Solid(c) => format!("{} {}", r, c.display_rgb()),
            Fill::Transparent => format!("{} (no fill)", r),
        })
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_alphabet() {
        for r in "ARNDCEQGHILKMFPSTWYV-".chars() {
            assert!(lookup(r).is_some(), "no entry for {}", r);
        }
    }

    #[test]
    fn gap_is_transparent_not_default() {
        assert_eq!(fill_for('-'), Fill::Transparent);
        assert_ne!(fill_for('-'), DEFAULT_FILL);
    }

    #[test]
    fn unknown_and_lowercase_fall_back_to_white() {
        assert_eq!(fill_for('X'), DEFAULT_FILL);
        assert_eq!(fill_for('a'), DEFAULT_FILL);
    }

    #[test]
    fn fill_to_color() {
        assert_eq!(
            fill_for('C').to_color(),
            Some(Color::Rgb(0xFF, 0xEA, 0x00))
        );
        assert_eq!(fill_for('-').to_color(), None);
    }

    #[test]
    fn describe_lists_every_entry() {
        let text = describe();
        assert_eq!(text.lines().count(), 21);
        assert!(text.lines().any(|l| l == "- (no fill)"));
        assert!(text.lines().any(|l| l.eq_ignore_ascii_case("C #FFEA00")));
    }
}
