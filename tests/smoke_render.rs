// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

mod common;

use crate::common::utils;

use ratatui::{layout::Position, style::Color};

#[test]
fn renders_without_panic() {
    utils::with_rig("", "", 40, 20, |_ui, terminal, _copied| {
        let screen = utils::buffer_text(terminal.backend().buffer());
        assert!(screen.contains("Sequences"));
        assert!(!screen.contains("Alignment result"));
    });
}

#[test]
fn renders_both_rows() {
    utils::with_rig("aaaa", "AAAT", 40, 20, |ui, terminal, _copied| {
        let buf = terminal.backend().buffer();
        let screen = utils::buffer_text(buf);
        assert!(screen.contains("Alignment result"));
        assert!(screen.contains("1 mismatch(es) / 4 columns"));
        assert!(utils::screen_line(buf, 7).contains("S1 AAAA"));
        assert!(utils::screen_line(buf, 8).contains("S2 AAAT"));
        insta::assert_snapshot!(utils::pane_text(buf, ui), @r"
        AAAA
        AAAT
        ");
    });
}

#[test]
fn mismatch_cell_is_highlighted() {
    utils::with_rig("AAAA", "AAAT", 40, 20, |ui, terminal, _copied| {
        let pane = ui.seq_pane_area().expect("pane");
        let buf = terminal.backend().buffer();
        let mismatch = buf
            .cell(Position::new(pane.x + 3, pane.y + 1))
            .expect("cell");
        assert_eq!(mismatch.symbol(), "T");
        assert_eq!(mismatch.bg, Color::Rgb(0xFF, 0xCC, 0xCC));
        // Same residue, same column, but in the reference row: never a mismatch.
        let reference = buf.cell(Position::new(pane.x + 3, pane.y)).expect("cell");
        assert_eq!(reference.symbol(), "A");
        assert_ne!(reference.bg, Color::Rgb(0xFF, 0xCC, 0xCC));
    });
}

#[test]
fn monochrome_underlines_mismatches() {
    use ratatui::style::Modifier;

    utils::with_rig("AAAA", "AAAT", 40, 20, |ui, terminal, _copied| {
        ui.set_monochrome();
        utils::draw(ui, terminal);
        let pane = ui.seq_pane_area().expect("pane");
        let buf = terminal.backend().buffer();
        let mismatch = buf
            .cell(Position::new(pane.x + 3, pane.y + 1))
            .expect("cell");
        assert!(mismatch.modifier.contains(Modifier::UNDERLINED));
        let matching = buf.cell(Position::new(pane.x, pane.y + 1)).expect("cell");
        assert!(!matching.modifier.contains(Modifier::UNDERLINED));
    });
}
