// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    io::{self, stdout, Write},
    time::{Duration, Instant},
};

use log::{debug, info, warn};

use crate::alignment::{Alignment, SeqId};
use crate::app::{form::SequenceForm, App};
use crate::clipboard::SystemClipboard;
use crate::config::{find_config, SeqPairConfig};
use crate::seq::fasta::read_fasta_file;
use crate::seq::file::first_pair;
use crate::seq::validate::validate_sequence;
use crate::ui::{
    color_map, key_handling::{handle_key_press, handle_paste}, mouse_handling::handle_mouse_event,
    render::render_ui, InputMode, UI,
};

use clap::Parser;

use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        KeyEventKind,
    },
    queue,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use ratatui::{
    prelude::{CrosstermBackend, Rect, Terminal},
    TerminalOptions, Viewport,
};

use crate::errors::SeqPairError;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Sequence 1 (the reference)
    seq1: Option<String>,

    /// Sequence 2 (compared against sequence 1)
    seq2: Option<String>,

    /// Read the two sequences from a FastA file (first two records)
    #[arg(short, long, conflicts_with_all = ["seq1", "seq2"])]
    fasta: Option<String>,

    /// Show key bindings and exit successfully
    #[arg(short = 'b', long = "show-bindings")]
    show_bindings: bool,

    /// Show the residue colors and exit successfully
    #[arg(long = "show-colors")]
    show_colors: bool,

    /// Info mode (no TUI)
    #[arg(short, long)]
    info: bool,

    /// Fixed terminal width (mostly used for testing/debugging)
    #[arg(short, long, requires = "height")]
    width: Option<u16>,

    /// Fixed terminal height ("tall" -- -h is already used)
    #[arg(short = 't', long, requires = "width")]
    height: Option<u16>,

    /// Disable color
    #[arg(short = 'C', long = "no-color")]
    no_color: bool,

    /// Poll wait time [ms]
    #[clap(long = "poll-wait-time", default_value_t = 50)]
    poll_wait_time: u64,
}

// Alternate screen, raw mode, mouse reporting and bracketed paste are on for as long as this lives,
// so that the terminal is restored on every exit path, including errors.
struct TerminalSession;

impl TerminalSession {
    fn start() -> Result<Self, SeqPairError> {
        enter_screen(&mut stdout())?;
        // From here on, Drop undoes whatever was set up.
        let session = TerminalSession;
        enable_raw_mode()?;
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!("Could not disable raw mode: {}", e);
        }
        if let Err(e) = leave_screen(&mut stdout()) {
            warn!("Could not restore terminal: {}", e);
        }
    }
}

fn enter_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
    out.flush()
}

// Reverse order of enter_screen().
fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, DisableBracketedPaste, DisableMouseCapture, LeaveAlternateScreen)?;
    out.flush()
}

fn load_config() -> (SeqPairConfig, Option<String>) {
    let Some(path) = find_config() else {
        return (SeqPairConfig::default(), None);
    };
    info!("Reading config from {}", path.display());
    match SeqPairConfig::from_file(&path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (
            SeqPairConfig::default(),
            Some(format!("Error reading {}: {}", path.display(), e)),
        ),
    }
}

fn initial_form(cli: &Cli) -> Result<SequenceForm, SeqPairError> {
    if let Some(fname) = &cli.fasta {
        let seq_file = read_fasta_file(fname)?;
        let (seq1, seq2) = first_pair(&seq_file)?;
        return Ok(SequenceForm::with_values(seq1, seq2));
    }
    Ok(SequenceForm::with_values(
        cli.seq1.as_deref().unwrap_or(""),
        cli.seq2.as_deref().unwrap_or(""),
    ))
}

// Plain-text comparison, same checks as the form.
fn output_info(form: &SequenceForm) -> Result<(), SeqPairError> {
    let seq1 = form.value(SeqId::First);
    let seq2 = form.value(SeqId::Second);
    validate_sequence(SeqId::First, &seq1)?;
    validate_sequence(SeqId::Second, &seq2)?;
    let aln = Alignment::build(&seq1, &seq2)?;
    println!("sequence1:  {}", aln.sequence1());
    println!("sequence2:  {}", aln.sequence2());
    println!("mismatches: {}", aln.mismatch_line());
    println!("nb_columns: {}", aln.len());
    println!("nb_mismatches: {}", aln.num_mismatches());
    Ok(())
}

pub fn run() -> Result<(), SeqPairError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();

    if cli.show_bindings {
        println!("{}", crate::ui::USER_GUIDE);
        return Ok(());
    }
    if cli.show_colors {
        println!("{}", color_map::describe());
        return Ok(());
    }

    let form = initial_form(&cli)?;

    if cli.info {
        info!("Running in info mode.");
        return output_info(&form);
    }

    let (config, config_err) = load_config();
    let prefilled = SeqId::ALL
        .into_iter()
        .all(|id| !form.value(id).is_empty());
    let mut app = App::new(form, &config, Box::new(SystemClipboard));

    let session = TerminalSession::start()?;

    let backend = CrosstermBackend::new(stdout());
    // Fix viewport dimensions IFF supplied (mainly for tests)
    let viewport = match (cli.width, cli.height) {
        (Some(width), Some(height)) => Viewport::Fixed(Rect::new(0, 0, width, height)),
        _ => Viewport::Fullscreen,
    };
    let mut terminal = Terminal::with_options(backend, TerminalOptions { viewport })?;
    terminal.clear()?;

    let mut app_ui = UI::new(&mut app);
    if cli.no_color || config.monochrome {
        app_ui.set_monochrome();
    }
    if prefilled && app_ui.app_mut().submit() {
        app_ui.set_input_mode(InputMode::Browse);
    }
    // After the submission, so that its summary does not hide the error.
    if let Some(msg) = config_err {
        app_ui.app_mut().error_msg(msg);
    }

    let poll_wait = Duration::from_millis(cli.poll_wait_time);
    terminal.draw(|f| render_ui(f, &mut app_ui))?;

    // main loop
    loop {
        let mut dirty = false;
        // Wait for an event (or timeout)
        if event::poll(poll_wait)? {
            match event::read()? {
                event::Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let done = handle_key_press(&mut app_ui, key);
                    if done {
                        break;
                    }
                    dirty = true;
                }
                event::Event::Mouse(mouse) => {
                    handle_mouse_event(&mut app_ui, mouse, Instant::now());
                    dirty = true;
                }
                event::Event::Paste(text) => {
                    handle_paste(&mut app_ui, &text);
                    dirty = true;
                }
                event::Event::Resize(_, _) => dirty = true,
                _ => {}
            }
        }
        // Timers run whether or not anything happened.
        if app_ui.tick(Instant::now()) {
            dirty = true;
        }
        if dirty {
            terminal.draw(|f| render_ui(f, &mut app_ui))?;
        }
    }
    debug!("Leaving main loop");

    drop(app_ui);
    drop(session);

    Ok(())
}
