//! Sticky-notes command-line front end.
//!
//! # Responsibility
//! - Drive the core board over a SQLite key-value file.
//! - Map each subcommand to exactly one board operation.

mod cli;
mod terminal;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::path::Path;
use stickynote_core::render::html::render_board_html;
use stickynote_core::{
    init_logging, BoardConfig, DeleteOutcome, LogConfig, LogLevel, NoteBoard, NoteId,
    SqliteKeyValueStore,
};
use terminal::{format_listing, TerminalView};

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(cli, stdin.lock(), &mut stdout.lock(), io::stderr())
}

type Board<R, E> = NoteBoard<SqliteKeyValueStore, TerminalView<R, E>>;

fn run<R: BufRead, W: Write, E: Write>(cli: Cli, input: R, out: &mut W, err: E) -> Result<()> {
    let assume_yes = matches!(cli.command, Command::Delete { yes: true, .. });
    let open = || open_board(&cli, TerminalView::new(input, err, assume_yes));

    let note_count = match &cli.command {
        Command::Ping => {
            writeln!(out, "stickynote_core ping={}", stickynote_core::ping())?;
            writeln!(out, "stickynote_core version={}", stickynote_core::core_version())?;
            return Ok(());
        }
        Command::List => {
            let board = open()?;
            let placeholder = board.config().messages.placeholder.as_str();
            write!(out, "{}", format_listing(board.view().snapshot(), placeholder))?;
            board.notes().len()
        }
        Command::Create => {
            let mut board = open()?;
            let id = board.create()?;
            writeln!(out, "{id}")?;
            board.notes().len()
        }
        Command::Edit { id, text } => {
            let id = parse_id(id)?;
            let mut board = open()?;
            if board.get(&id).is_none() {
                warn!("event=cli_edit module=cli status=no_match");
            }
            board.edit(&id, text.as_str())?;
            board.notes().len()
        }
        Command::Delete { id, .. } => {
            let id = parse_id(id)?;
            let mut board = open()?;
            match board.delete(&id)? {
                DeleteOutcome::Deleted => writeln!(out, "deleted {id}")?,
                DeleteOutcome::Declined => writeln!(out, "kept {id}")?,
            }
            board.notes().len()
        }
        Command::ExportHtml => {
            let board = open()?;
            let html = render_board_html(board.notes(), &board.config().messages);
            writeln!(out, "{html}")?;
            board.notes().len()
        }
    };

    info!("event=cli_command module=cli status=ok note_count={note_count}");
    Ok(())
}

fn open_board<R: BufRead, E: Write>(cli: &Cli, view: TerminalView<R, E>) -> Result<Board<R, E>> {
    let config = resolve_config(cli)?;
    let db_path = cli.db_path();
    let store = SqliteKeyValueStore::open(&db_path)
        .with_context(|| format!("failed to open store `{}`", db_path.display()))?;
    NoteBoard::load(config, store, view).context("failed to load board")
}

fn setup_logging(cli: &Cli) -> Result<()> {
    let Some(log_dir) = cli.log_dir.as_ref() else {
        return Ok(());
    };
    let level = match cli.log_level.as_deref() {
        Some(raw) => LogLevel::parse(raw)?,
        None => LogLevel::build_default(),
    };
    let mut config = LogConfig::new(level, log_dir.clone());
    config.mirror_to_stderr = true;
    init_logging(&config)?;
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<BoardConfig> {
    let config = match cli.config.as_deref() {
        Some(path) => load_config_file(path)?,
        None => BoardConfig::from_env(),
    };
    Ok(match cli.storage_key.as_deref() {
        Some(key) => config.with_storage_key(key),
        None => config,
    })
}

fn load_config_file(path: &Path) -> Result<BoardConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config `{}`", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid config `{}`", path.display()))
}

fn parse_id(raw: &str) -> Result<NoteId> {
    match NoteId::parse(raw) {
        Some(id) => Ok(id),
        None => bail!("note id cannot be empty"),
    }
}
