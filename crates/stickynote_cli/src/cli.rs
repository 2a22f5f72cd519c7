//! Command-line surface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DB_FILE_NAME: &str = "stickynote.sqlite3";

#[derive(Debug, Parser)]
#[command(name = "stickynote", version, about = "Sticky notes kept in a local key-value file")]
pub struct Cli {
    /// SQLite file holding the key-value store.
    #[arg(long, env = "STICKYNOTE_DB_PATH", global = true)]
    pub db: Option<PathBuf>,

    /// JSON file with board settings (storage key and messages).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Key the notes blob is stored under.
    #[arg(long, env = "STICKYNOTE_STORAGE_KEY", global = true)]
    pub storage_key: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, env = "STICKYNOTE_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, env = "STICKYNOTE_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every note in display order.
    List,
    /// Append an empty note and print its id.
    Create,
    /// Replace the text of one note.
    Edit { id: String, text: String },
    /// Delete one note after confirmation.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Print a static HTML snapshot of the board.
    ExportHtml,
    /// Print core linkage check output.
    Ping,
}

impl Cli {
    /// Database path: `--db`, then `STICKYNOTE_DB_PATH`, then the temp dir.
    pub fn db_path(&self) -> PathBuf {
        match &self.db {
            Some(path) if !path.as_os_str().is_empty() => path.clone(),
            _ => std::env::temp_dir().join(DB_FILE_NAME),
        }
    }
}
