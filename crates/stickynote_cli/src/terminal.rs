//! Terminal view for the CLI.
//!
//! Keeps the last full redraw so the command can print it once at the end.

use log::warn;
use std::io::{BufRead, Write};
use stickynote_core::{BoardView, Note, NoteId, NotificationKind, ViewError, ViewResult};

pub struct TerminalView<R, E> {
    input: R,
    err: E,
    assume_yes: bool,
    snapshot: Vec<Note>,
}

impl<R: BufRead, E: Write> TerminalView<R, E> {
    pub fn new(input: R, err: E, assume_yes: bool) -> Self {
        Self {
            input,
            err,
            assume_yes,
            snapshot: Vec::new(),
        }
    }

    /// Notes as of the last redraw or removal.
    pub fn snapshot(&self) -> &[Note] {
        &self.snapshot
    }

    #[cfg(test)]
    pub fn into_err(self) -> E {
        self.err
    }
}

impl<R: BufRead, E: Write> BoardView for TerminalView<R, E> {
    fn render_notes(&mut self, notes: &[Note]) -> ViewResult<()> {
        self.snapshot = notes.to_vec();
        Ok(())
    }

    fn remove_note(&mut self, id: &NoteId) -> ViewResult<()> {
        self.snapshot.retain(|note| &note.id != id);
        Ok(())
    }

    fn notify(&mut self, kind: NotificationKind, message: &str) {
        if let Err(err) = writeln!(self.err, "{}: {message}", kind.as_str()) {
            warn!("event=notify module=cli status=error error={err}");
        }
    }

    /// End of input answers "no"; read/write failures are errors.
    fn confirm(&mut self, message: &str) -> ViewResult<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        write!(self.err, "{message} [y/N] ")
            .and_then(|()| self.err.flush())
            .map_err(io_error)?;

        let mut answer = String::new();
        self.input.read_line(&mut answer).map_err(io_error)?;
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

fn io_error(err: std::io::Error) -> ViewError {
    ViewError(format!("terminal i/o failed: {err}"))
}

/// Formats notes as a numbered listing.
pub fn format_listing(notes: &[Note], placeholder: &str) -> String {
    let mut out = String::new();
    for (index, note) in notes.iter().enumerate() {
        let first_line = note.text.lines().next().unwrap_or("");
        let shown = if first_line.is_empty() {
            format!("({placeholder})")
        } else {
            first_line.to_string()
        };
        out.push_str(&format!("{:>3}. {}  {}\n", index + 1, note.id, shown));
    }
    out
}
