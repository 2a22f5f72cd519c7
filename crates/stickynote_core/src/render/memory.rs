//! Recording view for headless callers and tests.

use super::{BoardView, NotificationKind, ViewResult};
use crate::model::note::{Note, NoteId};
use std::collections::VecDeque;

/// One rendered note node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNote {
    pub id: NoteId,
    pub text: String,
}

/// View that keeps rendered nodes in memory.
///
/// Confirmations are answered from a scripted queue; once it is empty every
/// prompt answers `default_answer`.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    nodes: Vec<RenderedNote>,
    redraws: usize,
    removed: Vec<NoteId>,
    notifications: Vec<(NotificationKind, String)>,
    prompts: Vec<String>,
    answers: VecDeque<bool>,
    default_answer: bool,
}

impl MemoryView {
    /// Creates a view that confirms every prompt.
    pub fn new() -> Self {
        Self {
            default_answer: true,
            ..Self::default()
        }
    }

    /// Creates a view that declines every prompt.
    pub fn declining() -> Self {
        Self::default()
    }

    /// Queues one answer for the next unanswered prompt.
    pub fn push_answer(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }

    pub fn nodes(&self) -> &[RenderedNote] {
        &self.nodes
    }

    /// Number of full redraws performed so far.
    pub fn redraws(&self) -> usize {
        self.redraws
    }

    pub fn removed(&self) -> &[NoteId] {
        &self.removed
    }

    pub fn notifications(&self) -> &[(NotificationKind, String)] {
        &self.notifications
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl BoardView for MemoryView {
    fn render_notes(&mut self, notes: &[Note]) -> ViewResult<()> {
        self.nodes = notes
            .iter()
            .map(|note| RenderedNote {
                id: note.id.clone(),
                text: note.text.clone(),
            })
            .collect();
        self.redraws += 1;
        Ok(())
    }

    fn remove_note(&mut self, id: &NoteId) -> ViewResult<()> {
        self.nodes.retain(|node| &node.id != id);
        self.removed.push(id.clone());
        Ok(())
    }

    fn notify(&mut self, kind: NotificationKind, message: &str) {
        self.notifications.push((kind, message.to_string()));
    }

    fn confirm(&mut self, message: &str) -> ViewResult<bool> {
        self.prompts.push(message.to_string());
        Ok(self.answers.pop_front().unwrap_or(self.default_answer))
    }
}
