//! Chat panel controller.
//!
//! Submitting appends the user's message and a "Thinking..." placeholder to an
//! append-only transcript, then asks the host to send the message. When the
//! request settles the placeholder is overwritten with the reply or an error.
//! Submissions are not serialized; each one owns its placeholder.

pub mod client;

use crate::error::ChatError;
use tracing::{debug, info, warn};

pub const PENDING_TEXT: &str = "Thinking...";
pub const ERROR_PREFIX: &str = "Sorry, an error occurred: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub id: EntryId,
    pub text: String,
    pub sender: Sender,
    pub is_pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEffect {
    /// POST `message` for the panel's document; resolve `entry` with the result.
    Send { entry: EntryId, message: String },
    /// Scroll the transcript so the newest entry is visible.
    ScrollToEnd,
}

#[derive(Debug, Clone)]
pub struct ChatPanel {
    document_id: String,
    input: String,
    entries: Vec<ChatEntry>,
    next_id: u64,
}

impl ChatPanel {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            input: String::new(),
            entries: Vec::new(),
            next_id: 0,
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: String) {
        self.input = value;
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn pending_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_pending).count()
    }

    /// Submit the current input. Whitespace-only input does nothing.
    pub fn submit(&mut self) -> Vec<ChatEffect> {
        let message = self.input.trim().to_string();
        if message.is_empty() {
            debug!("{}", ChatError::EmptyInput);
            return Vec::new();
        }

        let mut effects = Vec::with_capacity(4);
        self.append(message.clone(), Sender::User, false);
        effects.push(ChatEffect::ScrollToEnd);
        self.input.clear();

        let entry = self.append(PENDING_TEXT.to_string(), Sender::Bot, true);
        effects.push(ChatEffect::ScrollToEnd);

        info!(
            document_id = %self.document_id,
            chars = message.len(),
            "Submitting chat message"
        );
        effects.push(ChatEffect::Send { entry, message });
        effects
    }

    /// Overwrite the placeholder `entry` with the outcome of its request.
    /// Returns false when the entry is unknown or was already resolved.
    pub fn resolve(&mut self, entry: EntryId, result: Result<String, ChatError>) -> bool {
        let Some(target) = self
            .entries
            .iter_mut()
            .find(|candidate| candidate.id == entry && candidate.is_pending)
        else {
            warn!(?entry, "No pending chat entry to resolve");
            return false;
        };

        target.text = match result {
            Ok(reply) => reply,
            Err(err) => {
                warn!(document_id = %self.document_id, "Chat error: {err}");
                format!("{ERROR_PREFIX}{err}")
            }
        };
        target.is_pending = false;
        true
    }

    fn append(&mut self, text: String, sender: Sender, is_pending: bool) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(ChatEntry {
            id,
            text,
            sender,
            is_pending,
        });
        id
    }
}
