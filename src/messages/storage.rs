use super::types::Message;
use parking_lot::RwLock;
use std::sync::Arc;

/// Append-only message store backing the visual transcript.
///
/// Entries are never edited or removed individually; the only mutation
/// besides appending is a bulk `clear`. The UI renders from `snapshot`,
/// a point-in-time copy, so a frame never observes a half-applied batch.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn add(&self, message: Message) {
        self.messages.write().push(message);
    }

    /// Append a batch under one lock, preserving its internal order.
    /// Used to seed the transcript from the server-side history.
    pub fn extend(&self, batch: impl IntoIterator<Item = Message>) {
        self.messages.write().extend(batch);
    }

    /// Point-in-time copy of the transcript, oldest first
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.read().clone()
    }

    pub fn clear(&self) {
        self.messages.write().clear();
    }

    pub fn len(&self) -> usize {
        self.messages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.read().is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
