use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
}

/// A single transcript entry. Immutable once created; the text is rendered
/// verbatim as plain text, never interpreted as markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub text: String,
    /// Decoded WAV bytes of the spoken response, if the server provided any
    pub audio: Option<Vec<u8>>,
    /// True when the text is a server-side transcription of a voice recording
    pub is_transcription: bool,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            audio: None,
            is_transcription: false,
            timestamp: Utc::now(),
        }
    }

    pub fn with_audio(mut self, audio: Option<Vec<u8>>) -> Self {
        self.audio = audio;
        self
    }

    pub fn as_transcription(mut self) -> Self {
        self.is_transcription = true;
        self
    }

    pub fn has_audio(&self) -> bool {
        self.audio.as_ref().is_some_and(|a| !a.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_defaults() {
        let msg = Message::new(Role::User, "hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.text, "hello");
        assert!(!msg.is_transcription);
        assert!(!msg.has_audio());
    }

    #[test]
    fn test_transcription_flag() {
        let msg = Message::new(Role::User, "hi").as_transcription();
        assert!(msg.is_transcription);
    }

    #[test]
    fn test_empty_audio_counts_as_none() {
        let msg = Message::new(Role::Assistant, "hi").with_audio(Some(Vec::new()));
        assert!(!msg.has_audio());
    }
}
