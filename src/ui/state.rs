//! Application state management
//!
//! `AppState` is the single controller instance constructed once per
//! session; it owns the transcript, the status slot, the loading flag, and
//! the recording lifecycle, and talks to the API worker over channels.

use crate::api::{ApiCommand, ApiEvent, Operation};
use crate::audio::{play_wav, RecordingSession};
use crate::messages::{Message, Role, Transcript};
use crossbeam_channel::{Receiver, Sender};
use std::time::{Duration, Instant};
use tracing::warn;

/// How long a transient status stays visible
const STATUS_CLEAR_DELAY: Duration = Duration::from_secs(2);

/// Recording state for voice input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingState {
    /// Not recording
    Idle,
    /// Currently recording audio
    Recording,
    /// Finalizing the recorded audio before upload
    Processing,
}

/// Visual classification of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Loading,
    Error,
}

/// Single status slot, last-write-wins
#[derive(Debug, Clone)]
pub struct Status {
    pub text: String,
    pub kind: StatusKind,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            text: String::new(),
            kind: StatusKind::Info,
        }
    }
}

impl Status {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Central application state and controller
pub struct AppState {
    /// Ordered, append-only conversation transcript
    pub transcript: Transcript,

    /// Current text input
    pub input_text: String,

    /// Recording state
    pub recording_state: RecordingState,

    /// True while a chat or voice request is outstanding; disables the
    /// input surface until the request settles
    pub loading: bool,

    /// Current status line
    pub status: Status,

    /// When a transient status should clear itself
    status_clear_at: Option<Instant>,

    /// Live microphone capture, at most one at a time
    session: Option<RecordingSession>,

    /// Channel to send API commands
    pub command_tx: Option<Sender<ApiCommand>>,

    /// Channel to receive API events
    pub event_rx: Option<Receiver<ApiEvent>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            transcript: Transcript::new(),
            input_text: String::new(),
            recording_state: RecordingState::Idle,
            loading: false,
            status: Status::default(),
            status_clear_at: None,
            session: None,
            command_tx: None,
            event_rx: None,
        }
    }

    /// Wire the controller to the API worker channels
    pub fn connect(&mut self, command_tx: Sender<ApiCommand>, event_rx: Receiver<ApiEvent>) {
        self.command_tx = Some(command_tx);
        self.event_rx = Some(event_rx);
    }

    /// Seed the transcript from the server-side history
    pub fn request_history(&mut self) {
        self.send_command(ApiCommand::FetchHistory);
    }

    // ---- Status reporter ----

    /// Replace the visible status unconditionally
    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Status {
            text: text.into(),
            kind,
        };
        self.status_clear_at = None;
    }

    /// Replace the status and schedule it to clear itself
    pub fn set_transient_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.set_status(text, kind);
        self.status_clear_at = Some(Instant::now() + STATUS_CLEAR_DELAY);
    }

    pub fn clear_status(&mut self) {
        self.status = Status::default();
        self.status_clear_at = None;
    }

    /// Time left until a transient status clears itself, if one is armed.
    ///
    /// The UI uses this to schedule a wake-up; without it, an idle frame
    /// loop would leave the transient status on screen past its deadline.
    pub fn time_until_clear(&self) -> Option<Duration> {
        self.status_clear_at
            .map(|at| at.saturating_duration_since(Instant::now()))
    }

    // ---- Chat ----

    /// Send the current input text to the server.
    ///
    /// The user message is appended optimistically and is not rolled back
    /// if the request later fails.
    pub fn send_message(&mut self) {
        let text = self.input_text.trim().to_string();
        if text.is_empty() {
            return;
        }

        self.transcript.add(Message::new(Role::User, text.clone()));
        self.input_text.clear();

        self.set_loading("AI is thinking...");
        self.send_command(ApiCommand::Chat { text });
    }

    /// Ask the server to drop its history; the transcript resets when the
    /// confirmation event arrives
    pub fn clear_chat(&mut self) {
        self.send_command(ApiCommand::ClearHistory);
    }

    // ---- Recording session ----

    /// Toggle semantics: Idle starts a capture, Recording ends it, and the
    /// transient Processing step ignores further presses
    pub fn toggle_recording(&mut self) {
        match self.recording_state {
            RecordingState::Idle => self.start_recording(),
            RecordingState::Recording => self.stop_recording(),
            RecordingState::Processing => {}
        }
    }

    fn start_recording(&mut self) {
        match RecordingSession::start() {
            Ok(session) => {
                self.session = Some(session);
                self.recording_state = RecordingState::Recording;
                self.set_status("Recording... Speak now", StatusKind::Loading);
            }
            Err(e) => {
                warn!("Could not start recording: {}", e);
                self.set_status(e.user_message(), StatusKind::Error);
            }
        }
    }

    fn stop_recording(&mut self) {
        if self.recording_state != RecordingState::Recording {
            return;
        }
        self.recording_state = RecordingState::Processing;

        let Some(session) = self.session.take() else {
            self.recording_state = RecordingState::Idle;
            return;
        };

        // finish() consumes the session, so the device is released on both
        // branches before we leave Processing
        match session.finish() {
            Ok(wav) => {
                self.set_loading("Processing voice...");
                self.send_command(ApiCommand::Voice { wav });
            }
            Err(e) => {
                warn!("Could not assemble recording: {}", e);
                self.set_status(e.user_message(), StatusKind::Error);
            }
        }

        self.recording_state = RecordingState::Idle;
    }

    pub fn is_recording(&self) -> bool {
        self.recording_state == RecordingState::Recording
    }

    /// Whether the input surface (send, record, text field) accepts input
    pub fn inputs_enabled(&self) -> bool {
        !self.loading
    }

    // ---- Event loop ----

    /// Per-frame bookkeeping: expire transient statuses, collect recording
    /// chunks, and process worker events
    pub fn poll(&mut self) {
        if let Some(clear_at) = self.status_clear_at {
            if Instant::now() >= clear_at {
                self.clear_status();
            }
        }

        if let Some(session) = &mut self.session {
            session.drain_chunks();
        }

        // Collect first, then process
        let events: Vec<ApiEvent> = match &self.event_rx {
            Some(rx) => rx.try_iter().collect(),
            None => Vec::new(),
        };
        for event in events {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::ChatReply { message, audio } => {
                self.transcript
                    .add(Message::new(Role::Assistant, message).with_audio(audio.clone()));
                if let Some(bytes) = audio {
                    play_wav(bytes);
                }
                self.loading = false;
                self.clear_status();
            }
            ApiEvent::VoiceReply {
                transcription,
                message,
                audio,
            } => {
                self.transcript
                    .add(Message::new(Role::User, transcription).as_transcription());
                self.transcript
                    .add(Message::new(Role::Assistant, message).with_audio(audio.clone()));
                if let Some(bytes) = audio {
                    play_wav(bytes);
                }
                self.loading = false;
                self.clear_status();
            }
            ApiEvent::HistoryCleared => {
                self.transcript.clear();
                self.set_transient_status("Chat cleared", StatusKind::Info);
            }
            ApiEvent::History { entries } => {
                self.transcript.extend(entries.into_iter().map(|entry| {
                    let role = if entry.role == "assistant" {
                        Role::Assistant
                    } else {
                        Role::User
                    };
                    Message::new(role, entry.content)
                }));
            }
            ApiEvent::Error { operation, error } => {
                warn!("{:?} failed: {}", operation, error);
                match operation {
                    Operation::Chat | Operation::Voice => {
                        self.loading = false;
                        self.set_status(error.user_message(), StatusKind::Error);
                    }
                    Operation::ClearHistory => {
                        self.set_status("Error clearing chat", StatusKind::Error);
                    }
                    // Startup convenience only; an empty transcript is fine
                    Operation::FetchHistory => {}
                }
            }
        }
    }

    /// Replay the audio attached to a transcript message
    pub fn replay_audio(&self, message: &Message) {
        if let Some(bytes) = &message.audio {
            play_wav(bytes.clone());
        }
    }

    fn set_loading(&mut self, message: &str) {
        self.loading = true;
        self.set_status(message, StatusKind::Loading);
    }

    fn send_command(&mut self, command: ApiCommand) {
        if let Some(tx) = &self.command_tx {
            if tx.send(command).is_err() {
                warn!("API worker is gone");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.recording_state, RecordingState::Idle);
        assert!(!state.loading);
        assert!(state.status.is_empty());
        assert!(state.transcript.is_empty());
    }

    #[test]
    fn test_empty_input_is_a_noop() {
        let mut state = AppState::new();
        state.input_text = "   \n\t ".to_string();
        state.send_message();

        assert!(state.transcript.is_empty());
        assert!(!state.loading);
        assert!(state.status.is_empty());
    }

    #[test]
    fn test_send_message_is_optimistic() {
        let mut state = AppState::new();
        state.input_text = "  Hello  ".to_string();
        state.send_message();

        let all = state.transcript.snapshot();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].role, Role::User);
        assert_eq!(all[0].text, "Hello");
        assert!(state.input_text.is_empty());
        assert!(state.loading);
        assert_eq!(state.status.kind, StatusKind::Loading);
    }

    #[test]
    fn test_status_is_last_write_wins() {
        let mut state = AppState::new();
        state.set_status("first", StatusKind::Loading);
        state.set_status("second", StatusKind::Error);
        assert_eq!(state.status.text, "second");
        assert_eq!(state.status.kind, StatusKind::Error);
    }

    #[test]
    fn test_set_status_cancels_pending_transient_clear() {
        let mut state = AppState::new();
        state.set_transient_status("Chat cleared", StatusKind::Info);
        state.set_status("Error: boom", StatusKind::Error);

        // A persistent status must survive polling indefinitely
        state.poll();
        assert_eq!(state.status.text, "Error: boom");
    }

    #[test]
    fn test_transient_status_not_cleared_early() {
        let mut state = AppState::new();
        state.set_transient_status("Chat cleared", StatusKind::Info);
        state.poll();
        assert_eq!(state.status.text, "Chat cleared");
    }

    #[test]
    fn test_transient_status_arms_a_wakeup_deadline() {
        let mut state = AppState::new();
        assert!(state.time_until_clear().is_none());

        state.set_transient_status("Ready to chat!", StatusKind::Info);
        let remaining = state
            .time_until_clear()
            .expect("transient status must arm a deadline");
        assert!(remaining <= STATUS_CLEAR_DELAY);
        assert!(remaining > STATUS_CLEAR_DELAY / 2);
    }

    #[test]
    fn test_persistent_status_arms_no_deadline() {
        let mut state = AppState::new();
        state.set_status("Error: boom", StatusKind::Error);
        assert!(state.time_until_clear().is_none());

        state.set_transient_status("Chat cleared", StatusKind::Info);
        state.clear_status();
        assert!(state.time_until_clear().is_none());
    }

    #[test]
    fn test_toggle_during_processing_is_a_noop() {
        let mut state = AppState::new();
        state.recording_state = RecordingState::Processing;
        state.toggle_recording();
        assert_eq!(state.recording_state, RecordingState::Processing);
    }

    #[test]
    fn test_inputs_disabled_while_loading() {
        let mut state = AppState::new();
        assert!(state.inputs_enabled());
        state.loading = true;
        assert!(!state.inputs_enabled());
    }
}
