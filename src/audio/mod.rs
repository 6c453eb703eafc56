//! Audio capture and playback
//!
//! Capture produces one WAV payload per recording session; playback is
//! fire-and-forget for server-provided audio replies.

mod input;
mod playback;
mod wav;

pub use input::RecordingSession;
pub use playback::play_wav;
pub use wav::encode_wav;
