//! HTTP client for the remote chat server
//!
//! The server owns speech-to-text, response generation, and text-to-speech;
//! this module only moves requests and replies across the wire. Remote calls
//! run on a dedicated worker thread and talk to the UI over channels.

mod client;
mod types;
mod worker;

pub use client::ApiClient;
pub use types::{
    ChatRequest, ChatResponse, HistoryEntry, HistoryResponse, VoiceResponse,
};
pub use worker::{spawn_worker, ApiCommand, ApiEvent, ApiHandle, Operation};
