use serde::{Deserialize, Serialize};

/// Body of `POST /chat`
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply from `POST /chat`
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    /// Base64-encoded WAV of the spoken reply, when the server produced one
    #[serde(default)]
    pub audio: Option<String>,
}

/// Reply from `POST /voice`
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceResponse {
    pub transcription: String,
    pub message: String,
    #[serde(default)]
    pub audio: Option<String>,
}

/// Reply from `POST /clear`
#[derive(Debug, Clone, Deserialize)]
pub struct ClearResponse {
    #[serde(default)]
    pub success: bool,
}

/// One entry of the server-side conversation history
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryEntry {
    pub role: String,
    pub content: String,
}

/// Reply from `GET /history`
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// Error body the server attaches to non-2xx replies
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
