use super::types::{
    ChatRequest, ChatResponse, ClearResponse, ErrorResponse, HistoryEntry, HistoryResponse,
    VoiceResponse,
};
use crate::config::ServerConfig;
use crate::{Result, VoxChatError};
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use tracing::{debug, info};

/// HTTP client wrapping the chat server's endpoints.
///
/// Calls never retry; every failure maps to a `NetworkError` (the request
/// did not complete) or a `ServerError` (the server answered non-2xx).
pub struct ApiClient {
    http: reqwest::Client,
    config: ServerConfig,
}

impl ApiClient {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Send a text message and return the assistant's reply
    pub async fn send_chat(&self, message: &str) -> Result<ChatResponse> {
        debug!("POST /chat ({} chars)", message.len());

        let response = self
            .http
            .post(self.config.endpoint("/chat"))
            .json(&ChatRequest {
                message: message.to_string(),
            })
            .send()
            .await
            .map_err(|e| VoxChatError::NetworkError(e.to_string()))?;

        Self::parse_json(response).await
    }

    /// Upload a recorded WAV payload and return the transcription plus reply
    pub async fn send_voice(&self, wav: Vec<u8>) -> Result<VoiceResponse> {
        info!("POST /voice ({} bytes)", wav.len());

        let part = Part::bytes(wav)
            .file_name("recording.wav")
            .mime_str("audio/wav")
            .map_err(|e| VoxChatError::AudioProcessingError(e.to_string()))?;
        let form = Form::new().part("audio", part);

        let response = self
            .http
            .post(self.config.endpoint("/voice"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| VoxChatError::NetworkError(e.to_string()))?;

        Self::parse_json(response).await
    }

    /// Ask the server to drop its conversation history
    pub async fn clear_history(&self) -> Result<()> {
        debug!("POST /clear");

        let response = self
            .http
            .post(self.config.endpoint("/clear"))
            .send()
            .await
            .map_err(|e| VoxChatError::NetworkError(e.to_string()))?;

        let _: ClearResponse = Self::parse_json(response).await?;
        Ok(())
    }

    /// Fetch the server-side conversation history
    pub async fn fetch_history(&self) -> Result<Vec<HistoryEntry>> {
        debug!("GET /history");

        let response = self
            .http
            .get(self.config.endpoint("/history"))
            .send()
            .await
            .map_err(|e| VoxChatError::NetworkError(e.to_string()))?;

        let history: HistoryResponse = Self::parse_json(response).await?;
        Ok(history.history)
    }

    /// Turn a response into the expected JSON body, or a `ServerError`
    /// carrying the server's own error text when the status is non-2xx.
    async fn parse_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string(),
            };
            return Err(VoxChatError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| VoxChatError::NetworkError(format!("Malformed response: {}", e)))
    }
}
