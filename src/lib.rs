pub mod api;
pub mod audio;
pub mod config;
pub mod messages;
pub mod ui;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum VoxChatError {
    #[error("Audio device error: {0}")]
    AudioDeviceError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("Audio processing error: {0}")]
    AudioProcessingError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl VoxChatError {
    /// Check if this error is recoverable by simply retrying the action
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Device access usually needs user intervention (permissions, hardware)
            VoxChatError::AudioDeviceError(_) => false,
            VoxChatError::NetworkError(_) => true,
            VoxChatError::ServerError { .. } => true,
            VoxChatError::AudioProcessingError(_) => true,
            VoxChatError::ConfigError(_) => false,
        }
    }

    /// Get a user-friendly description for the status line
    pub fn user_message(&self) -> String {
        match self {
            VoxChatError::AudioDeviceError(_) => {
                "Error: Could not access microphone".to_string()
            }
            VoxChatError::NetworkError(_) => {
                "Error: Could not reach the chat server".to_string()
            }
            VoxChatError::ServerError { message, .. } => {
                format!("Error: {}", message)
            }
            VoxChatError::AudioProcessingError(_) => {
                "Error: Audio processing failed".to_string()
            }
            VoxChatError::ConfigError(_) => {
                "Error: Configuration problem. Please check settings.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, VoxChatError>;
