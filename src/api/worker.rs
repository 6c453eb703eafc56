use super::client::ApiClient;
use super::types::HistoryEntry;
use crate::config::ServerConfig;
use crate::VoxChatError;
use base64::Engine;
use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{error, info, warn};

/// Requests the UI sends to the worker thread
#[derive(Debug, Clone)]
pub enum ApiCommand {
    Chat { text: String },
    Voice { wav: Vec<u8> },
    ClearHistory,
    FetchHistory,
    Shutdown,
}

/// Which remote call an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Chat,
    Voice,
    ClearHistory,
    FetchHistory,
}

/// Replies the worker sends back to the UI
#[derive(Debug, Clone)]
pub enum ApiEvent {
    ChatReply {
        message: String,
        audio: Option<Vec<u8>>,
    },
    VoiceReply {
        transcription: String,
        message: String,
        audio: Option<Vec<u8>>,
    },
    HistoryCleared,
    History {
        entries: Vec<HistoryEntry>,
    },
    Error {
        operation: Operation,
        error: VoxChatError,
    },
}

/// Channel endpoints the UI keeps after spawning the worker
pub struct ApiHandle {
    pub command_tx: Sender<ApiCommand>,
    pub event_rx: Receiver<ApiEvent>,
}

/// Spawn the background worker that performs all remote calls.
///
/// The worker owns a current-thread tokio runtime and processes commands
/// one at a time; request ordering follows command ordering. It exits when
/// it receives `Shutdown` or when either channel side is dropped.
pub fn spawn_worker(config: ServerConfig) -> crate::Result<ApiHandle> {
    let (command_tx, command_rx) = unbounded::<ApiCommand>();
    let (event_tx, event_rx) = unbounded::<ApiEvent>();

    std::thread::Builder::new()
        .name("api-worker".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    error!("Failed to build worker runtime: {}", e);
                    return;
                }
            };

            let client = ApiClient::new(config);
            info!("API worker started");

            while let Ok(command) = command_rx.recv() {
                let event = match command {
                    ApiCommand::Shutdown => break,
                    ApiCommand::Chat { text } => {
                        match runtime.block_on(client.send_chat(&text)) {
                            Ok(reply) => ApiEvent::ChatReply {
                                message: reply.message,
                                audio: decode_audio(reply.audio),
                            },
                            Err(error) => ApiEvent::Error {
                                operation: Operation::Chat,
                                error,
                            },
                        }
                    }
                    ApiCommand::Voice { wav } => {
                        match runtime.block_on(client.send_voice(wav)) {
                            Ok(reply) => ApiEvent::VoiceReply {
                                transcription: reply.transcription,
                                message: reply.message,
                                audio: decode_audio(reply.audio),
                            },
                            Err(error) => ApiEvent::Error {
                                operation: Operation::Voice,
                                error,
                            },
                        }
                    }
                    ApiCommand::ClearHistory => {
                        match runtime.block_on(client.clear_history()) {
                            Ok(()) => ApiEvent::HistoryCleared,
                            Err(error) => ApiEvent::Error {
                                operation: Operation::ClearHistory,
                                error,
                            },
                        }
                    }
                    ApiCommand::FetchHistory => {
                        match runtime.block_on(client.fetch_history()) {
                            Ok(entries) => ApiEvent::History { entries },
                            Err(error) => ApiEvent::Error {
                                operation: Operation::FetchHistory,
                                error,
                            },
                        }
                    }
                };

                if event_tx.send(event).is_err() {
                    break;
                }
            }

            info!("API worker stopped");
        })
        .map_err(|e| VoxChatError::ConfigError(format!("Failed to spawn worker: {}", e)))?;

    Ok(ApiHandle {
        command_tx,
        event_rx,
    })
}

/// Decode the server's base64 audio field into WAV bytes.
///
/// Audio is best-effort end to end; a malformed payload is logged and
/// treated as if the server sent none.
fn decode_audio(audio: Option<String>) -> Option<Vec<u8>> {
    let encoded = audio?;
    if encoded.is_empty() {
        return None;
    }

    match base64::engine::general_purpose::STANDARD.decode(encoded.as_bytes()) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!("Dropping undecodable audio payload: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_audio_roundtrip() {
        let bytes = vec![0x52, 0x49, 0x46, 0x46, 0x00];
        let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
        assert_eq!(decode_audio(Some(encoded)), Some(bytes));
    }

    #[test]
    fn test_decode_audio_absent_or_empty() {
        assert_eq!(decode_audio(None), None);
        assert_eq!(decode_audio(Some(String::new())), None);
    }

    #[test]
    fn test_decode_audio_garbage_is_dropped() {
        assert_eq!(decode_audio(Some("not base64!!!".to_string())), None);
    }
}
