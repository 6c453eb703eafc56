use std::io::Cursor;
use tracing::{debug, warn};

/// Play a WAV payload on the default output device, fire-and-forget.
///
/// Playback is best-effort: a missing output device or undecodable payload
/// is logged and swallowed, never surfaced to the user.
pub fn play_wav(bytes: Vec<u8>) {
    if bytes.is_empty() {
        return;
    }

    std::thread::Builder::new()
        .name("audio-playback".to_string())
        .spawn(move || {
            if let Err(e) = play_blocking(bytes) {
                warn!("Audio playback failed: {}", e);
            }
        })
        .map(|_| ())
        .unwrap_or_else(|e| warn!("Failed to spawn playback thread: {}", e));
}

fn play_blocking(bytes: Vec<u8>) -> anyhow::Result<()> {
    let (_stream, handle) = rodio::OutputStream::try_default()?;
    let sink = rodio::Sink::try_new(&handle)?;

    let source = rodio::Decoder::new(Cursor::new(bytes))?;
    sink.append(source);

    debug!("Playing audio reply");
    sink.sleep_until_end();
    Ok(())
}
