use crate::{Result, VoxChatError};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Stream, StreamConfig};
use crossbeam_channel::{unbounded, Receiver};
use tracing::{debug, error, info};

/// One microphone capture, from device acquisition to a finished WAV payload.
///
/// A session owns the input stream exclusively; dropping the session (or
/// calling `finish`) releases the device. Chunks arrive from the cpal
/// callback over an unbounded channel so none are dropped, and are kept in
/// arrival order.
pub struct RecordingSession {
    stream: Option<Stream>,
    sample_rate: u32,
    chunk_rx: Receiver<Vec<f32>>,
    chunks: Vec<Vec<f32>>,
}

impl RecordingSession {
    /// Acquire the default input device and start capturing
    pub fn start() -> Result<Self> {
        let host = cpal::default_host();

        let device = host
            .default_input_device()
            .ok_or_else(|| VoxChatError::AudioDeviceError("No input device available".into()))?;

        info!(
            "Recording from input device: {}",
            device.name().unwrap_or_else(|_| "Unknown".to_string())
        );

        let config: StreamConfig = device
            .default_input_config()
            .map_err(|e| {
                VoxChatError::AudioDeviceError(format!("Failed to get input config: {}", e))
            })?
            .into();

        let channels = config.channels as usize;
        let sample_rate = config.sample_rate.0;
        let (chunk_tx, chunk_rx) = unbounded::<Vec<f32>>();

        let err_fn = |err| {
            error!("Audio input stream error: {}", err);
        };

        let stream = device
            .build_input_stream(
                &config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    // Average all channels down to mono
                    let samples = if channels == 1 {
                        data.to_vec()
                    } else {
                        data.chunks(channels)
                            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
                            .collect()
                    };

                    if chunk_tx.send(samples).is_err() {
                        debug!("Chunk receiver gone, discarding audio");
                    }
                },
                err_fn,
                None,
            )
            .map_err(|e| {
                VoxChatError::AudioDeviceError(format!("Failed to build input stream: {}", e))
            })?;

        stream.play().map_err(|e| {
            VoxChatError::AudioDeviceError(format!("Failed to start input stream: {}", e))
        })?;

        Ok(Self {
            stream: Some(stream),
            sample_rate,
            chunk_rx,
            chunks: Vec::new(),
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Move any pending chunks from the capture callback into the ordered buffer
    pub fn drain_chunks(&mut self) {
        while let Ok(chunk) = self.chunk_rx.try_recv() {
            self.chunks.push(chunk);
        }
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Stop capturing and assemble the WAV payload.
    ///
    /// The stream is dropped before anything else happens, so the device is
    /// released even when encoding fails.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        self.release_stream();
        self.drain_chunks();

        let total: usize = self.chunks.iter().map(|c| c.len()).sum();
        let mut samples = Vec::with_capacity(total);
        for chunk in &self.chunks {
            samples.extend_from_slice(chunk);
        }

        info!(
            "Recording finished: {} chunks, {} samples at {} Hz",
            self.chunks.len(),
            samples.len(),
            self.sample_rate
        );

        super::encode_wav(&samples, self.sample_rate)
    }

    fn release_stream(&mut self) {
        if let Some(stream) = self.stream.take() {
            drop(stream);
            info!("Input device released");
        }
    }
}

impl Drop for RecordingSession {
    fn drop(&mut self) {
        // Covers abandonment without finish()
        self.release_stream();
    }
}
