use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use hellwave_core::{HellModemError, Result, DEFAULT_SAMPLE_RATE};
use log::{info, warn};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{sync_channel, Receiver, RecvTimeoutError, TrySendError};
use std::sync::Arc;
use std::time::Duration;

fn device_err(e: impl std::fmt::Display) -> HellModemError {
    HellModemError::Device(e.to_string())
}

/// Rate to retry at when the device rejects the requested one, or `None`
/// when the request already was the stock rate.
pub fn fallback_rate(requested: u32) -> Option<u32> {
    (requested != DEFAULT_SAMPLE_RATE).then_some(DEFAULT_SAMPLE_RATE)
}

fn mono_config(sample_rate: u32) -> cpal::StreamConfig {
    cpal::StreamConfig {
        channels: 1,
        sample_rate: cpal::SampleRate(sample_rate),
        buffer_size: cpal::BufferSize::Default,
    }
}

/// Play a sample buffer on the default output device, blocking until the
/// whole buffer has been handed to the audio callback.
pub fn play(samples: Arc<[f32]>, sample_rate: u32) -> Result<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| HellModemError::Device("no default output device".into()))?;
    info!(
        "playing {} samples on {}",
        samples.len(),
        device.name().unwrap_or_else(|_| "<unnamed>".into())
    );

    let position = Arc::new(AtomicUsize::new(0));
    let (done_tx, done_rx) = sync_channel::<()>(1);
    let cb_samples = Arc::clone(&samples);
    let cb_position = Arc::clone(&position);

    let stream = device
        .build_output_stream(
            &mono_config(sample_rate),
            move |out: &mut [f32], _| {
                let mut pos = cb_position.load(Ordering::Relaxed);
                for slot in out.iter_mut() {
                    *slot = cb_samples.get(pos).copied().unwrap_or(0.0);
                    pos += 1;
                }
                cb_position.store(pos, Ordering::Relaxed);
                if pos >= cb_samples.len() {
                    let _ = done_tx.try_send(());
                }
            },
            |e| warn!("output stream error: {}", e),
            None,
        )
        .map_err(device_err)?;
    stream.play().map_err(device_err)?;

    let duration = Duration::from_secs_f64(samples.len() as f64 / sample_rate as f64);
    done_rx
        .recv_timeout(duration + Duration::from_secs(5))
        .map_err(|_| HellModemError::Device("playback did not complete".into()))?;
    // Give the device buffer time to drain the tail.
    std::thread::sleep(Duration::from_millis(250));
    Ok(())
}

/// A live capture session on the default input device. Audio-thread chunks
/// cross to the caller over a bounded channel; if the caller falls behind,
/// chunks are dropped with a warning rather than blocking the callback.
pub struct Capture {
    _stream: cpal::Stream,
    chunks: Receiver<Vec<f32>>,
    sample_rate: u32,
}

impl Capture {
    /// Open the default input device at `sample_rate`. A device that rejects
    /// the rate gets one retry at the stock rate; `sample_rate()` reports
    /// which rate is actually in effect so the decoder can follow it.
    pub fn open(sample_rate: u32) -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_input_device()
            .ok_or_else(|| HellModemError::Device("no default input device".into()))?;
        info!(
            "capturing from {}",
            device.name().unwrap_or_else(|_| "<unnamed>".into())
        );

        let (stream, chunks, sample_rate) = match Self::open_stream(&device, sample_rate) {
            Ok((stream, chunks)) => (stream, chunks, sample_rate),
            Err(e) => {
                let Some(rate) = fallback_rate(sample_rate) else {
                    return Err(e);
                };
                warn!(
                    "input stream at {} Hz failed ({}), retrying at {} Hz",
                    sample_rate, e, rate
                );
                let (stream, chunks) = Self::open_stream(&device, rate)?;
                (stream, chunks, rate)
            }
        };
        Ok(Self {
            _stream: stream,
            chunks,
            sample_rate,
        })
    }

    fn open_stream(
        device: &cpal::Device,
        sample_rate: u32,
    ) -> Result<(cpal::Stream, Receiver<Vec<f32>>)> {
        let (tx, chunks) = sync_channel::<Vec<f32>>(64);
        let stream = device
            .build_input_stream(
                &mono_config(sample_rate),
                move |data: &[f32], _| match tx.try_send(data.to_vec()) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => warn!("capture backlog full, dropping chunk"),
                    Err(TrySendError::Disconnected(_)) => {}
                },
                |e| warn!("input stream error: {}", e),
                None,
            )
            .map_err(device_err)?;
        stream.play().map_err(device_err)?;
        Ok((stream, chunks))
    }

    /// Rate the open stream is running at, after any fallback.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Next chunk of captured samples, or `None` if none arrived in time.
    pub fn next_chunk(&self, timeout: Duration) -> Result<Option<Vec<f32>>> {
        match self.chunks.recv_timeout(timeout) {
            Ok(chunk) => Ok(Some(chunk)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => {
                Err(HellModemError::Device("capture stream closed".into()))
            }
        }
    }
}
