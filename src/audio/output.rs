// Audio output using cpal
// Streams synthesized samples to the default device through a ring buffer

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Stream, StreamConfig};
use parking_lot::Mutex;
use ringbuf::{HeapRb, traits::{Consumer, Observer, Producer, Split}};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::player::ToneSeq;
use super::{tone, AudioError, AudioSink};

const RING_BUFFER_SIZE: usize = 48000 * 2 / 4; // ~250ms of stereo audio at 48kHz

// Mono frames rendered per handoff to the ring buffer
const CHUNK_FRAMES: usize = 2048;

// A buffer that stays full this long with nothing consumed means the
// stream callback died
const STALL_TIMEOUT: Duration = Duration::from_millis(500);

// Grace period on top of the queued audio's duration when draining
const DRAIN_SLACK: Duration = Duration::from_millis(250);

type RingProducer = ringbuf::HeapProd<f32>;
type RingConsumer = ringbuf::HeapCons<f32>;

pub struct CpalOutput {
    _stream: Stream,
    producer: Arc<Mutex<RingProducer>>,
    sample_rate: u32,
    channels: u16,
}

impl CpalOutput {
    /// Create a new audio output on the default device
    pub fn new() -> Result<Self, AudioError> {
        let host = cpal::default_host();

        let device = host.default_output_device().ok_or(AudioError::NoDevice)?;

        let config = device
            .default_output_config()
            .map_err(|e| AudioError::Stream(format!("failed to get default output config: {}", e)))?;

        let sample_rate = config.sample_rate().0;
        let channels = config.channels();

        // Create ring buffer for passing samples to the audio thread
        let rb = HeapRb::<f32>::new(RING_BUFFER_SIZE);
        let (producer, consumer) = rb.split();
        let producer = Arc::new(Mutex::new(producer));
        let consumer = Arc::new(Mutex::new(consumer));

        // Build the output stream based on sample format
        let stream = match config.sample_format() {
            cpal::SampleFormat::F32 => {
                Self::build_stream::<f32>(&device, &config.into(), consumer)?
            }
            cpal::SampleFormat::I16 => {
                Self::build_stream::<i16>(&device, &config.into(), consumer)?
            }
            cpal::SampleFormat::U16 => {
                Self::build_stream::<u16>(&device, &config.into(), consumer)?
            }
            format => return Err(AudioError::SampleFormat(format!("{:?}", format))),
        };

        stream
            .play()
            .map_err(|e| AudioError::Stream(format!("failed to start stream: {}", e)))?;

        Ok(Self {
            _stream: stream,
            producer,
            sample_rate,
            channels,
        })
    }

    fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
        device: &cpal::Device,
        config: &StreamConfig,
        consumer: Arc<Mutex<RingConsumer>>,
    ) -> Result<Stream, AudioError> {
        let stream = device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    let mut consumer = consumer.lock();
                    for sample in data.iter_mut() {
                        let value = consumer.try_pop().unwrap_or(0.0);
                        *sample = T::from_sample(value);
                    }
                },
                move |err| {
                    log::error!("Audio output error: {}", err);
                },
                None,
            )
            .map_err(|e| AudioError::Stream(format!("failed to build output stream: {}", e)))?;

        Ok(stream)
    }
}

/// How long the device needs to consume this many interleaved samples.
fn queued_duration(samples: usize, sample_rate: u32, channels: u16) -> Duration {
    let per_second = sample_rate as f32 * channels as f32;
    Duration::from_secs_f32(samples as f32 / per_second)
}

/// Duplicate up to `max_frames` mono frames across all output channels.
fn fill_interleaved(
    frames: &mut impl Iterator<Item = f32>,
    channels: usize,
    max_frames: usize,
    chunk: &mut Vec<f32>,
) {
    for sample in frames.take(max_frames) {
        for _ in 0..channels {
            chunk.push(sample);
        }
    }
}

/// Queue samples, blocking while the buffer is full.
///
/// Errors out instead of spinning forever when the stream stops
/// consuming, as after a device disconnect.
fn write_blocking(producer: &Mutex<RingProducer>, samples: &[f32]) -> Result<(), AudioError> {
    let mut remaining = samples;
    let mut last_progress = Instant::now();

    while !remaining.is_empty() {
        let written = producer.lock().push_slice(remaining);
        if written > 0 {
            remaining = &remaining[written..];
            last_progress = Instant::now();
        } else if last_progress.elapsed() >= STALL_TIMEOUT {
            return Err(AudioError::Stream(String::from(
                "output stream stopped consuming samples",
            )));
        } else {
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    Ok(())
}

/// Block until the stream has consumed everything queued.
///
/// The wait is capped at the queued audio's duration plus slack so a
/// dead stream cannot hang the caller.
fn drain(producer: &Mutex<RingProducer>, sample_rate: u32, channels: u16) -> Result<(), AudioError> {
    let queued = producer.lock().occupied_len();
    let deadline = Instant::now() + queued_duration(queued, sample_rate, channels) + DRAIN_SLACK;

    while producer.lock().occupied_len() > 0 {
        if Instant::now() >= deadline {
            return Err(AudioError::Stream(String::from(
                "output stream stalled before playback finished",
            )));
        }
        std::thread::sleep(Duration::from_millis(1));
    }

    Ok(())
}

impl AudioSink for CpalOutput {
    fn play_sequence(&mut self, seq: &ToneSeq) -> Result<(), AudioError> {
        let channels = self.channels as usize;
        let mut frames = tone::samples(seq, self.sample_rate);
        let mut chunk = Vec::with_capacity(CHUNK_FRAMES * channels);

        // Render incrementally so a long sequence never sits in memory
        // all at once
        loop {
            chunk.clear();
            fill_interleaved(&mut frames, channels, CHUNK_FRAMES, &mut chunk);
            if chunk.is_empty() {
                break;
            }
            write_blocking(&self.producer, &chunk)?;
        }

        drain(&self.producer, self.sample_rate, self.channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queued_duration_counts_interleaved_samples() {
        assert_eq!(queued_duration(48000, 48000, 1), Duration::from_secs(1));
        assert_eq!(queued_duration(48000, 48000, 2), Duration::from_millis(500));
        assert_eq!(queued_duration(0, 48000, 2), Duration::ZERO);
    }

    #[test]
    fn test_fill_interleaved_chunks_and_duplicates() {
        let mut frames = [0.1f32, 0.2, 0.3].into_iter();
        let mut chunk = Vec::new();

        fill_interleaved(&mut frames, 2, 2, &mut chunk);
        assert_eq!(chunk, vec![0.1, 0.1, 0.2, 0.2]);

        chunk.clear();
        fill_interleaved(&mut frames, 2, 2, &mut chunk);
        assert_eq!(chunk, vec![0.3, 0.3]);

        chunk.clear();
        fill_interleaved(&mut frames, 2, 2, &mut chunk);
        assert!(chunk.is_empty());
    }

    #[test]
    fn test_write_blocking_bails_out_when_nothing_consumes() {
        let rb = HeapRb::<f32>::new(8);
        let (producer, _consumer) = rb.split();
        let producer = Mutex::new(producer);

        let result = write_blocking(&producer, &[0.25; 32]);

        assert!(matches!(result, Err(AudioError::Stream(_))));
    }

    #[test]
    fn test_drain_bails_out_when_nothing_consumes() {
        let rb = HeapRb::<f32>::new(256);
        let (mut producer, _consumer) = rb.split();
        producer.push_slice(&[0.0; 128]);
        let producer = Mutex::new(producer);

        // 128 samples at 48kHz stereo is under 2ms of audio, so the
        // bounded wait expires quickly
        let start = Instant::now();
        let result = drain(&producer, 48000, 2);

        assert!(matches!(result, Err(AudioError::Stream(_))));
        assert!(start.elapsed() < DRAIN_SLACK + Duration::from_secs(1));
    }
}
