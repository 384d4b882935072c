// Sine synthesis for tone sequences

use std::f32::consts::TAU;
use std::time::Duration;

use super::player::{Element, ToneSeq, TONE_HZ};

const AMPLITUDE: f32 = 0.8;

/// Streaming mono sample source over a tone sequence.
///
/// Tones are a fixed-pitch sine; silence yields zeros. The phase
/// accumulator carries across elements, and since every duration holds
/// a whole number of cycles at 800 Hz each tone starts and ends at a
/// zero crossing. The stream is the same no matter how the caller
/// chunks its reads.
pub struct SampleIter<'a> {
    elements: std::slice::Iter<'a, Element>,
    sample_rate: u32,
    step: f32,
    phase: f32,
    remaining: usize,
    tone: bool,
}

/// Lazily render a tone sequence as mono f32 samples.
pub fn samples(seq: &ToneSeq, sample_rate: u32) -> SampleIter<'_> {
    SampleIter {
        elements: seq.iter(),
        sample_rate,
        step: TAU * TONE_HZ / sample_rate as f32,
        phase: 0.0,
        remaining: 0,
        tone: false,
    }
}

/// Render a whole tone sequence into memory at once.
pub fn render(seq: &ToneSeq, sample_rate: u32) -> Vec<f32> {
    samples(seq, sample_rate).collect()
}

fn sample_count(duration: Duration, sample_rate: u32) -> usize {
    (duration.as_secs_f32() * sample_rate as f32).round() as usize
}

impl Iterator for SampleIter<'_> {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        while self.remaining == 0 {
            let element = self.elements.next()?;
            self.remaining = sample_count(element.duration(), self.sample_rate);
            self.tone = matches!(element, Element::Tone(_));
        }
        self.remaining -= 1;

        if self.tone {
            let sample = self.phase.sin() * AMPLITUDE;
            self.phase += self.step;
            if self.phase >= TAU {
                self.phase -= TAU;
            }
            Some(sample)
        } else {
            Some(0.0)
        }
    }
}
