use crate::{
    stereo::{Channel, Stereo},
    waveform::Waveform,
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ToneError {
    #[error("sample rate must be a positive number of Hz (got {0})")]
    InvalidSampleRate(f32),
}

/// Parameters for a single stereo tone. A frequency of 0 silences that
/// channel. Negative frequencies are not rejected; callers are expected to
/// pass non-negative values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneParams {
    pub left_freq_hz: f32,
    pub right_freq_hz: f32,
    pub sample_rate_hz: f32,
    pub waveform: Waveform,
}

impl ToneParams {
    /// The lower of the two positive channel frequencies, floored at 1Hz.
    /// This determines the buffer length: one full period of the slower
    /// tone, so that channel loops seamlessly. When both channels are
    /// silent the tone is treated as 1Hz, yielding one second of silence.
    fn effective_min_freq_hz(&self) -> f32 {
        let min = [self.left_freq_hz, self.right_freq_hz]
            .into_iter()
            .filter(|&freq_hz| freq_hz > 0.0)
            .fold(f32::INFINITY, f32::min);
        if min.is_finite() {
            min.max(1.0)
        } else {
            1.0
        }
    }

    /// Generate one period of the tone as a pair of sample buffers. The
    /// result depends only on `self`; identical parameters produce
    /// identical buffers.
    pub fn generate(&self) -> Result<ToneBuffer, ToneError> {
        if !(self.sample_rate_hz.is_finite() && self.sample_rate_hz > 0.0) {
            return Err(ToneError::InvalidSampleRate(self.sample_rate_hz));
        }
        let sample_count =
            (self.sample_rate_hz / self.effective_min_freq_hz()) as usize;
        let samples = Stereo::new(self.left_freq_hz, self.right_freq_hz).map(
            |freq_hz| self.channel_samples(freq_hz, sample_count),
            |freq_hz| self.channel_samples(freq_hz, sample_count),
        );
        Ok(ToneBuffer { samples })
    }

    fn channel_samples(&self, freq_hz: f32, sample_count: usize) -> Vec<f32> {
        if freq_hz > 0.0 {
            let freq_hz = freq_hz as f64;
            let sample_rate_hz = self.sample_rate_hz as f64;
            (0..sample_count)
                .map(|i| {
                    self.waveform
                        .sample(i as f64 * freq_hz / sample_rate_hz)
                })
                .collect()
        } else {
            vec![0.0; sample_count]
        }
    }
}

/// One period of a stereo tone: two equal-length channels of samples in
/// [-1, 1]. Never modified after generation; the player loops it as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToneBuffer {
    samples: Stereo<Vec<f32>, Vec<f32>>,
}

impl ToneBuffer {
    /// Number of frames (one sample per channel each).
    pub fn len(&self) -> usize {
        self.samples.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.left.is_empty()
    }

    pub fn channel(&self, channel: Channel) -> &[f32] {
        self.samples.get(channel)
    }

    pub fn channels(&self) -> Stereo<&[f32], &[f32]> {
        self.samples.map_ref(|left| left.as_slice(), |right| right.as_slice())
    }

    /// Iterate over (left, right) sample pairs.
    pub fn frames(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.samples
            .left
            .iter()
            .copied()
            .zip(self.samples.right.iter().copied())
    }
}
