use binaural_core::{Stereo, ToneBuffer};
use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    BufferSize, Device, OutputCallbackInfo, Stream, StreamConfig,
    SupportedBufferSize,
};
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// default: 0.01
    pub target_latency_s: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_latency_s: 0.01,
        }
    }
}

/// State shared with the audio callback. The callback reads the installed
/// buffer and advances the cursor; the control side replaces the buffer and
/// flips the playing flag.
struct LoopState {
    buffer: ToneBuffer,
    cursor: usize,
    playing: bool,
}

/// Fill an interleaved output slice by looping `channels` (left into output
/// channel 0, right into every remaining channel) starting at frame
/// `cursor`. Returns the cursor position after the last frame written.
fn fill_output(
    channels: Stereo<&[f32], &[f32]>,
    mut cursor: usize,
    num_channels: usize,
    out: &mut [f32],
) -> usize {
    if channels.left.is_empty() {
        out.fill(0.0);
        return 0;
    }
    for frame in out.chunks_mut(num_channels) {
        if cursor >= channels.left.len() {
            cursor = 0;
        }
        frame[0] = channels.left[cursor];
        for sample in frame[1..].iter_mut() {
            *sample = channels.right[cursor];
        }
        cursor += 1;
    }
    cursor % channels.left.len()
}

/// Plays a stereo tone buffer in a loop on the default output device. The
/// stream runs for the lifetime of the `Player`; when no buffer is
/// installed, or playback is stopped, it emits silence.
pub struct Player {
    state: Arc<RwLock<LoopState>>,
    sample_rate_hz: f32,
    // Dropping the stream stops playback.
    _stream: Stream,
}

impl Player {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> anyhow::Result<Self> {
        let host = cpal::default_host();
        log::info!("cpal host: {}", host.id().name());
        let device = host
            .default_output_device()
            .ok_or(anyhow::anyhow!("no output device"))?;
        if let Ok(name) = device.name() {
            log::info!("cpal device: {}", name);
        } else {
            log::info!("cpal device: (no name)");
        }
        let stream_config = choose_config(&device, config)?;
        log::info!("sample rate: {}", stream_config.sample_rate.0);
        log::info!("num channels: {}", stream_config.channels);
        log::info!("buffer size: {:?}", stream_config.buffer_size);
        let state = Arc::new(RwLock::new(LoopState {
            buffer: ToneBuffer::default(),
            cursor: 0,
            playing: false,
        }));
        let stream = device.build_output_stream(
            &stream_config,
            {
                let state = Arc::clone(&state);
                let num_channels = stream_config.channels as usize;
                move |out: &mut [f32], _: &OutputCallbackInfo| {
                    let mut state =
                        state.write().expect("control thread has panicked");
                    if state.playing {
                        let LoopState { buffer, cursor, .. } = &mut *state;
                        *cursor = fill_output(
                            buffer.channels(),
                            *cursor,
                            num_channels,
                            out,
                        );
                    } else {
                        out.fill(0.0);
                    }
                }
            },
            |err| log::error!("stream error: {}", err),
            None,
        )?;
        stream.play()?;
        Ok(Self {
            state,
            sample_rate_hz: stream_config.sample_rate.0 as f32,
            _stream: stream,
        })
    }

    /// The output stream's sample rate. Buffers should be generated at this
    /// rate or they will play at the wrong pitch.
    pub fn sample_rate_hz(&self) -> f32 {
        self.sample_rate_hz
    }

    /// Replace the looping buffer: stop playback of the current buffer,
    /// install the new one from its first frame, and resume.
    pub fn set_tone(&self, buffer: ToneBuffer) {
        let mut state = self.state.write().unwrap();
        state.buffer = buffer;
        state.cursor = 0;
        state.playing = true;
    }

    pub fn play(&self) {
        self.state.write().unwrap().playing = true;
    }

    /// Pause playback, keeping the installed buffer.
    pub fn stop(&self) {
        self.state.write().unwrap().playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.state.read().unwrap().playing
    }
}

fn choose_config(
    device: &Device,
    config: Config,
) -> anyhow::Result<StreamConfig> {
    let default_config = device.default_output_config()?;
    let sample_rate = default_config.sample_rate();
    let channels = 2;
    let ideal_buffer_size =
        (sample_rate.0 as f32 * config.target_latency_s) as u32 * channels;
    // Round down to a multiple of 4. It's not clear why this is necessary but alsa complains
    // if the buffer size is not evenly divisible by 4.
    let ideal_buffer_size = ideal_buffer_size & (!3);
    let buffer_size = match default_config.buffer_size() {
        SupportedBufferSize::Range { min, max } => {
            let frame_count = if ideal_buffer_size < *min {
                *min
            } else if ideal_buffer_size > *max {
                *max
            } else {
                ideal_buffer_size
            };
            BufferSize::Fixed(frame_count)
        }
        SupportedBufferSize::Unknown => BufferSize::Default,
    };
    Ok(StreamConfig {
        channels: channels as u16,
        sample_rate,
        buffer_size,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use binaural_core::{ToneParams, Waveform};

    #[test]
    fn fill_wraps_around_the_loop_point() {
        let left = [1.0, 2.0, 3.0];
        let right = [-1.0, -2.0, -3.0];
        let mut out = [0.0; 10];
        let cursor =
            fill_output(Stereo::new(&left[..], &right[..]), 2, 2, &mut out);
        assert_eq!(
            out,
            [3.0, -3.0, 1.0, -1.0, 2.0, -2.0, 3.0, -3.0, 1.0, -1.0]
        );
        assert_eq!(cursor, 1);
    }

    #[test]
    fn fill_with_empty_buffer_is_silent() {
        let mut out = [1.0; 8];
        let cursor = fill_output(Stereo::new(&[][..], &[][..]), 0, 2, &mut out);
        assert_eq!(out, [0.0; 8]);
        assert_eq!(cursor, 0);
    }

    #[test]
    fn extra_channels_duplicate_the_right_channel() {
        let left = [0.5];
        let right = [-0.5];
        let mut out = [0.0; 8];
        fill_output(Stereo::new(&left[..], &right[..]), 0, 4, &mut out);
        assert_eq!(out, [0.5, -0.5, -0.5, -0.5, 0.5, -0.5, -0.5, -0.5]);
    }

    #[test]
    fn generated_buffer_loops_seamlessly_for_the_slower_channel() {
        let params = ToneParams {
            left_freq_hz: 100.0,
            right_freq_hz: 110.0,
            sample_rate_hz: 44100.0,
            waveform: Waveform::Sine,
        };
        let buffer = params.generate().unwrap();
        let channels = buffer.channels();
        let mut first_pass = vec![0.0; buffer.len() * 2];
        let mut second_pass = vec![0.0; buffer.len() * 2];
        let cursor = fill_output(channels, 0, 2, &mut first_pass);
        assert_eq!(cursor, 0);
        fill_output(channels, cursor, 2, &mut second_pass);
        assert_eq!(first_pass, second_pass);
    }
}
