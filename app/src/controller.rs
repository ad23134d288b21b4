use crate::command::Command;
use binaural_core::ToneParams;
use binaural_player::Player;
use std::fmt::Display;

/// The control surface offers whole Hz from 0 to 200 per channel.
pub const MIN_FREQ_HZ: f32 = 0.0;
pub const MAX_FREQ_HZ: f32 = 200.0;

/// Snap a requested frequency onto the control scale.
pub fn snap_freq_hz(freq_hz: f32) -> f32 {
    freq_hz.round().clamp(MIN_FREQ_HZ, MAX_FREQ_HZ)
}

/// Owns the current tone parameters and the player. Every parameter change
/// regenerates the tone buffer from scratch and installs it, restarting the
/// loop from its first frame.
pub struct Controller {
    params: ToneParams,
    player: Player,
}

impl Controller {
    pub fn new(mut params: ToneParams) -> anyhow::Result<Self> {
        let player = Player::new()?;
        let device_rate_hz = player.sample_rate_hz();
        if params.sample_rate_hz != device_rate_hz {
            log::info!(
                "generating at the device rate of {}Hz rather than the \
                 requested {}Hz",
                device_rate_hz,
                params.sample_rate_hz
            );
            params.sample_rate_hz = device_rate_hz;
        }
        let controller = Self { params, player };
        controller.retone()?;
        Ok(controller)
    }

    pub fn apply(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Left(freq_hz) => {
                self.params.left_freq_hz = snap_freq_hz(freq_hz);
                self.retone()?;
            }
            Command::Right(freq_hz) => {
                self.params.right_freq_hz = snap_freq_hz(freq_hz);
                self.retone()?;
            }
            Command::Wave(waveform) => {
                self.params.waveform = waveform;
                self.retone()?;
            }
            Command::Start => self.player.play(),
            Command::Stop | Command::Quit => self.player.stop(),
        }
        Ok(())
    }

    pub fn stop(&self) {
        self.player.stop();
    }

    fn retone(&self) -> anyhow::Result<()> {
        self.player.set_tone(self.params.generate()?);
        Ok(())
    }
}

impl Display for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "left {}Hz | right {}Hz | {} | {}",
            self.params.left_freq_hz,
            self.params.right_freq_hz,
            self.params.waveform,
            if self.player.is_playing() {
                "playing"
            } else {
                "stopped"
            }
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn frequencies_snap_to_whole_hz_within_range() {
        assert_eq!(snap_freq_hz(99.6), 100.0);
        assert_eq!(snap_freq_hz(0.2), 0.0);
        assert_eq!(snap_freq_hz(-5.0), 0.0);
        assert_eq!(snap_freq_hz(1000.0), 200.0);
        assert_eq!(snap_freq_hz(200.0), 200.0);
    }
}
