use binaural_core::{ToneParams, Waveform};
use binaural_player::Player;
use std::{thread, time::Duration};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let player = Player::new()?;
    let params = ToneParams {
        left_freq_hz: 100.0,
        right_freq_hz: 110.0,
        sample_rate_hz: player.sample_rate_hz(),
        waveform: Waveform::SoftSine,
    };
    player.set_tone(params.generate()?);
    thread::sleep(Duration::from_secs(10));
    Ok(())
}
