mod command;
mod controller;

use binaural_core::{ToneParams, Waveform};
use clap::Parser;
use command::Command;
use controller::Controller;
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "binaural")]
#[command(
    about = "Play a different tone in each ear, with a live control prompt"
)]
struct Args {
    /// Left ear frequency in Hz (0 silences the channel)
    #[arg(long, default_value_t = 100.0)]
    left: f32,
    /// Right ear frequency in Hz (0 silences the channel)
    #[arg(long, default_value_t = 110.0)]
    right: f32,
    /// Waveform shape: sine, soft-sine, triangle, sawtooth or square
    #[arg(long, default_value_t = Waveform::SoftSine)]
    wave: Waveform,
    /// Preferred sample rate in Hz; the device rate wins if they differ
    #[arg(long, default_value_t = 44100.0)]
    sample_rate: f32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut controller = Controller::new(ToneParams {
        left_freq_hz: controller::snap_freq_hz(args.left),
        right_freq_hz: controller::snap_freq_hz(args.right),
        sample_rate_hz: args.sample_rate,
        waveform: args.wave,
    })?;
    println!("{}", command::USAGE);
    println!("{}", controller);
    let mut lines = io::stdin().lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => {
                controller.apply(command)?;
                println!("{}", controller);
            }
            Err(message) => println!("{}", message),
        }
    }
    controller.stop();
    Ok(())
}
