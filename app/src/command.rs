use binaural_core::Waveform;
use std::str::FromStr;

pub const USAGE: &str = "commands: left <hz> | right <hz> | \
    wave <sine|soft-sine|triangle|sawtooth|square> | start | stop | quit";

/// A single line of input on the control prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Left(f32),
    Right(f32),
    Wave(Waveform),
    Start,
    Stop,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let command = match (words.next(), words.next()) {
            (Some("left"), Some(hz)) => Self::Left(parse_freq_hz(hz)?),
            (Some("right"), Some(hz)) => Self::Right(parse_freq_hz(hz)?),
            (Some("wave"), Some(name)) => Self::Wave(name.parse()?),
            (Some("start"), None) => Self::Start,
            (Some("stop"), None) => Self::Stop,
            (Some("quit"), None) | (Some("q"), None) => Self::Quit,
            _ => return Err(USAGE.to_string()),
        };
        if words.next().is_some() {
            return Err(USAGE.to_string());
        }
        Ok(command)
    }
}

fn parse_freq_hz(s: &str) -> Result<f32, String> {
    match s.parse::<f32>() {
        Ok(hz) if hz.is_finite() => Ok(hz),
        _ => Err(format!("not a frequency: {}", s)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn frequency_commands() {
        assert_eq!("left 100".parse(), Ok(Command::Left(100.0)));
        assert_eq!("right 42.5".parse(), Ok(Command::Right(42.5)));
    }

    #[test]
    fn waveform_command() {
        assert_eq!(
            "wave square".parse(),
            Ok(Command::Wave(Waveform::Square))
        );
        assert!("wave sinusoid".parse::<Command>().is_err());
    }

    #[test]
    fn transport_commands() {
        assert_eq!("start".parse(), Ok(Command::Start));
        assert_eq!("stop".parse(), Ok(Command::Stop));
        assert_eq!("quit".parse(), Ok(Command::Quit));
        assert_eq!("q".parse(), Ok(Command::Quit));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!("  left  7  ".parse(), Ok(Command::Left(7.0)));
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!("".parse::<Command>().is_err());
        assert!("left".parse::<Command>().is_err());
        assert!("left seven".parse::<Command>().is_err());
        assert!("left nan".parse::<Command>().is_err());
        assert!("start now".parse::<Command>().is_err());
        assert!("volume 10".parse::<Command>().is_err());
    }
}
