use std::{f64::consts::PI, fmt::Display, str::FromStr};

/// The shape of the periodic function used to compute a channel's samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    /// A sine wave cubed, rounding off the peaks for a mellower tone.
    SoftSine,
    Triangle,
    Sawtooth,
    Square,
}

impl Waveform {
    pub const ALL: [Self; 5] = [
        Self::Sine,
        Self::SoftSine,
        Self::Triangle,
        Self::Sawtooth,
        Self::Square,
    ];

    /// Sample the waveform at a position expressed in cycles (whole cycles
    /// elapsed plus the fraction of the current cycle). All shapes have
    /// period 1 and range [-1, 1].
    pub fn sample(self, cycles: f64) -> f32 {
        let theta = 2.0 * PI * cycles;
        let sample = match self {
            Self::Sine => theta.sin(),
            Self::SoftSine => theta.sin().powi(3),
            Self::Triangle => theta.sin().asin() * 2.0 / PI,
            Self::Sawtooth => 2.0 * (cycles - (cycles + 0.5).floor()),
            Self::Square => {
                if theta.sin() >= 0.0 {
                    1.0
                } else {
                    -1.0
                }
            }
        };
        sample as f32
    }

    fn to_str(self) -> &'static str {
        match self {
            Self::Sine => "sine",
            Self::SoftSine => "soft-sine",
            Self::Triangle => "triangle",
            Self::Sawtooth => "sawtooth",
            Self::Square => "square",
        }
    }
}

impl Display for Waveform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Waveform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sine" => Ok(Self::Sine),
            "soft-sine" | "softsine" => Ok(Self::SoftSine),
            "triangle" => Ok(Self::Triangle),
            "sawtooth" | "saw" => Ok(Self::Sawtooth),
            "square" => Ok(Self::Square),
            _ => Err(format!(
                "unknown waveform \"{}\" (expected one of: sine, soft-sine, \
                 triangle, sawtooth, square)",
                s
            )),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn string_round_trip() {
        for waveform in Waveform::ALL {
            assert_eq!(
                waveform.to_string().parse::<Waveform>().unwrap(),
                waveform
            );
        }
    }

    #[test]
    fn unknown_waveform_name() {
        assert!("sinusoid".parse::<Waveform>().is_err());
    }

    #[test]
    fn period_is_one_cycle() {
        for waveform in Waveform::ALL {
            for cycles in [0.1, 0.3, 0.7] {
                let a = waveform.sample(cycles);
                let b = waveform.sample(cycles + 1.0);
                assert!((a - b).abs() < 1e-6, "{}: {} != {}", waveform, a, b);
            }
        }
    }

    #[test]
    fn range_is_plus_minus_one() {
        for waveform in Waveform::ALL {
            for i in 0..1000 {
                let sample = waveform.sample(i as f64 / 1000.0);
                assert!((-1.0..=1.0).contains(&sample));
            }
        }
    }
}
