pub mod stereo;
pub use stereo::{Channel, Stereo};
pub mod waveform;
pub use waveform::Waveform;
pub mod tone;
pub use tone::{ToneBuffer, ToneError, ToneParams};
