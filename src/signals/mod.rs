//! Sampled audio types.
//!
//! This module provides the value types that flow through the pipeline:
//! - `Signal` for a single channel of samples with its sample rate
//! - `Recording` for one or more channels sharing a sample rate
//! - `read_wav` / `write_wav` for moving recordings in and out of WAV files
//!   (requires the `wav` feature)

mod recording;
mod sampled;
#[cfg(feature = "wav")]
mod wav;

pub use recording::Recording;
pub use sampled::Signal;
#[cfg(feature = "wav")]
pub use wav::{OutputFormat, read_wav, write_wav};
