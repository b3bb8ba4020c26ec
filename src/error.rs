//! Error types shared by the whole pipeline.
//!
//! The core (`align`, `convolve`) only ever fails on a bad sample rate.
//! Everything else here belongs to the edges: coefficient files, WAV files and
//! batch configuration.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Which side of the pipeline a sample rate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateRole {
    /// The rate of the signal being filtered
    Signal,
    /// The native rate of an impulse response
    ImpulseResponse,
}

impl fmt::Display for RateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateRole::Signal => write!(f, "signal"),
            RateRole::ImpulseResponse => write!(f, "impulse response"),
        }
    }
}

/// A single line of a coefficient file that is not a real number.
///
/// Returned by the in-memory parser, which has no notion of where the text
/// came from. Loading from disk wraps it in [`Error::MalformedCoefficient`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("line {line}: {value:?} is not a number")]
pub struct MalformedLine {
    /// 1-based line number
    pub line: usize,
    /// The offending text, untrimmed
    pub value: String,
}

/// Everything that can go wrong while loading, aligning, filtering, or writing.
#[derive(Debug, Error)]
pub enum Error {
    /// A coefficient file contained a line that is not a number.
    #[error("malformed coefficient in {}: {source}", .path.display())]
    MalformedCoefficient {
        path: PathBuf,
        #[source]
        source: MalformedLine,
    },

    /// A sample rate was zero, negative, or not finite.
    #[error("invalid {role} sample rate {rate}: must be positive and finite")]
    InvalidRate { role: RateRole, rate: f64 },

    /// A file could not be opened, read, or written.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A WAV file could not be decoded or encoded.
    #[cfg(feature = "wav")]
    #[error("{}: {source}", .path.display())]
    Wav {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    /// Explicit output paths do not pair one-to-one with impulse responses.
    #[error("{impulse_responses} impulse responses but {outputs} output paths")]
    MismatchedOutputs {
        impulse_responses: usize,
        outputs: usize,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Checks that `rate` is usable as a sample rate.
pub(crate) fn check_rate(role: RateRole, rate: f64) -> Result<f64> {
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(Error::InvalidRate { role, rate })
    }
}
