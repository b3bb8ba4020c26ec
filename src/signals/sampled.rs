//! A finite run of samples tagged with its sample rate.

use crate::error::{RateRole, Result, check_rate};

/// An ordered sequence of samples plus the rate they were recorded at.
///
/// Unlike a streaming source, a `Signal` is a complete, immutable buffer: the
/// convolution looks ahead (`signal[i + j]`), so the whole input has to be
/// available up front.
///
/// # Examples
///
/// ```
/// use irconv::Signal;
///
/// let signal = Signal::new(vec![0.0, 0.5, 1.0], 44100.0).unwrap();
/// assert_eq!(signal.len(), 3);
/// assert_eq!(signal.sample_rate(), 44100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    samples: Vec<f64>,
    sample_rate: f64,
}

impl Signal {
    /// Creates a signal from samples and a sample rate in Hz.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRate`](crate::Error::InvalidRate) if
    /// `sample_rate` is not a positive, finite number.
    pub fn new(samples: Vec<f64>, sample_rate: f64) -> Result<Self> {
        let sample_rate = check_rate(RateRole::Signal, sample_rate)?;
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// The samples, in order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length of the signal in seconds.
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate
    }

    /// Consumes the signal, returning its samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}
