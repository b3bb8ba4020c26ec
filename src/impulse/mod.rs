//! Impulse responses: loading, saving and rate alignment.
//!
//! An [`ImpulseResponse`] is a list of coefficients plus the sample rate they
//! were authored at. Coefficient files are plain text with one number per
//! line (see [`parse_coefficients`]). Before an impulse response can be
//! applied to a signal it has to be [aligned](align) to the signal's rate.

mod align;
mod coefficients;

pub use align::align;
pub use coefficients::{parse_coefficients, read_coefficients, write_coefficients};

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{Error, RateRole, Result, check_rate};

/// A filter's response to a single-sample impulse, at its native rate.
///
/// # Examples
///
/// ```
/// use irconv::ImpulseResponse;
///
/// let ir = ImpulseResponse::new(vec![1.0, 0.5, 0.25], 100.0).unwrap();
/// assert_eq!(ir.aligned_to(200.0).unwrap(), vec![1.0, 1.0, 0.5, 0.5, 0.25, 0.25]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ImpulseResponse {
    coefficients: Vec<f64>,
    sample_rate: f64,
}

impl ImpulseResponse {
    /// Creates an impulse response from coefficients and their sample rate in Hz.
    pub fn new(coefficients: Vec<f64>, sample_rate: f64) -> Result<Self> {
        let sample_rate = check_rate(RateRole::ImpulseResponse, sample_rate)?;
        Ok(Self {
            coefficients,
            sample_rate,
        })
    }

    /// Loads a coefficient file.
    ///
    /// Coefficient files carry no rate of their own, so the caller supplies it.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the file cannot be read
    /// - [`Error::MalformedCoefficient`] naming the first line that is not a number
    /// - [`Error::InvalidRate`] if `sample_rate` is unusable
    pub fn load<P: AsRef<Path>>(path: P, sample_rate: f64) -> Result<Self> {
        let path = path.as_ref();
        let sample_rate = check_rate(RateRole::ImpulseResponse, sample_rate)?;

        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let coefficients = read_coefficients(BufReader::new(file))
            .map_err(|e| Error::io(path, e))?
            .map_err(|source| Error::MalformedCoefficient {
                path: path.to_path_buf(),
                source,
            })?;

        log::trace!(
            "Loaded {} coefficients from {}",
            coefficients.len(),
            path.display()
        );

        Ok(Self {
            coefficients,
            sample_rate,
        })
    }

    /// Writes the coefficients to a file, one per line.
    ///
    /// The sample rate is not stored; coefficient files have no header.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        write_coefficients(BufWriter::new(file), &self.coefficients).map_err(|e| Error::io(path, e))
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Native sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Returns the coefficients re-timed to `signal_rate`.
    ///
    /// Shorthand for [`align`] with this response's own rate.
    pub fn aligned_to(&self, signal_rate: f64) -> Result<Vec<f64>> {
        align(signal_rate, &self.coefficients, self.sample_rate)
    }
}
