//! Direct time-domain convolution with a rate-aligned impulse response.
//!
//! The kernel is applied looking *forward* from each output position:
//!
//! ```text
//! y[i] = Σ x[i + j] * h[j]      for j in 0..M, only where i + j < N
//! ```
//!
//! which is a sliding weighted inner product rather than the textbook
//! `x[i - j]` form. The output has exactly as many samples as the input; terms
//! that would read past the end of the signal are skipped, so the last `M - 1`
//! outputs see progressively fewer coefficients.
//!
//! Accumulation runs in ascending `j`, starting from `0.0`, with no
//! compensated summation. Changing the order changes the low bits of the
//! result.

use crate::error::Result;
use crate::impulse::ImpulseResponse;
use crate::signals::Signal;

/// Convolves `signal` with `aligned_ir`.
///
/// Both sequences must already be at the same sample rate (see
/// [`align`](crate::impulse::align)). Runs in O(N·M) time.
///
/// # Examples
///
/// ```
/// use irconv::convolve;
///
/// let out = convolve(&[1.0, 2.0, 3.0, 4.0], &[2.0, 0.5]);
/// assert_eq!(out, vec![3.0, 5.5, 8.0, 8.0]);
/// ```
pub fn convolve(signal: &[f64], aligned_ir: &[f64]) -> Vec<f64> {
    (0..signal.len())
        .map(|i| {
            signal[i..]
                .iter()
                .zip(aligned_ir)
                .fold(0.0, |acc, (&x, &h)| acc + x * h)
        })
        .collect()
}

/// Anything that can filter one channel of samples.
pub trait Convolver {
    /// Filters `signal`, returning a buffer of the same length.
    fn convolve(&self, signal: &[f64]) -> Vec<f64>;
}

/// A [`Convolver`] holding a kernel already aligned to the signal's rate.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectConvolver {
    kernel: Vec<f64>,
}

impl DirectConvolver {
    /// Wraps coefficients that are already at the signal's rate.
    pub fn new(kernel: Vec<f64>) -> Self {
        Self { kernel }
    }

    /// Aligns `ir` to `signal_rate` and wraps the result.
    pub fn for_rate(ir: &ImpulseResponse, signal_rate: f64) -> Result<Self> {
        Ok(Self::new(ir.aligned_to(signal_rate)?))
    }

    pub fn kernel(&self) -> &[f64] {
        &self.kernel
    }
}

impl Convolver for DirectConvolver {
    fn convolve(&self, signal: &[f64]) -> Vec<f64> {
        convolve(signal, &self.kernel)
    }
}

/// Aligns `ir` to `signal`'s rate and convolves.
///
/// The result is at the same rate and has the same length as `signal`.
///
/// # Examples
///
/// ```
/// use irconv::{ImpulseResponse, Signal, apply_impulse_response};
///
/// let signal = Signal::new(vec![1.0, 0.0, 0.0, 0.0], 200.0).unwrap();
/// let ir = ImpulseResponse::new(vec![1.0, 0.5], 100.0).unwrap();
///
/// // The IR is held for two slots at 200 Hz: [1.0, 1.0, 0.5, 0.5]
/// let out = apply_impulse_response(&signal, &ir).unwrap();
/// assert_eq!(out.samples(), &[1.0, 0.0, 0.0, 0.0]);
/// ```
pub fn apply_impulse_response(signal: &Signal, ir: &ImpulseResponse) -> Result<Signal> {
    let convolver = DirectConvolver::for_rate(ir, signal.sample_rate())?;
    log::trace!(
        "Convolving {} samples with {} coefficients ({} before alignment)",
        signal.len(),
        convolver.kernel().len(),
        ir.len()
    );
    Signal::new(convolver.convolve(signal.samples()), signal.sample_rate())
}
