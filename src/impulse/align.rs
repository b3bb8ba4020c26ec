//! Sample-and-hold rate alignment of impulse responses.
//!
//! An impulse response is usually authored at a much lower rate than the
//! audio it is applied to. Before convolving, each coefficient is repeated
//! for as many signal-rate slots as it spans in real time:
//!
//! ```text
//! output slot si is filled while  si / signal_rate < (ii + 1) / ir_rate
//! ```
//!
//! so coefficient `ii` covers the interval `[ii / ir_rate, (ii + 1) / ir_rate)`
//! on the signal's time base. Nothing is interpolated; this is a plain
//! hold-previous-sample up-sampler.
//!
//! Aligning to a *lower* rate than the IR's own is allowed but lossy: a
//! coefficient whose interval closes before the next output slot opens is
//! never emitted. That is the algorithm's defined behavior, not something to
//! smooth over.

use crate::error::{RateRole, Result, check_rate};

/// Aligns `ir_coefficients`, recorded at `ir_rate`, to `signal_rate`.
///
/// # Errors
///
/// Returns [`Error::InvalidRate`](crate::Error::InvalidRate) if either rate
/// is zero, negative or not finite.
///
/// # Examples
///
/// ```
/// use irconv::impulse::align;
///
/// // Each coefficient spans two slots at twice the rate
/// let aligned = align(200.0, &[1.0, 0.5], 100.0).unwrap();
/// assert_eq!(aligned, vec![1.0, 1.0, 0.5, 0.5]);
/// ```
pub fn align(signal_rate: f64, ir_coefficients: &[f64], ir_rate: f64) -> Result<Vec<f64>> {
    let signal_rate = check_rate(RateRole::Signal, signal_rate)?;
    let ir_rate = check_rate(RateRole::ImpulseResponse, ir_rate)?;

    if ir_rate > signal_rate {
        log::debug!(
            "Aligning impulse response down from {} Hz to {} Hz; some coefficients may be dropped",
            ir_rate,
            signal_rate
        );
    }

    let estimate = (ir_coefficients.len() as f64 * signal_rate / ir_rate).ceil() as usize;
    let mut aligned = Vec::with_capacity(estimate.saturating_add(1));

    let mut si: u64 = 0;
    for (ii, &coefficient) in ir_coefficients.iter().enumerate() {
        let interval_end = (ii + 1) as f64 / ir_rate;
        while (si as f64) / signal_rate < interval_end {
            aligned.push(coefficient);
            si += 1;
        }
    }

    Ok(aligned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_doubling_rate() {
        let aligned = align(200.0, &[0.3, -0.7], 100.0).unwrap();
        assert_eq!(aligned, vec![0.3, 0.3, -0.7, -0.7]);
    }

    #[test]
    fn test_identity_at_equal_rates() {
        let ir = vec![1.0, -0.5, 0.25, 0.0, 0.125];
        assert_eq!(align(100.0, &ir, 100.0).unwrap(), ir);
        assert_eq!(align(44100.0, &ir, 44100.0).unwrap(), ir);
    }

    #[test]
    fn test_empty_input() {
        assert!(align(44100.0, &[], 100.0).unwrap().is_empty());
        assert!(align(100.0, &[], 44100.0).unwrap().is_empty());
    }

    #[test]
    fn test_non_integer_ratio() {
        // 250 / 100 = 2.5 slots per coefficient: boundaries at 0.01, 0.02, 0.03 s
        // fall after slots 0..=2, 3..=4, 5..=7.
        let aligned = align(250.0, &[1.0, 2.0, 3.0], 100.0).unwrap();
        assert_eq!(aligned, vec![1.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 3.0]);
    }

    #[test]
    fn test_typical_audio_rate() {
        let ir = vec![0.0; 100];
        let aligned = align(44100.0, &ir, 100.0).unwrap();
        assert_eq!(aligned.len(), 44100);
    }

    #[test]
    fn test_downsampling_drops_coefficients() {
        // Signal at half the IR rate: every output slot spans two IR samples,
        // so every other coefficient is never emitted.
        let aligned = align(100.0, &[1.0, 2.0, 3.0, 4.0], 200.0).unwrap();
        assert_eq!(aligned, vec![1.0, 3.0]);
    }

    #[test]
    fn test_huge_ir_rate_drops_almost_everything() {
        let aligned = align(1.0, &[1.0, 2.0, 3.0], 1e9).unwrap();
        assert_eq!(aligned, vec![1.0]);
    }

    #[test]
    fn test_rejects_invalid_rates() {
        let ir = [1.0, 2.0];
        for bad in [0.0, -44100.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                align(bad, &ir, 100.0),
                Err(Error::InvalidRate {
                    role: RateRole::Signal,
                    ..
                })
            ));
            assert!(matches!(
                align(44100.0, &ir, bad),
                Err(Error::InvalidRate {
                    role: RateRole::ImpulseResponse,
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_rates_checked_even_for_empty_input() {
        assert!(align(0.0, &[], 100.0).is_err());
    }

    #[test]
    fn test_length_bound_over_random_inputs() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let len = rng.gen_range(0..64);
            let ir_rate = rng.gen_range(1.0..1000.0);
            let signal_rate = ir_rate * rng.gen_range(1.0..50.0);
            let ir: Vec<f64> = (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect();

            let aligned = align(signal_rate, &ir, ir_rate).unwrap();
            let upper = (len as f64 * signal_rate / ir_rate).ceil() as usize + 1;
            assert!(
                aligned.len() >= len && aligned.len() <= upper,
                "len {} at {} / {} gave {} samples",
                len,
                signal_rate,
                ir_rate,
                aligned.len()
            );
        }
    }

    #[test]
    fn test_every_coefficient_kept_in_order_when_upsampling() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let ir: Vec<f64> = (0..rng.gen_range(1..32)).map(|i| i as f64).collect();
            let ir_rate = rng.gen_range(10.0..200.0);
            let signal_rate = ir_rate * rng.gen_range(1.0..8.0);

            let mut aligned = align(signal_rate, &ir, ir_rate).unwrap();
            aligned.dedup();
            assert_eq!(aligned, ir);
        }
    }
}
