//! Multi-channel audio as handed over by the WAV collaborator.

use super::Signal;
use crate::error::{RateRole, Result, check_rate};
use crate::filters::apply_impulse_response;
use crate::impulse::ImpulseResponse;

/// One [`Signal`] per channel, all at the same sample rate.
///
/// Channels are processed independently: filtering a stereo recording filters
/// the left and right channels with the same impulse response.
#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    channels: Vec<Signal>,
    sample_rate: f64,
}

impl Recording {
    /// Creates a recording from de-interleaved channel data.
    pub fn new(channels: Vec<Vec<f64>>, sample_rate: f64) -> Result<Self> {
        let sample_rate = check_rate(RateRole::Signal, sample_rate)?;
        let channels = channels
            .into_iter()
            .map(|samples| Signal::new(samples, sample_rate))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            channels,
            sample_rate,
        })
    }

    /// Wraps a single signal as a mono recording.
    pub fn mono(signal: Signal) -> Self {
        let sample_rate = signal.sample_rate();
        Self {
            channels: vec![signal],
            sample_rate,
        }
    }

    pub fn channels(&self) -> &[Signal] {
        &self.channels
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Number of frames, i.e. the length of the longest channel.
    pub fn frames(&self) -> usize {
        self.channels.iter().map(Signal::len).max().unwrap_or(0)
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Applies a fallible transform to every channel.
    ///
    /// The first error aborts the whole recording; a half-filtered file is of
    /// no use to anyone.
    pub fn map_channels<F>(&self, mut f: F) -> Result<Recording>
    where
        F: FnMut(&Signal) -> Result<Signal>,
    {
        let channels = self
            .channels
            .iter()
            .map(&mut f)
            .collect::<Result<Vec<_>>>()?;
        Ok(Recording {
            channels,
            sample_rate: self.sample_rate,
        })
    }

    /// Filters every channel with `ir`, aligning it to this recording's rate.
    ///
    /// # Examples
    ///
    /// ```
    /// use irconv::{ImpulseResponse, Recording};
    ///
    /// let rec = Recording::new(vec![vec![1.0, 2.0, 3.0, 4.0]], 100.0).unwrap();
    /// let ir = ImpulseResponse::new(vec![2.0, 0.5], 100.0).unwrap();
    /// let out = rec.convolve_with(&ir).unwrap();
    /// assert_eq!(out.channels()[0].samples(), &[3.0, 5.5, 8.0, 8.0]);
    /// ```
    pub fn convolve_with(&self, ir: &ImpulseResponse) -> Result<Recording> {
        self.map_channels(|channel| apply_impulse_response(channel, ir))
    }

    pub fn into_channels(self) -> Vec<Signal> {
        self.channels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let rec = Recording::new(vec![vec![0.0; 10], vec![1.0; 10]], 44100.0).unwrap();
        assert_eq!(rec.channel_count(), 2);
        assert_eq!(rec.frames(), 10);
        assert_eq!(rec.sample_rate(), 44100.0);
        assert_eq!(rec.channels()[1].sample_rate(), 44100.0);
    }

    #[test]
    fn test_mono() {
        let signal = Signal::new(vec![0.1, 0.2], 8000.0).unwrap();
        let rec = Recording::mono(signal.clone());
        assert_eq!(rec.channel_count(), 1);
        assert_eq!(rec.sample_rate(), 8000.0);
        assert_eq!(rec.into_channels(), vec![signal]);
    }

    #[test]
    fn test_no_channels() {
        let rec = Recording::new(Vec::new(), 44100.0).unwrap();
        assert_eq!(rec.channel_count(), 0);
        assert_eq!(rec.frames(), 0);
    }

    #[test]
    fn test_channels_filtered_independently() {
        let rec = Recording::new(
            vec![vec![1.0, 2.0, 3.0, 4.0], vec![4.0, 3.0, 2.0, 1.0]],
            100.0,
        )
        .unwrap();
        let ir = ImpulseResponse::new(vec![2.0, 0.5], 100.0).unwrap();
        let out = rec.convolve_with(&ir).unwrap();

        assert_eq!(out.channel_count(), 2);
        assert_eq!(out.channels()[0].samples(), &[3.0, 5.5, 8.0, 8.0]);
        assert_eq!(out.channels()[1].samples(), &[9.5, 7.0, 4.5, 2.0]);
        assert_eq!(out.sample_rate(), 100.0);
    }

    #[test]
    fn test_map_channels_propagates_error() {
        let rec = Recording::new(vec![vec![0.0], vec![0.0]], 100.0).unwrap();
        let result = rec.map_channels(|_| Signal::new(Vec::new(), -1.0));
        assert!(result.is_err());
    }
}
