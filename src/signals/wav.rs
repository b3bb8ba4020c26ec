//! WAV file reading and writing (requires the `wav` feature).
//!
//! This is the audio collaborator of the pipeline: it turns a file into a
//! [`Recording`] and back, and nothing else. The filtering code never sees a
//! file handle.

use std::path::Path;

use super::Recording;
use crate::error::{Error, Result};

/// Sample encoding used when writing a WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 16-bit signed integer PCM; samples are clamped to [-1.0, 1.0]
    #[default]
    Pcm16,
    /// 32-bit IEEE float, written unclamped
    Float32,
}

/// Reads a WAV file into a [`Recording`].
///
/// Integer samples are normalized to [-1.0, 1.0) by dividing by
/// `2^(bits_per_sample - 1)`; float samples are taken as-is. Interleaved
/// frames are split into one signal per channel.
///
/// # Examples
///
/// ```ignore
/// use irconv::signals::read_wav;
///
/// let recording = read_wav("sound/coco.wav")?;
/// println!("{} channels at {} Hz", recording.channel_count(), recording.sample_rate());
/// ```
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<Recording> {
    let path = path.as_ref();
    let wav_err = |source| Error::Wav {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = hound::WavReader::open(path).map_err(wav_err)?;
    let spec = reader.spec();

    let samples: Result<Vec<f64>, _> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(|v| v as f64))
            .collect(),
        hound::SampleFormat::Int => {
            let max_value = (1_i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / max_value))
                .collect()
        }
    };
    let samples = samples.map_err(wav_err)?;

    let channel_count = spec.channels.max(1) as usize;
    let mut channels = vec![Vec::with_capacity(samples.len() / channel_count); channel_count];
    for (i, sample) in samples.into_iter().enumerate() {
        channels[i % channel_count].push(sample);
    }

    log::trace!(
        "Read {}: {} channels, {} Hz, {} frames",
        path.display(),
        channel_count,
        spec.sample_rate,
        channels[0].len()
    );

    Recording::new(channels, spec.sample_rate as f64)
}

/// Writes a [`Recording`] to a WAV file.
///
/// WAV headers store the rate as whole hertz, so the recording's rate is
/// rounded. Channels shorter than the longest one are padded with silence.
pub fn write_wav<P: AsRef<Path>>(
    path: P,
    recording: &Recording,
    format: OutputFormat,
) -> Result<()> {
    let path = path.as_ref();
    let wav_err = |source| Error::Wav {
        path: path.to_path_buf(),
        source,
    };

    let spec = hound::WavSpec {
        channels: recording.channel_count() as u16,
        sample_rate: recording.sample_rate().round() as u32,
        bits_per_sample: match format {
            OutputFormat::Pcm16 => 16,
            OutputFormat::Float32 => 32,
        },
        sample_format: match format {
            OutputFormat::Pcm16 => hound::SampleFormat::Int,
            OutputFormat::Float32 => hound::SampleFormat::Float,
        },
    };

    let mut writer = hound::WavWriter::create(path, spec).map_err(wav_err)?;
    let channels = recording.channels();
    for frame in 0..recording.frames() {
        for channel in channels {
            let sample = channel.samples().get(frame).copied().unwrap_or(0.0);
            let written = match format {
                OutputFormat::Pcm16 => writer.write_sample(to_pcm16(sample)),
                OutputFormat::Float32 => writer.write_sample(sample as f32),
            };
            written.map_err(wav_err)?;
        }
    }
    writer.finalize().map_err(wav_err)?;

    log::trace!(
        "Wrote {}: {} channels, {} frames, {:?}",
        path.display(),
        channels.len(),
        recording.frames(),
        format
    );
    Ok(())
}

/// Converts a sample to 16-bit PCM, clipping anything outside [-1.0, 1.0].
#[inline]
fn to_pcm16(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f64).round_ties_even() as i16
}
