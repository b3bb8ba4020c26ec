//! What a batch run should do.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::signals::OutputFormat;

/// Rate assumed for coefficient files, which carry no rate of their own.
pub const DEFAULT_IR_SAMPLE_RATE: f64 = 100.0;

/// One signal, many impulse responses, one output per impulse response.
///
/// # Examples
///
/// ```
/// use irconv::batch::BatchConfig;
///
/// let config = BatchConfig::new("sound/coco.wav", ["data/listener1.ir", "data/small_room.ir"])
///     .with_ir_sample_rate(100.0);
///
/// let jobs = config.jobs().unwrap();
/// assert_eq!(jobs[0].output, std::path::Path::new("sound/coco1.wav"));
/// assert_eq!(jobs[1].output, std::path::Path::new("sound/coco2.wav"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// WAV file to filter
    pub signal_path: PathBuf,
    /// Coefficient files, one job each
    pub impulse_response_paths: Vec<PathBuf>,
    /// Output WAV files, paired with `impulse_response_paths` by position.
    /// Left empty, names are derived from the signal path.
    pub output_paths: Vec<PathBuf>,
    /// Native rate of every impulse response, in Hz
    pub ir_sample_rate: f64,
    pub output_format: OutputFormat,
    /// Worker threads; `None` uses rayon's global pool
    pub threads: Option<usize>,
}

/// A single impulse response to apply, and where the result goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Position in the configured impulse response list
    pub index: usize,
    pub impulse_response: PathBuf,
    pub output: PathBuf,
}

impl BatchConfig {
    pub fn new<P, I, Q>(signal_path: P, impulse_response_paths: I) -> Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = Q>,
        Q: Into<PathBuf>,
    {
        Self {
            signal_path: signal_path.into(),
            impulse_response_paths: impulse_response_paths.into_iter().map(Into::into).collect(),
            output_paths: Vec::new(),
            ir_sample_rate: DEFAULT_IR_SAMPLE_RATE,
            output_format: OutputFormat::default(),
            threads: None,
        }
    }

    pub fn with_output_paths<I, Q>(mut self, output_paths: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<PathBuf>,
    {
        self.output_paths = output_paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ir_sample_rate(mut self, rate: f64) -> Self {
        self.ir_sample_rate = rate;
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Pairs every impulse response with its output path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedOutputs`] if output paths were given but
    /// their count differs from the number of impulse responses.
    pub fn jobs(&self) -> Result<Vec<Job>> {
        let outputs = if self.output_paths.is_empty() {
            derive_output_paths(&self.signal_path, self.impulse_response_paths.len())
        } else if self.output_paths.len() == self.impulse_response_paths.len() {
            self.output_paths.clone()
        } else {
            return Err(Error::MismatchedOutputs {
                impulse_responses: self.impulse_response_paths.len(),
                outputs: self.output_paths.len(),
            });
        };

        Ok(self
            .impulse_response_paths
            .iter()
            .zip(outputs)
            .enumerate()
            .map(|(index, (impulse_response, output))| Job {
                index,
                impulse_response: impulse_response.clone(),
                output,
            })
            .collect())
    }
}

/// Names outputs after the signal: `dir/coco.wav` gives `dir/coco1.wav`,
/// `dir/coco2.wav`, and so on.
pub fn derive_output_paths(signal_path: &Path, count: usize) -> Vec<PathBuf> {
    let dir = signal_path.parent().unwrap_or(Path::new(""));
    let stem = signal_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());

    (1..=count)
        .map(|n| dir.join(format!("{}{}.wav", stem, n)))
        .collect()
}
