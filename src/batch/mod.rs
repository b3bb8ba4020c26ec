//! Applying several impulse responses to one signal (requires the `batch` feature).
//!
//! The signal is read once and shared by every job. Jobs are independent, so
//! they run in parallel on rayon; results come back in configuration order
//! regardless of which job finished first.
//!
//! A job that fails (unreadable or malformed coefficient file, unwritable
//! output) is logged and recorded in the [`BatchReport`]; the remaining jobs
//! carry on. Only a failure to read the signal itself aborts the batch.

mod config;

pub use config::{BatchConfig, DEFAULT_IR_SAMPLE_RATE, Job, derive_output_paths};

use std::time::{Duration, Instant};

use log::{error, info, trace, warn};
use rayon::prelude::*;

use crate::error::Result;
use crate::impulse::ImpulseResponse;
use crate::signals::{Recording, read_wav, write_wav};

/// What a successful job produced.
#[derive(Debug, Clone, PartialEq)]
pub struct JobStats {
    /// Coefficients in the impulse response file
    pub coefficients: usize,
    /// Frames written to the output file
    pub frames: usize,
    pub elapsed: Duration,
}

/// A job and how it went.
#[derive(Debug)]
pub struct JobOutcome {
    pub job: Job,
    pub result: Result<JobStats>,
}

/// Outcome of every job, in configuration order.
#[derive(Debug)]
pub struct BatchReport {
    pub outcomes: Vec<JobOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// The jobs that failed.
    pub fn failures(&self) -> impl Iterator<Item = &JobOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    /// `true` if every job succeeded (or there were none).
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }
}

/// Runs every job described by `config`.
///
/// # Errors
///
/// Fails only for problems that affect the batch as a whole: mismatched
/// output paths or an unreadable signal file. Per-job failures are reported
/// through [`BatchReport`].
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport> {
    let jobs = config.jobs()?;
    let recording = read_wav(&config.signal_path)?;
    info!(
        "Loaded {} ({} channels, {} Hz, {:.2} s)",
        config.signal_path.display(),
        recording.channel_count(),
        recording.sample_rate(),
        recording.frames() as f64 / recording.sample_rate()
    );

    let pool = config.threads.and_then(|threads| {
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => {
                trace!("Configured rayon pool with {} threads", threads);
                Some(pool)
            }
            Err(e) => {
                warn!(
                    "Rayon pool initialization error ({} threads), using global pool: {:?}",
                    threads, e
                );
                None
            }
        }
    });

    let outcomes = match pool {
        Some(pool) => pool.install(|| run_jobs(&recording, config, jobs)),
        None => run_jobs(&recording, config, jobs),
    };

    let report = BatchReport { outcomes };
    info!(
        "{} of {} impulse responses applied",
        report.succeeded(),
        report.outcomes.len()
    );
    Ok(report)
}

fn run_jobs(recording: &Recording, config: &BatchConfig, jobs: Vec<Job>) -> Vec<JobOutcome> {
    jobs.into_par_iter()
        .map(|job| {
            let result = run_job(recording, config, &job);
            match &result {
                Ok(stats) => info!(
                    "[{}] {} -> {} ({} coefficients, {:.2?})",
                    job.index + 1,
                    job.impulse_response.display(),
                    job.output.display(),
                    stats.coefficients,
                    stats.elapsed
                ),
                Err(e) => error!("[{}] Skipping: {}", job.index + 1, e),
            }
            JobOutcome { job, result }
        })
        .collect()
}

fn run_job(recording: &Recording, config: &BatchConfig, job: &Job) -> Result<JobStats> {
    let start = Instant::now();
    let ir = ImpulseResponse::load(&job.impulse_response, config.ir_sample_rate)?;
    let filtered = recording.convolve_with(&ir)?;
    write_wav(&job.output, &filtered, config.output_format)?;

    Ok(JobStats {
        coefficients: ir.len(),
        frames: filtered.frames(),
        elapsed: start.elapsed(),
    })
}
