use std::path::PathBuf;
use std::process::{ExitCode, Termination};
use std::time::Instant;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use log::{error, info};

use irconv::ColorLogger;
use irconv::batch::{BatchConfig, DEFAULT_IR_SAMPLE_RATE, run_batch};
use irconv::signals::OutputFormat;

#[derive(Parser)]
#[command(name = "irconv", version)]
/// Filter a WAV file with one or more impulse responses.
struct Cli {
    /// WAV file to filter
    #[arg(name = "SIGNAL")]
    signal: PathBuf,

    /// Impulse response coefficient file (one number per line).
    /// Repeat to apply several impulse responses; each produces its own output.
    #[arg(short = 'i', long = "ir", required = true)]
    impulse_responses: Vec<PathBuf>,

    /// Output WAV file, one per --ir in the same order.
    /// [default: <SIGNAL dir>/<SIGNAL stem>1.wav, <SIGNAL stem>2.wav, ...]
    #[arg(short = 'o', long = "out")]
    outputs: Vec<PathBuf>,

    /// Sample rate of the impulse response files in Hz
    #[arg(short = 'r', long = "ir-rate", default_value_t = DEFAULT_IR_SAMPLE_RATE)]
    ir_rate: f64,

    /// Output sample format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = FormatArg::Pcm16)]
    format: FormatArg,

    /// Number of impulse responses processed in parallel
    /// [default: one per CPU]
    #[arg(short = 'j', long = "threads")]
    threads: Option<usize>,

    /// Print diagnostic messages
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Quiet mode: suppress all log output
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// 16-bit integer PCM (clips at full scale)
    Pcm16,
    /// 32-bit float
    Float32,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Pcm16 => OutputFormat::Pcm16,
            FormatArg::Float32 => OutputFormat::Float32,
        }
    }
}

struct TermResult(Result<()>);

impl Termination for TermResult {
    fn report(self) -> ExitCode {
        match self.0 {
            Ok(_) => ExitCode::SUCCESS,
            Err(err) => {
                error!("{:#}", err);
                ExitCode::FAILURE
            }
        }
    }
}

fn main() -> TermResult {
    TermResult(run())
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    ColorLogger::new(cli.quiet, cli.verbose).init()?;

    let mut config = BatchConfig::new(&cli.signal, &cli.impulse_responses)
        .with_output_paths(&cli.outputs)
        .with_ir_sample_rate(cli.ir_rate)
        .with_output_format(cli.format.into());
    if let Some(threads) = cli.threads {
        config = config.with_threads(threads);
    }

    let start = Instant::now();
    let report = run_batch(&config)?;
    info!("Finished in {:.2?}", start.elapsed());

    if !report.is_success() {
        let failed = report.outcomes.len() - report.succeeded();
        bail!(
            "{} of {} impulse responses failed",
            failed,
            report.outcomes.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["irconv", "coco.wav", "--ir", "a.ir", "--ir", "b.ir"]);
        assert_eq!(cli.signal, PathBuf::from("coco.wav"));
        assert_eq!(cli.impulse_responses.len(), 2);
        assert!(cli.outputs.is_empty());
        assert_eq!(cli.ir_rate, DEFAULT_IR_SAMPLE_RATE);
        assert!(cli.format == FormatArg::Pcm16);
        assert_eq!(cli.threads, None);
    }

    #[test]
    fn test_parse_all_options() {
        let cli = Cli::parse_from([
            "irconv", "in.wav", "-i", "room.ir", "-o", "out.wav", "-r", "8000", "-f", "float32",
            "-j", "4", "-v",
        ]);
        assert_eq!(cli.outputs, vec![PathBuf::from("out.wav")]);
        assert_eq!(cli.ir_rate, 8000.0);
        assert!(cli.format == FormatArg::Float32);
        assert_eq!(cli.threads, Some(4));
        assert!(cli.verbose);
    }

    #[test]
    fn test_requires_an_impulse_response() {
        assert!(Cli::try_parse_from(["irconv", "in.wav"]).is_err());
    }
}
