//! Colored stderr backend for the `log` facade (requires the `cli` feature).

use std::io::{self, Write};

use colored::Colorize;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

#[derive(Debug, Clone)]
pub struct ColorLogger {
    max_level: LevelFilter,
}

impl ColorLogger {
    /// `quiet` wins over `verbose`; neither gives `Info`.
    pub fn new(quiet: bool, verbose: bool) -> Self {
        let max_level = if quiet {
            LevelFilter::Off
        } else if verbose {
            LevelFilter::Trace
        } else {
            LevelFilter::Info
        };
        Self { max_level }
    }

    pub fn max_level(&self) -> LevelFilter {
        self.max_level
    }

    /// Installs this logger as the global `log` backend.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.max_level);
        log::set_boxed_logger(Box::new(self))
    }
}

impl log::Log for ColorLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Error => eprintln!(
                "{} {}",
                "[ERROR]".red().bold(),
                format!("{}", record.args()).red().bold()
            ),
            Level::Warn => eprintln!(
                "{} {}",
                "[WARN]".yellow().bold(),
                format!("{}", record.args()).yellow().bold()
            ),
            _ => eprintln!("[{}] {}", record.level().to_string().blue(), record.args()),
        }
        self.flush();
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
