//! Plain-text coefficient files: one real number per line, no header.

use std::io::{BufRead, Write};

use crate::error::MalformedLine;

/// Parses coefficient text held in memory.
///
/// Each line is trimmed before parsing, so trailing spaces and `\r\n` endings
/// are fine. A blank line in the middle of the file is not: it is reported
/// like any other malformed line. A final newline does not count as an extra
/// line.
///
/// # Examples
///
/// ```
/// use irconv::impulse::parse_coefficients;
///
/// let ir = parse_coefficients("0.5\n0.25\n1e-3\n").unwrap();
/// assert_eq!(ir, vec![0.5, 0.25, 0.001]);
///
/// let err = parse_coefficients("0.5\nhello\n").unwrap_err();
/// assert_eq!(err.line, 2);
/// ```
pub fn parse_coefficients(text: &str) -> Result<Vec<f64>, MalformedLine> {
    text.lines()
        .enumerate()
        .map(|(index, line)| parse_line(index + 1, line))
        .collect()
}

/// Reads coefficients from any buffered reader.
///
/// I/O failures and parse failures are reported separately so the caller can
/// attach a path to either.
pub fn read_coefficients<R: BufRead>(
    reader: R,
) -> std::io::Result<Result<Vec<f64>, MalformedLine>> {
    let mut coefficients = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        match parse_line(index + 1, &line?) {
            Ok(value) => coefficients.push(value),
            Err(malformed) => return Ok(Err(malformed)),
        }
    }
    Ok(Ok(coefficients))
}

/// Writes coefficients one per line.
///
/// Values use Rust's shortest round-trip formatting, so reading the output
/// back yields bit-identical coefficients.
pub fn write_coefficients<W: Write>(mut writer: W, coefficients: &[f64]) -> std::io::Result<()> {
    for value in coefficients {
        writeln!(writer, "{}", value)?;
    }
    writer.flush()
}

fn parse_line(line: usize, text: &str) -> Result<f64, MalformedLine> {
    text.trim().parse::<f64>().map_err(|_| MalformedLine {
        line,
        value: text.to_string(),
    })
}
