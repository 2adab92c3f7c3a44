// File: crates/benchplot-core/src/error.rs
// Summary: Parse error taxonomy for the benchmark table reader.

use thiserror::Error;

/// Everything that can go wrong between raw benchmark stdout and a
/// [`BenchTable`](crate::BenchTable). All variants are fatal; the parser never
/// skips or repairs malformed input.
///
/// Line numbers are 1-based positions in the input artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no line containing the `{}` marker found in input", crate::TABLE_MARKER)]
    MissingTableMarker,

    #[error("line {line}: malformed header: {reason}")]
    MalformedHeader { line: usize, reason: String },

    #[error("line {line}: malformed row: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("series `{0}` not present in parsed table")]
    MissingSeriesKey(String),
}
