//! Error types for the sources crate.

use thiserror::Error;

/// Errors that can occur while reading one exchange-rate source.
///
/// None of these escape the aggregator: every variant collapses to the
/// unavailable quote for the source that produced it.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source answered with a non-success HTTP status.
    #[error("Unexpected status from {source}: {status}")]
    Status {
        /// The source that answered
        source: &'static str,
        /// The status it answered with
        status: reqwest::StatusCode,
    },

    /// The payload or document did not have the expected shape.
    /// Covers missing keys, missing table rows or cells, and empty series.
    #[error("Malformed payload from {source}: {message}")]
    Shape {
        /// The source whose payload was malformed
        source: &'static str,
        /// Description of the mismatch
        message: String,
    },

    /// The rate text could not be used as a number.
    #[error("Unusable rate from {source}: {value}")]
    Rate {
        /// The source that published the rate
        source: &'static str,
        /// The text that failed to parse
        value: String,
    },

    /// A network error occurred while calling the source.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
