//! Rate source trait definition.

use async_trait::async_trait;

use crate::errors::SourceError;
use crate::models::RateQuote;

/// Trait for exchange-rate sources.
///
/// Implement this trait to add support for a new upstream source. An
/// implementation issues a single GET per call, interprets the response in
/// its own format, and reports any failure as a [`SourceError`] instead of
/// panicking; the aggregator decides how failures surface to callers.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Identifier for this source, used as its key in the aggregated report.
    ///
    /// Should be a constant string like "banxico" or "fixer".
    fn id(&self) -> &'static str;

    /// Fetch the most recent MXN/USD quote from this source.
    ///
    /// # Returns
    ///
    /// The latest quote on success, or a `SourceError` on failure. A single
    /// failed attempt is final; retrying is the caller's business.
    async fn latest_rate(&self) -> Result<RateQuote, SourceError>;
}
