//! Report assembly across all configured sources.
//!
//! The aggregator owns the source list and the fallback policy: a source
//! that fails keeps its key in the report with the unavailable quote, and
//! never affects its siblings. There is no caching, no retrying and no
//! concurrency between fetches; every call re-reads every live source, one
//! after the other.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::warn;

use crate::models::RateQuote;
use crate::source::banxico::BanxicoSource;
use crate::source::diario_oficial::DiarioOficialSource;
use crate::source::fixer::FixerSource;
use crate::source::RateSource;

/// Mapping from source id to its quote. Every configured source has an
/// entry, unavailable ones included.
pub type ExchangeReport = BTreeMap<&'static str, RateQuote>;

/// Queries every configured source and assembles one report per call.
pub struct SourceAggregator {
    sources: Vec<Arc<dyn RateSource>>,
}

impl SourceAggregator {
    /// Create an aggregator over an explicit source list.
    pub fn new(sources: Vec<Arc<dyn RateSource>>) -> Self {
        Self { sources }
    }

    /// The production set: Diario Oficial, Fixer and Banxico.
    pub fn with_default_sources(banxico_token: String, fixer_api_key: String) -> Self {
        Self::new(vec![
            Arc::new(DiarioOficialSource::new()),
            Arc::new(FixerSource::new(fixer_api_key)),
            Arc::new(BanxicoSource::new(banxico_token)),
        ])
    }

    /// Fetch a fresh quote from every source, sequentially.
    ///
    /// A failed source is logged and reported as [`RateQuote::unavailable`];
    /// the error itself never reaches the caller.
    pub async fn collect(&self) -> ExchangeReport {
        let mut report = ExchangeReport::new();
        for source in &self.sources {
            let quote = match source.latest_rate().await {
                Ok(quote) => quote,
                Err(err) => {
                    warn!("Source '{}' unavailable: {}", source.id(), err);
                    RateQuote::unavailable()
                }
            };
            report.insert(source.id(), quote);
        }
        report
    }
}
