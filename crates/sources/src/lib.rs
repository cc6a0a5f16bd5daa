//! Cambio Sources Crate
//!
//! This crate fetches the current MXN/USD exchange rate from independent
//! upstream sources and assembles the results into a single report.
//!
//! # Overview
//!
//! Three sources are supported out of the box:
//! - Diario Oficial de la Federación (HTML table published on the Banxico site)
//! - Fixer (JSON API, EUR-based cross rate)
//! - Banxico SIE (JSON time-series API)
//!
//! Each source implements the [`RateSource`] trait and reports failures as
//! [`SourceError`]. The [`SourceAggregator`] queries every source per call and
//! replaces a failed source's quote with [`RateQuote::unavailable`], so a
//! report always carries an entry per configured source.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! | SourceAggregator |  (one report per call, no caching)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |    RateSource    |  (DiarioOficial, Fixer, Banxico)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |    RateQuote     |  (value + source's own date string)
//! +------------------+
//! ```

pub mod aggregator;
pub mod errors;
pub mod models;
pub mod source;

// Re-export all public types from models
pub use models::RateQuote;

// Re-export source types
pub use source::banxico::BanxicoSource;
pub use source::diario_oficial::DiarioOficialSource;
pub use source::fixer::FixerSource;
pub use source::RateSource;

// Re-export aggregator types
pub use aggregator::{ExchangeReport, SourceAggregator};

// Re-export error types
pub use errors::SourceError;
