//! Exchange-rate source abstractions and implementations.
//!
//! This module contains:
//! - The `RateSource` trait that all sources implement
//! - Concrete source implementations (Diario Oficial, Fixer, Banxico)
//!
//! Sources are independent of one another and never see each other's
//! results; the fallback policy for a failed source lives in the
//! aggregator, not here.

mod traits;

// Source implementations
pub mod banxico;
pub mod diario_oficial;
pub mod fixer;

// Re-exports
pub use traits::RateSource;
