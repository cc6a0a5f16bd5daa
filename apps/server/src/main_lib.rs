use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use cambio_sources::SourceAggregator;

use crate::config::Config;

/// Shared application state handed to every request handler.
pub struct AppState {
    pub aggregator: Arc<SourceAggregator>,
}

pub fn init_tracing() {
    let log_format = std::env::var("CAMBIO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let aggregator = SourceAggregator::with_default_sources(
        config.banxico_token.clone(),
        config.fixer_api_key.clone(),
    );
    Arc::new(AppState {
        aggregator: Arc::new(aggregator),
    })
}
