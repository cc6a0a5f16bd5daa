use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use cambio_sources::ExchangeReport;

use crate::main_lib::AppState;

/// Wire envelope for the aggregated report.
#[derive(Serialize)]
struct RatesResponse {
    rates: ExchangeReport,
}

/// Return the current MXN/USD rate from every configured source.
///
/// Always answers 200: a source that could not be read shows up in-band as
/// the zero-value quote with a null date, never as an error status.
async fn get_exchange_rate(State(state): State<Arc<AppState>>) -> Json<RatesResponse> {
    let rates = state.aggregator.collect().await;
    Json(RatesResponse { rates })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/exchange", get(get_exchange_rate))
}
