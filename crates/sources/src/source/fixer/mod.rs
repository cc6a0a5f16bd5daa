//! Fixer exchange-rate source.
//!
//! The free tier cannot convert directly between two non-base currencies,
//! so both MXN and USD are requested against the fixed EUR base and the
//! MXN/USD rate is derived as `rates[MXN] / rates[USD]`.
//!
//! API documentation: https://fixer.io/documentation

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::errors::SourceError;
use crate::models::RateQuote;
use crate::source::RateSource;

const BASE_URL: &str = "http://data.fixer.io/api/latest";
const SOURCE_ID: &str = "fixer";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Response from the /latest endpoint.
///
/// `success: false` arrives with a 200 status when the access key is bad or
/// the quota is exhausted, so it has to be checked separately.
#[derive(Debug, Deserialize)]
struct FixerResponse {
    success: bool,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    rates: HashMap<String, f64>,
    // Note: timestamp and base exist in the payload but are not used
}

/// Fixer source deriving MXN/USD through the EUR base.
pub struct FixerSource {
    client: Client,
    api_key: String,
}

impl FixerSource {
    /// Create a new Fixer source with the given access key.
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, api_key }
    }
}

/// Derive the MXN/USD cross rate from an EUR-based payload.
fn quote_from_payload(payload: FixerResponse) -> Result<RateQuote, SourceError> {
    if !payload.success {
        return Err(SourceError::Shape {
            source: SOURCE_ID,
            message: "API reported success=false".to_string(),
        });
    }

    let mxn = rate_for(&payload, "MXN")?;
    let usd = rate_for(&payload, "USD")?;
    if usd == 0.0 {
        return Err(SourceError::Rate {
            source: SOURCE_ID,
            value: "USD=0".to_string(),
        });
    }

    let date = payload.date.ok_or_else(|| SourceError::Shape {
        source: SOURCE_ID,
        message: "missing date".to_string(),
    })?;

    Ok(RateQuote::new(mxn / usd, date))
}

fn rate_for(payload: &FixerResponse, symbol: &str) -> Result<f64, SourceError> {
    payload
        .rates
        .get(symbol)
        .copied()
        .ok_or_else(|| SourceError::Shape {
            source: SOURCE_ID,
            message: format!("missing {} rate", symbol),
        })
}

#[async_trait]
impl RateSource for FixerSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn latest_rate(&self) -> Result<RateQuote, SourceError> {
        let url = format!("{}?access_key={}&symbols=MXN,USD", BASE_URL, self.api_key);
        debug!("Fetching latest {} rates", SOURCE_ID);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status {
                source: SOURCE_ID,
                status: response.status(),
            });
        }

        let payload: FixerResponse = response.json().await?;
        quote_from_payload(payload)
    }
}
