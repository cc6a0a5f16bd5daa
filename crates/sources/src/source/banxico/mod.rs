//! Banxico SIE time-series source.
//!
//! Reads the most recent observation of series SF43718 (pesos per US dollar,
//! FIX) through the "oportuno" endpoint. The token travels as a query
//! parameter; a blank token produces a request Banxico rejects, which shows
//! up downstream as the unavailable quote.
//!
//! API documentation: https://www.banxico.org.mx/SieAPIRest/

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::errors::SourceError;
use crate::models::RateQuote;
use crate::source::RateSource;

const BASE_URL: &str =
    "https://www.banxico.org.mx/SieAPIRest/service/v1/series/SF43718/datos/oportuno";
const SOURCE_ID: &str = "banxico";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Response envelope from the SIE API
#[derive(Debug, Deserialize)]
struct SieResponse {
    bmx: SieContainer,
}

#[derive(Debug, Deserialize)]
struct SieContainer {
    series: Vec<SieSeries>,
}

#[derive(Debug, Deserialize)]
struct SieSeries {
    #[serde(default)]
    datos: Vec<SieObservation>,
    // Note: idSerie and titulo exist in the payload but are not used
}

/// A single dated observation. `dato` is a string in the API: a figure like
/// "20.20", or a placeholder like "N/E" when the bank published none.
#[derive(Debug, Deserialize)]
struct SieObservation {
    fecha: String,
    dato: String,
}

/// Banxico SIE source for the MXN/USD series.
pub struct BanxicoSource {
    client: Client,
    token: String,
}

impl BanxicoSource {
    /// Create a new Banxico source with the given SIE token.
    pub fn new(token: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, token }
    }
}

/// Pull the newest observation out of a SIE payload.
fn quote_from_payload(payload: SieResponse) -> Result<RateQuote, SourceError> {
    let observation = payload
        .bmx
        .series
        .into_iter()
        .next()
        .and_then(|series| series.datos.into_iter().next())
        .ok_or_else(|| SourceError::Shape {
            source: SOURCE_ID,
            message: "series carries no observations".to_string(),
        })?;

    let value = observation
        .dato
        .trim()
        .parse::<f64>()
        .map_err(|_| SourceError::Rate {
            source: SOURCE_ID,
            value: observation.dato.clone(),
        })?;

    Ok(RateQuote::new(value, observation.fecha))
}

#[async_trait]
impl RateSource for BanxicoSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn latest_rate(&self) -> Result<RateQuote, SourceError> {
        let url = format!("{}?token={}", BASE_URL, self.token);
        debug!("Fetching latest {} observation", SOURCE_ID);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status {
                source: SOURCE_ID,
                status: response.status(),
            });
        }

        let payload: SieResponse = response.json().await?;
        quote_from_payload(payload)
    }
}
