//! Environment-driven server configuration.

/// Runtime configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,
    /// Token for the Banxico SIE API.
    pub banxico_token: String,
    /// Access key for the Fixer API.
    pub fixer_api_key: String,
}

impl Config {
    /// Read the configuration from the process environment.
    ///
    /// Missing credentials are not rejected here: a blank token produces
    /// requests the upstream refuses, which the aggregator reports as an
    /// unavailable source rather than a startup error.
    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("CAMBIO_LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            banxico_token: std::env::var("BANXICO_TOKEN").unwrap_or_default(),
            fixer_api_key: std::env::var("FIXER_API_KEY").unwrap_or_default(),
        }
    }
}
