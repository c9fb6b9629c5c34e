//! PriceClient - fetches the current Bitcoin price over HTTP.

use std::time::Duration;

use serde::Deserialize;

use crate::config::PriceConfig;

/// Default price endpoint (CoinDesk Bitcoin Price Index).
pub const DEFAULT_PRICE_URL: &str = "https://api.coindesk.com/v1/bpi/currentprice.json";

/// Environment variable that overrides the price endpoint.
pub const PRICE_URL_ENV: &str = "BITCOIN_PRICE_URL";

/// Default timeout for the whole request (10 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout (5 seconds).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Response body of the price endpoint. Only `bpi.USD.rate_float` is read.
#[derive(Debug, Deserialize)]
struct PriceResponse {
    bpi: PriceIndex,
}

#[derive(Debug, Deserialize)]
struct PriceIndex {
    #[serde(rename = "USD")]
    usd: CurrencyRate,
}

#[derive(Debug, Deserialize)]
struct CurrencyRate {
    rate_float: RateValue,
}

/// `rate_float` is normally a JSON number, but a numeric string is accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RateValue {
    Number(f64),
    Text(String),
}

impl RateValue {
    fn to_f64(&self) -> Result<f64, PriceError> {
        match self {
            RateValue::Number(rate) => Ok(*rate),
            RateValue::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| PriceError::Parse(format!("rate_float is not a number: {:?}", text))),
        }
    }
}

/// Client for the price endpoint. Makes exactly one request per fetch.
pub struct PriceClient {
    url: String,
    timeout: Duration,
    http_client: reqwest::Client,
}

impl PriceClient {
    /// Create a client for the default endpoint with default timeouts.
    pub fn new() -> Result<Self, PriceError> {
        Self::with_url(DEFAULT_PRICE_URL.to_string())
    }

    /// Create a client for a custom endpoint.
    pub fn with_url(url: String) -> Result<Self, PriceError> {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    /// Create a client for a custom endpoint with a custom request timeout.
    pub fn with_timeout(url: String, timeout: Duration) -> Result<Self, PriceError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT.min(timeout))
            .build()?;

        Ok(Self {
            url,
            timeout,
            http_client,
        })
    }

    /// Create a client from the `[price]` config section.
    ///
    /// The endpoint is taken from `BITCOIN_PRICE_URL` if set, then the config
    /// file, then [`DEFAULT_PRICE_URL`].
    pub fn from_config(config: &PriceConfig) -> Result<Self, PriceError> {
        let url = std::env::var(PRICE_URL_ENV)
            .ok()
            .filter(|url| !url.is_empty())
            .or_else(|| config.url.clone())
            .unwrap_or_else(|| DEFAULT_PRICE_URL.to_string());
        let timeout = config.timeout().unwrap_or(DEFAULT_TIMEOUT);
        Self::with_timeout(url, timeout)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch the current USD price of one Bitcoin.
    ///
    /// # Errors
    ///
    /// - [`PriceError::Fetch`] if the request fails, times out, or returns a
    ///   non-success status.
    /// - [`PriceError::Parse`] if the body is not JSON or lacks a numeric
    ///   `bpi.USD.rate_float`.
    pub async fn fetch_price(&self) -> Result<f64, PriceError> {
        log::debug!("Fetching price from {}", self.url);

        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        let price = parse_price(&body)?;
        log::info!("Current price: {}", price);
        Ok(price)
    }
}

/// Extract `bpi.USD.rate_float` from a response body.
fn parse_price(body: &str) -> Result<f64, PriceError> {
    let response: PriceResponse =
        serde_json::from_str(body).map_err(|e| PriceError::Parse(e.to_string()))?;
    let price = response.bpi.usd.rate_float.to_f64()?;
    if !price.is_finite() {
        return Err(PriceError::Parse(format!("rate is not finite: {}", price)));
    }
    Ok(price)
}

/// Errors that can occur while fetching the price.
#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    #[error("Error fetching Bitcoin price: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Error parsing Bitcoin price data: {0}")]
    Parse(String),
}
