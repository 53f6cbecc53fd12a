use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::market::record::{FeedResponse, RawPriceRecord};

pub const API_KEY_ENV: &str = "KRISHI_PRICE_API_KEY";
pub const ENDPOINT_ENV: &str = "KRISHI_PRICE_ENDPOINT";

#[derive(Debug, Error)]
pub enum MarketError {
    #[error("A state must be selected before fetching prices")]
    MissingState,
    #[error("Price feed API key is not configured (KRISHI_PRICE_API_KEY)")]
    MissingApiKey,
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Price feed returned HTTP {0}")]
    Status(u16),
    #[error("Malformed price feed body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Where and how to query the mandi price feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFeedConfig {
    pub endpoint: String,
    pub resource_id: String,
    pub api_key: String,
    pub limit: u32,
}

impl PriceFeedConfig {
    /// The data.gov.in daily commodity price resource.
    pub fn data_gov_in(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: "https://api.data.gov.in/resource".into(),
            resource_id: "9ef84268-d588-465a-a308-a864a43d0070".into(),
            api_key: api_key.into(),
            limit: 500,
        }
    }

    /// `data_gov_in` with the key from the environment; the endpoint may be
    /// overridden as well.
    pub fn from_env() -> Result<Self, MarketError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(MarketError::MissingApiKey)?;

        let mut config = Self::data_gov_in(api_key);
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                config.endpoint = endpoint.trim_end_matches('/').to_string();
            }
        }
        Ok(config)
    }

    pub fn request_url(&self, query: &PriceQuery) -> String {
        let mut url = format!(
            "{}/{}?api-key={}&format=json&limit={}&filters[state]={}",
            self.endpoint,
            self.resource_id,
            urlencoding::encode(&self.api_key),
            self.limit,
            urlencoding::encode(&query.state),
        );
        if let Some(district) = &query.district {
            url.push_str("&filters[district]=");
            url.push_str(&urlencoding::encode(district));
        }
        url
    }
}

/// State is required; district narrows the query when present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceQuery {
    pub state: String,
    pub district: Option<String>,
}

impl PriceQuery {
    /// An empty district means the whole state.
    pub fn new(state: impl Into<String>, district: &str) -> Self {
        Self {
            state: state.into(),
            district: (!district.is_empty()).then(|| district.to_string()),
        }
    }

    pub fn is_ready(&self) -> bool {
        !self.state.is_empty()
    }
}

#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Raw records for `query`. Cleaning happens in the board.
    async fn fetch(&self, query: &PriceQuery) -> Result<Vec<RawPriceRecord>, MarketError>;
}

/// reqwest-backed client for the data.gov.in feed. No retries, no timeouts
/// beyond the client defaults.
pub struct DataGovInFeed {
    client: Client,
    config: PriceFeedConfig,
}

impl DataGovInFeed {
    pub fn new(config: PriceFeedConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn with_client(client: Client, config: PriceFeedConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &PriceFeedConfig {
        &self.config
    }
}

#[async_trait]
impl PriceSource for DataGovInFeed {
    async fn fetch(&self, query: &PriceQuery) -> Result<Vec<RawPriceRecord>, MarketError> {
        if !query.is_ready() {
            return Err(MarketError::MissingState);
        }

        debug!(state = %query.state, district = ?query.district, "requesting mandi prices");

        let response = self.client.get(self.config.request_url(query)).send().await?;

        let status = response.status();
        let body = response.text().await?;
        decode_response(status, &body)
    }
}

/// Map a feed response to raw records: non-2xx is a status error, a body
/// without a `records` array is a decode error.
pub fn decode_response(
    status: StatusCode,
    body: &str,
) -> Result<Vec<RawPriceRecord>, MarketError> {
    if !status.is_success() {
        return Err(MarketError::Status(status.as_u16()));
    }

    let parsed: FeedResponse = serde_json::from_str(body)?;

    debug!(records = parsed.records.len(), "price feed responded");
    Ok(parsed.records)
}
