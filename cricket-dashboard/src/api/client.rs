// HTTP implementation of `StatsBackend` on reqwest.
//
// Every endpoint path is appended to the configured base URL. Response bodies
// are read as text and decoded with serde_json so that a malformed body is
// reported as `ApiError::Decode` rather than as a transport failure.

use async_trait::async_trait;
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::wire::{HealthRecord, PlayerRecord, PredictionRecord, StatsRecord};
use super::{ApiError, StatsBackend};
use crate::config::Config;
use crate::model::{HealthStatus, PlayerStats, PlayerSummary, PredictionRequest, PredictionResult};

// ---------------------------------------------------------------------------
// HttpBackend
// ---------------------------------------------------------------------------

pub struct HttpBackend {
    http: reqwest::Client,
    /// Base URL without a trailing slash.
    base_url: String,
    /// Server root (`/` on the base URL's host), where the health endpoint lives.
    health_url: Url,
    search_limit: Option<u32>,
}

impl HttpBackend {
    /// Create a backend for `base_url`, e.g. `http://localhost:8000/api`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&trimmed).map_err(|e| ApiError::InvalidUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        let health_url = parsed.join("/").map_err(|e| ApiError::InvalidUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: trimmed,
            health_url,
            search_limit: None,
        })
    }

    /// Build a backend from the `[api]` and `[search]` config sections.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let mut backend = Self::new(&config.api.base_url)?;
        backend.search_limit = config.search.limit;
        Ok(backend)
    }

    pub fn with_search_limit(mut self, limit: Option<u32>) -> Self {
        self.search_limit = limit;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn health_url(&self) -> &Url {
        &self.health_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl StatsBackend for HttpBackend {
    async fn search_players(&self, query: &str) -> Result<Vec<PlayerSummary>, ApiError> {
        let mut request = self
            .http
            .get(self.endpoint("/players"))
            .query(&[("search", query)]);
        if let Some(limit) = self.search_limit {
            request = request.query(&[("limit", limit)]);
        }

        let records: Vec<PlayerRecord> = decode(request.send().await?).await?;
        debug!(query, results = records.len(), "player search complete");
        Ok(records.into_iter().map(PlayerSummary::from).collect())
    }

    async fn player_stats(&self, player_id: i64) -> Result<PlayerStats, ApiError> {
        let url = self.endpoint(&format!("/players/{player_id}/stats"));
        let record: StatsRecord = decode(self.http.get(url).send().await?).await?;
        Ok(record.into())
    }

    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/predict"))
            .json(request)
            .send()
            .await?;
        let record: PredictionRecord = decode(response).await?;
        Ok(record.into())
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let response = self.http.get(self.health_url.clone()).send().await?;
        let record: HealthRecord = decode(response).await?;
        Ok(record.into())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject non-success statuses, then decode the body as `T`.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
        });
    }
    let body = response.text().await?;
    parse_body(&body)
}

pub(crate) fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
