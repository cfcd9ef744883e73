// Backend boundary: the `StatsBackend` seam, its HTTP implementation, and the
// wire records that are adapted into domain types.

pub mod client;
pub mod wire;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{HealthStatus, PlayerStats, PlayerSummary, PredictionRequest, PredictionResult};

pub use client::HttpBackend;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (refused, DNS, reset, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned status {status}")]
    Status { status: u16 },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("invalid backend url {url}: {message}")]
    InvalidUrl { url: String, message: String },
}

/// The three endpoints the dashboard flows call, plus the root health check.
///
/// Object safe so the controller can hold an `Arc<dyn StatsBackend>` and
/// tests can substitute a scripted backend.
#[async_trait]
pub trait StatsBackend: Send + Sync {
    async fn search_players(&self, query: &str) -> Result<Vec<PlayerSummary>, ApiError>;

    async fn player_stats(&self, player_id: i64) -> Result<PlayerStats, ApiError>;

    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ApiError>;

    async fn health(&self) -> Result<HealthStatus, ApiError>;
}
