//! Access to the upstream audience analytics API.
//!
//! The [`AudienceApi`] trait is the seam between the view services and the
//! transport. [`ApiClient`] talks HTTP; [`InMemoryApi`] serves canned
//! responses for tests and demos.

pub mod error;
pub mod http;
#[cfg(feature = "memory-api")]
pub mod memory;

pub use error::{ClientError, ClientResult};
pub use http::ApiClient;
#[cfg(feature = "memory-api")]
pub use memory::InMemoryApi;

use async_trait::async_trait;

use crate::api::{
    AggregatesResponse, CompetitionResponse, MetricsResponse, ProgramHistoryResponse,
    ProgramTrendResponse, ProgramsResponse,
};

/// Read-only operations of the analytics API, one per endpoint.
#[async_trait]
pub trait AudienceApi: Send + Sync {
    /// Measurement days. Falls back to the alternate listing path once.
    async fn list_days(&self) -> ClientResult<Vec<String>>;

    async fn aggregates(&self, date: &str) -> ClientResult<AggregatesResponse>;

    async fn metrics(&self, date: &str) -> ClientResult<MetricsResponse>;

    async fn programs(&self, date: &str) -> ClientResult<ProgramsResponse>;

    async fn program_history(&self, slug: &str) -> ClientResult<ProgramHistoryResponse>;

    async fn program_trend(&self, slug: &str, days: u32) -> ClientResult<ProgramTrendResponse>;

    async fn competition(&self, date: &str) -> ClientResult<CompetitionResponse>;
}
