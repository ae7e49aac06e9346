//! Data Transfer Objects for the HTTP API.
//!
//! View models are re-exported from the service layer since they already
//! derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

use crate::api::AvgMode;

pub use crate::api::{ChartRecord, ProgramRecord};
pub use crate::services::{
    CompetitionView, DayOverview, DaySelection, ProgramHistory, ProgramRow, ProgramTrend,
    StationRow, TrendSummary,
};

/// Query parameters for views with a moving-average companion series.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WindowQuery {
    /// Moving-average window (default: configured trend window)
    #[serde(default)]
    pub window: Option<usize>,
}

/// Query parameters for the program trend endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrendQuery {
    /// Number of days requested upstream
    #[serde(default)]
    pub days: Option<u32>,
    /// Break-average fallback mode
    #[serde(default)]
    pub mode: Option<AvgMode>,
    /// Moving-average window
    #[serde(default)]
    pub window: Option<usize>,
}

/// Query parameters for endpoints keyed by day.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DateQuery {
    #[serde(default)]
    pub date: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Upstream analytics API base URL
    pub upstream: String,
}
