use serde::{Deserialize, Serialize};

// =========================================================
// Intraday (5-minute) metrics
// =========================================================

/// Path of the intraday metrics endpoint (`?date=`).
pub const GET_METRICS: &str = "/metrics";

/// One intraday sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinutePoint {
    /// Timestamp, RFC 3339.
    pub t: String,
    #[serde(default)]
    pub amr: Option<f64>,
}

/// `GET /metrics?date=` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsResponse {
    #[serde(default)]
    pub points: Vec<MinutePoint>,
}
