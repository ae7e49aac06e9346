use serde::{Deserialize, Serialize};

// =========================================================
// Daily aggregates
// =========================================================

/// Path of the daily aggregates endpoint (`?date=`).
pub const GET_AGGREGATES: &str = "/aggregates";

/// Channel-wide figures for one measurement day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topline {
    pub average_viewers: f64,
    pub peak_viewers: f64,
    pub points_minutes: f64,
    /// Share as a fraction (0.125 = 12.5%).
    #[serde(default)]
    pub shr_pct: Option<f64>,
}

/// One program of the day's line-up, after break merging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramLine {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub duration_min: Option<f64>,
    #[serde(default)]
    pub amr: Option<f64>,
    #[serde(default)]
    pub shr_pct: Option<f64>,
    #[serde(default, deserialize_with = "super::numbers::opt_u32_from_number")]
    pub rank_amr: Option<u32>,
}

/// `GET /aggregates?date=` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatesResponse {
    pub date: String,
    pub topline: Topline,
    #[serde(default)]
    pub program_line: Vec<ProgramLine>,
}
