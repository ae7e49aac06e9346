use serde::{Deserialize, Serialize};

// =========================================================
// Competitor share comparison
// =========================================================

/// Path of the competition endpoint (`?date=`).
pub const GET_COMPETITION: &str = "/competition";

/// Older path of the same data, tried when [`GET_COMPETITION`] is not found.
pub const GET_COMPARE: &str = "/compare";

/// Share of one station on the given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationShare {
    pub name: String,
    #[serde(default)]
    pub shr_pct: Option<f64>,
    #[serde(default)]
    pub amr: Option<f64>,
}

/// `GET /competition?date=` response. Older deployments list the entries
/// under `stations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionResponse {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, alias = "stations")]
    pub channels: Vec<StationShare>,
}
