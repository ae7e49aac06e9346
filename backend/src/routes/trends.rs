use serde::{Deserialize, Serialize};

// =========================================================
// Program daily trend
// =========================================================

/// Path of the program trend endpoint (`?slug=&days=`).
pub const GET_PROGRAM_TREND: &str = "/program-trend";

/// Daily record for one program.
///
/// The three metric fields are alternatives: `amr` is authoritative when
/// present, the break averages are fallbacks. All three missing means the
/// program has no data for that day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendItem {
    pub date: String,
    #[serde(default)]
    pub amr: Option<f64>,
    #[serde(default)]
    pub avg_excl_breaks: Option<f64>,
    #[serde(default)]
    pub avg_incl_breaks: Option<f64>,
}

/// `GET /program-trend?slug=&days=` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramTrendResponse {
    pub slug: String,
    #[serde(deserialize_with = "super::numbers::u32_from_number")]
    pub days: u32,
    #[serde(default)]
    pub items: Vec<TrendItem>,
}
