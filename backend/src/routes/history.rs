use serde::{Deserialize, Serialize};

// =========================================================
// Program broadcast history
// =========================================================

/// Path of the program history endpoint (`?slug=`).
pub const GET_PROGRAM_HISTORY: &str = "/program-history";

/// AMR of one past broadcast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: String,
    #[serde(default)]
    pub amr: Option<f64>,
}

/// `GET /program-history?slug=` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramHistoryResponse {
    #[serde(default)]
    pub series: Vec<HistoryPoint>,
}
