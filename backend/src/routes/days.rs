use serde::{Deserialize, Serialize};

// =========================================================
// Day listing
// =========================================================

/// Path of the day listing endpoint.
pub const LIST_DAYS: &str = "/days";

/// Alternate path tried once when [`LIST_DAYS`] fails.
pub const LIST_DAYS_FALLBACK: &str = "/";

/// `GET /days` response: measurement days in the order the API reports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaysResponse {
    #[serde(default)]
    pub days: Vec<String>,
}
