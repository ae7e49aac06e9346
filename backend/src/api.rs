//! Public API surface of the dashboard library.
//!
//! Re-exports the upstream wire types and defines the value records shared
//! by the normalizer, the smoothing transform and the view models.

pub use crate::routes::aggregates::AggregatesResponse;
pub use crate::routes::aggregates::ProgramLine;
pub use crate::routes::aggregates::Topline;
pub use crate::routes::competition::CompetitionResponse;
pub use crate::routes::competition::StationShare;
pub use crate::routes::days::DaysResponse;
pub use crate::routes::history::HistoryPoint;
pub use crate::routes::history::ProgramHistoryResponse;
pub use crate::routes::metrics::MetricsResponse;
pub use crate::routes::metrics::MinutePoint;
pub use crate::routes::programs::ProgramRecord;
pub use crate::routes::programs::ProgramsResponse;
pub use crate::routes::trends::ProgramTrendResponse;
pub use crate::routes::trends::TrendItem;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A labelled sample of a series.
///
/// `label` is the timestamp text (a date or an `HH:MM` time of day) and is
/// always present. `value` is `None` when the API reported no data, which is
/// distinct from zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub label: String,
    pub value: Option<f64>,
}

impl MetricPoint {
    pub fn new(label: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Which break-average figure to prefer when the primary AMR is missing.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AvgMode {
    #[default]
    #[serde(alias = "noBreaks")]
    ExcludingBreaks,
    #[serde(alias = "withBreaks")]
    IncludingBreaks,
}

impl AvgMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvgMode::ExcludingBreaks => "excludingBreaks",
            AvgMode::IncludingBreaks => "includingBreaks",
        }
    }
}

impl fmt::Display for AvgMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AvgMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "excludingBreaks" | "noBreaks" | "excl" => Ok(AvgMode::ExcludingBreaks),
            "includingBreaks" | "withBreaks" | "incl" => Ok(AvgMode::IncludingBreaks),
            other => Err(format!(
                "Unknown average mode '{}'. Use excludingBreaks or includingBreaks.",
                other
            )),
        }
    }
}

/// One chart position: the raw value next to its smoothed companion.
///
/// Missing values serialize as `null` so the x-axis keeps every position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRecord {
    pub label: String,
    pub raw_value: Option<f64>,
    pub smoothed_value: Option<f64>,
}
