//! Program trend views: daily trend, broadcast history and program detail.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::api::{AvgMode, ChartRecord, ProgramRecord};
use crate::client::AudienceApi;
use crate::config::DEFAULT_TREND_DAYS;

use super::error::{require_selector, ServiceError, ServiceResult};
use super::normalize::{history_points, trend_points};
use super::smoothing::DEFAULT_WINDOW;
use super::view_model::smooth_and_assemble;
use super::view_state::ViewData;

/// Parameters of a program trend view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendRequest {
    pub slug: String,
    pub days: u32,
    pub mode: AvgMode,
    pub window: usize,
}

impl TrendRequest {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            days: DEFAULT_TREND_DAYS,
            mode: AvgMode::default(),
            window: DEFAULT_WINDOW,
        }
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub fn with_mode(mut self, mode: AvgMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }
}

/// Summary cards shown next to a trend chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Last raw value with data.
    pub latest: Option<f64>,
    /// Smoothed value at the last position.
    pub latest_smoothed: Option<f64>,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub valid_points: usize,
    pub total_points: usize,
}

/// Daily trend of one program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramTrend {
    pub slug: String,
    pub days: u32,
    pub mode: AvgMode,
    pub window: usize,
    pub points: Vec<ChartRecord>,
    pub summary: TrendSummary,
}

impl ViewData for ProgramTrend {
    fn has_data(&self) -> bool {
        self.summary.valid_points > 0
    }
}

/// AMR of past broadcasts of one program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramHistory {
    pub slug: String,
    pub window: usize,
    pub points: Vec<ChartRecord>,
    pub summary: TrendSummary,
}

impl ViewData for ProgramHistory {
    fn has_data(&self) -> bool {
        self.summary.valid_points > 0
    }
}

impl ViewData for ProgramRecord {
    fn has_data(&self) -> bool {
        true
    }
}

/// Fetch, normalize, smooth and assemble the daily trend of a program.
#[instrument(skip(api), fields(slug = %request.slug))]
pub async fn load_program_trend(
    api: &dyn AudienceApi,
    request: &TrendRequest,
) -> ServiceResult<ProgramTrend> {
    let slug = require_selector("slug", &request.slug)?;
    if request.window == 0 {
        return Err(ServiceError::InvalidWindow {
            window: request.window,
        });
    }

    let response = api.program_trend(slug, request.days).await?;
    debug!(items = response.items.len(), "trend fetched");

    let raw = trend_points(&response.items, request.mode);
    let points = smooth_and_assemble(&raw, request.window)?;
    let summary = summarize(&points);

    Ok(ProgramTrend {
        slug: response.slug,
        days: response.days,
        mode: request.mode,
        window: request.window,
        points,
        summary,
    })
}

/// Broadcast history of a program with its moving average.
#[instrument(skip(api))]
pub async fn load_program_history(
    api: &dyn AudienceApi,
    slug: &str,
    window: usize,
) -> ServiceResult<ProgramHistory> {
    let slug = require_selector("slug", slug)?;
    if window == 0 {
        return Err(ServiceError::InvalidWindow { window });
    }

    let response = api.program_history(slug).await?;
    let points = smooth_and_assemble(&history_points(&response.series), window)?;
    let summary = summarize(&points);

    Ok(ProgramHistory {
        slug: slug.to_string(),
        window,
        points,
        summary,
    })
}

/// Look a program up in the line-up of `date`.
pub async fn find_program(
    api: &dyn AudienceApi,
    date: &str,
    slug: &str,
) -> ServiceResult<ProgramRecord> {
    let date = require_selector("date", date)?;
    let slug = require_selector("slug", slug)?;

    let response = api.programs(date).await?;
    response
        .programs
        .into_iter()
        .find(|p| p.slug == slug)
        .ok_or_else(|| ServiceError::NotFound(format!("program '{}' on {}", slug, date)))
}

/// Summary over the raw values of assembled records.
pub fn summarize(points: &[ChartRecord]) -> TrendSummary {
    let raw: Vec<f64> = points.iter().filter_map(|p| p.raw_value).collect();
    if raw.is_empty() {
        return TrendSummary {
            latest_smoothed: points.last().and_then(|p| p.smoothed_value),
            total_points: points.len(),
            ..TrendSummary::default()
        };
    }

    let min = raw.iter().copied().fold(f64::INFINITY, f64::min);
    let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = raw.iter().sum::<f64>() / raw.len() as f64;

    TrendSummary {
        latest: raw.last().copied(),
        latest_smoothed: points.last().and_then(|p| p.smoothed_value),
        mean: Some(mean),
        min: Some(min),
        max: Some(max),
        valid_points: raw.len(),
        total_points: points.len(),
    }
}
