//! Day views: the list of measurement days and the overview of one day.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::api::{ChartRecord, ProgramLine, Topline};
use crate::client::AudienceApi;

use super::error::{require_selector, ServiceError, ServiceResult};
use super::normalize::minute_points;
use super::view_model::smooth_and_assemble;
use super::view_state::ViewData;

/// Available days and the defaults of the views keyed by day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySelection {
    pub days: Vec<String>,
    /// The first listed day, as the day view opens on it.
    pub selected: Option<String>,
    /// The last listed day, as the competition view opens on it.
    pub competition_default: Option<String>,
}

impl ViewData for DaySelection {
    fn has_data(&self) -> bool {
        !self.days.is_empty()
    }
}

/// One row of the day's program table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRow {
    /// Rank by AMR as reported, or the 1-based table position.
    pub rank: u32,
    pub title: String,
    pub slug: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub duration_min: Option<f64>,
    pub amr: Option<f64>,
    pub shr_pct: Option<f64>,
}

/// Everything the day view shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOverview {
    pub date: String,
    pub topline: Topline,
    /// Intraday audience with its moving average.
    pub minutes: Vec<ChartRecord>,
    pub programs: Vec<ProgramRow>,
    pub window: usize,
}

impl ViewData for DayOverview {
    fn has_data(&self) -> bool {
        !self.minutes.is_empty() || !self.programs.is_empty()
    }
}

pub async fn load_days(api: &dyn AudienceApi) -> ServiceResult<DaySelection> {
    let days = api.list_days().await?;
    let selected = days.first().cloned();
    let competition_default = days.last().cloned();
    Ok(DaySelection {
        days,
        selected,
        competition_default,
    })
}

/// Fetch aggregates and intraday metrics for `date` concurrently and build
/// the overview.
#[instrument(skip(api))]
pub async fn load_day_overview(
    api: &dyn AudienceApi,
    date: &str,
    window: usize,
) -> ServiceResult<DayOverview> {
    let date = require_selector("date", date)?;
    if window == 0 {
        return Err(ServiceError::InvalidWindow { window });
    }

    let (aggregates, metrics) = tokio::try_join!(api.aggregates(date), api.metrics(date))?;
    debug!(
        programs = aggregates.program_line.len(),
        points = metrics.points.len(),
        "day data fetched"
    );

    let minutes = smooth_and_assemble(&minute_points(&metrics.points), window)?;
    let programs = program_rows(&aggregates.program_line);

    Ok(DayOverview {
        date: aggregates.date,
        topline: aggregates.topline,
        minutes,
        programs,
        window,
    })
}

/// Program table rows in API order.
pub fn program_rows(lines: &[ProgramLine]) -> Vec<ProgramRow> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| ProgramRow {
            rank: line.rank_amr.unwrap_or(i as u32 + 1),
            title: line.title.clone(),
            slug: line.slug.clone(),
            start: line.start.clone(),
            end: line.end.clone(),
            duration_min: line.duration_min,
            amr: line.amr,
            shr_pct: line.shr_pct,
        })
        .collect()
}
