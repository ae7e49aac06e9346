//! HTTP request handlers.
//!
//! Each handler extracts its selector and query, runs the matching view
//! service against the upstream API and returns the view model as JSON.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::*;
use super::error::AppError;
use super::state::AppState;
use crate::services::{self, TrendRequest};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        upstream: state.upstream.clone(),
    })
}

// =============================================================================
// Day Views
// =============================================================================

/// GET /v1/days
pub async fn list_days(State(state): State<AppState>) -> HandlerResult<DaySelection> {
    let selection = services::load_days(state.api.as_ref()).await?;
    Ok(Json(selection))
}

/// GET /v1/days/{date}/overview
pub async fn get_day_overview(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Query(query): Query<WindowQuery>,
) -> HandlerResult<DayOverview> {
    let window = query.window.unwrap_or(state.trend.window);
    let overview = services::load_day_overview(state.api.as_ref(), &date, window).await?;
    Ok(Json(overview))
}

/// GET /v1/competition?date=
///
/// Without `date`, the last listed day is used.
pub async fn get_competition(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> HandlerResult<CompetitionView> {
    let date = match query.date {
        Some(date) => date,
        None => services::load_days(state.api.as_ref())
            .await?
            .competition_default
            .ok_or_else(|| AppError::BadRequest("No measurement days available".to_string()))?,
    };
    let view = services::load_competition(state.api.as_ref(), &date).await?;
    Ok(Json(view))
}

// =============================================================================
// Program Views
// =============================================================================

/// GET /v1/programs/{slug}/trend
pub async fn get_program_trend(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<TrendQuery>,
) -> HandlerResult<ProgramTrend> {
    let days = query.days.unwrap_or(state.trend.days);
    if days == 0 {
        return Err(AppError::BadRequest("'days' must be at least 1".to_string()));
    }

    let request = TrendRequest::new(slug)
        .with_days(days)
        .with_mode(query.mode.unwrap_or(state.trend.mode))
        .with_window(query.window.unwrap_or(state.trend.window));

    let trend = services::load_program_trend(state.api.as_ref(), &request).await?;
    Ok(Json(trend))
}

/// GET /v1/programs/{slug}/history
pub async fn get_program_history(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<WindowQuery>,
) -> HandlerResult<ProgramHistory> {
    let window = query.window.unwrap_or(state.trend.window);
    let history = services::load_program_history(state.api.as_ref(), &slug, window).await?;
    Ok(Json(history))
}

/// GET /v1/programs/{slug}?date=
pub async fn get_program(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<DateQuery>,
) -> HandlerResult<ProgramRecord> {
    let date = query
        .date
        .ok_or_else(|| AppError::BadRequest("Query parameter 'date' is required".to_string()))?;
    let program = services::find_program(state.api.as_ref(), &date, &slug).await?;
    Ok(Json(program))
}
