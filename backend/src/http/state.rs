//! Application state for the HTTP server.

use std::sync::Arc;

use crate::client::AudienceApi;
use crate::config::TrendSettings;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Upstream analytics API
    pub api: Arc<dyn AudienceApi>,
    /// Upstream base URL, reported by the health check
    pub upstream: String,
    /// Defaults for trend queries
    pub trend: TrendSettings,
}

impl AppState {
    /// Create a new application state with the given API source.
    pub fn new(api: Arc<dyn AudienceApi>, upstream: impl Into<String>) -> Self {
        Self {
            api,
            upstream: upstream.into(),
            trend: TrendSettings::default(),
        }
    }

    pub fn with_trend_settings(mut self, trend: TrendSettings) -> Self {
        self.trend = trend;
        self
    }
}
