//! In-memory [`AudienceApi`] with canned responses.
//!
//! Unknown keys answer like a missing upstream resource (`RequestFailed`
//! with status 404); [`InMemoryApi::fail`] forces a status for a whole
//! endpoint.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

use super::error::{ClientError, ClientResult};
use super::AudienceApi;
use crate::api::{
    AggregatesResponse, CompetitionResponse, MetricsResponse, ProgramHistoryResponse,
    ProgramTrendResponse, ProgramsResponse,
};
use crate::routes::{aggregates, competition, days, history, metrics, programs, trends};

#[derive(Debug, Default)]
pub struct InMemoryApi {
    days: Option<Vec<String>>,
    aggregates: HashMap<String, AggregatesResponse>,
    metrics: HashMap<String, MetricsResponse>,
    programs: HashMap<String, ProgramsResponse>,
    history: HashMap<String, ProgramHistoryResponse>,
    trends: HashMap<String, ProgramTrendResponse>,
    competition: HashMap<String, CompetitionResponse>,
    failures: HashMap<&'static str, u16>,
    calls: Mutex<Vec<String>>,
}

impl InMemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.days = Some(days.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_aggregates(mut self, response: AggregatesResponse) -> Self {
        self.aggregates.insert(response.date.clone(), response);
        self
    }

    pub fn with_metrics(mut self, date: impl Into<String>, response: MetricsResponse) -> Self {
        self.metrics.insert(date.into(), response);
        self
    }

    pub fn with_programs(mut self, date: impl Into<String>, response: ProgramsResponse) -> Self {
        self.programs.insert(date.into(), response);
        self
    }

    pub fn with_history(
        mut self,
        slug: impl Into<String>,
        response: ProgramHistoryResponse,
    ) -> Self {
        self.history.insert(slug.into(), response);
        self
    }

    pub fn with_trend(mut self, response: ProgramTrendResponse) -> Self {
        self.trends.insert(response.slug.clone(), response);
        self
    }

    pub fn with_competition(
        mut self,
        date: impl Into<String>,
        response: CompetitionResponse,
    ) -> Self {
        self.competition.insert(date.into(), response);
        self
    }

    /// Make every call to `path` fail with `status`.
    pub fn fail(mut self, path: &'static str, status: u16) -> Self {
        self.failures.insert(path, status);
        self
    }

    /// Requests served so far, as `path?key` strings.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn lookup<T: Clone>(
        &self,
        path: &'static str,
        key: &str,
        table: &HashMap<String, T>,
    ) -> ClientResult<T> {
        let url = format!("memory://{}?{}", path, key);
        self.calls.lock().push(format!("{}?{}", path, key));
        if let Some(status) = self.failures.get(path) {
            return Err(ClientError::RequestFailed {
                status: *status,
                url,
            });
        }
        table
            .get(key)
            .cloned()
            .ok_or(ClientError::RequestFailed { status: 404, url })
    }
}

#[async_trait]
impl AudienceApi for InMemoryApi {
    async fn list_days(&self) -> ClientResult<Vec<String>> {
        self.calls.lock().push(days::LIST_DAYS.to_string());
        if let Some(status) = self.failures.get(days::LIST_DAYS) {
            return Err(ClientError::RequestFailed {
                status: *status,
                url: format!("memory://{}", days::LIST_DAYS),
            });
        }
        self.days.clone().ok_or(ClientError::RequestFailed {
            status: 404,
            url: format!("memory://{}", days::LIST_DAYS),
        })
    }

    async fn aggregates(&self, date: &str) -> ClientResult<AggregatesResponse> {
        self.lookup(aggregates::GET_AGGREGATES, date, &self.aggregates)
    }

    async fn metrics(&self, date: &str) -> ClientResult<MetricsResponse> {
        self.lookup(metrics::GET_METRICS, date, &self.metrics)
    }

    async fn programs(&self, date: &str) -> ClientResult<ProgramsResponse> {
        self.lookup(programs::GET_PROGRAMS, date, &self.programs)
    }

    async fn program_history(&self, slug: &str) -> ClientResult<ProgramHistoryResponse> {
        self.lookup(history::GET_PROGRAM_HISTORY, slug, &self.history)
    }

    async fn program_trend(&self, slug: &str, _days: u32) -> ClientResult<ProgramTrendResponse> {
        self.lookup(trends::GET_PROGRAM_TREND, slug, &self.trends)
    }

    async fn competition(&self, date: &str) -> ClientResult<CompetitionResponse> {
        self.lookup(competition::GET_COMPETITION, date, &self.competition)
    }
}
