//! reqwest-backed implementation of [`AudienceApi`].

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::{ClientError, ClientResult};
use super::AudienceApi;
use crate::api::{
    AggregatesResponse, CompetitionResponse, DaysResponse, MetricsResponse,
    ProgramHistoryResponse, ProgramTrendResponse, ProgramsResponse,
};
use crate::config::ClientConfig;
use crate::routes::{aggregates, competition, days, history, metrics, programs, trends};

/// Stateless HTTP client for the audience analytics API.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from explicit configuration.
    ///
    /// A trailing `/` on the base URL is ignored.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| ClientError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `path` against the base URL and append URL-encoded query pairs.
    pub fn resolve_url(&self, path: &str, query: &[(&str, &str)]) -> ClientResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw)
            .map_err(|e| ClientError::Config(format!("Invalid request URL '{}': {}", raw, e)))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// GET `path` and decode the body as `T`.
    pub async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.resolve_url(path, query)?;
        debug!(url = %url, "GET");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ClientError::network(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "upstream request failed");
            return Err(ClientError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::network(url.as_str(), e))?;

        decode_body(url.as_str(), &body)
    }
}

/// Decode a JSON body, reporting the path of the first field that does not
/// match the schema.
pub(crate) fn decode_body<T>(url: &str, body: &[u8]) -> ClientResult<T>
where
    T: DeserializeOwned,
{
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        let path = e.path().to_string();
        let inner = e.into_inner();
        let message = if path.is_empty() || path == "." {
            inner.to_string()
        } else {
            format!("{} (at `{}`)", inner, path)
        };
        warn!(url, %message, "rejected upstream payload");
        ClientError::ParseError {
            url: url.to_string(),
            message,
        }
    })?;
    deserializer.end().map_err(|e| ClientError::ParseError {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    Ok(value)
}

#[async_trait]
impl AudienceApi for ApiClient {
    async fn list_days(&self) -> ClientResult<Vec<String>> {
        match self.get_json::<DaysResponse>(days::LIST_DAYS, &[]).await {
            Ok(response) => Ok(response.days),
            Err(err) => {
                debug!(error = %err, "day listing failed, trying fallback path");
                let response: DaysResponse =
                    self.get_json(days::LIST_DAYS_FALLBACK, &[]).await?;
                Ok(response.days)
            }
        }
    }

    async fn aggregates(&self, date: &str) -> ClientResult<AggregatesResponse> {
        self.get_json(aggregates::GET_AGGREGATES, &[("date", date)])
            .await
    }

    async fn metrics(&self, date: &str) -> ClientResult<MetricsResponse> {
        self.get_json(metrics::GET_METRICS, &[("date", date)]).await
    }

    async fn programs(&self, date: &str) -> ClientResult<ProgramsResponse> {
        self.get_json(programs::GET_PROGRAMS, &[("date", date)]).await
    }

    async fn program_history(&self, slug: &str) -> ClientResult<ProgramHistoryResponse> {
        self.get_json(history::GET_PROGRAM_HISTORY, &[("slug", slug)])
            .await
    }

    async fn program_trend(&self, slug: &str, days: u32) -> ClientResult<ProgramTrendResponse> {
        let days = days.to_string();
        self.get_json(trends::GET_PROGRAM_TREND, &[("slug", slug), ("days", &days)])
            .await
    }

    async fn competition(&self, date: &str) -> ClientResult<CompetitionResponse> {
        let query = [("date", date)];
        match self.get_json(competition::GET_COMPETITION, &query).await {
            Err(ClientError::RequestFailed { status: 404, .. }) => {
                debug!("competition endpoint not found, trying compare path");
                self.get_json(competition::GET_COMPARE, &query).await
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ClientConfig::new(base)).unwrap()
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = client("http://api.local/v2/");
        assert_eq!(client.base_url(), "http://api.local/v2");
        let url = client.resolve_url("/days", &[]).unwrap();
        assert_eq!(url.as_str(), "http://api.local/v2/days");
    }

    #[test]
    fn test_query_values_are_encoded() {
        let client = client("http://api.local");
        let url = client
            .resolve_url("/program-history", &[("slug", "kto & co")])
            .unwrap();
        assert_eq!(url.as_str(), "http://api.local/program-history?slug=kto+%26+co");
    }

    #[test]
    fn test_relative_base_is_rejected() {
        let result = ApiClient::new(&ClientConfig::new("/api"));
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn test_timeout_is_accepted() {
        let config = ClientConfig::new("http://api.local").with_timeout(Duration::from_secs(3));
        assert!(ApiClient::new(&config).is_ok());
    }

    #[test]
    fn test_decode_body_reports_field_path() {
        let body = br#"{"points":[{"t":"2025-03-01T02:00:00+01:00","amr":"lots"}]}"#;
        let err = decode_body::<MetricsResponse>("http://api.local/metrics", body).unwrap_err();
        match err {
            ClientError::ParseError { message, .. } => {
                assert!(message.contains("points[0].amr"), "message was {}", message)
            }
            other => panic!("expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_body_rejects_non_json() {
        let err = decode_body::<DaysResponse>("http://api.local/days", b"<html>").unwrap_err();
        assert_eq!(err.kind(), "parse");
    }

    #[test]
    fn test_decode_body_rejects_trailing_garbage() {
        let err = decode_body::<DaysResponse>("http://api.local/days", br#"{"days":[]} x"#)
            .unwrap_err();
        assert_eq!(err.kind(), "parse");
    }
}
