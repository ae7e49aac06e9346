#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use audience_dash::client::ApiClient;
use audience_dash::config::ClientConfig;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

// =========================================================
// Stub upstream API
// =========================================================

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn spawn_upstream(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub upstream");
    let addr = listener.local_addr().expect("stub upstream address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub upstream");
    });
    format!("http://{}", addr)
}

/// Base URL of a local port nothing listens on.
pub fn unreachable_base() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind unused port");
    let addr = listener.local_addr().expect("unused port address");
    drop(listener);
    format!("http://{}", addr)
}

pub fn client_for(base: &str) -> ApiClient {
    ApiClient::new(&ClientConfig::new(base).with_timeout(Duration::from_secs(5)))
        .expect("client for stub upstream")
}

/// Switches and counters shared by the fixture upstream's handlers.
#[derive(Debug, Default)]
pub struct UpstreamControl {
    /// When set, every endpoint answers 500.
    pub failing: AtomicBool,
    pub days_hits: AtomicUsize,
    pub root_hits: AtomicUsize,
}

impl UpstreamControl {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), Response> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StatusCode::INTERNAL_SERVER_ERROR.into_response())
        } else {
            Ok(())
        }
    }
}

type Params = Query<HashMap<String, String>>;

/// Upstream serving a small but complete data set for 2025-03-01 and the
/// program `fakty`.
pub fn fixture_upstream(control: Arc<UpstreamControl>) -> Router {
    Router::new()
        .route("/days", get(days))
        .route("/aggregates", get(aggregates))
        .route("/metrics", get(metrics))
        .route("/programs", get(programs))
        .route("/program-history", get(history))
        .route("/program-trend", get(trend))
        .route("/competition", get(competition))
        .with_state(control)
}

async fn days(State(control): State<Arc<UpstreamControl>>) -> Response {
    control.days_hits.fetch_add(1, Ordering::SeqCst);
    if let Err(resp) = control.check() {
        return resp;
    }
    Json(json!({ "days": ["2025-03-02", "2025-03-01"] })).into_response()
}

async fn aggregates(State(control): State<Arc<UpstreamControl>>, Query(q): Params) -> Response {
    if let Err(resp) = control.check() {
        return resp;
    }
    Json(json!({
        "date": q.get("date"),
        "topline": {
            "average_viewers": 1500.0,
            "peak_viewers": 24000.0,
            "points_minutes": 1440.0,
            "shr_pct": 0.0825
        },
        "program_line": [
            { "title": "Fakty", "slug": "fakty", "start": "2025-03-01T19:00:00+01:00",
              "end": "2025-03-01T19:30:00+01:00", "duration_min": 30, "amr": 2100000,
              "shr_pct": 0.21, "rank_amr": 1.0 },
            { "title": "Pogoda", "slug": "pogoda", "amr": null }
        ]
    }))
    .into_response()
}

async fn metrics(State(control): State<Arc<UpstreamControl>>) -> Response {
    if let Err(resp) = control.check() {
        return resp;
    }
    Json(json!({
        "points": [
            { "t": "2025-03-01T02:00:00+01:00", "amr": 100 },
            { "t": "2025-03-01T02:01:00+01:00", "amr": null },
            { "t": "2025-03-01T02:02:00+01:00", "amr": 200 }
        ]
    }))
    .into_response()
}

async fn programs(State(control): State<Arc<UpstreamControl>>) -> Response {
    if let Err(resp) = control.check() {
        return resp;
    }
    Json(json!({
        "programs": [
            { "title": "Fakty", "slug": "fakty", "amr": 2100000, "shr_pct": 0.21,
              "break_penalty": -35000, "recovery_time": 4 }
        ]
    }))
    .into_response()
}

async fn history(State(control): State<Arc<UpstreamControl>>, Query(q): Params) -> Response {
    if let Err(resp) = control.check() {
        return resp;
    }
    // The slug is echoed back as the first date so tests can see what arrived.
    let slug = q.get("slug").cloned().unwrap_or_default();
    Json(json!({
        "series": [
            { "date": slug, "amr": 4 },
            { "date": "2025-02-28", "amr": null },
            { "date": "2025-03-01", "amr": 8 }
        ]
    }))
    .into_response()
}

async fn trend(State(control): State<Arc<UpstreamControl>>, Query(q): Params) -> Response {
    if let Err(resp) = control.check() {
        return resp;
    }
    let days: u32 = q.get("days").and_then(|d| d.parse().ok()).unwrap_or(0);
    Json(json!({
        "slug": q.get("slug"),
        "days": days as f64,
        "items": [
            { "date": "2025-03-01", "amr": 10, "avg_excl_breaks": null, "avg_incl_breaks": null },
            { "date": "2025-03-02", "amr": null, "avg_excl_breaks": null, "avg_incl_breaks": null },
            { "date": "2025-03-03", "amr": null, "avg_excl_breaks": 20, "avg_incl_breaks": 30 },
            { "date": "2025-03-04", "amr": null, "avg_excl_breaks": null, "avg_incl_breaks": 40 }
        ]
    }))
    .into_response()
}

async fn competition(State(control): State<Arc<UpstreamControl>>) -> Response {
    if let Err(resp) = control.check() {
        return resp;
    }
    Json(json!({
        "date": "2025-03-01",
        "channels": [
            { "name": "Polsat", "shr_pct": 0.1, "amr": 900000 },
            { "name": "TVN", "shr_pct": 0.2, "amr": 1200000 },
            { "name": "Mango", "shr_pct": null }
        ]
    }))
    .into_response()
}
