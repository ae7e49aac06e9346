//! # Audience Dashboard
//!
//! Client-side data pipeline for a television audience-measurement
//! dashboard.
//!
//! The crate fetches pre-aggregated viewer data (AMR, share, line-ups,
//! competitor shares) from a remote analytics API, validates and reshapes
//! it, derives a trailing moving average, and hands ordered chart records
//! to a presentation front end.
//!
//! ## Architecture
//!
//! - [`config`]: startup configuration (base URL, server address, trend defaults)
//! - [`routes`]: upstream endpoint paths and their response schemas
//! - [`api`]: shared value records (`MetricPoint`, `ChartRecord`, `AvgMode`)
//! - [`client`]: the [`client::AudienceApi`] trait and its HTTP implementation
//! - [`services`]: normalization, smoothing, view-model assembly and the view services
//! - [`render`]: plain-text tables for terminal output
//! - [`http`]: axum server exposing the view models as JSON
//!
//! ## Pipeline
//!
//! ```text
//! selector (date / slug)
//!     → client (GET + schema validation)
//!     → services::normalize (one nullable value per position)
//!     → services::smoothing (trailing moving average)
//!     → services::view_model ({label, rawValue, smoothedValue})
//!     → services::view_state (Ready / Empty / Error)
//!     → presentation (http, render)
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod render;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
