//! HTTP front end: serves the assembled view models to the browser UI.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Query parsing and validation                           │
//! │  - JSON serialization, CORS, compression, tracing         │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Normalization, moving average, view-model assembly     │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Client Layer (client/)                                   │
//! │  - Upstream analytics API over HTTP                       │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
