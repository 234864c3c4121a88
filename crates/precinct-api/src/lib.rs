//! REST API server for the Precinct voter check-in service.
//!
//! This crate provides an Axum HTTP server exposing the in-memory
//! [`PollStore`](precinct_store::PollStore) over REST:
//!
//! - **Voter endpoints** for registration lookup and check-in
//! - **Queue, station, and issue endpoints** for floor management
//! - **Reporting endpoints** (alerts, messages, hourly stats, summary)
//! - **Enhancement endpoints** (biometrics, accessibility, notifications)
//! - **Analytics endpoints** (anomalies, forecasts, audit records)
//! - **Minimal HTML status page** (`GET /`) with store counts and links
//!
//! # Architecture
//!
//! Handlers share the store through [`AppState`]: reads take the read
//! guard, mutations take the write guard for the whole operation so
//! multi-entity flows (check-in) stay atomic. Every store failure maps
//! through [`error::ApiError`] onto a 404/400/500 JSON response.

pub mod analytics;
pub mod dashboard;
pub mod enhancements;
pub mod error;
pub mod queue;
pub mod router;
pub mod server;
pub mod state;
pub mod stations;
pub mod voters;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
