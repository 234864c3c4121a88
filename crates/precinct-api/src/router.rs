//! Axum router construction for the check-in API.
//!
//! Assembles all REST routes into a single [`Router`] with CORS
//! middleware enabled for cross-origin dashboard access. Exactly one
//! handler is registered per route.

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{analytics, dashboard, enhancements, queue, stations, voters};

/// Build the complete Axum router for the check-in API server.
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(dashboard::index))
        // Accounts and voters
        .route("/api/users/current", get(voters::current_user))
        // The lookup takes the external registration string; check-in
        // takes the numeric record id.
        .route("/api/voters/{id}", get(voters::get_voter))
        .route("/api/voters/{id}/check-in", post(voters::check_in))
        // Queue
        .route("/api/queue", get(queue::list_queue).post(queue::create_queue_item))
        .route("/api/queue/stats", get(queue::queue_stats))
        .route("/api/queue/{id}/status", put(queue::update_status))
        // Stations, issues, component health
        .route("/api/stations", get(stations::list_stations))
        .route("/api/stations/{id}/status", put(stations::update_station_status))
        .route("/api/issues", get(stations::list_issues).post(stations::create_issue))
        .route("/api/issues/{id}/resolve", put(stations::resolve_issue))
        .route("/api/system-status", get(stations::list_system_statuses))
        .route("/api/system-status/{id}", put(stations::update_system_status))
        // Alerts, messages, reporting
        .route("/api/alerts", get(dashboard::list_alerts).post(dashboard::create_alert))
        .route("/api/messages", get(dashboard::list_messages).post(dashboard::create_message))
        .route("/api/stats", get(dashboard::today_stats))
        .route("/api/stats/summary", get(dashboard::stats_summary))
        .route("/api/connection-status", get(dashboard::connection_status))
        .route(
            "/api/connection-status/toggle",
            post(dashboard::toggle_connection_status),
        )
        // Biometrics
        .route("/api/biometrics", post(enhancements::create_biometric))
        .route(
            "/api/biometrics/voter/{voter_id}",
            get(enhancements::biometric_for_voter),
        )
        .route("/api/biometrics/{id}/verify", put(enhancements::verify_biometric))
        // Accessibility
        .route("/api/accessibility", post(enhancements::create_accessibility))
        .route(
            "/api/accessibility/voter/{voter_id}",
            get(enhancements::accessibility_for_voter),
        )
        .route("/api/accessibility/{id}", put(enhancements::update_accessibility))
        // Mobile notifications
        .route(
            "/api/mobile-notifications",
            post(enhancements::create_mobile_notification),
        )
        .route(
            "/api/mobile-notifications/voter/{voter_id}",
            get(enhancements::mobile_notification_for_voter),
        )
        .route(
            "/api/mobile-notifications/{id}/verify",
            post(enhancements::verify_mobile_notification),
        )
        .route(
            "/api/mobile-notifications/{id}/send",
            post(enhancements::send_notification),
        )
        // Anomalies
        .route(
            "/api/anomalies",
            get(analytics::list_anomalies).post(analytics::create_anomaly),
        )
        .route("/api/anomalies/{id}/resolve", put(analytics::resolve_anomaly))
        // Predictive analytics
        .route(
            "/api/predictive-analytics",
            get(analytics::list_predictions).post(analytics::create_prediction),
        )
        .route(
            "/api/predictive-analytics/time-slot",
            get(analytics::prediction_for_time_slot),
        )
        .route(
            "/api/predictive-analytics/{id}/update-actuals",
            put(analytics::update_actuals),
        )
        // Blockchain transactions
        .route(
            "/api/blockchain-transactions",
            get(analytics::list_transactions).post(analytics::create_transaction),
        )
        .route(
            "/api/blockchain-transactions/voter/{voter_id}",
            get(analytics::voter_transactions),
        )
        .route(
            "/api/blockchain-transactions/{id}/verify",
            put(analytics::verify_transaction),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
