//! Status page, alerts, messages, and reporting endpoints.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/alerts` | List alerts |
//! | `POST` | `/api/alerts` | Raise an alert |
//! | `GET` | `/api/messages` | List coordinator messages |
//! | `POST` | `/api/messages` | Post a message |
//! | `GET` | `/api/stats` | Today's hourly rows |
//! | `GET` | `/api/stats/summary` | Aggregated daily summary |
//! | `GET` | `/api/connection-status` | Offline-mode demo probe |
//! | `POST` | `/api/connection-status/toggle` | Offline-mode demo toggle |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use precinct_types::{NewAlert, NewMessage, StationStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Fixed special-cases figure shown on the reports page. The demo has no
/// special-case tracking to derive it from.
const DEMO_SPECIAL_CASES: u32 = 5;

/// Aggregated daily summary for the reports page.
#[derive(Debug, Clone, Serialize)]
struct StatsSummary {
    /// Sum of voters processed across today's rows.
    total_voters_processed: u32,
    /// Mean processing time in minutes, one decimal place.
    avg_processing_time: Decimal,
    /// Wait time from the most recent row carrying one.
    current_wait_time: u32,
    /// Throughput from the most recent row carrying one.
    current_throughput: u32,
    /// Hour with the most voters processed, formatted `H:00`.
    peak_hour: String,
    /// Fixed demo figure.
    special_cases: u32,
}

/// Request body for `POST /api/connection-status/toggle`.
#[derive(Debug, Deserialize)]
pub struct ToggleConnectionBody {
    /// The connection state the client is switching to.
    pub connected: bool,
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing store counts and API links.
///
/// This is the operations fallback when the dashboard frontend is not
/// deployed alongside the API.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    let voter_count = store.all_voters().count();
    let checked_in = store.all_voters().filter(|v| v.checked_in).count();
    let queue_stats = store.queue_stats();
    let stations_active = store
        .all_stations()
        .filter(|s| s.status == StationStatus::Active)
        .count();
    let alert_count = store.all_alerts().count();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Precinct Check-In</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        li::before {{ content: "GET "; color: #7ee787; font-weight: bold; }}
        .status {{ color: #3fb950; font-weight: bold; }}
        hr {{ border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }}
    </style>
</head>
<body>
    <h1>Precinct Check-In</h1>
    <p class="subtitle">Demo voter check-in service</p>

    <p>Status: <span class="status">RUNNING</span></p>

    <div>
        <div class="metric">
            <div class="label">Voters</div>
            <div class="value">{voter_count}</div>
        </div>
        <div class="metric">
            <div class="label">Checked In</div>
            <div class="value">{checked_in}</div>
        </div>
        <div class="metric">
            <div class="label">Waiting</div>
            <div class="value">{waiting}</div>
        </div>
        <div class="metric">
            <div class="label">Active Stations</div>
            <div class="value">{stations_active}</div>
        </div>
        <div class="metric">
            <div class="label">Alerts</div>
            <div class="value">{alert_count}</div>
        </div>
    </div>

    <hr>

    <h2>API Endpoints</h2>
    <ul>
        <li><a href="/api/voters/100123">/api/voters/:voter_id</a> -- Voter lookup</li>
        <li><a href="/api/queue">/api/queue</a> -- Waiting line</li>
        <li><a href="/api/queue/stats">/api/queue/stats</a> -- Queue counts</li>
        <li><a href="/api/stations">/api/stations</a> -- Check-in stations</li>
        <li><a href="/api/issues">/api/issues</a> -- Reported issues</li>
        <li><a href="/api/system-status">/api/system-status</a> -- Component health</li>
        <li><a href="/api/alerts">/api/alerts</a> -- Alerts</li>
        <li><a href="/api/messages">/api/messages</a> -- Coordinator messages</li>
        <li><a href="/api/stats/summary">/api/stats/summary</a> -- Daily summary</li>
        <li><a href="/api/anomalies">/api/anomalies</a> -- Flagged anomalies</li>
        <li><a href="/api/predictive-analytics">/api/predictive-analytics</a> -- Turnout forecasts</li>
        <li><a href="/api/blockchain-transactions">/api/blockchain-transactions</a> -- Audit records</li>
    </ul>
</body>
</html>"#,
        waiting = queue_stats.waiting,
    ))
}

// ---------------------------------------------------------------------------
// GET /api/alerts + POST /api/alerts
// ---------------------------------------------------------------------------

/// List all alerts.
pub async fn list_alerts(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    let alerts: Vec<precinct_types::Alert> = store.all_alerts().cloned().collect();
    Json(alerts)
}

/// Raise a new alert.
pub async fn create_alert(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewAlert>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let alert = store.create_alert(input);
    Ok((StatusCode::CREATED, Json(alert)))
}

// ---------------------------------------------------------------------------
// GET /api/messages + POST /api/messages
// ---------------------------------------------------------------------------

/// List all coordinator messages.
pub async fn list_messages(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    let messages: Vec<precinct_types::Message> = store.all_messages().cloned().collect();
    Json(messages)
}

/// Post a new coordinator message.
pub async fn create_message(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewMessage>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let message = store.create_message(input);
    Ok((StatusCode::CREATED, Json(message)))
}

// ---------------------------------------------------------------------------
// GET /api/stats + GET /api/stats/summary
// ---------------------------------------------------------------------------

/// List today's hourly statistics rows.
pub async fn today_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    let rows: Vec<precinct_types::Stat> = store.today_stats().cloned().collect();
    Json(rows)
}

/// Aggregate today's hourly rows into the daily summary.
pub async fn stats_summary(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    let rows: Vec<&precinct_types::Stat> = store.today_stats().collect();

    let total_voters_processed = rows
        .iter()
        .fold(0_u32, |acc, stat| acc.saturating_add(stat.voters_processed));

    let processing_times: Vec<u32> = rows
        .iter()
        .filter_map(|stat| stat.average_processing_time)
        .collect();
    let avg_processing_time = if processing_times.is_empty() {
        Decimal::ZERO
    } else {
        let sum: f64 = processing_times.iter().copied().map(f64::from).sum();
        let count = f64::from(u32::try_from(processing_times.len()).unwrap_or(u32::MAX));
        // Seconds to minutes with one decimal place.
        let tenths = (sum / count / 60.0 * 10.0).round();
        #[allow(clippy::cast_possible_truncation)]
        let tenths = tenths as i64;
        Decimal::new(tenths, 1)
    };

    let current_wait_time = rows.iter().rev().find_map(|stat| stat.wait_time).unwrap_or(0);
    let current_throughput = rows.iter().rev().find_map(|stat| stat.throughput).unwrap_or(0);

    // First hour holding the maximum processed count wins ties.
    let mut peak_hour = 0_u32;
    let mut max_voters = 0_u32;
    for stat in &rows {
        if stat.voters_processed > max_voters {
            max_voters = stat.voters_processed;
            peak_hour = stat.hour;
        }
    }

    Json(StatsSummary {
        total_voters_processed,
        avg_processing_time,
        current_wait_time,
        current_throughput,
        peak_hour: format!("{peak_hour}:00"),
        special_cases: DEMO_SPECIAL_CASES,
    })
}

// ---------------------------------------------------------------------------
// GET /api/connection-status + POST /api/connection-status/toggle
// ---------------------------------------------------------------------------

/// Report the connection state for the offline-mode demo toggle.
///
/// The server is always reachable when this handler runs; offline mode
/// is a client-side simulation.
#[allow(clippy::unused_async)] // Axum handlers must be async.
pub async fn connection_status() -> impl IntoResponse {
    Json(serde_json::json!({ "connected": true }))
}

/// Echo the client's offline-mode toggle. No server state changes.
#[allow(clippy::unused_async)] // Axum handlers must be async.
pub async fn toggle_connection_status(Json(body): Json<ToggleConnectionBody>) -> impl IntoResponse {
    Json(serde_json::json!({ "connected": body.connected }))
}
