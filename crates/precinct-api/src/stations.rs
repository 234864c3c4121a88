//! Station, issue, and system component endpoints.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/stations` | List stations joined with their operator |
//! | `PUT` | `/api/stations/{id}/status` | Change a station's state |
//! | `GET` | `/api/issues` | List reported issues |
//! | `POST` | `/api/issues` | Report an issue |
//! | `PUT` | `/api/issues/{id}/resolve` | Resolve an issue |
//! | `GET` | `/api/system-status` | List component health rows |
//! | `PUT` | `/api/system-status/{id}` | Update a component's health |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use precinct_types::{
    ComponentStatus, IssueId, NewIssue, Station, StationId, StationStatus, SystemStatusId, UserId,
};

use crate::error::ApiError;
use crate::state::AppState;
use crate::voters::PublicUser;

/// A station joined with its operator (password stripped), as the
/// dashboard renders it.
#[derive(Debug, Clone, Serialize)]
struct StationWithOperator {
    /// The station record itself.
    #[serde(flatten)]
    station: Station,
    /// The joined operator account, if one is assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    operator: Option<PublicUser>,
}

/// Request body for `PUT /api/stations/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStationStatusBody {
    /// The state to move the station to.
    pub status: StationStatus,
    /// A new operator assignment; absent keeps the current operator.
    pub operator_id: Option<UserId>,
}

/// Request body for `PUT /api/issues/{id}/resolve`.
#[derive(Debug, Deserialize)]
pub struct ResolveIssueBody {
    /// The worker resolving the issue.
    pub user_id: UserId,
}

/// Request body for `PUT /api/system-status/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateSystemStatusBody {
    /// The health to record.
    pub status: ComponentStatus,
    /// Replacement notes; absent keeps the current notes.
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /api/stations
// ---------------------------------------------------------------------------

/// List all stations, each joined with its operator account.
pub async fn list_stations(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    let stations: Vec<StationWithOperator> = store
        .all_stations()
        .map(|station| StationWithOperator {
            station: station.clone(),
            operator: station
                .operator_id
                .and_then(|id| store.user(id))
                .map(PublicUser::from),
        })
        .collect();
    Json(stations)
}

// ---------------------------------------------------------------------------
// PUT /api/stations/{id}/status
// ---------------------------------------------------------------------------

/// Change a station's operational state and optionally its operator.
pub async fn update_station_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Json(body): Json<UpdateStationStatusBody>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let station = store.update_station_status(StationId::new(id), body.status, body.operator_id)?;
    Ok(Json(station))
}

// ---------------------------------------------------------------------------
// GET /api/issues + POST /api/issues
// ---------------------------------------------------------------------------

/// List all reported issues.
pub async fn list_issues(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    let issues: Vec<precinct_types::Issue> = store.all_issues().cloned().collect();
    Json(issues)
}

/// Report a new issue.
pub async fn create_issue(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewIssue>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let issue = store.create_issue(input);
    Ok((StatusCode::CREATED, Json(issue)))
}

// ---------------------------------------------------------------------------
// PUT /api/issues/{id}/resolve
// ---------------------------------------------------------------------------

/// Resolve an issue, recording the resolver and elapsed minutes.
pub async fn resolve_issue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Json(body): Json<ResolveIssueBody>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let issue = store.resolve_issue(IssueId::new(id), body.user_id)?;
    Ok(Json(issue))
}

// ---------------------------------------------------------------------------
// GET /api/system-status + PUT /api/system-status/{id}
// ---------------------------------------------------------------------------

/// List health rows for every monitored component.
pub async fn list_system_statuses(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    let rows: Vec<precinct_types::SystemStatus> = store.all_system_statuses().cloned().collect();
    Json(rows)
}

/// Update a component's health and optionally its notes.
pub async fn update_system_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Json(body): Json<UpdateSystemStatusBody>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let row = store.update_system_status(SystemStatusId::new(id), body.status, body.notes)?;
    Ok(Json(row))
}
