//! Voter verification and check-in endpoints.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/users/current` | The demo poll worker, password redacted |
//! | `GET` | `/api/voters/{id}` | Look up a voter by registration number |
//! | `POST` | `/api/voters/{id}/check-in` | Check a voter in by record id |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use chrono::Local;
use serde::Serialize;

use precinct_types::{StationId, User, UserId, UserRole, Voter, VoterId};

use crate::error::ApiError;
use crate::state::AppState;

/// Account id of the demo poll worker every check-in is attributed to.
/// The demo has no login flow; the seed routine creates this account.
pub(crate) const DEMO_OPERATOR: UserId = UserId::new(2);

/// Station whose processed counter the check-in flow bumps. The demo UI
/// does not pick a station, so everything lands on station 1.
pub(crate) const DEMO_STATION: StationId = StationId::new(1);

/// A staff account with the password stripped, safe to return to the
/// dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    /// Sequential account identifier.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Station number the worker is assigned to, if any.
    pub station: Option<u32>,
    /// Account role.
    pub role: UserRole,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            station: user.station,
            role: user.role,
        }
    }
}

/// Response body for a successful check-in.
#[derive(Debug, Clone, Serialize)]
struct CheckInResponse {
    /// Always true on the success path.
    success: bool,
    /// The voter record after the check-in flip.
    voter: Voter,
    /// Wall-clock time of the check-in, formatted for the receipt line.
    check_in_time: String,
}

// ---------------------------------------------------------------------------
// GET /api/users/current
// ---------------------------------------------------------------------------

/// Return the account the demo session is signed in as.
pub async fn current_user(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.read().await;
    let user = store
        .user_by_username("pollworker")
        .ok_or_else(|| ApiError::NotFound(String::from("user not found")))?;
    Ok(Json(PublicUser::from(user)))
}

// ---------------------------------------------------------------------------
// GET /api/voters/{id}
// ---------------------------------------------------------------------------

/// Look up a voter by the registration number on their ID card.
pub async fn get_voter(
    State(state): State<Arc<AppState>>,
    Path(voter_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.read().await;
    let voter = store
        .voter_by_voter_id(&voter_id)
        .ok_or_else(|| ApiError::NotFound(format!("voter {voter_id} not found")))?;
    Ok(Json(voter.clone()))
}

// ---------------------------------------------------------------------------
// POST /api/voters/{id}/check-in
// ---------------------------------------------------------------------------

/// Check a voter in and bump the station counter.
///
/// Both mutations happen under one write guard, so the flow is atomic
/// with respect to other requests. The demo station may be absent when
/// seeding was skipped; the counter bump is skipped in that case rather
/// than failing the check-in.
pub async fn check_in(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let voter = store.check_in_voter(VoterId::new(id), DEMO_OPERATOR)?;
    if store.station(DEMO_STATION).is_some() {
        store.increment_station_processed(DEMO_STATION)?;
    }

    Ok(Json(CheckInResponse {
        success: true,
        voter,
        check_in_time: Local::now().format("%-I:%M:%S %p").to_string(),
    }))
}
