//! Waiting-line endpoints.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/queue` | List entries joined with their voter |
//! | `GET` | `/api/queue/stats` | Counts by status |
//! | `POST` | `/api/queue` | Add a voter to the line |
//! | `PUT` | `/api/queue/{id}/status` | Move an entry to a new status |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use precinct_types::{NewQueueItem, QueueItem, QueueItemId, QueueStatus, UserId, Voter};

use crate::error::ApiError;
use crate::state::AppState;

/// A queue entry joined with the voter it belongs to, as the dashboard
/// renders it.
#[derive(Debug, Clone, Serialize)]
struct QueueEntry {
    /// The waiting-line entry itself.
    #[serde(flatten)]
    item: QueueItem,
    /// The joined voter record, absent if the roster row was removed.
    voter: Option<Voter>,
}

/// Request body for `PUT /api/queue/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateQueueStatusBody {
    /// The status to move the entry to.
    pub status: QueueStatus,
    /// The operator finishing the entry, stamped on `completed`/`issue`.
    pub user_id: Option<UserId>,
}

// ---------------------------------------------------------------------------
// GET /api/queue
// ---------------------------------------------------------------------------

/// List all waiting-line entries, each joined with its voter record.
pub async fn list_queue(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.read().await;
    let entries: Vec<QueueEntry> = store
        .all_queue_items()
        .map(|item| QueueEntry {
            item: item.clone(),
            voter: store.voter(item.voter_id).cloned(),
        })
        .collect();
    Ok(Json(entries))
}

// ---------------------------------------------------------------------------
// GET /api/queue/stats
// ---------------------------------------------------------------------------

/// Count entries by status.
pub async fn queue_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(store.queue_stats())
}

// ---------------------------------------------------------------------------
// POST /api/queue
// ---------------------------------------------------------------------------

/// Add a voter to the waiting line.
pub async fn create_queue_item(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewQueueItem>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let item = store.create_queue_item(input);
    Ok((StatusCode::CREATED, Json(item)))
}

// ---------------------------------------------------------------------------
// PUT /api/queue/{id}/status
// ---------------------------------------------------------------------------

/// Move a waiting-line entry to a new status.
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Json(body): Json<UpdateQueueStatusBody>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let item = store.update_queue_item_status(QueueItemId::new(id), body.status, body.user_id)?;
    Ok(Json(item))
}
