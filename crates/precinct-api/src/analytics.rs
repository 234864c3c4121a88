//! Anomaly, forecast, and audit-trail endpoints.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/anomalies` | List flagged anomalies |
//! | `POST` | `/api/anomalies` | Flag an anomaly |
//! | `PUT` | `/api/anomalies/{id}/resolve` | Resolve an anomaly |
//! | `GET` | `/api/predictive-analytics` | List turnout forecasts |
//! | `POST` | `/api/predictive-analytics` | Store a forecast |
//! | `PUT` | `/api/predictive-analytics/{id}/update-actuals` | Score a forecast |
//! | `GET` | `/api/predictive-analytics/time-slot` | Forecast for an hour/day |
//! | `GET` | `/api/blockchain-transactions` | List audit records |
//! | `GET` | `/api/blockchain-transactions/voter/{voter_id}` | Voter's records |
//! | `POST` | `/api/blockchain-transactions` | Write an audit record |
//! | `PUT` | `/api/blockchain-transactions/{id}/verify` | Verify a record |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use precinct_types::{
    AnomalyId, BlockchainTransactionId, NewAnomaly, NewBlockchainTransaction,
    NewPredictiveAnalytic, PredictiveAnalyticId, UserId, VoterId,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `PUT /api/anomalies/{id}/resolve`.
#[derive(Debug, Deserialize)]
pub struct ResolveAnomalyBody {
    /// The worker resolving the anomaly.
    pub user_id: UserId,
    /// The action taken, appended to the anomaly's log.
    pub resolution: String,
}

/// Request body for `PUT /api/predictive-analytics/{id}/update-actuals`.
#[derive(Debug, Deserialize)]
pub struct UpdateActualsBody {
    /// Observed voters for the slot.
    pub actual_voter_volume: u32,
    /// Observed wait in minutes.
    pub actual_wait_time: u32,
}

/// Query parameters for `GET /api/predictive-analytics/time-slot`.
#[derive(Debug, Deserialize)]
pub struct TimeSlotQuery {
    /// Hour of day (0-23).
    pub hour_of_day: u32,
    /// Day of week (0 = Sunday).
    pub day_of_week: u32,
}

/// Reject hour/day values outside the calendar ranges.
fn validate_time_slot(hour_of_day: u32, day_of_week: u32) -> Result<(), ApiError> {
    if hour_of_day > 23 {
        return Err(ApiError::InvalidRequest(format!(
            "hour_of_day {hour_of_day} out of range 0-23"
        )));
    }
    if day_of_week > 6 {
        return Err(ApiError::InvalidRequest(format!(
            "day_of_week {day_of_week} out of range 0-6"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Anomalies
// ---------------------------------------------------------------------------

/// List all flagged anomalies.
pub async fn list_anomalies(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    let anomalies: Vec<precinct_types::Anomaly> = store.all_anomalies().cloned().collect();
    Json(anomalies)
}

/// Flag a new anomaly.
pub async fn create_anomaly(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewAnomaly>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let anomaly = store.create_anomaly(input);
    Ok((StatusCode::CREATED, Json(anomaly)))
}

/// Resolve an anomaly, appending the resolution to its action log.
pub async fn resolve_anomaly(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Json(body): Json<ResolveAnomalyBody>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let anomaly = store.resolve_anomaly(AnomalyId::new(id), body.user_id, body.resolution)?;
    Ok(Json(anomaly))
}

// ---------------------------------------------------------------------------
// Predictive analytics
// ---------------------------------------------------------------------------

/// List all turnout forecasts.
pub async fn list_predictions(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    let analytics: Vec<precinct_types::PredictiveAnalytic> =
        store.all_predictive_analytics().cloned().collect();
    Json(analytics)
}

/// Store a new turnout forecast.
pub async fn create_prediction(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewPredictiveAnalytic>,
) -> Result<impl IntoResponse, ApiError> {
    validate_time_slot(input.hour_of_day, input.day_of_week)?;
    let mut store = state.store.write().await;
    let analytic = store.create_predictive_analytic(input);
    Ok((StatusCode::CREATED, Json(analytic)))
}

/// Fill in the observed actuals for a forecast and score its accuracy.
pub async fn update_actuals(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Json(body): Json<UpdateActualsBody>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let analytic = store.record_prediction_actuals(
        PredictiveAnalyticId::new(id),
        body.actual_voter_volume,
        body.actual_wait_time,
    )?;
    Ok(Json(analytic))
}

/// Return the forecast stored for an hour/day slot.
pub async fn prediction_for_time_slot(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TimeSlotQuery>,
) -> Result<impl IntoResponse, ApiError> {
    validate_time_slot(query.hour_of_day, query.day_of_week)?;
    let store = state.store.read().await;
    let analytic = store
        .prediction_for_time_slot(query.hour_of_day, query.day_of_week)
        .ok_or_else(|| {
            ApiError::NotFound(String::from(
                "no prediction found for the specified time slot",
            ))
        })?;
    Ok(Json(analytic.clone()))
}

// ---------------------------------------------------------------------------
// Blockchain transactions
// ---------------------------------------------------------------------------

/// List all audit records.
pub async fn list_transactions(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    let transactions: Vec<precinct_types::BlockchainTransaction> =
        store.all_blockchain_transactions().cloned().collect();
    Json(transactions)
}

/// List the audit records tied to one voter.
pub async fn voter_transactions(
    State(state): State<Arc<AppState>>,
    Path(voter_id): Path<u32>,
) -> impl IntoResponse {
    let store = state.store.read().await;
    let transactions: Vec<precinct_types::BlockchainTransaction> = store
        .voter_transactions(VoterId::new(voter_id))
        .cloned()
        .collect();
    Json(transactions)
}

/// Write a new audit record.
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewBlockchainTransaction>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let transaction = store.create_blockchain_transaction(input);
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Verify an audit record against the simulated chain.
pub async fn verify_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let transaction = store.verify_blockchain_transaction(BlockchainTransactionId::new(id))?;
    Ok(Json(transaction))
}
