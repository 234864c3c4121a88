//! Voter enhancement endpoints: biometrics, accessibility preferences,
//! and mobile notifications.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/biometrics/voter/{voter_id}` | Voter's biometric record |
//! | `POST` | `/api/biometrics` | Enroll a biometric record |
//! | `PUT` | `/api/biometrics/{id}/verify` | Verify a record |
//! | `GET` | `/api/accessibility/voter/{voter_id}` | Voter's preferences |
//! | `POST` | `/api/accessibility` | Create preferences |
//! | `PUT` | `/api/accessibility/{id}` | Partially update preferences |
//! | `GET` | `/api/mobile-notifications/voter/{voter_id}` | Voter's settings |
//! | `POST` | `/api/mobile-notifications` | Create settings |
//! | `POST` | `/api/mobile-notifications/{id}/verify` | Verify by code |
//! | `POST` | `/api/mobile-notifications/{id}/send` | Simulated delivery |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use precinct_types::{
    AccessibilityPreferenceId, AccessibilityUpdate, BiometricId, MobileNotificationId,
    NewAccessibilityPreference, NewBiometric, NewMobileNotification, VoterId,
};

use crate::error::ApiError;
use crate::state::AppState;
use crate::voters::DEMO_OPERATOR;

/// Request body for `POST /api/mobile-notifications/{id}/verify`.
#[derive(Debug, Deserialize)]
pub struct VerifyNotificationBody {
    /// The code the voter received.
    pub verification_code: String,
}

/// Request body for `POST /api/mobile-notifications/{id}/send`.
#[derive(Debug, Deserialize)]
pub struct SendNotificationBody {
    /// The text to deliver.
    pub message: String,
}

// ---------------------------------------------------------------------------
// Biometrics
// ---------------------------------------------------------------------------

/// Return the biometric record enrolled for a voter.
pub async fn biometric_for_voter(
    State(state): State<Arc<AppState>>,
    Path(voter_id): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.read().await;
    let biometric = store
        .biometric_by_voter(VoterId::new(voter_id))
        .ok_or_else(|| {
            ApiError::NotFound(format!("no biometric data found for voter {voter_id}"))
        })?;
    Ok(Json(biometric.clone()))
}

/// Enroll a biometric record for a voter.
pub async fn create_biometric(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewBiometric>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let biometric = store.create_biometric(input);
    Ok((StatusCode::CREATED, Json(biometric)))
}

/// Verify a biometric record. Attribution goes to the demo operator;
/// the demo has no login flow to identify the verifier.
pub async fn verify_biometric(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let biometric = store.verify_biometric(BiometricId::new(id), DEMO_OPERATOR)?;
    Ok(Json(biometric))
}

// ---------------------------------------------------------------------------
// Accessibility preferences
// ---------------------------------------------------------------------------

/// Return the accessibility preferences stored for a voter.
pub async fn accessibility_for_voter(
    State(state): State<Arc<AppState>>,
    Path(voter_id): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.read().await;
    let preference = store
        .accessibility_preference_by_voter(VoterId::new(voter_id))
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "no accessibility preferences found for voter {voter_id}"
            ))
        })?;
    Ok(Json(preference.clone()))
}

/// Create accessibility preferences for a voter.
pub async fn create_accessibility(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewAccessibilityPreference>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let preference = store.create_accessibility_preference(input);
    Ok((StatusCode::CREATED, Json(preference)))
}

/// Partially update accessibility preferences; absent fields keep their
/// stored values.
pub async fn update_accessibility(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Json(patch): Json<AccessibilityUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let preference =
        store.update_accessibility_preference(AccessibilityPreferenceId::new(id), patch)?;
    Ok(Json(preference))
}

// ---------------------------------------------------------------------------
// Mobile notifications
// ---------------------------------------------------------------------------

/// Return the notification settings stored for a voter.
pub async fn mobile_notification_for_voter(
    State(state): State<Arc<AppState>>,
    Path(voter_id): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.read().await;
    let notification = store
        .mobile_notification_by_voter(VoterId::new(voter_id))
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "no notification settings found for voter {voter_id}"
            ))
        })?;
    Ok(Json(notification.clone()))
}

/// Create notification settings for a voter; the verification code is
/// generated server-side.
pub async fn create_mobile_notification(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewMobileNotification>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let notification = store.create_mobile_notification(input);
    Ok((StatusCode::CREATED, Json(notification)))
}

/// Verify a notification channel by echoing back the stored code.
pub async fn verify_mobile_notification(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Json(body): Json<VerifyNotificationBody>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let notification = store
        .verify_mobile_notification(MobileNotificationId::new(id), &body.verification_code)?;
    Ok(Json(notification))
}

/// Send a notification over a verified channel. Delivery is simulated.
pub async fn send_notification(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Json(body): Json<SendNotificationBody>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    store.send_notification(MobileNotificationId::new(id), &body.message)?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Notification sent successfully",
    })))
}
