//! Integration tests for the check-in API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. Each test seeds a fresh store with a fixed
//! random seed, so verification codes and demo values are repeatable.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use precinct_api::router::build_router;
use precinct_api::state::AppState;
use precinct_store::PollStore;
use serde_json::{json, Value};
use tower::ServiceExt;

fn make_test_state() -> Arc<AppState> {
    let mut store = PollStore::with_seed(42);
    store.seed_demo_data();
    Arc::new(AppState::new(store))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(path: &str) -> Request<Body> {
    Request::get(path).body(Body::empty()).unwrap()
}

fn post_json(path: &str, body: &Value) -> Request<Body> {
    Request::post(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(path: &str, body: &Value) -> Request<Body> {
    Request::put(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// =========================================================================
// Status page and session
// =========================================================================

#[tokio::test]
async fn test_index_returns_html() {
    let router = build_router(make_test_state());

    let response = router.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn test_current_user_is_redacted() {
    let router = build_router(make_test_state());

    let response = router.oneshot(get("/api/users/current")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["username"], "pollworker");
    assert_eq!(json["full_name"], "Alex Thomas");
    assert!(json.get("password").is_none());
}

// =========================================================================
// Voter lookup and check-in
// =========================================================================

#[tokio::test]
async fn test_voter_lookup_by_registration_number() {
    let router = build_router(make_test_state());

    let response = router.oneshot(get("/api/voters/100123")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["name"], "Sarah Johnson");
    assert_eq!(json["checked_in"], false);
}

#[tokio::test]
async fn test_voter_lookup_unknown_returns_404() {
    let router = build_router(make_test_state());

    let response = router.oneshot(get("/api/voters/999999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn test_check_in_flips_voter_and_bumps_station() {
    let state = make_test_state();
    let router = build_router(Arc::clone(&state));

    let response = router
        .clone()
        .oneshot(post_json("/api/voters/1/check-in", &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["voter"]["checked_in"], true);
    assert_eq!(json["voter"]["checked_in_by"], 2);
    assert!(json["check_in_time"].is_string());

    // Station 1's processed counter moved with the same request.
    let stations = router.oneshot(get("/api/stations")).await.unwrap();
    let json = body_to_json(stations.into_body()).await;
    let station_one = json
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["number"] == 1)
        .unwrap();
    assert_eq!(station_one["voters_processed"], 1);
}

#[tokio::test]
async fn test_check_in_unknown_voter_returns_404() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(post_json("/api/voters/404/check-in", &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =========================================================================
// Queue
// =========================================================================

#[tokio::test]
async fn test_queue_create_defaults_and_stats() {
    let state = make_test_state();
    let router = build_router(state);

    let created = router
        .clone()
        .oneshot(post_json(
            "/api/queue",
            &json!({ "voter_id": 1, "number": 14, "wait_time_minutes": 10 }),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let item = body_to_json(created.into_body()).await;
    assert_eq!(item["status"], "waiting");
    assert_eq!(item["entry_type"], "standard");

    let stats = router.clone().oneshot(get("/api/queue/stats")).await.unwrap();
    let json = body_to_json(stats.into_body()).await;
    assert_eq!(json["waiting"], 1);
    assert_eq!(json["in_progress"], 0);
    assert_eq!(json["completed"], 0);

    // The queue listing joins the voter record in.
    let listing = router.oneshot(get("/api/queue")).await.unwrap();
    let json = body_to_json(listing.into_body()).await;
    assert_eq!(json[0]["voter"]["name"], "Sarah Johnson");
}

#[tokio::test]
async fn test_queue_status_update_stamps_processing() {
    let router = build_router(make_test_state());

    let created = router
        .clone()
        .oneshot(post_json("/api/queue", &json!({ "voter_id": 2, "number": 15 })))
        .await
        .unwrap();
    let item = body_to_json(created.into_body()).await;
    let id = item["id"].as_u64().unwrap();

    let updated = router
        .oneshot(put_json(
            &format!("/api/queue/{id}/status"),
            &json!({ "status": "completed", "user_id": 2 }),
        ))
        .await
        .unwrap();

    assert_eq!(updated.status(), StatusCode::OK);
    let json = body_to_json(updated.into_body()).await;
    assert_eq!(json["status"], "completed");
    assert_eq!(json["processed_by"], 2);
    assert!(json["processed_at"].is_string());
}

#[tokio::test]
async fn test_queue_unknown_status_is_rejected() {
    let router = build_router(make_test_state());

    let created = router
        .clone()
        .oneshot(post_json("/api/queue", &json!({ "voter_id": 1, "number": 1 })))
        .await
        .unwrap();
    let item = body_to_json(created.into_body()).await;
    let id = item["id"].as_u64().unwrap();

    let response = router
        .oneshot(put_json(
            &format!("/api/queue/{id}/status"),
            &json!({ "status": "paused" }),
        ))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

// =========================================================================
// Stations, issues, component health
// =========================================================================

#[tokio::test]
async fn test_stations_join_operator_without_password() {
    let router = build_router(make_test_state());

    let response = router.oneshot(get("/api/stations")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    let stations = json.as_array().unwrap();
    assert_eq!(stations.len(), 5);

    let staffed = stations.iter().find(|s| s["number"] == 1).unwrap();
    assert_eq!(staffed["operator"]["username"], "pollworker");
    assert!(staffed["operator"].get("password").is_none());

    let spare = stations.iter().find(|s| s["number"] == 5).unwrap();
    assert_eq!(spare["status"], "inactive");
    assert!(spare.get("operator").is_none());
}

#[tokio::test]
async fn test_station_status_update() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(put_json(
            "/api/stations/5/status",
            &json!({ "status": "active", "operator_id": 2 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "active");
    assert_eq!(json["operator_id"], 2);
}

#[tokio::test]
async fn test_issue_report_and_resolve() {
    let router = build_router(make_test_state());

    let created = router
        .clone()
        .oneshot(post_json(
            "/api/issues",
            &json!({
                "issue_type": "scanner_malfunction",
                "description": "Scanner feed jammed",
                "reported_by": 2
            }),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let issue = body_to_json(created.into_body()).await;
    assert_eq!(issue["status"], "open");
    let id = issue["id"].as_u64().unwrap();

    let resolved = router
        .oneshot(put_json(
            &format!("/api/issues/{id}/resolve"),
            &json!({ "user_id": 1 }),
        ))
        .await
        .unwrap();

    assert_eq!(resolved.status(), StatusCode::OK);
    let json = body_to_json(resolved.into_body()).await;
    assert_eq!(json["status"], "resolved");
    assert_eq!(json["resolved_by"], 1);
    assert_eq!(json["resolution_time"], 0);
}

#[tokio::test]
async fn test_system_status_update() {
    let router = build_router(make_test_state());

    let listing = router.clone().oneshot(get("/api/system-status")).await.unwrap();
    let json = body_to_json(listing.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 6);

    let response = router
        .oneshot(put_json(
            "/api/system-status/1",
            &json!({ "status": "degraded", "notes": "Replication lag" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["notes"], "Replication lag");
}

// =========================================================================
// Alerts, messages, reporting
// =========================================================================

#[tokio::test]
async fn test_alerts_seeded_and_creatable() {
    let router = build_router(make_test_state());

    let listing = router.clone().oneshot(get("/api/alerts")).await.unwrap();
    let json = body_to_json(listing.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 4);

    let created = router
        .oneshot(post_json(
            "/api/alerts",
            &json!({
                "alert_type": "error",
                "title": "Scanner offline",
                "message": "Station 2 scanner is not responding."
            }),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let alert = body_to_json(created.into_body()).await;
    assert_eq!(alert["id"], 5);
}

#[tokio::test]
async fn test_stats_summary_shape() {
    let router = build_router(make_test_state());

    let response = router.oneshot(get("/api/stats/summary")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert!(json["total_voters_processed"].is_number());
    assert!(json["avg_processing_time"].is_string() || json["avg_processing_time"].is_number());
    assert!(json["peak_hour"].as_str().unwrap().ends_with(":00"));
    assert_eq!(json["special_cases"], 5);
}

#[tokio::test]
async fn test_connection_status_toggle_echoes() {
    let router = build_router(make_test_state());

    let probe = router.clone().oneshot(get("/api/connection-status")).await.unwrap();
    let json = body_to_json(probe.into_body()).await;
    assert_eq!(json["connected"], true);

    let toggled = router
        .oneshot(post_json(
            "/api/connection-status/toggle",
            &json!({ "connected": false }),
        ))
        .await
        .unwrap();
    let json = body_to_json(toggled.into_body()).await;
    assert_eq!(json["connected"], false);
}

// =========================================================================
// Biometrics, accessibility, mobile notifications
// =========================================================================

#[tokio::test]
async fn test_seeded_biometric_is_verified_for_first_voter() {
    let router = build_router(make_test_state());

    let response = router.oneshot(get("/api/biometrics/voter/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["verified"], true);
    assert_eq!(json["verified_by"], 2);
}

#[tokio::test]
async fn test_biometric_verify_endpoint() {
    let router = build_router(make_test_state());

    // Voter 2's seeded record starts unverified.
    let before = router.clone().oneshot(get("/api/biometrics/voter/2")).await.unwrap();
    let json = body_to_json(before.into_body()).await;
    assert_eq!(json["verified"], false);
    let id = json["id"].as_u64().unwrap();

    let verified = router
        .oneshot(put_json(&format!("/api/biometrics/{id}/verify"), &json!({})))
        .await
        .unwrap();

    assert_eq!(verified.status(), StatusCode::OK);
    let json = body_to_json(verified.into_body()).await;
    assert_eq!(json["verified"], true);
}

#[tokio::test]
async fn test_accessibility_partial_update() {
    let router = build_router(make_test_state());

    let before = router.clone().oneshot(get("/api/accessibility/voter/1")).await.unwrap();
    let json = body_to_json(before.into_body()).await;
    assert_eq!(json["visual_assistance"], true);
    let id = json["id"].as_u64().unwrap();

    let updated = router
        .oneshot(put_json(
            &format!("/api/accessibility/{id}"),
            &json!({ "language_preference": "spanish" }),
        ))
        .await
        .unwrap();

    assert_eq!(updated.status(), StatusCode::OK);
    let json = body_to_json(updated.into_body()).await;
    // Supplied field changed, untouched fields kept.
    assert_eq!(json["language_preference"], "spanish");
    assert_eq!(json["visual_assistance"], true);
    assert_eq!(json["other_needs"], "Larger text on screen");
}

#[tokio::test]
async fn test_mobile_notification_code_flow() {
    let router = build_router(make_test_state());

    // Voter 2's seeded channel starts unverified; read its code back.
    let settings = router
        .clone()
        .oneshot(get("/api/mobile-notifications/voter/2"))
        .await
        .unwrap();
    let json = body_to_json(settings.into_body()).await;
    assert_eq!(json["verified"], false);
    let id = json["id"].as_u64().unwrap();
    let code = json["verification_code"].as_str().unwrap().to_string();
    assert_eq!(code.len(), 6);

    // Wrong code is rejected and the channel stays unverified.
    let rejected = router
        .clone()
        .oneshot(post_json(
            &format!("/api/mobile-notifications/{id}/verify"),
            &json!({ "verification_code": "000000x" }),
        ))
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);

    let still = router
        .clone()
        .oneshot(get("/api/mobile-notifications/voter/2"))
        .await
        .unwrap();
    let json = body_to_json(still.into_body()).await;
    assert_eq!(json["verified"], false);

    // Sending before verification is rejected.
    let unsent = router
        .clone()
        .oneshot(post_json(
            &format!("/api/mobile-notifications/{id}/send"),
            &json!({ "message": "Your station is ready" }),
        ))
        .await
        .unwrap();
    assert_eq!(unsent.status(), StatusCode::BAD_REQUEST);

    // The exact stored code verifies the channel; sends then succeed.
    let verified = router
        .clone()
        .oneshot(post_json(
            &format!("/api/mobile-notifications/{id}/verify"),
            &json!({ "verification_code": code }),
        ))
        .await
        .unwrap();
    assert_eq!(verified.status(), StatusCode::OK);

    let sent = router
        .oneshot(post_json(
            &format!("/api/mobile-notifications/{id}/send"),
            &json!({ "message": "Your station is ready" }),
        ))
        .await
        .unwrap();
    assert_eq!(sent.status(), StatusCode::OK);
    let json = body_to_json(sent.into_body()).await;
    assert_eq!(json["success"], true);
}

// =========================================================================
// Anomalies, forecasts, audit records
// =========================================================================

#[tokio::test]
async fn test_anomaly_resolution_appends_actions() {
    let router = build_router(make_test_state());

    // The seed resolves anomaly 1 once already; resolving again appends.
    let response = router
        .clone()
        .oneshot(put_json(
            "/api/anomalies/1/resolve",
            &json!({ "user_id": 1, "resolution": "Re-reviewed after shift change" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "resolved");
    assert_eq!(json["actions"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_prediction_accuracy_worked_example() {
    let router = build_router(make_test_state());

    // Hour 23 avoids colliding with the seeded 8-18 forecasts.
    let created = router
        .clone()
        .oneshot(post_json(
            "/api/predictive-analytics",
            &json!({
                "hour_of_day": 23,
                "day_of_week": 2,
                "predicted_voter_volume": 20,
                "predicted_wait_time": 10
            }),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let analytic = body_to_json(created.into_body()).await;
    let id = analytic["id"].as_u64().unwrap();

    let scored = router
        .oneshot(put_json(
            &format!("/api/predictive-analytics/{id}/update-actuals"),
            &json!({ "actual_voter_volume": 22, "actual_wait_time": 9 }),
        ))
        .await
        .unwrap();

    assert_eq!(scored.status(), StatusCode::OK);
    let json = body_to_json(scored.into_body()).await;
    assert_eq!(json["accuracy_percentage"], 90);
}

#[tokio::test]
async fn test_time_slot_query_rejects_out_of_range() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(get("/api/predictive-analytics/time-slot?hour_of_day=25&day_of_week=2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_voter_audit_trail() {
    let router = build_router(make_test_state());

    let response = router
        .clone()
        .oneshot(get("/api/blockchain-transactions/voter/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    let transactions = json.as_array().unwrap();
    assert_eq!(transactions.len(), 3);
    assert!(transactions.iter().all(|t| t["verified"] == true));

    // New records start unverified and flip on the verify endpoint.
    let created = router
        .clone()
        .oneshot(post_json(
            "/api/blockchain-transactions",
            &json!({
                "transaction_type": "check_in",
                "transaction_hash": "0x5151fa2e193ea21de9ee97e1971d2c3b7480cf12",
                "block_number": 12345681,
                "voter_id": 2,
                "polling_station_id": "station_2"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let transaction = body_to_json(created.into_body()).await;
    assert_eq!(transaction["verified"], false);
    let id = transaction["id"].as_u64().unwrap();

    let verified = router
        .oneshot(put_json(
            &format!("/api/blockchain-transactions/{id}/verify"),
            &json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(verified.status(), StatusCode::OK);
    let json = body_to_json(verified.into_body()).await;
    assert_eq!(json["verified"], true);
}

#[tokio::test]
async fn test_nonexistent_route_returns_404() {
    let router = build_router(make_test_state());

    let response = router.oneshot(get("/api/nonexistent")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
