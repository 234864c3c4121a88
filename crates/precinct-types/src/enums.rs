//! Enumeration types for the Precinct check-in service.
//!
//! Every closed string set in the REST wire format is a Rust enum
//! serialized in `snake_case`, so payload validation of these fields is
//! performed by deserialization itself: an unknown status or type string
//! fails to parse and never reaches the store.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

/// Role of a staff account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full administrative access to the polling place.
    Admin,
    /// A poll worker operating a check-in station.
    PollWorker,
}

// ---------------------------------------------------------------------------
// Queue
// ---------------------------------------------------------------------------

/// Processing state of a waiting-line entry.
///
/// Transitions are one-directional until `completed` or `issue`, either
/// of which also stamps the processing time and operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum QueueStatus {
    /// Waiting to be called to a station.
    Waiting,
    /// Currently being processed at a station.
    InProgress,
    /// Check-in finished.
    Completed,
    /// Removed from the line pending issue resolution.
    Issue,
    /// Routed to the dedicated special-assistance station.
    SpecialAssistance,
}

/// Category of a waiting-line entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum QueueEntryType {
    /// Regular check-in.
    Standard,
    /// Provisional ballot flow.
    Provisional,
    /// Voter requiring special assistance.
    SpecialAssistance,
}

// ---------------------------------------------------------------------------
// Stations and issues
// ---------------------------------------------------------------------------

/// Operational state of a check-in station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum StationStatus {
    /// Staffed and accepting voters.
    Active,
    /// Closed or unstaffed.
    Inactive,
}

/// Lifecycle state of a reported issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    /// Reported and awaiting resolution.
    Open,
    /// Resolved; resolution time recorded.
    Resolved,
}

// ---------------------------------------------------------------------------
// Monitoring
// ---------------------------------------------------------------------------

/// Health of a monitored system component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum ComponentStatus {
    /// Operating normally.
    Operational,
    /// Functioning with reduced capacity or speed.
    Degraded,
    /// Not functioning.
    Down,
}

/// Severity class of a broadcast alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Something is off but operations continue.
    Warning,
    /// Informational notice.
    Info,
    /// A failure requiring attention.
    Error,
}

// ---------------------------------------------------------------------------
// Voter enhancements
// ---------------------------------------------------------------------------

/// Modality of a biometric verification record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum BiometricType {
    /// Fingerprint scan.
    Fingerprint,
    /// Facial recognition capture.
    FacialRecognition,
}

/// Delivery channel for voter notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum NotificationChannel {
    /// Text message to the registered phone number.
    Sms,
    /// Email to the registered address.
    Email,
}

// ---------------------------------------------------------------------------
// Anomaly detection
// ---------------------------------------------------------------------------

/// Category of a flagged anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    /// A statistical deviation from expected check-in patterns.
    UnusualPattern,
    /// A possible security incident.
    SecurityThreat,
    /// Degraded processing performance.
    PerformanceIssue,
}

/// Severity of a flagged anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum AnomalySeverity {
    /// Monitor only.
    Low,
    /// Review soon.
    Medium,
    /// Immediate attention required.
    High,
}

/// Review state of a flagged anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum AnomalyStatus {
    /// Flagged, not yet reviewed.
    Detected,
    /// Under active review.
    Investigating,
    /// Reviewed and closed with a resolution.
    Resolved,
    /// Reviewed and dismissed as noise.
    FalsePositive,
}

// ---------------------------------------------------------------------------
// Audit trail
// ---------------------------------------------------------------------------

/// Kind of event recorded on the simulated audit chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Identity verification of a voter.
    VoterVerification,
    /// A voter checking in at a station.
    CheckIn,
    /// A ballot being cast.
    VoteCast,
}
