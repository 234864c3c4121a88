//! Entity records held by the in-memory store.
//!
//! Each struct mirrors one logical database table. Identifier fields use
//! the newtypes from [`crate::ids`]; timestamps are UTC. Records are plain
//! data: all lifecycle rules (one-way transitions, derived fields) live in
//! the store operations, not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    AlertKind, AnomalyKind, AnomalySeverity, AnomalyStatus, BiometricType, ComponentStatus,
    IssueStatus, NotificationChannel, QueueEntryType, QueueStatus, StationStatus, TransactionType,
    UserRole,
};
use crate::ids::{
    AccessibilityPreferenceId, AlertId, AnomalyId, BiometricId, BlockchainTransactionId, IssueId,
    MessageId, MobileNotificationId, PredictiveAnalyticId, QueueItemId, StatId, StationId,
    SystemStatusId, UserId, VoterId,
};

// ---------------------------------------------------------------------------
// Accounts and voters
// ---------------------------------------------------------------------------

/// A poll worker or administrator account.
///
/// Created at seed time only; the demo has no account management surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct User {
    /// Sequential account identifier.
    pub id: UserId,
    /// Login name, unique across accounts.
    pub username: String,
    /// Plaintext demo password. Redacted from every API response.
    pub password: String,
    /// Display name.
    pub full_name: String,
    /// Station number the worker is assigned to, if any.
    pub station: Option<u32>,
    /// Account role.
    pub role: UserRole,
}

/// A registered voter on the precinct roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Voter {
    /// Sequential record identifier.
    pub id: VoterId,
    /// External registration number printed on the voter's ID card,
    /// unique across the roster.
    pub voter_id: String,
    /// Full legal name.
    pub name: String,
    /// Date of birth as printed on the registration record.
    pub date_of_birth: String,
    /// Registered street address.
    pub address: String,
    /// Assigned precinct name.
    pub precinct: String,
    /// Whether the voter has checked in. Flips true exactly once.
    pub checked_in: bool,
    /// When the voter checked in.
    pub checked_in_at: Option<DateTime<Utc>>,
    /// The operator who performed the check-in.
    pub checked_in_by: Option<UserId>,
}

// ---------------------------------------------------------------------------
// Queue and stations
// ---------------------------------------------------------------------------

/// A voter's entry in the waiting line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct QueueItem {
    /// Sequential entry identifier.
    pub id: QueueItemId,
    /// The voter waiting in line.
    pub voter_id: VoterId,
    /// Position number handed to the voter.
    pub number: u32,
    /// Current processing state.
    pub status: QueueStatus,
    /// Category of the entry.
    pub entry_type: QueueEntryType,
    /// Estimated wait in minutes at entry time.
    pub wait_time_minutes: Option<u32>,
    /// When the voter joined the line.
    pub entered_at: DateTime<Utc>,
    /// When processing finished (`completed` or `issue`).
    pub processed_at: Option<DateTime<Utc>>,
    /// The operator who finished processing.
    pub processed_by: Option<UserId>,
}

/// A physical check-in station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Station {
    /// Sequential station identifier.
    pub id: StationId,
    /// Station number posted on the floor, unique across stations.
    pub number: u32,
    /// Operational state.
    pub status: StationStatus,
    /// The operator currently staffing the station.
    pub operator_id: Option<UserId>,
    /// Running count of voters processed. Monotonically incremented.
    pub voters_processed: u32,
}

/// A reported polling-place issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Issue {
    /// Sequential issue identifier.
    pub id: IssueId,
    /// Free-form issue category, e.g. `id_verification` or
    /// `scanner_malfunction`.
    pub issue_type: String,
    /// Description of the problem.
    pub description: Option<String>,
    /// Lifecycle state.
    pub status: IssueStatus,
    /// When the issue was reported.
    pub reported_at: DateTime<Utc>,
    /// The worker who reported it.
    pub reported_by: Option<UserId>,
    /// When the issue was resolved.
    pub resolved_at: Option<DateTime<Utc>>,
    /// The worker who resolved it.
    pub resolved_by: Option<UserId>,
    /// Whole minutes between report and resolution.
    pub resolution_time: Option<i64>,
}

// ---------------------------------------------------------------------------
// Monitoring and communications
// ---------------------------------------------------------------------------

/// Health row for one monitored system component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SystemStatus {
    /// Sequential row identifier.
    pub id: SystemStatusId,
    /// Component name, unique across rows, e.g. `voter_database`.
    pub component: String,
    /// Current health.
    pub status: ComponentStatus,
    /// When the component was last checked.
    pub last_checked: DateTime<Utc>,
    /// Operator notes.
    pub notes: Option<String>,
}

/// A broadcast alert shown on every dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Alert {
    /// Sequential alert identifier.
    pub id: AlertId,
    /// Severity class.
    pub alert_type: AlertKind,
    /// Short headline.
    pub title: String,
    /// Full alert text.
    pub message: String,
    /// When the alert was raised.
    pub timestamp: DateTime<Utc>,
}

/// A message from an election coordinator to the polling place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Message {
    /// Sequential message identifier.
    pub id: MessageId,
    /// Sending office or coordinator.
    pub sender: String,
    /// Message text.
    pub message: String,
    /// When the message was sent.
    pub timestamp: DateTime<Utc>,
}

/// One hour of aggregate processing statistics.
///
/// One row is intended per hour per day; the store does not enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Stat {
    /// Sequential row identifier.
    pub id: StatId,
    /// Day the row belongs to.
    pub date: DateTime<Utc>,
    /// Hour of day (0-23).
    pub hour: u32,
    /// Voters processed during the hour.
    pub voters_processed: u32,
    /// Average per-voter processing time in seconds.
    pub average_processing_time: Option<u32>,
    /// Average wait time in minutes.
    pub wait_time: Option<u32>,
    /// Voters per hour throughput.
    pub throughput: Option<u32>,
}

// ---------------------------------------------------------------------------
// Voter enhancements
// ---------------------------------------------------------------------------

/// A biometric verification record for a voter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Biometric {
    /// Sequential record identifier.
    pub id: BiometricId,
    /// The voter the record belongs to.
    pub voter_id: VoterId,
    /// Capture modality.
    pub biometric_type: BiometricType,
    /// Opaque reference to where the capture is stored.
    pub data_reference: Option<String>,
    /// Whether the capture has been verified. Flips true exactly once.
    pub verified: bool,
    /// When verification happened.
    pub verified_at: Option<DateTime<Utc>>,
    /// The operator who verified.
    pub verified_by: Option<UserId>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

/// A voter's accessibility preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AccessibilityPreference {
    /// Sequential record identifier.
    pub id: AccessibilityPreferenceId,
    /// The voter the preferences belong to.
    pub voter_id: VoterId,
    /// Needs visual assistance (large text, screen reader).
    pub visual_assistance: bool,
    /// Needs hearing assistance (audio loop, captions).
    pub hearing_assistance: bool,
    /// Needs mobility assistance (accessible booth).
    pub mobility_assistance: bool,
    /// Preferred interface language.
    pub language_preference: String,
    /// Free-form additional needs.
    pub other_needs: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

/// A voter's mobile notification settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MobileNotification {
    /// Sequential record identifier.
    pub id: MobileNotificationId,
    /// The voter the settings belong to.
    pub voter_id: VoterId,
    /// Phone number for SMS delivery.
    pub phone_number: Option<String>,
    /// Address for email delivery.
    pub email: Option<String>,
    /// Whether the voter opted in to notifications.
    pub opted_in: bool,
    /// Six-digit code the voter must echo back to verify the channel.
    pub verification_code: String,
    /// Whether the channel has been verified. Flips true exactly once.
    pub verified: bool,
    /// Preferred delivery channel.
    pub notification_type: NotificationChannel,
    /// When a notification was last sent.
    pub last_notified: Option<DateTime<Utc>>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Anomalies, predictions, audit trail
// ---------------------------------------------------------------------------

/// A flagged unusual event requiring review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Anomaly {
    /// Sequential anomaly identifier.
    pub id: AnomalyId,
    /// Category of the anomaly.
    pub anomaly_type: AnomalyKind,
    /// What was observed.
    pub description: String,
    /// Severity assessment.
    pub severity: AnomalySeverity,
    /// Review state.
    pub status: AnomalyStatus,
    /// When the anomaly was flagged.
    pub detected_at: DateTime<Utc>,
    /// When the anomaly was resolved.
    pub resolved_at: Option<DateTime<Utc>>,
    /// The worker who resolved it.
    pub resolved_by: Option<UserId>,
    /// Free-form context captured at detection time.
    pub metadata: serde_json::Value,
    /// Actions taken, in order. Resolutions append, never replace.
    pub actions: Vec<String>,
}

/// A stored turnout forecast for one hour slot, later compared against
/// the observed actuals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PredictiveAnalytic {
    /// Sequential record identifier.
    pub id: PredictiveAnalyticId,
    /// Day the forecast was made.
    pub date: DateTime<Utc>,
    /// Forecast hour of day (0-23).
    pub hour_of_day: u32,
    /// Forecast day of week (0 = Sunday).
    pub day_of_week: u32,
    /// Predicted voters for the slot.
    pub predicted_voter_volume: Option<u32>,
    /// Observed voters for the slot, filled in after the hour.
    pub actual_voter_volume: Option<u32>,
    /// Predicted wait in minutes.
    pub predicted_wait_time: Option<u32>,
    /// Observed wait in minutes, filled in after the hour.
    pub actual_wait_time: Option<u32>,
    /// Inputs the forecast claims to account for.
    pub factors_considered: Vec<String>,
    /// Overall forecast accuracy, computed when actuals arrive. May be
    /// negative when the prediction was badly off.
    pub accuracy_percentage: Option<i32>,
}

/// A simulated immutable audit record tied to a voter action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BlockchainTransaction {
    /// Sequential record identifier.
    pub id: BlockchainTransactionId,
    /// Kind of event recorded.
    pub transaction_type: TransactionType,
    /// Hex digest of the simulated chain entry.
    pub transaction_hash: String,
    /// Simulated block height.
    pub block_number: Option<u64>,
    /// The voter the record concerns.
    pub voter_id: Option<VoterId>,
    /// Free-form station or booth label.
    pub polling_station_id: Option<String>,
    /// When the record was written.
    pub timestamp: DateTime<Utc>,
    /// Non-sensitive transaction details.
    pub metadata: serde_json::Value,
    /// Whether the record has been verified against the chain. Flips
    /// true exactly once.
    pub verified: bool,
}

// ---------------------------------------------------------------------------
// Derived shapes
// ---------------------------------------------------------------------------

/// Waiting-line counts by status, recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct QueueStats {
    /// Entries with status `waiting`.
    pub waiting: usize,
    /// Entries with status `in_progress`.
    pub in_progress: usize,
    /// Entries with status `completed`.
    pub completed: usize,
}
