//! Creation and update payloads accepted by the store.
//!
//! Each `New*` struct carries only the caller-supplied fields of the
//! corresponding entity; the store assigns identifiers and fills defaults
//! and timestamps on insert. Optional fields left as `None` take the
//! entity's documented default.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    AlertKind, AnomalyKind, AnomalySeverity, BiometricType, ComponentStatus, NotificationChannel,
    QueueEntryType, QueueStatus, StationStatus, TransactionType, UserRole,
};
use crate::ids::{UserId, VoterId};

/// Payload for creating a staff account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewUser {
    /// Login name; must be unique.
    pub username: String,
    /// Plaintext demo password.
    pub password: String,
    /// Display name.
    pub full_name: String,
    /// Assigned station number, if any.
    pub station: Option<u32>,
    /// Account role. Defaults to poll worker.
    pub role: Option<UserRole>,
}

/// Payload for adding a voter to the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewVoter {
    /// External registration number; must be unique.
    pub voter_id: String,
    /// Full legal name.
    pub name: String,
    /// Date of birth as printed on the registration record.
    pub date_of_birth: String,
    /// Registered street address.
    pub address: String,
    /// Assigned precinct name.
    pub precinct: String,
}

/// Payload for adding a voter to the waiting line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewQueueItem {
    /// The voter joining the line.
    pub voter_id: VoterId,
    /// Position number handed to the voter.
    pub number: u32,
    /// Initial status. Defaults to `waiting`.
    pub status: Option<QueueStatus>,
    /// Entry category. Defaults to `standard`.
    pub entry_type: Option<QueueEntryType>,
    /// Estimated wait in minutes.
    pub wait_time_minutes: Option<u32>,
}

/// Payload for registering a check-in station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewStation {
    /// Station number posted on the floor; must be unique.
    pub number: u32,
    /// Initial state. Defaults to `inactive`.
    pub status: Option<StationStatus>,
    /// Operator staffing the station.
    pub operator_id: Option<UserId>,
}

/// Payload for reporting an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewIssue {
    /// Free-form issue category.
    pub issue_type: String,
    /// Description of the problem.
    pub description: Option<String>,
    /// The worker reporting the issue.
    pub reported_by: Option<UserId>,
}

/// Payload for registering a monitored component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewSystemStatus {
    /// Component name; must be unique.
    pub component: String,
    /// Initial health. Defaults to `operational`.
    pub status: Option<ComponentStatus>,
    /// Operator notes.
    pub notes: Option<String>,
}

/// Payload for raising an alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewAlert {
    /// Severity class.
    pub alert_type: AlertKind,
    /// Short headline.
    pub title: String,
    /// Full alert text.
    pub message: String,
}

/// Payload for posting a coordinator message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewMessage {
    /// Sending office or coordinator.
    pub sender: String,
    /// Message text.
    pub message: String,
}

/// Payload for recording an hourly statistics row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewStat {
    /// Hour of day (0-23).
    pub hour: u32,
    /// Voters processed during the hour. Defaults to 0.
    pub voters_processed: Option<u32>,
    /// Average per-voter processing time in seconds.
    pub average_processing_time: Option<u32>,
    /// Average wait time in minutes.
    pub wait_time: Option<u32>,
    /// Voters per hour throughput.
    pub throughput: Option<u32>,
}

/// Payload for enrolling a biometric record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewBiometric {
    /// The voter the record belongs to.
    pub voter_id: VoterId,
    /// Capture modality.
    pub biometric_type: BiometricType,
    /// Opaque reference to where the capture is stored.
    pub data_reference: Option<String>,
}

/// Payload for creating a voter's accessibility preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewAccessibilityPreference {
    /// The voter the preferences belong to.
    pub voter_id: VoterId,
    /// Needs visual assistance. Defaults to false.
    pub visual_assistance: Option<bool>,
    /// Needs hearing assistance. Defaults to false.
    pub hearing_assistance: Option<bool>,
    /// Needs mobility assistance. Defaults to false.
    pub mobility_assistance: Option<bool>,
    /// Preferred interface language. Defaults to `english`.
    pub language_preference: Option<String>,
    /// Free-form additional needs.
    pub other_needs: Option<String>,
}

/// Partial update to accessibility preferences.
///
/// Absent fields leave the stored values untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AccessibilityUpdate {
    /// New visual-assistance flag.
    pub visual_assistance: Option<bool>,
    /// New hearing-assistance flag.
    pub hearing_assistance: Option<bool>,
    /// New mobility-assistance flag.
    pub mobility_assistance: Option<bool>,
    /// New language preference.
    pub language_preference: Option<String>,
    /// New additional-needs text.
    pub other_needs: Option<String>,
}

/// Payload for creating a voter's mobile notification settings.
///
/// The store generates the verification code; it is never supplied by
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewMobileNotification {
    /// The voter the settings belong to.
    pub voter_id: VoterId,
    /// Phone number for SMS delivery.
    pub phone_number: Option<String>,
    /// Address for email delivery.
    pub email: Option<String>,
    /// Whether the voter opted in. Defaults to false.
    pub opted_in: Option<bool>,
    /// Preferred delivery channel. Defaults to SMS.
    pub notification_type: Option<NotificationChannel>,
}

/// Payload for flagging an anomaly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewAnomaly {
    /// Category of the anomaly.
    pub anomaly_type: AnomalyKind,
    /// What was observed.
    pub description: String,
    /// Severity assessment. Defaults to `low`.
    pub severity: Option<AnomalySeverity>,
    /// Free-form context captured at detection time.
    pub metadata: Option<serde_json::Value>,
}

/// Payload for storing a turnout forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewPredictiveAnalytic {
    /// Forecast hour of day (0-23).
    pub hour_of_day: u32,
    /// Forecast day of week (0 = Sunday).
    pub day_of_week: u32,
    /// Predicted voters for the slot.
    pub predicted_voter_volume: Option<u32>,
    /// Predicted wait in minutes.
    pub predicted_wait_time: Option<u32>,
    /// Inputs the forecast claims to account for.
    pub factors_considered: Option<Vec<String>>,
}

/// Payload for writing a simulated audit record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewBlockchainTransaction {
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
    /// Non-sensitive transaction details.
    pub metadata: Option<serde_json::Value>,
}
