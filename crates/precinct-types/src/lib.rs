//! Shared type definitions for the Precinct voter check-in service.
//!
//! This crate is the single source of truth for all types used across the
//! Precinct workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the check-in dashboard.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe sequential-integer wrappers for entity identifiers
//! - [`enums`] -- Closed string sets of the wire format (statuses, kinds)
//! - [`structs`] -- Entity records held by the in-memory store
//! - [`inputs`] -- Creation and update payloads accepted by the store

pub mod enums;
pub mod ids;
pub mod inputs;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    AlertKind, AnomalyKind, AnomalySeverity, AnomalyStatus, BiometricType, ComponentStatus,
    IssueStatus, NotificationChannel, QueueEntryType, QueueStatus, StationStatus, TransactionType,
    UserRole,
};
pub use ids::{
    AccessibilityPreferenceId, AlertId, AnomalyId, BiometricId, BlockchainTransactionId, IssueId,
    MessageId, MobileNotificationId, PredictiveAnalyticId, QueueItemId, StatId, StationId,
    SystemStatusId, UserId, VoterId,
};
pub use inputs::{
    AccessibilityUpdate, NewAccessibilityPreference, NewAlert, NewAnomaly, NewBiometric,
    NewBlockchainTransaction, NewIssue, NewMessage, NewMobileNotification, NewPredictiveAnalytic,
    NewQueueItem, NewStat, NewStation, NewSystemStatus, NewUser, NewVoter,
};
pub use structs::{
    AccessibilityPreference, Alert, Anomaly, Biometric, BlockchainTransaction, Issue, Message,
    MobileNotification, PredictiveAnalytic, QueueItem, QueueStats, Stat, Station, SystemStatus,
    User, Voter,
};

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::UserId::export_all();
        let _ = crate::ids::VoterId::export_all();
        let _ = crate::ids::QueueItemId::export_all();
        let _ = crate::ids::StationId::export_all();
        let _ = crate::ids::IssueId::export_all();
        let _ = crate::ids::SystemStatusId::export_all();
        let _ = crate::ids::AlertId::export_all();
        let _ = crate::ids::MessageId::export_all();
        let _ = crate::ids::StatId::export_all();
        let _ = crate::ids::BiometricId::export_all();
        let _ = crate::ids::AccessibilityPreferenceId::export_all();
        let _ = crate::ids::MobileNotificationId::export_all();
        let _ = crate::ids::AnomalyId::export_all();
        let _ = crate::ids::PredictiveAnalyticId::export_all();
        let _ = crate::ids::BlockchainTransactionId::export_all();

        // Enums
        let _ = crate::enums::UserRole::export_all();
        let _ = crate::enums::QueueStatus::export_all();
        let _ = crate::enums::QueueEntryType::export_all();
        let _ = crate::enums::StationStatus::export_all();
        let _ = crate::enums::IssueStatus::export_all();
        let _ = crate::enums::ComponentStatus::export_all();
        let _ = crate::enums::AlertKind::export_all();
        let _ = crate::enums::BiometricType::export_all();
        let _ = crate::enums::NotificationChannel::export_all();
        let _ = crate::enums::AnomalyKind::export_all();
        let _ = crate::enums::AnomalySeverity::export_all();
        let _ = crate::enums::AnomalyStatus::export_all();
        let _ = crate::enums::TransactionType::export_all();

        // Structs
        let _ = crate::structs::User::export_all();
        let _ = crate::structs::Voter::export_all();
        let _ = crate::structs::QueueItem::export_all();
        let _ = crate::structs::Station::export_all();
        let _ = crate::structs::Issue::export_all();
        let _ = crate::structs::SystemStatus::export_all();
        let _ = crate::structs::Alert::export_all();
        let _ = crate::structs::Message::export_all();
        let _ = crate::structs::Stat::export_all();
        let _ = crate::structs::Biometric::export_all();
        let _ = crate::structs::AccessibilityPreference::export_all();
        let _ = crate::structs::MobileNotification::export_all();
        let _ = crate::structs::Anomaly::export_all();
        let _ = crate::structs::PredictiveAnalytic::export_all();
        let _ = crate::structs::BlockchainTransaction::export_all();
        let _ = crate::structs::QueueStats::export_all();

        // Inputs
        let _ = crate::inputs::NewUser::export_all();
        let _ = crate::inputs::NewVoter::export_all();
        let _ = crate::inputs::NewQueueItem::export_all();
        let _ = crate::inputs::NewStation::export_all();
        let _ = crate::inputs::NewIssue::export_all();
        let _ = crate::inputs::NewSystemStatus::export_all();
        let _ = crate::inputs::NewAlert::export_all();
        let _ = crate::inputs::NewMessage::export_all();
        let _ = crate::inputs::NewStat::export_all();
        let _ = crate::inputs::NewBiometric::export_all();
        let _ = crate::inputs::NewAccessibilityPreference::export_all();
        let _ = crate::inputs::AccessibilityUpdate::export_all();
        let _ = crate::inputs::NewMobileNotification::export_all();
        let _ = crate::inputs::NewAnomaly::export_all();
        let _ = crate::inputs::NewPredictiveAnalytic::export_all();
        let _ = crate::inputs::NewBlockchainTransaction::export_all();
    }

    #[test]
    fn voter_record_round_trips() {
        use crate::ids::VoterId;
        use crate::structs::Voter;

        let voter = Voter {
            id: VoterId::new(1),
            voter_id: String::from("100123"),
            name: String::from("Sarah Johnson"),
            date_of_birth: String::from("05/12/1985"),
            address: String::from("123 Main St, Cityville"),
            precinct: String::from("East District 4"),
            checked_in: false,
            checked_in_at: None,
            checked_in_by: None,
        };

        let json = serde_json::to_string(&voter).ok();
        assert!(json.is_some());
        let restored: Result<Voter, _> = serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(restored.ok().as_ref(), Some(&voter));
    }
}
