//! Error types for the `precinct-store` crate.
//!
//! All fallible store operations return [`StoreError`] through the
//! standard [`Result`] type. Lookups that can legitimately miss return
//! [`Option`] instead and never fail.

use precinct_types::{
    AccessibilityPreferenceId, AnomalyId, BiometricId, BlockchainTransactionId, IssueId,
    MobileNotificationId, PredictiveAnalyticId, QueueItemId, StationId, SystemStatusId, VoterId,
};

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A voter was not found in the roster.
    #[error("voter not found: {0}")]
    VoterNotFound(VoterId),

    /// A queue entry was not found.
    #[error("queue item not found: {0}")]
    QueueItemNotFound(QueueItemId),

    /// A station was not found.
    #[error("station not found: {0}")]
    StationNotFound(StationId),

    /// An issue was not found.
    #[error("issue not found: {0}")]
    IssueNotFound(IssueId),

    /// A system component status row was not found.
    #[error("system status not found: {0}")]
    SystemStatusNotFound(SystemStatusId),

    /// A biometric record was not found.
    #[error("biometric record not found: {0}")]
    BiometricNotFound(BiometricId),

    /// An accessibility preference record was not found.
    #[error("accessibility preference not found: {0}")]
    AccessibilityPreferenceNotFound(AccessibilityPreferenceId),

    /// A mobile notification record was not found.
    #[error("mobile notification not found: {0}")]
    MobileNotificationNotFound(MobileNotificationId),

    /// An anomaly record was not found.
    #[error("anomaly not found: {0}")]
    AnomalyNotFound(AnomalyId),

    /// A predictive analytic record was not found.
    #[error("predictive analytic not found: {0}")]
    PredictiveAnalyticNotFound(PredictiveAnalyticId),

    /// A blockchain transaction record was not found.
    #[error("blockchain transaction not found: {0}")]
    BlockchainTransactionNotFound(BlockchainTransactionId),

    /// The supplied verification code does not match the stored code.
    #[error("invalid verification code for notification {0}")]
    VerificationCodeMismatch(MobileNotificationId),

    /// A notification send was attempted on an unverified channel.
    #[error("notification channel {0} is not verified")]
    NotificationNotVerified(MobileNotificationId),
}

impl StoreError {
    /// Whether this error means a referenced identifier was absent.
    ///
    /// The API layer maps these to HTTP 404 and everything else to 400.
    pub const fn is_not_found(&self) -> bool {
        !matches!(
            self,
            Self::VerificationCodeMismatch(_) | Self::NotificationNotVerified(_)
        )
    }
}
