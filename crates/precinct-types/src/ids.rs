//! Type-safe identifier wrappers around sequential integers.
//!
//! Every entity collection in the store assigns its own sequential
//! identifiers starting at 1, mirroring database serial columns. Wrapping
//! the raw integer in a per-entity newtype prevents accidental mixing of
//! identifiers at compile time: a [`VoterId`] cannot be passed where a
//! [`StationId`] is expected.
//!
//! Identifiers are allocated by the owning collection and never reused;
//! the `new()` constructors exist for deserialization boundaries, seed
//! data, and tests.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around `u32` with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub u32);

        impl $name {
            /// Wrap a raw identifier value.
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Return the inner integer value.
            pub const fn into_inner(self) -> u32 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a poll worker or administrator account.
    UserId
}

define_id! {
    /// Unique identifier for a registered voter record.
    ///
    /// Distinct from the external registration number printed on the
    /// voter's ID card, which is a string field on the record itself.
    VoterId
}

define_id! {
    /// Unique identifier for a waiting-line entry.
    QueueItemId
}

define_id! {
    /// Unique identifier for a physical check-in station.
    StationId
}

define_id! {
    /// Unique identifier for a reported polling-place issue.
    IssueId
}

define_id! {
    /// Unique identifier for a monitored system component's status row.
    SystemStatusId
}

define_id! {
    /// Unique identifier for a broadcast alert.
    AlertId
}

define_id! {
    /// Unique identifier for a coordinator message.
    MessageId
}

define_id! {
    /// Unique identifier for an hourly statistics row.
    StatId
}

define_id! {
    /// Unique identifier for a biometric verification record.
    BiometricId
}

define_id! {
    /// Unique identifier for a voter's accessibility preferences.
    AccessibilityPreferenceId
}

define_id! {
    /// Unique identifier for a voter's mobile notification settings.
    MobileNotificationId
}

define_id! {
    /// Unique identifier for a flagged anomaly.
    AnomalyId
}

define_id! {
    /// Unique identifier for a stored turnout prediction.
    PredictiveAnalyticId
}

define_id! {
    /// Unique identifier for a simulated blockchain audit record.
    BlockchainTransactionId
}
