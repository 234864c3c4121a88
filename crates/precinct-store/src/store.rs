//! The in-memory store backing every REST endpoint.
//!
//! [`PollStore`] holds one [`Collection`] per entity type and provides
//! create/read/update/list operations on each, standing in for the
//! relational database a production deployment would use. All state is
//! process-local and lost on restart.
//!
//! The store is a plain struct with no interior locking: the API layer
//! wraps it in an `Arc<RwLock>` and takes the write guard for the whole
//! of any multi-entity flow, which serializes mutations and keeps the
//! sequential id counters race-free.
//!
//! Account and roster operations live here; the remaining entity
//! operations are split across the sibling modules by domain.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use precinct_types::{
    AccessibilityPreference, AccessibilityPreferenceId, Alert, AlertId, Anomaly, AnomalyId,
    Biometric, BiometricId, BlockchainTransaction, BlockchainTransactionId, Issue, IssueId,
    Message, MessageId, MobileNotification, MobileNotificationId, NewUser, NewVoter,
    PredictiveAnalytic, PredictiveAnalyticId, QueueItem, QueueItemId, Stat, StatId, Station,
    StationId, SystemStatus, SystemStatusId, User, UserId, UserRole, Voter, VoterId,
};

use crate::collection::Collection;
use crate::error::StoreError;

/// The in-memory entity store.
///
/// Construct one per process with [`PollStore::new`] (or
/// [`PollStore::with_seed`] in tests for deterministic randomness), seed
/// it with [`PollStore::seed_demo_data`], and share it behind the API
/// state. Every collection allocates its own sequential identifiers
/// starting at 1.
#[derive(Debug)]
pub struct PollStore {
    /// Staff accounts.
    pub(crate) users: Collection<UserId, User>,
    /// The voter roster.
    pub(crate) voters: Collection<VoterId, Voter>,
    /// Waiting-line entries.
    pub(crate) queue_items: Collection<QueueItemId, QueueItem>,
    /// Check-in stations.
    pub(crate) stations: Collection<StationId, Station>,
    /// Reported issues.
    pub(crate) issues: Collection<IssueId, Issue>,
    /// Monitored component health rows.
    pub(crate) system_statuses: Collection<SystemStatusId, SystemStatus>,
    /// Broadcast alerts.
    pub(crate) alerts: Collection<AlertId, Alert>,
    /// Coordinator messages.
    pub(crate) messages: Collection<MessageId, Message>,
    /// Hourly statistics rows.
    pub(crate) stats: Collection<StatId, Stat>,
    /// Biometric verification records.
    pub(crate) biometrics: Collection<BiometricId, Biometric>,
    /// Accessibility preference records.
    pub(crate) accessibility_preferences:
        Collection<AccessibilityPreferenceId, AccessibilityPreference>,
    /// Mobile notification settings.
    pub(crate) mobile_notifications: Collection<MobileNotificationId, MobileNotification>,
    /// Flagged anomalies.
    pub(crate) anomalies: Collection<AnomalyId, Anomaly>,
    /// Stored turnout forecasts.
    pub(crate) predictive_analytics: Collection<PredictiveAnalyticId, PredictiveAnalytic>,
    /// Simulated audit records.
    pub(crate) blockchain_transactions:
        Collection<BlockchainTransactionId, BlockchainTransaction>,
    /// Random source for demo stat values and verification codes.
    /// Owned by the store so tests can seed it deterministically.
    pub(crate) rng: StdRng,
}

impl PollStore {
    /// Create an empty store with an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create an empty store with a deterministic random source.
    ///
    /// Verification codes and seeded demo stat values become repeatable,
    /// which tests rely on.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            users: Collection::new(),
            voters: Collection::new(),
            queue_items: Collection::new(),
            stations: Collection::new(),
            issues: Collection::new(),
            system_statuses: Collection::new(),
            alerts: Collection::new(),
            messages: Collection::new(),
            stats: Collection::new(),
            biometrics: Collection::new(),
            accessibility_preferences: Collection::new(),
            mobile_notifications: Collection::new(),
            anomalies: Collection::new(),
            predictive_analytics: Collection::new(),
            blockchain_transactions: Collection::new(),
            rng,
        }
    }

    // -------------------------------------------------------------------
    // User operations
    // -------------------------------------------------------------------

    /// Create a staff account. Role defaults to poll worker.
    pub fn create_user(&mut self, input: NewUser) -> User {
        let id = self.users.allocate();
        let user = User {
            id,
            username: input.username,
            password: input.password,
            full_name: input.full_name,
            station: input.station,
            role: input.role.unwrap_or(UserRole::PollWorker),
        };
        self.users.insert(id, user.clone());
        user
    }

    /// Get a staff account by id.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(id)
    }

    /// Get a staff account by its unique login name.
    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.values().find(|user| user.username == username)
    }

    // -------------------------------------------------------------------
    // Voter operations
    // -------------------------------------------------------------------

    /// Add a voter to the roster. New voters start not checked in.
    pub fn create_voter(&mut self, input: NewVoter) -> Voter {
        let id = self.voters.allocate();
        let voter = Voter {
            id,
            voter_id: input.voter_id,
            name: input.name,
            date_of_birth: input.date_of_birth,
            address: input.address,
            precinct: input.precinct,
            checked_in: false,
            checked_in_at: None,
            checked_in_by: None,
        };
        self.voters.insert(id, voter.clone());
        voter
    }

    /// Get a voter by record id.
    pub fn voter(&self, id: VoterId) -> Option<&Voter> {
        self.voters.get(id)
    }

    /// Get a voter by the unique external registration number on their
    /// ID card.
    pub fn voter_by_voter_id(&self, voter_id: &str) -> Option<&Voter> {
        self.voters.values().find(|voter| voter.voter_id == voter_id)
    }

    /// Iterate over the full roster in id order.
    pub fn all_voters(&self) -> impl Iterator<Item = &Voter> {
        self.voters.values()
    }

    /// Check a voter in, stamping the time and operator.
    ///
    /// The transition is one-way: `checked_in` never flips back. Checking
    /// in an already-checked-in voter re-stamps `checked_in_at` and
    /// `checked_in_by` with the latest values.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::VoterNotFound`] if the id is absent.
    pub fn check_in_voter(&mut self, id: VoterId, user_id: UserId) -> Result<Voter, StoreError> {
        let voter = self
            .voters
            .get_mut(id)
            .ok_or(StoreError::VoterNotFound(id))?;
        voter.checked_in = true;
        voter.checked_in_at = Some(Utc::now());
        voter.checked_in_by = Some(user_id);
        Ok(voter.clone())
    }
}

impl Default for PollStore {
    fn default() -> Self {
        Self::new()
    }
}
