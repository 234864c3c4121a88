//! Anomaly review, turnout forecasting, and the simulated audit chain.

use chrono::Utc;

use precinct_types::{
    Anomaly, AnomalyId, AnomalySeverity, AnomalyStatus, BlockchainTransaction,
    BlockchainTransactionId, NewAnomaly, NewBlockchainTransaction, NewPredictiveAnalytic,
    PredictiveAnalytic, PredictiveAnalyticId, UserId, VoterId,
};

use crate::error::StoreError;
use crate::store::PollStore;

/// Accuracy of one forecast metric as a rounded percentage.
///
/// Defined as `round((1 - |predicted - actual| / predicted) * 100)`. A
/// missing or zero prediction yields 0: this guards the division at the
/// cost of a discontinuity, and is preserved as-is from the observed
/// behavior rather than smoothed over.
fn metric_accuracy(predicted: Option<u32>, actual: u32) -> i32 {
    match predicted {
        None | Some(0) => 0,
        Some(predicted) => {
            let predicted = f64::from(predicted);
            let delta = (predicted - f64::from(actual)).abs();
            let raw = (1.0 - delta / predicted) * 100.0;
            #[allow(clippy::cast_possible_truncation)]
            let rounded = raw.round() as i32;
            rounded
        }
    }
}

impl PollStore {
    // -------------------------------------------------------------------
    // Anomaly operations
    // -------------------------------------------------------------------

    /// Flag an anomaly. New anomalies start in the `detected` state with
    /// an empty action log; severity defaults to `low`.
    pub fn create_anomaly(&mut self, input: NewAnomaly) -> Anomaly {
        let id = self.anomalies.allocate();
        let anomaly = Anomaly {
            id,
            anomaly_type: input.anomaly_type,
            description: input.description,
            severity: input.severity.unwrap_or(AnomalySeverity::Low),
            status: AnomalyStatus::Detected,
            detected_at: Utc::now(),
            resolved_at: None,
            resolved_by: None,
            metadata: input.metadata.unwrap_or(serde_json::Value::Null),
            actions: Vec::new(),
        };
        self.anomalies.insert(id, anomaly.clone());
        anomaly
    }

    /// Get an anomaly by id.
    pub fn anomaly(&self, id: AnomalyId) -> Option<&Anomaly> {
        self.anomalies.get(id)
    }

    /// Iterate over all anomalies in id order.
    pub fn all_anomalies(&self) -> impl Iterator<Item = &Anomaly> {
        self.anomalies.values()
    }

    /// Resolve an anomaly, appending the resolution to its action log.
    ///
    /// The append never replaces earlier entries, so resolving twice
    /// leaves two log lines. The status ends `resolved` either way.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AnomalyNotFound`] if the id is absent.
    pub fn resolve_anomaly(
        &mut self,
        id: AnomalyId,
        user_id: UserId,
        resolution: String,
    ) -> Result<Anomaly, StoreError> {
        let anomaly = self
            .anomalies
            .get_mut(id)
            .ok_or(StoreError::AnomalyNotFound(id))?;
        anomaly.status = AnomalyStatus::Resolved;
        anomaly.resolved_at = Some(Utc::now());
        anomaly.resolved_by = Some(user_id);
        anomaly.actions.push(resolution);
        Ok(anomaly.clone())
    }

    // -------------------------------------------------------------------
    // Predictive analytics operations
    // -------------------------------------------------------------------

    /// Store a turnout forecast. Actuals and accuracy stay unset until
    /// [`PollStore::record_prediction_actuals`] fills them in.
    pub fn create_predictive_analytic(
        &mut self,
        input: NewPredictiveAnalytic,
    ) -> PredictiveAnalytic {
        let id = self.predictive_analytics.allocate();
        let analytic = PredictiveAnalytic {
            id,
            date: Utc::now(),
            hour_of_day: input.hour_of_day,
            day_of_week: input.day_of_week,
            predicted_voter_volume: input.predicted_voter_volume,
            actual_voter_volume: None,
            predicted_wait_time: input.predicted_wait_time,
            actual_wait_time: None,
            factors_considered: input.factors_considered.unwrap_or_default(),
            accuracy_percentage: None,
        };
        self.predictive_analytics.insert(id, analytic.clone());
        analytic
    }

    /// Get a forecast by id.
    pub fn predictive_analytic(&self, id: PredictiveAnalyticId) -> Option<&PredictiveAnalytic> {
        self.predictive_analytics.get(id)
    }

    /// Iterate over all forecasts in id order.
    pub fn all_predictive_analytics(&self) -> impl Iterator<Item = &PredictiveAnalytic> {
        self.predictive_analytics.values()
    }

    /// Fill in the observed actuals for a forecast and score it.
    ///
    /// Volume and wait accuracy are computed independently, then averaged
    /// (rounded) into the overall percentage.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PredictiveAnalyticNotFound`] if the id is
    /// absent.
    pub fn record_prediction_actuals(
        &mut self,
        id: PredictiveAnalyticId,
        actual_voter_volume: u32,
        actual_wait_time: u32,
    ) -> Result<PredictiveAnalytic, StoreError> {
        let analytic = self
            .predictive_analytics
            .get_mut(id)
            .ok_or(StoreError::PredictiveAnalyticNotFound(id))?;

        let volume_accuracy = metric_accuracy(analytic.predicted_voter_volume, actual_voter_volume);
        let wait_accuracy = metric_accuracy(analytic.predicted_wait_time, actual_wait_time);
        let overall = (f64::from(volume_accuracy) + f64::from(wait_accuracy)) / 2.0;

        analytic.actual_voter_volume = Some(actual_voter_volume);
        analytic.actual_wait_time = Some(actual_wait_time);
        #[allow(clippy::cast_possible_truncation)]
        {
            analytic.accuracy_percentage = Some(overall.round() as i32);
        }
        Ok(analytic.clone())
    }

    /// Find the forecast stored for an hour/day slot, if any.
    pub fn prediction_for_time_slot(
        &self,
        hour_of_day: u32,
        day_of_week: u32,
    ) -> Option<&PredictiveAnalytic> {
        self.predictive_analytics.values().find(|analytic| {
            analytic.hour_of_day == hour_of_day && analytic.day_of_week == day_of_week
        })
    }

    // -------------------------------------------------------------------
    // Blockchain transaction operations
    // -------------------------------------------------------------------

    /// Write a simulated audit record. Records start unverified with the
    /// current time stamped.
    pub fn create_blockchain_transaction(
        &mut self,
        input: NewBlockchainTransaction,
    ) -> BlockchainTransaction {
        let id = self.blockchain_transactions.allocate();
        let transaction = BlockchainTransaction {
            id,
            transaction_type: input.transaction_type,
            transaction_hash: input.transaction_hash,
            block_number: input.block_number,
            voter_id: input.voter_id,
            polling_station_id: input.polling_station_id,
            timestamp: Utc::now(),
            metadata: input.metadata.unwrap_or(serde_json::Value::Null),
            verified: false,
        };
        self.blockchain_transactions.insert(id, transaction.clone());
        transaction
    }

    /// Get an audit record by id.
    pub fn blockchain_transaction(
        &self,
        id: BlockchainTransactionId,
    ) -> Option<&BlockchainTransaction> {
        self.blockchain_transactions.get(id)
    }

    /// Get an audit record by its unique hash.
    pub fn blockchain_transaction_by_hash(&self, hash: &str) -> Option<&BlockchainTransaction> {
        self.blockchain_transactions
            .values()
            .find(|transaction| transaction.transaction_hash == hash)
    }

    /// Iterate over all audit records in id order.
    pub fn all_blockchain_transactions(&self) -> impl Iterator<Item = &BlockchainTransaction> {
        self.blockchain_transactions.values()
    }

    /// Mark an audit record verified. The flip is one-way.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BlockchainTransactionNotFound`] if the id is
    /// absent.
    pub fn verify_blockchain_transaction(
        &mut self,
        id: BlockchainTransactionId,
    ) -> Result<BlockchainTransaction, StoreError> {
        let transaction = self
            .blockchain_transactions
            .get_mut(id)
            .ok_or(StoreError::BlockchainTransactionNotFound(id))?;
        transaction.verified = true;
        Ok(transaction.clone())
    }

    /// Iterate over the audit records tied to one voter.
    pub fn voter_transactions(
        &self,
        voter_id: VoterId,
    ) -> impl Iterator<Item = &BlockchainTransaction> {
        self.blockchain_transactions
            .values()
            .filter(move |transaction| transaction.voter_id == Some(voter_id))
    }
}

#[cfg(test)]
mod tests {
    use precinct_types::{AnomalyKind, TransactionType};

    use super::*;

    fn forecast(volume: Option<u32>, wait: Option<u32>) -> NewPredictiveAnalytic {
        NewPredictiveAnalytic {
            hour_of_day: 10,
            day_of_week: 2,
            predicted_voter_volume: volume,
            predicted_wait_time: wait,
            factors_considered: Some(vec![String::from("historical_data")]),
        }
    }

    #[test]
    fn accuracy_matches_worked_example() {
        // predicted volume 20 vs actual 22 -> 90; predicted wait 10 vs
        // actual 9 -> 90; overall 90.
        let mut store = PollStore::with_seed(13);
        let analytic = store.create_predictive_analytic(forecast(Some(20), Some(10)));

        let scored = store.record_prediction_actuals(analytic.id, 22, 9).ok();
        assert_eq!(scored.as_ref().and_then(|a| a.accuracy_percentage), Some(90));
        assert_eq!(scored.and_then(|a| a.actual_voter_volume), Some(22));
    }

    #[test]
    fn zero_prediction_scores_zero_for_that_metric() {
        let mut store = PollStore::with_seed(13);
        let analytic = store.create_predictive_analytic(forecast(Some(0), Some(10)));

        // Volume metric is guarded to 0; wait metric 10 vs 10 -> 100;
        // overall round(50).
        let scored = store.record_prediction_actuals(analytic.id, 22, 10).ok();
        assert_eq!(scored.and_then(|a| a.accuracy_percentage), Some(50));
    }

    #[test]
    fn missing_prediction_scores_zero_overall() {
        let mut store = PollStore::with_seed(13);
        let analytic = store.create_predictive_analytic(forecast(None, None));

        let scored = store.record_prediction_actuals(analytic.id, 5, 5).ok();
        assert_eq!(scored.and_then(|a| a.accuracy_percentage), Some(0));
    }

    #[test]
    fn time_slot_lookup_finds_first_match() {
        let mut store = PollStore::with_seed(13);
        let created = store.create_predictive_analytic(forecast(Some(15), Some(5)));

        assert_eq!(
            store.prediction_for_time_slot(10, 2).map(|a| a.id),
            Some(created.id)
        );
        assert!(store.prediction_for_time_slot(11, 2).is_none());
    }

    #[test]
    fn resolving_an_anomaly_twice_appends_two_actions() {
        let mut store = PollStore::with_seed(13);
        let anomaly = store.create_anomaly(NewAnomaly {
            anomaly_type: AnomalyKind::UnusualPattern,
            description: String::from("Spike in check-in rate at station 3"),
            severity: None,
            metadata: Some(serde_json::json!({ "station_id": 3 })),
        });

        let first = store
            .resolve_anomaly(anomaly.id, UserId::new(1), String::from("Reviewed rate chart"))
            .ok();
        let second = store
            .resolve_anomaly(anomaly.id, UserId::new(1), String::from("Confirmed normal variation"))
            .ok();

        assert_eq!(first.map(|a| a.actions.len()), Some(1));
        assert_eq!(second.as_ref().map(|a| a.actions.len()), Some(2));
        assert_eq!(second.map(|a| a.status), Some(AnomalyStatus::Resolved));
    }

    #[test]
    fn voter_transactions_filters_by_voter() {
        let mut store = PollStore::with_seed(13);
        for (voter, hash) in [(1, "0xaaa"), (1, "0xbbb"), (2, "0xccc")] {
            store.create_blockchain_transaction(NewBlockchainTransaction {
                transaction_type: TransactionType::CheckIn,
                transaction_hash: String::from(hash),
                block_number: Some(12_345_678),
                voter_id: Some(VoterId::new(voter)),
                polling_station_id: Some(String::from("station_1")),
                metadata: None,
            });
        }

        assert_eq!(store.voter_transactions(VoterId::new(1)).count(), 2);
        assert_eq!(store.voter_transactions(VoterId::new(3)).count(), 0);
        assert!(store.blockchain_transaction_by_hash("0xbbb").is_some());
    }

    #[test]
    fn audit_verification_is_one_way() {
        let mut store = PollStore::with_seed(13);
        let transaction = store.create_blockchain_transaction(NewBlockchainTransaction {
            transaction_type: TransactionType::VoterVerification,
            transaction_hash: String::from("0xddd"),
            block_number: None,
            voter_id: None,
            polling_station_id: None,
            metadata: None,
        });
        assert!(!transaction.verified);

        let verified = store.verify_blockchain_transaction(transaction.id).ok();
        assert!(verified.is_some_and(|t| t.verified));
    }
}
