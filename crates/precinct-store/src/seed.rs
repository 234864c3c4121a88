//! Demo data seeded into the store on every process start.
//!
//! The routine is idempotent: each group of rows is inserted only when
//! its collection is empty (users are guarded per username), so calling
//! it on every start never duplicates data. The data set is fixed except
//! where noted -- hourly stat values, forecast actuals, and verification
//! codes draw from the store's random source for demo variety.

use chrono::{Datelike, Local, Timelike};
use rand::Rng;
use tracing::info;

use precinct_types::{
    AlertKind, AnomalyKind, AnomalySeverity, BiometricType, ComponentStatus,
    NewAccessibilityPreference, NewAlert, NewAnomaly, NewBiometric, NewBlockchainTransaction,
    NewMessage, NewMobileNotification, NewPredictiveAnalytic, NewStat, NewStation,
    NewSystemStatus, NewUser, NewVoter, NotificationChannel, StationStatus, TransactionType,
    UserId, UserRole, VoterId,
};

use crate::store::PollStore;

/// Hour the polling place opens; seeded rows start here.
const OPENING_HOUR: u32 = 8;

/// Last hour covered by the seeded turnout forecasts.
const FORECAST_CLOSE_HOUR: u32 = 18;

impl PollStore {
    /// Populate the store with the fixed demo data set.
    ///
    /// Safe to call on every start: groups that already have rows are
    /// left untouched.
    pub fn seed_demo_data(&mut self) {
        self.seed_users();

        let poll_worker = self.user_by_username("pollworker").map(|user| user.id);

        self.seed_stations(poll_worker);
        self.seed_system_statuses();
        self.seed_alerts();
        self.seed_messages();
        self.seed_voters();
        self.seed_hourly_stats();
        self.seed_biometrics(poll_worker);
        self.seed_accessibility_preferences();
        self.seed_mobile_notifications();
        self.seed_anomalies();
        self.seed_predictions();
        self.seed_blockchain_transactions();

        info!(
            voters = self.voters.len(),
            stations = self.stations.len(),
            components = self.system_statuses.len(),
            "demo data seeded"
        );
    }

    fn seed_users(&mut self) {
        if self.user_by_username("admin").is_none() {
            self.create_user(NewUser {
                username: String::from("admin"),
                password: String::from("admin123"),
                full_name: String::from("Administrator"),
                station: None,
                role: Some(UserRole::Admin),
            });
        }

        if self.user_by_username("pollworker").is_none() {
            self.create_user(NewUser {
                username: String::from("pollworker"),
                password: String::from("poll123"),
                full_name: String::from("Alex Thomas"),
                station: Some(1),
                role: Some(UserRole::PollWorker),
            });
        }
    }

    fn seed_stations(&mut self, poll_worker: Option<UserId>) {
        if !self.stations.is_empty() {
            return;
        }
        // Four staffed stations and one spare.
        for number in 1..=5_u32 {
            let staffed = number <= 4;
            self.create_station(NewStation {
                number,
                status: Some(if staffed {
                    StationStatus::Active
                } else {
                    StationStatus::Inactive
                }),
                operator_id: if staffed { poll_worker } else { None },
            });
        }
    }

    fn seed_system_statuses(&mut self) {
        let components = [
            (
                "voter_database",
                ComponentStatus::Operational,
                "Normal operations",
            ),
            ("id_scanner", ComponentStatus::Operational, "Normal operations"),
            ("internet", ComponentStatus::Degraded, "Slow connection speeds"),
            (
                "central_election_system",
                ComponentStatus::Operational,
                "Normal operations",
            ),
            (
                "biometric_scanner",
                ComponentStatus::Operational,
                "Fingerprint and facial recognition active",
            ),
            (
                "blockchain_verification",
                ComponentStatus::Operational,
                "Blockchain validation subsystem online",
            ),
        ];

        for (component, status, notes) in components {
            if self.system_status_by_component(component).is_none() {
                self.create_system_status(NewSystemStatus {
                    component: String::from(component),
                    status: Some(status),
                    notes: Some(String::from(notes)),
                });
            }
        }
    }

    fn seed_alerts(&mut self) {
        if !self.alerts.is_empty() {
            return;
        }
        let alerts = [
            (
                AlertKind::Warning,
                "Internet Connection Slow",
                "Backup connection active. Some operations may be delayed.",
            ),
            (
                AlertKind::Info,
                "System Update Available",
                "Update will be automatically applied after closing hours.",
            ),
            (
                AlertKind::Info,
                "Biometric System Calibrated",
                "Facial recognition system has been calibrated for optimal performance.",
            ),
            (
                AlertKind::Warning,
                "AI Anomaly Detection Alert",
                "Unusual pattern detected in voter check-in rate. Monitoring situation.",
            ),
        ];
        for (alert_type, title, message) in alerts {
            self.create_alert(NewAlert {
                alert_type,
                title: String::from(title),
                message: String::from(message),
            });
        }
    }

    fn seed_messages(&mut self) {
        if !self.messages.is_empty() {
            return;
        }
        let messages = [
            (
                "County Election Office",
                "Please remind voters to check ballot completion before submission.",
            ),
            (
                "District Coordinator",
                "Expected increase in turnout between 4-6 PM. Additional support on standby.",
            ),
            (
                "IT Support",
                "Biometric verification system update completed. New features available.",
            ),
            (
                "Accessibility Coordinator",
                "New language options available in the accessibility interface.",
            ),
        ];
        for (sender, message) in messages {
            self.create_message(NewMessage {
                sender: String::from(sender),
                message: String::from(message),
            });
        }
    }

    fn seed_voters(&mut self) {
        if !self.voters.is_empty() {
            return;
        }
        let voters = [
            (
                "100123",
                "Sarah Johnson",
                "05/12/1985",
                "123 Main St, Cityville",
                "East District 4",
            ),
            (
                "100456",
                "Michael Brown",
                "11/03/1972",
                "456 Oak Ave, Townsville",
                "West District 2",
            ),
            (
                "100789",
                "Jennifer Smith",
                "07/25/1990",
                "789 Pine Rd, Villageton",
                "North District 1",
            ),
            (
                "101012",
                "Robert Williams",
                "02/18/1965",
                "101 Cedar Ln, Hamletville",
                "South District 3",
            ),
            (
                "101345",
                "Patricia Brown",
                "09/30/1988",
                "234 Birch St, Boroughville",
                "Central District 5",
            ),
        ];
        for (voter_id, name, date_of_birth, address, precinct) in voters {
            self.create_voter(NewVoter {
                voter_id: String::from(voter_id),
                name: String::from(name),
                date_of_birth: String::from(date_of_birth),
                address: String::from(address),
                precinct: String::from(precinct),
            });
        }
    }

    fn seed_hourly_stats(&mut self) {
        if self.today_stats().next().is_some() {
            return;
        }
        // Empty before opening: the range simply yields no hours.
        let current_hour = Local::now().hour();
        for hour in OPENING_HOUR..=current_hour {
            let voters_processed = self.rng.random_range(5..=14_u32);
            let average_processing_time = self.rng.random_range(120..=179_u32);
            let wait_time = self.rng.random_range(8..=12_u32);
            let throughput = self.rng.random_range(5..=7_u32);
            self.create_stat(NewStat {
                hour,
                voters_processed: Some(voters_processed),
                average_processing_time: Some(average_processing_time),
                wait_time: Some(wait_time),
                throughput: Some(throughput),
            });
        }
    }

    fn seed_biometrics(&mut self, poll_worker: Option<UserId>) {
        if !self.biometrics.is_empty() {
            return;
        }
        for n in 1..=3_u32 {
            let voter_id = VoterId::new(n);
            if self.voter(voter_id).is_none() {
                continue;
            }
            let biometric_type = if n % 2 == 0 {
                BiometricType::Fingerprint
            } else {
                BiometricType::FacialRecognition
            };
            let reference = match biometric_type {
                BiometricType::Fingerprint => format!("fingerprint_data_id_{n}_reference"),
                BiometricType::FacialRecognition => {
                    format!("facial_recognition_data_id_{n}_reference")
                }
            };
            let created = self.create_biometric(NewBiometric {
                voter_id,
                biometric_type,
                data_reference: Some(reference),
            });
            // Verify the first voter's record to demonstrate the flow.
            if n == 1 && let Some(verifier) = poll_worker {
                let _ = self.verify_biometric(created.id, verifier);
            }
        }
    }

    fn seed_accessibility_preferences(&mut self) {
        if !self.accessibility_preferences.is_empty() {
            return;
        }
        let preferences = [
            (1_u32, true, false, false, "english", "Larger text on screen"),
            (3, false, true, false, "english", "Audio instructions"),
            (4, false, false, true, "spanish", "Wheelchair accessible booth"),
        ];
        for (voter, visual, hearing, mobility, language, needs) in preferences {
            self.create_accessibility_preference(NewAccessibilityPreference {
                voter_id: VoterId::new(voter),
                visual_assistance: Some(visual),
                hearing_assistance: Some(hearing),
                mobility_assistance: Some(mobility),
                language_preference: Some(String::from(language)),
                other_needs: Some(String::from(needs)),
            });
        }
    }

    fn seed_mobile_notifications(&mut self) {
        if !self.mobile_notifications.is_empty() {
            return;
        }
        let settings = [
            (1_u32, "+15551234567", "voter1@example.com", NotificationChannel::Sms),
            (2, "+15559876543", "voter2@example.com", NotificationChannel::Email),
        ];
        for (voter, phone, email, channel) in settings {
            let created = self.create_mobile_notification(NewMobileNotification {
                voter_id: VoterId::new(voter),
                phone_number: Some(String::from(phone)),
                email: Some(String::from(email)),
                opted_in: Some(true),
                notification_type: Some(channel),
            });
            // Verify the first voter's channel to demonstrate the flow.
            if voter == 1 {
                let code = created.verification_code.clone();
                let _ = self.verify_mobile_notification(created.id, &code);
            }
        }
    }

    fn seed_anomalies(&mut self) {
        if !self.anomalies.is_empty() {
            return;
        }
        let detected_at = chrono::Utc::now().to_rfc3339();
        let anomalies = [
            (
                AnomalyKind::UnusualPattern,
                "Unusual spike in check-in rate detected at station 3",
                AnomalySeverity::Medium,
                serde_json::json!({ "station_id": 3, "time_detected": detected_at }),
            ),
            (
                AnomalyKind::SecurityThreat,
                "Multiple failed biometric verification attempts for same voter ID",
                AnomalySeverity::High,
                serde_json::json!({ "voter_id": 5, "attempts": 3, "time_span": "5 minutes" }),
            ),
            (
                AnomalyKind::PerformanceIssue,
                "Station 2 processing time significantly higher than average",
                AnomalySeverity::Low,
                serde_json::json!({
                    "station_id": 2,
                    "avg_time": "5.2 minutes",
                    "system_avg": "2.8 minutes"
                }),
            ),
        ];
        let mut first = None;
        for (anomaly_type, description, severity, metadata) in anomalies {
            let created = self.create_anomaly(NewAnomaly {
                anomaly_type,
                description: String::from(description),
                severity: Some(severity),
                metadata: Some(metadata),
            });
            first.get_or_insert(created.id);
        }
        // Resolve the first anomaly to demonstrate the flow.
        if let Some(id) = first {
            let _ = self.resolve_anomaly(
                id,
                UserId::new(1),
                String::from("False positive - normal variation in check-in pattern"),
            );
        }
    }

    fn seed_predictions(&mut self) {
        if !self.predictive_analytics.is_empty() {
            return;
        }
        let now = Local::now();
        let current_hour = now.hour();
        let day_of_week = now.weekday().num_days_from_sunday();

        for hour in OPENING_HOUR..=FORECAST_CLOSE_HOUR {
            // Simple demo curve: ramp up through the morning, plateau
            // midday, taper after 16:00.
            let predicted_volume = if hour < 12 {
                10_u32.saturating_add(hour)
            } else if hour > 16 {
                30_u32.saturating_sub(hour)
            } else {
                25
            };
            let predicted_wait = (predicted_volume / 3).max(5);

            let created = self.create_predictive_analytic(NewPredictiveAnalytic {
                hour_of_day: hour,
                day_of_week,
                predicted_voter_volume: Some(predicted_volume),
                predicted_wait_time: Some(predicted_wait),
                factors_considered: Some(vec![
                    String::from("historical_data"),
                    String::from("weather"),
                    String::from("local_events"),
                ]),
            });

            // Fill in slightly-off actuals for the hours already elapsed.
            if hour < current_hour {
                let volume_delta = self.rng.random_range(-2..=2_i64);
                let wait_delta = self.rng.random_range(-1..=1_i64);
                let actual_volume =
                    u32::try_from(i64::from(predicted_volume).saturating_add(volume_delta))
                        .unwrap_or(0);
                let actual_wait =
                    u32::try_from(i64::from(predicted_wait).saturating_add(wait_delta))
                        .unwrap_or(0)
                        .max(1);
                let _ = self.record_prediction_actuals(created.id, actual_volume, actual_wait);
            }
        }
    }

    fn seed_blockchain_transactions(&mut self) {
        if !self.blockchain_transactions.is_empty() {
            return;
        }
        let stamp = chrono::Utc::now().to_rfc3339();
        let transactions = [
            (
                TransactionType::VoterVerification,
                "0x8f32d45a9e720a4d0e193ea21de9ee97e1971d2c3b7480cf",
                12_345_678_u64,
                "station_1",
                serde_json::json!({ "timestamp": stamp, "method": "biometric" }),
            ),
            (
                TransactionType::CheckIn,
                "0x3e7a12c5b8e90d6f2a193ea9fe12d4c78e1234f5a6b7c8d9",
                12_345_679,
                "station_1",
                serde_json::json!({ "timestamp": stamp, "operator": "poll_worker_2" }),
            ),
            (
                TransactionType::VoteCast,
                "0x7b28e39fa4c1d5e6e193ea21de9ee97e1971d2c3b748012",
                12_345_680,
                "booth_3",
                serde_json::json!({ "timestamp": stamp, "ballot": "encrypted_ballot_hash" }),
            ),
        ];
        for (transaction_type, hash, block_number, station, metadata) in transactions {
            let created = self.create_blockchain_transaction(NewBlockchainTransaction {
                transaction_type,
                transaction_hash: String::from(hash),
                block_number: Some(block_number),
                voter_id: Some(VoterId::new(1)),
                polling_station_id: Some(String::from(station)),
                metadata: Some(metadata),
            });
            let _ = self.verify_blockchain_transaction(created.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use precinct_types::{AnomalyStatus, QueueStats};

    use super::*;

    #[test]
    fn seeding_twice_adds_nothing() {
        let mut store = PollStore::with_seed(99);
        store.seed_demo_data();

        let voters = store.all_voters().count();
        let stations = store.all_stations().count();
        let alerts = store.all_alerts().count();
        let anomalies = store.all_anomalies().count();
        let predictions = store.all_predictive_analytics().count();

        store.seed_demo_data();

        assert_eq!(store.all_voters().count(), voters);
        assert_eq!(store.all_stations().count(), stations);
        assert_eq!(store.all_alerts().count(), alerts);
        assert_eq!(store.all_anomalies().count(), anomalies);
        assert_eq!(store.all_predictive_analytics().count(), predictions);
    }

    #[test]
    fn seed_produces_the_fixed_roster() {
        let mut store = PollStore::with_seed(99);
        store.seed_demo_data();

        assert_eq!(store.all_voters().count(), 5);
        assert!(store.voter_by_voter_id("100123").is_some());
        assert!(store.user_by_username("admin").is_some());
        assert!(store.user_by_username("pollworker").is_some());
        assert_eq!(store.all_stations().count(), 5);
        assert_eq!(store.all_system_statuses().count(), 6);
        assert!(store.system_status_by_component("internet").is_some());
    }

    #[test]
    fn seed_demonstrates_verification_flows() {
        let mut store = PollStore::with_seed(99);
        store.seed_demo_data();

        // First voter's biometric and notification channel come verified.
        assert_eq!(
            store.biometric_by_voter(VoterId::new(1)).map(|b| b.verified),
            Some(true)
        );
        assert_eq!(
            store
                .mobile_notification_by_voter(VoterId::new(1))
                .map(|n| n.verified),
            Some(true)
        );

        // First anomaly is resolved with one logged action.
        let resolved = store
            .all_anomalies()
            .find(|a| a.status == AnomalyStatus::Resolved);
        assert_eq!(resolved.map(|a| a.actions.len()), Some(1));

        // Audit records are all verified.
        assert!(store.all_blockchain_transactions().all(|t| t.verified));

        // The queue starts empty.
        let stats = store.queue_stats();
        assert_eq!(
            stats,
            QueueStats {
                waiting: 0,
                in_progress: 0,
                completed: 0
            }
        );
    }

    #[test]
    fn seeded_forecasts_cover_open_hours() {
        let mut store = PollStore::with_seed(99);
        store.seed_demo_data();

        assert_eq!(store.all_predictive_analytics().count(), 11);
        let slot = store.all_predictive_analytics().next();
        assert_eq!(slot.map(|a| a.hour_of_day), Some(OPENING_HOUR));
        assert_eq!(
            slot.and_then(|a| a.predicted_voter_volume),
            Some(18) // 10 + opening hour
        );
    }
}
