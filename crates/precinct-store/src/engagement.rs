//! Voter enhancement records: biometrics, accessibility preferences, and
//! mobile notifications.
//!
//! The notification send is a simulated delivery: it validates and stamps
//! the record, logs what a real SMS/email gateway call would have sent,
//! and performs no I/O.

use chrono::Utc;
use rand::Rng;
use tracing::info;

use precinct_types::{
    AccessibilityPreference, AccessibilityPreferenceId, AccessibilityUpdate, Biometric,
    BiometricId, MobileNotification, MobileNotificationId, NewAccessibilityPreference,
    NewBiometric, NewMobileNotification, NotificationChannel, UserId, VoterId,
};

use crate::error::StoreError;
use crate::store::PollStore;

impl PollStore {
    // -------------------------------------------------------------------
    // Biometric operations
    // -------------------------------------------------------------------

    /// Enroll a biometric record. Records start unverified.
    pub fn create_biometric(&mut self, input: NewBiometric) -> Biometric {
        let id = self.biometrics.allocate();
        let now = Utc::now();
        let biometric = Biometric {
            id,
            voter_id: input.voter_id,
            biometric_type: input.biometric_type,
            data_reference: input.data_reference,
            verified: false,
            verified_at: None,
            verified_by: None,
            created_at: now,
            updated_at: now,
        };
        self.biometrics.insert(id, biometric.clone());
        biometric
    }

    /// Get a biometric record by id.
    pub fn biometric(&self, id: BiometricId) -> Option<&Biometric> {
        self.biometrics.get(id)
    }

    /// Get the first biometric record enrolled for a voter.
    pub fn biometric_by_voter(&self, voter_id: VoterId) -> Option<&Biometric> {
        self.biometrics
            .values()
            .find(|biometric| biometric.voter_id == voter_id)
    }

    /// Mark a biometric record verified, stamping the verifier and time.
    /// The flip is one-way.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BiometricNotFound`] if the id is absent.
    pub fn verify_biometric(
        &mut self,
        id: BiometricId,
        user_id: UserId,
    ) -> Result<Biometric, StoreError> {
        let biometric = self
            .biometrics
            .get_mut(id)
            .ok_or(StoreError::BiometricNotFound(id))?;
        let now = Utc::now();
        biometric.verified = true;
        biometric.verified_at = Some(now);
        biometric.verified_by = Some(user_id);
        biometric.updated_at = now;
        Ok(biometric.clone())
    }

    // -------------------------------------------------------------------
    // Accessibility operations
    // -------------------------------------------------------------------

    /// Create a voter's accessibility preferences. Assistance flags
    /// default to false and the language to `english`.
    pub fn create_accessibility_preference(
        &mut self,
        input: NewAccessibilityPreference,
    ) -> AccessibilityPreference {
        let id = self.accessibility_preferences.allocate();
        let now = Utc::now();
        let preference = AccessibilityPreference {
            id,
            voter_id: input.voter_id,
            visual_assistance: input.visual_assistance.unwrap_or(false),
            hearing_assistance: input.hearing_assistance.unwrap_or(false),
            mobility_assistance: input.mobility_assistance.unwrap_or(false),
            language_preference: input
                .language_preference
                .unwrap_or_else(|| String::from("english")),
            other_needs: input.other_needs,
            created_at: now,
            updated_at: now,
        };
        self.accessibility_preferences.insert(id, preference.clone());
        preference
    }

    /// Get an accessibility preference record by id.
    pub fn accessibility_preference(
        &self,
        id: AccessibilityPreferenceId,
    ) -> Option<&AccessibilityPreference> {
        self.accessibility_preferences.get(id)
    }

    /// Get the accessibility preferences stored for a voter.
    pub fn accessibility_preference_by_voter(
        &self,
        voter_id: VoterId,
    ) -> Option<&AccessibilityPreference> {
        self.accessibility_preferences
            .values()
            .find(|preference| preference.voter_id == voter_id)
    }

    /// Apply a partial update to accessibility preferences. Fields absent
    /// from the patch keep their stored values; the modification time is
    /// re-stamped.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AccessibilityPreferenceNotFound`] if the id
    /// is absent.
    pub fn update_accessibility_preference(
        &mut self,
        id: AccessibilityPreferenceId,
        patch: AccessibilityUpdate,
    ) -> Result<AccessibilityPreference, StoreError> {
        let preference = self
            .accessibility_preferences
            .get_mut(id)
            .ok_or(StoreError::AccessibilityPreferenceNotFound(id))?;
        if let Some(visual) = patch.visual_assistance {
            preference.visual_assistance = visual;
        }
        if let Some(hearing) = patch.hearing_assistance {
            preference.hearing_assistance = hearing;
        }
        if let Some(mobility) = patch.mobility_assistance {
            preference.mobility_assistance = mobility;
        }
        if let Some(language) = patch.language_preference {
            preference.language_preference = language;
        }
        if let Some(needs) = patch.other_needs {
            preference.other_needs = Some(needs);
        }
        preference.updated_at = Utc::now();
        Ok(preference.clone())
    }

    // -------------------------------------------------------------------
    // Mobile notification operations
    // -------------------------------------------------------------------

    /// Create a voter's notification settings, generating the six-digit
    /// verification code from the store's random source.
    pub fn create_mobile_notification(
        &mut self,
        input: NewMobileNotification,
    ) -> MobileNotification {
        let id = self.mobile_notifications.allocate();
        let verification_code = self.rng.random_range(100_000..=999_999_u32).to_string();
        let notification = MobileNotification {
            id,
            voter_id: input.voter_id,
            phone_number: input.phone_number,
            email: input.email,
            opted_in: input.opted_in.unwrap_or(false),
            verification_code,
            verified: false,
            notification_type: input.notification_type.unwrap_or(NotificationChannel::Sms),
            last_notified: None,
            created_at: Utc::now(),
        };
        self.mobile_notifications.insert(id, notification.clone());
        notification
    }

    /// Get a notification record by id.
    pub fn mobile_notification(&self, id: MobileNotificationId) -> Option<&MobileNotification> {
        self.mobile_notifications.get(id)
    }

    /// Get the notification settings stored for a voter.
    pub fn mobile_notification_by_voter(&self, voter_id: VoterId) -> Option<&MobileNotification> {
        self.mobile_notifications
            .values()
            .find(|notification| notification.voter_id == voter_id)
    }

    /// Verify a notification channel by echoing back the stored code.
    /// The flip is one-way.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MobileNotificationNotFound`] if the id is
    /// absent, or [`StoreError::VerificationCodeMismatch`] if the code
    /// does not exactly match (leaving the record unverified).
    pub fn verify_mobile_notification(
        &mut self,
        id: MobileNotificationId,
        verification_code: &str,
    ) -> Result<MobileNotification, StoreError> {
        let notification = self
            .mobile_notifications
            .get_mut(id)
            .ok_or(StoreError::MobileNotificationNotFound(id))?;
        if notification.verification_code != verification_code {
            return Err(StoreError::VerificationCodeMismatch(id));
        }
        notification.verified = true;
        Ok(notification.clone())
    }

    /// Send a notification over the voter's verified channel.
    ///
    /// Delivery is simulated: the would-be gateway call is logged and the
    /// record's last-notified time is stamped.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MobileNotificationNotFound`] if the id is
    /// absent, or [`StoreError::NotificationNotVerified`] if the channel
    /// has not been verified.
    pub fn send_notification(
        &mut self,
        id: MobileNotificationId,
        message: &str,
    ) -> Result<MobileNotification, StoreError> {
        let notification = self
            .mobile_notifications
            .get_mut(id)
            .ok_or(StoreError::MobileNotificationNotFound(id))?;
        if !notification.verified {
            return Err(StoreError::NotificationNotVerified(id));
        }
        info!(
            notification = id.into_inner(),
            channel = ?notification.notification_type,
            message,
            "simulated notification delivery"
        );
        notification.last_notified = Some(Utc::now());
        Ok(notification.clone())
    }
}

#[cfg(test)]
mod tests {
    use precinct_types::BiometricType;

    use super::*;

    fn notification_input(voter: u32) -> NewMobileNotification {
        NewMobileNotification {
            voter_id: VoterId::new(voter),
            phone_number: Some(String::from("+15551234567")),
            email: None,
            opted_in: Some(true),
            notification_type: None,
        }
    }

    #[test]
    fn verification_code_is_six_digit_numeric() {
        let mut store = PollStore::with_seed(21);
        let notification = store.create_mobile_notification(notification_input(1));
        assert_eq!(notification.verification_code.len(), 6);
        assert!(notification
            .verification_code
            .chars()
            .all(|c| c.is_ascii_digit()));
        assert!(!notification.verified);
    }

    #[test]
    fn wrong_code_fails_and_leaves_unverified() {
        let mut store = PollStore::with_seed(21);
        let notification = store.create_mobile_notification(notification_input(1));

        let wrong = format!("{}x", notification.verification_code);
        let result = store.verify_mobile_notification(notification.id, &wrong);
        assert!(matches!(
            result,
            Err(StoreError::VerificationCodeMismatch(_))
        ));
        assert_eq!(
            store.mobile_notification(notification.id).map(|n| n.verified),
            Some(false)
        );
    }

    #[test]
    fn exact_code_verifies_the_channel() {
        let mut store = PollStore::with_seed(21);
        let notification = store.create_mobile_notification(notification_input(1));

        let verified = store
            .verify_mobile_notification(notification.id, &notification.verification_code)
            .ok();
        assert!(verified.is_some_and(|n| n.verified));
    }

    #[test]
    fn send_requires_a_verified_channel() {
        let mut store = PollStore::with_seed(21);
        let notification = store.create_mobile_notification(notification_input(1));

        let unverified = store.send_notification(notification.id, "Your station is ready");
        assert!(matches!(
            unverified,
            Err(StoreError::NotificationNotVerified(_))
        ));

        let code = notification.verification_code.clone();
        let _ = store.verify_mobile_notification(notification.id, &code);
        let sent = store
            .send_notification(notification.id, "Your station is ready")
            .ok();
        assert!(sent.is_some_and(|n| n.last_notified.is_some()));
    }

    #[test]
    fn accessibility_patch_touches_only_supplied_fields() {
        let mut store = PollStore::with_seed(21);
        let preference = store.create_accessibility_preference(NewAccessibilityPreference {
            voter_id: VoterId::new(1),
            visual_assistance: Some(true),
            hearing_assistance: None,
            mobility_assistance: None,
            language_preference: None,
            other_needs: None,
        });

        let updated = store
            .update_accessibility_preference(
                preference.id,
                AccessibilityUpdate {
                    language_preference: Some(String::from("spanish")),
                    ..AccessibilityUpdate::default()
                },
            )
            .ok();
        assert!(updated.as_ref().is_some_and(|p| p.visual_assistance));
        assert_eq!(
            updated.map(|p| p.language_preference),
            Some(String::from("spanish"))
        );
    }

    #[test]
    fn biometric_verification_is_stamped() {
        let mut store = PollStore::with_seed(21);
        let biometric = store.create_biometric(NewBiometric {
            voter_id: VoterId::new(1),
            biometric_type: BiometricType::Fingerprint,
            data_reference: Some(String::from("fingerprint_data_id_1_reference")),
        });

        let verified = store.verify_biometric(biometric.id, UserId::new(2)).ok();
        assert!(verified.as_ref().is_some_and(|b| b.verified));
        assert_eq!(verified.and_then(|b| b.verified_by), Some(UserId::new(2)));
        assert_eq!(
            store.biometric_by_voter(VoterId::new(1)).map(|b| b.id),
            Some(biometric.id)
        );
    }
}
