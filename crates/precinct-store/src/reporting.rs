//! Alerts, coordinator messages, and hourly statistics.
//!
//! Alerts and messages are append-only; statistics rows are appended one
//! per hour per day by convention (the store does not enforce the
//! convention).

use chrono::Utc;

use precinct_types::{Alert, AlertId, Message, MessageId, NewAlert, NewMessage, NewStat, Stat, StatId};

use crate::store::PollStore;

impl PollStore {
    // -------------------------------------------------------------------
    // Alert operations
    // -------------------------------------------------------------------

    /// Raise an alert, stamping the current time.
    pub fn create_alert(&mut self, input: NewAlert) -> Alert {
        let id = self.alerts.allocate();
        let alert = Alert {
            id,
            alert_type: input.alert_type,
            title: input.title,
            message: input.message,
            timestamp: Utc::now(),
        };
        self.alerts.insert(id, alert.clone());
        alert
    }

    /// Get an alert by id.
    pub fn alert(&self, id: AlertId) -> Option<&Alert> {
        self.alerts.get(id)
    }

    /// Iterate over all alerts in id order.
    pub fn all_alerts(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.values()
    }

    // -------------------------------------------------------------------
    // Message operations
    // -------------------------------------------------------------------

    /// Post a coordinator message, stamping the current time.
    pub fn create_message(&mut self, input: NewMessage) -> Message {
        let id = self.messages.allocate();
        let message = Message {
            id,
            sender: input.sender,
            message: input.message,
            timestamp: Utc::now(),
        };
        self.messages.insert(id, message.clone());
        message
    }

    /// Get a message by id.
    pub fn message(&self, id: MessageId) -> Option<&Message> {
        self.messages.get(id)
    }

    /// Iterate over all messages in id order.
    pub fn all_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.values()
    }

    // -------------------------------------------------------------------
    // Hourly statistics operations
    // -------------------------------------------------------------------

    /// Record an hourly statistics row for today.
    pub fn create_stat(&mut self, input: NewStat) -> Stat {
        let id = self.stats.allocate();
        let stat = Stat {
            id,
            date: Utc::now(),
            hour: input.hour,
            voters_processed: input.voters_processed.unwrap_or(0),
            average_processing_time: input.average_processing_time,
            wait_time: input.wait_time,
            throughput: input.throughput,
        };
        self.stats.insert(id, stat.clone());
        stat
    }

    /// Get a statistics row by id.
    pub fn stat(&self, id: StatId) -> Option<&Stat> {
        self.stats.get(id)
    }

    /// Iterate over today's statistics rows in id order.
    pub fn today_stats(&self) -> impl Iterator<Item = &Stat> {
        let today = Utc::now().date_naive();
        self.stats
            .values()
            .filter(move |stat| stat.date.date_naive() == today)
    }
}
