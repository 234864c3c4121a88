//! Waiting-line operations: queue entries and derived queue statistics.

use chrono::Utc;

use precinct_types::{NewQueueItem, QueueEntryType, QueueItem, QueueItemId, QueueStats, QueueStatus, UserId};

use crate::error::StoreError;
use crate::store::PollStore;

impl PollStore {
    /// Add a voter to the waiting line.
    ///
    /// Status defaults to `waiting` and the entry type to `standard`;
    /// the entry timestamp is stamped on insert.
    pub fn create_queue_item(&mut self, input: NewQueueItem) -> QueueItem {
        let id = self.queue_items.allocate();
        let item = QueueItem {
            id,
            voter_id: input.voter_id,
            number: input.number,
            status: input.status.unwrap_or(QueueStatus::Waiting),
            entry_type: input.entry_type.unwrap_or(QueueEntryType::Standard),
            wait_time_minutes: input.wait_time_minutes,
            entered_at: Utc::now(),
            processed_at: None,
            processed_by: None,
        };
        self.queue_items.insert(id, item.clone());
        item
    }

    /// Get a queue entry by id.
    pub fn queue_item(&self, id: QueueItemId) -> Option<&QueueItem> {
        self.queue_items.get(id)
    }

    /// Iterate over all queue entries in id order.
    pub fn all_queue_items(&self) -> impl Iterator<Item = &QueueItem> {
        self.queue_items.values()
    }

    /// Move a queue entry to a new status.
    ///
    /// Reaching `completed` or `issue` also stamps the processing time
    /// and, when supplied, the processing operator.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::QueueItemNotFound`] if the id is absent.
    pub fn update_queue_item_status(
        &mut self,
        id: QueueItemId,
        status: QueueStatus,
        user_id: Option<UserId>,
    ) -> Result<QueueItem, StoreError> {
        let item = self
            .queue_items
            .get_mut(id)
            .ok_or(StoreError::QueueItemNotFound(id))?;
        item.status = status;
        if matches!(status, QueueStatus::Completed | QueueStatus::Issue) {
            item.processed_at = Some(Utc::now());
            item.processed_by = user_id;
        }
        Ok(item.clone())
    }

    /// Count queue entries by status.
    ///
    /// Recomputed on every call with a full scan; nothing is cached.
    pub fn queue_stats(&self) -> QueueStats {
        let mut stats = QueueStats {
            waiting: 0,
            in_progress: 0,
            completed: 0,
        };
        for item in self.queue_items.values() {
            match item.status {
                QueueStatus::Waiting => stats.waiting = stats.waiting.saturating_add(1),
                QueueStatus::InProgress => stats.in_progress = stats.in_progress.saturating_add(1),
                QueueStatus::Completed => stats.completed = stats.completed.saturating_add(1),
                QueueStatus::Issue | QueueStatus::SpecialAssistance => {}
            }
        }
        stats
    }
}
