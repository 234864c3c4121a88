//! Station, issue, and system component operations.

use chrono::Utc;

use precinct_types::{
    ComponentStatus, Issue, IssueId, IssueStatus, NewIssue, NewStation, NewSystemStatus, Station,
    StationId, StationStatus, SystemStatus, SystemStatusId, UserId,
};

use crate::error::StoreError;
use crate::store::PollStore;

impl PollStore {
    // -------------------------------------------------------------------
    // Station operations
    // -------------------------------------------------------------------

    /// Register a check-in station. Status defaults to `inactive`; the
    /// processed counter starts at zero.
    pub fn create_station(&mut self, input: NewStation) -> Station {
        let id = self.stations.allocate();
        let station = Station {
            id,
            number: input.number,
            status: input.status.unwrap_or(StationStatus::Inactive),
            operator_id: input.operator_id,
            voters_processed: 0,
        };
        self.stations.insert(id, station.clone());
        station
    }

    /// Get a station by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Get a station by its unique floor number.
    pub fn station_by_number(&self, number: u32) -> Option<&Station> {
        self.stations.values().find(|station| station.number == number)
    }

    /// Iterate over all stations in id order.
    pub fn all_stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Change a station's operational state. The operator assignment is
    /// updated only when one is supplied.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StationNotFound`] if the id is absent.
    pub fn update_station_status(
        &mut self,
        id: StationId,
        status: StationStatus,
        operator_id: Option<UserId>,
    ) -> Result<Station, StoreError> {
        let station = self
            .stations
            .get_mut(id)
            .ok_or(StoreError::StationNotFound(id))?;
        station.status = status;
        if let Some(operator) = operator_id {
            station.operator_id = Some(operator);
        }
        Ok(station.clone())
    }

    /// Bump a station's processed-voter counter by one.
    ///
    /// The counter is monotone; it saturates rather than wrapping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StationNotFound`] if the id is absent.
    pub fn increment_station_processed(&mut self, id: StationId) -> Result<Station, StoreError> {
        let station = self
            .stations
            .get_mut(id)
            .ok_or(StoreError::StationNotFound(id))?;
        station.voters_processed = station.voters_processed.saturating_add(1);
        Ok(station.clone())
    }

    // -------------------------------------------------------------------
    // Issue operations
    // -------------------------------------------------------------------

    /// Report a polling-place issue. Issues start open with the report
    /// time stamped.
    pub fn create_issue(&mut self, input: NewIssue) -> Issue {
        let id = self.issues.allocate();
        let issue = Issue {
            id,
            issue_type: input.issue_type,
            description: input.description,
            status: IssueStatus::Open,
            reported_at: Utc::now(),
            reported_by: input.reported_by,
            resolved_at: None,
            resolved_by: None,
            resolution_time: None,
        };
        self.issues.insert(id, issue.clone());
        issue
    }

    /// Get an issue by id.
    pub fn issue(&self, id: IssueId) -> Option<&Issue> {
        self.issues.get(id)
    }

    /// Iterate over all issues in id order.
    pub fn all_issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues.values()
    }

    /// Resolve an issue, recording who resolved it and how long it took.
    ///
    /// The resolution time is the whole-minute difference between report
    /// and resolution.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IssueNotFound`] if the id is absent.
    pub fn resolve_issue(&mut self, id: IssueId, user_id: UserId) -> Result<Issue, StoreError> {
        let issue = self
            .issues
            .get_mut(id)
            .ok_or(StoreError::IssueNotFound(id))?;
        let resolved_at = Utc::now();
        issue.status = IssueStatus::Resolved;
        issue.resolution_time = Some((resolved_at - issue.reported_at).num_minutes());
        issue.resolved_at = Some(resolved_at);
        issue.resolved_by = Some(user_id);
        Ok(issue.clone())
    }

    // -------------------------------------------------------------------
    // System component operations
    // -------------------------------------------------------------------

    /// Register a monitored component. Health defaults to `operational`;
    /// the check timestamp is stamped on insert.
    pub fn create_system_status(&mut self, input: NewSystemStatus) -> SystemStatus {
        let id = self.system_statuses.allocate();
        let row = SystemStatus {
            id,
            component: input.component,
            status: input.status.unwrap_or(ComponentStatus::Operational),
            last_checked: Utc::now(),
            notes: input.notes,
        };
        self.system_statuses.insert(id, row.clone());
        row
    }

    /// Get a component health row by id.
    pub fn system_status(&self, id: SystemStatusId) -> Option<&SystemStatus> {
        self.system_statuses.get(id)
    }

    /// Get a component health row by its unique component name.
    pub fn system_status_by_component(&self, component: &str) -> Option<&SystemStatus> {
        self.system_statuses
            .values()
            .find(|row| row.component == component)
    }

    /// Iterate over all component health rows in id order.
    pub fn all_system_statuses(&self) -> impl Iterator<Item = &SystemStatus> {
        self.system_statuses.values()
    }

    /// Update a component's health, re-stamping the check time. Notes
    /// are replaced only when supplied.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SystemStatusNotFound`] if the id is absent.
    pub fn update_system_status(
        &mut self,
        id: SystemStatusId,
        status: ComponentStatus,
        notes: Option<String>,
    ) -> Result<SystemStatus, StoreError> {
        let row = self
            .system_statuses
            .get_mut(id)
            .ok_or(StoreError::SystemStatusNotFound(id))?;
        row.status = status;
        row.last_checked = Utc::now();
        if let Some(notes) = notes {
            row.notes = Some(notes);
        }
        Ok(row.clone())
    }
}
