use crate::fixtures::{mock_alert_history, mock_location_history};
use chrono::NaiveDateTime;
use std::fmt;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    pub id: u32,
    pub timestamp: NaiveDateTime,
    pub location: String,
    pub coords: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum DeliveryStatus {
    Delivered,
    Pending,
    Failed,
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryStatus::Delivered => write!(f, "Delivered"),
            DeliveryStatus::Pending => write!(f, "Pending"),
            DeliveryStatus::Failed => write!(f, "Failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertRecord {
    pub id: u32,
    pub timestamp: NaiveDateTime,
    pub kind: String,
    pub status: DeliveryStatus,
    pub sent_to: Vec<String>,
}

impl AlertRecord {
    pub fn recipients(&self) -> String {
        self.sent_to.join(", ")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryTab {
    #[default]
    Locations,
    Alerts,
}

impl HistoryTab {
    pub fn title(&self) -> &'static str {
        match self {
            HistoryTab::Locations => "Location History",
            HistoryTab::Alerts => "Alert Logs",
        }
    }
}

/// Read-only activity log, newest entries first
pub struct HistoryLog {
    pub tab: HistoryTab,
    locations: Vec<LocationRecord>,
    alerts: Vec<AlertRecord>,
}

impl HistoryLog {
    pub fn new(mut locations: Vec<LocationRecord>, mut alerts: Vec<AlertRecord>) -> Self {
        locations.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Self {
            tab: HistoryTab::default(),
            locations,
            alerts,
        }
    }

    pub fn from_fixtures() -> Self {
        Self::new(mock_location_history(), mock_alert_history())
    }

    pub fn locations(&self) -> &[LocationRecord] {
        &self.locations
    }

    pub fn alerts(&self) -> &[AlertRecord] {
        &self.alerts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_location_tab() {
        let log = HistoryLog::from_fixtures();
        assert_eq!(log.tab, HistoryTab::Locations);
        assert_eq!(log.locations().len(), 3);
        assert_eq!(log.alerts().len(), 2);
    }

    #[test]
    fn test_records_sorted_newest_first() {
        let mut locations = mock_location_history();
        locations.reverse();
        let log = HistoryLog::new(locations, mock_alert_history());

        let ids: Vec<u32> = log.locations().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_recipients_display() {
        let log = HistoryLog::from_fixtures();
        assert_eq!(
            log.alerts()[0].recipients(),
            "John Doe, Jane Smith, Emergency Services"
        );
        assert_eq!(log.alerts()[1].recipients(), "John Doe");
        assert_eq!(log.alerts()[0].status.to_string(), "Delivered");
    }
}
