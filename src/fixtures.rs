//! Hardcoded mock data standing in for a backend.

use crate::contacts::Contact;
use crate::devices::{Device, DeviceStatus, SignalStrength};
use crate::history::{AlertRecord, DeliveryStatus, LocationRecord};
use chrono::{NaiveDate, NaiveDateTime};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_opt(h, mi, s))
        .unwrap_or_default()
}

pub fn mock_devices() -> Vec<Device> {
    vec![
        Device::new(1, "SafeLink Band Pro", DeviceStatus::Available, SignalStrength::Strong),
        Device::new(2, "SafeLink Pendant", DeviceStatus::Available, SignalStrength::Medium),
        Device::new(3, "SafeLink Watch", DeviceStatus::Connected, SignalStrength::Strong),
    ]
}

/// Device shown as connected when the pairing screen opens
pub const INITIAL_CONNECTED_DEVICE: u32 = 3;

pub fn mock_contacts() -> Vec<Contact> {
    vec![
        Contact::new(1, "John Doe", "+1 234 567 8900", "Father"),
        Contact::new(2, "Jane Smith", "+1 234 567 8901", "Mother"),
        Contact::new(3, "Emergency Services", "911", "Emergency"),
    ]
}

pub fn mock_location_history() -> Vec<LocationRecord> {
    vec![
        LocationRecord {
            id: 1,
            timestamp: at(2025, 10, 31, 14, 23, 0),
            location: "Downtown Mall, 5th Avenue".to_string(),
            coords: "40.7589° N, 73.9851° W".to_string(),
        },
        LocationRecord {
            id: 2,
            timestamp: at(2025, 10, 31, 12, 15, 0),
            location: "Central Park West".to_string(),
            coords: "40.7812° N, 73.9665° W".to_string(),
        },
        LocationRecord {
            id: 3,
            timestamp: at(2025, 10, 30, 18, 45, 0),
            location: "Home - Brooklyn Heights".to_string(),
            coords: "40.6946° N, 73.9941° W".to_string(),
        },
    ]
}

pub fn mock_alert_history() -> Vec<AlertRecord> {
    vec![
        AlertRecord {
            id: 1,
            timestamp: at(2025, 10, 31, 14, 23, 12),
            kind: "SOS Alert".to_string(),
            status: DeliveryStatus::Delivered,
            sent_to: vec![
                "John Doe".to_string(),
                "Jane Smith".to_string(),
                "Emergency Services".to_string(),
            ],
        },
        AlertRecord {
            id: 2,
            timestamp: at(2025, 10, 29, 22, 10, 5),
            kind: "Check-in Alert".to_string(),
            status: DeliveryStatus::Delivered,
            sent_to: vec!["John Doe".to_string()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::TIMESTAMP_FORMAT;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_ids_are_unique() {
        let ids: HashSet<u32> = mock_contacts().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), mock_contacts().len());

        let ids: HashSet<u32> = mock_devices().iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), mock_devices().len());
    }

    #[test]
    fn test_initial_connected_device_exists() {
        assert!(mock_devices().iter().any(|d| d.id == INITIAL_CONNECTED_DEVICE));
    }

    #[test]
    fn test_timestamps_are_valid() {
        let alerts = mock_alert_history();
        assert_eq!(alerts[0].timestamp.format(TIMESTAMP_FORMAT).to_string(), "2025-10-31 14:23:12");
    }
}
