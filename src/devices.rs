//! # Device Pairing Screen State
//!
//! Mock Bluetooth devices and the single "connected" selection. There is no
//! radio and no pairing handshake: connecting only records which device id is
//! selected, and the scan resolves immediately with the fixture list.

use crate::fixtures::{mock_devices, INITIAL_CONNECTED_DEVICE};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    Available,
    Connected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum SignalStrength {
    Strong,
    Medium,
    Weak,
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceStatus::Available => write!(f, "Available"),
            DeviceStatus::Connected => write!(f, "Connected"),
        }
    }
}

impl fmt::Display for SignalStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalStrength::Strong => write!(f, "Strong"),
            SignalStrength::Medium => write!(f, "Medium"),
            SignalStrength::Weak => write!(f, "Weak"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub id: u32,
    pub name: String,
    pub status: DeviceStatus,
    pub signal: SignalStrength,
}

impl Device {
    pub fn new(id: u32, name: &str, status: DeviceStatus, signal: SignalStrength) -> Self {
        Self {
            id,
            name: name.to_string(),
            status,
            signal,
        }
    }
}

/// "Scans" for nearby SafeLink devices
pub async fn scan_devices() -> Vec<Device> {
    let devices = mock_devices();
    log::debug!("Scan finished with {} devices", devices.len());
    devices
}

pub struct DevicePanel {
    pub bluetooth_on: bool,
    pub devices: Vec<Device>,
    pub scanning: bool,
    pub connected: Option<u32>,
    pub banner_dismissed: bool,
}

impl DevicePanel {
    pub fn new() -> Self {
        Self {
            bluetooth_on: true,
            devices: Vec::new(),
            scanning: true,
            connected: Some(INITIAL_CONNECTED_DEVICE),
            banner_dismissed: false,
        }
    }

    pub fn devices_scanned(&mut self, devices: Vec<Device>) {
        self.scanning = false;
        self.devices = devices;
    }

    /// Makes `id` the only connected device, replacing any previous one
    pub fn connect(&mut self, id: u32) -> Option<u32> {
        self.connected.replace(id)
    }

    pub fn disconnect(&mut self) -> Option<u32> {
        self.connected.take()
    }

    pub fn is_connected(&self, id: u32) -> bool {
        self.connected == Some(id)
    }

    /// Returns true when a new scan should be started
    pub fn set_bluetooth(&mut self, on: bool) -> bool {
        if self.bluetooth_on == on {
            return false;
        }
        self.bluetooth_on = on;
        if on {
            self.scanning = true;
            self.devices.clear();
        } else {
            // The warning comes back every time Bluetooth goes off
            self.banner_dismissed = false;
        }
        on
    }

    pub fn show_banner(&self) -> bool {
        !self.bluetooth_on && !self.banner_dismissed
    }

    pub fn dismiss_banner(&mut self) {
        self.banner_dismissed = true;
    }

    pub fn device_name(&self, id: u32) -> Option<&str> {
        self.devices
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanned_panel() -> DevicePanel {
        let mut panel = DevicePanel::new();
        panel.devices_scanned(mock_devices());
        panel
    }

    #[test]
    fn test_initial_state() {
        let panel = DevicePanel::new();
        assert!(panel.bluetooth_on);
        assert!(panel.scanning);
        assert!(panel.devices.is_empty());
        assert!(panel.is_connected(3));
    }

    #[test]
    fn test_connect_replaces_previous_selection() {
        let mut panel = scanned_panel();
        assert_eq!(panel.connect(1), Some(3));
        assert!(panel.is_connected(1));
        assert!(!panel.is_connected(3));

        panel.connect(2);
        let connected: Vec<u32> = panel
            .devices
            .iter()
            .filter(|d| panel.is_connected(d.id))
            .map(|d| d.id)
            .collect();
        assert_eq!(connected, vec![2]);
    }

    #[test]
    fn test_disconnect_clears_selection() {
        let mut panel = scanned_panel();
        assert_eq!(panel.disconnect(), Some(3));
        assert_eq!(panel.connected, None);
        assert_eq!(panel.disconnect(), None);
    }

    #[test]
    fn test_bluetooth_off_shows_banner_until_dismissed() {
        let mut panel = scanned_panel();
        assert!(!panel.set_bluetooth(false));
        assert!(panel.show_banner());

        panel.dismiss_banner();
        assert!(!panel.show_banner());

        assert!(panel.set_bluetooth(true));
        assert!(panel.scanning);
        assert!(!panel.show_banner());

        panel.set_bluetooth(false);
        assert!(panel.show_banner());
    }

    #[test]
    fn test_setting_same_state_is_noop() {
        let mut panel = scanned_panel();
        assert!(!panel.set_bluetooth(true));
        assert!(!panel.scanning);
        assert_eq!(panel.devices.len(), 3);
    }

    #[test]
    fn test_scan_returns_fixtures() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let devices = runtime.block_on(scan_devices());
        assert_eq!(devices, mock_devices());
        assert_eq!(devices[1].signal.to_string(), "Medium");
    }
}
