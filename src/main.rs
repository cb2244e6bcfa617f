// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod contacts;
mod devices;
mod error;
mod fixtures;
mod form;
mod history;
mod login;
mod route;
mod theme;
mod toast;
mod ui;

use app::SafeLink;
use config::{Config, ConfigStore};

fn main() -> iced::Result {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::load() {
        Ok(config) => {
            log::info!("Loaded settings from {}", Config::config_path().display());
            config
        }
        Err(e) => {
            log::warn!("{}; using default settings", e);
            Config::default()
        }
    };

    iced::application("SafeLink: Your Personal Safety Companion", SafeLink::update, SafeLink::view)
        .subscription(SafeLink::subscription)
        .theme(SafeLink::theme)
        .window_size((1024.0, 768.0))
        .run_with(move || SafeLink::new(config, ConfigStore::Platform))
}
