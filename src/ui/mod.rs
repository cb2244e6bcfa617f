//! # UI Module
//!
//! One view module per routed screen, plus the pieces they share.
//!
//! ## Organization
//! - `widgets`: navbar, header band, back links, banner, toasts, form inputs
//! - `styles`: shared styling utilities
//! - one file per screen, each exposing a `view` function

pub mod add_contact;
pub mod connect_device;
pub mod contacts;
pub mod dashboard;
pub mod history;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod splash;
pub mod styles;
pub mod widgets;
