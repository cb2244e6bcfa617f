//! # Route Table
//!
//! Maps paths to screens. Unknown paths fall through to `NotFound`, which
//! keeps the requested path so the 404 screen can show it.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Splash,
    Login,
    Dashboard,
    ConnectDevice,
    EmergencyContacts,
    AddContact,
    History,
    NotFound(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        match normalized {
            "/" | "" => Route::Landing,
            "/splash" => Route::Splash,
            "/login" => Route::Login,
            "/dashboard" => Route::Dashboard,
            "/connect-device" => Route::ConnectDevice,
            "/emergency-contacts" => Route::EmergencyContacts,
            "/add-contact" => Route::AddContact,
            "/history" => Route::History,
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Landing => "/",
            Route::Splash => "/splash",
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::ConnectDevice => "/connect-device",
            Route::EmergencyContacts => "/emergency-contacts",
            Route::AddContact => "/add-contact",
            Route::History => "/history",
            Route::NotFound(path) => path,
        }
    }

    /// Screens drawn with the top navbar
    pub fn has_navbar(&self) -> bool {
        !matches!(self, Route::Landing | Route::Splash)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_round_trip() {
        let routes = [
            Route::Landing,
            Route::Splash,
            Route::Login,
            Route::Dashboard,
            Route::ConnectDevice,
            Route::EmergencyContacts,
            Route::AddContact,
            Route::History,
        ];
        for route in routes {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_trailing_slash_and_whitespace() {
        assert_eq!(Route::from_path("/history/"), Route::History);
        assert_eq!(Route::from_path("  /login "), Route::Login);
    }

    #[test]
    fn test_catch_all_keeps_path() {
        let route = Route::from_path("/settings");
        assert_eq!(route, Route::NotFound("/settings".to_string()));
        assert_eq!(route.to_string(), "/settings");
    }

    #[test]
    fn test_navbar_visibility() {
        assert!(!Route::Landing.has_navbar());
        assert!(!Route::Splash.has_navbar());
        assert!(Route::Dashboard.has_navbar());
        assert!(Route::NotFound("/x".into()).has_navbar());
    }
}
