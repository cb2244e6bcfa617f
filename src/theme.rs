use serde::{Deserialize, Serialize};

/// Light/dark appearance toggled from the navbar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn to_iced(self) -> iced::Theme {
        match self {
            ThemeMode::Light => iced::Theme::Light,
            ThemeMode::Dark => iced::Theme::Dark,
        }
    }

    /// Label for the toggle button; shows the mode a click switches to
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "☾ Dark",
            ThemeMode::Dark => "☀ Light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggle().toggle(), ThemeMode::Light);
    }

    #[test]
    fn test_to_iced() {
        assert_eq!(ThemeMode::Dark.to_iced(), iced::Theme::Dark);
        assert_eq!(ThemeMode::default().to_iced(), iced::Theme::Light);
    }
}
