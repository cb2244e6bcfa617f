//! # UI Styling Module
//!
//! Centralized styling utilities for consistent UI appearance across screens.
//! Button and container styles are closures so they can be handed straight to
//! `.style(...)`; colors follow the active `iced::Theme` where it matters
//! (cards, header) and stay fixed for status colors (connect, delete, warning).

use iced::border::Radius;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// SafeLink teal
pub const BRAND: Color = Color { r: 0.2, g: 0.6, b: 0.7, a: 1.0 };
const BRAND_LIGHT: Color = Color { r: 0.3, g: 0.7, b: 0.8, a: 1.0 };
const BRAND_DARK: Color = Color { r: 0.15, g: 0.5, b: 0.6, a: 1.0 };

pub const DANGER: Color = Color { r: 0.8, g: 0.2, b: 0.2, a: 1.0 };
pub const MUTED: Color = Color { r: 0.5, g: 0.5, b: 0.5, a: 1.0 };
pub const SUCCESS: Color = Color { r: 0.2, g: 0.7, b: 0.2, a: 1.0 };
const WARNING: Color = Color { r: 0.85, g: 0.65, b: 0.1, a: 1.0 };

fn filled(background: Color, border: Color, width: f32) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            color: border,
            width,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

fn disabled() -> button::Style {
    button::Style {
        background: Some(Background::Color(Color::from_rgb(0.3, 0.3, 0.3))),
        text_color: Color::from_rgb(0.6, 0.6, 0.6),
        border: Border {
            color: Color::from_rgb(0.4, 0.4, 0.4),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Main call-to-action buttons (Get Started, Sign In, Connect, Save Contact)
pub fn primary_button_style() -> impl Fn(&Theme, button::Status) -> button::Style {
    |_theme: &Theme, status: button::Status| match status {
        button::Status::Active => filled(BRAND, BRAND_LIGHT, 1.0),
        button::Status::Hovered => filled(BRAND_LIGHT, BRAND_LIGHT, 1.0),
        button::Status::Pressed => filled(BRAND_DARK, BRAND, 1.0),
        button::Status::Disabled => disabled(),
    }
}

/// Outlined button (Learn More, Disconnect)
pub fn outline_button_style() -> impl Fn(&Theme, button::Status) -> button::Style {
    |theme: &Theme, status: button::Status| {
        let text_color = theme.palette().text;
        let background = match status {
            button::Status::Hovered => Some(Background::Color(Color { a: 0.1, ..BRAND })),
            button::Status::Pressed => Some(Background::Color(Color { a: 0.2, ..BRAND })),
            _ => None,
        };
        button::Style {
            background,
            text_color,
            border: Border {
                color: BRAND,
                width: 1.5,
                radius: 8.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Delete icon buttons (red theme)
pub fn danger_button_style() -> impl Fn(&Theme, button::Status) -> button::Style {
    |_theme: &Theme, status: button::Status| match status {
        button::Status::Active => filled(DANGER, Color::from_rgb(0.9, 0.3, 0.3), 1.0),
        button::Status::Hovered => filled(Color::from_rgb(0.9, 0.3, 0.3), Color::from_rgb(1.0, 0.4, 0.4), 1.0),
        button::Status::Pressed => filled(Color::from_rgb(0.7, 0.15, 0.15), DANGER, 1.0),
        button::Status::Disabled => disabled(),
    }
}

/// Text-only link buttons ("Back to Dashboard", navbar toggle)
pub fn link_button_style() -> impl Fn(&Theme, button::Status) -> button::Style {
    |theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => BRAND,
            button::Status::Disabled => MUTED,
            button::Status::Active => theme.palette().text,
        };
        button::Style {
            background: None,
            text_color,
            ..Default::default()
        }
    }
}

/// Tab headers on the history screen, highlighted when selected
pub fn tab_button_style(is_selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if is_selected {
            match status {
                button::Status::Hovered => filled(BRAND_LIGHT, BRAND_LIGHT, 0.0),
                button::Status::Pressed => filled(BRAND_DARK, BRAND_DARK, 0.0),
                _ => filled(BRAND, BRAND, 0.0),
            }
        } else {
            let background = match status {
                button::Status::Hovered => Some(Background::Color(Color { a: 0.1, ..BRAND })),
                _ => None,
            };
            button::Style {
                background,
                text_color: theme.palette().text,
                border: Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        }
    }
}

/// Clickable dashboard feature cards
pub fn feature_card_style() -> impl Fn(&Theme, button::Status) -> button::Style {
    |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let (border_color, shadow_blur) = match status {
            button::Status::Hovered => (BRAND, 16.0),
            button::Status::Pressed => (BRAND_DARK, 4.0),
            _ => (palette.background.strong.color, 8.0),
        };
        button::Style {
            background: Some(Background::Color(palette.background.weak.color)),
            text_color: palette.background.base.text,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: 16.0.into(),
            },
            shadow: Shadow {
                color: Color { a: 0.15, ..Color::BLACK },
                offset: Vector::new(0.0, 2.0),
                blur_radius: shadow_blur,
            },
            ..Default::default()
        }
    }
}

/// Plain card container
pub fn card_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 16.0.into(),
        },
        shadow: Shadow {
            color: Color { a: 0.1, ..Color::BLACK },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Brand-colored header band at the top of inner screens
pub fn wave_header_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BRAND)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: Radius::default().bottom(32.0),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Full-window splash background
pub fn splash_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BRAND_DARK)),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Yellow warning banner (Bluetooth off)
pub fn warning_banner_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: 0.12, ..WARNING })),
        text_color: Some(Color::from_rgb(0.6, 0.45, 0.0)),
        border: Border {
            color: Color { a: 0.4, ..WARNING },
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn toast_style(destructive: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let (background, text_color) = if destructive {
            (DANGER, Color::WHITE)
        } else {
            (palette.background.base.color, palette.background.base.text)
        };
        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(text_color),
            border: Border {
                color: palette.background.strong.color,
                width: 1.0,
                radius: 8.0.into(),
            },
            shadow: Shadow {
                color: Color { a: 0.25, ..Color::BLACK },
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            ..Default::default()
        }
    }
}

/// Round icon badge (brand mark, device/contact avatars)
pub fn badge_style(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wave_header_rounds_bottom_corners_only() {
        let radius = wave_header_style(&Theme::Light).border.radius;
        assert_eq!(radius.top_left, 0.0);
        assert_eq!(radius.top_right, 0.0);
        assert_eq!(radius.bottom_left, 32.0);
        assert_eq!(radius.bottom_right, 32.0);
    }
}
