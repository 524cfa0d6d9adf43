use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::{BannerKind, ThemeMode};

const BUTTON_RADIUS: f32 = 6.0;
const CARD_RADIUS: f32 = 10.0;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Gallery Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.07, 0.07, 0.08),
                text: Color::from_rgb(0.93, 0.93, 0.93),
                primary: Color::from_rgb(0.64, 0.11, 0.16),
                success: Color::from_rgb(0.2, 0.75, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Gallery Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.97, 0.96, 0.94),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.64, 0.11, 0.16),
                success: Color::from_rgb(0.1, 0.6, 0.3),
                danger: Color::from_rgb(0.85, 0.2, 0.2),
                warning: Color::from_rgb(0.85, 0.55, 0.0),
            },
        ),
    }
}

fn solid_button(background: Color, text_color: Color, snap: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: background,
            width: 1.0,
            radius: BUTTON_RADIUS.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

/// The search button, in the museum crimson.
pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => {
            solid_button(Color::from_rgb(0.64, 0.11, 0.16), Color::WHITE, false)
        }
        button::Status::Hovered => {
            solid_button(Color::from_rgb(0.76, 0.16, 0.21), Color::WHITE, false)
        }
        button::Status::Pressed => {
            solid_button(Color::from_rgb(0.5, 0.08, 0.12), Color::WHITE, true)
        }
        button::Status::Disabled => solid_button(
            Color::from_rgb(0.3, 0.3, 0.3),
            Color::from_rgb(0.5, 0.5, 0.5),
            false,
        ),
    }
}

pub fn chip_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();
    let (background_alpha, border_alpha) = match status {
        button::Status::Active | button::Status::Disabled => (0.08, 0.35),
        button::Status::Hovered => (0.16, 0.6),
        button::Status::Pressed => (0.24, 0.8),
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: background_alpha,
            ..palette.text
        })),
        text_color: palette.text,
        border: Border {
            color: Color {
                a: border_alpha,
                ..palette.text
            },
            width: 1.0,
            radius: 14.0.into(),
        },
        shadow: Shadow::default(),
        snap: matches!(status, button::Status::Pressed),
    }
}

pub fn link_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let primary = theme.palette().primary;
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            r: (primary.r + 0.2).min(1.0),
            g: (primary.g + 0.2).min(1.0),
            b: (primary.b + 0.2).min(1.0),
            a: 1.0,
        },
        _ => primary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: false,
    }
}

pub fn banner_color(kind: BannerKind) -> Color {
    match kind {
        BannerKind::Info => Color::from_rgb(0.2, 0.5, 0.9),
        BannerKind::Success => Color::from_rgb(0.2, 0.75, 0.4),
        BannerKind::Warning => Color::from_rgb(1.0, 0.7, 0.0),
        BannerKind::Error => Color::from_rgb(1.0, 0.3, 0.3),
    }
}

pub fn banner_style(kind: BannerKind) -> container::Style {
    let accent = banner_color(kind);

    container::Style {
        background: Some(Background::Color(Color { a: 0.15, ..accent })),
        border: Border {
            color: Color { a: 0.6, ..accent },
            width: 1.0,
            radius: BUTTON_RADIUS.into(),
        },
        ..Default::default()
    }
}

pub fn card_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        background: Some(Background::Color(Color {
            a: 0.04,
            ..palette.text
        })),
        border: Border {
            color: Color {
                a: 0.12,
                ..palette.text
            },
            width: 1.0,
            radius: CARD_RADIUS.into(),
        },
        ..Default::default()
    }
}

pub fn placeholder_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        background: Some(Background::Color(Color {
            a: 0.07,
            ..palette.text
        })),
        text_color: Some(Color {
            a: 0.6,
            ..palette.text
        }),
        border: Border {
            radius: BUTTON_RADIUS.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn divider_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.3))),
        ..Default::default()
    }
}

pub fn muted_text_color() -> Color {
    Color::from_rgba(0.6, 0.6, 0.6, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_theme_dark_mode() {
        let theme = get_theme(&ThemeMode::Dark);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.07, 0.07, 0.08));
        assert_eq!(palette.text, Color::from_rgb(0.93, 0.93, 0.93));
    }

    #[test]
    fn test_get_theme_light_mode() {
        let theme = get_theme(&ThemeMode::Light);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.97, 0.96, 0.94));
        assert_eq!(palette.text, Color::from_rgb(0.1, 0.1, 0.1));
    }

    #[test]
    fn test_primary_button_style_active_is_crimson() {
        let style = primary_button_style(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.64, 0.11, 0.16));
        } else {
            panic!("Expected background color");
        }

        assert_eq!(style.text_color, Color::WHITE);
    }

    #[test]
    fn test_primary_button_style_pressed_snaps() {
        let style = primary_button_style(&Theme::Dark, button::Status::Pressed);

        assert!(style.snap);
    }

    #[test]
    fn test_primary_button_style_disabled_is_gray() {
        let style = primary_button_style(&Theme::Dark, button::Status::Disabled);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.3, 0.3, 0.3));
        } else {
            panic!("Expected background color");
        }

        assert_eq!(style.text_color, Color::from_rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_chip_hover_is_more_opaque_than_active() {
        let theme = get_theme(&ThemeMode::Dark);

        let active = chip_button_style(&theme, button::Status::Active);
        let hovered = chip_button_style(&theme, button::Status::Hovered);

        match (active.background, hovered.background) {
            (Some(Background::Color(active)), Some(Background::Color(hovered))) => {
                assert!(hovered.a > active.a);
            }
            _ => panic!("Expected background colors"),
        }
    }

    #[test]
    fn test_link_button_has_no_background() {
        let theme = get_theme(&ThemeMode::Light);

        let style = link_button_style(&theme, button::Status::Active);

        assert!(style.background.is_none());
        assert_eq!(style.text_color, theme.palette().primary);
    }

    #[test]
    fn test_banner_styles_use_distinct_accents() {
        let kinds = [
            BannerKind::Info,
            BannerKind::Success,
            BannerKind::Warning,
            BannerKind::Error,
        ];

        for (index, kind) in kinds.iter().enumerate() {
            for other in &kinds[index + 1..] {
                assert_ne!(banner_color(*kind), banner_color(*other));
            }
        }
    }

    #[test]
    fn test_banner_style_border_uses_accent() {
        let style = banner_style(BannerKind::Error);

        assert_eq!(
            style.border.color,
            Color {
                a: 0.6,
                ..banner_color(BannerKind::Error)
            }
        );
    }
}
