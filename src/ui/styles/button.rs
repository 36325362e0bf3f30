// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette::WHITE, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Grid tile. The color pair comes from the gallery theme's palette; the
/// accent shows through on hover so tiles stay clickable-looking even once
/// the thumbnail covers the placeholder color.
pub fn tile(colors: (Color, Color)) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (base, accent) = colors;
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => accent,
            _ => base,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                color: accent,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}

/// Header refresh control, derived from the active Iced theme so it reads
/// correctly under every preset.
pub fn refresh(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let pair = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong,
        _ => palette.primary.base,
    };

    button::Style {
        background: Some(Background::Color(pair.color)),
        text_color: pair.text,
        border: Border {
            color: palette.primary.strong.color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Overlay close control: quiet until hovered.
pub fn close(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(palette.background.weak.color))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}
