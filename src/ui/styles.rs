// SPDX-License-Identifier: MPL-2.0
//! Centralized button and container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::tilt::{TiltState, TILT_AMPLITUDE_DEGREES};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// How far (in logical pixels) the card shadow slides per degree of tilt.
const SHADOW_SHIFT_PER_DEGREE: f32 = 0.8;

/// Primary action button (the consultation CTA).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Generic panel surface used for the hero and stats sections.
///
/// The color is derived from the active Iced `Theme` background, with a
/// slight opacity, so panels stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Card surface style driven by the tilt angles.
///
/// Iced containers cannot rotate in perspective, so the angles map onto the
/// presentation instead: the drop shadow slides away from the pointer and
/// deepens as the card "lifts", and the border brightens. The angle values
/// themselves are computed in [`TiltState`] and not altered here.
pub fn card(tilt: TiltState) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();

        // Positive rotate_y means the pointer sits in the right half, so the
        // shadow moves left; positive rotate_x means the pointer is in the
        // top half, so the shadow moves down.
        let offset = Vector {
            x: -tilt.rotate_y * SHADOW_SHIFT_PER_DEGREE,
            y: tilt.rotate_x * SHADOW_SHIFT_PER_DEGREE,
        };

        // 0.0 at rest, 1.0 when both axes are at full deflection.
        let lift = (tilt.rotate_x.abs() + tilt.rotate_y.abs()) / TILT_AMPLITUDE_DEGREES;

        let border_color = if tilt.is_neutral() {
            extended.background.strong.color
        } else {
            palette::PRIMARY_500
        };

        container::Style {
            background: Some(Background::Color(extended.background.weak.color)),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: Shadow {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE + lift * 0.3,
                    ..palette::BLACK
                },
                offset,
                blur_radius: 8.0 + lift * 8.0,
            },
            text_color: Some(theme.palette().text),
            ..Default::default()
        }
    }
}

/// Subtle framed surface for the failure message.
pub fn error_panel(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
