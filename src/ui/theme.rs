use ratatui::style::Color;

use crate::domain::weather::{ConditionGroup, condition_group};

/// Cosmetic style for the whole dashboard, derived from the current condition
/// code and the day/night flag. Pure output with no identity; recomputed on
/// every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDescriptor {
    /// Background gradient endpoints, blended row by row.
    pub top: Color,
    pub bottom: Color,
    pub text: Color,
    pub card: Color,
    pub accent: Color,
}

/// Ordered theme rules mirroring the condition classification: the group
/// ordering encodes the first-match priority, so an exact 800 is decided
/// before the 801-802 band, and so on down to the catch-all.
#[must_use]
pub fn select_theme(condition_code: i32, is_day: bool) -> ThemeDescriptor {
    match condition_group(condition_code) {
        ConditionGroup::Clear => {
            if is_day {
                ThemeDescriptor {
                    top: Color::Rgb(56, 189, 248),
                    bottom: Color::Rgb(59, 130, 246),
                    text: Color::Rgb(255, 255, 255),
                    card: Color::Rgb(82, 158, 227),
                    accent: Color::Rgb(253, 224, 71),
                }
            } else {
                ThemeDescriptor {
                    top: Color::Rgb(49, 46, 129),
                    bottom: Color::Rgb(30, 58, 138),
                    text: Color::Rgb(255, 255, 255),
                    card: Color::Rgb(38, 48, 110),
                    accent: Color::Rgb(147, 197, 253),
                }
            }
        }
        ConditionGroup::FewClouds => {
            if is_day {
                ThemeDescriptor {
                    top: Color::Rgb(96, 165, 250),
                    bottom: Color::Rgb(125, 211, 252),
                    text: Color::Rgb(31, 41, 55),
                    card: Color::Rgb(147, 197, 253),
                    accent: Color::Rgb(30, 64, 175),
                }
            } else {
                ThemeDescriptor {
                    top: Color::Rgb(17, 24, 39),
                    bottom: Color::Rgb(30, 64, 175),
                    text: Color::Rgb(255, 255, 255),
                    card: Color::Rgb(30, 41, 82),
                    accent: Color::Rgb(147, 197, 253),
                }
            }
        }
        ConditionGroup::Overcast => ThemeDescriptor {
            top: Color::Rgb(156, 163, 175),
            bottom: Color::Rgb(75, 85, 99),
            text: Color::Rgb(255, 255, 255),
            card: Color::Rgb(97, 105, 119),
            accent: Color::Rgb(229, 231, 235),
        },
        ConditionGroup::Rain => ThemeDescriptor {
            top: Color::Rgb(55, 65, 81),
            bottom: Color::Rgb(30, 58, 138),
            text: Color::Rgb(255, 255, 255),
            card: Color::Rgb(44, 55, 96),
            accent: Color::Rgb(147, 197, 253),
        },
        ConditionGroup::Thunder => ThemeDescriptor {
            top: Color::Rgb(17, 24, 39),
            bottom: Color::Rgb(88, 28, 135),
            text: Color::Rgb(255, 255, 255),
            card: Color::Rgb(45, 27, 78),
            accent: Color::Rgb(216, 180, 254),
        },
        ConditionGroup::Snow => ThemeDescriptor {
            top: Color::Rgb(243, 244, 246),
            bottom: Color::Rgb(219, 234, 254),
            text: Color::Rgb(31, 41, 55),
            card: Color::Rgb(226, 236, 250),
            accent: Color::Rgb(59, 130, 246),
        },
        ConditionGroup::Atmosphere => ThemeDescriptor {
            top: Color::Rgb(156, 163, 175),
            bottom: Color::Rgb(107, 114, 128),
            text: Color::Rgb(31, 41, 55),
            card: Color::Rgb(134, 141, 153),
            accent: Color::Rgb(55, 65, 81),
        },
        ConditionGroup::Other => {
            if is_day {
                ThemeDescriptor {
                    top: Color::Rgb(59, 130, 246),
                    bottom: Color::Rgb(56, 189, 248),
                    text: Color::Rgb(255, 255, 255),
                    card: Color::Rgb(78, 152, 235),
                    accent: Color::Rgb(219, 234, 254),
                }
            } else {
                ThemeDescriptor {
                    top: Color::Rgb(31, 41, 55),
                    bottom: Color::Rgb(30, 58, 138),
                    text: Color::Rgb(255, 255, 255),
                    card: Color::Rgb(34, 46, 84),
                    accent: Color::Rgb(147, 197, 253),
                }
            }
        }
    }
}

/// Linear blend between the gradient endpoints for a row at `t` in `0..=1`.
#[must_use]
pub fn gradient_at(theme: &ThemeDescriptor, t: f32) -> Color {
    let (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) = (theme.top, theme.bottom) else {
        return theme.bottom;
    };
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8| -> u8 {
        (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
    };
    Color::Rgb(lerp(r1, r2), lerp(g1, g2), lerp(b1, b2))
}
