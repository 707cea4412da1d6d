use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Coarse classification of an OpenWeatherMap condition code.
///
/// Codes are grouped by numeric range (2xx thunderstorm, 3xx drizzle, 5xx
/// rain, 6xx snow, 7xx atmosphere, 800 clear, 80x clouds). Classification
/// walks [`CONDITION_RULES`] top to bottom and the first matching rule wins;
/// the order is part of the contract and must not be replaced by a range map,
/// since future upstream codes could otherwise land ambiguously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionGroup {
    Clear,
    FewClouds,
    Overcast,
    Rain,
    Thunder,
    Snow,
    Atmosphere,
    Other,
}

type ConditionRule = (fn(i32) -> bool, ConditionGroup);

pub const CONDITION_RULES: &[ConditionRule] = &[
    (|code| code == 800, ConditionGroup::Clear),
    (|code| (801..=802).contains(&code), ConditionGroup::FewClouds),
    (|code| (803..=804).contains(&code), ConditionGroup::Overcast),
    (
        |code| (300..=399).contains(&code) || (500..=599).contains(&code),
        ConditionGroup::Rain,
    ),
    (|code| (200..=299).contains(&code), ConditionGroup::Thunder),
    (|code| (600..=699).contains(&code), ConditionGroup::Snow),
    (|code| (700..=799).contains(&code), ConditionGroup::Atmosphere),
];

/// Total over all integers; anything no rule claims falls back to `Other`.
#[must_use]
pub fn condition_group(code: i32) -> ConditionGroup {
    CONDITION_RULES
        .iter()
        .find_map(|(matches, group)| matches(code).then_some(*group))
        .unwrap_or(ConditionGroup::Other)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    None,
    Rain,
    Snow,
    Fog,
    Thunder,
}

#[must_use]
pub fn condition_particle(code: i32) -> ParticleKind {
    match condition_group(code) {
        ConditionGroup::Rain => ParticleKind::Rain,
        ConditionGroup::Thunder => ParticleKind::Thunder,
        ConditionGroup::Snow => ParticleKind::Snow,
        ConditionGroup::Atmosphere => ParticleKind::Fog,
        ConditionGroup::Clear
        | ConditionGroup::FewClouds
        | ConditionGroup::Overcast
        | ConditionGroup::Other => ParticleKind::None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconMode {
    Unicode,
    Ascii,
    Emoji,
}

#[must_use]
pub fn condition_icon(code: i32, mode: IconMode, is_day: bool) -> &'static str {
    let (ascii, emoji, unicode) = icon_tokens(condition_group(code), is_day);
    match mode {
        IconMode::Ascii => ascii,
        IconMode::Emoji => emoji,
        IconMode::Unicode => unicode,
    }
}

fn icon_tokens(group: ConditionGroup, is_day: bool) -> (&'static str, &'static str, &'static str) {
    match group {
        ConditionGroup::Clear => {
            if is_day {
                ("SUN", "☀️", "☀")
            } else {
                ("MON", "🌙", "☾")
            }
        }
        ConditionGroup::FewClouds => {
            if is_day {
                ("PCL", "🌤️", "⛅")
            } else {
                ("PCL", "☁️", "☁")
            }
        }
        ConditionGroup::Overcast => ("CLD", "☁️", "☁"),
        ConditionGroup::Rain => ("RAN", "🌧️", "☂"),
        ConditionGroup::Thunder => ("THN", "⛈️", "⚡"),
        ConditionGroup::Snow => ("SNW", "🌨️", "❄"),
        ConditionGroup::Atmosphere => ("FOG", "🌫️", "░"),
        ConditionGroup::Other => ("---", "☁️", "☁"),
    }
}

/// Whether the current wall clock falls inside the half-open daytime window
/// `[sunrise, sunset)`. Depends on the clock, so re-evaluating later in the
/// same session can flip the result with unchanged weather.
#[must_use]
pub fn is_daytime(sunrise: i64, sunset: i64) -> bool {
    is_daytime_at(sunrise, sunset, Utc::now().timestamp())
}

#[must_use]
pub fn is_daytime_at(sunrise: i64, sunset: i64, now: i64) -> bool {
    now >= sunrise && now < sunset
}
