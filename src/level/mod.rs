//! Experience → level curve and progress bars
//!
//! Level `n` is reached at `6·n·(n-1)` experience, so the gaps between
//! levels grow linearly (12, 24, 36, ...). With no experience at all the
//! level is 0, which has both floor and ceiling at 0. The top level that
//! fits in a `u64` has its ceiling clamped to `u64::MAX`.

use heck::ToTitleCase;
use serde::Serialize;

/// Bar length used by the dashboard
pub const DEFAULT_BAR_LENGTH: usize = 24;
/// Glyph for a filled bar unit
pub const FILLED_GLYPH: char = '▰';
/// Glyph for an empty bar unit
pub const EMPTY_GLYPH: char = '▱';

/// Level reached with `experience`
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn level_of(experience: u64) -> u64 {
    if experience == 0 {
        return 0;
    }
    let estimate = ((experience as f64 / 6.0 + 0.25).sqrt() + 0.5).floor() as u64;

    // settle float error against the exact thresholds
    let mut level = estimate.max(1);
    while level > 1 && checked_floor(level).is_none_or(|floor| floor > experience) {
        level -= 1;
    }
    while checked_floor(level + 1).is_some_and(|floor| floor <= experience) {
        level += 1;
    }
    level
}

/// Minimum experience needed to have reached `level`, `None` past `u64::MAX`
const fn checked_floor(level: u64) -> Option<u64> {
    match 6u64.checked_mul(level) {
        Some(step) => step.checked_mul(level.saturating_sub(1)),
        None => None,
    }
}

/// Minimum experience needed to have reached `level`, saturating at `u64::MAX`
#[must_use]
pub const fn experience_floor(level: u64) -> u64 {
    match checked_floor(level) {
        Some(floor) => floor,
        None => u64::MAX,
    }
}

/// Experience at which the current level was reached
#[must_use]
pub fn level_floor(experience: u64) -> u64 {
    experience_floor(level_of(experience))
}

/// Experience at which the next level is reached
#[must_use]
pub fn level_ceiling(experience: u64) -> u64 {
    experience_floor(level_of(experience) + 1)
}

/// Progress from the current level towards the next, in `[0, 1)`.
///
/// Zero when the current and next level start at the same experience.
#[must_use]
pub fn progress_fraction(experience: u64) -> f64 {
    LevelState::new(experience).fraction()
}

/// Number of filled units for `fraction` on a bar of `length` units
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn filled_units(fraction: f64, length: usize) -> usize {
    if !fraction.is_finite() || fraction <= 0.0 {
        return 0;
    }
    let filled = (fraction * length as f64).round_ties_even() as usize;
    filled.min(length)
}

/// Render `filled` units out of `length`
#[must_use]
pub fn bar(filled: usize, length: usize) -> String {
    let filled = filled.min(length);
    let mut out = String::with_capacity(length * FILLED_GLYPH.len_utf8());
    out.extend(std::iter::repeat_n(FILLED_GLYPH, filled));
    out.extend(std::iter::repeat_n(EMPTY_GLYPH, length - filled));
    out
}

/// Progress bar towards the next level
#[must_use]
pub fn render_bar(experience: u64, length: usize) -> String {
    LevelState::new(experience).bar(length)
}

/// Progress bar from raw values rather than a level curve
///
/// Renders an empty bar when `needed` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn custom_bar(current: u64, needed: u64, length: usize) -> String {
    if needed == 0 {
        return bar(0, length);
    }
    bar(filled_units(current as f64 / needed as f64, length), length)
}

/// One aligned statistics line, e.g.
/// `"                     Figures:  14 --- Lv2 ▰▰▱▱..."`.
///
/// The label is title-cased and right-aligned to 30 columns, the value to 3.
/// A missing value is shown as `0` at level 0.
#[must_use]
pub fn statistics_row(key: &str, value: Option<u64>, show_level: bool, length: usize) -> String {
    let label = format!("{}: ", key.to_title_case());
    let shown = value.unwrap_or(0);
    let mut row = format!("{label:>30}{shown:>3}");
    if show_level {
        match value {
            Some(experience) => {
                let state = LevelState::new(experience);
                row.push_str(&format!(" --- Lv{} {}", state.level, state.bar(length)));
            }
            None => row.push_str(" --- Lv0"),
        }
    }
    row
}

/// Level, floor and ceiling derived from an experience value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelState {
    pub experience: u64,
    pub level: u64,
    /// Experience at which `level` was reached
    pub floor: u64,
    /// Experience at which `level + 1` is reached
    pub ceiling: u64,
}

impl LevelState {
    #[must_use]
    pub fn new(experience: u64) -> Self {
        let level = level_of(experience);
        Self {
            experience,
            level,
            floor: experience_floor(level),
            ceiling: experience_floor(level + 1),
        }
    }

    /// Share of the way from `floor` to `ceiling`
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        let span = self.ceiling.saturating_sub(self.floor);
        if span == 0 {
            return 0.0;
        }
        self.experience.saturating_sub(self.floor) as f64 / span as f64
    }

    /// Experience still missing for the next level
    #[must_use]
    pub const fn remaining(&self) -> u64 {
        self.ceiling.saturating_sub(self.experience)
    }

    /// Filled units on a bar of `length`
    #[must_use]
    pub fn filled(&self, length: usize) -> usize {
        filled_units(self.fraction(), length)
    }

    #[must_use]
    pub fn bar(&self, length: usize) -> String {
        bar(self.filled(length), length)
    }
}
