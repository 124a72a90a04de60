//! Townhall progression helpers that need no entity data.

use crate::config::MIN_TOWNHALL;
use crate::query::Catalog;

/// Townhall at which the laboratory first appears.
pub const LAB_UNLOCK_TOWNHALL: u32 = 3;

/// Laboratory level available at `townhall`, within `1..=max_townhall`.
///
/// Townhalls below [`LAB_UNLOCK_TOWNHALL`] have no laboratory (level 0).
#[must_use]
pub fn lab_level_for_townhall(townhall: u32, max_townhall: u32) -> Option<u32> {
    if !(MIN_TOWNHALL..=max_townhall).contains(&townhall) {
        return None;
    }
    Some(townhall.saturating_sub(LAB_UNLOCK_TOWNHALL - 1))
}

/// Render a duration in seconds as `"1d 2h 3m"`.
///
/// Zero-valued parts are dropped and leftover seconds are truncated, so
/// anything under a minute renders as `"0s"`.
#[must_use]
pub fn format_build_time(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    let parts: Vec<String> = [(days, 'd'), (hours, 'h'), (minutes, 'm')]
        .into_iter()
        .filter(|&(value, _)| value > 0)
        .map(|(value, unit)| format!("{value}{unit}"))
        .collect();

    if parts.is_empty() {
        "0s".to_string()
    } else {
        parts.join(" ")
    }
}

impl Catalog {
    /// Laboratory level at `townhall` under this catalog's townhall range.
    #[must_use]
    pub fn lab_level(&self, townhall: u32) -> Option<u32> {
        lab_level_for_townhall(townhall, self.config().max_townhall)
    }
}
