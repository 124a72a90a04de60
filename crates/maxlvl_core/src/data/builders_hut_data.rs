//! Builder's Hut records and their two-phase upgrade economy.
//!
//! A hut is bought with gems (one price per hut instance) and only later
//! becomes an upgradeable gold-funded defense. Level 1 therefore answers
//! "which instance", while levels 2 and up answer "which upgrade tier".

use serde::{Deserialize, Serialize};

use super::kinds::{EntityKind, LevelDependent, ResourceKind};
use super::one_based;
use super::standard_data::GearUpData;

/// First level at which a hut counts as upgraded.
pub const UPGRADED_FROM_LEVEL: u32 = 2;

/// Purchase and upgrade tables for a Builder's Hut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeBehavior {
    /// Gem price of each hut instance (index 0 = first hut).
    pub base_costs: Vec<u64>,

    /// Upgrade cost per level from level 2 (index 0 = level 2).
    pub upgraded_costs: Vec<u64>,

    /// Upgrade duration per level from level 2 (index 0 = level 2).
    pub upgraded_times: Vec<u64>,

    /// Townhall that unlocks hut upgrades.
    #[serde(rename = "unlocksAtTH")]
    pub unlocks_at_th: u32,
}

impl UpgradeBehavior {
    /// Cost of `level`; level 1 is priced per `hut_instance`.
    #[must_use]
    pub fn cost_at(&self, level: u32, hut_instance: u32) -> Option<u64> {
        match level {
            0 => None,
            1 => one_based(&self.base_costs, hut_instance),
            _ => one_based(&self.upgraded_costs, level - 1),
        }
    }

    /// Duration of `level`; buying a hut is instant.
    #[must_use]
    pub fn time_at(&self, level: u32) -> Option<u64> {
        match level {
            0 => None,
            1 => Some(0),
            _ => one_based(&self.upgraded_times, level - 1),
        }
    }
}

/// Data-driven definition of the Builder's Hut.
///
/// # Example JSON
///
/// ```json
/// "Builder's Hut": {
///     "type": { "default": "resource", "upgraded": "defense" },
///     "uses": { "default": "gems", "upgraded": "gold" },
///     "maxLevelByTownhall": [1, 1, 1],
///     "maxCountByTownhall": [2, 3, 3],
///     "upgradeBehavior": {
///         "baseCosts": [0, 250, 500, 1000, 2000],
///         "upgradedCosts": [3500000],
///         "upgradedTimes": [259200],
///         "unlocksAtTH": 14
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildersHutEntity {
    /// Classification before and after the first upgrade.
    #[serde(rename = "type")]
    pub kind: LevelDependent<EntityKind>,

    /// Resource before and after the first upgrade.
    pub uses: LevelDependent<ResourceKind>,

    /// Maximum level per townhall (index 0 = townhall 1).
    #[serde(default)]
    pub max_level_by_townhall: Vec<u32>,

    /// Maximum number of huts per townhall (index 0 = townhall 1).
    #[serde(default)]
    pub max_count_by_townhall: Vec<u32>,

    /// Purchase and upgrade tables.
    pub upgrade_behavior: UpgradeBehavior,

    /// Gear-up data, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gear_up: Option<GearUpData>,
}
