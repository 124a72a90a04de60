//! Standard entity records: buildings, traps, troops, spells, heroes and pets.

use serde::{Deserialize, Serialize};

use super::kinds::{EntityKind, ResourceKind};
use super::one_based;

/// One-time structural upgrade ("gear up") offered to some defenses.
///
/// # Example JSON
///
/// ```json
/// { "cost": 1000000, "time": 86400, "count": 2, "requiredLevel": 7 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearUpData {
    /// Cost of the gear up.
    pub cost: u64,

    /// Duration of the gear up in seconds.
    pub time: u64,

    /// How many instances may be geared up.
    pub count: u32,

    /// Entity level that must be reached before gearing up.
    pub required_level: u32,
}

impl GearUpData {
    /// Whether an entity at `current_level` meets the level requirement.
    #[must_use]
    pub const fn is_unlocked_at(&self, current_level: u32) -> bool {
        current_level >= self.required_level
    }
}

/// Data-driven definition of an ordinary upgradeable entity.
///
/// # Example JSON
///
/// ```json
/// "Cannon": {
///     "type": "defense",
///     "uses": "gold",
///     "maxLevelByTownhall": [2, 3, 4, 5],
///     "maxCountByTownhall": [2, 2, 2, 2],
///     "cost": [250, 1000, 4000, 16000, 30000],
///     "time": [5, 30, 120, 1200, 3600],
///     "gearUp": { "cost": 1000000, "time": 86400, "count": 2, "requiredLevel": 7 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardEntity {
    /// Entity classification.
    #[serde(rename = "type")]
    pub kind: EntityKind,

    /// Resource spent on upgrades.
    pub uses: ResourceKind,

    /// Maximum level per townhall (index 0 = townhall 1).
    #[serde(default)]
    pub max_level_by_townhall: Vec<u32>,

    /// Maximum number of instances per townhall (index 0 = townhall 1).
    #[serde(default)]
    pub max_count_by_townhall: Vec<u32>,

    /// Upgrade cost per level (index 0 = level 1).
    #[serde(default)]
    pub cost: Vec<u64>,

    /// Upgrade duration in seconds per level (index 0 = level 1).
    #[serde(default)]
    pub time: Vec<u64>,

    /// Instances that may be merged away per townhall.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub possible_count_removed_for_merge: Option<Vec<u32>>,

    /// Gear-up data, for entities that support it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gear_up: Option<GearUpData>,
}

impl StandardEntity {
    /// Upgrade cost to reach `level`.
    #[must_use]
    pub fn cost_at(&self, level: u32) -> Option<u64> {
        one_based(&self.cost, level)
    }

    /// Upgrade duration to reach `level`.
    #[must_use]
    pub fn time_at(&self, level: u32) -> Option<u64> {
        one_based(&self.time, level)
    }

    /// Instances removable by merging at `townhall`.
    #[must_use]
    pub fn removed_for_merge_at(&self, townhall: u32) -> Option<u32> {
        self.possible_count_removed_for_merge
            .as_deref()
            .and_then(|counts| one_based(counts, townhall))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entity() -> StandardEntity {
        StandardEntity {
            kind: EntityKind::Defense,
            uses: ResourceKind::Gold,
            max_level_by_townhall: vec![2, 3, 4],
            max_count_by_townhall: vec![2, 2, 2],
            cost: vec![250, 1000, 4000, 16000],
            time: vec![5, 30, 120, 1200],
            possible_count_removed_for_merge: Some(vec![0, 0, 1]),
            gear_up: None,
        }
    }

    #[test]
    fn test_cost_and_time_are_one_based() {
        let entity = create_test_entity();
        assert_eq!(entity.cost_at(1), Some(250));
        assert_eq!(entity.cost_at(4), Some(16000));
        assert_eq!(entity.time_at(2), Some(30));
    }

    #[test]
    fn test_out_of_range_levels() {
        let entity = create_test_entity();
        assert_eq!(entity.cost_at(0), None);
        assert_eq!(entity.cost_at(5), None);
        assert_eq!(entity.time_at(0), None);
    }

    #[test]
    fn test_removed_for_merge() {
        let mut entity = create_test_entity();
        assert_eq!(entity.removed_for_merge_at(3), Some(1));
        assert_eq!(entity.removed_for_merge_at(4), None);

        entity.possible_count_removed_for_merge = None;
        assert_eq!(entity.removed_for_merge_at(3), None);
    }

    #[test]
    fn test_gear_up_requirement() {
        let gear_up = GearUpData {
            cost: 1_000_000,
            time: 86_400,
            count: 2,
            required_level: 7,
        };
        assert!(gear_up.is_unlocked_at(7));
        assert!(gear_up.is_unlocked_at(8));
        assert!(!gear_up.is_unlocked_at(6));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "type": "troop",
            "uses": "elixir",
            "maxLevelByTownhall": [1, 2],
            "maxCountByTownhall": [1, 1],
            "cost": [100],
            "time": [60]
        }"#;
        let entity: StandardEntity = serde_json::from_str(json).unwrap();
        assert_eq!(entity.kind, EntityKind::Troop);
        assert_eq!(entity.uses, ResourceKind::Elixir);
        assert!(entity.gear_up.is_none());
        assert!(entity.possible_count_removed_for_merge.is_none());
    }
}
