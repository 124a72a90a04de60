//! Crafting Station records: one station, several mutually exclusive modes.

use serde::{Deserialize, Serialize};

use super::kinds::{EntityKind, ResourceKind};
use super::one_based;
use super::ordered_map;
use super::standard_data::GearUpData;

/// Upgradeable module belonging to a crafting mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftingModule {
    /// Module name, unique within its mode.
    pub name: String,

    /// Resource spent on module upgrades.
    pub uses: ResourceKind,

    /// Upgrade cost per level (index 0 = level 1).
    #[serde(default)]
    pub cost: Vec<u64>,

    /// Upgrade duration in seconds per level (index 0 = level 1).
    #[serde(default)]
    pub time: Vec<u64>,
}

impl CraftingModule {
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
}

/// One operating mode of the Crafting Station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CraftingMode {
    /// Resource spent in this mode.
    pub uses: ResourceKind,

    /// Whether the mode can be geared up.
    #[serde(default)]
    pub gear_up: bool,

    /// Maximum mode level per townhall (index 0 = townhall 1).
    #[serde(default)]
    pub max_level_by_townhall: Vec<u32>,

    /// Maximum count per townhall (index 0 = townhall 1).
    #[serde(default)]
    pub max_count_by_townhall: Vec<u32>,

    /// Modules in display order.
    #[serde(default)]
    pub modules: Vec<CraftingModule>,
}

impl CraftingMode {
    /// Find a module by name.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<&CraftingModule> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Module names in display order.
    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|m| m.name.as_str())
    }

    /// Maximum mode level at `townhall`.
    #[must_use]
    pub fn max_level_at(&self, townhall: u32) -> Option<u32> {
        one_based(&self.max_level_by_townhall, townhall)
    }

    /// Maximum count at `townhall`.
    #[must_use]
    pub fn max_count_at(&self, townhall: u32) -> Option<u32> {
        one_based(&self.max_count_by_townhall, townhall)
    }
}

/// Data-driven definition of the Crafting Station.
///
/// # Example JSON
///
/// ```json
/// "Crafting Station": {
///     "type": "defense",
///     "uses": "gold",
///     "cost": [8000000],
///     "time": [432000],
///     "modes": {
///         "Hook Tower": {
///             "uses": "gold",
///             "gearUp": false,
///             "maxLevelByTownhall": [0, 0, 30],
///             "maxCountByTownhall": [0, 0, 1],
///             "modules": [
///                 { "name": "Hitpoints", "uses": "gold", "cost": [500000], "time": [3600] }
///             ]
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CraftingStation {
    /// Entity classification (a defense).
    #[serde(rename = "type")]
    pub kind: EntityKind,

    /// Resource spent on the station itself.
    pub uses: ResourceKind,

    /// Maximum station level per townhall (index 0 = townhall 1).
    #[serde(default)]
    pub max_level_by_townhall: Vec<u32>,

    /// Maximum station count per townhall (index 0 = townhall 1).
    #[serde(default)]
    pub max_count_by_townhall: Vec<u32>,

    /// Station cost per level (index 0 = level 1).
    #[serde(default)]
    pub cost: Vec<u64>,

    /// Station duration in seconds per level (index 0 = level 1).
    #[serde(default)]
    pub time: Vec<u64>,

    /// Gear-up data, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gear_up: Option<GearUpData>,

    /// Operating modes in source order.
    #[serde(with = "ordered_map")]
    pub modes: Vec<(String, CraftingMode)>,
}

impl CraftingStation {
    /// Find a mode by name.
    #[must_use]
    pub fn mode(&self, name: &str) -> Option<&CraftingMode> {
        self.modes
            .iter()
            .find_map(|(mode_name, mode)| (mode_name == name).then_some(mode))
    }

    /// Mode names in source order.
    pub fn mode_names(&self) -> impl Iterator<Item = &str> {
        self.modes.iter().map(|(name, _)| name.as_str())
    }

    /// Station cost to reach `level`.
    #[must_use]
    pub fn cost_at(&self, level: u32) -> Option<u64> {
        one_based(&self.cost, level)
    }

    /// Station duration to reach `level`.
    #[must_use]
    pub fn time_at(&self, level: u32) -> Option<u64> {
        one_based(&self.time, level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_mode() -> CraftingMode {
        CraftingMode {
            uses: ResourceKind::Gold,
            gear_up: false,
            max_level_by_townhall: vec![0, 10, 30],
            max_count_by_townhall: vec![0, 1, 1],
            modules: vec![
                CraftingModule {
                    name: "Hitpoints".to_string(),
                    uses: ResourceKind::Gold,
                    cost: vec![100, 200],
                    time: vec![60, 120],
                },
                CraftingModule {
                    name: "Stun Time".to_string(),
                    uses: ResourceKind::Gold,
                    cost: vec![150],
                    time: vec![90],
                },
            ],
        }
    }

    #[test]
    fn test_module_lookup() {
        let mode = create_test_mode();
        assert_eq!(mode.module("Stun Time").and_then(|m| m.cost_at(1)), Some(150));
        assert!(mode.module("Range").is_none());
        assert_eq!(mode.module_names().collect::<Vec<_>>(), ["Hitpoints", "Stun Time"]);
    }

    #[test]
    fn test_mode_caps_by_townhall() {
        let mode = create_test_mode();
        assert_eq!(mode.max_level_at(1), Some(0));
        assert_eq!(mode.max_level_at(3), Some(30));
        assert_eq!(mode.max_count_at(2), Some(1));
        assert_eq!(mode.max_level_at(4), None);
    }

    #[test]
    fn test_station_mode_lookup_keeps_order() {
        let station = CraftingStation {
            kind: EntityKind::Defense,
            uses: ResourceKind::Gold,
            max_level_by_townhall: vec![],
            max_count_by_townhall: vec![],
            cost: vec![8_000_000],
            time: vec![432_000],
            gear_up: None,
            modes: vec![
                ("Hook Tower".to_string(), create_test_mode()),
                ("Flame Spinner".to_string(), create_test_mode()),
            ],
        };
        assert_eq!(
            station.mode_names().collect::<Vec<_>>(),
            ["Hook Tower", "Flame Spinner"]
        );
        assert!(station.mode("Flame Spinner").is_some());
        assert!(station.mode("Crusher Mortar").is_none());
        assert_eq!(station.cost_at(1), Some(8_000_000));
        assert_eq!(station.time_at(2), None);
    }
}
