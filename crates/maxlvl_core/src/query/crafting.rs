//! Crafting Station sub-resolver.
//!
//! The station is the one record carrying `modes`; it is never looked up by
//! name. A missing station, mode or module each resolve to `None` (or an
//! empty list) on their own, so one bad mode never affects another.

use super::Catalog;
use crate::data::{CraftingMode, CraftingModule, CraftingStation, ResourceKind};

impl Catalog {
    /// The Crafting Station as `(name, record)`.
    #[must_use]
    pub fn crafting_station(&self) -> Option<(&str, &CraftingStation)> {
        self.dataset().crafting_station()
    }

    /// Look up a crafting mode by name.
    #[must_use]
    pub fn crafting_mode(&self, mode: &str) -> Option<&CraftingMode> {
        self.crafting_station()?.1.mode(mode)
    }

    fn crafting_module(&self, mode: &str, module: &str) -> Option<&CraftingModule> {
        self.crafting_mode(mode)?.module(module)
    }

    /// Mode names in dataset order; empty without a station.
    #[must_use]
    pub fn crafting_modes(&self) -> Vec<&str> {
        self.crafting_station()
            .map(|(_, station)| station.mode_names().collect())
            .unwrap_or_default()
    }

    /// Module names of `mode`; empty when the station or mode is missing.
    #[must_use]
    pub fn crafting_mode_modules(&self, mode: &str) -> Vec<&str> {
        self.crafting_mode(mode)
            .map(|mode| mode.module_names().collect())
            .unwrap_or_default()
    }

    /// Maximum level of `mode` at `townhall`.
    #[must_use]
    pub fn crafting_mode_max_level(&self, mode: &str, townhall: u32) -> Option<u32> {
        self.crafting_mode(mode)?.max_level_at(townhall)
    }

    /// Maximum count of `mode` at `townhall`.
    #[must_use]
    pub fn crafting_mode_count(&self, mode: &str, townhall: u32) -> Option<u32> {
        self.crafting_mode(mode)?.max_count_at(townhall)
    }

    /// Resource spent in `mode`.
    #[must_use]
    pub fn crafting_mode_uses(&self, mode: &str) -> Option<ResourceKind> {
        self.crafting_mode(mode).map(|mode| mode.uses)
    }

    /// Whether `mode` can be geared up.
    #[must_use]
    pub fn crafting_mode_gear_up(&self, mode: &str) -> Option<bool> {
        self.crafting_mode(mode).map(|mode| mode.gear_up)
    }

    /// Resource spent on `module` of `mode`.
    #[must_use]
    pub fn module_uses(&self, mode: &str, module: &str) -> Option<ResourceKind> {
        self.crafting_module(mode, module).map(|module| module.uses)
    }

    /// Cost to bring `module` of `mode` to `level`.
    #[must_use]
    pub fn module_upgrade_cost(&self, mode: &str, module: &str, level: u32) -> Option<u64> {
        self.crafting_module(mode, module)?.cost_at(level)
    }

    /// Duration in seconds to bring `module` of `mode` to `level`.
    #[must_use]
    pub fn module_upgrade_time(&self, mode: &str, module: &str, level: u32) -> Option<u64> {
        self.crafting_module(mode, module)?.time_at(level)
    }
}

#[cfg(test)]
mod tests {
    use crate::dataset::Dataset;
    use crate::query::test_support::{cannon, catalog};

    use super::*;

    #[test]
    fn test_station_found_by_shape() {
        let catalog = catalog();
        let (name, station) = catalog.crafting_station().unwrap();
        assert_eq!(name, "Crafting Station");
        assert_eq!(station.modes.len(), 2);
    }

    #[test]
    fn test_modes_and_modules() {
        let catalog = catalog();
        assert_eq!(catalog.crafting_modes(), ["Hook Tower", "Flame Spinner"]);
        assert_eq!(
            catalog.crafting_mode_modules("Hook Tower"),
            ["Hitpoints", "Stun Time"]
        );
        assert!(catalog.crafting_mode_modules("Crusher Mortar").is_empty());
    }

    #[test]
    fn test_mode_caps() {
        let catalog = catalog();
        assert_eq!(catalog.crafting_mode_max_level("Hook Tower", 5), Some(30));
        assert_eq!(catalog.crafting_mode_max_level("Hook Tower", 1), Some(0));
        assert_eq!(catalog.crafting_mode_count("Hook Tower", 5), Some(1));
        assert_eq!(catalog.crafting_mode_count("Hook Tower", 1), Some(0));
        assert_eq!(catalog.crafting_mode_max_level("Hook Tower", 6), None);
        assert_eq!(catalog.crafting_mode_max_level("Crusher Mortar", 5), None);
    }

    #[test]
    fn test_mode_metadata() {
        let catalog = catalog();
        assert_eq!(catalog.crafting_mode_uses("Hook Tower"), Some(ResourceKind::Gold));
        assert_eq!(catalog.crafting_mode_gear_up("Hook Tower"), Some(false));
        assert_eq!(catalog.crafting_mode_gear_up("Flame Spinner"), Some(true));
        assert_eq!(catalog.crafting_mode_gear_up("Crusher Mortar"), None);
        assert_eq!(
            catalog.module_uses("Flame Spinner", "Damage"),
            Some(ResourceKind::Gold)
        );
    }

    #[test]
    fn test_module_cost_and_time() {
        let catalog = catalog();
        assert_eq!(catalog.module_upgrade_cost("Hook Tower", "Hitpoints", 2), Some(600_000));
        assert_eq!(catalog.module_upgrade_time("Hook Tower", "Hitpoints", 1), Some(3600));
        assert_eq!(catalog.module_upgrade_cost("Hook Tower", "Hitpoints", 3), None);
        assert_eq!(catalog.module_upgrade_cost("Hook Tower", "Hitpoints", 0), None);
    }

    #[test]
    fn test_missing_module_does_not_affect_other_modes() {
        let catalog = catalog();
        assert_eq!(catalog.module_upgrade_cost("Hook Tower", "Damage", 1), None);
        assert_eq!(catalog.module_upgrade_cost("Flame Spinner", "Damage", 1), Some(700_000));
        assert_eq!(catalog.module_upgrade_time("Crusher Mortar", "Damage", 1), None);
    }

    #[test]
    fn test_without_station() {
        let dataset = Dataset::from_entries([("Cannon".to_string(), cannon())]).unwrap();
        let catalog = Catalog::with_default_config(dataset);
        assert!(catalog.crafting_station().is_none());
        assert!(catalog.crafting_modes().is_empty());
        assert!(catalog.crafting_mode_modules("Hook Tower").is_empty());
        assert_eq!(catalog.crafting_mode_max_level("Hook Tower", 17), None);
        assert_eq!(catalog.module_upgrade_cost("Hook Tower", "Hitpoints", 1), None);
    }
}
