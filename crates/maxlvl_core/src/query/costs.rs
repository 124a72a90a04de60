//! Level-indexed cost and time resolution.
//!
//! Standard entities and the Crafting Station read their per-level tables
//! directly. The Builder's Hut splits level 1 (buying the n-th hut with gems)
//! from levels 2 and up (gold-funded upgrades); see
//! [`UpgradeBehavior`](crate::data::UpgradeBehavior).

use super::Catalog;
use crate::data::EntityRecord;

/// Hut instance assumed when none is given.
pub const DEFAULT_HUT_INSTANCE: u32 = 1;

impl Catalog {
    /// Cost to bring `name` to `level`.
    ///
    /// For the Builder's Hut at level 1 this is the price of the first hut.
    #[must_use]
    pub fn cost(&self, name: &str, level: u32) -> Option<u64> {
        self.cost_for_instance(name, level, DEFAULT_HUT_INSTANCE)
    }

    /// Cost to bring `name` to `level`, pricing level 1 of a Builder's Hut
    /// as its `hut_instance`-th purchase.
    ///
    /// `hut_instance` is ignored for every other case.
    #[must_use]
    pub fn cost_for_instance(&self, name: &str, level: u32, hut_instance: u32) -> Option<u64> {
        match self.entity(name)? {
            EntityRecord::Standard(entity) => entity.cost_at(level),
            EntityRecord::BuildersHut(hut) => hut.upgrade_behavior.cost_at(level, hut_instance),
            EntityRecord::CraftingStation(station) => station.cost_at(level),
        }
    }

    /// Duration in seconds to bring `name` to `level`.
    #[must_use]
    pub fn time(&self, name: &str, level: u32) -> Option<u64> {
        match self.entity(name)? {
            EntityRecord::Standard(entity) => entity.time_at(level),
            EntityRecord::BuildersHut(hut) => hut.upgrade_behavior.time_at(level),
            EntityRecord::CraftingStation(station) => station.time_at(level),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::query::test_support::catalog;

    #[test]
    fn test_standard_cost_and_time() {
        let catalog = catalog();
        assert_eq!(catalog.cost("Cannon", 1), Some(250));
        assert_eq!(catalog.cost("Cannon", 4), Some(16000));
        assert_eq!(catalog.time("Cannon", 4), Some(1200));
        assert_eq!(catalog.cost("Cannon", 0), None);
        assert_eq!(catalog.cost("Cannon", 7), None);
        assert_eq!(catalog.time("Cannon", 7), None);
    }

    #[test]
    fn test_hut_instance_ignored_for_standard() {
        let catalog = catalog();
        assert_eq!(catalog.cost_for_instance("Cannon", 2, 4), Some(1000));
    }

    #[test]
    fn test_builders_hut_purchase() {
        let catalog = catalog();
        assert_eq!(catalog.cost("Builder's Hut", 1), Some(0));
        assert_eq!(catalog.cost_for_instance("Builder's Hut", 1, 1), Some(0));
        assert_eq!(catalog.cost_for_instance("Builder's Hut", 1, 2), Some(250));
        assert_eq!(catalog.cost_for_instance("Builder's Hut", 1, 5), Some(2000));
        assert_eq!(catalog.cost_for_instance("Builder's Hut", 1, 6), None);
        assert_eq!(catalog.time("Builder's Hut", 1), Some(0));
    }

    #[test]
    fn test_builders_hut_upgrades() {
        let catalog = catalog();
        assert_eq!(catalog.cost("Builder's Hut", 2), Some(3_500_000));
        assert_eq!(catalog.cost_for_instance("Builder's Hut", 3, 5), Some(4_000_000));
        assert_eq!(catalog.time("Builder's Hut", 2), Some(259_200));
        assert_eq!(catalog.time("Builder's Hut", 3), Some(345_600));
        assert_eq!(catalog.cost("Builder's Hut", 4), None);
        assert_eq!(catalog.time("Builder's Hut", 4), None);
    }

    #[test]
    fn test_crafting_station_itself() {
        let catalog = catalog();
        assert_eq!(catalog.cost("Crafting Station", 1), Some(8_000_000));
        assert_eq!(catalog.time("Crafting Station", 1), Some(432_000));
        assert_eq!(catalog.cost("Crafting Station", 2), None);
    }

    #[test]
    fn test_unknown_entity() {
        let catalog = catalog();
        assert_eq!(catalog.cost("Nonexistent", 1), None);
        assert_eq!(catalog.cost_for_instance("Nonexistent", 1, 1), None);
        assert_eq!(catalog.time("Nonexistent", 1), None);
    }
}
