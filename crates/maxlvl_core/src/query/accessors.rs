//! Single-lookup accessors: classification, caps and gear-up data.

use super::Catalog;
use crate::data::{EntityKind, GearUpData, ResourceKind};

impl Catalog {
    /// Maximum level of `name` at `townhall`.
    #[must_use]
    pub fn max_level(&self, name: &str, townhall: u32) -> Option<u32> {
        self.entity(name)?.max_level_at(townhall)
    }

    /// Maximum number of `name` at `townhall`.
    #[must_use]
    pub fn max_count(&self, name: &str, townhall: u32) -> Option<u32> {
        self.entity(name)?.max_count_at(townhall)
    }

    /// Whether `name` has switched to its upgraded classification at `level`.
    ///
    /// Only true for a Builder's Hut at level 2 and above.
    #[must_use]
    pub fn is_upgraded(&self, name: &str, level: u32) -> bool {
        self.entity(name)
            .is_some_and(|record| record.is_upgraded_at(level))
    }

    /// Classification of `name` at level 1.
    #[must_use]
    pub fn kind(&self, name: &str) -> Option<EntityKind> {
        self.kind_at(name, 1)
    }

    /// Classification of `name` at `level`.
    #[must_use]
    pub fn kind_at(&self, name: &str, level: u32) -> Option<EntityKind> {
        Some(self.entity(name)?.kind_at(level))
    }

    /// Resource used by `name` at level 1.
    #[must_use]
    pub fn uses(&self, name: &str) -> Option<ResourceKind> {
        self.uses_at(name, 1)
    }

    /// Resource used by `name` at `level`.
    #[must_use]
    pub fn uses_at(&self, name: &str, level: u32) -> Option<ResourceKind> {
        Some(self.entity(name)?.uses_at(level))
    }

    /// Legacy gear flag: `Some(true)` when gear-up data exists.
    ///
    /// Entities without gear-up data and unknown names alike answer `None`.
    #[must_use]
    pub fn gear(&self, name: &str) -> Option<bool> {
        self.gear_up_data(name).map(|_| true)
    }

    /// Gear-up data of `name`.
    #[must_use]
    pub fn gear_up_data(&self, name: &str) -> Option<&GearUpData> {
        self.entity(name)?.gear_up()
    }

    /// Gear-up cost of `name`.
    #[must_use]
    pub fn gear_up_cost(&self, name: &str) -> Option<u64> {
        self.gear_up_data(name).map(|data| data.cost)
    }

    /// Gear-up duration of `name` in seconds.
    #[must_use]
    pub fn gear_up_time(&self, name: &str) -> Option<u64> {
        self.gear_up_data(name).map(|data| data.time)
    }

    /// Number of instances of `name` that may be geared up.
    #[must_use]
    pub fn gear_up_count(&self, name: &str) -> Option<u32> {
        self.gear_up_data(name).map(|data| data.count)
    }

    /// Level `name` must reach before it can be geared up.
    #[must_use]
    pub fn gear_up_required_level(&self, name: &str) -> Option<u32> {
        self.gear_up_data(name).map(|data| data.required_level)
    }

    /// Whether `name` at `current_level` may be geared up.
    ///
    /// Entities without gear-up data answer `false`.
    #[must_use]
    pub fn can_gear_up_at_level(&self, name: &str, current_level: u32) -> bool {
        self.gear_up_data(name)
            .is_some_and(|data| data.is_unlocked_at(current_level))
    }

    /// Instances of `name` removable by merging at `townhall`.
    ///
    /// Only standard entities carry merge data.
    #[must_use]
    pub fn possible_removed_for_merge(&self, name: &str, townhall: u32) -> Option<u32> {
        self.entity(name)?
            .as_standard()?
            .removed_for_merge_at(townhall)
    }
}

#[cfg(test)]
mod tests {
    use crate::query::test_support::catalog;

    use super::*;

    #[test]
    fn test_max_level_and_count() {
        let catalog = catalog();
        assert_eq!(catalog.max_level("Cannon", 3), Some(4));
        assert_eq!(catalog.max_count("Cannon", 5), Some(3));
        assert_eq!(catalog.max_level("Cannon", 0), None);
        assert_eq!(catalog.max_level("Cannon", 6), None);
        assert_eq!(catalog.max_count("Nonexistent Building", 1), None);
    }

    #[test]
    fn test_locked_entity_reports_zero() {
        let catalog = catalog();
        assert_eq!(catalog.max_level("X-Bow", 3), Some(0));
        assert_eq!(catalog.max_count("X-Bow", 3), Some(0));
    }

    #[test]
    fn test_kind_and_uses() {
        let catalog = catalog();
        assert_eq!(catalog.kind("Cannon"), Some(EntityKind::Defense));
        assert_eq!(catalog.kind("Barbarian"), Some(EntityKind::Troop));
        assert_eq!(catalog.uses("Barbarian"), Some(ResourceKind::Elixir));
        assert_eq!(catalog.kind("Nonexistent Entity"), None);
        assert_eq!(catalog.uses("Nonexistent Entity"), None);
    }

    #[test]
    fn test_builders_hut_switches_after_first_upgrade() {
        let catalog = catalog();
        assert!(!catalog.is_upgraded("Builder's Hut", 1));
        assert!(catalog.is_upgraded("Builder's Hut", 2));
        assert_eq!(catalog.kind("Builder's Hut"), Some(EntityKind::Resource));
        assert_eq!(catalog.kind_at("Builder's Hut", 2), Some(EntityKind::Defense));
        assert_eq!(catalog.uses("Builder's Hut"), Some(ResourceKind::Gems));
        assert_eq!(catalog.uses_at("Builder's Hut", 3), Some(ResourceKind::Gold));
    }

    #[test]
    fn test_other_entities_never_upgraded() {
        let catalog = catalog();
        for level in [1, 2, 10] {
            assert!(!catalog.is_upgraded("Cannon", level));
            assert!(!catalog.is_upgraded("Crafting Station", level));
            assert!(!catalog.is_upgraded("Nonexistent", level));
        }
        assert_eq!(catalog.kind_at("Cannon", 2), Some(EntityKind::Defense));
    }

    #[test]
    fn test_gear_up_projections_match_data() {
        let catalog = catalog();
        let data = *catalog.gear_up_data("Cannon").unwrap();
        assert_eq!(catalog.gear_up_cost("Cannon"), Some(data.cost));
        assert_eq!(catalog.gear_up_time("Cannon"), Some(data.time));
        assert_eq!(catalog.gear_up_count("Cannon"), Some(data.count));
        assert_eq!(
            catalog.gear_up_required_level("Cannon"),
            Some(data.required_level)
        );
    }

    #[test]
    fn test_gear_up_absent() {
        let catalog = catalog();
        assert!(catalog.gear_up_data("Barbarian").is_none());
        assert_eq!(catalog.gear_up_cost("X-Bow"), None);
        assert_eq!(catalog.gear_up_required_level("Nonexistent"), None);
    }

    #[test]
    fn test_can_gear_up_at_level() {
        let catalog = catalog();
        assert!(catalog.can_gear_up_at_level("Cannon", 5));
        assert!(catalog.can_gear_up_at_level("Cannon", 6));
        assert!(!catalog.can_gear_up_at_level("Cannon", 4));
        assert!(!catalog.can_gear_up_at_level("X-Bow", 10));
        assert!(!catalog.can_gear_up_at_level("Barbarian", 10));
        assert!(!catalog.can_gear_up_at_level("Nonexistent", 10));
    }

    #[test]
    fn test_legacy_gear_flag() {
        let catalog = catalog();
        assert_eq!(catalog.gear("Cannon"), Some(true));
        assert_eq!(catalog.gear("X-Bow"), None);
        assert_eq!(catalog.gear("Barbarian"), None);
        assert_eq!(catalog.gear("Nonexistent"), None);
    }

    #[test]
    fn test_possible_removed_for_merge() {
        let catalog = catalog();
        assert_eq!(catalog.possible_removed_for_merge("Cannon", 5), Some(1));
        assert_eq!(catalog.possible_removed_for_merge("Cannon", 6), None);
        assert_eq!(catalog.possible_removed_for_merge("X-Bow", 5), None);
        assert_eq!(catalog.possible_removed_for_merge("Builder's Hut", 1), None);
    }
}
