//! Aggregates over levels and townhalls, plus dataset enumeration.

use super::Catalog;
use crate::data::{EntityKind, ResourceKind};

impl Catalog {
    /// Total cost to take `name` from nothing to its max level at `townhall`.
    ///
    /// `None` when the entity is locked (max level 0 or absent), when any
    /// level's cost is missing, or when the sum overflows. Builder's Hut
    /// level 1 is priced as the first hut.
    #[must_use]
    pub fn total_cost_to_max(&self, name: &str, townhall: u32) -> Option<u64> {
        self.sum_to_max(name, townhall, |level| self.cost(name, level))
    }

    /// Total upgrade time in seconds to max `name` at `townhall`.
    ///
    /// Same absence rules as [`Self::total_cost_to_max`].
    #[must_use]
    pub fn total_time_to_max(&self, name: &str, townhall: u32) -> Option<u64> {
        self.sum_to_max(name, townhall, |level| self.time(name, level))
    }

    fn sum_to_max(
        &self,
        name: &str,
        townhall: u32,
        per_level: impl Fn(u32) -> Option<u64>,
    ) -> Option<u64> {
        let max_level = self.max_level(name, townhall).filter(|&level| level > 0)?;
        (1..=max_level).try_fold(0u64, |total, level| total.checked_add(per_level(level)?))
    }

    /// Whether at least one `name` can be built at `townhall`.
    #[must_use]
    pub fn is_available_at_townhall(&self, name: &str, townhall: u32) -> bool {
        self.max_count(name, townhall).is_some_and(|count| count > 0)
    }

    /// First townhall at which `name` becomes available.
    ///
    /// Searches townhalls `1..=max_townhall` of the catalog configuration.
    #[must_use]
    pub fn unlock_townhall(&self, name: &str) -> Option<u32> {
        self.config()
            .townhalls()
            .find(|&townhall| self.is_available_at_townhall(name, townhall))
    }

    /// Names of entities whose level-1 classification is `kind`.
    #[must_use]
    pub fn entities_by_type(&self, kind: EntityKind) -> Vec<&str> {
        self.entity_names()
            .filter(|name| self.kind(name) == Some(kind))
            .collect()
    }

    /// Names of entities whose level-1 resource is `resource`.
    #[must_use]
    pub fn entities_by_resource(&self, resource: ResourceKind) -> Vec<&str> {
        self.entity_names()
            .filter(|name| self.uses(name) == Some(resource))
            .collect()
    }

    /// Names of entities available at `townhall`.
    #[must_use]
    pub fn entities_at_townhall(&self, townhall: u32) -> Vec<&str> {
        self.entity_names()
            .filter(|name| self.is_available_at_townhall(name, townhall))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::query::test_support::catalog;

    use super::*;

    #[test]
    fn test_total_cost_and_time_to_max() {
        let catalog = catalog();
        assert_eq!(catalog.max_level("Cannon", 3), Some(4));
        assert_eq!(catalog.total_cost_to_max("Cannon", 3), Some(21250));
        assert_eq!(catalog.total_time_to_max("Cannon", 3), Some(1355));
    }

    #[test]
    fn test_total_is_none_when_locked() {
        let catalog = catalog();
        assert_eq!(catalog.total_cost_to_max("X-Bow", 1), None);
        assert_eq!(catalog.total_time_to_max("X-Bow", 3), None);
        assert_eq!(catalog.total_cost_to_max("Cannon", 9), None);
        assert_eq!(catalog.total_cost_to_max("Nonexistent", 3), None);
    }

    #[test]
    fn test_total_has_no_partial_sums() {
        let catalog = catalog();
        assert_eq!(catalog.total_cost_to_max("X-Bow", 4), Some(2_500_000));
        // Level 3 has no cost entry.
        assert_eq!(catalog.total_cost_to_max("X-Bow", 5), None);
        assert_eq!(catalog.total_time_to_max("X-Bow", 5), None);
    }

    #[test]
    fn test_builders_hut_total_uses_first_instance() {
        let catalog = catalog();
        assert_eq!(catalog.total_cost_to_max("Builder's Hut", 1), Some(0));
        assert_eq!(catalog.total_cost_to_max("Builder's Hut", 4), Some(3_500_000));
        assert_eq!(catalog.total_time_to_max("Builder's Hut", 5), Some(604_800));
    }

    #[test]
    fn test_availability_matches_count() {
        let catalog = catalog();
        for name in ["Cannon", "X-Bow", "Builder's Hut", "Crafting Station", "Nope"] {
            for townhall in 0..=6 {
                let count = catalog.max_count(name, townhall);
                assert_eq!(
                    catalog.is_available_at_townhall(name, townhall),
                    count.is_some_and(|c| c > 0),
                    "{name} at TH{townhall}"
                );
            }
        }
    }

    #[test]
    fn test_unlock_townhall() {
        let catalog = catalog();
        assert_eq!(catalog.unlock_townhall("Cannon"), Some(1));
        assert_eq!(catalog.unlock_townhall("X-Bow"), Some(4));
        assert_eq!(catalog.unlock_townhall("Crafting Station"), Some(4));
        assert_eq!(catalog.unlock_townhall("Nonexistent"), None);
    }

    #[test]
    fn test_unlock_townhall_respects_configured_range() {
        use crate::config::CatalogConfig;
        let catalog = catalog();
        let narrow = Catalog::new(catalog.dataset().clone(), CatalogConfig { max_townhall: 3 })
            .unwrap();
        assert_eq!(narrow.unlock_townhall("Cannon"), Some(1));
        assert_eq!(narrow.unlock_townhall("X-Bow"), None);
    }

    #[test]
    fn test_entities_by_type_keeps_order() {
        let catalog = catalog();
        assert_eq!(
            catalog.entities_by_type(EntityKind::Defense),
            ["Cannon", "X-Bow", "Crafting Station"]
        );
        assert_eq!(catalog.entities_by_type(EntityKind::Resource), ["Builder's Hut"]);
        assert!(catalog.entities_by_type(EntityKind::Pet).is_empty());
    }

    #[test]
    fn test_entities_by_resource() {
        let catalog = catalog();
        assert_eq!(
            catalog.entities_by_resource(ResourceKind::Gold),
            ["Cannon", "X-Bow", "Crafting Station"]
        );
        assert_eq!(catalog.entities_by_resource(ResourceKind::Gems), ["Builder's Hut"]);
        assert_eq!(catalog.entities_by_resource(ResourceKind::Elixir), ["Barbarian"]);
    }

    #[test]
    fn test_entities_at_townhall() {
        let catalog = catalog();
        assert_eq!(
            catalog.entities_at_townhall(1),
            ["Cannon", "Barbarian", "Builder's Hut"]
        );
        assert_eq!(catalog.entities_at_townhall(4).len(), 5);
        assert!(catalog.entities_at_townhall(0).is_empty());
    }
}
