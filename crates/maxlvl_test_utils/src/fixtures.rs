//! Test fixtures and helpers.
//!
//! Synthetic entity records and datasets covering every record shape,
//! for consistent testing across crates.

use maxlvl_core::prelude::*;

/// Number of townhall tiers covered by the fixture data.
pub const FIXTURE_TOWNHALLS: u32 = 17;

/// Builder for standard entity records.
#[derive(Debug, Clone)]
pub struct StandardBuilder {
    entity: StandardEntity,
}

impl StandardBuilder {
    /// Start a record of the given kind and resource with empty tables.
    #[must_use]
    pub fn new(kind: EntityKind, uses: ResourceKind) -> Self {
        Self {
            entity: StandardEntity {
                kind,
                uses,
                max_level_by_townhall: Vec::new(),
                max_count_by_townhall: Vec::new(),
                cost: Vec::new(),
                time: Vec::new(),
                possible_count_removed_for_merge: None,
                gear_up: None,
            },
        }
    }

    /// Per-townhall max levels.
    #[must_use]
    pub fn max_levels(mut self, levels: &[u32]) -> Self {
        self.entity.max_level_by_townhall = levels.to_vec();
        self
    }

    /// Per-townhall max counts.
    #[must_use]
    pub fn max_counts(mut self, counts: &[u32]) -> Self {
        self.entity.max_count_by_townhall = counts.to_vec();
        self
    }

    /// Per-level costs.
    #[must_use]
    pub fn costs(mut self, costs: &[u64]) -> Self {
        self.entity.cost = costs.to_vec();
        self
    }

    /// Per-level times.
    #[must_use]
    pub fn times(mut self, times: &[u64]) -> Self {
        self.entity.time = times.to_vec();
        self
    }

    /// Per-townhall merge removals.
    #[must_use]
    pub fn removed_for_merge(mut self, counts: &[u32]) -> Self {
        self.entity.possible_count_removed_for_merge = Some(counts.to_vec());
        self
    }

    /// Gear-up data.
    #[must_use]
    pub fn gear_up(mut self, cost: u64, time: u64, count: u32, required_level: u32) -> Self {
        self.entity.gear_up = Some(GearUpData {
            cost,
            time,
            count,
            required_level,
        });
        self
    }

    /// Finish the record.
    #[must_use]
    pub fn build(self) -> EntityRecord {
        EntityRecord::Standard(self.entity)
    }
}

/// Cannon: a gear-up capable gold defense available from townhall 1.
#[must_use]
pub fn cannon() -> EntityRecord {
    StandardBuilder::new(EntityKind::Defense, ResourceKind::Gold)
        .max_levels(&[2, 3, 4, 5, 6, 7, 8, 10, 11, 13, 15, 17, 19, 20, 21, 21, 22])
        .max_counts(&[2, 2, 2, 2, 3, 3, 5, 5, 5, 6, 7, 7, 7, 7, 7, 7, 7])
        .costs(&[
            250, 1_000, 4_000, 16_000, 30_000, 60_000, 100_000, 200_000, 400_000, 800_000,
            1_200_000, 1_600_000, 2_000_000, 2_600_000, 3_200_000, 4_800_000, 6_400_000,
            8_000_000, 10_000_000, 12_000_000, 14_000_000, 16_000_000,
        ])
        .times(&[
            5, 30, 120, 1_200, 3_600, 7_200, 14_400, 28_800, 43_200, 86_400, 129_600,
            172_800, 259_200, 345_600, 432_000, 518_400, 604_800, 691_200, 777_600, 864_000,
            950_400, 1_036_800,
        ])
        .removed_for_merge(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2])
        .gear_up(1_000_000, 86_400, 2, 7)
        .build()
}

/// Wizard Tower: a defense without gear-up data.
#[must_use]
pub fn wizard_tower() -> EntityRecord {
    StandardBuilder::new(EntityKind::Defense, ResourceKind::Gold)
        .max_levels(&[0, 0, 0, 0, 2, 3, 4, 6, 7, 9, 10, 11, 13, 14, 15, 16, 17])
        .max_counts(&[0, 0, 0, 0, 1, 2, 2, 3, 4, 4, 5, 5, 5, 5, 5, 5, 5])
        .costs(&[
            120_000, 220_000, 320_000, 620_000, 1_020_000, 1_620_000, 2_220_000, 3_020_000,
            4_020_000, 5_020_000, 6_020_000, 7_020_000, 8_020_000, 9_020_000, 10_020_000,
            11_020_000, 12_020_000,
        ])
        .times(&[
            3_600, 7_200, 14_400, 28_800, 43_200, 86_400, 129_600, 172_800, 259_200, 345_600,
            432_000, 518_400, 604_800, 691_200, 777_600, 864_000, 950_400,
        ])
        .build()
}

/// X-Bow: a late defense, locked until townhall 9.
#[must_use]
pub fn x_bow() -> EntityRecord {
    StandardBuilder::new(EntityKind::Defense, ResourceKind::Gold)
        .max_levels(&[0, 0, 0, 0, 0, 0, 0, 0, 3, 4, 5, 6, 8, 9, 10, 11, 12])
        .max_counts(&[0, 0, 0, 0, 0, 0, 0, 0, 2, 3, 4, 4, 4, 4, 4, 4, 4])
        .costs(&[
            1_000_000, 1_500_000, 2_000_000, 3_000_000, 4_000_000, 5_000_000, 6_000_000,
            7_000_000, 8_000_000, 9_000_000, 10_000_000, 11_000_000,
        ])
        .times(&[
            43_200, 86_400, 172_800, 259_200, 345_600, 432_000, 518_400, 604_800, 691_200,
            777_600, 864_000, 950_400,
        ])
        .gear_up(2_000_000, 172_800, 1, 4)
        .build()
}

/// Barbarian: a laboratory troop.
#[must_use]
pub fn barbarian() -> EntityRecord {
    StandardBuilder::new(EntityKind::Troop, ResourceKind::Elixir)
        .max_levels(&[1, 1, 2, 2, 3, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 12, 12])
        .max_counts(&[1; 17])
        .costs(&[
            0, 20_000, 60_000, 200_000, 650_000, 1_400_000, 2_500_000, 4_000_000, 6_000_000,
            9_000_000, 12_000_000, 15_000_000,
        ])
        .times(&[
            0, 3_600, 18_000, 43_200, 86_400, 129_600, 172_800, 259_200, 345_600, 432_000,
            518_400, 604_800,
        ])
        .build()
}

/// Barbarian King: a dark-elixir hero whose cost table stops short.
#[must_use]
pub fn barbarian_king() -> EntityRecord {
    StandardBuilder::new(EntityKind::Hero, ResourceKind::DarkElixir)
        .max_levels(&[0, 0, 0, 0, 0, 0, 5, 10, 30, 40, 50, 65, 75, 80, 90, 95, 100])
        .max_counts(&[0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1])
        .costs(&[0, 6_000, 7_000, 8_000, 10_000])
        .times(&[0, 14_400, 21_600, 28_800, 36_000])
        .build()
}

/// Gold Mine: an elixir-funded resource building.
#[must_use]
pub fn gold_mine() -> EntityRecord {
    StandardBuilder::new(EntityKind::Resource, ResourceKind::Elixir)
        .max_levels(&[2, 4, 6, 8, 10, 10, 11, 12, 12, 13, 14, 15, 15, 16, 16, 16, 16])
        .max_counts(&[1, 2, 3, 4, 5, 6, 6, 6, 6, 7, 7, 7, 7, 7, 7, 7, 7])
        .build()
}

/// Builder's Hut with its gem purchases and gold upgrades.
#[must_use]
pub fn builders_hut() -> EntityRecord {
    EntityRecord::BuildersHut(BuildersHutEntity {
        kind: LevelDependent::Switch {
            default: EntityKind::Resource,
            upgraded: EntityKind::Defense,
        },
        uses: LevelDependent::Switch {
            default: ResourceKind::Gems,
            upgraded: ResourceKind::Gold,
        },
        max_level_by_townhall: vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 4, 5, 6],
        max_count_by_townhall: vec![5; 17],
        upgrade_behavior: UpgradeBehavior {
            base_costs: vec![0, 250, 500, 1_000, 2_000],
            upgraded_costs: vec![3_500_000, 4_000_000, 4_500_000, 5_000_000, 6_000_000],
            upgraded_times: vec![259_200, 302_400, 345_600, 388_800, 432_000],
            unlocks_at_th: 14,
        },
        gear_up: None,
    })
}

fn module(name: &str, cost: &[u64], time: &[u64]) -> CraftingModule {
    CraftingModule {
        name: name.to_string(),
        uses: ResourceKind::Gold,
        cost: cost.to_vec(),
        time: time.to_vec(),
    }
}

fn mode(gear_up: bool, max_levels: &[u32], modules: Vec<CraftingModule>) -> CraftingMode {
    let max_count_by_townhall = max_levels.iter().map(|&level| u32::from(level > 0)).collect();
    CraftingMode {
        uses: ResourceKind::Gold,
        gear_up,
        max_level_by_townhall: max_levels.to_vec(),
        max_count_by_townhall,
        modules,
    }
}

/// Crafting Station with three modes.
#[must_use]
pub fn crafting_station() -> EntityRecord {
    let caps = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 15, 30];
    let costs = [500_000, 750_000, 1_000_000, 1_250_000, 1_500_000];
    let times = [3_600, 7_200, 14_400, 28_800, 43_200];

    EntityRecord::CraftingStation(CraftingStation {
        kind: EntityKind::Defense,
        uses: ResourceKind::Gold,
        max_level_by_townhall: caps.iter().map(|&cap| u32::from(cap > 0)).collect(),
        max_count_by_townhall: caps.iter().map(|&cap| u32::from(cap > 0)).collect(),
        cost: vec![8_000_000],
        time: vec![432_000],
        gear_up: None,
        modes: vec![
            (
                "Hook Tower".to_string(),
                mode(
                    false,
                    &caps,
                    vec![
                        module("Hitpoints", &costs, &times),
                        module("Attack Cooldown", &costs, &times),
                        module("Stun Time", &costs, &times),
                    ],
                ),
            ),
            (
                "Flame Spinner".to_string(),
                mode(
                    false,
                    &caps,
                    vec![
                        module("Hitpoints", &costs, &times),
                        module("Damage", &costs, &times),
                        module("Range", &costs, &times),
                    ],
                ),
            ),
            (
                "Crusher Mortar".to_string(),
                mode(
                    true,
                    &caps,
                    vec![
                        module("Hitpoints", &costs, &times),
                        module("Damage", &costs, &times),
                        module("Splash", &costs[..3], &times[..3]),
                    ],
                ),
            ),
        ],
    })
}

/// Every fixture record, in a stable order.
#[must_use]
pub fn fixture_entries() -> Vec<(String, EntityRecord)> {
    vec![
        ("Cannon".to_string(), cannon()),
        ("Wizard Tower".to_string(), wizard_tower()),
        ("X-Bow".to_string(), x_bow()),
        ("Gold Mine".to_string(), gold_mine()),
        ("Builder's Hut".to_string(), builders_hut()),
        ("Crafting Station".to_string(), crafting_station()),
        ("Barbarian".to_string(), barbarian()),
        ("Barbarian King".to_string(), barbarian_king()),
    ]
}

/// Dataset holding every fixture record.
#[must_use]
pub fn fixture_dataset() -> Dataset {
    Dataset::from_entries(fixture_entries()).expect("fixture names are unique")
}

/// Catalog over [`fixture_dataset`] with the default configuration.
#[must_use]
pub fn fixture_catalog() -> Catalog {
    Catalog::with_default_config(fixture_dataset())
}
