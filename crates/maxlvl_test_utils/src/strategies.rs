//! Proptest strategies for entity records and datasets.
//!
//! These strategies generate random but reproducible records for
//! property-based testing of the query invariants.

use maxlvl_core::prelude::*;
use proptest::prelude::*;

use crate::fixtures::FIXTURE_TOWNHALLS;

/// Generate an entity kind.
pub fn arb_entity_kind() -> impl Strategy<Value = EntityKind> {
    proptest::sample::select(EntityKind::ALL.to_vec())
}

/// Generate a resource kind.
pub fn arb_resource_kind() -> impl Strategy<Value = ResourceKind> {
    proptest::sample::select(ResourceKind::ALL.to_vec())
}

/// Generate a per-townhall table, sometimes shorter than the tier count.
///
/// Values start at zero for early townhalls and never decrease.
pub fn arb_townhall_table(max_value: u32) -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::vec(0..=2u32, 0..=FIXTURE_TOWNHALLS as usize).prop_map(move |steps| {
        steps
            .into_iter()
            .scan(0u32, |value, step| {
                *value = (*value + step).min(max_value);
                Some(*value)
            })
            .collect()
    })
}

/// Generate a per-level cost or time table.
pub fn arb_level_table(max_levels: usize) -> impl Strategy<Value = Vec<u64>> {
    proptest::collection::vec(0..10_000_000u64, 0..=max_levels)
}

/// Generate gear-up data.
pub fn arb_gear_up() -> impl Strategy<Value = GearUpData> {
    (0..5_000_000u64, 0..1_000_000u64, 1..4u32, 1..20u32).prop_map(
        |(cost, time, count, required_level)| GearUpData {
            cost,
            time,
            count,
            required_level,
        },
    )
}

/// Generate a standard entity record.
pub fn arb_standard_entity() -> impl Strategy<Value = EntityRecord> {
    (
        arb_entity_kind(),
        arb_resource_kind(),
        arb_townhall_table(30),
        arb_townhall_table(8),
        arb_level_table(30),
        arb_level_table(30),
        proptest::option::of(arb_gear_up()),
    )
        .prop_map(
            |(kind, uses, max_levels, max_counts, cost, time, gear_up)| {
                EntityRecord::Standard(StandardEntity {
                    kind,
                    uses,
                    max_level_by_townhall: max_levels,
                    max_count_by_townhall: max_counts,
                    cost,
                    time,
                    possible_count_removed_for_merge: None,
                    gear_up,
                })
            },
        )
}

/// Generate a Builder's Hut record.
pub fn arb_builders_hut() -> impl Strategy<Value = EntityRecord> {
    (
        arb_townhall_table(6),
        arb_townhall_table(5),
        proptest::collection::vec(0..5_000u64, 0..=5),
        arb_level_table(6),
        arb_level_table(6),
        1..=FIXTURE_TOWNHALLS,
    )
        .prop_map(
            |(max_levels, max_counts, base_costs, upgraded_costs, upgraded_times, unlocks_at_th)| {
                EntityRecord::BuildersHut(BuildersHutEntity {
                    kind: LevelDependent::Switch {
                        default: EntityKind::Resource,
                        upgraded: EntityKind::Defense,
                    },
                    uses: LevelDependent::Switch {
                        default: ResourceKind::Gems,
                        upgraded: ResourceKind::Gold,
                    },
                    max_level_by_townhall: max_levels,
                    max_count_by_townhall: max_counts,
                    upgrade_behavior: UpgradeBehavior {
                        base_costs,
                        upgraded_costs,
                        upgraded_times,
                        unlocks_at_th,
                    },
                    gear_up: None,
                })
            },
        )
}

/// Generate a crafting module named `name`.
pub fn arb_crafting_module(name: String) -> impl Strategy<Value = CraftingModule> {
    (arb_resource_kind(), arb_level_table(10), arb_level_table(10)).prop_map(
        move |(uses, cost, time)| CraftingModule {
            name: name.clone(),
            uses,
            cost,
            time,
        },
    )
}

/// Generate a crafting mode with up to three modules `module_0`, `module_1`, ...
pub fn arb_crafting_mode() -> impl Strategy<Value = CraftingMode> {
    let modules = (0..=3usize).prop_flat_map(|count| {
        (0..count)
            .map(|i| arb_crafting_module(format!("module_{i}")))
            .collect::<Vec<_>>()
    });
    (
        arb_resource_kind(),
        any::<bool>(),
        arb_townhall_table(30),
        arb_townhall_table(1),
        modules,
    )
        .prop_map(
            |(uses, gear_up, max_level_by_townhall, max_count_by_townhall, modules)| CraftingMode {
                uses,
                gear_up,
                max_level_by_townhall,
                max_count_by_townhall,
                modules,
            },
        )
}

/// Generate a Crafting Station record with up to four modes `mode_0`, `mode_1`, ...
pub fn arb_crafting_station() -> impl Strategy<Value = EntityRecord> {
    (
        arb_entity_kind(),
        arb_resource_kind(),
        arb_townhall_table(3),
        arb_townhall_table(1),
        arb_level_table(3),
        arb_level_table(3),
        proptest::collection::vec(arb_crafting_mode(), 0..=4),
    )
        .prop_map(
            |(kind, uses, max_levels, max_counts, cost, time, modes)| {
                EntityRecord::CraftingStation(CraftingStation {
                    kind,
                    uses,
                    max_level_by_townhall: max_levels,
                    max_count_by_townhall: max_counts,
                    cost,
                    time,
                    gear_up: None,
                    modes: modes
                        .into_iter()
                        .enumerate()
                        .map(|(i, mode)| (format!("mode_{i}"), mode))
                        .collect(),
                })
            },
        )
}

/// Generate a dataset of standard entities plus at most one hut and at most
/// one crafting station.
///
/// Names are `entity_0`, `entity_1`, ...; the hut (if any) is `hut` and the
/// station (if any) is `station`.
pub fn arb_dataset(max_entities: usize) -> impl Strategy<Value = Dataset> {
    (
        proptest::collection::vec(arb_standard_entity(), 0..max_entities),
        proptest::option::of(arb_builders_hut()),
        proptest::option::of(arb_crafting_station()),
    )
        .prop_map(|(standard, hut, station)| {
            let mut entries: Vec<(String, EntityRecord)> = standard
                .into_iter()
                .enumerate()
                .map(|(i, record)| (format!("entity_{i}"), record))
                .collect();
            if let Some(hut) = hut {
                entries.push(("hut".to_string(), hut));
            }
            if let Some(station) = station {
                entries.push(("station".to_string(), station));
            }
            Dataset::from_entries(entries).expect("generated names are unique")
        })
}
