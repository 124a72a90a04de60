//! Data validation utilities.
//!
//! Queries tolerate ragged tables by returning `None`, so a dataset can load
//! cleanly and still answer oddly. These checks report the inconsistencies
//! that are almost always data-entry mistakes.

use std::path::Path;

use maxlvl_core::prelude::*;

use crate::loader::{load_dataset_from_file, DataLoadError, DataLoadResult};

/// Check a dataset for internal consistency.
///
/// Returns one human-readable finding per problem; an empty list means the
/// dataset is consistent. Each finding is also logged at `warn` level.
#[must_use]
pub fn validate_dataset(dataset: &Dataset, config: &CatalogConfig) -> Vec<String> {
    let mut errors = Vec::new();

    for (name, record) in dataset.iter() {
        check_townhall_tables(
            name,
            record.max_level_by_townhall(),
            record.max_count_by_townhall(),
            config,
            &mut errors,
        );

        match record {
            EntityRecord::Standard(entity) => {
                check_level_tables(name, &entity.cost, &entity.time, &mut errors);
                check_max_level_priced(
                    name,
                    &entity.max_level_by_townhall,
                    entity.cost.len(),
                    &mut errors,
                );
            }
            EntityRecord::BuildersHut(hut) => {
                let behavior = &hut.upgrade_behavior;
                if behavior.upgraded_costs.len() != behavior.upgraded_times.len() {
                    errors.push(format!(
                        "{name}: upgradedCosts has {} entries but upgradedTimes has {}",
                        behavior.upgraded_costs.len(),
                        behavior.upgraded_times.len()
                    ));
                }
                // Level 1 is bought, so the priced levels are one past the upgrades.
                check_max_level_priced(
                    name,
                    &hut.max_level_by_townhall,
                    behavior.upgraded_costs.len() + 1,
                    &mut errors,
                );
            }
            EntityRecord::CraftingStation(station) => {
                check_level_tables(name, &station.cost, &station.time, &mut errors);
                check_max_level_priced(
                    name,
                    &station.max_level_by_townhall,
                    station.cost.len(),
                    &mut errors,
                );
                for (mode_name, mode) in &station.modes {
                    let label = format!("{name} / {mode_name}");
                    check_townhall_tables(
                        &label,
                        &mode.max_level_by_townhall,
                        &mode.max_count_by_townhall,
                        config,
                        &mut errors,
                    );
                    for module in &mode.modules {
                        check_level_tables(
                            &format!("{label} / {}", module.name),
                            &module.cost,
                            &module.time,
                            &mut errors,
                        );
                    }
                }
            }
        }
    }

    for error in &errors {
        tracing::warn!("{error}");
    }
    errors
}

fn check_townhall_tables(
    name: &str,
    max_levels: &[u32],
    max_counts: &[u32],
    config: &CatalogConfig,
    errors: &mut Vec<String>,
) {
    let limit = config.max_townhall as usize;
    for (field, table) in [("maxLevelByTownhall", max_levels), ("maxCountByTownhall", max_counts)] {
        if table.len() > limit {
            errors.push(format!(
                "{name}: {field} has {} entries, more than the {limit} configured townhalls",
                table.len()
            ));
        }
    }
}

fn check_level_tables(name: &str, cost: &[u64], time: &[u64], errors: &mut Vec<String>) {
    if cost.len() != time.len() {
        errors.push(format!(
            "{name}: cost has {} entries but time has {}",
            cost.len(),
            time.len()
        ));
    }
}

fn check_max_level_priced(name: &str, max_levels: &[u32], priced: usize, errors: &mut Vec<String>) {
    let Some(&highest) = max_levels.iter().max() else {
        return;
    };
    if highest as usize > priced {
        errors.push(format!(
            "{name}: max level {highest} exceeds the {priced} priced levels"
        ));
    }
}

/// Load a data file and run [`validate_dataset`] on it.
///
/// Returns the number of entities checked.
///
/// # Errors
///
/// Returns a load error, or [`DataLoadError::Validation`] with every finding.
pub fn validate_data_file(path: &Path, config: &CatalogConfig) -> DataLoadResult<usize> {
    let dataset = load_dataset_from_file(path)?;
    let errors = validate_dataset(&dataset, config);
    if errors.is_empty() {
        Ok(dataset.len())
    } else {
        Err(DataLoadError::Validation { errors })
    }
}
