//! Data structures for entity records.
//!
//! This module contains pure data structures that describe upgradeable
//! entities. All structs are designed to be deserialized from the JSON data
//! asset, whose field names are camelCase.
//!
//! **Note:** This module contains no IO - it only defines data types.
//! File loading is handled by `maxlvl_tools`.

mod builders_hut_data;
mod crafting_data;
mod entity_data;
mod kinds;
pub mod ordered_map;
mod standard_data;

pub use builders_hut_data::{BuildersHutEntity, UpgradeBehavior, UPGRADED_FROM_LEVEL};
pub use crafting_data::{CraftingMode, CraftingModule, CraftingStation};
pub use entity_data::EntityRecord;
pub use kinds::{EntityKind, LevelDependent, ParseKindError, ResourceKind};
pub use standard_data::{GearUpData, StandardEntity};

/// Look up a 1-based position in a 0-based array.
///
/// Position 0 and positions past the end are not found.
pub(crate) fn one_based<T: Copy>(values: &[T], position: u32) -> Option<T> {
    let index = usize::try_from(position.checked_sub(1)?).ok()?;
    values.get(index).copied()
}
