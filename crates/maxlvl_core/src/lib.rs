//! # Max Levels Core
//!
//! Read-only query engine over the upgradeable-entity dataset: buildings,
//! traps, troops, spells, heroes, pets, the Builder's Hut and the Crafting
//! Station.
//!
//! This crate contains **only** pure logic:
//! - No IO (loading lives in `maxlvl_tools`)
//! - No global state (the dataset is owned by a [`query::Catalog`])
//! - No fallible queries (absence is `None`, never an error)
//!
//! ## Crate Structure
//!
//! - [`data`] - Entity record model and its serde representation
//! - [`dataset`] - Immutable, ordered, name-indexed record set
//! - [`query`] - The [`Catalog`](query::Catalog) and all derived queries
//! - [`progression`] - Laboratory levels and build-time formatting
//! - [`config`] - Catalog configuration
//! - [`error`] - Dataset construction errors

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod data;
pub mod dataset;
pub mod error;
pub mod progression;
pub mod query;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{CatalogConfig, DEFAULT_MAX_TOWNHALL, MIN_TOWNHALL};
    pub use crate::data::{
        BuildersHutEntity, CraftingMode, CraftingModule, CraftingStation, EntityKind,
        EntityRecord, GearUpData, LevelDependent, ResourceKind, StandardEntity, UpgradeBehavior,
    };
    pub use crate::dataset::Dataset;
    pub use crate::error::{DataError, Result};
    pub use crate::progression::{format_build_time, lab_level_for_townhall};
    pub use crate::query::Catalog;
}
