//! Error types for dataset construction.
//!
//! Queries never fail; these errors only arise while records are classified
//! and assembled into a [`Dataset`](crate::dataset::Dataset).

use thiserror::Error;

/// Result type alias using [`DataError`].
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors raised while building the immutable dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// A record carries both Builder's Hut and Crafting Station data.
    #[error("Record has both 'upgradeBehavior' and 'modes'; a record must be exactly one variant")]
    ConflictingVariant,

    /// A `{default, upgraded}` pair on a record that cannot be upgraded.
    #[error("Field '{field}' is level-dependent but the record has no 'upgradeBehavior'")]
    LevelDependentField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// Two records share one name.
    #[error("Duplicate entity name: {0}")]
    DuplicateEntity(String),

    /// More than one record carries crafting modes.
    #[error("Multiple crafting stations: '{first}' and '{second}'")]
    MultipleCraftingStations {
        /// Station seen first.
        first: String,
        /// Station seen second.
        second: String,
    },

    /// Catalog configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
