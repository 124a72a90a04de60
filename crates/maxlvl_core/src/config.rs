//! Catalog configuration.

use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

/// Lowest townhall level.
pub const MIN_TOWNHALL: u32 = 1;

/// Highest townhall tier covered by the bundled data.
pub const DEFAULT_MAX_TOWNHALL: u32 = 17;

/// Tunables for a [`Catalog`](crate::query::Catalog).
///
/// Missing fields take their defaults, so a partial file is valid.
///
/// # Example RON
///
/// ```ron
/// CatalogConfig(
///     max_townhall: 17,
/// )
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Highest townhall searched by unlock and availability scans.
    pub max_townhall: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_townhall: DEFAULT_MAX_TOWNHALL,
        }
    }
}

impl CatalogConfig {
    /// Townhall levels covered by this configuration.
    #[must_use]
    pub fn townhalls(&self) -> std::ops::RangeInclusive<u32> {
        MIN_TOWNHALL..=self.max_townhall
    }

    /// Check that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_townhall` is below [`MIN_TOWNHALL`].
    pub fn validate(&self) -> Result<()> {
        if self.max_townhall < MIN_TOWNHALL {
            return Err(DataError::InvalidConfig(format!(
                "max_townhall must be at least {MIN_TOWNHALL}, got {}",
                self.max_townhall
            )));
        }
        Ok(())
    }
}
