//! The entity record union and its classification from raw data.

use serde::{Deserialize, Deserializer, Serialize};

use super::builders_hut_data::{BuildersHutEntity, UpgradeBehavior, UPGRADED_FROM_LEVEL};
use super::crafting_data::{CraftingMode, CraftingStation};
use super::kinds::{EntityKind, LevelDependent, ResourceKind};
use super::one_based;
use super::ordered_map;
use super::standard_data::{GearUpData, StandardEntity};
use crate::error::DataError;

/// One entity of the dataset, in exactly one of three shapes.
///
/// The variant is decided by which fields the raw record carries:
/// `upgradeBehavior` makes a Builder's Hut, `modes` makes a Crafting
/// Station, and anything else is a standard entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntityRecord {
    /// Ordinary building, trap, troop, spell, hero or pet.
    Standard(StandardEntity),
    /// The Builder's Hut with its two-phase economy.
    BuildersHut(BuildersHutEntity),
    /// The multi-mode Crafting Station.
    CraftingStation(CraftingStation),
}

impl EntityRecord {
    /// Short variant label for logs and reports.
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Standard(_) => "standard",
            Self::BuildersHut(_) => "builders_hut",
            Self::CraftingStation(_) => "crafting_station",
        }
    }

    /// Whether the entity has switched to its upgraded classification.
    ///
    /// Only a Builder's Hut at level 2 or above is upgraded.
    #[must_use]
    pub const fn is_upgraded_at(&self, level: u32) -> bool {
        matches!(self, Self::BuildersHut(_)) && level >= UPGRADED_FROM_LEVEL
    }

    /// Entity classification at `level`.
    #[must_use]
    pub fn kind_at(&self, level: u32) -> EntityKind {
        match self {
            Self::Standard(entity) => entity.kind,
            Self::BuildersHut(hut) => hut.kind.resolve(self.is_upgraded_at(level)),
            Self::CraftingStation(station) => station.kind,
        }
    }

    /// Resource spent at `level`.
    #[must_use]
    pub fn uses_at(&self, level: u32) -> ResourceKind {
        match self {
            Self::Standard(entity) => entity.uses,
            Self::BuildersHut(hut) => hut.uses.resolve(self.is_upgraded_at(level)),
            Self::CraftingStation(station) => station.uses,
        }
    }

    /// Maximum level per townhall (index 0 = townhall 1).
    #[must_use]
    pub fn max_level_by_townhall(&self) -> &[u32] {
        match self {
            Self::Standard(entity) => &entity.max_level_by_townhall,
            Self::BuildersHut(hut) => &hut.max_level_by_townhall,
            Self::CraftingStation(station) => &station.max_level_by_townhall,
        }
    }

    /// Maximum count per townhall (index 0 = townhall 1).
    #[must_use]
    pub fn max_count_by_townhall(&self) -> &[u32] {
        match self {
            Self::Standard(entity) => &entity.max_count_by_townhall,
            Self::BuildersHut(hut) => &hut.max_count_by_townhall,
            Self::CraftingStation(station) => &station.max_count_by_townhall,
        }
    }

    /// Maximum level at `townhall`.
    #[must_use]
    pub fn max_level_at(&self, townhall: u32) -> Option<u32> {
        one_based(self.max_level_by_townhall(), townhall)
    }

    /// Maximum count at `townhall`.
    #[must_use]
    pub fn max_count_at(&self, townhall: u32) -> Option<u32> {
        one_based(self.max_count_by_townhall(), townhall)
    }

    /// Gear-up data, if the entity supports it.
    #[must_use]
    pub const fn gear_up(&self) -> Option<&GearUpData> {
        match self {
            Self::Standard(entity) => entity.gear_up.as_ref(),
            Self::BuildersHut(hut) => hut.gear_up.as_ref(),
            Self::CraftingStation(station) => station.gear_up.as_ref(),
        }
    }

    /// The standard shape, if this is one.
    #[must_use]
    pub const fn as_standard(&self) -> Option<&StandardEntity> {
        match self {
            Self::Standard(entity) => Some(entity),
            _ => None,
        }
    }

    /// The Builder's Hut shape, if this is one.
    #[must_use]
    pub const fn as_builders_hut(&self) -> Option<&BuildersHutEntity> {
        match self {
            Self::BuildersHut(hut) => Some(hut),
            _ => None,
        }
    }

    /// The Crafting Station shape, if this is one.
    #[must_use]
    pub const fn as_crafting_station(&self) -> Option<&CraftingStation> {
        match self {
            Self::CraftingStation(station) => Some(station),
            _ => None,
        }
    }
}

/// Raw record as stored in the asset, before classification.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntity {
    #[serde(rename = "type")]
    kind: LevelDependent<EntityKind>,
    uses: LevelDependent<ResourceKind>,
    #[serde(default)]
    max_level_by_townhall: Vec<u32>,
    #[serde(default)]
    max_count_by_townhall: Vec<u32>,
    #[serde(default)]
    cost: Vec<u64>,
    #[serde(default)]
    time: Vec<u64>,
    #[serde(default)]
    possible_count_removed_for_merge: Option<Vec<u32>>,
    #[serde(default)]
    gear_up: Option<GearUpData>,
    #[serde(default)]
    upgrade_behavior: Option<UpgradeBehavior>,
    #[serde(default)]
    modes: Option<ModeTable>,
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct ModeTable(#[serde(with = "ordered_map")] Vec<(String, CraftingMode)>);

fn fixed_field<T: Copy>(
    value: LevelDependent<T>,
    field: &'static str,
) -> Result<T, DataError> {
    value
        .fixed()
        .ok_or(DataError::LevelDependentField { field })
}

impl TryFrom<RawEntity> for EntityRecord {
    type Error = DataError;

    fn try_from(raw: RawEntity) -> Result<Self, Self::Error> {
        let RawEntity {
            kind,
            uses,
            max_level_by_townhall,
            max_count_by_townhall,
            cost,
            time,
            possible_count_removed_for_merge,
            gear_up,
            upgrade_behavior,
            modes,
        } = raw;

        match (upgrade_behavior, modes) {
            (Some(_), Some(_)) => Err(DataError::ConflictingVariant),
            (Some(upgrade_behavior), None) => Ok(Self::BuildersHut(BuildersHutEntity {
                kind,
                uses,
                max_level_by_townhall,
                max_count_by_townhall,
                upgrade_behavior,
                gear_up,
            })),
            (None, Some(ModeTable(modes))) => Ok(Self::CraftingStation(CraftingStation {
                kind: fixed_field(kind, "type")?,
                uses: fixed_field(uses, "uses")?,
                max_level_by_townhall,
                max_count_by_townhall,
                cost,
                time,
                gear_up,
                modes,
            })),
            (None, None) => Ok(Self::Standard(StandardEntity {
                kind: fixed_field(kind, "type")?,
                uses: fixed_field(uses, "uses")?,
                max_level_by_townhall,
                max_count_by_townhall,
                cost,
                time,
                possible_count_removed_for_merge,
                gear_up,
            })),
        }
    }
}

impl<'de> Deserialize<'de> for EntityRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawEntity::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}
