//! The immutable, name-indexed set of entity records.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::data::{ordered_map, CraftingStation, EntityRecord};
use crate::error::{DataError, Result};

/// All entity records, keyed by name, in source order.
///
/// Built once and never modified. Lookups go through a name index while
/// enumeration follows the order in which records were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    entries: Vec<(String, EntityRecord)>,
    index: HashMap<String, usize>,
    crafting_station: Option<usize>,
}

impl Dataset {
    /// Build a dataset from `(name, record)` pairs, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error if a name repeats or if more than one record is a
    /// crafting station.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, EntityRecord)>,
    {
        let entries: Vec<(String, EntityRecord)> = entries.into_iter().collect();
        let mut index = HashMap::with_capacity(entries.len());
        let mut crafting_station: Option<usize> = None;

        for (position, (name, record)) in entries.iter().enumerate() {
            if index.insert(name.clone(), position).is_some() {
                return Err(DataError::DuplicateEntity(name.clone()));
            }
            if record.as_crafting_station().is_some() {
                if let Some(first) = crafting_station {
                    return Err(DataError::MultipleCraftingStations {
                        first: entries[first].0.clone(),
                        second: name.clone(),
                    });
                }
                crafting_station = Some(position);
            }
        }

        Ok(Self {
            entries,
            index,
            crafting_station,
        })
    }

    /// Look up a record by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EntityRecord> {
        self.index.get(name).map(|&position| &self.entries[position].1)
    }

    /// Check whether a record with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Entity names in source order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, record)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntityRecord)> {
        self.entries
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    /// The crafting station record, found by shape rather than by name.
    #[must_use]
    pub fn crafting_station(&self) -> Option<(&str, &CraftingStation)> {
        let (name, record) = &self.entries[self.crafting_station?];
        record
            .as_crafting_station()
            .map(|station| (name.as_str(), station))
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dataset has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Dataset {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ordered_map::serialize(&self.entries, serializer)
    }
}

impl<'de> Deserialize<'de> for Dataset {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries: Vec<(String, EntityRecord)> = ordered_map::deserialize(deserializer)?;
        Self::from_entries(entries).map_err(serde::de::Error::custom)
    }
}
