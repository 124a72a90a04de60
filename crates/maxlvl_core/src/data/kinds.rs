//! Entity classification and resource identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of an upgradeable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Defensive building.
    Defense,
    /// Resource collector or storage.
    Resource,
    /// Wall segments.
    Walls,
    /// Hidden trap.
    Trap,
    /// Laboratory troop.
    Troop,
    /// Laboratory spell.
    Spell,
    /// Siege machine.
    Siege,
    /// Hero.
    Hero,
    /// Hero pet.
    Pet,
}

impl EntityKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Defense,
        Self::Resource,
        Self::Walls,
        Self::Trap,
        Self::Troop,
        Self::Spell,
        Self::Siege,
        Self::Hero,
        Self::Pet,
    ];

    /// The dataset spelling of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Defense => "defense",
            Self::Resource => "resource",
            Self::Walls => "walls",
            Self::Trap => "trap",
            Self::Troop => "troop",
            Self::Spell => "spell",
            Self::Siege => "siege",
            Self::Hero => "hero",
            Self::Pet => "pet",
        }
    }
}

/// Resource spent to upgrade an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Gold.
    #[serde(rename = "gold")]
    Gold,
    /// Elixir.
    #[serde(rename = "elixir")]
    Elixir,
    /// Dark elixir.
    #[serde(rename = "dark elixir")]
    DarkElixir,
    /// Gems.
    #[serde(rename = "gems")]
    Gems,
}

impl ResourceKind {
    /// Every resource, in declaration order.
    pub const ALL: [Self; 4] = [Self::Gold, Self::Elixir, Self::DarkElixir, Self::Gems];

    /// The dataset spelling of this resource.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Elixir => "elixir",
            Self::DarkElixir => "dark elixir",
            Self::Gems => "gems",
        }
    }
}

/// Error returned when a kind or resource name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {what}: '{value}'")]
pub struct ParseKindError {
    what: &'static str,
    value: String,
}

impl FromStr for EntityKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseKindError {
                what: "entity kind",
                value: s.to_string(),
            })
    }
}

impl FromStr for ResourceKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the CLI-friendly spelling as well.
        let normalized = s.trim().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|resource| resource.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ParseKindError {
                what: "resource",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field whose value changes once an entity has been upgraded.
///
/// In the data asset this is either a bare value or a
/// `{ "default": .., "upgraded": .. }` object.
///
/// # Example JSON
///
/// ```json
/// { "default": "gems", "upgraded": "gold" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelDependent<T> {
    /// Same value at every level.
    Fixed(T),
    /// Value before and after the first upgrade.
    Switch {
        /// Value while not upgraded.
        default: T,
        /// Value once upgraded.
        upgraded: T,
    },
}

impl<T: Copy> LevelDependent<T> {
    /// Pick the value for the given upgrade state.
    #[must_use]
    pub fn resolve(&self, upgraded: bool) -> T {
        match *self {
            Self::Fixed(value) => value,
            Self::Switch { default, upgraded: value } => {
                if upgraded {
                    value
                } else {
                    default
                }
            }
        }
    }

    /// The value only if it does not depend on level.
    #[must_use]
    pub fn fixed(&self) -> Option<T> {
        match *self {
            Self::Fixed(value) => Some(value),
            Self::Switch { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parses_case_insensitively() {
        assert_eq!("Defense".parse::<EntityKind>(), Ok(EntityKind::Defense));
        assert_eq!("pet".parse::<EntityKind>(), Ok(EntityKind::Pet));
        assert!("castle".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_resource_accepts_cli_spelling() {
        assert_eq!(
            "dark-elixir".parse::<ResourceKind>(),
            Ok(ResourceKind::DarkElixir)
        );
        assert_eq!(
            "dark elixir".parse::<ResourceKind>(),
            Ok(ResourceKind::DarkElixir)
        );
        assert_eq!("GEMS".parse::<ResourceKind>(), Ok(ResourceKind::Gems));
    }

    #[test]
    fn test_parse_error_message() {
        let err = "ore".parse::<ResourceKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown resource: 'ore'");
    }

    #[test]
    fn test_level_dependent_resolve() {
        let fixed = LevelDependent::Fixed(ResourceKind::Gold);
        assert_eq!(fixed.resolve(false), ResourceKind::Gold);
        assert_eq!(fixed.resolve(true), ResourceKind::Gold);

        let switch = LevelDependent::Switch {
            default: ResourceKind::Gems,
            upgraded: ResourceKind::Gold,
        };
        assert_eq!(switch.resolve(false), ResourceKind::Gems);
        assert_eq!(switch.resolve(true), ResourceKind::Gold);
        assert_eq!(switch.fixed(), None);
    }
}
