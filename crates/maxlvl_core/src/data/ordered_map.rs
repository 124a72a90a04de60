//! Serde support for name-keyed maps that must keep their source order.
//!
//! The data asset stores entities and crafting modes as JSON objects. Their
//! key order is meaningful (enumeration follows it), so they deserialize into
//! `Vec<(String, T)>` rather than a hashed or sorted map.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialize ordered entries as a map, preserving order.
#[allow(clippy::ptr_arg)]
pub fn serialize<S, T>(entries: &Vec<(String, T)>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (key, value) in entries {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

/// Deserialize a map into ordered entries, preserving source order.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
}

struct OrderedMapVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for OrderedMapVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = Vec<(String, T)>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map keyed by name")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, T>()? {
            entries.push((key, value));
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "crate::data::ordered_map")]
        entries: Vec<(String, u32)>,
    }

    #[test]
    fn test_source_order_is_kept() {
        let json = r#"{ "entries": { "zeta": 1, "alpha": 2, "mid": 3 } }"#;
        let wrapper: Wrapper = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = wrapper.entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_serializes_as_map() {
        let wrapper = Wrapper {
            entries: vec![("b".to_string(), 2), ("a".to_string(), 1)],
        };
        let json = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(json, r#"{"entries":{"b":2,"a":1}}"#);
    }

    #[test]
    fn test_rejects_non_map() {
        let json = r#"{ "entries": [1, 2] }"#;
        assert!(serde_json::from_str::<Wrapper>(json).is_err());
    }
}
