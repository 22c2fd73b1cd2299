//! Placeholder tokens and the entity map
//!
//! A placeholder is always rendered as `[entity-N]` where N is a positive
//! decimal integer without leading zeros.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Literal text every placeholder token starts with
pub const PLACEHOLDER_PREFIX: &str = "[entity-";
/// Literal text every placeholder token ends with
pub const PLACEHOLDER_SUFFIX: &str = "]";
/// Counter value of a fresh session
pub const FIRST_ENTITY: u64 = 1;
/// Largest usable entity number; the counter must stay representable after it
pub const MAX_ENTITY: u64 = u64::MAX - 1;

/// A generated placeholder token, identified by its number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityKey(u64);

impl EntityKey {
    /// Create a key for the given counter value
    ///
    /// `None` outside `FIRST_ENTITY..=MAX_ENTITY`.
    pub fn new(n: u64) -> Option<Self> {
        (FIRST_ENTITY..=MAX_ENTITY).contains(&n).then_some(Self(n))
    }

    /// The numeric part of the token
    pub fn number(self) -> u64 {
        self.0
    }

    /// Parse a string that is exactly one placeholder token
    pub fn parse(s: &str) -> Option<Self> {
        match Self::parse_prefix(s) {
            Some((key, len)) if len == s.len() => Some(key),
            _ => None,
        }
    }

    /// Parse a placeholder token at the start of `s`
    ///
    /// Returns the key and the byte length of the token.
    pub fn parse_prefix(s: &str) -> Option<(Self, usize)> {
        let rest = s.strip_prefix(PLACEHOLDER_PREFIX)?;
        let digits = rest
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 || rest.as_bytes()[0] == b'0' {
            return None;
        }
        if !rest[digits..].starts_with(PLACEHOLDER_SUFFIX) {
            return None;
        }
        let n: u64 = rest[..digits].parse().ok()?;
        let key = Self::new(n)?;
        Some((
            key,
            PLACEHOLDER_PREFIX.len() + digits + PLACEHOLDER_SUFFIX.len(),
        ))
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", PLACEHOLDER_PREFIX, self.0, PLACEHOLDER_SUFFIX)
    }
}

impl Serialize for EntityKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EntityKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        EntityKey::parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid placeholder token: {:?}", raw))
        })
    }
}

/// Mapping from placeholder token to the original text it replaced
///
/// Ordered by entity number so listings are stable. Serializes as a JSON
/// object keyed by the rendered token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityMap {
    entries: BTreeMap<EntityKey, String>,
}

impl EntityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: EntityKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn get(&self, key: EntityKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    /// Record a substitution, returning the previous original for this key
    pub fn insert(&mut self, key: EntityKey, original: impl Into<String>) -> Option<String> {
        self.entries.insert(key, original.into())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Highest entity number in the map
    pub fn highest(&self) -> Option<EntityKey> {
        self.entries.keys().next_back().copied()
    }

    /// Entries in ascending entity order
    pub fn iter(&self) -> impl Iterator<Item = (EntityKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl FromIterator<(EntityKey, String)> for EntityMap {
    fn from_iter<I: IntoIterator<Item = (EntityKey, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display() {
        assert_eq!(EntityKey::new(1).unwrap().to_string(), "[entity-1]");
        assert_eq!(EntityKey::new(42).unwrap().to_string(), "[entity-42]");
    }

    #[test]
    fn test_key_zero_is_invalid() {
        assert!(EntityKey::new(0).is_none());
        assert!(EntityKey::parse("[entity-0]").is_none());
    }

    #[test]
    fn test_parse_exact_token() {
        assert_eq!(EntityKey::parse("[entity-7]"), EntityKey::new(7));
        assert_eq!(EntityKey::parse("[entity-123]"), EntityKey::new(123));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in [
            "[entity-]",
            "[entity-01]",
            "[entity--1]",
            "[entity-1",
            "entity-1]",
            "[Entity-1]",
            "[entity-1] ",
            "[entity-1x]",
            "[entity-99999999999999999999999]",
            "[entity-18446744073709551615]",
        ] {
            assert!(EntityKey::parse(raw).is_none(), "{raw:?} should not parse");
        }
    }

    #[test]
    fn test_largest_key_leaves_room_for_counter() {
        let key = EntityKey::parse("[entity-18446744073709551614]").unwrap();
        assert_eq!(key.number(), MAX_ENTITY);
        assert!(EntityKey::new(u64::MAX).is_none());
    }

    #[test]
    fn test_parse_prefix_reports_length() {
        let (key, len) = EntityKey::parse_prefix("[entity-12] tail").unwrap();
        assert_eq!(key.number(), 12);
        assert_eq!(len, "[entity-12]".len());
    }

    #[test]
    fn test_map_orders_by_number() {
        let mut map = EntityMap::new();
        map.insert(EntityKey::new(10).unwrap(), "ten");
        map.insert(EntityKey::new(2).unwrap(), "two");
        let keys: Vec<u64> = map.iter().map(|(k, _)| k.number()).collect();
        assert_eq!(keys, vec![2, 10]);
        assert_eq!(map.highest().map(EntityKey::number), Some(10));
    }

    #[test]
    fn test_map_json_shape() {
        let mut map = EntityMap::new();
        map.insert(EntityKey::new(1).unwrap(), "cat");
        map.insert(EntityKey::new(2).unwrap(), "mat");
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"[entity-1]":"cat","[entity-2]":"mat"}"#);

        let back: EntityMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_map_json_rejects_bad_key() {
        let result: Result<EntityMap, _> = serde_json::from_str(r#"{"cat":"dog"}"#);
        assert!(result.is_err());
    }
}
