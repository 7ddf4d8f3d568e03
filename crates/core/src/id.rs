//! Product identifiers.
//!
//! Ids are chosen by the user when a product is created. The catalog file
//! stores them both as object keys (always strings in JSON) and inside each
//! record, where numeric ids are written as plain integers.

use core::fmt;
use core::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Identifier of a product in the catalog.
///
/// Always non-empty and free of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(String);

impl ProductId {
    /// Create an identifier from user input.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("product id cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id as an integer, when it is written in canonical decimal form
    /// (`"42"`, not `"042"` or `"+42"`).
    pub fn as_number(&self) -> Option<u64> {
        self.0
            .parse::<u64>()
            .ok()
            .filter(|n| n.to_string() == self.0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for ProductId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_number() {
            Some(n) => serializer.serialize_u64(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}

struct ProductIdVisitor;

impl<'de> Visitor<'de> for ProductIdVisitor {
    type Value = ProductId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-empty string without surrounding whitespace or a non-negative integer")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ProductId::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map(ProductId::from)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    // Stored ids are taken as written: padded ids are rejected, not trimmed,
    // so distinct catalog keys never merge.
    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.is_empty() || v.trim() != v {
            return Err(E::invalid_value(de::Unexpected::Str(v), &self));
        }
        Ok(ProductId(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ProductIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn new_trims_and_rejects_blank() {
        assert_eq!(ProductId::new("  7 ").unwrap().as_str(), "7");
        assert!(matches!(ProductId::new("   "), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn numeric_ids_serialize_as_integers() {
        let id = ProductId::new("42").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");

        let id = ProductId::new("SKU-9").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"SKU-9\"");

        let id = ProductId::new("007").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"007\"");
    }

    #[test]
    fn accepts_strings_and_integers() {
        let a: ProductId = serde_json::from_str("1").unwrap();
        let b: ProductId = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(a, b);
        assert!(serde_json::from_str::<ProductId>("-3").is_err());
        assert!(serde_json::from_str::<ProductId>("\"\"").is_err());
    }

    #[test]
    fn stored_ids_with_surrounding_whitespace_are_rejected() {
        assert!(serde_json::from_str::<ProductId>("\" 1\"").is_err());
        assert!(serde_json::from_str::<ProductId>("\"1 \"").is_err());

        let colliding = r#"{" 1":"radio","1":"tv"}"#;
        assert!(serde_json::from_str::<BTreeMap<ProductId, String>>(colliding).is_err());
    }

    #[test]
    fn works_as_json_object_key() {
        let mut map = BTreeMap::new();
        map.insert(ProductId::from(1), "tv");
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"1":"tv"}"#);

        let back: BTreeMap<ProductId, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(&ProductId::from(1)).map(String::as_str), Some("tv"));
    }
}
