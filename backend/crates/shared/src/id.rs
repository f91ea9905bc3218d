//! Record ID Types
//!
//! Type-safe wrappers around store-assigned integer keys.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generic typed record ID
///
/// The value is assigned by the persistence store (sequence / auto-increment)
/// and is never reused, so the wrapper has no constructor that invents one.
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type ArticleId = Id<markers::Article>;
/// let id = ArticleId::from_i64(7);
/// assert_eq!(id.value(), 7);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Wrap a key read from the store
    #[inline]
    pub const fn from_i64(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Raw key for binding into queries
    #[inline]
    pub const fn value(&self) -> i64 {
        self.value
    }
}

// Manual impls: derives would put bounds on the marker type.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Error when parsing an ID from a path segment or query string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid record id: {0}")]
pub struct IdParseError(pub String);

impl<T> FromStr for Id<T> {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self::from_i64)
            .map_err(|_| IdParseError(s.to_string()))
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::from_i64)
    }
}

/// Marker types for different record IDs
pub mod markers {
    /// Marker for Article IDs
    pub struct Article;

    /// Marker for Comment IDs
    pub struct Comment;
}

/// Type aliases for common IDs
pub type ArticleId = Id<markers::Article>;
pub type CommentId = Id<markers::Comment>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let article_id: ArticleId = Id::from_i64(1);
        let comment_id: CommentId = Id::from_i64(1);

        // Same raw value, different types
        let _a: i64 = article_id.into();
        let _c: i64 = comment_id.into();
    }

    #[test]
    fn test_id_parse() {
        let id: ArticleId = "42".parse().unwrap();
        assert_eq!(id.value(), 42);

        assert!("abc".parse::<ArticleId>().is_err());
        assert!("".parse::<CommentId>().is_err());
    }

    #[test]
    fn test_id_serde_is_plain_integer() {
        let id = CommentId::from_i64(9);
        assert_eq!(serde_json::to_string(&id).unwrap(), "9");

        let back: CommentId = serde_json::from_str("9").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_ordering() {
        assert!(ArticleId::from_i64(1) < ArticleId::from_i64(2));
    }
}
