use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Identity id issued by the user directory.
///
/// Opaque: compared for equality only, never parsed or ordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Fresh id for a new directory entry
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_generate_unique() {
        assert_ne!(UserId::generate(), UserId::generate());
    }

    #[test]
    fn test_user_id_is_opaque_string() {
        let id = UserId::new("b7a1-not-a-number");
        assert_eq!(id.as_str(), "b7a1-not-a-number");
        assert_eq!(id.to_string(), "b7a1-not-a-number");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""b7a1-not-a-number""#);
    }
}
