//! Typed identifiers for type-safe record references.
//!
//! Journal entries and evidence records are keyed by generated UUIDs, while
//! chart-of-accounts entries are keyed by their human-assigned account number.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(EntryId, "Unique identifier for a general-ledger journal entry.");
typed_id!(EvidenceId, "Unique identifier for a transaction evidence record.");

/// Account number identifying a chart-of-accounts entry.
///
/// Treated as an opaque key: it is usually numeric ("101") but nothing
/// requires that. Surrounding whitespace is stripped on construction so that
/// `" 101"` typed into a form matches the chart entry `"101"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Creates an account number, trimming surrounding whitespace.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_string())
    }

    /// Returns the account number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the account number is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for AccountNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Upstream forms sometimes send the number as a JSON number.
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(s) => Self::new(s),
            serde_json::Value::Null => Self::default(),
            other => Self::new(other.to_string()),
        })
    }
}

impl Default for AccountNumber {
    fn default() -> Self {
        Self(String::new())
    }
}

impl std::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AccountNumber {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for AccountNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = EntryId::from_uuid(uuid);
        assert_eq!(id.into_inner(), uuid);
    }

    #[test]
    fn test_typed_id_default_is_unique() {
        assert_ne!(EvidenceId::default(), EvidenceId::default());
    }

    #[test]
    fn test_typed_id_from_str() {
        let uuid = Uuid::new_v4();
        let id = EntryId::from_str(&uuid.to_string()).unwrap();
        assert_eq!(id.into_inner(), uuid);
        assert!(EntryId::from_str("invalid").is_err());
    }

    #[test]
    fn test_account_number_trims() {
        let number = AccountNumber::new("  101 ");
        assert_eq!(number.as_str(), "101");
        assert_eq!(number, AccountNumber::from("101"));
        assert!(AccountNumber::new("   ").is_blank());
    }

    #[test]
    fn test_account_number_deserializes_from_string_or_number() {
        let from_string: AccountNumber = serde_json::from_str("\"1-101\"").unwrap();
        assert_eq!(from_string.as_str(), "1-101");

        let from_number: AccountNumber = serde_json::from_str("101").unwrap();
        assert_eq!(from_number.as_str(), "101");

        let from_null: AccountNumber = serde_json::from_str("null").unwrap();
        assert!(from_null.is_blank());
    }

    #[test]
    fn test_account_number_serializes_transparently() {
        let json = serde_json::to_string(&AccountNumber::new("401")).unwrap();
        assert_eq!(json, "\"401\"");
    }
}
