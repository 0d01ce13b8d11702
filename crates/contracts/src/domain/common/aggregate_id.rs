use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a record owned by the remote store.
///
/// The store assigns integer primary keys; every aggregate wraps them in its
/// own newtype so a product id can't be passed where a sale id is expected.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Raw key as assigned by the store
    fn value(&self) -> i64;

    /// Build an id from a raw key
    fn from_value(value: i64) -> Self;

    /// Path segment form, used in `/api/{collection}/{id}/`
    fn as_string(&self) -> String {
        self.value().to_string()
    }

    /// Parse an id from a form field or path segment
    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(Self::from_value)
            .map_err(|e| format!("Invalid id '{}': {}", s, e))
    }
}

/// Declares an integer id newtype and its [`AggregateId`] impl.
macro_rules! aggregate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $crate::domain::common::AggregateId for $name {
            fn value(&self) -> i64 {
                self.0
            }

            fn from_value(value: i64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use aggregate_id;

#[cfg(test)]
mod tests {
    use super::*;

    aggregate_id!(TestId);

    #[test]
    fn test_from_string_trims_and_parses() {
        assert_eq!(TestId::from_string(" 42 "), Ok(TestId(42)));
        assert_eq!(TestId(7).as_string(), "7");
    }

    #[test]
    fn test_from_string_rejects_garbage() {
        assert!(TestId::from_string("abc").is_err());
        assert!(TestId::from_string("").is_err());
    }

    #[test]
    fn test_id_is_transparent_on_the_wire() {
        assert_eq!(serde_json::to_string(&TestId(3)).unwrap(), "3");
        let parsed: TestId = serde_json::from_str("11").unwrap();
        assert_eq!(parsed, TestId(11));
    }
}
