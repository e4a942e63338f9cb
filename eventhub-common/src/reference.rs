//! Transaction references
//!
//! A `TransactionRef` is the token echoed back to the user after a
//! simulated vote or ticket purchase. It is display-only: not guaranteed
//! unique, not persisted, and not verifiable against any ledger. The
//! payment collaborator fabricates the underlying identifier; this type
//! passes it through unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, presentable confirmation token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionRef(String);

impl TransactionRef {
    /// Wrap an identifier produced elsewhere, unchanged
    pub fn from_source(source_id: impl Into<String>) -> Self {
        Self(source_id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TransactionRef {
    fn from(source_id: String) -> Self {
        Self(source_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_id_passes_through_unchanged() {
        let reference = TransactionRef::from_source("TXN-9K2M4PQ7XA");
        assert_eq!(reference.as_str(), "TXN-9K2M4PQ7XA");
        assert_eq!(reference.to_string(), "TXN-9K2M4PQ7XA");
    }

    #[test]
    fn test_serializes_as_bare_string() {
        let reference = TransactionRef::from_source("TXN-9K2M4PQ7XA");
        assert_eq!(
            serde_json::to_string(&reference).unwrap(),
            "\"TXN-9K2M4PQ7XA\""
        );
    }
}
