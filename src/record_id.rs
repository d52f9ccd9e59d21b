//! Record identifier module.
//!
//! Provides the `RecordId` type used to key materials and augments in a
//! catalog. Identifiers are plain integers, matching how rows are keyed in
//! storage.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a material or augment record.
///
/// # Examples
///
/// ```rust
/// use riflecraft::RecordId;
///
/// let id = RecordId::new(7);
/// let same: RecordId = 7.into();
///
/// assert_eq!(id, same);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RecordId(i64);

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(RecordId)
    }
}

impl RecordId {
    /// Create a new `RecordId`.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for RecordId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
