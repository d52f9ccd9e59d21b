//! Augment records.
//!
//! An augment adds its magnitude to exactly one crafting pool, chosen by
//! its stored type code. Codes outside the known set are kept but ignored.

use crate::record_id::RecordId;
use serde::{Deserialize, Serialize};

/// Which pool an augment feeds.
///
/// # Examples
///
/// ```rust
/// use riflecraft::AugmentKind;
///
/// assert_eq!(AugmentKind::from_code(0), AugmentKind::StatBoost);
/// assert_eq!(AugmentKind::from_code(2), AugmentKind::ElementalChanceBoost);
/// assert_eq!(AugmentKind::from_code(7), AugmentKind::Ignored(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AugmentKind {
    /// Adds to stat points (code 0).
    StatBoost,
    /// Adds to effect points (code 1).
    EffectBoost,
    /// Adds to elemental chance points (code 2).
    ElementalChanceBoost,
    /// Any other code. Contributes nothing.
    Ignored(i64),
}

impl AugmentKind {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => AugmentKind::StatBoost,
            1 => AugmentKind::EffectBoost,
            2 => AugmentKind::ElementalChanceBoost,
            other => AugmentKind::Ignored(other),
        }
    }

    pub fn code(self) -> i64 {
        match self {
            AugmentKind::StatBoost => 0,
            AugmentKind::EffectBoost => 1,
            AugmentKind::ElementalChanceBoost => 2,
            AugmentKind::Ignored(code) => code,
        }
    }
}

impl From<i64> for AugmentKind {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl From<AugmentKind> for i64 {
    fn from(kind: AugmentKind) -> Self {
        kind.code()
    }
}

impl Serialize for AugmentKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.code().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AugmentKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(AugmentKind::from_code)
    }
}

/// One crafting modifier, as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentRecord {
    pub id: RecordId,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "type")]
    pub kind: AugmentKind,

    /// Amount added to the selected pool. Any JSON number is accepted.
    pub magnitude: f64,
}

impl AugmentRecord {
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        kind: impl Into<AugmentKind>,
        magnitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            magnitude,
        }
    }
}
