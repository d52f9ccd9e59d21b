//! Material records.
//!
//! A material contributes flat points to the three crafting pools and an
//! elemental distribution that is spread over its neighbouring slots.

use crate::element::ELEMENT_COUNT;
use crate::record_id::RecordId;
use serde::{Deserialize, Serialize};

/// One craftable ingredient, as stored in the catalog.
///
/// Field names follow the storage columns (`stat_points`, ...).
///
/// # Examples
///
/// ```rust
/// use riflecraft::MaterialRecord;
///
/// let iron = MaterialRecord::new(1, "Iron", 10, 5, 2).with_distribution(vec![0.0, 3.0]);
/// assert_eq!(iron.weight(1), 3.0);
/// assert_eq!(iron.weight(12), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub id: RecordId,

    #[serde(default)]
    pub name: String,

    pub stat_points: i64,
    pub effect_points: i64,
    pub elemental_chance_points: i64,

    /// Relative weight toward each elemental effect.
    ///
    /// Normally sixteen entries. Shorter vectors are read as zero-padded
    /// and entries past the sixteenth are never read.
    #[serde(default)]
    pub elemental_distribution: Vec<f64>,
}

impl MaterialRecord {
    /// Create a material with an all-zero elemental distribution.
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        stat_points: i64,
        effect_points: i64,
        elemental_chance_points: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stat_points,
            effect_points,
            elemental_chance_points,
            elemental_distribution: vec![0.0; ELEMENT_COUNT],
        }
    }

    /// Replace the elemental distribution.
    pub fn with_distribution(mut self, distribution: Vec<f64>) -> Self {
        self.elemental_distribution = distribution;
        self
    }

    /// Weight toward the effect at `index`, zero when the entry is missing.
    pub fn weight(&self, index: usize) -> f64 {
        self.elemental_distribution.get(index).copied().unwrap_or(0.0)
    }

    /// The distribution normalised to exactly sixteen entries.
    pub fn distribution(&self) -> [f64; ELEMENT_COUNT] {
        std::array::from_fn(|d| self.weight(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_distribution_is_zero_padded() {
        let m = MaterialRecord::new(1, "Copper", 0, 0, 0).with_distribution(vec![1.0, 2.0]);
        let full = m.distribution();
        assert_eq!(full[0], 1.0);
        assert_eq!(full[1], 2.0);
        assert!(full[2..].iter().all(|w| *w == 0.0));
    }

    #[test]
    fn test_long_distribution_is_truncated() {
        let m = MaterialRecord::new(1, "Odd", 0, 0, 0).with_distribution(vec![1.0; 20]);
        assert_eq!(m.distribution().len(), ELEMENT_COUNT);
    }

    #[test]
    fn test_deserialize_storage_row() {
        let json = r#"{
            "id": 3,
            "name": "Obsidian",
            "stat_points": 12,
            "effect_points": 4,
            "elemental_chance_points": 1,
            "elemental_distribution": [0, 0, 5]
        }"#;
        let m: MaterialRecord = serde_json::from_str(json).unwrap();
        assert_eq!(m.id, RecordId::new(3));
        assert_eq!(m.stat_points, 12);
        assert_eq!(m.weight(2), 5.0);
    }

    #[test]
    fn test_missing_distribution_defaults_empty() {
        let json = r#"{"id": 1, "stat_points": 1, "effect_points": 1, "elemental_chance_points": 1}"#;
        let m: MaterialRecord = serde_json::from_str(json).unwrap();
        assert!(m.elemental_distribution.is_empty());
        assert_eq!(m.distribution(), [0.0; ELEMENT_COUNT]);
    }
}
