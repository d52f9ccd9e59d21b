//! Material and augment catalogs.
//!
//! A catalog resolves record ids to full records. Lookups keep duplicates:
//! asking for the same id twice yields two records, and unknown ids yield
//! nothing, so callers detect bad ids by comparing lengths.

use crate::augment::AugmentRecord;
use crate::error::Result;
use crate::material::MaterialRecord;
use crate::record_id::RecordId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Data-access collaborator for crafting.
///
/// # Examples
///
/// ```rust
/// use riflecraft::catalog::{CraftingCatalog, InMemoryCatalog};
/// use riflecraft::{MaterialRecord, RecordId};
///
/// let mut catalog = InMemoryCatalog::new();
/// catalog.insert_material(MaterialRecord::new(1, "Iron", 10, 5, 2));
///
/// let ids = [RecordId::new(1), RecordId::new(1), RecordId::new(9)];
/// let found = catalog.fetch_materials_by_ids(&ids).unwrap();
/// assert_eq!(found.len(), 2);
/// ```
pub trait CraftingCatalog: Send + Sync {
    /// Every known material.
    fn all_materials(&self) -> Result<Vec<MaterialRecord>>;

    /// Every known augment.
    fn all_augments(&self) -> Result<Vec<AugmentRecord>>;

    /// One material per requested id that exists, in request order.
    fn fetch_materials_by_ids(&self, ids: &[RecordId]) -> Result<Vec<MaterialRecord>>;

    /// One augment per requested id that exists, in request order.
    fn fetch_augments_by_ids(&self, ids: &[RecordId]) -> Result<Vec<AugmentRecord>>;
}

/// Serialized form of a catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub materials: Vec<MaterialRecord>,
    #[serde(default)]
    pub augments: Vec<AugmentRecord>,
}

/// A catalog held in memory, ordered by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    materials: BTreeMap<RecordId, MaterialRecord>,
    augments: BTreeMap<RecordId, AugmentRecord>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a document. Later records win on duplicate ids.
    pub fn from_document(document: CatalogDocument) -> Self {
        let mut catalog = Self::new();
        for material in document.materials {
            catalog.insert_material(material);
        }
        for augment in document.augments {
            catalog.insert_augment(augment);
        }
        catalog
    }

    /// Parse a catalog from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(document))
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            materials = catalog.materials.len(),
            augments = catalog.augments.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn insert_material(&mut self, material: MaterialRecord) {
        self.materials.insert(material.id, material);
    }

    pub fn insert_augment(&mut self, augment: AugmentRecord) {
        self.augments.insert(augment.id, augment);
    }

    /// Snapshot the catalog back into its serialized form.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            materials: self.materials.values().cloned().collect(),
            augments: self.augments.values().cloned().collect(),
        }
    }
}

impl CraftingCatalog for InMemoryCatalog {
    fn all_materials(&self) -> Result<Vec<MaterialRecord>> {
        Ok(self.materials.values().cloned().collect())
    }

    fn all_augments(&self) -> Result<Vec<AugmentRecord>> {
        Ok(self.augments.values().cloned().collect())
    }

    fn fetch_materials_by_ids(&self, ids: &[RecordId]) -> Result<Vec<MaterialRecord>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.materials.get(id).cloned())
            .collect())
    }

    fn fetch_augments_by_ids(&self, ids: &[RecordId]) -> Result<Vec<AugmentRecord>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.augments.get(id).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::augment::AugmentKind;

    const DOC: &str = r#"{
        "materials": [
            {"id": 2, "name": "Oak", "stat_points": 3, "effect_points": 1, "elemental_chance_points": 0,
             "elemental_distribution": [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]},
            {"id": 1, "name": "Iron", "stat_points": 10, "effect_points": 5, "elemental_chance_points": 2}
        ],
        "augments": [
            {"id": 1, "name": "Barrel", "type": 0, "magnitude": 3}
        ]
    }"#;

    #[test]
    fn test_from_json_orders_by_id() {
        let catalog = InMemoryCatalog::from_json(DOC).unwrap();
        let materials = catalog.all_materials().unwrap();
        assert_eq!(materials.len(), 2);
        assert_eq!(materials[0].name, "Iron");
        assert_eq!(materials[1].name, "Oak");

        let augments = catalog.all_augments().unwrap();
        assert_eq!(augments[0].kind, AugmentKind::StatBoost);
    }

    #[test]
    fn test_fetch_keeps_duplicates_and_order() {
        let catalog = InMemoryCatalog::from_json(DOC).unwrap();
        let ids = [RecordId::new(2), RecordId::new(1), RecordId::new(2)];
        let found = catalog.fetch_materials_by_ids(&ids).unwrap();
        let names: Vec<&str> = found.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Oak", "Iron", "Oak"]);
    }

    #[test]
    fn test_fetch_drops_unknown_ids() {
        let catalog = InMemoryCatalog::from_json(DOC).unwrap();
        let found = catalog
            .fetch_augments_by_ids(&[RecordId::new(1), RecordId::new(77)])
            .unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_fractional_magnitude_loads() {
        let catalog = InMemoryCatalog::from_json(
            r#"{"materials": [], "augments": [{"id": 1, "type": 0, "magnitude": 2.5}]}"#,
        )
        .unwrap();
        let augments = catalog.all_augments().unwrap();
        assert_eq!(augments.len(), 1);
        assert_eq!(augments[0].magnitude, 2.5);
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(InMemoryCatalog::from_json("{\"materials\": 3}").is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = InMemoryCatalog::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, crate::error::CraftError::Io(_)));
    }

    #[test]
    fn test_document_round_trip() {
        let catalog = InMemoryCatalog::from_json(DOC).unwrap();
        let doc = catalog.to_document();
        let again = InMemoryCatalog::from_document(doc);
        assert_eq!(again.all_materials().unwrap(), catalog.all_materials().unwrap());
    }
}
