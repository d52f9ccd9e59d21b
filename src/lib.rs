//! # riflecraft - Material and Augment Crafting Engine
//!
//! Turns five materials and ten augments into a crafted rifle:
//! - **Pooled** stat, effect and elemental-chance points
//! - **Spread** elemental affinities, where each material bleeds into the
//!   neighbouring slots
//! - **Weighted** elemental effect draws through an injectable [`Roller`]
//!
//! ## Crafting Pipeline
//!
//! ```text
//! [ids] → [CraftingCatalog] → [craft] → [CraftedRifle]
//! ```
//!
//! 1. **Catalog** resolves request ids to records (duplicates kept)
//! 2. **Engine** pools points, spreads elements, applies augments and rolls
//! 3. **CraftedRifle** carries the totals and up to three effect names
//!
//! The engine never fails. Short distributions count as zeros, unknown
//! augment types are ignored and unknown effect indices get a sentinel name.
//! Shape and id checks belong to [`service::CraftingService`].
//!
//! ## Example
//!
//! ```rust
//! use riflecraft::*;
//! use riflecraft::roll::ScriptedRoller;
//!
//! let mut dist = vec![0.0; 16];
//! dist[2] = 4.0; // Ignite
//! let ember = MaterialRecord::new(1, "Ember", 8, 3, 1).with_distribution(dist);
//! let materials = vec![ember; 5];
//! let augments = vec![AugmentRecord::new(1, "Long Barrel", AugmentKind::StatBoost, 2.0); 10];
//!
//! let rifle = craft(&materials, &augments, &mut ScriptedRoller::constant(0.0));
//! assert_eq!(rifle.stat_points, 60.0); // 5 * 8 + 10 * 2
//! assert_eq!(rifle.elemental_effects, vec!["Ignite", "Ignite", "Ignite"]);
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - The crafting computation
//! - [`spread`] - Per-slot elemental accumulators
//! - [`roll`] - Weighted draws and randomness sources
//! - [`element`] - Elemental effect table
//! - [`material`] / [`augment`] - Catalog records
//! - [`catalog`] - Id resolution
//! - [`service`] - Request validation and JSON replies
//! - [`config`] - Environment configuration
//! - [`error`] - Error types

pub mod augment;
pub mod catalog;
pub mod config;
pub mod crafted;
pub mod element;
pub mod engine;
pub mod error;
pub mod material;
pub mod record_id;
pub mod roll;
pub mod service;
pub mod spread;

// Re-export main types for convenience
pub use augment::{AugmentKind, AugmentRecord};
pub use crafted::CraftedRifle;
pub use element::{ElementalEffect, ELEMENT_COUNT, UNKNOWN_EFFECT};
pub use engine::{craft, craft_with_thread_rng, StatPools, AUGMENT_COUNT, MATERIAL_COUNT};
pub use error::{CraftError, RecordKind};
pub use material::MaterialRecord;
pub use record_id::RecordId;
pub use roll::Roller;
pub use spread::{ElementalGrid, SLOT_COUNT};

pub use catalog::{CraftingCatalog, InMemoryCatalog};
pub use config::CraftConfig;
pub use service::{CraftRequest, CraftingService};
