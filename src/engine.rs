//! The crafting engine.
//!
//! Crafting is a pure function of the submitted records plus three
//! weighted draws:
//!
//! 1. Sum the flat points of every material into three pools
//! 2. Spread each material's elemental distribution over its slot and
//!    the neighbouring slots
//! 3. Add each augment's magnitude to the pool its kind selects
//! 4. Draw one elemental effect from each of slots 1, 2 and 3
//!
//! The engine does not validate counts. Callers are expected to pass
//! [`MATERIAL_COUNT`] materials and [`AUGMENT_COUNT`] augments.

use crate::augment::{AugmentKind, AugmentRecord};
use crate::crafted::CraftedRifle;
use crate::element::effect_name;
use crate::material::MaterialRecord;
use crate::roll::{weighted_pick, Roller};
use crate::spread::ElementalGrid;
use tracing::debug;

/// Materials required per craft.
pub const MATERIAL_COUNT: usize = 5;

/// Augments required per craft.
pub const AUGMENT_COUNT: usize = 10;

/// Slots whose accumulators are rolled, in output order.
///
/// Slots 0 and 4 only ever influence their neighbours.
pub const ROLL_SLOTS: [usize; 3] = [1, 2, 3];

/// The three numeric pools of a crafted rifle.
///
/// Pools are `f64` so fractional augment magnitudes and very large
/// material values add without overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatPools {
    pub stat_points: f64,
    pub effect_points: f64,
    pub elemental_chance_points: f64,
}

impl StatPools {
    /// Sum the flat fields of `materials`, left to right.
    pub fn from_materials(materials: &[MaterialRecord]) -> Self {
        materials.iter().fold(Self::default(), |mut pools, m| {
            pools.stat_points += m.stat_points as f64;
            pools.effect_points += m.effect_points as f64;
            pools.elemental_chance_points += m.elemental_chance_points as f64;
            pools
        })
    }

    /// Add one augment's magnitude to the pool its kind selects.
    pub fn apply(&mut self, augment: &AugmentRecord) {
        match augment.kind {
            AugmentKind::StatBoost => self.stat_points += augment.magnitude,
            AugmentKind::EffectBoost => self.effect_points += augment.magnitude,
            AugmentKind::ElementalChanceBoost => {
                self.elemental_chance_points += augment.magnitude
            }
            AugmentKind::Ignored(code) => {
                debug!(augment = %augment.id, code, "ignoring augment with unknown type");
            }
        }
    }
}

/// Draw the elemental effects for a spread grid.
///
/// Slots whose weights sum to zero produce nothing, so the result holds
/// between zero and three names.
pub fn roll_effects<R: Roller + ?Sized>(grid: &ElementalGrid, roller: &mut R) -> Vec<String> {
    ROLL_SLOTS
        .iter()
        .filter_map(|&slot| {
            let picked = weighted_pick(grid.slot(slot), roller);
            debug!(slot, total = grid.slot_total(slot), ?picked, "elemental roll");
            picked.map(|index| effect_name(index).to_string())
        })
        .collect()
}

/// Craft a rifle from resolved materials and augments.
///
/// # Examples
///
/// ```rust
/// use riflecraft::{craft, AugmentRecord, MaterialRecord};
/// use riflecraft::roll::ScriptedRoller;
///
/// let materials = vec![MaterialRecord::new(1, "Iron", 10, 5, 2); 5];
/// let mut augments = vec![AugmentRecord::new(1, "Stock", 0, 3.0); 5];
/// augments.extend(vec![AugmentRecord::new(2, "Sight", 1, 1.0); 5]);
///
/// let rifle = craft(&materials, &augments, &mut ScriptedRoller::constant(0.0));
/// assert_eq!(rifle.stat_points, 65.0);
/// assert_eq!(rifle.effect_points, 30.0);
/// assert_eq!(rifle.elemental_chance_points, 10.0);
/// assert!(rifle.elemental_effects.is_empty());
/// ```
pub fn craft<R: Roller + ?Sized>(
    materials: &[MaterialRecord],
    augments: &[AugmentRecord],
    roller: &mut R,
) -> CraftedRifle {
    let mut pools = StatPools::from_materials(materials);
    let grid = ElementalGrid::spread(materials);

    for augment in augments {
        pools.apply(augment);
    }

    let elemental_effects = roll_effects(&grid, roller);

    debug!(
        stat_points = pools.stat_points,
        effect_points = pools.effect_points,
        elemental_chance_points = pools.elemental_chance_points,
        effects = elemental_effects.len(),
        "crafted rifle"
    );

    CraftedRifle {
        stat_points: pools.stat_points,
        effect_points: pools.effect_points,
        elemental_chance_points: pools.elemental_chance_points,
        elemental_effects,
    }
}

/// Craft using the thread-local random generator.
pub fn craft_with_thread_rng(
    materials: &[MaterialRecord],
    augments: &[AugmentRecord],
) -> CraftedRifle {
    craft(materials, augments, &mut rand::thread_rng())
}
