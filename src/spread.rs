//! Elemental spreading across material slots.
//!
//! Each of the five material slots owns a sixteen-entry accumulator. A
//! material adds its distribution to its own slot and bleeds the same
//! amounts into the slots directly before and after it, clamped at the
//! ends of the row.

use crate::element::ELEMENT_COUNT;
use crate::material::MaterialRecord;

/// Number of material slots in a craft.
pub const SLOT_COUNT: usize = 5;

/// Per-slot elemental accumulators.
///
/// # Examples
///
/// ```rust
/// use riflecraft::{ElementalGrid, MaterialRecord};
///
/// let mut dist = vec![0.0; 16];
/// dist[2] = 1.0;
/// let ember = MaterialRecord::new(1, "Ember", 0, 0, 0).with_distribution(dist);
/// let materials = vec![ember; 5];
///
/// let grid = ElementalGrid::spread(&materials);
/// assert_eq!(grid.slot(0)[2], 2.0);
/// assert_eq!(grid.slot(2)[2], 3.0);
/// assert_eq!(grid.slot(4)[2], 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ElementalGrid {
    slots: [[f64; ELEMENT_COUNT]; SLOT_COUNT],
}

impl Default for ElementalGrid {
    fn default() -> Self {
        Self {
            slots: [[0.0; ELEMENT_COUNT]; SLOT_COUNT],
        }
    }
}

impl ElementalGrid {
    /// Build the grid from materials in slot order.
    ///
    /// Materials past the fifth are ignored.
    pub fn spread(materials: &[MaterialRecord]) -> Self {
        let mut grid = Self::default();
        for (slot, material) in materials.iter().take(SLOT_COUNT).enumerate() {
            grid.add(slot, &material.distribution());
        }
        grid
    }

    /// Add a distribution at `slot` and bleed it into the neighbours.
    fn add(&mut self, slot: usize, distribution: &[f64; ELEMENT_COUNT]) {
        let first = slot.saturating_sub(1);
        let last = (slot + 1).min(SLOT_COUNT - 1);
        for target in &mut self.slots[first..=last] {
            for (acc, weight) in target.iter_mut().zip(distribution) {
                *acc += weight;
            }
        }
    }

    /// The accumulator for `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= SLOT_COUNT`.
    pub fn slot(&self, slot: usize) -> &[f64; ELEMENT_COUNT] {
        &self.slots[slot]
    }

    /// Sum of all weights in `slot`.
    pub fn slot_total(&self, slot: usize) -> f64 {
        self.slots[slot].iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material_with(index: usize, weight: f64) -> MaterialRecord {
        let mut dist = vec![0.0; ELEMENT_COUNT];
        dist[index] = weight;
        MaterialRecord::new(1, "m", 0, 0, 0).with_distribution(dist)
    }

    fn blank() -> MaterialRecord {
        MaterialRecord::new(0, "blank", 0, 0, 0)
    }

    #[test]
    fn test_first_slot_bleeds_right_only() {
        let materials = vec![material_with(0, 4.0), blank(), blank(), blank(), blank()];
        let grid = ElementalGrid::spread(&materials);
        assert_eq!(grid.slot(0)[0], 4.0);
        assert_eq!(grid.slot(1)[0], 4.0);
        assert_eq!(grid.slot_total(2), 0.0);
        assert_eq!(grid.slot_total(3), 0.0);
        assert_eq!(grid.slot_total(4), 0.0);
    }

    #[test]
    fn test_middle_slot_bleeds_both_ways() {
        let materials = vec![blank(), blank(), material_with(7, 1.5), blank(), blank()];
        let grid = ElementalGrid::spread(&materials);
        assert_eq!(grid.slot_total(0), 0.0);
        assert_eq!(grid.slot(1)[7], 1.5);
        assert_eq!(grid.slot(2)[7], 1.5);
        assert_eq!(grid.slot(3)[7], 1.5);
        assert_eq!(grid.slot_total(4), 0.0);
    }

    #[test]
    fn test_last_slot_bleeds_left_only() {
        let materials = vec![blank(), blank(), blank(), blank(), material_with(15, 2.0)];
        let grid = ElementalGrid::spread(&materials);
        assert_eq!(grid.slot_total(2), 0.0);
        assert_eq!(grid.slot(3)[15], 2.0);
        assert_eq!(grid.slot(4)[15], 2.0);
    }

    #[test]
    fn test_fewer_materials_than_slots() {
        let grid = ElementalGrid::spread(&[material_with(1, 1.0)]);
        assert_eq!(grid.slot(0)[1], 1.0);
        assert_eq!(grid.slot(1)[1], 1.0);
        assert_eq!(grid.slot_total(2), 0.0);
    }

    #[test]
    fn test_extra_materials_ignored() {
        let materials = vec![blank(), blank(), blank(), blank(), blank(), material_with(0, 9.0)];
        assert_eq!(ElementalGrid::spread(&materials), ElementalGrid::default());
    }
}
