//! Weighted random draws.
//!
//! Randomness is injected through the [`Roller`] trait so the engine stays
//! a pure function of its inputs. Any `rand::Rng` is a roller; tests use
//! [`ScriptedRoller`] to pin exact outcomes.

use rand::Rng;
use std::collections::VecDeque;

/// Source of uniform whole-number rolls.
///
/// Implementations must be cheap to call; the engine calls `roll` at most
/// three times per craft.
pub trait Roller {
    /// Return a whole number uniformly distributed in `[0, total)`.
    ///
    /// `total` is always strictly positive and finite when called by the
    /// engine.
    fn roll(&mut self, total: f64) -> f64;
}

/// Largest whole number strictly below `total` (zero for `total <= 1`).
fn last_whole_below(total: f64) -> f64 {
    (total.ceil() - 1.0).max(0.0)
}

impl<R: Rng + ?Sized> Roller for R {
    fn roll(&mut self, total: f64) -> f64 {
        let unit: f64 = self.gen();
        (unit * total).floor().min(last_whole_below(total))
    }
}

/// A roller that replays a fixed script of values.
///
/// Values are floored and clamped into `[0, total)`. When the script runs
/// out it starts over, so a one-value script acts as a constant.
///
/// # Examples
///
/// ```rust
/// use riflecraft::roll::{Roller, ScriptedRoller};
///
/// let mut roller = ScriptedRoller::new([0.0, 7.0]);
/// assert_eq!(roller.roll(10.0), 0.0);
/// assert_eq!(roller.roll(10.0), 7.0);
/// assert_eq!(roller.roll(5.0), 0.0);
///
/// let mut clamped = ScriptedRoller::constant(99.0);
/// assert_eq!(clamped.roll(4.0), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedRoller {
    script: VecDeque<f64>,
}

impl ScriptedRoller {
    pub fn new(script: impl IntoIterator<Item = f64>) -> Self {
        let mut script: VecDeque<f64> = script.into_iter().collect();
        if script.is_empty() {
            script.push_back(0.0);
        }
        Self { script }
    }

    /// A roller that always returns `value` (clamped per call).
    pub fn constant(value: f64) -> Self {
        Self::new([value])
    }
}

impl Roller for ScriptedRoller {
    fn roll(&mut self, total: f64) -> f64 {
        let value = self.script.pop_front().unwrap_or(0.0);
        self.script.push_back(value);
        value.floor().max(0.0).min(last_whole_below(total))
    }
}

/// Pick an index from `weights` with probability proportional to its weight.
///
/// Returns `None` when the weights sum to zero or less, or when the walk
/// never passes the roll (only possible with negative weights).
///
/// # Examples
///
/// ```rust
/// use riflecraft::roll::{weighted_pick, ScriptedRoller};
///
/// let weights = [0.0, 2.0, 3.0];
/// assert_eq!(weighted_pick(&weights, &mut ScriptedRoller::constant(0.0)), Some(1));
/// assert_eq!(weighted_pick(&weights, &mut ScriptedRoller::constant(2.0)), Some(2));
/// assert_eq!(weighted_pick(&[0.0, 0.0], &mut ScriptedRoller::constant(0.0)), None);
/// ```
pub fn weighted_pick<R: Roller + ?Sized>(weights: &[f64], roller: &mut R) -> Option<usize> {
    let total: f64 = weights.iter().sum();
    // Also rejects NaN.
    if !(total > 0.0) || !total.is_finite() {
        return None;
    }

    let roll = roller.roll(total);
    let mut cumulative = 0.0;
    for (index, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if roll < cumulative {
            return Some(index);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rng_roll_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let r = rng.roll(3.5);
            assert!((0.0..3.5).contains(&r));
            assert_eq!(r, r.floor());
        }
    }

    #[test]
    fn test_rng_roll_below_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(rng.roll(0.5), 0.0);
        }
    }

    #[test]
    fn test_zero_roll_picks_first_nonzero() {
        let weights = [0.0, 0.0, 0.0, 4.0, 1.0];
        assert_eq!(
            weighted_pick(&weights, &mut ScriptedRoller::constant(0.0)),
            Some(3)
        );
    }

    #[test]
    fn test_roll_boundaries() {
        // cumulative: 2, 5, 6
        let weights = [2.0, 3.0, 1.0];
        let pick = |r: f64| weighted_pick(&weights, &mut ScriptedRoller::constant(r));
        assert_eq!(pick(1.0), Some(0));
        assert_eq!(pick(2.0), Some(1));
        assert_eq!(pick(4.0), Some(1));
        assert_eq!(pick(5.0), Some(2));
    }

    #[test]
    fn test_empty_and_nan_weights() {
        let mut roller = ScriptedRoller::constant(0.0);
        assert_eq!(weighted_pick(&[], &mut roller), None);
        assert_eq!(weighted_pick(&[f64::NAN, 1.0], &mut roller), None);
    }

    #[test]
    fn test_distribution_is_proportional() {
        let weights = [1.0, 3.0];
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut hits = [0u32; 2];
        for _ in 0..4000 {
            if let Some(i) = weighted_pick(&weights, &mut rng) {
                hits[i] += 1;
            }
        }
        // Expect roughly 1000 / 3000.
        assert!(hits[0] > 800 && hits[0] < 1200, "hits = {:?}", hits);
        assert_eq!(hits[0] + hits[1], 4000);
    }
}
