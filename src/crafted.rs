//! Crafted rifle results.

use serde::{Deserialize, Serialize, Serializer};

/// Largest magnitude at which every whole `f64` is exactly an integer.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Write whole pool values as JSON integers and everything else as floats.
fn serialize_points<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() <= EXACT_INTEGER_LIMIT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// The outcome of one craft.
///
/// Serialized with camelCase keys, the shape clients receive. Whole pool
/// values are written without a trailing `.0`.
///
/// # Examples
///
/// ```rust
/// use riflecraft::CraftedRifle;
///
/// let rifle = CraftedRifle {
///     stat_points: 65.0,
///     effect_points: 30.5,
///     elemental_chance_points: 10.0,
///     elemental_effects: vec!["Ignite".to_string()],
/// };
/// let json = serde_json::to_string(&rifle).unwrap();
/// assert!(json.contains("\"statPoints\":65,"));
/// assert!(json.contains("\"effectPoints\":30.5,"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CraftedRifle {
    #[serde(serialize_with = "serialize_points")]
    pub stat_points: f64,
    #[serde(serialize_with = "serialize_points")]
    pub effect_points: f64,
    #[serde(serialize_with = "serialize_points")]
    pub elemental_chance_points: f64,

    /// Effect names in slot order, at most three.
    pub elemental_effects: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_keys() {
        let json = r#"{"statPoints":1,"effectPoints":2,"elementalChancePoints":3,"elementalEffects":[]}"#;
        let rifle: CraftedRifle = serde_json::from_str(json).unwrap();
        assert_eq!(rifle.effect_points, 2.0);
        assert_eq!(serde_json::to_string(&rifle).unwrap(), json);
    }

    #[test]
    fn test_fractional_and_huge_points() {
        let rifle = CraftedRifle {
            stat_points: 12.5,
            effect_points: -3.0,
            elemental_chance_points: 1.0e20,
            elemental_effects: Vec::new(),
        };
        let value = serde_json::to_value(&rifle).unwrap();
        assert_eq!(value["statPoints"], 12.5);
        assert_eq!(value["effectPoints"], -3);
        assert!(value["effectPoints"].is_i64());
        assert!(value["elementalChancePoints"].is_f64());
    }
}
