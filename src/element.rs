//! Elemental effect kinds.
//!
//! There are exactly sixteen elemental effects. A material's elemental
//! distribution is indexed by the position of each effect in
//! [`ElementalEffect::ALL`].

/// Number of elemental effect kinds.
pub const ELEMENT_COUNT: usize = 16;

/// Name reported when an effect index falls outside the table.
pub const UNKNOWN_EFFECT: &str = "Unknown Effect";

/// An elemental effect that can manifest on a crafted rifle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementalEffect {
    Bleed,
    Enhance,
    Ignite,
    Drenched,
    Accelerate,
    ArmorBreak,
    Surge,
    Cascade,
    Mark,
    Slow,
    Explosion,
    Swirl,
    Shatter,
    Metallicize,
    Shock,
    Consume,
}

impl ElementalEffect {
    /// Every effect, in distribution-index order.
    pub const ALL: [ElementalEffect; ELEMENT_COUNT] = [
        ElementalEffect::Bleed,
        ElementalEffect::Enhance,
        ElementalEffect::Ignite,
        ElementalEffect::Drenched,
        ElementalEffect::Accelerate,
        ElementalEffect::ArmorBreak,
        ElementalEffect::Surge,
        ElementalEffect::Cascade,
        ElementalEffect::Mark,
        ElementalEffect::Slow,
        ElementalEffect::Explosion,
        ElementalEffect::Swirl,
        ElementalEffect::Shatter,
        ElementalEffect::Metallicize,
        ElementalEffect::Shock,
        ElementalEffect::Consume,
    ];

    /// Look up the effect at a distribution index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use riflecraft::ElementalEffect;
    ///
    /// assert_eq!(ElementalEffect::from_index(5), Some(ElementalEffect::ArmorBreak));
    /// assert_eq!(ElementalEffect::from_index(16), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this effect in a distribution.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name of the effect.
    pub fn name(self) -> &'static str {
        match self {
            ElementalEffect::Bleed => "Bleed",
            ElementalEffect::Enhance => "Enhance",
            ElementalEffect::Ignite => "Ignite",
            ElementalEffect::Drenched => "Drenched",
            ElementalEffect::Accelerate => "Accelerate",
            ElementalEffect::ArmorBreak => "Armor Break",
            ElementalEffect::Surge => "Surge",
            ElementalEffect::Cascade => "Cascade",
            ElementalEffect::Mark => "Mark",
            ElementalEffect::Slow => "Slow",
            ElementalEffect::Explosion => "Explosion",
            ElementalEffect::Swirl => "Swirl",
            ElementalEffect::Shatter => "Shatter",
            ElementalEffect::Metallicize => "Metallicize",
            ElementalEffect::Shock => "Shock",
            ElementalEffect::Consume => "Consume",
        }
    }
}

impl std::fmt::Display for ElementalEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a distribution index to an effect name.
///
/// Out-of-range indices map to [`UNKNOWN_EFFECT`] instead of failing.
///
/// # Examples
///
/// ```rust
/// use riflecraft::element::effect_name;
///
/// assert_eq!(effect_name(0), "Bleed");
/// assert_eq!(effect_name(15), "Consume");
/// assert_eq!(effect_name(99), "Unknown Effect");
/// ```
pub fn effect_name(index: usize) -> &'static str {
    ElementalEffect::from_index(index)
        .map(ElementalEffect::name)
        .unwrap_or(UNKNOWN_EFFECT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order() {
        let names: Vec<&str> = (0..ELEMENT_COUNT).map(effect_name).collect();
        assert_eq!(
            names,
            vec![
                "Bleed",
                "Enhance",
                "Ignite",
                "Drenched",
                "Accelerate",
                "Armor Break",
                "Surge",
                "Cascade",
                "Mark",
                "Slow",
                "Explosion",
                "Swirl",
                "Shatter",
                "Metallicize",
                "Shock",
                "Consume",
            ]
        );
    }

    #[test]
    fn test_index_round_trip() {
        for (i, effect) in ElementalEffect::ALL.iter().enumerate() {
            assert_eq!(effect.index(), i);
        }
    }

    #[test]
    fn test_unknown_index() {
        assert_eq!(effect_name(ELEMENT_COUNT), UNKNOWN_EFFECT);
        assert_eq!(effect_name(usize::MAX), UNKNOWN_EFFECT);
    }
}
