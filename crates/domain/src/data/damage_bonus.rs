//! Damage bonus value object: extra damage against one unit attribute.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use sc2kit_sc2api as sc2api;
use serde::Serialize;

use crate::data::Attribute;
use crate::error::ConvertError;
use crate::extractor::{required, try_get};
use crate::{float, render};

/// Extra weapon damage applied against units carrying a given attribute.
/// Both fields are required on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct DamageBonus {
    attribute: Attribute,
    bonus: f32,
}

impl DamageBonus {
    /// Build from a wire damage bonus, failing with a field-specific error
    /// on any missing required field.
    pub fn from_wire(bonus: &sc2api::DamageBonus) -> Result<Self, ConvertError> {
        let attribute = Attribute::from_raw(required(
            "attribute",
            try_get(
                bonus,
                sc2api::DamageBonus::attribute,
                sc2api::DamageBonus::has_attribute,
            ),
        )?)?;
        let bonus = required(
            "bonus",
            try_get(
                bonus,
                sc2api::DamageBonus::bonus,
                sc2api::DamageBonus::has_bonus,
            ),
        )?;
        Ok(Self { attribute, bonus })
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    pub fn bonus(&self) -> f32 {
        self.bonus
    }
}

impl TryFrom<&sc2api::DamageBonus> for DamageBonus {
    type Error = ConvertError;

    fn try_from(bonus: &sc2api::DamageBonus) -> Result<Self, Self::Error> {
        Self::from_wire(bonus)
    }
}

impl PartialEq for DamageBonus {
    fn eq(&self, other: &Self) -> bool {
        self.attribute == other.attribute && float::eq(self.bonus, other.bonus)
    }
}

impl Eq for DamageBonus {}

// Total order (attribute, then bonus bit pattern) so bonuses can live in a
// BTreeSet with deterministic iteration. Consistent with Eq above.
impl Ord for DamageBonus {
    fn cmp(&self, other: &Self) -> Ordering {
        self.attribute
            .cmp(&other.attribute)
            .then_with(|| self.bonus.total_cmp(&other.bonus))
    }
}

impl PartialOrd for DamageBonus {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for DamageBonus {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.attribute.hash(state);
        float::hash(self.bonus, state);
    }
}

impl fmt::Display for DamageBonus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::json(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::collections::hash_map::DefaultHasher;

    fn wire_damage_bonus() -> sc2api::DamageBonus {
        sc2api::DamageBonus {
            attribute: Some(2),
            bonus: Some(5.0),
        }
    }

    fn hash_of(bonus: &DamageBonus) -> u64 {
        let mut hasher = DefaultHasher::new();
        bonus.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_converts_all_fields() {
        let bonus = DamageBonus::from_wire(&wire_damage_bonus()).expect("valid wire bonus");
        assert_eq!(bonus.attribute(), Attribute::Armored);
        assert_eq!(bonus.bonus(), 5.0);
    }

    #[test]
    fn test_fails_when_attribute_is_not_provided() {
        let wire = sc2api::DamageBonus {
            attribute: None,
            ..wire_damage_bonus()
        };
        assert_eq!(
            DamageBonus::from_wire(&wire),
            Err(ConvertError::missing("attribute"))
        );
    }

    #[test]
    fn test_fails_when_bonus_is_not_provided() {
        let wire = sc2api::DamageBonus {
            bonus: None,
            ..wire_damage_bonus()
        };
        assert_eq!(
            DamageBonus::from_wire(&wire),
            Err(ConvertError::missing("bonus"))
        );
    }

    #[test]
    fn test_fails_closed_on_unknown_attribute() {
        let wire = sc2api::DamageBonus {
            attribute: Some(99),
            ..wire_damage_bonus()
        };
        assert_eq!(
            DamageBonus::from_wire(&wire),
            Err(ConvertError::unrecognized("attribute", 99))
        );
    }

    #[test]
    fn test_equal_values_are_equal_and_hash_alike() {
        let a = DamageBonus::from_wire(&wire_damage_bonus()).expect("valid wire bonus");
        let b = DamageBonus::from_wire(&wire_damage_bonus()).expect("valid wire bonus");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_one_field_difference_breaks_equality() {
        let a = DamageBonus::from_wire(&wire_damage_bonus()).expect("valid wire bonus");
        let b = DamageBonus::from_wire(&sc2api::DamageBonus {
            bonus: Some(6.0),
            ..wire_damage_bonus()
        })
        .expect("valid wire bonus");
        assert_ne!(a, b);
    }

    #[test]
    fn test_duplicates_collapse_in_a_set() {
        let a = DamageBonus::from_wire(&wire_damage_bonus()).expect("valid wire bonus");
        let b = DamageBonus::from_wire(&wire_damage_bonus()).expect("valid wire bonus");
        let set: BTreeSet<DamageBonus> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_display_is_canonical_json() {
        let bonus = DamageBonus::from_wire(&wire_damage_bonus()).expect("valid wire bonus");
        assert_eq!(bonus.to_string(), r#"{"attribute":"armored","bonus":5.0}"#);
    }
}
