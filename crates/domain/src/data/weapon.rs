//! Weapon value object and its target-type enumeration.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use sc2kit_sc2api as sc2api;
use serde::Serialize;

use crate::data::DamageBonus;
use crate::error::ConvertError;
use crate::extractor::{required, try_get};
use crate::{float, render};

/// What a weapon is allowed to shoot at.
///
/// There is deliberately no "unknown" variant: an unmapped wire value is a
/// conversion error, never a catch-all the rest of the client has to
/// handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    Ground,
    Air,
    Any,
}

impl TargetType {
    /// Map a raw wire discriminant. Unknown discriminants are rejected
    /// fail-closed as [`ConvertError::UnrecognizedEnum`].
    pub fn from_raw(raw: i32) -> Result<Self, ConvertError> {
        sc2api::WeaponTargetType::try_from(raw)
            .map(Self::from)
            .map_err(|value| ConvertError::unrecognized("target type", value))
    }
}

impl From<sc2api::WeaponTargetType> for TargetType {
    fn from(target_type: sc2api::WeaponTargetType) -> Self {
        match target_type {
            sc2api::WeaponTargetType::Ground => Self::Ground,
            sc2api::WeaponTargetType::Air => Self::Air,
            sc2api::WeaponTargetType::Any => Self::Any,
        }
    }
}

/// A unit's weapon: target class, damage profile, and attack timing.
///
/// All scalar fields are required on the wire; the damage bonus list
/// defaults to an empty set. Once constructed the value is fully valid;
/// there is no partially-populated state.
#[derive(Debug, Clone, Serialize)]
pub struct Weapon {
    target_type: TargetType,
    damage: f32,
    damage_bonuses: BTreeSet<DamageBonus>,
    /// Number of hits per attack (e.g. Colossus has 2 beams).
    attacks: u32,
    range: f32,
    /// Time between attacks.
    speed: f32,
}

impl Weapon {
    /// Build from a wire weapon message.
    ///
    /// Each required field is checked independently, so the error always
    /// names exactly the field that was missing.
    pub fn from_wire(weapon: &sc2api::Weapon) -> Result<Self, ConvertError> {
        let target_type = TargetType::from_raw(required(
            "target type",
            try_get(weapon, sc2api::Weapon::r#type, sc2api::Weapon::has_type),
        )?)?;
        let damage = required(
            "damage",
            try_get(weapon, sc2api::Weapon::damage, sc2api::Weapon::has_damage),
        )?;
        let damage_bonuses = weapon
            .damage_bonus
            .iter()
            .map(DamageBonus::from_wire)
            .collect::<Result<BTreeSet<_>, _>>()?;
        let attacks = required(
            "attacks",
            try_get(weapon, sc2api::Weapon::attacks, sc2api::Weapon::has_attacks),
        )?;
        let range = required(
            "range",
            try_get(weapon, sc2api::Weapon::range, sc2api::Weapon::has_range),
        )?;
        let speed = required(
            "speed",
            try_get(weapon, sc2api::Weapon::speed, sc2api::Weapon::has_speed),
        )?;

        Ok(Self {
            target_type,
            damage,
            damage_bonuses,
            attacks,
            range,
            speed,
        })
    }

    pub fn target_type(&self) -> TargetType {
        self.target_type
    }

    pub fn damage(&self) -> f32 {
        self.damage
    }

    pub fn damage_bonuses(&self) -> &BTreeSet<DamageBonus> {
        &self.damage_bonuses
    }

    pub fn attacks(&self) -> u32 {
        self.attacks
    }

    pub fn range(&self) -> f32 {
        self.range
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }
}

impl TryFrom<&sc2api::Weapon> for Weapon {
    type Error = ConvertError;

    fn try_from(weapon: &sc2api::Weapon) -> Result<Self, Self::Error> {
        Self::from_wire(weapon)
    }
}

impl PartialEq for Weapon {
    fn eq(&self, other: &Self) -> bool {
        self.target_type == other.target_type
            && float::eq(self.damage, other.damage)
            && self.attacks == other.attacks
            && float::eq(self.range, other.range)
            && float::eq(self.speed, other.speed)
            && self.damage_bonuses == other.damage_bonuses
    }
}

impl Eq for Weapon {}

impl Hash for Weapon {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.target_type.hash(state);
        float::hash(self.damage, state);
        self.damage_bonuses.hash(state);
        self.attacks.hash(state);
        float::hash(self.range, state);
        float::hash(self.speed, state);
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::json(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Attribute;
    use std::collections::hash_map::DefaultHasher;

    fn wire_weapon() -> sc2api::Weapon {
        sc2api::Weapon {
            r#type: Some(1),
            damage: Some(10.0),
            damage_bonus: vec![sc2api::DamageBonus {
                attribute: Some(2),
                bonus: Some(5.0),
            }],
            attacks: Some(2),
            range: Some(5.0),
            speed: Some(1.0),
        }
    }

    fn hash_of(weapon: &Weapon) -> u64 {
        let mut hasher = DefaultHasher::new();
        weapon.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_converts_all_fields() {
        let weapon = Weapon::from_wire(&wire_weapon()).expect("valid wire weapon");
        assert_eq!(weapon.target_type(), TargetType::Ground);
        assert_eq!(weapon.damage(), 10.0);
        assert_eq!(weapon.damage_bonuses().len(), 1);
        assert_eq!(weapon.attacks(), 2);
        assert_eq!(weapon.range(), 5.0);
        assert_eq!(weapon.speed(), 1.0);
    }

    #[test]
    fn test_maps_target_types() {
        let expected = [
            (1, TargetType::Ground),
            (2, TargetType::Air),
            (3, TargetType::Any),
        ];
        for (raw, target_type) in expected {
            assert_eq!(TargetType::from_raw(raw), Ok(target_type));
        }
    }

    #[test]
    fn test_fails_closed_on_unknown_target_type() {
        assert_eq!(
            TargetType::from_raw(9),
            Err(ConvertError::unrecognized("target type", 9))
        );
        let wire = sc2api::Weapon {
            r#type: Some(9),
            ..wire_weapon()
        };
        assert_eq!(
            Weapon::from_wire(&wire),
            Err(ConvertError::unrecognized("target type", 9))
        );
    }

    #[test]
    fn test_fails_when_target_type_is_not_provided() {
        let wire = sc2api::Weapon {
            r#type: None,
            ..wire_weapon()
        };
        let err = Weapon::from_wire(&wire).expect_err("target type absent");
        assert_eq!(err, ConvertError::missing("target type"));
        assert_eq!(err.to_string(), "target type is required");
    }

    #[test]
    fn test_fails_when_damage_is_not_provided() {
        let wire = sc2api::Weapon {
            damage: None,
            ..wire_weapon()
        };
        let err = Weapon::from_wire(&wire).expect_err("damage absent");
        assert_eq!(err.to_string(), "damage is required");
    }

    #[test]
    fn test_fails_when_attacks_is_not_provided() {
        let wire = sc2api::Weapon {
            attacks: None,
            ..wire_weapon()
        };
        assert_eq!(
            Weapon::from_wire(&wire),
            Err(ConvertError::missing("attacks"))
        );
    }

    #[test]
    fn test_fails_when_range_is_not_provided() {
        let wire = sc2api::Weapon {
            range: None,
            ..wire_weapon()
        };
        assert_eq!(
            Weapon::from_wire(&wire),
            Err(ConvertError::missing("range"))
        );
    }

    #[test]
    fn test_fails_when_speed_is_not_provided() {
        let wire = sc2api::Weapon {
            speed: None,
            ..wire_weapon()
        };
        assert_eq!(
            Weapon::from_wire(&wire),
            Err(ConvertError::missing("speed"))
        );
    }

    #[test]
    fn test_has_empty_set_when_damage_bonuses_are_not_provided() {
        let wire = sc2api::Weapon {
            damage_bonus: vec![],
            ..wire_weapon()
        };
        let weapon = Weapon::from_wire(&wire).expect("valid wire weapon");
        assert!(weapon.damage_bonuses().is_empty());
    }

    #[test]
    fn test_duplicate_damage_bonuses_collapse() {
        let mut wire = wire_weapon();
        wire.damage_bonus.push(sc2api::DamageBonus {
            attribute: Some(2),
            bonus: Some(5.0),
        });
        let weapon = Weapon::from_wire(&wire).expect("valid wire weapon");
        assert_eq!(weapon.damage_bonuses().len(), 1);
    }

    #[test]
    fn test_invalid_damage_bonus_fails_whole_conversion() {
        let mut wire = wire_weapon();
        wire.damage_bonus.push(sc2api::DamageBonus {
            attribute: Some(2),
            bonus: None,
        });
        assert_eq!(
            Weapon::from_wire(&wire),
            Err(ConvertError::missing("bonus"))
        );
    }

    #[test]
    fn test_equal_wire_data_yields_equal_values_and_hashes() {
        let a = Weapon::from_wire(&wire_weapon()).expect("valid wire weapon");
        let b = Weapon::from_wire(&wire_weapon()).expect("valid wire weapon");
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_one_scalar_difference_breaks_equality() {
        let a = Weapon::from_wire(&wire_weapon()).expect("valid wire weapon");
        let b = Weapon::from_wire(&sc2api::Weapon {
            range: Some(6.0),
            ..wire_weapon()
        })
        .expect("valid wire weapon");
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_is_deterministic_json() {
        let weapon = Weapon::from_wire(&wire_weapon()).expect("valid wire weapon");
        assert_eq!(
            weapon.to_string(),
            concat!(
                r#"{"target_type":"ground","damage":10.0,"#,
                r#""damage_bonuses":[{"attribute":"armored","bonus":5.0}],"#,
                r#""attacks":2,"range":5.0,"speed":1.0}"#,
            )
        );
        let bonus = weapon
            .damage_bonuses()
            .iter()
            .next()
            .expect("one bonus entry");
        assert_eq!(bonus.attribute(), Attribute::Armored);
    }
}
