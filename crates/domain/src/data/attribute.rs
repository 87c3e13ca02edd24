//! Unit attribute enumeration (the classes damage bonuses key on).

use sc2kit_sc2api as sc2api;
use serde::Serialize;

use crate::error::ConvertError;

/// Attribute a unit can carry (Armored, Biological, ...). Damage bonuses
/// apply against units with a matching attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Light,
    Armored,
    Biological,
    Mechanical,
    Robotic,
    Psionic,
    Massive,
    Structure,
    Hover,
    Heroic,
    Summoned,
}

impl Attribute {
    /// Map a raw wire discriminant. Unknown discriminants are rejected
    /// fail-closed as [`ConvertError::UnrecognizedEnum`].
    pub fn from_raw(raw: i32) -> Result<Self, ConvertError> {
        sc2api::UnitAttribute::try_from(raw)
            .map(Self::from)
            .map_err(|value| ConvertError::unrecognized("attribute", value))
    }
}

impl From<sc2api::UnitAttribute> for Attribute {
    fn from(attribute: sc2api::UnitAttribute) -> Self {
        match attribute {
            sc2api::UnitAttribute::Light => Self::Light,
            sc2api::UnitAttribute::Armored => Self::Armored,
            sc2api::UnitAttribute::Biological => Self::Biological,
            sc2api::UnitAttribute::Mechanical => Self::Mechanical,
            sc2api::UnitAttribute::Robotic => Self::Robotic,
            sc2api::UnitAttribute::Psionic => Self::Psionic,
            sc2api::UnitAttribute::Massive => Self::Massive,
            sc2api::UnitAttribute::Structure => Self::Structure,
            sc2api::UnitAttribute::Hover => Self::Hover,
            sc2api::UnitAttribute::Heroic => Self::Heroic,
            sc2api::UnitAttribute::Summoned => Self::Summoned,
        }
    }
}
