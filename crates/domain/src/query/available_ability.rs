//! Available ability value object.

use std::fmt;
use std::hash::Hash;

use sc2kit_sc2api as sc2api;
use serde::Serialize;

use crate::error::ConvertError;
use crate::extractor::{required, try_get};
use crate::render;

/// One ability a unit can currently use. The protocol leaves
/// `requires_point` unset when the ability needs no point target, so an
/// absent field means `false` here rather than "unknown".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AvailableAbility {
    ability_id: u32,
    requires_point: bool,
}

impl AvailableAbility {
    /// Build from a wire available-ability entry.
    pub fn from_wire(ability: &sc2api::AvailableAbility) -> Result<Self, ConvertError> {
        let ability_id = required(
            "ability id",
            try_get(
                ability,
                sc2api::AvailableAbility::ability_id,
                sc2api::AvailableAbility::has_ability_id,
            ),
        )?;
        let requires_point = try_get(
            ability,
            sc2api::AvailableAbility::requires_point,
            sc2api::AvailableAbility::has_requires_point,
        )
        .unwrap_or_default();

        Ok(Self {
            ability_id,
            requires_point,
        })
    }

    pub fn ability_id(&self) -> u32 {
        self.ability_id
    }

    pub fn requires_point(&self) -> bool {
        self.requires_point
    }
}

impl TryFrom<&sc2api::AvailableAbility> for AvailableAbility {
    type Error = ConvertError;

    fn try_from(ability: &sc2api::AvailableAbility) -> Result<Self, Self::Error> {
        Self::from_wire(ability)
    }
}

impl fmt::Display for AvailableAbility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::json(self))
    }
}
