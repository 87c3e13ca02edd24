//! Upgrade catalog value object.

use std::fmt;
use std::hash::{Hash, Hasher};

use sc2kit_sc2api as sc2api;
use serde::Serialize;

use crate::error::ConvertError;
use crate::extractor::{required, try_get};
use crate::{float, render};

/// One entry from the upgrade catalog. Identity and name are required;
/// costs, research time, and the triggering ability are legitimately
/// absent for upgrades the current game version does not expose.
#[derive(Debug, Clone, Serialize)]
pub struct Upgrade {
    upgrade_id: u32,
    name: String,
    mineral_cost: Option<u32>,
    vespene_cost: Option<u32>,
    research_time: Option<f32>,
    ability_id: Option<u32>,
}

impl Upgrade {
    /// Build from a wire upgrade entry, failing with a field-specific
    /// error on any missing required field. Optional fields stay absent
    /// rather than defaulting to zero.
    pub fn from_wire(upgrade: &sc2api::UpgradeData) -> Result<Self, ConvertError> {
        let upgrade_id = required(
            "upgrade id",
            try_get(
                upgrade,
                sc2api::UpgradeData::upgrade_id,
                sc2api::UpgradeData::has_upgrade_id,
            ),
        )?;
        let name = required(
            "name",
            try_get(
                upgrade,
                |u| u.name().to_string(),
                sc2api::UpgradeData::has_name,
            ),
        )?;
        let mineral_cost = try_get(
            upgrade,
            sc2api::UpgradeData::mineral_cost,
            sc2api::UpgradeData::has_mineral_cost,
        );
        let vespene_cost = try_get(
            upgrade,
            sc2api::UpgradeData::vespene_cost,
            sc2api::UpgradeData::has_vespene_cost,
        );
        let research_time = try_get(
            upgrade,
            sc2api::UpgradeData::research_time,
            sc2api::UpgradeData::has_research_time,
        );
        let ability_id = try_get(
            upgrade,
            sc2api::UpgradeData::ability_id,
            sc2api::UpgradeData::has_ability_id,
        );

        Ok(Self {
            upgrade_id,
            name,
            mineral_cost,
            vespene_cost,
            research_time,
            ability_id,
        })
    }

    pub fn upgrade_id(&self) -> u32 {
        self.upgrade_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mineral_cost(&self) -> Option<u32> {
        self.mineral_cost
    }

    pub fn vespene_cost(&self) -> Option<u32> {
        self.vespene_cost
    }

    pub fn research_time(&self) -> Option<f32> {
        self.research_time
    }

    pub fn ability_id(&self) -> Option<u32> {
        self.ability_id
    }
}

impl TryFrom<&sc2api::UpgradeData> for Upgrade {
    type Error = ConvertError;

    fn try_from(upgrade: &sc2api::UpgradeData) -> Result<Self, Self::Error> {
        Self::from_wire(upgrade)
    }
}

impl PartialEq for Upgrade {
    fn eq(&self, other: &Self) -> bool {
        self.upgrade_id == other.upgrade_id
            && self.name == other.name
            && self.mineral_cost == other.mineral_cost
            && self.vespene_cost == other.vespene_cost
            && float::eq_opt(self.research_time, other.research_time)
            && self.ability_id == other.ability_id
    }
}

impl Eq for Upgrade {}

impl Hash for Upgrade {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.upgrade_id.hash(state);
        self.name.hash(state);
        self.mineral_cost.hash(state);
        self.vespene_cost.hash(state);
        float::hash_opt(self.research_time, state);
        self.ability_id.hash(state);
    }
}

impl fmt::Display for Upgrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::json(self))
    }
}
