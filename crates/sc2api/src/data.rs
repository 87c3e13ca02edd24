//! Wire messages from the SC2 API `data` proto: weapons, damage bonuses,
//! and upgrade catalog entries.

use serde::{Deserialize, Serialize};

/// Raw wire enum for a weapon's legal target class.
///
/// Discriminants match the proto2 schema (`Ground = 1`). A raw `i32` that
/// is none of these fails `TryFrom` and is handed back to the caller, who
/// decides how loudly to reject it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum WeaponTargetType {
    Ground = 1,
    Air = 2,
    Any = 3,
}

impl TryFrom<i32> for WeaponTargetType {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Ground),
            2 => Ok(Self::Air),
            3 => Ok(Self::Any),
            other => Err(other),
        }
    }
}

/// Raw wire enum for a unit attribute (the classes damage bonuses key on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum UnitAttribute {
    Light = 1,
    Armored = 2,
    Biological = 3,
    Mechanical = 4,
    Robotic = 5,
    Psionic = 6,
    Massive = 7,
    Structure = 8,
    Hover = 9,
    Heroic = 10,
    Summoned = 11,
}

impl TryFrom<i32> for UnitAttribute {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Light),
            2 => Ok(Self::Armored),
            3 => Ok(Self::Biological),
            4 => Ok(Self::Mechanical),
            5 => Ok(Self::Robotic),
            6 => Ok(Self::Psionic),
            7 => Ok(Self::Massive),
            8 => Ok(Self::Structure),
            9 => Ok(Self::Hover),
            10 => Ok(Self::Heroic),
            11 => Ok(Self::Summoned),
            other => Err(other),
        }
    }
}

/// Wire-format weapon entry from unit type data.
///
/// Every scalar field is optional on the wire; the `Option` is the
/// presence bit. The `has_*`/accessor pairs mirror the generated proto2
/// API, where an accessor returns the field default even when the field
/// was never set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Weapon {
    /// Raw `WeaponTargetType` discriminant.
    pub r#type: Option<i32>,
    pub damage: Option<f32>,
    /// Situational bonus damage entries; may be empty.
    pub damage_bonus: Vec<DamageBonus>,
    /// Number of hits per attack (e.g. Colossus has 2 beams).
    pub attacks: Option<u32>,
    pub range: Option<f32>,
    /// Time between attacks.
    pub speed: Option<f32>,
}

impl Weapon {
    pub fn has_type(&self) -> bool {
        self.r#type.is_some()
    }

    pub fn r#type(&self) -> i32 {
        self.r#type.unwrap_or_default()
    }

    pub fn has_damage(&self) -> bool {
        self.damage.is_some()
    }

    pub fn damage(&self) -> f32 {
        self.damage.unwrap_or_default()
    }

    pub fn has_attacks(&self) -> bool {
        self.attacks.is_some()
    }

    pub fn attacks(&self) -> u32 {
        self.attacks.unwrap_or_default()
    }

    pub fn has_range(&self) -> bool {
        self.range.is_some()
    }

    pub fn range(&self) -> f32 {
        self.range.unwrap_or_default()
    }

    pub fn has_speed(&self) -> bool {
        self.speed.is_some()
    }

    pub fn speed(&self) -> f32 {
        self.speed.unwrap_or_default()
    }
}

/// Wire-format damage bonus: extra damage against one unit attribute.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DamageBonus {
    /// Raw `UnitAttribute` discriminant.
    pub attribute: Option<i32>,
    pub bonus: Option<f32>,
}

impl DamageBonus {
    pub fn has_attribute(&self) -> bool {
        self.attribute.is_some()
    }

    pub fn attribute(&self) -> i32 {
        self.attribute.unwrap_or_default()
    }

    pub fn has_bonus(&self) -> bool {
        self.bonus.is_some()
    }

    pub fn bonus(&self) -> f32 {
        self.bonus.unwrap_or_default()
    }
}

/// Wire-format upgrade catalog entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpgradeData {
    pub upgrade_id: Option<u32>,
    pub name: Option<String>,
    pub mineral_cost: Option<u32>,
    pub vespene_cost: Option<u32>,
    pub research_time: Option<f32>,
    pub ability_id: Option<u32>,
}

impl UpgradeData {
    pub fn has_upgrade_id(&self) -> bool {
        self.upgrade_id.is_some()
    }

    pub fn upgrade_id(&self) -> u32 {
        self.upgrade_id.unwrap_or_default()
    }

    pub fn has_name(&self) -> bool {
        self.name.is_some()
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn has_mineral_cost(&self) -> bool {
        self.mineral_cost.is_some()
    }

    pub fn mineral_cost(&self) -> u32 {
        self.mineral_cost.unwrap_or_default()
    }

    pub fn has_vespene_cost(&self) -> bool {
        self.vespene_cost.is_some()
    }

    pub fn vespene_cost(&self) -> u32 {
        self.vespene_cost.unwrap_or_default()
    }

    pub fn has_research_time(&self) -> bool {
        self.research_time.is_some()
    }

    pub fn research_time(&self) -> f32 {
        self.research_time.unwrap_or_default()
    }

    pub fn has_ability_id(&self) -> bool {
        self.ability_id.is_some()
    }

    pub fn ability_id(&self) -> u32 {
        self.ability_id.unwrap_or_default()
    }
}
