//! Wire messages from the SC2 API `query` proto: pathing and ability
//! availability responses.

use serde::{Deserialize, Serialize};

/// Wire-format answer to a pathing query.
///
/// `distance` is legitimately absent when no path exists; absence is not
/// the same as a zero-length path.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseQueryPathing {
    pub distance: Option<f32>,
}

impl ResponseQueryPathing {
    pub fn has_distance(&self) -> bool {
        self.distance.is_some()
    }

    pub fn distance(&self) -> f32 {
        self.distance.unwrap_or_default()
    }
}

/// Wire-format entry in an ability availability response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AvailableAbility {
    pub ability_id: Option<u32>,
    /// Whether the ability needs a point target; the protocol leaves this
    /// unset when no target is needed.
    pub requires_point: Option<bool>,
}

impl AvailableAbility {
    pub fn has_ability_id(&self) -> bool {
        self.ability_id.is_some()
    }

    pub fn ability_id(&self) -> u32 {
        self.ability_id.unwrap_or_default()
    }

    pub fn has_requires_point(&self) -> bool {
        self.requires_point.is_some()
    }

    pub fn requires_point(&self) -> bool {
        self.requires_point.unwrap_or_default()
    }
}
