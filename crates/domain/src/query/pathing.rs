//! Pathing query result value object.

use std::fmt;
use std::hash::{Hash, Hasher};

use sc2kit_sc2api as sc2api;
use serde::Serialize;

use crate::extractor::try_get;
use crate::{float, render};

/// Result of a pathing query. `distance` is absent when no path exists;
/// absence is preserved as `None`, never collapsed to `0.0`.
#[derive(Debug, Clone, Serialize)]
pub struct Pathing {
    distance: Option<f32>,
}

impl Pathing {
    /// Build from a wire pathing response. Every field is optional, so
    /// conversion cannot fail.
    pub fn from_wire(pathing: &sc2api::ResponseQueryPathing) -> Self {
        let distance = try_get(
            pathing,
            sc2api::ResponseQueryPathing::distance,
            sc2api::ResponseQueryPathing::has_distance,
        );
        Self { distance }
    }

    pub fn distance(&self) -> Option<f32> {
        self.distance
    }
}

impl From<&sc2api::ResponseQueryPathing> for Pathing {
    fn from(pathing: &sc2api::ResponseQueryPathing) -> Self {
        Self::from_wire(pathing)
    }
}

impl PartialEq for Pathing {
    fn eq(&self, other: &Self) -> bool {
        float::eq_opt(self.distance, other.distance)
    }
}

impl Eq for Pathing {}

impl Hash for Pathing {
    fn hash<H: Hasher>(&self, state: &mut H) {
        float::hash_opt(self.distance, state);
    }
}

impl fmt::Display for Pathing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::json(self))
    }
}
