//! Immutable domain value objects for SC2 game data.
//!
//! This crate is the translation layer between the raw wire messages of
//! `sc2kit-sc2api` and the rest of the client library. Each domain type is
//! built by a single fallible `from_wire` factory that enforces the
//! required/optional field policy, maps wire enums fail-closed, and never
//! lets a partially-populated value escape. Conversion is pure: no I/O, no
//! logging, no shared state, safe to run from any thread.

pub mod data;
pub mod error;
pub mod extractor;
pub mod query;
pub mod render;

pub(crate) mod float;

pub use data::{Attribute, DamageBonus, TargetType, Upgrade, Weapon};
pub use error::ConvertError;
pub use query::{AvailableAbility, Pathing};
