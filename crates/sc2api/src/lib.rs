//! Wire-format messages for the SC2 API protocol surface.
//!
//! These types model the relevant subset of the s2clientprotocol proto2
//! schema as it looks after protobuf code generation: every optional field
//! is an `Option<T>` carrying the presence bit, paired with a
//! default-returning accessor and a `has_*` predicate. Enum fields are
//! stored as raw `i32` discriminants exactly as they arrive on the wire;
//! typed access goes through `TryFrom<i32>` so that a discriminant from a
//! newer protocol revision stays representable (and rejectable) instead of
//! being silently coerced.
//!
//! This crate does no validation beyond enum discriminant lookup. Deciding
//! which fields are required, and what absence means, belongs to
//! `sc2kit-domain`.

pub mod data;
pub mod query;

pub use data::{DamageBonus, UnitAttribute, UpgradeData, Weapon, WeaponTargetType};
pub use query::{AvailableAbility, ResponseQueryPathing};
