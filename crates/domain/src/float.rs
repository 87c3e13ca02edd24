//! Exact floating-point comparison helpers.
//!
//! Domain equality uses the IEEE 754 total order (no epsilon tolerance),
//! and hashing uses the raw bit pattern, so equal values always hash
//! identically and `Eq`/`Ord` impls over `f32` fields stay lawful.

use std::hash::{Hash, Hasher};

pub(crate) fn eq(a: f32, b: f32) -> bool {
    a.total_cmp(&b).is_eq()
}

pub(crate) fn eq_opt(a: Option<f32>, b: Option<f32>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

pub(crate) fn hash<H: Hasher>(value: f32, state: &mut H) {
    value.to_bits().hash(state);
}

pub(crate) fn hash_opt<H: Hasher>(value: Option<f32>, state: &mut H) {
    value.map(f32::to_bits).hash(state);
}
