//! Field extraction and the required/optional validation policy
//!
//! Proto2-style accessors return a field's default value even when the
//! field was never set, so the accessor alone can never prove presence.
//! `try_get` pairs an accessor with its presence predicate and only
//! consults the accessor when the predicate holds; `required` then resolves
//! true absence into a field-specific [`ConvertError`].

use crate::error::ConvertError;

/// Extract a field from a wire message, trusting the presence predicate
/// over the accessor. Returns `None` only on true absence.
pub fn try_get<M, T>(
    message: &M,
    getter: impl FnOnce(&M) -> T,
    presence: impl FnOnce(&M) -> bool,
) -> Option<T> {
    if presence(message) {
        Some(getter(message))
    } else {
        None
    }
}

/// Resolve an extracted field under the required-field policy: absence
/// becomes a [`ConvertError::MissingField`] naming exactly `field`.
///
/// Also used for required nested messages, e.g.
/// `required("sc2api weapon", unit.weapon.as_ref())`.
pub fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ConvertError> {
    value.ok_or(ConvertError::MissingField(field))
}
