//! Canonical text rendering for domain value objects.
//!
//! `Display` for every domain type goes through [`json`], which produces a
//! deterministic JSON string: struct fields serialize in declaration order
//! and set-valued fields iterate in their `BTreeSet` order. This rendering
//! is for diagnostics and logs, not a wire format.

use serde::Serialize;

/// Render any domain value object as canonical JSON.
pub fn json<T: Serialize>(value: &T) -> String {
    // Plain data types cannot fail to serialize; the fallback keeps
    // Display total without panicking.
    serde_json::to_string(value).unwrap_or_else(|_| String::from("{}"))
}
