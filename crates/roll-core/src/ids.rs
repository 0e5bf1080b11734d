//! Identifier prefixes.
//!
//! IDs are `{prefix}-{16 hex chars}`, generated by the database layer.

pub const PREFIX_USER: &str = "usr";
pub const PREFIX_CLASS: &str = "cls";
pub const PREFIX_ATTENDANCE: &str = "att";

pub const ALL_PREFIXES: &[&str] = &[PREFIX_USER, PREFIX_CLASS, PREFIX_ATTENDANCE];

/// Check whether `id` carries the given prefix followed by a dash.
#[must_use]
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('-') && rest.len() > 1)
}
