//! Dot-hierarchy key helpers
//!
//! Passport keys form a namespace delimited by `.`. All ancestry checks
//! are anchored on whole segments: `listed.grade.II` descends from
//! `listed`, but `listedBuilding` does not.

/// Suffix of the audit-trail key holding raw user disputes
pub const OVERRIDES_SUFFIX: &str = "_overrides";

/// Suffix of the audit-trail key holding the final non-intersecting list
pub const NOTS_SUFFIX: &str = "_nots";

/// Whether `key` is a strict descendant of `ancestor` in the dot
/// hierarchy. Equal keys are not descendants.
pub fn is_descendant(key: &str, ancestor: &str) -> bool {
    key.strip_prefix(ancestor)
        .map(|rest| rest.starts_with('.'))
        .unwrap_or(false)
}

/// Whether `key` equals `ancestor` or strictly descends from it
pub fn is_same_or_descendant(key: &str, ancestor: &str) -> bool {
    key == ancestor || is_descendant(key, ancestor)
}

/// The `_overrides` audit-trail key for a target passport key
pub fn overrides_key(fn_key: &str) -> String {
    format!("{}{}", fn_key, OVERRIDES_SUFFIX)
}

/// The `_nots` audit-trail key for a target passport key
pub fn nots_key(fn_key: &str) -> String {
    format!("{}{}", fn_key, NOTS_SUFFIX)
}
