//! Shared rules for list filter criteria.
//!
//! Screens send their select boxes verbatim, so a criterion such as
//! "All Departments" or "All Status" has to behave exactly like an absent one.

/// Returns true when the value means "no restriction".
///
/// Blank strings, `"All"` and anything of the form `"All <something>"` are
/// wildcards (ASCII case-insensitive).
pub fn is_wildcard(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return true;
    }
    let lower = trimmed.to_ascii_lowercase();
    lower == "all" || lower.starts_with("all ")
}

/// Normalises an optional criterion: `None` for wildcards, trimmed text otherwise.
pub fn criterion(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| !is_wildcard(v))
        .map(str::trim)
}
