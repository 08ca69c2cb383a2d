//! URL base-path helpers. All functions are pure.

const SEPARATOR: char = '/';

/// Normalizes a configured global prefix: surrounding whitespace and trailing
/// slashes are dropped and a leading slash is ensured. `""` and `"/"` both
/// mean "no prefix" and yield an empty string.
pub fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches(SEPARATOR);
    if trimmed.is_empty() {
        return String::new();
    }
    format!("{}{}", SEPARATOR, trimmed)
}

/// Returns `path` with exactly one leading slash.
pub fn ensure_leading_slash(path: &str) -> String {
    format!("{}{}", SEPARATOR, path.trim_start_matches(SEPARATOR))
}

/// True when `path` starts with `prefix` on a segment boundary, so
/// `/root/rest` matches `/root/rest` and `/root/rest/x` but not
/// `/root/restaurant`.
pub fn has_segment_prefix(path: &str, prefix: &str) -> bool {
    if prefix.is_empty() {
        return false;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with(SEPARATOR) || prefix.ends_with(SEPARATOR),
        None => false,
    }
}

/// Composes the externally visible base path from a global prefix and a
/// relative path. A relative path that already carries the prefix is kept as
/// is. Trailing slashes are dropped, so `/test/` and `/test` are one path.
/// Returns `None` for an empty relative path.
pub fn compose_base_path(prefix: &str, relative_path: &str) -> Option<String> {
    let relative_path = relative_path.trim();
    if relative_path.is_empty() {
        return None;
    }
    let relative = ensure_leading_slash(relative_path.trim_end_matches(SEPARATOR));
    let prefix = normalize_prefix(prefix);

    if prefix.is_empty() || has_segment_prefix(&relative, &prefix) {
        return Some(relative);
    }
    if relative.len() == 1 {
        return Some(prefix);
    }
    Some(format!("{}{}", prefix, relative))
}
