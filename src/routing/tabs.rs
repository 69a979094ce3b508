//! Tab derivation for profile-area paths.

/// Derive the canonical tab identifier from a profile-area path.
///
/// Strips one leading `/profile`, one optional following `/edit` and any
/// trailing slashes, then uppercases the remainder. An empty remainder
/// means the profile root: `PROFILE`.
///
/// Pure and total: malformed input degrades to uppercasing whatever
/// remains, never an error.
pub fn tab_from_path(path: &str) -> String {
    let rest = path.strip_prefix("/profile").unwrap_or(path);
    let rest = rest.strip_prefix("/edit").unwrap_or(rest);
    let rest = rest.trim_matches('/');

    if rest.is_empty() {
        "PROFILE".to_string()
    } else {
        rest.to_uppercase()
    }
}
