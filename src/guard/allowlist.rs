//! Paths reachable without an authenticated session.

/// The fixed allowlist. Membership is exact string equality, never a
/// prefix or pattern match.
pub const PATHS_WITHOUT_AUTHENTICATION: [&str; 6] = [
    "/login",
    "/register",
    "/password-reset",
    "/password-reset/request",
    "/password-reset/sent",
    "/password-reset/password-updated",
];

/// Whether a target path is reachable without a session.
pub fn is_allowlisted(path: &str) -> bool {
    PATHS_WITHOUT_AUTHENTICATION.contains(&path)
}
