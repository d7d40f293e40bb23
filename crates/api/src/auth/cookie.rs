//! The `token` session cookie.
//!
//! The dashboard frontend authenticates with an HttpOnly cookie, not an
//! Authorization header. These helpers build the `Set-Cookie` values for
//! login/logout and pull the token back out of an inbound `Cookie` header.

/// Name of the session cookie.
pub const COOKIE_NAME: &str = "token";

/// Build the `Set-Cookie` value that establishes a session.
///
/// Attributes: `HttpOnly` (no script access), `SameSite=Lax`, `Path=/`,
/// `Max-Age` matching the JWT expiry, and `Secure` when configured.
pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie =
        format!("{COOKIE_NAME}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age_secs}");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Build the `Set-Cookie` value that clears the session (`Max-Age=0`).
pub fn clear_session_cookie(secure: bool) -> String {
    session_cookie("", 0, secure)
}

/// Extract the session token from a raw `Cookie` header value.
///
/// Cookie headers are `name=value` pairs separated by `"; "`; values may
/// contain `=`, so only the first one splits the pair.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == COOKIE_NAME && !value.is_empty()).then_some(value)
    })
}
