use axum_extra::extract::cookie::{Cookie, SameSite};
use subtle::ConstantTimeEq;

pub const STATE_COOKIE: &str = "oauth_state";
pub const STATE_COOKIE_MAX_MINUTES: i64 = 10;

/// Fresh v4 UUID per authorize request.
pub fn generate_state_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn build_state_cookie(token: &str) -> Cookie<'static> {
    Cookie::build((STATE_COOKIE, token.to_string()))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::minutes(STATE_COOKIE_MAX_MINUTES))
        .build()
}

pub fn clear_state_cookie() -> Cookie<'static> {
    Cookie::build((STATE_COOKIE, ""))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(0))
        .build()
}

pub fn states_match(expected: &str, provided: &str) -> bool {
    expected.as_bytes().ct_eq(provided.as_bytes()).into()
}
