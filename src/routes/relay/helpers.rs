use axum::{
    extract::Query,
    http::{HeaderMap, Uri},
};
use axum_extra::extract::cookie::CookieJar;

use super::errors::RelayError;
use crate::{
    config::{Config, StateCheck},
    utils::{
        csrf::{states_match, STATE_COOKIE},
        host::request_hostname,
    },
};

/// All query pairs in order. Repeated keys are kept so the first one can win.
pub(crate) fn query_pairs(uri: &Uri) -> Vec<(String, String)> {
    Query::<Vec<(String, String)>>::try_from_uri(uri)
        .map(|Query(pairs)| pairs)
        .unwrap_or_default()
}

pub(crate) fn first_param<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

pub(crate) fn resolve_hostname(
    config: &Config,
    headers: &HeaderMap,
    uri: &Uri,
) -> Result<String, RelayError> {
    request_hostname(headers, uri, config.public_host.as_deref()).ok_or(RelayError::MissingHost)
}

pub(crate) fn verify_state(
    mode: StateCheck,
    jar: &CookieJar,
    provided: Option<&str>,
) -> Result<(), RelayError> {
    let expected = jar
        .get(STATE_COOKIE)
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty());

    match (mode, expected) {
        (StateCheck::Off, _) | (StateCheck::Lenient, None) => Ok(()),
        (StateCheck::Strict, None) => Err(RelayError::InvalidState),
        (_, Some(expected)) => match provided {
            Some(provided) if states_match(expected, provided) => Ok(()),
            _ => Err(RelayError::InvalidState),
        },
    }
}
