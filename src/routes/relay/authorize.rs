use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    http::{HeaderMap, Uri},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::info;

use super::{errors::RelayError, helpers::resolve_hostname};
use crate::{
    config::StateCheck,
    responses::RelayResponse,
    services::oauth::provider::ProviderConfig,
    state::AppState,
    utils::csrf::{build_state_cookie, generate_state_token},
};

/// Redirects the popup to the provider's consent page.
pub async fn authorize(
    State(state): State<AppState>,
    Extension(provider): Extension<Arc<ProviderConfig>>,
    headers: HeaderMap,
    uri: Uri,
    jar: CookieJar,
) -> Result<Response, RelayError> {
    let hostname = resolve_hostname(&state.config, &headers, &uri)?;
    let redirect_uri = provider.redirect_uri(&hostname);
    let state_token = generate_state_token();
    let authorize_url = provider.authorize_url(&redirect_uri, &state_token);

    info!(provider = provider.name, %hostname, "redirecting to provider consent page");

    let jar = match state.config.state_check {
        StateCheck::Off => jar,
        StateCheck::Lenient | StateCheck::Strict => jar.add(build_state_cookie(&state_token)),
    };

    Ok((jar, RelayResponse::found(&authorize_url)).into_response())
}
