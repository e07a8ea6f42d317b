use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{error, info, warn};

use super::{
    errors::RelayError,
    handshake::{error_message, render_page, success_message},
    helpers::{first_param, query_pairs, resolve_hostname, verify_state},
};
use crate::{
    responses::RelayResponse,
    services::oauth::provider::ProviderConfig,
    state::AppState,
    utils::csrf::{clear_state_cookie, STATE_COOKIE},
};

/// Exchanges the code and serves the handshake page for the CMS popup.
pub async fn callback(
    State(state): State<AppState>,
    Extension(provider): Extension<Arc<ProviderConfig>>,
    headers: HeaderMap,
    uri: Uri,
    jar: CookieJar,
) -> Result<Response, RelayError> {
    let params = query_pairs(&uri);
    let code = first_param(&params, "code")
        .filter(|code| !code.is_empty())
        .ok_or(RelayError::MissingCode)?;

    let hostname = resolve_hostname(&state.config, &headers, &uri)?;

    if let Err(err) = verify_state(state.config.state_check, &jar, first_param(&params, "state")) {
        warn!(provider = provider.name, %hostname, "state did not match the issued cookie");
        return Err(err);
    }

    let jar = if jar.get(STATE_COOKIE).is_some() {
        jar.add(clear_state_cookie())
    } else {
        jar
    };

    let redirect_uri = provider.redirect_uri(&hostname);
    let origins = &state.config.allowed_origins;

    let page = match state
        .oauth
        .exchange_code_for_token(&provider, code, &redirect_uri)
        .await
    {
        Ok(token) => {
            info!(provider = provider.name, %hostname, "authorization completed");
            RelayResponse::html(
                StatusCode::OK,
                render_page(
                    provider.name,
                    &success_message(provider.name, &token.access_token),
                    origins,
                ),
            )
        }
        Err(err) => {
            error!(provider = provider.name, error = %err, "token exchange failed");
            RelayResponse::html(
                StatusCode::BAD_GATEWAY,
                render_page(
                    provider.name,
                    &error_message(provider.name, &err.public_reason()),
                    origins,
                ),
            )
        }
    };

    Ok((jar, page).into_response())
}
