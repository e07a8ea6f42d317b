use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use super::{
    errors::RelayError,
    helpers::{first_param, query_pairs},
};
use crate::state::AppState;

/// Rejects any request whose `provider` query parameter is not registered and
/// hands the resolved `Arc<ProviderConfig>` to the route through extensions.
pub async fn require_provider(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let params = query_pairs(req.uri());
    let requested = first_param(&params, "provider");

    let Some(provider) = requested.and_then(|name| state.providers.get(name)) else {
        debug!(provider = ?requested, path = %req.uri().path(), "unsupported provider");
        return RelayError::InvalidProvider.into_response();
    };

    req.extensions_mut().insert(provider);
    next.run(req).await
}
