pub mod relay;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use relay::{authorize::authorize, callback::callback, gate::require_provider};

/// The relay router. The provider gate wraps every route, the fallback included,
/// so an unsupported provider is rejected before routing has any visible effect.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/auth", get(authorize))
        .route("/callback", get(callback))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_provider,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}
