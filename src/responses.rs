use axum::{
    http::{header::LOCATION, StatusCode},
    response::{Html, IntoResponse, Response},
};

/// Replies used by the relay: short plain-text statuses the CMS popup reads
/// verbatim, the provider redirect, and the handshake HTML page.
pub struct RelayResponse;

impl RelayResponse {
    pub fn bad_request(msg: &str) -> Response {
        (StatusCode::BAD_REQUEST, msg.to_string()).into_response()
    }

    pub fn too_many_requests(msg: &str) -> Response {
        (StatusCode::TOO_MANY_REQUESTS, msg.to_string()).into_response()
    }

    /// 302 with a short body, the way the CMS relay protocol expects.
    pub fn found(location: &str) -> Response {
        (
            StatusCode::FOUND,
            [(LOCATION, location.to_string())],
            "Redirecting...",
        )
            .into_response()
    }

    pub fn html(status: StatusCode, page: String) -> Response {
        (status, Html(page)).into_response()
    }
}
