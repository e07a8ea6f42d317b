use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::responses::RelayResponse;

/// Request validation failures. Each renders as a 400 with the message as body.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RelayError {
    #[error("Invalid provider")]
    InvalidProvider,
    #[error("Missing code")]
    MissingCode,
    #[error("Missing host")]
    MissingHost,
    #[error("Invalid state")]
    InvalidState,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        RelayResponse::bad_request(&self.to_string())
    }
}
