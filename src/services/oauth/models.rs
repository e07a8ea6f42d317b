// services/oauth/models.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub code: &'a str,
    pub redirect_uri: &'a str,
    pub grant_type: &'static str,
}

/// GitHub answers 200 with `error` fields when the code is bad or expired.
#[derive(Debug, Deserialize, Default)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessToken {
    pub access_token: String,
}
