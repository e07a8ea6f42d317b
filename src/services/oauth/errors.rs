// services/oauth/errors.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OAuthError {
    #[error("token request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("token endpoint returned status {0}")]
    UpstreamStatus(u16),
    #[error("token response did not contain an access token")]
    InvalidTokenJson,
    #[error("provider rejected the code: {error}")]
    Provider {
        error: String,
        description: Option<String>,
    },
}

impl OAuthError {
    /// Short reason safe to hand back to the CMS window.
    pub fn public_reason(&self) -> String {
        match self {
            OAuthError::Http(_) => "Token exchange failed".to_string(),
            OAuthError::UpstreamStatus(status) => {
                format!("Token endpoint returned status {status}")
            }
            OAuthError::InvalidTokenJson => "Invalid token response".to_string(),
            OAuthError::Provider { error, description } => match description {
                Some(description) => format!("{error}: {description}"),
                None => error.clone(),
            },
        }
    }
}
