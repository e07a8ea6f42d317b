// services/oauth/client.rs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use tracing::{info, warn};

use super::{
    errors::OAuthError,
    models::{AccessToken, TokenRequest, TokenResponse},
    provider::ProviderConfig,
    service::OAuthService,
};

#[derive(Clone)]
pub struct OAuthClient {
    pub client: Client,
}

impl OAuthClient {
    pub fn new(timeout: Duration) -> Result<Self, OAuthError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(OAuthClient { client })
    }
}

#[async_trait]
impl OAuthService for OAuthClient {
    async fn exchange_code_for_token(
        &self,
        provider: &ProviderConfig,
        code: &str,
        redirect_uri: &str,
    ) -> Result<AccessToken, OAuthError> {
        let body = TokenRequest {
            client_id: &provider.client_id,
            client_secret: &provider.client_secret,
            code,
            redirect_uri,
            grant_type: "authorization_code",
        };

        let res = self
            .client
            .post(provider.token_url())
            .header(ACCEPT, "application/json") // GitHub answers form-encoded otherwise
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            warn!(provider = provider.name, %status, "token endpoint returned an error status");
            return Err(OAuthError::UpstreamStatus(status.as_u16()));
        }

        let json: TokenResponse = res.json().await.map_err(|err| {
            warn!(provider = provider.name, error = %err, "token response was not JSON");
            OAuthError::InvalidTokenJson
        })?;

        if let Some(error) = json.error {
            return Err(OAuthError::Provider {
                error,
                description: json.error_description,
            });
        }

        let access_token = json
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(OAuthError::InvalidTokenJson)?;

        info!(provider = provider.name, "exchanged authorization code");
        Ok(AccessToken { access_token })
    }
}
