// services/oauth/service.rs

use super::{errors::OAuthError, models::AccessToken, provider::ProviderConfig};
use async_trait::async_trait;

#[async_trait]
pub trait OAuthService: Send + Sync {
    async fn exchange_code_for_token(
        &self,
        provider: &ProviderConfig,
        code: &str,
        redirect_uri: &str,
    ) -> Result<AccessToken, OAuthError>;
}
