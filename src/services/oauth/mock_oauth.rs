use std::sync::Mutex;

use async_trait::async_trait;

use crate::services::oauth::{
    errors::OAuthError, models::AccessToken, provider::ProviderConfig, service::OAuthService,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedExchange {
    pub provider: String,
    pub code: String,
    pub redirect_uri: String,
}

/// Hands out a fixed token, or fails when `fail_with` is set, and records every call.
#[derive(Default)]
pub struct MockOAuth {
    pub token: AccessToken,
    pub fail_with: Option<String>,
    pub calls: Mutex<Vec<RecordedExchange>>,
}

impl MockOAuth {
    pub fn with_token(token: &str) -> Self {
        MockOAuth {
            token: AccessToken {
                access_token: token.to_string(),
            },
            ..Default::default()
        }
    }

    pub fn failing(error: &str) -> Self {
        MockOAuth {
            fail_with: Some(error.to_string()),
            ..Default::default()
        }
    }

    pub fn recorded(&self) -> Vec<RecordedExchange> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl OAuthService for MockOAuth {
    async fn exchange_code_for_token(
        &self,
        provider: &ProviderConfig,
        code: &str,
        redirect_uri: &str,
    ) -> Result<AccessToken, OAuthError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedExchange {
                provider: provider.name.to_string(),
                code: code.to_string(),
                redirect_uri: redirect_uri.to_string(),
            });
        }

        match &self.fail_with {
            Some(error) => Err(OAuthError::Provider {
                error: error.clone(),
                description: None,
            }),
            None => Ok(self.token.clone()),
        }
    }
}
