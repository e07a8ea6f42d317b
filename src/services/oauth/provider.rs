// services/oauth/provider.rs
use std::{collections::HashMap, sync::Arc};

use crate::config::{Config, GitHubOAuthSettings};

pub const GITHUB: &str = "github";
pub(crate) const GITHUB_TOKEN_PATH: &str = "/login/oauth/access_token";
pub(crate) const GITHUB_AUTHORIZE_PATH: &str = "/login/oauth/authorize";
pub(crate) const GITHUB_SCOPE: &str = "public_repo,user";

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub name: &'static str,
    pub client_id: String,
    pub client_secret: String,
    pub token_host: String,
    pub token_path: &'static str,
    pub authorize_path: &'static str,
    pub scope: &'static str,
}

impl ProviderConfig {
    pub fn github(settings: &GitHubOAuthSettings) -> Self {
        ProviderConfig {
            name: GITHUB,
            client_id: settings.client_id.clone(),
            client_secret: settings.client_secret.clone(),
            token_host: settings.host.clone(),
            token_path: GITHUB_TOKEN_PATH,
            authorize_path: GITHUB_AUTHORIZE_PATH,
            scope: GITHUB_SCOPE,
        }
    }

    pub fn token_url(&self) -> String {
        format!("{}{}", self.token_host, self.token_path)
    }

    /// Both `/auth` and `/callback` must send this exact string to the provider.
    pub fn redirect_uri(&self, hostname: &str) -> String {
        format!("https://{}/callback?provider={}", hostname, self.name)
    }

    pub fn authorize_url(&self, redirect_uri: &str, state: &str) -> String {
        format!(
            "{}{}?response_type=code&client_id={}&redirect_uri={}&scope={}&state={}",
            self.token_host,
            self.authorize_path,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(redirect_uri),
            self.scope,
            urlencoding::encode(state),
        )
    }
}

/// Providers the relay accepts in the `provider` query parameter.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<&'static str, Arc<ProviderConfig>>,
}

impl ProviderRegistry {
    pub fn from_config(config: &Config) -> Self {
        let mut registry = ProviderRegistry::default();
        registry.register(ProviderConfig::github(&config.github));
        registry
    }

    pub fn register(&mut self, provider: ProviderConfig) {
        self.providers.insert(provider.name, Arc::new(provider));
    }

    pub fn get(&self, name: &str) -> Option<Arc<ProviderConfig>> {
        self.providers.get(name).cloned()
    }
}
