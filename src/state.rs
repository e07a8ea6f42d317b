use std::sync::Arc;

use crate::config::Config;
use crate::services::oauth::{provider::ProviderRegistry, service::OAuthService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub providers: Arc<ProviderRegistry>,
    pub oauth: Arc<dyn OAuthService>,
}

impl AppState {
    pub fn new(config: Config, oauth: Arc<dyn OAuthService>) -> Self {
        let providers = ProviderRegistry::from_config(&config);
        AppState {
            config: Arc::new(config),
            providers: Arc::new(providers),
            oauth,
        }
    }
}
