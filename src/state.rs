use std::sync::Arc;

use crate::client::CmsClient;
use crate::config::Config;
use crate::utils::memo::Sanitizer;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub cms: Arc<dyn CmsClient>,
    pub sanitizer: Arc<Sanitizer>,
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<dyn CmsClient> {
    fn from_ref(state: &AppState) -> Self {
        state.cms.clone()
    }
}

impl FromRef<AppState> for Arc<Sanitizer> {
    fn from_ref(state: &AppState) -> Self {
        state.sanitizer.clone()
    }
}
