use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::domain::catalog::ResortCatalog;
use crate::infra::customization::http_customization_service::HttpCustomizationService;
use crate::state::AppState;

pub fn bootstrap_state(config: &Config) -> AppState {
    let catalog = Arc::new(ResortCatalog::builtin());
    info!("Loaded built-in resort catalog with {} fields", catalog.len());

    let customization_service = Arc::new(HttpCustomizationService::new(
        config.customization_service_url.clone(),
        config.customization_service_token.clone(),
    ));

    AppState {
        config: config.clone(),
        catalog,
        customization_service,
    }
}
