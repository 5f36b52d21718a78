use std::sync::Arc;

use crate::config::Config;
use crate::domain::catalog::ResortCatalog;
use crate::domain::ports::CustomizationService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<ResortCatalog>,
    pub customization_service: Arc<dyn CustomizationService>,
}
