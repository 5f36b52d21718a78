use resort_backend::{
    api::router::create_router,
    config::Config,
    domain::catalog::ResortCatalog,
    domain::models::customization::{CustomizationOverride, CustomizationPatch},
    domain::ports::CustomizationService,
    error::AppError,
    state::AppState,
};

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the remote customization service.
#[derive(Default)]
pub struct MockCustomizationService {
    overrides: Mutex<HashMap<String, CustomizationOverride>>,
    pub reset_calls: Mutex<Vec<String>>,
}

impl MockCustomizationService {
    pub fn seed(&self, overlay: CustomizationOverride) {
        self.overrides.lock().unwrap().insert(overlay.id.clone(), overlay);
    }
}

#[async_trait]
impl CustomizationService for MockCustomizationService {
    async fn fetch(&self, resort_id: &str) -> Result<Option<CustomizationOverride>, AppError> {
        Ok(self
            .overrides
            .lock()
            .unwrap()
            .get(resort_id)
            .filter(|o| o.is_customized)
            .cloned())
    }

    async fn update(
        &self,
        resort_id: &str,
        patch: &CustomizationPatch,
    ) -> Result<CustomizationOverride, AppError> {
        let mut overrides = self.overrides.lock().unwrap();
        let entry = overrides
            .entry(resort_id.to_string())
            .or_insert_with(|| CustomizationOverride::new(resort_id));

        if patch.name.is_some() { entry.name = patch.name.clone(); }
        if patch.location.is_some() { entry.location = patch.location.clone(); }
        if patch.region.is_some() { entry.region = patch.region.clone(); }
        if patch.image.is_some() { entry.image = patch.image.clone(); }
        if patch.description.is_some() { entry.description = patch.description.clone(); }
        if patch.temperature.is_some() { entry.temperature = patch.temperature; }
        if patch.snow_depth.is_some() { entry.snow_depth = patch.snow_depth; }
        if patch.operating_status.is_some() { entry.operating_status = patch.operating_status.clone(); }
        if let Some(style) = &patch.customization { entry.customization = style.clone(); }
        entry.is_customized = patch.is_customized.unwrap_or(true);
        entry.last_updated = Some(Utc::now());

        Ok(entry.clone())
    }

    async fn reset(&self, resort_id: &str) -> Result<(), AppError> {
        self.overrides.lock().unwrap().remove(resort_id);
        self.reset_calls.lock().unwrap().push(resort_id.to_string());
        Ok(())
    }

    async fn list_customized(&self) -> Result<Vec<CustomizationOverride>, AppError> {
        Ok(self
            .overrides
            .lock()
            .unwrap()
            .values()
            .filter(|o| o.is_customized)
            .cloned()
            .collect())
    }
}

/// Service that fails every call, for degradation tests.
pub struct FailingCustomizationService;

#[async_trait]
impl CustomizationService for FailingCustomizationService {
    async fn fetch(&self, _resort_id: &str) -> Result<Option<CustomizationOverride>, AppError> {
        Err(AppError::Upstream("connection refused".to_string()))
    }

    async fn update(
        &self,
        _resort_id: &str,
        _patch: &CustomizationPatch,
    ) -> Result<CustomizationOverride, AppError> {
        Err(AppError::Upstream("connection refused".to_string()))
    }

    async fn reset(&self, _resort_id: &str) -> Result<(), AppError> {
        Err(AppError::Upstream("connection refused".to_string()))
    }

    async fn list_customized(&self) -> Result<Vec<CustomizationOverride>, AppError> {
        Err(AppError::Upstream("connection refused".to_string()))
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub customization: Arc<MockCustomizationService>,
}

impl TestApp {
    pub fn new() -> Self {
        let customization = Arc::new(MockCustomizationService::default());
        let state = Arc::new(Self::state_with(customization.clone()));
        TestApp {
            router: create_router(state.clone()),
            state,
            customization,
        }
    }

    pub fn with_failing_service() -> (Router, Arc<AppState>) {
        let state = Arc::new(Self::state_with(Arc::new(FailingCustomizationService)));
        (create_router(state.clone()), state)
    }

    fn state_with(service: Arc<dyn CustomizationService>) -> AppState {
        AppState {
            config: Config {
                port: 0,
                customization_service_url: "http://localhost".to_string(),
                customization_service_token: "token".to_string(),
            },
            catalog: Arc::new(ResortCatalog::builtin()),
            customization_service: service,
        }
    }
}
