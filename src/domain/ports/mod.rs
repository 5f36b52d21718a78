use crate::domain::models::customization::{CustomizationOverride, CustomizationPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Client port for the remote customization key-value service. The remote
/// store is owned by an external admin workflow; this system reads it and
/// forwards admin edits, nothing more.
#[async_trait]
pub trait CustomizationService: Send + Sync {
    /// Fetches the override for a resort id. `Ok(None)` covers both an
    /// absent record and a `success=false` envelope; transport failures,
    /// non-2xx statuses and malformed bodies are errors for the caller to
    /// degrade on.
    async fn fetch(&self, resort_id: &str) -> Result<Option<CustomizationOverride>, AppError>;

    async fn update(
        &self,
        resort_id: &str,
        patch: &CustomizationPatch,
    ) -> Result<CustomizationOverride, AppError>;

    async fn reset(&self, resort_id: &str) -> Result<(), AppError>;

    async fn list_customized(&self) -> Result<Vec<CustomizationOverride>, AppError>;
}
