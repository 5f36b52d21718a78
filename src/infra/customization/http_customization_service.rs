use crate::domain::models::customization::{
    ApiEnvelope, CustomizationOverride, CustomizationPatch,
};
use crate::domain::ports::CustomizationService;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, error};

pub struct HttpCustomizationService {
    client: Client,
    base_url: String,
    auth_token: String,
}

impl HttpCustomizationService {
    pub fn new(base_url: String, auth_token: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            auth_token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        &self,
        res: reqwest::Response,
    ) -> Result<Option<T>, AppError> {
        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            let msg = format!("Customization service failed. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(AppError::Upstream(msg));
        }

        let envelope: ApiEnvelope<T> = res.json().await.map_err(|e| {
            let msg = format!("Malformed customization response: {}", e);
            error!("{}", msg);
            AppError::Upstream(msg)
        })?;

        if !envelope.success {
            debug!(
                "Customization service declined request: {}",
                envelope.error.as_deref().unwrap_or("no error given")
            );
            return Ok(None);
        }
        Ok(envelope.data)
    }
}

#[async_trait]
impl CustomizationService for HttpCustomizationService {
    async fn fetch(&self, resort_id: &str) -> Result<Option<CustomizationOverride>, AppError> {
        let res = self
            .client
            .get(self.url(&format!("/resort/{}", resort_id)))
            .header("Authorization", format!("Bearer {}", self.auth_token))
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Customization service connection error: {}", e);
                error!("{}", msg);
                AppError::Upstream(msg)
            })?;

        Ok(self.decode::<CustomizationOverride>(res).await?.filter(|o| o.is_customized))
    }

    async fn update(
        &self,
        resort_id: &str,
        patch: &CustomizationPatch,
    ) -> Result<CustomizationOverride, AppError> {
        let res = self
            .client
            .put(self.url(&format!("/resort/{}", resort_id)))
            .header("Authorization", format!("Bearer {}", self.auth_token))
            .json(patch)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Customization service connection error: {}", e);
                error!("{}", msg);
                AppError::Upstream(msg)
            })?;

        self.decode::<CustomizationOverride>(res)
            .await?
            .ok_or_else(|| AppError::Upstream("Update returned no override record".to_string()))
    }

    async fn reset(&self, resort_id: &str) -> Result<(), AppError> {
        let res = self
            .client
            .delete(self.url(&format!("/resort/{}", resort_id)))
            .header("Authorization", format!("Bearer {}", self.auth_token))
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Customization service connection error: {}", e);
                error!("{}", msg);
                AppError::Upstream(msg)
            })?;

        let status = res.status();
        if !status.is_success() && status != StatusCode::NOT_FOUND {
            let text = res.text().await.unwrap_or_default();
            let msg = format!("Customization reset failed. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(AppError::Upstream(msg));
        }
        Ok(())
    }

    async fn list_customized(&self) -> Result<Vec<CustomizationOverride>, AppError> {
        let res = self
            .client
            .get(self.url("/resorts"))
            .header("Authorization", format!("Bearer {}", self.auth_token))
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Customization service connection error: {}", e);
                error!("{}", msg);
                AppError::Upstream(msg)
            })?;

        Ok(self
            .decode::<Vec<CustomizationOverride>>(res)
            .await?
            .unwrap_or_default())
    }
}
