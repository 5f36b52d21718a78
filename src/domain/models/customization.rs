use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1551524164-6cf2ac135c1f?w=800&h=600&fit=crop";
pub const DEFAULT_OVERLAY_GRADIENT: &str =
    "bg-gradient-to-t from-black/70 via-black/20 to-transparent";
pub const DEFAULT_TEXT_COLOR: &str = "text-white";
pub const DEFAULT_BADGE_STYLE: &str = "default";

/// Visual styling hints attached to an override by the admin workflow.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VisualStyle {
    pub hero_image: Option<String>,
    pub overlay_gradient: Option<String>,
    pub text_color: Option<String>,
    pub badge_style: Option<String>,
}

/// A remotely-stored partial record keyed by resort id. Owned by the
/// customization service; this system only reads it. Absent override means
/// the catalog record is displayed unmodified.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationOverride {
    pub id: String,
    pub name: Option<String>,
    pub location: Option<String>,
    pub region: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub temperature: Option<f64>,
    pub snow_depth: Option<u32>,
    pub operating_status: Option<String>,
    #[serde(default)]
    pub customization: VisualStyle,
    #[serde(default)]
    pub is_customized: bool,
    pub last_updated: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

impl CustomizationOverride {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: None,
            location: None,
            region: None,
            image: None,
            description: None,
            temperature: None,
            snow_depth: None,
            operating_status: None,
            customization: VisualStyle::default(),
            is_customized: false,
            last_updated: None,
            updated_by: None,
        }
    }
}

/// Partial body forwarded to the remote service on admin edits.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snow_depth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customization: Option<VisualStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_customized: Option<bool>,
}

/// Response envelope used by the remote customization endpoint.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    #[allow(dead_code)]
    pub message: Option<String>,
}
