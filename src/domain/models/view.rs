use serde::{Deserialize, Serialize};

use crate::domain::models::resort::{
    ContactInfo, DifficultyBreakdown, OperatingHours, PricingTiers, RiskLevel, TicketPrice,
};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SnowReport {
    pub base: u32,
    pub summit: u32,
    pub fresh24h: u32,
    pub season: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TerrainInfo {
    pub skiable: u32,
    pub longest_run: String,
    pub base_elevation: u32,
    pub summit_elevation: u32,
}

/// Presentation-only values computed per view, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedFields {
    pub temperature: f64,
    pub snow_report: SnowReport,
    pub terrain: TerrainInfo,
    pub highlights: Vec<String>,
}

/// Resolved visual styling with every hint populated.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub hero_image: String,
    pub overlay_gradient: String,
    pub text_color: String,
    pub badge_style: String,
}

/// The fully merged, render-ready representation of a resort. Recomputed on
/// every details request and discarded afterwards; every field is populated
/// regardless of which inputs were available.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComposedView {
    pub id: String,
    pub name: String,
    pub location: String,
    pub region: String,
    pub image: String,
    pub description: String,
    pub lifts: u32,
    pub runs: u32,
    pub vertical: u32,
    pub price: TicketPrice,
    pub difficulty: DifficultyBreakdown,
    pub amenities: Vec<String>,
    pub rating: u8,
    pub reviews: u32,
    pub season: String,
    pub snow_depth: u32,
    pub temperature: f64,
    pub snow_report: SnowReport,
    pub terrain: TerrainInfo,
    pub highlights: Vec<String>,
    pub operating_hours: OperatingHours,
    pub contact_info: ContactInfo,
    pub pricing: Option<PricingTiers>,
    pub is_open: bool,
    pub weather_condition: String,
    pub risk_level: RiskLevel,
    pub style: ResolvedStyle,
    pub is_customized: bool,
}

/// Minimal shape handed to the selection callback surface.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    pub id: String,
    pub name: String,
    pub location: String,
    pub is_open: bool,
    pub temperature: f64,
    pub weather_condition: String,
}
