use serde::{Deserialize, Serialize};

/// Sentinel used when ordering non-commercial fields by price.
pub const NON_COMMERCIAL_PRICE_SENTINEL: f64 = 999.0;

/// Adult day-pass price. Club and community fields do not sell day passes,
/// so the price column carries an access marker instead of a number.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum TicketPrice {
    PerDay(f64),
    Access(String),
}

impl TicketPrice {
    pub fn club() -> Self {
        TicketPrice::Access("Club".to_string())
    }

    pub fn community() -> Self {
        TicketPrice::Access("Community".to_string())
    }

    pub fn per_day(&self) -> Option<f64> {
        match self {
            TicketPrice::PerDay(p) => Some(*p),
            TicketPrice::Access(_) => None,
        }
    }

    /// Numeric value used by ascending price sort. Non-numeric prices map
    /// to a large sentinel so they always sort last.
    pub fn sort_value(&self) -> f64 {
        self.per_day().unwrap_or(NON_COMMERCIAL_PRICE_SENTINEL)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyBreakdown {
    pub beginner: u8,
    pub intermediate: u8,
    pub advanced: u8,
    pub expert: u8,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    Considerable,
    High,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OperatingHours {
    pub weekdays: String,
    pub weekends: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub phone: String,
    pub website: String,
    pub address: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PricingTiers {
    pub adult: u32,
    pub child: u32,
    pub senior: u32,
    pub half_day: u32,
}

impl PricingTiers {
    /// Standard tier discounts applied to the adult day-pass price.
    pub fn from_adult(adult: f64) -> Self {
        Self {
            adult: adult as u32,
            child: (adult * 0.7) as u32,
            senior: (adult * 0.8) as u32,
            half_day: (adult * 0.75) as u32,
        }
    }
}

/// A catalog entry. Immutable once the catalog is built; `id` is the join
/// key against customization overrides and is unique across the catalog.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResortRecord {
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
    pub operating_hours: OperatingHours,
    pub contact_info: ContactInfo,
    pub pricing: Option<PricingTiers>,
    pub is_open: bool,
    pub weather_condition: String,
    pub risk_level: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_numeric_prices_use_sentinel() {
        assert_eq!(TicketPrice::PerDay(129.0).sort_value(), 129.0);
        assert_eq!(TicketPrice::club().sort_value(), 999.0);
        assert_eq!(TicketPrice::community().sort_value(), 999.0);
    }

    #[test]
    fn test_pricing_tiers_discounts() {
        let tiers = PricingTiers::from_adult(129.0);
        assert_eq!(tiers.adult, 129);
        assert_eq!(tiers.child, 90);
        assert_eq!(tiers.senior, 103);
        assert_eq!(tiers.half_day, 96);
    }

    #[test]
    fn test_ticket_price_serializes_untagged() {
        assert_eq!(serde_json::to_value(TicketPrice::PerDay(89.0)).unwrap(), serde_json::json!(89.0));
        assert_eq!(serde_json::to_value(TicketPrice::club()).unwrap(), serde_json::json!("Club"));
    }
}
