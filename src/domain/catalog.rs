use std::collections::HashMap;

use crate::domain::models::resort::{
    ContactInfo, OperatingHours, PricingTiers, ResortRecord, RiskLevel, TicketPrice,
};
use crate::domain::services::profile;

/// Read-only keyed collection over the built-in resort records. Built once
/// at startup; iteration order is the seed order.
pub struct ResortCatalog {
    records: Vec<ResortRecord>,
    index: HashMap<String, usize>,
}

impl ResortCatalog {
    pub fn builtin() -> Self {
        Self::from_records(builtin_records())
    }

    pub fn from_records(records: Vec<ResortRecord>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();
        Self { records, index }
    }

    pub fn list(&self) -> &[ResortRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&ResortRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    name: &str,
    location: &str,
    rating: u8,
    runs: u32,
    vertical: u32,
    price: TicketPrice,
    snow_depth: u32,
    reviews: u32,
    weather_condition: &str,
    risk_level: RiskLevel,
    is_open: bool,
) -> ResortRecord {
    let profile = profile::profile(id);
    let pricing = price.per_day().map(PricingTiers::from_adult);
    ResortRecord {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        region: "New Zealand".to_string(),
        image: profile.image.to_string(),
        description: profile.description.to_string(),
        lifts: profile.lifts,
        runs,
        vertical,
        price,
        difficulty: profile.difficulty,
        amenities: profile.amenities.iter().map(|a| a.to_string()).collect(),
        rating,
        reviews,
        season: "June - October".to_string(),
        snow_depth,
        operating_hours: OperatingHours {
            weekdays: "9:00 AM - 4:00 PM".to_string(),
            weekends: "8:30 AM - 4:30 PM".to_string(),
        },
        contact_info: ContactInfo {
            phone: "+64 3 442 4620".to_string(),
            website: format!("www.{}.co.nz", id),
            address: location.to_string(),
        },
        pricing,
        is_open,
        weather_condition: weather_condition.to_string(),
        risk_level,
    }
}

/// The built-in New Zealand ski field catalog. Club and community fields
/// carry access markers instead of day-pass prices.
fn builtin_records() -> Vec<ResortRecord> {
    use RiskLevel::*;
    use TicketPrice::PerDay;
    vec![
        // North Island - commercial
        record("whakapapa", "Whakapapa (Mt Ruapehu)", "Mount Ruapehu, North Island", 4, 32, 675, PerDay(89.0), 95, 412, "Fresh Snow", Low, true),
        record("turoa", "Tūroa (Mt Ruapehu)", "Mount Ruapehu, North Island", 4, 48, 722, PerDay(89.0), 110, 388, "Powder", Low, true),
        // North Island - club fields
        record("tukino", "Tukino (Mt Ruapehu)", "Mount Ruapehu, North Island", 3, 25, 350, TicketPrice::club(), 60, 64, "Partly Cloudy", Moderate, true),
        record("manganui", "Manganui (Mt Taranaki)", "Mount Taranaki, North Island", 3, 25, 400, TicketPrice::club(), 45, 51, "Variable", Moderate, false),
        // Canterbury - commercial
        record("mthutt", "Mt Hutt", "Canterbury, South Island", 4, 365, 683, PerDay(109.0), 120, 296, "Bluebird", Low, true),
        record("porters", "Porters Alpine Resort", "Canterbury, South Island", 4, 280, 630, PerDay(99.0), 85, 187, "Light Snow", Low, true),
        record("mtdobson", "Mt Dobson", "Canterbury, South Island", 3, 400, 915, PerDay(89.0), 105, 92, "Fresh Snow", Moderate, true),
        record("roundhill", "Roundhill (Tekapo)", "Mackenzie, South Island", 3, 12, 450, PerDay(79.0), 70, 76, "Clear", Low, true),
        record("ohau", "Ōhau Snow Fields", "Mackenzie, South Island", 3, 385, 440, PerDay(79.0), 75, 81, "Partly Cloudy", Low, true),
        record("mtlyford", "Mt Lyford", "North Canterbury, South Island", 3, 20, 450, PerDay(85.0), 65, 58, "Variable", Low, true),
        // South Island - club fields
        record("hanmersprings", "Hanmer Springs Ski Area", "North Canterbury, South Island", 3, 25, 350, TicketPrice::club(), 55, 49, "Cloudy", Low, true),
        record("foxpeak", "Fox Peak", "North Canterbury, South Island", 3, 25, 300, TicketPrice::club(), 60, 37, "Light Snow", Moderate, true),
        record("mtcheeseman", "Mt Cheeseman", "Canterbury, South Island", 3, 25, 450, TicketPrice::club(), 70, 52, "Fresh Snow", Moderate, true),
        record("brokenriver", "Broken River", "Canterbury, South Island", 3, 25, 400, TicketPrice::club(), 90, 88, "Powder", Considerable, true),
        record("craigieburn", "Craigieburn Valley", "Canterbury, South Island", 4, 25, 600, TicketPrice::club(), 100, 134, "Fresh Snow", Considerable, true),
        record("mtolympus", "Mt Olympus", "Canterbury, South Island", 3, 25, 500, TicketPrice::club(), 95, 61, "Variable", Moderate, true),
        record("templebasin", "Temple Basin (Arthur's Pass)", "Arthur's Pass, South Island", 4, 25, 450, TicketPrice::club(), 130, 97, "Heavy Snow", Considerable, true),
        record("awakino", "Awakino (Waitaki Valley)", "Waitaki Valley, South Island", 2, 25, 200, TicketPrice::club(), 40, 23, "Cloudy", Low, false),
        // Nelson Lakes
        record("rainbow", "Rainbow", "Nelson Lakes, South Island", 3, 25, 300, TicketPrice::community(), 55, 44, "Light Snow", Moderate, true),
        // Otago / Queenstown-Wānaka - commercial
        record("coronetpeak", "Coronet Peak", "Queenstown, South Island", 5, 280, 481, PerDay(129.0), 85, 512, "Packed Powder", Low, true),
        record("remarkables", "The Remarkables", "Queenstown, South Island", 5, 220, 357, PerDay(129.0), 90, 468, "Fresh Snow", Low, true),
        record("cardrona", "Cardrona Alpine Resort", "Wānaka, South Island", 5, 345, 600, PerDay(129.0), 100, 455, "Powder", Low, true),
        record("treblecone", "Treble Cone", "Wānaka, South Island", 5, 550, 700, PerDay(129.0), 115, 389, "Bluebird", Low, true),
        record("snowfarm", "Snow Farm NZ", "Wānaka, South Island", 3, 25, 0, PerDay(35.0), 60, 72, "Groomed", Low, true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = ResortCatalog::builtin();
        let ids: HashSet<_> = catalog.list().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_get_finds_every_listed_record() {
        let catalog = ResortCatalog::builtin();
        for r in catalog.list() {
            assert_eq!(catalog.get(&r.id).map(|f| &f.name), Some(&r.name));
        }
        assert!(catalog.get("chamonix").is_none());
    }

    #[test]
    fn test_club_fields_have_no_pricing_tiers() {
        let catalog = ResortCatalog::builtin();
        let tukino = catalog.get("tukino").unwrap();
        assert_eq!(tukino.price, TicketPrice::club());
        assert!(tukino.pricing.is_none());

        let coronet = catalog.get("coronetpeak").unwrap();
        assert_eq!(coronet.pricing.unwrap().child, 90);
    }

    #[test]
    fn test_builtin_catalog_is_populated() {
        assert!(!ResortCatalog::builtin().is_empty());

        let empty = ResortCatalog::from_records(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert!(empty.get("whakapapa").is_none());
    }

    #[test]
    fn test_listing_is_stable() {
        let catalog = ResortCatalog::builtin();
        let first: Vec<_> = catalog.list().iter().map(|r| r.id.clone()).collect();
        let second: Vec<_> = catalog.list().iter().map(|r| r.id.clone()).collect();
        assert_eq!(first, second);
        assert_eq!(first.first().map(String::as_str), Some("whakapapa"));
    }
}
