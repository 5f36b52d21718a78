use crate::domain::models::resort::DifficultyBreakdown;

/// Per-field attributes that the catalog seeds from a single per-id table.
/// Ids without a dedicated entry fall back to `ResortProfile::default()`.
pub struct ResortProfile {
    pub image: &'static str,
    pub description: &'static str,
    pub lifts: u32,
    pub difficulty: DifficultyBreakdown,
    pub amenities: &'static [&'static str],
}

const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1551524164-6cf2ac135c1f?w=800&h=600&fit=crop";
const DEFAULT_DESCRIPTION: &str =
    "World-class skiing destination with diverse terrain and exceptional facilities.";
const DEFAULT_AMENITIES: &[&str] =
    &["Ski School", "Equipment Rental", "Restaurant", "First Aid", "Parking"];

impl Default for ResortProfile {
    fn default() -> Self {
        Self {
            image: DEFAULT_IMAGE,
            description: DEFAULT_DESCRIPTION,
            lifts: 4,
            difficulty: DifficultyBreakdown { beginner: 25, intermediate: 50, advanced: 20, expert: 5 },
            amenities: DEFAULT_AMENITIES,
        }
    }
}

pub fn profile(resort_id: &str) -> ResortProfile {
    match resort_id {
        "coronetpeak" => ResortProfile {
            image: "https://images.unsplash.com/photo-1551524164-6cf2ac135c1f?w=800&h=600&fit=crop",
            description: "New Zealand's premier ski destination with world-class facilities and stunning alpine scenery. Known for reliable snow and excellent groomed runs.",
            lifts: 6,
            difficulty: DifficultyBreakdown { beginner: 25, intermediate: 45, advanced: 25, expert: 5 },
            amenities: &["Ski Rental & Tuning", "Ski School", "Mountain Restaurant", "Free WiFi", "Parking", "First Aid Station", "Equipment Storage", "Rental Shop"],
        },
        "remarkables" => ResortProfile {
            image: "https://images.unsplash.com/photo-1551524164-605c4a64e4a4?w=800&h=600&fit=crop",
            description: "Dramatic mountain skiing with spectacular views over Lake Wakatipu. Features diverse terrain from gentle learning slopes to challenging black runs.",
            lifts: 7,
            difficulty: DifficultyBreakdown { beginner: 30, intermediate: 40, advanced: 25, expert: 5 },
            amenities: &["Ski School", "Equipment Rental", "Multiple Restaurants", "Childcare", "Terrain Parks", "Free Parking", "Medical Center", "Retail Store"],
        },
        "cardrona" => ResortProfile {
            image: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=800&h=600&fit=crop",
            description: "High-altitude skiing with excellent snow reliability and modern facilities. Perfect for families and freestyle enthusiasts with world-class terrain parks.",
            lifts: 11,
            difficulty: DifficultyBreakdown { beginner: 35, intermediate: 45, advanced: 15, expert: 5 },
            amenities: &["World-Class Terrain Parks", "Ski & Snowboard School", "Equipment Rental", "Multiple Dining Options", "Childcare", "First Aid", "Parking", "Retail"],
        },
        "treblecone" => ResortProfile {
            image: "https://images.unsplash.com/photo-1606673842245-9d872b20e3b3?w=800&h=600&fit=crop",
            description: "Home to the longest vertical in the South Island with challenging terrain and breathtaking views. A favorite among advanced skiers and snowboarders.",
            lifts: 6,
            difficulty: DifficultyBreakdown { beginner: 10, intermediate: 45, advanced: 35, expert: 10 },
            amenities: &["Advanced Terrain", "Equipment Rental", "Mountain Cafe", "First Aid", "Parking", "Ski School", "Pro Shop"],
        },
        "whakapapa" => ResortProfile {
            image: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=800&h=600&fit=crop",
            description: "New Zealand's largest ski area located on the volcanic slopes of Mt Ruapehu. Offers diverse terrain and stunning volcanic landscape views.",
            lifts: 9,
            difficulty: DifficultyBreakdown { beginner: 25, intermediate: 50, advanced: 20, expert: 5 },
            amenities: &["Largest Ski Area", "Ski & Snowboard School", "Equipment Rental", "Multiple Restaurants", "Accommodation", "Childcare", "Medical Center", "Shopping"],
        },
        "turoa" => ResortProfile {
            image: "https://images.unsplash.com/photo-1606673842245-9d872b20e3b3?w=800&h=600&fit=crop",
            description: "The highest and largest ski area in New Zealand with the longest vertical drop. Known for its wide-open spaces and reliable snow conditions.",
            lifts: 9,
            difficulty: DifficultyBreakdown { beginner: 20, intermediate: 55, advanced: 20, expert: 5 },
            amenities: &["Highest Ski Field", "Ski School", "Equipment Rental", "Restaurant & Cafe", "First Aid", "Parking", "Retail Store", "Accommodation Nearby"],
        },
        "mthutt" => ResortProfile {
            image: "https://images.unsplash.com/photo-1551524164-7c4b7b7b7b4a?w=800&h=600&fit=crop",
            description: "Canterbury's premier ski destination with excellent snow reliability and modern facilities. Features diverse terrain suitable for all skill levels.",
            lifts: 5,
            difficulty: DifficultyBreakdown { beginner: 25, intermediate: 50, advanced: 20, expert: 5 },
            ..ResortProfile::default()
        },
        "porters" => ResortProfile {
            image: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=800&h=600&fit=crop",
            description: "Canterbury ski field known for its family-friendly atmosphere and excellent learning terrain. Close to Christchurch with reliable snow conditions.",
            lifts: 4,
            difficulty: DifficultyBreakdown { beginner: 40, intermediate: 45, advanced: 15, expert: 0 },
            ..ResortProfile::default()
        },
        _ => ResortProfile::default(),
    }
}

/// Terrain figures and highlight reels shown on the details surface.
pub struct ResortExtras {
    pub skiable: u32,
    pub longest_run: &'static str,
    pub base_elevation: u32,
    pub summit_elevation: u32,
    pub highlights: &'static [&'static str],
}

impl Default for ResortExtras {
    fn default() -> Self {
        Self {
            skiable: 3340,
            longest_run: "11.2 km",
            base_elevation: 675,
            summit_elevation: 2284,
            highlights: &["Alpine Bowl", "Glacier Express", "Peak 2 Peak Gondola", "Village Chairlift"],
        }
    }
}

pub fn extras(resort_id: &str) -> ResortExtras {
    match resort_id {
        "coronetpeak" => ResortExtras {
            skiable: 481,
            longest_run: "2.5 km",
            highlights: &["Express Quad", "Rocky Gully", "Coronet Six", "Back Bowls"],
            ..ResortExtras::default()
        },
        _ => ResortExtras::default(),
    }
}
