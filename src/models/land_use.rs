use serde::{Deserialize, Serialize};

/// Parent record of the Land Use section (section 5): at most one per holder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandUse {
    #[serde(default)]
    pub id: i64,
    pub total_area_acres: f64,
    #[serde(default)]
    pub years_agriculture: f64,
    pub main_purpose: String,
    pub num_parcels: i64,
    pub location: String,
    #[serde(default)]
    pub crop_methods: Vec<String>,
}

/// One land parcel row, child of `LandUse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parcel {
    #[serde(default)]
    pub id: i64,
    pub parcel_no: i64,
    pub total_acres: f64,
    #[serde(default)]
    pub developed_acres: f64,
    pub tenure: String,
    pub use_of_land: String,
    #[serde(default)]
    pub irrigated_area: f64,
    pub land_clearing: String,
}

/// Full section 5 submission: parent record plus the complete parcel set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandUseForm {
    #[serde(flatten)]
    pub main: LandUse,
    pub parcels: Vec<Parcel>,
}

pub const MAX_LOCATION_LEN: usize = 200;

pub const MAIN_PURPOSE_OPTIONS: [&str; 4] = [
    "For Sale Only/Commercial",
    "Mainly Sale with Some Consumption",
    "For Consumption Only/Subsistence",
    "Mainly Consumption with Some Sale",
];

pub const CROP_METHOD_OPTIONS: [&str; 6] = [
    "Tunnel",
    "Open Field",
    "Net house",
    "Greenhouse",
    "Netting",
    "Other",
];

pub const TENURE_OPTIONS: [&str; 8] = [
    "Privately Owned",
    "Generational/Commonage",
    "Privately Leased/Rented",
    "Crown Leased/Rented",
    "Squatting on Private Land",
    "Squatting on Crown Land",
    "Borrowed",
    "Other",
];

pub const USE_OF_LAND_OPTIONS: [&str; 9] = [
    "Temporary Crops",
    "Temporary Meadows and Pastures",
    "Temporary Fallow",
    "Permanent Crops",
    "Permanent Meadows and Pastures",
    "Forest & Other Wooded Land",
    "Wetland",
    "Farm Buildings & Farmyards",
    "Other",
];

pub const LAND_CLEARING_OPTIONS: [&str; 5] = [
    "Regenerative",
    "Hand Clearing",
    "Slash and burn",
    "Small machine",
    "Large machine",
];

impl Parcel {
    /// Blank first parcel used when a holder has no saved data yet.
    pub fn default_first() -> Self {
        Self {
            id: 0,
            parcel_no: 1,
            total_acres: 0.0,
            developed_acres: 0.0,
            tenure: "Privately Owned".to_string(),
            use_of_land: "Temporary Crops".to_string(),
            irrigated_area: 0.0,
            land_clearing: "Regenerative".to_string(),
        }
    }
}
