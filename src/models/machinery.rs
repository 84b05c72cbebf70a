use serde::{Deserialize, Serialize};

/// Yes/No flag stored as 'Y' / 'N'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(rename = "Y")]
    Yes,
    #[serde(rename = "N")]
    No,
}

impl YesNo {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Y",
            YesNo::No => "N",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Y" => Some(YesNo::Yes),
            "N" => Some(YesNo::No),
            _ => None,
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

/// Machinery source: Owned, Rented/Leased, or Both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ownership {
    #[serde(rename = "O")]
    Owned,
    #[serde(rename = "RL")]
    RentedLeased,
    #[serde(rename = "B")]
    Both,
}

impl Ownership {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Ownership::Owned => "O",
            Ownership::RentedLeased => "RL",
            Ownership::Both => "B",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "O" => Some(Ownership::Owned),
            "RL" => Some(Ownership::RentedLeased),
            "B" => Some(Ownership::Both),
            _ => None,
        }
    }
}

/// One machinery inventory row (section 4).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineryRow {
    #[serde(default)]
    pub id: i64,
    pub has_item: YesNo,
    pub equipment_name: String,
    #[serde(default)]
    pub quantity_new: i64,
    #[serde(default)]
    pub quantity_used: i64,
    #[serde(default)]
    pub quantity_out_of_service: i64,
    pub source: Ownership,
}

/// Fixed equipment catalog presented to every holder; the two "Open Entry"
/// slots take a free-text equipment name.
pub const EQUIPMENT_CATALOG: [&str; 8] = [
    "Small Engine Machines (e.g. pole-saw, push mower, weed wacker, auger etc.)",
    "Tractors (below 100 horsepower)",
    "Tractors (100 horsepower or greater)",
    "Sprayers and dusters",
    "Trucks (including pickups)",
    "Cars / Jeeps / Station Wagons",
    "Open Entry 1",
    "Open Entry 2",
];

pub const MAX_EQUIPMENT_NAME: usize = 100;
pub const MAX_QUANTITY: i64 = 20;

impl MachineryRow {
    /// Blank catalog row defaults: not owned, zero quantities, owned source.
    pub fn catalog_default(equipment: &str) -> Self {
        Self {
            id: 0,
            has_item: YesNo::No,
            equipment_name: equipment.to_string(),
            quantity_new: 0,
            quantity_used: 0,
            quantity_out_of_service: 0,
            source: Ownership::Owned,
        }
    }

    pub fn total_quantity(&self) -> i64 {
        self.quantity_new + self.quantity_used + self.quantity_out_of_service
    }

    pub fn is_open_entry(&self) -> bool {
        self.equipment_name.starts_with("Open Entry")
    }
}
