use serde::{Deserialize, Serialize};

/// One permanent worker row (section 3). All attributes are stored as the
/// short census codes; the option tables below map labels to codes the same
/// way the paper questionnaire does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermanentWorker {
    #[serde(default)]
    pub id: i64,
    pub position_title: String,
    pub sex: String,
    pub age_group: String,
    pub nationality: String,
    pub education_level: String,
    pub agri_training: String,
    pub main_duties: String,
    pub working_time: String,
}

/// (label, code) option tables. Validation accepts the code column only.
pub const POSITION_OPTIONS: [(&str, &str); 5] = [
    ("Manager", "1"),
    ("Farm Worker", "2"),
    ("Grower", "3"),
    ("Office Worker", "4"),
    ("Technician", "5"),
];

pub const SEX_OPTIONS: [(&str, &str); 2] = [("Male", "M"), ("Female", "F")];

pub const AGE_OPTIONS: [(&str, &str); 6] = [
    ("15-24", "1"),
    ("25-34", "2"),
    ("35-44", "3"),
    ("45-54", "4"),
    ("55-64", "5"),
    ("65+", "6"),
];

pub const NATIONALITY_OPTIONS: [(&str, &str); 2] = [("Bahamian", "B"), ("Non-Bahamian", "NB")];

pub const EDUCATION_OPTIONS: [(&str, &str); 9] = [
    ("No Schooling", "1"),
    ("Primary", "2"),
    ("Junior Secondary", "3"),
    ("Senior Secondary", "4"),
    ("Undergraduate", "5"),
    ("Masters", "6"),
    ("Doctorate", "7"),
    ("Vocational", "8"),
    ("Professional Designation", "9"),
];

pub const AG_TRAINING_OPTIONS: [(&str, &str); 2] = [("Yes", "Y"), ("No", "N")];

pub const MAIN_DUTIES_OPTIONS: [(&str, &str); 7] = [
    ("Land Preparation", "1"),
    ("Establishment", "2"),
    ("Maintenance", "3"),
    ("Harvesting/Slaughtering", "4"),
    ("Transportation", "5"),
    ("Marketing/Management", "6"),
    ("Administrative", "7"),
];

pub const WORKING_TIME_OPTIONS: [(&str, &str); 6] = [
    ("None", "N"),
    ("Full time", "F"),
    ("Part time", "P"),
    ("1-3 months", "P3"),
    ("4-6 months", "P6"),
    ("7+ months", "P7"),
];

/// True when `code` appears in the code column of `options`.
pub fn valid_code(options: &[(&str, &str)], code: &str) -> bool {
    options.iter().any(|(_, c)| *c == code)
}

/// Label for a code, falling back to the code itself.
pub fn label_for(options: &[(&str, &str)], code: &str) -> String {
    options
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(l, _)| l.to_string())
        .unwrap_or_else(|| code.to_string())
}
