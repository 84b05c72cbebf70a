use serde::{Deserialize, Serialize};

/// One answer row of the Holding Labour section (section 2).
/// Questions 2-4 carry male/female counts; questions 5-7 carry a
/// Yes/No/Not Applicable response instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabourAnswer {
    #[serde(default)]
    pub id: i64,
    pub question_no: u32,
    #[serde(default)]
    pub question_text: String,
    #[serde(default)]
    pub male_count: i64,
    #[serde(default)]
    pub female_count: i64,
    #[serde(default)]
    pub total_count: i64,
    #[serde(default = "default_option_response")]
    pub option_response: String,
}

fn default_option_response() -> String {
    OPTION_NOT_APPLICABLE.to_string()
}

pub const OPTION_YES: &str = "Yes";
pub const OPTION_NO: &str = "No";
pub const OPTION_NOT_APPLICABLE: &str = "Not Applicable";

pub const OPTION_RESPONSES: [&str; 3] = [OPTION_YES, OPTION_NO, OPTION_NOT_APPLICABLE];

/// Question numbers that take male/female counts rather than an option.
pub const COUNT_QUESTIONS: [u32; 3] = [2, 3, 4];

/// Default questions seeded for a first-time holder (question_no, text).
pub const DEFAULT_QUESTIONS: [(u32, &str); 6] = [
    (
        2,
        "How many permanent workers including administrative staff were hired on the holding from Aug 1, 2024 to Jul 31, 2025 (excluding household)?",
    ),
    (
        3,
        "How many temporary workers including administrative staff were hired on the holding from Aug 1, 2024 to Jul 31, 2025 (excluding household)?",
    ),
    (
        4,
        "What was the number of non-Bahamian workers on the holding from Aug 1, 2024 to Jul 31, 2025?",
    ),
    (5, "Did any of your workers have work permits?"),
    (
        6,
        "Were there any volunteer workers on the holding (i.e. unpaid labourers)?",
    ),
    (
        7,
        "Did you use any agricultural contracted services (crop protection, pruning, composting, harvesting, animal services, irrigation, farm admin etc.) on the holding?",
    ),
];

impl LabourAnswer {
    pub fn is_count_question(&self) -> bool {
        COUNT_QUESTIONS.contains(&self.question_no)
    }

    /// Blank answer carrying the default question text for `question_no`.
    pub fn seeded(question_no: u32, question_text: &str) -> Self {
        Self {
            id: 0,
            question_no,
            question_text: question_text.to_string(),
            male_count: 0,
            female_count: 0,
            total_count: 0,
            option_response: default_option_response(),
        }
    }
}
