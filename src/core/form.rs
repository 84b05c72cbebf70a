//! Form controller: turns persisted state into a render description for the
//! shell, and turns a submission back into a save plus an explicit outcome.
//! The shell owns all rendering; nothing here prints.

use crate::core::sections::{self, SaveOutcome, SectionData};
use crate::db::pool::DbPool;
use crate::db::progress;
use crate::errors::AppResult;
use crate::models::labour::OPTION_RESPONSES;
use crate::models::land_use::{
    CROP_METHOD_OPTIONS, LAND_CLEARING_OPTIONS, MAIN_PURPOSE_OPTIONS, MAX_LOCATION_LEN,
    TENURE_OPTIONS, USE_OF_LAND_OPTIONS,
};
use crate::models::machinery::{MAX_EQUIPMENT_NAME, MAX_QUANTITY};
use crate::models::section::Section;
use crate::models::worker::{
    AG_TRAINING_OPTIONS, AGE_OPTIONS, EDUCATION_OPTIONS, MAIN_DUTIES_OPTIONS,
    NATIONALITY_OPTIONS, POSITION_OPTIONS, SEX_OPTIONS, WORKING_TIME_OPTIONS,
};
use serde::Serialize;

/// What kind of input a field takes, with its bounds where they apply.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Count,
    Quantity { min: i64, max: i64 },
    Area,
    Text { max_len: usize },
    YesNo,
    Options { choices: Vec<String> },
    MultiOptions { choices: Vec<String> },
}

/// One field of the section form, as the shell should render it.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// Render description for one section: the field layout plus the rows to
/// prefill it with (existing data when present, section defaults otherwise).
#[derive(Debug, Serialize)]
pub struct FormPlan {
    pub section_no: u32,
    pub title: &'static str,
    pub completed: bool,
    pub fields: Vec<FieldSpec>,
    pub rows: serde_json::Value,
}

/// Result of one submission step: what happened, and where the survey
/// cursor should go next. `next_section` is `None` when the save did not
/// go through or the holder is already on the last section.
#[derive(Debug, Serialize)]
pub struct StepOutcome {
    pub saved: bool,
    pub message: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub next_section: Option<u32>,
}

fn choices(options: &[(&str, &str)]) -> Vec<String> {
    options.iter().map(|(label, _)| label.to_string()).collect()
}

fn plain(options: &[&str]) -> Vec<String> {
    options.iter().map(|s| s.to_string()).collect()
}

fn fields_for(section: Section) -> Vec<FieldSpec> {
    match section {
        Section::HolderInfo => vec![
            FieldSpec { name: "name", label: "Holder name", kind: FieldKind::Text { max_len: 200 } },
            FieldSpec { name: "location", label: "Location", kind: FieldKind::Text { max_len: MAX_LOCATION_LEN } },
        ],
        Section::Labour => vec![
            FieldSpec { name: "male_count", label: "Male", kind: FieldKind::Count },
            FieldSpec { name: "female_count", label: "Female", kind: FieldKind::Count },
            FieldSpec {
                name: "option_response",
                label: "Response",
                kind: FieldKind::Options { choices: plain(&OPTION_RESPONSES) },
            },
        ],
        Section::PermanentWorkers => vec![
            FieldSpec { name: "position_title", label: "Position Title", kind: FieldKind::Options { choices: choices(&POSITION_OPTIONS) } },
            FieldSpec { name: "sex", label: "Sex", kind: FieldKind::Options { choices: choices(&SEX_OPTIONS) } },
            FieldSpec { name: "age_group", label: "Age Group", kind: FieldKind::Options { choices: choices(&AGE_OPTIONS) } },
            FieldSpec { name: "nationality", label: "Nationality", kind: FieldKind::Options { choices: choices(&NATIONALITY_OPTIONS) } },
            FieldSpec { name: "education_level", label: "Education Level", kind: FieldKind::Options { choices: choices(&EDUCATION_OPTIONS) } },
            FieldSpec { name: "agri_training", label: "Agricultural Training", kind: FieldKind::Options { choices: choices(&AG_TRAINING_OPTIONS) } },
            FieldSpec { name: "main_duties", label: "Main Duties", kind: FieldKind::Options { choices: choices(&MAIN_DUTIES_OPTIONS) } },
            FieldSpec { name: "working_time", label: "Working Time", kind: FieldKind::Options { choices: choices(&WORKING_TIME_OPTIONS) } },
        ],
        Section::Machinery => vec![
            FieldSpec { name: "has_item", label: "Do you have this equipment?", kind: FieldKind::YesNo },
            FieldSpec { name: "equipment_name", label: "Equipment", kind: FieldKind::Text { max_len: MAX_EQUIPMENT_NAME } },
            FieldSpec { name: "quantity_new", label: "New", kind: FieldKind::Quantity { min: 0, max: MAX_QUANTITY } },
            FieldSpec { name: "quantity_used", label: "Used", kind: FieldKind::Quantity { min: 0, max: MAX_QUANTITY } },
            FieldSpec { name: "quantity_out_of_service", label: "Out of Service", kind: FieldKind::Quantity { min: 0, max: MAX_QUANTITY } },
            FieldSpec { name: "source", label: "Source", kind: FieldKind::Options { choices: vec!["Owned".into(), "Rented/Leased".into(), "Both".into()] } },
        ],
        Section::LandUse => vec![
            FieldSpec { name: "total_area_acres", label: "Total Area in Acres", kind: FieldKind::Area },
            FieldSpec { name: "years_agriculture", label: "Years in Agriculture", kind: FieldKind::Area },
            FieldSpec { name: "main_purpose", label: "Main Purpose", kind: FieldKind::Options { choices: plain(&MAIN_PURPOSE_OPTIONS) } },
            FieldSpec { name: "location", label: "Location", kind: FieldKind::Text { max_len: MAX_LOCATION_LEN } },
            FieldSpec { name: "crop_methods", label: "Crop Methods", kind: FieldKind::MultiOptions { choices: plain(&CROP_METHOD_OPTIONS) } },
            FieldSpec { name: "tenure", label: "Parcel Tenure", kind: FieldKind::Options { choices: plain(&TENURE_OPTIONS) } },
            FieldSpec { name: "use_of_land", label: "Use of Land", kind: FieldKind::Options { choices: plain(&USE_OF_LAND_OPTIONS) } },
            FieldSpec { name: "land_clearing", label: "Land Clearing", kind: FieldKind::Options { choices: plain(&LAND_CLEARING_OPTIONS) } },
        ],
    }
}

/// Current rows for the section, or its defaults when nothing is saved yet.
pub fn current_rows(pool: &mut DbPool, holder_id: i64, section: Section) -> AppResult<serde_json::Value> {
    use crate::core::sections::{labour, land_use, machinery, permanent};

    let value = match section {
        Section::HolderInfo => {
            let holder = crate::db::holders::require_holder(&pool.conn, holder_id)?;
            serde_json::to_value(holder)?
        }
        // first visit persists the seeded default questions
        Section::Labour => serde_json::to_value(labour::load_or_seed(pool, holder_id)?)?,
        Section::PermanentWorkers => serde_json::to_value(permanent::load(pool, holder_id)?)?,
        Section::Machinery => {
            let rows = machinery::load(pool, holder_id)?;
            if rows.is_empty() {
                serde_json::to_value(machinery::defaults())?
            } else {
                serde_json::to_value(rows)?
            }
        }
        Section::LandUse => match land_use::load(pool, holder_id)? {
            Some(form) => serde_json::to_value(form)?,
            None => serde_json::to_value(land_use::defaults())?,
        },
    };

    Ok(value)
}

/// Build the render description for one section of a holder's survey.
pub fn plan(pool: &mut DbPool, holder_id: i64, section: Section) -> AppResult<FormPlan> {
    let completed = progress::get_completed(&pool.conn, holder_id)?.contains(&section.number());
    let rows = current_rows(pool, holder_id, section)?;

    Ok(FormPlan {
        section_no: section.number(),
        title: section.title(),
        completed,
        fields: fields_for(section),
        rows,
    })
}

/// Persist one submission and report the explicit outcome. Section 3 marks
/// itself complete on a successful save; other sections complete via
/// `mark_complete` (the `--complete` path) so a holder can save partial
/// work without closing the section.
pub fn submit(
    pool: &mut DbPool,
    holder_id: i64,
    data: &SectionData,
    total_sections: u32,
    complete_on_save: bool,
) -> AppResult<StepOutcome> {
    let section = data.section();
    let section_no = section.number();

    let outcome = sections::save_section(pool, holder_id, data)?;

    let step = match outcome {
        SaveOutcome::Saved { rows, warnings } => {
            if complete_on_save || section == Section::PermanentWorkers {
                progress::mark_complete(&pool.conn, holder_id, section_no)?;
            }

            let next = if section_no < total_sections {
                Some(section_no + 1)
            } else {
                None
            };

            StepOutcome {
                saved: true,
                message: format!("{} saved ({} rows)", section.title(), rows),
                errors: Vec::new(),
                warnings,
                next_section: next,
            }
        }
        SaveOutcome::Nothing => StepOutcome {
            saved: false,
            message: "Nothing to save: the submission was empty".to_string(),
            errors: Vec::new(),
            warnings: Vec::new(),
            next_section: None,
        },
        SaveOutcome::Rejected(report) => StepOutcome {
            saved: false,
            message: format!("{} not saved: fix the errors below", section.title()),
            errors: report.errors,
            warnings: report.warnings,
            next_section: None,
        },
        SaveOutcome::Failed { message } => StepOutcome {
            saved: false,
            message,
            errors: Vec::new(),
            warnings: Vec::new(),
            next_section: None,
        },
    };

    Ok(step)
}
