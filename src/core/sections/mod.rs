//! Section repositories: load existing rows, validate, and save with
//! replace-on-save semantics (delete all rows for the holder, then bulk
//! insert the new set, inside one transaction).

pub mod labour;
pub mod land_use;
pub mod machinery;
pub mod permanent;

use crate::core::validate::ValidationReport;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::labour::LabourAnswer;
use crate::models::land_use::LandUseForm;
use crate::models::machinery::MachineryRow;
use crate::models::section::Section;
use crate::models::worker::PermanentWorker;

/// Typed payload of one section submission, parsed from the shell's JSON.
#[derive(Debug, Clone)]
pub enum SectionData {
    Labour(Vec<LabourAnswer>),
    Permanent(Vec<PermanentWorker>),
    Machinery(Vec<MachineryRow>),
    LandUse(LandUseForm),
}

impl SectionData {
    pub fn section(&self) -> Section {
        match self {
            SectionData::Labour(_) => Section::Labour,
            SectionData::Permanent(_) => Section::PermanentWorkers,
            SectionData::Machinery(_) => Section::Machinery,
            SectionData::LandUse(_) => Section::LandUse,
        }
    }

    /// Parse a JSON payload into the shape the section expects.
    pub fn from_json(section: Section, json: &str) -> AppResult<Self> {
        match section {
            Section::Labour => Ok(SectionData::Labour(serde_json::from_str(json)?)),
            Section::PermanentWorkers => Ok(SectionData::Permanent(serde_json::from_str(json)?)),
            Section::Machinery => Ok(SectionData::Machinery(serde_json::from_str(json)?)),
            Section::LandUse => Ok(SectionData::LandUse(serde_json::from_str(json)?)),
            Section::HolderInfo => Err(AppError::InvalidInput(
                "Section 1 has no row payload: holder data is managed with `register`.".into(),
            )),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SectionData::Labour(rows) => rows.is_empty(),
            SectionData::Permanent(rows) => rows.is_empty(),
            SectionData::Machinery(rows) => rows.is_empty(),
            SectionData::LandUse(form) => form.parcels.is_empty(),
        }
    }
}

/// Outcome of a section save: the persistence boundary never leaks a raw
/// database error to the shell.
#[derive(Debug)]
pub enum SaveOutcome {
    /// Rows written and committed.
    Saved { rows: usize, warnings: Vec<String> },
    /// Empty payload: nothing to save, reported as a warning.
    Nothing,
    /// Hard validation errors; nothing was written.
    Rejected(ValidationReport),
    /// Statement or transaction failure; the batch was rolled back.
    Failed { message: String },
}

impl SaveOutcome {
    pub fn saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved { .. })
    }
}

/// Validate then persist one section payload for a holder.
pub fn save_section(pool: &mut DbPool, holder_id: i64, data: &SectionData) -> AppResult<SaveOutcome> {
    if data.is_empty() {
        return Ok(SaveOutcome::Nothing);
    }

    let report = match data {
        SectionData::Labour(rows) => labour::validate(rows),
        SectionData::Permanent(rows) => permanent::validate(rows),
        SectionData::Machinery(rows) => machinery::validate(rows),
        SectionData::LandUse(form) => land_use::validate(form),
    };

    if !report.is_clean() {
        return Ok(SaveOutcome::Rejected(report));
    }

    let written = match data {
        SectionData::Labour(rows) => labour::replace(pool, holder_id, rows),
        SectionData::Permanent(rows) => permanent::replace(pool, holder_id, rows),
        SectionData::Machinery(rows) => machinery::replace(pool, holder_id, rows),
        SectionData::LandUse(form) => land_use::replace(pool, holder_id, form),
    };

    match written {
        Ok(rows) => Ok(SaveOutcome::Saved {
            rows,
            warnings: report.warnings,
        }),
        // Persistence failures stop at this boundary; the transaction has
        // already rolled back, so the user can simply retry.
        Err(AppError::Db(e)) => Ok(SaveOutcome::Failed {
            message: format!("Database error: {e}"),
        }),
        Err(e) => Err(e),
    }
}
