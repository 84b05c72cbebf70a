//! Shared validation plumbing.
//!
//! Rules never fail fast: every error for a submission is collected and
//! reported together. A report with hard errors blocks the save; warnings
//! are surfaced but do not block.

use serde::Serialize;

#[derive(Debug, Default, Clone, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error<S: Into<String>>(&mut self, msg: S) {
        self.errors.push(msg.into());
    }

    pub fn warning<S: Into<String>>(&mut self, msg: S) {
        self.warnings.push(msg.into());
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Free-text field bounded by a maximum character length.
pub fn check_text_len(report: &mut ValidationReport, label: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        report.error(format!(
            "{} too long (max {} characters): {}",
            label, max, value
        ));
    }
}

/// Numeric quantity bounded to a closed range.
pub fn check_range(report: &mut ValidationReport, label: &str, value: i64, min: i64, max: i64) {
    if value < min || value > max {
        report.error(format!("{} must be between {} and {}", label, min, max));
    }
}

pub fn check_non_negative(report: &mut ValidationReport, label: &str, value: f64) {
    if value < 0.0 {
        report.error(format!("{} must be positive.", label));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_all_errors() {
        let mut report = ValidationReport::new();
        check_range(&mut report, "Quantity new", 25, 0, 20);
        check_range(&mut report, "Quantity used", -1, 0, 20);
        check_text_len(&mut report, "Equipment name", &"x".repeat(101), 100);

        assert_eq!(report.errors.len(), 3);
        assert!(!report.is_clean());
    }

    #[test]
    fn warnings_do_not_block() {
        let mut report = ValidationReport::new();
        report.warning("Irrigated Area exceeds Total Acres.");
        assert!(report.is_clean());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn range_bounds_inclusive() {
        let mut report = ValidationReport::new();
        check_range(&mut report, "q", 0, 0, 20);
        check_range(&mut report, "q", 20, 0, 20);
        assert!(report.is_clean());
    }
}
