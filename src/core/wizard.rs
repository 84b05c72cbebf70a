//! Section navigator and per-request survey context.

use crate::db::progress;
use crate::errors::{AppError, AppResult};
use crate::models::section::Section;
use rusqlite::Connection;
use std::collections::BTreeSet;

/// 1-based cursor over the questionnaire sections, clamped to
/// `[1, total]`. Moving past either bound is a no-op; in particular,
/// crossing the upper bound never marks anything complete.
#[derive(Debug, Clone)]
pub struct Navigator {
    cursor: u32,
    total: u32,
}

impl Navigator {
    pub fn new(total: u32) -> Self {
        Self { cursor: 1, total: total.max(1) }
    }

    pub fn current(&self) -> u32 {
        self.cursor
    }

    pub fn advance(&mut self) -> u32 {
        if self.cursor < self.total {
            self.cursor += 1;
        }
        self.cursor
    }

    pub fn retreat(&mut self) -> u32 {
        if self.cursor > 1 {
            self.cursor -= 1;
        }
        self.cursor
    }

    /// Jump to a section, clamping out-of-range targets to the bounds.
    pub fn jump(&mut self, section_no: u32) -> u32 {
        self.cursor = section_no.clamp(1, self.total);
        self.cursor
    }
}

/// Everything one request needs about a holder's survey: the completed set
/// and a navigator seeded at the first incomplete section. Built from
/// persisted state on each request and discarded afterwards; nothing here
/// is shared or cached between requests.
#[derive(Debug)]
pub struct SurveyContext {
    pub holder_id: i64,
    pub completed: BTreeSet<u32>,
    pub nav: Navigator,
}

impl SurveyContext {
    pub fn open(conn: &Connection, holder_id: i64, total: u32) -> AppResult<Self> {
        let completed = progress::get_completed(conn, holder_id)?;

        let mut nav = Navigator::new(total);
        let first_incomplete = (1..=total).find(|n| !completed.contains(n));
        nav.jump(first_incomplete.unwrap_or(total));

        Ok(Self { holder_id, completed, nav })
    }

    pub fn current_section(&self) -> AppResult<Section> {
        let n = self.nav.current();
        Section::from_number(n).ok_or(AppError::UnknownSection(n))
    }

    pub fn is_complete(&self, section_no: u32) -> bool {
        self.completed.contains(&section_no)
    }

    pub fn done_count(&self) -> u32 {
        self.completed.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_clamps_at_upper_bound() {
        let mut nav = Navigator::new(5);
        nav.jump(5);
        assert_eq!(nav.advance(), 5);
        assert_eq!(nav.advance(), 5);
    }

    #[test]
    fn retreat_clamps_at_one() {
        let mut nav = Navigator::new(5);
        assert_eq!(nav.retreat(), 1);
    }

    #[test]
    fn jump_clamps_out_of_range() {
        let mut nav = Navigator::new(5);
        assert_eq!(nav.jump(0), 1);
        assert_eq!(nav.jump(99), 5);
        assert_eq!(nav.jump(3), 3);
    }
}
