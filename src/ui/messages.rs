use crate::utils::colors::color_for_completed;
use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Questionnaire banner: title over a rule line.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}📋 {}{}", FG_BLUE, BOLD, msg, RESET);
    println!("{}{}{}", FG_BLUE, "─".repeat(40), RESET);
}

/// One line of the per-section progress view: completed sections get a
/// green check mark, pending ones stay grey.
pub fn section_row(no: u32, title: &str, done: bool) {
    let mark = if done { "✔" } else { " " };
    println!(
        "  {}{} Section {}: {}{}",
        color_for_completed(done),
        mark,
        no,
        title,
        RESET
    );
}
