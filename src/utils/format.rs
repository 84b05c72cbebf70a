/// Text progress bar in the style "[███░░] 2/5".
pub fn progress_bar(done: usize, total: usize) -> String {
    let total = total.max(1);
    let done = done.min(total);

    let filled = "█".repeat(done);
    let empty = "░".repeat(total - done);

    format!("[{}{}] {}/{}", filled, empty, done, total)
}

/// Completion fraction rounded to the percent, e.g. "40%".
pub fn percent(done: usize, total: usize) -> String {
    let total = total.max(1);
    format!("{}%", (done * 100) / total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_two_of_five() {
        assert_eq!(progress_bar(2, 5), "[██░░░] 2/5");
        assert_eq!(percent(2, 5), "40%");
    }

    #[test]
    fn bar_clamps() {
        assert_eq!(progress_bar(7, 5), "[█████] 5/5");
        assert_eq!(progress_bar(0, 0), "[░] 0/1");
    }
}
