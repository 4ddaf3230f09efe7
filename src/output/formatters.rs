//! Formatting utilities for terminal output

/// Width of banner rules
pub const RULE_WIDTH: usize = 70;

/// Join progress characters with single spaces, e.g. `t _ _ x`
#[must_use]
pub fn format_progress(progress: &[char]) -> String {
    let mut result = String::with_capacity(progress.len() * 2);
    for (i, ch) in progress.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(*ch);
    }
    result
}

/// Create a lives bar: filled hearts for remaining lives, hollow for spent ones
#[must_use]
pub fn lives_bar(remaining: u32, total: u32) -> String {
    let remaining = remaining.min(total) as usize;
    let total = total as usize;

    format!("{}{}", "♥".repeat(remaining), "♡".repeat(total - remaining))
}

/// Comma-separated tried letters, or a dash when there are none
#[must_use]
pub fn format_tried(letters: &[char]) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }

    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Horizontal rule for banners
#[must_use]
pub fn rule() -> String {
    "═".repeat(RULE_WIDTH)
}
