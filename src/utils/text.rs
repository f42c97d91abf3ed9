//! Text comparison and truncation helpers.

use std::cmp::Ordering;

/// Compare two display names the way a person would sort them: ignoring
/// case first, with lowercase ahead of uppercase when the names only differ
/// by case.
///
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| b.cmp(a))
}

/// Shorten `text` to at most `max` characters, ending with an ellipsis when
/// cut.
///
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut truncated: String = text.chars().take(max - 1).collect();
    truncated.push('…');
    truncated
}
