//! Shared rendering utilities and helpers.
//!
//! Low-level utilities used across UI components: cursor positioning and
//! character-safe truncation. Truncation operates on `char` boundaries, so
//! multi-byte captions (the backend titles are frequently Korean) never get
//! split mid-character.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates text to `max` characters, marking the cut with a trailing `...`.
///
/// Returns the text unchanged when it already fits.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let kept: String = text.chars().take(keep).collect();
    format!("{kept}...")
}

/// Truncates text to `max` characters keeping the tail, marking the cut with
/// a leading `...`.
///
/// Used for locators and long queries, where the end carries the useful
/// part.
#[must_use]
pub fn truncate_head(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let kept: String = text.chars().skip(count - keep).collect();
    format!("...{kept}")
}

/// Pads text with spaces on the right to exactly `width` characters.
///
/// Text longer than `width` is returned unchanged; callers truncate first.
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count >= width {
        return text.to_string();
    }
    format!("{text}{}", " ".repeat(width - count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_is_char_safe() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("너무너무너무 슬퍼", 7), "너무너무...");
    }

    #[test]
    fn truncate_head_keeps_the_tail() {
        assert_eq!(truncate_head("short", 10), "short");
        assert_eq!(truncate_head("http://example.com/m.png", 10), "...m/m.png");
    }

    #[test]
    fn pad_right_counts_chars_not_bytes() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("너무", 4), "너무  ");
        assert_eq!(pad_right("abcdef", 4), "abcdef");
    }
}
