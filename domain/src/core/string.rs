//! String helpers shared by log lines and console output.

/// Single-line preview of `s`, at most `max_chars` characters.
///
/// Newlines and runs of whitespace collapse to one space; a trailing `...`
/// marks truncation (and counts toward `max_chars`).
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = flat.chars().take(keep).collect();
    out.push_str("...");
    out
}
