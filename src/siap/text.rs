//! Field cleaning and fixed-width fitting.
//!
//! Widths are counted in `char`s, never bytes, so partner names with accents
//! (`Compañía`, `José`) pad and truncate to the same visible width as ASCII.

/// Replace every run of characters matching `is_break` with one space.
fn collapse_runs(value: &str, is_break: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_run = false;
    for ch in value.chars() {
        if is_break(ch) {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// Control characters plus the Unicode line and paragraph separators.
fn is_line_break(ch: char) -> bool {
    ch.is_control() || matches!(ch, '\u{2028}' | '\u{2029}')
}

/// Clean a value for a fixed-width field: line breaks, tabs and other control
/// characters become spaces.
pub(crate) fn clean_fixed(value: &str) -> String {
    collapse_runs(value, is_line_break)
}

/// Clean a value for a pipe-delimited field: the separator and all control
/// characters become spaces.
pub(crate) fn clean_delimited(value: &str) -> String {
    collapse_runs(value, |ch| ch == '|' || is_line_break(ch))
}

/// The cleaned and trimmed tax id, or the cleaned `placeholder` when the tax
/// id is absent or nothing but whitespace after cleaning.
pub(crate) fn tax_id_or(
    tax_id: Option<&str>,
    placeholder: &str,
    clean: fn(&str) -> String,
) -> String {
    let cleaned = tax_id.map(clean).unwrap_or_default();
    match cleaned.trim() {
        "" => clean(placeholder),
        trimmed => trimmed.to_string(),
    }
}

/// Left-justify `value` in exactly `width` characters, truncating or
/// space-padding as needed.
pub(crate) fn fit(value: &str, width: usize) -> String {
    let mut out: String = value.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat_n(' ', width - len));
    out
}
