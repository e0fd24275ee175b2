//! Text cleanup and tokenization helpers.
//!
//! Blank detection, case-insensitive comparison, bounded prefix extraction,
//! delimiter tokenization and markup stripping over borrowed string slices.
//! All functions are total; malformed input degrades to empty output.

/// Check whether a value is empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Return the value unless it is blank, in which case the fallback.
pub fn or_else<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if is_blank(value) {
        fallback
    } else {
        value
    }
}

/// ASCII-case-insensitive equality over optional values.
///
/// Two absent values are equal; absent versus present is not.
pub fn eq_ignore_case(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
        _ => false,
    }
}

/// Return the prefix before the first occurrence of any stop character.
///
/// The whole value if no stop character occurs; empty if the value is blank,
/// the stop-set is empty, or a stop character sits at position zero.
pub fn until_any<'a>(value: &'a str, stop_at: &[char]) -> &'a str {
    if stop_at.is_empty() || is_blank(value) {
        return "";
    }
    match value.find(stop_at) {
        Some(0) => "",
        Some(end) => value.get(..end).unwrap_or(""),
        None => value,
    }
}

/// Split on a separator, trimming each item and dropping empty ones.
///
/// Blank input yields an empty vec.
pub fn split_items(value: &str, separator: char) -> Vec<&str> {
    if is_blank(value) {
        return Vec::new();
    }
    value
        .split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// First item of a comma-separated list, or the default when blank.
pub fn first_item<'a>(value: &'a str, default: &'a str) -> &'a str {
    if is_blank(value) {
        return default;
    }
    value.split(',').next().unwrap_or(default)
}

/// Case-insensitive membership test against a set of candidates.
pub fn is_any_of(value: &str, candidates: &[&str]) -> bool {
    candidates.iter().any(|c| c.eq_ignore_ascii_case(value))
}

/// Case-insensitive substring test: does any candidate occur within the value?
pub fn is_any_part_of(value: &str, candidates: &[&str]) -> bool {
    if candidates.is_empty() || is_blank(value) {
        return false;
    }
    let haystack = value.to_ascii_lowercase();
    candidates
        .iter()
        .any(|c| haystack.contains(&c.to_ascii_lowercase()))
}

/// Strip angle-bracket tags and normalize non-breaking-space entities.
///
/// Tag contents are dropped wholesale; `&nbsp;` (and the entity without its
/// terminating semicolon, which shows up in scraped data) becomes a plain
/// space.
pub fn strip_markup(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_tag = false;
    for c in value.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&nbsp;", " ").replace("&nbsp", " ")
}

/// Check whether a value parses as an integer or floating-point number.
pub fn is_number(value: &str) -> bool {
    value.parse::<i64>().is_ok() || value.parse::<f64>().is_ok()
}

/// Check whether a value is blank or consists only of zero characters.
pub fn is_zeroes_or_blank(value: &str) -> bool {
    is_blank(value) || value.chars().all(|c| c == '0')
}

/// Lenient integer parse; zero for anything unparseable.
pub fn int_or_zero(value: &str) -> i32 {
    value.trim().parse().unwrap_or(0)
}

/// Lenient float parse; zero for anything unparseable.
pub fn double_or_zero(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}
