//! Keyword heuristics for deciding whether a scraped text fragment is a
//! pilot-role opening.
//!
//! Each source carries its own positive/exclusion lexicons since the noise
//! differs per site (ground-ops roles on an ATS, navigation boilerplate on a
//! career page). A fragment is accepted only if it contains at least one
//! positive keyword and none of the exclusions; length bounds reject
//! fragments that cannot be a real title.

/// True if the lower-cased haystack contains any of the given keywords.
pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    let lower = haystack.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

/// Positive-and-not-excluded check used by every source.
pub fn is_role_match(text: &str, positive: &[&str], exclusions: &[&str]) -> bool {
    contains_any(text, positive) && !contains_any(text, exclusions)
}

/// Title length bounds: too short is not a real title, too long is not a
/// title at all. Lengths are in characters, so accented fragments are not
/// penalized near the ceiling.
pub fn within_bounds(text: &str, min: usize, max: usize) -> bool {
    let len = text.chars().count();
    len > min && len < max
}

/// Uppercase the first character, leaving the rest untouched. Scraped
/// fragments are lower-cased during matching and re-capitalized for display.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
