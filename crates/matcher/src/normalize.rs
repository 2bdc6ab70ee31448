//! Query normalization and display-name casing.
use catalog::normalize_name;
use tracing::debug;

/// Lower-case and trim `query`, then keep at most `max_chars` chars.
///
/// Normalizing first means surrounding whitespace never eats into the cap.
/// A cut that lands after a space is trimmed again.
pub fn normalize_query(query: &str, max_chars: usize) -> String {
    let mut normalized = normalize_name(query);
    if let Some((cut, _)) = normalized.char_indices().nth(max_chars) {
        debug!(limit = max_chars, "query truncated");
        normalized.truncate(cut);
        normalized.truncate(normalized.trim_end().len());
    }
    normalized
}

/// Capitalize the first letter of every word and lower-case the rest.
///
/// A word starts at any cased letter not preceded by another cased letter,
/// so `"co-trimoxazole"` becomes `"Co-Trimoxazole"` and `"vitamin b12"`
/// becomes `"Vitamin B12"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = cased;
    }
    out
}
