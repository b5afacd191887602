//! Company name normalization

use super::vocab::is_legal_suffix;

/// Lowercased tokens of a company name, punctuation removed, legal suffixes kept.
///
/// Any character that is not an ASCII letter, ASCII digit or whitespace acts
/// as a separator, so `"Acme-Widgets, Inc."` gives `["acme", "widgets", "inc"]`.
pub fn company_tokens(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Normalize a company name for comparison.
///
/// Returns an empty string for empty input, or when every token is a legal
/// suffix (`"Holdings Ltd"`). Token order is preserved.
pub fn normalize_company(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    company_tokens(text)
        .into_iter()
        .filter(|token| !is_legal_suffix(token))
        .collect::<Vec<_>>()
        .join(" ")
}
