//! Small shared helpers: avatar initials and tag normalization.

/// Uppercase initials of a name's space-separated words.
///
/// "Maya Patel" becomes "MP". Returns an empty string for a blank name.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Normalize a tag list: trim, uppercase, drop blanks, and deduplicate
/// case-insensitively while preserving first-occurrence order.
#[must_use]
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tags.iter()
        .map(|tag| tag.trim().to_uppercase())
        .filter(|tag| !tag.is_empty() && seen.insert(tag.clone()))
        .collect()
}
