// src/shared/slug.rs

use std::sync::OnceLock;

use regex::Regex;

/// The store derives slugs from titles and caps them at 96 characters.
pub const MAX_LENGTH: usize = 96;

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("valid slug pattern"))
}

/// Structural check only; whether the slug matches a document is the
/// store's answer.
pub fn is_valid(slug: &str) -> bool {
    slug.len() <= MAX_LENGTH && pattern().is_match(slug)
}

/// Stored slugs are lowercase; request values are normalized before
/// querying.
pub fn normalize(slug: &str) -> String {
    slug.trim().to_lowercase()
}
