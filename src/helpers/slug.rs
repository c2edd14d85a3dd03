//! Slug helper functions

use lazy_static::lazy_static;
use regex::Regex;

/// Check whether a slug is in canonical form: lowercase ASCII words
/// joined by single hyphens, e.g. `crypto-volatility-regulatory`
pub fn is_canonical(slug: &str) -> bool {
    lazy_static! {
        static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
    }
    SLUG_REGEX.is_match(slug)
}

/// Derive a canonical slug from a title
pub fn slugify(title: &str) -> String {
    slug::slugify(title)
}
