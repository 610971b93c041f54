//! Character name variants
//!
//! Derives the strings a character may be referred to by in a plot summary.
//! "Tyler Durden (imaginary)" → "Tyler Durden (imaginary)", "Tyler Durden",
//! "Tyler", "Durden".

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Variants must be longer than this many characters ("Al", "Jo" are too noisy)
const MIN_VARIANT_EXCLUSIVE: usize = 2;

static TRAILING_PARENTHETICAL: OnceLock<Regex> = OnceLock::new();

fn trailing_parenthetical() -> &'static Regex {
    TRAILING_PARENTHETICAL.get_or_init(|| {
        Regex::new(r"\s*\(.*?\)\s*$").expect("trailing parenthetical pattern is valid")
    })
}

/// Name parts derived from a character's display name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameInfo {
    pub full_name: String,
    pub cleaned_full_name: String,
    pub first_name: String,
    pub last_name: String,
    /// Distinct matchable variants, longest first
    pub unique_variants: Vec<String>,
}

impl NameInfo {
    pub fn has_variants(&self) -> bool {
        !self.unique_variants.is_empty()
    }
}

/// Derive the name variants for `full_name`. Never fails; empty input gives
/// an empty `NameInfo`.
pub fn extract_variants(full_name: &str) -> NameInfo {
    if full_name.is_empty() {
        return NameInfo::default();
    }

    let cleaned = trailing_parenthetical().replace(full_name, "");
    let cleaned = cleaned.trim().to_string();

    let parts: Vec<&str> = cleaned.split_whitespace().collect();
    let first_name = parts.first().map(|s| s.to_string()).unwrap_or_default();
    let last_name = if parts.len() > 1 {
        parts[parts.len() - 1].to_string()
    } else {
        String::new()
    };

    let mut variants: Vec<String> = Vec::new();
    push_variant(&mut variants, &cleaned);
    push_variant(&mut variants, &first_name);
    if last_name != first_name {
        push_variant(&mut variants, &last_name);
    }
    if full_name != cleaned {
        push_variant(&mut variants, full_name);
    }

    // Stable: equal lengths keep cleaned, first, last, full order
    variants.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

    NameInfo {
        full_name: full_name.to_string(),
        cleaned_full_name: cleaned,
        first_name,
        last_name,
        unique_variants: variants,
    }
}

fn push_variant(variants: &mut Vec<String>, candidate: &str) {
    if candidate.chars().count() > MIN_VARIANT_EXCLUSIVE && !variants.iter().any(|v| v == candidate) {
        variants.push(candidate.to_string());
    }
}
