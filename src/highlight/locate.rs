//! Occurrence location for name variants
//!
//! Each variant is compiled into a case-insensitive literal matcher. Variants
//! are scanned longest-first so that "John Smith" claims its span before
//! "Smith" gets a chance to.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

// =============================================================================
// Types
// =============================================================================

/// Byte range `[start, end)` where a name variant was found verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitRegion {
    pub start: usize,
    pub end: usize,
}

impl HitRegion {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True when `other` lies entirely inside `self`
    pub fn contains(&self, other: &HitRegion) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

/// A literal occurrence found inside some text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantMatch {
    pub start: usize,
    pub end: usize,
}

/// Compiled case-insensitive literal matchers, one per variant
///
/// Variant text is escaped, so "Mr. (X)" matches only itself.
#[derive(Debug, Clone)]
pub struct VariantMatcher {
    patterns: Vec<(String, Regex)>,
}

impl VariantMatcher {
    /// Build matchers for `variants`, preserving their order
    pub fn new<S: AsRef<str>>(variants: &[S]) -> Self {
        let patterns = variants
            .iter()
            .map(|v| v.as_ref())
            .filter(|v| !v.is_empty())
            .filter_map(|v| {
                RegexBuilder::new(&regex::escape(v))
                    .case_insensitive(true)
                    .build()
                    .ok()
                    .map(|re| (v.to_string(), re))
            })
            .collect();

        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(v, _)| v.as_str())
    }

    /// Non-overlapping occurrences of the variant at `index`
    fn find_variant<'t>(&'t self, index: usize, text: &'t str) -> impl Iterator<Item = VariantMatch> + 't {
        self.patterns[index]
            .1
            .find_iter(text)
            .map(|m| VariantMatch { start: m.start(), end: m.end() })
    }

    /// Every occurrence of every variant, unordered and possibly overlapping
    pub fn find_all(&self, text: &str) -> Vec<VariantMatch> {
        (0..self.patterns.len())
            .flat_map(|i| self.find_variant(i, text))
            .collect()
    }
}

// =============================================================================
// Hit location
// =============================================================================

/// Find every region of `raw_text` naming the character.
///
/// Returns regions sorted by start with no overlap or nesting. A match fully
/// inside an existing region is dropped; a match that swallows existing
/// regions evicts them.
pub fn locate_hits(raw_text: &str, matcher: &VariantMatcher) -> Vec<HitRegion> {
    if raw_text.is_empty() || matcher.is_empty() {
        return vec![];
    }

    let mut regions: Vec<HitRegion> = Vec::new();

    for index in 0..matcher.len() {
        for m in matcher.find_variant(index, raw_text) {
            let candidate = HitRegion::new(m.start, m.end);
            if candidate.is_empty() {
                continue;
            }
            if regions.iter().any(|r| r.contains(&candidate)) {
                continue;
            }
            regions.retain(|r| !candidate.contains(r));
            regions.push(candidate);
        }
    }

    regions.sort_by_key(|r| r.start);
    regions
}
