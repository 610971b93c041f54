//! PlotHighlighter - character highlighting facade
//!
//! Runs the full pipeline for one hover/selection event:
//!
//! ```text
//! name ──► extract_variants ──► VariantMatcher
//!                                    │
//! plot ──► locate_hits ──► resolve_passage (per hit) ──► merge_passages ──► TextRenderer
//! ```
//!
//! Every call is synchronous and self-contained. When nothing can be
//! highlighted (no plot, no name, no usable variant, no occurrence) the
//! caller's fallback markup is returned with `active = false`.

use serde::{Deserialize, Serialize};

use super::config::{ConfigError, HighlightConfig};
use super::locate::{locate_hits, VariantMatcher};
use super::merge::merge_passages;
use super::names::{extract_variants, NameInfo};
use super::passage::{resolve_passage, Passage};
use super::render::{format_plain_plot, TextRenderer};

// =============================================================================
// Result Types
// =============================================================================

/// Outcome of one highlight request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub markup: String,
    /// False when the fallback markup was returned
    pub active: bool,
    pub stats: HighlightStats,
}

/// Counts and timing for one highlight request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighlightStats {
    pub variant_count: usize,
    pub hit_count: usize,
    pub passage_count: usize,
    pub timing_ms: f64,
}

// =============================================================================
// PlotHighlighter
// =============================================================================

#[derive(Debug, Clone)]
pub struct PlotHighlighter {
    config: HighlightConfig,
    renderer: TextRenderer,
}

impl Default for PlotHighlighter {
    fn default() -> Self {
        let config = HighlightConfig::default();
        let renderer = TextRenderer::new(&config);
        Self { config, renderer }
    }
}

impl PlotHighlighter {
    pub fn new(config: HighlightConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let renderer = TextRenderer::new(&config);
        Ok(Self { config, renderer })
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Highlight `character_name` inside `raw_plot`, or hand back `fallback`
    pub fn highlight(&self, raw_plot: Option<&str>, character_name: Option<&str>, fallback: &str) -> Highlight {
        let start = instant::Instant::now();

        let (raw_plot, character_name) = match (raw_plot, character_name) {
            (Some(plot), Some(name)) if !plot.is_empty() && !name.trim().is_empty() => (plot, name),
            _ => return Self::inactive(fallback, HighlightStats::default()),
        };

        let name_info = extract_variants(character_name);
        let matcher = VariantMatcher::new(&name_info.unique_variants);
        let mut stats = HighlightStats {
            variant_count: matcher.len(),
            ..HighlightStats::default()
        };
        if matcher.is_empty() {
            return Self::inactive(fallback, stats);
        }

        let hits = locate_hits(raw_plot, &matcher);
        stats.hit_count = hits.len();
        if hits.is_empty() {
            return Self::inactive(fallback, stats);
        }

        let passages: Vec<Passage> = hits
            .iter()
            .map(|hit| resolve_passage(raw_plot, *hit, self.config.lookaround))
            .collect();
        let passages = merge_passages(passages);
        stats.passage_count = passages.len();

        let markup = self.renderer.render(raw_plot, &passages, &matcher);
        stats.timing_ms = start.elapsed().as_secs_f64() * 1000.0;

        Highlight {
            markup,
            active: true,
            stats,
        }
    }

    /// Callback form: `deliver(markup, is_active)` runs exactly once before return
    pub fn highlight_with<F>(&self, raw_plot: Option<&str>, character_name: Option<&str>, fallback: &str, deliver: F)
    where
        F: FnOnce(&str, bool),
    {
        let result = self.highlight(raw_plot, character_name, fallback);
        deliver(&result.markup, result.active);
    }

    /// Highlight with the plain-text rendering of `raw_plot` as fallback
    pub fn highlight_plot(&self, raw_plot: Option<&str>, character_name: Option<&str>) -> Highlight {
        let fallback = self.format_plain(raw_plot.unwrap_or(""));
        self.highlight(raw_plot, character_name, &fallback)
    }

    /// Un-highlighted markup for `raw_plot`
    pub fn format_plain(&self, raw_plot: &str) -> String {
        format_plain_plot(raw_plot, &self.config)
    }

    /// Name variants that would be matched for `character_name`
    pub fn name_variants(&self, character_name: &str) -> NameInfo {
        extract_variants(character_name)
    }

    fn inactive(fallback: &str, stats: HighlightStats) -> Highlight {
        Highlight {
            markup: fallback.to_string(),
            active: false,
            stats,
        }
    }
}
