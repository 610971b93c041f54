//! Pipeline invariants over generated plots
//!
//! Plots are assembled from a fixed vocabulary with a seeded LCG so every run
//! sees the same inputs.

use crate::highlight::config::HighlightConfig;
use crate::highlight::highlighter::PlotHighlighter;
use crate::highlight::locate::{locate_hits, VariantMatcher};
use crate::highlight::merge::merge_passages;
use crate::highlight::names::extract_variants;
use crate::highlight::passage::resolve_passage;
use crate::highlight::render::TextRenderer;
use regex::Regex;

const WORDS: &[&str] = &[
    "Alice", "alice", "Bob", "John", "Smith", "John Smith", "the", "ran", "towards",
    "Émile", "café", "🎬", "<b>", "&", "\"quoted\"", "it's", "(Narrator)", "Johnson",
];
const SEPARATORS: &[&str] = &[" ", " ", " ", ". ", "! ", "? ", "\n", ", ", "."];
const NAMES: &[&str] = &["John Smith", "Alice", "Émile (old)", "(Narrator)", "Bob"];

struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) as usize
    }
}

fn generate_plot(rng: &mut Lcg, tokens: usize) -> String {
    let mut plot = String::new();
    for _ in 0..tokens {
        plot.push_str(WORDS[rng.next() % WORDS.len()]);
        plot.push_str(SEPARATORS[rng.next() % SEPARATORS.len()]);
    }
    plot
}

fn for_each_case(mut check: impl FnMut(&str, &str, usize)) {
    let mut rng = Lcg(7);
    for round in 0..60 {
        let plot = generate_plot(&mut rng, 5 + round * 3);
        let lookaround = [0, 4, 15, 60, 200][round % 5];
        for name in NAMES {
            check(&plot, name, lookaround);
        }
    }
}

#[test]
fn test_variants_deterministic() {
    for name in NAMES {
        let first = extract_variants(name);
        let second = extract_variants(name);
        assert_eq!(first.unique_variants, second.unique_variants);

        let lengths: Vec<usize> = first.unique_variants.iter().map(|v| v.chars().count()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]), "not longest-first: {:?}", first.unique_variants);
    }
}

#[test]
fn test_hits_are_sorted_and_disjoint() {
    for_each_case(|plot, name, _| {
        let matcher = VariantMatcher::new(&extract_variants(name).unique_variants);
        let hits = locate_hits(plot, &matcher);
        for pair in hits.windows(2) {
            assert!(pair[0].start < pair[1].start);
            assert!(!pair[0].contains(&pair[1]) && !pair[1].contains(&pair[0]));
        }
        for hit in &hits {
            assert!(plot.is_char_boundary(hit.start) && plot.is_char_boundary(hit.end));
        }
    });
}

#[test]
fn test_every_hit_in_exactly_one_passage() {
    for_each_case(|plot, name, lookaround| {
        let matcher = VariantMatcher::new(&extract_variants(name).unique_variants);
        let hits = locate_hits(plot, &matcher);
        let passages = merge_passages(
            hits.iter().map(|h| resolve_passage(plot, *h, lookaround)).collect(),
        );

        for pair in passages.windows(2) {
            assert!(pair[0].end <= pair[1].start, "overlap in {:?}", passages);
        }
        for passage in &passages {
            assert!(passage.end > passage.start);
            assert!(passage.end <= plot.len());
            assert!(plot.is_char_boundary(passage.start) && plot.is_char_boundary(passage.end));
        }
        for hit in &hits {
            let owners = passages.iter().filter(|p| p.contains(hit)).count();
            assert_eq!(owners, 1, "hit {:?} in plot {:?}", hit, plot);
        }
    });
}

#[test]
fn test_markup_reconstructs_plot() {
    let tags = Regex::new(r#"<span class="[A-Za-z_-]+">|</span>"#).unwrap();

    for_each_case(|plot, name, lookaround| {
        let matcher = VariantMatcher::new(&extract_variants(name).unique_variants);
        let hits = locate_hits(plot, &matcher);
        let passages = merge_passages(
            hits.iter().map(|h| resolve_passage(plot, *h, lookaround)).collect(),
        );
        let markup = TextRenderer::default().render(plot, &passages, &matcher);

        let text_only = tags.replace_all(&markup, "");
        assert!(!text_only.replace("<br>", "").contains('<'));
        let restored = html_escape::decode_html_entities(&text_only).replace("<br>", "\n");
        // "<b>" in the plot decodes back to "<b>", never to a line break
        let expected = plot.replace("<br>", "\n");
        assert_eq!(restored, expected);
    });
}

#[test]
fn test_highlighter_never_panics_on_edge_names() {
    let highlighter = PlotHighlighter::new(HighlightConfig::default().with_lookaround(5)).unwrap();
    let mut rng = Lcg(99);
    let plot = generate_plot(&mut rng, 80);

    for name in ["", " ", "()", "(a)", "...", ".*", "🎬🎬🎬", "a\u{301}bc", "\n\n\n", "Alice (x) (y)"] {
        let h = highlighter.highlight(Some(&plot), Some(name), "fallback");
        if !h.active {
            assert_eq!(h.markup, "fallback");
        }
    }
}
