//! Markup rendering for highlighted plots
//!
//! Walks the raw plot line by line and wraps each piece in a span:
//! - text outside every passage → faded span
//! - text inside a passage → `<prefix>-<kind>` span
//! - literal name variants anywhere → character span, nested inside the above
//!
//! Only the generated `<span>` tags are trusted markup; every piece of plot
//! text is HTML-escaped before it is written.

use std::borrow::Cow;

use super::config::HighlightConfig;
use super::locate::{VariantMatch, VariantMatcher};
use super::passage::{floor_char_boundary, Passage};

/// Escape plot text for element content (`&`, `<`, `>`, `"`, `'`)
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// The un-highlighted view of a plot: escaped, newlines as separators
pub fn format_plain_plot(raw_text: &str, config: &HighlightConfig) -> String {
    if raw_text.is_empty() {
        return config.empty_plot_placeholder.clone();
    }
    escape_html(raw_text).replace('\n', &config.line_separator)
}

/// Renders raw plot text with passage and name styling
#[derive(Debug, Clone)]
pub struct TextRenderer {
    faded_class: String,
    passage_class_prefix: String,
    character_class: String,
    line_separator: String,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(&HighlightConfig::default())
    }
}

impl TextRenderer {
    pub fn new(config: &HighlightConfig) -> Self {
        Self {
            faded_class: config.faded_class.clone(),
            passage_class_prefix: config.passage_class_prefix.clone(),
            character_class: config.character_class.clone(),
            line_separator: config.line_separator.clone(),
        }
    }

    /// Render `raw_text` with `passages` (sorted, merged, byte offsets into
    /// `raw_text`) emphasized and every variant occurrence marked.
    pub fn render(&self, raw_text: &str, passages: &[Passage], matcher: &VariantMatcher) -> String {
        let mut out = String::with_capacity(raw_text.len() * 2);
        let mut line_start = 0;

        for (line_index, line) in raw_text.split('\n').enumerate() {
            if line_index > 0 {
                out.push_str(&self.line_separator);
            }
            let line_end = line_start + line.len();
            let offset = line_start;
            line_start = line_end + 1;

            if line.trim().is_empty() {
                continue;
            }

            self.render_line(&mut out, line, offset, passages, matcher);
        }

        out
    }

    fn render_line(
        &self,
        out: &mut String,
        line: &str,
        offset: usize,
        passages: &[Passage],
        matcher: &VariantMatcher,
    ) {
        let line_end = offset + line.len();

        let mut local: Vec<(usize, usize, &'static str)> = passages
            .iter()
            .filter(|p| p.overlaps(offset, line_end))
            .map(|p| {
                let start = floor_char_boundary(line, p.start.saturating_sub(offset));
                let end = floor_char_boundary(line, p.end - offset);
                (start, end, p.kind.as_str())
            })
            .collect();
        local.sort_by_key(|&(start, _, _)| start);

        if local.is_empty() {
            self.push_span(out, &self.faded_class, line, matcher);
            return;
        }

        let mut cursor = 0;
        for (start, end, kind) in local {
            let start = start.max(cursor);
            if end <= start {
                continue;
            }
            if start > cursor {
                self.push_span(out, &self.faded_class, &line[cursor..start], matcher);
            }
            let class = format!("{}-{}", self.passage_class_prefix, kind);
            self.push_span(out, &class, &line[start..end], matcher);
            cursor = end;
        }
        if cursor < line.len() {
            self.push_span(out, &self.faded_class, &line[cursor..], matcher);
        }
    }

    fn push_span(&self, out: &mut String, class: &str, segment: &str, matcher: &VariantMatcher) {
        out.push_str("<span class=\"");
        out.push_str(class);
        out.push_str("\">");
        out.push_str(&self.highlight_name_parts(segment, matcher));
        out.push_str("</span>");
    }

    /// Escape `segment`, wrapping each accepted variant occurrence in a
    /// character span. Overlaps resolve to the earliest match, then the
    /// longest among those starting together.
    pub fn highlight_name_parts(&self, segment: &str, matcher: &VariantMatcher) -> String {
        if segment.is_empty() || matcher.is_empty() {
            return escape_html(segment).into_owned();
        }

        let mut matches: Vec<VariantMatch> = matcher.find_all(segment);
        if matches.is_empty() {
            return escape_html(segment).into_owned();
        }

        matches.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then_with(|| (b.end - b.start).cmp(&(a.end - a.start)))
        });

        let mut html = String::with_capacity(segment.len() * 2);
        let mut cursor = 0;
        for m in matches {
            if m.start < cursor {
                continue;
            }
            if m.start > cursor {
                html.push_str(&escape_html(&segment[cursor..m.start]));
            }
            html.push_str("<span class=\"");
            html.push_str(&self.character_class);
            html.push_str("\">");
            html.push_str(&escape_html(&segment[m.start..m.end]));
            html.push_str("</span>");
            cursor = m.end;
        }
        if cursor < segment.len() {
            html.push_str(&escape_html(&segment[cursor..]));
        }

        html
    }
}
