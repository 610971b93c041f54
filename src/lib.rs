//! PlotLight: Character-Aware Plot Highlighting
//!
//! A Rust/WASM implementation of the plot panel highlighter used by the movie
//! character-relationship explorer. Hovering a character in the graph lights
//! up every sentence that mentions them and fades the rest of the plot.
//!
//! # Architecture
//!
//! ## Highlight Pipeline
//! - `names.rs` - NameInfo: full/cleaned/first/last name variants, longest first
//! - `locate.rs` - VariantMatcher + locate_hits: case-insensitive literal hits
//! - `passage.rs` - resolve_passage: sentence boundaries within a lookaround
//! - `merge.rs` - merge_passages: sorted, non-overlapping passages
//! - `render.rs` - TextRenderer: escaped, line-by-line span markup
//! - `highlighter.rs` - PlotHighlighter: the whole pipeline, with fallback
//! - `config.rs` - HighlightConfig: lookaround and CSS class names
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { PlotHighlighter } from 'plotlight';
//!
//! await init();
//!
//! const highlighter = new PlotHighlighter({ lookaround: 200 });
//! const fallback = highlighter.formatPlainPlot(rawPlot);
//!
//! // On node hover
//! highlighter.highlight(rawPlot, 'Tyler Durden (imaginary)', fallback, (markup, isActive) => {
//!   plotPanel.innerHTML = markup;
//! });
//!
//! // On hover leave
//! highlighter.highlight(rawPlot, null, fallback, displayPlot);
//! ```
//!
//! # Usage (Rust)
//! ```rust
//! use plotlight::PlotHighlighter;
//!
//! let highlighter = PlotHighlighter::default();
//! let result = highlighter.highlight(
//!     Some("Alice met Bob. Bob ran away. Alice was sad."),
//!     Some("Alice"),
//!     "fallback",
//! );
//! assert!(result.active);
//! assert_eq!(result.stats.passage_count, 2);
//! ```

pub mod highlight;

pub use highlight::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("plotlight v{}", env!("CARGO_PKG_VERSION"))
}
