use wasm_bindgen::prelude::*;

use crate::highlight::config::HighlightConfig;
use crate::highlight::highlighter::PlotHighlighter;

/// JS-facing highlighter, exported as `PlotHighlighter`
#[wasm_bindgen(js_name = PlotHighlighter)]
pub struct PlotHighlighterJs {
    inner: PlotHighlighter,
}

#[wasm_bindgen(js_class = PlotHighlighter)]
impl PlotHighlighterJs {
    /// Create a highlighter from an optional config object
    ///
    /// Missing fields take their defaults; bad class names throw.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<PlotHighlighterJs, JsValue> {
        let config: HighlightConfig = if config.is_null() || config.is_undefined() {
            HighlightConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };
        Self::build(config)
    }

    /// Create a highlighter from a JSON config string
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<PlotHighlighterJs, JsValue> {
        let config = HighlightConfig::from_json(json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::build(config)
    }

    /// Highlight a character and push the markup to `deliver(markup, isActive)`
    ///
    /// `deliver` runs exactly once. If it throws, the error is logged and rethrown.
    #[wasm_bindgen]
    pub fn highlight(
        &self,
        raw_plot: Option<String>,
        character_name: Option<String>,
        fallback_markup: &str,
        deliver: &js_sys::Function,
    ) -> Result<(), JsValue> {
        let result = self
            .inner
            .highlight(raw_plot.as_deref(), character_name.as_deref(), fallback_markup);

        deliver
            .call2(
                &JsValue::NULL,
                &JsValue::from_str(&result.markup),
                &JsValue::from_bool(result.active),
            )
            .map(|_| ())
            .map_err(|e| {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::error_1(&format!("[PlotHighlighter] deliver callback failed: {:?}", e).into());
                e
            })
    }

    /// Highlight and return `{ markup, active, stats }`
    #[wasm_bindgen(js_name = highlightToObject)]
    pub fn highlight_to_object(
        &self,
        raw_plot: Option<String>,
        character_name: Option<String>,
        fallback_markup: &str,
    ) -> Result<JsValue, JsValue> {
        let result = self
            .inner
            .highlight(raw_plot.as_deref(), character_name.as_deref(), fallback_markup);
        serde_wasm_bindgen::to_value(&result)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Plain (un-highlighted) markup for a plot
    #[wasm_bindgen(js_name = formatPlainPlot)]
    pub fn format_plain_plot(&self, raw_plot: Option<String>) -> String {
        self.inner.format_plain(raw_plot.as_deref().unwrap_or(""))
    }

    /// Name parts and variants for a character
    #[wasm_bindgen(js_name = nameVariants)]
    pub fn name_variants(&self, character_name: &str) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.name_variants(character_name))
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(getter)]
    pub fn lookaround(&self) -> usize {
        self.inner.config().lookaround
    }
}

impl PlotHighlighterJs {
    fn build(config: HighlightConfig) -> Result<PlotHighlighterJs, JsValue> {
        let inner = PlotHighlighter::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;

        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&format!(
            "[PlotHighlighter] Ready (lookaround {})",
            inner.config().lookaround
        ).into());

        Ok(PlotHighlighterJs { inner })
    }

    pub fn inner(&self) -> &PlotHighlighter {
        &self.inner
    }
}
