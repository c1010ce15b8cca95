//! windguru widget extractor.
//!
//! The old windguru spot page carries the entire forecast widget in one
//! container div: the data tables plus the inline script that renders
//! them client-side. Extraction keeps that container whole and strips
//! exactly two attributes: the container's `id`, which would otherwise
//! collide when several widgets are embedded in one page, and the legacy
//! `language` attribute on the widget script.

use super::rewrite::{self, Rewrite};
use super::Extractor;
use crate::errors::ExtractionError;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static WIDGET: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div#div_wgfcst1").expect("widget selector"));
static SCRIPT: Lazy<Selector> = Lazy::new(|| Selector::parse("script").expect("script selector"));

/// Extracts the forecast widget container from a windguru spot page.
pub struct WindExtractor;

impl Extractor for WindExtractor {
    fn extract(&self, html: &str) -> Result<String, ExtractionError> {
        let document = Html::parse_document(html);
        let container = document
            .select(&WIDGET)
            .next()
            .ok_or(ExtractionError::ElementNotFound("div#div_wgfcst1"))?;
        let script = container
            .select(&SCRIPT)
            .next()
            .ok_or(ExtractionError::ElementNotFound("script"))?;

        let container_id = container.id();
        let script_id = script.id();
        Ok(rewrite::serialize_with(container, &mut |el| {
            if el.id() == container_id {
                Rewrite::SetAttrs(rewrite::attrs_without(el, &["id"]))
            } else if el.id() == script_id {
                Rewrite::SetAttrs(rewrite::attrs_without(el, &["language"]))
            } else {
                Rewrite::Keep
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPOT_PAGE: &str = r#"<html><head><title>spot</title></head><body>
<div id="header">navigation</div>
<div id="div_wgfcst1" class="wgfcst"><script language="javascript" type="text/javascript">var wg_fcst_tab_data_1 = {"id_spot": 174509}; if (1 < 2) { render(); }</script><div class="forecast-table"><table><tbody><tr><td>NNE</td></tr></tbody></table></div></div>
<div id="footer">contact</div>
</body></html>"#;

    #[test]
    fn test_extracts_widget_without_id_or_script_language() {
        let fragment = WindExtractor.extract(SPOT_PAGE).unwrap();

        assert!(fragment.starts_with(r#"<div class="wgfcst">"#));
        assert!(!fragment.contains("div_wgfcst1"));
        assert!(!fragment.contains("language="));
        assert!(fragment.contains(r#"<script type="text/javascript">"#));
        // Script body must come through raw for the browser to execute.
        assert!(fragment.contains(r#"if (1 < 2) { render(); }"#));
        assert!(fragment.contains("<td>NNE</td>"));
        // Page chrome around the container is gone.
        assert!(!fragment.contains("navigation"));
        assert!(!fragment.contains("footer"));
    }

    #[test]
    fn test_only_first_script_loses_language() {
        let page = r#"<div id="div_wgfcst1"><script language="javascript">a();</script><script language="javascript">b();</script></div>"#;
        let fragment = WindExtractor.extract(page).unwrap();
        assert_eq!(
            fragment,
            r#"<div><script>a();</script><script language="javascript">b();</script></div>"#
        );
    }

    #[test]
    fn test_script_without_language_attribute_is_fine() {
        let page = r#"<div id="div_wgfcst1"><script type="text/javascript">a();</script></div>"#;
        let fragment = WindExtractor.extract(page).unwrap();
        assert_eq!(fragment, r#"<div><script type="text/javascript">a();</script></div>"#);
    }

    #[test]
    fn test_missing_container_is_an_error() {
        let err = WindExtractor.extract("<html><body><p>maintenance</p></body></html>").unwrap_err();
        assert!(matches!(err, ExtractionError::ElementNotFound("div#div_wgfcst1")));
    }

    #[test]
    fn test_missing_script_is_an_error() {
        let page = r#"<div id="div_wgfcst1"><table></table></div>"#;
        let err = WindExtractor.extract(page).unwrap_err();
        assert!(matches!(err, ExtractionError::ElementNotFound("script")));
    }
}
