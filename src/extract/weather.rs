//! CWB township weather forecast extractor.
//!
//! The township pages wrap the forecast in a `.Forecast-box` div whose
//! first table carries the data. The table comes down with presentation
//! baggage from another era; extraction trims it for restyling:
//!
//! - layout attributes (`align`, `height`, `width`, `border`) come off
//!   the table, `bgcolor` comes off every kept row
//! - the first row is the date header and gets `class="tr-date"`
//! - rows the dashboard has no use for are removed outright; which ones
//!   depends on whether the URL is the 3-hourly or the weekly page
//! - `<img>` elements get `alt="missing img"` so a dead icon link keeps
//!   the table legible
//! - obsolete `<font color="X">` elements become
//!   `<span style="color: X">`
//!
//! Row indices count every `tr` in the container in document order,
//! before any removal.

use super::rewrite::{self, Rewrite};
use super::Extractor;
use crate::errors::ExtractionError;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::collections::HashSet;

/// Rows removed from the weekly township table.
const DROP_ROWS_7DAY: [usize; 5] = [5, 6, 7, 8, 9];
/// Rows removed from the 3-hourly township table.
const DROP_ROWS_3HR: [usize; 5] = [4, 5, 6, 7, 9];

static FORECAST_BOX: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.Forecast-box").expect("forecast box selector"));
static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").expect("table selector"));
static TR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("row selector"));

/// Extracts the trimmed forecast box from a CWB township weather page.
pub struct WeatherExtractor {
    short_range: bool,
}

impl WeatherExtractor {
    /// The source URL decides the table variant: township pages under
    /// `/3Hr/` carry the 3-hourly layout, everything else the weekly one.
    pub fn new(url: &str) -> Self {
        Self {
            short_range: url.contains("/3Hr/"),
        }
    }
}

impl Extractor for WeatherExtractor {
    fn extract(&self, html: &str) -> Result<String, ExtractionError> {
        let document = Html::parse_document(html);
        let container = document
            .select(&FORECAST_BOX)
            .next()
            .ok_or(ExtractionError::ElementNotFound("div.Forecast-box"))?;
        let table = container
            .select(&TABLE)
            .next()
            .ok_or(ExtractionError::ElementNotFound("table"))?;

        let drop_rows: &[usize] = if self.short_range {
            &DROP_ROWS_3HR
        } else {
            &DROP_ROWS_7DAY
        };

        let mut dropped = HashSet::new();
        let mut kept = HashSet::new();
        let mut date_row = None;
        for (idx, row) in container.select(&TR).enumerate() {
            if drop_rows.contains(&idx) {
                dropped.insert(row.id());
            } else if idx == 0 {
                date_row = Some(row.id());
            } else {
                kept.insert(row.id());
            }
        }

        // The fragment root is the container div itself; the dashboard
        // script shows and hides forecasts by the `.Forecast-box` class.
        let table_id = table.id();
        let fragment = rewrite::serialize_with(container, &mut |el| {
            if el.id() == table_id {
                return Rewrite::SetAttrs(rewrite::attrs_without(
                    el,
                    &["align", "height", "width", "border"],
                ));
            }
            if dropped.contains(&el.id()) {
                return Rewrite::Drop;
            }
            if date_row == Some(el.id()) {
                let mut attrs = rewrite::attrs_replacing(el, "class", "tr-date");
                attrs.retain(|(name, _)| name != "bgcolor");
                return Rewrite::SetAttrs(attrs);
            }
            if kept.contains(&el.id()) {
                return Rewrite::SetAttrs(rewrite::attrs_without(el, &["bgcolor"]));
            }
            match el.value().name() {
                "img" => Rewrite::SetAttrs(rewrite::attrs_replacing(el, "alt", "missing img")),
                "font" => {
                    let attrs = match el.value().attr("color") {
                        Some(color) => vec![("style".to_string(), format!("color: {color}"))],
                        None => Vec::new(),
                    };
                    Rewrite::Rename("span", attrs)
                }
                _ => Rewrite::Keep,
            }
        });

        Ok(remove_blank_lines(&fragment))
    }
}

/// Removed rows leave whitespace-only lines behind; strip them so the
/// fragment embeds cleanly.
fn remove_blank_lines(html: &str) -> String {
    html.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
