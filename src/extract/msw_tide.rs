//! magicseaweed tide extractor.
//!
//! The tide page lists one `div.msw-tide-tables` block per day, each
//! holding a table of tide events. Extraction takes the first
//! [`TIDE_DATA_DAYS`] day tables, re-classes their rows by event so the
//! dashboard can color them (`high-tide`, `low-tide`, nothing for header
//! and slack rows), strips the site's own table class, and wraps the lot
//! in the shared tide container div.

use super::rewrite::{self, Rewrite};
use super::{Extractor, TIDE_DATA_DAYS};
use crate::errors::ExtractionError;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::collections::HashMap;

static DAY_BLOCK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.msw-tide-tables").expect("day block selector"));
static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").expect("table selector"));
static TR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("row selector"));
static TD: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("cell selector"));

/// Extracts per-day tide tables from a magicseaweed tide page.
pub struct MswTideExtractor;

impl Extractor for MswTideExtractor {
    fn extract(&self, html: &str) -> Result<String, ExtractionError> {
        let document = Html::parse_document(html);

        let mut tables = String::new();
        let mut days = 0;
        for block in document.select(&DAY_BLOCK) {
            let table = block
                .select(&TABLE)
                .next()
                .ok_or(ExtractionError::ElementNotFound("table"))?;

            // A row is classified by its first cell: "High"/"Low" rows get
            // a tide class, anything else (headers, slack entries, rows
            // without a td at all) gets none.
            let mut row_classes = HashMap::new();
            for row in table.select(&TR) {
                let marker = row
                    .select(&TD)
                    .next()
                    .map(|cell| cell.text().collect::<String>());
                let class = match marker.as_deref() {
                    Some("High") => Some("high-tide"),
                    Some("Low") => Some("low-tide"),
                    _ => None,
                };
                row_classes.insert(row.id(), class);
            }

            let table_id = table.id();
            tables.push_str(&rewrite::serialize_with(table, &mut |el| {
                if el.id() == table_id {
                    return Rewrite::SetAttrs(rewrite::attrs_without(el, &["class"]));
                }
                match row_classes.get(&el.id()).copied() {
                    Some(Some(class)) => {
                        Rewrite::SetAttrs(rewrite::attrs_replacing(el, "class", class))
                    }
                    Some(None) => Rewrite::SetAttrs(rewrite::attrs_without(el, &["class"])),
                    None => Rewrite::Keep,
                }
            }));

            days += 1;
            if days == TIDE_DATA_DAYS {
                break;
            }
        }

        if days == 0 {
            return Err(ExtractionError::ElementNotFound("div.msw-tide-tables"));
        }
        Ok(super::wrap_tide_tables("tide-msw", &tables))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tide page with one day block per entry of `days`; each block is a
    /// classed table with a header row and the given event rows. The day
    /// index is baked into the height cells so tests can tell the tables
    /// apart after extraction.
    fn tide_page(days: &[&[(&str, &str)]]) -> String {
        let mut page = String::from("<html><body>");
        for (day, events) in days.iter().enumerate() {
            page.push_str(r#"<div class="msw-tide-tables"><table class="table table-tide">"#);
            page.push_str("<tr class=\"tide-header\"><td>Tide</td><td>Time</td><td>Height</td></tr>");
            for (event, time) in events.iter() {
                page.push_str(&format!(
                    "<tr><td>{event}</td><td>{time}</td><td>day{day} 1.2m</td></tr>"
                ));
            }
            page.push_str("</table></div>");
        }
        page.push_str("</body></html>");
        page
    }

    const DAY: &[(&str, &str)] = &[("High", "00:12am"), ("Low", "6:30am"), ("High", "12:48pm")];

    #[test]
    fn test_keeps_at_most_four_day_tables() {
        let page = tide_page(&[DAY, DAY, DAY, DAY, DAY, DAY]);
        let fragment = MswTideExtractor.extract(&page).unwrap();

        assert_eq!(fragment.matches("<table>").count(), 4);
        assert!(fragment.contains("day3 1.2m"));
        assert!(!fragment.contains("day4 1.2m"));
        assert!(!fragment.contains("day5 1.2m"));
    }

    #[test]
    fn test_rows_are_classed_by_tide_event() {
        let page = tide_page(&[&[("High", "00:12am"), ("Low", "6:30am"), ("Slack", "9:00am")]]);
        let fragment = MswTideExtractor.extract(&page).unwrap();

        assert_eq!(fragment.matches(r#"<tr class="high-tide">"#).count(), 1);
        assert_eq!(fragment.matches(r#"<tr class="low-tide">"#).count(), 1);
        // Header row loses its own class, slack row never had one.
        assert!(fragment.contains("<tr><td>Tide</td>"));
        assert!(fragment.contains("<tr><td>Slack</td>"));
        assert!(!fragment.contains("tide-header"));
    }

    #[test]
    fn test_site_table_class_is_stripped() {
        let page = tide_page(&[DAY]);
        let fragment = MswTideExtractor.extract(&page).unwrap();
        assert!(!fragment.contains("table-tide"));
        assert!(fragment.contains("<table>"));
    }

    #[test]
    fn test_fragment_is_wrapped_in_source_tagged_container() {
        let page = tide_page(&[DAY]);
        let fragment = MswTideExtractor.extract(&page).unwrap();
        assert!(fragment.starts_with("\n<div class=\"tide-tbls tide-msw\">"));
        assert!(fragment.ends_with("</div>\n"));
    }

    #[test]
    fn test_page_without_day_blocks_is_an_error() {
        let err = MswTideExtractor
            .extract("<html><body><p>Tide data unavailable</p></body></html>")
            .unwrap_err();
        assert!(matches!(err, ExtractionError::ElementNotFound("div.msw-tide-tables")));
    }

    #[test]
    fn test_day_block_without_table_is_an_error() {
        let err = MswTideExtractor
            .extract(r#"<div class="msw-tide-tables"><p>chart only</p></div>"#)
            .unwrap_err();
        assert!(matches!(err, ExtractionError::ElementNotFound("table")));
    }
}
