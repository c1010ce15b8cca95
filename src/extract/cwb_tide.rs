//! CWB 30-day tide calendar extractor.
//!
//! The source page is one big calendar table where each day's first row
//! carries two row-spanning cells (the date with weekday and lunar date,
//! then the tide size), followed by one row per tide event:
//!
//! ```text
//! <tr><td rowspan="2">11月1日 星期四 農曆九月十五</td><td rowspan="2">大潮</td>
//!     <td>滿潮</td><td>00:46</td><td>56</td></tr>
//! <tr><td>乾潮</td><td>07:21</td><td>-102</td></tr>
//! ```
//!
//! The dashboard wants one small table per day instead, so extraction
//! runs two passes over the cells and rebuilds:
//!
//! 1. Day cells: every `td[rowspan]` whose text contains the weekday
//!    marker 星期 starts a day. Its text splits at 農曆 into solar and
//!    lunar date, the next sibling cell holds the tide size, and the
//!    rowspan says how many event rows belong to the day.
//! 2. Event rows: every `td` mentioning 滿潮 (high) or 乾潮 (low) starts
//!    an event; the two sibling cells that follow carry time and height.
//!
//! Events are then dealt back to the days by position. A page with fewer
//! event cells than the day rowspans promise renders partially and logs
//! the shortfall instead of failing the site.

use super::{Extractor, TIDE_DATA_DAYS};
use crate::errors::ExtractionError;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::fmt::Write as _;
use tracing::warn;

const WEEKDAY_MARKER: &str = "星期";
const LUNAR_MARKER: &str = "農曆";
const HIGH_TIDE_MARKER: &str = "滿潮";
const LOW_TIDE_MARKER: &str = "乾潮";

static DAY_CELL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td[rowspan]").expect("day cell selector"));
static ANY_CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("cell selector"));

/// One rebuilt day cell and the number of event rows it spans.
struct DayCell {
    markup: String,
    rows: usize,
}

/// Extracts per-day tide tables from a CWB 30-day tide calendar page.
pub struct CwbTideExtractor;

impl Extractor for CwbTideExtractor {
    fn extract(&self, html: &str) -> Result<String, ExtractionError> {
        let document = Html::parse_document(html);

        let mut days: Vec<DayCell> = Vec::new();
        for cell in document.select(&DAY_CELL) {
            let text = cell.text().collect::<String>();
            if !text.contains(WEEKDAY_MARKER) {
                continue;
            }

            let raw_rowspan = cell.value().attr("rowspan").unwrap_or("");
            let rows: usize = raw_rowspan
                .parse()
                .map_err(|_| ExtractionError::BadRowSpan(raw_rowspan.to_string()))?;

            let (solar, lunar) = match text.find(LUNAR_MARKER) {
                Some(at) => text.split_at(at),
                None => (text.as_str(), ""),
            };
            let size = next_sibling_element(cell)
                .map(|el| el.text().collect::<String>())
                .unwrap_or_default();

            let mut markup = String::new();
            write!(markup, "<td rowspan=\"{rows}\">{solar}<br/>{lunar}<br/>{size}</td>").unwrap();
            days.push(DayCell { markup, rows });

            if days.len() == TIDE_DATA_DAYS {
                break;
            }
        }
        if days.is_empty() {
            return Err(ExtractionError::ElementNotFound("td[rowspan]"));
        }

        let expected: usize = days.iter().map(|day| day.rows).sum();

        let mut events: Vec<(&'static str, String)> = Vec::new();
        for cell in document.select(&ANY_CELL) {
            let text = cell.text().collect::<String>();
            let class = if text.contains(HIGH_TIDE_MARKER) {
                "high-tide"
            } else if text.contains(LOW_TIDE_MARKER) {
                "low-tide"
            } else {
                continue;
            };

            let mut markup = String::new();
            write!(markup, "<td>{}</td>", text.trim()).unwrap();
            for sibling in cell.next_siblings().filter_map(ElementRef::wrap).take(2) {
                markup.push_str(&sibling.html());
            }
            events.push((class, markup));

            if events.len() == expected {
                break;
            }
        }
        if events.len() < expected {
            warn!(
                expected,
                collected = events.len(),
                "Tide calendar has fewer event rows than its day cells span"
            );
        }

        let mut tables = String::new();
        let mut rest = events.as_slice();
        for day in &days {
            let (day_events, remaining) = rest.split_at(day.rows.min(rest.len()));
            rest = remaining;

            tables.push_str("<table><tbody>");
            for (idx, (class, event)) in day_events.iter().enumerate() {
                write!(tables, "<tr class=\"{class}\">").unwrap();
                if idx == 0 {
                    tables.push_str(&day.markup);
                }
                tables.push_str(event);
                tables.push_str("</tr>");
            }
            tables.push_str("</tbody></table>");
        }

        Ok(super::wrap_tide_tables("tide-cwb", &tables))
    }
}

fn next_sibling_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().filter_map(ElementRef::wrap).next()
}
