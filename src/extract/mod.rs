//! Source-specific markup extractors.
//!
//! Every forecast source buries the data this tool wants inside a much
//! larger page. An [`Extractor`] turns one fetched page into the minimal
//! HTML fragment the dashboard embeds directly:
//!
//! | Module | Source | Fragment |
//! |--------|--------|----------|
//! | [`windguru`] | old.windguru.cz spot pages | forecast widget container |
//! | [`weather`] | CWB township forecasts | trimmed forecast box |
//! | [`cwb_tide`] | CWB 30-day tide calendar | per-day tide tables |
//! | [`msw_tide`] | magicseaweed tide pages | per-day tide tables |
//!
//! Extractors are pure string-to-string transforms with no I/O, so every
//! one of them is unit-testable against canned markup. Selection happens
//! in [`for_source`]: wind and weather map straight to their extractor,
//! tide sources are dispatched on the URL host.
//!
//! All extractors fail with [`ExtractionError`] when a structural element
//! they rely on is absent, which is the signal that the upstream page
//! changed shape. Removing an attribute that is already absent is always
//! a safe no-op.

pub mod cwb_tide;
pub mod msw_tide;
pub mod rewrite;
pub mod weather;
pub mod windguru;

pub use cwb_tide::CwbTideExtractor;
pub use msw_tide::MswTideExtractor;
pub use weather::WeatherExtractor;
pub use windguru::WindExtractor;

use crate::errors::ExtractionError;
use crate::models::DataKind;
use url::Url;

/// Number of days kept from each tide source.
pub const TIDE_DATA_DAYS: usize = 4;

/// Host serving the Taiwanese tide calendar pages.
const CWB_TIDE_HOST: &str = "cwb.gov.tw";
/// Host serving the Bali tide pages.
const MSW_TIDE_HOST: &str = "magicseaweed.com";

/// A source-specific transform from one fetched page to an embeddable
/// HTML fragment.
pub trait Extractor: Send + Sync {
    /// Extracts the fragment from a full source page.
    fn extract(&self, html: &str) -> Result<String, ExtractionError>;
}

/// Selects the extractor for a data kind and source URL.
///
/// Tide extractors are picked by the URL host (exact match or subdomain).
/// `None` means the URL does not belong to a known tide provider; the
/// caller is expected to log it and record an empty fragment.
pub fn for_source(kind: DataKind, url: &str) -> Option<Box<dyn Extractor>> {
    match kind {
        DataKind::Wind => Some(Box::new(WindExtractor)),
        DataKind::Weather => Some(Box::new(WeatherExtractor::new(url))),
        DataKind::Tide => tide_extractor(url),
    }
}

fn tide_extractor(url: &str) -> Option<Box<dyn Extractor>> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    if host_matches(host, CWB_TIDE_HOST) {
        Some(Box::new(CwbTideExtractor))
    } else if host_matches(host, MSW_TIDE_HOST) {
        Some(Box::new(MswTideExtractor))
    } else {
        None
    }
}

/// True when `host` is `base` itself or one of its subdomains. A plain
/// suffix check would also accept lookalikes such as `notcwb.gov.tw`.
fn host_matches(host: &str, base: &str) -> bool {
    host == base || host.ends_with(&format!(".{base}"))
}

/// Wraps per-day tide tables in the container div the dashboard styles;
/// `source_class` tags which provider the tables came from.
fn wrap_tide_tables(source_class: &str, tables: &str) -> String {
    format!("\n<div class=\"tide-tbls {source_class}\">{tables}</div>\n")
}
