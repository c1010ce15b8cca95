//! Data models for site configuration and aggregated forecast fragments.
//!
//! This module defines the core data structures used throughout the
//! application:
//! - [`Category`]: A coastline grouping of surf sites, one output page each
//! - [`DataKind`]: The three kinds of forecast data tracked per site
//! - [`SiteDescriptor`]: A site's name plus its data source URLs
//! - [`SiteRecord`]: The fragments collected for one site during a run
//!
//! A *fragment* is an opaque, self-contained markup string produced by one
//! of the extractors; an empty fragment means "no data for this kind".

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A coastline grouping of surf sites.
///
/// Each category maps to an ordered list of [`SiteDescriptor`]s in the
/// site registry and produces exactly one `<category>/index.html` page.
/// The order of sites within a category determines page layout order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Category {
    /// Taiwan north coast.
    Twn,
    /// Taiwan east coast.
    Twe,
    /// Taiwan west coast.
    Tww,
    /// Bali.
    Bali,
}

impl Category {
    /// All categories, in the order their pages are generated.
    pub const ALL: [Category; 4] = [Category::Twn, Category::Twe, Category::Tww, Category::Bali];

    /// The short token used for the output directory and page scaffolding.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Twn => "twn",
            Category::Twe => "twe",
            Category::Tww => "tww",
            Category::Bali => "bali",
        }
    }

    /// Taiwan categories share the regional weather-map image block.
    pub fn is_taiwan(self) -> bool {
        matches!(self, Category::Twn | Category::Twe | Category::Tww)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three kinds of forecast data tracked per site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataKind {
    Wind,
    Tide,
    Weather,
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DataKind::Wind => "wind",
            DataKind::Tide => "tide",
            DataKind::Weather => "weather",
        })
    }
}

/// Static configuration for one surf site: its name and data source URLs.
///
/// Descriptors are created once at startup from the compiled-in registry
/// and never mutated. An empty URL means the site has no source for that
/// kind; no fetch is attempted for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteDescriptor {
    /// Site name, used as the store key and in log output.
    pub name: String,
    /// Windguru spot page URL.
    pub wind_url: String,
    /// Tide table URL (CWB or magicseaweed).
    pub tide_url: String,
    /// CWB town forecast URL; empty for sites without a weather source.
    pub weather_url: String,
}

impl SiteDescriptor {
    pub fn new(name: &str, wind_url: &str, tide_url: &str, weather_url: &str) -> Self {
        Self {
            name: name.to_string(),
            wind_url: wind_url.to_string(),
            tide_url: tide_url.to_string(),
            weather_url: weather_url.to_string(),
        }
    }

    pub fn has_weather(&self) -> bool {
        !self.weather_url.is_empty()
    }
}

/// The fragments collected for one site during a run.
///
/// Built incrementally as fetch tasks complete: a kind is `None` until its
/// task has stored a fragment (possibly empty). By the time the page
/// composer reads the store, every site has a wind and a tide entry, and a
/// weather entry exactly when its descriptor carries a weather URL.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SiteRecord {
    pub wind: Option<String>,
    pub tide: Option<String>,
    pub weather: Option<String>,
}

impl SiteRecord {
    /// Set the fragment for one data kind, replacing any previous value.
    pub fn set(&mut self, kind: DataKind, fragment: String) {
        match kind {
            DataKind::Wind => self.wind = Some(fragment),
            DataKind::Tide => self.tide = Some(fragment),
            DataKind::Weather => self.weather = Some(fragment),
        }
    }

    /// The stored fragment for one data kind, if its task has run.
    pub fn get(&self, kind: DataKind) -> Option<&str> {
        match kind {
            DataKind::Wind => self.wind.as_deref(),
            DataKind::Tide => self.tide.as_deref(),
            DataKind::Weather => self.weather.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tokens() {
        assert_eq!(Category::Twn.as_str(), "twn");
        assert_eq!(Category::Bali.as_str(), "bali");
        assert_eq!(Category::ALL.len(), 4);
    }

    #[test]
    fn test_category_taiwan_grouping() {
        assert!(Category::Twn.is_taiwan());
        assert!(Category::Twe.is_taiwan());
        assert!(Category::Tww.is_taiwan());
        assert!(!Category::Bali.is_taiwan());
    }

    #[test]
    fn test_descriptor_weather_presence() {
        let with = SiteDescriptor::new("a", "http://w", "http://t", "http://f");
        let without = SiteDescriptor::new("b", "http://w", "http://t", "");
        assert!(with.has_weather());
        assert!(!without.has_weather());
    }

    #[test]
    fn test_record_set_and_get() {
        let mut record = SiteRecord::default();
        assert_eq!(record.get(DataKind::Wind), None);

        record.set(DataKind::Wind, "<div/>".to_string());
        record.set(DataKind::Tide, String::new());

        assert_eq!(record.get(DataKind::Wind), Some("<div/>"));
        assert_eq!(record.get(DataKind::Tide), Some(""));
        assert_eq!(record.get(DataKind::Weather), None);
    }

    #[test]
    fn test_record_roundtrips_through_json() {
        let mut record = SiteRecord::default();
        record.set(DataKind::Tide, "<table></table>".to_string());

        let json = serde_json::to_string(&record).unwrap();
        let back: SiteRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(DataKind::Tide), Some("<table></table>"));
        assert_eq!(back.get(DataKind::Weather), None);
    }
}
