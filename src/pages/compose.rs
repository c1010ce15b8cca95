//! Page assembly: stored fragments into one dashboard page per category.
//!
//! Rendering is a pure function of the store snapshot, the site registry
//! order and the update timestamp, so the same inputs always produce the
//! same bytes. Writing is atomic: the page lands under a `.tmp` name
//! first and is renamed over `index.html`, so the web server never hands
//! out a half-written page.

use crate::models::{Category, DataKind, SiteDescriptor, SiteRecord};
use crate::pages::theme;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// File name of the generated page inside each category directory.
pub const PAGE_FILE: &str = "index.html";

/// Renders the complete dashboard page for one category.
///
/// # Arguments
///
/// * `categ` - Category the page is for; decides the surface chart block.
/// * `sites` - Ordered site descriptors; the page lists sites in this order.
/// * `records` - Store snapshot keyed by site name.
/// * `timestamp` - Update time as epoch seconds, embedded for the
///   client-side staleness display.
///
/// Per site the fragment order is wind, weather (when the record carries
/// one), tide. A site with no record at all is logged and skipped so one
/// lost site cannot take the whole page down.
pub fn render_page(
    categ: Category,
    sites: &[SiteDescriptor],
    records: &HashMap<String, SiteRecord>,
    timestamp: i64,
) -> String {
    let mut page = String::new();
    page.push_str(theme::PAGE_HEAD);

    // Hidden divs the dashboard scripts hang state off.
    page.push_str("<div id=\"mask\"></div>");
    page.push_str("<div id=\"loading-icon\"></div>");
    write!(page, "<div id=\"site-categ\">{categ}</div>").unwrap();

    writeln!(page, "<div class=\"last_upd_tm\">{timestamp}</div>").unwrap();

    if categ.is_taiwan() {
        page.push_str("<div class=\"img-with-btn\">\n");
        page.push_str(theme::JP_IMG_TAG);
        page.push_str(theme::NEXT_BTN_TAG);
        page.push_str("</div>\n");
    }

    for site in sites {
        let record = match records.get(&site.name) {
            Some(record) => record,
            None => {
                warn!(site = %site.name, "No stored data for site, skipping");
                continue;
            }
        };
        if let Some(wind) = record.get(DataKind::Wind) {
            page.push_str(wind);
        }
        if let Some(weather) = record.get(DataKind::Weather) {
            page.push_str(weather);
        }
        if let Some(tide) = record.get(DataKind::Tide) {
            page.push_str(tide);
        }
    }

    page.push_str(theme::BUTTON_GROUP);
    page.push_str(theme::PAGE_FOOT);
    page
}

/// Writes a rendered page under `base/<categ>/index.html`.
///
/// # Returns
///
/// The path of the final page file.
#[instrument(level = "info", skip_all, fields(categ = %categ))]
pub async fn write_page(base: &Path, categ: Category, page: &str) -> Result<PathBuf, Box<dyn Error>> {
    let dir = base.join(categ.as_str());
    tokio::fs::create_dir_all(&dir).await?;

    let final_path = dir.join(PAGE_FILE);
    let tmp_path = dir.join(format!("{PAGE_FILE}.tmp"));
    tokio::fs::write(&tmp_path, page).await?;
    tokio::fs::rename(&tmp_path, &final_path).await?;

    info!(path = %final_path.display(), bytes = page.len(), "Page updated");
    Ok(final_path)
}
