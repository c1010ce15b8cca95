//! # surfcast
//!
//! A surf forecast aggregator that fetches wind, tide and weather data for a
//! fixed roster of surf spots, trims each source page down to an embeddable
//! fragment, and composes the fragments into one static HTML page per
//! coastline category.
//!
//! ## Features
//!
//! - Fetches Windguru spot widgets, CWB tide calendars and township
//!   forecasts, and Magicseaweed tide tables
//! - Extracts a compact, restyled fragment from each source page
//! - Persists fragments in an on-disk JSON store shared by concurrent tasks
//! - Renders a deterministic `index.html` per category (twn, twe, tww, bali)
//!
//! ## Usage
//!
//! ```sh
//! surfcast -w /var/www/surf            # update every category
//! surfcast -w /var/www/surf -c twe     # update one category
//! surfcast -w /var/www/surf --cleanup  # remove everything a run generated
//! ```
//!
//! ## Architecture
//!
//! The application runs as a two-phase pipeline:
//! 1. **Update**: fetch and extract every site's sources concurrently,
//!    persisting each fragment into the store as it lands
//! 2. **Compose**: read the store back and write one page per category

use chrono::Utc;
use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod errors;
mod extract;
mod fetch;
mod models;
mod pages;
mod registry;
mod store;
mod update;
mod utils;

use cli::Cli;
use fetch::Fetcher;
use models::Category;
use pages::compose;
use store::SiteStore;
use utils::{cleanup, ensure_writable_dir};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("surfcast starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.workdir, ?args.categ, args.cleanup, "Parsed CLI arguments");

    if let Some(ref dir) = args.workdir {
        std::env::set_current_dir(dir)?;
        info!(workdir = %dir, "Changed working directory");
    }

    let store_dir = store::default_store_dir();

    if args.cleanup {
        cleanup(Path::new("."), &store_dir).await;
        return Ok(());
    }

    let categories = args.categories();
    info!(categories = ?categories, "Updating categories");

    // Early check: make sure pages can actually land before any fetching starts
    if let Err(e) = ensure_writable_dir(".").await {
        error!(
            error = %e,
            "Working directory is not writable (fix perms or choose a different -w path)"
        );
        return Err(e);
    }

    let fetcher = Arc::new(Fetcher::new()?);
    let store = Arc::new(SiteStore::open(store_dir).await?);
    info!(store = %store.dir().display(), "Site store ready");

    let result = run_pipeline(&fetcher, &store, &categories).await;

    // The store is scratch state for a single run; tear it down even when the
    // pipeline failed so the next run starts clean.
    let destroyed = store.destroy().await;
    if let Err(ref e) = destroyed {
        error!(error = %e, "Failed to remove site store");
    }
    result?;
    destroyed?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

/// Fetch every category's site data, then compose and write the pages.
async fn run_pipeline(
    fetcher: &Arc<Fetcher>,
    store: &Arc<SiteStore>,
    categories: &[Category],
) -> Result<(), Box<dyn Error>> {
    update::run(fetcher, store, categories).await?;

    let records = store.read_all().await?;
    let timestamp = Utc::now().timestamp();
    for &categ in categories {
        let page = compose::render_page(categ, registry::sites(categ), &records, timestamp);
        compose::write_page(Path::new("."), categ, &page).await?;
    }
    Ok(())
}
