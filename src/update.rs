//! Fetch-and-store fan-out for one update run.
//!
//! Every site data source becomes its own task: wind and tide always,
//! weather when the site has a weather page, plus one task for the shared
//! surface chart image. Tasks run concurrently against the shared
//! [`Fetcher`] and [`SiteStore`] and the run joins them all before page
//! composition starts.
//!
//! Failure handling is deliberately lopsided: a broken source (network
//! error, bad status, unrecognized markup) is logged and recorded as an
//! empty fragment so its page slot renders blank, while a store failure
//! fails the whole run because no trustworthy page can come out of it.

use crate::errors::StoreError;
use crate::extract;
use crate::fetch::Fetcher;
use crate::models::{Category, DataKind};
use crate::registry::{self, WINDGURU_COOKIE};
use crate::store::SiteStore;
use futures::future::join_all;
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

/// Western Pacific surface analysis chart source.
pub const JP_IMG_URL: &str = "http://www.imocwx.com/cwm/cwm_ljp.gif";
/// File name the chart is saved under, next to the category directories.
pub const JP_IMG_FILE: &str = "cwm_ljp.gif";

/// Runs the fetch-and-store phase for the given categories.
#[instrument(level = "info", skip_all, fields(categories = ?categories))]
pub async fn run(
    fetcher: &Arc<Fetcher>,
    store: &Arc<SiteStore>,
    categories: &[Category],
) -> Result<(), StoreError> {
    let mut tasks: Vec<JoinHandle<Result<(), StoreError>>> = Vec::new();

    // The chart is page furniture, not site data: a failed download keeps
    // the previous image on disk and is not worth failing the run over.
    {
        let fetcher = Arc::clone(fetcher);
        tasks.push(tokio::spawn(async move {
            if let Err(e) = fetcher.download(JP_IMG_URL, Path::new(JP_IMG_FILE)).await {
                error!(url = JP_IMG_URL, error = %e, "Surface chart download failed");
            }
            Ok(())
        }));
    }

    for &categ in categories {
        for site in registry::sites(categ) {
            info!(site = %site.name, "Fetching site data");
            tasks.push(spawn_fetch(fetcher, store, &site.name, DataKind::Wind, &site.wind_url));
            tasks.push(spawn_fetch(fetcher, store, &site.name, DataKind::Tide, &site.tide_url));
            if site.has_weather() {
                tasks.push(spawn_fetch(
                    fetcher,
                    store,
                    &site.name,
                    DataKind::Weather,
                    &site.weather_url,
                ));
            }
        }
    }

    info!(tasks = tasks.len(), "Waiting for fetch tasks");
    let results = join_all(tasks).await;

    let mut first_store_error = None;
    let mut aborted = 0usize;
    for result in results {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                error!(error = %e, "Store update failed");
                first_store_error.get_or_insert(e);
            }
            Err(e) => {
                aborted += 1;
                error!(error = %e, "Fetch task aborted");
            }
        }
    }
    if aborted > 0 {
        warn!(count = aborted, "Some fetch tasks did not run to completion");
    }
    match first_store_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn spawn_fetch(
    fetcher: &Arc<Fetcher>,
    store: &Arc<SiteStore>,
    site: &str,
    kind: DataKind,
    url: &str,
) -> JoinHandle<Result<(), StoreError>> {
    let fetcher = Arc::clone(fetcher);
    let store = Arc::clone(store);
    let site = site.to_string();
    let url = url.to_string();
    tokio::spawn(async move {
        let fragment = fetch_fragment(&fetcher, &site, kind, &url).await;
        store.update(&site, kind, fragment).await
    })
}

/// Fetches and extracts one fragment. Every source-side failure is logged
/// with full context and folded to an empty fragment, leaving that page
/// slot blank instead of failing the site.
async fn fetch_fragment(fetcher: &Fetcher, site: &str, kind: DataKind, url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    let extractor = match extract::for_source(kind, url) {
        Some(extractor) => extractor,
        None => {
            error!(site = %site, url = %url, "Unknown tide source host");
            return String::new();
        }
    };

    let cookie = (kind == DataKind::Wind).then_some(WINDGURU_COOKIE);
    let page = match fetcher.fetch(url, cookie).await {
        Ok(page) => page,
        Err(e) => {
            error!(site = %site, kind = %kind, url = %url, error = %e, "Fetch failed");
            return String::new();
        }
    };

    match extractor.extract(&page) {
        Ok(fragment) => {
            debug!(site = %site, kind = %kind, bytes = fragment.len(), "Fragment extracted");
            fragment
        }
        Err(e) => {
            error!(site = %site, kind = %kind, url = %url, error = %e, "Extraction failed");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const WIND_PAGE: &str =
        r#"<div id="div_wgfcst1"><script language="javascript">render();</script></div>"#;

    #[tokio::test]
    async fn test_fetch_fragment_extracts_wind_widget() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/int/index.php"))
            .respond_with(ResponseTemplate::new(200).set_body_string(WIND_PAGE))
            .mount(&server)
            .await;

        let fetcher = Fetcher::new().unwrap();
        let fragment = fetch_fragment(
            &fetcher,
            "donghe",
            DataKind::Wind,
            &format!("{}/int/index.php?sc=174509", server.uri()),
        )
        .await;
        assert_eq!(fragment, "<div><script>render();</script></div>");
    }

    #[tokio::test]
    async fn test_fetch_fragment_empty_url_is_empty_fragment() {
        let fetcher = Fetcher::new().unwrap();
        let fragment = fetch_fragment(&fetcher, "canggu", DataKind::Weather, "").await;
        assert_eq!(fragment, "");
    }

    #[tokio::test]
    async fn test_fetch_fragment_unknown_tide_host_is_empty_fragment() {
        // Dispatch happens before any request goes out.
        let fetcher = Fetcher::new().unwrap();
        let fragment =
            fetch_fragment(&fetcher, "canggu", DataKind::Tide, "http://tides.example.com/x").await;
        assert_eq!(fragment, "");
    }

    #[tokio::test]
    async fn test_fetch_fragment_folds_fetch_errors_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3Hr/1001407.htm"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let fetcher = Fetcher::new().unwrap();
        let fragment = fetch_fragment(
            &fetcher,
            "donghe",
            DataKind::Weather,
            &format!("{}/3Hr/1001407.htm", server.uri()),
        )
        .await;
        assert_eq!(fragment, "");
    }

    #[tokio::test]
    async fn test_fetch_fragment_folds_extraction_errors_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/int/index.php"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("<html><body>maintenance</body></html>"),
            )
            .mount(&server)
            .await;

        let fetcher = Fetcher::new().unwrap();
        let fragment = fetch_fragment(
            &fetcher,
            "donghe",
            DataKind::Wind,
            &format!("{}/int/index.php?sc=174509", server.uri()),
        )
        .await;
        assert_eq!(fragment, "");
    }

    #[tokio::test]
    async fn test_spawn_fetch_writes_through_to_store() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/int/index.php"))
            .respond_with(ResponseTemplate::new(200).set_body_string(WIND_PAGE))
            .mount(&server)
            .await;

        let tmp = tempfile::tempdir().unwrap();
        let store = Arc::new(SiteStore::open(tmp.path().join("store")).await.unwrap());
        let fetcher = Arc::new(Fetcher::new().unwrap());

        let handle = spawn_fetch(
            &fetcher,
            &store,
            "donghe",
            DataKind::Wind,
            &format!("{}/int/index.php?sc=174509", server.uri()),
        );
        handle.await.unwrap().unwrap();

        let records = store.read_all().await.unwrap();
        assert_eq!(
            records["donghe"].get(DataKind::Wind),
            Some("<div><script>render();</script></div>")
        );
    }
}
