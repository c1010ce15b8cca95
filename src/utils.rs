//! File system helpers shared by the update and cleanup paths.
//!
//! This module provides:
//! - Output directory validation before any network work starts
//! - Best-effort removal of generated artifacts for `--cleanup`

use crate::models::Category;
use crate::update::JP_IMG_FILE;
use std::error::Error;
use std::fs as stdfs;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument, warn};

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then writes and deletes a small probe
/// file to catch permission problems before the run invests any time in
/// fetching.
///
/// # Arguments
///
/// * `path` - The directory path to validate
///
/// # Returns
///
/// `Ok(())` if the directory exists and is writable, or an error describing
/// the failure.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Working directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

/// Remove everything a previous run generated.
///
/// Deletes the per-category page directories, the downloaded weather chart
/// and the data store directory. Removal is best effort: artifacts that do
/// not exist are skipped silently, anything else that fails to delete is
/// logged and left behind.
#[instrument(level = "info", skip_all)]
pub async fn cleanup(base: &Path, store_dir: &Path) {
    for categ in Category::ALL {
        remove_dir_logged(&base.join(categ.as_str())).await;
    }
    remove_file_logged(&base.join(JP_IMG_FILE)).await;
    remove_dir_logged(store_dir).await;
    info!("Cleanup complete");
}

async fn remove_dir_logged(path: &Path) {
    match fs::remove_dir_all(path).await {
        Ok(()) => info!(path = %path.display(), "Removed directory"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "Could not remove directory"),
    }
}

async fn remove_file_logged(path: &Path) {
    match fs::remove_file(path).await {
        Ok(()) => info!(path = %path.display(), "Removed file"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "Could not remove file"),
    }
}
