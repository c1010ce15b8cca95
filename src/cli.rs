//! Command-line interface definitions for surfcast.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The binary is built to run unattended from cron, so every option has a
//! sane default and a full run needs no arguments at all.

use crate::models::Category;
use clap::Parser;

/// Command-line arguments for the surfcast application.
///
/// # Examples
///
/// ```sh
/// # Update every category into the current directory
/// surfcast
///
/// # Update one category under a dedicated web root
/// surfcast -w /var/www/surf -c twe
///
/// # Remove everything a previous run generated
/// surfcast -w /var/www/surf --cleanup
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Working directory to generate into (defaults to the current one)
    #[arg(short, long)]
    pub workdir: Option<String>,

    /// Single category to update (all categories when not set)
    #[arg(short, long, value_enum)]
    pub categ: Option<Category>,

    /// Remove generated pages, the downloaded chart and the data store, then exit
    #[arg(short = 'C', long)]
    pub cleanup: bool,
}

impl Cli {
    /// The categories this invocation should update.
    pub fn categories(&self) -> Vec<Category> {
        match self.categ {
            Some(categ) => vec![categ],
            None => Category::ALL.to_vec(),
        }
    }
}
