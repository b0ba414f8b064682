//! Menu command - run the interactive menu on stdin/stdout

use std::io;

use libcat::config::Config;
use libcat::core::Catalog;
use libcat::output::OutputMode;
use libcat::sample;
use log::{info, warn};

use crate::cli::menu::{Menu, MenuOptions};

/// Open the interactive menu
pub fn menu(empty: bool, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let catalog = if empty || !config.menu.seed_sample_data {
        Catalog::new()
    } else {
        sample::catalog()?
    };
    info!(
        "starting menu with {} book(s) and {} patron(s)",
        catalog.books().len(),
        catalog.patrons().len()
    );

    if mode == OutputMode::Json {
        warn!("the interactive menu only writes text; ignoring JSON output mode");
    }

    let options = MenuOptions {
        prompt: config.menu.prompt.clone(),
        currency: config.fees.currency.clone(),
    };
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let catalog = Menu::new(catalog, stdin, stdout, options).run()?;

    info!("menu closed after {} checkout(s)", catalog.transactions().len());
    Ok(())
}
