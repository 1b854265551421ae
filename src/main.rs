//! Folio - content collections and query layer for a personal blog and resume.

use anyhow::{Context, Result};
use clap::Parser;
use folio::{cli::Cli, commands, config::SiteConfig, data::ContentStore, log};
use std::{
    io::{Write, stdout},
    path::Path,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let (store, report) = ContentStore::load(&config)?;
    if !report.is_clean() && !cli.is_check() {
        log!("warn"; "{} file(s) refused, run `folio check` for details", report.skipped.len());
    }

    let mut out = stdout().lock();
    commands::run(&cli, &config, &store, &report, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error: every section has defaults.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)
            .with_context(|| format!("failed to load `{}`", config_path.display()))?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
