//! Folio - content collections and a query layer for a personal blog and
//! resume site.
//!
//! Markdown documents with YAML or TOML frontmatter are loaded from a content
//! directory into an immutable [`data::ContentStore`], queried in memory, and
//! optionally exported as JSON for a renderer.
//!
//! ```no_run
//! use folio::{config::SiteConfig, data::ContentStore};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut config = SiteConfig::from_path("folio.toml".as_ref())?;
//! config.update_path_with_root(".".as_ref());
//!
//! let (store, _report) = ContentStore::load(&config)?;
//! for article in store.latest_articles(5) {
//!     println!("{} {}", article.date, article.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod data;
pub mod logger;
pub mod utils;
