//! Result types returned by the query layer.
//!
//! These borrow from the store and serialize directly to the JSON exposed by
//! `folio export` and `--json` output.

use serde::Serialize;

use crate::{
    config::QueryConfig,
    content::{Article, Category, DocumentKind, Tag},
};

/// Store-wide knobs that affect query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Multiplier for the synthetic `views` statistic.
    pub views_per_minute: u64,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self::from(&QueryConfig::default())
    }
}

impl From<&QueryConfig> for StoreOptions {
    fn from(config: &QueryConfig) -> Self {
        Self {
            views_per_minute: config.views_per_minute,
        }
    }
}

/// Site-wide statistics.
///
/// `views` is synthetic: `views_per_minute` times the summed reading minutes
/// of published articles. It is not analytics data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SiteStats {
    pub articles: usize,
    pub tags: usize,
    pub categories: usize,
    pub projects: usize,
    pub words: usize,
    pub reading_minutes: u64,
    pub views: u64,
}

/// Published articles of one calendar year, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct YearGroup<'a> {
    pub year: i32,
    pub articles: Vec<&'a Article>,
}

/// A tag with the number of published articles carrying it.
#[derive(Debug, Clone, Serialize)]
pub struct TagSummary<'a> {
    #[serde(flatten)]
    pub tag: &'a Tag,
    pub count: usize,
}

/// A category with the number of published articles filed under it.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary<'a> {
    #[serde(flatten)]
    pub category: &'a Category,
    pub count: usize,
}

/// An article reference that resolves to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingRef {
    /// Id of the referring article.
    pub article: String,
    /// Kind the key was expected to name.
    pub kind: DocumentKind,
    pub key: String,
}
