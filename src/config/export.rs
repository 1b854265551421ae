//! `[export]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[export]` section in folio.toml - JSON export of the collections.
///
/// # Example
/// ```toml
/// [export]
/// output = "public/_data"
/// pretty = false
/// include_body = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Directory the JSON files are written to.
    #[serde(default = "defaults::export::output")]
    #[educe(Default = defaults::export::output())]
    pub output: PathBuf,

    /// Pretty-print the JSON output.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub pretty: bool,

    /// Include raw Markdown bodies in `articles.json`.
    #[serde(default)]
    pub include_body: bool,
}
