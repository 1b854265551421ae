//! `[content]` section configuration.
//!
//! Controls where documents are read from and how computed fields are derived.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// `[content]` section in folio.toml.
///
/// # Example
/// ```toml
/// [content]
/// dir = "content"
/// extensions = ["md", "mdx"]
/// words_per_minute = 200
/// excerpt_length = 160
///
/// [content.routes]
/// articles = "/posts/"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Content root containing one directory per document kind.
    #[serde(default = "defaults::content::dir")]
    #[educe(Default = defaults::content::dir())]
    pub dir: PathBuf,

    /// Data directory holding `resume.toml`.
    #[serde(default = "defaults::content::data")]
    #[educe(Default = defaults::content::data())]
    pub data: PathBuf,

    /// Source file extensions, without the leading dot.
    #[serde(default = "defaults::content::extensions")]
    #[educe(Default = defaults::content::extensions())]
    pub extensions: Vec<String>,

    /// Abort loading when any record is refused.
    #[serde(default)]
    pub strict: bool,

    /// Reading speed used for reading-time estimates.
    #[serde(default = "defaults::content::words_per_minute")]
    #[educe(Default = defaults::content::words_per_minute())]
    pub words_per_minute: u32,

    /// Maximum excerpt length in characters, before the ellipsis.
    #[serde(default = "defaults::content::excerpt_length")]
    #[educe(Default = defaults::content::excerpt_length())]
    pub excerpt_length: usize,

    /// Marker appended to truncated excerpts.
    #[serde(default = "defaults::content::ellipsis")]
    #[educe(Default = defaults::content::ellipsis())]
    pub ellipsis: String,

    /// Directory name per document kind, relative to `dir`.
    #[serde(default)]
    pub dirs: KindDirs,

    /// URL route prefix per document kind.
    #[serde(default)]
    pub routes: Routes,
}

impl ContentConfig {
    /// Whether a path carries one of the configured source extensions.
    pub fn is_source(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

/// `[content.dirs]` - per-kind directory names.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct KindDirs {
    #[serde(default = "defaults::content::dirs::authors")]
    #[educe(Default = defaults::content::dirs::authors())]
    pub authors: String,

    #[serde(default = "defaults::content::dirs::tags")]
    #[educe(Default = defaults::content::dirs::tags())]
    pub tags: String,

    #[serde(default = "defaults::content::dirs::categories")]
    #[educe(Default = defaults::content::dirs::categories())]
    pub categories: String,

    #[serde(default = "defaults::content::dirs::articles")]
    #[educe(Default = defaults::content::dirs::articles())]
    pub articles: String,

    #[serde(default = "defaults::content::dirs::pages")]
    #[educe(Default = defaults::content::dirs::pages())]
    pub pages: String,

    #[serde(default = "defaults::content::dirs::projects")]
    #[educe(Default = defaults::content::dirs::projects())]
    pub projects: String,
}

/// `[content.routes]` - per-kind URL prefixes.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct Routes {
    #[serde(default = "defaults::content::routes::authors")]
    #[educe(Default = defaults::content::routes::authors())]
    pub authors: String,

    #[serde(default = "defaults::content::routes::tags")]
    #[educe(Default = defaults::content::routes::tags())]
    pub tags: String,

    #[serde(default = "defaults::content::routes::categories")]
    #[educe(Default = defaults::content::routes::categories())]
    pub categories: String,

    #[serde(default = "defaults::content::routes::articles")]
    #[educe(Default = defaults::content::routes::articles())]
    pub articles: String,

    #[serde(default = "defaults::content::routes::pages")]
    #[educe(Default = defaults::content::routes::pages())]
    pub pages: String,

    #[serde(default = "defaults::content::routes::projects")]
    #[educe(Default = defaults::content::routes::projects())]
    pub projects: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_content_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.content.dir, PathBuf::from("content"));
        assert_eq!(config.content.data, PathBuf::from("data"));
        assert_eq!(config.content.extensions, vec!["md", "mdx"]);
        assert!(!config.content.strict);
        assert_eq!(config.content.words_per_minute, 200);
        assert_eq!(config.content.excerpt_length, 160);
        assert_eq!(config.content.ellipsis, "...");
        assert_eq!(config.content.dirs.articles, "articles");
        assert_eq!(config.content.routes.articles, "/articles/");
        assert_eq!(config.content.routes.pages, "/");
    }

    #[test]
    fn test_content_config_nested_overrides() {
        let config = r#"
            [content]
            dir = "src/content"
            strict = true
            words_per_minute = 300

            [content.routes]
            articles = "/posts/"

            [content.dirs]
            articles = "posts"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.content.dir, PathBuf::from("src/content"));
        assert!(config.content.strict);
        assert_eq!(config.content.words_per_minute, 300);
        assert_eq!(config.content.routes.articles, "/posts/");
        assert_eq!(config.content.routes.projects, "/projects/");
        assert_eq!(config.content.dirs.articles, "posts");
        assert_eq!(config.content.dirs.tags, "tags");
    }

    #[test]
    fn test_content_config_unknown_route_rejected() {
        let config = r#"
            [content.routes]
            snippets = "/snippets/"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_is_source() {
        let config = ContentConfig::default();
        assert!(config.is_source(Path::new("articles/react.md")));
        assert!(config.is_source(Path::new("articles/react.mdx")));
        assert!(!config.is_source(Path::new("articles/cover.png")));
        assert!(!config.is_source(Path::new("articles/README")));
    }
}
