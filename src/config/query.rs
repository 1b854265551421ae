//! `[query]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[query]` section in folio.toml - defaults for the query layer.
///
/// # Example
/// ```toml
/// [query]
/// views_per_minute = 100
/// related_limit = 3
/// latest_limit = 5
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct QueryConfig {
    /// Multiplier turning reading minutes into the synthetic view count.
    #[serde(default = "defaults::query::views_per_minute")]
    #[educe(Default = defaults::query::views_per_minute())]
    pub views_per_minute: u64,

    /// Related articles returned when no limit is given.
    #[serde(default = "defaults::query::related_limit")]
    #[educe(Default = defaults::query::related_limit())]
    pub related_limit: usize,

    /// Latest articles returned when no limit is given.
    #[serde(default = "defaults::query::latest_limit")]
    #[educe(Default = defaults::query::latest_limit())]
    pub latest_limit: usize,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_query_config_defaults() {
        let config: SiteConfig = toml::from_str("[query]").unwrap();
        assert_eq!(config.query.views_per_minute, 100);
        assert_eq!(config.query.related_limit, 3);
        assert_eq!(config.query.latest_limit, 5);
    }

    #[test]
    fn test_query_config_override() {
        let config = r#"
            [query]
            views_per_minute = 42
            related_limit = 6
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();
        assert_eq!(config.query.views_per_minute, 42);
        assert_eq!(config.query.related_limit, 6);
        assert_eq!(config.query.latest_limit, 5);
    }
}
