//! JSON export of the store for a renderer.
//!
//! Each file is produced by a generator over the store and written to the
//! `[export] output` directory:
//!
//! | File | Content |
//! |------|---------|
//! | `articles.json` | published articles, source order |
//! | `tags.json` | tags with published-article counts |
//! | `categories.json` | categories with counts, by `order` then name |
//! | `authors.json`, `pages.json`, `projects.json` | all records, source order |
//! | `archive.json` | published articles grouped by year |
//! | `stats.json` | site statistics |
//! | `resume.json` | timeline and skills |

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

use super::store::ContentStore;
use crate::{config::ExportConfig, content::Article, log};

/// Article as exported, optionally carrying its Markdown body.
#[derive(Debug, Serialize)]
struct ArticleEntry<'a> {
    #[serde(flatten)]
    article: &'a Article,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a str>,
}

type Generator = fn(&ContentStore, &ExportConfig) -> serde_json::Result<Value>;

const EXPORT_FILES: &[(&str, Generator)] = &[
    ("articles.json", |store, config| {
        let entries: Vec<_> = store
            .published_articles()
            .into_iter()
            .map(|article| ArticleEntry {
                article,
                body: config.include_body.then_some(article.body.as_str()),
            })
            .collect();
        serde_json::to_value(entries)
    }),
    ("tags.json", |store, _| serde_json::to_value(store.tag_summaries())),
    ("categories.json", |store, _| serde_json::to_value(store.category_summaries())),
    ("authors.json", |store, _| serde_json::to_value(store.authors())),
    ("pages.json", |store, _| serde_json::to_value(store.pages())),
    ("projects.json", |store, _| serde_json::to_value(store.projects())),
    ("archive.json", |store, _| serde_json::to_value(store.group_by_year())),
    ("stats.json", |store, _| serde_json::to_value(store.stats())),
    ("resume.json", |store, _| serde_json::to_value(store.resume())),
];

/// Names of every exported file, in write order.
pub fn export_file_names() -> impl Iterator<Item = &'static str> {
    EXPORT_FILES.iter().map(|(name, _)| *name)
}

/// Render one export file by name.
pub fn render(store: &ContentStore, config: &ExportConfig, name: &str) -> Result<Option<String>> {
    let Some((_, generator)) = EXPORT_FILES.iter().find(|(n, _)| *n == name) else {
        return Ok(None);
    };
    let value = generator(store, config).with_context(|| format!("failed to serialize {name}"))?;
    let json = if config.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(Some(json))
}

/// Write every export file into `config.output`, returning the written paths.
pub fn export(store: &ContentStore, config: &ExportConfig) -> Result<Vec<PathBuf>> {
    write_to_dir(store, config, &config.output)
}

fn write_to_dir(store: &ContentStore, config: &ExportConfig, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create `{}`", dir.display()))?;

    let mut written = Vec::with_capacity(EXPORT_FILES.len());
    for name in export_file_names() {
        let Some(json) = render(store, config, name)? else {
            continue;
        };
        let path = dir.join(name);
        fs::write(&path, json).with_context(|| format!("failed to write `{}`", path.display()))?;
        written.push(path);
    }

    log!("export"; "wrote {} files to {}", written.len(), dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        content::Collections,
        data::{
            resume::Resume,
            store::tests::{article, category, tag},
        },
    };
    use tempfile::TempDir;

    fn store() -> ContentStore {
        let mut draft = article("draft", "Draft", "2024-03-01", "rust", &["rust"]);
        draft.published = false;

        ContentStore::new(
            Collections {
                tags: vec![tag("rust")],
                categories: vec![category("rust", 0)],
                articles: vec![
                    article("hello", "Hello", "2024-01-15", "rust", &["rust"]),
                    article("older", "Older", "2023-06-01", "rust", &[]),
                    draft,
                ],
                ..Collections::default()
            },
            Resume::from_str("[[skills]]\nname = \"Rust\"\n").unwrap(),
        )
    }

    fn config_for(dir: &Path) -> ExportConfig {
        ExportConfig {
            output: dir.to_path_buf(),
            ..ExportConfig::default()
        }
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_export_writes_every_file() {
        let dir = TempDir::new().unwrap();
        let written = export(&store(), &config_for(dir.path())).unwrap();

        assert_eq!(written.len(), export_file_names().count());
        for name in export_file_names() {
            assert!(dir.path().join(name).is_file(), "{name} missing");
        }
    }

    #[test]
    fn test_articles_exclude_drafts_and_body() {
        let dir = TempDir::new().unwrap();
        export(&store(), &config_for(dir.path())).unwrap();

        let articles = read_json(&dir.path().join("articles.json"));
        let articles = articles.as_array().unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0]["slug"], "hello");
        assert_eq!(articles[0]["date"], "2024-01-15");
        assert_eq!(articles[0]["reading_time"]["minutes"], 1);
        assert!(articles[0].get("body").is_none());
    }

    #[test]
    fn test_articles_include_body() {
        let config = ExportConfig {
            include_body: true,
            ..ExportConfig::default()
        };
        let json = render(&store(), &config, "articles.json").unwrap().unwrap();
        let articles: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(articles[0]["body"], "Body of Hello.");
    }

    #[test]
    fn test_aggregates() {
        let dir = TempDir::new().unwrap();
        export(&store(), &config_for(dir.path())).unwrap();

        let tags = read_json(&dir.path().join("tags.json"));
        assert_eq!(tags[0]["slug"], "rust");
        assert_eq!(tags[0]["count"], 1);

        let archive = read_json(&dir.path().join("archive.json"));
        assert_eq!(archive[0]["year"], 2024);
        assert_eq!(archive[1]["year"], 2023);
        assert_eq!(archive[1]["articles"][0]["slug"], "older");

        let stats = read_json(&dir.path().join("stats.json"));
        assert_eq!(stats["articles"], 2);
        assert_eq!(stats["views"], 200);

        let resume = read_json(&dir.path().join("resume.json"));
        assert_eq!(resume["skills"][0]["name"], "Rust");
    }

    #[test]
    fn test_compact_output() {
        let config = ExportConfig {
            pretty: false,
            ..ExportConfig::default()
        };
        let json = render(&store(), &config, "stats.json").unwrap().unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_render_unknown_file() {
        let config = ExportConfig::default();
        assert!(render(&store(), &config, "unknown.json").unwrap().is_none());
    }
}
