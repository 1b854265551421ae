//! Immutable content store.
//!
//! A [`ContentStore`] is built once from loaded collections and handed to
//! whoever needs to query it. There is no global instance and no write path:
//! independent stores (one per test, say) never share state.

use anyhow::Result;

use super::{resume::Resume, types::StoreOptions};
use crate::{
    config::SiteConfig,
    content::{
        Article, Author, Category, Collections, LoadReport, Page, Project, Tag, load_collections,
    },
};

/// Read-only view over every document kind plus resume data.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    collections: Collections,
    resume: Resume,
    options: StoreOptions,
}

impl ContentStore {
    /// Build a store from already-validated collections.
    pub fn new(collections: Collections, resume: Resume) -> Self {
        Self {
            collections,
            resume,
            options: StoreOptions::default(),
        }
    }

    pub fn with_options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    /// Load content and resume data as configured.
    pub fn load(config: &SiteConfig) -> Result<(Self, LoadReport)> {
        let (collections, report) = load_collections(&config.content)?;
        let resume = Resume::load(&config.resume_path())?;
        let store = Self::new(collections, resume).with_options(StoreOptions::from(&config.query));
        Ok((store, report))
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    // ========================================================================
    // Enumeration
    // ========================================================================

    /// Every article, published or not, in source order.
    pub fn articles(&self) -> &[Article] {
        &self.collections.articles
    }

    pub fn authors(&self) -> &[Author] {
        &self.collections.authors
    }

    pub fn tags(&self) -> &[Tag] {
        &self.collections.tags
    }

    pub fn categories(&self) -> &[Category] {
        &self.collections.categories
    }

    pub fn pages(&self) -> &[Page] {
        &self.collections.pages
    }

    pub fn projects(&self) -> &[Project] {
        &self.collections.projects
    }

    pub fn resume(&self) -> &Resume {
        &self.resume
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Article by id (content-root-relative source path).
    pub fn article_by_id(&self, id: &str) -> Option<&Article> {
        self.articles().iter().find(|a| a.id == id)
    }

    pub fn article_by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles().iter().find(|a| a.slug == slug)
    }

    pub fn author_by_slug(&self, slug: &str) -> Option<&Author> {
        self.authors().iter().find(|a| a.slug == slug)
    }

    pub fn tag_by_slug(&self, slug: &str) -> Option<&Tag> {
        self.tags().iter().find(|t| t.slug == slug)
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories().iter().find(|c| c.slug == slug)
    }

    pub fn page_by_slug(&self, slug: &str) -> Option<&Page> {
        self.pages().iter().find(|p| p.slug == slug)
    }

    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects().iter().find(|p| p.slug == slug)
    }

    // ========================================================================
    // Soft References
    // ========================================================================

    pub fn author_of(&self, article: &Article) -> Option<&Author> {
        self.author_by_slug(&article.author)
    }

    pub fn category_of(&self, article: &Article) -> Option<&Category> {
        self.category_by_slug(&article.category)
    }

    /// Tags of an article in authored order; unknown tag keys are skipped.
    pub fn tags_of(&self, article: &Article) -> Vec<&Tag> {
        article
            .tags
            .iter()
            .filter_map(|slug| self.tag_by_slug(slug))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{
        config::ContentConfig,
        content::{Document, SourceFile, schema::{RawArticle, RawAuthor, RawCategory, RawTag}},
    };

    pub(crate) fn article(slug: &str, title: &str, date: &str, category: &str, tags: &[&str]) -> Article {
        let raw = RawArticle {
            title: Some(title.into()),
            date: Some(date.into()),
            author: Some("alice".into()),
            category: Some(category.into()),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            ..RawArticle::default()
        };
        let id = format!("articles/{slug}.md");
        Article::validate(raw, SourceFile::new(&id, &id, format!("Body of {title}.")), &ContentConfig::default()).unwrap()
    }

    pub(crate) fn tag(slug: &str) -> Tag {
        let raw = RawTag {
            name: Some(slug.to_uppercase()),
            ..RawTag::default()
        };
        let id = format!("tags/{slug}.md");
        Tag::validate(raw, SourceFile::new(&id, &id, ""), &ContentConfig::default()).unwrap()
    }

    pub(crate) fn category(slug: &str, order: i32) -> Category {
        let raw = RawCategory {
            name: Some(slug.to_uppercase()),
            order,
            ..RawCategory::default()
        };
        let id = format!("categories/{slug}.md");
        Category::validate(raw, SourceFile::new(&id, &id, ""), &ContentConfig::default()).unwrap()
    }

    pub(crate) fn author(slug: &str) -> Author {
        let raw = RawAuthor {
            name: Some(slug.to_uppercase()),
            ..RawAuthor::default()
        };
        let id = format!("authors/{slug}.md");
        Author::validate(raw, SourceFile::new(&id, &id, ""), &ContentConfig::default()).unwrap()
    }

    #[test]
    fn test_lookup_by_id_and_slug() {
        let store = ContentStore::new(
            Collections {
                articles: vec![article("hello", "Hello", "2024-01-15", "rust", &[])],
                ..Collections::default()
            },
            Resume::default(),
        );

        let by_slug = store.article_by_slug("hello").unwrap();
        let by_id = store.article_by_id("articles/hello.md").unwrap();
        assert_eq!(by_slug.id, by_id.id);
        assert!(store.article_by_slug("missing").is_none());
        assert!(store.article_by_id("hello").is_none());
    }

    #[test]
    fn test_lookup_other_kinds() {
        let store = ContentStore::new(
            Collections {
                authors: vec![author("alice")],
                tags: vec![tag("rust")],
                categories: vec![category("backend", 1)],
                ..Collections::default()
            },
            Resume::default(),
        );

        assert_eq!(store.author_by_slug("alice").unwrap().name, "ALICE");
        assert_eq!(store.tag_by_slug("rust").unwrap().url, "/tags/rust");
        assert_eq!(store.category_by_slug("backend").unwrap().order, 1);
        assert!(store.page_by_slug("about").is_none());
        assert!(store.project_by_slug("folio").is_none());
    }

    #[test]
    fn test_soft_references_resolve_or_miss() {
        let mut dangling = article("b", "B", "2024-01-02", "nowhere", &["rust", "ghost"]);
        dangling.author = "bob".into();

        let store = ContentStore::new(
            Collections {
                authors: vec![author("alice")],
                tags: vec![tag("rust")],
                categories: vec![category("rust", 0)],
                articles: vec![article("a", "A", "2024-01-01", "rust", &["rust"]), dangling],
                ..Collections::default()
            },
            Resume::default(),
        );

        let a = store.article_by_slug("a").unwrap();
        assert_eq!(store.author_of(a).unwrap().slug, "alice");
        assert_eq!(store.category_of(a).unwrap().slug, "rust");

        let b = store.article_by_slug("b").unwrap();
        assert!(store.author_of(b).is_none());
        assert!(store.category_of(b).is_none());
        let tags: Vec<_> = store.tags_of(b).iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(tags, vec!["rust"]);
    }

    #[test]
    fn test_independent_stores() {
        let one = ContentStore::new(
            Collections {
                tags: vec![tag("rust")],
                ..Collections::default()
            },
            Resume::default(),
        );
        let two = ContentStore::default();

        assert_eq!(one.tags().len(), 1);
        assert!(two.tags().is_empty());
        assert!(two.tag_by_slug("rust").is_none());
    }

    #[test]
    fn test_options() {
        let store = ContentStore::default().with_options(StoreOptions { views_per_minute: 7 });
        assert_eq!(store.options().views_per_minute, 7);
        assert_eq!(ContentStore::default().options().views_per_minute, 100);
    }
}
