//! Document kinds and their validation.
//!
//! Each kind comes in two shapes:
//!
//! - a `Raw*` record, deserialized straight from frontmatter, where every
//!   field is optional or defaulted;
//! - the typed document, produced by [`Document::validate`], with required
//!   fields enforced and computed fields (`slug`, `url`, reading time, ...)
//!   populated.
//!
//! Computed fields depend only on the record itself and the content config,
//! never on other documents.
//!
//! | Kind | Directory | Route | Required fields |
//! |------|-----------|-------|-----------------|
//! | Author | `authors/` | `/authors/` | `name` |
//! | Tag | `tags/` | `/tags/` | `name` |
//! | Category | `categories/` | `/categories/` | `name` |
//! | Article | `articles/` | `/articles/` | `title`, `date`, `author`, `category` |
//! | Page | `pages/` | `/` | `title` |
//! | Project | `projects/` | `/projects/` | `title`, `description`, `start` |

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::{
    fmt,
    path::{Path, PathBuf},
};

use super::{
    computed::{ReadingTime, reading_time},
    error::ContentError,
    excerpt::excerpt,
};
use crate::{
    config::{ContentConfig, KindDirs},
    utils::{
        date::ContentDate,
        slug::{route_url, slug_from_filename},
    },
};

const DEFAULT_COLOR: &str = "#6b7280";

fn default_color() -> String {
    DEFAULT_COLOR.into()
}

// ============================================================================
// Kinds and Sources
// ============================================================================

/// The six document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Author,
    Tag,
    Category,
    Article,
    Page,
    Project,
}

impl DocumentKind {
    pub const ALL: [Self; 6] = [
        Self::Author,
        Self::Tag,
        Self::Category,
        Self::Article,
        Self::Page,
        Self::Project,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Tag => "tag",
            Self::Category => "category",
            Self::Article => "article",
            Self::Page => "page",
            Self::Project => "project",
        }
    }

    /// Directory name of this kind under the content root.
    pub fn dir(self, dirs: &KindDirs) -> &str {
        match self {
            Self::Author => &dirs.authors,
            Self::Tag => &dirs.tags,
            Self::Category => &dirs.categories,
            Self::Article => &dirs.articles,
            Self::Page => &dirs.pages,
            Self::Project => &dirs.projects,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A source file after frontmatter extraction.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path on disk, used in error reports.
    pub path: PathBuf,
    /// Path relative to the content root with `/` separators,
    /// e.g. `articles/react-18.md`.
    pub id: String,
    /// Markdown after the frontmatter.
    pub body: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            id: id.into(),
            body: body.into(),
        }
    }

    fn slug(&self, config: &ContentConfig) -> String {
        slug_from_filename(&self.id, &config.extensions)
    }
}

/// A validated document of one kind.
pub trait Document: Sized + Send {
    const KIND: DocumentKind;

    /// As-authored frontmatter record.
    type Raw: DeserializeOwned;

    /// Enforce required fields and compute derived ones.
    fn validate(raw: Self::Raw, source: SourceFile, config: &ContentConfig) -> Result<Self, ContentError>;

    /// Identifier, unique within the kind.
    fn slug(&self) -> &str;
}

/// Unwrap a required field or report it missing.
fn required<T>(value: Option<T>, path: &Path, kind: DocumentKind, field: &'static str) -> Result<T, ContentError> {
    value.ok_or_else(|| ContentError::MissingField {
        path: path.to_path_buf(),
        kind,
        field,
    })
}

/// Parse an optional date field.
fn parse_date(value: Option<String>, path: &Path, field: &'static str) -> Result<Option<ContentDate>, ContentError> {
    value
        .map(|raw| {
            ContentDate::parse(&raw).ok_or_else(|| ContentError::InvalidDate {
                path: path.to_path_buf(),
                field,
                value: raw,
            })
        })
        .transpose()
}

/// SEO overrides shared by articles and pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
}

// ============================================================================
// Author
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawAuthor {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Author {
    pub slug: String,
    pub url: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

impl Document for Author {
    const KIND: DocumentKind = DocumentKind::Author;
    type Raw = RawAuthor;

    fn validate(raw: RawAuthor, source: SourceFile, config: &ContentConfig) -> Result<Self, ContentError> {
        let name = required(raw.name, &source.path, Self::KIND, "name")?;
        let slug = source.slug(config);

        Ok(Self {
            url: route_url(&config.routes.authors, &slug),
            slug,
            name,
            avatar: raw.avatar,
            bio: raw.bio,
            email: raw.email,
            website: raw.website,
            github: raw.github,
            twitter: raw.twitter,
        })
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

// ============================================================================
// Tag
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTag {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tag {
    pub slug: String,
    pub url: String,
    pub name: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub featured: bool,
}

impl Document for Tag {
    const KIND: DocumentKind = DocumentKind::Tag;
    type Raw = RawTag;

    fn validate(raw: RawTag, source: SourceFile, config: &ContentConfig) -> Result<Self, ContentError> {
        let name = required(raw.name, &source.path, Self::KIND, "name")?;
        // an explicit slug wins over the filename
        let slug = raw.slug.unwrap_or_else(|| source.slug(config));

        Ok(Self {
            url: route_url(&config.routes.tags, &slug),
            slug,
            name,
            color: raw.color.unwrap_or_else(default_color),
            description: raw.description,
            featured: raw.featured,
        })
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

// ============================================================================
// Category
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCategory {
    pub name: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub slug: String,
    pub url: String,
    pub name: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub order: i32,
}

impl Document for Category {
    const KIND: DocumentKind = DocumentKind::Category;
    type Raw = RawCategory;

    fn validate(raw: RawCategory, source: SourceFile, config: &ContentConfig) -> Result<Self, ContentError> {
        let name = required(raw.name, &source.path, Self::KIND, "name")?;
        let slug = source.slug(config);

        Ok(Self {
            url: route_url(&config.routes.categories, &slug),
            slug,
            name,
            color: raw.color.unwrap_or_else(default_color),
            description: raw.description,
            order: raw.order,
        })
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

// ============================================================================
// Article
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RawArticle {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    #[serde(alias = "publishedAt")]
    pub date: Option<String>,
    #[serde(alias = "updatedAt")]
    pub updated: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub featured: bool,
    pub published: bool,
    #[serde(alias = "coverImage")]
    pub cover: Option<String>,
    pub seo: Option<Seo>,
}

impl Default for RawArticle {
    fn default() -> Self {
        Self {
            title: None,
            excerpt: None,
            date: None,
            updated: None,
            author: None,
            category: None,
            tags: Vec::new(),
            featured: false,
            published: true,
            cover: None,
            seo: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Article {
    /// Source path relative to the content root.
    pub id: String,
    pub slug: String,
    pub url: String,
    pub title: String,
    pub excerpt: String,
    pub date: ContentDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<ContentDate>,
    /// Author slug; resolved on read.
    pub author: String,
    /// Category slug; resolved on read.
    pub category: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
    pub reading_time: ReadingTime,
    #[serde(skip)]
    pub body: String,
}

impl Article {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Document for Article {
    const KIND: DocumentKind = DocumentKind::Article;
    type Raw = RawArticle;

    fn validate(raw: RawArticle, source: SourceFile, config: &ContentConfig) -> Result<Self, ContentError> {
        let path = &source.path;
        let title = required(raw.title, path, Self::KIND, "title")?;
        let date = required(parse_date(raw.date, path, "date")?, path, Self::KIND, "date")?;
        let updated = parse_date(raw.updated, path, "updated")?;
        let author = required(raw.author, path, Self::KIND, "author")?;
        let category = required(raw.category, path, Self::KIND, "category")?;

        let slug = source.slug(config);
        let excerpt = raw
            .excerpt
            .unwrap_or_else(|| excerpt(&source.body, config.excerpt_length, &config.ellipsis));

        Ok(Self {
            url: route_url(&config.routes.articles, &slug),
            reading_time: reading_time(&source.body, config.words_per_minute),
            id: source.id,
            slug,
            title,
            excerpt,
            date,
            updated,
            author,
            category,
            tags: raw.tags,
            featured: raw.featured,
            published: raw.published,
            cover: raw.cover,
            seo: raw.seo,
            body: source.body,
        })
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

// ============================================================================
// Page
// ============================================================================

/// Page layout variants understood by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Default,
    Wide,
    Narrow,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPage {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "lastUpdated")]
    pub updated: Option<String>,
    pub layout: Layout,
    pub seo: Option<Seo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub slug: String,
    pub url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<ContentDate>,
    pub layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
    #[serde(skip)]
    pub body: String,
}

impl Document for Page {
    const KIND: DocumentKind = DocumentKind::Page;
    type Raw = RawPage;

    fn validate(raw: RawPage, source: SourceFile, config: &ContentConfig) -> Result<Self, ContentError> {
        let title = required(raw.title, &source.path, Self::KIND, "title")?;
        let updated = parse_date(raw.updated, &source.path, "updated")?;
        let slug = source.slug(config);

        Ok(Self {
            url: route_url(&config.routes.pages, &slug),
            slug,
            title,
            description: raw.description,
            updated,
            layout: raw.layout,
            seo: raw.seo,
            body: source.body,
        })
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

// ============================================================================
// Project
// ============================================================================

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[serde(alias = "in-progress")]
    Active,
    #[default]
    Completed,
    Archived,
    Planned,
}

impl ProjectStatus {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Archived => "archived",
            Self::Planned => "planned",
        }
    }

    /// Parse a status name as written in frontmatter.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" | "in-progress" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "archived" => Some(Self::Archived),
            "planned" => Some(Self::Planned),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawProject {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "tech")]
    pub technologies: Vec<String>,
    #[serde(alias = "github")]
    pub repository: Option<String>,
    #[serde(alias = "demoUrl")]
    pub demo: Option<String>,
    pub image: Option<String>,
    pub featured: bool,
    #[serde(alias = "startDate")]
    pub start: Option<String>,
    #[serde(alias = "endDate")]
    pub end: Option<String>,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub slug: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub featured: bool,
    pub start: ContentDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<ContentDate>,
    pub status: ProjectStatus,
    #[serde(skip)]
    pub body: String,
}

impl Document for Project {
    const KIND: DocumentKind = DocumentKind::Project;
    type Raw = RawProject;

    fn validate(raw: RawProject, source: SourceFile, config: &ContentConfig) -> Result<Self, ContentError> {
        let path = &source.path;
        let title = required(raw.title, path, Self::KIND, "title")?;
        let description = required(raw.description, path, Self::KIND, "description")?;
        let start = required(parse_date(raw.start, path, "start")?, path, Self::KIND, "start")?;
        let end = parse_date(raw.end, path, "end")?;
        let slug = source.slug(config);

        Ok(Self {
            url: route_url(&config.routes.projects, &slug),
            slug,
            title,
            description,
            technologies: raw.technologies,
            repository: raw.repository,
            demo: raw.demo,
            image: raw.image,
            featured: raw.featured,
            start,
            end,
            status: raw.status,
            body: source.body,
        })
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

// ============================================================================
// Tests
// ============================================================================
