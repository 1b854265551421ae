//! Content directory loading.
//!
//! # Architecture
//!
//! ```text
//! load_collections()
//!     │
//!     └── for each kind ──► collect_sources()      sorted walk of content/<kind>/
//!                               │
//!                               ├── par_iter: read_document::<D>()
//!                               │       frontmatter::extract → D::validate
//!                               │
//!                               └── register()     sequential, in path order
//!                                       refuse duplicates, record errors
//! ```
//!
//! Parsing runs in parallel; registration does not, so the first file in
//! path order always wins a slug collision and collections keep a stable
//! source order.

use anyhow::{Result, bail};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

use super::{
    error::ContentError,
    frontmatter,
    schema::{Article, Author, Category, Document, Page, Project, SourceFile, Tag},
};
use crate::{config::ContentConfig, log};

/// All validated documents, each collection in source (path) order.
#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub authors: Vec<Author>,
    pub tags: Vec<Tag>,
    pub categories: Vec<Category>,
    pub articles: Vec<Article>,
    pub pages: Vec<Page>,
    pub projects: Vec<Project>,
}

impl Collections {
    pub fn len(&self) -> usize {
        self.authors.len()
            + self.tags.len()
            + self.categories.len()
            + self.articles.len()
            + self.pages.len()
            + self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of a load besides the documents themselves.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Number of source files seen.
    pub scanned: usize,
    /// Files refused, with the reason.
    pub skipped: Vec<ContentError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Load every document kind from the content root.
///
/// Refused files are logged and recorded in the report. With
/// `[content] strict = true` any refused file fails the whole load.
pub fn load_collections(config: &ContentConfig) -> Result<(Collections, LoadReport)> {
    let mut report = LoadReport::default();

    let collections = Collections {
        authors: load_kind(config, &mut report),
        tags: load_kind(config, &mut report),
        categories: load_kind(config, &mut report),
        articles: load_kind(config, &mut report),
        pages: load_kind(config, &mut report),
        projects: load_kind(config, &mut report),
    };

    for err in &report.skipped {
        log!("warn"; "skipped {err}");
    }

    if config.strict && !report.is_clean() {
        bail!(
            "{} content file(s) refused in strict mode, first: {}",
            report.skipped.len(),
            report.skipped[0]
        );
    }

    log!("load"; "loaded {} documents from {} files", collections.len(), report.scanned);
    Ok((collections, report))
}

/// Load one kind from `content/<kind-dir>/`. A missing directory is empty.
fn load_kind<D: Document>(config: &ContentConfig, report: &mut LoadReport) -> Vec<D> {
    let dir = config.dir.join(D::KIND.dir(&config.dirs));
    let sources = collect_sources(&dir, config);
    report.scanned += sources.len();

    let parsed: Vec<_> = sources
        .par_iter()
        .map(|path| read_document::<D>(path, &config.dir, config))
        .collect();

    register(sources.into_iter().zip(parsed), report)
}

/// Recursively collect source files under `dir`, sorted by path.
pub fn collect_sources(dir: &Path, config: &ContentConfig) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|p| config.is_source(p))
        .collect()
}

/// Read, split and validate one source file.
pub fn read_document<D: Document>(path: &Path, root: &Path, config: &ContentConfig) -> Result<D, ContentError> {
    let text = fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
    parse_document(path, &source_id(path, root), &text, config)
}

/// Validate a document from in-memory text.
pub fn parse_document<D: Document>(path: &Path, id: &str, text: &str, config: &ContentConfig) -> Result<D, ContentError> {
    let (raw, body) = frontmatter::extract::<D::Raw>(text).map_err(|reason| ContentError::Frontmatter {
        path: path.to_path_buf(),
        reason,
    })?;

    D::validate(raw, SourceFile::new(path, id, body), config)
}

/// Register parsed documents in order, refusing slug collisions.
fn register<D: Document>(
    parsed: impl Iterator<Item = (PathBuf, Result<D, ContentError>)>,
    report: &mut LoadReport,
) -> Vec<D> {
    let mut seen: FxHashMap<String, PathBuf> = FxHashMap::default();
    let mut docs = Vec::new();

    for (path, result) in parsed {
        let doc = match result {
            Ok(doc) => doc,
            Err(err) => {
                report.skipped.push(err);
                continue;
            }
        };

        if let Some(first) = seen.get(doc.slug()) {
            report.skipped.push(ContentError::DuplicateSlug {
                path,
                kind: D::KIND,
                slug: doc.slug().to_owned(),
                first: first.clone(),
            });
            continue;
        }

        seen.insert(doc.slug().to_owned(), path);
        docs.push(doc);
    }

    docs
}

/// Content-root-relative id with `/` separators, e.g. `articles/react-18.md`.
fn source_id(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
