//! Content loading error types.
//!
//! Every variant describes one refused source file. None of them abort a
//! load on their own; the loader collects them into its report.

use std::path::PathBuf;
use thiserror::Error;

use super::schema::DocumentKind;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("{}: invalid frontmatter: {reason}", path.display())]
    Frontmatter { path: PathBuf, reason: String },

    #[error("{}: {kind} is missing required field `{field}`", path.display())]
    MissingField {
        path: PathBuf,
        kind: DocumentKind,
        field: &'static str,
    },

    #[error("{}: field `{field}` is not a valid date: `{value}`", path.display())]
    InvalidDate {
        path: PathBuf,
        field: &'static str,
        value: String,
    },

    #[error("{}: {kind} slug `{slug}` is already used by {}", path.display(), first.display())]
    DuplicateSlug {
        path: PathBuf,
        kind: DocumentKind,
        slug: String,
        first: PathBuf,
    },
}

impl ContentError {
    /// Source file the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Io(path, _)
            | Self::Frontmatter { path, .. }
            | Self::MissingField { path, .. }
            | Self::InvalidDate { path, .. }
            | Self::DuplicateSlug { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = ContentError::MissingField {
            path: PathBuf::from("articles/draft.md"),
            kind: DocumentKind::Article,
            field: "title",
        };
        let display = err.to_string();
        assert!(display.contains("articles/draft.md"));
        assert!(display.contains("article"));
        assert!(display.contains("`title`"));
    }

    #[test]
    fn test_duplicate_slug_display() {
        let err = ContentError::DuplicateSlug {
            path: PathBuf::from("articles/b/hello.md"),
            kind: DocumentKind::Article,
            slug: "hello".into(),
            first: PathBuf::from("articles/a/hello.md"),
        };
        let display = err.to_string();
        assert!(display.contains("`hello`"));
        assert!(display.contains("articles/a/hello.md"));
        assert_eq!(err.path(), &PathBuf::from("articles/b/hello.md"));
    }
}
