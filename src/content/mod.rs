//! Content collections: document schemas, computed fields and loading.
//!
//! # Layout
//!
//! ```text
//! content/
//! ├── authors/      alice.md
//! ├── tags/         react.md           (explicit `slug` allowed)
//! ├── categories/   frontend.md
//! ├── articles/     react-18.md        → /articles/react-18
//! ├── pages/        about.md           → /about
//! └── projects/     folio.mdx          → /projects/folio
//! ```
//!
//! Every file carries YAML (`---`) or TOML (`+++`) frontmatter followed by a
//! Markdown body. See [`schema`] for the fields of each kind.

pub mod computed;
mod error;
pub mod excerpt;
pub mod frontmatter;
pub mod loader;
pub mod schema;

pub use computed::ReadingTime;
pub use error::ContentError;
pub use loader::{Collections, LoadReport, load_collections};
pub use schema::{
    Article, Author, Category, Document, DocumentKind, Layout, Page, Project, ProjectStatus, Seo,
    SourceFile, Tag,
};
