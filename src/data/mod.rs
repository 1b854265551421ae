//! Resident content store, queries over it, and JSON export.
//!
//! # Architecture
//!
//! ```text
//! SiteConfig ──► ContentStore::load()
//!                   ├── content::load_collections()   authors, tags, ... projects
//!                   └── Resume::load()                data/resume.toml
//!
//! ContentStore ──► query methods (pure, synchronous)
//!              └─► export::export()                   public/_data/*.json
//! ```
//!
//! A store is immutable once built. Tag and category counts, statistics and
//! the archive are computed on every read rather than stored.

pub mod export;
mod query;
pub mod resume;
mod store;
pub mod types;

pub use export::export;
pub use resume::{Resume, Skill, SkillGroup, TimelineEntry, TimelineKind};
pub use store::ContentStore;
pub use types::{CategorySummary, DanglingRef, SiteStats, StoreOptions, TagSummary, YearGroup};
