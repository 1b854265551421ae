//! Slug derivation and route URL construction.
//!
//! Slugs are taken verbatim from source filenames: only the known extension is
//! removed, nothing is lowercased or transliterated.
//!
//! | Source | slug | url (prefix `/articles/`) |
//! |--------|------|---------------------------|
//! | `articles/react-18.md` | `react-18` | `/articles/react-18` |
//! | `articles/My Post.mdx` | `My Post` | `/articles/My Post` |
//! | `pages/index.md` | `index` | `/` (prefix `/`) |

use std::path::Path;

/// Derive a slug from a filename by stripping one known extension.
///
/// The input may be a bare filename or a path; only the final component is
/// used. Unknown extensions are kept as part of the slug.
pub fn slug_from_filename(path: impl AsRef<Path>, extensions: &[String]) -> String {
    let name = path
        .as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    extensions
        .iter()
        .find_map(|ext| {
            name.strip_suffix(ext.as_str())
                .and_then(|rest| rest.strip_suffix('.'))
                .filter(|rest| !rest.is_empty())
        })
        .map_or_else(|| name.clone(), str::to_owned)
}

/// Join a route prefix and a slug into a URL path.
///
/// The prefix is normalized to start and end with `/`. An `index` slug maps to
/// the prefix itself.
pub fn route_url(prefix: &str, slug: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    let prefix = if trimmed.is_empty() {
        "/".to_owned()
    } else {
        format!("/{trimmed}/")
    };

    if slug == "index" {
        prefix
    } else {
        format!("{prefix}{slug}")
    }
}
