//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn language() -> String {
        "zh-Hans".into()
    }
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use std::path::PathBuf;

    pub fn dir() -> PathBuf {
        "content".into()
    }

    pub fn data() -> PathBuf {
        "data".into()
    }

    pub fn extensions() -> Vec<String> {
        vec!["md".into(), "mdx".into()]
    }

    pub fn words_per_minute() -> u32 {
        200
    }

    pub fn excerpt_length() -> usize {
        160
    }

    pub fn ellipsis() -> String {
        "...".into()
    }

    pub mod dirs {
        pub fn authors() -> String {
            "authors".into()
        }

        pub fn tags() -> String {
            "tags".into()
        }

        pub fn categories() -> String {
            "categories".into()
        }

        pub fn articles() -> String {
            "articles".into()
        }

        pub fn pages() -> String {
            "pages".into()
        }

        pub fn projects() -> String {
            "projects".into()
        }
    }

    pub mod routes {
        pub fn authors() -> String {
            "/authors/".into()
        }

        pub fn tags() -> String {
            "/tags/".into()
        }

        pub fn categories() -> String {
            "/categories/".into()
        }

        pub fn articles() -> String {
            "/articles/".into()
        }

        pub fn pages() -> String {
            "/".into()
        }

        pub fn projects() -> String {
            "/projects/".into()
        }
    }
}

// ============================================================================
// [query] Section Defaults
// ============================================================================

pub mod query {
    pub fn views_per_minute() -> u64 {
        100
    }

    pub fn related_limit() -> usize {
        3
    }

    pub fn latest_limit() -> usize {
        5
    }
}

// ============================================================================
// [export] Section Defaults
// ============================================================================

pub mod export {
    use std::path::PathBuf;

    pub fn output() -> PathBuf {
        "public/_data".into()
    }
}
