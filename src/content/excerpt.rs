//! Markdown-to-plain-text excerpts.
//!
//! A handful of regex passes, not a Markdown parser: exotic or malformed
//! syntax may leave stray markers behind, which is acceptable for previews.

use regex::Regex;
use std::sync::LazyLock;

/// One substitution pass: pattern and replacement.
type Pass = (LazyLock<Regex>, &'static str);

macro_rules! pass {
    ($re:expr, $rep:expr) => {
        (LazyLock::new(|| Regex::new($re).unwrap()), $rep)
    };
}

/// Applied in order; block constructs go before inline ones.
static PASSES: [Pass; 14] = [
    // fenced code blocks are dropped entirely
    pass!(r"(?s)```.*?```", " "),
    pass!(r"(?s)~~~.*?~~~", " "),
    pass!(r"(?s)<!--.*?-->", " "),
    pass!(r"<[^>\n]+>", ""),
    // images before links, they share the bracket syntax
    pass!(r"!\[[^\]]*\]\([^)]*\)", ""),
    pass!(r"\[([^\]]*)\]\([^)]*\)", "${1}"),
    pass!(r"\[([^\]]+)\]\[[^\]]*\]", "${1}"),
    pass!(r"(?m)^[ \t]{0,3}#{1,6}[ \t]*", ""),
    pass!(r"(?m)^[ \t]*>[ \t]?", ""),
    pass!(r"(?m)^[ \t]*(?:[-*_][ \t]*){3,}$", ""),
    pass!(r"(?m)^[ \t]*(?:[-*+]|\d+[.)])[ \t]+", ""),
    pass!(r"`([^`]*)`", "${1}"),
    pass!(r"(?:\*\*|__)([^*_]+)(?:\*\*|__)", "${1}"),
    pass!(r"(?:\*|\b_|~~)([^*_~\n]+)(?:\*|_\b|~~)", "${1}"),
];

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Strip Markdown syntax and collapse whitespace.
///
/// Headings, emphasis, blockquote and list markers are removed; inline code
/// and link text are kept; fenced code, images and HTML tags are dropped.
pub fn strip_markdown(text: &str) -> String {
    let stripped = PASSES.iter().fold(text.to_owned(), |acc, (re, rep)| {
        re.replace_all(&acc, *rep).into_owned()
    });
    WHITESPACE.replace_all(&stripped, " ").trim().to_owned()
}

/// Plain-text excerpt of at most `max_chars` characters plus `ellipsis`.
///
/// Text that already fits is returned exactly as [`strip_markdown`] produced
/// it, without the ellipsis.
pub fn excerpt(text: &str, max_chars: usize, ellipsis: &str) -> String {
    let plain = strip_markdown(text);
    truncate_chars(&plain, max_chars, ellipsis)
}

/// Truncate on a character boundary and append `ellipsis` if anything was cut.
pub fn truncate_chars(text: &str, max_chars: usize, ellipsis: &str) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_owned(),
        Some((cut, _)) => {
            let mut out = text[..cut].trim_end().to_owned();
            out.push_str(ellipsis);
            out
        }
    }
}
