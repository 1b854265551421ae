//! Frontmatter extraction.
//!
//! Two fences are recognized at the very start of a file:
//!
//! ```text
//! ---                 +++
//! title: Hello        title = "Hello"
//! ---                 +++
//! body...             body...
//! ```
//!
//! YAML is parsed with `serde_yaml_ng`, TOML with `toml`. TOML datetimes are
//! turned into strings before deserializing so both formats feed the same
//! string-based date fields.

use serde::de::DeserializeOwned;

/// Frontmatter format, picked by the opening fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Toml,
}

impl Format {
    const fn fence(self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// A source file split into its frontmatter and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<'a> {
    pub format: Format,
    pub frontmatter: &'a str,
    pub body: &'a str,
}

/// Split a source into frontmatter and body.
///
/// Returns `None` when the source does not open with a fence or the fence is
/// never closed.
pub fn split(source: &str) -> Option<Split<'_>> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    [Format::Yaml, Format::Toml].into_iter().find_map(|format| {
        let fence = format.fence();
        let rest = source.strip_prefix(fence)?;
        let rest = rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\n'))?;

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end() == fence {
                return Some(Split {
                    format,
                    frontmatter: &rest[..offset],
                    body: &rest[offset + line.len()..],
                });
            }
            offset += line.len();
        }
        None
    })
}

/// Deserialize frontmatter into `T`.
pub fn parse<T: DeserializeOwned>(split: &Split<'_>) -> Result<T, String> {
    match split.format {
        Format::Yaml => {
            // An empty YAML document is `null`, treat it as an empty mapping
            let text = if split.frontmatter.trim().is_empty() {
                "{}"
            } else {
                split.frontmatter
            };
            serde_yaml_ng::from_str(text).map_err(|e| e.to_string())
        }
        Format::Toml => {
            let table: toml::Table = toml::from_str(split.frontmatter).map_err(|e| e.to_string())?;
            stringify_datetimes(toml::Value::Table(table))
                .try_into()
                .map_err(|e: toml::de::Error| e.to_string())
        }
    }
}

/// Split and deserialize a whole source file.
///
/// A file without a frontmatter fence is treated as an empty record whose
/// body is the whole file.
pub fn extract<T: DeserializeOwned>(source: &str) -> Result<(T, &str), String> {
    match split(source) {
        Some(split) => Ok((parse(&split)?, split.body)),
        None => {
            let empty = Split {
                format: Format::Yaml,
                frontmatter: "",
                body: source,
            };
            Ok((parse(&empty)?, source))
        }
    }
}

/// Replace TOML datetime values with their string form, recursively.
fn stringify_datetimes(value: toml::Value) -> toml::Value {
    use toml::Value;

    match value {
        Value::Datetime(dt) => Value::String(dt.to_string()),
        Value::Array(items) => Value::Array(items.into_iter().map(stringify_datetimes).collect()),
        Value::Table(table) => Value::Table(
            table
                .into_iter()
                .map(|(k, v)| (k, stringify_datetimes(v)))
                .collect(),
        ),
        other => other,
    }
}
