//! Resume data: timeline entries and skill groups.
//!
//! Read from `data/resume.toml`; a missing file means an empty resume.
//!
//! ```toml
//! [[timeline]]
//! period = "2021 - 2023"
//! title = "Frontend Engineer"
//! organization = "Acme"
//! kind = "work"
//! highlights = ["Led the design system"]
//!
//! [[skills]]
//! name = "Frontend"
//! skills = [{ name = "React", level = 90 }, { name = "TypeScript", level = 85 }]
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Highest skill level; larger values are clamped on load.
pub const MAX_LEVEL: u8 = 100;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Resume {
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    #[default]
    Work,
    Education,
    Milestone,
}

impl TimelineKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Education => "education",
            Self::Milestone => "milestone",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineEntry {
    /// Free-form period label, e.g. `2021 - 2023` or `2019`.
    pub period: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub kind: TimelineKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillGroup {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub level: u8,
}

impl Resume {
    /// Parse resume TOML, clamping skill levels to [`MAX_LEVEL`].
    pub fn from_str(content: &str) -> Result<Self> {
        let mut resume: Resume = toml::from_str(content)?;
        for skill in resume.skills.iter_mut().flat_map(|g| g.skills.iter_mut()) {
            skill.level = skill.level.min(MAX_LEVEL);
        }
        Ok(resume)
    }

    /// Load from `path`; a missing file yields an empty resume.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        Self::from_str(&content).with_context(|| format!("invalid resume data in `{}`", path.display()))
    }

    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty() && self.skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const RESUME: &str = r#"
        [[timeline]]
        period = "2021 - 2023"
        title = "Frontend Engineer"
        organization = "Acme"

        [[timeline]]
        period = "2017"
        title = "BSc Computer Science"
        kind = "education"

        [[skills]]
        name = "Frontend"
        skills = [{ name = "React", level = 90 }, { name = "CSS", level = 250 }]
    "#;

    #[test]
    fn test_parse_resume() {
        let resume = Resume::from_str(RESUME).unwrap();

        assert_eq!(resume.timeline.len(), 2);
        assert_eq!(resume.timeline[0].kind, TimelineKind::Work);
        assert_eq!(resume.timeline[0].organization.as_deref(), Some("Acme"));
        assert_eq!(resume.timeline[1].kind, TimelineKind::Education);
        assert_eq!(resume.skills[0].skills[0].level, 90);
    }

    #[test]
    fn test_skill_level_clamped() {
        let resume = Resume::from_str(RESUME).unwrap();
        assert_eq!(resume.skills[0].skills[1].level, MAX_LEVEL);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let toml = "[[timeline]]\nperiod = \"2020\"\ntitle = \"x\"\nkind = \"hobby\"\n";
        assert!(Resume::from_str(toml).is_err());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let resume = Resume::load(&dir.path().join("resume.toml")).unwrap();
        assert!(resume.is_empty());
    }

    #[test]
    fn test_load_invalid_file_has_context() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.toml");
        fs::write(&path, "[[timeline]]\nperiod = 1\n").unwrap();

        let err = Resume::load(&path).unwrap_err();
        assert!(format!("{err}").contains("invalid resume data"));
    }
}
