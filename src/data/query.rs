//! Query and aggregation over a [`ContentStore`].
//!
//! Every function is a pure single pass (or filter + stable sort) over the
//! resident collections. Misses are `None` or an empty `Vec`, never errors.
//!
//! | Query | Result order |
//! |-------|--------------|
//! | `published_articles`, `featured_articles`, `articles_by_tag`, `articles_by_category`, `search` | source order |
//! | `latest_articles` | date, newest first; ties keep source order |
//! | `related_articles` | shared tags (+1 same category), then newest |
//! | `group_by_year` | years descending, articles newest first |

use rustc_hash::{FxHashMap, FxHashSet};
use std::{cmp::Ordering, collections::BTreeMap};

use super::{
    resume::{SkillGroup, TimelineEntry, TimelineKind},
    store::ContentStore,
    types::{CategorySummary, DanglingRef, SiteStats, TagSummary, YearGroup},
};
use crate::content::{Article, DocumentKind, Project, ProjectStatus};

/// Newest first. Used with stable sorts so equal dates keep source order.
fn newest_first(a: &Article, b: &Article) -> Ordering {
    b.date.cmp(&a.date)
}

impl ContentStore {
    // ========================================================================
    // Articles
    // ========================================================================

    fn published(&self) -> impl Iterator<Item = &Article> {
        self.articles().iter().filter(|a| a.published)
    }

    pub fn published_articles(&self) -> Vec<&Article> {
        self.published().collect()
    }

    /// Articles that are both featured and published.
    pub fn featured_articles(&self) -> Vec<&Article> {
        self.published().filter(|a| a.featured).collect()
    }

    pub fn articles_by_tag(&self, tag: &str) -> Vec<&Article> {
        self.published().filter(|a| a.has_tag(tag)).collect()
    }

    pub fn articles_by_category(&self, category: &str) -> Vec<&Article> {
        self.published().filter(|a| a.category == category).collect()
    }

    /// The `limit` most recently published articles.
    pub fn latest_articles(&self, limit: usize) -> Vec<&Article> {
        let mut articles = self.published_articles();
        articles.sort_by(|a, b| newest_first(a, b));
        articles.truncate(limit);
        articles
    }

    /// Published articles sharing the category or a tag with article `id`.
    ///
    /// Ranked by the number of distinct shared tags, plus one for a shared
    /// category; equal ranks are newest first, then source order. The source
    /// article itself is never included. An unknown id yields nothing.
    pub fn related_articles(&self, id: &str, limit: usize) -> Vec<&Article> {
        let Some(source) = self.article_by_id(id) else {
            return Vec::new();
        };
        let source_tags: FxHashSet<&str> = source.tags.iter().map(String::as_str).collect();

        let mut scored: Vec<(usize, &Article)> = self
            .published()
            .filter(|a| a.id != source.id)
            .filter_map(|a| {
                let shared = a
                    .tags
                    .iter()
                    .map(String::as_str)
                    .filter(|t| source_tags.contains(t))
                    .collect::<FxHashSet<_>>()
                    .len();
                let score = shared + usize::from(a.category == source.category);
                (score > 0).then_some((score, a))
            })
            .collect();

        scored.sort_by(|(score_a, a), (score_b, b)| {
            score_b.cmp(score_a).then_with(|| newest_first(a, b))
        });
        scored.into_iter().take(limit).map(|(_, a)| a).collect()
    }

    /// Case-insensitive substring search over title, excerpt and body.
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Article> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.published()
            .filter(|a| {
                [&a.title, &a.excerpt, &a.body]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Published articles bucketed by publish year.
    pub fn group_by_year(&self) -> Vec<YearGroup<'_>> {
        let mut years: BTreeMap<i32, Vec<&Article>> = BTreeMap::new();
        for article in self.published() {
            years.entry(article.date.year()).or_default().push(article);
        }

        years
            .into_iter()
            .rev()
            .map(|(year, mut articles)| {
                articles.sort_by(|a, b| newest_first(a, b));
                YearGroup { year, articles }
            })
            .collect()
    }

    /// Site-wide statistics over published articles.
    pub fn stats(&self) -> SiteStats {
        let (articles, words, reading_minutes) = self.published().fold(
            (0usize, 0usize, 0u64),
            |(count, words, minutes), a| {
                (
                    count + 1,
                    words + a.reading_time.words,
                    minutes + u64::from(a.reading_time.minutes),
                )
            },
        );

        SiteStats {
            articles,
            tags: self.tags().len(),
            categories: self.categories().len(),
            projects: self.projects().len(),
            words,
            reading_minutes,
            views: reading_minutes.saturating_mul(self.options().views_per_minute),
        }
    }

    // ========================================================================
    // Tags and Categories
    // ========================================================================

    /// Published-article count per tag key, each article counted once per tag.
    fn tag_counts(&self) -> FxHashMap<&str, usize> {
        let mut counts = FxHashMap::default();
        for article in self.published() {
            let distinct: FxHashSet<&str> = article.tags.iter().map(String::as_str).collect();
            for tag in distinct {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Every tag with its published-article count, in source order.
    pub fn tag_summaries(&self) -> Vec<TagSummary<'_>> {
        let counts = self.tag_counts();
        self.tags()
            .iter()
            .map(|tag| TagSummary {
                count: counts.get(tag.slug.as_str()).copied().unwrap_or(0),
                tag,
            })
            .collect()
    }

    /// Every category with its published-article count, by `order` then name.
    pub fn category_summaries(&self) -> Vec<CategorySummary<'_>> {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for article in self.published() {
            *counts.entry(article.category.as_str()).or_insert(0) += 1;
        }

        let mut summaries: Vec<_> = self
            .categories()
            .iter()
            .map(|category| CategorySummary {
                count: counts.get(category.slug.as_str()).copied().unwrap_or(0),
                category,
            })
            .collect();
        summaries.sort_by(|a, b| {
            a.category
                .order
                .cmp(&b.category.order)
                .then_with(|| a.category.name.cmp(&b.category.name))
        });
        summaries
    }

    /// Article references (published or not) that resolve to nothing.
    pub fn dangling_references(&self) -> Vec<DanglingRef> {
        let mut dangling = Vec::new();
        let mut push = |article: &Article, kind, key: &str| {
            dangling.push(DanglingRef {
                article: article.id.clone(),
                kind,
                key: key.to_owned(),
            });
        };

        for article in self.articles() {
            if self.author_of(article).is_none() {
                push(article, DocumentKind::Author, &article.author);
            }
            if self.category_of(article).is_none() {
                push(article, DocumentKind::Category, &article.category);
            }
            for key in &article.tags {
                if self.tag_by_slug(key).is_none() {
                    push(article, DocumentKind::Tag, key);
                }
            }
        }
        dangling
    }

    // ========================================================================
    // Projects
    // ========================================================================

    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects().iter().filter(|p| p.featured).collect()
    }

    pub fn projects_by_status(&self, status: ProjectStatus) -> Vec<&Project> {
        self.projects().iter().filter(|p| p.status == status).collect()
    }

    /// Projects listing `technology`, compared case-insensitively.
    pub fn projects_by_technology(&self, technology: &str) -> Vec<&Project> {
        let needle = technology.trim().to_lowercase();
        self.projects()
            .iter()
            .filter(|p| p.technologies.iter().any(|t| t.to_lowercase() == needle))
            .collect()
    }

    // ========================================================================
    // Resume
    // ========================================================================

    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.resume().timeline
    }

    pub fn timeline_by_kind(&self, kind: TimelineKind) -> Vec<&TimelineEntry> {
        self.timeline().iter().filter(|e| e.kind == kind).collect()
    }

    pub fn skills(&self) -> &[SkillGroup] {
        &self.resume().skills
    }
}
