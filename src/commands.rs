//! Command dispatch for the `folio` binary.
//!
//! Results go to the given writer (stdout in the binary); diagnostics go
//! through [`log!`](crate::log), which writes to stderr. With `--json` the
//! writer receives exactly one JSON document.

use anyhow::{Context, Result, bail};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

use crate::{
    cli::{Cli, Commands, clamp_count},
    config::SiteConfig,
    content::{Article, LoadReport, ProjectStatus},
    data::{self, ContentStore, TimelineKind},
    log,
};

/// Run the parsed command against a loaded store.
pub fn run(
    cli: &Cli,
    config: &SiteConfig,
    store: &ContentStore,
    report: &LoadReport,
    out: &mut dyn Write,
) -> Result<()> {
    let json = cli.json;

    match &cli.command {
        Commands::Check => check(store, report),
        Commands::List {
            tag,
            category,
            featured,
            latest,
        } => {
            let mut articles = match tag {
                Some(tag) => store.articles_by_tag(tag),
                None => store.published_articles(),
            };
            if let Some(category) = category {
                articles.retain(|a| &a.category == category);
            }
            if *featured {
                articles.retain(|a| a.featured);
            }
            if let Some(latest) = latest {
                let limit = latest.map_or(config.query.latest_limit, clamp_count);
                articles.sort_by(|a, b| b.date.cmp(&a.date));
                articles.truncate(limit);
            }
            emit(out, json, &articles, |out| write_articles(out, &articles))
        }
        Commands::Show { slug } => {
            let article = find_article(store, slug)?;
            emit(out, json, article, |out| write_article(out, store, article))
        }
        Commands::Related { slug, limit } => {
            let article = find_article(store, slug)?;
            let limit = limit.map_or(config.query.related_limit, clamp_count);
            let related = store.related_articles(&article.id, limit);
            emit(out, json, &related, |out| write_articles(out, &related))
        }
        Commands::Search { query } => {
            let found = store.search(query);
            emit(out, json, &found, |out| write_articles(out, &found))
        }
        Commands::Stats => {
            let stats = store.stats();
            emit(out, json, &stats, |out| {
                writeln!(out, "articles         {}", stats.articles)?;
                writeln!(out, "tags             {}", stats.tags)?;
                writeln!(out, "categories       {}", stats.categories)?;
                writeln!(out, "projects         {}", stats.projects)?;
                writeln!(out, "words            {}", stats.words)?;
                writeln!(out, "reading minutes  {}", stats.reading_minutes)?;
                writeln!(out, "views            {}", stats.views)
            })
        }
        Commands::Archive => {
            let years = store.group_by_year();
            emit(out, json, &years, |out| {
                for group in &years {
                    writeln!(out, "{} ({})", group.year.to_string().bold(), group.articles.len())?;
                    write_articles(out, &group.articles)?;
                }
                Ok(())
            })
        }
        Commands::Tags => {
            let tags = store.tag_summaries();
            emit(out, json, &tags, |out| {
                for summary in &tags {
                    let marker = if summary.tag.featured { "*" } else { " " };
                    writeln!(
                        out,
                        "{marker} {:<24} {:>4}  {}",
                        summary.tag.slug, summary.count, summary.tag.name
                    )?;
                }
                Ok(())
            })
        }
        Commands::Categories => {
            let categories = store.category_summaries();
            emit(out, json, &categories, |out| {
                for summary in &categories {
                    writeln!(
                        out,
                        "{:<24} {:>4}  {}",
                        summary.category.slug, summary.count, summary.category.name
                    )?;
                }
                Ok(())
            })
        }
        Commands::Projects {
            featured,
            status,
            tech,
        } => {
            let mut projects = match status {
                Some(name) => {
                    let Some(status) = ProjectStatus::parse(name) else {
                        bail!("unknown project status `{name}`, expected active, completed, archived or planned");
                    };
                    store.projects_by_status(status)
                }
                None => store.projects().iter().collect(),
            };
            if *featured {
                let featured = store.featured_projects();
                projects.retain(|p| featured.iter().any(|f| f.slug == p.slug));
            }
            if let Some(tech) = tech {
                let matching = store.projects_by_technology(tech);
                projects.retain(|p| matching.iter().any(|m| m.slug == p.slug));
            }
            emit(out, json, &projects, |out| {
                for project in &projects {
                    writeln!(
                        out,
                        "{:<24} {:<10} {}  [{}]",
                        project.slug,
                        project.status.name(),
                        project.title,
                        project.technologies.join(", ")
                    )?;
                }
                Ok(())
            })
        }
        Commands::Resume => emit(out, json, store.resume(), |out| write_resume(out, store)),
        Commands::Export { .. } => {
            let written = data::export(store, &config.export)?;
            emit(out, json, &written, |out| {
                for path in &written {
                    writeln!(out, "{}", path.display())?;
                }
                Ok(())
            })
        }
    }
}

/// Report dangling references and fail on refused files.
///
/// Refused files were already logged by the loader.
fn check(store: &ContentStore, report: &LoadReport) -> Result<()> {
    let dangling = store.dangling_references();
    for reference in &dangling {
        log!("warn"; "{}: unknown {} `{}`", reference.article, reference.kind, reference.key);
    }

    log!(
        "check";
        "{} files, {} refused, {} dangling references",
        report.scanned,
        report.skipped.len(),
        dangling.len()
    );

    if !report.is_clean() {
        bail!("content check failed: {} file(s) refused", report.skipped.len());
    }
    Ok(())
}

fn find_article<'a>(store: &'a ContentStore, slug: &str) -> Result<&'a Article> {
    store
        .article_by_slug(slug)
        .with_context(|| format!("no article with slug `{slug}`"))
}

/// Write `value` as JSON, or run the text writer.
fn emit<T, F>(out: &mut dyn Write, json: bool, value: &T, text: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
{
    if json {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
    } else {
        text(out)?;
    }
    Ok(())
}

fn write_articles(out: &mut dyn Write, articles: &[&Article]) -> std::io::Result<()> {
    for article in articles {
        let marker = if article.featured { "*" } else { " " };
        writeln!(
            out,
            "{marker} {}  {:<28} {}",
            article.date.date(),
            article.slug.cyan(),
            article.title
        )?;
    }
    Ok(())
}

fn write_article(out: &mut dyn Write, store: &ContentStore, article: &Article) -> std::io::Result<()> {
    let author = store
        .author_of(article)
        .map_or(article.author.as_str(), |a| a.name.as_str());
    let category = store
        .category_of(article)
        .map_or(article.category.as_str(), |c| c.name.as_str());

    writeln!(out, "{}", article.title.bold())?;
    writeln!(out, "{}  {}  {}", article.date, author, article.reading_time.text)?;
    writeln!(out, "url       {}", article.url)?;
    writeln!(out, "category  {category}")?;
    writeln!(out, "tags      {}", article.tags.join(", "))?;
    if !article.published {
        writeln!(out, "{}", "draft".yellow())?;
    }
    writeln!(out)?;
    writeln!(out, "{}", article.excerpt)
}

fn write_resume(out: &mut dyn Write, store: &ContentStore) -> std::io::Result<()> {
    for kind in [TimelineKind::Work, TimelineKind::Education, TimelineKind::Milestone] {
        let entries = store.timeline_by_kind(kind);
        if entries.is_empty() {
            continue;
        }
        writeln!(out, "{}", kind.name().bold())?;
        for entry in entries {
            match &entry.organization {
                Some(org) => writeln!(out, "  {:<14} {} @ {org}", entry.period, entry.title)?,
                None => writeln!(out, "  {:<14} {}", entry.period, entry.title)?,
            }
            for highlight in &entry.highlights {
                writeln!(out, "  {:<14} - {highlight}", "")?;
            }
        }
    }

    for group in store.skills() {
        writeln!(out, "{}", group.name.bold())?;
        for skill in &group.skills {
            writeln!(out, "  {:<20} {:>3}", skill.name, skill.level)?;
        }
    }
    Ok(())
}
