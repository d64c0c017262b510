//! Collection schemas and loaders.
//!
//! Two independent, loosely-structured collections over markdown files with
//! TOML frontmatter: `projects/` (portfolio items) and `blog/` (posts). Every
//! frontmatter field is defaulted; a file with no fence at all loads as an
//! empty-metadata entry whose body is the whole document. Only unparseable
//! TOML or I/O failures produce per-file errors, and those never abort the
//! rest of the load.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use tracing::{debug, warn};

use super::frontmatter::split_frontmatter;
use crate::event::EventRecord;

/// A portfolio project entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub role: Vec<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub thumb: Option<PathBuf>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub featured: bool,
    /// Ordering weight within the collection; lower sorts first.
    #[serde(default)]
    pub order: i32,

    /// Markdown body following the frontmatter.
    #[serde(skip)]
    pub body: String,
}

/// A blog post entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pub_date: Option<NaiveDate>,
    #[serde(default)]
    pub updated_date: Option<NaiveDate>,
    #[serde(default)]
    pub hero_image: Option<PathBuf>,

    /// Markdown body following the frontmatter.
    #[serde(skip)]
    pub body: String,
}

/// Content loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Frontmatter error: {0}")]
    Frontmatter(#[from] toml::de::Error),
}

/// A problem with a single file, recorded without aborting the load.
#[derive(Debug)]
pub struct LoadIssue {
    pub path: PathBuf,
    pub error: ContentError,
}

/// Result of loading one collection directory.
#[derive(Debug, Default)]
pub struct Loaded<T> {
    pub entries: Vec<T>,
    pub issues: Vec<LoadIssue>,
}

/// Parse a single document into frontmatter metadata plus body.
fn parse_entry<T: for<'de> Deserialize<'de> + Default>(
    document: &str,
) -> Result<(T, String), ContentError> {
    let (meta, body) = split_frontmatter(document);
    let entry = match meta {
        Some(raw) => toml::from_str(raw)?,
        None => T::default(),
    };
    Ok((entry, body.to_string()))
}

/// Load every `*.md` file in a directory, in path order.
fn load_dir<T, F>(dir: &Path, mut finish: F) -> Loaded<T>
where
    T: for<'de> Deserialize<'de> + Default + HasBody,
    F: FnMut(&Path, &mut T),
{
    let mut loaded = Loaded {
        entries: Vec::new(),
        issues: Vec::new(),
    };

    let Ok(read) = std::fs::read_dir(dir) else {
        debug!("collection directory {} not present", dir.display());
        return loaded;
    };

    let mut paths: Vec<PathBuf> = read
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
        .collect();
    paths.sort();

    for path in paths {
        let result = std::fs::read_to_string(&path)
            .map_err(ContentError::from)
            .and_then(|document| parse_entry::<T>(&document));
        match result {
            Ok((mut entry, body)) => {
                finish(&path, &mut entry);
                entry.set_body(body);
                loaded.entries.push(entry);
            }
            Err(error) => {
                warn!("skipping {}: {error}", path.display());
                loaded.issues.push(LoadIssue { path, error });
            }
        }
    }

    loaded
}

/// Body assignment hook for the generic loader.
trait HasBody {
    fn set_body(&mut self, body: String);
}

impl HasBody for ProjectEntry {
    fn set_body(&mut self, body: String) {
        self.body = body;
    }
}

impl HasBody for BlogEntry {
    fn set_body(&mut self, body: String) {
        self.body = body;
    }
}

/// The merged content of a portfolio repository.
#[derive(Debug, Default)]
pub struct Portfolio {
    pub projects: Vec<ProjectEntry>,
    pub posts: Vec<BlogEntry>,
    pub issues: Vec<LoadIssue>,
}

impl Portfolio {
    /// Load both collections from `content_dir`.
    ///
    /// Projects come back sorted by their ordering weight, then year; files
    /// that fail to parse are reported in `issues` and skipped.
    pub fn load(content_dir: &Path) -> Self {
        let mut projects = load_dir::<ProjectEntry, _>(&content_dir.join("projects"), |path, p| {
            if p.slug.is_empty() {
                p.slug = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
            }
        });
        projects
            .entries
            .sort_by_key(|p| (p.order, p.year.unwrap_or(i32::MIN)));

        let posts = load_dir::<BlogEntry, _>(&content_dir.join("blog"), |_, _| {});

        let mut issues = projects.issues;
        issues.extend(posts.issues);

        Self {
            projects: projects.entries,
            posts: posts.entries,
            issues,
        }
    }

    /// Convert both collections into timeline events.
    ///
    /// The arc layout re-sorts chronologically, so the merge order here only
    /// matters for events sharing a year (stable sort preserves it).
    pub fn events(&self) -> Vec<EventRecord> {
        let mut events = Vec::with_capacity(self.projects.len() + self.posts.len());

        for project in &self.projects {
            events.push(EventRecord {
                title: project.title.clone(),
                date: None,
                year: project.year,
                blurb: combine_blurb(&project.summary, &project.body),
                thumb: project.thumb.clone(),
                icon: project.icon.clone(),
            });
        }

        for post in &self.posts {
            events.push(EventRecord {
                title: post.title.clone(),
                date: post.pub_date.map(|d| d.format("%b %d, %Y").to_string()),
                year: post.pub_date.map(|d| d.year()),
                blurb: combine_blurb(&post.description, &post.body),
                thumb: post.hero_image.clone(),
                icon: None,
            });
        }

        events
    }
}

/// Combine a one-line summary with the markdown body.
fn combine_blurb(summary: &str, body: &str) -> String {
    match (summary.trim(), body.trim()) {
        ("", body) => body.to_string(),
        (summary, "") => summary.to_string(),
        (summary, body) => format!("{summary}\n\n{body}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).expect("write fixture");
    }

    fn content_tree() -> tempfile::TempDir {
        let tmp = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(tmp.path().join("projects")).expect("mkdir");
        fs::create_dir_all(tmp.path().join("blog")).expect("mkdir");
        tmp
    }

    #[test]
    fn test_load_project_entry() {
        let tmp = content_tree();
        write(
            &tmp.path().join("projects"),
            "voxel.md",
            concat!(
                "+++\n",
                "title = \"Voxel Engine\"\n",
                "year = 2021\n",
                "stack = [\"rust\", \"wgpu\"]\n",
                "summary = \"A small voxel renderer.\"\n",
                "thumb = \"images/voxel.png\"\n",
                "repo = \"https://example.com/voxel\"\n",
                "order = 2\n",
                "+++\n",
                "Longer *markdown* description.\n",
            ),
        );

        let portfolio = Portfolio::load(tmp.path());
        assert!(portfolio.issues.is_empty());
        assert_eq!(portfolio.projects.len(), 1);

        let p = &portfolio.projects[0];
        assert_eq!(p.title, "Voxel Engine");
        assert_eq!(p.slug, "voxel"); // defaulted from the file stem
        assert_eq!(p.year, Some(2021));
        assert_eq!(p.stack, ["rust", "wgpu"]);
        assert_eq!(p.order, 2);
        assert_eq!(p.body.trim(), "Longer *markdown* description.");
    }

    #[test]
    fn test_load_blog_entry_with_date() {
        let tmp = content_tree();
        write(
            &tmp.path().join("blog"),
            "hello.md",
            concat!(
                "+++\n",
                "title = \"Hello\"\n",
                "description = \"First post\"\n",
                "pub_date = \"2023-04-02\"\n",
                "+++\n",
                "Post body.\n",
            ),
        );

        let portfolio = Portfolio::load(tmp.path());
        assert_eq!(portfolio.posts.len(), 1);
        let post = &portfolio.posts[0];
        assert_eq!(
            post.pub_date,
            NaiveDate::from_ymd_opt(2023, 4, 2)
        );

        let events = portfolio.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date.as_deref(), Some("Apr 02, 2023"));
        assert_eq!(events[0].year, Some(2023));
    }

    #[test]
    fn test_malformed_frontmatter_is_per_file() {
        let tmp = content_tree();
        let projects = tmp.path().join("projects");
        write(&projects, "bad.md", "+++\ntitle = not quoted\n+++\nbody\n");
        write(
            &projects,
            "good.md",
            "+++\ntitle = \"Good\"\nyear = 2020\n+++\n",
        );

        let portfolio = Portfolio::load(tmp.path());
        assert_eq!(portfolio.projects.len(), 1);
        assert_eq!(portfolio.projects[0].title, "Good");
        assert_eq!(portfolio.issues.len(), 1);
        assert!(portfolio.issues[0].path.ends_with("bad.md"));
        assert!(matches!(
            portfolio.issues[0].error,
            ContentError::Frontmatter(_)
        ));
    }

    #[test]
    fn test_missing_fence_degrades_to_empty_metadata() {
        let tmp = content_tree();
        write(
            &tmp.path().join("projects"),
            "plain.md",
            "Just a markdown body.\n",
        );

        let portfolio = Portfolio::load(tmp.path());
        assert!(portfolio.issues.is_empty());
        assert_eq!(portfolio.projects.len(), 1);
        let p = &portfolio.projects[0];
        assert_eq!(p.title, "");
        assert_eq!(p.year, None);
        assert_eq!(p.body.trim(), "Just a markdown body.");
    }

    #[test]
    fn test_missing_directories_load_empty() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let portfolio = Portfolio::load(tmp.path());
        assert!(portfolio.projects.is_empty());
        assert!(portfolio.posts.is_empty());
        assert!(portfolio.issues.is_empty());
        assert!(portfolio.events().is_empty());
    }

    #[test]
    fn test_projects_sorted_by_order_then_year() {
        let tmp = content_tree();
        let projects = tmp.path().join("projects");
        write(&projects, "a.md", "+++\ntitle = \"A\"\nyear = 2022\norder = 1\n+++\n");
        write(&projects, "b.md", "+++\ntitle = \"B\"\nyear = 2019\n+++\n");
        write(&projects, "c.md", "+++\ntitle = \"C\"\nyear = 2021\n+++\n");

        let portfolio = Portfolio::load(tmp.path());
        let titles: Vec<&str> = portfolio.projects.iter().map(|p| p.title.as_str()).collect();
        // order 0 entries first (by year), then order 1.
        assert_eq!(titles, ["B", "C", "A"]);
    }

    #[test]
    fn test_events_merge_both_collections() {
        let tmp = content_tree();
        write(
            &tmp.path().join("projects"),
            "p.md",
            "+++\ntitle = \"Project\"\nyear = 2021\nsummary = \"sum\"\n+++\n",
        );
        write(
            &tmp.path().join("blog"),
            "post.md",
            "+++\ntitle = \"Post\"\ndescription = \"desc\"\npub_date = \"2020-01-15\"\n+++\nbody\n",
        );

        let events = Portfolio::load(tmp.path()).events();
        assert_eq!(events.len(), 2);
        assert!(events.iter().any(|e| e.title == "Project" && e.year == Some(2021)));
        assert!(events.iter().any(|e| e.title == "Post" && e.year == Some(2020)));
    }
}
