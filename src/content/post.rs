//! Post summaries built from markdown documents.

use crate::{
    content::{frontmatter, markdown},
    utils::{date::PostDate, slug::slugify_stem},
};
use anyhow::{Context, Result, anyhow};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// One published post, fully resolved at build time.
///
/// | Field         | Example                       | Used by            |
/// |---------------|-------------------------------|--------------------|
/// | `slug`        | `hello-world`                 | URL, output path   |
/// | `title`       | `Hello World`                 | lists, page header |
/// | `date`        | `2023-04-05`                  | ordering, feed     |
/// | `description` | frontmatter one-liner         | lists, feed        |
/// | `excerpt`     | derived from the body         | list fallback      |
/// | `body_html`   | rendered markdown             | post page          |
#[derive(Debug, Clone)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: PostDate,
    pub description: Option<String>,
    pub excerpt: String,
    pub body_html: String,
    /// Source markdown path, for logging and sitemap lastmod.
    pub source: PathBuf,
}

impl Post {
    /// Read one markdown document into a post.
    ///
    /// Returns `Ok(None)` for drafts. Errors carry the source path so
    /// the caller can log and skip the document.
    pub fn from_file(path: &Path) -> Result<Option<Self>> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let (fm, body) = frontmatter::parse(&raw)
            .with_context(|| format!("Bad frontmatter in {}", path.display()))?;
        if fm.draft {
            return Ok(None);
        }

        let date = PostDate::parse(&fm.date)
            .with_context(|| format!("Bad date in {}", path.display()))?;

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| anyhow!("Invalid file name: {}", path.display()))?;

        Ok(Some(Self {
            slug: slugify_stem(stem),
            title: fm.title,
            date,
            description: fm.description,
            excerpt: markdown::excerpt(body, markdown::EXCERPT_CHARS),
            body_html: markdown::render(body),
            source: path.to_path_buf(),
        }))
    }

    /// One-line summary for lists and the feed: the frontmatter
    /// description when present, the derived excerpt otherwise.
    pub fn summary(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.excerpt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_post(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_from_file_full() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_post(
            dir.path(),
            "Hello World.md",
            "---\ntitle: Hello World\ndate: 2023-04-05\ndescription: First post\n---\n\nSome **body** text.\n",
        );

        let post = Post::from_file(&path).unwrap().unwrap();
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.title, "Hello World");
        assert_eq!(post.date.ymd(), "2023-04-05");
        assert_eq!(post.summary(), "First post");
        assert!(post.body_html.contains("<strong>body</strong>"));
    }

    #[test]
    fn test_from_file_draft_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_post(
            dir.path(),
            "wip.md",
            "---\ntitle: WIP\ndate: 2023-04-05\ndraft: true\n---\nnot yet\n",
        );

        assert!(Post::from_file(&path).unwrap().is_none());
    }

    #[test]
    fn test_from_file_missing_frontmatter() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_post(dir.path(), "bare.md", "# no frontmatter\n");

        let err = Post::from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("bare.md"));
    }

    #[test]
    fn test_from_file_bad_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_post(
            dir.path(),
            "bad.md",
            "---\ntitle: Bad\ndate: sometime\n---\nbody\n",
        );

        assert!(Post::from_file(&path).is_err());
    }

    #[test]
    fn test_summary_falls_back_to_excerpt() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_post(
            dir.path(),
            "plain.md",
            "---\ntitle: Plain\ndate: 2023-04-05\n---\nThe opening line of the body.\n",
        );

        let post = Post::from_file(&path).unwrap().unwrap();
        assert_eq!(post.summary(), "The opening line of the body.");
    }
}
