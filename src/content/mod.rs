//! Markdown content collection.
//!
//! The content directory holds one markdown document per post. Each is
//! parsed into a [`Post`] (frontmatter + rendered body + derived slug
//! and excerpt); the collection is ordered by date, newest first.
//!
//! A document that fails to parse is logged and skipped — one bad file
//! degrades that post, not the whole build.

pub mod frontmatter;
pub mod markdown;
pub mod post;

pub use post::Post;

use crate::{config::SiteConfig, log};
use anyhow::Result;
use std::path::Path;
use walkdir::WalkDir;

/// Collect all posts under the content directory, newest first.
///
/// Missing content directory yields an empty collection; list pages
/// then render their fallback body.
pub fn collect_posts(config: &SiteConfig) -> Result<Vec<Post>> {
    let content_dir = &config.build.content;
    if !content_dir.exists() {
        return Ok(Vec::new());
    }

    let mut posts: Vec<Post> = WalkDir::new(content_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_markdown(e.path()))
        .filter_map(|e| match Post::from_file(e.path()) {
            Ok(post) => post,
            Err(err) => {
                log!("warn"; "skipping {}: {:#}", e.path().display(), err);
                None
            }
        })
        .collect();

    // Newest first; slug as a stable tie-break for same-day posts
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

    Ok(posts)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_with_content(dir: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.content = dir.to_path_buf();
        config
    }

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_collect_posts_sorted_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "older.md", "---\ntitle: Older\ndate: 2023-02-01\n---\nbody\n");
        write(dir.path(), "newer.md", "---\ntitle: Newer\ndate: 2023-05-01\n---\nbody\n");
        write(dir.path(), "middle.md", "---\ntitle: Middle\ndate: 2023-03-01\n---\nbody\n");

        let posts = collect_posts(&config_with_content(dir.path())).unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Newer", "Middle", "Older"]);
    }

    #[test]
    fn test_collect_posts_same_day_tiebreak() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "bravo.md", "---\ntitle: B\ndate: 2023-02-01\n---\nbody\n");
        write(dir.path(), "alpha.md", "---\ntitle: A\ndate: 2023-02-01\n---\nbody\n");

        let posts = collect_posts(&config_with_content(dir.path())).unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["alpha", "bravo"]);
    }

    #[test]
    fn test_collect_posts_skips_bad_documents() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "good.md", "---\ntitle: Good\ndate: 2023-02-01\n---\nbody\n");
        write(dir.path(), "bad.md", "no frontmatter at all\n");

        let posts = collect_posts(&config_with_content(dir.path())).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Good");
    }

    #[test]
    fn test_collect_posts_skips_drafts_and_non_markdown() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "live.md", "---\ntitle: Live\ndate: 2023-02-01\n---\nbody\n");
        write(dir.path(), "wip.md", "---\ntitle: WIP\ndate: 2023-02-02\ndraft: true\n---\nbody\n");
        write(dir.path(), "notes.txt", "not content\n");

        let posts = collect_posts(&config_with_content(dir.path())).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Live");
    }

    #[test]
    fn test_collect_posts_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_content(&dir.path().join("does-not-exist"));
        assert!(collect_posts(&config).unwrap().is_empty());
    }

    #[test]
    fn test_collect_posts_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("2023")).unwrap();
        write(
            &dir.path().join("2023"),
            "nested.md",
            "---\ntitle: Nested\ndate: 2023-02-01\n---\nbody\n",
        );

        let posts = collect_posts(&config_with_content(dir.path())).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "nested");
    }
}
