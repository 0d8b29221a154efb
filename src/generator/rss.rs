//! rss feed generation.
//!
//! Turns the post collection into an rss channel written next to the
//! rendered pages.

use crate::{
    config::SiteConfig,
    content::Post,
    log,
    render::shell,
    utils::minify::minify_xml,
};
use anyhow::{Result, anyhow};
use regex::Regex;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::{fs, sync::LazyLock};

// ============================================================================
// Public API
// ============================================================================

/// Build the rss feed if enabled in config.
pub fn build_feed(config: &SiteConfig, posts: &[Post]) -> Result<()> {
    if config.build.rss.enable {
        RssFeed { config, posts }.write()?;
    }
    Ok(())
}

// ============================================================================
// RssFeed Implementation
// ============================================================================

/// rss feed builder
struct RssFeed<'a> {
    config: &'a SiteConfig,
    posts: &'a [Post],
}

impl RssFeed<'_> {
    /// Generate rss xml string
    fn into_xml(self) -> Result<String> {
        let items: Vec<_> = self
            .posts
            .iter()
            .map(|post| post_to_rss_item(post, self.config))
            .collect();

        let channel = ChannelBuilder::default()
            .title(self.config.base.title.clone())
            .link(self.config.base_url().to_string())
            .description(self.config.base.description.clone())
            .language(self.config.base.language.clone())
            .generator("veranda".to_string())
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("rss validation failed: {e}"))?;
        Ok(channel.to_string())
    }

    /// Write rss feed to file
    fn write(self) -> Result<()> {
        let config = self.config;
        let xml = self.into_xml()?;
        let xml = minify_xml(xml.as_bytes(), config);
        let rss_path = config.build.output.join(&config.build.rss.path);

        if let Some(parent) = rss_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&rss_path, &*xml)?;

        log!("rss"; "{}", rss_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a post to an rss item.
fn post_to_rss_item(post: &Post, config: &SiteConfig) -> rss::Item {
    let link = format!("{}{}", config.base_url(), shell::post_path(&post.slug));

    ItemBuilder::default()
        .title(post.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(post.summary().to_string())
        .pub_date(post.date.to_rfc2822())
        .author(normalize_rss_author(config))
        .build()
}

/// Normalize the author field to rss format: "email@example.com (Name)"
///
/// Uses the configured author directly when already in that format,
/// otherwise combines the configured email and author name.
fn normalize_rss_author(config: &SiteConfig) -> Option<String> {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$").unwrap()
    });

    let author = &config.base.author;
    if RE_VALID_AUTHOR.is_match(author) {
        return Some(author.clone());
    }

    Some(format!("{} ({})", config.base.email, author))
}
