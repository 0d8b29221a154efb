//! Page rendering: the shared shell plus one composer per route.
//!
//! Every page is a pure function of the immutable site data snapshot
//! and its own location string. The shell wraps each composed body in
//! the common header/footer; the composers in [`pages`], [`projects`]
//! and [`vault`] supply the bodies.

pub mod pages;
pub mod projects;
pub mod shell;
pub mod vault;

use crate::{config::SiteConfig, content::Post};

/// Fallback site title when `[base].title` is empty.
pub const DEFAULT_SITE_TITLE: &str = "Title";

/// Immutable data snapshot every page renders from.
#[derive(Clone, Copy)]
pub struct SiteData<'a> {
    pub config: &'a SiteConfig,
    /// Post collection, ordered newest first.
    pub posts: &'a [Post],
}

impl SiteData<'_> {
    /// Site title, falling back to [`DEFAULT_SITE_TITLE`] when unset.
    pub fn title(&self) -> &str {
        let title = &self.config.base.title;
        if title.is_empty() {
            DEFAULT_SITE_TITLE
        } else {
            title
        }
    }
}
