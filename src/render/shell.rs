//! The page shell: header variants, navigation and footer.
//!
//! Every route gets one of two header variants, decided by a pure
//! classification of its path:
//!
//! - [`Shell::Root`]: site title as a plain heading plus the fixed
//!   navigation list, with the current route's entry highlighted.
//! - [`Shell::Subpage`]: site title as a single link back home, no
//!   navigation list.
//!
//! The footer carries the copyright line with the calendar year
//! computed at render time.

use crate::{render::SiteData, utils::date::current_year};
use maud::{DOCTYPE, Markup, html};

// ============================================================================
// Routes
// ============================================================================

pub const HOME_PATH: &str = "/";
pub const REPORTS_PATH: &str = "/reports/";
pub const PROJECTS_PATH: &str = "/projects/";
pub const PARTNERSHIP_PATH: &str = "/partnership/";
pub const VAULT_PATH: &str = "/knowledge-vault/";

/// A top-level navigation link.
pub struct NavEntry {
    pub path: &'static str,
    pub label: &'static str,
}

/// Fixed top-level navigation, in display order.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { path: REPORTS_PATH, label: "reports" },
    NavEntry { path: PROJECTS_PATH, label: "projects" },
    NavEntry { path: PARTNERSHIP_PATH, label: "partnership" },
];

/// Paths that get the full navigation header.
const ROOT_PATHS: &[&str] = &[HOME_PATH, REPORTS_PATH, PROJECTS_PATH, PARTNERSHIP_PATH];

/// URL path of a post page.
pub fn post_path(slug: &str) -> String {
    format!("{REPORTS_PATH}{slug}/")
}

// ============================================================================
// Classification
// ============================================================================

/// Header variant for the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Root,
    Subpage,
}

impl Shell {
    /// Classify a navigation path. Exact string match only — unmatched
    /// paths classify as subpages.
    pub fn classify(path: &str) -> Self {
        if ROOT_PATHS.contains(&path) {
            Self::Root
        } else {
            Self::Subpage
        }
    }

    pub const fn is_root(self) -> bool {
        matches!(self, Self::Root)
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Wrap a composed page body in the site shell.
pub fn render(site: &SiteData, location: &str, head_title: &str, body: Markup) -> Markup {
    let shell = Shell::classify(location);

    html! {
        (DOCTYPE)
        html lang=(site.config.base.language) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (head_title) }
                link rel="stylesheet" href="/styles/main.css";
            }
            body {
                div .global-wrapper data-is-root-path=(shell.is_root().to_string()) {
                    header .global-header { (header(shell, site.title(), location)) }
                    main { (body) }
                    (footer(site))
                }
            }
        }
    }
}

fn header(shell: Shell, title: &str, location: &str) -> Markup {
    match shell {
        Shell::Root => html! {
            div .main-heading {
                h4 { (title) }
                nav .navigation {
                    @for entry in NAV_ENTRIES {
                        p {
                            a href=(entry.path) class=(nav_class(entry, location)) {
                                (entry.label)
                            }
                        }
                    }
                }
            }
        },
        Shell::Subpage => html! {
            a .header-link-home href=(HOME_PATH) { (title) }
        },
    }
}

/// Exactly the entry whose path equals the current location gets the
/// active class.
fn nav_class(entry: &NavEntry, location: &str) -> &'static str {
    if entry.path == location {
        "nav-link active"
    } else {
        "nav-link"
    }
}

fn footer(site: &SiteData) -> Markup {
    let copyright = &site.config.base.copyright;
    let notice = if copyright.is_empty() {
        site.title()
    } else {
        copyright
    };

    html! {
        footer {
            "© " (current_year()) ", " (notice)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
