//! The projects showcase page.
//!
//! Project cards are hand-authored static data, compiled into the
//! binary — there is no project "collection" on disk.

use crate::render::{SiteData, shell};
use maud::{Markup, PreEscaped, html};

// ============================================================================
// Card Data
// ============================================================================

/// A link shown in a project card footer.
pub struct ProjectLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// One hand-authored project card.
pub struct ProjectCard {
    pub title: &'static str,
    /// Display date, e.g. "April 2023".
    pub date: &'static str,
    /// GitHub star count shown next to the star icon.
    pub stars: u32,
    pub tags: &'static [&'static str],
    /// One-line subtitle under the card header.
    pub subtitle: &'static str,
    pub paragraphs: &'static [&'static str],
    pub links: &'static [ProjectLink],
    /// Inline SVG shown beside the description.
    pub icon: &'static str,
}

/// Star glyph used in the card label row.
const STAR_ICON: &str = r#"<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' fill='currentColor' width='16' height='16'><path fill-rule='evenodd' d='M10.788 3.21c.448-1.077 1.976-1.077 2.424 0l2.082 5.007 5.404.433c1.164.093 1.636 1.545.749 2.305l-4.117 3.527 1.257 5.273c.271 1.136-.964 2.033-1.96 1.425L12 18.354 7.373 21.18c-.996.608-2.231-.29-1.96-1.425l1.257-5.273-4.117-3.527c-.887-.76-.415-2.212.749-2.305l5.404-.433 2.082-5.006z' clip-rule='evenodd'/></svg>"#;

const ICON_PROCESS: &str = r##"<svg viewBox="0 0 64 64" xmlns="http://www.w3.org/2000/svg" fill="none" stroke="#525252"><polyline points="44 8 44 16 52 16"></polyline><polygon points="52 16 44 8 12 8 12 56 52 56 52 16"></polygon><line x1="28" y1="20" x2="28" y2="44"></line><line x1="36" y1="32" x2="36" y2="44"></line><polyline points="44 36 44 44 20 44 20 28"></polyline></svg>"##;

const ICON_LINES: &str = r##"<svg viewBox="0 0 64 64" xmlns="http://www.w3.org/2000/svg" fill="none" stroke="#525252"><polyline points="44 8 44 16 52 16"></polyline><polygon points="52 16 44 8 12 8 12 56 52 56 52 16"></polygon><line x1="20" y1="20" x2="28" y2="20"></line><line x1="20" y1="28" x2="44" y2="28"></line><line x1="36" y1="36" x2="20" y2="36"></line><line x1="20" y1="44" x2="44" y2="44"></line></svg>"##;

const ICON_CUBE: &str = r##"<svg viewBox="0 0 64 64" xmlns="http://www.w3.org/2000/svg" fill="none" stroke="#525252"><polyline points="44 8 44 16 52 16"></polyline><polygon points="52 16 44 8 12 8 12 56 52 56 52 16"></polygon><polygon points="20 26 20 38 32 44 44 38 44 26 32 20 20 26"></polygon><line x1="32" y1="32" x2="44" y2="26"></line><line x1="32" y1="44" x2="32" y2="32"></line><line x1="20" y1="26" x2="32" y2="32"></line></svg>"##;

const ICON_BOOK: &str = r##"<svg viewBox="0 0 64 64" xmlns="http://www.w3.org/2000/svg" fill="none" stroke="#545454"><polyline points="44 8 44 16 52 16"></polyline><polygon points="52 16 44 8 12 8 12 56 52 56 52 16"></polygon><polygon points="32 44 44 42 44 20 32 22 20 20 20 42 32 44"></polygon><line x1="32" y1="21" x2="32" y2="43"></line></svg>"##;

/// The showcased projects, in display order.
pub const PROJECT_CARDS: &[ProjectCard] = &[
    ProjectCard {
        title: "Process Ruster",
        date: "April 2023",
        stars: 0,
        tags: &["Rust"],
        subtitle: "Script listing all active processes under GNU/Linux",
        paragraphs: &[
            "Most GNU/Linux systems expose running processes through the file system: the /proc directory mounts a pseudo-filesystem called procfs, with one subdirectory per process named after its identifier.",
            "Reading that tree is enough to list every active process in a handful of lines. A detailed description of /proc lives in the kernel manual linked below.",
        ],
        links: &[
            ProjectLink { label: "Github", url: "https://github.com/grasek" },
            ProjectLink { label: "manual", url: "https://www.kernel.org/doc/html/latest/filesystems/proc.html" },
        ],
        icon: ICON_PROCESS,
    },
    ProjectCard {
        title: "Line Counter",
        date: "April 2023",
        stars: 0,
        tags: &["JavaScript", "TypeScript"],
        subtitle: "Script that generates a histogram based on the content of the project",
        paragraphs: &[
            "If you have ever wondered how many lines of code went into something you built, Line Counter answers that.",
            "It walks the project directory with a handful of regular expressions and groups every line into one of three buckets: empty, comment, or code.",
        ],
        links: &[ProjectLink { label: "Github", url: "https://github.com/grasek" }],
        icon: ICON_LINES,
    },
    ProjectCard {
        title: "TypeScript Algorithms",
        date: "February 2023",
        stars: 1,
        tags: &["TypeScript", "JavaScript", "Algorithms", "Data Structures"],
        subtitle: "Set of more and less popular algorithms implemented both in TypeScript and JavaScript",
        paragraphs: &[
            "While solving the first hundred Project Euler problems it became clear that many tasks share the same core algorithm, so this repository collects them once, with a custom loader on top.",
            "Most entries are classics, but a few are exotic and surprisingly fast - Bhaskara-Brouncker, a boosted Sieve of Atkin. Feel free to use them in your projects.",
        ],
        links: &[ProjectLink { label: "Github", url: "https://github.com/grasek" }],
        icon: ICON_CUBE,
    },
    ProjectCard {
        title: "Book Spot",
        date: "May 2023",
        stars: 0,
        tags: &["JavaScript", "Rust", "Big Data"],
        subtitle: "Minimalistic book browser with instant query processing",
        paragraphs: &[
            "Book Spot lets the user search books on a specific topic as they type: write \"spi\" and get every title related to spinal stenosis, with authors and publication years, instantly from several hundred thousand records.",
        ],
        links: &[ProjectLink { label: "Github", url: "https://github.com/grasek" }],
        icon: ICON_BOOK,
    },
];

// ============================================================================
// Rendering
// ============================================================================

/// The projects page: hand-authored open source showcase.
pub fn projects(site: &SiteData) -> Markup {
    let body = html! {
        div .p-2 {
            h5 { "Open Source" }
            p { "Below you will find some of my publicly available works with short descriptions." }
            div .projects {
                @for card in PROJECT_CARDS {
                    (render_card(card))
                }
            }
        }
        hr;
    };
    shell::render(
        site,
        shell::PROJECTS_PATH,
        &format!("Projects | {}", site.title()),
        body,
    )
}

fn render_card(card: &ProjectCard) -> Markup {
    html! {
        div .project {
            div .project-header {
                h5 {
                    (card.title)
                    small .accent-color { "\u{a0}\u{a0}" (card.date) }
                }
                div .project-labels {
                    span .project-label {
                        (PreEscaped(STAR_ICON)) "\u{a0}" (card.stars)
                    }
                    @for tag in card.tags {
                        span .project-label { (tag) }
                    }
                }
            }
            div .project-content {
                div .project-description {
                    p .project-subtitle { (card.subtitle) }
                    @for paragraph in card.paragraphs {
                        p { (paragraph) }
                    }
                    p {
                        b { "Links:" } "\u{a0}"
                        @for (i, link) in card.links.iter().enumerate() {
                            @if i > 0 { ",\u{a0}" }
                            a href=(link.url) { (link.label) }
                        }
                    }
                }
                div .project-image { (PreEscaped(card.icon)) }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_projects_page_renders_every_card() {
        let config = SiteConfig::default();
        let site = SiteData { config: &config, posts: &[] };
        let html = projects(&site).into_string();

        for card in PROJECT_CARDS {
            assert!(html.contains(card.title), "missing {}", card.title);
            assert!(html.contains(card.subtitle));
        }
    }

    #[test]
    fn test_projects_page_is_root_variant() {
        let config = SiteConfig::default();
        let site = SiteData { config: &config, posts: &[] };
        let html = projects(&site).into_string();

        assert!(html.contains("data-is-root-path=\"true\""));
        assert!(html.contains("href=\"/projects/\" class=\"nav-link active\""));
    }

    #[test]
    fn test_cards_carry_tags_and_links() {
        let config = SiteConfig::default();
        let site = SiteData { config: &config, posts: &[] };
        let html = projects(&site).into_string();

        assert!(html.contains("Data Structures"));
        assert!(html.contains("https://www.kernel.org/doc/html/latest/filesystems/proc.html"));
        // A star icon and a file icon per card
        assert!(html.matches("<svg").count() >= PROJECT_CARDS.len() * 2);
    }

    #[test]
    fn test_card_data_is_well_formed() {
        for card in PROJECT_CARDS {
            assert!(!card.title.is_empty());
            assert!(!card.tags.is_empty());
            assert!(!card.paragraphs.is_empty());
            assert!(!card.links.is_empty());
            assert!(card.icon.starts_with("<svg"));
        }
    }
}
