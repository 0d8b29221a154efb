//! Page composers for the fixed routes and post pages.
//!
//! Each composer is a thin function of the site data snapshot: it
//! resolves the site title (with fallback), optionally consumes the
//! post collection, and hands its body to the shell. List pages
//! substitute a fixed placeholder body when the collection is empty.

use crate::{
    content::Post,
    render::{SiteData, shell},
};
use maud::{Markup, html};

/// Placeholder body for list pages when no posts exist.
pub const NO_POSTS_FALLBACK: &str =
    "No posts found. Add markdown files to the content directory to populate this list.";

/// Compose the browser-tab title for a named page.
fn head_title(site: &SiteData, page: &str) -> String {
    format!("{page} | {}", site.title())
}

// ============================================================================
// Landing (`/`)
// ============================================================================

/// The landing page: short intro plus the post list.
pub fn landing(site: &SiteData) -> Markup {
    let body = html! {
        (intro(site))
        (post_list(site.posts))
    };
    shell::render(site, shell::HOME_PATH, site.title(), body)
}

fn intro(site: &SiteData) -> Markup {
    let description = &site.config.base.description;
    html! {
        @if !description.is_empty() {
            p .bio { (description) }
        }
    }
}

// ============================================================================
// Reports (`/reports/`, `/reports/<slug>/`)
// ============================================================================

/// The reports index: every published post, newest first.
pub fn reports(site: &SiteData) -> Markup {
    let body = html! {
        h2 { "Reports" }
        (post_list(site.posts))
    };
    shell::render(site, shell::REPORTS_PATH, &head_title(site, "Reports"), body)
}

/// One post page, rendered under the subpage shell.
pub fn post_page(site: &SiteData, post: &Post) -> Markup {
    let location = shell::post_path(&post.slug);
    let body = html! {
        article .post {
            header {
                h2 { (post.title) }
                small .accent-color { (post.date.display_long()) }
            }
            (maud::PreEscaped(post.body_html.clone()))
        }
    };
    shell::render(site, &location, &head_title(site, &post.title), body)
}

/// Shared post list markup, or the fallback message when empty.
fn post_list(posts: &[Post]) -> Markup {
    if posts.is_empty() {
        return html! { p { (NO_POSTS_FALLBACK) } };
    }

    html! {
        ol .post-list style="list-style: none;" {
            @for post in posts {
                li {
                    article .post-list-item {
                        header {
                            h5 {
                                a href=(shell::post_path(&post.slug)) { (post.title) }
                            }
                            small { (post.date.display_long()) }
                        }
                        section {
                            p { (post.summary()) }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Partnership (`/partnership/`)
// ============================================================================

/// The partnership page: an inquiry form with no submission target.
/// The form is inert markup; nothing posts anywhere.
pub fn partnership(site: &SiteData) -> Markup {
    let body = html! {
        div .p-2 {
            h5 { "Inquiry Form (Not available yet)" }
            p {
                "If you want to collaborate with me, you can send an inquiry using the form below."
                br;
                "You'll receive a response within 48 hours."
            }
            div .inquiry {
                div .inquiry-inputs {
                    div .is1 {
                        input placeholder="Project's title";
                        input placeholder="E-mail address or phone number";
                        input placeholder="Estimated budget";
                        input type="file" id="upload" name="file";
                    }
                    textarea placeholder="Short description" {}
                }
                div .is2 {
                    small { "*you need to fill project name, description and contact" }
                    div .ins {
                        button .inquiry-send { "Send Inquiry" }
                    }
                }
            }
        }
        hr;
    };
    shell::render(
        site,
        shell::PARTNERSHIP_PATH,
        &head_title(site, "Send Inquiry"),
        body,
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::utils::date::PostDate;
    use std::path::PathBuf;

    fn make_post(slug: &str, title: &str, date: &str) -> Post {
        Post {
            slug: slug.to_string(),
            title: title.to_string(),
            date: PostDate::parse(date).unwrap(),
            description: Some(format!("about {title}")),
            excerpt: String::new(),
            body_html: "<p>body</p>".to_string(),
            source: PathBuf::from(format!("{slug}.md")),
        }
    }

    #[test]
    fn test_landing_lists_posts_in_order() {
        let config = SiteConfig::default();
        let posts = vec![
            make_post("newer", "Newer", "2023-05-01"),
            make_post("older", "Older", "2023-02-01"),
        ];
        let site = SiteData { config: &config, posts: &posts };
        let html = landing(&site).into_string();

        let newer = html.find("Newer").unwrap();
        let older = html.find("Older").unwrap();
        assert!(newer < older, "descending date order");
        assert!(html.contains("href=\"/reports/newer/\""));
        assert!(!html.contains(NO_POSTS_FALLBACK));
    }

    #[test]
    fn test_landing_empty_collection_fallback() {
        let config = SiteConfig::default();
        let site = SiteData { config: &config, posts: &[] };
        let html = landing(&site).into_string();

        assert!(html.contains(NO_POSTS_FALLBACK));
        assert!(!html.contains("post-list-item"));
    }

    #[test]
    fn test_reports_index_is_root_variant() {
        let config = SiteConfig::default();
        let posts = vec![make_post("one", "One", "2023-05-01")];
        let site = SiteData { config: &config, posts: &posts };
        let html = reports(&site).into_string();

        assert!(html.contains("data-is-root-path=\"true\""));
        assert!(html.contains("href=\"/reports/\" class=\"nav-link active\""));
    }

    #[test]
    fn test_post_page_is_subpage_variant() {
        let mut config = SiteConfig::default();
        config.base.title = "My Site".to_string();
        let posts = vec![make_post("some-post", "Some Post", "2023-05-01")];
        let site = SiteData { config: &config, posts: &posts };
        let html = post_page(&site, &posts[0]).into_string();

        assert!(html.contains("data-is-root-path=\"false\""));
        assert!(html.contains("header-link-home"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("May 01, 2023"));
        assert!(html.contains("<title>Some Post | My Site</title>"));
    }

    #[test]
    fn test_post_list_shows_summary() {
        let config = SiteConfig::default();
        let posts = vec![make_post("one", "One", "2023-05-01")];
        let site = SiteData { config: &config, posts: &posts };
        let html = reports(&site).into_string();

        assert!(html.contains("about One"));
    }

    #[test]
    fn test_partnership_form_is_inert() {
        let config = SiteConfig::default();
        let site = SiteData { config: &config, posts: &[] };
        let html = partnership(&site).into_string();

        assert!(html.contains("Inquiry Form"));
        assert!(html.contains("Send Inquiry"));
        // No submission target anywhere
        assert!(!html.contains("action="));
        assert!(!html.contains("method="));
    }

    #[test]
    fn test_default_title_fallback_in_heading() {
        let config = SiteConfig::default();
        let site = SiteData { config: &config, posts: &[] };
        let html = landing(&site).into_string();

        assert!(html.contains("<h4>Title</h4>"));
    }
}
