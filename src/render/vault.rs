//! The knowledge-vault resource list page.
//!
//! A hand-authored list of books and sites, compiled into the binary.
//! The vault is deliberately not a root path: it renders under the
//! back-link shell.

use crate::render::{SiteData, shell};
use maud::{Markup, html};

/// One recommended resource.
pub struct VaultEntry {
    pub title: &'static str,
    /// Link target; `None` renders a plain, unlinked title.
    pub href: Option<&'static str>,
    pub blurb: &'static str,
}

/// The resource list, in display order.
pub const VAULT_ENTRIES: &[VaultEntry] = &[
    VaultEntry {
        title: "The C Programming Language",
        href: Some("../c.pdf"),
        blurb: "\"K&R\" is a timeless classic and the definitive guide to C: syntax, features, best practices and a lot of exercises. I would recommend it as the first choice.",
    },
    VaultEntry {
        title: "Jens Gustedt's Blog",
        href: Some("https://gustedt.wordpress.com/"),
        blurb: "This guy knows pretty much everything about C, and shares it through engagingly written blog posts.",
    },
    VaultEntry {
        title: "(Almost) C Documentation",
        href: Some("https://devdocs.io/c/"),
        blurb: "There is no official website dedicated to C documentation the way other languages have one, but this comes pretty close.",
    },
    VaultEntry {
        title: "Shell Scripting Bible",
        href: Some("../shell.pdf"),
        blurb: "The name speaks for itself: everything important in shell. Idioms, commands, how it all works under the hood.",
    },
    VaultEntry {
        title: "Modern C",
        href: Some("../modern_c.pdf"),
        blurb: "More theoretical than K&R, with a few unique details. For practical C programming start with K&R instead.",
    },
    VaultEntry {
        title: "Algorithms Base",
        href: Some("https://cp-algorithms.com"),
        blurb: "Not strictly C or shell, but an amazing collection of the most important algorithms, each clearly explained with exercises.",
    },
    VaultEntry {
        title: "INCITS/ISO/IEC 9899",
        href: None,
        blurb: "If you are extremely curious about language details (or so insane that you want to write your own compiler), you might appreciate the Language Standard and Specification.",
    },
];

/// Closing note under the list.
const VAULT_NOTE: &str =
    "Remember - separate the work from its fruits. Nobody cares if you read 10 books. Get one, and that alone will make a significant difference.";

/// The knowledge-vault page.
pub fn vault(site: &SiteData) -> Markup {
    let body = html! {
        h2 { "Resources and materials:" }
        div .col {
            @for entry in VAULT_ENTRIES {
                div {
                    @match entry.href {
                        Some(href) => {
                            a href=(href) target="_blank" rel="noreferrer" { (entry.title) }
                        }
                        None => {
                            a { (entry.title) }
                        }
                    }
                    p { (entry.blurb) }
                }
            }
            h6 { (VAULT_NOTE) }
        }
    };
    shell::render(
        site,
        shell::VAULT_PATH,
        &format!("Knowledge Vault | {}", site.title()),
        body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_vault_renders_every_entry() {
        let config = SiteConfig::default();
        let site = SiteData { config: &config, posts: &[] };
        let html = vault(&site).into_string();

        for entry in VAULT_ENTRIES {
            assert!(html.contains(entry.title), "missing {}", entry.title);
        }
        assert!(html.contains("separate the work from its fruits"));
    }

    #[test]
    fn test_vault_is_subpage_variant() {
        let config = SiteConfig::default();
        let site = SiteData { config: &config, posts: &[] };
        let html = vault(&site).into_string();

        assert!(html.contains("data-is-root-path=\"false\""));
        assert!(html.contains("header-link-home"));
    }

    #[test]
    fn test_external_links_open_new_tab() {
        let config = SiteConfig::default();
        let site = SiteData { config: &config, posts: &[] };
        let html = vault(&site).into_string();

        assert!(html.contains("href=\"https://gustedt.wordpress.com/\" target=\"_blank\""));
    }

    #[test]
    fn test_unlinked_entry_has_no_href() {
        let unlinked: Vec<_> = VAULT_ENTRIES.iter().filter(|e| e.href.is_none()).collect();
        assert_eq!(unlinked.len(), 1);
        assert_eq!(unlinked[0].title, "INCITS/ISO/IEC 9899");
    }
}
