//! Output minification for HTML and XML.
//!
//! Both functions return `Cow::Borrowed` when minification is disabled
//! in the config, so the common path allocates nothing.

use crate::config::SiteConfig;
use std::borrow::Cow;

/// Minify an HTML page using the `minify_html` crate.
pub fn minify_page<'a>(html: &'a [u8], config: &SiteConfig) -> Cow<'a, [u8]> {
    if !config.build.minify {
        return Cow::Borrowed(html);
    }

    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.minify_js = true;
    Cow::Owned(minify_html::minify(html, &cfg))
}

/// Minify XML (feed, sitemap) by stripping indentation and blank lines.
pub fn minify_xml<'a>(xml: &'a [u8], config: &SiteConfig) -> Cow<'a, [u8]> {
    if !config.build.minify {
        return Cow::Borrowed(xml);
    }

    let xml_str = std::str::from_utf8(xml).unwrap_or("");
    let minified = xml_str
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("");
    Cow::Owned(minified.into_bytes())
}
