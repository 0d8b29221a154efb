//! Sitemap generation.
//!
//! Generates a sitemap.xml listing every rendered route for search
//! engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{build::BuiltPage, config::SiteConfig, log, utils::minify::minify_xml};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::{fs, time::SystemTime};

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Public API
// ============================================================================

/// Build sitemap if enabled in config.
pub fn build_sitemap(config: &SiteConfig, pages: &[BuiltPage]) -> Result<()> {
    if config.build.sitemap.enable {
        Sitemap::from_pages(pages).write(config)?;
    }
    Ok(())
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// Sitemap data structure
struct Sitemap {
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    /// Full URL location
    loc: String,
    /// Last modification date (optional, YYYY-MM-DD format)
    lastmod: Option<String>,
}

impl Sitemap {
    /// Build sitemap from the rendered page set.
    fn from_pages(pages: &[BuiltPage]) -> Self {
        let urls = pages
            .iter()
            .map(|page| UrlEntry {
                loc: page.full_url.clone(),
                lastmod: page.lastmod.map(lastmod_ymd),
            })
            .collect();

        Self { urls }
    }

    /// Generate sitemap XML string.
    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to output file.
    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.build.output.join(&config.build.sitemap.path);
        let xml = self.into_xml();
        let xml = minify_xml(xml.as_bytes(), config);

        fs::write(&sitemap_path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{}", sitemap_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Format a file modification time as YYYY-MM-DD.
fn lastmod_ymd(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).format("%Y-%m-%d").to_string()
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    fn make_page(full_url: &str, lastmod_days: Option<u64>) -> BuiltPage {
        BuiltPage {
            url_path: "/test/".to_string(),
            full_url: full_url.to_string(),
            lastmod: lastmod_days.map(|days| UNIX_EPOCH + Duration::from_secs(days * 86400)),
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_lastmod_ymd() {
        // 20089 days after the epoch is 2025-01-01
        let time = UNIX_EPOCH + Duration::from_secs(20089 * 86400);
        assert_eq!(lastmod_ymd(time), "2025-01-01");
    }

    #[test]
    fn test_sitemap_empty() {
        let sitemap = Sitemap::from_pages(&[]);
        let xml = sitemap.into_xml();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_single_page() {
        let pages = vec![make_page("https://example.com/", Some(20089))];
        let xml = Sitemap::from_pages(&pages).into_xml();

        assert!(xml.contains("<url>"));
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<lastmod>2025-01-01</lastmod>"));
        assert!(xml.contains("</url>"));
    }

    #[test]
    fn test_sitemap_multiple_pages() {
        let pages = vec![
            make_page("https://example.com/", Some(20089)),
            make_page("https://example.com/reports/hello/", Some(20090)),
            make_page("https://example.com/projects/", None),
        ];
        let xml = Sitemap::from_pages(&pages).into_xml();

        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/reports/hello/</loc>"));
        assert!(xml.contains("<loc>https://example.com/projects/</loc>"));
        assert_eq!(xml.matches("<url>").count(), 3);
        assert_eq!(xml.matches("</url>").count(), 3);
    }

    #[test]
    fn test_sitemap_without_lastmod() {
        let pages = vec![make_page("https://example.com/", None)];
        let xml = Sitemap::from_pages(&pages).into_xml();

        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(!xml.contains("<lastmod>"));
    }

    #[test]
    fn test_sitemap_escapes_special_chars() {
        let pages = vec![make_page("https://example.com/search?q=a&b=c", None)];
        let xml = Sitemap::from_pages(&pages).into_xml();

        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=c</loc>"));
    }
}
