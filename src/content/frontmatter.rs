//! Frontmatter extraction from markdown documents.
//!
//! A post document opens with a YAML block fenced by `---` lines:
//!
//! ```markdown
//! ---
//! title: "Hello"
//! date: "2023-04-05"
//! description: "First post"
//! ---
//!
//! Body text...
//! ```

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Frontmatter fields recognized on a post document.
///
/// Unknown fields are ignored so content can carry editor- or
/// theme-specific keys without breaking the build.
#[derive(Debug, Clone, Deserialize)]
pub struct Frontmatter {
    /// Post title shown in lists and the page header.
    pub title: String,

    /// Publication date string, parsed later as `PostDate`.
    pub date: String,

    /// Optional one-line description; the derived excerpt fills in
    /// when absent.
    #[serde(default)]
    pub description: Option<String>,

    /// Drafts are excluded from the built site.
    #[serde(default)]
    pub draft: bool,
}

/// Split a document into its raw YAML frontmatter and the markdown body.
///
/// Returns `None` for the frontmatter when the document does not open
/// with a `---` fence.
pub fn split(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content.strip_prefix("---") else {
        return (None, content);
    };

    // The opening fence must be a whole line
    let Some(rest) = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n")) else {
        return (None, content);
    };

    match rest.find("\n---") {
        Some(end) => {
            let yaml = &rest[..end];
            let body = rest[end + 4..].trim_start_matches(['\r', '\n']);
            (Some(yaml), body)
        }
        None => (None, content),
    }
}

/// Parse a document into its frontmatter and markdown body.
pub fn parse(content: &str) -> Result<(Frontmatter, &str)> {
    let (yaml, body) = split(content);
    let Some(yaml) = yaml else {
        bail!("missing frontmatter block");
    };

    let frontmatter: Frontmatter =
        serde_yaml::from_str(yaml).context("invalid frontmatter")?;
    Ok((frontmatter, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_frontmatter() {
        let (yaml, body) = split("---\ntitle: Hi\n---\n\n# Body");
        assert_eq!(yaml, Some("title: Hi"));
        assert_eq!(body, "# Body");
    }

    #[test]
    fn test_split_frontmatter_none() {
        let (yaml, body) = split("# Just markdown");
        assert!(yaml.is_none());
        assert_eq!(body, "# Just markdown");
    }

    #[test]
    fn test_split_unterminated_fence() {
        let (yaml, body) = split("---\ntitle: Hi\nno closing fence");
        assert!(yaml.is_none());
        assert_eq!(body, "---\ntitle: Hi\nno closing fence");
    }

    #[test]
    fn test_split_fence_must_open_line() {
        // "---" followed by text on the same line is a thematic break,
        // not a frontmatter fence
        let (yaml, _) = split("--- title: Hi ---\nbody");
        assert!(yaml.is_none());
    }

    #[test]
    fn test_parse_full() {
        let doc = "---\ntitle: Hello\ndate: \"2023-04-05\"\ndescription: First post\n---\nBody";
        let (fm, body) = parse(doc).unwrap();

        assert_eq!(fm.title, "Hello");
        assert_eq!(fm.date, "2023-04-05");
        assert_eq!(fm.description.as_deref(), Some("First post"));
        assert!(!fm.draft);
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_parse_minimal() {
        let doc = "---\ntitle: Hello\ndate: 2023-04-05\n---\nBody";
        let (fm, _) = parse(doc).unwrap();

        assert_eq!(fm.title, "Hello");
        assert!(fm.description.is_none());
    }

    #[test]
    fn test_parse_draft() {
        let doc = "---\ntitle: WIP\ndate: 2023-04-05\ndraft: true\n---\n";
        let (fm, _) = parse(doc).unwrap();
        assert!(fm.draft);
    }

    #[test]
    fn test_parse_unknown_fields_ignored() {
        let doc = "---\ntitle: Hello\ndate: 2023-04-05\ncustom_key: anything\n---\nBody";
        assert!(parse(doc).is_ok());
    }

    #[test]
    fn test_parse_missing_frontmatter() {
        assert!(parse("# Just markdown").is_err());
    }

    #[test]
    fn test_parse_missing_required_field() {
        let doc = "---\ntitle: Hello\n---\nBody";
        assert!(parse(doc).is_err());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let doc = "---\ntitle: [unclosed\ndate: 2023-04-05\n---\nBody";
        assert!(parse(doc).is_err());
    }
}
