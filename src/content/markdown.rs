//! Markdown rendering and excerpt derivation.
//!
//! Uses pulldown-cmark with GFM extensions (tables, strikethrough,
//! task lists) for markdown → HTML conversion. Raw HTML blocks pass
//! through unchanged per the CommonMark spec.

use pulldown_cmark::{Event, Options, Parser, TagEnd, html::push_html};

/// Maximum excerpt length in characters, before the ellipsis.
pub const EXCERPT_CHARS: usize = 140;

fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Render a markdown body to HTML.
pub fn render(content: &str) -> String {
    let parser = Parser::new_ext(content, parser_options());
    let mut html = String::with_capacity(content.len() * 2);
    push_html(&mut html, parser);
    html
}

/// Extract the plain text of a markdown body, block boundaries
/// collapsed to single spaces. Inline HTML is dropped.
pub fn plain_text(content: &str) -> String {
    let mut text = String::with_capacity(content.len());

    for event in Parser::new_ext(content, parser_options()) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item) => {
                if !text.ends_with(' ') {
                    text.push(' ');
                }
            }
            _ => {}
        }
    }

    text.trim().to_owned()
}

/// Derive an excerpt from a markdown body.
///
/// Takes the leading plain text, truncated on a word boundary to at
/// most `max_chars` characters with a trailing ellipsis.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    let text = plain_text(content);
    if text.chars().count() <= max_chars {
        return text;
    }

    let cut: String = text.chars().take(max_chars + 1).collect();
    let truncated = match cut.rfind(char::is_whitespace) {
        Some(pos) => cut[..pos].trim_end(),
        None => &cut[..cut.len() - cut.chars().last().map_or(0, char::len_utf8)],
    };
    format!("{truncated}…")
}
