//! URL slug derivation for post paths.

/// Fallback slug for documents whose stem slugifies to nothing.
const FALLBACK_SLUG: &str = "untitled";

/// Derive a URL slug from a file stem.
///
/// Lowercases, transliterates and hyphenates via the `slug` crate, so
/// `Hello World.md` and `hello-world.md` map to the same address.
pub fn slugify_stem(stem: &str) -> String {
    let slug = slug::slugify(stem);
    if slug.is_empty() {
        FALLBACK_SLUG.to_owned()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_simple() {
        assert_eq!(slugify_stem("hello-world"), "hello-world");
    }

    #[test]
    fn test_slugify_spaces_and_case() {
        assert_eq!(slugify_stem("Hello World"), "hello-world");
    }

    #[test]
    fn test_slugify_punctuation() {
        assert_eq!(slugify_stem("My Article (2024) #1"), "my-article-2024-1");
    }

    #[test]
    fn test_slugify_unicode_transliteration() {
        assert_eq!(slugify_stem("Déjà Vu"), "deja-vu");
    }

    #[test]
    fn test_slugify_empty_falls_back() {
        assert_eq!(slugify_stem("###"), "untitled");
        assert_eq!(slugify_stem(""), "untitled");
    }
}
