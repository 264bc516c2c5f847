//! Sanitization allow-lists shared by the rich text renderers.

use ammonia::Builder;
use std::collections::{HashMap, HashSet};

/// URL schemes allowed on links in every rendering mode.
pub const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Tags allowed in block mode: paragraph structure, lists, quotes, code
/// blocks, inline emphasis, and links.
pub const BLOCK_TAGS: &[&str] = &[
    "p",
    "br",
    "ul",
    "ol",
    "li",
    "blockquote",
    "pre",
    "code",
    "strong",
    "em",
    "a",
];

/// Tags allowed in inline mode: emphasis, code spans, and links only.
pub const INLINE_TAGS: &[&str] = &["br", "strong", "em", "code", "a"];

/// Attributes allowed on links. Every other tag carries no attributes.
pub const LINK_ATTRIBUTES: &[&str] = &["href", "title", "target"];

/// Builds a sanitizer restricted to the given tag allow-list.
///
/// Links are forced to open in a new tab with `rel="noopener noreferrer"`,
/// comments are stripped, and only http/https/mailto URLs survive. Passing
/// an empty tag list yields the text-only sanitizer.
pub fn sanitizer(tags: &'static [&'static str]) -> Builder<'static> {
    let mut builder = Builder::default();
    builder
        .tags(tags.iter().copied().collect::<HashSet<_>>())
        .generic_attributes(HashSet::new())
        .tag_attributes(HashMap::from([(
            "a",
            LINK_ATTRIBUTES.iter().copied().collect::<HashSet<_>>(),
        )]))
        .url_schemes(ALLOWED_URL_SCHEMES.iter().copied().collect::<HashSet<_>>())
        .strip_comments(true)
        .link_rel(Some("noopener noreferrer"))
        .set_tag_attribute_value("a", "target", "_blank");
    builder
}

/// Builds the sanitizer that strips every tag, keeping text content only.
pub fn text_sanitizer() -> Builder<'static> {
    let mut builder = Builder::default();
    builder
        .tags(HashSet::new())
        .generic_attributes(HashSet::new())
        .tag_attributes(HashMap::new())
        .url_schemes(ALLOWED_URL_SCHEMES.iter().copied().collect::<HashSet<_>>())
        .strip_comments(true);
    builder
}
