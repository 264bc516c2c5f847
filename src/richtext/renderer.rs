//! Markdown to sanitized HTML rendering.

use ammonia::Builder;
use comrak::Options;
use once_cell::sync::Lazy;

use super::policy;

static RENDERER: Lazy<RichTextRenderer> = Lazy::new(RichTextRenderer::new);

/// Renders Markdown to sanitized HTML for portal rich text fields.
///
/// Holds one sanitizer per rendering mode. Conversion lets raw HTML through
/// to the sanitizer, which strips anything outside the allow-list, so the
/// pipeline output is safe to splice into pages unescaped.
pub struct RichTextRenderer {
    block: Builder<'static>,
    inline: Builder<'static>,
    text: Builder<'static>,
}

impl RichTextRenderer {
    /// Creates a renderer with the portal sanitization policy.
    pub fn new() -> Self {
        Self {
            block: policy::sanitizer(policy::BLOCK_TAGS),
            inline: policy::sanitizer(policy::INLINE_TAGS),
            text: policy::text_sanitizer(),
        }
    }

    /// Converts Markdown to raw HTML.
    ///
    /// Single newlines become `<br>` and fenced code blocks are supported.
    /// Raw HTML in the input passes through here and is removed by the
    /// sanitization step that follows.
    fn markdown_to_html(text: &str) -> String {
        let mut options = Options::default();
        options.render.hardbreaks = true;
        options.render.unsafe_ = true;
        comrak::markdown_to_html(text, &options)
    }

    /// Renders block-friendly HTML.
    ///
    /// Intended for summaries and descriptions. Allowed tags: paragraphs,
    /// line breaks, lists, blockquotes, code blocks, emphasis, and links.
    pub fn render_block(&self, text: &str) -> String {
        let html = Self::markdown_to_html(text);
        self.block.clean(&html).to_string().trim().to_string()
    }

    /// Renders inline-only HTML.
    ///
    /// Intended for taglines shown inside cards and headers. A single outer
    /// `<p>` wrapper produced by the converter is stripped before
    /// sanitizing so the output stays truly inline.
    pub fn render_inline(&self, text: &str) -> String {
        let html = Self::markdown_to_html(text);
        let unwrapped = strip_paragraph_wrapper(&html);
        self.inline.clean(unwrapped).to_string().trim().to_string()
    }

    /// Renders plain text with every tag stripped.
    ///
    /// Use this before character truncation so markup is never cut in half.
    /// Text content remains HTML-escaped.
    pub fn render_text(&self, text: &str) -> String {
        let html = Self::markdown_to_html(text);
        self.text.clean(&html).to_string().trim().to_string()
    }
}

impl Default for RichTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Removes the outer `<p>` wrapper from single-line converter output.
///
/// Returns the inner slice when the trimmed HTML starts with `<p>` and ends
/// with `</p>`; otherwise returns the trimmed input unchanged.
fn strip_paragraph_wrapper(html: &str) -> &str {
    let trimmed = html.trim();
    trimmed
        .strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
        .unwrap_or(trimmed)
}

/// Renders block Markdown with the shared renderer.
///
/// Empty input renders to an empty string.
pub fn render_md_block(text: &str) -> String {
    RENDERER.render_block(text)
}

/// Renders inline Markdown with the shared renderer.
pub fn render_md_inline(text: &str) -> String {
    RENDERER.render_inline(text)
}

/// Renders Markdown to plain text with the shared renderer.
pub fn render_md_text(text: &str) -> String {
    RENDERER.render_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_renders_paragraph_and_emphasis() {
        // Arrange
        let markdown = "This is **bold** and *italic* text.";

        // Act
        let html = render_md_block(markdown);

        // Assert
        assert!(html.starts_with("<p>"), "Should keep paragraph tag: {}", html);
        assert!(html.contains("<strong>bold</strong>"), "Should keep strong: {}", html);
        assert!(html.contains("<em>italic</em>"), "Should keep em: {}", html);
    }

    #[test]
    fn test_block_strips_script_tags() {
        // Arrange
        let markdown = "<script>alert('xss')</script>\n\nNormal text.";

        // Act
        let html = render_md_block(markdown);

        // Assert
        assert!(!html.contains("<script>"), "Script tag must be stripped: {}", html);
        assert!(!html.contains("alert"), "Script content must be dropped: {}", html);
        assert!(html.contains("Normal text"), "Safe text must survive: {}", html);
    }

    #[test]
    fn test_block_forces_link_target_and_rel() {
        // Arrange
        let markdown = "[docs](https://example.com \"Docs\")";

        // Act
        let html = render_md_block(markdown);

        // Assert
        assert!(
            html.contains("href=\"https://example.com\""),
            "Should keep href: {}",
            html
        );
        assert!(html.contains("title=\"Docs\""), "Should keep title: {}", html);
        assert!(
            html.contains("target=\"_blank\""),
            "Should force target=_blank: {}",
            html
        );
        assert!(
            html.contains("rel=\"noopener noreferrer\""),
            "Should force rel: {}",
            html
        );
    }

    #[test]
    fn test_block_drops_disallowed_url_scheme() {
        // Arrange
        let markdown = "[click](javascript:alert(1))";

        // Act
        let html = render_md_block(markdown);

        // Assert
        assert!(!html.contains("javascript:"), "Scheme must be dropped: {}", html);
        assert!(html.contains("click"), "Link text must survive: {}", html);
    }

    #[test]
    fn test_block_keeps_lists_and_code() {
        // Arrange
        let markdown = "- first\n- second\n\n```\nlet x = 1;\n```";

        // Act
        let html = render_md_block(markdown);

        // Assert
        assert!(html.contains("<ul>"), "Should keep unordered list: {}", html);
        assert!(html.contains("<li>first</li>"), "Should keep items: {}", html);
        assert!(html.contains("<pre>"), "Should keep pre: {}", html);
        assert!(html.contains("<code>"), "Should keep code: {}", html);
    }

    #[test]
    fn test_block_converts_newlines_to_breaks() {
        // Arrange
        let markdown = "first line\nsecond line";

        // Act
        let html = render_md_block(markdown);

        // Assert
        assert!(html.contains("<br"), "Single newline should become br: {}", html);
    }

    #[test]
    fn test_block_strips_heading_tags_keeps_text() {
        // Arrange
        let markdown = "# Heading\n\nBody.";

        // Act
        let html = render_md_block(markdown);

        // Assert
        assert!(!html.contains("<h1>"), "Headings are not allowed: {}", html);
        assert!(html.contains("Heading"), "Heading text must survive: {}", html);
    }

    #[test]
    fn test_inline_strips_outer_paragraph() {
        // Arrange
        let markdown = "*cursiva* and **negrita**";

        // Act
        let html = render_md_inline(markdown);

        // Assert
        assert!(!html.contains("<p>"), "Inline output must not be wrapped: {}", html);
        assert_eq!(html, "<em>cursiva</em> and <strong>negrita</strong>");
    }

    #[test]
    fn test_inline_flattens_block_structure() {
        // Arrange
        let markdown = "- item one\n- item two";

        // Act
        let html = render_md_inline(markdown);

        // Assert
        assert!(!html.contains("<ul>"), "Lists are not allowed inline: {}", html);
        assert!(!html.contains("<li>"), "List items are not allowed inline: {}", html);
        assert!(html.contains("item one"), "Item text must survive: {}", html);
    }

    #[test]
    fn test_inline_handles_multiple_paragraphs() {
        // Arrange
        let markdown = "first\n\nsecond";

        // Act
        let html = render_md_inline(markdown);

        // Assert
        assert!(!html.contains("<p>"), "Paragraph tags must be gone: {}", html);
        assert!(html.contains("first"), "First paragraph text survives: {}", html);
        assert!(html.contains("second"), "Second paragraph text survives: {}", html);
    }

    #[test]
    fn test_inline_keeps_links_with_forced_attributes() {
        // Arrange
        let markdown = "[site](https://example.com)";

        // Act
        let html = render_md_inline(markdown);

        // Assert
        assert!(html.starts_with("<a "), "Should start with the link: {}", html);
        assert!(html.contains("target=\"_blank\""), "Should force target: {}", html);
        assert!(
            html.contains("rel=\"noopener noreferrer\""),
            "Should force rel: {}",
            html
        );
    }

    #[test]
    fn test_text_strips_all_markup() {
        // Arrange
        let markdown = "**bold** with a [link](https://example.com) and `code`";

        // Act
        let text = render_md_text(markdown);

        // Assert
        assert!(!text.contains('<'), "No tags may survive: {}", text);
        assert!(text.contains("bold"), "Bold text survives: {}", text);
        assert!(text.contains("link"), "Link text survives: {}", text);
        assert!(text.contains("code"), "Code text survives: {}", text);
    }

    #[test]
    fn test_text_strips_raw_html() {
        // Arrange
        let markdown = "before <span class=\"x\">inside</span> after";

        // Act
        let text = render_md_text(markdown);

        // Assert
        assert!(!text.contains("<span"), "Raw HTML must be stripped: {}", text);
        assert!(text.contains("inside"), "Inner text survives: {}", text);
    }

    #[test]
    fn test_empty_input_renders_empty() {
        assert_eq!(render_md_block(""), "");
        assert_eq!(render_md_inline(""), "");
        assert_eq!(render_md_text(""), "");
    }

    #[test]
    fn test_whitespace_only_input_renders_empty() {
        assert_eq!(render_md_block("   \n  "), "");
        assert_eq!(render_md_inline("   \n  "), "");
    }

    #[test]
    fn test_strip_paragraph_wrapper_single() {
        assert_eq!(strip_paragraph_wrapper("<p>hello</p>"), "hello");
        assert_eq!(strip_paragraph_wrapper("  <p>hello</p>\n"), "hello");
    }

    #[test]
    fn test_strip_paragraph_wrapper_not_wrapped() {
        assert_eq!(strip_paragraph_wrapper("<ul><li>x</li></ul>"), "<ul><li>x</li></ul>");
        assert_eq!(strip_paragraph_wrapper("plain"), "plain");
    }

    #[test]
    fn test_raw_anchor_attributes_are_filtered() {
        // Arrange: raw HTML link with attributes outside the allow-list
        let markdown = "<a href=\"https://example.com\" onclick=\"steal()\" class=\"x\">go</a>";

        // Act
        let html = render_md_block(markdown);

        // Assert
        assert!(!html.contains("onclick"), "Event handlers must be stripped: {}", html);
        assert!(!html.contains("class="), "Class attributes must be stripped: {}", html);
        assert!(
            html.contains("href=\"https://example.com\""),
            "Allowed href survives: {}",
            html
        );
    }
}
