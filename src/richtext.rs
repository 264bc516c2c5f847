//! Markdown rich text rendering with allow-list sanitization.
//!
//! This module provides the rendering pipeline for rich text fields
//! (taglines, summaries, descriptions): Markdown is converted to HTML with
//! comrak, then sanitized with ammonia against a fixed tag/attribute
//! allow-list. Three variants exist: block output, inline-only output, and
//! a text-only output safe for truncation.

mod policy;
mod renderer;

pub use renderer::{RichTextRenderer, render_md_block, render_md_inline, render_md_text};
