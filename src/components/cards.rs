//! Work card component for area and home listings

use maud::{Markup, PreEscaped, html};

use crate::media::MediaStorage;
use crate::model::Trabajo;
use crate::richtext::{render_md_inline, render_md_text};
use crate::util::truncate_chars;

/// Maximum characters of summary text shown on a card.
const CARD_SUMMARY_CHARS: usize = 160;

/// Renders a work card with hero image, title, tagline, and summary
///
/// The tagline renders as inline Markdown; the summary is reduced to
/// plain text and truncated so markup is never cut in half.
///
/// # Arguments
///
/// * `trabajo`: Work to render
/// * `area_slug`: Slug of the owning area, used for the detail link
/// * `media`: Storage backend resolving the hero image URL
///
/// # Returns
///
/// Card markup linking to the work detail page
pub fn trabajo_card(trabajo: &Trabajo, area_slug: &str, media: &MediaStorage) -> Markup {
    let href = trabajo.url_path(area_slug);
    let hero = trabajo.hero_image(media);
    let tagline = render_md_inline(&trabajo.tagline);
    let summary = truncate_chars(&render_md_text(&trabajo.summary), CARD_SUMMARY_CHARS);

    html! {
        article class="trabajo-card" {
            @if !hero.is_empty() {
                a href=(href) class="card-image" {
                    img src=(hero) alt=(trabajo.title) loading="lazy";
                }
            }
            div class="card-body" {
                h3 class="card-title" {
                    a href=(href) { (trabajo.title) }
                }
                @if !tagline.is_empty() {
                    p class="card-tagline" { (PreEscaped(tagline)) }
                }
                @if !summary.is_empty() {
                    p class="card-summary" { (summary) }
                }
            }
        }
    }
}
