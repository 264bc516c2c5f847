//! Area list page generation

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::model::Area;
use crate::richtext::render_md_block;

/// Generates the area list page
///
/// Area descriptions are Markdown and render as sanitized block HTML.
pub fn generate(areas: &[Area]) -> Markup {
    page_wrapper(
        "Áreas",
        areas,
        html! {
            header class="page-header" {
                h1 { "Áreas" }
            }

            @if areas.is_empty() {
                p class="empty-state" { "Todavía no hay áreas cargadas." }
            } @else {
                div class="area-list" {
                    @for area in areas {
                        section class="area-entry" {
                            h2 {
                                a href=(area.url_path()) { (area.name) }
                            }
                            @let description = render_md_block(&area.description);
                            @if !description.is_empty() {
                                div class="richtext" { (PreEscaped(description)) }
                            }
                        }
                    }
                }
            }
        },
    )
}
