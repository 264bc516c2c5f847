//! Home page generation

use maud::{Markup, PreEscaped, html};

use crate::components::cards::trabajo_card;
use crate::components::layout::page_wrapper;
use crate::media::MediaStorage;
use crate::model::{Area, Trabajo};
use crate::richtext::render_md_text;
use crate::util::truncate_chars;

/// Maximum characters of area description shown on the home grid.
const AREA_BLURB_CHARS: usize = 120;

/// Data container for home page generation
pub struct HomePageData<'a> {
    pub areas: &'a [Area],
    pub latest: &'a [(Trabajo, String)],
    pub media: &'a MediaStorage,
}

/// Generates the home page with the area grid and latest published works
///
/// # Arguments
///
/// * `data`: Home page data container
///
/// # Returns
///
/// Complete HTML markup for the home page
pub fn generate(data: HomePageData<'_>) -> Markup {
    page_wrapper(
        "Inicio",
        data.areas,
        html! {
            section class="hero" {
                h1 { "Catálogo de trabajos" }
                p class="hero-lead" {
                    "Áreas temáticas, trabajos publicados y sus documentos."
                }
            }

            section class="area-grid" {
                h2 { "Áreas" }
                @if data.areas.is_empty() {
                    p class="empty-state" { "Todavía no hay áreas cargadas." }
                } @else {
                    div class="grid" {
                        @for area in data.areas {
                            a href=(area.url_path()) class="area-tile" {
                                h3 { (area.name) }
                                @let blurb = truncate_chars(&render_md_text(&area.description), AREA_BLURB_CHARS);
                                @if !blurb.is_empty() {
                                    p { (PreEscaped(blurb)) }
                                }
                            }
                        }
                    }
                }
            }

            @if !data.latest.is_empty() {
                section class="latest" {
                    h2 { "Últimos trabajos" }
                    div class="card-row" {
                        @for (trabajo, area_slug) in data.latest {
                            (trabajo_card(trabajo, area_slug, data.media))
                        }
                    }
                }
            }
        },
    )
}
