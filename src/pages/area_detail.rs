//! Area detail page generation

use maud::{Markup, PreEscaped, html};

use crate::components::cards::trabajo_card;
use crate::components::layout::page_wrapper;
use crate::media::MediaStorage;
use crate::model::{Area, Trabajo};
use crate::richtext::render_md_block;

/// Data container for area detail page generation
pub struct AreaDetailPageData<'a> {
    pub nav_areas: &'a [Area],
    pub area: &'a Area,
    pub trabajos: &'a [Trabajo],
    pub media: &'a MediaStorage,
}

/// Generates an area detail page listing its published works
pub fn generate(data: AreaDetailPageData<'_>) -> Markup {
    let description = render_md_block(&data.area.description);

    page_wrapper(
        &data.area.name,
        data.nav_areas,
        html! {
            header class="page-header" {
                h1 { (data.area.name) }
                @if !description.is_empty() {
                    div class="richtext" { (PreEscaped(description)) }
                }
            }

            @if data.trabajos.is_empty() {
                p class="empty-state" { "Esta área todavía no tiene trabajos publicados." }
            } @else {
                div class="card-row" {
                    @for trabajo in data.trabajos {
                        (trabajo_card(trabajo, &data.area.slug, data.media))
                    }
                }
            }
        },
    )
}
