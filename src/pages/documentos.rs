//! Standalone document list page generation

use maud::{Markup, html};

use crate::components::documents::documento_row;
use crate::components::layout::page_wrapper;
use crate::media::MediaStorage;
use crate::model::{Area, Documento, Trabajo};

/// Data container for the document list page
pub struct DocumentosPageData<'a> {
    pub nav_areas: &'a [Area],
    pub area: &'a Area,
    pub trabajo: &'a Trabajo,
    pub documentos: &'a [Documento],
    pub media: &'a MediaStorage,
}

/// Generates the flat document list of a work, in stored order
pub fn generate(data: DocumentosPageData<'_>) -> Markup {
    page_wrapper(
        &format!("Documentos de {}", data.trabajo.title),
        data.nav_areas,
        html! {
            header class="page-header" {
                nav class="breadcrumb" {
                    a href=(data.area.url_path()) class="breadcrumb-link" { (data.area.name) }
                    span class="breadcrumb-separator" { "/" }
                    a href=(data.trabajo.url_path(&data.area.slug)) class="breadcrumb-link" {
                        (data.trabajo.title)
                    }
                    span class="breadcrumb-separator" { "/" }
                    span class="breadcrumb-current" { "Documentos" }
                }
                h1 { "Documentos" }
            }

            @if data.documentos.is_empty() {
                p class="empty-state" { "Este trabajo todavía no tiene documentos." }
            } @else {
                ul class="doc-list" {
                    @for documento in data.documentos {
                        (documento_row(documento, data.media))
                    }
                }
            }
        },
    )
}
