//! Work detail page generation

use maud::{Markup, PreEscaped, html};

use crate::components::documents::documento_group;
use crate::components::highlights::highlight_list;
use crate::components::layout::page_wrapper;
use crate::media::MediaStorage;
use crate::model::{Area, DocType, Documento, Highlight, Trabajo};
use crate::richtext::{render_md_block, render_md_inline};
use crate::util::format_date;

/// Data container for work detail page generation
pub struct TrabajoPageData<'a> {
    pub nav_areas: &'a [Area],
    pub area: &'a Area,
    pub trabajo: &'a Trabajo,
    pub highlights: &'a [Highlight],
    pub docs_tech: &'a [Documento],
    pub docs_stats: &'a [Documento],
    pub docs_viewers: &'a [Documento],
    pub media: &'a MediaStorage,
}

/// Generates a work detail page
///
/// Shows the hero image, inline-rendered tagline, block-rendered summary
/// and description, the highlight facts, and documents grouped by
/// category. A link to the standalone document list appears when the work
/// has any document.
///
/// # Arguments
///
/// * `data`: Work detail page data container with all required fields
///
/// # Returns
///
/// Complete HTML markup for the work detail page
pub fn generate(data: TrabajoPageData<'_>) -> Markup {
    let hero = data.trabajo.hero_image(data.media);
    let tagline = render_md_inline(&data.trabajo.tagline);
    let summary = render_md_block(&data.trabajo.summary);
    let description = render_md_block(&data.trabajo.description);
    let has_documents =
        !(data.docs_tech.is_empty() && data.docs_stats.is_empty() && data.docs_viewers.is_empty());

    page_wrapper(
        &data.trabajo.title,
        data.nav_areas,
        html! {
            header class="page-header" {
                nav class="breadcrumb" {
                    a href=(data.area.url_path()) class="breadcrumb-link" { (data.area.name) }
                    span class="breadcrumb-separator" { "/" }
                    span class="breadcrumb-current" { (data.trabajo.title) }
                }
                h1 { (data.trabajo.title) }
                @if !tagline.is_empty() {
                    p class="tagline" { (PreEscaped(tagline)) }
                }
                @if let Some(published_at) = data.trabajo.published_at {
                    p class="published-date" { "Publicado el " (format_date(published_at)) }
                }
            }

            @if !hero.is_empty() {
                figure class="hero-image" {
                    img src=(hero) alt=(data.trabajo.title);
                }
            }

            @if !summary.is_empty() {
                section class="richtext summary" { (PreEscaped(summary)) }
            }

            (highlight_list(data.highlights))

            @if !description.is_empty() {
                section class="richtext description" { (PreEscaped(description)) }
            }

            @if !data.trabajo.app_url.is_empty() {
                p class="app-link" {
                    a href=(data.trabajo.app_url) target="_blank" rel="noopener noreferrer" {
                        "Abrir aplicación"
                    }
                }
            }

            @if has_documents {
                section class="documents" {
                    h2 { "Documentos" }
                    (documento_group(DocType::Metodologico, data.docs_tech, data.media))
                    (documento_group(DocType::Datos, data.docs_stats, data.media))
                    (documento_group(DocType::Otro, data.docs_viewers, data.media))
                    p {
                        a href=(format!("{}documentos/", data.trabajo.url_path(&data.area.slug))) {
                            "Ver todos los documentos"
                        }
                    }
                }
            }
        },
    )
}
