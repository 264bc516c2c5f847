//! Document list components for work pages

use maud::{Markup, html};

use crate::media::MediaStorage;
use crate::model::{DocType, Documento};

/// Renders a titled document section, or nothing when the list is empty
///
/// # Arguments
///
/// * `doc_type`: Category providing the section heading
/// * `documentos`: Documents of that category, already ordered
/// * `media`: Storage backend resolving stored file URLs
pub fn documento_group(doc_type: DocType, documentos: &[Documento], media: &MediaStorage) -> Markup {
    if documentos.is_empty() {
        return html! {};
    }

    html! {
        section class="doc-group" {
            h3 class="doc-group-title" { (doc_type.label()) }
            ul class="doc-list" {
                @for documento in documentos {
                    (documento_row(documento, media))
                }
            }
        }
    }
}

/// Renders a single document link row with a category icon
pub fn documento_row(documento: &Documento, media: &MediaStorage) -> Markup {
    let href = documento.href(media);

    html! {
        li class="doc-item" {
            span class=(format!("doc-icon {}", icon_class(documento.doc_type))) {}
            a href=(href) class="doc-link" target="_blank" rel="noopener noreferrer" {
                (documento.title)
            }
        }
    }
}

/// Returns the CSS icon class for a document category
fn icon_class(doc_type: DocType) -> &'static str {
    match doc_type {
        DocType::Metodologico => "doc-icon-file",
        DocType::Datos => "doc-icon-chart",
        DocType::Otro => "doc-icon-monitor",
    }
}
