//! Public page handlers.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};

use super::{AppState, PortalError};
use crate::assets::PORTAL_CSS;
use crate::model::{Area, DocType, Documento, Trabajo};
use crate::pages;
use crate::store::{AreaStore, DocumentoStore, HighlightStore, TrabajoStore};

/// Home: all areas plus the three most recently published works.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, PortalError> {
    let (areas, latest) = {
        let conn = state.db();
        let areas = AreaStore::new(&conn).list()?;
        let latest = TrabajoStore::new(&conn).latest_published(3)?;
        (areas, latest)
    };

    let markup = pages::home::generate(pages::home::HomePageData {
        areas: &areas,
        latest: &latest,
        media: state.media(),
    });
    Ok(Html(markup.into_string()))
}

/// Static lab page.
pub async fn laboratorio(State(state): State<AppState>) -> Result<Html<String>, PortalError> {
    let areas = {
        let conn = state.db();
        AreaStore::new(&conn).list()?
    };
    Ok(Html(pages::laboratorio::generate(&areas).into_string()))
}

/// Area list.
pub async fn areas(State(state): State<AppState>) -> Result<Html<String>, PortalError> {
    let areas = {
        let conn = state.db();
        AreaStore::new(&conn).list()?
    };
    Ok(Html(pages::areas::generate(&areas).into_string()))
}

/// Area detail with its published works.
pub async fn area_detail(
    State(state): State<AppState>,
    Path(area_slug): Path<String>,
) -> Result<Html<String>, PortalError> {
    let (nav_areas, area, trabajos) = {
        let conn = state.db();
        let nav_areas = AreaStore::new(&conn).list()?;
        let area = AreaStore::new(&conn)
            .find_by_slug(&area_slug)?
            .ok_or(PortalError::NotFound)?;
        let trabajos = TrabajoStore::new(&conn).published_for_area(area.id)?;
        (nav_areas, area, trabajos)
    };

    let markup = pages::area_detail::generate(pages::area_detail::AreaDetailPageData {
        nav_areas: &nav_areas,
        area: &area,
        trabajos: &trabajos,
        media: state.media(),
    });
    Ok(Html(markup.into_string()))
}

/// Work detail with highlights and documents grouped by category.
pub async fn trabajo_detail(
    State(state): State<AppState>,
    Path((area_slug, trabajo_slug)): Path<(String, String)>,
) -> Result<Html<String>, PortalError> {
    let (nav_areas, area, trabajo, highlights, documentos) =
        load_trabajo(&state, &area_slug, &trabajo_slug, true)?;

    let (docs_tech, docs_stats, docs_viewers) = group_documentos(&documentos);

    let markup = pages::trabajo_detail::generate(pages::trabajo_detail::TrabajoPageData {
        nav_areas: &nav_areas,
        area: &area,
        trabajo: &trabajo,
        highlights: &highlights,
        docs_tech: &docs_tech,
        docs_stats: &docs_stats,
        docs_viewers: &docs_viewers,
        media: state.media(),
    });
    Ok(Html(markup.into_string()))
}

/// Flat document list of a work.
pub async fn trabajo_documentos(
    State(state): State<AppState>,
    Path((area_slug, trabajo_slug)): Path<(String, String)>,
) -> Result<Html<String>, PortalError> {
    let (nav_areas, area, trabajo, _, documentos) =
        load_trabajo(&state, &area_slug, &trabajo_slug, false)?;

    let markup = pages::documentos::generate(pages::documentos::DocumentosPageData {
        nav_areas: &nav_areas,
        area: &area,
        trabajo: &trabajo,
        documentos: &documentos,
        media: state.media(),
    });
    Ok(Html(markup.into_string()))
}

/// Bundled stylesheet.
pub async fn portal_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], PORTAL_CSS)
}

type TrabajoPageRecords = (
    Vec<Area>,
    Area,
    Trabajo,
    Vec<crate::model::Highlight>,
    Vec<Documento>,
);

fn load_trabajo(
    state: &AppState,
    area_slug: &str,
    trabajo_slug: &str,
    with_highlights: bool,
) -> Result<TrabajoPageRecords, PortalError> {
    let conn = state.db();

    let nav_areas = AreaStore::new(&conn).list()?;
    let area = AreaStore::new(&conn)
        .find_by_slug(area_slug)?
        .ok_or(PortalError::NotFound)?;
    let trabajo = TrabajoStore::new(&conn)
        .find_by_slugs(area_slug, trabajo_slug)?
        .ok_or(PortalError::NotFound)?;

    let highlights = if with_highlights {
        HighlightStore::new(&conn).for_trabajo(trabajo.id)?
    } else {
        Vec::new()
    };
    let documentos = DocumentoStore::new(&conn).for_trabajo(trabajo.id)?;

    Ok((nav_areas, area, trabajo, highlights, documentos))
}

fn group_documentos(documentos: &[Documento]) -> (Vec<Documento>, Vec<Documento>, Vec<Documento>) {
    let of_type = |doc_type: DocType| {
        documentos
            .iter()
            .filter(|doc| doc.doc_type == doc_type)
            .cloned()
            .collect::<Vec<_>>()
    };
    (
        of_type(DocType::Metodologico),
        of_type(DocType::Datos),
        of_type(DocType::Otro),
    )
}
