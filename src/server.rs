//! HTTP server wiring for the portal.
//!
//! Public pages are rendered per request from the store; the only write
//! surface over HTTP is the admin Markdown preview endpoint. The SQLite
//! connection is shared behind a mutex — one portal process, no pool.

mod handlers;
mod preview;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use rusqlite::Connection;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::media::MediaStorage;
use crate::store::StoreError;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
    media: Arc<MediaStorage>,
    richtext_enabled: bool,
    preview_token: Option<Arc<str>>,
}

impl AppState {
    /// Builds the state from an opened connection and configuration.
    pub fn new(conn: Connection, media: MediaStorage, config: &Config) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
            media: Arc::new(media),
            richtext_enabled: !config.richtext_disabled,
            preview_token: config
                .preview_token
                .as_deref()
                .map(|token| Arc::from(token)),
        }
    }

    /// Locks the shared connection for the duration of a handler's
    /// store work. A poisoned lock is recovered: the connection itself
    /// holds no in-flight transaction state across requests.
    pub(crate) fn db(&self) -> MutexGuard<'_, Connection> {
        self.db
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn media(&self) -> &MediaStorage {
        &self.media
    }

    pub(crate) fn richtext_enabled(&self) -> bool {
        self.richtext_enabled
    }

    pub(crate) fn preview_token(&self) -> Option<&str> {
        self.preview_token.as_deref()
    }
}

/// Request handling failure mapped to an HTTP status.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound | Self::Store(StoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "Not found").into_response()
            }
            Self::Store(err) => {
                tracing::error!("store failure: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

/// Builds the portal router.
///
/// Media files are served from the local media root only when the
/// filesystem storage backend is active; a hosted backend serves media
/// from its own URLs.
pub fn router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::home))
        .route("/laboratorio/", get(handlers::laboratorio))
        .route("/areas/", get(handlers::areas))
        .route("/areas/{area_slug}/", get(handlers::area_detail))
        .route("/{area_slug}/{trabajo_slug}/", get(handlers::trabajo_detail))
        .route(
            "/{area_slug}/{trabajo_slug}/documentos/",
            get(handlers::trabajo_documentos),
        )
        .route("/_richtext/preview/", post(preview::richtext_preview))
        .route("/static/portal.css", get(handlers::portal_css));

    if let MediaStorage::Filesystem { root, .. } = state.media.as_ref() {
        router = router.nest_service("/media", ServeDir::new(root));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Binds the address and serves the portal until the process exits.
///
/// # Errors
///
/// Returns an error when the address cannot be bound or the server
/// fails while running.
pub async fn serve(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
