//! Integration tests for the HTTP server.
//!
//! Spawns the portal on an ephemeral port and exercises the public pages
//! and the Markdown preview endpoint over real HTTP.

mod common;

use catalogo::{
    AppState, AreaStore, Config, DocType, DocumentoStore, HighlightStore, MediaStorage, Status,
    TrabajoStore, open_db_in_memory,
};
use common::{new_area, new_documento, new_highlight, new_trabajo, published_trabajo, test_config};
use rusqlite::Connection;
use serde_json::{Value, json};

/// Seeds one area with a published and a draft work, plus attachments.
fn seed(conn: &Connection) {
    let area = AreaStore::new(conn)
        .insert(&new_area("Economía", "economia", 0))
        .expect("seed area");

    let mut published = published_trabajo(area.id, "Censo Nacional", "censo", "2024-03-01T10:00:00Z");
    published.tagline = "Resultados *preliminares*".to_string();
    published.summary = "Resumen del **censo** con sus cifras clave.".to_string();
    let published = TrabajoStore::new(conn).insert(&published).expect("seed published");

    TrabajoStore::new(conn)
        .insert(&new_trabajo(area.id, "Trabajo Borrador", "borrador", Status::Draft))
        .expect("seed draft");

    HighlightStore::new(conn)
        .insert(&new_highlight(published.id, "Cobertura", "nacional", 0))
        .expect("seed highlight");
    DocumentoStore::new(conn)
        .insert(&new_documento(
            published.id,
            "Informe metodológico",
            DocType::Metodologico,
            "https://example.com/informe.pdf",
        ))
        .expect("seed documento");
    DocumentoStore::new(conn)
        .insert(&new_documento(
            published.id,
            "Cuadros estadísticos",
            DocType::Datos,
            "https://example.com/cuadros.xlsx",
        ))
        .expect("seed documento");
}

/// Spawns the portal with the given configuration and returns its base URL.
async fn spawn_portal(config: Config) -> String {
    let conn = open_db_in_memory().expect("open db");
    seed(&conn);

    let media = MediaStorage::Hosted {
        base_url: "https://media.example.com".to_string(),
    };
    let state = AppState::new(conn, media, &config);
    let app = catalogo::router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_home_page_lists_areas_and_latest_works() {
    // Arrange
    let base = spawn_portal(test_config()).await;

    // Act
    let response = reqwest::get(format!("{base}/")).await.expect("request");

    // Assert
    assert_eq!(response.status(), 200);
    let body = response.text().await.expect("body");
    assert!(body.contains("Economía"), "Area name on home: {}", body);
    assert!(body.contains("Censo Nacional"), "Latest work on home: {}", body);
    assert!(
        !body.contains("Trabajo Borrador"),
        "Drafts must not appear on home"
    );
}

#[tokio::test]
async fn test_area_detail_lists_published_only() {
    // Arrange
    let base = spawn_portal(test_config()).await;

    // Act
    let response = reqwest::get(format!("{base}/areas/economia/"))
        .await
        .expect("request");

    // Assert
    assert_eq!(response.status(), 200);
    let body = response.text().await.expect("body");
    assert!(body.contains("Censo Nacional"), "Published listed: {}", body);
    assert!(
        !body.contains("Trabajo Borrador"),
        "Draft must not be listed: {}",
        body
    );
}

#[tokio::test]
async fn test_unknown_slugs_return_404() {
    let base = spawn_portal(test_config()).await;

    let response = reqwest::get(format!("{base}/areas/nope/")).await.expect("request");
    assert_eq!(response.status(), 404);

    let response = reqwest::get(format!("{base}/economia/nope/")).await.expect("request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_trabajo_detail_renders_rich_content() {
    // Arrange
    let base = spawn_portal(test_config()).await;

    // Act
    let response = reqwest::get(format!("{base}/economia/censo/"))
        .await
        .expect("request");

    // Assert
    assert_eq!(response.status(), 200);
    let body = response.text().await.expect("body");
    assert!(
        body.contains("<em>preliminares</em>"),
        "Tagline renders inline Markdown: {}",
        body
    );
    assert!(
        body.contains("<strong>censo</strong>"),
        "Summary renders block Markdown: {}",
        body
    );
    assert!(body.contains("Cobertura"), "Highlight label shown: {}", body);
    assert!(
        body.contains("Technical document"),
        "Document group heading shown: {}",
        body
    );
    assert!(
        body.contains("Statistics and reports"),
        "Second group heading shown: {}",
        body
    );
}

#[tokio::test]
async fn test_draft_remains_reachable_by_direct_url() {
    let base = spawn_portal(test_config()).await;

    let response = reqwest::get(format!("{base}/economia/borrador/"))
        .await
        .expect("request");

    assert_eq!(response.status(), 200);
    let body = response.text().await.expect("body");
    assert!(body.contains("Trabajo Borrador"), "Draft detail served: {}", body);
}

#[tokio::test]
async fn test_documentos_page_lists_all_documents() {
    let base = spawn_portal(test_config()).await;

    let response = reqwest::get(format!("{base}/economia/censo/documentos/"))
        .await
        .expect("request");

    assert_eq!(response.status(), 200);
    let body = response.text().await.expect("body");
    assert!(body.contains("Informe metodológico"), "First doc: {}", body);
    assert!(body.contains("Cuadros estadísticos"), "Second doc: {}", body);
    assert!(
        body.contains("href=\"https://example.com/informe.pdf\""),
        "Doc link target: {}",
        body
    );
}

#[tokio::test]
async fn test_preview_renders_block_mode_from_json() {
    // Arrange
    let base = spawn_portal(test_config()).await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .post(format!("{base}/_richtext/preview/"))
        .json(&json!({"text": "**negrita**", "mode": "block"}))
        .send()
        .await
        .expect("request");

    // Assert
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["enabled"], Value::Bool(true));
    let html = body["html"].as_str().expect("html string");
    assert_eq!(html, "<p><strong>negrita</strong></p>");
}

#[tokio::test]
async fn test_preview_renders_inline_mode_from_form() {
    // Arrange
    let base = spawn_portal(test_config()).await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .post(format!("{base}/_richtext/preview/"))
        .form(&[("text", "*cursiva*"), ("mode", "inline")])
        .send()
        .await
        .expect("request");

    // Assert
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["html"].as_str(), Some("<em>cursiva</em>"));
}

#[tokio::test]
async fn test_preview_defaults_to_block_mode() {
    let base = spawn_portal(test_config()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/_richtext/preview/"))
        .json(&json!({"text": "hola"}))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["html"].as_str(), Some("<p>hola</p>"));
}

#[tokio::test]
async fn test_preview_rejects_invalid_mode() {
    let base = spawn_portal(test_config()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/_richtext/preview/"))
        .json(&json!({"text": "hola", "mode": "banner"}))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_preview_sanitizes_script_input() {
    let base = spawn_portal(test_config()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/_richtext/preview/"))
        .json(&json!({"text": "<script>alert('x')</script>hola", "mode": "block"}))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("json body");
    let html = body["html"].as_str().expect("html string");
    assert!(!html.contains("<script>"), "Script stripped: {}", html);
    assert!(html.contains("hola"), "Safe text kept: {}", html);
}

#[tokio::test]
async fn test_preview_disabled_by_configuration() {
    // Arrange
    let mut config = test_config();
    config.richtext_disabled = true;
    let base = spawn_portal(config).await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .post(format!("{base}/_richtext/preview/"))
        .json(&json!({"text": "**negrita**", "mode": "block"}))
        .send()
        .await
        .expect("request");

    // Assert
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["enabled"], Value::Bool(false));
    assert_eq!(body["html"].as_str(), Some(""));
}

#[tokio::test]
async fn test_preview_requires_configured_token() {
    // Arrange
    let mut config = test_config();
    config.preview_token = Some("secreto".to_string());
    let base = spawn_portal(config).await;
    let client = reqwest::Client::new();

    // Act: missing token is rejected
    let response = client
        .post(format!("{base}/_richtext/preview/"))
        .json(&json!({"text": "hola"}))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 403);

    // Matching token is accepted
    let response = client
        .post(format!("{base}/_richtext/preview/"))
        .header("X-Preview-Token", "secreto")
        .json(&json!({"text": "hola"}))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_stylesheet_is_served() {
    let base = spawn_portal(test_config()).await;

    let response = reqwest::get(format!("{base}/static/portal.css"))
        .await
        .expect("request");

    assert_eq!(response.status(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/css"), "Got {content_type}");
    let body = response.text().await.expect("body");
    assert!(body.contains(".navbar"), "Stylesheet content served");
}
