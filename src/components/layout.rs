//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;
use super::nav::navbar;
use crate::model::Area;

/// Wraps page content with the standard HTML document structure
///
/// Provides consistent DOCTYPE, html, head, and container structure across
/// all page types. The wrapper handles viewport configuration, charset,
/// stylesheet loading, and the shared navigation bar; the caller provides
/// page-specific body content.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `nav_areas`: Areas listed in the navigation dropdown
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, nav_areas: &[Area], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Catálogo" }
                link rel="stylesheet" href="/static/portal.css";
            }
            body {
                (navbar(nav_areas))
                div class="container" {
                    (body)
                }
                (footer())
            }
        }
    }
}
