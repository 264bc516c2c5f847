//! Site navigation bar component

use maud::{Markup, html};

use crate::model::Area;

/// Renders the shared navigation bar
///
/// Every page receives the full area list so the "Estadísticas" dropdown
/// stays in sync with the catalog without per-page wiring.
///
/// # Arguments
///
/// * `areas`: All areas, already ordered for display
///
/// # Returns
///
/// Navigation bar markup with brand link and area dropdown
pub fn navbar(areas: &[Area]) -> Markup {
    html! {
        nav class="navbar" {
            a href="/" class="navbar-brand" { "Catálogo" }
            div class="navbar-links" {
                a href="/" class="nav-link" { "Inicio" }
                div class="nav-dropdown" {
                    a href="/areas/" class="nav-link" { "Estadísticas" }
                    @if !areas.is_empty() {
                        div class="nav-dropdown-menu" {
                            @for area in areas {
                                a class="nav-dropdown-item" href=(area.url_path()) { (area.name) }
                            }
                        }
                    }
                }
                a href="/laboratorio/" class="nav-link" { "Laboratorio" }
            }
        }
    }
}
