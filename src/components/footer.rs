//! Page footer component

use maud::{Markup, html};

/// Renders the shared page footer
pub fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            p { "Catálogo de trabajos y estadísticas" }
        }
    }
}
