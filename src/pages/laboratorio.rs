//! Lab page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::model::Area;

/// Generates the static lab page
pub fn generate(nav_areas: &[Area]) -> Markup {
    page_wrapper(
        "Laboratorio",
        nav_areas,
        html! {
            header class="page-header" {
                h1 { "Laboratorio" }
            }
            section class="lab-intro" {
                p {
                    "Espacio de trabajos experimentales y visualizaciones en "
                    "desarrollo. Los contenidos de esta sección pueden cambiar "
                    "sin aviso."
                }
            }
        },
    )
}
