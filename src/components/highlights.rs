//! Highlight list component for work detail pages

use maud::{Markup, html};

use crate::model::Highlight;

/// Renders the labeled facts of a work, or nothing when there are none
pub fn highlight_list(highlights: &[Highlight]) -> Markup {
    if highlights.is_empty() {
        return html! {};
    }

    html! {
        section class="highlights" {
            ul class="highlight-list" {
                @for highlight in highlights {
                    li class="highlight-item" {
                        span class="highlight-label" { (highlight.label) }
                        @if !highlight.value.is_empty() {
                            span class="highlight-value" { (highlight.value) }
                        }
                    }
                }
            }
        }
    }
}
