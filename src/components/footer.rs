//! Page footer component

use maud::{Markup, html};

/// Renders site footer with generator attribution
pub fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            p {
                "Generated by "
                span class="generator" { "inkpost" }
            }
        }
    }
}
