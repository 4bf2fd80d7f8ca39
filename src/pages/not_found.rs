//! Not found page generation

use maud::{Markup, html};

use crate::assets;
use crate::components::layout::{PageFrame, page_wrapper};
use crate::components::nav::back_link;

/// Generates the not found page
///
/// # Arguments
///
/// * `site_title`: Site title text
/// * `path`: Requested path, shown when known
/// * `root`: Prefix leading back to the site root
pub fn generate(site_title: &str, path: Option<&str>, root: &str) -> Markup {
    let frame = PageFrame {
        title: "Not Found",
        site_title,
        root,
        stylesheets: &[assets::SITE_CSS],
        scripts: &[],
    };

    page_wrapper(
        &frame,
        html! {
            main class="not-found" {
                h1 class="page-title" { "404" }
                p { "The page you are looking for does not exist." }
                @if let Some(path) = path {
                    p { code class="missing-path" { (path) } }
                }
                (back_link(root))
            }
        },
    )
}
