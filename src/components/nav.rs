//! Site header and navigation links

use maud::{Markup, html};

/// Renders site header linking back to the article list
///
/// # Arguments
///
/// * `site_title`: Site title text
/// * `root`: Prefix leading from the current page to the site root
pub fn site_header(site_title: &str, root: &str) -> Markup {
    html! {
        header class="site-header" {
            a href=(home_href(root)) class="site-title" { (site_title) }
        }
    }
}

/// Renders link back to the article list
pub fn back_link(root: &str) -> Markup {
    html! {
        a href=(home_href(root)) class="back-link" { "← All articles" }
    }
}

/// Link target of the article list from a page with the given root prefix.
///
/// An empty root means the page sits next to `index.html`.
pub fn home_href(root: &str) -> String {
    if root.is_empty() {
        "./".to_string()
    } else {
        root.to_string()
    }
}
