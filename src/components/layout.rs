//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;
use super::nav::site_header;

/// Shared page chrome for every route
pub struct PageFrame<'a> {
    /// Page title text (without site suffix)
    pub title: &'a str,
    /// Site title shown in header and title suffix
    pub site_title: &'a str,
    /// Prefix leading from the page back to the site root
    pub root: &'a str,
    /// Stylesheet paths relative to the site root
    pub stylesheets: &'a [&'a str],
    /// Script paths relative to the site root
    pub scripts: &'a [&'a str],
}

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, head, header and footer across all pages.
/// Asset paths are joined onto the frame's root prefix so the same markup
/// works at any page depth.
///
/// # Arguments
///
/// * `frame`: Title, site title, root prefix and assets
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(frame: &PageFrame<'_>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (frame.title) " - " (frame.site_title) }
                @for stylesheet in frame.stylesheets {
                    link rel="stylesheet" href=(format!("{}{}", frame.root, stylesheet));
                }
            }
            body {
                (site_header(frame.site_title, frame.root))
                div class="container" {
                    (body)
                }
                (footer())
                @for script in frame.scripts {
                    script src=(format!("{}{}", frame.root, script)) {}
                }
            }
        }
    }
}
