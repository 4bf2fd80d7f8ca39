//! Article list page generation

use maud::{Markup, html};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::assets;
use crate::components::article_list::{article_card, article_list};
use crate::components::layout::{PageFrame, page_wrapper};
use crate::content::ArticleSummary;

/// Characters escaped when a slug becomes a URL path segment.
const SLUG_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Data container for the article list page
pub struct HomePageData<'a> {
    pub site_title: &'a str,
    pub articles: &'a [ArticleSummary],
    pub root: &'a str,
}

/// Generates the article list page
///
/// Lists every article in index order with a link to its page, or an
/// empty state when the index holds no articles.
///
/// # Arguments
///
/// * `data`: Site title, articles and root prefix
///
/// # Returns
///
/// Complete HTML markup for the article list
pub fn generate(data: HomePageData<'_>) -> Markup {
    let frame = PageFrame {
        title: "Articles",
        site_title: data.site_title,
        root: data.root,
        stylesheets: &[assets::SITE_CSS],
        scripts: &[],
    };

    page_wrapper(
        &frame,
        html! {
            main class="home" {
                h1 class="page-title" { "Articles" }
                @if data.articles.is_empty() {
                    p class="empty-state" { "No articles yet" }
                } @else {
                    (article_list(html! {
                        @for article in data.articles {
                            (article_card(&post_href(data.root, &article.slug), article))
                        }
                    }))
                }
            }
        },
    )
}

/// Link target of an article page from a page with the given root prefix.
///
/// The slug is percent-encoded so it reaches the server as the file name
/// the generator wrote.
pub fn post_href(root: &str, slug: &str) -> String {
    format!(
        "{}post/{}.html",
        root,
        utf8_percent_encode(slug, SLUG_ENCODE_SET)
    )
}
