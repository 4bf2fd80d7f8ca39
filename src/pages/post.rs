//! Article page generation

use maud::{Markup, PreEscaped, html};

use crate::assets;
use crate::components::article_list::article_meta;
use crate::components::layout::{PageFrame, page_wrapper};
use crate::components::nav::back_link;
use crate::content::ArticleSummary;

/// Data container for a single article page
pub struct PostPageData<'a> {
    pub site_title: &'a str,
    pub slug: &'a str,
    /// Index entry for the article, when the index lists it
    pub summary: Option<&'a ArticleSummary>,
    /// Rendered markdown body
    pub body_html: &'a str,
    pub root: &'a str,
}

/// Generates an article page with rendered markdown
///
/// Uses the index title and metadata when available and falls back to the
/// slug as title otherwise. Loads the markdown and highlight theme
/// stylesheets and the code block script.
///
/// # Arguments
///
/// * `data`: Article metadata, rendered body and root prefix
///
/// # Returns
///
/// Complete HTML markup for the article
pub fn generate(data: PostPageData<'_>) -> Markup {
    let title = data.summary.map_or(data.slug, ArticleSummary::display_title);
    let frame = PageFrame {
        title,
        site_title: data.site_title,
        root: data.root,
        stylesheets: &[assets::SITE_CSS, assets::POST_CSS, assets::THEME_CSS],
        scripts: &[assets::CODE_BLOCK_JS],
    };

    page_wrapper(
        &frame,
        html! {
            (back_link(data.root))
            article class="post" data-slug=(data.slug) {
                header class="post-header" {
                    h1 class="post-title" { (title) }
                    @if let Some(summary) = data.summary {
                        (article_meta(summary))
                    }
                }
                div class="markdown-content" {
                    (PreEscaped(data.body_html))
                }
            }
        },
    )
}
