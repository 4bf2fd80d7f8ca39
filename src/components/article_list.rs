//! Article listing components

use maud::{Markup, html};

use crate::content::ArticleSummary;

/// Wraps article cards in list container
///
/// # Arguments
///
/// * `cards`: Markup containing individual article card elements
pub fn article_list(cards: Markup) -> Markup {
    html! {
        div class="article-list" {
            (cards)
        }
    }
}

/// Renders single article card
///
/// Displays title, date, tag and excerpt. Empty metadata fields are
/// omitted rather than rendered as blank badges.
///
/// # Arguments
///
/// * `href`: Link target of the article page
/// * `article`: Article metadata from the index
///
/// # Returns
///
/// Clickable article card
pub fn article_card(href: &str, article: &ArticleSummary) -> Markup {
    html! {
        a href=(href) class="article-card" {
            h2 class="article-title" { (article.display_title()) }
            (article_meta(article))
            @if !article.excerpt.is_empty() {
                p class="article-excerpt" { (article.excerpt) }
            }
        }
    }
}

/// Renders article date and tag line
pub fn article_meta(article: &ArticleSummary) -> Markup {
    html! {
        div class="article-meta" {
            @if !article.date.is_empty() {
                time class="article-date" datetime=(article.date) { (article.date) }
            }
            @if !article.tag.is_empty() {
                span class="article-tag" { (article.tag) }
            }
        }
    }
}
