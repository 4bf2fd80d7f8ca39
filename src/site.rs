//! Route rendering and static site generation.

use anyhow::{Context, Result};
use maud::Markup;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::assets::write_assets;
use crate::content::{ArticleSummary, ContentClient};
use crate::markdown::MarkdownRenderer;
use crate::pages;
use crate::router::{Route, Router};

/// Outcome of a static site generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Articles listed in the index
    pub listed: usize,
    /// Article pages written
    pub generated: usize,
    /// Slugs whose body could not be fetched
    pub skipped: Vec<String>,
}

/// The blog: content source, renderer and router bound together.
///
/// Pages are produced either one route at a time with
/// [`Site::render_route`] or all at once with [`Site::generate`].
pub struct Site<'a> {
    content: ContentClient,
    renderer: MarkdownRenderer<'a>,
    router: Router,
    title: String,
    theme: String,
}

impl<'a> Site<'a> {
    /// Creates site from its collaborators.
    ///
    /// # Arguments
    ///
    /// * `content`: Client for the article index and bodies
    /// * `router`: Router carrying the base path
    /// * `title`: Site title shown in page headers
    /// * `theme`: Syntect theme for highlight colors
    pub fn new(
        content: ContentClient,
        router: Router,
        title: impl Into<String>,
        theme: impl Into<String>,
    ) -> Self {
        Self {
            content,
            renderer: MarkdownRenderer::new(),
            router,
            title: title.into(),
            theme: theme.into(),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Resolves a URL path and renders the page for it.
    ///
    /// Fetches on every call. Fetch failures are logged by the content
    /// client: an unreachable index renders as an empty article list and a
    /// missing article renders as the not found page. Links go through the
    /// absolute base path, since the requested path may carry a trailing
    /// slash or omit the base's own.
    ///
    /// # Returns
    ///
    /// The resolved route and the page markup. The route is `NotFound` when
    /// a post could not be fetched.
    pub async fn render_route(&self, path: &str) -> (Route, Markup) {
        let route = self.router.resolve(path);
        let root = self.router.base();

        let page = match &route {
            Route::Home => {
                let articles = self.content.list_articles().await;
                self.home_page(&articles, root)
            }
            Route::Post { slug } => {
                let Some(body) = self.content.get_article(slug).await else {
                    let missing = Route::NotFound {
                        path: self.router.url_for(&route),
                    };
                    let page = self.not_found_page(&missing, root);
                    return (missing, page);
                };

                let articles = self.content.list_articles().await;
                let summary = articles.iter().find(|a| &a.slug == slug);
                self.post_page(slug, summary, &body, root)
            }
            Route::NotFound { .. } => self.not_found_page(&route, root),
        };

        (route, page)
    }

    /// Generates the whole site into `output`.
    ///
    /// Writes one page per article, the article list, the not found page
    /// and the assets. Articles whose body cannot be fetched are skipped,
    /// reported, and left out of the article list.
    ///
    /// # Errors
    ///
    /// Returns error if the article index cannot be fetched, or if any
    /// file cannot be written
    pub async fn generate(&self, output: &Path) -> Result<GenerateReport> {
        fs::create_dir_all(output).context("Failed to create output directory")?;

        let articles = self.content.fetch_index().await.with_context(|| {
            format!(
                "Failed to fetch article index from {}",
                self.content.base_url()
            )
        })?;

        let mut report = GenerateReport {
            listed: articles.len(),
            ..GenerateReport::default()
        };
        let mut published = Vec::with_capacity(articles.len());

        for article in articles {
            let body = match self.content.fetch_article(&article.slug).await {
                Ok(body) => body,
                Err(e) => {
                    warn!(slug = %article.slug, error = %e, "Skipping article");
                    report.skipped.push(article.slug);
                    continue;
                }
            };

            let route = Route::Post {
                slug: article.slug.clone(),
            };
            let root = self.router.root_prefix(&route);
            let page = self.post_page(&article.slug, Some(&article), &body, &root);
            write_page(output, &route, page)?;
            report.generated += 1;
            published.push(article);
        }

        let home = Route::Home;
        let root = self.router.root_prefix(&home);
        write_page(output, &home, self.home_page(&published, &root))?;

        let missing = Route::NotFound {
            path: String::new(),
        };
        let root = self.router.root_prefix(&missing);
        write_page(output, &missing, self.not_found_page(&missing, &root))?;

        write_assets(output, &self.theme)?;

        Ok(report)
    }

    fn home_page(&self, articles: &[ArticleSummary], root: &str) -> Markup {
        pages::home::generate(pages::home::HomePageData {
            site_title: &self.title,
            articles,
            root,
        })
    }

    fn post_page(
        &self,
        slug: &str,
        summary: Option<&ArticleSummary>,
        markdown: &str,
        root: &str,
    ) -> Markup {
        let body_html = self.renderer.render(markdown);

        pages::post::generate(pages::post::PostPageData {
            site_title: &self.title,
            slug,
            summary,
            body_html: &body_html,
            root,
        })
    }

    fn not_found_page(&self, route: &Route, root: &str) -> Markup {
        let path = match route {
            Route::NotFound { path } if !path.is_empty() => Some(path.as_str()),
            _ => None,
        };

        pages::not_found::generate(&self.title, path, root)
    }
}

/// Writes a page to the route's output path, creating parent directories.
fn write_page(output: &Path, route: &Route, page: Markup) -> Result<()> {
    let path = output.join(route.output_path());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(&path, page.into_string())
        .with_context(|| format!("Failed to write page to {}", path.display()))?;

    info!(path = %path.display(), "Generated");
    Ok(())
}
