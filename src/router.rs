//! URL routing for the blog.
//!
//! Three routes exist under a fixed base path: the article list, a single
//! article addressed by slug, and a catch-all not-found route.

/// Default base path the site is served under.
pub const DEFAULT_BASE_PATH: &str = "/blog/";

/// A resolved blog route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Article list at the base path
    Home,
    /// Single article at `post/{slug}`
    Post { slug: String },
    /// Any other path
    NotFound { path: String },
}

impl Route {
    /// File written for this route by the static generator.
    ///
    /// Paths are relative to the output directory.
    pub fn output_path(&self) -> String {
        match self {
            Route::Home => "index.html".to_string(),
            Route::Post { slug } => format!("post/{}.html", slug),
            Route::NotFound { .. } => "404.html".to_string(),
        }
    }
}

/// Maps URL paths to routes under a base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    base: String,
}

impl Router {
    /// Creates router for the given base path.
    ///
    /// The base is normalized to start and end with `/`, so `blog`,
    /// `/blog` and `/blog/` are equivalent.
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim().trim_matches('/');
        let base = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{}/", trimmed)
        };

        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Resolves a URL path to a route.
    ///
    /// Query strings and fragments are ignored. The base path without its
    /// trailing slash resolves to the article list. A post slug must be a
    /// single non-empty segment, optionally followed by `/` or `.html`.
    /// Anything else, including paths outside the base, is `NotFound`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inkpost::{Route, Router};
    ///
    /// let router = Router::new("/blog/");
    /// assert_eq!(router.resolve("/blog/"), Route::Home);
    /// assert_eq!(
    ///     router.resolve("/blog/post/hello"),
    ///     Route::Post { slug: "hello".to_string() }
    /// );
    /// ```
    pub fn resolve(&self, path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let not_found = || Route::NotFound {
            path: path.to_string(),
        };

        let rest = if let Some(rest) = path.strip_prefix(self.base.as_str()) {
            rest
        } else if path == self.base.trim_end_matches('/') {
            ""
        } else {
            return not_found();
        };

        if rest.is_empty() || rest == "index.html" {
            return Route::Home;
        }

        let Some(slug) = rest.strip_prefix("post/") else {
            return not_found();
        };

        let slug = slug
            .strip_suffix('/')
            .or_else(|| slug.strip_suffix(".html"))
            .unwrap_or(slug);

        if slug.is_empty() || slug.contains('/') {
            return not_found();
        }

        Route::Post {
            slug: slug.to_string(),
        }
    }

    /// Prefix that leads from a route's generated page back to the site root.
    ///
    /// Generated pages link relatively so the output works from any mount
    /// point, except the not-found page which may be served at any depth
    /// and therefore links through the absolute base path.
    pub fn root_prefix(&self, route: &Route) -> String {
        match route {
            Route::Home => String::new(),
            Route::Post { .. } => "../".to_string(),
            Route::NotFound { .. } => self.base.clone(),
        }
    }

    /// Absolute URL of a route under the base path.
    pub fn url_for(&self, route: &Route) -> String {
        match route {
            Route::Home => self.base.clone(),
            Route::Post { slug } => format!("{}post/{}", self.base, slug),
            Route::NotFound { path } => path.clone(),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH)
    }
}
