//! HTTP client for the article index and article bodies.

use reqwest::{Client as HttpClient, Url};
use tracing::{debug, error};

use super::{ArticleSummary, FetchError};

/// Name of the article index resource inside the content source.
const INDEX_RESOURCE: &str = "index.json";

/// Fetches article metadata and Markdown bodies from a static content source.
///
/// The source is a base URL such as `https://example.com/blog/articles/`
/// under which `index.json` and `<slug>.md` live. Every call issues a fresh
/// request: nothing is cached, retried or timed out.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: HttpClient,
    base: Url,
}

impl ContentClient {
    /// Creates a client for the given content source URL.
    ///
    /// A trailing slash is appended when missing so resource names resolve
    /// inside the source directory rather than next to it.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` if `source` is not an absolute URL.
    pub fn new(source: &str) -> Result<Self, FetchError> {
        let mut normalized = source.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }

        let base = Url::parse(&normalized)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", source, e)))?;

        Ok(Self {
            http: HttpClient::new(),
            base,
        })
    }

    /// Base URL of the content source, always ending in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Lists all articles, returning an empty list on any failure.
    ///
    /// Failures are logged. Callers that must tell "no articles" apart from
    /// "index unavailable" should use [`ContentClient::fetch_index`].
    pub async fn list_articles(&self) -> Vec<ArticleSummary> {
        self.fetch_index().await.unwrap_or_else(|e| {
            error!(error = %e, "Error fetching articles");
            Vec::new()
        })
    }

    /// Fetches the Markdown body of one article, returning `None` on any failure.
    ///
    /// Failures are logged. See [`ContentClient::fetch_article`] for the
    /// error-reporting variant.
    pub async fn get_article(&self, slug: &str) -> Option<String> {
        match self.fetch_article(slug).await {
            Ok(body) => Some(body),
            Err(e) => {
                error!(slug, error = %e, "Error fetching article");
                None
            }
        }
    }

    /// Fetches and parses the article index.
    ///
    /// # Returns
    ///
    /// Article summaries in index order
    ///
    /// # Errors
    ///
    /// - `FetchError::Transport`: connection or body read failed
    /// - `FetchError::Status`: index answered with a non-success status
    /// - `FetchError::Parse`: index is not a JSON array of article records
    pub async fn fetch_index(&self) -> Result<Vec<ArticleSummary>, FetchError> {
        let url = self.resource_url(INDEX_RESOURCE)?;
        let body = self.get_text(url).await?;
        let articles = ArticleSummary::parse_index(&body)?;

        debug!(count = articles.len(), "Fetched article index");
        Ok(articles)
    }

    /// Fetches the raw Markdown body of an article.
    ///
    /// # Errors
    ///
    /// - `FetchError::InvalidSlug`: slug is empty or would leave the source
    ///   directory; no request is made
    /// - `FetchError::Transport`: connection or body read failed
    /// - `FetchError::Status`: article answered with a non-success status
    pub async fn fetch_article(&self, slug: &str) -> Result<String, FetchError> {
        validate_slug(slug)?;
        let url = self.resource_url(&format!("{}.md", slug))?;
        self.get_text(url).await
    }

    /// URL of a resource inside the source directory.
    ///
    /// `name` is appended as a single percent-encoded path segment, so it
    /// can never change the scheme, host or directory of the source.
    fn resource_url(&self, name: &str) -> Result<Url, FetchError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                FetchError::InvalidUrl(format!("{} cannot hold resource paths", self.base))
            })?
            .pop_if_empty()
            .push(name);
        Ok(url)
    }

    async fn get_text(&self, url: Url) -> Result<String, FetchError> {
        debug!(%url, "GET");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}

/// Rejects slugs that cannot name a single file in the source directory.
fn validate_slug(slug: &str) -> Result<(), FetchError> {
    let invalid = slug.is_empty()
        || slug.contains("..")
        || slug.contains(['/', '\\', '?', '#']);

    if invalid {
        return Err(FetchError::InvalidSlug(slug.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ContentClient {
        ContentClient::new(&format!("{}/blog/articles", server.uri()))
            .expect("Mock server URI should be valid")
    }

    #[test]
    fn test_new_appends_trailing_slash() {
        // Arrange & Act
        let client = ContentClient::new("https://example.com/blog/articles").unwrap();

        // Assert
        assert_eq!(
            client.base_url().as_str(),
            "https://example.com/blog/articles/"
        );
    }

    #[test]
    fn test_new_rejects_relative_url() {
        // Arrange & Act
        let result = ContentClient::new("blog/articles");

        // Assert
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("hello-world").is_ok());
        assert!(validate_slug("你好").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("../secret").is_err());
        assert!(validate_slug("nested/post").is_err());
        assert!(validate_slug("back\\slash").is_err());
        assert!(validate_slug("query?x=1").is_err());
        assert!(validate_slug("frag#x").is_err());
    }

    #[test]
    fn test_resource_url_stays_in_source() {
        // Arrange
        let client = ContentClient::new("http://127.0.0.1:9/blog/articles/").unwrap();

        // Act
        let scheme_like = client.resource_url("https:evil.example.md").unwrap();
        let spaced = client.resource_url("my post.md").unwrap();
        let index = client.resource_url(INDEX_RESOURCE).unwrap();

        // Assert
        assert_eq!(scheme_like.host_str(), Some("127.0.0.1"));
        assert!(
            scheme_like
                .as_str()
                .starts_with("http://127.0.0.1:9/blog/articles/"),
            "Resolved outside source: {}",
            scheme_like
        );
        assert_eq!(
            spaced.as_str(),
            "http://127.0.0.1:9/blog/articles/my%20post.md"
        );
        assert_eq!(
            index.as_str(),
            "http://127.0.0.1:9/blog/articles/index.json"
        );
    }

    #[tokio::test]
    async fn test_fetch_article_scheme_like_slug_stays_on_source() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blog/articles/https:evil.example.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string("local"))
            .expect(1)
            .mount(&server)
            .await;

        // Act
        let body = client_for(&server).get_article("https:evil.example").await;

        // Assert
        assert_eq!(body.as_deref(), Some("local"));
    }

    #[tokio::test]
    async fn test_fetch_index_success() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blog/articles/index.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"slug": "first", "title": "First", "excerpt": "One", "tag": "rust", "date": "2024-01-01"},
                {"slug": "second", "title": "Second", "excerpt": "Two", "tag": "web", "date": "2024-01-02", "extra": 1}
            ])))
            .mount(&server)
            .await;

        // Act
        let articles = client_for(&server)
            .fetch_index()
            .await
            .expect("Index should be fetched");

        // Assert
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].slug, "first");
        assert_eq!(articles[1].title, "Second");
        assert_eq!(articles[1].date, "2024-01-02");
    }

    #[tokio::test]
    async fn test_fetch_index_not_found() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blog/articles/index.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        // Act
        let result = client_for(&server).fetch_index().await;

        // Assert
        match result {
            Err(FetchError::Status { status, .. }) => assert_eq!(status, StatusCode::NOT_FOUND),
            other => panic!("Expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_index_malformed_json() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blog/articles/index.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        // Act
        let result = client_for(&server).fetch_index().await;

        // Assert
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[tokio::test]
    async fn test_list_articles_empty_on_invalid_json() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blog/articles/index.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&server)
            .await;

        // Act
        let articles = client_for(&server).list_articles().await;

        // Assert
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_list_articles_empty_when_unreachable() {
        // Arrange: nothing listens on port 1
        let client = ContentClient::new("http://127.0.0.1:1/blog/articles/").unwrap();

        // Act
        let articles = client.list_articles().await;

        // Assert
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_get_article_returns_exact_body() {
        // Arrange
        let server = MockServer::start().await;
        let body = "# Title\n\nSome *markdown* with trailing newline\n";
        Mock::given(method("GET"))
            .and(path("/blog/articles/hello.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        // Act
        let article = client_for(&server).get_article("hello").await;

        // Assert
        assert_eq!(article.as_deref(), Some(body));
    }

    #[tokio::test]
    async fn test_get_article_none_on_error_status() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blog/articles/broken.md"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        // Act
        let article = client_for(&server).get_article("broken").await;

        // Assert
        assert!(article.is_none());
    }

    #[tokio::test]
    async fn test_get_article_none_when_unreachable() {
        // Arrange
        let client = ContentClient::new("http://127.0.0.1:1/").unwrap();

        // Act
        let article = client.get_article("anything").await;

        // Assert
        assert!(article.is_none());
    }

    #[tokio::test]
    async fn test_fetch_article_invalid_slug_makes_no_request() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("leak"))
            .expect(0)
            .mount(&server)
            .await;

        // Act
        let result = client_for(&server).fetch_article("../index").await;

        // Assert
        assert!(matches!(result, Err(FetchError::InvalidSlug(_))));
    }
}
