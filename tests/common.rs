//! Shared test utilities for integration tests.
//!
//! Provides a mock content source serving an article index and article
//! bodies the way a static file server would.

#![allow(dead_code)]

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Directory of the content source on the mock server.
pub const ARTICLES_PATH: &str = "/blog/articles";

/// Markdown body exercising every renderer extension.
pub const SAMPLE_ARTICLE: &str = r#"# Getting Started

Some *intro* text with a footnote[^1] and math $e^{i\pi}$.

| 姓名 | 年龄 |
| ---- | ---- |
| 张三 | 25   |

- [x] write post
- [ ] publish

```rust
fn main() {
    println!("hello");
}
```

```
plain <text> & more
```

[^1]: The footnote.
"#;

/// Starts mock server with an empty content source.
pub async fn start_server() -> MockServer {
    MockServer::start().await
}

/// Content source URL for the mock server.
pub fn source_url(server: &MockServer) -> String {
    format!("{}{}/", server.uri(), ARTICLES_PATH)
}

/// Serves `index.json` with the given JSON body.
pub async fn mount_index(server: &MockServer, index: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("{}/index.json", ARTICLES_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_json(index))
        .mount(server)
        .await;
}

/// Serves `<slug>.md` with the given markdown body.
pub async fn mount_article(server: &MockServer, slug: &str, markdown: &str) {
    Mock::given(method("GET"))
        .and(path(format!("{}/{}.md", ARTICLES_PATH, slug)))
        .respond_with(ResponseTemplate::new(200).set_body_string(markdown))
        .mount(server)
        .await;
}

/// Serves `<slug>.md` with an error status.
pub async fn mount_failing_article(server: &MockServer, slug: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("{}/{}.md", ARTICLES_PATH, slug)))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Builds one index record.
pub fn index_entry(slug: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "slug": slug,
        "title": title,
        "excerpt": format!("About {}", title),
        "tag": "notes",
        "date": "2024-03-01",
    })
}
