//! Article index records.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Metadata for one article as listed in the article index.
///
/// Deserialized from the index JSON. Fields other than the five below are
/// ignored. Only `slug` is required; the others fall back to an empty
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleSummary {
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub date: String,
}

impl ArticleSummary {
    /// Title to show for the article, falling back to the slug.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.slug
        } else {
            &self.title
        }
    }

    /// Parses an article index document.
    ///
    /// Records that cannot be read as an article (no slug, an empty slug,
    /// or a field of the wrong type) are logged and skipped; the remaining
    /// records keep their index order.
    ///
    /// # Errors
    ///
    /// Returns error if the document is not a JSON array.
    pub fn parse_index(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        let records: Vec<Value> = serde_json::from_str(json)?;

        let articles = records
            .into_iter()
            .enumerate()
            .filter_map(|(position, record)| match serde_json::from_value::<Self>(record) {
                Ok(article) if !article.slug.is_empty() => Some(article),
                Ok(_) => {
                    warn!(position, "Skipping index record with empty slug");
                    None
                }
                Err(e) => {
                    warn!(position, error = %e, "Skipping malformed index record");
                    None
                }
            })
            .collect();

        Ok(articles)
    }
}
