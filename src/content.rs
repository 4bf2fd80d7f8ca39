//! Article content fetched over HTTP.
//!
//! The content source is a static directory holding an `index.json` article
//! index and one `<slug>.md` Markdown body per article.

mod article;
mod error;
mod fetcher;

pub use article::ArticleSummary;
pub use error::FetchError;
pub use fetcher::ContentClient;
