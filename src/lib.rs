//! Markdown blog front-end rendered into a static site.

mod assets;
pub mod components;
mod config;
mod content;
mod markdown;
pub mod pages;
mod router;
mod site;

pub use assets::write_assets;
pub use config::Config;
pub use content::{ArticleSummary, ContentClient, FetchError};
pub use markdown::{CodeBlockFormatter, CodeBody, MarkdownRenderer, PLAIN_TEXT_LABEL};
pub use router::{DEFAULT_BASE_PATH, Route, Router};
pub use site::{GenerateReport, Site};
