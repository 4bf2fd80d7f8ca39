//! Markdown rendering for articles.
//!
//! This module renders article markdown using comrak with tables, task
//! lists, footnotes and math, and replaces fenced code blocks with
//! decorated blocks highlighted by syntect.

mod code_block;
mod renderer;

pub use code_block::{CodeBlockFormatter, CodeBody, PLAIN_TEXT_LABEL};
pub use renderer::MarkdownRenderer;
