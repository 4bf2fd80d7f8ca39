//! Markdown rendering with GitHub Flavored Markdown support.

use anyhow::{Context, Result};
use comrak::nodes::{NodeHtmlBlock, NodeValue};
use comrak::{Arena, Options};
use syntect::highlighting::ThemeSet;
use syntect::html::css_for_theme_with_class_style;
use tracing::warn;

use super::code_block::{CLASS_STYLE, CodeBlockFormatter};

/// Renders article markdown to HTML.
///
/// Enables tables, task lists, footnotes, math, strikethrough and autolinks,
/// smart punctuation, hard line breaks and raw HTML passthrough. Fenced code
/// blocks are replaced with decorated, syntax highlighted blocks produced by
/// [`CodeBlockFormatter`], except ```` ```math ```` blocks which render as
/// display math. Configuration is fixed at construction.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    code_blocks: CodeBlockFormatter,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with the blog's fixed markdown options.
    pub fn new() -> Self {
        let mut options = Options::default();

        // Extension options
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.math_dollars = true;
        options.extension.math_code = true;

        // Parse options (smart punctuation)
        options.parse.smart = true;

        // Render options: single newlines become <br />, articles are trusted
        options.render.hardbreaks = true;
        options.render.unsafe_ = true;

        Self {
            options,
            code_blocks: CodeBlockFormatter::new(),
        }
    }

    /// Renders markdown content to HTML string.
    ///
    /// Deterministic and infallible: the same input always produces the
    /// same output, and code highlighting problems degrade to escaped text.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML with decorated code blocks
    pub fn render(&self, content: &str) -> String {
        let arena = Arena::new();
        let root = comrak::parse_document(&arena, content, &self.options);

        for node in root.descendants() {
            let mut data = node.data.borrow_mut();

            let replacement = match &data.value {
                NodeValue::CodeBlock(block)
                    if block.fenced && !self.is_math_block(&block.info) =>
                {
                    Some(self.code_blocks.format(&block.info, &block.literal))
                }
                _ => None,
            };

            if let Some(literal) = replacement {
                data.value = NodeValue::HtmlBlock(NodeHtmlBlock {
                    block_type: 0,
                    literal,
                });
            }
        }

        let mut output = Vec::with_capacity(content.len() * 2);
        if let Err(e) = comrak::format_html(root, &self.options, &mut output) {
            warn!(error = %e, "Markdown output truncated");
        }

        String::from_utf8_lossy(&output).into_owned()
    }

    /// Fenced blocks tagged `math` are left for comrak's display math output.
    fn is_math_block(&self, info: &str) -> bool {
        self.options.extension.math_code && info.trim() == "math"
    }

    /// Generates the stylesheet for highlighted code from a syntect theme.
    ///
    /// # Arguments
    ///
    /// * `theme_name`: Built-in syntect theme (InspiredGitHub, base16-ocean.dark, etc.)
    ///
    /// # Errors
    ///
    /// Returns error if the theme does not exist or CSS generation fails
    pub fn theme_css(theme_name: &str) -> Result<String> {
        let themes = ThemeSet::load_defaults();
        let theme = themes
            .themes
            .get(theme_name)
            .with_context(|| format!("Unknown syntax theme: {}", theme_name))?;

        css_for_theme_with_class_style(theme, CLASS_STYLE)
            .with_context(|| format!("Failed to generate CSS for theme: {}", theme_name))
    }

    /// Returns true when `theme_name` is a built-in syntect theme.
    pub fn has_theme(theme_name: &str) -> bool {
        ThemeSet::load_defaults().themes.contains_key(theme_name)
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}
