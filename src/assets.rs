//! CSS and script asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::markdown::MarkdownRenderer;

/// Directory holding assets, relative to the site root.
pub const ASSETS_DIR: &str = "assets";

/// Stylesheet shared by every page.
pub const SITE_CSS: &str = "assets/site.css";
/// Stylesheet for rendered articles and code blocks.
pub const POST_CSS: &str = "assets/post.css";
/// Highlight colors generated from the configured syntax theme.
pub const THEME_CSS: &str = "assets/theme.css";
/// Copy and fullscreen behavior for code blocks.
pub const CODE_BLOCK_JS: &str = "assets/code-block.js";

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const ARTICLE_LIST: &str = include_str!("../assets/components/article-list.css");

const MARKDOWN: &str = include_str!("../assets/markdown.css");
const CODE_BLOCK: &str = include_str!("../assets/code-block.css");

const CODE_BLOCK_SCRIPT: &str = include_str!("../assets/code-block.js");

/// Writes all bundled assets under `output/assets`
///
/// # Arguments
///
/// * `output`: Site output directory
/// * `theme`: Syntect theme used for `theme.css`
///
/// # Errors
///
/// Returns error if the theme is unknown or a file cannot be written
pub fn write_assets(output: &Path, theme: &str) -> Result<()> {
    let assets_dir = output.join(ASSETS_DIR);
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;

    write_bundled(output, SITE_CSS, &[BASE, LAYOUT, ARTICLE_LIST])?;
    write_bundled(output, POST_CSS, &[MARKDOWN, CODE_BLOCK])?;

    let theme_css = MarkdownRenderer::theme_css(theme)?;
    write_bundled(output, THEME_CSS, &[&theme_css])?;
    write_bundled(output, CODE_BLOCK_JS, &[CODE_BLOCK_SCRIPT])?;

    Ok(())
}

fn write_bundled(output: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let content = parts.join("\n");
    fs::write(output.join(name), content)
        .with_context(|| format!("Failed to write asset: {}", name))?;
    Ok(())
}
