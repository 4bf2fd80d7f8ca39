//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use reqwest::Url;
use std::path::PathBuf;

use crate::markdown::MarkdownRenderer;

/// Command line configuration for inkpost.
#[derive(Debug, Clone, Parser)]
#[command(name = "inkpost", version, about, long_about = None)]
pub struct Config {
    /// Content source URL holding index.json and <slug>.md files
    #[arg(long, default_value = "http://localhost:8080/blog/articles/")]
    pub source: String,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Base path the site is served under
    #[arg(long, default_value = crate::router::DEFAULT_BASE_PATH)]
    pub base_path: String,

    /// Site title
    #[arg(long, default_value = "Blog")]
    pub title: String,

    /// Syntax highlighting theme (InspiredGitHub, base16-ocean.dark, etc.)
    #[arg(long, default_value = "InspiredGitHub")]
    pub theme: String,

    /// Render a single route to stdout instead of generating the site
    #[arg(long, value_name = "PATH")]
    pub route: Option<String>,

    /// Do not open the generated index in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the source is not an absolute http(s) URL, the base
    /// path is not absolute, or the theme is unknown.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.source)
            .with_context(|| format!("Invalid content source URL: {}", self.source))?;

        if !matches!(url.scheme(), "http" | "https") {
            bail!("Content source must be an http(s) URL: {}", self.source);
        }

        if !self.base_path.starts_with('/') {
            bail!("Base path must start with '/': {}", self.base_path);
        }

        if !MarkdownRenderer::has_theme(&self.theme) {
            bail!("Unknown syntax highlighting theme: {}", self.theme);
        }

        Ok(())
    }

    /// Returns the tracing filter directive for the configured verbosity.
    ///
    /// `RUST_LOG` takes precedence when set; this is the fallback.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "warn,inkpost=info",
            2 => "info,inkpost=debug",
            _ => "debug,inkpost=trace",
        }
    }
}
