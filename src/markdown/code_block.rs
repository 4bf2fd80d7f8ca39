//! Fenced code block decoration.

use maud::{Markup, PreEscaped, html};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use tracing::debug;

/// Label shown for code blocks without a recognized language.
pub const PLAIN_TEXT_LABEL: &str = "text";

/// CSS class prefix for highlighted tokens.
pub const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hljs-" };

/// Code block content ready for insertion into HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeBody {
    /// Syntax highlighted markup with `hljs-*` class spans
    Highlighted(String),
    /// Plain text with HTML special characters escaped
    Escaped(String),
}

impl CodeBody {
    fn escape(code: &str) -> Self {
        CodeBody::Escaped(html! { (code) }.into_string())
    }

    /// Markup of the code body, regardless of how it was produced.
    pub fn as_html(&self) -> &str {
        match self {
            CodeBody::Highlighted(html) | CodeBody::Escaped(html) => html,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(self, CodeBody::Highlighted(_))
    }
}

/// Turns fenced code blocks into a decorated HTML structure.
///
/// Each block gets a header with the language label and copy and
/// fullscreen buttons, and a body with a line number column beside the
/// highlighted code. Highlighting uses syntect with CSS classes, so colors
/// come from the theme stylesheet rather than inline styles.
pub struct CodeBlockFormatter {
    syntax_set: SyntaxSet,
}

impl CodeBlockFormatter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Formats a fenced code block.
    ///
    /// # Arguments
    ///
    /// * `info`: Info string after the opening fence (language is its first word)
    /// * `literal`: Raw block text as produced by the parser
    ///
    /// # Returns
    ///
    /// HTML for the complete decorated block
    pub fn format(&self, info: &str, literal: &str) -> String {
        let code = literal.strip_suffix('\n').unwrap_or(literal);
        let language = info.split_whitespace().next();

        let body = self.highlight(code, language);
        let label = match (&body, language) {
            (CodeBody::Highlighted(_), Some(lang)) => lang,
            _ => PLAIN_TEXT_LABEL,
        };
        let line_count = code.split('\n').count();

        code_block_markup(label, line_count, &body).into_string()
    }

    /// Highlights code for a language, falling back to escaped text.
    ///
    /// Returns `CodeBody::Escaped` when no language is given, when syntect
    /// has no syntax for it, or when highlighting a line fails.
    pub fn highlight(&self, code: &str, language: Option<&str>) -> CodeBody {
        let Some(language) = language else {
            return CodeBody::escape(code);
        };

        let Some(syntax) = self.syntax_set.find_syntax_by_token(language) else {
            return CodeBody::escape(code);
        };

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, CLASS_STYLE);

        for line in LinesWithEndings::from(code) {
            if let Err(e) = generator.parse_html_for_line_which_includes_newline(line) {
                debug!(language, error = %e, "Highlighting failed, using plain text");
                return CodeBody::escape(code);
            }
        }

        CodeBody::Highlighted(generator.finalize())
    }
}

impl Default for CodeBlockFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn code_block_markup(label: &str, line_count: usize, body: &CodeBody) -> Markup {
    html! {
        div class="code-block" data-lang=(label) {
            div class="code-header" {
                span class="code-lang" { (label) }
                div class="code-actions" {
                    button type="button" class="code-copy" title="Copy code" { "Copy" }
                    button type="button" class="code-fullscreen" title="Toggle fullscreen" { "Fullscreen" }
                }
            }
            div class="code-body" {
                div class="line-numbers" aria-hidden="true" {
                    @for line_num in 1..=line_count {
                        span class="line-number" { (line_num) }
                    }
                }
                pre class="hljs" {
                    code class=(format!("language-{}", label)) {
                        (PreEscaped(body.as_html()))
                    }
                }
            }
        }
    }
}
