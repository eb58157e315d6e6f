//! Markdown rendering with optional syntax highlighting

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::HighlightConfig;

/// Markdown renderer
///
/// Tables stay disabled: they are converted to HTML by
/// [`convert_tables`](super::tables::convert_tables) before rendering, and raw
/// HTML in the input is emitted unescaped.
pub struct MarkdownRenderer {
    highlighter: Option<Highlighter>,
}

impl MarkdownRenderer {
    /// Create a renderer that emits plain `<pre><code>` blocks
    pub fn new() -> Self {
        Self { highlighter: None }
    }

    /// Create a renderer that highlights fenced code blocks
    pub fn with_highlighting(theme: &str, line_numbers: bool) -> Self {
        Self {
            highlighter: Some(Highlighter {
                syntax_set: SyntaxSet::load_defaults_newlines(),
                theme_set: ThemeSet::load_defaults(),
                theme_name: theme.to_string(),
                line_numbers,
            }),
        }
    }

    /// Create from the `highlight` section of the site config
    pub fn from_config(config: &HighlightConfig) -> Self {
        if config.enable {
            Self::with_highlighting(&config.theme, config.line_number)
        } else {
            Self::new()
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let options = Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES;
        let parser = Parser::new_ext(markdown, options);

        let mut html_output = String::new();

        let Some(highlighter) = &self.highlighter else {
            html::push_html(&mut html_output, parser);
            return html_output;
        };

        let mut events: Vec<Event> = Vec::new();
        // (language, collected source) while inside a code block
        let mut code_block: Option<(Option<String>, String)> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => info
                            .split(|c: char| c == ',' || c.is_whitespace())
                            .next()
                            .filter(|l| !l.is_empty())
                            .map(String::from),
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, source)) = code_block.take() {
                        let highlighted = highlighter.highlight(&source, lang.as_deref());
                        events.push(Event::Html(CowStr::from(highlighted)));
                    }
                }
                Event::Text(text) if code_block.is_some() => {
                    if let Some((_, source)) = code_block.as_mut() {
                        source.push_str(&text);
                    }
                }
                event => events.push(event),
            }
        }

        html::push_html(&mut html_output, events.into_iter());
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

struct Highlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    line_numbers: bool,
}

impl Highlighter {
    /// Highlight a code block
    fn highlight(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next());

        let highlighted = theme.and_then(|theme| {
            highlighted_html_for_string(code, &self.syntax_set, syntax, theme).ok()
        });

        match highlighted {
            Some(highlighted) if self.line_numbers => add_line_numbers(&highlighted, lang),
            Some(highlighted) => {
                format!(r#"<figure class="highlight {}">{}</figure>"#, lang, highlighted)
            }
            None => {
                tracing::debug!("Highlighting unavailable for `{}`, emitting plain code", lang);
                format!(
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    lang,
                    html_escape(code)
                )
            }
        }
    }
}

/// Add a line-number gutter to highlighted code
fn add_line_numbers(code: &str, lang: &str) -> String {
    let lines: Vec<&str> = code.lines().collect();

    let gutter = (1..=lines.len())
        .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code">{}</td></tr></table></figure>"#,
        lang,
        gutter,
        lines.join("\n")
    )
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is *a* test.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is <em>a</em> test.</p>"));
    }

    #[test]
    fn test_render_common_blocks() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render(
            "> quoted\n\n- one\n- two\n\n[link](https://example.com) ![alt](/a.png) `span`",
        );
        assert!(html.contains("<blockquote>"));
        assert!(html.contains("<li>one</li>"));
        assert!(html.contains(r#"<a href="https://example.com">link</a>"#));
        assert!(html.contains(r#"<img src="/a.png" alt="alt" />"#));
        assert!(html.contains("<code>span</code>"));
    }

    #[test]
    fn test_plain_code_block() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```rust\nfn main() {}\n```");
        assert!(html.contains(r#"<pre><code class="language-rust">fn main() {}"#));
    }

    #[test]
    fn test_highlighted_code_block() {
        let renderer = MarkdownRenderer::with_highlighting("base16-ocean.dark", false);
        let html = renderer.render("```rust\nfn main() {}\n```\n\nafter");
        assert!(html.contains(r#"<figure class="highlight rust">"#));
        assert!(html.contains("<p>after</p>"));
    }

    #[test]
    fn test_line_numbers() {
        let renderer = MarkdownRenderer::with_highlighting("base16-ocean.dark", true);
        let html = renderer.render("```\na\nb\n```");
        assert!(html.contains(r#"<span class="line-number">1</span>"#));
        assert!(html.contains(r#"<td class="gutter">"#));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("<table>\n<tr>\n<td>1</td>\n</tr>\n</table>\n\ntext");
        assert!(html.contains("<table>\n<tr>\n<td>1</td>"));
        assert!(html.contains("<p>text</p>"));
    }

    #[test]
    fn test_pipe_tables_not_rendered_natively() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("| A | B |\n| --- | --- |\n| 1 | 2 |");
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let renderer = MarkdownRenderer::new();
        let md = "## Title\n\nSome **bold** text.\n\n1. first\n2. second\n";
        assert_eq!(renderer.render(md), renderer.render(md));
    }
}
