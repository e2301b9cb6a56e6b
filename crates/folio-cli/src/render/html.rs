use folio_config::RenderConfig;
use folio_engine::{Block, InlineText, InlineToken, Style};

use super::{RenderDocument, Renderer};

/// Renders a printable HTML5 document, paginated through CSS paged media.
pub struct HtmlRenderer {
    settings: RenderConfig,
}

impl HtmlRenderer {
    pub fn new(settings: RenderConfig) -> Self {
        Self { settings }
    }

    /// Renders the `<body>` content, one element per line.
    pub fn render_body(&self, doc: &RenderDocument) -> String {
        let mut lines = Vec::with_capacity(doc.blocks.len() + 1);

        if doc.needs_title(self.settings.title_scan_blocks) {
            lines.push(format!(
                "<h1>{}</h1>",
                html_escape::encode_text(&doc.title_fallback)
            ));
        }

        for block in &doc.blocks {
            let first = lines.is_empty();
            lines.push(self.render_block(block, first));
        }

        lines.join("\n")
    }

    fn render_block(&self, block: &Block, first: bool) -> String {
        match block {
            Block::Heading { level, text } => {
                let class = if self.settings.page_breaks && block.page_break_before() && !first {
                    r#" class="page-break""#
                } else {
                    ""
                };
                format!("<h{level}{class}>{}</h{level}>", render_inline(text))
            }
            Block::Paragraph { text } => format!("<p>{}</p>", render_inline(text)),
            Block::CodeBlock {
                language,
                raw_lines,
            } => {
                let class = language
                    .as_deref()
                    .map(|lang| {
                        format!(
                            r#" class="language-{}""#,
                            html_escape::encode_double_quoted_attribute(lang)
                        )
                    })
                    .unwrap_or_default();
                let code = html_escape::encode_text(&raw_lines.join("\n")).into_owned();
                format!("<pre><code{class}>{code}</code></pre>")
            }
            Block::List { items } => {
                let mut out = String::from("<ul>\n");
                for item in items {
                    out.push_str("<li>");
                    out.push_str(&render_inline(item));
                    out.push_str("</li>\n");
                }
                out.push_str("</ul>");
                out
            }
            Block::Rule => "<hr>".to_string(),
        }
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, doc: &RenderDocument) -> String {
        let title = html_escape::encode_text(&doc.title()).into_owned();
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
@page {{ size: {size}; margin: 1in; }}
body {{ font-family: Helvetica, Arial, sans-serif; font-size: 11pt; line-height: 1.45; color: #1a1a1a; }}
h1 {{ font-size: 24pt; margin: 12pt 0; }}
h2 {{ font-size: 18pt; margin: 10pt 0; color: #2a2a2a; }}
h3 {{ font-size: 14pt; margin: 8pt 0; color: #3a3a3a; }}
.page-break {{ break-before: page; }}
pre {{ font-size: 9pt; background: #f5f5f5; padding: 6pt 20pt; white-space: pre-wrap; }}
code {{ font-family: Courier, monospace; }}
p code, li code {{ color: #c7254e; background: #f9f2f4; }}
.link {{ color: blue; text-decoration: underline; }}
</style>
</head>
<body>
{body}
</body>
</html>
"#,
            size = self.settings.page_size.css_name(),
            body = self.render_body(doc),
        )
    }

    fn extension(&self) -> &'static str {
        "html"
    }
}

/// Maps inline tags onto HTML elements. Text runs are already escaped.
fn render_inline(text: &InlineText) -> String {
    let mut out = String::with_capacity(text.as_str().len());
    for token in text.tokens() {
        match token {
            InlineToken::Text(t) => out.push_str(t),
            InlineToken::Open(style) => out.push_str(open_element(style)),
            InlineToken::Close(style) => out.push_str(close_element(style)),
        }
    }
    out
}

fn open_element(style: Style) -> &'static str {
    match style {
        Style::Bold => "<strong>",
        Style::Italic => "<em>",
        Style::Code => "<code>",
        Style::Link => r#"<span class="link">"#,
    }
}

fn close_element(style: Style) -> &'static str {
    match style {
        Style::Bold => "</strong>",
        Style::Italic => "</em>",
        Style::Code => "</code>",
        Style::Link => "</span>",
    }
}
