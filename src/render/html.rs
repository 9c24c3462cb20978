//! HTML rendering via maud. Also the input of the browser PDF path.

use super::layout::INDEX_HEADING;
use super::{RenderOptions, Renderer};
use crate::error::Result;
use crate::types::{BodyLine, OutputFormat, ReportModel};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const STYLE: &str = "
    body { font-family: Arial, sans-serif; padding: 40px; }
    .page-break { page-break-before: always; }
    .generated { color: #555555; }
    ul.index li { margin-bottom: 4px; }
";

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }

    fn render(&self, model: &ReportModel, options: &RenderOptions) -> Result<Vec<u8>> {
        Ok(render_html(model, options).into_string().into_bytes())
    }
}

/// Consecutive body lines of the same kind, so bullets share one `<ul>`
enum Chunk<'a> {
    Paragraph(&'a str),
    List(Vec<&'a str>),
}

fn chunks(body: &[BodyLine]) -> Vec<Chunk<'_>> {
    let mut out: Vec<Chunk<'_>> = Vec::new();
    for line in body {
        match line {
            BodyLine::Text(text) => out.push(Chunk::Paragraph(text)),
            BodyLine::Bullet(text) => {
                if let Some(Chunk::List(items)) = out.last_mut() {
                    items.push(text.as_str());
                    continue;
                }
                out.push(Chunk::List(vec![text.as_str()]));
            }
        }
    }
    out
}

/// Full HTML document for a report; all text content is escaped
pub fn render_html(model: &ReportModel, options: &RenderOptions) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (options.title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                h1 { (options.title) }
                @if let Some(label) = options.generated_label() {
                    p class="generated" { (label) }
                }
                div class="page-break" {}

                h2 { (INDEX_HEADING) }
                ul class="index" {
                    @for entry in &model.index {
                        li { (entry.text) }
                    }
                }

                @for (i, section) in model.sections.iter().enumerate() {
                    @if i > 0 {
                        hr;
                    }
                    @if section.page_break_before {
                        div class="page-break" {}
                    }
                    section {
                        h2 { (section.heading) }
                        @for chunk in chunks(&section.body) {
                            @match chunk {
                                Chunk::Paragraph(text) => { p { (text) } }
                                Chunk::List(items) => {
                                    ul {
                                        @for item in items {
                                            li { (item) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
