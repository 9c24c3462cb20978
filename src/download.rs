/// Report download operations
///
/// Each operation builds a fresh ReportModel from the read-only catalog, hands it to one
/// renderer, and returns the complete artifact in memory. Nothing is written to disk here:
/// callers decide where the bytes go once rendering has fully succeeded.
use crate::builder::ReportContentBuilder;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::render::{
    BrowserPdfRenderer, HtmlRenderer, JsonRenderer, RenderOptions, Renderer, TextRenderer, WordRenderer,
    renderer_for,
};
use crate::types::{OutputFormat, PdfEngine, SelectionOutcome};
use log::debug;
use std::path::Path;

/// A rendered, downloadable report
#[derive(Debug, Clone)]
pub struct Artifact {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub content_type: &'static str,
    pub selection: SelectionOutcome,
}

impl Artifact {
    fn new(format: OutputFormat, bytes: Vec<u8>, selection: SelectionOutcome) -> Self {
        Self { bytes, filename: format.suggested_filename(), content_type: format.content_type(), selection }
    }

    /// Header value marking the artifact as an attachment download
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Build the model for `selected` and render it with `renderer`
pub fn render_with(
    catalog: &Catalog,
    selected: Option<&str>,
    renderer: &dyn Renderer,
    options: &RenderOptions,
) -> Result<Artifact> {
    let model = ReportContentBuilder::new(catalog).build(selected)?;
    let format = renderer.format();
    let bytes = renderer.render(&model, options)?;

    debug!("Rendered {} artifact: {} bytes, section order {:?}", format, bytes.len(), model.headings());
    Ok(Artifact::new(format, bytes, model.selection))
}

/// Word document, `BRSR_Report.docx`
pub fn render_word(catalog: &Catalog, selected: Option<&str>, options: &RenderOptions) -> Result<Artifact> {
    render_with(catalog, selected, &WordRenderer, options)
}

/// PDF, `BRSR_Report.pdf`, produced by the chosen engine
pub fn render_pdf(
    catalog: &Catalog,
    selected: Option<&str>,
    engine: PdfEngine,
    chrome: Option<&Path>,
    options: &RenderOptions,
) -> Result<Artifact> {
    let renderer = renderer_for(OutputFormat::Pdf, engine, chrome);
    render_with(catalog, selected, renderer.as_ref(), options)
}

/// PDF rasterized from caller-supplied HTML; the catalog is not consulted
pub fn render_pdf_from_html(html: &str, chrome: Option<&Path>) -> Result<Artifact> {
    let renderer = BrowserPdfRenderer::new(chrome.map(Path::to_path_buf));
    let bytes = renderer.render_html_document(html)?;
    Ok(Artifact::new(OutputFormat::Pdf, bytes, SelectionOutcome::Default))
}

/// HTML document, `BRSR_Report.html`
pub fn render_html(catalog: &Catalog, selected: Option<&str>, options: &RenderOptions) -> Result<Artifact> {
    render_with(catalog, selected, &HtmlRenderer, options)
}

/// JSON export of the model, `BRSR_Report.json`
pub fn render_json(catalog: &Catalog, selected: Option<&str>, options: &RenderOptions) -> Result<Artifact> {
    render_with(catalog, selected, &JsonRenderer, options)
}

/// Plain text, `BRSR_Report.txt`
pub fn render_text(
    catalog: &Catalog,
    selected: Option<&str>,
    width: Option<usize>,
    options: &RenderOptions,
) -> Result<Artifact> {
    let renderer = width.map(TextRenderer::new).unwrap_or_else(TextRenderer::for_terminal);
    render_with(catalog, selected, &renderer, options)
}

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;
