//! Report renderers - ReportModel to artifact bytes.
//!
//! Every backend implements [`Renderer`]. The paginated ones (Word, native PDF, text)
//! share the block sequence produced by `layout`; the browser PDF path rasterizes the
//! HTML rendering instead.
//!
//! # Module Organization
//!
//! - `layout` - Shared block sequence (title, index, sections)
//! - `docx` - Word documents via docx-rs
//! - `html` - HTML markup via maud
//! - `pdf` - In-process PDF via printpdf
//! - `browser` - PDF via a headless Chrome/Chromium process
//! - `json` - Pretty-printed model export
//! - `text` - Plain text wrapped to the terminal width

mod browser;
mod docx;
mod html;
mod json;
mod layout;
mod pdf;
mod text;

pub use browser::{BrowserPdfRenderer, find_chrome};
pub use docx::WordRenderer;
pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use pdf::NativePdfRenderer;
pub use text::TextRenderer;

use crate::error::Result;
use crate::types::{OutputFormat, PdfEngine, ReportModel};
use chrono::{DateTime, Local};
use std::path::Path;

/// Title used when the caller does not supply one
pub const DEFAULT_TITLE: &str = "BRSR Report";

/// Presentation settings that are not part of the content model
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    /// Printed on the title page when present; the builder never reads the clock
    pub generated_at: Option<DateTime<Local>>,
}

impl RenderOptions {
    pub fn new(title: &str) -> Self {
        Self { title: title.to_string(), generated_at: None }
    }

    pub fn with_generated_at(mut self, at: DateTime<Local>) -> Self {
        self.generated_at = Some(at);
        self
    }

    /// "Generated on 2024-05-01 14:30" when a timestamp is set
    pub fn generated_label(&self) -> Option<String> {
        self.generated_at.map(|at| format!("Generated on {}", at.format("%Y-%m-%d %H:%M")))
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

/// A backend that serializes a report model into bytes
pub trait Renderer {
    fn format(&self) -> OutputFormat;

    fn render(&self, model: &ReportModel, options: &RenderOptions) -> Result<Vec<u8>>;
}

/// Pick the renderer for a format; `engine` and `chrome` only matter for PDF
pub fn renderer_for(format: OutputFormat, engine: PdfEngine, chrome: Option<&Path>) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Word => Box::new(WordRenderer),
        OutputFormat::Pdf => match engine {
            PdfEngine::Native => Box::new(NativePdfRenderer),
            PdfEngine::Browser => Box::new(BrowserPdfRenderer::new(chrome.map(Path::to_path_buf))),
        },
        OutputFormat::Html => Box::new(HtmlRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Text => Box::new(TextRenderer::for_terminal()),
    }
}
