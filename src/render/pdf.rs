//! In-process PDF rendering via printpdf.
//!
//! Lays the shared block sequence out on A4 pages with the built-in Helvetica faces,
//! so no font files or external processes are needed. Those faces only cover printable
//! ASCII; text outside that range is rejected up front instead of being dropped.

use super::layout::{Block, document_blocks};
use super::text::wrap_text;
use super::{RenderOptions, Renderer};
use crate::error::{ReportError, Result};
use crate::types::{OutputFormat, ReportModel};
use log::debug;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;

const TITLE_SIZE: f32 = 28.0;
const SUBTITLE_SIZE: f32 = 12.0;
const HEADING_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 11.0;

const PT_TO_MM: f32 = 0.3528;
/// Average Helvetica glyph width as a fraction of the font size
const AVG_GLYPH_EM: f32 = 0.5;
const LINE_SPACING: f32 = 1.4;
const BULLET_INDENT_MM: f32 = 6.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct NativePdfRenderer;

impl Renderer for NativePdfRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Pdf
    }

    fn render(&self, model: &ReportModel, options: &RenderOptions) -> Result<Vec<u8>> {
        let blocks = document_blocks(model, options);
        check_encodable(&blocks)?;
        let mut writer = PageWriter::new(&options.title)?;

        for block in &blocks {
            match block {
                Block::Title(text) => {
                    writer.move_down(40.0);
                    writer.write_wrapped(text, TITLE_SIZE, 0.0, true);
                }
                Block::Subtitle(text) => writer.write_wrapped(text, SUBTITLE_SIZE, 0.0, false),
                Block::Heading { text, page_break_before } => {
                    if *page_break_before {
                        writer.new_page();
                    } else {
                        writer.move_down(HEADING_SIZE * PT_TO_MM);
                    }
                    writer.write_wrapped(text, HEADING_SIZE, 0.0, true);
                    writer.move_down(2.0);
                }
                Block::Paragraph(text) => {
                    writer.write_wrapped(text, BODY_SIZE, 0.0, false);
                    writer.move_down(2.0);
                }
                Block::Bullet { text, level } => {
                    let indent = BULLET_INDENT_MM * (*level as f32 + 1.0);
                    writer.write_bullet(text, BODY_SIZE, indent);
                }
            }
        }

        debug!("Rendered native PDF with {} pages", writer.page_count);
        writer.finish()
    }
}

fn block_text(block: &Block) -> &str {
    match block {
        Block::Title(text) | Block::Subtitle(text) | Block::Paragraph(text) => text,
        Block::Heading { text, .. } | Block::Bullet { text, .. } => text,
    }
}

/// Fail on the first character the built-in fonts cannot draw
fn check_encodable(blocks: &[Block]) -> Result<()> {
    for block in blocks {
        let text = block_text(block);
        if let Some(c) = text.chars().find(|c| !(c.is_ascii_graphic() || c.is_ascii_whitespace())) {
            return Err(ReportError::rendering(format!(
                "character '{}' (U+{:04X}) in \"{}\" cannot be drawn with the built-in PDF font; \
                 use --pdf-engine browser for non-ASCII text",
                c, c as u32, text
            )));
        }
    }
    Ok(())
}

/// Cursor over the current page; starts a new page when the next line would cross the bottom margin
struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    cursor_mm: f32,
    page_count: usize,
    /// Nothing has been written on the current page yet
    page_blank: bool,
}

impl PageWriter {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Page 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ReportError::rendering(format!("failed to load Helvetica: {}", e)))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ReportError::rendering(format!("failed to load Helvetica-Bold: {}", e)))?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            cursor_mm: PAGE_HEIGHT_MM - MARGIN_MM,
            page_count: 1,
            page_blank: true,
        })
    }

    /// Break to a fresh page; a page break on an untouched page only resets the cursor
    fn new_page(&mut self) {
        if self.page_blank {
            self.cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;
            return;
        }
        self.add_page();
    }

    fn add_page(&mut self) {
        self.page_count += 1;
        let (page, layer) =
            self.doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), format!("Page {}", self.page_count));
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;
        self.page_blank = true;
    }

    fn move_down(&mut self, mm: f32) {
        self.cursor_mm -= mm;
    }

    fn line_height(size: f32) -> f32 {
        size * PT_TO_MM * LINE_SPACING
    }

    /// Columns that fit between `indent` and the right margin at `size`
    fn columns(size: f32, indent: f32) -> usize {
        let usable = PAGE_WIDTH_MM - 2.0 * MARGIN_MM - indent;
        (usable / (size * PT_TO_MM * AVG_GLYPH_EM)).floor().max(1.0) as usize
    }

    fn write_line(&mut self, text: &str, size: f32, x_mm: f32, bold: bool) {
        let height = Self::line_height(size);
        if self.cursor_mm - height < MARGIN_MM {
            self.add_page();
        }
        self.cursor_mm -= height;

        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size, Mm(x_mm), Mm(self.cursor_mm), font);
        self.page_blank = false;
    }

    fn write_wrapped(&mut self, text: &str, size: f32, indent: f32, bold: bool) {
        for line in wrap_text(text, Self::columns(size, indent)) {
            self.write_line(&line, size, MARGIN_MM + indent, bold);
        }
    }

    fn write_bullet(&mut self, text: &str, size: f32, indent: f32) {
        for (i, line) in wrap_text(text, Self::columns(size, indent)).iter().enumerate() {
            if i == 0 {
                // Marker sits in the indent gutter, aligned with the first line
                let marker_x = MARGIN_MM + indent - BULLET_INDENT_MM / 2.0;
                self.write_line(line, size, MARGIN_MM + indent, false);
                self.layer.use_text("-", size, Mm(marker_x), Mm(self.cursor_mm), &self.regular);
            } else {
                self.write_line(line, size, MARGIN_MM + indent, false);
            }
        }
    }

    fn finish(self) -> Result<Vec<u8>> {
        self.doc.save_to_bytes().map_err(|e| ReportError::rendering(format!("failed to serialize PDF: {}", e)))
    }
}
