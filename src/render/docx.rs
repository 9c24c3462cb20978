//! Word (.docx) rendering via docx-rs.

use super::layout::{Block, document_blocks};
use super::{RenderOptions, Renderer};
use crate::error::{ReportError, Result};
use crate::types::{OutputFormat, ReportModel};
use docx_rs::{
    AbstractNumbering, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat, Numbering,
    NumberingId, Paragraph, Run, Start, Style, StyleType,
};
use log::debug;
use std::io::Cursor;

/// Numbering id shared by every bulleted paragraph
const BULLET_NUMBERING_ID: usize = 1;

const TITLE_STYLE: &str = "Title";
const HEADING_STYLE: &str = "Heading1";
const SUBTITLE_STYLE: &str = "Subtitle";

#[derive(Debug, Clone, Copy, Default)]
pub struct WordRenderer;

impl Renderer for WordRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Word
    }

    fn render(&self, model: &ReportModel, options: &RenderOptions) -> Result<Vec<u8>> {
        let blocks = document_blocks(model, options);
        debug!("Packing docx with {} blocks", blocks.len());

        let mut buffer = Cursor::new(Vec::new());
        build_document(&blocks)
            .build()
            .pack(&mut buffer)
            .map_err(|e| ReportError::rendering(format!("failed to pack docx: {}", e)))?;

        Ok(buffer.into_inner())
    }
}

fn build_document(blocks: &[Block]) -> Docx {
    let bullet_level =
        Level::new(0, Start::new(1), NumberFormat::new("bullet"), LevelText::new("\u{2022}"), LevelJc::new("left"));

    let mut docx = Docx::new()
        .add_style(Style::new(TITLE_STYLE, StyleType::Paragraph).name("Title").size(56).bold())
        .add_style(Style::new(SUBTITLE_STYLE, StyleType::Paragraph).name("Subtitle").size(24))
        .add_style(Style::new(HEADING_STYLE, StyleType::Paragraph).name("Heading 1").size(32).bold())
        .add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(bullet_level))
        .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

    for block in blocks {
        docx = docx.add_paragraph(paragraph(block));
    }

    docx
}

pub(super) fn paragraph(block: &Block) -> Paragraph {
    match block {
        Block::Title(text) => Paragraph::new().style(TITLE_STYLE).add_run(Run::new().add_text(text.as_str())),
        Block::Subtitle(text) => Paragraph::new().style(SUBTITLE_STYLE).add_run(Run::new().add_text(text.as_str())),
        Block::Heading { text, page_break_before } => Paragraph::new()
            .style(HEADING_STYLE)
            .page_break_before(*page_break_before)
            .add_run(Run::new().add_text(text.as_str())),
        Block::Paragraph(text) => Paragraph::new().add_run(Run::new().add_text(text.as_str())),
        Block::Bullet { text, level } => Paragraph::new()
            .add_run(Run::new().add_text(text.as_str()))
            .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(*level as usize)),
    }
}
