//! Shared document layout for the paginated renderers.
//!
//! The block order follows the printed report: title page, the index on its own page,
//! then one section per principle, each starting on a new page.

use super::RenderOptions;
use crate::types::{BodyLine, ReportModel};

/// Heading of the index page
pub const INDEX_HEADING: &str = "Index";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title(String),
    Subtitle(String),
    Heading { text: String, page_break_before: bool },
    Paragraph(String),
    Bullet { text: String, level: u8 },
}

pub fn document_blocks(model: &ReportModel, options: &RenderOptions) -> Vec<Block> {
    let body_lines: usize = model.sections.iter().map(|s| s.body.len() + 1).sum();
    let mut blocks = Vec::with_capacity(3 + model.index.len() + body_lines);

    blocks.push(Block::Title(options.title.clone()));
    if let Some(label) = options.generated_label() {
        blocks.push(Block::Subtitle(label));
    }

    blocks.push(Block::Heading { text: INDEX_HEADING.to_string(), page_break_before: true });
    blocks.extend(model.index.iter().map(|entry| Block::Bullet { text: entry.text.clone(), level: entry.level }));

    for section in &model.sections {
        blocks.push(Block::Heading { text: section.heading.clone(), page_break_before: section.page_break_before });
        blocks.extend(section.body.iter().map(|line| match line {
            BodyLine::Text(text) => Block::Paragraph(text.clone()),
            BodyLine::Bullet(text) => Block::Bullet { text: text.clone(), level: 0 },
        }));
    }

    blocks
}
