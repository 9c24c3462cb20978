//! Plain-text rendering for terminals and pipes.

use super::layout::{Block, document_blocks};
use super::{RenderOptions, Renderer};
use crate::error::Result;
use crate::types::{OutputFormat, ReportModel};
use terminal_size::{Width, terminal_size};
use unicode_width::UnicodeWidthStr;

/// Width used when stdout is not a terminal
const FALLBACK_WIDTH: usize = 100;
const MIN_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    width: usize,
}

impl TextRenderer {
    pub fn new(width: usize) -> Self {
        Self { width: width.max(MIN_WIDTH) }
    }

    /// Wrap to the current terminal width, or `FALLBACK_WIDTH` when there is no terminal
    pub fn for_terminal() -> Self {
        let width = terminal_size().map(|(Width(w), _)| w as usize).unwrap_or(FALLBACK_WIDTH);
        Self::new(width)
    }

    pub fn render_string(&self, model: &ReportModel, options: &RenderOptions) -> String {
        let mut out = String::new();

        for block in document_blocks(model, options) {
            match block {
                Block::Title(text) => {
                    out.push_str(&text);
                    out.push('\n');
                    out.push_str(&"=".repeat(text.width()));
                    out.push('\n');
                }
                Block::Subtitle(text) => {
                    out.push_str(&text);
                    out.push('\n');
                }
                Block::Heading { text, .. } => {
                    out.push('\n');
                    out.push_str(&text);
                    out.push('\n');
                    out.push_str(&"-".repeat(text.width()));
                    out.push('\n');
                }
                Block::Paragraph(text) => {
                    for line in wrap_text(&text, self.width) {
                        out.push_str(&line);
                        out.push('\n');
                    }
                }
                Block::Bullet { text, level } => {
                    let indent = "  ".repeat(level as usize + 1);
                    let hanging = format!("{}  ", indent);
                    let wrapped = wrap_text(&text, self.width.saturating_sub(hanging.width()));
                    for (i, line) in wrapped.iter().enumerate() {
                        let prefix = if i == 0 { format!("{}\u{2022} ", indent) } else { hanging.clone() };
                        out.push_str(&prefix);
                        out.push_str(line);
                        out.push('\n');
                    }
                }
            }
        }

        out
    }
}

impl Renderer for TextRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Text
    }

    fn render(&self, model: &ReportModel, options: &RenderOptions) -> Result<Vec<u8>> {
        Ok(self.render_string(model, options).into_bytes())
    }
}

/// Greedy word wrap by display width. Words wider than `width` get a line of their own.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}
