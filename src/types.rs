/// Core data structures for an assembled report
///
/// This module defines the abstract document model handed from the content builder
/// to the renderers, and the immutable request resolved from the command line.
use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

/// One line of the index; the index always lists every principle of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub text: String,
    pub level: u8,
}

/// Body content of a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum BodyLine {
    Text(String),
    Bullet(String),
}

/// Detailed body content for one principle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub page_break_before: bool,
    pub body: Vec<BodyLine>,
}

/// How the requested selection was applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SelectionOutcome {
    /// No selection supplied: catalog order
    Default,
    /// The principle with this key was moved to the front
    Matched { key: String },
    /// Nothing matched the selection: catalog order, reported as a warning
    Unmatched { requested: String },
}

impl SelectionOutcome {
    pub fn is_unmatched(&self) -> bool {
        matches!(self, SelectionOutcome::Unmatched { .. })
    }
}

/// Output of the content builder, created fresh per request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportModel {
    pub index: Vec<IndexEntry>,
    pub sections: Vec<Section>,
    pub selection: SelectionOutcome,
}

impl ReportModel {
    /// Section headings in output order
    pub fn headings(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.heading.as_str()).collect()
    }
}

/// Artifact format produced by a render call
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Word,
    Pdf,
    Html,
    Json,
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Word => "docx",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            OutputFormat::Word => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            OutputFormat::Pdf => "application/pdf",
            OutputFormat::Html => "text/html; charset=utf-8",
            OutputFormat::Json => "application/json",
            OutputFormat::Text => "text/plain; charset=utf-8",
        }
    }

    /// Suggested download filename, e.g. `BRSR_Report.docx`
    pub fn suggested_filename(&self) -> String {
        format!("BRSR_Report.{}", self.extension())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Word => "word",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        };
        f.write_str(name)
    }
}

/// How PDF bytes are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PdfEngine {
    /// In-process PDF writer
    Native,
    /// Rasterize the HTML rendering with headless Chrome/Chromium
    Browser,
}

/// Where the rendered artifact goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

/// Fully resolved, immutable description of one report run
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub catalog: Cow<'static, Catalog>,
    pub selected: Option<String>,
    pub format: OutputFormat,
    pub pdf_engine: PdfEngine,
    pub html_input: Option<PathBuf>,
    pub chrome: Option<PathBuf>,
    pub title: String,
    pub timestamp: bool,
    pub output: OutputTarget,
}
