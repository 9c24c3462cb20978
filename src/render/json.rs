//! JSON export of the report model.

use super::{RenderOptions, Renderer};
use crate::error::{ReportError, Result};
use crate::types::{OutputFormat, ReportModel};
use serde_json::json;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn render(&self, model: &ReportModel, options: &RenderOptions) -> Result<Vec<u8>> {
        let report = json!({
            "title": options.title,
            "generated_at": options.generated_at.map(|at| at.to_rfc3339()),
            "selection": model.selection,
            "index": model.index,
            "sections": model.sections,
        });

        serde_json::to_vec_pretty(&report).map_err(|e| ReportError::rendering(format!("failed to encode JSON: {}", e)))
    }
}
