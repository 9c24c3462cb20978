//! PDF rendering through a headless Chrome/Chromium process.
//!
//! The HTML is written into a per-call temporary directory, printed with
//! `--print-to-pdf`, read back into memory, and the directory is removed again.
//! Concurrent calls never share a path.

use super::html::render_html;
use super::{RenderOptions, Renderer};
use crate::error::{ReportError, Result};
use crate::types::{OutputFormat, ReportModel};
use log::{debug, warn};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Environment variable naming the browser binary
pub const CHROME_ENV: &str = "BRSR_CHROME";

/// Binary names searched on PATH, in order
const CHROME_NAMES: &[&str] = &["chromium", "chromium-browser", "google-chrome", "google-chrome-stable", "chrome"];

/// Well-known install locations outside PATH
const CHROME_PATHS: &[&str] = &[
    "/snap/bin/chromium",
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
    "/Applications/Chromium.app/Contents/MacOS/Chromium",
];

#[derive(Debug, Clone, Default)]
pub struct BrowserPdfRenderer {
    chrome: Option<PathBuf>,
}

impl BrowserPdfRenderer {
    /// `chrome` overrides the binary lookup
    pub fn new(chrome: Option<PathBuf>) -> Self {
        Self { chrome }
    }

    fn binary(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.chrome {
            return Ok(path.clone());
        }
        find_chrome().ok_or_else(|| {
            ReportError::rendering(format!(
                "no Chrome/Chromium binary found; install one or set {} / --chrome",
                CHROME_ENV
            ))
        })
    }

    /// Rasterize an HTML document to PDF bytes
    pub fn render_html_document(&self, html: &str) -> Result<Vec<u8>> {
        let binary = self.binary()?;

        let scratch = tempfile::tempdir()
            .map_err(|e| ReportError::rendering(format!("failed to create scratch directory: {}", e)))?;
        let input = scratch.path().join("report.html");
        let output = scratch.path().join("report.pdf");

        fs::write(&input, html).map_err(|e| ReportError::rendering(format!("failed to write HTML input: {}", e)))?;

        debug!("Printing {} with {}", input.display(), binary.display());

        let result = Command::new(&binary)
            .args(["--headless", "--disable-gpu", "--no-pdf-header-footer"])
            .arg(format!("--print-to-pdf={}", output.display()))
            // Plain path, so characters like "#" or "%" in TMPDIR need no URL escaping
            .arg(&input)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ReportError::rendering(format!("failed to launch {}: {}", binary.display(), e)))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let tail: Vec<&str> = stderr.lines().rev().take(5).collect();
            warn!("Browser exited with {:?}", result.status.code());
            return Err(ReportError::rendering(format!(
                "{} exited with {}: {}",
                binary.display(),
                result.status,
                tail.into_iter().rev().collect::<Vec<_>>().join(" | ")
            )));
        }

        let bytes =
            fs::read(&output).map_err(|e| ReportError::rendering(format!("browser produced no PDF: {}", e)))?;
        if !bytes.starts_with(b"%PDF") {
            return Err(ReportError::rendering("browser output is not a PDF document"));
        }

        Ok(bytes)
    }
}

impl Renderer for BrowserPdfRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Pdf
    }

    fn render(&self, model: &ReportModel, options: &RenderOptions) -> Result<Vec<u8>> {
        let html = render_html(model, options).into_string();
        self.render_html_document(&html)
    }
}

/// Locate a browser: `BRSR_CHROME`, then PATH, then well-known install locations
pub fn find_chrome() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CHROME_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }

    if let Some(paths) = env::var_os("PATH") {
        for dir in env::split_paths(&paths) {
            for name in CHROME_NAMES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }
    }

    CHROME_PATHS.iter().map(|p| PathBuf::from(*p)).find(|p| p.is_file())
}
