use crate::catalog::Preset;
use crate::types::{OutputFormat, PdfEngine};
use clap::Parser;
use std::path::PathBuf;

/// Get the default configuration directory for brsr-report
/// Uses platform-specific config directories:
/// - Linux: ~/.config/brsr-report
/// - macOS: ~/Library/Application Support/brsr-report
/// - Windows: %APPDATA%/brsr-report
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir().map(|p| p.join("brsr-report")).unwrap_or_else(|| PathBuf::from(".brsr-report"))
}

#[derive(Parser, Debug, Clone)]
#[command(name = "brsr-report")]
#[command(about = "Assemble BRSR principle reports as Word, PDF, HTML, JSON or text")]
#[command(version)]
pub struct CliArgs {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "word")]
    pub format: OutputFormat,

    /// Principle to put first, by key ("principle-5") or display name ("Principle 5: Human Rights")
    /// An unknown value falls back to catalog order with a warning
    #[arg(long, short = 's', visible_alias = "selected", value_name = "KEY")]
    pub select: Option<String>,

    /// Catalog file (.toml or .json) with [[principles]] entries
    /// Default: $BRSR_CATALOG, then <config dir>/brsr-report/catalog.toml, then --preset
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Built-in catalog used when no catalog file is found
    #[arg(long, value_enum, default_value = "full")]
    pub preset: Preset,

    /// Output file or directory; "-" writes to stdout
    /// Default: BRSR_Report.<ext> in the current directory
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// How PDF output is produced
    #[arg(long, value_enum, default_value = "native")]
    pub pdf_engine: PdfEngine,

    /// Rasterize this pre-rendered HTML file to PDF instead of building a report
    /// Implies --format pdf --pdf-engine browser
    #[arg(long, value_name = "PATH")]
    pub html_input: Option<PathBuf>,

    /// Chrome/Chromium binary for the browser PDF engine (default: $BRSR_CHROME, then PATH)
    #[arg(long, value_name = "PATH")]
    pub chrome: Option<PathBuf>,

    /// Document title
    #[arg(long, default_value = crate::render::DEFAULT_TITLE)]
    pub title: String,

    /// Leave the generation timestamp off the title page
    #[arg(long)]
    pub no_timestamp: bool,

    /// Print the catalog's keys and names, then exit
    #[arg(long)]
    pub list: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        let mut args = CliArgs::parse();

        // A raw HTML input only makes sense as a browser-rendered PDF
        if args.html_input.is_some() {
            args.format = OutputFormat::Pdf;
            args.pdf_engine = PdfEngine::Browser;
        }

        args
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref html) = self.html_input {
            if self.format != OutputFormat::Pdf {
                return Err("--html-input can only produce PDF output".to_string());
            }
            if self.select.is_some() {
                return Err("--select has no effect with --html-input; the HTML is printed as-is".to_string());
            }
            if !html.is_file() {
                return Err(format!("HTML input not found: {}", html.display()));
            }
        }

        if self.title.trim().is_empty() {
            return Err("--title cannot be empty".to_string());
        }

        if let Some(ref catalog) = self.catalog
            && !catalog.is_file()
        {
            return Err(format!("Catalog file not found: {}", catalog.display()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("brsr-report").chain(args.iter().copied())).expect("args should parse")
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.format, OutputFormat::Word);
        assert_eq!(args.preset, Preset::Full);
        assert_eq!(args.pdf_engine, PdfEngine::Native);
        assert_eq!(args.title, "BRSR Report");
        assert!(args.select.is_none());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_selected_alias() {
        let args = parse(&["--selected", "Principle 5: Human Rights", "-f", "pdf"]);
        assert_eq!(args.select.as_deref(), Some("Principle 5: Human Rights"));
        assert_eq!(args.format, OutputFormat::Pdf);
    }

    #[test]
    fn test_html_input_rejects_selection() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut args = parse(&["--html-input", file.path().to_str().unwrap(), "-s", "principle-1"]);
        args.format = OutputFormat::Pdf;

        let err = args.validate().unwrap_err();
        assert!(err.contains("--select"), "unexpected error: {}", err);
    }

    #[test]
    fn test_html_input_requires_pdf() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let args = parse(&["--html-input", file.path().to_str().unwrap(), "-f", "html"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_missing_catalog_file() {
        let args = parse(&["--catalog", "/nonexistent/catalog.toml"]);
        assert!(args.validate().unwrap_err().contains("Catalog file not found"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(CliArgs::try_parse_from(["brsr-report", "--format", "xlsx"]).is_err());
    }
}
