/// Configuration resolution module
///
/// This module handles:
/// - Building a ReportRequest from CLI arguments
/// - Resolving the catalog (explicit file, $BRSR_CATALOG, config dir, built-in preset)
/// - Resolving the output target and the browser binary
use crate::catalog::{Catalog, Preset};
use crate::cli::{CliArgs, default_config_dir};
use crate::render::find_chrome;
use crate::types::*;
use log::debug;
use std::borrow::Cow;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming a catalog file
pub const CATALOG_ENV: &str = "BRSR_CATALOG";

/// Where the catalog came from, for status output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Preset(Preset),
}

/// Build a complete ReportRequest from CLI arguments
///
/// Everything is resolved upfront so rendering receives a validated, immutable request.
pub fn build_report_request(args: &CliArgs) -> Result<(ReportRequest, CatalogSource), String> {
    debug!("Building report request from CLI args");

    // Raw HTML input never reads the catalog, so a broken catalog file must not block it
    let source = if args.html_input.is_some() {
        CatalogSource::Preset(args.preset)
    } else {
        let config_catalog = default_config_dir().join("catalog.toml");
        let env_catalog = env::var_os(CATALOG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from);
        resolve_catalog_source(args, env_catalog, &config_catalog)
    };

    let catalog = match source {
        CatalogSource::File(ref path) => Cow::Owned(Catalog::load(path).map_err(|e| e.to_string())?),
        CatalogSource::Preset(preset) => Cow::Borrowed(preset.catalog()),
    };

    debug!("Catalog {:?} with {} principles", source, catalog.len());

    let chrome = if args.pdf_engine == PdfEngine::Browser && args.format == OutputFormat::Pdf {
        let chrome = args.chrome.clone().or_else(find_chrome).ok_or_else(|| {
            "The browser PDF engine needs Chrome or Chromium; pass --chrome <PATH> or set BRSR_CHROME".to_string()
        })?;
        debug!("Using browser {:?}", chrome);
        Some(chrome)
    } else {
        args.chrome.clone()
    };

    let request = ReportRequest {
        catalog,
        selected: args.select.clone(),
        format: args.format,
        pdf_engine: args.pdf_engine,
        html_input: args.html_input.clone(),
        chrome,
        title: args.title.clone(),
        timestamp: !args.no_timestamp,
        output: resolve_output(args.output.as_deref(), args.format),
    };

    Ok((request, source))
}

/// Pick the catalog: --catalog, then the env var, then the config-dir file if it exists, then the preset
fn resolve_catalog_source(args: &CliArgs, env_catalog: Option<PathBuf>, config_catalog: &Path) -> CatalogSource {
    if let Some(ref path) = args.catalog {
        debug!("Using catalog from --catalog: {:?}", path);
        return CatalogSource::File(path.clone());
    }

    if let Some(path) = env_catalog {
        debug!("Using catalog from {}: {:?}", CATALOG_ENV, path);
        return CatalogSource::File(path);
    }

    if config_catalog.is_file() {
        debug!("Using catalog from config dir: {:?}", config_catalog);
        return CatalogSource::File(config_catalog.to_path_buf());
    }

    CatalogSource::Preset(args.preset)
}

/// Resolve `--output`: "-" is stdout, a directory receives the suggested filename
fn resolve_output(output: Option<&Path>, format: OutputFormat) -> OutputTarget {
    match output {
        Some(path) if path.as_os_str() == "-" => OutputTarget::Stdout,
        Some(path) if path.is_dir() => OutputTarget::File(path.join(format.suggested_filename())),
        Some(path) => OutputTarget::File(path.to_path_buf()),
        None => OutputTarget::File(PathBuf::from(format.suggested_filename())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
