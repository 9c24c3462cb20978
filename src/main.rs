// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod builder;
mod catalog;
mod cli;
mod config;
mod download;
mod error;
mod render;
mod types;
mod ui;

use config::CatalogSource;
use download::Artifact;
use log::info;
use render::RenderOptions;
use std::fs;
use std::io::Write;
use types::*;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Resolve catalog, selection and output once; the request is read-only from here on
    let (request, source) = match config::build_report_request(&args) {
        Ok(r) => r,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    if args.list {
        print_catalog_listing(&request, &source);
        return;
    }

    let artifact = match render_artifact(&request) {
        Ok(a) => a,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if artifact.selection.is_unmatched() {
        let requested = request.selected.as_deref().unwrap_or_default();
        ui::print_warning(&format!("'{}' matches no principle; sections keep catalog order", requested));
    }

    if let Err(e) = write_artifact(&artifact, &request.output) {
        ui::print_error(&e);
        std::process::exit(1);
    }
}

/// Dispatch to the download operation for the requested format
fn render_artifact(request: &ReportRequest) -> error::Result<Artifact> {
    let mut options = RenderOptions::new(&request.title);
    if request.timestamp {
        options = options.with_generated_at(chrono::Local::now());
    }

    let catalog: &catalog::Catalog = &request.catalog;
    let selected = request.selected.as_deref();
    let chrome = request.chrome.as_deref();

    match request.format {
        OutputFormat::Word => download::render_word(catalog, selected, &options),
        OutputFormat::Pdf => match request.html_input {
            Some(ref path) => {
                let html = fs::read_to_string(path).map_err(|e| {
                    error::ReportError::invalid(format!("failed to read HTML input {}: {}", path.display(), e))
                })?;
                download::render_pdf_from_html(&html, chrome)
            }
            None => download::render_pdf(catalog, selected, request.pdf_engine, chrome, &options),
        },
        OutputFormat::Html => download::render_html(catalog, selected, &options),
        OutputFormat::Json => download::render_json(catalog, selected, &options),
        OutputFormat::Text => download::render_text(catalog, selected, None, &options),
    }
}

/// Write the finished artifact; only called once every byte has been rendered
fn write_artifact(artifact: &Artifact, target: &OutputTarget) -> Result<(), String> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&artifact.bytes)
                .and_then(|_| stdout.flush())
                .map_err(|e| format!("Failed to write to stdout: {}", e))
        }
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create output directory {}: {}", parent.display(), e))?;
            }
            fs::write(path, &artifact.bytes).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;

            info!("Wrote {} ({}, {} bytes)", path.display(), artifact.content_type, artifact.bytes.len());
            ui::status(&format!(
                "wrote {} [{}] ({} bytes)",
                path.display(),
                artifact.content_disposition(),
                artifact.bytes.len()
            ));
            Ok(())
        }
    }
}

/// Print the catalog's keys and names, in order
fn print_catalog_listing(request: &ReportRequest, source: &CatalogSource) {
    let origin = match source {
        CatalogSource::File(path) => path.display().to_string(),
        CatalogSource::Preset(preset) => format!("built-in {:?} preset", preset).to_lowercase(),
    };

    println!("Catalog: {} ({} principles)", origin, request.catalog.len());
    for principle in request.catalog.iter() {
        println!("  {:<16} {} ({} metrics)", principle.key, principle.name, principle.metrics.len());
    }
}
