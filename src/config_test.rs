/// Tests for config module
#[cfg(test)]
mod tests {
    use crate::catalog::Preset;
    use crate::cli::CliArgs;
    use crate::config::{CatalogSource, build_report_request, resolve_catalog_source, resolve_output};
    use crate::types::{OutputFormat, OutputTarget, PdfEngine};
    use clap::Parser;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    fn args(extra: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("brsr-report").chain(extra.iter().copied())).unwrap()
    }

    #[test]
    fn test_explicit_catalog_wins() {
        let args = args(&["--catalog", "mine.toml"]);
        let source = resolve_catalog_source(&args, Some(PathBuf::from("env.toml")), Path::new("/nonexistent"));
        assert_eq!(source, CatalogSource::File(PathBuf::from("mine.toml")));
    }

    #[test]
    fn test_env_catalog_before_preset() {
        let args = args(&[]);
        let source = resolve_catalog_source(&args, Some(PathBuf::from("env.toml")), Path::new("/nonexistent"));
        assert_eq!(source, CatalogSource::File(PathBuf::from("env.toml")));
    }

    #[test]
    fn test_config_dir_catalog_used_when_present() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let source = resolve_catalog_source(&args(&[]), None, file.path());
        assert_eq!(source, CatalogSource::File(file.path().to_path_buf()));
    }

    #[test]
    fn test_preset_fallback() {
        let source = resolve_catalog_source(&args(&["--preset", "basic"]), None, Path::new("/nonexistent"));
        assert_eq!(source, CatalogSource::Preset(Preset::Basic));
    }

    #[test]
    fn test_output_resolution() {
        assert_eq!(resolve_output(Some(Path::new("-")), OutputFormat::Pdf), OutputTarget::Stdout);
        assert_eq!(
            resolve_output(None, OutputFormat::Word),
            OutputTarget::File(PathBuf::from("BRSR_Report.docx"))
        );
        assert_eq!(
            resolve_output(Some(Path::new("out/custom.pdf")), OutputFormat::Pdf),
            OutputTarget::File(PathBuf::from("out/custom.pdf"))
        );

        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            resolve_output(Some(dir.path()), OutputFormat::Html),
            OutputTarget::File(dir.path().join("BRSR_Report.html"))
        );
    }

    #[test]
    fn test_request_from_catalog_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[[principles]]\nkey = \"a\"\nname = \"Alpha\"\ndescription = \"first\"\n\n\
             [[principles]]\nkey = \"b\"\nname = \"Beta\"\ndescription = \"second\""
        )
        .unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let args = args(&["--catalog", &path, "-s", "b", "-f", "json", "--no-timestamp"]);
        let (request, source) = build_report_request(&args).expect("request should build");

        assert_eq!(source, CatalogSource::File(file.path().to_path_buf()));
        assert_eq!(request.catalog.len(), 2);
        assert_eq!(request.selected.as_deref(), Some("b"));
        assert_eq!(request.format, OutputFormat::Json);
        assert!(!request.timestamp);
    }

    #[test]
    fn test_invalid_catalog_file_is_config_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "principles = []").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let err = build_report_request(&args(&["--catalog", &path])).unwrap_err();
        assert!(err.contains("no principles"), "unexpected error: {}", err);
    }

    #[test]
    fn test_browser_engine_uses_explicit_chrome() {
        let args = args(&["-f", "pdf", "--pdf-engine", "browser", "--chrome", "/opt/chrome/chrome", "--preset", "basic"]);
        // An explicit --catalog keeps the test independent of BRSR_CATALOG and the config dir
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"principles": [{{"key": "k", "name": "N", "description": "D"}}]}}"#).unwrap();
        let mut args = args;
        args.catalog = Some(file.path().to_path_buf());

        let (request, _) = build_report_request(&args).unwrap();
        assert_eq!(request.pdf_engine, PdfEngine::Browser);
        assert_eq!(request.chrome, Some(PathBuf::from("/opt/chrome/chrome")));
    }

    #[test]
    fn test_html_input_skips_catalog_loading() {
        let html = tempfile::Builder::new().suffix(".html").tempfile().unwrap();
        let html_path = html.path().to_str().unwrap().to_string();
        let args = args(&[
            "--html-input",
            &html_path,
            "-f",
            "pdf",
            "--pdf-engine",
            "browser",
            "--chrome",
            "/opt/chrome/chrome",
            "--catalog",
            "/nonexistent/catalog.toml",
        ]);

        let (request, source) = build_report_request(&args).expect("catalog is not read for raw HTML");
        assert_eq!(source, CatalogSource::Preset(Preset::Full));
        assert_eq!(request.html_input, Some(html.path().to_path_buf()));
    }
}
