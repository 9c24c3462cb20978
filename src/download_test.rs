/// Tests for download operations
#[cfg(test)]
mod tests {
    use crate::catalog::{Catalog, Preset};
    use crate::download::*;
    use crate::error::ReportError;
    use crate::render::RenderOptions;
    use crate::types::{PdfEngine, SelectionOutcome};

    #[test]
    fn test_word_artifact_metadata() {
        let artifact = render_word(Preset::Full.catalog(), Some("principle-5"), &RenderOptions::default()).unwrap();

        assert_eq!(artifact.filename, "BRSR_Report.docx");
        assert_eq!(artifact.content_disposition(), "attachment; filename=\"BRSR_Report.docx\"");
        assert!(artifact.content_type.contains("wordprocessingml"));
        assert!(artifact.bytes.starts_with(b"PK"));
        assert_eq!(artifact.selection, SelectionOutcome::Matched { key: "principle-5".to_string() });
    }

    #[test]
    fn test_native_pdf_artifact() {
        let artifact =
            render_pdf(Preset::Basic.catalog(), None, PdfEngine::Native, None, &RenderOptions::default()).unwrap();

        assert_eq!(artifact.filename, "BRSR_Report.pdf");
        assert_eq!(artifact.content_disposition(), "attachment; filename=\"BRSR_Report.pdf\"");
        assert_eq!(artifact.content_type, "application/pdf");
        assert!(artifact.bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_unmatched_selection_is_not_an_error() {
        let artifact = render_html(Preset::Full.catalog(), Some("Principle 10"), &RenderOptions::default()).unwrap();

        assert!(artifact.selection.is_unmatched());
        assert_eq!(artifact.filename, "BRSR_Report.html");
    }

    #[test]
    fn test_text_and_json_filenames() {
        let catalog: &Catalog = Preset::Basic.catalog();

        let text = render_text(catalog, None, Some(80), &RenderOptions::default()).unwrap();
        assert_eq!(text.filename, "BRSR_Report.txt");
        assert!(String::from_utf8(text.bytes).unwrap().contains("Principle 2: Product Lifecycle"));

        let json = render_json(catalog, None, &RenderOptions::default()).unwrap();
        assert_eq!(json.filename, "BRSR_Report.json");
    }

    #[test]
    fn test_pdf_from_html_without_browser_fails_cleanly() {
        let err = render_pdf_from_html("<html></html>", Some(std::path::Path::new("/nonexistent/chrome"))).unwrap_err();
        assert!(matches!(err, ReportError::RenderingFailed(_)), "got {:?}", err);
    }
}
