/// Tests for catalog module
#[cfg(test)]
mod tests {
    use crate::catalog::{Catalog, Metric, MetricValue, Preset, Principle, validate_principles};
    use crate::error::ReportError;
    use std::io::Write;

    #[test]
    fn test_presets_are_valid() {
        validate_principles(Preset::Basic.catalog().principles()).expect("basic preset should validate");
        validate_principles(Preset::Full.catalog().principles()).expect("full preset should validate");

        assert_eq!(Preset::Basic.catalog().len(), 3);
        assert_eq!(Preset::Full.catalog().len(), 9);
    }

    #[test]
    fn test_full_preset_carries_metrics() {
        for principle in Preset::Full.catalog() {
            assert!(!principle.metrics.is_empty(), "{} should have sample metrics", principle.key);
        }
        assert!(Preset::Basic.catalog().iter().all(|p| p.metrics.is_empty()));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = Catalog::new(vec![]).unwrap_err();
        assert!(matches!(err, ReportError::InvalidInput(_)), "got {:?}", err);
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let err = Catalog::new(vec![Principle::new("dup", "One", "a"), Principle::new("dup", "Two", "b")]).unwrap_err();

        assert!(err.to_string().contains("duplicate principle key 'dup'"), "unexpected message: {}", err);
    }

    #[test]
    fn test_blank_key_rejected() {
        let err = Catalog::new(vec![Principle::new("  ", "Nameless", "a")]).unwrap_err();
        assert!(matches!(err, ReportError::InvalidInput(_)));
    }

    #[test]
    fn test_metric_line_with_and_without_formula() {
        let plain = Metric::new("Complaints received", 132);
        let derived = Metric::new("Energy intensity", 0.0021).with_formula("Total energy / Revenue");

        assert_eq!(plain.display_line(), "Complaints received: 132");
        assert_eq!(derived.display_line(), "Energy intensity: 0.0021 (Formula: Total energy / Revenue)");
    }

    #[test]
    fn test_metric_value_display() {
        assert_eq!(MetricValue::Number(125000.0).to_string(), "125000");
        assert_eq!(MetricValue::Number(4.5).to_string(), "4.5");
        assert_eq!(MetricValue::Text("INR 0".to_string()).to_string(), "INR 0");
    }

    #[test]
    fn test_from_toml_str() {
        let text = r#"
[[principles]]
key = "ethics"
name = "Principle 1: Ethics"
description = "Behave."

[[principles.metrics]]
label = "Trainings"
value = 12

[[principles.metrics]]
label = "Intensity"
value = 0.5
formula = "a / b"

[[principles]]
key = "products"
name = "Principle 2: Products"
description = "Be safe."
"#;

        let catalog = Catalog::from_toml_str(text).expect("should parse");
        assert_eq!(catalog.len(), 2);

        let ethics = &catalog.principles()[0];
        assert_eq!(ethics.metrics.len(), 2);
        assert_eq!(ethics.metrics[0].value, MetricValue::Number(12.0));
        assert_eq!(ethics.metrics[1].formula.as_deref(), Some("a / b"));
        assert!(catalog.principles()[1].metrics.is_empty(), "metrics default to empty");
    }

    #[test]
    fn test_from_json_str() {
        let text = r#"{"principles": [
            {"key": "p1", "name": "One", "description": "first",
             "metrics": [{"label": "Status", "value": "pending"}]}
        ]}"#;

        let catalog = Catalog::from_json_str(text).expect("should parse");
        assert_eq!(catalog.principles()[0].metrics[0].value, MetricValue::Text("pending".to_string()));
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "principles = []").unwrap();

        let err = Catalog::load(file.path()).unwrap_err();
        match err {
            ReportError::Catalog { path, message } => {
                assert_eq!(path, file.path());
                assert!(message.contains("no principles"), "unexpected message: {}", message);
            }
            other => panic!("expected catalog error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_json_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"principles": [{{"key": "k", "name": "N", "description": "D"}}]}}"#).unwrap();

        let catalog = Catalog::load(file.path()).expect("json catalog should load");
        assert_eq!(catalog.principles()[0].key, "k");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(std::path::Path::new("/nonexistent/catalog.toml")).unwrap_err();
        assert!(matches!(err, ReportError::Catalog { .. }));
    }
}
