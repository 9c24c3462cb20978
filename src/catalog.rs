/// Principle catalog - the read-only reference data a report is assembled from
///
/// This module handles:
/// - The Principle / Metric records and their display formatting
/// - Catalog validation (non-empty, unique keys)
/// - Built-in presets (3 basic principles, the 9 BRSR principles with sample metrics)
/// - Loading catalogs from TOML or JSON files
///
/// A catalog is constructed once per process and handed to the builder by reference.
use crate::error::{ReportError, Result};
use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Value shown for a metric: a precomputed figure or a free-form placeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integral figures print without a trailing ".0"
            MetricValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            MetricValue::Number(n) => write!(f, "{}", n),
            MetricValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(n: f64) -> Self {
        MetricValue::Number(n)
    }
}

impl From<i32> for MetricValue {
    fn from(n: i32) -> Self {
        MetricValue::Number(n as f64)
    }
}

impl From<i64> for MetricValue {
    fn from(n: i64) -> Self {
        MetricValue::Number(n as f64)
    }
}

impl From<&str> for MetricValue {
    fn from(s: &str) -> Self {
        MetricValue::Text(s.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(s: String) -> Self {
        MetricValue::Text(s)
    }
}

/// A labeled figure attached to a principle, optionally with its derivation formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: MetricValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl Metric {
    pub fn new(label: &str, value: impl Into<MetricValue>) -> Self {
        Self { label: label.to_string(), value: value.into(), formula: None }
    }

    pub fn with_formula(mut self, formula: &str) -> Self {
        self.formula = Some(formula.to_string());
        self
    }

    /// Body line for this metric: `label: value`, plus ` (Formula: ...)` when a formula is known
    pub fn display_line(&self) -> String {
        match &self.formula {
            Some(formula) => format!("{}: {} (Formula: {})", self.label, self.value, formula),
            None => format!("{}: {}", self.label, self.value),
        }
    }
}

/// One thematic category of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principle {
    pub key: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

impl Principle {
    pub fn new(key: &str, name: &str, description: &str) -> Self {
        Self { key: key.to_string(), name: name.to_string(), description: description.to_string(), metrics: Vec::new() }
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metrics.push(metric);
        self
    }
}

/// Built-in catalog presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    /// Three principles, descriptions only
    Basic,
    /// The nine BRSR principles with sample metrics
    Full,
}

impl Preset {
    pub fn catalog(self) -> &'static Catalog {
        match self {
            Preset::Basic => &*BASIC_CATALOG,
            Preset::Full => &*FULL_CATALOG,
        }
    }
}

/// Ordered, validated set of principles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    principles: Vec<Principle>,
}

/// On-disk shape of a catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    principles: Vec<Principle>,
}

impl Catalog {
    /// Build a catalog, rejecting empty input and duplicate keys
    pub fn new(principles: Vec<Principle>) -> Result<Self> {
        validate_principles(&principles)?;
        Ok(Self { principles })
    }

    pub fn principles(&self) -> &[Principle] {
        &self.principles
    }

    pub fn len(&self) -> usize {
        self.principles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.principles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Principle> {
        self.principles.iter()
    }

    /// Parse a catalog from TOML text (`[[principles]]` tables)
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(text).map_err(|e| ReportError::invalid(e.to_string()))?;
        Self::new(file.principles)
    }

    /// Parse a catalog from JSON text (`{"principles": [...]}`)
    pub fn from_json_str(text: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(text).map_err(|e| ReportError::invalid(e.to_string()))?;
        Self::new(file.principles)
    }

    /// Load a catalog file; the format is picked from the extension (`.json`, otherwise TOML)
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading catalog from {:?}", path);

        let text = fs::read_to_string(path)
            .map_err(|e| ReportError::Catalog { path: path.to_path_buf(), message: e.to_string() })?;

        let is_json = path.extension().map(|ext| ext.eq_ignore_ascii_case("json")).unwrap_or(false);
        let parsed = if is_json { Self::from_json_str(&text) } else { Self::from_toml_str(&text) };

        parsed.map_err(|e| match e {
            ReportError::InvalidInput(message) => ReportError::Catalog { path: path.to_path_buf(), message },
            other => other,
        })
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Principle;
    type IntoIter = std::slice::Iter<'a, Principle>;

    fn into_iter(self) -> Self::IntoIter {
        self.principles.iter()
    }
}

/// Check the structural requirements every catalog must meet
pub fn validate_principles(principles: &[Principle]) -> Result<()> {
    if principles.is_empty() {
        return Err(ReportError::invalid("catalog contains no principles"));
    }

    let mut seen = HashSet::new();
    for principle in principles {
        if principle.key.trim().is_empty() {
            return Err(ReportError::invalid(format!("principle '{}' has an empty key", principle.name)));
        }
        if !seen.insert(principle.key.as_str()) {
            return Err(ReportError::invalid(format!("duplicate principle key '{}'", principle.key)));
        }
    }

    Ok(())
}

lazy_static! {
    static ref BASIC_CATALOG: Catalog = Catalog { principles: basic_principles() };
    static ref FULL_CATALOG: Catalog = Catalog { principles: full_principles() };
}

fn basic_principles() -> Vec<Principle> {
    ["Principle 1: Ethics and Transparency", "Principle 2: Product Lifecycle", "Principle 3: Employee Wellbeing"]
        .iter()
        .enumerate()
        .map(|(i, name)| Principle::new(&format!("principle-{}", i + 1), name, &format!("Description of {}...", name)))
        .collect()
}

fn full_principles() -> Vec<Principle> {
    vec![
        Principle::new(
            "principle-1",
            "Principle 1: Ethics, Transparency and Accountability",
            "Businesses should conduct and govern themselves with integrity, and in a manner that is ethical, \
             transparent and accountable.",
        )
        .with_metric(Metric::new("Ethics training coverage of employees (%)", 92))
        .with_metric(Metric::new("Complaints received on conflict of interest", 0))
        .with_metric(
            Metric::new("Fines and penalties paid to regulators", "INR 0")
                .with_formula("Sum of monetary actions taken by regulators during the year"),
        ),
        Principle::new(
            "principle-2",
            "Principle 2: Sustainable and Safe Products",
            "Businesses should provide goods and services in a manner that is sustainable and safe.",
        )
        .with_metric(
            Metric::new("R&D spend on sustainable technologies (%)", 4.5)
                .with_formula("Sustainable R&D spend / Total R&D spend x 100"),
        )
        .with_metric(Metric::new("Inputs sourced sustainably (%)", 38))
        .with_metric(Metric::new("Products reclaimed at end of life", "Not applicable")),
        Principle::new(
            "principle-3",
            "Principle 3: Employee Wellbeing",
            "Businesses should respect and promote the well-being of all employees, including those in their \
             value chains.",
        )
        .with_metric(
            Metric::new("Spending on employee well-being (% of revenue)", 0.8)
                .with_formula("Well-being expenditure / Revenue from operations x 100"),
        )
        .with_metric(Metric::new("Lost time injury frequency rate", 0.12).with_formula(
            "Number of lost time injuries x 1,000,000 / Total hours worked",
        ))
        .with_metric(Metric::new("Return to work rate after parental leave (%)", 96)),
        Principle::new(
            "principle-4",
            "Principle 4: Stakeholder Engagement",
            "Businesses should respect the interests of and be responsive to all their stakeholders.",
        )
        .with_metric(Metric::new("Stakeholder groups identified", 7))
        .with_metric(Metric::new("Consultations held with vulnerable groups", 14)),
        Principle::new(
            "principle-5",
            "Principle 5: Human Rights",
            "Businesses should respect and promote human rights.",
        )
        .with_metric(Metric::new("Employees trained on human rights (%)", 85))
        .with_metric(Metric::new("Complaints on discrimination at workplace", 2))
        .with_metric(
            Metric::new("Gross wages paid to females (%)", 31.4)
                .with_formula("Gross wages paid to females / Total wages paid x 100"),
        ),
        Principle::new(
            "principle-6",
            "Principle 6: Environmental Protection",
            "Businesses should respect and make efforts to protect and restore the environment.",
        )
        .with_metric(
            Metric::new("Total energy consumption (GJ)", 125000)
                .with_formula("Electricity + Fuel + Other sources consumed"),
        )
        .with_metric(
            Metric::new("Energy intensity per rupee of turnover", 0.0021)
                .with_formula("Total energy consumed / Revenue from operations"),
        )
        .with_metric(Metric::new("Total water withdrawal (kilolitres)", 48200))
        .with_metric(
            Metric::new("Scope 1 and 2 emissions (tCO2e)", 9650)
                .with_formula("Direct emissions + Indirect emissions from purchased energy"),
        ),
        Principle::new(
            "principle-7",
            "Principle 7: Responsible Public Policy Advocacy",
            "Businesses, when engaging in influencing public and regulatory policy, should do so in a manner that \
             is responsible and transparent.",
        )
        .with_metric(Metric::new("Trade and industry chambers affiliated with", 5))
        .with_metric(Metric::new("Adverse orders on anti-competitive conduct", 0)),
        Principle::new(
            "principle-8",
            "Principle 8: Inclusive Growth",
            "Businesses should promote inclusive growth and equitable development.",
        )
        .with_metric(
            Metric::new("Input material sourced from MSMEs and small producers (%)", 27)
                .with_formula("Purchases from MSMEs / Total purchases x 100"),
        )
        .with_metric(Metric::new("CSR beneficiaries from vulnerable groups (%)", 64)),
        Principle::new(
            "principle-9",
            "Principle 9: Consumer Responsibility",
            "Businesses should engage with and provide value to their consumers in a responsible manner.",
        )
        .with_metric(Metric::new("Consumer complaints received", 132))
        .with_metric(
            Metric::new("Complaints resolved within 30 days (%)", 97)
                .with_formula("Complaints resolved within 30 days / Complaints received x 100"),
        )
        .with_metric(Metric::new("Product recalls on safety grounds", 0)),
    ]
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;
