//! Report content assembly.
//!
//! Turns a catalog plus an optional selection into the ordered index and section list
//! every renderer consumes. Pure: no I/O, no clock, no randomness, so identical inputs
//! always produce identical models.
//!
//! # Ordering
//!
//! 1. **Match**: the selection is compared with each principle's key, then with each
//!    display name, using exact string equality
//! 2. **Reorder**: a matched principle moves to the front; everything else keeps its
//!    catalog order
//! 3. **Fallback**: an empty selection means "no selection"; a selection that matches
//!    nothing keeps catalog order and is reported as `SelectionOutcome::Unmatched`

use crate::catalog::{Catalog, Principle};
use crate::error::{ReportError, Result};
use crate::types::{BodyLine, IndexEntry, ReportModel, Section, SelectionOutcome};
use log::{debug, warn};

/// Closing line of every section
pub const TRAILING_NOTE: &str = "Additional automated metrics will be added in a future release.";

/// Builds `ReportModel`s from a borrowed, read-only set of principles.
#[derive(Debug, Clone, Copy)]
pub struct ReportContentBuilder<'a> {
    principles: &'a [Principle],
}

impl<'a> ReportContentBuilder<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { principles: catalog.principles() }
    }

    /// Use a raw principle slice; structural validation then happens in `build`
    #[cfg(test)]
    pub fn from_principles(principles: &'a [Principle]) -> Self {
        Self { principles }
    }

    /// Assemble the index and sections, moving `selected` to the front when it matches.
    pub fn build(&self, selected: Option<&str>) -> Result<ReportModel> {
        if self.principles.is_empty() {
            return Err(ReportError::invalid("cannot build a report from an empty catalog"));
        }

        let (ordered, selection) = self.order(selected);

        let index = ordered.iter().map(|p| index_entry(p)).collect();
        let sections = ordered.iter().map(|p| section(p)).collect();

        Ok(ReportModel { index, sections, selection })
    }

    /// Output order plus the outcome of applying the selection
    fn order(&self, selected: Option<&str>) -> (Vec<&'a Principle>, SelectionOutcome) {
        let requested = match selected {
            None | Some("") => return (self.principles.iter().collect(), SelectionOutcome::Default),
            Some(s) => s,
        };

        let position = self
            .principles
            .iter()
            .position(|p| p.key == requested)
            .or_else(|| self.principles.iter().position(|p| p.name == requested));

        match position {
            Some(i) => {
                let chosen = &self.principles[i];
                debug!("Selection '{}' matched {} at position {}", requested, chosen.key, i);

                let mut ordered = Vec::with_capacity(self.principles.len());
                ordered.push(chosen);
                ordered.extend(self.principles.iter().enumerate().filter(|(j, _)| *j != i).map(|(_, p)| p));

                (ordered, SelectionOutcome::Matched { key: chosen.key.clone() })
            }
            None => {
                warn!("Selection '{}' matches no principle; using catalog order", requested);
                (self.principles.iter().collect(), SelectionOutcome::Unmatched { requested: requested.to_string() })
            }
        }
    }
}

fn index_entry(principle: &Principle) -> IndexEntry {
    IndexEntry { text: format!("{} - {}", principle.name, principle.description), level: 0 }
}

fn section(principle: &Principle) -> Section {
    let mut body = Vec::with_capacity(principle.metrics.len() + 2);
    body.push(BodyLine::Text(principle.description.clone()));
    body.extend(principle.metrics.iter().map(|m| BodyLine::Bullet(m.display_line())));
    body.push(BodyLine::Text(TRAILING_NOTE.to_string()));

    Section { heading: principle.name.clone(), page_break_before: true, body }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
