//! Analysis pipeline - extract, resolve, materialize
//!
//! One `Analyzer::analyze` call runs the whole pipeline for a major/minor
//! selection against a read-only `CatalogStore`. Nothing here fails: missing
//! keys and malformed entries degrade to empty or default values and are
//! reported as `Diagnostic`s for the caller to surface.

use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

pub mod credit;
pub mod extractor;
pub mod materializer;
pub mod resolver;

pub use credit::{CreditRange, CreditSource};
pub use extractor::extract_courses;
pub use materializer::{CurriculumTable, Materializer, SectionKind, SubSection, TableRow};
pub use resolver::{AreaSet, CourseFulfillment, FulfillmentResolver, FulfillmentResult};

use crate::catalog::CatalogStore;
use crate::config::AuditSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticLevel {
    Info,
    Warning,
}

/// A non-fatal observation made while analyzing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

impl Diagnostic {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            DiagnosticLevel::Info => write!(f, "info: {}", self.message),
            DiagnosticLevel::Warning => write!(f, "warning: {}", self.message),
        }
    }
}

/// What the presentation layer should show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "table", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    /// The minor yielded no courses
    NoCourses,
    /// Courses were found but none could be placed in the table
    Unprocessable,
    Table(CurriculumTable),
}

/// Result of one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub major: String,
    pub minor: String,
    pub courses: Vec<String>,
    pub fulfillment: FulfillmentResult,
    pub outcome: AnalysisOutcome,
    pub diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    pub fn table(&self) -> Option<&CurriculumTable> {
        match &self.outcome {
            AnalysisOutcome::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// Runs the pipeline against one catalog store
pub struct Analyzer<'a> {
    store: &'a CatalogStore,
    settings: &'a AuditSettings,
}

impl<'a> Analyzer<'a> {
    pub fn new(store: &'a CatalogStore, settings: &'a AuditSettings) -> Self {
        Self { store, settings }
    }

    /// Extract and resolve without materializing
    pub fn fulfillment(
        &self,
        major: &str,
        minor: &str,
    ) -> (Vec<String>, FulfillmentResult, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();

        let courses = extract_courses(minor, &self.store.minors);
        if self.store.minors.get(minor).is_none() {
            diagnostics.push(Diagnostic::warning(format!(
                "Minor '{}' not found in the minor catalog",
                minor
            )));
        }

        let resolver = FulfillmentResolver::new(self.store, major, &self.settings.area_columns);
        if !resolver.has_major() {
            diagnostics.push(Diagnostic::warning(format!(
                "Major '{}' not found in the major catalog; Major_Core and Major_Elec will be blank",
                major
            )));
        }

        let fulfillment = resolver.resolve_all(&courses);

        let mut hidden: Vec<&str> = Vec::new();
        for entry in fulfillment.entries() {
            for tag in resolver.unknown_tags(&entry.areas) {
                if !hidden.contains(&tag) {
                    hidden.push(tag);
                }
            }
        }
        if !hidden.is_empty() {
            diagnostics.push(Diagnostic::info(format!(
                "Areas without a column are not shown: {}",
                hidden.join(", ")
            )));
        }

        (courses, fulfillment, diagnostics)
    }

    /// Run the full pipeline for a major/minor selection
    pub fn analyze(&self, major: &str, minor: &str) -> Analysis {
        info!("Analyzing minor '{}' against major '{}'", minor, major);

        let (courses, fulfillment, mut diagnostics) = self.fulfillment(major, minor);

        let tree = self
            .store
            .minors
            .get(minor)
            .filter(|_| !courses.is_empty());

        let outcome = match tree {
            None => {
                warn!("No course data found for minor: {}", minor);
                AnalysisOutcome::NoCourses
            }
            Some(tree) => {
                let table = Materializer::new(
                    &self.settings.area_columns,
                    self.settings.default_credit,
                )
                .materialize(minor, tree, &fulfillment);

                if table.is_empty() {
                    warn!("Minor '{}' could not be materialized", minor);
                    AnalysisOutcome::Unprocessable
                } else {
                    diagnostics.extend(credit_diagnostics(&table));
                    AnalysisOutcome::Table(table)
                }
            }
        };

        info!(
            "Analysis finished: {} courses, {} diagnostics",
            courses.len(),
            diagnostics.len()
        );

        Analysis {
            major: major.to_string(),
            minor: minor.to_string(),
            courses,
            fulfillment,
            outcome,
            diagnostics,
        }
    }
}

/// Report rows whose credit came from a fallback path
fn credit_diagnostics(table: &CurriculumTable) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut defaulted = 0;

    for (_, row) in table.rows() {
        match &row.credit_source {
            CreditSource::Explicit => {}
            CreditSource::Inferred { key } => diagnostics.push(Diagnostic::info(format!(
                "Credit for {} read from field '{}'",
                row.course, key
            ))),
            CreditSource::Default => defaulted += 1,
        }
    }

    if defaulted > 0 {
        diagnostics.push(Diagnostic::info(format!(
            "{} course(s) have no credit metadata; showing the default range",
            defaulted
        )));
    }
    diagnostics
}
