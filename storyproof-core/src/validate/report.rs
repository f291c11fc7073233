use crate::document::model::StoryboardDocument;
use crate::validate::schema::SchemaViolation;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Severity class of a diagnostic.
///
/// Schema errors always outrank the other classes: when any are present,
/// business-rule and spatial checking is skipped for the run.
pub enum Severity {
    /// Structural schema violation.
    Schema,
    /// Business-rule violation.
    Rule,
    /// Spatial layout violation.
    Spatial,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One reported problem, tagged with where it was found.
pub struct Diagnostic {
    /// Path of the offending node, e.g. `scenes[intro].elements[arrow1]`
    /// or `document` for document-level findings.
    pub scope: String,
    /// Human-readable description.
    pub message: String,
    /// Severity class.
    pub severity: Severity,
}

impl Diagnostic {
    /// Build a business-rule diagnostic.
    pub fn rule(scope: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            message: message.into(),
            severity: Severity::Rule,
        }
    }

    /// Build a spatial diagnostic.
    pub fn spatial(scope: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            message: message.into(),
            severity: Severity::Spatial,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.severity {
            Severity::Schema => "schema",
            Severity::Rule => "rule",
            Severity::Spatial => "spatial",
        };
        write!(f, "[{tag}] {}: {}", self.scope, self.message)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Summary statistics over the validated document.
pub struct Summary {
    /// Number of scenes.
    pub scene_count: usize,
    /// Sum of scene durations in seconds.
    pub total_duration_s: f64,
    /// Total element count across scenes.
    pub element_count: usize,
}

impl Summary {
    /// Summary of a parsed document.
    pub fn of(doc: &StoryboardDocument) -> Self {
        Self {
            scene_count: doc.scenes.len(),
            total_duration_s: doc.total_duration_s(),
            element_count: doc.element_count(),
        }
    }

    /// Best-effort summary of a raw JSON tree.
    ///
    /// Used when schema validation fails and the typed model is therefore
    /// unavailable; counts whatever well-shaped pieces exist.
    pub fn of_tree(tree: &serde_json::Value) -> Self {
        let scenes = tree
            .get("scenes")
            .and_then(|s| s.as_array())
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let total_duration_s = scenes
            .iter()
            .filter_map(|s| s.get("duration_s").and_then(|d| d.as_f64()))
            .sum();
        let element_count = scenes
            .iter()
            .filter_map(|s| s.get("visual")?.get("elements")?.as_array())
            .map(Vec::len)
            .sum();
        Self {
            scene_count: scenes.len(),
            total_duration_s,
            element_count,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Ordered validation report: diagnostics plus summary statistics.
///
/// Schema diagnostics, when present, are the only content; otherwise
/// business-rule diagnostics precede spatial ones. An empty list is a
/// pass.
pub struct ValidationReport {
    /// Ordered diagnostics.
    pub diagnostics: Vec<Diagnostic>,
    /// Summary statistics.
    pub summary: Summary,
}

impl ValidationReport {
    /// True iff no problems were reported.
    pub fn passed(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Assemble the schema-failure form of the report.
    ///
    /// Nothing else is appended after schema violations; the later stages
    /// never ran.
    pub fn from_schema_violations(violations: Vec<SchemaViolation>, summary: Summary) -> Self {
        let diagnostics = violations
            .into_iter()
            .map(|v| Diagnostic {
                scope: v.path,
                message: v.message,
                severity: Severity::Schema,
            })
            .collect();
        Self {
            diagnostics,
            summary,
        }
    }

    /// Assemble the post-schema form: business-rule diagnostics followed
    /// by spatial diagnostics.
    pub fn from_findings(
        rules: Vec<Diagnostic>,
        spatial: Vec<Diagnostic>,
        summary: Summary,
    ) -> Self {
        let mut diagnostics = rules;
        diagnostics.extend(spatial);
        Self {
            diagnostics,
            summary,
        }
    }
}
