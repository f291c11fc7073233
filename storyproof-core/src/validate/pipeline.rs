use rayon::prelude::*;
use serde_json::Value;

use crate::document::model::StoryboardDocument;
use crate::foundation::core::CanvasFrame;
use crate::foundation::error::StoryproofResult;
use crate::style::StyleConfig;
use crate::validate::report::{Summary, ValidationReport};
use crate::validate::rules;
use crate::validate::schema::SchemaValidator;
use crate::validate::spatial;

/// Options for a validation run.
#[derive(Clone, Debug)]
pub struct ValidateOptions {
    /// Style configuration used to derive element sizes.
    pub style: StyleConfig,
    /// Canvas frame elements must stay inside.
    pub frame: CanvasFrame,
    /// Inset between the frame and legal element positions.
    pub margin: f64,
    /// Overlap threshold forwarded to the registry (reserved parameter).
    pub overlap_threshold: f64,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            style: StyleConfig::default(),
            frame: CanvasFrame::default(),
            margin: spatial::DEFAULT_MARGIN,
            overlap_threshold: spatial::DEFAULT_OVERLAP_THRESHOLD,
        }
    }
}

/// Validate a storyboard tree against a schema tree with default options.
pub fn validate_tree(storyboard: &Value, schema: &Value) -> StoryproofResult<ValidationReport> {
    validate_tree_with(storyboard, schema, &ValidateOptions::default())
}

/// Validate a storyboard tree against a schema tree.
///
/// Stage order is fixed: schema conformance gates everything; on any
/// structural violation the report carries only schema diagnostics and the
/// later stages never run. Otherwise business rules and spatial checks
/// both run to completion and their findings merge, rules first.
///
/// Per-scene checks are fanned out across scenes; results are collected
/// in scene order, so the report is identical no matter how the work is
/// scheduled. Only fatal conditions (unreadable input, an uncompilable
/// schema) surface as errors — every finding about the document itself
/// comes back as data.
#[tracing::instrument(skip(storyboard, schema, opts))]
pub fn validate_tree_with(
    storyboard: &Value,
    schema: &Value,
    opts: &ValidateOptions,
) -> StoryproofResult<ValidationReport> {
    let validator = SchemaValidator::new(schema)?;
    let violations = validator.validate(storyboard);
    if !violations.is_empty() {
        tracing::debug!(count = violations.len(), "schema gate failed");
        return Ok(ValidationReport::from_schema_violations(
            violations,
            Summary::of_tree(storyboard),
        ));
    }

    let doc = StoryboardDocument::from_tree(storyboard)?;
    let summary = Summary::of(&doc);

    // Document-level rules need the whole scene set; per-scene rule and
    // spatial checks are independent and run in parallel across scenes.
    let mut rule_findings = rules::check_duration_tolerance(&doc);
    rule_findings.extend(rules::check_scene_id_uniqueness(&doc));

    let per_scene: Vec<_> = doc
        .scenes
        .par_iter()
        .map(|scene| {
            let mut scene_rules = rules::check_scene_references(scene);
            scene_rules.extend(rules::check_must_show(scene));
            let scene_spatial = spatial::check_scene_layout_with(
                scene,
                &opts.style,
                opts.frame,
                opts.margin,
                opts.overlap_threshold,
            );
            (scene_rules, scene_spatial)
        })
        .collect();

    let mut spatial_findings = Vec::new();
    for (scene_rules, scene_spatial) in per_scene {
        rule_findings.extend(scene_rules);
        spatial_findings.extend(scene_spatial);
    }

    tracing::debug!(
        rules = rule_findings.len(),
        spatial = spatial_findings.len(),
        "validation complete"
    );
    Ok(ValidationReport::from_findings(
        rule_findings,
        spatial_findings,
        summary,
    ))
}

/// Validate a storyboard tree against the built-in schema.
pub fn validate_tree_builtin(storyboard: &Value) -> StoryproofResult<ValidationReport> {
    let schema = crate::validate::schema::builtin_schema_tree()?;
    validate_tree(storyboard, &schema)
}
