use std::collections::BTreeMap;

use crate::document::model::{ElementKind, Scene, StoryboardDocument};
use crate::validate::report::Diagnostic;

/// Allowed deviation of the total duration from the target, as a fraction
/// of the target.
pub const DURATION_TOLERANCE_RATIO: f64 = 0.10;

/// Run all business-rule checks over a schema-valid document.
///
/// The four checks are independent and all of them always run, so one
/// pass surfaces every problem. Document-level findings (duration budget,
/// scene-id uniqueness) come first, then per-scene findings in scene
/// order.
pub fn run_business_rules(doc: &StoryboardDocument) -> Vec<Diagnostic> {
    let mut diagnostics = check_duration_tolerance(doc);
    diagnostics.extend(check_scene_id_uniqueness(doc));
    for scene in &doc.scenes {
        diagnostics.extend(check_scene_references(scene));
        diagnostics.extend(check_must_show(scene));
    }
    diagnostics
}

/// Check the total duration against the document's target budget.
///
/// The tolerance boundary is inclusive: a deviation of exactly
/// `target × 0.10` passes. The check fails only on strictly larger
/// deviations.
pub fn check_duration_tolerance(doc: &StoryboardDocument) -> Vec<Diagnostic> {
    let target = doc.meta.duration_target_s;
    let total = doc.total_duration_s();
    let tolerance = target * DURATION_TOLERANCE_RATIO;
    if (total - target).abs() > tolerance {
        return vec![Diagnostic::rule(
            "document",
            format!(
                "total duration {total}s deviates from the {target}s target by more than 10%"
            ),
        )];
    }
    Vec::new()
}

/// Report each scene id that occurs more than once, once per distinct id.
pub fn check_scene_id_uniqueness(doc: &StoryboardDocument) -> Vec<Diagnostic> {
    let mut occurrences: BTreeMap<&str, usize> = BTreeMap::new();
    for scene in &doc.scenes {
        *occurrences.entry(scene.id.as_str()).or_default() += 1;
    }
    occurrences
        .into_iter()
        .filter(|&(_, n)| n > 1)
        .map(|(id, n)| {
            Diagnostic::rule("document", format!("scene id '{id}' is used {n} times"))
        })
        .collect()
}

/// Check arrow endpoints and animation-step targets against the scene's
/// own element ids.
///
/// `"wait"` steps take no target and are exempt. Every missing reference
/// produces its own diagnostic naming the referrer and the missing id.
pub fn check_scene_references(scene: &Scene) -> Vec<Diagnostic> {
    let ids = scene.element_ids();
    let mut diagnostics = Vec::new();

    for element in &scene.visual.elements {
        if element.kind != ElementKind::Arrow {
            continue;
        }
        let scope = format!("scenes[{}].elements[{}]", scene.id, element.id);
        for (field, reference) in [("from", &element.from), ("to", &element.to)] {
            if let Some(target) = reference
                && !ids.contains(target.as_str())
            {
                diagnostics.push(Diagnostic::rule(
                    scope.clone(),
                    format!("arrow '{field}' references unknown element '{target}'"),
                ));
            }
        }
    }

    for (index, step) in scene.animation.steps.iter().enumerate() {
        if step.is_wait() {
            continue;
        }
        let Some(target) = &step.target else {
            continue;
        };
        for id in target.ids() {
            if !ids.contains(id.as_str()) {
                diagnostics.push(Diagnostic::rule(
                    format!("scenes[{}].steps[{index}]", scene.id),
                    format!("animation '{}' targets unknown element '{id}'", step.action),
                ));
            }
        }
    }

    diagnostics
}

/// Check that every `must_show` entry names an element of the same scene.
pub fn check_must_show(scene: &Scene) -> Vec<Diagnostic> {
    let ids = scene.element_ids();
    scene
        .checks
        .must_show
        .iter()
        .filter(|id| !ids.contains(id.as_str()))
        .map(|id| {
            Diagnostic::rule(
                format!("scenes[{}].checks.must_show", scene.id),
                format!("must_show lists unknown element '{id}'"),
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/validate/rules.rs"]
mod tests;
