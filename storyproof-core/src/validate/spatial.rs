use crate::document::model::Scene;
use crate::foundation::core::CanvasFrame;
use crate::layout::grid::Anchor;
use crate::layout::registry::ElementRegistry;
use crate::layout::sizing::intrinsic_size;
use crate::style::StyleConfig;
use crate::validate::report::Diagnostic;

/// Default inset between the nominal frame and legal element positions.
pub const DEFAULT_MARGIN: f64 = 0.5;

/// Default overlap threshold passed to the registry (reserved parameter).
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.3;

/// Spatial-check the layout of one scene with default style, frame,
/// margin, and threshold.
pub fn check_scene_layout(scene: &Scene) -> Vec<Diagnostic> {
    check_scene_layout_with(
        scene,
        &StyleConfig::default(),
        CanvasFrame::default(),
        DEFAULT_MARGIN,
        DEFAULT_OVERLAP_THRESHOLD,
    )
}

/// Spatial-check the layout of one scene.
///
/// Builds a fresh [`ElementRegistry`] for the scene, places every
/// non-arrow element at its anchor (default `middle-center`), and reports
/// unknown anchors, out-of-bounds edges, and pairwise overlaps. The
/// registry is scoped to this call; nothing leaks across scenes.
pub fn check_scene_layout_with(
    scene: &Scene,
    style: &StyleConfig,
    frame: CanvasFrame,
    margin: f64,
    overlap_threshold: f64,
) -> Vec<Diagnostic> {
    let mut registry = ElementRegistry::new();
    let mut diagnostics = Vec::new();

    for element in &scene.visual.elements {
        let Some((width, height)) = intrinsic_size(element, style) else {
            continue; // arrows span between endpoints
        };
        let anchor = match element.anchor.as_deref() {
            None => Anchor::DEFAULT,
            Some(name) => match name.parse::<Anchor>() {
                Ok(anchor) => anchor,
                Err(err) => {
                    diagnostics.push(Diagnostic::spatial(
                        format!("scenes[{}].elements[{}]", scene.id, element.id),
                        err.to_string(),
                    ));
                    continue;
                }
            },
        };
        registry.place_at_anchor(&element.id, anchor, width, height);
    }

    tracing::debug!(
        scene = %scene.id,
        placed = registry.len(),
        "scene layout registered"
    );

    for violation in registry.check_bounds(frame, margin) {
        diagnostics.push(Diagnostic::spatial(
            format!("scenes[{}].elements[{}]", scene.id, violation.id),
            format!(
                "{}: element extends past the canvas frame (margin {margin})",
                violation.edge.issue()
            ),
        ));
    }

    for pair in registry.check_overlaps(overlap_threshold) {
        diagnostics.push(Diagnostic::spatial(
            format!("scenes[{}]", scene.id),
            format!("overlap: elements '{}' and '{}' intersect", pair.a, pair.b),
        ));
    }

    diagnostics
}

#[cfg(test)]
#[path = "../../tests/unit/validate/spatial.rs"]
mod tests;
