use std::collections::BTreeMap;

use crate::foundation::core::{BoundingBox, CanvasFrame};
use crate::layout::grid::Anchor;

/// Scene-scoped registry of placed element geometry.
///
/// The registry is a mapping from element id to the element's bounding box,
/// built incrementally while a scene's elements are placed and discarded
/// when the scene's pass ends. Re-placing an id overwrites the prior entry
/// (last write wins). Iteration order is sorted by id so every check over
/// the registry is deterministic.
#[derive(Clone, Debug, Default)]
pub struct ElementRegistry {
    placed: BTreeMap<String, BoundingBox>,
}

/// Which edge of the canvas frame an element crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// Left frame edge.
    Left,
    /// Right frame edge.
    Right,
    /// Top frame edge.
    Top,
    /// Bottom frame edge.
    Bottom,
}

impl Edge {
    /// Stable issue label for this edge, as surfaced in diagnostics.
    pub fn issue(self) -> &'static str {
        match self {
            Edge::Left => "out_of_left_bound",
            Edge::Right => "out_of_right_bound",
            Edge::Top => "out_of_top_bound",
            Edge::Bottom => "out_of_bottom_bound",
        }
    }
}

/// A single element edge falling outside the inset canvas frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundsViolation {
    /// Offending element id.
    pub id: String,
    /// The edge that crossed the frame.
    pub edge: Edge,
}

/// An unordered pair of elements whose bounding boxes intersect.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlapPair {
    /// First element id (lexicographically smaller).
    pub a: String,
    /// Second element id.
    pub b: String,
}

impl ElementRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placed elements.
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// True if nothing has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Record an element's absolute geometry. Last write wins.
    pub fn place(&mut self, id: impl Into<String>, bbox: BoundingBox) {
        self.placed.insert(id.into(), bbox);
    }

    /// Place an element centered on an anchor with the given intrinsic
    /// extents.
    pub fn place_at_anchor(&mut self, id: impl Into<String>, anchor: Anchor, width: f64, height: f64) {
        self.place(id, BoundingBox::from_center(anchor.position(), width, height));
    }

    /// Geometry of a placed element, if any.
    pub fn get(&self, id: &str) -> Option<&BoundingBox> {
        self.placed.get(id)
    }

    /// Placed element ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.placed.keys().map(String::as_str)
    }

    /// Flag every element edge that falls outside the frame inset by
    /// `margin`.
    ///
    /// Each of the four edges is checked independently, so a single element
    /// can produce up to four violations.
    pub fn check_bounds(&self, frame: CanvasFrame, margin: f64) -> Vec<BoundsViolation> {
        let bounds = frame.inset(margin);
        let mut violations = Vec::new();
        for (id, bbox) in &self.placed {
            if bbox.left() < bounds.left {
                violations.push(BoundsViolation {
                    id: id.clone(),
                    edge: Edge::Left,
                });
            }
            if bbox.right() > bounds.right {
                violations.push(BoundsViolation {
                    id: id.clone(),
                    edge: Edge::Right,
                });
            }
            if bbox.top() > bounds.top {
                violations.push(BoundsViolation {
                    id: id.clone(),
                    edge: Edge::Top,
                });
            }
            if bbox.bottom() < bounds.bottom {
                violations.push(BoundsViolation {
                    id: id.clone(),
                    edge: Edge::Bottom,
                });
            }
        }
        violations
    }

    /// Report every unordered pair of distinct elements whose bounding
    /// boxes intersect on both axes simultaneously.
    ///
    /// Pairwise O(n²) scan; scenes hold tens of elements at most. The
    /// `threshold` parameter is reserved — the current test is a binary
    /// intersection and does not grade by overlap area.
    pub fn check_overlaps(&self, _threshold: f64) -> Vec<OverlapPair> {
        let entries: Vec<(&String, &BoundingBox)> = self.placed.iter().collect();
        let mut overlaps = Vec::new();
        for (i, (id_a, box_a)) in entries.iter().enumerate() {
            for (id_b, box_b) in entries.iter().skip(i + 1) {
                if box_a.intersects(**box_b) {
                    overlaps.push(OverlapPair {
                        a: (*id_a).clone(),
                        b: (*id_b).clone(),
                    });
                }
            }
        }
        overlaps
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/registry.rs"]
mod tests;
