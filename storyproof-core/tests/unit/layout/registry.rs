use super::*;
use crate::foundation::core::Point;

fn boxed(x: f64, y: f64, w: f64, h: f64) -> BoundingBox {
    BoundingBox::from_center(Point::new(x, y), w, h)
}

#[test]
fn place_is_last_write_wins() {
    let mut reg = ElementRegistry::new();
    reg.place("a", boxed(0.0, 0.0, 1.0, 1.0));
    reg.place("a", boxed(3.0, 0.0, 1.0, 1.0));
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.get("a").unwrap().center, Point::new(3.0, 0.0));
}

#[test]
fn place_at_anchor_uses_grid_coordinates() {
    let mut reg = ElementRegistry::new();
    reg.place_at_anchor("title", Anchor::TopCenter, 3.0, 0.8);
    let bb = reg.get("title").unwrap();
    assert_eq!(bb.center, Point::new(0.0, 2.5));
    assert_eq!(bb.width, 3.0);
}

#[test]
fn element_inside_frame_has_no_bounds_violations() {
    let mut reg = ElementRegistry::new();
    reg.place("a", boxed(0.0, 0.0, 2.0, 1.0));
    assert!(reg.check_bounds(CanvasFrame::default(), 0.5).is_empty());
}

#[test]
fn left_overhang_flags_exactly_the_left_edge() {
    let mut reg = ElementRegistry::new();
    // Left edge at -7.5, one unit past the inset bound of -6.5.
    reg.place("a", boxed(-7.0, 0.0, 1.0, 1.0));
    let violations = reg.check_bounds(CanvasFrame::default(), 0.5);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].id, "a");
    assert_eq!(violations[0].edge, Edge::Left);
    assert_eq!(violations[0].edge.issue(), "out_of_left_bound");
}

#[test]
fn oversized_element_flags_all_four_edges() {
    let mut reg = ElementRegistry::new();
    reg.place("huge", boxed(0.0, 0.0, 20.0, 12.0));
    let violations = reg.check_bounds(CanvasFrame::default(), 0.5);
    let edges: Vec<Edge> = violations.iter().map(|v| v.edge).collect();
    assert_eq!(edges, [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom]);
}

#[test]
fn overlap_requires_both_axes() {
    let mut reg = ElementRegistry::new();
    // [x:0..2, y:0..1] and [x:1..3, y:0..1] intersect on both axes.
    reg.place("a", boxed(1.0, 0.5, 2.0, 1.0));
    reg.place("b", boxed(2.0, 0.5, 2.0, 1.0));
    let overlaps = reg.check_overlaps(0.3);
    assert_eq!(overlaps.len(), 1);
    assert_eq!(overlaps[0].a, "a");
    assert_eq!(overlaps[0].b, "b");
}

#[test]
fn horizontally_disjoint_boxes_never_overlap() {
    let mut reg = ElementRegistry::new();
    // [x:0..1] and [x:2..3]: disjoint horizontally, identical vertically.
    reg.place("a", boxed(0.5, 0.5, 1.0, 1.0));
    reg.place("b", boxed(2.5, 0.5, 1.0, 1.0));
    assert!(reg.check_overlaps(0.3).is_empty());
}

#[test]
fn overlap_pairs_are_unordered_and_unique() {
    let mut reg = ElementRegistry::new();
    reg.place("a", boxed(0.0, 0.0, 4.0, 4.0));
    reg.place("b", boxed(0.0, 0.0, 4.0, 4.0));
    reg.place("c", boxed(0.0, 0.0, 4.0, 4.0));
    let overlaps = reg.check_overlaps(0.3);
    // Three mutually overlapping elements produce exactly the 3 pairs.
    assert_eq!(overlaps.len(), 3);
    for pair in &overlaps {
        assert!(pair.a < pair.b);
    }
}
