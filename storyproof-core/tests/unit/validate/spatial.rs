use super::*;
use crate::document::model::StoryboardDocument;

fn scene(json: &str) -> Scene {
    let doc: StoryboardDocument = StoryboardDocument::from_json_str(json).unwrap();
    doc.scenes.into_iter().next().unwrap()
}

#[test]
fn well_spread_elements_produce_no_diagnostics() {
    let s = scene(
        r#"{ "scenes": [{ "id": "s1", "duration_s": 10, "visual": { "elements": [
            { "id": "a", "type": "box", "anchor": "top-left" },
            { "id": "b", "type": "box", "anchor": "bottom-right" },
            { "id": "c", "type": "text", "content": "hi", "anchor": "middle-center" }
        ]}}]}"#,
    );
    assert_eq!(check_scene_layout(&s), vec![]);
}

#[test]
fn unknown_anchor_is_reported_and_element_skipped() {
    let s = scene(
        r#"{ "scenes": [{ "id": "s1", "duration_s": 10, "visual": { "elements": [
            { "id": "a", "type": "box", "anchor": "upper-left" }
        ]}}]}"#,
    );
    let diags = check_scene_layout(&s);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].scope, "scenes[s1].elements[a]");
    assert!(diags[0].message.contains("unknown anchor 'upper-left'"));
}

#[test]
fn wide_element_on_an_edge_anchor_crosses_the_frame() {
    // 7 units wide centered at x = -4.5: left edge lands at -8.0, one and
    // a half units past the inset bound of -6.5.
    let s = scene(
        r#"{ "scenes": [{ "id": "s1", "duration_s": 10, "visual": { "elements": [
            { "id": "wide", "type": "box", "anchor": "middle-left", "width": 7.0, "height": 1.0 }
        ]}}]}"#,
    );
    let diags = check_scene_layout(&s);
    assert_eq!(diags.len(), 1);
    assert!(diags[0].message.contains("out_of_left_bound"));
}

#[test]
fn two_elements_on_the_same_anchor_overlap() {
    let s = scene(
        r#"{ "scenes": [{ "id": "s1", "duration_s": 10, "visual": { "elements": [
            { "id": "a", "type": "box", "anchor": "middle-center" },
            { "id": "b", "type": "box", "anchor": "middle-center" }
        ]}}]}"#,
    );
    let diags = check_scene_layout(&s);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].scope, "scenes[s1]");
    assert!(diags[0].message.contains("'a' and 'b'"));
}

#[test]
fn arrows_are_not_placed() {
    let s = scene(
        r#"{ "scenes": [{ "id": "s1", "duration_s": 10, "visual": { "elements": [
            { "id": "a", "type": "box", "anchor": "middle-left" },
            { "id": "b", "type": "box", "anchor": "middle-right" },
            { "id": "link", "type": "arrow", "from": "a", "to": "b" }
        ]}}]}"#,
    );
    assert_eq!(check_scene_layout(&s), vec![]);
}

#[test]
fn unanchored_elements_default_to_middle_center() {
    let s = scene(
        r#"{ "scenes": [{ "id": "s1", "duration_s": 10, "visual": { "elements": [
            { "id": "a", "type": "box" },
            { "id": "b", "type": "box", "anchor": "middle-center" }
        ]}}]}"#,
    );
    // Both land on the same anchor, so they overlap.
    assert_eq!(check_scene_layout(&s).len(), 1);
}

#[test]
fn registry_state_does_not_leak_between_calls() {
    let s = scene(
        r#"{ "scenes": [{ "id": "s1", "duration_s": 10, "visual": { "elements": [
            { "id": "a", "type": "box", "anchor": "top-left" }
        ]}}]}"#,
    );
    assert_eq!(check_scene_layout(&s), vec![]);
    // A second run over the same scene sees a fresh registry and reports
    // the identical (empty) finding list.
    assert_eq!(check_scene_layout(&s), vec![]);
}
