use super::*;
use crate::document::model::StoryboardDocument;

fn doc(json: &str) -> StoryboardDocument {
    StoryboardDocument::from_json_str(json).unwrap()
}

fn three_scene_doc() -> StoryboardDocument {
    doc(r#"{
        "meta": { "duration_target_s": 180 },
        "scenes": [
            { "id": "intro", "duration_s": 58, "visual": { "elements": [
                { "id": "title", "type": "text", "content": "Attention", "anchor": "top-center" },
                { "id": "q", "type": "box", "label": "Q", "anchor": "middle-left" },
                { "id": "k", "type": "box", "label": "K", "anchor": "middle-right" },
                { "id": "link", "type": "arrow", "from": "q", "to": "k" }
            ]}},
            { "id": "body", "duration_s": 61, "animation": { "steps": [
                { "action": "wait", "duration_s": 2 }
            ]}},
            { "id": "outro", "duration_s": 55, "checks": { "must_show": [] } }
        ]
    }"#)
}

#[test]
fn clean_document_produces_no_diagnostics() {
    assert_eq!(run_business_rules(&three_scene_doc()), vec![]);
}

#[test]
fn duration_within_tolerance_passes() {
    // 174s against a 180s target is a 3.3% deviation.
    let d = three_scene_doc();
    assert!(check_duration_tolerance(&d).is_empty());
}

#[test]
fn duration_boundary_is_inclusive() {
    // Exactly 10% off target: 198 vs 180.
    let d = doc(r#"{
        "meta": { "duration_target_s": 180 },
        "scenes": [ { "id": "a", "duration_s": 198 } ]
    }"#);
    assert!(check_duration_tolerance(&d).is_empty());
}

#[test]
fn duration_beyond_tolerance_fails() {
    let d = doc(r#"{
        "meta": { "duration_target_s": 180 },
        "scenes": [ { "id": "a", "duration_s": 199 } ]
    }"#);
    let diags = check_duration_tolerance(&d);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].scope, "document");
    assert!(diags[0].message.contains("more than 10%"));
}

#[test]
fn duplicate_scene_id_reported_once_per_distinct_value() {
    let d = doc(r#"{
        "scenes": [
            { "id": "a", "duration_s": 60 },
            { "id": "a", "duration_s": 60 },
            { "id": "a", "duration_s": 60 },
            { "id": "b", "duration_s": 0 }
        ]
    }"#);
    let diags = check_scene_id_uniqueness(&d);
    assert_eq!(diags.len(), 1);
    assert!(diags[0].message.contains("'a' is used 3 times"));
}

#[test]
fn arrow_with_missing_endpoint_yields_one_diagnostic_per_reference() {
    let d = doc(r#"{
        "scenes": [{
            "id": "s1", "duration_s": 60,
            "visual": { "elements": [
                { "id": "a", "type": "box" },
                { "id": "link", "type": "arrow", "from": "a", "to": "foo" }
            ]}
        }]
    }"#);
    let diags = check_scene_references(&d.scenes[0]);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].scope, "scenes[s1].elements[link]");
    assert!(diags[0].message.contains("'foo'"));
}

#[test]
fn arrow_with_both_endpoints_missing_yields_two() {
    let d = doc(r#"{
        "scenes": [{
            "id": "s1", "duration_s": 60,
            "visual": { "elements": [
                { "id": "link", "type": "arrow", "from": "x", "to": "y" }
            ]}
        }]
    }"#);
    assert_eq!(check_scene_references(&d.scenes[0]).len(), 2);
}

#[test]
fn wait_steps_are_exempt_from_target_checking() {
    let d = doc(r#"{
        "scenes": [{
            "id": "s1", "duration_s": 60,
            "animation": { "steps": [
                { "action": "wait", "duration_s": 1 },
                { "action": "wait", "target": "ghost" }
            ]}
        }]
    }"#);
    assert!(check_scene_references(&d.scenes[0]).is_empty());
}

#[test]
fn step_target_list_checks_each_entry() {
    let d = doc(r#"{
        "scenes": [{
            "id": "s1", "duration_s": 60,
            "visual": { "elements": [ { "id": "a", "type": "text", "content": "a" } ]},
            "animation": { "steps": [
                { "action": "fade_in", "target": ["a", "b", "c"] }
            ]}
        }]
    }"#);
    let diags = check_scene_references(&d.scenes[0]);
    assert_eq!(diags.len(), 2);
    assert_eq!(diags[0].scope, "scenes[s1].steps[0]");
    assert!(diags[0].message.contains("'b'"));
    assert!(diags[1].message.contains("'c'"));
}

#[test]
fn references_are_scoped_to_the_owning_scene() {
    // "a" exists in scene s1, not in s2: s2's step must be flagged.
    let d = doc(r#"{
        "scenes": [
            { "id": "s1", "duration_s": 30,
              "visual": { "elements": [ { "id": "a", "type": "text", "content": "a" } ]}},
            { "id": "s2", "duration_s": 30,
              "animation": { "steps": [ { "action": "fade_in", "target": "a" } ]}}
        ]
    }"#);
    assert!(check_scene_references(&d.scenes[0]).is_empty());
    assert_eq!(check_scene_references(&d.scenes[1]).len(), 1);
}

#[test]
fn must_show_entries_must_exist() {
    let d = doc(r#"{
        "scenes": [{
            "id": "s1", "duration_s": 60,
            "visual": { "elements": [ { "id": "a", "type": "text", "content": "a" } ]},
            "checks": { "must_show": ["a", "missing"] }
        }]
    }"#);
    let diags = check_must_show(&d.scenes[0]);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].scope, "scenes[s1].checks.must_show");
    assert!(diags[0].message.contains("'missing'"));
}

#[test]
fn all_rules_accumulate_instead_of_short_circuiting() {
    // Duration off, duplicate ids, bad arrow, bad must_show: all reported.
    let d = doc(r#"{
        "meta": { "duration_target_s": 100 },
        "scenes": [
            { "id": "s", "duration_s": 10,
              "visual": { "elements": [
                  { "id": "link", "type": "arrow", "from": "x", "to": "y" } ]},
              "checks": { "must_show": ["z"] }},
            { "id": "s", "duration_s": 10 }
        ]
    }"#);
    let diags = run_business_rules(&d);
    assert_eq!(diags.len(), 5);
}
