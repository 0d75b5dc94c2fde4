//! Scripted replay through the public `replay` module.

use carousel_engine::replay::{self, HostEvent, Script};
use carousel_engine::CarouselError;

const COMMIT_SCRIPT: &str = r#"{
    "slides": 5,
    "item_width": 320.0,
    "config": { "drag_threshold_px": 10.0, "move_threshold_px": 50.0 },
    "events": [
        { "type": "pointer_down", "x": 0.0, "y": 0.0 },
        { "type": "pointer_move", "x": 55.0, "y": 3.0 },
        { "type": "pointer_up" },
        { "type": "settled" }
    ]
}"#;

#[test]
fn test_replay_commit_script() {
    let script = Script::from_json(COMMIT_SCRIPT).unwrap();
    let report = replay::run(&script).unwrap();

    // A rightward drag reveals the previous slide: 0 wraps to 4.
    assert_eq!(report.current, Some(4));
    assert_eq!(report.steps.len(), 4);
    assert!(!report.steps[0].suppress_default);
    assert!(report.steps[1].suppress_default);
    assert_eq!(
        report.steps[1].emitted,
        vec![HostEvent::Offset {
            offset_px: 45.0,
            animate: false
        }]
    );
    assert_eq!(
        report.steps[3].emitted.last(),
        Some(&HostEvent::SlideMoved { index: 4 })
    );
}

#[test]
fn test_replay_report_serializes() {
    let script = Script::from_json(COMMIT_SCRIPT).unwrap();
    let report = replay::run(&script).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["current"], 4);
    assert_eq!(json["steps"][2]["event"]["type"], "pointer_up");
    assert_eq!(json["frame"]["slides"][1]["index"], 4);
}

#[test]
fn test_replay_rejects_invalid_config() {
    let err = Script::from_json(
        r#"{ "slides": 2, "config": { "drag_threshold_px": -1.0 }, "events": [] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, CarouselError::InvalidConfig { .. }));
}

#[test]
fn test_replay_absorbed_click_suppresses_default() {
    let script = Script::from_json(
        r#"{
            "slides": 3,
            "events": [
                { "type": "next" },
                { "type": "pointer_down", "x": 0.0, "y": 0.0, "touch": true },
                { "type": "settled" }
            ]
        }"#,
    )
    .unwrap();
    let report = replay::run(&script).unwrap();

    assert!(report.steps[1].suppress_default);
    assert!(report.steps[1].emitted.is_empty());
    assert_eq!(report.current, Some(1));
}
