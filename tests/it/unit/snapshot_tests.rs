//! Snapshot tests using the insta crate.
//!
//! Render frames and host event logs are what a renderer consumes, so their
//! serialized shape is pinned here.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::TestCarouselBuilder;

#[test]
fn snapshot_frame_at_rest() {
    let carousel = TestCarouselBuilder::new(5).build();
    insta::assert_json_snapshot!(carousel.frame(), @r###"
    {
      "slides": [
        {
          "role": "Previous",
          "index": 4,
          "is_active": false,
          "is_animating": false,
          "is_dragging": false
        },
        {
          "role": "Current",
          "index": 0,
          "is_active": true,
          "is_animating": false,
          "is_dragging": false
        },
        {
          "role": "Next",
          "index": 1,
          "is_active": false,
          "is_animating": false,
          "is_dragging": false
        }
      ],
      "offset_px": 0.0,
      "animating": false
    }
    "###);
}

#[test]
fn snapshot_frame_mid_drag() {
    let mut carousel = TestCarouselBuilder::new(3).build();
    carousel.on_pointer_down(100.0, 100.0, true);
    carousel.on_pointer_move(60.0, 104.0);

    insta::assert_json_snapshot!(carousel.frame(), @r###"
    {
      "slides": [
        {
          "role": "Previous",
          "index": 2,
          "is_active": false,
          "is_animating": false,
          "is_dragging": true
        },
        {
          "role": "Current",
          "index": 0,
          "is_active": true,
          "is_animating": false,
          "is_dragging": true
        },
        {
          "role": "Next",
          "index": 1,
          "is_active": false,
          "is_animating": false,
          "is_dragging": true
        }
      ],
      "offset_px": -30.0,
      "animating": false
    }
    "###);
}

#[test]
fn snapshot_host_events_for_committed_drag() {
    let mut carousel = TestCarouselBuilder::new(4).build();
    carousel.on_pointer_down(0.0, 0.0, false);
    carousel.on_pointer_move(-70.0, 0.0);
    carousel.on_pointer_up();
    carousel.on_transition_settled();

    insta::assert_json_snapshot!(carousel.host().events(), @r###"
    [
      {
        "event": "listeners_attached"
      },
      {
        "event": "offset",
        "offset_px": -60.0,
        "animate": false
      },
      {
        "event": "listeners_detached"
      },
      {
        "event": "directional_move",
        "direction": "forward"
      },
      {
        "event": "offset",
        "offset_px": -300.0,
        "animate": true
      },
      {
        "event": "offset",
        "offset_px": 0.0,
        "animate": false
      },
      {
        "event": "slide_moved",
        "index": 1
      }
    ]
    "###);
}
