//! Controlled-index reconciliation and slide-count changes.

use crate::helpers::{TestCarouselBuilder, assert_current, drag_and_settle};

#[test]
fn test_starts_at_controlled_index() {
    let carousel = TestCarouselBuilder::new(5).with_controlled_index(3).build();
    assert_current(&carousel, 3);
    assert!(carousel.host().events().is_empty());
}

#[test]
fn test_controlled_index_change_animates_then_commits() {
    let mut carousel = TestCarouselBuilder::new(5).build();
    carousel.set_controlled_index(Some(3));

    assert_current(&carousel, 0);
    assert_eq!(carousel.host().last_offset(), Some((-900.0, true)));

    carousel.on_transition_settled();
    assert_current(&carousel, 3);
    assert_eq!(carousel.host().slide_moves(), vec![3]);
}

#[test]
fn test_repeated_controlled_index_is_noop() {
    let mut carousel = TestCarouselBuilder::new(5).build();
    carousel.set_controlled_index(Some(2));
    carousel.on_transition_settled();
    carousel.host_mut().clear();

    carousel.set_controlled_index(Some(2));
    assert!(carousel.host().events().is_empty());
    assert!(!carousel.is_animating());
}

#[test]
fn test_parent_echoing_drag_result_does_not_move_again() {
    let mut carousel = TestCarouselBuilder::new(5).with_controlled_index(0).build();

    drag_and_settle(&mut carousel, -60.0);
    assert_current(&carousel, 1);

    // Parent mirrors the reported index back as the controlled index.
    carousel.host_mut().clear();
    carousel.set_controlled_index(Some(1));
    assert!(carousel.host().events().is_empty());
}

#[test]
fn test_out_of_range_controlled_index_is_ignored() {
    let mut carousel = TestCarouselBuilder::new(3).build();
    carousel.set_controlled_index(Some(9));
    assert!(!carousel.is_animating());
    assert_current(&carousel, 0);
}

#[test]
fn test_slide_count_same_value_is_idempotent() {
    let mut carousel = TestCarouselBuilder::new(5).build();
    carousel.move_to(2, false);
    let before = carousel.triple();
    carousel.host_mut().clear();

    carousel.set_slide_count(5);
    carousel.set_slide_count(5);
    assert_eq!(carousel.triple(), before);
    assert!(carousel.host().slide_moves().is_empty());
}

#[test]
fn test_slide_count_recentres_on_controlled_index() {
    let mut carousel = TestCarouselBuilder::new(3).with_controlled_index(1).build();
    carousel.set_slide_count(6);

    let triple = carousel.triple().unwrap();
    assert_eq!((triple.previous, triple.current, triple.next), (0, 1, 2));
    assert!(carousel.host().events().is_empty());
}

#[test]
fn test_growing_from_empty_creates_triple() {
    let mut carousel = TestCarouselBuilder::new(0).build();
    carousel.set_slide_count(4);
    assert_current(&carousel, 0);
    assert_eq!(carousel.triple().unwrap().previous, 3);
}
