// Host-side tests for pointer-relative position and cursor smoothing.

use glam::Vec2;
use quasar_web::core::*;
use std::cell::RefCell;
use std::rc::Rc;

const CARD: Rect = Rect::new(100.0, 50.0, 200.0, 100.0);

#[test]
fn centre_of_the_box_is_half_half() {
    let uv = relative_position(Vec2::new(200.0, 100.0), &CARD, ClampPolicy::PassThrough);
    assert_eq!(uv, Some(Vec2::new(0.5, 0.5)));
}

#[test]
fn corners_map_to_unit_square() {
    let tl = relative_position(Vec2::new(100.0, 50.0), &CARD, ClampPolicy::Clamp);
    let br = relative_position(Vec2::new(300.0, 150.0), &CARD, ClampPolicy::Clamp);
    assert_eq!(tl, Some(Vec2::ZERO));
    assert_eq!(br, Some(Vec2::ONE));
}

#[test]
fn outside_the_box_passes_through_by_default() {
    let client = Vec2::new(350.0, 0.0);
    assert_eq!(ClampPolicy::default(), ClampPolicy::PassThrough);
    assert_eq!(
        relative_position(client, &CARD, ClampPolicy::PassThrough),
        Some(Vec2::new(1.25, -0.5))
    );
    assert_eq!(
        relative_position(client, &CARD, ClampPolicy::Clamp),
        Some(Vec2::new(1.0, 0.0))
    );
}

#[test]
fn empty_box_has_no_position() {
    let flat = Rect::new(0.0, 0.0, 200.0, 0.0);
    let thin = Rect::new(0.0, 0.0, 0.0, 200.0);
    assert_eq!(relative_position(Vec2::ZERO, &flat, ClampPolicy::PassThrough), None);
    assert_eq!(relative_position(Vec2::ZERO, &thin, ClampPolicy::Clamp), None);
}

#[test]
fn local_offset_is_in_pixels() {
    assert_eq!(local_offset(Vec2::new(130.0, 90.0), &CARD), Vec2::new(30.0, 40.0));
}

fn tracked(policy: ClampPolicy) -> (PointerTracker, Rc<RefCell<Vec<Vec2>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut tracker = PointerTracker::new(policy);
    let seen_cb = seen.clone();
    tracker.subscribe(move |uv| seen_cb.borrow_mut().push(*uv));
    assert!(tracker.mount());
    (tracker, seen)
}

#[test]
fn tracker_rests_at_the_centre() {
    let (tracker, seen) = tracked(ClampPolicy::PassThrough);
    assert_eq!(tracker.position(), Vec2::new(0.5, 0.5));
    assert!(seen.borrow().is_empty());
}

#[test]
fn tracker_reports_moves() {
    let (mut tracker, seen) = tracked(ClampPolicy::PassThrough);
    tracker.sample(Vec2::new(150.0, 75.0), &CARD);
    // same position: no notification
    tracker.sample(Vec2::new(150.0, 75.0), &CARD);
    tracker.sample(Vec2::new(300.0, 150.0), &CARD);
    assert_eq!(*seen.borrow(), vec![Vec2::new(0.25, 0.25), Vec2::ONE]);
}

#[test]
fn tracker_ignores_moves_over_an_empty_box() {
    let (mut tracker, seen) = tracked(ClampPolicy::PassThrough);
    let collapsed = Rect::new(100.0, 50.0, 0.0, 0.0);
    assert_eq!(tracker.sample(Vec2::new(100.0, 50.0), &collapsed), None);
    assert_eq!(tracker.position(), Vec2::new(0.5, 0.5));
    assert!(seen.borrow().is_empty());
}

#[test]
fn tracker_is_silent_after_teardown() {
    let (mut tracker, seen) = tracked(ClampPolicy::Clamp);
    tracker.sample(Vec2::new(100.0, 50.0), &CARD);
    tracker.teardown();
    assert_eq!(tracker.sample(Vec2::new(300.0, 150.0), &CARD), None);
    assert_eq!(tracker.position(), Vec2::ZERO);
    assert_eq!(*seen.borrow(), vec![Vec2::ZERO]);
    assert_eq!(tracker.lifecycle(), Lifecycle::TornDown);
}

#[test]
fn smooth_follow_closes_a_fixed_fraction() {
    let mut follow = SmoothFollow::default();
    follow.set_target(Vec2::new(100.0, 0.0));
    let first = follow.step();
    assert!((first.x - 100.0 * CURSOR_FOLLOW_FACTOR).abs() < 1e-4);
    let second = follow.step();
    assert!(second.x > first.x && second.x < 100.0);
    assert!(!follow.is_settled());
}

#[test]
fn smooth_follow_settles() {
    let mut follow = SmoothFollow::new(Vec2::ZERO, CURSOR_FOLLOW_FACTOR);
    assert!(follow.is_settled());
    follow.set_target(Vec2::new(-40.0, 25.0));
    let mut frames = 0;
    while !follow.is_settled() {
        follow.step();
        frames += 1;
        assert!(frames < 1000, "never settled");
    }
    assert!(follow.current().distance(Vec2::new(-40.0, 25.0)) < CURSOR_SETTLE_EPSILON);
}
