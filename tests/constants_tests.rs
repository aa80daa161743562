// Host-side tests for constants and their relationships.

use quasar_web::core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_are_fractions() {
    assert!((0.0..=1.0).contains(&DEFAULT_THRESHOLD));
    assert!((0.0..=1.0).contains(&REVEAL_THRESHOLD));
    assert!(RootMargin::parse(DEFAULT_ROOT_MARGIN).is_ok());
    assert!(RootMargin::parse(REVEAL_ROOT_MARGIN).is_ok());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn chaotic_cutoffs_are_ordered() {
    assert!(CHAOS_FRAGMENT_OPACITY_MIN < CHAOS_FRAGMENT_OPACITY_MAX);
    assert!(CHAOS_FRAGMENT_OPACITY_MAX <= 1.0);
    // numbers outlive glitch lines as chaos drops
    assert!(CHAOS_FLICKER_MIN < CHAOS_GLITCH_MIN);
    assert!(CHAOS_FLICKER_MAX_LABELS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn coherent_alphas_are_valid() {
    for alpha in [
        COHERENT_GRID_ALPHA,
        COHERENT_SIGNAL_ALPHA,
        COHERENT_NODE_ALPHA,
        COHERENT_RING_ALPHA,
    ] {
        assert!(alpha > 0.0 && alpha <= 1.0);
    }
    assert!(COHERENT_NODE_PULSE_PX < COHERENT_NODE_RADIUS_PX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_positive() {
    assert!(MAX_FRAME_DT_SEC > 0.0);
    assert!(CURSOR_FOLLOW_FACTOR > 0.0 && CURSOR_FOLLOW_FACTOR < 1.0);
    assert!(LINE_REVEAL_INTERVAL_MS > 0);
    assert!(HERO_FADE_DISTANCE_PX > 0.0);
}
