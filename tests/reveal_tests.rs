// Host-side tests for staggered and line-by-line reveals.

use quasar_web::core::*;
use std::time::Duration;

const INTERVAL: Duration = Duration::from_millis(LINE_REVEAL_INTERVAL_MS);

#[test]
fn stagger_delay_scales_with_index() {
    assert_eq!(stagger_delay(0, 0.1), "0s");
    assert_eq!(stagger_delay(1, 0.1), "0.1s");
    assert_eq!(stagger_delay(3, 0.1), "0.3s");
    assert_eq!(stagger_delay(2, 0.15), "0.3s");
    assert_eq!(stagger_delay(4, 0.25), "1s");
    assert_eq!(stagger_delay(5, -1.0), "0s");
}

#[test]
fn lines_appear_one_interval_apart() {
    let mut reveal = LineReveal::new(4, INTERVAL);
    assert_eq!(reveal.advance(Duration::from_millis(300), true), None);
    assert_eq!(reveal.advance(Duration::from_millis(100), true), Some(1));
    // a long frame catches up several lines
    assert_eq!(reveal.advance(Duration::from_millis(900), true), Some(3));
    assert_eq!(reveal.revealed(), 3);
    assert!(!reveal.is_complete());
}

#[test]
fn reveal_pauses_while_hidden() {
    let mut reveal = LineReveal::new(4, INTERVAL);
    reveal.advance(Duration::from_millis(1300), true);
    assert_eq!(reveal.revealed(), 3);

    assert_eq!(reveal.advance(Duration::from_secs(10), false), None);
    assert_eq!(reveal.revealed(), 3);

    // 100ms carried over from before the pause
    assert_eq!(reveal.advance(Duration::from_millis(300), true), Some(4));
    assert!(reveal.is_complete());
    assert_eq!(reveal.advance(Duration::from_secs(1), true), None);
}

#[test]
fn zero_interval_reveals_everything() {
    let mut reveal = LineReveal::new(6, Duration::ZERO);
    assert_eq!(reveal.advance(Duration::ZERO, true), Some(6));
    assert!(reveal.is_complete());
}

#[test]
fn empty_reveal_is_complete() {
    let mut reveal = LineReveal::new(0, INTERVAL);
    assert!(reveal.is_complete());
    assert_eq!(reveal.advance(Duration::from_secs(1), true), None);
    assert_eq!(reveal.total(), 0);
}

#[test]
fn finish_shows_every_line_without_waiting() {
    // no visibility signal: lines must not stay hidden
    let mut reveal = LineReveal::new(5, INTERVAL);
    assert_eq!(reveal.advance(Duration::from_secs(10), false), None);
    assert_eq!(reveal.finish(), Some(5));
    assert!(reveal.is_complete());
    assert_eq!(reveal.finish(), None);
    assert_eq!(reveal.advance(Duration::from_secs(1), true), None);
}

#[test]
fn finish_after_partial_progress() {
    let mut reveal = LineReveal::new(3, INTERVAL);
    assert_eq!(reveal.advance(INTERVAL, true), Some(1));
    assert_eq!(reveal.finish(), Some(3));
    assert_eq!(reveal.revealed(), reveal.total());
}
