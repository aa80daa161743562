// Host-side tests for visibility observation.
// Samples are fed by hand or derived from mocked layout geometry.

use proptest::prelude::*;
use quasar_web::core::*;
use std::cell::RefCell;
use std::rc::Rc;

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);

fn mounted(options: VisibilityOptions) -> (VisibilityObserver, Rc<RefCell<Vec<bool>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut observer = VisibilityObserver::new(options);
    let seen_cb = seen.clone();
    observer.subscribe(move |v| seen_cb.borrow_mut().push(*v));
    assert!(observer.mount());
    (observer, seen)
}

fn region_at(top: f64) -> Rect {
    Rect::new(0.0, top, 1280.0, 600.0)
}

fn sample_at(top: f64, margin: &RootMargin) -> IntersectionSample {
    intersection_sample(&region_at(top), &VIEWPORT, margin)
}

#[test]
fn default_options_match_observer_hook() {
    let options = VisibilityOptions::default();
    assert_eq!(options.threshold, 0.1);
    assert_eq!(options.root_margin, RootMargin::ZERO);
    assert!(!options.once);
}

#[test]
fn reveal_preset_latches_inside_a_negative_margin() {
    let options = VisibilityOptions::reveal();
    assert_eq!(options.threshold, 0.2);
    assert!(options.once);
    assert_eq!(options.root_margin, RootMargin::uniform(Length::Px(-50.0)));
}

#[test]
fn threshold_is_clamped_to_unit_range() {
    assert_eq!(VisibilityOptions::new(1.7, RootMargin::ZERO, false).threshold, 1.0);
    assert_eq!(VisibilityOptions::new(-0.3, RootMargin::ZERO, false).threshold, 0.0);
    assert_eq!(
        VisibilityOptions::new(f64::NAN, RootMargin::ZERO, false).threshold,
        DEFAULT_THRESHOLD
    );
}

#[test]
fn root_margin_shorthand_forms() {
    assert_eq!(
        RootMargin::parse("-50px").unwrap(),
        RootMargin::uniform(Length::Px(-50.0))
    );
    assert_eq!(RootMargin::parse("0").unwrap(), RootMargin::ZERO);

    let two = RootMargin::parse("10px 20%").unwrap();
    assert_eq!(two.top, Length::Px(10.0));
    assert_eq!(two.bottom, Length::Px(10.0));
    assert_eq!(two.right, Length::Percent(20.0));
    assert_eq!(two.left, Length::Percent(20.0));

    let four = RootMargin::parse("1px 2px 3px 4px").unwrap();
    assert_eq!(
        (four.top, four.right, four.bottom, four.left),
        (
            Length::Px(1.0),
            Length::Px(2.0),
            Length::Px(3.0),
            Length::Px(4.0)
        )
    );
}

#[test]
fn root_margin_rejects_invalid_input() {
    for bad in ["", "5", "px", "10em", "1px 2px 3px 4px 5px", "NaNpx"] {
        assert_eq!(
            RootMargin::parse(bad),
            Err(ConfigError::RootMargin(bad.to_string())),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn root_margin_display_is_accepted_back() {
    let margin = RootMargin::parse("-50px 5%").unwrap();
    let text = margin.to_string();
    assert_eq!(text, "-50px 5% -50px 5%");
    assert_eq!(RootMargin::parse(&text).unwrap(), margin);
}

#[test]
fn negative_margin_shrinks_the_root() {
    let margin = RootMargin::parse("-50px").unwrap();
    assert_eq!(margin.apply(&VIEWPORT), Rect::new(50.0, 50.0, 1180.0, 700.0));
    let pct = RootMargin::parse("10%").unwrap();
    assert_eq!(pct.apply(&VIEWPORT), Rect::new(-128.0, -80.0, 1536.0, 960.0));
}

#[test]
fn geometric_ratio_matches_overlap() {
    // fully inside
    assert_eq!(intersection_ratio(&region_at(100.0), &VIEWPORT, &RootMargin::ZERO), 1.0);
    // half of the 600px region below the fold
    assert_eq!(intersection_ratio(&region_at(500.0), &VIEWPORT, &RootMargin::ZERO), 0.5);
    // entirely below
    let below = sample_at(1000.0, &RootMargin::ZERO);
    assert!(!below.intersecting);
    assert_eq!(below.ratio, 0.0);
}

#[test]
fn edge_adjacent_region_intersects_with_zero_ratio() {
    let touching = sample_at(800.0, &RootMargin::ZERO);
    assert!(touching.intersecting);
    assert_eq!(touching.ratio, 0.0);
    assert!(touching.meets(0.0));
    assert!(!touching.meets(0.1));
}

#[test]
fn zero_area_region_reports_full_ratio_when_inside() {
    let dot = Rect::new(10.0, 10.0, 0.0, 0.0);
    assert_eq!(intersection_ratio(&dot, &VIEWPORT, &RootMargin::ZERO), 1.0);
    let far = Rect::new(10.0, 5000.0, 0.0, 0.0);
    assert_eq!(intersection_ratio(&far, &VIEWPORT, &RootMargin::ZERO), 0.0);
}

#[test]
fn continuous_mode_follows_the_region() {
    let (mut observer, seen) = mounted(VisibilityOptions::default());
    let on = IntersectionSample { ratio: 0.5, intersecting: true };
    let off = IntersectionSample { ratio: 0.0, intersecting: false };

    assert_eq!(observer.observe(on), Observation::Continue);
    assert!(observer.is_visible());
    assert_eq!(observer.observe(off), Observation::Continue);
    assert!(!observer.is_visible());
    assert_eq!(observer.observe(on), Observation::Continue);
    assert_eq!(*seen.borrow(), vec![true, false, true]);
}

#[test]
fn repeated_samples_notify_once() {
    let (mut observer, seen) = mounted(VisibilityOptions::default());
    let on = IntersectionSample { ratio: 0.9, intersecting: true };
    observer.observe(on);
    observer.observe(on);
    observer.observe(IntersectionSample { ratio: 1.0, intersecting: true });
    assert_eq!(*seen.borrow(), vec![true]);
}

#[test]
fn once_mode_latches_and_asks_to_stop() {
    let (mut observer, seen) = mounted(VisibilityOptions::new(0.1, RootMargin::ZERO, true));
    let off = IntersectionSample { ratio: 0.0, intersecting: false };
    let on = IntersectionSample { ratio: 0.4, intersecting: true };

    assert_eq!(observer.observe(off), Observation::Continue);
    assert!(!observer.is_visible());
    assert_eq!(observer.observe(on), Observation::Stop);
    assert!(observer.is_visible());
    for _ in 0..5 {
        assert_eq!(observer.observe(off), Observation::Stop);
    }
    assert!(observer.is_visible());
    assert_eq!(*seen.borrow(), vec![true]);
}

#[test]
fn samples_before_mount_are_ignored() {
    let mut observer = VisibilityObserver::new(VisibilityOptions::default());
    assert_eq!(observer.lifecycle(), Lifecycle::Uninitialized);
    let on = IntersectionSample { ratio: 1.0, intersecting: true };
    assert_eq!(observer.observe(on), Observation::Stop);
    assert!(!observer.is_visible());
}

#[test]
fn no_callback_after_teardown() {
    let (mut observer, seen) = mounted(VisibilityOptions::default());
    observer.observe(IntersectionSample { ratio: 1.0, intersecting: true });
    observer.teardown();
    assert_eq!(observer.lifecycle(), Lifecycle::TornDown);

    let off = IntersectionSample { ratio: 0.0, intersecting: false };
    assert_eq!(observer.observe(off), Observation::Stop);
    assert!(observer.is_visible(), "state frozen at teardown");
    assert_eq!(*seen.borrow(), vec![true]);

    // teardown is idempotent and a torn down observer never remounts
    observer.teardown();
    assert!(!observer.mount());
}

#[test]
fn registered_thresholds_include_the_logical_one() {
    assert_eq!(observer_thresholds(0.15), vec![0.0, 0.15, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(observer_thresholds(0.25), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(observer_thresholds(3.0), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

fn scroll_through(once: bool) -> Vec<bool> {
    let options = VisibilityOptions::new(0.15, RootMargin::ZERO, once);
    let margin = options.root_margin;
    let (mut observer, _) = mounted(options);
    let mut states = Vec::new();
    // below the fold, fully in view, scrolled out past the top
    for top in [1000.0, 100.0, -700.0] {
        observer.observe(sample_at(top, &margin));
        states.push(observer.is_visible());
    }
    states
}

#[test]
fn scroll_in_and_out_continuous() {
    assert_eq!(scroll_through(false), vec![false, true, false]);
}

#[test]
fn scroll_in_and_out_once() {
    assert_eq!(scroll_through(true), vec![false, true, true]);
}

#[test]
fn just_below_threshold_is_not_visible() {
    let (mut observer, _) = mounted(VisibilityOptions::new(0.15, RootMargin::ZERO, false));
    // 600px region with 89px showing: ratio 0.148..
    observer.observe(sample_at(711.0, &RootMargin::ZERO));
    assert!(!observer.is_visible());
    // 90px showing: exactly 0.15
    observer.observe(sample_at(710.0, &RootMargin::ZERO));
    assert!(observer.is_visible());
}

proptest! {
    #[test]
    fn visible_only_at_or_above_threshold(
        threshold in 0.0f64..=1.0,
        ratio in 0.0f64..=1.0,
        intersecting in any::<bool>(),
    ) {
        let (mut observer, _) = mounted(VisibilityOptions::new(threshold, RootMargin::ZERO, false));
        observer.observe(IntersectionSample { ratio, intersecting });
        prop_assert_eq!(observer.is_visible(), intersecting && ratio >= threshold);
    }

    #[test]
    fn once_never_flips_back(
        threshold in 0.0f64..=1.0,
        tops in prop::collection::vec(-2000.0f64..2000.0, 1..40),
    ) {
        let (mut observer, _) = mounted(VisibilityOptions::new(threshold, RootMargin::ZERO, true));
        let mut latched = false;
        for top in tops {
            observer.observe(sample_at(top, &RootMargin::ZERO));
            if latched {
                prop_assert!(observer.is_visible());
            }
            latched |= observer.is_visible();
        }
    }

    #[test]
    fn geometric_ratio_stays_in_unit_range(
        top in -5000.0f64..5000.0,
        height in 0.0f64..3000.0,
        margin_px in -300.0f64..300.0,
    ) {
        let region = Rect::new(0.0, top, 640.0, height);
        let margin = RootMargin::uniform(Length::Px(margin_px));
        let ratio = intersection_ratio(&region, &VIEWPORT, &margin);
        prop_assert!((0.0..=1.0).contains(&ratio));
    }
}
