//! Browser side of visibility: `IntersectionObserver` feeding a
//! `VisibilityObserver`.

use crate::core::{
    intersection_sample, observer_thresholds, IntersectionSample, Observation, VisibilityObserver,
    VisibilityOptions,
};
use crate::dom;
use crate::guard::{IntersectionGuard, Teardown};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Visibility of one element, kept current by an `IntersectionObserver`.
pub struct VisibilityHandle {
    observer: Rc<RefCell<VisibilityObserver>>,
    guard: Option<IntersectionGuard>,
}

impl Teardown for VisibilityHandle {
    fn teardown(&mut self) {
        self.observer.borrow_mut().teardown();
        if let Some(mut guard) = self.guard.take() {
            guard.teardown();
        }
    }
}

impl Drop for VisibilityHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Observe `target`. The element is measured once synchronously so a region
/// already on screen is reported before the first observer callback. Returns
/// `None` when `IntersectionObserver` is unavailable; the caller should fall
/// back to a static presentation.
pub fn mount_visibility(
    target: &web::Element,
    options: VisibilityOptions,
    mut on_change: impl FnMut(bool) + 'static,
) -> Option<VisibilityHandle> {
    let window = web::window()?;
    if !crate::guard::intersection_observer_supported() {
        log::info!("[observe] IntersectionObserver unavailable, staying static");
        return None;
    }

    let margin = options.root_margin;
    let thresholds = observer_thresholds(options.threshold);
    let observer = Rc::new(RefCell::new(VisibilityObserver::new(options)));
    {
        let mut o = observer.borrow_mut();
        o.subscribe(move |visible| on_change(*visible));
        o.mount();
    }

    let initial = intersection_sample(
        &dom::element_rect(target),
        &dom::viewport_rect(&window),
        &margin,
    );
    if observer.borrow_mut().observe(initial) == Observation::Stop {
        return Some(VisibilityHandle {
            observer,
            guard: None,
        });
    }

    let observer_cb = observer.clone();
    let guard = IntersectionGuard::observe(
        target,
        &thresholds,
        &margin.to_string(),
        move |entries: js_sys::Array, io: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let sample = IntersectionSample {
                    ratio: entry.intersection_ratio(),
                    intersecting: entry.is_intersecting(),
                };
                if observer_cb.borrow_mut().observe(sample) == Observation::Stop {
                    io.unobserve(&entry.target());
                }
            }
        },
    );
    if guard.is_none() {
        log::warn!("[observe] could not create observer; keeping initial state");
    }
    Some(VisibilityHandle { observer, guard })
}
