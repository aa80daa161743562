//! Scroll and resize listeners feeding a `ScrollTracker`.

use crate::core::{ScrollMetric, ScrollTracker};
use crate::dom;
use crate::frame::FrameThrottle;
use crate::guard::{EventListenerGuard, Teardown};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// When scroll events are turned into samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sampling {
    /// Measure inside the scroll handler.
    Immediate,
    /// Measure at most once per animation frame.
    PerFrame,
}

pub struct ScrollHandle {
    tracker: Rc<RefCell<ScrollTracker>>,
    listeners: Vec<EventListenerGuard>,
    throttle: Option<FrameThrottle>,
}

impl Teardown for ScrollHandle {
    fn teardown(&mut self) {
        self.tracker.borrow_mut().teardown();
        for mut listener in self.listeners.drain(..).rev() {
            listener.teardown();
        }
        if let Some(mut throttle) = self.throttle.take() {
            throttle.teardown();
        }
    }
}

impl Drop for ScrollHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Track `metric` for `target`, sampling on mount, on scroll and on resize.
/// Listeners are passive. `None` without a window.
pub fn mount_scroll(
    target: &web::Element,
    metric: ScrollMetric,
    sampling: Sampling,
    mut on_change: impl FnMut(f64) + 'static,
) -> Option<ScrollHandle> {
    let window = web::window()?;
    let tracker = Rc::new(RefCell::new(ScrollTracker::new(metric)));
    {
        let mut t = tracker.borrow_mut();
        t.subscribe(move |v| on_change(*v));
        t.mount(&dom::measure(&window, target));
    }

    let sample = {
        let tracker = tracker.clone();
        let window = window.clone();
        let target = target.clone();
        move || {
            tracker
                .borrow_mut()
                .sample(&dom::measure(&window, &target));
        }
    };

    let throttle = match sampling {
        Sampling::Immediate => None,
        Sampling::PerFrame => Some(FrameThrottle::new(sample.clone())),
    };

    let on_event = {
        let throttle = throttle.clone();
        move |_ev: web::Event| match &throttle {
            Some(t) if t.request() => {}
            _ => sample(),
        }
    };

    let mut listeners = Vec::with_capacity(2);
    listeners.extend(EventListenerGuard::passive(&window, "scroll", on_event.clone()));
    listeners.extend(EventListenerGuard::passive(&window, "resize", on_event));
    if listeners.is_empty() {
        log::warn!("[scroll] no listeners attached; {:?} stays at its initial value", metric);
    }

    Some(ScrollHandle {
        tracker,
        listeners,
        throttle,
    })
}
