use crate::core::{local_offset, ClampPolicy, PointerTracker, SmoothFollow, CURSOR_FOLLOW_FACTOR};
use crate::dom;
use crate::frame::{self, FrameLoop, LoopControl};
use crate::guard::{EventListenerGuard, Teardown};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Which target receives the `pointermove` events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerScope {
    /// Only moves over the region itself.
    Region,
    /// Every move in the window, measured against the region's box.
    Window,
}

#[inline]
fn client_position(ev: &web::Event) -> Option<Vec2> {
    let ev = ev.dyn_ref::<web::PointerEvent>()?;
    Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32))
}

fn scope_target(target: &web::Element, scope: PointerScope) -> Option<web::EventTarget> {
    match scope {
        PointerScope::Region => Some(target.clone().into()),
        PointerScope::Window => web::window().map(Into::into),
    }
}

pub struct PointerHandle {
    tracker: Rc<RefCell<PointerTracker>>,
    listener: Option<EventListenerGuard>,
}

impl Teardown for PointerHandle {
    fn teardown(&mut self) {
        self.tracker.borrow_mut().teardown();
        if let Some(mut listener) = self.listener.take() {
            listener.teardown();
        }
    }
}

impl Drop for PointerHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Report the pointer position normalised to `target`'s box.
pub fn mount_pointer(
    target: &web::Element,
    scope: PointerScope,
    policy: ClampPolicy,
    mut on_change: impl FnMut(Vec2) + 'static,
) -> Option<PointerHandle> {
    let event_target = scope_target(target, scope)?;
    let tracker = Rc::new(RefCell::new(PointerTracker::new(policy)));
    {
        let mut t = tracker.borrow_mut();
        t.subscribe(move |uv| on_change(*uv));
        t.mount();
    }

    let tracker_cb = tracker.clone();
    let region = target.clone();
    let listener = EventListenerGuard::passive(&event_target, "pointermove", move |ev| {
        let Some(client) = client_position(&ev) else {
            return;
        };
        tracker_cb
            .borrow_mut()
            .sample(client, &dom::element_rect(&region));
    })?;

    Some(PointerHandle {
        tracker,
        listener: Some(listener),
    })
}

/// Smoothly trailing cursor glow: the raw pointer offset (in CSS pixels from
/// `region`'s corner) is followed by an exponential approach each frame.
pub struct CursorFollower {
    listener: Option<EventListenerGuard>,
    frames: Option<FrameLoop>,
}

impl Teardown for CursorFollower {
    fn teardown(&mut self) {
        if let Some(mut frames) = self.frames.take() {
            frames.teardown();
        }
        if let Some(mut listener) = self.listener.take() {
            listener.teardown();
        }
    }
}

impl Drop for CursorFollower {
    fn drop(&mut self) {
        self.teardown();
    }
}

pub fn mount_cursor_follower(
    region: &web::Element,
    mut on_frame: impl FnMut(Vec2) + 'static,
) -> Option<CursorFollower> {
    let event_target = scope_target(region, PointerScope::Window)?;
    let target = Rc::new(Cell::new(Vec2::ZERO));

    let target_cb = target.clone();
    let region_cb = region.clone();
    let listener = EventListenerGuard::passive(&event_target, "pointermove", move |ev| {
        if let Some(client) = client_position(&ev) {
            target_cb.set(local_offset(client, &dom::element_rect(&region_cb)));
        }
    })?;

    let mut follow = SmoothFollow::new(Vec2::ZERO, CURSOR_FOLLOW_FACTOR);
    let frames = frame::start_loop(move |_dt| {
        follow.set_target(target.get());
        if !follow.is_settled() {
            on_frame(follow.step());
        }
        LoopControl::Continue
    });
    if frames.is_none() {
        log::info!("[pointer] animation frames unavailable, cursor follower disabled");
    }

    Some(CursorFollower {
        listener: Some(listener),
        frames,
    })
}
