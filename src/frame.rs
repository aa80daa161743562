//! Animation frames: self-rescheduling loops and per-frame throttling.

use crate::guard::Teardown;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop owned by one fold.
///
/// The tick closure holds a reference to its own slot so it can reschedule
/// itself; teardown cancels the pending frame and empties the slot, which
/// breaks that cycle.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

fn request_frame(tick: &TickSlot, pending: &Cell<Option<i32>>) -> bool {
    let Some(w) = web::window() else {
        return false;
    };
    let slot = tick.borrow();
    let Some(cb) = slot.as_ref() else {
        return false;
    };
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => {
            pending.set(Some(id));
            true
        }
        Err(e) => {
            log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
            false
        }
    }
}

/// Run `step(dt_sec)` once per animation frame until it returns
/// `LoopControl::Stop` or the returned loop is torn down. `None` when
/// animation frames are unavailable; the caller stays static.
pub fn start_loop(mut step: impl FnMut(f32) -> LoopControl + 'static) -> Option<FrameLoop> {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None::<i32>));

    let tick_clone = tick.clone();
    let pending_tick = pending.clone();
    let mut last_instant = Instant::now();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        let now = Instant::now();
        let dt_sec = (now - last_instant).as_secs_f32();
        last_instant = now;
        if step(dt_sec) == LoopControl::Continue {
            request_frame(&tick_clone, &pending_tick);
        }
    }) as Box<dyn FnMut()>));

    if !request_frame(&tick, &pending) {
        tick.borrow_mut().take();
        return None;
    }
    Some(FrameLoop { pending, tick })
}

impl Teardown for FrameLoop {
    fn teardown(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Coalesces a burst of events into at most one callback per animation frame.
///
/// Clones share the same pending frame. Dropping a clone does not cancel
/// anything; the owner calls `teardown()`.
#[derive(Clone)]
pub struct FrameThrottle {
    pending: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl FrameThrottle {
    pub fn new(mut callback: impl FnMut() + 'static) -> Self {
        let pending = Rc::new(Cell::new(None::<i32>));
        let pending_tick = pending.clone();
        let tick: TickSlot = Rc::new(RefCell::new(Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            callback();
        }) as Box<dyn FnMut()>))));
        Self { pending, tick }
    }

    /// Schedule the callback for the next frame unless one is already
    /// pending. Returns `false` if no frame could be scheduled.
    pub fn request(&self) -> bool {
        if self.pending.get().is_some() {
            return true;
        }
        request_frame(&self.tick, &self.pending)
    }
}

impl Teardown for FrameThrottle {
    fn teardown(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}
