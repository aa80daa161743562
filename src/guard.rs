//! Scoped browser subscriptions.
//!
//! Every listener, observer and animation frame a fold acquires is held by a
//! guard that releases it exactly once, either through `teardown()` or on drop.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Something a mounted fold must release when it unmounts.
pub trait Teardown {
    /// Release the underlying resource. Calling it again is a no-op.
    fn teardown(&mut self);
}

pub struct EventListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    callback: Option<Closure<dyn FnMut(web::Event)>>,
}

impl EventListenerGuard {
    /// Add a passive listener (never calls `preventDefault`, so scrolling is
    /// never blocked on it).
    pub fn passive(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        Self::add(target, event, handler, true)
    }

    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        Self::add(target, event, handler, false)
    }

    fn add(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
        passive: bool,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(passive);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("[guard] could not listen for {event}: {:?}", e);
            return None;
        }
        Some(Self {
            target: target.clone(),
            event,
            callback: Some(callback),
        })
    }
}

impl Teardown for EventListenerGuard {
    fn teardown(&mut self) {
        if let Some(callback) = self.callback.take() {
            _ = self
                .target
                .remove_event_listener_with_callback(self.event, callback.as_ref().unchecked_ref());
        }
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        self.teardown();
    }
}

type IntersectionCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

pub struct IntersectionGuard {
    observer: Option<web::IntersectionObserver>,
    _callback: IntersectionCallback,
}

impl IntersectionGuard {
    /// Observe `target`. `None` when `IntersectionObserver` is unavailable or
    /// rejects the options.
    pub fn observe(
        target: &web::Element,
        thresholds: &[f64],
        root_margin: &str,
        handler: impl FnMut(js_sys::Array, web::IntersectionObserver) + 'static,
    ) -> Option<Self> {
        if !intersection_observer_supported() {
            return None;
        }
        let callback = Closure::wrap(
            Box::new(handler) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>
        );
        let init = web::IntersectionObserverInit::new();
        let steps: js_sys::Array = thresholds
            .iter()
            .map(|t| wasm_bindgen::JsValue::from_f64(*t))
            .collect();
        init.set_threshold(&steps);
        init.set_root_margin(root_margin);
        let observer =
            match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            {
                Ok(o) => o,
                Err(e) => {
                    log::warn!("[guard] IntersectionObserver rejected options: {:?}", e);
                    return None;
                }
            };
        observer.observe(target);
        Some(Self {
            observer: Some(observer),
            _callback: callback,
        })
    }
}

impl Teardown for IntersectionGuard {
    fn teardown(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl Drop for IntersectionGuard {
    fn drop(&mut self) {
        self.teardown();
    }
}

pub fn intersection_observer_supported() -> bool {
    web::window()
        .map(|w| js_sys::Reflect::has(&w, &"IntersectionObserver".into()).unwrap_or(false))
        .unwrap_or(false)
}
