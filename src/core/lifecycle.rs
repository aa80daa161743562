//! Mount/teardown state and single-subscriber reactive values.
//!
//! Every observer in this crate moves through the same three states:
//! `Uninitialized → Observing → TornDown`. A torn-down observer is never
//! reused; remounting a region builds a fresh one.

/// Lifecycle of an observer or animation owned by one mounted region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Uninitialized,
    Observing,
    TornDown,
}

impl Lifecycle {
    /// Enter `Observing`. Only valid from `Uninitialized`; returns whether the
    /// transition happened.
    pub fn mount(&mut self) -> bool {
        match self {
            Lifecycle::Uninitialized => {
                *self = Lifecycle::Observing;
                true
            }
            _ => false,
        }
    }

    /// Enter `TornDown`. Returns `false` if already torn down.
    pub fn teardown(&mut self) -> bool {
        if *self == Lifecycle::TornDown {
            return false;
        }
        *self = Lifecycle::TornDown;
        true
    }

    #[inline]
    pub fn is_observing(&self) -> bool {
        *self == Lifecycle::Observing
    }
}

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// A value with at most one subscriber, notified on every change.
pub struct Reactive<T> {
    value: T,
    subscriber: Option<Subscriber<T>>,
}

impl<T: PartialEq> Reactive<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            subscriber: None,
        }
    }

    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the subscriber. The new subscriber is not called with the
    /// current value.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&T) + 'static) {
        self.subscriber = Some(Box::new(subscriber));
    }

    /// Drop the subscriber. Later `set` calls still store values but notify
    /// nobody.
    pub fn unsubscribe(&mut self) {
        self.subscriber = None;
    }

    /// Store `value`; notify the subscriber and return `true` if it differs
    /// from the previous value.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        if let Some(subscriber) = self.subscriber.as_mut() {
            subscriber(&self.value);
        }
        true
    }
}

impl<T: PartialEq + Default> Default for Reactive<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Reactive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reactive")
            .field("value", &self.value)
            .field("subscribed", &self.subscriber.is_some())
            .finish()
    }
}
