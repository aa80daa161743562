// Host-side tests for the mount/teardown lifecycle and reactive values.

use quasar_web::core::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn lifecycle_moves_forward_only() {
    let mut state = Lifecycle::default();
    assert_eq!(state, Lifecycle::Uninitialized);
    assert!(!state.is_observing());

    assert!(state.mount());
    assert!(state.is_observing());
    assert!(!state.mount());

    assert!(state.teardown());
    assert_eq!(state, Lifecycle::TornDown);
    assert!(!state.teardown());
    assert!(!state.mount());
}

#[test]
fn teardown_before_mount_is_allowed() {
    let mut state = Lifecycle::Uninitialized;
    assert!(state.teardown());
    assert!(!state.mount());
}

#[test]
fn reactive_notifies_on_change_only() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut value = Reactive::new(0);
    let seen_cb = seen.clone();
    value.subscribe(move |v| seen_cb.borrow_mut().push(*v));

    assert!(!value.set(0));
    assert!(value.set(1));
    assert!(!value.set(1));
    assert!(value.set(2));
    assert_eq!(*value.get(), 2);
    assert_eq!(*seen.borrow(), vec![1, 2]);
}

#[test]
fn reactive_subscriber_is_replaced() {
    let first = Rc::new(RefCell::new(0));
    let second = Rc::new(RefCell::new(0));
    let mut value: Reactive<bool> = Reactive::default();

    let first_cb = first.clone();
    value.subscribe(move |_| *first_cb.borrow_mut() += 1);
    value.set(true);
    let second_cb = second.clone();
    value.subscribe(move |_| *second_cb.borrow_mut() += 1);
    value.set(false);

    assert_eq!((*first.borrow(), *second.borrow()), (1, 1));
}

#[test]
fn unsubscribed_value_still_updates() {
    let calls = Rc::new(RefCell::new(0));
    let mut value = Reactive::new(0.0_f64);
    let calls_cb = calls.clone();
    value.subscribe(move |_| *calls_cb.borrow_mut() += 1);
    value.unsubscribe();
    assert!(value.set(0.5));
    assert_eq!(*value.get(), 0.5);
    assert_eq!(*calls.borrow(), 0);
}
