//! Integration tests for the signal/slot system.

use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use colorslider_core::Signal;
use parking_lot::Mutex;

#[test]
fn test_slots_run_in_connection_order() {
    let signal = Signal::<i32>::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    for tag in ["first", "second", "third"] {
        let order = order.clone();
        signal.connect(move |&value| {
            order.lock().push((tag, value));
        });
    }

    signal.emit(7);

    assert_eq!(
        *order.lock(),
        vec![("first", 7), ("second", 7), ("third", 7)]
    );
}

#[test]
fn test_order_survives_disconnect_and_reconnect() {
    let signal = Signal::<()>::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    let connect = |tag: &'static str| {
        let order = order.clone();
        signal.connect(move |_| order.lock().push(tag))
    };

    let a = connect("a");
    connect("b");
    assert!(signal.disconnect(a));
    connect("c");
    connect("d");

    signal.emit(());

    assert_eq!(*order.lock(), vec!["b", "c", "d"]);
}

#[test]
fn test_slot_can_disconnect_itself() {
    let signal = Arc::new(Signal::<()>::new());
    let calls = Arc::new(AtomicI32::new(0));
    let own_id = Arc::new(Mutex::new(None));

    let signal_clone = signal.clone();
    let calls_clone = calls.clone();
    let own_id_clone = own_id.clone();
    let id = signal.connect(move |_| {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        if let Some(id) = *own_id_clone.lock() {
            signal_clone.disconnect(id);
        }
    });
    *own_id.lock() = Some(id);

    signal.emit(());
    signal.emit(());

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(signal.connection_count(), 0);
}

#[test]
fn test_guard_keeps_signal_alive() {
    let signal = Arc::new(Signal::<i32>::new());
    let total = Arc::new(AtomicI32::new(0));

    let total_clone = total.clone();
    let guard = Signal::connect_scoped(&signal, move |&n| {
        total_clone.fetch_add(n, Ordering::SeqCst);
    });

    signal.emit(5);
    assert_eq!(signal.connection_count(), 1);

    // Dropping the caller's handle first must not invalidate the guard
    let weak = Arc::downgrade(&signal);
    drop(signal);
    assert!(weak.upgrade().is_some());
    drop(guard);
    assert!(weak.upgrade().is_none());

    assert_eq!(total.load(Ordering::SeqCst), 5);
}
