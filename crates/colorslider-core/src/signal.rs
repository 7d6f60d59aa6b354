//! Multi-subscriber notifications.
//!
//! A [`Signal`] keeps a list of callbacks ("slots") and runs every one of
//! them, in connection order, each time it is emitted. Controls expose their
//! notifications as public `Signal` fields so that any number of observers
//! can listen without the control knowing about them.
//!
//! Delivery is synchronous: all slots have run by the time `emit` returns.
//! The slot list is copied out of the lock first, so a slot may connect to
//! or disconnect from the signal that is invoking it.
//!
//! ```
//! use colorslider_core::Signal;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicI32, Ordering};
//!
//! let value_changed = Signal::<i32>::new();
//! let latest = Arc::new(AtomicI32::new(0));
//!
//! let sink = latest.clone();
//! let id = value_changed.connect(move |&v| sink.store(v, Ordering::Relaxed));
//!
//! value_changed.emit(42);
//! assert_eq!(latest.load(Ordering::Relaxed), 42);
//! assert!(value_changed.disconnect(id));
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Handle to one slot, returned by [`Signal::connect`].
    ///
    /// Stays valid until passed to [`Signal::disconnect`] or the signal is
    /// dropped. Disconnecting twice is harmless.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// Connected slots. `SlotMap` reuses freed keys, so delivery order comes
/// from `seq` rather than from key order.
struct Slots<Args> {
    map: SlotMap<ConnectionId, (u64, Slot<Args>)>,
    next_seq: u64,
}

impl<Args> Slots<Args> {
    fn new() -> Self {
        Self {
            map: SlotMap::with_key(),
            next_seq: 0,
        }
    }

    fn insert(&mut self, slot: Slot<Args>) -> ConnectionId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.map.insert((seq, slot))
    }

    /// Every slot, oldest connection first.
    fn ordered(&self) -> Vec<Slot<Args>> {
        let mut entries: Vec<_> = self.map.values().collect();
        entries.sort_unstable_by_key(|(seq, _)| *seq);
        entries.into_iter().map(|(_, slot)| Arc::clone(slot)).collect()
    }
}

/// A notification with payload `Args`.
///
/// Use `()` for a bare "something changed" notification and a small `Copy`
/// struct when observers need details.
pub struct Signal<Args> {
    slots: Mutex<Slots<Args>>,
    blocked: AtomicBool,
}

impl<Args: Clone + Send + 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("slots", &self.slots.lock().map.len())
            .field("blocked", &self.blocked.load(Ordering::Relaxed))
            .finish()
    }
}

impl<Args: Clone + Send + 'static> Signal<Args> {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(Slots::new()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Add `slot` to the end of the delivery order.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.slots.lock().insert(Arc::new(slot))
    }

    /// Remove one slot. Returns `false` if `id` was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().map.remove(id).is_some()
    }

    pub fn disconnect_all(&self) {
        self.slots.lock().map.clear();
    }

    pub fn connection_count(&self) -> usize {
        self.slots.lock().map.len()
    }

    /// Drop emissions until unblocked. Slots stay connected.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::Relaxed);
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::Relaxed)
    }

    /// Run every connected slot with `args`.
    #[tracing::instrument(skip_all, target = "colorslider_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "blocked, emission dropped");
            return;
        }

        let snapshot = self.slots.lock().ordered();
        tracing::trace!(target: targets::SIGNAL, slots = snapshot.len(), "emit");
        for slot in &snapshot {
            slot(&args);
        }
    }

    /// Connect `slot` for as long as the returned guard lives.
    ///
    /// The guard holds its own reference to the signal, so either may be
    /// dropped first.
    ///
    /// ```
    /// use colorslider_core::Signal;
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    ///
    /// let signal = Arc::new(Signal::<()>::new());
    /// let calls = Arc::new(AtomicUsize::new(0));
    /// {
    ///     let calls = calls.clone();
    ///     let _guard = Signal::connect_scoped(&signal, move |_| {
    ///         calls.fetch_add(1, Ordering::Relaxed);
    ///     });
    ///     signal.emit(());
    /// }
    /// signal.emit(());
    /// assert_eq!(calls.load(Ordering::Relaxed), 1);
    /// ```
    pub fn connect_scoped<F>(signal: &Arc<Self>, slot: F) -> ConnectionGuard<Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        ConnectionGuard {
            id: signal.connect(slot),
            signal: Arc::clone(signal),
        }
    }
}

/// Disconnects its slot when dropped. See [`Signal::connect_scoped`].
pub struct ConnectionGuard<Args: Clone + Send + 'static> {
    signal: Arc<Signal<Args>>,
    id: ConnectionId,
}

impl<Args: Clone + Send + 'static> ConnectionGuard<Args> {
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args: Clone + Send + 'static> Drop for ConnectionGuard<Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);
static_assertions::assert_impl_all!(ConnectionGuard<i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;

    fn recorder<T: Clone + Send + 'static>(signal: &Signal<T>) -> Arc<Mutex<Vec<T>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        signal.connect(move |v: &T| sink.lock().push(v.clone()));
        log
    }

    #[test]
    fn test_signal_connect_emit() {
        let signal = Signal::<i32>::new();
        let log = recorder(&signal);

        signal.emit(30);
        signal.emit(31);

        assert_eq!(*log.lock(), vec![30, 31]);
    }

    #[test]
    fn test_signal_disconnect() {
        let signal = Signal::<i32>::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let id = signal.connect(move |&v| sink.lock().push(v));

        signal.emit(1);
        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));
        signal.emit(2);

        assert_eq!(*log.lock(), vec![1]);
    }

    #[test]
    fn test_signal_blocked() {
        let signal = Signal::<i32>::new();
        let log = recorder(&signal);

        signal.emit(1);
        signal.set_blocked(true);
        assert!(signal.is_blocked());
        signal.emit(2);
        signal.set_blocked(false);
        signal.emit(3);

        assert_eq!(*log.lock(), vec![1, 3]);
        assert_eq!(signal.connection_count(), 1);
    }

    #[test]
    fn test_disconnect_all() {
        let signal = Signal::<()>::new();
        for _ in 0..3 {
            signal.connect(|_| {});
        }
        assert_eq!(signal.connection_count(), 3);
        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_connection_guard() {
        let signal = Arc::new(Signal::<i32>::new());
        let log = Arc::new(Mutex::new(Vec::new()));

        {
            let sink = log.clone();
            let guard = Signal::connect_scoped(&signal, move |&v| sink.lock().push(v));
            assert_eq!(signal.connection_count(), 1);
            assert!(!guard.id().eq(&ConnectionId::default()));
            signal.emit(1);
        }
        signal.emit(2);

        assert_eq!(*log.lock(), vec![1]);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_slot_may_reconnect_during_emit() {
        let signal = Arc::new(Signal::<()>::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let inner = signal.clone();
        let counter = calls.clone();
        signal.connect(move |_| {
            counter.fetch_add(1, Ordering::Relaxed);
            inner.connect(|_| {});
        });

        signal.emit(());
        assert_eq!(calls.load(Ordering::Relaxed), 1);
        assert_eq!(signal.connection_count(), 2);
    }

    #[test]
    fn test_signal_with_struct_payload() {
        #[derive(Debug, Clone, Copy, PartialEq)]
        struct Moved {
            from: i32,
            to: i32,
        }

        let signal = Signal::<Moved>::new();
        let log = recorder(&signal);
        signal.emit(Moved { from: 30, to: 100 });

        assert_eq!(*log.lock(), vec![Moved { from: 30, to: 100 }]);
    }
}
