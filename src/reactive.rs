//! Minimal observable-state primitive: [`Signal`] values registered against a
//! shared [`Scheduler`].
//!
//! Notification is synchronous with the write. [`Scheduler::batch`] coalesces
//! several writes into one flush, so a subscriber listening to more than one
//! of the written signals runs exactly once per batch. Writes made by a
//! running subscriber are queued and drained in the same flush, which lets
//! derived signals propagate without re-entering the scheduler.

use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

type Callback = Arc<dyn Fn() + Send + Sync>;

/// Handle to a registered subscriber callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the subscriber registry and the dirty set. Cheap to clone; all clones
/// share state.
#[derive(Clone, Default)]
pub struct Scheduler {
    inner: Arc<SchedulerInner>,
}

#[derive(Default)]
struct SchedulerInner {
    next_id: AtomicU64,
    subscribers: Mutex<HashMap<u64, Callback>>,
    dirty: Mutex<Vec<u64>>,
    batch_depth: Mutex<u32>,
    flushing: Mutex<bool>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. It only fires once subscribed to one or more
    /// signals via [`Signal::subscribe`].
    pub fn register(&self, callback: impl Fn() + Send + Sync + 'static) -> SubscriptionId {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.subscribers.lock().insert(id, Arc::new(callback));
        SubscriptionId(id)
    }

    /// Drop a callback. Signals may still hold the stale id; the flush loop
    /// skips ids with no registered callback.
    pub fn unregister(&self, id: SubscriptionId) {
        self.inner.subscribers.lock().remove(&id.0);
    }

    /// Run `f` with notifications deferred, then flush once. Nested batches
    /// flush at the outermost close.
    pub fn batch<R>(&self, f: impl FnOnce() -> R) -> R {
        *self.inner.batch_depth.lock() += 1;
        let out = f();
        let depth = {
            let mut depth = self.inner.batch_depth.lock();
            *depth -= 1;
            *depth
        };
        if depth == 0 {
            self.flush();
        }
        out
    }

    fn mark_dirty(&self, listeners: &[SubscriptionId]) {
        {
            let mut dirty = self.inner.dirty.lock();
            dirty.extend(listeners.iter().map(|id| id.0));
        }
        if *self.inner.batch_depth.lock() == 0 {
            self.flush();
        }
    }

    fn flush(&self) {
        {
            let mut flushing = self.inner.flushing.lock();
            if *flushing {
                // A subscriber wrote to a signal; the outer flush loop will
                // pick the new dirty entries up.
                return;
            }
            *flushing = true;
        }
        loop {
            let pending = std::mem::take(&mut *self.inner.dirty.lock());
            if pending.is_empty() {
                break;
            }
            let mut seen = HashSet::new();
            for id in pending {
                if !seen.insert(id) {
                    continue;
                }
                let callback = self.inner.subscribers.lock().get(&id).cloned();
                if let Some(callback) = callback {
                    callback();
                }
            }
        }
        *self.inner.flushing.lock() = false;
    }
}

/// An observable value. Clones share the underlying value and listener list.
pub struct Signal<T> {
    value: Arc<Mutex<T>>,
    listeners: Arc<Mutex<Vec<SubscriptionId>>>,
    scheduler: Scheduler,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            listeners: Arc::clone(&self.listeners),
            scheduler: self.scheduler.clone(),
        }
    }
}

impl<T: Clone> Signal<T> {
    pub fn new(scheduler: &Scheduler, value: T) -> Self {
        Self {
            value: Arc::new(Mutex::new(value)),
            listeners: Arc::new(Mutex::new(Vec::new())),
            scheduler: scheduler.clone(),
        }
    }

    pub fn get(&self) -> T {
        self.value.lock().clone()
    }

    /// Write the value and notify listeners (deferred inside a batch).
    pub fn set(&self, value: T) {
        *self.value.lock() = value;
        self.notify();
    }

    /// Attach a registered subscriber to this signal.
    pub fn subscribe(&self, id: SubscriptionId) {
        self.listeners.lock().push(id);
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.lock().retain(|l| *l != id);
    }

    fn notify(&self) {
        let listeners = self.listeners.lock().clone();
        self.scheduler.mark_dirty(&listeners);
    }
}

impl<T: Clone + PartialEq> Signal<T> {
    /// Write only if the value actually changes. Returns whether it did.
    pub fn set_if_changed(&self, value: T) -> bool {
        {
            let mut current = self.value.lock();
            if *current == value {
                return false;
            }
            *current = value;
        }
        self.notify();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let count2 = Arc::clone(&count);
        (count, move || {
            count2.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn notifies_synchronously() {
        let scheduler = Scheduler::new();
        let signal = Signal::new(&scheduler, 0);
        let (count, callback) = counter();
        let id = scheduler.register(callback);
        signal.subscribe(id);

        signal.set(1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        signal.set(2);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn batch_coalesces_to_one_run() {
        let scheduler = Scheduler::new();
        let a = Signal::new(&scheduler, 0);
        let b = Signal::new(&scheduler, 0);
        let (count, callback) = counter();
        let id = scheduler.register(callback);
        a.subscribe(id);
        b.subscribe(id);

        scheduler.batch(|| {
            a.set(1);
            b.set(1);
            assert_eq!(count.load(Ordering::SeqCst), 0, "deferred inside batch");
        });
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn subscriber_writes_cascade_in_same_flush() {
        let scheduler = Scheduler::new();
        let input = Signal::new(&scheduler, 1);
        let derived = Signal::new(&scheduler, 2);

        let input2 = input.clone();
        let derived2 = derived.clone();
        let derive_id = scheduler.register(move || {
            derived2.set(input2.get() * 2);
        });
        input.subscribe(derive_id);

        let (count, callback) = counter();
        let downstream = scheduler.register(callback);
        derived.subscribe(downstream);

        input.set(5);
        assert_eq!(derived.get(), 10);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unregister_stops_notifications() {
        let scheduler = Scheduler::new();
        let signal = Signal::new(&scheduler, 0);
        let (count, callback) = counter();
        let id = scheduler.register(callback);
        signal.subscribe(id);

        signal.set(1);
        scheduler.unregister(id);
        signal.set(2);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn set_if_changed_skips_equal_values() {
        let scheduler = Scheduler::new();
        let signal = Signal::new(&scheduler, 7);
        let (count, callback) = counter();
        let id = scheduler.register(callback);
        signal.subscribe(id);

        assert!(!signal.set_if_changed(7));
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(signal.set_if_changed(8));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
