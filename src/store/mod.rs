// SPDX-License-Identifier: MPL-2.0
//! Shared UI store with an explicit subscriber list.
//!
//! A [`Store`] owns one state value and a list of listeners. Every write
//! applies a pure `(state) -> patch` transformation, merges the patch into
//! the state, then notifies all listeners synchronously in subscription
//! order. The store is single-threaded: handles are cheap `Rc` clones meant
//! to be passed to every component that reads or writes the state.
//!
//! # Usage
//!
//! ```
//! use iced_landing::store::{app_state, AppState, Store};
//!
//! let store = Store::new(AppState::default());
//! let id = store.subscribe_selected(|s| s.counter, |counter| println!("{counter}"));
//! store.set(app_state::increment);
//! assert_eq!(store.select(|s| s.counter), 1);
//! store.unsubscribe(id);
//! ```

pub mod app_state;

pub use app_state::{AppState, AppStatePatch};

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Store for the landing page state.
pub type AppStore = Store<AppState>;

/// State that can absorb a partial update.
pub trait Merge {
    /// Partial state produced by an updater.
    type Patch;

    /// Applies every field present in `patch`, leaving the rest unchanged.
    fn merge(&mut self, patch: Self::Patch);
}

/// Handle returned by the subscribe methods, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<S> = Rc<dyn Fn(&S)>;
type Updater<S> = Box<dyn FnOnce(&S) -> <S as Merge>::Patch>;

struct Inner<S: Merge> {
    state: S,
    listeners: Vec<(SubscriptionId, Listener<S>)>,
    next_id: u64,
    notifying: bool,
    /// Writes issued by listeners while a notification round is running.
    pending: VecDeque<Updater<S>>,
}

/// Ends a notification round, even when a listener unwinds. Writes queued
/// by the aborted round are dropped.
struct RoundGuard<'a, S: Merge> {
    inner: &'a RefCell<Inner<S>>,
}

impl<S: Merge> Drop for RoundGuard<'_, S> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.notifying = false;
            inner.pending.clear();
        }
    }
}

/// Shared, observable state.
pub struct Store<S: Merge> {
    inner: Rc<RefCell<Inner<S>>>,
}

impl<S: Merge> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: Merge + fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Store")
            .field("state", &inner.state)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl<S: Merge + Default + Clone + 'static> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Merge + Clone + 'static> Store<S> {
    pub fn new(state: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state,
                listeners: Vec::new(),
                next_id: 0,
                notifying: false,
                pending: VecDeque::new(),
            })),
        }
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn get(&self) -> S {
        self.inner.borrow().state.clone()
    }

    /// Returns a view derived from the current state.
    pub fn select<T>(&self, selector: impl FnOnce(&S) -> T) -> T {
        selector(&self.inner.borrow().state)
    }

    /// Applies `updater` to the current state and merges its result, then
    /// notifies every listener with the new state.
    ///
    /// Called from inside a listener, the write is queued and applied once
    /// the running notification round has reached every listener.
    pub fn set<F>(&self, updater: F)
    where
        F: FnOnce(&S) -> S::Patch + 'static,
    {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.notifying {
                inner.pending.push_back(Box::new(updater));
                return;
            }
            inner.notifying = true;
        }
        let _round = RoundGuard { inner: &self.inner };

        let mut next: Updater<S> = Box::new(updater);
        loop {
            // No borrow is held while updaters or listeners run.
            let patch = next(&self.get());
            self.inner.borrow_mut().state.merge(patch);

            let (snapshot, listeners) = {
                let inner = self.inner.borrow();
                let listeners: Vec<Listener<S>> =
                    inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
                (inner.state.clone(), listeners)
            };
            tracing::trace!(listeners = listeners.len(), "store notifying");
            for listener in listeners {
                listener(&snapshot);
            }

            let queued = self.inner.borrow_mut().pending.pop_front();
            match queued {
                Some(queued) => next = queued,
                None => break,
            }
        }
    }

    /// Registers a listener called with the full state after every write.
    pub fn subscribe(&self, listener: impl Fn(&S) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Registers a listener called with `selector(state)` whenever that
    /// derived value differs from the one seen last.
    pub fn subscribe_selected<T, Sel, L>(&self, selector: Sel, listener: L) -> SubscriptionId
    where
        T: PartialEq + 'static,
        Sel: Fn(&S) -> T + 'static,
        L: Fn(&T) + 'static,
    {
        let last = RefCell::new(self.select(&selector));
        self.subscribe(move |state| {
            let next = selector(state);
            if *last.borrow() != next {
                listener(&next);
                *last.borrow_mut() = next;
            }
        })
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(existing, _)| *existing != id);
        inner.listeners.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::app_state::{decrement, increment};
    use super::*;
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn increment_then_decrement_twice_yields_minus_one() {
        let store = AppStore::default();
        assert_eq!(store.get().counter, 0);

        store.set(increment);
        store.set(decrement);
        store.set(decrement);

        assert_eq!(store.get(), AppState { counter: -1 });
    }

    #[test]
    fn every_subscriber_sees_each_write_immediately() {
        let store = AppStore::default();
        let a = Rc::new(RefCell::new(Vec::new()));
        let b = Rc::new(RefCell::new(Vec::new()));

        let seen_a = Rc::clone(&a);
        store.subscribe(move |s| seen_a.borrow_mut().push(s.counter));
        let seen_b = Rc::clone(&b);
        store.subscribe(move |s| seen_b.borrow_mut().push(s.counter));

        store.set(increment);
        assert_eq!(*a.borrow(), vec![1]);
        assert_eq!(*b.borrow(), vec![1]);

        store.set(decrement);
        store.set(decrement);
        assert_eq!(*a.borrow(), vec![1, 0, -1]);
        assert_eq!(*b.borrow(), vec![1, 0, -1]);
    }

    #[test]
    fn listener_reading_store_sees_new_state() {
        let store = AppStore::default();
        let observed = Rc::new(Cell::new(i64::MIN));

        let handle = store.clone();
        let sink = Rc::clone(&observed);
        store.subscribe(move |_| sink.set(handle.select(|s| s.counter)));

        store.set(increment);
        assert_eq!(observed.get(), 1);
    }

    #[test]
    fn selected_listener_skips_unchanged_values() {
        let store = AppStore::default();
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        store.subscribe_selected(|s| s.counter > 0, move |_| counter.set(counter.get() + 1));

        store.set(increment); // false -> true
        store.set(increment); // still true
        store.set(|_| AppStatePatch::default()); // no change
        store.set(decrement); // still true
        store.set(decrement); // true -> false

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn empty_patch_keeps_state() {
        let store = AppStore::new(AppState { counter: 7 });
        store.set(|_| AppStatePatch::default());
        assert_eq!(store.get().counter, 7);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = AppStore::default();
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| counter.set(counter.get() + 1));
        store.set(increment);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set(increment);

        assert_eq!(calls.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn writes_from_listeners_are_applied_after_the_round() {
        let store = AppStore::default();
        let log = Rc::new(RefCell::new(Vec::new()));

        let handle = store.clone();
        store.subscribe(move |s| {
            if s.counter == 1 {
                handle.set(increment);
            }
        });
        let sink = Rc::clone(&log);
        store.subscribe(move |s| sink.borrow_mut().push(s.counter));

        store.set(increment);

        // The second listener saw 1 before the queued write produced 2.
        assert_eq!(*log.borrow(), vec![1, 2]);
        assert_eq!(store.get().counter, 2);
    }

    #[test]
    fn clones_share_state() {
        let store = AppStore::default();
        let other = store.clone();
        other.set(increment);
        assert_eq!(store.get().counter, 1);
    }

    #[test]
    fn store_accepts_writes_after_a_listener_panicked() {
        let store = AppStore::default();
        let id = store.subscribe(|s| {
            if s.counter == 1 {
                panic!("listener failure");
            }
        });

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| store.set(increment)));
        assert!(outcome.is_err());
        assert_eq!(store.get().counter, 1);

        assert!(store.unsubscribe(id));
        store.set(increment);
        assert_eq!(store.get().counter, 2);
        store.set(|_| AppStatePatch { counter: Some(10) });
        assert_eq!(store.get().counter, 10);
    }

    #[test]
    fn updater_may_read_its_own_store() {
        let store = AppStore::new(AppState { counter: 4 });
        let handle = store.clone();
        store.set(move |s| AppStatePatch {
            counter: Some(s.counter + handle.get().counter),
        });
        assert_eq!(store.get().counter, 8);
    }
}
