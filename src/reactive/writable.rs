// SPDX-License-Identifier: MPL-2.0
//! Observable value with an optional commit effect.
//!
//! [`Writable<T>`] wraps a value in `Rc<RefCell<..>>`. Cloning a `Writable`
//! yields another handle to the same cell. An optional *effect* runs each
//! time a value is committed, before any subscriber sees it; the locale
//! store uses it to persist the preference.
//!
//! # Failure Modes
//!
//! - **Panicking subscriber**: the notification round is abandoned and any
//!   queued changes are discarded. The cell stays usable.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;
type Effect<T> = Rc<dyn Fn(&T)>;
type Change<T> = Box<dyn FnOnce(&T) -> T>;

struct Entry<T> {
    id: u64,
    active: Rc<Cell<bool>>,
    callback: Callback<T>,
}

struct WritableInner<T> {
    value: T,
    version: u64,
    next_id: u64,
    subscribers: Vec<Entry<T>>,
    /// True while a notification round is running.
    notifying: bool,
    /// Changes requested from inside a callback, applied in order after the
    /// current round, each to the value committed just before it.
    pending: VecDeque<Change<T>>,
}

/// A shared, observable value.
pub struct Writable<T> {
    inner: Rc<RefCell<WritableInner<T>>>,
    effect: Option<Effect<T>>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            effect: self.effect.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Writable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Writable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + 'static> Writable<T> {
    /// Create a cell holding `value` with no subscribers and no effect.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(WritableInner {
                value,
                version: 0,
                next_id: 0,
                subscribers: Vec::new(),
                notifying: false,
                pending: VecDeque::new(),
            })),
            effect: None,
        }
    }

    /// Create a cell whose every committed value is first passed to `effect`.
    ///
    /// The initial value is not passed to the effect.
    #[must_use]
    pub fn with_effect(value: T, effect: impl Fn(&T) + 'static) -> Self {
        let effect: Effect<T> = Rc::new(effect);
        let mut cell = Self::new(value);
        cell.effect = Some(effect);
        cell
    }

    /// Get a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Access the current value by reference without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Commit a new value: run the effect, store the value, then notify
    /// every live subscriber in registration order.
    ///
    /// Called from inside a subscriber callback, the value is queued and
    /// committed once the running round has finished.
    pub fn set(&self, value: T) {
        self.apply(Box::new(move |_: &T| value));
    }

    /// Compute a new value from the current one and commit it the same way
    /// as [`Writable::set`].
    ///
    /// Called from inside a subscriber callback, `f` is queued and later
    /// receives the value committed by the change queued before it.
    pub fn update(&self, f: impl FnOnce(&T) -> T + 'static) {
        self.apply(Box::new(f));
    }

    /// Register `callback`. It is invoked immediately with the current
    /// value and then after every `set`.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let active = Rc::new(Cell::new(true));
        let callback: Callback<T> = Rc::new(callback);
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push(Entry {
                id,
                active: Rc::clone(&active),
                callback: Rc::clone(&callback),
            });
            id
        };

        let current = self.get();
        callback(&current);

        let weak: Weak<RefCell<WritableInner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            active,
            detach: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    // Inactive entries left behind here are pruned on the next commit.
                    if let Ok(mut inner) = inner.try_borrow_mut() {
                        inner.subscribers.retain(|entry| entry.id != id);
                    }
                }
            })),
        }
    }

    /// Number of commits since creation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn apply(&self, change: Change<T>) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.notifying {
                inner.pending.push_back(change);
                return;
            }
            inner.notifying = true;
        }

        let _round = RoundGuard { inner: &self.inner };
        let mut next = Some(change);
        while let Some(change) = next {
            let current = self.get();
            self.commit(change(&current));
            next = self.inner.borrow_mut().pending.pop_front();
        }
    }

    fn commit(&self, value: T) {
        if let Some(effect) = &self.effect {
            effect(&value);
        }

        let callbacks: Vec<(Rc<Cell<bool>>, Callback<T>)> = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value;
            inner.version += 1;
            inner.subscribers.retain(|entry| entry.active.get());
            inner
                .subscribers
                .iter()
                .map(|entry| (Rc::clone(&entry.active), Rc::clone(&entry.callback)))
                .collect()
        };

        let value = self.get();
        for (active, callback) in &callbacks {
            // An earlier callback in this round may have unsubscribed this one.
            if active.get() {
                callback(&value);
            }
        }
    }
}

/// Ends a notification round, including when a callback panics.
struct RoundGuard<'a, T> {
    inner: &'a RefCell<WritableInner<T>>,
}

impl<T> Drop for RoundGuard<'_, T> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.notifying = false;
            inner.pending.clear();
        }
    }
}

/// Handle for a registered callback.
///
/// Dropping the handle unsubscribes. Keep it alive for as long as the
/// callback should run.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    active: Rc<Cell<bool>>,
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Stop receiving notifications. No callback runs after this returns.
    pub fn unsubscribe(self) {
        drop(self);
    }

    /// Whether the callback is still registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.active.set(false);
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.active.get())
            .finish_non_exhaustive()
    }
}
