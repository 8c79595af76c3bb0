// SPDX-License-Identifier: MPL-2.0
//! Read-only projection of a [`Writable`].

use super::writable::{Subscription, Writable};
use std::fmt;
use std::rc::Rc;

/// A value computed from a [`Writable`] by a pure function.
///
/// Nothing is cached: `get` maps the source's current value and subscribers
/// are attached to the source itself, so the projection observed by any
/// caller always corresponds to the source value at that instant.
pub struct Derived<S, T> {
    source: Writable<S>,
    map: Rc<dyn Fn(&S) -> T>,
}

impl<S, T> Clone for Derived<S, T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            map: Rc::clone(&self.map),
        }
    }
}

impl<S: fmt::Debug, T> fmt::Debug for Derived<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Derived")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl<S: Clone + 'static, T: 'static> Derived<S, T> {
    pub fn new(source: Writable<S>, map: impl Fn(&S) -> T + 'static) -> Self {
        Self {
            source,
            map: Rc::new(map),
        }
    }

    /// Map the source's current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.source.with(|value| (self.map)(value))
    }

    /// Register `callback` for the projected value. Fires immediately and
    /// on every commit of the source.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let map = Rc::clone(&self.map);
        self.source.subscribe(move |value| callback(&map(value)))
    }
}
