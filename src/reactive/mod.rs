// SPDX-License-Identifier: MPL-2.0
//! Single-threaded reactive cells.
//!
//! - [`Writable`]: an observable value with `get`/`set`/`update`/`subscribe`.
//! - [`Derived`]: a read-only projection of a [`Writable`] through a pure
//!   function. It keeps no value of its own, so it can never disagree with
//!   its source.
//! - [`Subscription`]: handle returned by `subscribe`; dropping it (or
//!   calling [`Subscription::unsubscribe`]) stops further callbacks.
//!
//! # Invariants
//!
//! 1. A new subscriber is called once immediately with the current value.
//! 2. Every `set` notifies every live subscriber, in registration order,
//!    even when the value is unchanged.
//! 3. A `set` issued from inside a callback is queued and applied after the
//!    current notification round, so rounds never interleave.
//! 4. Once `unsubscribe` returns, the callback is never invoked again.

pub mod derived;
pub mod writable;

pub use derived::Derived;
pub use writable::{Subscription, Writable};
