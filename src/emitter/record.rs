//! # Listener handles and records.
//!
//! A listener is a plain closure behind an [`Rc`]; the `Rc` allocation is
//! what gives it an identity. The registry stores [`ListenerRecord`]s (a
//! handle paired with its one-shot flag), and the `(handle, once)` pair is
//! the unit of removal: the same callback registered once recurring and once
//! one-shot are two independent entries.

use std::rc::Rc;

use crate::events::Event;

/// Shared handle to a listener callback.
///
/// [`EventEmitter::remove_listener`](crate::EventEmitter::remove_listener)
/// matches records by [`Rc::ptr_eq`], so keep a clone of the handle you
/// registered if you intend to remove it later.
pub type Listener<N, D> = Rc<dyn Fn(&Event<N, D>)>;

/// Wraps a closure into a [`Listener`] handle.
///
/// ## Example
/// ```rust
/// use evoke::{listener, Event, Listener};
///
/// let probe: Listener<&str, u32> = listener(|event: &Event<&str, u32>| {
///     let _ = event.data();
/// });
/// let same = probe.clone();
/// assert!(std::rc::Rc::ptr_eq(&probe, &same));
/// ```
pub fn listener<N, D, F>(callback: F) -> Listener<N, D>
where
    F: Fn(&Event<N, D>) + 'static,
{
    Rc::new(callback)
}

/// A registered callback together with its one-shot flag.
pub struct ListenerRecord<N, D> {
    /// The callback to invoke.
    pub listener: Listener<N, D>,
    /// Whether the record is consumed by its first invocation.
    pub once: bool,
}

impl<N, D> ListenerRecord<N, D> {
    /// Recurring record: survives every invocation.
    #[must_use]
    pub fn new(listener: Listener<N, D>) -> Self {
        Self {
            listener,
            once: false,
        }
    }

    /// One-shot record: consumed by its first invocation.
    #[must_use]
    pub fn once(listener: Listener<N, D>) -> Self {
        Self {
            listener,
            once: true,
        }
    }
}

impl<N, D> Clone for ListenerRecord<N, D> {
    fn clone(&self) -> Self {
        Self {
            listener: Rc::clone(&self.listener),
            once: self.once,
        }
    }
}

impl<N, D> From<Listener<N, D>> for ListenerRecord<N, D> {
    /// A bare listener converts to a recurring record.
    fn from(listener: Listener<N, D>) -> Self {
        Self::new(listener)
    }
}
