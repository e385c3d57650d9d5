//! # EventEmitter: name-keyed synchronous dispatch.
//!
//! [`EventEmitter`] owns a registry mapping event names to ordered listener
//! lists and dispatches [`Event`]s to them synchronously, in registration
//! order, on the caller's stack.
//!
//! ## Dispatch rules
//! - [`EventEmitter::emit`] iterates a snapshot of the list taken at call
//!   time. The registry borrow is never held while a listener runs, so
//!   listeners are free to call `emit`, `add_listener` or `remove_listener`
//!   on the same emitter from inside their own invocation.
//! - When the snapshot is exhausted, the survivors (every recurring record
//!   plus every one-shot record that never ran, in their original relative
//!   order) are committed back as the new list for that name. Structural
//!   changes listeners made to the *same* name's list during the dispatch
//!   are discarded by that commit; changes to other names stick.
//! - [`Event::stop`] takes effect between listeners, never during one:
//!   records after the stopping listener are skipped but retained, one-shot
//!   records included.
//! - A panicking listener unwinds out of `emit` before the commit, leaving
//!   the registry exactly as it was when the dispatch started.
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use evoke::{listener, Event, EventDescription, EventEmitter};
//!
//! let emitter: EventEmitter<&str, u32> = EventEmitter::new();
//! let total = Rc::new(Cell::new(0));
//!
//! let probe = {
//!     let total = Rc::clone(&total);
//!     listener(move |event: &Event<&str, u32>| total.set(total.get() + *event.data()))
//! };
//! emitter.add_listener("tick", probe, false);
//!
//! assert!(emitter.emit(&Event::new(EventDescription::new("tick", 2))));
//! assert!(!emitter.emit(&Event::new(EventDescription::new("tock", 2))));
//! assert_eq!(total.get(), 2);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use crate::events::Event;

use super::record::{Listener, ListenerRecord};

/// Synchronous, in-process event emitter.
///
/// The registry lives behind a `RefCell`, so every operation takes `&self`;
/// re-entrant use from inside listeners is part of the contract (see the
/// dispatch rules in the module docs). Single-threaded by design: listener
/// handles are `Rc`s and nothing here is `Send`.
pub struct EventEmitter<N, D> {
    registry: RefCell<HashMap<N, Vec<ListenerRecord<N, D>>>>,
}

impl<N, D> EventEmitter<N, D>
where
    N: Eq + Hash + Clone,
{
    /// Creates an emitter with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: RefCell::new(HashMap::new()),
        }
    }

    /// Appends a record to the tail of the list for `name`, creating the
    /// list if absent. Returns the emitter for chaining.
    ///
    /// No deduplication: registering the identical `(listener, once)` pair
    /// twice yields two independent invocations per emit.
    pub fn add_listener(&self, name: N, listener: Listener<N, D>, once: bool) -> &Self {
        self.registry
            .borrow_mut()
            .entry(name)
            .or_default()
            .push(ListenerRecord { listener, once });
        self
    }

    /// Alias for [`EventEmitter::add_listener`].
    ///
    /// Like any method, the alias keeps its receiver slot when used as a
    /// free-standing function value:
    /// ```rust
    /// use evoke::{listener, EventEmitter};
    ///
    /// let emitter: EventEmitter<&str, ()> = EventEmitter::new();
    /// let subscribe = EventEmitter::<&str, ()>::on;
    /// subscribe(&emitter, "ready", listener(|_| {}), false);
    /// assert_eq!(emitter.listener_count(&"ready"), 1);
    /// ```
    pub fn on(&self, name: N, listener: Listener<N, D>, once: bool) -> &Self {
        self.add_listener(name, listener, once)
    }

    /// Registers a one-shot listener: `add_listener(name, listener, true)`.
    pub fn once(&self, name: N, listener: Listener<N, D>) -> &Self {
        self.add_listener(name, listener, true)
    }

    /// Removes every record for `name` whose handle (by [`Rc::ptr_eq`]) and
    /// `once` flag both match. Unknown names are a silent no-op.
    ///
    /// The flag is part of the identity: removing `(listener, once = true)`
    /// never touches the same handle registered with `once = false`.
    pub fn remove_listener(&self, name: &N, listener: &Listener<N, D>, once: bool) -> &Self {
        if let Some(records) = self.registry.borrow_mut().get_mut(name) {
            records.retain(|record| {
                !(Rc::ptr_eq(&record.listener, listener) && record.once == once)
            });
        }
        self
    }

    /// Alias for [`EventEmitter::remove_listener`].
    pub fn off(&self, name: &N, listener: &Listener<N, D>, once: bool) -> &Self {
        self.remove_listener(name, listener, once)
    }

    /// Dispatches `event` to the listeners registered under its name.
    ///
    /// Listeners run synchronously in registration order until the snapshot
    /// is exhausted or the event reports [`Event::stopped`]; stopping
    /// suppresses only listeners *after* the one that stopped. Invoked
    /// one-shot records are consumed; skipped ones are retained.
    ///
    /// Returns `true` iff at least one listener actually ran — `false` when
    /// no list exists, the list is empty, or the event arrived already
    /// stopped.
    pub fn emit(&self, event: &Event<N, D>) -> bool {
        let snapshot = match self.registry.borrow().get(event.name()) {
            Some(records) => records.clone(),
            None => return false,
        };

        let mut handled = false;
        let mut survivors = Vec::with_capacity(snapshot.len());
        for record in snapshot {
            if event.stopped() {
                survivors.push(record);
                continue;
            }
            handled = true;
            (record.listener)(event);
            if !record.once {
                survivors.push(record);
            }
        }

        self.registry
            .borrow_mut()
            .insert(event.name().clone(), survivors);
        handled
    }

    /// Number of records currently registered under `name`.
    pub fn listener_count(&self, name: &N) -> usize {
        self.registry.borrow().get(name).map_or(0, Vec::len)
    }

    /// Number of records across all names.
    pub fn total_listener_count(&self) -> usize {
        self.registry.borrow().values().map(Vec::len).sum()
    }

    /// Drops every record registered under `name`.
    pub fn remove_all_listeners(&self, name: &N) -> &Self {
        if let Some(records) = self.registry.borrow_mut().get_mut(name) {
            records.clear();
        }
        self
    }

    /// Empties the whole registry.
    pub fn clear(&self) {
        self.registry.borrow_mut().clear();
    }
}

impl<N, D> Default for EventEmitter<N, D>
where
    N: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
