//! # Bulk listener registration.
//!
//! [`add_listeners`] wires a whole table of `(name, record)` pairs into an
//! emitter in one call — a convenience wrapper over
//! [`EventEmitter::add_listener`], one call per entry, in the order the
//! collection yields them.

use std::hash::Hash;

use crate::emitter::{EventEmitter, ListenerRecord};

/// Registers every `(name, record)` entry on `emitter`.
///
/// Entries are processed in iteration order, so ordered collections (arrays,
/// `Vec`s) give a stable registration order. Any key type works, including
/// non-string names. A bare [`Listener`](crate::Listener) converts into a
/// recurring record via `Into`.
///
/// ## Example
/// ```rust
/// use evoke::{add_listeners, listener, EventEmitter, ListenerRecord};
///
/// let emitter: EventEmitter<&str, ()> = EventEmitter::new();
/// add_listeners(
///     &emitter,
///     [
///         ("open", ListenerRecord::new(listener(|_| {}))),
///         ("close", ListenerRecord::once(listener(|_| {}))),
///     ],
/// );
/// assert_eq!(emitter.total_listener_count(), 2);
/// ```
pub fn add_listeners<N, D, I, R>(emitter: &EventEmitter<N, D>, entries: I)
where
    N: Eq + Hash + Clone,
    I: IntoIterator<Item = (N, R)>,
    R: Into<ListenerRecord<N, D>>,
{
    for (name, entry) in entries {
        let record = entry.into();
        emitter.add_listener(name, record.listener, record.once);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::{listener, Event, EventDescription, Listener};

    fn plain(name: &'static str) -> Event<&'static str, ()> {
        Event::new(EventDescription::new(name, ()).at(0))
    }

    fn recorder(log: &Rc<RefCell<String>>, mark: char) -> Listener<&'static str, ()> {
        let log = Rc::clone(log);
        listener(move |_| log.borrow_mut().push(mark))
    }

    #[test]
    fn test_mixed_recurring_and_one_shot_entries() {
        let emitter = EventEmitter::new();
        let log = Rc::new(RefCell::new(String::new()));

        add_listeners(
            &emitter,
            [
                ("a", ListenerRecord::new(recorder(&log, 'a'))),
                ("b", ListenerRecord::once(recorder(&log, 'b'))),
            ],
        );

        assert!(emitter.emit(&plain("b")));
        assert!(!emitter.emit(&plain("b")));
        assert_eq!(*log.borrow(), "b");

        assert!(emitter.emit(&plain("a")));
        assert!(emitter.emit(&plain("a")));
        assert_eq!(*log.borrow(), "baa");
    }

    #[test]
    fn test_bare_listeners_register_as_recurring() {
        let emitter = EventEmitter::new();
        let log = Rc::new(RefCell::new(String::new()));

        add_listeners(&emitter, [("a", recorder(&log, 'a')), ("b", recorder(&log, 'b'))]);

        assert!(emitter.emit(&plain("a")));
        assert!(emitter.emit(&plain("a")));
        assert_eq!(*log.borrow(), "aa");
    }

    #[test]
    fn test_non_string_names() {
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        enum Channel {
            Open,
            Close,
        }

        let emitter: EventEmitter<Channel, ()> = EventEmitter::new();
        let hits = Rc::new(RefCell::new(0));
        let probe = {
            let hits = Rc::clone(&hits);
            listener(move |_: &Event<Channel, ()>| *hits.borrow_mut() += 1)
        };

        add_listeners(
            &emitter,
            [
                (Channel::Open, ListenerRecord::new(probe.clone())),
                (Channel::Close, ListenerRecord::once(probe)),
            ],
        );

        assert!(emitter.emit(&Event::new(EventDescription::new(Channel::Open, ()).at(0))));
        assert!(emitter.emit(&Event::new(EventDescription::new(Channel::Close, ()).at(0))));
        assert_eq!(*hits.borrow(), 2);
        assert_eq!(emitter.listener_count(&Channel::Close), 0);
    }
}
