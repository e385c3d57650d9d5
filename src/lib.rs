//! # evoke
//!
//! **evoke** is a minimal, strongly-typed, synchronous event emitter for
//! Rust. It provides two cooperating pieces: an [`Event`] value object
//! (name, payload, timestamp, stop/cancel semantics) and an
//! [`EventEmitter`] that routes events to registered listeners by name —
//! a building block for library authors who want an embeddable,
//! in-process event bus rather than a framework.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌────────────────┐      emit(&event)       ┌──────────────────────────┐
//!     │     Event      │ ──────────────────────► │       EventEmitter       │
//!     │  name          │                         │                          │
//!     │  data          │      stop() / cancel()  │  registry:               │
//!     │  time_stamp    │ ◄────────────────────── │    name → [record, ...]  │
//!     │  gates + flags │      (from listeners)   │    (registration order)  │
//!     └────────────────┘                         └────────────┬─────────────┘
//!                                                             │ invoke, in order
//!                                                             ▼
//!                                                         listeners
//! ```
//!
//! ### Dispatch lifecycle
//! ```text
//! emit(&event):
//!   ├─► no list for event.name ─► return false
//!   ├─► snapshot records; for each, in order:
//!   │     ├─ event.stopped? ─► skip (record retained)
//!   │     └─ else invoke; one-shot records are consumed
//!   └─► commit survivors as the new list ─► return "any listener ran"
//! ```
//!
//! ## Features
//! | Area           | Description                                          | Key items                           |
//! |----------------|------------------------------------------------------|-------------------------------------|
//! | **Events**     | Immutable occurrences with gated stop/cancel flags.  | [`Event`], [`EventDescription`]     |
//! | **Dispatch**   | Synchronous, registration-ordered, re-entrant.       | [`EventEmitter`]                    |
//! | **Listeners**  | Plain closures behind shared handles.                | [`Listener`], [`listener`]          |
//! | **Batch setup**| Register a table of listeners in one call.           | [`add_listeners`], [`ListenerRecord`] |
//! | **Clock**      | Process-wide, overridable timestamp source.          | [`time_stamp`], [`set_time_source`] |
//!
//! ## Optional features
//! - `logging`: exports `log_listener`, a built-in event tracer through the
//!   `log` facade _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use evoke::{listener, Event, EventDescription, EventEmitter};
//!
//! let emitter: EventEmitter<&str, String> = EventEmitter::new();
//! let joined = Rc::new(RefCell::new(Vec::new()));
//!
//! let greeter = {
//!     let joined = Rc::clone(&joined);
//!     listener(move |event: &Event<&str, String>| {
//!         joined.borrow_mut().push(event.data().clone());
//!     })
//! };
//! emitter.add_listener("join", greeter, false);
//! emitter.once("join", listener(|event| {
//!     println!("first join at {}", event.time_stamp());
//! }));
//!
//! let event = Event::new(EventDescription::new("join", "ada".to_string()));
//! assert!(emitter.emit(&event));
//! assert_eq!(joined.borrow().len(), 1);
//! assert_eq!(emitter.listener_count(&"join"), 1);
//! ```

mod emitter;
mod events;
mod listeners;

// ---- Public re-exports ----

pub use emitter::{listener, EventEmitter, Listener, ListenerRecord};
pub use events::{reset_time_source, set_time_source, time_stamp, Event, EventDescription};
pub use listeners::add_listeners;

// Optional: expose the built-in logging listener.
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::log_listener;
