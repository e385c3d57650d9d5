//! # Built-in logging listener.
//!
//! A minimal listener that records every event it sees through the [`log`]
//! facade, so dispatch traces land in whatever logger the host application
//! installed. Use it for tests or demos; the emitter core itself never logs.
//!
//! ## Example output
//! ```text
//! event name="saved" time_stamp=1011 stoppable=true cancelable=false data=3
//! ```

use std::fmt::Debug;

use crate::emitter::{listener, Listener};

/// Returns a listener that logs each event it receives at debug level.
///
/// Attach it explicitly wherever tracing a dispatch helps:
/// ```rust
/// use evoke::{log_listener, Event, EventDescription, EventEmitter};
///
/// let emitter: EventEmitter<&str, u32> = EventEmitter::new();
/// emitter.add_listener("saved", log_listener(), false);
/// assert!(emitter.emit(&Event::new(EventDescription::new("saved", 3))));
/// ```
#[must_use]
pub fn log_listener<N, D>() -> Listener<N, D>
where
    N: Debug + 'static,
    D: Debug + 'static,
{
    listener(|event| {
        log::debug!(
            "event name={:?} time_stamp={} stoppable={} cancelable={} data={:?}",
            event.name(),
            event.time_stamp(),
            event.stoppable(),
            event.cancelable(),
            event.data(),
        );
    })
}
