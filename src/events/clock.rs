//! # Process-wide event clock.
//!
//! Timestamps on [`Event`](crate::Event)s default to the value of a
//! process-wide time source read at construction. The default source is the
//! system clock in milliseconds since the Unix epoch; [`set_time_source`]
//! swaps in a custom source (a fixed clock for tests, a frame counter, a
//! monotonic tick) and affects every event constructed afterwards.
//!
//! ## Example
//! ```rust
//! use evoke::{reset_time_source, set_time_source, time_stamp};
//!
//! set_time_source(|| 42);
//! assert_eq!(time_stamp(), 42);
//!
//! reset_time_source();
//! ```

use std::sync::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Installed override. `None` means the default system clock.
static TIME_SOURCE: RwLock<Option<Box<dyn Fn() -> u64 + Send + Sync>>> = RwLock::new(None);

fn system_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Returns the current value of the installed time source.
///
/// This is the value an [`Event`](crate::Event) constructed right now would
/// carry, unless its description pins an explicit timestamp.
pub fn time_stamp() -> u64 {
    let guard = match TIME_SOURCE.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    match guard.as_ref() {
        Some(source) => source(),
        None => system_millis(),
    }
}

/// Installs `source` as the process-wide time source.
///
/// Takes effect for all subsequently constructed events; events that already
/// exist keep the timestamp they were built with.
pub fn set_time_source<F>(source: F)
where
    F: Fn() -> u64 + Send + Sync + 'static,
{
    let mut guard = match TIME_SOURCE.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    *guard = Some(Box::new(source));
}

/// Restores the default time source (system clock, millisecond resolution).
pub fn reset_time_source() {
    let mut guard = match TIME_SOURCE.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    *guard = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Event, EventDescription};
    use std::sync::Mutex;

    // The source is process-global; tests that touch it must not interleave.
    static SOURCE_GUARD: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_source_reads_wall_clock() {
        let _lock = SOURCE_GUARD.lock().unwrap_or_else(|e| e.into_inner());
        reset_time_source();
        // Sometime after 2020 in milliseconds.
        assert!(time_stamp() > 1_600_000_000_000);
    }

    #[test]
    fn test_override_applies_to_new_events_until_reset() {
        let _lock = SOURCE_GUARD.lock().unwrap_or_else(|e| e.into_inner());

        set_time_source(|| 7);
        assert_eq!(time_stamp(), 7);

        let event = Event::new(EventDescription::new("t", ()));
        assert_eq!(event.time_stamp(), 7);

        set_time_source(|| 8);
        let later = Event::new(EventDescription::new("t", ()));
        assert_eq!(event.time_stamp(), 7);
        assert_eq!(later.time_stamp(), 8);

        reset_time_source();
        assert!(time_stamp() > 1_600_000_000_000);
    }

    #[test]
    fn test_explicit_time_stamp_wins_over_source() {
        let _lock = SOURCE_GUARD.lock().unwrap_or_else(|e| e.into_inner());

        set_time_source(|| 99);
        let event = Event::new(EventDescription::new("t", ()).at(1011));
        assert_eq!(event.time_stamp(), 1011);
        reset_time_source();
    }
}
