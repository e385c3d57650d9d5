//! Stoppable events: the second listener halts the chain, the third never
//! runs. Without the stop gate the same `stop()` call is a no-op.
//!
//! Run with: `cargo run --example stop_propagation`

use evoke::{listener, Event, EventDescription, EventEmitter};

fn main() {
    let emitter: EventEmitter<&str, &str> = EventEmitter::new();

    emitter
        .add_listener(
            "alert",
            listener(|event: &Event<&str, &str>| {
                println!("first sees: {}", event.data());
            }),
            false,
        )
        .add_listener(
            "alert",
            listener(|event: &Event<&str, &str>| {
                println!("second handles it and stops the chain");
                event.stop();
            }),
            false,
        )
        .add_listener(
            "alert",
            listener(|_: &Event<&str, &str>| {
                println!("third runs only when nothing stopped the event");
            }),
            false,
        );

    let event = Event::new(EventDescription::new("alert", "disk full").stoppable());
    let handled = emitter.emit(&event);
    println!("handled={handled} stopped={}", event.stopped());

    let gated = Event::new(EventDescription::new("alert", "read-only"));
    emitter.emit(&gated);
    println!("stopped={}", gated.stopped());
}
