//! A recurring listener and a one-shot listener on the same name.
//!
//! Run with: `cargo run --example basic_one_shot`

use evoke::{listener, Event, EventDescription, EventEmitter};

fn main() {
    let emitter: EventEmitter<&str, u32> = EventEmitter::new();

    emitter.add_listener(
        "tick",
        listener(|event: &Event<&str, u32>| println!("tick #{}", event.data())),
        false,
    );
    emitter.once(
        "tick",
        listener(|event: &Event<&str, u32>| println!("first tick at {}", event.time_stamp())),
    );

    for n in 1..=3 {
        emitter.emit(&Event::new(EventDescription::new("tick", n)));
    }
    println!("listeners left: {}", emitter.listener_count(&"tick"));
}
