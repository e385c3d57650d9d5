//! Tagged-union events: one emitter, a payload enum per event kind, and the
//! dispatch table keyed by the tag. Each listener narrows to the variant its
//! tag fixes.
//!
//! Run with: `cargo run --example typed_union`

use evoke::{listener, Event, EventDescription, EventEmitter};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Tag {
    Connected,
    Frame,
}

#[derive(Debug)]
enum Message {
    Connected { session: u32 },
    Frame(Vec<u8>),
}

fn main() {
    let emitter: EventEmitter<Tag, Message> = EventEmitter::new();

    emitter.add_listener(
        Tag::Connected,
        listener(|event: &Event<Tag, Message>| {
            if let Message::Connected { session } = event.data() {
                println!("session {session} up at {}", event.time_stamp());
            }
        }),
        false,
    );

    emitter.add_listener(
        Tag::Frame,
        listener(|event: &Event<Tag, Message>| {
            if let Message::Frame(bytes) = event.data() {
                println!("frame of {} bytes", bytes.len());
            }
        }),
        false,
    );

    emitter.emit(&Event::new(EventDescription::new(
        Tag::Connected,
        Message::Connected { session: 7 },
    )));
    emitter.emit(&Event::new(EventDescription::new(
        Tag::Frame,
        Message::Frame(vec![0x02, 0x10, 0x7f]),
    )));
}
