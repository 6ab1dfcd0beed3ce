// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io, time::Duration};

use async_stream::stream;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::PinnedInputStream;

pub fn key(code: KeyCode) -> Event { Event::Key(KeyEvent::new(code, KeyModifiers::NONE)) }

pub fn ctrl(ch: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

/// One key event per character.
pub fn typed(text: &str) -> Vec<Event> { text.chars().map(|ch| key(KeyCode::Char(ch))).collect() }

/// Each item is preceded by a sleep of `delay`. Pair with a paused tokio clock.
pub fn gen_input_stream_with_delay(
    events: Vec<(Duration, Event)>,
) -> PinnedInputStream<io::Result<Event>> {
    let it = stream! {
        for (delay, event) in events {
            tokio::time::sleep(delay).await;
            yield Ok(event);
        }
    };
    Box::pin(it)
}
