//! Blocking event pump: crossterm events in, `AppEvent`s out, with a tick
//! timeout so the main loop can service signals between inputs.

use std::io;
use std::time::Duration;

use crate::core::event::AppEvent;

pub struct EventPump {
    tick: Duration,
}

impl EventPump {
    pub fn new(tick: Duration) -> Self {
        Self { tick }
    }

    /// Next event, or `Tick` after the timeout elapses without input.
    pub fn next(&mut self) -> io::Result<AppEvent> {
        if crossterm::event::poll(self.tick)? {
            let event = crossterm::event::read()?;
            Ok(AppEvent::Input(event.into()))
        } else {
            Ok(AppEvent::Tick)
        }
    }
}
