//=========================================================================
// Event Collector
//=========================================================================
//
// Turns whatever the platform sent since the last tick into one flat,
// ordered list of `InputEvent`s for `TransitionController::tick`.
//
// A closed window or a vanished platform thread shows up as a trailing
// `InputEvent::Quit`, so the controller sees quitting as ordinary input.
//
//=========================================================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{info, warn};

use super::PlatformEvent;
use crate::core::input::event::InputEvent;

/// Input batches taken per tick; anything beyond waits for the next one.
const MAX_BATCHES_PER_TICK: usize = 100;

pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    tick_events: Vec<InputEvent>,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            tick_events: Vec::with_capacity(32),
        }
    }

    /// This tick's input in arrival order. The slice is reused, so it is
    /// only valid until the next call.
    pub(crate) fn collect_frame(&mut self) -> &[InputEvent] {
        self.tick_events.clear();

        for _ in 0..MAX_BATCHES_PER_TICK {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                    self.tick_events.extend(discrete.into_iter().chain(continuous));
                }
                Ok(PlatformEvent::WindowClosed) => {
                    info!(target: "platform", "Window closed, quitting");
                    self.tick_events.push(InputEvent::Quit);
                    return &self.tick_events;
                }
                Err(TryRecvError::Disconnected) => {
                    warn!(target: "platform", "Platform channel disconnected, quitting");
                    self.tick_events.push(InputEvent::Quit);
                    return &self.tick_events;
                }
                Err(TryRecvError::Empty) => return &self.tick_events,
            }
        }

        warn!(
            target: "platform::input",
            "Input backlog: stopped after {} batches this tick",
            MAX_BATCHES_PER_TICK
        );
        &self.tick_events
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
