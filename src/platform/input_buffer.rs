//=========================================================================
// Input Buffer
//
// Holds input gathered between two redraws on the main thread.
//
// One-shot input (keys, buttons, text) keeps its order, minus immediate
// duplicates such as OS key repeat. Typed text is never de-duplicated.
//
// Pointer motion is coalesced so only the newest position is pending.
// A one-shot event settles pending motion into the ordered list first,
// so a drag still reads press, move, release.
//
//=========================================================================

use std::collections::HashSet;

use crate::core::input::event::InputEvent;

pub(crate) struct InputBuffer {
    /// Ordered one-shot events.
    discrete: Vec<InputEvent>,
    /// Newest event per continuous kind (equality ignores coordinates).
    continuous: HashSet<InputEvent>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        Self {
            discrete: Vec::with_capacity(64),
            continuous: HashSet::with_capacity(2),
        }
    }

    /// Replaces any buffered event of the same kind.
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        self.continuous.replace(event);
    }

    /// Appends `event` unless it repeats the previous one.
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        self.discrete.extend(self.continuous.drain());

        let duplicate = self.discrete.last() == Some(&event);
        if !duplicate || event.is_repeatable() {
            self.discrete.push(event);
        }
    }

    /// Takes everything buffered, or `None` if the frame was quiet.
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }
        let continuous = self.continuous.drain().collect();
        Some((std::mem::take(&mut self.discrete), continuous))
    }

    pub(crate) fn len(&self) -> usize {
        self.discrete.len() + self.continuous.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
