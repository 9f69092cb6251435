//=========================================================================
// State Tracker
//=========================================================================
//
// Held-key tracking for scenes that poll the keyboard from `update`
// instead of reacting to single events (walking, for instance).
//
//   handle_input(event) → observe(event)
//   update(dt)          → axis / is_key_pressed → end_frame()
//
// Each scene owns its tracker, so a freshly built scene holds nothing.
// Input swallowed during a fade never reaches it.
//
//=========================================================================

use std::collections::HashSet;

use super::event::{InputEvent, KeyCode};

#[derive(Debug, Clone, Default)]
pub struct StateTracker {
    held: HashSet<KeyCode>,
    /// Keys that went down since the last `end_frame`.
    pressed: HashSet<KeyCode>,
}

impl StateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key, .. } => {
                // OS key repeat re-sends KeyDown; only the first is a press.
                if self.held.insert(key) {
                    self.pressed.insert(key);
                }
            }
            InputEvent::KeyUp { key, .. } => {
                self.held.remove(&key);
            }
            _ => {}
        }
    }

    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }

    /// `true` if `key` went down this frame, even if already released.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// -1, 0 or +1 from a pair of opposing keys. Holding both cancels.
    pub fn axis(&self, negative: KeyCode, positive: KeyCode) -> f32 {
        let pull = |key| if self.is_key_down(key) { 1.0 } else { 0.0 };
        pull(positive) - pull(negative)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn down(key: KeyCode) -> InputEvent {
        InputEvent::key_down(key)
    }

    fn up(key: KeyCode) -> InputEvent {
        InputEvent::key_up(key)
    }

    #[test]
    fn press_lasts_one_frame_hold_lasts_until_release() {
        let mut keys = StateTracker::new();

        keys.observe(&down(KeyCode::Space));
        assert!(keys.is_key_pressed(KeyCode::Space));
        assert!(keys.is_key_down(KeyCode::Space));

        keys.end_frame();
        assert!(!keys.is_key_pressed(KeyCode::Space));
        assert!(keys.is_key_down(KeyCode::Space));

        keys.observe(&up(KeyCode::Space));
        assert!(!keys.is_key_down(KeyCode::Space));
    }

    #[test]
    fn repeat_does_not_press_again() {
        let mut keys = StateTracker::new();
        keys.observe(&down(KeyCode::KeyA));
        keys.end_frame();
        keys.observe(&down(KeyCode::KeyA));

        assert!(!keys.is_key_pressed(KeyCode::KeyA));
        assert!(keys.is_key_down(KeyCode::KeyA));
    }

    #[test]
    fn tap_within_one_frame_counts() {
        let mut keys = StateTracker::new();
        keys.observe(&down(KeyCode::Space));
        keys.observe(&up(KeyCode::Space));

        assert!(keys.is_key_pressed(KeyCode::Space));
        assert!(!keys.is_key_down(KeyCode::Space));
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut keys = StateTracker::new();
        let horizontal = |k: &StateTracker| k.axis(KeyCode::ArrowLeft, KeyCode::ArrowRight);
        assert_eq!(horizontal(&keys), 0.0);

        keys.observe(&down(KeyCode::ArrowLeft));
        assert_eq!(horizontal(&keys), -1.0);

        keys.observe(&down(KeyCode::ArrowRight));
        assert_eq!(horizontal(&keys), 0.0);

        keys.observe(&up(KeyCode::ArrowLeft));
        assert_eq!(horizontal(&keys), 1.0);
    }

    #[test]
    fn pointer_and_text_are_ignored() {
        let mut keys = StateTracker::new();
        keys.observe(&InputEvent::click(1.0, 1.0));
        keys.observe(&InputEvent::Text('a'));
        assert!(!keys.is_key_down(KeyCode::KeyA));
    }
}
