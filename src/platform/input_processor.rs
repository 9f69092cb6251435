//=========================================================================
// Input Processor
//=========================================================================
//
// Turns winit window events into engine `InputEvent`s.
//
// Winit reports mouse buttons without a position and typed text as part
// of the key event, so the processor keeps the last cursor position and
// modifier state around and splits each key press into a `KeyDown` plus
// any printable `Text` it produced.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::event::{ElementState, KeyEvent, MouseButton as WinitMouseButton};
use winit::keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey};

//=== Internal Dependencies ===============================================

use crate::core::geometry::Point;
use crate::core::input::event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== InputProcessor ======================================================

pub(crate) struct InputProcessor {
    modifiers: Modifiers,
    cursor: Point,
}

impl InputProcessor {
    pub(crate) fn new() -> Self {
        Self {
            modifiers: Modifiers::NONE,
            cursor: Point::new(0.0, 0.0),
        }
    }

    //--- Tracked State ----------------------------------------------------

    pub(crate) fn set_modifiers(&mut self, state: ModifiersState) {
        self.modifiers = Modifiers::from(state);
    }

    pub(crate) fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Last cursor position in canvas space.
    pub(crate) fn cursor(&self) -> Point {
        self.cursor
    }

    //--- Conversion -------------------------------------------------------

    /// Events produced by one key transition, in delivery order.
    ///
    /// Keys the engine does not know still contribute their text, so a
    /// layout-specific key (`ñ`, `´`) types normally.
    pub(crate) fn keyboard(&self, event: &KeyEvent) -> Vec<InputEvent> {
        let mut out = Vec::new();

        if let Some(key) = engine_key(event.physical_key) {
            out.push(self.key(key, event.state));
        }

        if event.state == ElementState::Pressed {
            if let Some(text) = &event.text {
                out.extend(text_events(text));
            }
        }

        out
    }

    /// Button transition stamped with the last cursor position.
    pub(crate) fn mouse_button(&self, button: WinitMouseButton, state: ElementState) -> InputEvent {
        let button = MouseButton::from(button);
        let (position, modifiers) = (self.cursor, self.modifiers);
        if state == ElementState::Pressed {
            InputEvent::MouseButtonDown { button, position, modifiers }
        } else {
            InputEvent::MouseButtonUp { button, position, modifiers }
        }
    }

    /// Records a cursor position that is already in canvas space.
    pub(crate) fn cursor_moved(&mut self, x: f32, y: f32) -> InputEvent {
        self.cursor = Point::new(x, y);
        InputEvent::MouseMoved { x, y }
    }

    fn key(&self, key: KeyCode, state: ElementState) -> InputEvent {
        let modifiers = self.modifiers;
        if state == ElementState::Pressed {
            InputEvent::KeyDown { key, modifiers }
        } else {
            InputEvent::KeyUp { key, modifiers }
        }
    }
}

/// Printable characters of `text`. Control characters are dropped since
/// Backspace, Enter and Escape already arrive as key events.
fn text_events(text: &str) -> impl Iterator<Item = InputEvent> + '_ {
    text.chars().filter(|c| !c.is_control()).map(InputEvent::Text)
}

fn engine_key(key: PhysicalKey) -> Option<KeyCode> {
    match key {
        PhysicalKey::Code(code) => match KeyCode::from(code) {
            KeyCode::Unidentified => None,
            known => Some(known),
        },
        PhysicalKey::Unidentified(_) => None,
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

/// Both enums use the same variant names for the keys the engine knows.
macro_rules! same_name_keys {
    ($code:expr; $($name:ident)*) => {
        match $code {
            $(WinitKeyCode::$name => KeyCode::$name,)*
            _ => KeyCode::Unidentified,
        }
    };
}

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        same_name_keys!(code;
            Digit0 Digit1 Digit2 Digit3 Digit4 Digit5 Digit6 Digit7 Digit8 Digit9
            KeyA KeyB KeyC KeyD KeyE KeyF KeyG KeyH KeyI KeyJ KeyK KeyL KeyM
            KeyN KeyO KeyP KeyQ KeyR KeyS KeyT KeyU KeyV KeyW KeyX KeyY KeyZ
            ArrowUp ArrowDown ArrowLeft ArrowRight
            Space Enter Escape Tab Backspace Delete
        )
    }
}

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn shift_alt() -> ModifiersState {
        ModifiersState::SHIFT | ModifiersState::ALT
    }

    #[test]
    fn modifiers_start_empty_and_follow_updates() {
        let mut processor = InputProcessor::new();
        assert_eq!(processor.modifiers(), Modifiers::NONE);

        processor.set_modifiers(shift_alt());
        let mods = processor.modifiers();
        assert!(mods.shift && mods.alt && !mods.ctrl);
    }

    #[test]
    fn key_transitions_carry_modifiers() {
        let mut processor = InputProcessor::new();
        processor.set_modifiers(ModifiersState::CONTROL);

        match processor.key(KeyCode::KeyS, ElementState::Pressed) {
            InputEvent::KeyDown { key, modifiers } => {
                assert_eq!(key, KeyCode::KeyS);
                assert!(modifiers.ctrl);
            }
            other => panic!("Expected KeyDown, got {:?}", other),
        }
        assert!(matches!(
            processor.key(KeyCode::KeyS, ElementState::Released),
            InputEvent::KeyUp { key: KeyCode::KeyS, .. }
        ));
    }

    #[test]
    fn unknown_keys_are_dropped() {
        assert_eq!(engine_key(PhysicalKey::Code(WinitKeyCode::F13)), None);
        assert_eq!(
            engine_key(PhysicalKey::Code(WinitKeyCode::Backspace)),
            Some(KeyCode::Backspace)
        );
    }

    #[test]
    fn key_table_covers_game_keys() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyA), KeyCode::KeyA);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyD), KeyCode::KeyD);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowLeft), KeyCode::ArrowLeft);
        assert_eq!(KeyCode::from(WinitKeyCode::Space), KeyCode::Space);
        assert_eq!(KeyCode::from(WinitKeyCode::Escape), KeyCode::Escape);
        assert_eq!(KeyCode::from(WinitKeyCode::NumpadEnter), KeyCode::Unidentified);
    }

    #[test]
    fn clicks_land_where_the_cursor_was() {
        let mut processor = InputProcessor::new();
        processor.cursor_moved(640.0, 576.0);
        processor.set_modifiers(ModifiersState::ALT);

        let down = processor.mouse_button(WinitMouseButton::Left, ElementState::Pressed);
        assert_eq!(down.left_click(), Some(Point::new(640.0, 576.0)));
        match down {
            InputEvent::MouseButtonDown { modifiers, .. } => assert!(modifiers.alt),
            other => panic!("Expected MouseButtonDown, got {:?}", other),
        }

        let up = processor.mouse_button(WinitMouseButton::Left, ElementState::Released);
        assert_eq!(up.left_release(), Some(Point::new(640.0, 576.0)));
    }

    #[test]
    fn cursor_moves_update_tracked_position() {
        let mut processor = InputProcessor::new();
        let event = processor.cursor_moved(12.5, 40.0);
        assert!(matches!(event, InputEvent::MouseMoved { x, y } if x == 12.5 && y == 40.0));
        assert_eq!(processor.cursor(), Point::new(12.5, 40.0));
    }

    #[test]
    fn text_drops_control_characters() {
        let events: Vec<_> = text_events("añ\u{8}\r").collect();
        assert_eq!(events, vec![InputEvent::Text('a'), InputEvent::Text('ñ')]);
    }

    #[test]
    fn side_buttons_map_to_other() {
        assert_eq!(MouseButton::from(WinitMouseButton::Back), MouseButton::Other);
        assert_eq!(MouseButton::from(WinitMouseButton::Right), MouseButton::Right);
    }
}
