//=========================================================================
// Input Events
//
// Platform-neutral keyboard, pointer and text input. The platform layer
// produces these; the transition controller gates them and hands them to
// the active scene.
//
//=========================================================================

use std::hash::{Hash, Hasher};

use crate::core::geometry::Point;

//=== MouseButton =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Side and vendor buttons.
    Other,
}

//=== KeyCode =============================================================

/// Where a key sits on the keyboard, independent of layout.
///
/// What the key types is delivered separately as [`InputEvent::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// A key the engine has no name for.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Held modifier keys. Left and right variants are not distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    /// Command on macOS.
    pub ctrl: bool,
    /// Option on macOS.
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };
}

//=== InputEvent ==========================================================

/// One unit of player input.
///
/// Equality drives de-duplication in the platform buffer, so it is
/// deliberately loose for pointer motion: any two `MouseMoved` events are
/// equal (the newest replaces the older one). Button events keep their
/// exact position, so clicks at different places never merge.
#[derive(Debug, Clone)]
pub enum InputEvent {
    KeyDown { key: KeyCode, modifiers: Modifiers },
    KeyUp { key: KeyCode, modifiers: Modifiers },

    /// Button pressed at `position` (canvas pixels, top-left origin).
    MouseButtonDown { button: MouseButton, position: Point, modifiers: Modifiers },
    MouseButtonUp { button: MouseButton, position: Point, modifiers: Modifiers },

    MouseMoved { x: f32, y: f32 },

    /// A layout-resolved character.
    Text(char),

    /// Close request. Ends the frame loop on the tick it is seen, even
    /// mid-transition.
    Quit,

    Unidentified,
}

impl InputEvent {
    //--- Constructors -----------------------------------------------------

    /// Unmodified left-button press.
    pub fn click(x: f32, y: f32) -> Self {
        Self::MouseButtonDown {
            button: MouseButton::Left,
            position: Point::new(x, y),
            modifiers: Modifiers::NONE,
        }
    }

    /// Unmodified left-button release.
    pub fn release(x: f32, y: f32) -> Self {
        Self::MouseButtonUp {
            button: MouseButton::Left,
            position: Point::new(x, y),
            modifiers: Modifiers::NONE,
        }
    }

    pub fn key_down(key: KeyCode) -> Self {
        Self::KeyDown { key, modifiers: Modifiers::NONE }
    }

    pub fn key_up(key: KeyCode) -> Self {
        Self::KeyUp { key, modifiers: Modifiers::NONE }
    }

    //--- Queries ----------------------------------------------------------

    /// Position of a left-button press.
    pub fn left_click(&self) -> Option<Point> {
        match *self {
            Self::MouseButtonDown { button: MouseButton::Left, position, .. } => Some(position),
            _ => None,
        }
    }

    /// Position of a left-button release.
    pub fn left_release(&self) -> Option<Point> {
        match *self {
            Self::MouseButtonUp { button: MouseButton::Left, position, .. } => Some(position),
            _ => None,
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Typed text legitimately repeats ("ll"), so consecutive equal
    /// `Text` events must all be kept.
    pub fn is_repeatable(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    fn identity(&self) -> Identity {
        match *self {
            Self::KeyDown { key, modifiers } => Identity::Key(true, key, modifiers),
            Self::KeyUp { key, modifiers } => Identity::Key(false, key, modifiers),
            Self::MouseButtonDown { button, position, modifiers } => {
                Identity::Button(true, button, position.to_bits(), modifiers)
            }
            Self::MouseButtonUp { button, position, modifiers } => {
                Identity::Button(false, button, position.to_bits(), modifiers)
            }
            Self::MouseMoved { .. } => Identity::Pointer,
            Self::Text(c) => Identity::Text(c),
            Self::Quit => Identity::Quit,
            Self::Unidentified => Identity::Unidentified,
        }
    }
}

//--- Equality ------------------------------------------------------------

/// What two events must share to count as the same event.
#[derive(PartialEq, Eq, Hash)]
enum Identity {
    Key(bool, KeyCode, Modifiers),
    Button(bool, MouseButton, (u32, u32), Modifiers),
    Pointer,
    Text(char),
    Quit,
    Unidentified,
}

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for InputEvent {}

impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
