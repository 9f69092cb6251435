//=========================================================================
// Game State
//=========================================================================
//
// Progress shared by every scene: the customized character, the outfit,
// kitchen choices and the farewell letter.
//
// Scenes hold a `SharedState` handle (`Rc<RefCell<GameState>>`). All
// scenes run on the logic thread, one at a time, so borrows never
// overlap.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::scene::Shared;

//=== Character Parts =====================================================

/// Selectable bodies, in selector order.
pub const BODIES: [&str; 5] = ["bow cat", "cat", "dragon", "oshawott", "raichu"];

/// Selectable heads, in selector order.
pub const HEADS: [&str; 6] = [
    "cat",
    "cloud",
    "pingu",
    "pitaya",
    "raichu",
    "shark cat",
];

/// Selectable hats. Index 0 means no hat.
pub const HATS: [Option<&str>; 4] = [
    None,
    Some("graduation"),
    Some("santa claus"),
    Some("wizard"),
];

/// Clothes offered in the closet, in display order.
pub const OUTFITS: [&str; 6] = [
    "black and white sweater",
    "shirt charly garcia",
    "shirt soda estereo",
    "shirt spider punk",
    "starry sweater",
    "stripped sweater",
];

//=== Character ===========================================================

/// Part indices chosen on the customize screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Character {
    pub body: usize,
    pub head: usize,
    pub hat: usize,
}

impl Character {
    pub fn body_name(&self) -> &'static str {
        BODIES[self.body % BODIES.len()]
    }

    pub fn head_name(&self) -> &'static str {
        HEADS[self.head % HEADS.len()]
    }

    pub fn hat_name(&self) -> Option<&'static str> {
        HATS[self.hat % HATS.len()]
    }
}

//=== GameState ===========================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameState {
    pub player_name: String,
    /// `None` until the customize screen is confirmed.
    pub character: Option<Character>,
    pub selected_outfit: Option<&'static str>,

    //--- Kitchen ---------------------------------------------------------
    pub has_backpack: bool,
    pub has_pan_dulce: bool,
    pub has_sidra: bool,
    pub breakfast_choice: Option<&'static str>,

    //--- Letter ----------------------------------------------------------
    pub letter: String,
    pub stickers: Vec<&'static str>,
    pub letter_written: bool,

    //--- Position --------------------------------------------------------
    /// Last kitchen position; `0.0` means "use the default spot".
    pub player_x: f32,
    pub player_y: f32,
}

pub type SharedState = Shared<GameState>;

impl GameState {
    pub fn has_character(&self) -> bool {
        self.character.is_some()
    }

    /// Resolves a catalogue name to its `'static` entry.
    pub fn outfit_named(name: &str) -> Option<&'static str> {
        OUTFITS.iter().copied().find(|outfit| *outfit == name)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_no_progress() {
        let state = GameState::default();
        assert!(!state.has_character());
        assert!(state.selected_outfit.is_none());
        assert!(!state.letter_written);
        assert_eq!(state.player_x, 0.0);
    }

    #[test]
    fn character_part_names() {
        let character = Character { body: 2, head: 5, hat: 0 };
        assert_eq!(character.body_name(), "dragon");
        assert_eq!(character.head_name(), "shark cat");
        assert_eq!(character.hat_name(), None);

        let hatted = Character { hat: 1, ..character };
        assert_eq!(hatted.hat_name(), Some("graduation"));
    }

    #[test]
    fn outfit_lookup() {
        assert_eq!(GameState::outfit_named("starry sweater"), Some("starry sweater"));
        assert_eq!(GameState::outfit_named("tuxedo"), None);
    }
}
