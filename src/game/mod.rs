//=========================================================================
// Game
//=========================================================================
//
// The scenes of "Egresaditos: La Última Semana" and the factory that
// builds them.
//
// Flow:
// ```text
//   TITLE → CUSTOMIZE → ROOM → CLOSET_OUTFIT → KITCHEN → WRITE_LETTER → ENDING
//             ↑          ↑ ↘ (Esc) TITLE          │                       │
//             │          └────────────────────────┘ (back)                │
//             └──────────────────────── TITLE ◄───────────────────────────┘
// ```
//
// Scene keys form a closed enum; `GameScenes` maps each key to its
// constructor with an exhaustive match, so a new key without a scene
// does not compile.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod avatar;
pub mod scenes;
pub mod state;
pub mod widgets;

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::debug;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::error::SceneError;
use crate::core::geometry::Point;
use crate::core::scene::{Scene, SceneFactory, SceneKey};
use scenes::{
    ClosetOutfitScene, CustomizeScene, EndingScene, KitchenScene, RoomScene, TitleScene,
    WriteLetterScene,
};

//=== Public API ==========================================================

pub use state::{Character, GameState, SharedState};

//=== GameScene ===========================================================

/// Every scene of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameScene {
    Title,
    Customize,
    Room,
    ClosetOutfit,
    Kitchen,
    WriteLetter,
    Ending,
}

impl GameScene {
    pub const ALL: [GameScene; 7] = [
        GameScene::Title,
        GameScene::Customize,
        GameScene::Room,
        GameScene::ClosetOutfit,
        GameScene::Kitchen,
        GameScene::WriteLetter,
        GameScene::Ending,
    ];

    /// Canonical name, as used in configuration and logs.
    pub fn name(self) -> &'static str {
        match self {
            GameScene::Title => "TITLE",
            GameScene::Customize => "CUSTOMIZE",
            GameScene::Room => "ROOM",
            GameScene::ClosetOutfit => "CLOSET_OUTFIT",
            GameScene::Kitchen => "KITCHEN",
            GameScene::WriteLetter => "WRITE_LETTER",
            GameScene::Ending => "ENDING",
        }
    }
}

impl SceneKey for GameScene {}

impl fmt::Display for GameScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scene name that matches no [`GameScene`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scene name '{0}'")]
pub struct UnknownSceneName(pub String);

impl FromStr for GameScene {
    type Err = UnknownSceneName;

    /// Case-insensitive; `-` and spaces are accepted for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        GameScene::ALL
            .into_iter()
            .find(|scene| scene.name() == wanted)
            .ok_or_else(|| UnknownSceneName(s.to_string()))
    }
}

//=== Layout ==============================================================

/// Logical screen size that scenes lay themselves out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
}

impl Layout {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Point at a fraction of the screen size.
    pub fn at(&self, fx: f32, fy: f32) -> Point {
        Point::new(self.width * fx, self.height * fy)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

//=== GameScenes ==========================================================

/// Scene factory for the game, holding the shared game state.
pub struct GameScenes {
    state: SharedState,
    layout: Layout,
}

impl GameScenes {
    /// Fresh game state, default 1280x720 layout.
    pub fn new() -> Self {
        Self::with_state(Rc::new(RefCell::new(GameState::default())), Layout::default())
    }

    pub fn with_layout(layout: Layout) -> Self {
        Self::with_state(Rc::new(RefCell::new(GameState::default())), layout)
    }

    /// Uses an existing state handle (tests keep a clone to inspect it).
    pub fn with_state(state: SharedState, layout: Layout) -> Self {
        Self { state, layout }
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }
}

impl Default for GameScenes {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneFactory<GameScene> for GameScenes {
    fn create(&self, key: GameScene) -> Result<Box<dyn Scene<GameScene>>, SceneError> {
        debug!(target: "scene", "Constructing scene {}", key);

        let state = Rc::clone(&self.state);
        let layout = self.layout;

        let scene: Box<dyn Scene<GameScene>> = match key {
            GameScene::Title => Box::new(TitleScene::new(layout)),
            GameScene::Customize => Box::new(CustomizeScene::new(state, layout)),
            GameScene::Room => Box::new(RoomScene::new(state, layout)?),
            GameScene::ClosetOutfit => Box::new(ClosetOutfitScene::new(state, layout)?),
            GameScene::Kitchen => Box::new(KitchenScene::new(state, layout)),
            GameScene::WriteLetter => Box::new(WriteLetterScene::new(state, layout)),
            GameScene::Ending => Box::new(EndingScene::new(layout)),
        };
        Ok(scene)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
