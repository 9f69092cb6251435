//=========================================================================
// Scenes
//=========================================================================
//
// One module per screen. Each scene takes the shared state (when it needs
// it) and the layout at construction, and reports transitions by
// returning a `TransitionRequest` from `handle_input` or `update`.
//
//=========================================================================

//=== Module Declarations =================================================

mod closet;
mod customize;
mod ending;
mod kitchen;
mod room;
mod title;
mod write_letter;

//=== Public API ==========================================================

pub use closet::ClosetOutfitScene;
pub use customize::{CustomizeScene, Part};
pub use ending::EndingScene;
pub use kitchen::KitchenScene;
pub use room::RoomScene;
pub use title::TitleScene;
pub use write_letter::WriteLetterScene;

//=== Shared Helpers ======================================================

use crate::core::error::SceneError;

use super::state::{Character, SharedState};
use super::GameScene;

/// Character height in pixels, feet to top of head.
pub const CHARACTER_HEIGHT: f32 = 200.0;

/// Customized character, or a construction error for `scene`.
fn require_character(state: &SharedState, scene: GameScene) -> Result<Character, SceneError> {
    state
        .borrow()
        .character
        .ok_or_else(|| SceneError::construction(scene, "no customized character"))
}
