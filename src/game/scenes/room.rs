//=========================================================================
// Room Scene
//=========================================================================
//
// The player's bedroom. An opening line plays for a few seconds (or until
// clicked); after that a button leads to the closet. Escape returns to the
// title screen.
//
//=========================================================================

use log::info;

use crate::core::canvas::{Canvas, Color};
use crate::core::error::SceneError;
use crate::core::geometry::{Point, Rect};
use crate::core::input::{InputEvent, KeyCode};
use crate::core::scene::{Scene, TransitionRequest};
use crate::game::state::{Character, SharedState};
use crate::game::widgets::{draw_text_centered, Button, Narrator};
use crate::game::{avatar, GameScene, Layout};

use super::{require_character, CHARACTER_HEIGHT};

//=== Constants ===========================================================

pub const DIALOGUE: &str = "Es la última semana de clases. Vamos a prepararnos!";
pub const DIALOGUE_SECONDS: f32 = 3.0;

const BACKGROUND: Color = Color::rgb(40, 40, 80);
const FLOOR: Color = Color::rgb(90, 70, 60);

//=== RoomScene ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomPhase {
    Dialogue,
    ButtonReady,
}

pub struct RoomScene {
    layout: Layout,
    character: Character,
    player_name: String,
    phase: RoomPhase,
    narrator: Narrator,
    closet: Button,
}

impl RoomScene {
    pub fn new(state: SharedState, layout: Layout) -> Result<Self, SceneError> {
        let character = require_character(&state, GameScene::Room)?;
        let player_name = state.borrow().player_name.clone();

        let mut narrator = Narrator::new();
        narrator.say(DIALOGUE, DIALOGUE_SECONDS);

        let center = layout.at(0.5, 0.9);
        let closet = Button::new(
            Rect::centered(center.x, center.y, 400.0, 80.0),
            "Ir a elegir ropa",
        );

        Ok(Self {
            layout,
            character,
            player_name,
            phase: RoomPhase::Dialogue,
            narrator,
            closet,
        })
    }

    pub fn phase(&self) -> RoomPhase {
        self.phase
    }

    pub fn closet_button(&self) -> &Button {
        &self.closet
    }

    fn finish_dialogue(&mut self) {
        self.narrator.skip();
        self.phase = RoomPhase::ButtonReady;
    }
}

impl Scene<GameScene> for RoomScene {
    fn handle_input(&mut self, event: &InputEvent) -> Option<TransitionRequest<GameScene>> {
        if let InputEvent::KeyDown { key: KeyCode::Escape, .. } = event {
            info!(target: "scene", "Back to the title screen");
            return Some(TransitionRequest::to(GameScene::Title));
        }

        match self.phase {
            RoomPhase::Dialogue => {
                if event.left_click().is_some() {
                    self.finish_dialogue();
                }
                None
            }
            RoomPhase::ButtonReady => self
                .closet
                .handle_input(event)
                .then(|| TransitionRequest::to(GameScene::ClosetOutfit)),
        }
    }

    fn update(&mut self, dt: f32) -> Option<TransitionRequest<GameScene>> {
        self.narrator.update(dt);
        if self.phase == RoomPhase::Dialogue && self.narrator.is_idle() {
            self.finish_dialogue();
        }
        None
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.clear(BACKGROUND);
        let floor_top = self.layout.height * 0.7;
        canvas.fill_rect(
            Rect::new(0.0, floor_top, self.layout.width, self.layout.height - floor_top),
            FLOOR,
        );

        let feet = self.layout.at(0.25, 0.7);
        avatar::draw(canvas, &self.character, feet, CHARACTER_HEIGHT, None);
        draw_text_centered(
            canvas,
            &self.player_name,
            Point::new(feet.x, feet.y - CHARACTER_HEIGHT - 30.0),
            Color::WHITE,
        );

        match self.phase {
            RoomPhase::Dialogue => {
                let top = self.layout.height * 0.75;
                let panel = Rect::new(0.0, top, self.layout.width, self.layout.height - top);
                canvas.blend_rect(panel, Color::BLACK, 180);
                self.narrator.draw(canvas, panel.inflate(-40.0, -40.0));
            }
            RoomPhase::ButtonReady => self.closet.draw(canvas),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::GameState;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn room() -> RoomScene {
        let state = Rc::new(RefCell::new(GameState {
            player_name: "Lola".into(),
            character: Some(Character::default()),
            ..GameState::default()
        }));
        match RoomScene::new(state, Layout::default()) {
            Ok(scene) => scene,
            Err(e) => panic!("room should build: {}", e),
        }
    }

    #[test]
    fn requires_character() {
        let state = Rc::new(RefCell::new(GameState::default()));
        assert!(matches!(
            RoomScene::new(state, Layout::default()),
            Err(SceneError::Construction { .. })
        ));
    }

    #[test]
    fn dialogue_ends_after_timeout() {
        let mut scene = room();
        for _ in 0..179 {
            scene.update(1.0 / 60.0);
        }
        assert_eq!(scene.phase(), RoomPhase::Dialogue);
        scene.update(0.05);
        assert_eq!(scene.phase(), RoomPhase::ButtonReady);
    }

    #[test]
    fn click_skips_dialogue_without_pressing_button() {
        let mut scene = room();
        assert_eq!(scene.handle_input(&InputEvent::click(640.0, 648.0)), None);
        assert_eq!(scene.phase(), RoomPhase::ButtonReady);
    }

    #[test]
    fn button_leads_to_closet() {
        let mut scene = room();
        scene.handle_input(&InputEvent::click(10.0, 10.0));

        let button = scene.closet_button().rect();
        assert_eq!(button, Rect::new(440.0, 608.0, 400.0, 80.0));
        let c = button.center();
        assert_eq!(
            scene.handle_input(&InputEvent::click(c.x, c.y)),
            Some(TransitionRequest::to(GameScene::ClosetOutfit))
        );
    }

    #[test]
    fn escape_returns_to_title_in_any_phase() {
        let mut scene = room();
        assert_eq!(
            scene.handle_input(&InputEvent::key_down(KeyCode::Escape)),
            Some(TransitionRequest::to(GameScene::Title))
        );
    }
}
