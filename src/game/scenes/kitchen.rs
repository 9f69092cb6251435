//=========================================================================
// Kitchen Scene
//=========================================================================
//
// Side-on room the player walks through with the arrow keys (or A/D).
// Pressing Space next to a hotspot interacts with it:
//   fridge   → breakfast ("latte")
//   backpack → picks up the backpack, which unlocks the door
//
// The back button stores the current position so a later visit resumes
// from the same spot.
//
//=========================================================================

use log::info;

use crate::core::canvas::{Canvas, Color};
use crate::core::geometry::{Point, Rect};
use crate::core::input::{InputEvent, KeyCode, StateTracker};
use crate::core::scene::{Scene, TransitionRequest};
use crate::game::state::SharedState;
use crate::game::widgets::{draw_text_centered, Button};
use crate::game::{avatar, GameScene, Layout};

use super::CHARACTER_HEIGHT;

//=== Constants ===========================================================

/// Walking speed in pixels per second.
pub const WALK_SPEED: f32 = 300.0;
/// Distance from the room edges the player cannot cross.
pub const WALL_MARGIN: f32 = 50.0;
/// Horizontal reach of a hotspot from its centre.
pub const HOTSPOT_REACH: f32 = 60.0;
pub const BREAKFAST: &str = "latte";

const BACKGROUND: Color = Color::rgb(240, 230, 200);
const FLOOR: Color = Color::rgb(170, 140, 110);
const FRIDGE: Color = Color::rgb(220, 235, 245);
const BACKPACK: Color = Color::rgb(200, 60, 60);
const NAME_INK: Color = Color::rgb(30, 30, 30);

//=== Hotspots ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hotspot {
    Fridge,
    Backpack,
}

//=== KitchenScene ========================================================

pub struct KitchenScene {
    state: SharedState,
    layout: Layout,
    input: StateTracker,
    player_x: f32,
    ground_y: f32,
    back: Button,
    door: Button,
}

impl KitchenScene {
    pub fn new(state: SharedState, layout: Layout) -> Self {
        let ground_y = layout.height * 0.98;
        let player_x = {
            let mut state = state.borrow_mut();
            state.player_y = ground_y;
            if state.player_x != 0.0 {
                state.player_x
            } else {
                layout.width * 0.25
            }
        };

        let back = Button::new(Rect::new(20.0, 20.0, 160.0, 60.0), "Volver");
        let mut door = Button::new(
            Rect::new(layout.width - 240.0, 20.0, 220.0, 60.0),
            "Escribir carta",
        );
        door.set_enabled(state.borrow().has_backpack);

        Self {
            state,
            layout,
            input: StateTracker::new(),
            player_x,
            ground_y,
            back,
            door,
        }
    }

    pub fn player_x(&self) -> f32 {
        self.player_x
    }

    pub fn back_button(&self) -> &Button {
        &self.back
    }

    pub fn door_button(&self) -> &Button {
        &self.door
    }

    pub fn hotspot_x(&self, hotspot: Hotspot) -> f32 {
        match hotspot {
            Hotspot::Fridge => self.layout.width * 0.8,
            Hotspot::Backpack => self.layout.width * 0.6,
        }
    }

    /// Hotspot within reach of the player, if any.
    pub fn nearby_hotspot(&self) -> Option<Hotspot> {
        [Hotspot::Fridge, Hotspot::Backpack]
            .into_iter()
            .find(|spot| (self.hotspot_x(*spot) - self.player_x).abs() <= HOTSPOT_REACH)
    }

    fn interact(&mut self, hotspot: Hotspot) {
        let mut state = self.state.borrow_mut();
        match hotspot {
            Hotspot::Fridge => {
                if state.breakfast_choice.is_none() {
                    info!(target: "scene", "Breakfast: {}", BREAKFAST);
                }
                state.breakfast_choice = Some(BREAKFAST);
            }
            Hotspot::Backpack => {
                if !state.has_backpack {
                    info!(target: "scene", "Backpack picked up");
                }
                state.has_backpack = true;
                self.door.set_enabled(true);
            }
        }
    }

    fn save_position(&self) {
        self.state.borrow_mut().player_x = self.player_x;
    }
}

impl Scene<GameScene> for KitchenScene {
    fn handle_input(&mut self, event: &InputEvent) -> Option<TransitionRequest<GameScene>> {
        self.input.observe(event);

        if self.back.handle_input(event) {
            self.save_position();
            return Some(TransitionRequest::to(GameScene::Room));
        }
        if self.door.handle_input(event) {
            self.save_position();
            return Some(TransitionRequest::to(GameScene::WriteLetter));
        }
        None
    }

    fn update(&mut self, dt: f32) -> Option<TransitionRequest<GameScene>> {
        let direction = (self.input.axis(KeyCode::ArrowLeft, KeyCode::ArrowRight)
            + self.input.axis(KeyCode::KeyA, KeyCode::KeyD))
        .clamp(-1.0, 1.0);
        self.player_x = (self.player_x + direction * WALK_SPEED * dt)
            .clamp(WALL_MARGIN, self.layout.width - WALL_MARGIN);

        if self.input.is_key_pressed(KeyCode::Space) {
            if let Some(hotspot) = self.nearby_hotspot() {
                self.interact(hotspot);
            }
        }

        self.input.end_frame();
        None
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.clear(BACKGROUND);
        let floor_top = self.layout.height * 0.75;
        canvas.fill_rect(
            Rect::new(0.0, floor_top, self.layout.width, self.layout.height - floor_top),
            FLOOR,
        );

        let fridge_x = self.hotspot_x(Hotspot::Fridge);
        canvas.fill_rect(Rect::new(fridge_x - 60.0, floor_top - 260.0, 120.0, 300.0), FRIDGE);

        let state = self.state.borrow();
        if !state.has_backpack {
            let backpack_x = self.hotspot_x(Hotspot::Backpack);
            canvas.fill_rect(Rect::new(backpack_x - 30.0, floor_top - 10.0, 60.0, 70.0), BACKPACK);
        }

        if let Some(character) = state.character {
            let feet = Point::new(self.player_x, self.ground_y);
            avatar::draw(canvas, &character, feet, CHARACTER_HEIGHT, state.selected_outfit);
            draw_text_centered(
                canvas,
                &state.player_name,
                Point::new(feet.x, feet.y - CHARACTER_HEIGHT - 30.0),
                NAME_INK,
            );
        }

        self.back.draw(canvas);
        self.door.draw(canvas);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
