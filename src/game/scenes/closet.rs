//=========================================================================
// Closet Scene
//=========================================================================
//
// Dress-up: clothes hang on the right, the character stands on the left.
// Dragging a piece onto the character selects it as the outfit; any drop
// sends the piece back to its hanger. The exit button unlocks once an
// outfit is chosen and leads to the kitchen.
//
//=========================================================================

use log::{debug, info};

use crate::core::canvas::{Canvas, Color};
use crate::core::error::SceneError;
use crate::core::geometry::{Point, Rect};
use crate::core::input::{InputEvent, MouseButton};
use crate::core::scene::{Scene, TransitionRequest};
use crate::game::state::{Character, SharedState, OUTFITS};
use crate::game::widgets::{draw_text_centered, Button, Draggable};
use crate::game::{avatar, GameScene, Layout};

use super::{require_character, CHARACTER_HEIGHT};

//=== Constants ===========================================================

pub const DIALOGUE: &str = "¡Elige tu mejor atuendo para la última semana!";

const ITEM_SIZE: (f32, f32) = (120.0, 60.0);
const ITEM_SPACING: f32 = 70.0;

const BACKGROUND: Color = Color::rgb(200, 170, 140);
const RAIL: Color = Color::rgb(110, 80, 50);

//=== ClosetOutfitScene ===================================================

pub struct ClosetOutfitScene {
    state: SharedState,
    layout: Layout,
    character: Character,
    items: Vec<Draggable>,
    /// Index into `items` of the piece being dragged.
    dragging: Option<usize>,
    outfit: Option<&'static str>,
    done: Button,
}

impl ClosetOutfitScene {
    pub fn new(state: SharedState, layout: Layout) -> Result<Self, SceneError> {
        let character = require_character(&state, GameScene::ClosetOutfit)?;
        let outfit = state.borrow().selected_outfit;

        let start = layout.at(0.60, 0.20);
        let items = OUTFITS
            .iter()
            .enumerate()
            .map(|(i, &name)| {
                let home = Rect::new(
                    start.x,
                    start.y + i as f32 * ITEM_SPACING,
                    ITEM_SIZE.0,
                    ITEM_SIZE.1,
                );
                Draggable::new(name, home, avatar::outfit_color(name))
            })
            .collect();

        let center = layout.at(0.75, 0.9);
        let mut done = Button::new(
            Rect::centered(center.x, center.y, 300.0, 60.0),
            "Listo para salir",
        );
        done.set_enabled(outfit.is_some());

        Ok(Self {
            state,
            layout,
            character,
            items,
            dragging: None,
            outfit,
            done,
        })
    }

    /// Area over the character's torso that accepts dropped clothes.
    pub fn target_rect(&self) -> Rect {
        let feet = self.feet();
        let side = CHARACTER_HEIGHT * 0.8;
        Rect::centered(feet.x, feet.y - CHARACTER_HEIGHT * 0.4, side, side)
    }

    pub fn items(&self) -> &[Draggable] {
        &self.items
    }

    pub fn outfit(&self) -> Option<&'static str> {
        self.outfit
    }

    pub fn done_button(&self) -> &Button {
        &self.done
    }

    fn feet(&self) -> Point {
        self.layout.at(0.40, 0.7)
    }

    fn grab(&mut self, pos: Point) {
        if self.dragging.is_some() {
            return;
        }
        self.dragging = self.items.iter_mut().position(|item| item.grab(pos));
    }

    fn drop_item(&mut self) {
        let Some(index) = self.dragging.take() else {
            return;
        };
        let target = self.target_rect();
        let item = &mut self.items[index];
        let name = item.name();

        if item.release(&target) {
            info!(target: "scene", "Outfit selected: {}", name);
            self.outfit = Some(name);
            self.state.borrow_mut().selected_outfit = Some(name);
            self.done.set_enabled(true);
        } else {
            debug!(target: "scene", "'{}' dropped outside the character", name);
        }
    }
}

impl Scene<GameScene> for ClosetOutfitScene {
    fn handle_input(&mut self, event: &InputEvent) -> Option<TransitionRequest<GameScene>> {
        match *event {
            InputEvent::MouseButtonDown { button: MouseButton::Left, position, .. } => {
                self.grab(position);
            }
            InputEvent::MouseButtonUp { button: MouseButton::Left, position, .. } => {
                // The release carries the pointer position; motion may lag it.
                if let Some(index) = self.dragging {
                    self.items[index].drag_to(position);
                }
                self.drop_item();
            }
            InputEvent::MouseMoved { x, y } => {
                if let Some(index) = self.dragging {
                    self.items[index].drag_to(Point::new(x, y));
                }
            }
            _ => {}
        }

        if self.done.handle_input(event) {
            info!(target: "scene", "Leaving the closet");
            return Some(TransitionRequest::to(GameScene::Kitchen));
        }
        None
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.clear(BACKGROUND);

        let top = self.layout.height * 0.15;
        canvas.blend_rect(Rect::new(0.0, 0.0, self.layout.width, top), Color::BLACK, 180);
        draw_text_centered(canvas, DIALOGUE, self.layout.at(0.5, 0.075), Color::WHITE);

        avatar::draw(canvas, &self.character, self.feet(), CHARACTER_HEIGHT, self.outfit);

        let rail_y = self.layout.height * 0.20 - 10.0;
        canvas.fill_rect(Rect::new(self.layout.width * 0.58, rail_y, 200.0, 6.0), RAIL);

        // Dragged item last so it stays on top.
        for (i, item) in self.items.iter().enumerate() {
            if Some(i) != self.dragging {
                item.draw(canvas);
            }
        }
        if let Some(index) = self.dragging {
            self.items[index].draw(canvas);
        }

        self.done.draw(canvas);
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

    fn closet() -> (SharedState, ClosetOutfitScene) {
        let state = Rc::new(RefCell::new(GameState {
            character: Some(Character::default()),
            ..GameState::default()
        }));
        match ClosetOutfitScene::new(Rc::clone(&state), Layout::default()) {
            Ok(scene) => (state, scene),
            Err(e) => panic!("closet should build: {}", e),
        }
    }

    fn drag(scene: &mut ClosetOutfitScene, from: Point, to: Point) {
        scene.handle_input(&InputEvent::click(from.x, from.y));
        scene.handle_input(&InputEvent::MouseMoved { x: to.x, y: to.y });
        scene.handle_input(&InputEvent::release(to.x, to.y));
    }

    #[test]
    fn requires_character() {
        let state = Rc::new(RefCell::new(GameState::default()));
        assert!(ClosetOutfitScene::new(state, Layout::default()).is_err());
    }

    #[test]
    fn layout_of_items_and_target() {
        let (_, scene) = closet();
        assert_eq!(scene.items().len(), 6);
        let first = scene.items()[0].home();
        assert!((first.x - 768.0).abs() < 1e-3);
        assert!((first.y - 144.0).abs() < 1e-3);
        assert_eq!((first.w, first.h), (120.0, 60.0));
        let last = scene.items()[5].home();
        assert!((last.y - first.y - 5.0 * 70.0).abs() < 1e-3);
        let target = scene.target_rect();
        assert!((target.x - 432.0).abs() < 1e-3);
        assert!((target.y - 344.0).abs() < 1e-3);
        assert!((target.w - 160.0).abs() < 1e-3);
    }

    #[test]
    fn exit_is_locked_until_outfit_chosen() {
        let (_, mut scene) = closet();
        let c = scene.done_button().rect().center();
        assert!(!scene.done_button().is_enabled());
        assert_eq!(scene.handle_input(&InputEvent::click(c.x, c.y)), None);
    }

    #[test]
    fn drop_on_character_selects_outfit() {
        let (state, mut scene) = closet();
        let from = scene.items()[4].home().center();
        let to = scene.target_rect().center();
        drag(&mut scene, from, to);

        assert_eq!(scene.outfit(), Some("starry sweater"));
        assert_eq!(state.borrow().selected_outfit, Some("starry sweater"));
        assert_eq!(scene.items()[4].rect(), scene.items()[4].home());
        assert!(scene.done_button().is_enabled());

        let c = scene.done_button().rect().center();
        assert_eq!(
            scene.handle_input(&InputEvent::click(c.x, c.y)),
            Some(TransitionRequest::to(GameScene::Kitchen))
        );
    }

    #[test]
    fn release_position_decides_the_drop() {
        let (_, mut scene) = closet();
        let from = scene.items()[0].home().center();
        let to = scene.target_rect().center();

        // No motion event between press and release.
        scene.handle_input(&InputEvent::click(from.x, from.y));
        scene.handle_input(&InputEvent::release(to.x, to.y));

        assert_eq!(scene.outfit(), Some(OUTFITS[0]));
        assert!(!scene.items()[0].is_dragging());
    }

    #[test]
    fn late_motion_after_release_moves_nothing() {
        let (_, mut scene) = closet();
        let from = scene.items()[2].home().center();
        let to = scene.target_rect().center();

        scene.handle_input(&InputEvent::click(from.x, from.y));
        scene.handle_input(&InputEvent::release(to.x, to.y));
        scene.handle_input(&InputEvent::MouseMoved { x: to.x, y: to.y });

        assert_eq!(scene.outfit(), Some(OUTFITS[2]));
        assert_eq!(scene.items()[2].rect(), scene.items()[2].home());
    }

    #[test]
    fn drop_elsewhere_snaps_back() {
        let (state, mut scene) = closet();
        let from = scene.items()[1].home().center();
        drag(&mut scene, from, Point::new(1200.0, 50.0));

        assert_eq!(scene.outfit(), None);
        assert!(state.borrow().selected_outfit.is_none());
        assert_eq!(scene.items()[1].rect(), scene.items()[1].home());
    }

    #[test]
    fn click_on_empty_space_grabs_nothing() {
        let (_, mut scene) = closet();
        scene.handle_input(&InputEvent::click(100.0, 100.0));
        scene.handle_input(&InputEvent::MouseMoved { x: 500.0, y: 400.0 });
        assert!(scene.items().iter().all(|item| item.rect() == item.home()));
    }

    #[test]
    fn saved_outfit_unlocks_exit_on_return() {
        let state = Rc::new(RefCell::new(GameState {
            character: Some(Character::default()),
            selected_outfit: Some("shirt soda estereo"),
            ..GameState::default()
        }));
        let scene = ClosetOutfitScene::new(state, Layout::default()).ok();
        assert!(scene.is_some_and(|s| s.done_button().is_enabled()));
    }
}
