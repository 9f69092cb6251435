//=========================================================================
// Customize Scene
//=========================================================================
//
// Character creation: cycle body, head and hat with arrow buttons, type
// a name, confirm.
//
// Layout (1280x720):
//   selectors   x = CENTER_X ± 150, rows at y 150 (hat) / 300 (head) / 450 (body)
//   name box    (W/2 + 100, H/2, 300x50)
//   confirm     (W - 250, H - 100, 200x60)
//
// Confirm requires a non-blank name; it stores the choices in the
// shared state and requests ROOM.
//
//=========================================================================

use log::{info, warn};

use crate::core::canvas::{Canvas, Color};
use crate::core::geometry::{Point, Rect};
use crate::core::input::InputEvent;
use crate::core::scene::{Scene, TransitionRequest};
use crate::game::state::{Character, SharedState, BODIES, HATS, HEADS};
use crate::game::widgets::{draw_text, Button, TextBox};
use crate::game::{avatar, GameScene, Layout};

//=== Constants ===========================================================

const ARROW_SIZE: f32 = 40.0;
const ARROW_SPREAD: f32 = 150.0;
const CHARACTER_HEIGHT: f32 = 250.0;
const NAME_MAX_CHARS: usize = 15;
const NAME_PLACEHOLDER: &str = "Tu Nombre";

const BACKGROUND: Color = Color::rgb(150, 200, 240);
const PROMPT: Color = Color::WHITE;

//=== Part Selectors ======================================================

/// Which character part a selector row cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Hat,
    Head,
    Body,
}

impl Part {
    fn option_count(self) -> usize {
        match self {
            Part::Hat => HATS.len(),
            Part::Head => HEADS.len(),
            Part::Body => BODIES.len(),
        }
    }

    fn row_y(self) -> f32 {
        match self {
            Part::Hat => 150.0,
            Part::Head => 300.0,
            Part::Body => 450.0,
        }
    }
}

struct Selector {
    part: Part,
    prev: Button,
    next: Button,
}

//=== CustomizeScene ======================================================

pub struct CustomizeScene {
    state: SharedState,
    layout: Layout,
    character: Character,
    selectors: [Selector; 3],
    name: TextBox,
    confirm: Button,
}

impl CustomizeScene {
    pub fn new(state: SharedState, layout: Layout) -> Self {
        let center_x = layout.width / 2.0 - 200.0;
        let selector = |part: Part| {
            let y = part.row_y();
            Selector {
                part,
                prev: Button::new(
                    Rect::new(center_x - ARROW_SPREAD, y, ARROW_SIZE, ARROW_SIZE),
                    "<",
                ),
                next: Button::new(
                    Rect::new(center_x + ARROW_SPREAD, y, ARROW_SIZE, ARROW_SIZE),
                    ">",
                ),
            }
        };

        let name = TextBox::new(
            Rect::new(layout.width / 2.0 + 100.0, layout.height / 2.0, 300.0, 50.0),
            NAME_PLACEHOLDER,
            NAME_MAX_CHARS,
        );
        let confirm = Button::new(
            Rect::new(layout.width - 250.0, layout.height - 100.0, 200.0, 60.0),
            "Continuar",
        );

        Self {
            state,
            layout,
            character: Character::default(),
            selectors: [selector(Part::Hat), selector(Part::Head), selector(Part::Body)],
            name,
            confirm,
        }
    }

    /// Current (unsaved) choices.
    pub fn character(&self) -> Character {
        self.character
    }

    pub fn name(&self) -> &str {
        self.name.text()
    }

    pub fn name_box(&self) -> &TextBox {
        &self.name
    }

    pub fn confirm_button(&self) -> &Button {
        &self.confirm
    }

    /// Rect of the `<` (or `>`) arrow for `part`.
    pub fn arrow_rect(&self, part: Part, forward: bool) -> Rect {
        self.selectors
            .iter()
            .find(|s| s.part == part)
            .map(|s| if forward { s.next.rect() } else { s.prev.rect() })
            .unwrap_or_default()
    }

    fn cycle(&mut self, part: Part, forward: bool) {
        let count = part.option_count();
        let slot = match part {
            Part::Hat => &mut self.character.hat,
            Part::Head => &mut self.character.head,
            Part::Body => &mut self.character.body,
        };
        *slot = if forward {
            (*slot + 1) % count
        } else {
            (*slot + count - 1) % count
        };
    }

    fn save(&self) {
        let mut state = self.state.borrow_mut();
        state.player_name = self.name.text().trim().to_string();
        state.character = Some(self.character);
        info!(
            target: "scene",
            "Character '{}' saved ({} / {} / {:?})",
            state.player_name,
            self.character.body_name(),
            self.character.head_name(),
            self.character.hat_name()
        );
    }
}

impl Scene<GameScene> for CustomizeScene {
    fn handle_input(&mut self, event: &InputEvent) -> Option<TransitionRequest<GameScene>> {
        self.name.handle_input(event);

        if self.confirm.handle_input(event) {
            if self.name.is_blank() {
                warn!(target: "scene", "A name is required before continuing");
                return None;
            }
            self.save();
            return Some(TransitionRequest::to(GameScene::Room));
        }

        let mut cycled = None;
        for selector in &mut self.selectors {
            if selector.next.handle_input(event) {
                cycled = Some((selector.part, true));
            } else if selector.prev.handle_input(event) {
                cycled = Some((selector.part, false));
            }
        }
        if let Some((part, forward)) = cycled {
            self.cycle(part, forward);
        }
        None
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.clear(BACKGROUND);

        let feet = Point::new(self.layout.width / 2.0 - 200.0, self.layout.height * 0.9);
        avatar::draw(canvas, &self.character, feet, CHARACTER_HEIGHT, None);

        for selector in &self.selectors {
            selector.prev.draw(canvas);
            selector.next.draw(canvas);
        }

        let name_rect = self.name.rect();
        draw_text(
            canvas,
            "INGRESA TU NOMBRE:",
            Point::new(name_rect.x, name_rect.y - 40.0),
            PROMPT,
        );
        self.name.draw(canvas);
        self.confirm.draw(canvas);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
