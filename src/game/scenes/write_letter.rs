//=========================================================================
// Write Letter Scene
//=========================================================================
//
// Farewell letter to a professor: free text plus stickers.
//
// Keys: typed text appends, Backspace deletes, Enter starts a new line.
// Stickers sit in a palette strip at y 420..460 starting at x 60, one
// slot every 60 px; each click adds one. "Guardar sobre" stores the
// letter and moves on to the ending.
//
//=========================================================================

use log::info;

use crate::core::canvas::{Canvas, Color};
use crate::core::geometry::{Point, Rect};
use crate::core::input::{InputEvent, KeyCode};
use crate::core::scene::{Scene, TransitionRequest};
use crate::game::state::SharedState;
use crate::game::widgets::{draw_text, draw_text_centered, Button};
use crate::game::{GameScene, Layout};

//=== Constants ===========================================================

pub const GREETING: &str = "Querido profesor...";
pub const STICKERS: [&str; 3] = ["estrella", "corazon", "nota"];

const PALETTE_LEFT: f32 = 60.0;
const PALETTE_RIGHT: f32 = 260.0;
const PALETTE_TOP: f32 = 420.0;
const PALETTE_BOTTOM: f32 = 460.0;
const SLOT_SPACING: f32 = 60.0;

const PAPER: Color = Color::rgb(255, 250, 245);
const TEXT_AREA: Color = Color::rgb(245, 245, 245);
const SLOT: Color = Color::rgb(220, 220, 220);
const INK: Color = Color::rgb(20, 20, 20);

/// Sticker under the pointer, if the click landed on the palette strip.
///
/// Bounds are exclusive; the strip is wider than the three slots, so a
/// click past the last one selects nothing.
pub fn sticker_at(pos: Point) -> Option<&'static str> {
    let on_strip = pos.x > PALETTE_LEFT
        && pos.x < PALETTE_RIGHT
        && pos.y > PALETTE_TOP
        && pos.y < PALETTE_BOTTOM;
    if !on_strip {
        return None;
    }
    let slot = ((pos.x - PALETTE_LEFT) / SLOT_SPACING).floor() as usize;
    STICKERS.get(slot).copied()
}

//=== WriteLetterScene ====================================================

pub struct WriteLetterScene {
    state: SharedState,
    layout: Layout,
    text: String,
    stickers: Vec<&'static str>,
    save: Button,
}

impl WriteLetterScene {
    pub fn new(state: SharedState, layout: Layout) -> Self {
        let text = {
            let state = state.borrow();
            if state.letter.is_empty() {
                GREETING.to_string()
            } else {
                state.letter.clone()
            }
        };
        let save = Button::new(
            Rect::new(layout.width - 220.0, layout.height - 80.0, 200.0, 50.0),
            "Guardar sobre",
        );

        Self {
            state,
            layout,
            text,
            stickers: Vec::new(),
            save,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn stickers(&self) -> &[&'static str] {
        &self.stickers
    }

    pub fn save_button(&self) -> &Button {
        &self.save
    }

    fn store(&self) {
        let mut state = self.state.borrow_mut();
        state.letter = self.text.clone();
        state.stickers = self.stickers.clone();
        state.letter_written = true;
        info!(
            target: "scene",
            "Letter saved ({} chars, {} stickers)",
            self.text.chars().count(),
            self.stickers.len()
        );
    }
}

impl Scene<GameScene> for WriteLetterScene {
    fn handle_input(&mut self, event: &InputEvent) -> Option<TransitionRequest<GameScene>> {
        if self.save.handle_input(event) {
            self.store();
            return Some(TransitionRequest::to(GameScene::Ending));
        }

        match event {
            InputEvent::KeyDown { key: KeyCode::Backspace, .. } => {
                self.text.pop();
            }
            InputEvent::KeyDown { key: KeyCode::Enter, .. } => {
                self.text.push('\n');
            }
            InputEvent::Text(c) => self.text.push(*c),
            _ => {
                if let Some(sticker) = event.left_click().and_then(sticker_at) {
                    self.stickers.push(sticker);
                }
            }
        }
        None
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.clear(PAPER);
        draw_text(canvas, "Escribi tu carta", Point::new(40.0, 40.0), INK);

        let area = Rect::new(40.0, 100.0, self.layout.width - 120.0, 260.0);
        canvas.fill_rect(area, TEXT_AREA);
        draw_text(canvas, &self.text, Point::new(50.0, 110.0), INK);

        let chosen = format!("Stickers: {}", self.stickers.join(","));
        draw_text(canvas, &chosen, Point::new(40.0, 370.0), INK);

        for (i, name) in STICKERS.iter().enumerate() {
            let slot = Rect::new(PALETTE_LEFT + i as f32 * SLOT_SPACING, PALETTE_TOP, 48.0, 32.0);
            canvas.fill_rect(slot, SLOT);
            let initial: String = name.chars().take(1).flat_map(char::to_uppercase).collect();
            draw_text_centered(canvas, &initial, slot.center(), INK);
        }

        self.save.draw(canvas);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
