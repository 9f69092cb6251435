//=========================================================================
// Ending Scene
//=========================================================================

use log::info;

use crate::core::canvas::{Canvas, Color};
use crate::core::geometry::Rect;
use crate::core::input::InputEvent;
use crate::core::scene::{Scene, TransitionRequest};
use crate::game::widgets::{draw_text_centered, Button};
use crate::game::{GameScene, Layout};

pub const FOOTER: &str = "¡Gracias por jugar!";

const BACKGROUND: Color = Color::rgb(255, 226, 170);

pub struct EndingScene {
    layout: Layout,
    rewind: Button,
}

impl EndingScene {
    pub fn new(layout: Layout) -> Self {
        let center = layout.at(0.5, 0.78);
        let rewind = Button::new(Rect::centered(center.x, center.y, 280.0, 100.0), "<< Volver")
            .with_hover_grow(20.0, 10.0);
        Self { layout, rewind }
    }

    pub fn rewind_button(&self) -> &Button {
        &self.rewind
    }
}

impl Scene<GameScene> for EndingScene {
    fn handle_input(&mut self, event: &InputEvent) -> Option<TransitionRequest<GameScene>> {
        if self.rewind.handle_input(event) {
            info!(target: "scene", "Rewinding to the title screen");
            return Some(TransitionRequest::to(GameScene::Title));
        }
        None
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.clear(BACKGROUND);
        self.rewind.draw(canvas);

        let band = Rect::new(
            0.0,
            self.layout.height * 0.9,
            self.layout.width,
            self.layout.height * 0.1,
        );
        canvas.blend_rect(band, Color::BLACK, 120);
        draw_text_centered(canvas, FOOTER, self.layout.at(0.5, 0.95), Color::WHITE);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
