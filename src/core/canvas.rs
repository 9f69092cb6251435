//=========================================================================
// Canvas
//=========================================================================
//
// Software RGBA8 frame buffer that scenes draw into.
//
// Architecture:
//   Scene::draw() → Canvas (fill / blend) → overlay() → frame bytes
//                                                  ↓
//                                       platform presents (pixels)
//
// The layout (row-major, 4 bytes per pixel, RGBA) matches what the
// presentation surface expects, so a finished frame is a plain copy.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::geometry::Rect;

//=== Color ===============================================================

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

//=== Canvas ==============================================================

/// Row-major RGBA8 pixel buffer.
///
/// All drawing clips to the buffer bounds; geometry outside the canvas
/// is silently ignored.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    //--- Construction -----------------------------------------------------

    /// Creates an opaque black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        let mut canvas = Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        };
        canvas.clear(Color::BLACK);
        canvas
    }

    //--- Accessors --------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Full-canvas rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    /// Raw RGBA bytes, row-major.
    pub fn frame(&self) -> &[u8] {
        &self.pixels
    }

    /// Reads back one pixel, `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        Some(Color::rgb(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]))
    }

    //--- Drawing ----------------------------------------------------------

    /// Fills the whole canvas with `color`.
    pub fn clear(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    /// Fills `rect` with an opaque color.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.blend_rect(rect, color, u8::MAX);
    }

    /// Draws a rectangle border of the given thickness.
    pub fn outline_rect(&mut self, rect: Rect, color: Color, thickness: f32) {
        let t = thickness.max(1.0);
        self.fill_rect(Rect::new(rect.x, rect.y, rect.w, t), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - t, rect.w, t), color);
        self.fill_rect(Rect::new(rect.x, rect.y, t, rect.h), color);
        self.fill_rect(Rect::new(rect.right() - t, rect.y, t, rect.h), color);
    }

    /// Composites `color` over `rect` at the given alpha (0 = no-op).
    pub fn blend_rect(&mut self, rect: Rect, color: Color, alpha: u8) {
        if alpha == 0 {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                let i = self.index(x, y);
                let px = &mut self.pixels[i..i + 3];
                px[0] = blend_channel(color.r, px[0], alpha);
                px[1] = blend_channel(color.g, px[1], alpha);
                px[2] = blend_channel(color.b, px[2], alpha);
            }
        }
    }

    /// Composites `color` through an 8-bit coverage mask whose top-left
    /// pixel lands on `(x, y)`. Rows are `width` bytes; off-canvas parts
    /// are clipped.
    pub fn blend_mask(&mut self, x: i32, y: i32, width: usize, mask: &[u8], color: Color) {
        if width == 0 {
            return;
        }
        for (row, coverage) in mask.chunks_exact(width).enumerate() {
            let py = y + row as i32;
            if py < 0 || py >= self.height as i32 {
                continue;
            }
            for (col, &alpha) in coverage.iter().enumerate() {
                let px = x + col as i32;
                if alpha == 0 || px < 0 || px >= self.width as i32 {
                    continue;
                }
                let i = self.index(px as u32, py as u32);
                let dst = &mut self.pixels[i..i + 3];
                dst[0] = blend_channel(color.r, dst[0], alpha);
                dst[1] = blend_channel(color.g, dst[1], alpha);
                dst[2] = blend_channel(color.b, dst[2], alpha);
            }
        }
    }

    /// Composites a full-screen layer of `color` at `alpha`.
    ///
    /// Used for the transition fade: alpha 0 leaves the frame untouched,
    /// alpha 255 replaces it entirely.
    pub fn overlay(&mut self, color: Color, alpha: u8) {
        self.blend_rect(self.bounds(), color, alpha);
    }

    //--- Internal Helpers -------------------------------------------------

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Converts a float rect into clipped integer pixel bounds.
    fn clip(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let x0 = rect.x.floor().max(0.0);
        let y0 = rect.y.floor().max(0.0);
        let x1 = rect.right().ceil().min(self.width as f32);
        let y1 = rect.bottom().ceil().min(self.height as f32);

        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

/// `src * a + dst * (1 - a)` in 8-bit fixed point, rounded.
fn blend_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_black_and_sized() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.frame().len(), 4 * 3 * 4);
        assert_eq!(canvas.pixel(3, 2), Some(Color::BLACK));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut canvas = Canvas::new(8, 8);
        canvas.fill_rect(Rect::new(-4.0, 6.0, 100.0, 100.0), Color::WHITE);

        assert_eq!(canvas.pixel(0, 6), Some(Color::WHITE));
        assert_eq!(canvas.pixel(7, 7), Some(Color::WHITE));
        assert_eq!(canvas.pixel(0, 5), Some(Color::BLACK));
    }

    #[test]
    fn overlay_zero_alpha_leaves_frame_untouched() {
        let mut canvas = Canvas::new(2, 2);
        canvas.clear(Color::rgb(200, 100, 50));
        let before = canvas.frame().to_vec();

        canvas.overlay(Color::BLACK, 0);

        assert_eq!(canvas.frame(), &before[..]);
    }

    #[test]
    fn overlay_full_alpha_is_solid() {
        let mut canvas = Canvas::new(2, 2);
        canvas.clear(Color::rgb(200, 100, 50));

        canvas.overlay(Color::BLACK, 255);

        assert_eq!(canvas.pixel(1, 1), Some(Color::BLACK));
    }

    #[test]
    fn overlay_half_alpha_darkens_proportionally() {
        let mut canvas = Canvas::new(1, 1);
        canvas.clear(Color::rgb(200, 200, 200));

        canvas.overlay(Color::BLACK, 128);

        // 200 * 127 / 255 ≈ 99.6
        assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(100, 100, 100)));
    }

    #[test]
    fn mask_blends_by_coverage_and_clips() {
        let mut canvas = Canvas::new(3, 2);
        // 2x2 mask hanging off the right edge.
        canvas.blend_mask(2, 0, 2, &[255, 255, 0, 128], Color::WHITE);

        assert_eq!(canvas.pixel(2, 0), Some(Color::WHITE));
        assert_eq!(canvas.pixel(2, 1), Some(Color::BLACK));
        assert_eq!(canvas.pixel(1, 0), Some(Color::BLACK));
    }

    #[test]
    fn alpha_channel_stays_opaque() {
        let mut canvas = Canvas::new(1, 1);
        canvas.overlay(Color::WHITE, 77);
        assert_eq!(canvas.frame()[3], 0xff);
    }
}
