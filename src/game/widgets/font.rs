//=========================================================================
// Label Font
//=========================================================================
//
// Outline-font rendering for labels.
//
// A TTF/OTF face is rasterized once, at label size, into coverage masks
// for the printable Latin-1 range. Glyphs are then placed on the fixed
// block-text grid, so widths and line layout never depend on the face.
//
// Installing is optional and happens at most once per process. Without
// a face (headless runs, tests, a machine with no fonts) labels keep
// the block glyphs.
//
//=========================================================================

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use fontdue::{Font, FontSettings, Metrics};
use log::info;
use thiserror::Error;

use super::{GLYPH_ADVANCE, GLYPH_HEIGHT};
use crate::core::canvas::{Canvas, Color};
use crate::core::geometry::Point;

/// Rasterization size in pixels.
const FONT_PX: f32 = GLYPH_HEIGHT;

static ATLAS: OnceLock<GlyphAtlas> = OnceLock::new();

//=== FontError ===========================================================

#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid font data: {0}")]
    Parse(&'static str),

    #[error("no sans-serif system font found")]
    NoSystemFont,

    /// Faces are rasterized once; a second install is refused.
    #[error("a label font is already installed")]
    AlreadyInstalled,
}

//=== Installation ========================================================

/// Rasterizes face `collection_index` of `bytes` and makes it the label
/// font for the rest of the process.
pub fn install_font(bytes: &[u8], collection_index: u32) -> Result<(), FontError> {
    if font_installed() {
        return Err(FontError::AlreadyInstalled);
    }

    let settings = FontSettings {
        collection_index,
        ..FontSettings::default()
    };
    let font = Font::from_bytes(bytes, settings).map_err(FontError::Parse)?;
    let atlas = GlyphAtlas::rasterize(&font);
    let glyphs = atlas.glyphs.len();

    ATLAS.set(atlas).map_err(|_| FontError::AlreadyInstalled)?;
    info!(target: "ui", "Label font installed: {} glyphs at {}px", glyphs, FONT_PX);
    Ok(())
}

pub fn install_font_file(path: &Path) -> Result<(), FontError> {
    let bytes = std::fs::read(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    install_font(&bytes, 0)
}

/// Looks up a regular sans-serif face among the installed system fonts.
pub fn install_system_font() -> Result<(), FontError> {
    use fontdb::{Database, Family, Query, Stretch, Style, Weight};

    let mut db = Database::new();
    db.load_system_fonts();

    let id = db
        .query(&Query {
            families: &[
                Family::SansSerif,
                Family::Name("DejaVu Sans"),
                Family::Name("Arial"),
            ],
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
        })
        .ok_or(FontError::NoSystemFont)?;

    let (bytes, index) = db
        .with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or(FontError::NoSystemFont)?;
    install_font(&bytes, index)
}

pub fn font_installed() -> bool {
    ATLAS.get().is_some()
}

//=== Drawing =============================================================

/// Draws `ch` centred in the grid cell whose top-left is `cell`.
///
/// Returns `false` if no face is installed or the face lacks `ch`; the
/// caller then draws a block instead.
pub(super) fn draw_glyph(canvas: &mut Canvas, ch: char, cell: Point, color: Color) -> bool {
    let Some(atlas) = ATLAS.get() else {
        return false;
    };
    let Some(glyph) = atlas.glyphs.get(&ch) else {
        return false;
    };

    let m = &glyph.metrics;
    let x = cell.x + (GLYPH_ADVANCE - m.advance_width) / 2.0 + m.xmin as f32;
    // ymin is the distance from the baseline up to the bitmap's bottom edge.
    let y = cell.y + atlas.ascent - m.ymin as f32 - m.height as f32;
    canvas.blend_mask(x.round() as i32, y.round() as i32, m.width, &glyph.coverage, color);
    true
}

//=== GlyphAtlas ==========================================================

struct Glyph {
    metrics: Metrics,
    coverage: Vec<u8>,
}

struct GlyphAtlas {
    glyphs: HashMap<char, Glyph>,
    /// Baseline offset from the top of a text line.
    ascent: f32,
}

impl GlyphAtlas {
    fn rasterize(font: &Font) -> Self {
        let ascent = font
            .horizontal_line_metrics(FONT_PX)
            .map_or(FONT_PX * 0.8, |line| line.ascent);

        let glyphs = ('!'..='~')
            .chain('¡'..='ÿ')
            .filter(|&ch| font.lookup_glyph_index(ch) != 0)
            .map(|ch| {
                let (metrics, coverage) = font.rasterize(ch, FONT_PX);
                (ch, Glyph { metrics, coverage })
            })
            .collect();

        Self { glyphs, ascent }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
//
// Nothing here installs a face: the atlas is process-wide and the block
// text tests rely on its absence.
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_rejected() {
        let err = install_font(b"definitely not a font", 0).unwrap_err();
        assert!(matches!(err, FontError::Parse(_)), "got {err:?}");
        assert!(!font_installed());
    }

    #[test]
    fn missing_file_reports_path() {
        let path = Path::new("/nonexistent/egresaditos/label.ttf");
        let err = install_font_file(path).unwrap_err();

        assert!(matches!(&err, FontError::Read { path: p, .. } if p == path));
        assert!(err.to_string().contains("label.ttf"));
    }

    #[test]
    fn without_a_face_glyphs_are_left_to_the_caller() {
        let mut canvas = Canvas::new(16, 16);
        assert!(!draw_glyph(&mut canvas, 'a', Point::new(0.0, 0.0), Color::WHITE));
        assert_eq!(canvas.pixel(4, 4), Some(Color::BLACK));
    }
}
