//! Caption text measurement and rasterization.
//!
//! Draws caption lines directly onto the opaque caption canvas with
//! `ab_glyph`, using two embedded fonts: a bold face for the primary lines
//! (device name, parameters) and a regular face for the secondary lines
//! (time, coordinates). Measurement and drawing share the same kerning-aware
//! advance loop, so a measured line occupies exactly the box the layout
//! reserves for it.
//!
//! Rasterization is deterministic: the same text, size and color produce
//! identical pixels on every call.

use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use std::sync::OnceLock;

use super::colors::Color;

/// Bold face for the device name and parameters lines.
const PRIMARY_FONT_DATA: &[u8] = include_bytes!("fonts/DejaVuSans-Bold.ttf");

/// Regular face for the time and coordinate lines.
const SECONDARY_FONT_DATA: &[u8] = include_bytes!("fonts/DejaVuSans.ttf");

static PRIMARY_FONT: OnceLock<FontRef<'static>> = OnceLock::new();
static SECONDARY_FONT: OnceLock<FontRef<'static>> = OnceLock::new();

/// Which of the two caption faces to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    /// Bold; device name and parameters
    Primary,
    /// Regular; time and coordinates
    Secondary,
}

impl FontRole {
    fn font(self) -> &'static FontRef<'static> {
        // The embedded font data is static and known-good; failure here is
        // unreachable at runtime.
        match self {
            FontRole::Primary => PRIMARY_FONT.get_or_init(|| {
                FontRef::try_from_slice(PRIMARY_FONT_DATA).expect("embedded primary font is valid")
            }),
            FontRole::Secondary => SECONDARY_FONT.get_or_init(|| {
                FontRef::try_from_slice(SECONDARY_FONT_DATA)
                    .expect("embedded secondary font is valid")
            }),
        }
    }
}

/// Measured bounding box of one caption line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSize {
    pub width: f32,
    pub height: f32,
}

impl TextSize {
    pub const ZERO: TextSize = TextSize {
        width: 0.0,
        height: 0.0,
    };
}

/// Measure one line of text at the given pixel size.
///
/// Width is the kerned sum of glyph advances; height is the face's line
/// height at that scale (independent of the specific characters, so stacked
/// lines of the same role align consistently).
pub fn measure_text(text: &str, role: FontRole, px_size: f32) -> TextSize {
    let scaled_font = role.font().as_scaled(PxScale::from(px_size));

    let mut width = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for c in text.chars() {
        let glyph_id = scaled_font.glyph_id(c);
        if let Some(prev) = prev_glyph {
            width += scaled_font.kern(prev, glyph_id);
        }
        width += scaled_font.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    TextSize {
        width,
        height: scaled_font.height(),
    }
}

/// Draw one line of text onto the canvas.
///
/// `(x, y)` is the top-left corner of the line box measured by
/// [`measure_text`]; the baseline sits at `y + ascent`. Glyph coverage is
/// blended against the existing canvas pixels, which are opaque for a
/// caption.
pub fn draw_text(
    canvas: &mut RgbaImage,
    text: &str,
    x: f32,
    y: f32,
    role: FontRole,
    px_size: f32,
    color: Color,
) {
    let font = role.font();
    let scale = PxScale::from(px_size);
    let scaled_font = font.as_scaled(scale);

    let canvas_width = canvas.width() as i32;
    let canvas_height = canvas.height() as i32;
    let baseline_y = y + scaled_font.ascent();

    let mut cursor_x = x;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for c in text.chars() {
        let glyph_id = scaled_font.glyph_id(c);
        if let Some(prev) = prev_glyph {
            cursor_x += scaled_font.kern(prev, glyph_id);
        }

        let glyph = glyph_id.with_scale_and_position(scale, ab_glyph::point(cursor_x, baseline_y));

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();

            outlined.draw(|px, py, coverage| {
                let cx = px as i32 + bounds.min.x as i32;
                let cy = py as i32 + bounds.min.y as i32;

                if cx >= 0 && cy >= 0 && cx < canvas_width && cy < canvas_height {
                    let existing = *canvas.get_pixel(cx as u32, cy as u32);
                    let blended = blend_coverage(existing, color, coverage);
                    canvas.put_pixel(cx as u32, cy as u32, blended);
                }
            });
        }

        cursor_x += scaled_font.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }
}

/// Blend a glyph color over an existing pixel by antialiasing coverage.
pub(crate) fn blend_coverage(background: Rgba<u8>, color: Color, coverage: f32) -> Rgba<u8> {
    let coverage = coverage.clamp(0.0, 1.0);

    let blend_channel = |fg: u8, bg: u8| -> u8 {
        let value = fg as f32 * coverage + bg as f32 * (1.0 - coverage);
        value.round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        blend_channel(color.r, background[0]),
        blend_channel(color.g, background[1]),
        blend_channel(color.b, background[2]),
        background[3],
    ])
}
