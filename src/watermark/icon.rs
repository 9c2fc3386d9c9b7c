//! Procedural caption icon.
//!
//! Draws the camera mark that anchors the right cluster: a rounded body with
//! a viewfinder hump and a punched-out lens ring. The mark is rasterized
//! per-pixel from signed distances, so it is deterministic and scales cleanly
//! with the icon-height constant.

use image::RgbaImage;

use super::colors::Color;
use super::layout::Rect;
use super::text_renderer::blend_coverage;

// Proportions of the camera mark, relative to the icon box height.
const BODY_TOP: f32 = 0.22;
const BODY_CORNER_RADIUS: f32 = 0.09;
const HUMP_WIDTH: f32 = 0.42;
const HUMP_HEIGHT: f32 = 0.30;
const HUMP_CORNER_RADIUS: f32 = 0.05;
const LENS_CENTER_Y: f32 = 0.61;
const LENS_OUTER_RADIUS: f32 = 0.26;
const LENS_INNER_RADIUS: f32 = 0.15;

/// Draw the camera mark into `rect`, in the given color.
///
/// Pixels outside the canvas are skipped; coverage at shape edges is blended
/// against the existing canvas pixels for antialiasing.
pub fn draw_camera_mark(canvas: &mut RgbaImage, rect: Rect, color: Color) {
    let canvas_width = canvas.width() as i32;
    let canvas_height = canvas.height() as i32;

    let h = rect.height;

    // Body spans the full icon width below the hump line.
    let body = RoundedRect {
        center_x: rect.x + rect.width / 2.0,
        center_y: rect.y + (BODY_TOP + 1.0) / 2.0 * h,
        half_width: rect.width / 2.0,
        half_height: (1.0 - BODY_TOP) / 2.0 * h,
        radius: BODY_CORNER_RADIUS * h,
    };

    // Viewfinder hump, centered, overlapping the body top edge.
    let hump = RoundedRect {
        center_x: rect.x + rect.width / 2.0,
        center_y: rect.y + HUMP_HEIGHT / 2.0 * h,
        half_width: HUMP_WIDTH / 2.0 * rect.width,
        half_height: HUMP_HEIGHT / 2.0 * h,
        radius: HUMP_CORNER_RADIUS * h,
    };

    let lens_center_x = rect.x + rect.width / 2.0;
    let lens_center_y = rect.y + LENS_CENTER_Y * h;
    let lens_outer = LENS_OUTER_RADIUS * h;
    let lens_inner = LENS_INNER_RADIUS * h;

    let x_start = rect.x.floor().max(0.0) as i32;
    let y_start = rect.y.floor().max(0.0) as i32;
    let x_end = ((rect.x + rect.width).ceil() as i32).min(canvas_width);
    let y_end = ((rect.y + rect.height).ceil() as i32).min(canvas_height);

    for py in y_start..y_end {
        for px in x_start..x_end {
            // Sample at the pixel center
            let sx = px as f32 + 0.5;
            let sy = py as f32 + 0.5;

            let silhouette = body.coverage(sx, sy).max(hump.coverage(sx, sy));

            // Annular hole between the lens radii
            let lens_distance =
                ((sx - lens_center_x).powi(2) + (sy - lens_center_y).powi(2)).sqrt();
            let outer = disk_coverage(lens_distance, lens_outer);
            let inner = disk_coverage(lens_distance, lens_inner);
            let hole = (outer - inner).clamp(0.0, 1.0);

            let coverage = (silhouette - hole).clamp(0.0, 1.0);
            if coverage > 0.0 {
                let existing = *canvas.get_pixel(px as u32, py as u32);
                canvas.put_pixel(px as u32, py as u32, blend_coverage(existing, color, coverage));
            }
        }
    }
}

/// Rounded rectangle described by center, half-extents and corner radius.
struct RoundedRect {
    center_x: f32,
    center_y: f32,
    half_width: f32,
    half_height: f32,
    radius: f32,
}

impl RoundedRect {
    /// Antialiased coverage of the pixel at `(x, y)`.
    fn coverage(&self, x: f32, y: f32) -> f32 {
        let qx = (x - self.center_x).abs() - (self.half_width - self.radius);
        let qy = (y - self.center_y).abs() - (self.half_height - self.radius);

        let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
        let inside = qx.max(qy).min(0.0);
        let distance = outside + inside - self.radius;

        (0.5 - distance).clamp(0.0, 1.0)
    }
}

/// Antialiased coverage of a filled disk at the given distance from its
/// center.
fn disk_coverage(distance: f32, radius: f32) -> f32 {
    (0.5 - (distance - radius)).clamp(0.0, 1.0)
}
