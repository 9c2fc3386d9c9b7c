//! Caption rendering.
//!
//! Turns canonical caption fields and caller toggle state into the caption
//! canvas: resolves the palette entry and any user overrides, measures the
//! visible lines, computes the layout, then fills and draws. Pure and
//! synchronous; the same inputs produce a byte-identical canvas.
//!
//! # Example
//!
//! ```
//! use chrono::{FixedOffset, TimeZone};
//! use photomark::metadata::{normalize, RawMetadata};
//! use photomark::watermark::{render, RenderOptions};
//!
//! let now = FixedOffset::east_opt(0).unwrap()
//!     .with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
//! let fields = normalize(&RawMetadata::default(), "My Phone", now);
//!
//! let caption = render(&fields, &RenderOptions::default()).unwrap();
//! assert_eq!((caption.width(), caption.height()), (4096, 393));
//! ```

use image::RgbaImage;
use tracing::{debug, warn};

use super::colors::{scheme_for_index, Color};
use super::error::WatermarkError;
use super::fields::{RenderOptions, WatermarkFields};
use super::icon::draw_camera_mark;
use super::layout::{compute_layout, ColumnLines, Rect};
use super::text_renderer::{draw_text, measure_text, FontRole};
use crate::constants::{PRIMARY_FONT_SIZE, SECONDARY_FONT_SIZE};

/// Render the caption canvas for one photo.
///
/// The canvas width is the orientation's reference width (4096 horizontal,
/// 3072 vertical) unless `options.target_width` asks for a scaled render, in
/// which case every dimension scales by `target_width / reference_width`.
///
/// Fields with a user override render the override; computed values are
/// untouched.
pub fn render(
    fields: &WatermarkFields,
    options: &RenderOptions,
) -> Result<RgbaImage, WatermarkError> {
    let reference_width = fields.orientation.reference_width();
    let scale = match options.target_width {
        Some(0) => {
            return Err(WatermarkError::Render(
                "target width must be positive".to_string(),
            ))
        }
        Some(width) => width as f32 / reference_width,
        None => 1.0,
    };

    let scheme = scheme_for_index(options.background_index);
    let primary_size = PRIMARY_FONT_SIZE * scale;
    let secondary_size = SECONDARY_FONT_SIZE * scale;

    let device_name = fields.device_name.display();
    let parameters = fields.parameters.display();

    // The left column gains a second line only when both toggles are on; the
    // right cluster's second line is the time when only time is shown, the
    // coordinates otherwise.
    let (left_second_text, right_second_text) = match (options.show_time, options.show_coordinates)
    {
        (true, true) => (
            Some(fields.timestamp.display()),
            Some(fields.coordinate.display()),
        ),
        (true, false) => (None, Some(fields.timestamp.display())),
        (false, true) => (None, Some(fields.coordinate.display())),
        (false, false) => (None, None),
    };

    let left = ColumnLines {
        first: measure_text(device_name, FontRole::Primary, primary_size),
        second: left_second_text.map(|text| measure_text(text, FontRole::Secondary, secondary_size)),
    };
    let right = ColumnLines {
        first: measure_text(parameters, FontRole::Primary, primary_size),
        second: right_second_text
            .map(|text| measure_text(text, FontRole::Secondary, secondary_size)),
    };

    let layout = compute_layout(fields.orientation, options.expanded(), &left, &right, scale)
        .map_err(|err| {
            warn!(error = %err, "caption layout rejected");
            err
        })?;

    debug!(
        width = layout.canvas_width,
        height = layout.canvas_height,
        show_time = options.show_time,
        show_coordinates = options.show_coordinates,
        "rendering caption"
    );

    let mut canvas = RgbaImage::from_pixel(
        layout.canvas_width,
        layout.canvas_height,
        scheme.background.to_rgba(),
    );

    draw_camera_mark(&mut canvas, layout.icon, scheme.primary_text);
    fill_rect(&mut canvas, layout.divider, scheme.divider);

    draw_text(
        &mut canvas,
        device_name,
        layout.left_first.x,
        layout.left_first.y,
        FontRole::Primary,
        primary_size,
        scheme.primary_text,
    );
    if let (Some(slot), Some(text)) = (layout.left_second, left_second_text) {
        draw_text(
            &mut canvas,
            text,
            slot.x,
            slot.y,
            FontRole::Secondary,
            secondary_size,
            scheme.secondary_text,
        );
    }

    draw_text(
        &mut canvas,
        parameters,
        layout.right_first.x,
        layout.right_first.y,
        FontRole::Primary,
        primary_size,
        scheme.primary_text,
    );
    if let (Some(slot), Some(text)) = (layout.right_second, right_second_text) {
        draw_text(
            &mut canvas,
            text,
            slot.x,
            slot.y,
            FontRole::Secondary,
            secondary_size,
            scheme.secondary_text,
        );
    }

    Ok(canvas)
}

/// Fill an axis-aligned box with a solid color, clipped to the canvas.
fn fill_rect(canvas: &mut RgbaImage, rect: Rect, color: Color) {
    let x_start = rect.x.round().max(0.0) as u32;
    let y_start = rect.y.round().max(0.0) as u32;
    let x_end = ((rect.x + rect.width).round() as i64).clamp(0, canvas.width() as i64) as u32;
    let y_end = ((rect.y + rect.height).round() as i64).clamp(0, canvas.height() as i64) as u32;

    let pixel = color.to_rgba();
    for y in y_start..y_end {
        for x in x_start..x_end {
            canvas.put_pixel(x, y, pixel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{normalize, RawMetadata};
    use chrono::{FixedOffset, TimeZone};

    fn test_fields() -> WatermarkFields {
        let raw = RawMetadata {
            model: Some("PM-1 Pro".to_string()),
            f_number: Some(2.0),
            focal_length_35mm: Some(35),
            exposure_time_seconds: Some(1.0 / 88.0),
            iso_speed_ratings: Some(vec![Some(400)]),
            date_time_original: Some("2024:11:04 15:36:08".to_string()),
            utc_offset: Some("+09:00".to_string()),
            latitude: Some(31.9722),
            longitude: Some(118.7569),
            ..Default::default()
        };
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 1, 1, 12, 0, 0)
            .unwrap();
        normalize(&raw, "Host", now)
    }

    // Test: canvas height switches on the optional lines
    #[test]
    fn test_canvas_height_selection() {
        let fields = test_fields();

        let compact = render(&fields, &RenderOptions::default()).unwrap();
        assert_eq!((compact.width(), compact.height()), (4096, 393));

        for (show_time, show_coordinates) in [(true, false), (false, true), (true, true)] {
            let options = RenderOptions {
                show_time,
                show_coordinates,
                ..Default::default()
            };
            let expanded = render(&fields, &options).unwrap();
            assert_eq!((expanded.width(), expanded.height()), (4096, 472));
        }
    }

    #[test]
    fn test_vertical_orientation_width() {
        let raw = RawMetadata {
            pixel_orientation: Some(6),
            ..Default::default()
        };
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 1, 1, 12, 0, 0)
            .unwrap();
        let fields = normalize(&raw, "Host", now);

        let caption = render(&fields, &RenderOptions::default()).unwrap();
        assert_eq!(caption.width(), 3072);
    }

    // Test: identical inputs produce byte-identical canvases
    #[test]
    fn test_render_is_deterministic() {
        let fields = test_fields();
        let options = RenderOptions {
            show_time: true,
            show_coordinates: true,
            ..Default::default()
        };
        let first = render(&fields, &options).unwrap();
        let second = render(&fields, &options).unwrap();
        assert_eq!(first.into_raw(), second.into_raw());
    }

    // Test: background index wraps instead of indexing out of bounds
    #[test]
    fn test_background_index_wraps() {
        let fields = test_fields();

        let light = render(
            &fields,
            &RenderOptions {
                background_index: 0,
                ..Default::default()
            },
        )
        .unwrap();
        let wrapped = render(
            &fields,
            &RenderOptions {
                background_index: 2,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(light.into_raw(), wrapped.into_raw());

        let dark = render(
            &fields,
            &RenderOptions {
                background_index: 5,
                ..Default::default()
            },
        )
        .unwrap();
        // Index 5 wraps to the dark entry
        assert_eq!(*dark.get_pixel(0, 0), image::Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_background_fill_matches_scheme() {
        let fields = test_fields();
        let light = render(&fields, &RenderOptions::default()).unwrap();
        assert_eq!(*light.get_pixel(0, 0), image::Rgba([255, 255, 255, 255]));
    }

    // Test: overrides change the rendered pixels without touching the
    // computed values
    #[test]
    fn test_override_changes_render() {
        let mut fields = test_fields();
        let options = RenderOptions {
            show_time: true,
            ..Default::default()
        };

        let original = render(&fields, &options).unwrap();

        fields.timestamp.set_custom("1999.12.31 23:59:59");
        let overridden = render(&fields, &options).unwrap();
        assert_ne!(original.clone().into_raw(), overridden.into_raw());
        assert_eq!(fields.timestamp.computed(), "2024.11.04 15:36:08");

        fields.timestamp.set_custom("");
        let restored = render(&fields, &options).unwrap();
        assert_eq!(original.into_raw(), restored.into_raw());
    }

    // Test: scaled rendering preserves proportions
    #[test]
    fn test_scaled_render() {
        let fields = test_fields();
        let options = RenderOptions {
            target_width: Some(2048),
            ..Default::default()
        };
        let caption = render(&fields, &options).unwrap();
        assert_eq!(caption.width(), 2048);
        // 393 * 0.5 = 196.5, rounds up
        assert_eq!(caption.height(), 197);
    }

    #[test]
    fn test_zero_target_width_is_typed_failure() {
        let fields = test_fields();
        let options = RenderOptions {
            target_width: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            render(&fields, &options),
            Err(WatermarkError::Render(_))
        ));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = RgbaImage::from_pixel(10, 10, image::Rgba([255, 255, 255, 255]));
        fill_rect(
            &mut canvas,
            Rect {
                x: 8.0,
                y: -5.0,
                width: 10.0,
                height: 10.0,
            },
            Color::black(),
        );
        assert_eq!(*canvas.get_pixel(9, 0), image::Rgba([0, 0, 0, 255]));
        assert_eq!(*canvas.get_pixel(0, 0), image::Rgba([255, 255, 255, 255]));
    }
}
