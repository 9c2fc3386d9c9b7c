//! Caption layout geometry.
//!
//! Pure placement math for the caption canvas: given the measured sizes of
//! the text lines and the toggle-derived variant, resolve every box (canvas
//! dimensions, left-column line slots, and the right cluster of icon,
//! divider and text block) at an arbitrary linear scale.
//!
//! # Layout variants
//!
//! The caption has two columns. The left column holds the device name, with
//! the time stacked beneath it when both optional lines are shown. The right
//! cluster packs icon → gap → divider → gap → text block and is right-aligned
//! at the edge padding; its text block holds the parameters line, with the
//! time or coordinate line stacked beneath in the expanded layouts:
//!
//! | time | coordinates | left column       | right text block          |
//! |------|-------------|-------------------|---------------------------|
//! | off  | off         | device name       | parameters                |
//! | on   | off         | device name       | parameters / time         |
//! | off  | on          | device name       | parameters / coordinates  |
//! | on   | on          | device name / time| parameters / coordinates  |
//!
//! All constants live in [`crate::constants`] and are defined at the
//! reference canvas width; every value here is multiplied by the caller's
//! scale factor before use.

use super::error::WatermarkError;
use super::text_renderer::TextSize;
use crate::constants::*;
use crate::metadata::Orientation;

/// Axis-aligned box in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Top-left corner of a text line box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSlot {
    pub x: f32,
    pub y: f32,
}

/// Measured sizes of the one or two lines in a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLines {
    pub first: TextSize,
    pub second: Option<TextSize>,
}

/// Resolved caption geometry, ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptionLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Device name slot
    pub left_first: TextSlot,
    /// Time slot when both optional lines are shown
    pub left_second: Option<TextSlot>,
    /// Parameters slot
    pub right_first: TextSlot,
    /// Time or coordinate slot in the expanded layouts
    pub right_second: Option<TextSlot>,
    pub icon: Rect,
    pub divider: Rect,
}

/// Compute the caption layout for one render call.
///
/// `expanded` selects the taller canvas and the expanded icon/divider
/// geometry; it must agree with the column shapes (an expanded layout always
/// has a second right-cluster line, a compact one has no second line
/// anywhere). The toggle space is exhaustive so a disagreement is
/// unreachable from the render path, but it is reported as a typed error
/// rather than producing a malformed canvas.
pub fn compute_layout(
    orientation: Orientation,
    expanded: bool,
    left: &ColumnLines,
    right: &ColumnLines,
    scale: f32,
) -> Result<CaptionLayout, WatermarkError> {
    if !(scale > 0.0 && scale.is_finite()) {
        return Err(WatermarkError::InvalidLayout(format!(
            "scale must be positive and finite, got {}",
            scale
        )));
    }
    if !expanded && (left.second.is_some() || right.second.is_some()) {
        return Err(WatermarkError::InvalidLayout(
            "compact layout cannot carry a second line".to_string(),
        ));
    }
    if expanded && right.second.is_none() {
        return Err(WatermarkError::InvalidLayout(
            "expanded layout requires a second right-cluster line".to_string(),
        ));
    }

    let pick = |expanded_value: f32, compact_value: f32| -> f32 {
        if expanded {
            expanded_value * scale
        } else {
            compact_value * scale
        }
    };

    let canvas_width = orientation.reference_width() * scale;
    let canvas_height = pick(CAPTION_HEIGHT_EXPANDED, CAPTION_HEIGHT_COMPACT);

    let edge_padding = EDGE_PADDING * scale;
    let left_line_gap = LEFT_LINE_GAP * scale;
    let right_line_gap = RIGHT_LINE_GAP * scale;

    let icon_height = pick(ICON_HEIGHT_EXPANDED, ICON_HEIGHT_COMPACT);
    let icon_width = icon_height * ICON_ASPECT;

    let divider_width = pick(DIVIDER_WIDTH_EXPANDED, DIVIDER_WIDTH_COMPACT);
    let divider_height = pick(DIVIDER_HEIGHT_EXPANDED, DIVIDER_HEIGHT_COMPACT);

    let cluster_gap = pick(CLUSTER_GAP_EXPANDED, CLUSTER_GAP_COMPACT);

    // Left column: one line centered, or two lines centered as a block.
    let left_first_y = match left.second {
        Some(second) => {
            let block_height = left.first.height + left_line_gap + second.height;
            (canvas_height - block_height) / 2.0
        }
        None => (canvas_height - left.first.height) / 2.0,
    };
    let left_second = left.second.map(|_| TextSlot {
        x: edge_padding,
        y: (canvas_height + left_line_gap) / 2.0,
    });

    // Right cluster: icon → gap → divider → gap → text block, with the
    // cluster's right edge sitting at the edge padding.
    let text_block_width = match right.second {
        Some(second) => right.first.width.max(second.width),
        None => right.first.width,
    };
    let cluster_width =
        icon_width + cluster_gap + divider_width + cluster_gap + text_block_width;
    let cluster_x = canvas_width - edge_padding - cluster_width;
    let text_x = cluster_x + icon_width + cluster_gap + divider_width + cluster_gap;

    let right_first_y = match right.second {
        Some(second) => {
            let block_height = right.first.height + right_line_gap + second.height;
            (canvas_height - block_height) / 2.0
        }
        None => (canvas_height - right.first.height) / 2.0,
    };
    let right_second = right.second.map(|_| TextSlot {
        x: text_x,
        y: (canvas_height + right_line_gap) / 2.0,
    });

    Ok(CaptionLayout {
        canvas_width: canvas_width.round() as u32,
        canvas_height: canvas_height.round() as u32,
        left_first: TextSlot {
            x: edge_padding,
            y: left_first_y,
        },
        left_second,
        right_first: TextSlot {
            x: text_x,
            y: right_first_y,
        },
        right_second,
        icon: Rect {
            x: cluster_x,
            y: (canvas_height - icon_height) / 2.0,
            width: icon_width,
            height: icon_height,
        },
        divider: Rect {
            x: cluster_x + icon_width + cluster_gap,
            y: (canvas_height - divider_height) / 2.0,
            width: divider_width,
            height: divider_height,
        },
    })
}
