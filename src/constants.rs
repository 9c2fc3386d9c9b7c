// Constants module - reference caption geometry and typography
//
// Every measurement is defined at the reference canvas width (4096 for
// horizontal photos, 3072 for vertical ones). Rendering at any other target
// width scales each value linearly by `target_width / reference_width`, so
// the caption keeps its proportions at every output resolution.

// =============================================================================
// Canvas
// =============================================================================

/// Reference caption width for horizontally-oriented photos
pub const REF_WIDTH_HORIZONTAL: f32 = 4096.0;

/// Reference caption width for vertically-oriented photos
pub const REF_WIDTH_VERTICAL: f32 = 3072.0;

/// Caption height when the time or coordinate line is shown
pub const CAPTION_HEIGHT_EXPANDED: f32 = 472.0;

/// Caption height when only device name and parameters are shown
pub const CAPTION_HEIGHT_COMPACT: f32 = 393.0;

// =============================================================================
// Margins and line gaps
// =============================================================================

/// Horizontal padding between the canvas edge and the outermost content
pub const EDGE_PADDING: f32 = 144.0;

/// Vertical gap between the two stacked lines of the left column
pub const LEFT_LINE_GAP: f32 = 60.0;

/// Vertical gap between the two stacked lines of the right cluster
pub const RIGHT_LINE_GAP: f32 = 66.0;

// =============================================================================
// Icon and divider
// =============================================================================

/// Icon glyph height in the expanded layouts
pub const ICON_HEIGHT_EXPANDED: f32 = 182.0;

/// Icon glyph height in the compact layout
pub const ICON_HEIGHT_COMPACT: f32 = 165.0;

/// Icon width as a multiple of its height
pub const ICON_ASPECT: f32 = 1.25;

/// Divider bar width in the expanded layouts
pub const DIVIDER_WIDTH_EXPANDED: f32 = 5.0;

/// Divider bar width in the compact layout
pub const DIVIDER_WIDTH_COMPACT: f32 = 6.0;

/// Divider bar height in the expanded layouts
pub const DIVIDER_HEIGHT_EXPANDED: f32 = 178.0;

/// Divider bar height in the compact layout
pub const DIVIDER_HEIGHT_COMPACT: f32 = 142.0;

/// Gap between icon, divider and text block inside the right cluster
/// (expanded layouts)
pub const CLUSTER_GAP_EXPANDED: f32 = 65.0;

/// Gap between icon, divider and text block inside the right cluster
/// (compact layout)
pub const CLUSTER_GAP_COMPACT: f32 = 56.0;

// =============================================================================
// Typography
// =============================================================================

/// Font size for the device name and parameters lines
pub const PRIMARY_FONT_SIZE: f32 = 87.0;

/// Font size for the time and coordinate lines
pub const SECONDARY_FONT_SIZE: f32 = 66.0;

// =============================================================================
// Text fallbacks
// =============================================================================

/// Shown in place of the coordinate line when either coordinate is missing
pub const COORDINATE_FALLBACK: &str = "Location unavailable";

/// Exposure fraction denominator used when the exposure time is missing
pub const EXPOSURE_DENOMINATOR_FALLBACK: i64 = 1;
