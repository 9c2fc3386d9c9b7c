//! Caption watermark rendering and composition.
//!
//! This module renders the metadata caption bar that gets stacked beneath a
//! photo: device name on the left, icon/divider/parameters cluster on the
//! right, with optional time and coordinate lines.
//!
//! # Features
//!
//! - **Four layout variants** driven by the time/coordinate toggles, at two
//!   fixed canvas heights
//! - **Fixed-ratio geometry**: all measurements defined at the reference
//!   width (4096 horizontal / 3072 vertical) and scaled linearly for other
//!   target widths
//! - **Light and dark palettes** with paired text and divider tones,
//!   selected by a modulo-normalized index
//! - **User overrides** per caption field, with exact restore-to-computed
//! - **Deterministic output**: identical inputs produce byte-identical
//!   canvases
//!
//! # Pipeline
//!
//! ```ignore
//! use photomark::metadata::{normalize, RawMetadata};
//! use photomark::watermark::{combine, render, RenderOptions};
//!
//! let fields = normalize(&raw, host_name, now);
//! let caption = render(&fields, &RenderOptions::default())?;
//! let exported = combine(&photo, &caption)?;
//! ```

pub mod colors;
pub mod compositor;
pub mod error;
pub mod fields;
pub mod icon;
pub mod layout;
pub mod renderer;
pub mod text_renderer;

// Re-export main types for convenience
pub use colors::{palette_len, scheme_for_index, Color, ColorScheme};
pub use compositor::combine;
pub use error::WatermarkError;
pub use fields::{DisplayField, RenderOptions, WatermarkFields};
pub use icon::draw_camera_mark;
pub use layout::{compute_layout, CaptionLayout, ColumnLines, Rect, TextSlot};
pub use renderer::render;
pub use text_renderer::{draw_text, measure_text, FontRole, TextSize};
