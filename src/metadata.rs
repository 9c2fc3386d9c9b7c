//! EXIF metadata normalization.
//!
//! Converts a possibly-partial metadata record (as extracted from an image's
//! TIFF/Exif/GPS blocks by an external reader) into canonical caption fields
//! with every display string pre-formatted and safe defaults substituted for
//! missing data.
//!
//! Normalization is a total function: malformed or absent values resolve to
//! documented fallbacks, never to errors.
//!
//! # Example
//!
//! ```
//! use chrono::{FixedOffset, TimeZone};
//! use photomark::metadata::{normalize, RawMetadata};
//!
//! let raw = RawMetadata {
//!     model: Some("PM-1 Pro".to_string()),
//!     f_number: Some(2.0),
//!     focal_length_35mm: Some(35),
//!     exposure_time_seconds: Some(1.0 / 88.0),
//!     iso_speed_ratings: Some(vec![Some(400)]),
//!     ..Default::default()
//! };
//!
//! let now = FixedOffset::east_opt(0).unwrap()
//!     .with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
//! let fields = normalize(&raw, "My Phone", now);
//! assert_eq!(fields.parameters.computed(), "35mm  f/2.0  1/88s  ISO400");
//! ```

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::constants::{COORDINATE_FALLBACK, EXPOSURE_DENOMINATOR_FALLBACK};
use crate::constants::{REF_WIDTH_HORIZONTAL, REF_WIDTH_VERTICAL};
use crate::watermark::fields::{DisplayField, WatermarkFields};

/// EXIF date format as written by cameras (`2024:11:04 15:36:08`).
const EXIF_DATETIME_WITH_OFFSET_FORMAT: &str = "%Y:%m:%d %H:%M:%S %:z";

/// Timestamp format shown in the caption.
const CAPTION_TIMESTAMP_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Metadata record handed in by the external EXIF reader.
///
/// Every field is optional; absent values resolve to fallbacks during
/// [`normalize`]. The record is read once per photo load and never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMetadata {
    /// Camera model from the TIFF block (e.g. "Xiaomi 14")
    pub model: Option<String>,

    /// Aperture f-number (e.g. 2.0)
    pub f_number: Option<f64>,

    /// 35mm-equivalent focal length in millimeters
    pub focal_length_35mm: Option<i32>,

    /// Exposure time in seconds (e.g. 1/88 ≈ 0.01136)
    pub exposure_time_seconds: Option<f64>,

    /// ISO speed ratings list; the first non-null entry is displayed
    pub iso_speed_ratings: Option<Vec<Option<u32>>>,

    /// Capture timestamp, `YYYY:MM:DD HH:mm:ss`
    pub date_time_original: Option<String>,

    /// UTC offset of the capture timestamp, `±HH:MM`
    pub utc_offset: Option<String>,

    /// GPS latitude in signed decimal degrees
    pub latitude: Option<f64>,

    /// GPS longitude in signed decimal degrees
    pub longitude: Option<f64>,

    /// EXIF pixel orientation (1-8)
    pub pixel_orientation: Option<u16>,
}

/// Caption orientation, derived from the EXIF pixel orientation.
///
/// Decides the reference canvas width: orientations 1-4 keep the pixel rows
/// horizontal, 5-8 transpose them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Map an EXIF orientation value. Absent or out-of-range values are
    /// treated as horizontal.
    pub fn from_exif(value: Option<u16>) -> Self {
        match value {
            Some(5..=8) => Orientation::Vertical,
            _ => Orientation::Horizontal,
        }
    }

    /// Reference caption width for this orientation.
    pub fn reference_width(&self) -> f32 {
        match self {
            Orientation::Horizontal => REF_WIDTH_HORIZONTAL,
            Orientation::Vertical => REF_WIDTH_VERTICAL,
        }
    }
}

/// Normalize a raw metadata record into caption fields.
///
/// * `host_device_name` - substituted for a missing camera model
/// * `now` - substituted for a missing or unparseable capture timestamp
///
/// Total over its inputs: every branch resolves to a value.
pub fn normalize(
    raw: &RawMetadata,
    host_device_name: &str,
    now: DateTime<FixedOffset>,
) -> WatermarkFields {
    let device_name = raw
        .model
        .clone()
        .unwrap_or_else(|| host_device_name.to_string());

    WatermarkFields {
        device_name: DisplayField::new(device_name),
        timestamp: DisplayField::new(timestamp_text(raw, now)),
        parameters: DisplayField::new(parameters_text(raw)),
        coordinate: DisplayField::new(coordinate_text(raw)),
        orientation: Orientation::from_exif(raw.pixel_orientation),
    }
}

/// Caption timestamp: the capture time in its original UTC offset when both
/// parts are present and parse, otherwise `now`.
fn timestamp_text(raw: &RawMetadata, now: DateTime<FixedOffset>) -> String {
    parse_original_timestamp(raw)
        .unwrap_or(now)
        .format(CAPTION_TIMESTAMP_FORMAT)
        .to_string()
}

/// Parse `date_time_original` + `utc_offset` into an offset-aware timestamp.
///
/// The offset must be sign, two-digit hours, colon, two-digit minutes;
/// anything else fails the parse and the caller falls back to `now`.
fn parse_original_timestamp(raw: &RawMetadata) -> Option<DateTime<FixedOffset>> {
    let date_time = raw.date_time_original.as_deref()?;
    let offset = raw.utc_offset.as_deref()?;
    let stamp = format!("{} {}", date_time, offset);
    DateTime::parse_from_str(&stamp, EXIF_DATETIME_WITH_OFFSET_FORMAT).ok()
}

/// Exposure parameters line: `{focal}mm  f/{fnumber}  1/{denom}s  ISO{iso}`.
///
/// Always non-empty, always four components in this order. Missing values
/// render as zero through the same formatters as real values.
fn parameters_text(raw: &RawMetadata) -> String {
    let focal_length = raw.focal_length_35mm.unwrap_or(0);
    let f_number = raw.f_number.unwrap_or(0.0);
    let denominator = exposure_denominator(raw.exposure_time_seconds);
    let iso = raw
        .iso_speed_ratings
        .as_ref()
        .and_then(|ratings| ratings.first().copied().flatten())
        .unwrap_or(0);

    format!(
        "{}mm  f/{:.1}  1/{}s  ISO{}",
        focal_length, f_number, denominator, iso
    )
}

/// Denominator of the `1/N` exposure fraction.
///
/// A zero or non-finite exposure time has no defined denominator and falls
/// back the same way as an absent one.
fn exposure_denominator(exposure_time_seconds: Option<f64>) -> i64 {
    match exposure_time_seconds {
        Some(seconds) if seconds != 0.0 && seconds.is_finite() => (1.0 / seconds).round() as i64,
        _ => EXPOSURE_DENOMINATOR_FALLBACK,
    }
}

/// Coordinate line: `{latDMS}  {lonDMS}`, or the fixed fallback string when
/// either coordinate is absent. Never a partial value.
fn coordinate_text(raw: &RawMetadata) -> String {
    match (raw.latitude, raw.longitude) {
        (Some(latitude), Some(longitude)) => {
            let lat = dms_string(latitude, 'N', 'S');
            let lon = dms_string(longitude, 'E', 'W');
            format!("{}  {}", lat, lon)
        }
        _ => COORDINATE_FALLBACK.to_string(),
    }
}

/// Degree-minute-second rendering of one signed decimal coordinate.
///
/// Whole degrees come from truncation toward zero on the signed value;
/// seconds are zero-padded to two integer digits (`%05.2f`).
fn dms_string(decimal: f64, positive: char, negative: char) -> String {
    let degrees = decimal.trunc() as i64;
    let minutes_decimal = (decimal - degrees as f64).abs() * 60.0;
    let minutes = minutes_decimal.trunc() as i64;
    let seconds = (minutes_decimal - minutes as f64) * 60.0;

    let hemisphere = if decimal >= 0.0 { positive } else { negative };
    format!(
        "{}\u{00B0}{}'{:05.2}\"{}",
        degrees.abs(),
        minutes,
        seconds,
        hemisphere
    )
}
