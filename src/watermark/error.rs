//! Caption rendering error types.

use thiserror::Error;

/// Errors from the caption render and compose paths.
///
/// Metadata normalization is total and has no error type; only rendering and
/// composition can fail, and both return these typed variants so callers can
/// degrade gracefully (e.g. export the photo without a caption) instead of
/// aborting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WatermarkError {
    /// Failed to render the caption canvas
    #[error("Failed to render caption: {0}")]
    Render(String),

    /// The requested layout state is impossible (defensive; the toggle space
    /// is exhaustive, so this should be unreachable)
    #[error("Invalid caption layout: {0}")]
    InvalidLayout(String),

    /// Failed to composite the caption beneath the photo
    #[error("Failed to composite caption: {0}")]
    Composite(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WatermarkError::Render("target width is zero".to_string());
        assert_eq!(err.to_string(), "Failed to render caption: target width is zero");

        let err = WatermarkError::InvalidLayout("expanded layout without a second line".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid caption layout: expanded layout without a second line"
        );

        let err = WatermarkError::Composite("photo has zero area".to_string());
        assert_eq!(err.to_string(), "Failed to composite caption: photo has zero area");
    }
}
