//! Photo + caption stacking.
//!
//! Combines the rendered caption with the source photo: the caption is
//! scaled so its width matches the photo's, then stacked directly beneath it
//! with no gap. The photo itself is never resampled or distorted; the output
//! is `photo.width × (photo.height + scaled_caption_height)`.

use fast_image_resize::{FilterType, Image, PixelType, ResizeAlg, Resizer};
use image::{imageops, RgbaImage};
use std::num::NonZeroU32;
use tracing::debug;

use super::error::WatermarkError;

/// Stack the caption beneath the photo.
///
/// The caption is resampled (Lanczos3) by the uniform factor
/// `photo.width / caption.width`; its scaled height is rounded once with
/// `f32::round`. Zero-area inputs are rejected with a typed failure so the
/// caller can export the bare photo instead.
pub fn combine(photo: &RgbaImage, caption: &RgbaImage) -> Result<RgbaImage, WatermarkError> {
    if photo.width() == 0 || photo.height() == 0 {
        return Err(WatermarkError::Composite("photo has zero area".to_string()));
    }
    if caption.width() == 0 || caption.height() == 0 {
        return Err(WatermarkError::Composite(
            "caption has zero area".to_string(),
        ));
    }

    let scale = photo.width() as f32 / caption.width() as f32;
    let scaled_height = (caption.height() as f32 * scale).round() as u32;

    let scaled = if photo.width() == caption.width() {
        caption.clone()
    } else {
        resize_caption(caption, photo.width(), scaled_height)?
    };

    debug!(
        photo_width = photo.width(),
        photo_height = photo.height(),
        caption_height = scaled.height(),
        "stacking caption beneath photo"
    );

    let mut combined = RgbaImage::new(photo.width(), photo.height() + scaled.height());
    imageops::replace(&mut combined, photo, 0, 0);
    imageops::replace(&mut combined, &scaled, 0, photo.height() as i64);

    Ok(combined)
}

/// Resample the caption to the target size with Lanczos3.
fn resize_caption(
    caption: &RgbaImage,
    target_width: u32,
    target_height: u32,
) -> Result<RgbaImage, WatermarkError> {
    let src_width = NonZeroU32::new(caption.width())
        .ok_or_else(|| WatermarkError::Composite("caption width is zero".to_string()))?;
    let src_height = NonZeroU32::new(caption.height())
        .ok_or_else(|| WatermarkError::Composite("caption height is zero".to_string()))?;
    let dst_width = NonZeroU32::new(target_width)
        .ok_or_else(|| WatermarkError::Composite("target width is zero".to_string()))?;
    let dst_height = NonZeroU32::new(target_height)
        .ok_or_else(|| WatermarkError::Composite("scaled caption height is zero".to_string()))?;

    let src_image = Image::from_vec_u8(
        src_width,
        src_height,
        caption.as_raw().clone(),
        PixelType::U8x4,
    )
    .map_err(|e| WatermarkError::Composite(format!("failed to create source image: {:?}", e)))?;

    let mut dst_image = Image::new(dst_width, dst_height, PixelType::U8x4);

    let mut resizer = Resizer::new(ResizeAlg::Convolution(FilterType::Lanczos3));
    resizer
        .resize(&src_image.view(), &mut dst_image.view_mut())
        .map_err(|e| WatermarkError::Composite(format!("resize failed: {:?}", e)))?;

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| WatermarkError::Composite("failed to create output buffer".to_string()))
}
