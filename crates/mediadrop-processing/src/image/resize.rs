use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

/// Maximum width before an upload is downscaled.
pub const DEFAULT_MAX_DIMENSION: u32 = 1280;

/// Target size for an image of `width`x`height` under a `max` bound.
///
/// Returns `None` when the width is within bounds. Otherwise the image is
/// scaled so its longer side equals `max`, keeping the aspect ratio. Since
/// the width already exceeds `max`, the scale factor is always below one.
pub fn bounded_dimensions(width: u32, height: u32, max: u32) -> Option<(u32, u32)> {
    if width <= max || max == 0 {
        return None;
    }

    let longer = width.max(height) as f64;
    let scale = max as f64 / longer;
    let new_width = ((width as f64 * scale).round() as u32).clamp(1, max);
    let new_height = ((height as f64 * scale).round() as u32).clamp(1, max);
    Some((new_width, new_height))
}

/// Downscale `img` if it is wider than `max`; returns it untouched otherwise.
pub fn downscale_to_fit(img: DynamicImage, max: u32) -> DynamicImage {
    let (width, height) = img.dimensions();
    match bounded_dimensions(width, height, max) {
        Some((new_width, new_height)) => {
            tracing::debug!(
                from_width = width,
                from_height = height,
                to_width = new_width,
                to_height = new_height,
                "Downscaling image"
            );
            img.resize_exact(new_width, new_height, FilterType::Lanczos3)
        }
        None => img,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_bounds_untouched() {
        assert_eq!(bounded_dimensions(1280, 720, 1280), None);
        assert_eq!(bounded_dimensions(640, 480, 1280), None);
    }

    #[test]
    fn test_narrow_tall_image_is_not_resized() {
        // only the width triggers a resize
        assert_eq!(bounded_dimensions(1000, 4000, 1280), None);
    }

    #[test]
    fn test_landscape_scaled_by_width() {
        assert_eq!(bounded_dimensions(2000, 1000, 1280), Some((1280, 640)));
        assert_eq!(bounded_dimensions(1920, 1080, 1280), Some((1280, 720)));
    }

    #[test]
    fn test_portrait_scaled_by_height() {
        assert_eq!(bounded_dimensions(1500, 3000, 1280), Some((640, 1280)));
    }

    #[test]
    fn test_extreme_aspect_never_collapses_to_zero() {
        assert_eq!(bounded_dimensions(100_000, 10, 1280), Some((1280, 1)));
    }

    #[test]
    fn test_downscale_to_fit() {
        let img = DynamicImage::new_rgb8(2000, 1000);
        let resized = downscale_to_fit(img, DEFAULT_MAX_DIMENSION);
        assert_eq!(resized.dimensions(), (1280, 640));

        let img = DynamicImage::new_rgb8(300, 200);
        let kept = downscale_to_fit(img, DEFAULT_MAX_DIMENSION);
        assert_eq!(kept.dimensions(), (300, 200));
    }
}
