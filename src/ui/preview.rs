/// Preview box size, in logical pixels
pub const PREVIEW_WIDTH: f32 = 975.0;
pub const PREVIEW_HEIGHT: f32 = 650.0;

/// Size to draw a `width` x `height` image so it fits the preview box,
/// keeping its aspect ratio. Small images are scaled up. Fractional
/// pixels are dropped.
pub fn fit(width: u32, height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }
    let (width, height) = (f64::from(width), f64::from(height));
    let scale = (f64::from(PREVIEW_WIDTH) / width).min(f64::from(PREVIEW_HEIGHT) / height);
    ((width * scale) as u32, (height * scale) as u32)
}

/// "<w> x <h> (Displaying <sw> x <sh>)"
pub fn dimensions_label(width: u32, height: u32) -> String {
    let (shown_width, shown_height) = fit(width, height);
    format!("{width} x {height} (Displaying {shown_width} x {shown_height})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_image_is_width_bound() {
        assert_eq!(fit(1950, 650), (975, 325));
    }

    #[test]
    fn test_tall_image_is_height_bound() {
        assert_eq!(fit(1000, 2000), (325, 650));
    }

    #[test]
    fn test_fractional_size_is_truncated() {
        assert_eq!(fit(1000, 3000), (216, 650));
        assert_eq!(dimensions_label(1000, 3000), "1000 x 3000 (Displaying 216 x 650)");
    }

    #[test]
    fn test_small_image_is_scaled_up() {
        assert_eq!(fit(195, 130), (975, 650));
    }

    #[test]
    fn test_degenerate_size() {
        assert_eq!(fit(0, 10), (0, 0));
    }

    #[test]
    fn test_label() {
        assert_eq!(dimensions_label(1950, 1300), "1950 x 1300 (Displaying 975 x 650)");
    }
}
