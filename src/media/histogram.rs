/// Grayscale luminance histogram
use image::DynamicImage;

/// Count pixels per luminance level (0-255) after converting to grayscale
pub fn luminance(img: &DynamicImage) -> [u32; 256] {
    let mut buckets = [0u32; 256];
    for pixel in img.to_luma8().pixels() {
        buckets[pixel.0[0] as usize] += 1;
    }
    buckets
}
