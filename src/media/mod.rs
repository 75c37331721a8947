/// Image decoding and metadata extraction
///
/// This module handles:
/// - Decoding the current image into RGBA pixels for the preview
/// - Computing the grayscale luminance histogram
/// - Reading the EXIF fields shown in the metadata table
pub mod decode;
pub mod histogram;
pub mod tags;

use image::DynamicImage;
use std::path::Path;

use crate::error::DecodeError;
use crate::state::data::{ImageMetadata, Snapshot};

/// Extract the histogram and EXIF fields of the image at `path`.
///
/// Fails only when the image itself cannot be decoded; missing EXIF data
/// just leaves the fields at "Unknown".
pub fn extract(path: &Path) -> Result<ImageMetadata, DecodeError> {
    let img = decode::open(path)?;
    Ok(metadata_of(&img, path))
}

/// Decode the image at `path` once and build everything the screen needs.
pub fn snapshot(path: &Path) -> Result<Snapshot, DecodeError> {
    let img = decode::open(path)?;
    Ok(Snapshot {
        pixels: decode::pixels(&img),
        metadata: metadata_of(&img, path),
    })
}

fn metadata_of(img: &DynamicImage, path: &Path) -> ImageMetadata {
    ImageMetadata {
        histogram: histogram::luminance(img),
        fields: tags::read_fields(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::UNKNOWN;
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    #[test]
    fn test_extract_plain_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gray.png");
        RgbImage::from_pixel(4, 3, Rgb([90, 90, 90])).save(&path).unwrap();

        let meta = extract(&path).unwrap();

        assert_eq!(meta.histogram[90], 12);
        assert_eq!(meta.histogram.iter().sum::<u32>(), 12);
        for (_, value) in meta.fields.entries() {
            assert_eq!(value, UNKNOWN);
        }
    }

    #[test]
    fn test_corrupt_file_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        assert!(extract(&path).is_err());
        assert!(snapshot(&path).is_err());
    }

    #[test]
    fn test_snapshot_carries_pixels() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("small.png");
        RgbImage::from_pixel(5, 2, Rgb([10, 20, 30])).save(&path).unwrap();

        let snap = snapshot(&path).unwrap();

        assert_eq!((snap.pixels.width, snap.pixels.height), (5, 2));
        assert_eq!(snap.pixels.rgba.len(), 5 * 2 * 4);
        assert_eq!(&snap.pixels.rgba[0..4], &[10, 20, 30, 255]);
    }
}
