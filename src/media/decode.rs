/// Image file decoding
use image::{DynamicImage, ImageReader};
use std::path::Path;

use crate::error::DecodeError;
use crate::state::data::Pixels;

/// Decode an image file, sniffing the format from its contents
pub fn open(path: &Path) -> Result<DynamicImage, DecodeError> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(img)
}

/// Convert a decoded image to RGBA8 pixels for the preview widget
pub fn pixels(img: &DynamicImage) -> Pixels {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Pixels {
        rgba: rgba.into_raw(),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_io_error() {
        let result = open(Path::new("/nonexistent/path.png"));
        assert!(matches!(result, Err(DecodeError::Io(_))));
    }

    #[test]
    fn test_gray_expands_to_rgba() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, Luma([7])));
        let px = pixels(&img);
        assert_eq!(px.rgba, [7u8, 7, 7, 255].repeat(4));
    }

    #[test]
    fn test_format_comes_from_contents() {
        // A PNG saved under a .jpg name still decodes
        let dir = TempDir::new().unwrap();
        let png = dir.path().join("real.png");
        GrayImage::from_pixel(3, 1, Luma([200])).save(&png).unwrap();
        let misnamed = dir.path().join("misnamed.jpg");
        std::fs::rename(&png, &misnamed).unwrap();

        let img = open(&misnamed).unwrap();
        assert_eq!((img.width(), img.height()), (3, 1));
    }
}
