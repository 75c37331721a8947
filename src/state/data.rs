/// Shared data structures for the sort session
///
/// These structs represent the data model that flows between
/// the session state machine and the UI layer.
use std::path::PathBuf;

use crate::keymap::KeyId;

/// A validated destination key binding
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// Lower-case character as written in the configuration
    pub key: char,
    /// Physical key that triggers this destination
    pub key_id: KeyId,
    /// Label shown in the key guide (e.g., "Accept")
    pub label: String,
    /// Sub-folder of the source folder (e.g., "accept")
    pub folder: PathBuf,
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Building the queue
    Loading,
    /// An image is on screen, waiting for a key
    Ready(usize),
    /// A move is in progress
    Advancing,
    /// Every image has been sorted
    Exhausted,
}

/// Decoded RGBA pixels for the preview
#[derive(Debug, Clone)]
pub struct Pixels {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// The five EXIF fields, in display order
pub const FIELD_NAMES: [&str; 5] = ["Camera", "ISO", "F-Stop", "Exposure", "White Balance"];

/// Placeholder for a missing EXIF field
pub const UNKNOWN: &str = "Unknown";

/// EXIF fields shown in the metadata table
#[derive(Debug, Clone, PartialEq)]
pub struct ExifFields {
    pub camera: String,
    pub iso: String,
    pub f_stop: String,
    pub exposure: String,
    pub white_balance: String,
}

impl Default for ExifFields {
    fn default() -> Self {
        Self {
            camera: UNKNOWN.to_string(),
            iso: UNKNOWN.to_string(),
            f_stop: UNKNOWN.to_string(),
            exposure: UNKNOWN.to_string(),
            white_balance: UNKNOWN.to_string(),
        }
    }
}

impl ExifFields {
    /// (name, value) pairs in display order
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            (FIELD_NAMES[0], self.camera.as_str()),
            (FIELD_NAMES[1], self.iso.as_str()),
            (FIELD_NAMES[2], self.f_stop.as_str()),
            (FIELD_NAMES[3], self.exposure.as_str()),
            (FIELD_NAMES[4], self.white_balance.as_str()),
        ]
    }
}

/// Histogram and EXIF fields for one image
#[derive(Debug, Clone)]
pub struct ImageMetadata {
    /// Grayscale luminance histogram, one bucket per intensity 0-255
    pub histogram: [u32; 256],
    pub fields: ExifFields,
}

/// Everything computed for the image currently on screen
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub pixels: Pixels,
    pub metadata: ImageMetadata,
}
