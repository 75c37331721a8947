/// Widgets for the sorter window
///
/// - `histogram.rs` - luminance histogram canvas
/// - `preview.rs` - fitting the image into the preview box
/// - `panel.rs` - key guide and metadata side panel

pub mod histogram;
pub mod panel;
pub mod preview;
