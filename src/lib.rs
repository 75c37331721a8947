//! Bulk image sorter
//!
//! Shows one image at a time with its luminance histogram and EXIF data;
//! a single key press moves it into a labeled sub-folder.

pub mod config;
pub mod error;
pub mod keymap;
pub mod media;
pub mod state;
pub mod ui;

pub use config::AppConfig;
pub use state::session::{Presenter, Session};
