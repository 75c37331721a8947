/// The sort session state machine
///
/// A session owns the image queue, the cursor into it and the validated
/// key bindings. Key events come in one at a time from the UI thread; a
/// bound key moves the current image into its destination folder and
/// advances to the next one.
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use super::data::{Binding, ExifFields, ImageMetadata, Phase, Pixels};
use super::queue;
use crate::config::AppConfig;
use crate::error::{MoveError, SessionError};
use crate::media;

/// Status line once the queue is empty
pub const EXHAUSTED_STATUS: &str = "No more images to sort.";

/// Receives everything the session wants on screen
pub trait Presenter {
    /// Drop whatever was shown for the previous image
    fn clear(&mut self);
    fn render_image(&mut self, pixels: &Pixels);
    fn render_histogram(&mut self, histogram: &[u32; 256]);
    fn render_metadata_fields(&mut self, fields: &ExifFields);
    fn render_status(&mut self, text: &str);
}

pub struct Session {
    source: PathBuf,
    bindings: Vec<Binding>,
    queue: Vec<PathBuf>,
    cursor: usize,
    phase: Phase,
    /// Set while a bound key is held down, so key repeat cannot move twice
    key_held: bool,
    metadata: Option<ImageMetadata>,
}

impl Session {
    /// Validate the key bindings, prepare the destination folders, scan the
    /// source folder and show the first image.
    pub fn initialize(config: &AppConfig, presenter: &mut impl Presenter) -> Result<Self, SessionError> {
        let bindings = config.bindings()?;
        let source = config.source_folder.clone();

        let mut session = Session {
            source,
            bindings,
            queue: Vec::new(),
            cursor: 0,
            phase: Phase::Loading,
            key_held: false,
            metadata: None,
        };

        queue::ensure_destinations(&session.source, &session.bindings)?;
        session.queue = queue::scan(&session.source)?;
        session.phase = session.resting_phase();

        info!(
            images = session.queue.len(),
            destinations = session.bindings.len(),
            "Sort session ready"
        );

        session.show(presenter);
        Ok(session)
    }

    /// The image waiting to be sorted, or None once every image is sorted
    pub fn current_image(&self) -> Option<&Path> {
        match self.phase {
            Phase::Ready(i) => self.queue.get(i).map(PathBuf::as_path),
            _ => None,
        }
    }

    /// A key went down.
    ///
    /// Returns the new location of the image when this press moved it,
    /// `Ok(None)` when the press was ignored.
    pub fn on_key_down(
        &mut self,
        key: char,
        presenter: &mut impl Presenter,
    ) -> Result<Option<PathBuf>, MoveError> {
        if self.key_held || self.phase == Phase::Exhausted {
            return Ok(None);
        }
        let key = key.to_ascii_lowercase();
        if self.binding(key).is_none() {
            return Ok(None);
        }

        self.key_held = true;
        self.commit_move(key, presenter).map(Some)
    }

    /// A key was released
    pub fn on_key_up(&mut self) {
        self.key_held = false;
    }

    /// Move the current image into the folder bound to `key` and advance.
    ///
    /// The file keeps its name. A file of the same name already in the
    /// destination is never overwritten. On failure the cursor stays put and
    /// the error is shown in the status line. Once every image is sorted the
    /// call fails and the "done" status is left alone.
    pub fn commit_move(
        &mut self,
        key: char,
        presenter: &mut impl Presenter,
    ) -> Result<PathBuf, MoveError> {
        let result = self.try_move(key);

        match &result {
            Ok(target) => {
                info!(to = %target.display(), "Moved image");
                self.cursor += 1;
                self.phase = self.resting_phase();
                self.show(presenter);
            }
            Err(MoveError::NoCurrentImage) => {
                debug!("Move requested with no image left");
            }
            Err(e) => {
                error!(error = %e, "Move failed");
                self.phase = self.resting_phase();
                presenter.render_status(&format!("Move failed: {e}"));
            }
        }

        result
    }

    fn try_move(&mut self, key: char) -> Result<PathBuf, MoveError> {
        let from = self
            .current_image()
            .ok_or(MoveError::NoCurrentImage)?
            .to_path_buf();
        let folder = self
            .binding(key)
            .ok_or(MoveError::UnknownDestination(key))?
            .folder
            .clone();

        let file_name = from.file_name().ok_or(MoveError::NoCurrentImage)?;
        let to = self.source.join(folder).join(file_name);

        if to.exists() {
            return Err(MoveError::Collision(to));
        }

        self.phase = Phase::Advancing;
        fs::rename(&from, &to).map_err(|source| MoveError::Io {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;

        Ok(to)
    }

    /// Push the current image, or the "done" state, to the presenter
    fn show(&mut self, presenter: &mut impl Presenter) {
        presenter.clear();
        self.metadata = None;

        let Some(path) = self.current_image().map(Path::to_path_buf) else {
            info!("No more images to sort");
            presenter.render_status(EXHAUSTED_STATUS);
            return;
        };

        match media::snapshot(&path) {
            Ok(snapshot) => {
                presenter.render_status(&format!("Image: {}", path.display()));
                presenter.render_image(&snapshot.pixels);
                presenter.render_histogram(&snapshot.metadata.histogram);
                presenter.render_metadata_fields(&snapshot.metadata.fields);
                self.metadata = Some(snapshot.metadata);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not decode image");
                presenter.render_status(&format!(
                    "Image: {} (could not decode: {e})",
                    path.display()
                ));
            }
        }
    }

    fn resting_phase(&self) -> Phase {
        if self.cursor < self.queue.len() {
            Phase::Ready(self.cursor)
        } else {
            Phase::Exhausted
        }
    }

    fn binding(&self, key: char) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.key == key)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Histogram and EXIF fields of the current image, if it decoded
    pub fn metadata(&self) -> Option<&ImageMetadata> {
        self.metadata.as_ref()
    }
}
