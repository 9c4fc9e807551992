use std::collections::HashSet;
use std::path::{Path, PathBuf};

use futures::Stream;
use notify::{Event, EventKind, RecommendedWatcher, Watcher, recommended_watcher};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

use super::GatewayError;

/// A change observed on a watched Waybar file.
#[derive(Debug, Clone)]
pub struct FileEvent {
    /// The file that changed.
    pub path: PathBuf,
    /// What happened to it.
    pub kind: FileEventKind,
}

/// The kind of change observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileEventKind {
    /// File content was modified.
    Modified,
    /// File was created.
    Created,
    /// File was removed.
    Removed,
}

/// Watches the Waybar configuration files for edits made outside the editor.
///
/// Bridges the notify backend into an async channel: the returned receiver
/// yields one [`FileEvent`] per observed change, which the editor can use to
/// offer reloading a config changed behind its back.
pub struct FileWatcher {
    watcher: RecommendedWatcher,
    watched: HashSet<PathBuf>,
}

impl FileWatcher {
    /// Creates the watcher together with its event receiver.
    ///
    /// # Errors
    /// Returns [`GatewayError::Environment`] if the platform watcher cannot
    /// be initialized.
    pub fn new() -> Result<(Self, mpsc::UnboundedReceiver<FileEvent>), GatewayError> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let watcher = recommended_watcher(move |result: notify::Result<Event>| {
            let Ok(event) = result else {
                return;
            };

            let kind = match event.kind {
                EventKind::Create(_) => FileEventKind::Created,
                EventKind::Modify(_) => FileEventKind::Modified,
                EventKind::Remove(_) => FileEventKind::Removed,
                _ => return,
            };

            for path in event.paths {
                let _ = event_tx.send(FileEvent { path, kind });
            }
        })
        .map_err(|e| GatewayError::Environment {
            details: format!("failed to initialize file watcher: {e}"),
        })?;

        Ok((
            Self {
                watcher,
                watched: HashSet::new(),
            },
            event_rx,
        ))
    }

    /// Starts watching a file; watching the same file twice is a no-op.
    ///
    /// # Errors
    /// Returns [`GatewayError::Io`] if the path cannot be canonicalized or
    /// registered with the backend.
    pub fn watch(&mut self, path: impl AsRef<Path>) -> Result<(), GatewayError> {
        let path = path.as_ref();
        let canonical = path
            .canonicalize()
            .map_err(|e| GatewayError::from_io(path, &e))?;

        if self.watched.contains(&canonical) {
            return Ok(());
        }

        self.watcher
            .watch(&canonical, notify::RecursiveMode::NonRecursive)
            .map_err(|e| GatewayError::Io {
                path: canonical.clone(),
                details: e.to_string(),
            })?;

        self.watched.insert(canonical);
        Ok(())
    }

    /// Wraps the raw event receiver into an async stream.
    pub fn into_stream(
        receiver: mpsc::UnboundedReceiver<FileEvent>,
    ) -> impl Stream<Item = FileEvent> {
        UnboundedReceiverStream::new(receiver)
    }

    /// Stops watching a file; unknown files are ignored.
    ///
    /// # Errors
    /// Returns [`GatewayError::Io`] if the backend fails to release the
    /// watch.
    pub fn unwatch(&mut self, path: impl AsRef<Path>) -> Result<(), GatewayError> {
        let path = path.as_ref();
        let canonical = path
            .canonicalize()
            .map_err(|e| GatewayError::from_io(path, &e))?;

        if self.watched.remove(&canonical) {
            self.watcher
                .unwatch(&canonical)
                .map_err(|e| GatewayError::Io {
                    path: canonical,
                    details: e.to_string(),
                })?;
        }

        Ok(())
    }
}
