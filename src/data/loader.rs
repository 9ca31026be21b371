use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::debug;

use super::notes::Note;

/// Errors raised while reading note files or resolving note sources.
#[derive(Debug, Error)]
pub enum NoteError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The path has no usable file name to store the note under.
    #[error("{} has no file name", .0.display())]
    InvalidName(PathBuf),
    /// Save was requested without any files.
    #[error("Select at least one file to save.")]
    NoFiles,
    /// No saved note has this name.
    #[error("Note not found: {0}")]
    NotFound(String),
    /// Neither a saved note nor a readable file was given.
    #[error("Select or upload a file.")]
    MissingSource,
}

/// Reads a single note from disk.
pub async fn load_note<P: AsRef<Path>>(path: P) -> Result<Note, NoteError> {
    let path = path.as_ref();

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| NoteError::InvalidName(path.to_path_buf()))?;

    let bytes = fs::read(path).await.map_err(|source| NoteError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(name = %name, size = bytes.len(), "loaded note");
    Ok(Note::new(name, bytes))
}

/// Reads every path, failing on the first unreadable file.
pub async fn load_notes<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Note>, NoteError> {
    if paths.is_empty() {
        return Err(NoteError::NoFiles);
    }

    let mut notes = Vec::with_capacity(paths.len());
    for path in paths {
        notes.push(load_note(path).await?);
    }
    Ok(notes)
}
