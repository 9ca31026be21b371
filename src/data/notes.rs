//! Session-scoped note storage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::extract::extract_text;
use super::loader::{load_note, NoteError};

/// An uploaded file kept in memory for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    name: String,
    bytes: Vec<u8>,
}

impl Note {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Plain text of the note, with RTF markup stripped.
    pub fn text(&self) -> String {
        extract_text(&self.bytes)
    }
}

/// In-memory notes keyed by file name. Nothing is persisted.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: BTreeMap<String, Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores notes, replacing any with the same name. Returns the stored names.
    pub fn save(&mut self, notes: Vec<Note>) -> Vec<String> {
        notes
            .into_iter()
            .map(|note| {
                let name = note.name.clone();
                self.notes.insert(name.clone(), note);
                name
            })
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&Note> {
        self.notes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.notes.contains_key(name)
    }

    pub fn delete(&mut self, name: &str) -> Result<Note, NoteError> {
        self.notes
            .remove(name)
            .ok_or_else(|| NoteError::NotFound(name.to_string()))
    }

    /// Extracted text of a saved note.
    pub fn view(&self, name: &str) -> Result<String, NoteError> {
        self.get(name)
            .map(Note::text)
            .ok_or_else(|| NoteError::NotFound(name.to_string()))
    }

    /// Notes in name order.
    pub fn list(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    pub fn names(&self) -> Vec<String> {
        self.notes.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }

    /// Resolves a generation source: a saved note by name, otherwise a file
    /// on disk that will be read without saving it.
    pub fn resolve(&self, source: &str) -> Result<Source, NoteError> {
        let source = source.trim();
        if source.is_empty() {
            return Err(NoteError::MissingSource);
        }
        if let Some(note) = self.get(source) {
            return Ok(Source::Text(note.text()));
        }
        let path = Path::new(source);
        if path.is_file() {
            return Ok(Source::File(path.to_path_buf()));
        }
        Err(NoteError::MissingSource)
    }
}

/// Where the text for a generation comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Text of a saved note.
    Text(String),
    /// An unsaved file, read when the request runs.
    File(PathBuf),
}

impl Source {
    pub async fn into_text(self) -> Result<String, NoteError> {
        match self {
            Source::Text(text) => Ok(text),
            Source::File(path) => Ok(load_note(path).await?.text()),
        }
    }
}
