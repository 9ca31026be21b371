mod extract;
mod loader;
mod notes;
pub mod rtf;

pub use extract::extract_text;
pub use loader::{load_note, load_notes, NoteError};
pub use notes::{Note, NoteStore, Source};
