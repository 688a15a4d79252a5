//! Errors raised at the host boundary.
//!
//! The document logic itself never fails: malformed text falls back to a deterministic reading.
//! Everything here comes from applying edits, touching the filesystem or the clipboard.

use thiserror::Error;

/// Result type for markit host operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced when edits, files or the clipboard are involved.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing a document failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An edit plan could not be serialised.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The system clipboard refused the text.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// textum could not resolve or apply a patch.
    #[error("Patch error: {0}")]
    Patch(#[from] textum::PatchError),

    /// An edit points outside the text or splits a character.
    #[error("Edit at offset {offset} is outside the document (length {len})")]
    InvalidOffset {
        /// Offending byte offset.
        offset: usize,
        /// Length of the text the edit was checked against.
        len: usize,
    },

    /// Two edits in one batch touch the same region.
    #[error("Edits overlap at offset {offset}")]
    OverlappingEdits {
        /// Byte offset where the second edit starts.
        offset: usize,
    },

    /// The document changed between reading it and applying a batch.
    #[error("Document {0} changed since it was read")]
    StaleDocument(String),

    /// A snippet was requested without a cursor to anchor it.
    #[error("No cursor position to insert the snippet at")]
    NoCursor,
}
