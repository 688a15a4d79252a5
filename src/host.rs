//! The editing host that markit commands run against.
//!
//! The document logic never touches files, clipboards or cursors itself. A [`Host`] supplies the
//! current text and carries out the results; [`FileHost`] is the implementation the command line
//! uses, backed by a file on disk and the system clipboard.

use crate::edit_plan::{Edit, EditPlan};
use crate::error::{Error, Result};
use crate::snippet::expand_placeholders;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Capabilities a command needs from the editing environment.
pub trait Host {
    /// Full text of the active document, or `None` when there is none.
    fn document_text(&mut self) -> Option<String>;

    /// Apply a batch of edits computed from the last text returned, all or nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch was rejected; the document is then unchanged.
    fn apply_edits(&mut self, plan: &EditPlan) -> Result<()>;

    /// Put text on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard is unavailable.
    fn write_clipboard(&mut self, text: &str) -> Result<()>;

    /// Insert a snippet (which may contain `${k:default}` placeholders) at the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if there is nowhere to insert it.
    fn insert_snippet(&mut self, snippet: &str) -> Result<()>;
}

/// A host editing one file on disk.
///
/// Applying edits re-reads the file and refuses the batch if it no longer matches the snapshot the
/// edits were computed from.
pub struct FileHost {
    path: PathBuf,
    snapshot: Option<String>,
    cursor: Option<usize>,
}

impl FileHost {
    /// Host for the file at `path`, with no cursor.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            snapshot: None,
            cursor: None,
        }
    }

    /// Place the cursor at a byte offset, for snippet insertion.
    #[must_use]
    pub fn with_cursor(mut self, offset: usize) -> Self {
        self.cursor = Some(offset);
        self
    }

    /// Path of the document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_checked(&mut self, plan: &EditPlan) -> Result<()> {
        let current = fs::read_to_string(&self.path)?;
        if self.snapshot.as_deref() != Some(current.as_str()) {
            return Err(Error::StaleDocument(self.path.display().to_string()));
        }
        self.snapshot = Some(plan.write_to(&self.path, &current)?);
        Ok(())
    }
}

impl Host for FileHost {
    fn document_text(&mut self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                self.snapshot = Some(text.clone());
                Some(text)
            }
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "no readable document");
                None
            }
        }
    }

    fn apply_edits(&mut self, plan: &EditPlan) -> Result<()> {
        match self.write_checked(plan) {
            Ok(()) => {
                info!(path = %self.path.display(), edits = plan.len(), "applied edit batch");
                Ok(())
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "rejected edit batch");
                Err(e)
            }
        }
    }

    fn write_clipboard(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_string())?;
        Ok(())
    }

    fn insert_snippet(&mut self, snippet: &str) -> Result<()> {
        let offset = self.cursor.ok_or(Error::NoCursor)?;
        if self.snapshot.is_none() {
            self.snapshot = Some(fs::read_to_string(&self.path)?);
        }
        let plan = EditPlan {
            edits: vec![Edit::Insert {
                offset,
                text: expand_placeholders(snippet),
            }],
        };
        self.apply_edits(&plan)
    }
}

#[cfg(test)]
#[path = "tests/host.rs"]
mod tests;
