//! The operations markit offers, run against a [`Host`].
//!
//! Each command reads the document from the host, computes its result with the pure document
//! logic, hands it back, and reports the outcome as a [`Notice`]. `None` means there was no
//! document to work on, which is not worth telling anyone about.

use crate::assign::add_default_block_ids;
use crate::block_id::IdKind;
use crate::block_starts::block_start_pattern;
use crate::formatter::{format_document, formatting_plan};
use crate::host::Host;
use crate::snippet::next_block_id;
use std::fmt;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Severity of a notice.
pub enum NoticeLevel {
    /// Informational.
    Info,
    /// The requested operation failed.
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A message for the user about how a command went.
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Human-readable text.
    pub message: String,
}

impl Notice {
    /// Informational notice.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    /// Error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Whether this reports a failure.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            NoticeLevel::Info => f.write_str(&self.message),
            NoticeLevel::Error => write!(f, "error: {}", self.message),
        }
    }
}

/// Tag every untagged block of the active document.
pub fn add_block_ids(host: &mut impl Host) -> Option<Notice> {
    let text = host.document_text()?;
    let plan = add_default_block_ids(&text);
    if plan.is_empty() {
        return Some(Notice::info("All blocks already have IDs"));
    }
    Some(match host.apply_edits(&plan) {
        Ok(()) => Notice::info(format!("Added IDs to {} block(s)", plan.len())),
        Err(e) => {
            warn!(error = %e, "adding block IDs failed");
            Notice::error("Failed to add block IDs")
        }
    })
}

/// Rewrite the active document in canonical layout.
pub fn format(host: &mut impl Host) -> Option<Notice> {
    let text = host.document_text()?;
    if format_document(&text) == text {
        return Some(Notice::info("Document already formatted"));
    }
    Some(match host.apply_edits(&formatting_plan(&text)) {
        Ok(()) => Notice::info("Formatted document"),
        Err(e) => {
            warn!(error = %e, "formatting failed");
            Notice::error("Failed to format document")
        }
    })
}

/// Offer the next identifier of `kind` at the cursor.
pub fn insert_next_block_id(host: &mut impl Host, kind: IdKind) -> Option<Notice> {
    let text = host.document_text()?;
    let snippet = next_block_id(&text, kind);
    match host.insert_snippet(&snippet) {
        Ok(()) => None,
        Err(e) => {
            warn!(error = %e, %kind, "inserting block ID failed");
            Some(Notice::error("Failed to insert block ID"))
        }
    }
}

/// Copy a regex matching the start of every content block to the clipboard.
pub fn copy_block_start_pattern(host: &mut impl Host, prefix_chars: usize) -> Option<Notice> {
    let text = host.document_text()?;
    let Some(pattern) = block_start_pattern(&text, prefix_chars) else {
        return Some(Notice::info("No paragraph or footnote blocks found"));
    };
    Some(match host.write_clipboard(&pattern) {
        Ok(()) => Notice::info("Regex pattern for block starts copied to clipboard"),
        Err(e) => {
            warn!(error = %e, "copying block start pattern failed");
            Notice::error("Failed to copy block start pattern")
        }
    })
}

#[cfg(test)]
#[path = "tests/commands.rs"]
mod tests;
