//! The edit plan describes document modifications as a batch of text edits.
//!
//! Plans are computed from an immutable snapshot with byte offsets, which is how the document
//! logic slices text. They are applied as textum patches over character ranges: in memory against
//! a rope, or to a file through a `PatchSet`. Edits at the same offset are merged in plan order and
//! overlapping edits reject the whole batch, so a failed plan changes nothing.

use crate::error::{Error, Result};
use ropey::Rope;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use textum::{Boundary, BoundaryMode, Patch, PatchSet, Snippet, Target};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
/// A single change to a document snapshot.
pub enum Edit {
    /// Insert text before the byte at `offset`.
    Insert {
        /// Byte offset into the snapshot.
        offset: usize,
        /// Text to insert.
        text: String,
    },
    /// Replace the bytes in `start..end`.
    Replace {
        /// First byte replaced (inclusive).
        start: usize,
        /// End of the replaced range (exclusive).
        end: usize,
        /// Replacement text.
        text: String,
    },
}

impl Edit {
    /// Byte range of the snapshot this edit consumes (empty for insertions).
    #[must_use]
    pub fn range(&self) -> (usize, usize) {
        match self {
            Self::Insert { offset, .. } => (*offset, *offset),
            Self::Replace { start, end, .. } => (*start, *end),
        }
    }

    /// Text this edit puts in place of its range.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Insert { text, .. } | Self::Replace { text, .. } => text,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Serialisable batch of edits against one document snapshot.
pub struct EditPlan {
    /// Edits in document order.
    pub edits: Vec<Edit>,
}

/// A validated byte range of the snapshot and the text replacing it.
struct Span {
    start: usize,
    end: usize,
    text: String,
}

impl EditPlan {
    /// Whether the plan changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Number of edits in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Apply every edit to `text`, or none of them.
    ///
    /// Insertions at the same offset land in plan order.
    ///
    /// # Errors
    ///
    /// Returns an error if an edit falls outside the text, splits a UTF-8 character, or overlaps
    /// another edit. The input is left untouched in that case.
    pub fn apply(&self, text: &str) -> Result<String> {
        let mut rope = Rope::from_str(text);
        let patches = self.patches(text, &rope, "")?;
        for patch in patches.iter().rev() {
            patch.apply(&mut rope)?;
        }
        Ok(rope.to_string())
    }

    /// Apply the plan to the file at `path`, whose contents must be `snapshot`, and write it back.
    ///
    /// Returns the new file contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the plan is invalid for `snapshot`, if textum cannot resolve or apply a
    /// patch, or if the file cannot be read or written. The file is only written once every patch
    /// has applied.
    pub fn write_to(&self, path: &Path, snapshot: &str) -> Result<String> {
        let file = path.to_string_lossy().into_owned();
        let mut patchset = PatchSet::new();
        for patch in self.patches(snapshot, &Rope::from_str(snapshot), &file)? {
            patchset.add(patch);
        }

        let mut results = patchset.apply_to_files()?;
        let updated = results.remove(&file).unwrap_or_else(|| snapshot.to_string());
        fs::write(path, &updated)?;
        Ok(updated)
    }

    /// Build one textum patch per distinct position, sorted by position.
    fn patches(&self, text: &str, rope: &Rope, file: &str) -> Result<Vec<Patch>> {
        let len = rope.len_chars();
        Ok(self
            .spans(text)?
            .into_iter()
            .map(|span| Patch {
                file: file.to_string(),
                snippet: char_span(rope.byte_to_char(span.start), rope.byte_to_char(span.end), len),
                replacement: span.text,
            })
            .collect())
    }

    /// Check every edit against `text` and merge insertions sharing an offset.
    fn spans(&self, text: &str) -> Result<Vec<Span>> {
        let mut ordered: Vec<&Edit> = self.edits.iter().collect();
        ordered.sort_by_key(|edit| edit.range());

        let mut spans: Vec<Span> = Vec::with_capacity(ordered.len());
        for edit in ordered {
            let (start, end) = edit.range();
            for offset in [start, end] {
                if !text.is_char_boundary(offset) || end < start {
                    return Err(Error::InvalidOffset {
                        offset,
                        len: text.len(),
                    });
                }
            }
            match spans.last_mut() {
                Some(last) if last.start == start && last.end == start => {
                    last.end = end;
                    last.text.push_str(edit.text());
                }
                Some(last) if start < last.end => {
                    return Err(Error::OverlappingEdits { offset: start });
                }
                _ => spans.push(Span {
                    start,
                    end,
                    text: edit.text().to_string(),
                }),
            }
        }
        Ok(spans)
    }
}

/// Snippet covering characters `start..end` of a rope `len` characters long.
///
/// Both boundaries name characters at or before the range, so patches applied from the end of the
/// text backwards still resolve to the same place. `Target::Char` only names existing characters:
/// the end of the text is reached by excluding the last one, and an empty text is selected whole.
fn char_span(start: usize, end: usize, len: usize) -> Snippet {
    let Some(last) = len.checked_sub(1) else {
        return Snippet::All;
    };
    if start == len {
        return Snippet::From(Boundary::new(Target::Char(last), BoundaryMode::Exclude));
    }
    let end = if end > start {
        Boundary::new(Target::Char(end - 1), BoundaryMode::Include)
    } else {
        Boundary::new(Target::Char(start), BoundaryMode::Exclude)
    };
    Snippet::Between {
        start: Boundary::new(Target::Char(start), BoundaryMode::Include),
        end,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Line and column of an offset, both 0-based; the column counts characters.
pub struct Position {
    /// Line number.
    pub line: usize,
    /// Character within the line.
    pub character: usize,
}

/// Translate a byte offset into a line/character position.
///
/// Offsets past the end clamp to the end of the text; offsets inside a character count it as
/// not yet reached.
#[must_use]
pub fn position_at(text: &str, offset: usize) -> Position {
    let mut end = offset.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let rope = Rope::from_str(text);
    let char_idx = rope.byte_to_char(end);
    let line = rope.char_to_line(char_idx);
    Position {
        line,
        character: char_idx - rope.line_to_char(line),
    }
}

#[cfg(test)]
#[path = "tests/edit_plan.rs"]
mod tests;
