//! Adding default identifiers to every block that lacks one.
//!
//! A single left-to-right fold over the blocks carries a [`Counter`]. Existing numeric tags move
//! the counter forward (and may latch footnote mode), untagged blocks receive the next tag, and the
//! first block gets `{title}` instead of a number. The result is an insertion-only [`EditPlan`]
//! against the original text.

use crate::block_id::{classify, BlockId, Counter, TITLE_TAG};
use crate::document::{parse, Block, Document};
use crate::edit_plan::{Edit, EditPlan};
use tracing::debug;

/// What the pass decided for one block.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Keep,
    Insert(String),
}

/// Plan the identifier insertions for raw document text.
#[must_use]
pub fn add_default_block_ids(text: &str) -> EditPlan {
    plan_for(&parse(text))
}

/// Plan the identifier insertions for an already parsed document.
#[must_use]
pub fn plan_for(document: &Document<'_>) -> EditPlan {
    let (edits, counter) = document.blocks.iter().fold(
        (Vec::new(), Counter::default()),
        |(mut edits, counter), block| {
            let (step, counter) = step(block, counter);
            if let Step::Insert(text) = step {
                edits.push(Edit::Insert {
                    offset: content_offset(document, block),
                    text,
                });
            }
            (edits, counter)
        },
    );
    debug!(
        blocks = document.blocks.len(),
        inserted = edits.len(),
        next_number = counter.next_number,
        footnote_mode = counter.footnote_mode,
        "identifier pass finished"
    );
    EditPlan { edits }
}

/// Offset of the block's first non-whitespace character in the full document.
fn content_offset(document: &Document<'_>, block: &Block<'_>) -> usize {
    let leading = block.len() - block.text.trim_start().len();
    document.document_offset(block) + leading
}

fn step(block: &Block<'_>, counter: Counter) -> (Step, Counter) {
    if block.is_blank() {
        return (Step::Keep, counter);
    }

    match classify(block.text) {
        BlockId::Numeric { kind, value } => (Step::Keep, counter.observe(kind, value)),
        BlockId::Title | BlockId::Custom => (Step::Keep, counter),
        BlockId::None if block.index == 0 => (Step::Insert(format!("{TITLE_TAG}\n")), counter),
        BlockId::None => {
            let (tag, counter) = counter.issue();
            (Step::Insert(format!("{tag} ")), counter)
        }
    }
}

#[cfg(test)]
#[path = "tests/assign.rs"]
mod tests;
