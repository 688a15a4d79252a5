//! A search pattern matching the opening words of every content block.
//!
//! Useful for locating the same paragraphs in another rendition of the document (a PDF, a
//! translation source) with an ordinary regex search.

use crate::block_id::{classify, BlockId};
use crate::document::{parse, Block, Document};
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters of each block kept in the pattern unless configured otherwise.
pub const DEFAULT_PREFIX_CHARS: usize = 25;

static METACHARACTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.*+?^${}()|\[\]\\]").expect("Invalid metacharacter regex"));

/// Build the alternation of escaped block openings for raw document text.
///
/// Returns `None` when no block besides the title has any text.
#[must_use]
pub fn block_start_pattern(text: &str, prefix_chars: usize) -> Option<String> {
    pattern_for(&parse(text), prefix_chars)
}

/// Build the alternation of escaped block openings for a parsed document.
#[must_use]
pub fn pattern_for(document: &Document<'_>, prefix_chars: usize) -> Option<String> {
    let starts: Vec<String> = document
        .blocks
        .iter()
        .filter(|block| !block.is_blank() && !is_title(block))
        .filter_map(|block| {
            let start: String = strip_identifier(block.text.trim())
                .chars()
                .take(prefix_chars)
                .collect();
            let start = start.trim();
            (!start.is_empty()).then(|| escape(start))
        })
        .collect();

    (!starts.is_empty()).then(|| starts.join("|"))
}

/// The tagged title, or an untagged first block that would become it.
fn is_title(block: &Block<'_>) -> bool {
    match classify(block.text) {
        BlockId::Title => true,
        BlockId::None => block.index == 0,
        BlockId::Numeric { .. } | BlockId::Custom => false,
    }
}

/// Backslash the characters that are special in both Rust and JavaScript regexes.
///
/// Hyphens and other punctuation stay literal, so the pattern also compiles as a unicode-mode
/// JavaScript regex.
fn escape(text: &str) -> String {
    METACHARACTERS.replace_all(text, r"\$0").into_owned()
}

/// Drop a leading `{...}` and the whitespace after it.
fn strip_identifier(text: &str) -> &str {
    if !text.starts_with('{') {
        return text;
    }
    text.find('}')
        .map_or(text, |close| text[close + 1..].trim_start())
}

#[cfg(test)]
#[path = "tests/block_starts.rs"]
mod tests;
