//! Snippets for typing the next identifier by hand.
//!
//! Unlike the default-identifier pass, this looks at the whole document at once: the snippet
//! proposes one more than the highest number already used for the requested kind, as an editable
//! `${1:N}` placeholder.

use crate::block_id::{IdKind, TITLE_TAG};
use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{#(n?)(\d+)\}").expect("Invalid numeric tag regex"));

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{\d+:([^}]*)\}").expect("Invalid placeholder regex"));

/// Highest number used by tags of `kind` anywhere in `text`.
#[must_use]
pub fn highest_id(text: &str, kind: IdKind) -> Option<u64> {
    NUMERIC_TAG
        .captures_iter(text)
        .filter(|caps| &caps[1] == kind.prefix())
        .filter_map(|caps| caps[2].parse().ok())
        .max()
}

/// Snippet text for the next identifier of `kind`.
///
/// A document with no identifiers at all gets the title tag instead, which has no placeholder.
#[must_use]
pub fn next_block_id(text: &str, kind: IdKind) -> String {
    let untagged = !text.contains(TITLE_TAG) && !NUMERIC_TAG.is_match(text);
    if untagged {
        return format!("{TITLE_TAG}\n");
    }
    let next = highest_id(text, kind).unwrap_or(0).saturating_add(1);
    format!("{{#{}${{1:{next}}}}} ", kind.prefix())
}

/// Replace every `${k:default}` placeholder with its default.
#[must_use]
pub fn expand_placeholders(snippet: &str) -> String {
    PLACEHOLDER.replace_all(snippet, "${1}").into_owned()
}

#[cfg(test)]
#[path = "tests/snippet.rs"]
mod tests;
