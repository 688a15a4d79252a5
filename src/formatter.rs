//! Canonical layout for markit blocks.
//!
//! Each block is flattened to a single line and then broken again only where the markup asks for
//! it: after `{title}`, after each `£N ... £N` heading, around `""` quotations (which are indented
//! by four spaces) and after every `//` line-break marker. The header is copied through untouched.
//!
//! Formatting the output again yields the same text. To keep it that way, every decision is made
//! on text whose spacing the formatter itself controls: `//` markers are always surrounded by one
//! space, and headings are recognised within a single plain run or quotation, never across a `""`.

use crate::block_id::TITLE_TAG;
use crate::document::parse;
use crate::edit_plan::{Edit, EditPlan};

const QUOTE: &str = "\"\"";
const LINE_BREAK: &str = "//";
const QUOTE_INDENT: &str = "    ";
const HEADING_SIGIL: char = '£';

/// Reformat a whole document.
///
/// Blocks that format to nothing are dropped, so a blank leading block no longer takes the title
/// position and the next block moves up to index 0.
#[must_use]
pub fn format_document(text: &str) -> String {
    let document = parse(text);
    let blocks: Vec<String> = document
        .blocks
        .iter()
        .map(|block| format_block(block.text))
        .filter(|block| !block.is_empty())
        .collect();

    let mut out = String::with_capacity(text.len());
    out.push_str(document.header);
    out.push_str(&blocks.join("\n\n"));
    out.push('\n');
    out
}

/// A plan replacing the whole document with its formatted text.
#[must_use]
pub fn formatting_plan(text: &str) -> EditPlan {
    EditPlan {
        edits: vec![Edit::Replace {
            start: 0,
            end: text.len(),
            text: format_document(text),
        }],
    }
}

/// Reformat the raw text of one block.
#[must_use]
pub fn format_block(raw: &str) -> String {
    let flat = flatten(raw);
    layout(&break_after_title(&flat))
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Tabs and newlines become spaces, `//` gets a space either side, space runs collapse, ends are
/// trimmed.
fn flatten(raw: &str) -> String {
    let spaced = raw
        .replace(['\t', '\n'], " ")
        .replace(LINE_BREAK, &format!(" {LINE_BREAK} "));
    let mut out = String::with_capacity(spaced.len());
    for c in spaced.chars() {
        if c == ' ' && out.ends_with(' ') {
            continue;
        }
        out.push(c);
    }
    out.trim().to_string()
}

fn break_after_title(text: &str) -> String {
    let Some(rest) = text.strip_prefix(TITLE_TAG) else {
        return text.to_string();
    };
    let body = rest.trim_start();
    if body.len() == rest.len() {
        return text.to_string();
    }
    format!("{TITLE_TAG}\n{body}")
}

fn break_after_headings(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(HEADING_SIGIL) {
        out.push_str(&rest[..pos]);
        let candidate = &rest[pos..];
        if let Some((heading, consumed)) = match_heading(candidate) {
            out.push_str(&heading);
            rest = &candidate[consumed..];
        } else {
            out.push(HEADING_SIGIL);
            rest = &candidate[HEADING_SIGIL.len_utf8()..];
        }
    }
    out.push_str(rest);
    out
}

/// Match `£N <ws> text <ws> £N <ws>` at the start of `text`, taking the shortest heading text.
///
/// Returns the normalised heading line and the number of bytes it replaces.
fn match_heading(text: &str) -> Option<(String, usize)> {
    let level = text
        .strip_prefix(HEADING_SIGIL)?
        .chars()
        .next()
        .filter(|c| ('1'..='6').contains(c))?;
    let marker = format!("{HEADING_SIGIL}{level}");

    let opening_space = leading_whitespace(&text[marker.len()..]);
    if opening_space == 0 {
        return None;
    }
    let content_start = marker.len() + opening_space;

    let mut search_from = content_start;
    loop {
        let close = search_from + text[search_from..].find(&marker)?;
        let content = &text[content_start..close];
        if content.contains('\n') {
            return None;
        }
        let heading = content.trim_end();
        let after = close + marker.len();
        let closing_space = leading_whitespace(&text[after..]);
        if heading.len() < content.len() && closing_space > 0 {
            return Some((format!("{marker} {heading} {marker}\n"), after + closing_space));
        }
        search_from = after;
    }
}

fn leading_whitespace(text: &str) -> usize {
    text.len() - text.trim_start().len()
}

/// Lay out plain runs and quotations, one piece per line group.
///
/// `""` markers pair up in order of appearance. An opening marker without a partner leaves the
/// rest of the block as plain text.
fn layout(text: &str) -> String {
    let markers: Vec<usize> = text.match_indices(QUOTE).map(|(i, _)| i).collect();
    let mut pieces = Vec::new();
    let mut pos = 0;

    for pair in markers.chunks(2) {
        let open = pair[0];
        push_plain(&mut pieces, &text[pos..open]);
        if let Some(&close) = pair.get(1) {
            pieces.push(quotation(&text[open + QUOTE.len()..close]));
            pos = close + QUOTE.len();
        } else {
            pos = open;
        }
    }
    push_plain(&mut pieces, &text[pos..]);

    pieces.join("\n")
}

fn push_plain(pieces: &mut Vec<String>, segment: &str) {
    let segment = segment.trim();
    if !segment.is_empty() {
        let broken = split_breaks(&break_after_headings(segment), "");
        pieces.push(broken.trim_end().to_string());
    }
}

/// Wrap a quotation, keeping a space between a marker and a `"` inside it so the pair still
/// matches up the same way when formatted again.
fn quotation(content: &str) -> String {
    let body = split_breaks(&break_after_headings(content.trim()), QUOTE_INDENT);
    let lead = if body.starts_with('"') { " " } else { "" };
    let trail = if body.ends_with('"') { " " } else { "" };
    format!("{QUOTE_INDENT}{QUOTE}{lead}{body}{trail}{QUOTE}")
}

/// Put each `//` marker at the end of its line, continuing with `indent`.
fn split_breaks(text: &str, indent: &str) -> String {
    let separator = format!(" {LINE_BREAK}\n{indent}");
    text.split(LINE_BREAK)
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(&separator)
}

#[cfg(test)]
#[path = "tests/formatter.rs"]
mod tests;
