//! Recognising block identifiers and deciding which identifier comes next.
//!
//! Identifiers are `{...}` tags at the very start of a block:
//!
//! ```text
//! {title}            the title block
//! {#12} text         paragraph 12
//! {#n3} text         footnote 3
//! {#intro,lang=de}   anything else the tag grammar accepts
//! ```
//!
//! Only the first three affect numbering. Everything else that parses as a tag still counts as
//! "has an identifier" so nothing gets tagged twice.

use std::fmt;

/// The literal title tag.
pub const TITLE_TAG: &str = "{title}";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Style of a numeric identifier.
pub enum IdKind {
    /// `{#N}`
    Paragraph,
    /// `{#nN}`
    Footnote,
}

impl IdKind {
    /// Letter placed between `#` and the number.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Paragraph => "",
            Self::Footnote => "n",
        }
    }

    /// Render the tag for `value`, e.g. `{#n4}`.
    #[must_use]
    pub fn tag(self, value: u64) -> String {
        format!("{{#{}{value}}}", self.prefix())
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paragraph => f.write_str("paragraph"),
            Self::Footnote => f.write_str("footnote"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What sits at the start of a block.
pub enum BlockId {
    /// No tag.
    None,
    /// `{title}`, optionally with attributes.
    Title,
    /// A plain numeric tag followed by whitespace.
    Numeric {
        /// Paragraph or footnote style.
        kind: IdKind,
        /// The number inside the tag.
        value: u64,
    },
    /// Any other well-formed tag; never touches the counter.
    Custom,
}

impl BlockId {
    /// Whether the block already carries some identifier.
    #[must_use]
    pub fn is_present(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// A leading `{...}` tag as accepted by the identifier grammar.
struct Tag<'a> {
    name: &'a str,
    has_attributes: bool,
    len: usize,
}

/// Classify the identifier at the start of `text` (leading whitespace ignored).
#[must_use]
pub fn classify(text: &str) -> BlockId {
    let text = text.trim_start();
    let Some(tag) = parse_tag(text) else {
        return BlockId::None;
    };

    if tag.name == "title" {
        return BlockId::Title;
    }

    let followed_by_space = text[tag.len..]
        .chars()
        .next()
        .is_some_and(char::is_whitespace);
    if tag.has_attributes || !followed_by_space {
        return BlockId::Custom;
    }

    numeric(tag.name).map_or(BlockId::Custom, |(kind, value)| BlockId::Numeric {
        kind,
        value,
    })
}

/// Byte length of the leading tag of `text`, if it has one.
#[must_use]
pub fn tag_len(text: &str) -> Option<usize> {
    parse_tag(text).map(|tag| tag.len)
}

fn numeric(name: &str) -> Option<(IdKind, u64)> {
    let digits = name.strip_prefix('#')?;
    let (kind, digits) = match digits.strip_prefix('n') {
        Some(rest) => (IdKind::Footnote, rest),
        None => (IdKind::Paragraph, digits),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().map(|value| (kind, value))
}

/// `{` (`title` | `#[a-z0-9.]+`) (`,key=value`)* `}`
fn parse_tag(text: &str) -> Option<Tag<'_>> {
    let inner = text.strip_prefix('{')?;

    let name_len = if inner.starts_with("title") {
        "title".len()
    } else if let Some(rest) = inner.strip_prefix('#') {
        let id_len = rest
            .bytes()
            .take_while(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'.')
            .count();
        if id_len == 0 {
            return None;
        }
        1 + id_len
    } else {
        return None;
    };

    let name = &inner[..name_len];
    let mut rest = &inner[name_len..];
    let mut has_attributes = false;

    while let Some(attr) = rest.strip_prefix(',') {
        let key_len = attr.find(['=', ',', '}'])?;
        if key_len == 0 || !attr[key_len..].starts_with('=') {
            return None;
        }
        let value = &attr[key_len + 1..];
        let value_len = value.find([',', '}'])?;
        if value_len == 0 {
            return None;
        }
        rest = &value[value_len..];
        has_attributes = true;
    }

    rest.strip_prefix('}')?;
    Some(Tag {
        name,
        has_attributes,
        len: text.len() - rest.len() + 1,
    })
}

/// Running numbering state of the identifier pass.
///
/// One counter is shared by paragraphs and footnotes. The first footnote seen switches every
/// later generated identifier to footnote style, and it never switches back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counter {
    /// Number the next generated identifier receives.
    pub next_number: u64,
    /// Whether generated identifiers are footnotes.
    pub footnote_mode: bool,
}

impl Default for Counter {
    fn default() -> Self {
        Self {
            next_number: 1,
            footnote_mode: false,
        }
    }
}

impl Counter {
    /// Style the next generated identifier takes.
    #[must_use]
    pub fn kind(self) -> IdKind {
        if self.footnote_mode {
            IdKind::Footnote
        } else {
            IdKind::Paragraph
        }
    }

    /// Continue numbering after an identifier already present in the document.
    #[must_use]
    pub fn observe(self, kind: IdKind, value: u64) -> Self {
        Self {
            next_number: value.saturating_add(1),
            footnote_mode: self.footnote_mode || kind == IdKind::Footnote,
        }
    }

    /// Produce the next tag and the state after it.
    #[must_use]
    pub fn issue(self) -> (String, Self) {
        let tag = self.kind().tag(self.next_number);
        let next = Self {
            next_number: self.next_number.saturating_add(1),
            ..self
        };
        (tag, next)
    }
}

#[cfg(test)]
#[path = "tests/block_id.rs"]
mod tests;
