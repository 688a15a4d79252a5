//! Splitting markit text into its metadata header and content blocks.
//!
//! A document may open with a `---` fenced header, which is kept verbatim. The remainder (the
//! body) is a sequence of blocks separated by blank lines: any run of two or more newlines is one
//! separator. Blocks borrow from the original text and remember their byte offset in the body, so
//! edits computed against them land at the right place in the untouched document.

const HEADER_OPEN: &str = "---\n";
const HEADER_CLOSE: &str = "\n---\n";

/// A unit of body content delimited by blank lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block<'a> {
    /// Raw block text, leading and trailing whitespace included.
    pub text: &'a str,
    /// Byte offset of the block within the body (the text after the header).
    pub offset: usize,
    /// Position of the block in the body; index 0 is where the title lives.
    pub index: usize,
}

impl Block<'_> {
    /// Byte length of the raw block text.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the block has no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the block holds nothing but whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A parsed document: opaque header, body text and the blocks of the body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document<'a> {
    /// Header including both `---` fences and their newlines, or empty.
    pub header: &'a str,
    /// Everything after the header.
    pub body: &'a str,
    /// Blocks of the body in document order.
    pub blocks: Vec<Block<'a>>,
}

impl Document<'_> {
    /// Byte offset of a block's first character in the full document.
    #[must_use]
    pub fn document_offset(&self, block: &Block<'_>) -> usize {
        self.header.len() + block.offset
    }

    /// Rebuild the text from the header and blocks using canonical `\n\n` separators.
    #[must_use]
    pub fn reassemble(&self) -> String {
        let mut out = String::with_capacity(self.header.len() + self.body.len());
        out.push_str(self.header);
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                out.push_str("\n\n");
            }
            out.push_str(block.text);
        }
        out
    }
}

/// Split raw document text into header and blocks.
///
/// The header is recognised only when the text begins with `---\n` and a later `\n---\n`
/// closes it; the shortest such region wins. Without one the whole text is body. An empty body
/// has no blocks.
#[must_use]
pub fn parse(text: &str) -> Document<'_> {
    let (header, body) = text.split_at(header_len(text));
    Document {
        header,
        body,
        blocks: split_blocks(body),
    }
}

fn header_len(text: &str) -> usize {
    let Some(rest) = text.strip_prefix(HEADER_OPEN) else {
        return 0;
    };
    rest.find(HEADER_CLOSE)
        .map_or(0, |end| HEADER_OPEN.len() + end + HEADER_CLOSE.len())
}

fn split_blocks(body: &str) -> Vec<Block<'_>> {
    if body.is_empty() {
        return Vec::new();
    }

    let bytes = body.as_bytes();
    let mut blocks = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\n' {
            i += 1;
            continue;
        }
        let run = bytes[i..].iter().take_while(|&&b| b == b'\n').count();
        if run >= 2 {
            blocks.push(Block {
                text: &body[start..i],
                offset: start,
                index: blocks.len(),
            });
            start = i + run;
        }
        i += run;
    }

    blocks.push(Block {
        text: &body[start..],
        offset: start,
        index: blocks.len(),
    });
    blocks
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
