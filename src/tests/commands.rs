use super::{add_block_ids, copy_block_start_pattern, format, insert_next_block_id, Notice};
use crate::block_id::IdKind;
use crate::edit_plan::EditPlan;
use crate::error::{Error, Result};
use crate::host::Host;

#[derive(Default)]
struct MockHost {
    text: Option<String>,
    reject: bool,
    clipboard: Option<String>,
    snippets: Vec<String>,
}

impl MockHost {
    fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::default()
        }
    }

    fn rejecting(text: &str) -> Self {
        Self {
            reject: true,
            ..Self::with_text(text)
        }
    }
}

impl Host for MockHost {
    fn document_text(&mut self) -> Option<String> {
        self.text.clone()
    }

    fn apply_edits(&mut self, plan: &EditPlan) -> Result<()> {
        if self.reject {
            return Err(Error::StaleDocument("mock".to_string()));
        }
        let text = self.text.as_deref().unwrap_or_default();
        self.text = Some(plan.apply(text)?);
        Ok(())
    }

    fn write_clipboard(&mut self, text: &str) -> Result<()> {
        if self.reject {
            return Err(Error::NoCursor);
        }
        self.clipboard = Some(text.to_string());
        Ok(())
    }

    fn insert_snippet(&mut self, snippet: &str) -> Result<()> {
        if self.reject {
            return Err(Error::NoCursor);
        }
        self.snippets.push(snippet.to_string());
        Ok(())
    }
}

#[test]
fn test_no_document_means_no_notice() {
    let mut host = MockHost::default();

    assert_eq!(add_block_ids(&mut host), None);
    assert_eq!(format(&mut host), None);
    assert_eq!(insert_next_block_id(&mut host, IdKind::Paragraph), None);
    assert_eq!(copy_block_start_pattern(&mut host, 25), None);
    assert!(host.snippets.is_empty());
}

#[test]
fn test_add_block_ids_reports_count() {
    let mut host = MockHost::with_text("Title\n\nA\n\nB");

    assert_eq!(
        add_block_ids(&mut host),
        Some(Notice::info("Added IDs to 3 block(s)"))
    );
    assert_eq!(
        host.text.as_deref(),
        Some("{title}\nTitle\n\n{#1} A\n\n{#2} B")
    );
}

#[test]
fn test_add_block_ids_when_complete() {
    let mut host = MockHost::with_text("{title}\nT\n\n{#1} A");

    assert_eq!(
        add_block_ids(&mut host),
        Some(Notice::info("All blocks already have IDs"))
    );
}

#[test]
fn test_add_block_ids_failure() {
    let mut host = MockHost::rejecting("Title\n\nA");
    let notice = add_block_ids(&mut host).unwrap();

    assert!(notice.is_error());
    assert_eq!(notice.to_string(), "error: Failed to add block IDs");
    assert_eq!(host.text.as_deref(), Some("Title\n\nA"));
}

#[test]
fn test_format_rewrites_document() {
    let mut host = MockHost::with_text("{title}   T\n\n\n\nA  b");

    assert_eq!(format(&mut host), Some(Notice::info("Formatted document")));
    assert_eq!(host.text.as_deref(), Some("{title}\nT\n\nA b\n"));
    assert_eq!(
        format(&mut host),
        Some(Notice::info("Document already formatted"))
    );
}

#[test]
fn test_format_failure() {
    let mut host = MockHost::rejecting("A  b");

    assert_eq!(
        format(&mut host),
        Some(Notice::error("Failed to format document"))
    );
}

#[test]
fn test_insert_next_block_id_is_silent() {
    let mut host = MockHost::with_text("{title}\nT\n\n{#2} A\n\n{#n1} F");

    assert_eq!(insert_next_block_id(&mut host, IdKind::Paragraph), None);
    assert_eq!(insert_next_block_id(&mut host, IdKind::Footnote), None);
    assert_eq!(host.snippets, vec!["{#${1:3}} ", "{#n${1:2}} "]);
}

#[test]
fn test_insert_next_block_id_failure() {
    let mut host = MockHost::rejecting("{title}\nT");

    assert_eq!(
        insert_next_block_id(&mut host, IdKind::Paragraph),
        Some(Notice::error("Failed to insert block ID"))
    );
}

#[test]
fn test_copy_block_start_pattern() {
    let mut host = MockHost::with_text("{title}\nT\n\n{#1} Hello (world)");

    assert_eq!(
        copy_block_start_pattern(&mut host, 25),
        Some(Notice::info(
            "Regex pattern for block starts copied to clipboard"
        ))
    );
    assert_eq!(host.clipboard.as_deref(), Some(r"Hello \(world\)"));
}

#[test]
fn test_copy_block_start_pattern_without_blocks() {
    let mut host = MockHost::with_text("{title}\nOnly title");

    assert_eq!(
        copy_block_start_pattern(&mut host, 25),
        Some(Notice::info("No paragraph or footnote blocks found"))
    );
    assert_eq!(host.clipboard, None);
}

#[test]
fn test_copy_block_start_pattern_failure() {
    let mut host = MockHost::rejecting("{title}\nT\n\n{#1} A");

    assert_eq!(
        copy_block_start_pattern(&mut host, 25),
        Some(Notice::error("Failed to copy block start pattern"))
    );
}
