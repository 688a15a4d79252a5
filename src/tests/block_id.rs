use super::{classify, tag_len, BlockId, Counter, IdKind};

#[test]
fn test_title() {
    assert_eq!(classify("{title}\nMy Title"), BlockId::Title);
    assert_eq!(classify("{title,lang=en}\nMein Titel"), BlockId::Title);
}

#[test]
fn test_numeric_paragraph_and_footnote() {
    assert_eq!(
        classify("{#12} Some text"),
        BlockId::Numeric {
            kind: IdKind::Paragraph,
            value: 12
        }
    );
    assert_eq!(
        classify("{#n3} A footnote"),
        BlockId::Numeric {
            kind: IdKind::Footnote,
            value: 3
        }
    );
    assert_eq!(
        classify("{#0}\tTabbed"),
        BlockId::Numeric {
            kind: IdKind::Paragraph,
            value: 0
        }
    );
}

#[test]
fn test_leading_whitespace_is_ignored() {
    assert_eq!(
        classify("\n  {#2} text"),
        BlockId::Numeric {
            kind: IdKind::Paragraph,
            value: 2
        }
    );
}

#[test]
fn test_numeric_tag_needs_following_whitespace() {
    assert_eq!(classify("{#5}text"), BlockId::Custom);
    assert_eq!(classify("{#5}"), BlockId::Custom);
}

#[test]
fn test_custom_identifiers_are_present_but_not_numeric() {
    assert_eq!(classify("{#5,lang=de} Text"), BlockId::Custom);
    assert_eq!(classify("{#intro} Text"), BlockId::Custom);
    assert_eq!(classify("{#1.2} Text"), BlockId::Custom);
    assert_eq!(classify("{#n2,a=b,c=d} Text"), BlockId::Custom);
    assert!(classify("{#intro} Text").is_present());
}

#[test]
fn test_not_an_identifier() {
    assert_eq!(classify("Plain paragraph"), BlockId::None);
    assert_eq!(classify("{#} empty"), BlockId::None);
    assert_eq!(classify("{foo} text"), BlockId::None);
    assert_eq!(classify("{#5,lang} missing value"), BlockId::None);
    assert_eq!(classify("{#5,=x} missing key"), BlockId::None);
    assert_eq!(classify("{#5 unterminated"), BlockId::None);
    assert_eq!(classify("{#Upper} text"), BlockId::None);
    assert_eq!(classify("{titles} text"), BlockId::None);
    assert_eq!(classify(""), BlockId::None);
    assert!(!classify("Plain").is_present());
}

#[test]
fn test_tag_len() {
    assert_eq!(tag_len("{#n12,a=b} rest"), Some(10));
    assert_eq!(tag_len("{title}\nTitle"), Some(7));
    assert_eq!(tag_len("no tag"), None);
}

#[test]
fn test_kind_tags() {
    assert_eq!(IdKind::Paragraph.tag(7), "{#7}");
    assert_eq!(IdKind::Footnote.tag(7), "{#n7}");
    assert_eq!(IdKind::Footnote.to_string(), "footnote");
}

#[test]
fn test_counter_issues_sequential_paragraphs() {
    let counter = Counter::default();
    let (first, counter) = counter.issue();
    let (second, counter) = counter.issue();

    assert_eq!(first, "{#1}");
    assert_eq!(second, "{#2}");
    assert_eq!(counter.next_number, 3);
    assert!(!counter.footnote_mode);
}

#[test]
fn test_counter_footnote_latch_is_one_way() {
    let counter = Counter::default().observe(IdKind::Footnote, 5);
    assert_eq!(counter.next_number, 6);
    assert_eq!(counter.kind(), IdKind::Footnote);

    let counter = counter.observe(IdKind::Paragraph, 9);
    assert_eq!(counter.next_number, 10);
    assert!(counter.footnote_mode, "paragraph tags never switch back");

    let (tag, _) = counter.issue();
    assert_eq!(tag, "{#n10}");
}

#[test]
fn test_counter_follows_existing_numbers_down() {
    let counter = Counter::default().observe(IdKind::Paragraph, 10);
    let counter = counter.observe(IdKind::Paragraph, 2);

    assert_eq!(counter.next_number, 3);
}
