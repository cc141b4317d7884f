use super::*;

fn text(s: &str) -> Inline {
    Inline::Text(s.to_owned())
}

// =============================================================
// Block splitting
// =============================================================

#[test]
fn heading_paragraph_becomes_heading() {
    assert_eq!(parse("### Heading"), vec![Block::Heading("Heading".to_owned())]);
}

#[test]
fn bullet_paragraph_becomes_two_item_list() {
    assert_eq!(
        parse("*   item one\n*   item two"),
        vec![Block::List(vec![vec![text("item one")], vec![text("item two")]])]
    );
}

#[test]
fn other_paragraphs_render_verbatim() {
    assert_eq!(
        parse("Just some prose.\nWith an inner newline."),
        vec![Block::Paragraph("Just some prose.\nWith an inner newline.".to_owned())]
    );
}

#[test]
fn blank_lines_separate_blocks() {
    let blocks = parse("Intro paragraph.\n\n### Key Features\n\n*   one\n*   two\n");
    assert_eq!(
        blocks,
        vec![
            Block::Paragraph("Intro paragraph.".to_owned()),
            Block::Heading("Key Features".to_owned()),
            Block::List(vec![vec![text("one")], vec![text("two")]]),
        ]
    );
}

#[test]
fn unmarked_markup_stays_literal() {
    // Only the two known markers are interpreted.
    assert_eq!(
        parse("## Not a heading"),
        vec![Block::Paragraph("## Not a heading".to_owned())]
    );
    assert_eq!(
        parse("- dashed bullets are not bullets"),
        vec![Block::Paragraph("- dashed bullets are not bullets".to_owned())]
    );
}

// =============================================================
// Inline spans
// =============================================================

#[test]
fn list_item_with_bold_span() {
    assert_eq!(
        parse("*   uses **linked lists** internally"),
        vec![Block::List(vec![vec![
            text("uses "),
            Inline::Bold("linked lists".to_owned()),
            text(" internally"),
        ]])]
    );
}

#[test]
fn list_item_with_code_span() {
    assert_eq!(
        parse("*   run `npm start` to begin"),
        vec![Block::List(vec![vec![
            text("run "),
            Inline::Code("npm start".to_owned()),
            text(" to begin"),
        ]])]
    );
}

#[test]
fn list_item_with_both_span_kinds() {
    assert_eq!(
        parse("*   **MERN** with `express`"),
        vec![Block::List(vec![vec![
            Inline::Bold("MERN".to_owned()),
            text(" with "),
            Inline::Code("express".to_owned()),
        ]])]
    );
}

#[test]
fn unterminated_markers_stay_literal() {
    assert_eq!(
        parse("*   a **dangling marker"),
        vec![Block::List(vec![vec![text("a **dangling marker")]])]
    );
    assert_eq!(
        parse("*   one `lonely backtick"),
        vec![Block::List(vec![vec![text("one `lonely backtick")]])]
    );
}

// =============================================================
// Seed data round-trip
// =============================================================

#[test]
fn job_portal_description_parses_into_expected_shape() {
    let blocks = parse(
        crate::data::projects::Project::find(1)
            .unwrap()
            .detailed_description,
    );
    assert_eq!(blocks.len(), 5);
    assert!(matches!(blocks[0], Block::Paragraph(_)));
    assert_eq!(blocks[1], Block::Heading("Key Features".to_owned()));
    match &blocks[2] {
        Block::List(items) => assert_eq!(items.len(), 7),
        other => panic!("expected list, got {other:?}"),
    }
    assert_eq!(blocks[3], Block::Heading("Technologies Used".to_owned()));
    match &blocks[4] {
        Block::List(items) => assert_eq!(items.len(), 5),
        other => panic!("expected list, got {other:?}"),
    }
}
