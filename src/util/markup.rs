//! Minimal structured-text interpreter for project descriptions.
//!
//! A fixed two-rule markup subset, not a general parser: paragraphs are
//! separated by blank lines; a paragraph starting with `"### "` is a
//! subheading; a paragraph starting with `"*   "` is a bullet list whose
//! items may carry `**bold**` and `` `code` `` spans. Anything else renders
//! verbatim as a single paragraph. The output is a typed block tree, so no
//! raw HTML ever reaches the DOM.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

const HEADING_MARKER: &str = "### ";
const BULLET_MARKER: &str = "*   ";

/// An inline span inside a list item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
    Code(String),
}

/// A rendered block of the description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    List(Vec<Vec<Inline>>),
    Paragraph(String),
}

/// Split structured text into blocks.
pub fn parse(text: &str) -> Vec<Block> {
    text.split("\n\n")
        .map(|paragraph| paragraph.trim_matches('\n'))
        .filter(|paragraph| !paragraph.is_empty())
        .map(parse_block)
        .collect()
}

fn parse_block(paragraph: &str) -> Block {
    if let Some(heading) = paragraph.strip_prefix(HEADING_MARKER) {
        return Block::Heading(heading.to_owned());
    }
    if paragraph.starts_with(BULLET_MARKER) {
        let items = paragraph
            .split("\n*   ")
            .map(strip_bullet)
            .map(parse_inline)
            .collect();
        return Block::List(items);
    }
    Block::Paragraph(paragraph.to_owned())
}

/// Drop a leading `*` and the whitespace after it, if present. Only the
/// first item still carries its marker after the split.
fn strip_bullet(item: &str) -> &str {
    item.strip_prefix('*').map_or(item, str::trim_start)
}

/// Split a list item into text, bold, and code spans. Markers without a
/// closing counterpart stay literal.
fn parse_inline(item: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = item;

    while let Some(span) = next_span(rest) {
        plain.push_str(&rest[..span.start]);
        if !plain.is_empty() {
            spans.push(Inline::Text(std::mem::take(&mut plain)));
        }
        let inner = rest[span.inner.clone()].to_owned();
        spans.push(if span.bold { Inline::Bold(inner) } else { Inline::Code(inner) });
        rest = &rest[span.end..];
    }

    plain.push_str(rest);
    if !plain.is_empty() {
        spans.push(Inline::Text(plain));
    }
    spans
}

struct Span {
    start: usize,
    inner: std::ops::Range<usize>,
    end: usize,
    bold: bool,
}

/// Find the earliest complete `**bold**` or `` `code` `` span.
fn next_span(text: &str) -> Option<Span> {
    let bold = find_delimited(text, "**").map(|(start, inner, end)| Span {
        start,
        inner,
        end,
        bold: true,
    });
    let code = find_delimited(text, "`").map(|(start, inner, end)| Span {
        start,
        inner,
        end,
        bold: false,
    });

    match (bold, code) {
        (Some(b), Some(c)) => Some(if b.start <= c.start { b } else { c }),
        (bold, code) => bold.or(code),
    }
}

fn find_delimited(text: &str, marker: &str) -> Option<(usize, std::ops::Range<usize>, usize)> {
    let open = text.find(marker)?;
    let inner_start = open + marker.len();
    let close = text[inner_start..].find(marker)?;
    let inner_end = inner_start + close;
    Some((open, inner_start..inner_end, inner_end + marker.len()))
}
