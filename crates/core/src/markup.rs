//! Block and inline structure of the text under a heading.
//!
//! Only the subset a meal plan uses is recognised: `- ` bullet runs,
//! plain paragraphs and `**strong**` spans. Escaping happens at render time.

use regex::Regex;
use std::sync::LazyLock;

static RE_STRONG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

const BULLET_MARKER: &str = "- ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub strong: bool,
}

impl Span {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            strong: false,
        }
    }

    fn strong(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            strong: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Span>),
    List(Vec<Vec<Span>>),
}

impl Block {
    /// Spans of a paragraph, `None` for lists
    pub fn paragraph(&self) -> Option<&[Span]> {
        match self {
            Block::Paragraph(spans) => Some(spans),
            Block::List(_) => None,
        }
    }

    /// Items of a bullet list, `None` for paragraphs
    pub fn list_items(&self) -> Option<&[Vec<Span>]> {
        match self {
            Block::List(items) => Some(items),
            Block::Paragraph(_) => None,
        }
    }
}

/// Split a single line into plain and `**strong**` spans
pub fn parse_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last_end = 0;

    for captures in RE_STRONG.captures_iter(text) {
        let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
            continue;
        };

        if whole.start() > last_end {
            spans.push(Span::plain(&text[last_end..whole.start()]));
        }
        spans.push(Span::strong(inner.as_str()));
        last_end = whole.end();
    }

    if last_end < text.len() {
        spans.push(Span::plain(&text[last_end..]));
    }

    spans
}

/// Group raw lines into paragraphs and bullet lists, skipping blank lines
pub fn parse_blocks<S: AsRef<str>>(lines: &[S]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut lines = lines.iter().map(|line| line.as_ref().trim()).peekable();

    while let Some(line) = lines.next() {
        if line.is_empty() {
            continue;
        }

        let Some(first_item) = line.strip_prefix(BULLET_MARKER) else {
            blocks.push(Block::Paragraph(parse_inline(line)));
            continue;
        };

        let mut items = vec![parse_inline(first_item.trim())];
        while let Some(item) = lines
            .peek()
            .copied()
            .and_then(|next| next.strip_prefix(BULLET_MARKER))
        {
            items.push(parse_inline(item.trim()));
            lines.next();
        }
        blocks.push(Block::List(items));
    }

    blocks
}
