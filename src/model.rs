//! Data structures describing the logical content of the résumé document.
//!
//! The types in this module mirror the building blocks the layout library consumes (headings,
//! paragraphs, spacers and bulleted lists) without referencing genpdf elements directly. The
//! [`Flow`] keeps them in the order they should appear on the page; [`crate::builder`] turns it
//! into genpdf elements exactly once.

use std::fmt;

use crate::richtext::Span;

/// Named presentation styles applied to headings and paragraphs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// Document title, used once for the name.
    Title,
    /// Top-level section heading.
    Section,
    /// Heading nested below a section, e.g. a position.
    Subsection,
    /// Body text.
    #[default]
    Normal,
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextStyle::Title => "title",
            TextStyle::Section => "section",
            TextStyle::Subsection => "subsection",
            TextStyle::Normal => "normal",
        };
        f.write_str(name)
    }
}

/// Paragraph made of one or more [`Span`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RichParagraph {
    spans: Vec<Span>,
}

impl RichParagraph {
    /// Creates a paragraph from the provided spans.
    pub fn new(spans: impl Into<Vec<Span>>) -> Self {
        Self {
            spans: spans.into(),
        }
    }

    /// Creates a paragraph holding a single unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![Span::new(text)])
    }

    /// Returns the spans that make up the paragraph.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Concatenated text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(Span::text).collect()
    }
}

/// Individual presentation blocks in document order.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    /// Single-line heading rendered with one of the heading styles.
    Heading {
        /// Style applied to the heading text.
        style: TextStyle,
        /// Heading text.
        text: String,
    },
    /// Body paragraph in the normal style.
    Paragraph(RichParagraph),
    /// Vertical gap, in points.
    Spacer(f64),
    /// Bulleted list; each item is a normal-style paragraph.
    BulletList(Vec<RichParagraph>),
}

impl Block {
    /// Convenience helper for building a heading block.
    pub fn heading(style: TextStyle, text: impl Into<String>) -> Self {
        Self::Heading {
            style,
            text: text.into(),
        }
    }

    /// Convenience helper for building an unstyled paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph(RichParagraph::plain(text))
    }

    /// Convenience helper for a spacer of `points` height.
    pub fn spacer(points: f64) -> Self {
        Self::Spacer(points)
    }

    /// Builds a bullet list with one plain paragraph per item.
    pub fn bullet_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::BulletList(items.into_iter().map(RichParagraph::plain).collect())
    }

    /// Returns the text lines carried by the block; spacers carry none.
    pub fn text_lines(&self) -> Vec<String> {
        match self {
            Block::Heading { text, .. } => vec![text.clone()],
            Block::Paragraph(paragraph) => vec![paragraph.text()],
            Block::Spacer(_) => Vec::new(),
            Block::BulletList(items) => items.iter().map(RichParagraph::text).collect(),
        }
    }
}

/// Ordered sequence of blocks submitted to the renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Flow {
    blocks: Vec<Block>,
}

impl Flow {
    /// Creates an empty flow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a block.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    #[cfg(test)]
    fn with_block(mut self, block: Block) -> Self {
        self.push(block);
        self
    }

    /// Returns the blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks in the flow.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the flow holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Text content of the flow, one heading, paragraph or list item per line.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .flat_map(Block::text_lines)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Titles of every [`TextStyle::Section`] heading, in order.
    pub fn section_titles(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading {
                    style: TextStyle::Section,
                    text,
                } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl FromIterator<Block> for Flow {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl Extend<Block> for Flow {
    fn extend<I: IntoIterator<Item = Block>>(&mut self, iter: I) {
        self.blocks.extend(iter);
    }
}
