//! Styled text fragments used by paragraphs and list items.
//!
//! A [`Span`] is a piece of text together with the inline attributes genpdf can express through a
//! [`StyledString`]. Paragraph-level styling (font size, heading weight) lives in
//! [`crate::styles`]; spans only carry what differs inside a single line.

use genpdf::style::{Style, StyledString};

/// A slice of text together with inline style attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    text: String,
    bold: bool,
    italic: bool,
}

impl Span {
    /// Creates a new span with the provided text and no styles applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Returns the raw text contained in this span.
    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub(crate) fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[cfg(test)]
    pub(crate) fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    fn to_style(&self) -> Style {
        let mut style = Style::new();
        if self.bold {
            style.set_bold();
        }
        if self.italic {
            style.set_italic();
        }
        style
    }

    /// Converts the span into a genpdf [`StyledString`].
    ///
    /// The returned style only carries the inline attributes, so the paragraph style of the
    /// enclosing element still decides the font size.
    pub fn to_styled_string(&self) -> StyledString {
        StyledString::new(self.text.clone(), self.to_style())
    }
}

impl From<&Span> for StyledString {
    fn from(span: &Span) -> Self {
        span.to_styled_string()
    }
}
