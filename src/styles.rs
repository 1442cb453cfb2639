//! Named paragraph styles and unit helpers.

use genpdf::style::Style;
use genpdf::Mm;

use crate::model::TextStyle;

/// Bullet glyph used for every list.
pub const BULLET: &str = "•";

/// Converts a length in PDF points into genpdf millimetres.
pub fn mm_from_pt(points: f64) -> Mm {
    Mm::from(printpdf::Mm::from(printpdf::Pt(points)))
}

#[cfg(test)]
pub(crate) fn mm_to_f64(value: Mm) -> f64 {
    let mm: printpdf::Mm = value.into();
    mm.0
}

/// Font and spacing settings of a single named style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParagraphStyle {
    /// Font size in points.
    pub font_size: u8,
    pub bold: bool,
    pub italic: bool,
    /// Space inserted above the paragraph, in points.
    pub space_before: f64,
    /// Space inserted below the paragraph, in points.
    pub space_after: f64,
}

impl ParagraphStyle {
    const fn new(font_size: u8, bold: bool, italic: bool, before: f64, after: f64) -> Self {
        Self {
            font_size,
            bold,
            italic,
            space_before: before,
            space_after: after,
        }
    }

    /// genpdf text style for this paragraph style.
    pub fn text_style(&self) -> Style {
        let mut style = Style::new().with_font_size(self.font_size);
        if self.bold {
            style.set_bold();
        }
        if self.italic {
            style.set_italic();
        }
        style
    }
}

/// Lookup table from [`TextStyle`] to concrete [`ParagraphStyle`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSheet {
    title: ParagraphStyle,
    section: ParagraphStyle,
    subsection: ParagraphStyle,
    normal: ParagraphStyle,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            title: ParagraphStyle::new(18, true, false, 0.0, 6.0),
            section: ParagraphStyle::new(14, true, false, 12.0, 6.0),
            subsection: ParagraphStyle::new(12, true, true, 12.0, 6.0),
            normal: ParagraphStyle::new(10, false, false, 0.0, 0.0),
        }
    }
}

impl StyleSheet {
    /// Returns the settings for `style`.
    pub fn get(&self, style: TextStyle) -> &ParagraphStyle {
        match style {
            TextStyle::Title => &self.title,
            TextStyle::Section => &self.section,
            TextStyle::Subsection => &self.subsection,
            TextStyle::Normal => &self.normal,
        }
    }
}
