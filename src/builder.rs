//! Document construction for the `resume_pdf` crate.
//!
//! [`DocumentBuilder`] prepares a `genpdf::Document` (paper, margins, title, fonts) and
//! [`PdfBuilder`] converts a [`Flow`] into genpdf elements and renders it in one pass.

use std::fmt;

use genpdf::elements::{Paragraph, UnorderedList};
use genpdf::error::Error;
use genpdf::style::Style;
use genpdf::{self, Element, Margins, Mm, PageDecorator, PaperSize, Size};
use log::debug;

use crate::elements::{PageMarker, PageTracker, Spacer};
use crate::fonts;
use crate::model::{Block, Flow, RichParagraph, TextStyle};
use crate::styles::{self, ParagraphStyle, StyleSheet, BULLET};

#[cfg(feature = "bookmarks")]
use crate::bookmarks::{self, BookmarkError};

/// Default page margin: one inch on every side.
pub const DEFAULT_MARGIN_PT: f64 = 72.0;

/// Builder for `genpdf::Document` instances pre-configured with the crate defaults.
pub struct DocumentBuilder {
    paper_size: Size,
    margins: Margins,
    title: Option<String>,
    font_size: u8,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        let margin = styles::mm_from_pt(DEFAULT_MARGIN_PT);
        Self {
            paper_size: PaperSize::A4.into(),
            margins: Margins::all(margin),
            title: None,
            font_size: StyleSheet::default().get(TextStyle::Normal).font_size,
        }
    }
}

impl DocumentBuilder {
    /// Creates a new builder instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the paper size used for newly created documents.
    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = paper_size.into();
        self
    }

    /// Sets the margins applied through the page decorator.
    pub fn with_margins(mut self, margins: impl Into<Margins>) -> Self {
        self.margins = margins.into();
        self
    }

    /// Sets the title stored in the PDF metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the base font size in points.
    pub fn with_font_size(mut self, font_size: u8) -> Self {
        self.font_size = font_size;
        self
    }

    /// Builds a fully configured `genpdf::Document` whose page decorator advances `tracker`.
    pub fn build(self, tracker: &PageTracker) -> Result<genpdf::Document, Error> {
        let font_family = fonts::default_font_family()?;
        let mut document = genpdf::Document::new(font_family);

        document.set_paper_size(self.paper_size);
        document.set_font_size(self.font_size);
        if let Some(title) = self.title {
            document.set_title(title);
        }
        document.set_page_decorator(TrackingPageDecorator {
            margins: self.margins,
            tracker: tracker.clone(),
        });

        Ok(document)
    }
}

/// Applies the margins and counts pages as genpdf lays them out.
struct TrackingPageDecorator {
    margins: Margins,
    tracker: PageTracker,
}

impl PageDecorator for TrackingPageDecorator {
    fn decorate_page<'a>(
        &mut self,
        _context: &genpdf::Context,
        mut area: genpdf::render::Area<'a>,
        _style: Style,
    ) -> Result<genpdf::render::Area<'a>, Error> {
        let page = self.tracker.advance();
        debug!("Laying out page {}", page);
        area.add_margins(self.margins);
        Ok(area)
    }
}

/// Errors produced while turning a [`Flow`] into PDF bytes.
#[derive(Debug)]
pub enum PdfBuildError {
    /// Neither the bundled nor a system font family could be loaded.
    FontLoad(Error),
    /// genpdf failed while laying out or encoding the document.
    Render(Error),
    /// The outline could not be added to the rendered document.
    #[cfg(feature = "bookmarks")]
    Bookmarks(BookmarkError),
}

impl fmt::Display for PdfBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FontLoad(err) => write!(f, "Failed to load fonts: {err}"),
            Self::Render(err) => write!(f, "Failed to render PDF: {err}"),
            #[cfg(feature = "bookmarks")]
            Self::Bookmarks(err) => write!(f, "Failed to add bookmarks: {err}"),
        }
    }
}

impl std::error::Error for PdfBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FontLoad(err) | Self::Render(err) => Some(err),
            #[cfg(feature = "bookmarks")]
            Self::Bookmarks(err) => Some(err),
        }
    }
}

#[cfg(feature = "bookmarks")]
impl From<BookmarkError> for PdfBuildError {
    fn from(err: BookmarkError) -> Self {
        Self::Bookmarks(err)
    }
}

/// Section heading together with the page it starts on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlineEntry {
    /// Heading text.
    pub title: String,
    /// 1-indexed page, `None` if the heading was never laid out.
    pub page: Option<usize>,
}

/// Output of a successful render.
#[derive(Clone, Debug)]
pub struct RenderedPdf {
    /// Complete PDF file contents.
    pub bytes: Vec<u8>,
    /// Number of pages laid out.
    pub pages: usize,
    /// Start pages of every section heading.
    pub outline: Vec<OutlineEntry>,
}

/// Renders a [`Flow`] with a [`StyleSheet`] through genpdf.
#[derive(Default)]
pub struct PdfBuilder {
    document: DocumentBuilder,
    styles: StyleSheet,
    flow: Flow,
}

impl PdfBuilder {
    /// Creates a builder with the default document settings and style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the document settings.
    pub fn with_document(mut self, document: DocumentBuilder) -> Self {
        self.document = document;
        self
    }

    /// Appends every block of `flow`.
    pub fn add_flow(mut self, flow: Flow) -> Self {
        self.flow.extend(flow.blocks().iter().cloned());
        self
    }

    /// Appends a single block.
    pub fn add_block(mut self, block: Block) -> Self {
        self.flow.push(block);
        self
    }

    /// Lays out all blocks and returns the encoded PDF.
    pub fn render(self) -> Result<RenderedPdf, PdfBuildError> {
        let tracker = PageTracker::new();
        let mut document = self
            .document
            .build(&tracker)
            .map_err(PdfBuildError::FontLoad)?;

        let mut titles = Vec::new();
        for block in self.flow.blocks() {
            match block {
                Block::Heading { style, text } => {
                    let settings = self.styles.get(*style);
                    let element = Paragraph::new(text.as_str()).styled(settings.text_style());
                    let padding = heading_padding(settings);
                    // Padding reports its height even when the heading itself did not fit,
                    // so the marker wraps the unpadded text.
                    if *style == TextStyle::Section {
                        let marker = PageMarker::new(element, &tracker);
                        debug_assert_eq!(marker.slot(), titles.len());
                        titles.push(text.clone());
                        document.push(marker.padded(padding));
                    } else {
                        document.push(element.padded(padding));
                    }
                }
                Block::Paragraph(paragraph) => {
                    document.push(body_paragraph(&self.styles, paragraph))
                }
                Block::Spacer(points) => document.push(Spacer::from_points(*points)),
                Block::BulletList(items) => document.push(bullet_list(&self.styles, items)),
            }
        }

        let mut bytes = Vec::new();
        document.render(&mut bytes).map_err(PdfBuildError::Render)?;

        let outline = titles
            .into_iter()
            .zip(tracker.marks())
            .map(|(title, page)| OutlineEntry { title, page })
            .collect();

        Ok(RenderedPdf {
            bytes,
            pages: tracker.pages(),
            outline,
        })
    }

    /// Renders the document and adds a flat outline with one entry per section heading.
    #[cfg(feature = "bookmarks")]
    pub fn render_with_bookmarks(self) -> Result<RenderedPdf, PdfBuildError> {
        let mut rendered = self.render()?;
        rendered.bytes = bookmarks::apply_outline(&rendered.bytes, &rendered.outline)?;
        Ok(rendered)
    }
}

fn heading_padding(settings: &ParagraphStyle) -> Margins {
    Margins::trbl(
        styles::mm_from_pt(settings.space_before),
        Mm::default(),
        styles::mm_from_pt(settings.space_after),
        Mm::default(),
    )
}

fn paragraph_element(paragraph: &RichParagraph) -> Paragraph {
    let mut element = Paragraph::default();
    for span in paragraph.spans() {
        element.push(span.to_styled_string());
    }
    element
}

fn body_paragraph(sheet: &StyleSheet, paragraph: &RichParagraph) -> impl Element {
    paragraph_element(paragraph).styled(sheet.get(TextStyle::Normal).text_style())
}

fn bullet_list(sheet: &StyleSheet, items: &[RichParagraph]) -> impl Element {
    let mut list = UnorderedList::with_bullet(BULLET);
    for item in items {
        list.push(paragraph_element(item));
    }
    list.styled(sheet.get(TextStyle::Normal).text_style())
}
