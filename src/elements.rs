//! Element implementations the upstream genpdf crate does not ship with.
//!
//! [`Spacer`] reserves a fixed vertical gap, and [`PageMarker`] remembers the page an element was
//! first drawn on. Page numbers come from a [`PageTracker`] that the page decorator advances
//! before each page is filled.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use genpdf::error::Error;
use genpdf::style::Style;
use genpdf::{render, Element, Mm, RenderResult, Size};

use crate::styles::mm_from_pt;

/// Fixed-height vertical gap.
///
/// If less room than requested is left on the page, the spacer only consumes what remains so that
/// it never pushes content onto a new page on its own.
#[derive(Clone, Copy, Debug)]
pub struct Spacer {
    height: Mm,
}

impl Spacer {
    /// Creates a spacer of `points` height.
    pub fn from_points(points: f64) -> Self {
        Self {
            height: mm_from_pt(points.max(0.0)),
        }
    }

    /// Height requested by this spacer.
    pub fn height(&self) -> Mm {
        self.height
    }
}

impl Element for Spacer {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size().height;
        let height = if self.height > available {
            available
        } else {
            self.height
        };

        let mut result = RenderResult::default();
        result.size = Size::new(0, height);
        Ok(result)
    }
}

/// Shared page bookkeeping between the page decorator and [`PageMarker`]s.
#[derive(Clone, Debug, Default)]
pub struct PageTracker {
    current: Rc<Cell<usize>>,
    marks: Rc<RefCell<Vec<Option<usize>>>>,
}

impl PageTracker {
    /// Creates a tracker positioned before the first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves to the next page and returns its 1-indexed number.
    pub fn advance(&self) -> usize {
        let page = self.current.get() + 1;
        self.current.set(page);
        page
    }

    /// Number of pages started so far.
    pub fn pages(&self) -> usize {
        self.current.get()
    }

    /// Reserves a slot for a marker and returns its index.
    pub fn register(&self) -> usize {
        let mut marks = self.marks.borrow_mut();
        marks.push(None);
        marks.len() - 1
    }

    fn record(&self, slot: usize) {
        let page = self.current.get();
        if let Some(mark) = self.marks.borrow_mut().get_mut(slot) {
            mark.get_or_insert(page);
        }
    }

    /// Page numbers recorded per slot, in registration order.
    pub fn marks(&self) -> Vec<Option<usize>> {
        self.marks.borrow().clone()
    }
}

/// Wraps an element and records the page on which it first produces visible output.
pub struct PageMarker<E: Element> {
    inner: E,
    tracker: PageTracker,
    slot: usize,
}

impl<E: Element> PageMarker<E> {
    /// Wraps `inner`, registering a new slot in `tracker`.
    pub fn new(inner: E, tracker: &PageTracker) -> Self {
        let slot = tracker.register();
        Self {
            inner,
            tracker: tracker.clone(),
            slot,
        }
    }

    /// Index of the slot this marker writes to.
    pub fn slot(&self) -> usize {
        self.slot
    }
}

impl<E: Element> Element for PageMarker<E> {
    fn render(
        &mut self,
        context: &genpdf::Context,
        area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let result = self.inner.render(context, area, style)?;
        if result.size.height > Mm::default() {
            self.tracker.record(self.slot);
        }
        Ok(result)
    }
}
