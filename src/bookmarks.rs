//! Outline (bookmark) injection built on top of `lopdf`.

use std::collections::BTreeMap;

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::builder::OutlineEntry;

/// Errors that can occur while embedding bookmarks into a rendered PDF document.
#[derive(Debug)]
pub enum BookmarkError {
    /// The PDF bytes could not be parsed or written by `lopdf`.
    Parse(lopdf::Error),
    /// The trailer does not reference a catalog object.
    MissingCatalog,
    /// The catalog object is not a dictionary.
    InvalidCatalog,
    /// An outline entry points at a page the document does not have.
    MissingPage {
        /// Heading whose page could not be resolved.
        title: String,
        /// The requested (1-indexed) page number.
        page_number: usize,
    },
}

impl From<lopdf::Error> for BookmarkError {
    fn from(err: lopdf::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<std::io::Error> for BookmarkError {
    fn from(err: std::io::Error) -> Self {
        Self::Parse(err.into())
    }
}

impl std::fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "Failed to process PDF bytes: {err}"),
            Self::MissingCatalog => write!(f, "PDF catalog entry is missing"),
            Self::InvalidCatalog => write!(f, "PDF catalog entry is not a dictionary"),
            Self::MissingPage { title, page_number } => write!(
                f,
                "Bookmark '{}' refers to missing page {}",
                title, page_number
            ),
        }
    }
}

impl std::error::Error for BookmarkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::MissingCatalog | Self::InvalidCatalog | Self::MissingPage { .. } => None,
        }
    }
}

/// Adds a flat outline tree to `pdf_bytes`.
///
/// Every entry with a known page becomes an outline item with a `/Dest [page /Fit]` destination.
/// Entries without a page are skipped; when none remain the input is returned unchanged.
pub fn apply_outline(pdf_bytes: &[u8], entries: &[OutlineEntry]) -> Result<Vec<u8>, BookmarkError> {
    let mut document = Document::load_mem(pdf_bytes)?;

    let pages = document.get_pages();
    let items = collect_items(&mut document, entries, &pages)?;

    if items.is_empty() {
        return Ok(pdf_bytes.to_vec());
    }

    let outlines_id = document.new_object_id();
    link_items(outlines_id, &mut document, &items);
    insert_outlines_root(outlines_id, &mut document, &items)?;

    let mut buffer = Vec::new();
    document.save_to(&mut buffer)?;
    Ok(buffer)
}

struct OutlineItem {
    object_id: ObjectId,
    page_ref: ObjectId,
    title: String,
}

fn collect_items(
    document: &mut Document,
    entries: &[OutlineEntry],
    pages: &BTreeMap<u32, ObjectId>,
) -> Result<Vec<OutlineItem>, BookmarkError> {
    let mut items = Vec::new();

    for entry in entries {
        let Some(page_number) = entry.page else {
            continue;
        };
        let page_ref = u32::try_from(page_number)
            .ok()
            .and_then(|number| pages.get(&number).copied())
            .ok_or_else(|| BookmarkError::MissingPage {
                title: entry.title.clone(),
                page_number,
            })?;

        items.push(OutlineItem {
            object_id: document.new_object_id(),
            page_ref,
            title: entry.title.clone(),
        });
    }

    Ok(items)
}

fn link_items(outlines_id: ObjectId, document: &mut Document, items: &[OutlineItem]) {
    for (index, item) in items.iter().enumerate() {
        let mut dictionary = Dictionary::new();
        dictionary.set("Title", Object::string_literal(item.title.as_str()));
        dictionary.set(
            "Dest",
            Object::Array(vec![
                Object::Reference(item.page_ref),
                Object::Name("Fit".into()),
            ]),
        );
        dictionary.set("Parent", Object::Reference(outlines_id));

        if index > 0 {
            dictionary.set("Prev", Object::Reference(items[index - 1].object_id));
        }
        if let Some(next) = items.get(index + 1) {
            dictionary.set("Next", Object::Reference(next.object_id));
        }

        document
            .objects
            .insert(item.object_id, Object::Dictionary(dictionary));
    }
}

fn insert_outlines_root(
    outlines_id: ObjectId,
    document: &mut Document,
    items: &[OutlineItem],
) -> Result<(), BookmarkError> {
    let mut dictionary = Dictionary::new();
    dictionary.set("Type", Object::Name("Outlines".into()));
    dictionary.set("Count", Object::Integer(items.len() as i64));
    if let Some(first) = items.first() {
        dictionary.set("First", Object::Reference(first.object_id));
    }
    if let Some(last) = items.last() {
        dictionary.set("Last", Object::Reference(last.object_id));
    }
    document
        .objects
        .insert(outlines_id, Object::Dictionary(dictionary));

    let catalog_id = document
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .map_err(|_| BookmarkError::MissingCatalog)?;
    let catalog = document
        .objects
        .get_mut(&catalog_id)
        .ok_or(BookmarkError::MissingCatalog)?
        .as_dict_mut()
        .map_err(|_| BookmarkError::InvalidCatalog)?;

    catalog.set("Outlines", Object::Reference(outlines_id));
    catalog.set("PageMode", Object::Name("UseOutlines".into()));

    Ok(())
}
