use std::collections::{BTreeMap, HashMap};
use std::fs;

use genpdf::{Margins, PaperSize};
use lopdf::{Dictionary, Document as LopdfDocument, Object};
use resume_pdf::builder::{DocumentBuilder, PdfBuilder, RenderedPdf};
use resume_pdf::model::{Block, Flow, TextStyle};
use resume_pdf::{content, fonts, generate, GenerateOptions, OUTPUT_FILE_NAME};
use sha2::{Digest, Sha256};

const SKIP_HINT: &str =
    "no usable fonts. Set RESUME_PDF_FONTS_DIR or install DejaVu Sans / Liberation Sans.";

fn render_resume() -> Option<RenderedPdf> {
    if !fonts::default_fonts_available() {
        return None;
    }

    let rendered = PdfBuilder::new()
        .add_flow(content::ross_kuehl().to_flow())
        .render()
        .expect("render resume pdf");
    Some(rendered)
}

/// SHA-256 of every decoded page content stream, in page order.
fn page_content_hashes(bytes: &[u8]) -> Vec<[u8; 32]> {
    let document = LopdfDocument::load_mem(bytes).expect("parse rendered pdf");
    document
        .get_pages()
        .values()
        .map(|page_id| {
            let content = document
                .get_page_content(*page_id)
                .expect("page content stream");
            Sha256::digest(&content).into()
        })
        .collect()
}

/// Glyph id to text mapping from a font's `/ToUnicode` CMap (`bfchar` entries only).
fn to_unicode_map(document: &LopdfDocument, font: &Dictionary) -> HashMap<u16, String> {
    let mut map = HashMap::new();
    let Ok(stream) = font
        .get(b"ToUnicode")
        .and_then(Object::as_reference)
        .and_then(|id| document.get_object(id))
        .and_then(Object::as_stream)
    else {
        return map;
    };
    let data = stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone());
    let cmap = String::from_utf8_lossy(&data);

    let mut in_bfchar = false;
    for line in cmap.lines().map(str::trim) {
        if line.ends_with("beginbfchar") {
            in_bfchar = true;
        } else if line == "endbfchar" {
            in_bfchar = false;
        } else if in_bfchar {
            let hex: Vec<&str> = line
                .split(|c: char| c == '<' || c == '>' || char::is_whitespace(c))
                .filter(|part| !part.is_empty())
                .collect();
            let [glyph, unicode] = hex.as_slice() else {
                continue;
            };
            let glyph = u16::from_str_radix(glyph, 16).expect("glyph id");
            let unicode = u32::from_str_radix(unicode, 16).expect("unicode value");
            if let Some(c) = char::from_u32(unicode) {
                map.insert(glyph, c.to_string());
            }
        }
    }
    map
}

fn decode_glyphs(bytes: &[u8], map: &HashMap<u16, String>, out: &mut String) {
    for pair in bytes.chunks_exact(2) {
        let glyph = u16::from_be_bytes([pair[0], pair[1]]);
        if let Some(text) = map.get(&glyph) {
            out.push_str(text);
        }
    }
}

/// Text shown on every page, decoded through the embedded fonts' ToUnicode maps.
fn extract_text(bytes: &[u8]) -> String {
    let document = LopdfDocument::load_mem(bytes).expect("parse rendered pdf");
    let mut text = String::new();

    for page_id in document.get_pages().into_values() {
        let maps: BTreeMap<Vec<u8>, HashMap<u16, String>> = document
            .get_page_fonts(page_id)
            .into_iter()
            .map(|(name, font)| (name, to_unicode_map(&document, font)))
            .collect();
        let content = document
            .get_and_decode_page_content(page_id)
            .expect("decode page content");

        let empty = HashMap::new();
        let mut current = &empty;
        for operation in &content.operations {
            match operation.operator.as_str() {
                "Tf" => {
                    current = operation
                        .operands
                        .first()
                        .and_then(|name| name.as_name().ok())
                        .and_then(|name| maps.get(name))
                        .unwrap_or(&empty);
                }
                "Tj" => {
                    if let Some(Object::String(glyphs, _)) = operation.operands.first() {
                        decode_glyphs(glyphs, current, &mut text);
                    }
                }
                "TJ" => {
                    if let Some(Object::Array(items)) = operation.operands.first() {
                        for item in items {
                            if let Object::String(glyphs, _) = item {
                                decode_glyphs(glyphs, current, &mut text);
                            }
                        }
                    }
                }
                "ET" => text.push('\n'),
                _ => {}
            }
        }
    }
    text
}

fn without_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn renders_a_valid_pdf() {
    let Some(rendered) = render_resume() else {
        eprintln!("Skipping renders_a_valid_pdf: {SKIP_HINT}");
        return;
    };

    assert!(
        rendered.bytes.starts_with(b"%PDF-"),
        "rendered output should start with the PDF header"
    );

    let document = LopdfDocument::load_mem(&rendered.bytes).expect("parse rendered pdf");
    let pages = document.get_pages().len();
    assert!(pages >= 1, "document should have at least one page");
    assert_eq!(pages, rendered.pages, "decorator page count matches the page tree");
}

#[test]
fn every_literal_appears_in_the_rendered_text() {
    let Some(rendered) = render_resume() else {
        eprintln!("Skipping every_literal_appears_in_the_rendered_text: {SKIP_HINT}");
        return;
    };

    // Line breaks may fall on any space, so compare with whitespace removed.
    let text = without_whitespace(&extract_text(&rendered.bytes));
    let missing: Vec<String> = content::ross_kuehl()
        .literals()
        .into_iter()
        .filter(|literal| !text.contains(&without_whitespace(literal)))
        .collect();
    assert!(missing.is_empty(), "literals missing from the PDF: {missing:?}");
}

#[test]
fn paragraphs_and_list_items_reach_the_page() {
    if !fonts::default_fonts_available() {
        eprintln!("Skipping paragraphs_and_list_items_reach_the_page: {SKIP_HINT}");
        return;
    }

    let rendered = PdfBuilder::new()
        .add_block(Block::heading(TextStyle::Section, "Heading"))
        .add_block(Block::paragraph("Body paragraph"))
        .add_block(Block::spacer(6.0))
        .add_block(Block::bullet_list(["First item", "Second item"]))
        .render()
        .expect("render small flow");

    let text = extract_text(&rendered.bytes);
    for expected in ["Heading", "Body paragraph", "First item", "Second item"] {
        assert!(text.contains(expected), "{expected:?} missing from {text:?}");
    }
    assert!(text.contains('•'), "bullets are drawn");
}

#[test]
fn rendering_is_deterministic() {
    let Some(first) = render_resume() else {
        eprintln!("Skipping rendering_is_deterministic: {SKIP_HINT}");
        return;
    };
    let Some(second) = render_resume() else {
        return;
    };

    assert_eq!(first.pages, second.pages, "page counts should match");
    assert_eq!(first.outline, second.outline, "section start pages should match");
    assert_eq!(
        page_content_hashes(&first.bytes),
        page_content_hashes(&second.bytes),
        "page content must not change between renders"
    );
}

#[test]
fn outline_lists_every_section_in_page_order() {
    let Some(rendered) = render_resume() else {
        eprintln!("Skipping outline_lists_every_section_in_page_order: {SKIP_HINT}");
        return;
    };

    let titles: Vec<&str> = rendered
        .outline
        .iter()
        .map(|entry| entry.title.as_str())
        .collect();
    assert_eq!(titles, content::ross_kuehl().to_flow().section_titles());

    let pages: Vec<usize> = rendered
        .outline
        .iter()
        .map(|entry| entry.page.expect("every section is laid out"))
        .collect();
    assert_eq!(pages.first(), Some(&1));
    assert!(pages.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(pages.iter().all(|page| *page <= rendered.pages));
}

#[test]
fn long_flows_spill_onto_additional_pages() {
    if !fonts::default_fonts_available() {
        eprintln!("Skipping long_flows_spill_onto_additional_pages: {SKIP_HINT}");
        return;
    }

    let flow: Flow = (0..40)
        .flat_map(|index| {
            [
                Block::heading(TextStyle::Section, format!("Section {index}")),
                Block::paragraph("Lorem ipsum dolor sit amet, consectetur adipiscing elit."),
                Block::spacer(12.0),
            ]
        })
        .collect();

    let rendered = PdfBuilder::new().add_flow(flow).render().expect("render long flow");
    assert!(rendered.pages > 1, "40 sections should not fit on one page");

    let last_page = rendered
        .outline
        .last()
        .and_then(|entry| entry.page)
        .expect("last section is laid out");
    assert!(last_page > 1 && last_page <= rendered.pages);
}

#[test]
fn document_settings_are_applied() {
    if !fonts::default_fonts_available() {
        eprintln!("Skipping document_settings_are_applied: {SKIP_HINT}");
        return;
    }

    let rendered = PdfBuilder::new()
        .with_document(
            DocumentBuilder::new()
                .with_paper_size(PaperSize::Letter)
                .with_margins(Margins::all(10))
                .with_title("Settings"),
        )
        .add_block(Block::heading(TextStyle::Title, "Letter"))
        .add_block(Block::bullet_list(["one", "two"]))
        .render()
        .expect("render letter document");
    assert_eq!(rendered.pages, 1);
    assert!(rendered.outline.is_empty());

    let document = LopdfDocument::load_mem(&rendered.bytes).expect("parse rendered pdf");
    let page_id = *document.get_pages().get(&1).expect("first page");
    let media_box = document
        .get_dictionary(page_id)
        .and_then(|page| page.get(b"MediaBox"))
        .and_then(Object::as_array)
        .expect("media box");
    let width = match &media_box[2] {
        Object::Real(value) => f64::from(*value),
        Object::Integer(value) => *value as f64,
        other => panic!("unexpected media box width {other:?}"),
    };
    assert!((width - 612.0).abs() < 1.0, "letter width is 612pt, got {width}");
}

#[test]
fn generate_writes_one_file_and_overwrites_it() {
    if !fonts::default_fonts_available() {
        eprintln!("Skipping generate_writes_one_file_and_overwrites_it: {SKIP_HINT}");
        return;
    }

    let directory = tempfile::tempdir().expect("tempdir");
    let path = directory.path().join(OUTPUT_FILE_NAME);
    let options = GenerateOptions {
        output: Some(path.clone()),
        bookmarks: false,
    };

    let first = generate(&options).expect("first run");
    let second = generate(&options).expect("second run");

    assert_eq!(first.path, path);
    assert_eq!(first.pages, second.pages);

    let written = fs::read(&path).expect("read generated pdf");
    assert_eq!(written.len(), second.bytes_written);
    assert!(written.starts_with(b"%PDF-"));

    let names: Vec<_> = fs::read_dir(directory.path())
        .expect("list output directory")
        .map(|entry| entry.expect("dir entry").file_name())
        .collect();
    assert_eq!(names, vec![OUTPUT_FILE_NAME]);
}

#[cfg(feature = "bookmarks")]
#[test]
fn bookmarks_add_an_outline_entry_per_section() {
    let Some(rendered) = render_resume() else {
        eprintln!("Skipping bookmarks_add_an_outline_entry_per_section: {SKIP_HINT}");
        return;
    };
    let expected = rendered.outline.len();

    let bytes = resume_pdf::bookmarks::apply_outline(&rendered.bytes, &rendered.outline)
        .expect("apply outline");
    let document = LopdfDocument::load_mem(&bytes).expect("parse bookmarked pdf");

    let outlines_id = document
        .catalog()
        .and_then(|catalog| catalog.get(b"Outlines"))
        .and_then(Object::as_reference)
        .expect("catalog references outlines");
    let outlines = document
        .get_object(outlines_id)
        .and_then(Object::as_dict)
        .expect("outlines dictionary");
    let count = outlines
        .get(b"Count")
        .and_then(Object::as_i64)
        .expect("outline count");

    assert_eq!(count, expected as i64);
}
