//! One-shot generation of the résumé PDF.

use std::error::Error;
use std::path::PathBuf;

use log::info;

use crate::builder::{DocumentBuilder, PdfBuilder};
use crate::content;
use crate::output;

/// Where and how to write the résumé.
#[derive(Clone, Debug, Default)]
pub struct GenerateOptions {
    /// Destination file; `None` means next to the executable.
    pub output: Option<PathBuf>,
    /// Add a section outline to the document.
    pub bookmarks: bool,
}

/// Summary of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    pub path: PathBuf,
    pub bytes_written: usize,
    pub pages: usize,
}

/// Assembles the résumé, renders it once and writes the file.
pub fn generate(options: &GenerateOptions) -> Result<Generated, Box<dyn Error>> {
    let path = match &options.output {
        Some(path) => path.clone(),
        None => output::default_output_path()?,
    };

    let resume = content::ross_kuehl();
    let builder = PdfBuilder::new()
        .with_document(DocumentBuilder::new().with_title(format!("{} Resume", resume.name)))
        .add_flow(resume.to_flow());

    let rendered = if options.bookmarks {
        render_with_bookmarks(builder)?
    } else {
        builder.render()?
    };

    output::write_pdf(&path, &rendered.bytes)?;
    info!(
        "Generated {} ({} bytes, {} page(s))",
        path.display(),
        rendered.bytes.len(),
        rendered.pages
    );

    Ok(Generated {
        path,
        bytes_written: rendered.bytes.len(),
        pages: rendered.pages,
    })
}

#[cfg(feature = "bookmarks")]
fn render_with_bookmarks(
    builder: PdfBuilder,
) -> Result<crate::builder::RenderedPdf, Box<dyn Error>> {
    Ok(builder.render_with_bookmarks()?)
}

#[cfg(not(feature = "bookmarks"))]
fn render_with_bookmarks(
    _builder: PdfBuilder,
) -> Result<crate::builder::RenderedPdf, Box<dyn Error>> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Enable the `bookmarks` feature to render bookmarked output",
    )
    .into())
}
