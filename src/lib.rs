//! Renders the Ross Kuehl résumé to `Ross_Kuehl_Resume.pdf` with genpdf.
//!
//! [`content`] holds the literal text, [`resume`] turns it into an ordered [`model::Flow`] of
//! headings, paragraphs, spacers and bullet lists, and [`builder`] hands that flow to genpdf for
//! pagination and PDF encoding. [`generate::generate`] runs the whole pipeline once.

pub mod builder;
pub mod content;
pub mod elements;
pub mod fonts;
pub mod generate;
pub mod model;
pub mod output;
pub mod resume;
pub mod richtext;
pub mod styles;

#[cfg(feature = "bookmarks")]
pub mod bookmarks;

pub use generate::{generate, GenerateOptions, Generated};
pub use output::OUTPUT_FILE_NAME;
