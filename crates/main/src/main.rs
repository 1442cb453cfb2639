use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::debug;
use resume_pdf::{generate, GenerateOptions};

/// Renders Ross Kuehl's résumé to `Ross_Kuehl_Resume.pdf`.
///
/// Without arguments the file is written next to this executable. Fonts are taken from
/// `assets/fonts` (or `RESUME_PDF_FONTS_DIR`), falling back to a system sans-serif family.
#[derive(Parser, Debug)]
#[command(author, version, about = "Render the résumé PDF")]
struct Cli {
    /// Write the PDF to this path instead of next to the executable.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Add a section outline to the PDF (requires the `bookmarks` feature).
    #[arg(long)]
    bookmarks: bool,
}

impl Cli {
    fn options(&self) -> GenerateOptions {
        GenerateOptions {
            output: self.output.clone(),
            bookmarks: self.bookmarks,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    debug!("{:?}", cli);

    if let Err(err) = generate(&cli.options()) {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
