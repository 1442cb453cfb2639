//! Output location and file writing.

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

/// File name of the generated résumé.
pub const OUTPUT_FILE_NAME: &str = "Ross_Kuehl_Resume.pdf";

/// Path of the résumé next to the running executable.
pub fn default_output_path() -> io::Result<PathBuf> {
    let exe = env::current_exe()?;
    let directory = exe.parent().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("executable path {} has no parent directory", exe.display()),
        )
    })?;
    Ok(directory.join(OUTPUT_FILE_NAME))
}

/// Writes `bytes` to `path`, replacing any existing file.
///
/// The data is first written to a temporary file in the destination directory and then renamed
/// over `path`, so readers never observe a partially written document.
pub fn write_pdf(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(directory)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    debug!(
        "Persisting {} bytes from {} to {}",
        bytes.len(),
        file.path().display(),
        path.display()
    );
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}
