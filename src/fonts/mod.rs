//! Font loading utilities for the `resume_pdf` crate.
//!
//! genpdf needs TrueType files both for metrics and for embedding. The bundled Roboto family is
//! looked up first (see [`font_directory_candidates`] for the search order); when it is missing,
//! common system families are tried before giving up.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::{Error, ErrorKind};
use genpdf::fonts::{self, FontData, FontFamily};
use log::{debug, warn};

/// Name of the bundled font family.
pub const DEFAULT_FONT_FAMILY_NAME: &str = "Roboto";

/// Environment variable pointing at a directory with the bundled font files.
pub const FONTS_DIR_ENV: &str = "RESUME_PDF_FONTS_DIR";

/// Environment variable pointing at a directory with one of the system fallback families.
pub const SYSTEM_FONTS_DIR_ENV: &str = "RESUME_PDF_SYSTEM_FONTS_DIR";

const FONT_FILES: &[&str] = &[
    "Roboto-Regular.ttf",
    "Roboto-Bold.ttf",
    "Roboto-Italic.ttf",
    "Roboto-BoldItalic.ttf",
];

/// A font family installed by the operating system.
struct SystemFamily {
    name: &'static str,
    directories: &'static [&'static str],
    regular: &'static str,
    bold: &'static str,
    italic: &'static str,
    bold_italic: &'static str,
}

impl SystemFamily {
    fn files(&self) -> [(&'static str, &'static str); 4] {
        [
            (self.regular, "regular"),
            (self.bold, "bold"),
            (self.italic, "italic"),
            (self.bold_italic, "bold italic"),
        ]
    }

    fn is_complete_in(&self, directory: &Path) -> bool {
        self.files()
            .iter()
            .all(|(file, _)| directory.join(file).is_file())
    }
}

const SYSTEM_FAMILIES: &[SystemFamily] = &[
    SystemFamily {
        name: "DejaVu Sans",
        directories: &[
            "/usr/share/fonts/truetype/dejavu",
            "/usr/share/fonts/dejavu",
            "/usr/share/fonts/TTF",
        ],
        regular: "DejaVuSans.ttf",
        bold: "DejaVuSans-Bold.ttf",
        italic: "DejaVuSans-Oblique.ttf",
        bold_italic: "DejaVuSans-BoldOblique.ttf",
    },
    SystemFamily {
        name: "Liberation Sans",
        directories: &[
            "/usr/share/fonts/truetype/liberation",
            "/usr/share/fonts/liberation",
            "/usr/share/fonts/liberation-sans",
        ],
        regular: "LiberationSans-Regular.ttf",
        bold: "LiberationSans-Bold.ttf",
        italic: "LiberationSans-Italic.ttf",
        bold_italic: "LiberationSans-BoldItalic.ttf",
    },
    SystemFamily {
        name: "Arial",
        directories: &["/System/Library/Fonts/Supplemental", "/Library/Fonts"],
        regular: "Arial.ttf",
        bold: "Arial Bold.ttf",
        italic: "Arial Italic.ttf",
        bold_italic: "Arial Bold Italic.ttf",
    },
    SystemFamily {
        name: "Arial",
        directories: &[],
        regular: "arial.ttf",
        bold: "arialbd.ttf",
        italic: "ariali.ttf",
        bold_italic: "arialbi.ttf",
    },
];

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var).and_then(|value| {
        let path = PathBuf::from(value);
        if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        }
    })
}

/// Directory holding the fonts shipped with the crate sources.
pub fn bundled_fonts_source_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts")
}

/// Directories searched for the bundled family, in order:
/// `RESUME_PDF_FONTS_DIR`, `assets/fonts` next to the executable, then `assets/fonts` in the
/// crate sources.
pub fn font_directory_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = env_path(FONTS_DIR_ENV) {
        candidates.push(path);
    }

    if let Ok(current_exe) = env::current_exe() {
        if let Some(bin_dir) = current_exe.parent() {
            let candidate = bin_dir.join("assets/fonts");
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }
    }

    let manifest_candidate = bundled_fonts_source_dir();
    if !candidates.contains(&manifest_candidate) {
        candidates.push(manifest_candidate);
    }

    candidates
}

fn missing_font_files(path: &Path) -> Vec<PathBuf> {
    FONT_FILES
        .iter()
        .map(|name| path.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect()
}

/// Returns the first candidate directory that holds every bundled font file.
fn resolve_font_directory<I>(candidates: I) -> Result<PathBuf, Error>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut attempts = Vec::new();

    for candidate in candidates {
        let exists = candidate.is_dir();
        let missing = missing_font_files(&candidate);

        if exists && missing.is_empty() {
            debug!("Using bundled fonts from {}", candidate.display());
            return Ok(candidate);
        }

        let reason = if !exists {
            format!("directory missing at {}", candidate.display())
        } else {
            let missing_list = missing
                .iter()
                .map(|path| path.file_name().unwrap_or_default().to_string_lossy())
                .collect::<Vec<_>>()
                .join(", ");
            format!("missing files [{}]", missing_list)
        };

        attempts.push(format!("{} ({})", candidate.display(), reason));
    }

    let summary = if attempts.is_empty() {
        "no search paths were available".to_owned()
    } else {
        attempts.join(", ")
    };

    Err(Error::new(
        format!(
            "Unable to locate bundled font directory. Checked: {}. See assets/fonts/README.md or set {}.",
            summary, FONTS_DIR_ENV
        ),
        io::Error::new(io::ErrorKind::NotFound, "bundled fonts directory not found"),
    ))
}

fn load_bundled_font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = resolve_font_directory(font_directory_candidates())?;

    fonts::from_files(&directory, DEFAULT_FONT_FAMILY_NAME, None).map_err(|err| {
        Error::new(
            format!(
                "Failed to load default font family '{}' from {}: {}",
                DEFAULT_FONT_FAMILY_NAME,
                directory.display(),
                err
            ),
            io::Error::new(io::ErrorKind::Other, err.to_string()),
        )
    })
}

fn windows_font_directory() -> Option<PathBuf> {
    ["WINDIR", "SystemRoot"]
        .iter()
        .filter_map(|var| env_path(var))
        .map(|root| root.join("Fonts"))
        .find(|candidate| candidate.is_dir())
}

/// Directories to probe for `family`, the override variable first.
fn system_family_directories(family: &SystemFamily) -> Vec<PathBuf> {
    let mut directories: Vec<PathBuf> = env_path(SYSTEM_FONTS_DIR_ENV).into_iter().collect();
    directories.extend(family.directories.iter().map(PathBuf::from));
    if family.directories.is_empty() {
        directories.extend(windows_font_directory());
    }
    directories
}

fn find_system_family() -> Option<(&'static SystemFamily, PathBuf)> {
    SYSTEM_FAMILIES.iter().find_map(|family| {
        system_family_directories(family)
            .into_iter()
            .find(|directory| family.is_complete_in(directory))
            .map(|directory| (family, directory))
    })
}

fn load_system_font(directory: &Path, file: &str, style: &str) -> Result<FontData, Error> {
    let path = directory.join(file);
    FontData::load(&path, None).map_err(|err| {
        let io_kind = if path.is_file() {
            io::ErrorKind::Other
        } else {
            io::ErrorKind::NotFound
        };
        Error::new(
            format!(
                "Failed to load fallback {} font at {}: {}",
                style,
                path.display(),
                err
            ),
            io::Error::new(io_kind, err.to_string()),
        )
    })
}

fn system_fallback_font_family() -> Result<(&'static str, FontFamily<FontData>), Error> {
    let (family, directory) = find_system_family().ok_or_else(|| {
        Error::new(
            "No system font family found for fallback",
            io::Error::new(io::ErrorKind::NotFound, "system fonts not found"),
        )
    })?;

    let [regular, bold, italic, bold_italic] = family.files();
    Ok((
        family.name,
        FontFamily {
            regular: load_system_font(&directory, regular.0, regular.1)?,
            bold: load_system_font(&directory, bold.0, bold.1)?,
            italic: load_system_font(&directory, italic.0, italic.1)?,
            bold_italic: load_system_font(&directory, bold_italic.0, bold_italic.1)?,
        },
    ))
}

fn fonts_missing(err: &Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::IoError(io_err)
            if io_err.kind() == io::ErrorKind::NotFound
                || io_err.kind() == io::ErrorKind::PermissionDenied
    )
}

/// Returns the bundled Roboto font family if available and falls back to a system family
/// (DejaVu Sans, Liberation Sans or Arial) when the bundled fonts are missing.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    match load_bundled_font_family() {
        Ok(family) => Ok(family),
        Err(err) if fonts_missing(&err) => match system_fallback_font_family() {
            Ok((name, fallback)) => {
                warn!(
                    "Bundled fonts unavailable ({}); falling back to system '{}' family.",
                    err, name
                );
                Ok(fallback)
            }
            Err(fallback_err) => {
                warn!(
                    "Bundled fonts unavailable ({}); system fallback failed: {}",
                    err, fallback_err
                );
                Err(Error::new(
                    format!(
                        "Bundled fonts unavailable and system fallback failed: {}",
                        fallback_err
                    ),
                    io::Error::new(io::ErrorKind::NotFound, "default fonts are not available"),
                ))
            }
        },
        Err(err) => Err(err),
    }
}

/// Indicates whether either the bundled fonts or one of the system fallbacks are present on disk.
pub fn default_fonts_available() -> bool {
    resolve_font_directory(font_directory_candidates()).is_ok() || find_system_family().is_some()
}
