//! Font discovery through Fontconfig.
//!
//! Fontconfig already knows every installed font, so discovery shells out to its `fc-list` tool instead of crawling font directories.
//! Each output line describes one face; the fields are parsed into a [`FontDescriptor`].
//! Faces are deduplicated by family, style, and path, and sorted by case-folded family name.

use super::FontDescriptor;
use itertools::Itertools;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::Command;

/// The `fc-list` format string; one face per line, fields separated by `|`.
const LIST_FORMAT: &str = "%{family}|%{style}|%{file}|%{weight}|%{slant}|%{width}\n";

/// An error that may occur when listing the installed fonts.
#[derive(Debug)]
pub enum DiscoverError {
    /// The `fc-list` tool could not be run.
    Io(io::Error),
    /// The `fc-list` tool ran but reported a failure.
    Failed(std::process::ExitStatus),
}

impl fmt::Display for DiscoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(f, "The fc-list tool could not be run: {}.", error),
            Self::Failed(status) => write!(f, "The fc-list tool failed with {}.", status),
        }
    }
}

impl std::error::Error for DiscoverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            Self::Failed(_) => None,
        }
    }
}

/// Returns the installed fonts, sorted by case-folded family name.
///
/// # Errors
///
/// This function returns an error if `fc-list` is missing or exits unsuccessfully.
/// A missing Fontconfig installation is reported, not silently treated as an empty font list.
pub fn installed_fonts() -> Result<Vec<FontDescriptor>, DiscoverError> {
    let output = Command::new("fc-list")
        .arg("--format")
        .arg(LIST_FORMAT)
        .output()
        .map_err(DiscoverError::Io)?;

    if !output.status.success() {
        return Err(DiscoverError::Failed(output.status));
    }

    let listing = String::from_utf8_lossy(&output.stdout);
    let fonts = parse_listing(&listing);

    log::info!("discovered {} installed fonts", fonts.len());

    Ok(fonts)
}

/// Parses an `fc-list` listing into descriptors, deduplicated and sorted.
fn parse_listing(listing: &str) -> Vec<FontDescriptor> {
    let mut fonts: Vec<FontDescriptor> = listing
        .lines()
        .filter_map(parse_line)
        .unique_by(|font| (font.family.clone(), font.style.clone(), font.path.clone()))
        .collect();

    fonts.sort_by_cached_key(|font| font.family.to_lowercase());
    fonts
}

/// Parses one `fc-list` line; returns `None` for blank or malformed lines.
fn parse_line(line: &str) -> Option<FontDescriptor> {
    if line.trim().is_empty() {
        return None;
    }

    let mut fields = line.split('|');

    // Family and style may list alternatives separated by commas; the first one is canonical.
    let family = first_alternative(fields.next()?);
    let style = first_alternative(fields.next()?);
    let path = PathBuf::from(fields.next()?.trim());
    let weight = fields.next().unwrap_or("").trim().to_string();
    let slant = fields.next().unwrap_or("").trim().to_string();
    let width = fields.next().unwrap_or("").trim().to_string();

    Some(FontDescriptor {
        family,
        style,
        weight,
        slant,
        width,
        path,
    })
}

/// Returns the first comma-separated alternative of a field.
fn first_alternative(field: &str) -> String {
    field.split(',').next().unwrap_or(field).trim().to_string()
}
