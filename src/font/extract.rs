//! Character set extraction from font files.
//!
//! Parsing of the font file format is delegated to the `ttf-parser` crate.
//! Extraction unions the code points of every Unicode `cmap` subtable, so a face carrying both a BMP and a full-repertoire subtable reports each code point once.
//! The resulting [`CharacterSet`] is the input to the [coverage analyzer](crate::coverage).

use crate::data::{charset_from_codepoints, CharacterSet};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use ttf_parser::Face;

/// An error that may occur when extracting the character set of a font file.
#[derive(Debug)]
pub enum ExtractError {
    /// The font file could not be read.
    Io(io::Error),
    /// The file is not a recognized font format.
    Parse(ttf_parser::FaceParsingError),
    /// The font carries no character map table.
    NoCharacterMap,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(f, "The font file could not be read: {}.", error),
            Self::Parse(error) => {
                write!(f, "The file is not a recognized font format: {}.", error)
            }
            Self::NoCharacterMap => write!(f, "The font carries no character map table."),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            Self::Parse(error) => Some(error),
            Self::NoCharacterMap => None,
        }
    }
}

/// Returns the set of code points the font file at the given path supports.
///
/// # Errors
///
/// This function returns an error if the file can not be read, is not a recognized font format, or carries no character map.
pub fn character_set<P: AsRef<Path>>(path: P) -> Result<CharacterSet, ExtractError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(ExtractError::Io)?;
    let charset = character_set_from_bytes(&data)?;

    log::info!(
        "extracted {} code points from '{}'",
        charset.len(),
        path.display()
    );

    Ok(charset)
}

/// Returns the set of code points supported by the font in the given bytes.
///
/// # Errors
///
/// This function returns an error if the bytes are not a recognized font format or the font carries no character map.
pub fn character_set_from_bytes(data: &[u8]) -> Result<CharacterSet, ExtractError> {
    let face = Face::parse(data, 0).map_err(ExtractError::Parse)?;
    let cmap = face.tables().cmap.ok_or(ExtractError::NoCharacterMap)?;
    let mut codepoints: Vec<u32> = Vec::new();

    for subtable in cmap.subtables {
        if !subtable.is_unicode() {
            continue;
        }

        subtable.codepoints(|code| codepoints.push(code));
    }

    Ok(charset_from_codepoints(codepoints))
}
