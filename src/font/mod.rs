//! Access to the fonts installed on the system.
//!
//! The coverage analyzer itself is pure; this module holds the two collaborators that feed it.
//! [`discover`] lists the installed fonts through Fontconfig, and [`extract`] reads the character set of a font file.

pub mod discover;
pub mod extract;

use std::fmt;
use std::path::PathBuf;

/// Describes one installed font face.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct FontDescriptor {
    /// The name of the font family.
    pub family: String,
    /// The style name of the face.
    pub style: String,
    /// The weight of the face, as reported by Fontconfig.
    pub weight: String,
    /// The slant of the face, as reported by Fontconfig.
    pub slant: String,
    /// The width of the face, as reported by Fontconfig.
    pub width: String,
    /// The path of the font file backing the face.
    pub path: PathBuf,
}

impl FontDescriptor {
    /// The name under which the face is presented to the user.
    ///
    /// The style name is appended to the family name unless the face is the regular style.
    ///
    /// # Example
    ///
    /// ```
    /// # use std::path::PathBuf;
    /// # use tectura::font::FontDescriptor;
    /// let mut font = FontDescriptor {
    ///     family: "Source Serif".to_string(),
    ///     style: "Bold".to_string(),
    ///     weight: String::new(),
    ///     slant: String::new(),
    ///     width: String::new(),
    ///     path: PathBuf::new(),
    /// };
    /// assert_eq!(font.display_name(), "Source Serif Bold");
    /// font.style = "Regular".to_string();
    /// assert_eq!(font.display_name(), "Source Serif");
    /// ```
    pub fn display_name(&self) -> String {
        if !self.style.is_empty() && !self.style.eq_ignore_ascii_case("regular") {
            format!("{} {}", self.family, self.style)
        } else {
            self.family.clone()
        }
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_font(family: &str, style: &str) -> FontDescriptor {
        FontDescriptor {
            family: family.to_string(),
            style: style.to_string(),
            weight: String::new(),
            slant: String::new(),
            width: String::new(),
            path: PathBuf::new(),
        }
    }

    #[test]
    fn test_display_name_with_style() {
        assert_eq!(make_font("Iosevka", "Italic").display_name(), "Iosevka Italic");
    }

    #[test]
    fn test_display_name_hides_regular_style() {
        assert_eq!(make_font("Iosevka", "Regular").display_name(), "Iosevka");
        assert_eq!(make_font("Iosevka", "regular").display_name(), "Iosevka");
        assert_eq!(make_font("Iosevka", "").display_name(), "Iosevka");
    }
}
