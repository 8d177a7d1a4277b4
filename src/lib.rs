//! # The Tectura Coverage Analyzer
//!
//! *Tectura* is a Unicode coverage analyzer for fonts.
//!
//! Given the set of Unicode code points a font supports, Tectura reports how completely the font covers named Unicode blocks and named language character sets.
//! Reports are exact: every required code point is classified as matched or missing, and the coverage ratio is the fraction of matched code points.
//!
//! ## Fully supported components
//!
//! - The [coverage analyzer](crate::coverage) with a bundled [Unicode block table](crate::coverage::blocks) and [language profile table](crate::coverage::languages).
//! - [Font discovery](crate::font::discover) through Fontconfig and [character set extraction](crate::font::extract) from font files.

#![deny(missing_docs, missing_debug_implementations)]

pub mod coverage;
pub mod data;
pub mod font;
