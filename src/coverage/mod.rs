//! # The Coverage Analyzer
//!
//! Computes how completely a font covers a coverage target.
//!
//! A target is either a [Unicode block](blocks) (a contiguous range of code points) or a [language profile](languages) (an explicit, possibly scattered set of code points).
//! Both reduce to the same question: which of the target's required code points are present in the font's [character set](crate::data::CharacterSet)?
//!
//! Every operation is a pure function over immutable inputs.
//! There is no shared mutable state, so coverage may be computed from any number of threads at once, for example when comparing several fonts side by side.
//! Results are deterministic: the same inputs yield the same [`CoverageResult`], with matched and missing code points sorted in ascending order.
//!
//! Queries never scan the full Unicode code space.
//! A block query walks the ordered character set over the block's range; a profile query probes each required code point individually.
//!
//! # Usage
//!
//! Resolve a target by name with [`block`] or [`language`], then pass it together with a character set to [`block_coverage`] or [`language_coverage`].
//! [`all_blocks_coverage`] and [`all_languages_coverage`] report on the entire reference tables for overview screens.
//!
//! # Example
//!
//! ```
//! # use tectura::coverage;
//! # use tectura::data::CharacterSet;
//! let charset: CharacterSet = "AaBbCc".chars().collect();
//! let block = coverage::block("Basic Latin")?;
//! let result = coverage::block_coverage(&charset, block);
//! assert_eq!(result.matched_count(), 6);
//! assert_eq!(result.total(), 96);
//! # Ok::<(), coverage::LookupError>(())
//! ```

pub mod blocks;
pub mod languages;

use crate::data::CharacterSet;
use blocks::UnicodeBlock;
use languages::LanguageProfile;
use spans::Spans;
use std::fmt;
use std::ops::RangeInclusive;

/// An error that may occur when resolving a coverage target by name.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum LookupError {
    /// No bundled Unicode block carries the requested name.
    UnknownBlock(String),
    /// No bundled language profile carries the requested name.
    UnknownLanguage(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBlock(name) => write!(f, "There is no Unicode block named '{}'.", name),
            Self::UnknownLanguage(name) => {
                write!(f, "There is no language profile named '{}'.", name)
            }
        }
    }
}

impl std::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

/// Resolves a bundled Unicode block by name.
///
/// # Errors
///
/// This function returns an error naming the requested identifier if no bundled block carries the given name.
///
/// # Example
///
/// ```
/// # use tectura::coverage;
/// assert!(coverage::block("Basic Latin").is_ok());
/// assert!(coverage::block("Nonexistent-Block").is_err());
/// ```
pub fn block(name: &str) -> Result<&'static UnicodeBlock, LookupError> {
    blocks::from_name(name).ok_or_else(|| LookupError::UnknownBlock(name.to_string()))
}

/// Resolves a bundled language profile by name.
///
/// # Errors
///
/// This function returns an error naming the requested identifier if no bundled profile carries the given name.
///
/// # Example
///
/// ```
/// # use tectura::coverage;
/// assert!(coverage::language("Swedish").is_ok());
/// assert!(coverage::language("Test-Lang").is_err());
/// ```
pub fn language(name: &str) -> Result<&'static LanguageProfile, LookupError> {
    languages::from_name(name).ok_or_else(|| LookupError::UnknownLanguage(name.to_string()))
}

/// The coverage of a font over one target.
///
/// The matched code points are the intersection of the target's required set with the font's character set.
/// Matched and missing partition the required set: their union is the required set and they share no code point.
/// Both are sorted in ascending order for stable display.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct CoverageResult {
    total: usize,
    matched: Vec<char>,
    missing: Vec<char>,
}

impl CoverageResult {
    /// The number of code points the target requires.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The required code points present in the font, sorted ascending.
    pub fn matched(&self) -> &[char] {
        &self.matched
    }

    /// The required code points absent from the font, sorted ascending.
    pub fn missing(&self) -> &[char] {
        &self.missing
    }

    /// The number of required code points present in the font.
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// The number of required code points absent from the font.
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    /// The fraction of required code points present in the font, from `0.0` to `1.0`.
    ///
    /// A target requiring no code points is covered completely; its ratio is `1.0` for every font.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.matched.len() as f64 / self.total as f64
        }
    }

    /// Whether every required code point is present in the font.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Groups the missing code points into maximal runs of consecutive code points.
    ///
    /// The runs are returned in ascending order.
    /// This is a display aid: a gap report such as `U+0043` and `U+0045..U+005A` reads better than 23 individual code points.
    ///
    /// # Example
    ///
    /// ```
    /// # use tectura::coverage;
    /// # use tectura::data::CharacterSet;
    /// let charset: CharacterSet = "ABD".chars().collect();
    /// let block = coverage::blocks::UnicodeBlock::new("Capital Latin Letters", 'A', 'Z').unwrap();
    /// let result = coverage::block_coverage(&charset, &block);
    /// assert_eq!(result.missing_runs(), vec!['C'..='C', 'E'..='Z']);
    /// ```
    pub fn missing_runs(&self) -> Vec<RangeInclusive<char>> {
        let mut runs: Vec<RangeInclusive<char>> = Vec::new();
        let mut spans = self
            .missing
            .iter()
            .enumerate()
            .spans_by_key(|(_, &code)| code as u32, |code_a, code_b| code_a + 1 == code_b);

        while let Some(mut span) = spans.next() {
            let (_, &start) = span.next().unwrap();
            let end = span.last().map_or(start, |(_, &code)| code);
            runs.push(start..=end);
        }

        runs
    }
}

/// The required code points of a coverage target.
///
/// Both target kinds reduce to a membership test against the font's character set; they differ only in how the required set is stored.
enum Required<'a> {
    /// A contiguous inclusive range of code points.
    Range(char, char),
    /// An explicit, possibly scattered set of code points.
    Set(&'a CharacterSet),
}

/// Partitions the required code points of a target into matched and missing.
fn coverage(charset: &CharacterSet, required: Required<'_>) -> CoverageResult {
    let mut matched: Vec<char> = Vec::new();
    let mut missing: Vec<char> = Vec::new();

    match required {
        Required::Range(start, end) => {
            // Both the range and the ordered set iterate ascending, so a single merge walk suffices.
            let mut present = charset.range(start..=end).peekable();

            for code in start..=end {
                match present.peek() {
                    Some(&&next) if next == code => {
                        matched.push(code);
                        present.next();
                    }
                    _ => missing.push(code),
                }
            }
        }
        Required::Set(required) => {
            for &code in required {
                if charset.contains(&code) {
                    matched.push(code);
                } else {
                    missing.push(code);
                }
            }
        }
    }

    let total = matched.len() + missing.len();

    CoverageResult {
        total,
        matched,
        missing,
    }
}

/// Returns the coverage of a font over a Unicode block.
///
/// The cost of a query is proportional to the size of the block plus a logarithmic probe into the character set; the full code space is never scanned.
///
/// # Example
///
/// ```
/// # use tectura::coverage;
/// # use tectura::data::CharacterSet;
/// let charset: CharacterSet = "ABD".chars().collect();
/// let block = coverage::blocks::UnicodeBlock::new("Capital Latin Letters", 'A', 'Z').unwrap();
/// let result = coverage::block_coverage(&charset, &block);
/// assert_eq!(result.matched(), ['A', 'B', 'D']);
/// assert_eq!(result.missing_count(), 23);
/// ```
pub fn block_coverage(charset: &CharacterSet, block: &UnicodeBlock) -> CoverageResult {
    let result = coverage(charset, Required::Range(block.start(), block.end()));

    log::trace!(
        "block '{}': {} of {} code points matched",
        block.name(),
        result.matched_count(),
        result.total()
    );

    result
}

/// Returns the coverage of a font over a language profile.
///
/// # Example
///
/// ```
/// # use tectura::coverage;
/// # use tectura::data::CharacterSet;
/// let charset: CharacterSet = "ÅÄ".chars().collect();
/// let profile = coverage::language("Swedish")?;
/// let result = coverage::language_coverage(&charset, profile);
/// assert_eq!(result.matched_count(), 2);
/// # Ok::<(), coverage::LookupError>(())
/// ```
pub fn language_coverage(charset: &CharacterSet, profile: &LanguageProfile) -> CoverageResult {
    let result = coverage(charset, Required::Set(profile.required()));

    log::trace!(
        "language '{}': {} of {} code points matched",
        profile.name(),
        result.matched_count(),
        result.total()
    );

    result
}

/// Returns the coverage of a font over every bundled Unicode block, in table order.
///
/// The overall cost is linear in the size of the block table plus the size of the font's character set.
pub fn all_blocks_coverage(
    charset: &CharacterSet,
) -> Vec<(&'static UnicodeBlock, CoverageResult)> {
    blocks::all()
        .iter()
        .map(|block| (block, block_coverage(charset, block)))
        .collect()
}

/// Returns the coverage of a font over every bundled language profile, in table order.
pub fn all_languages_coverage(
    charset: &CharacterSet,
) -> Vec<(&'static LanguageProfile, CoverageResult)> {
    languages::all()
        .iter()
        .map(|profile| (profile, language_coverage(charset, profile)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::charset_from_codepoints;

    fn make_charset(codepoints: &[u32]) -> CharacterSet {
        charset_from_codepoints(codepoints.iter().copied())
    }

    #[test]
    fn test_block_coverage_uppercase_scenario() {
        let charset = make_charset(&[0x41, 0x42, 0x44]);
        let block = UnicodeBlock::new("Capital Latin Letters", '\u{41}', '\u{5A}').unwrap();
        let result = block_coverage(&charset, &block);

        assert_eq!(result.total(), 26);
        assert_eq!(result.matched(), ['\u{41}', '\u{42}', '\u{44}']);
        assert_eq!(result.missing()[0], '\u{43}');
        assert_eq!(result.missing().last(), Some(&'\u{5A}'));
        assert_eq!(result.missing_count(), 23);
        assert_eq!(result.ratio(), 3.0 / 26.0);
    }

    #[test]
    fn test_language_coverage_scenario() {
        let charset = make_charset(&[0xC5, 0xC4]);
        let profile = languages::LanguageProfile::new("Test-Lang", "ÅÄÖ");
        let result = language_coverage(&charset, &profile);

        assert_eq!(result.total(), 3);
        assert_eq!(result.matched(), ['Ä', 'Å']);
        assert_eq!(result.missing(), ['Ö']);
        assert_eq!(result.ratio(), 2.0 / 3.0);
    }

    #[test]
    fn test_lookup_unknown_names() {
        assert_eq!(
            block("Nonexistent-Block"),
            Err(LookupError::UnknownBlock("Nonexistent-Block".to_string()))
        );
        assert_eq!(
            language("Test-Lang"),
            Err(LookupError::UnknownLanguage("Test-Lang".to_string()))
        );
    }

    #[test]
    fn test_lookup_known_names() {
        assert_eq!(block("Basic Latin").unwrap().start(), '\u{20}');
        assert_eq!(language("Swedish").unwrap().len(), 58);
    }

    #[test]
    fn test_empty_font_misses_every_target() {
        let charset = CharacterSet::new();

        for block in blocks::all() {
            let result = block_coverage(&charset, block);
            assert_eq!(result.ratio(), 0.0, "{}", block.name());
            assert_eq!(result.matched_count(), 0);
            assert_eq!(result.missing_count(), result.total());
        }

        for profile in languages::all() {
            let result = language_coverage(&charset, profile);
            assert_eq!(result.ratio(), 0.0, "{}", profile.name());
        }
    }

    #[test]
    fn test_empty_target_is_fully_covered() {
        let profile = languages::LanguageProfile::new("Empty", "");

        let empty_font = CharacterSet::new();
        assert_eq!(language_coverage(&empty_font, &profile).ratio(), 1.0);

        let small_font = make_charset(&[0x41]);
        let result = language_coverage(&small_font, &profile);
        assert_eq!(result.ratio(), 1.0);
        assert_eq!(result.total(), 0);
        assert!(result.is_complete());
    }

    #[test]
    fn test_full_unicode_font_covers_every_target() {
        let charset: CharacterSet = ('\u{0}'..=std::char::MAX).collect();

        for (block, result) in all_blocks_coverage(&charset) {
            assert_eq!(result.ratio(), 1.0, "{}", block.name());
            assert!(result.is_complete());
            assert_eq!(result.matched_count(), block.len());
        }

        for (profile, result) in all_languages_coverage(&charset) {
            assert_eq!(result.ratio(), 1.0, "{}", profile.name());
            assert!(result.is_complete());
        }
    }

    #[test]
    fn test_matched_is_intersection() {
        let charset = make_charset(&[0x10, 0x41, 0x43, 0x5B, 0x2000]);
        let block = UnicodeBlock::new("Capital Latin Letters", '\u{41}', '\u{5A}').unwrap();
        let result = block_coverage(&charset, &block);

        // Matched code points lie in both the block and the font.
        assert_eq!(result.matched(), ['\u{41}', '\u{43}']);
        for &code in result.matched() {
            assert!(block.contains(code));
            assert!(charset.contains(&code));
        }
        for &code in result.missing() {
            assert!(block.contains(code));
            assert!(!charset.contains(&code));
        }
    }

    #[test]
    fn test_partition_property_randomized() {
        use rand::prelude::*;
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let charset: CharacterSet = (0x20u32..0x300)
                .filter(|_| rng.gen::<f64>() < 0.5)
                .filter_map(std::char::from_u32)
                .collect();
            let required: String = (0x20u32..0x300)
                .filter(|_| rng.gen::<f64>() < 0.1)
                .filter_map(std::char::from_u32)
                .collect();
            let profile = languages::LanguageProfile::new("Random", &required);

            let result = language_coverage(&charset, &profile);

            let mut union: Vec<char> = Vec::new();
            union.extend_from_slice(result.matched());
            union.extend_from_slice(result.missing());
            union.sort();

            let required_sorted: Vec<char> = profile.required().iter().copied().collect();
            assert_eq!(union, required_sorted);
            assert_eq!(
                result.matched_count() + result.missing_count(),
                result.total()
            );
            assert!(result.matched().iter().all(|code| !result.missing().contains(code)));
            assert!(result.ratio() >= 0.0 && result.ratio() <= 1.0);
        }
    }

    #[test]
    fn test_idempotence() {
        let charset = make_charset(&[0x41, 0x100, 0x101, 0x4E00]);
        let block = blocks::from_name("Latin Extended-A").unwrap();
        let profile = languages::from_name("Czech").unwrap();

        assert_eq!(
            block_coverage(&charset, block),
            block_coverage(&charset, block)
        );
        assert_eq!(
            language_coverage(&charset, profile),
            language_coverage(&charset, profile)
        );
    }

    #[test]
    fn test_all_blocks_coverage_is_in_table_order() {
        let charset = make_charset(&[0x41]);
        let overview = all_blocks_coverage(&charset);

        assert_eq!(overview.len(), blocks::all().len());
        for ((block, _), expected) in overview.iter().zip(blocks::all()) {
            assert_eq!(*block, expected);
        }
    }

    #[test]
    fn test_all_languages_coverage_is_in_table_order() {
        let charset = make_charset(&[0x41]);
        let overview = all_languages_coverage(&charset);

        assert_eq!(overview.len(), languages::all().len());
        for ((profile, _), expected) in overview.iter().zip(languages::all()) {
            assert_eq!(*profile, expected);
        }
    }

    #[test]
    fn test_missing_runs_groups_consecutive_code_points() {
        let charset = make_charset(&[0x41, 0x42, 0x44]);
        let block = UnicodeBlock::new("Capital Latin Letters", '\u{41}', '\u{5A}').unwrap();
        let result = block_coverage(&charset, &block);

        assert_eq!(result.missing_runs(), vec!['\u{43}'..='\u{43}', '\u{45}'..='\u{5A}']);
    }

    #[test]
    fn test_missing_runs_of_complete_coverage_is_empty() {
        let charset = make_charset(&[0x41, 0x42]);
        let block = UnicodeBlock::new("AB", '\u{41}', '\u{42}').unwrap();
        let result = block_coverage(&charset, &block);

        assert!(result.missing_runs().is_empty());
    }

    #[test]
    fn test_block_spanning_surrogate_gap() {
        let charset = make_charset(&[0xD7FF, 0xE000]);
        let block = UnicodeBlock::new("Gap", '\u{D7FF}', '\u{E000}').unwrap();
        let result = block_coverage(&charset, &block);

        // The surrogate range holds no scalar values; only its two neighbors are required.
        assert_eq!(result.total(), 2);
        assert_eq!(result.ratio(), 1.0);
        assert!(result.is_complete());
    }
}
