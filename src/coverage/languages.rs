//! The language profile reference table.
//!
//! A language profile names the set of code points considered necessary to adequately render a written language.
//! Unlike a Unicode block, the required set of a language is not a contiguous range; accented letters are scattered across several blocks.
//! The bundled table is fixed at compile time, built once on first use, ordered by name, and shared by reference for the lifetime of the process.

use crate::data::CharacterSet;
use lazy_static::lazy_static;
use std::fmt;

/// A named set of code points required to adequately render a written language.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct LanguageProfile {
    name: &'static str,
    required: CharacterSet,
}

impl LanguageProfile {
    /// Creates a profile requiring the characters of the given string.
    ///
    /// Duplicate characters are collapsed; the profile stores each required code point once.
    ///
    /// # Example
    ///
    /// ```
    /// # use tectura::coverage::languages::LanguageProfile;
    /// let profile = LanguageProfile::new("Maori", "AaEeHhIiKkMmNnOoPpRrTtUuWwĀāĒēĪīŌōŪū");
    /// assert_eq!(profile.len(), 36);
    /// ```
    pub fn new(name: &'static str, characters: &str) -> LanguageProfile {
        LanguageProfile {
            name,
            required: characters.chars().collect(),
        }
    }

    /// The name of the language.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The set of code points required by the language.
    pub fn required(&self) -> &CharacterSet {
        &self.required
    }

    /// The number of code points required by the language.
    pub fn len(&self) -> usize {
        self.required.len()
    }

    /// Whether the profile requires no code points.
    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }
}

impl fmt::Display for LanguageProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Name and required characters of each bundled profile, ordered by name.
static LANGUAGE_DATA: [(&str, &str); 17] = [
    ("Arabic", "ابتثجحخدذرزسشصضطظعغفقكلمنهوي"),
    ("Czech", "AaÁáBbCcČčDdĎďEeÉéĚěFfGgHhIiÍíJjKkLlMmNnŇňOoÓóPpQqRrŘřSsŠšTtŤťUuÚúŮůVvWwXxYyÝýZzŽž"),
    ("Danish", "AaBbCcDdEeFfGgHhIiJjKkLlMmNnOoPpQqRrSsTtUuVvWwXxYyZzÆæØøÅå"),
    ("Finnish", "AaBbCcDdEeFfGgHhIiJjKkLlMmNnOoPpQqRrSsTtUuVvWwXxYyZzÅåÄäÖö"),
    ("French", "AaBbCcDdEeFfGgHhIiJjKkLlMmNnOoPpQqRrSsTtUuVvWwXxYyZzÀàÂâÆæÇçÈèÉéÊêËëÎîÏïÔôŒœÙùÛûÜüŸÿ"),
    ("German", "AaBbCcDdEeFfGgHhIiJjKkLlMmNnOoPpQqRrSsTtUuVvWwXxYyZzÄäÖöÜüß"),
    ("Greek", "ΑαΒβΓγΔδΕεΖζΗηΘθΙιΚκΛλΜμΝνΞξΟοΠπΡρΣσςΤτΥυΦφΧχΨψΩω"),
    ("Hebrew", "אבגדהוזחטיכלמנסעפצקרשת"),
    ("Japanese (Hiragana)", "あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわをん"),
    ("Korean (Basic)", "가나다라마바사아자차카타파하"),
    ("Norwegian", "AaBbCcDdEeFfGgHhIiJjKkLlMmNnOoPpQqRrSsTtUuVvWwXxYyZzÆæØøÅå"),
    ("Polish", "AaĄąBbCcĆćDdEeĘęFfGgHhIiJjKkLlŁłMmNnŃńOoÓóPpQqRrSsŚśTtUuVvWwXxYyZzŹźŻż"),
    ("Russian", "АаБбВвГгДдЕеЁёЖжЗзИиЙйКкЛлМмНнОоПпРрСсТтУуФфХхЦцЧчШшЩщЪъЫыЬьЭэЮюЯя"),
    ("Spanish", "AaBbCcDdEeFfGgHhIiJjKkLlMmNnÑñOoPpQqRrSsTtUuVvWwXxYyZzÁáÉéÍíÓóÚúÜü¡¿"),
    ("Swedish", "AaBbCcDdEeFfGgHhIiJjKkLlMmNnOoPpQqRrSsTtUuVvWwXxYyZzÅåÄäÖö"),
    ("Thai", "กขฃคฅฆงจฉชซฌญฎฏฐฑฒณดตถทธนบปผฝพฟภมยรลวศษสหฬอฮ"),
    ("Vietnamese", "AaĂăÂâBbCcDdĐđEeÊêGgHhIiKkLlMmNnOoÔôƠơPpQqRrSsTtUuƯưVvXxYy"),
];

lazy_static! {
    /// The bundled profiles in order of `LANGUAGE_DATA`.
    static ref LANGUAGES: Vec<LanguageProfile> = LANGUAGE_DATA
        .iter()
        .map(|&(name, characters)| LanguageProfile::new(name, characters))
        .collect();
}

/// Returns the bundled profile table in table order.
pub fn all() -> &'static [LanguageProfile] {
    &LANGUAGES
}

/// Returns the bundled profile with the given name, or `None` if the name is unknown.
///
/// # Example
///
/// ```
/// # use tectura::coverage::languages;
/// let profile = languages::from_name("Swedish").unwrap();
/// assert!(profile.required().contains(&'Å'));
/// assert_eq!(languages::from_name("Klingon"), None);
/// ```
pub fn from_name(name: &str) -> Option<&'static LanguageProfile> {
    LANGUAGES.iter().find(|profile| profile.name == name)
}
