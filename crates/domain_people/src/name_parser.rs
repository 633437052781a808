//! Free-text name parsing
//!
//! Recovers first, middle and last name components from loosely structured
//! Western-order input of the form `[titles] first [middle] last [suffixes]`.
//!
//! # Algorithm
//!
//! 1. Whitespace runs are collapsed and the input is split into tokens.
//! 2. A leading run of honorific titles (`Mr.`, `Dr`, `Sir`, ...) is dropped.
//! 3. A trailing run of suffixes is dropped. Known suffixes (`Jr.`, `Sr`,
//!    `Esq`, ...) are always dropped. Generational markers (upper-case Roman
//!    numerals, digit runs such as `111`, ordinals such as `3rd`) are only
//!    dropped while at least two tokens would remain, so `Jon V` keeps `V` as
//!    the last name.
//! 4. Two remaining tokens are `first last`, three are `first middle last`.
//!    Anything else is rejected with [`IdentityError::InvalidFormat`].

use std::collections::HashSet;

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::config::NameParserConfig;
use crate::error::{IdentityError, IdentityResult};
use crate::name::Name;

const TITLES: &[&str] = &[
    "mr", "mrs", "miss", "ms", "mx", "dr", "sir", "dame", "lady", "lord", "madam", "prof", "rev",
];

const SUFFIXES: &[&str] = &["jr", "sr", "esq", "phd", "md"];

const ROMAN_NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

static DEFAULT_PARSER: Lazy<NameParser> = Lazy::new(NameParser::new);

/// Parses text with the built-in title and suffix lookups.
pub fn parse(text: &str) -> IdentityResult<Name> {
    DEFAULT_PARSER.parse(text)
}

/// Parser from free text to a structured [`Name`].
#[derive(Debug, Clone)]
pub struct NameParser {
    titles: HashSet<String>,
    suffixes: HashSet<String>,
}

impl Default for NameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl NameParser {
    /// Creates a parser using the built-in lookups
    pub fn new() -> Self {
        Self {
            titles: TITLES.iter().map(|title| title.to_string()).collect(),
            suffixes: SUFFIXES.iter().map(|suffix| suffix.to_string()).collect(),
        }
    }

    /// Creates a parser whose lookups are extended by `config`
    pub fn with_config(config: &NameParserConfig) -> Self {
        let mut parser = Self::new();
        parser
            .titles
            .extend(config.extra_titles.iter().map(|title| normalize(title)));
        parser
            .suffixes
            .extend(config.extra_suffixes.iter().map(|suffix| normalize(suffix)));
        parser
    }

    /// Returns true if the token is a recognized honorific title
    pub fn is_title(&self, token: &str) -> bool {
        self.titles.contains(&normalize(token))
    }

    /// Returns true if the token is a recognized generational or
    /// professional suffix
    pub fn is_suffix(&self, token: &str) -> bool {
        self.suffixes.contains(&normalize(token))
    }

    /// Parses the text into a [`Name`]
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidFormat`] carrying the original input
    /// when fewer than two or more than three name tokens remain after titles
    /// and suffixes are stripped.
    pub fn parse(&self, text: &str) -> IdentityResult<Name> {
        let tokens: Vec<&str> = text.split_whitespace().collect();

        let start = tokens
            .iter()
            .position(|token| !self.is_title(token))
            .unwrap_or(tokens.len());

        let mut end = tokens.len();

        while end > start {
            let token = tokens[end - 1];

            if self.is_suffix(token) || (is_generational_marker(token) && end - start > 2) {
                end -= 1;
            } else {
                break;
            }
        }

        let components = &tokens[start..end];

        trace!(
            titles = start,
            suffixes = tokens.len() - end,
            components = components.len(),
            "tokenized name"
        );

        match components {
            [first, last] => Name::new(*first, None, *last),
            [first, middle, last] => Name::new(*first, Some(*middle), *last),
            _ => {
                debug!(input = text, components = components.len(), "rejected name");
                Err(IdentityError::invalid_format(text))
            }
        }
    }
}

/// Lower-cases the token and drops one trailing period.
fn normalize(token: &str) -> String {
    let token = token.trim();
    token.strip_suffix('.').unwrap_or(token).to_lowercase()
}

/// Returns true for `III`, `111`, `3rd` and similar generation markers.
fn is_generational_marker(token: &str) -> bool {
    is_roman_numeral(token) || is_digits(token) || is_ordinal(token)
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

fn is_ordinal(token: &str) -> bool {
    let lower = token.to_lowercase();

    ["st", "nd", "rd", "th"]
        .iter()
        .filter_map(|ending| lower.strip_suffix(*ending))
        .any(is_digits)
}

/// Returns true for a canonical upper-case Roman numeral between 1 and 3999.
fn is_roman_numeral(token: &str) -> bool {
    if token.is_empty() || !token.chars().all(|c| "IVXLCDM".contains(c)) {
        return false;
    }

    let values: Vec<u32> = token.chars().filter_map(roman_digit).collect();

    let mut value = 0i64;
    for (index, digit) in values.iter().enumerate() {
        match values.get(index + 1) {
            Some(next) if next > digit => value -= i64::from(*digit),
            _ => value += i64::from(*digit),
        }
    }

    (1..4000).contains(&value) && to_roman(value as u32) == token
}

fn roman_digit(c: char) -> Option<u32> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

fn to_roman(mut value: u32) -> String {
    let mut numeral = String::new();

    for (amount, symbol) in ROMAN_NUMERALS {
        while value >= amount {
            numeral.push_str(symbol);
            value -= amount;
        }
    }

    numeral
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_name(name: &Name, first: &str, middle: Option<&str>, last: &str) {
        assert_eq!(name.first_name(), first);
        assert_eq!(name.middle_name(), middle);
        assert_eq!(name.last_name(), last);
    }

    #[test]
    fn test_first_and_last() {
        assert_name(&parse("Jon Bloom").unwrap(), "Jon", None, "Bloom");
    }

    #[test]
    fn test_first_middle_initial_and_last() {
        assert_name(&parse("Jon J Bloom").unwrap(), "Jon", Some("J"), "Bloom");
    }

    #[test]
    fn test_first_middle_and_last() {
        assert_name(&parse("Jon Jason Bloom").unwrap(), "Jon", Some("Jason"), "Bloom");
    }

    #[test]
    fn test_suffix_without_period() {
        assert_name(&parse("Jon Bloom Sr").unwrap(), "Jon", None, "Bloom");
    }

    #[test]
    fn test_suffix_with_period() {
        assert_name(&parse("Jon J Bloom Jr.").unwrap(), "Jon", Some("J"), "Bloom");
    }

    #[test]
    fn test_roman_numeral_suffix() {
        assert_name(
            &parse("Charles Gordon Howell III").unwrap(),
            "Charles",
            Some("Gordon"),
            "Howell",
        );
    }

    #[test]
    fn test_titles() {
        assert_name(&parse("Miss Ellie Bloom").unwrap(), "Ellie", None, "Bloom");
        assert_name(&parse("Mrs. Sarah E Bloom").unwrap(), "Sarah", Some("E"), "Bloom");
        assert_name(&parse("Mr. Jon Jason Bloom").unwrap(), "Jon", Some("Jason"), "Bloom");
        assert_name(&parse("dr evil mister").unwrap(), "evil", None, "mister");
    }

    #[test]
    fn test_multiple_titles_and_suffixes() {
        assert_name(&parse("Sir Dr. Senior Bloom Jr. 111").unwrap(), "Senior", None, "Bloom");
        assert_name(
            &parse("Sir Dr. Senior Xander Bloom Jr. 11").unwrap(),
            "Senior",
            Some("Xander"),
            "Bloom",
        );
    }

    #[test]
    fn test_title_and_suffix() {
        assert_name(&parse("Dr. Evil Mister Sr.").unwrap(), "Evil", None, "Mister");
    }

    #[test]
    fn test_padded_whitespace() {
        assert_name(&parse("  Jon   J Bloom    ").unwrap(), "Jon", Some("J"), "Bloom");
        assert_name(&parse("Jon\t\nBloom").unwrap(), "Jon", None, "Bloom");
    }

    #[test]
    fn test_generational_marker_kept_when_needed_as_last_name() {
        assert_name(&parse("Jon V").unwrap(), "Jon", None, "V");
        assert_name(&parse("Jon Bloom V").unwrap(), "Jon", None, "Bloom");
    }

    #[test]
    fn test_short_surnames_survive_suffix_stripping() {
        assert_name(&parse("Jon R Doe Jr.").unwrap(), "Jon", Some("R"), "Doe");
        assert_name(&parse("Jon Wei Li").unwrap(), "Jon", Some("Wei"), "Li");
    }

    #[test]
    fn test_invalid_names() {
        for input in ["Jon", "Jon Jr.", "Mr. Jon", "", "  "] {
            let error = parse(input).unwrap_err();
            assert_eq!(error, IdentityError::invalid_format(input));
            assert_eq!(
                error.to_string(),
                format!("First and last name are required; was [{}]", input)
            );
        }
    }

    #[test]
    fn test_more_than_three_components_is_rejected() {
        let error = parse("Jon Jacob Jingleheimer Schmidt").unwrap_err();
        assert!(matches!(error, IdentityError::InvalidFormat { .. }));
    }

    #[test]
    fn test_roman_numerals() {
        for numeral in ["I", "II", "III", "IV", "IX", "XIV", "MCMXCIV"] {
            assert!(is_roman_numeral(numeral), "{} should be a numeral", numeral);
        }
        for token in ["IIII", "VX", "iii", "Li", "", "Bloom", "IC"] {
            assert!(!is_roman_numeral(token), "{} should not be a numeral", token);
        }
    }

    #[test]
    fn test_ordinals_and_digits() {
        assert!(is_generational_marker("3rd"));
        assert!(is_generational_marker("2ND"));
        assert!(is_generational_marker("111"));
        assert!(!is_generational_marker("rd"));
        assert!(!is_generational_marker("Third"));
    }

    #[test]
    fn test_configured_lookups() {
        let config = NameParserConfig::default()
            .with_title("Capt.")
            .with_suffix("CPA");
        let parser = NameParser::with_config(&config);

        assert!(parser.is_title("capt"));
        assert!(parser.is_suffix("cpa."));
        assert_name(&parser.parse("Capt Jon Bloom CPA").unwrap(), "Jon", None, "Bloom");
        assert!(NameParser::new().parse("Capt Jon Bloom CPA").is_err());
    }
}
