//! Reading digit strings aloud
//!
//! Digit roots take their suffixes by the harmony of the spoken number
//! ("12'ye" because "on iki" ends in a front vowel), so digit finders spell
//! the number out before computing phonetic attributes.

use crate::error::{CoreError, Result};
use regex::Regex;
use std::sync::OnceLock;

const ONES: [&str; 10] = [
    "sıfır", "bir", "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz",
];

const TENS: [&str; 10] = [
    "", "on", "yirmi", "otuz", "kırk", "elli", "altmış", "yetmiş", "seksen", "doksan",
];

const THOUSAND_POWERS: [&str; 22] = [
    "",
    "bin",
    "milyon",
    "milyar",
    "trilyon",
    "katrilyon",
    "kentilyon",
    "seksilyon",
    "septilyon",
    "oktilyon",
    "nonilyon",
    "desilyon",
    "undesilyon",
    "dodesilyon",
    "tredesilyon",
    "katordesilyon",
    "kendesilyon",
    "seksdesilyon",
    "septendesilyon",
    "oktodesilyon",
    "novemdesilyon",
    "vigintilyon",
];

/// Largest supported natural number has this many digits
pub const MAX_DIGITS: usize = 66;

const ZERO_NAME: &str = "sıfır";
const HUNDRED_NAME: &str = "yüz";
const THOUSAND_NAME: &str = "bin";
const COMMA_NAME: &str = "virgül";
const MINUS_NAME: &str = "eksi";

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        #[allow(clippy::expect_used)]
        Regex::new(r"^[-+]?[0-9]+(,[0-9])?[0-9]*$").expect("numeral pattern is valid")
    })
}

/// Spell out a digit string in Turkish.
///
/// `.` groups thousands and is ignored, `,` separates the fraction and a
/// leading sign is allowed. Leading zeros are read out one by one.
///
/// ```
/// use turkmorph_core::numeral::digits_to_text;
///
/// assert_eq!(digits_to_text("12").unwrap(), "on iki");
/// assert_eq!(digits_to_text("1.000.001").unwrap(), "bir milyon bir");
/// assert_eq!(digits_to_text("-3,05").unwrap(), "eksi üç virgül sıfır beş");
/// ```
pub fn digits_to_text(digits: &str) -> Result<String> {
    let invalid = || CoreError::InvalidNumeral(digits.to_string());
    if digits.trim().is_empty() {
        return Err(invalid());
    }
    let cleaned: String = digits.chars().filter(|c| *c != '.').collect();
    if !number_pattern().is_match(&cleaned) {
        return Err(invalid());
    }

    let (integer, fraction) = match cleaned.split_once(',') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (cleaned.as_str(), None),
    };
    let (negative, unsigned) = if let Some(rest) = integer.strip_prefix('+') {
        (false, rest)
    } else if let Some(rest) = integer.strip_prefix('-') {
        (true, rest)
    } else {
        (false, integer)
    };

    let mut integer_words = with_leading_zeros(unsigned, natural_to_words(unsigned).ok_or_else(invalid)?);
    if negative && unsigned.chars().any(|c| c != '0') {
        integer_words = format!("{MINUS_NAME} {integer_words}");
    }

    match fraction {
        Some(fraction) => {
            let fraction_words = if fraction.is_empty() {
                ZERO_NAME.to_string()
            } else {
                with_leading_zeros(fraction, natural_to_words(fraction).ok_or_else(invalid)?)
            };
            Ok(format!("{integer_words} {COMMA_NAME} {fraction_words}"))
        }
        None => Ok(integer_words),
    }
}

fn with_leading_zeros(digits: &str, words: String) -> String {
    let zeros = digits
        .chars()
        .take(digits.chars().count().saturating_sub(1))
        .take_while(|c| *c == '0')
        .count();
    let mut result = String::new();
    for _ in 0..zeros {
        result.push_str(ZERO_NAME);
        result.push(' ');
    }
    result.push_str(&words);
    result
}

/// Words for an unsigned digit string, `None` past [`MAX_DIGITS`]
fn natural_to_words(digits: &str) -> Option<String> {
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some(ZERO_NAME.to_string());
    }
    if significant.len() > MAX_DIGITS {
        return None;
    }

    // groups of three, least significant first
    let bytes = significant.as_bytes();
    let mut groups: Vec<u16> = Vec::with_capacity(bytes.len() / 3 + 1);
    let mut end = bytes.len();
    while end > 0 {
        let start = end.saturating_sub(3);
        let group = bytes[start..end]
            .iter()
            .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
        groups.push(group);
        end = start;
    }

    if groups.len() == 1 {
        return Some(below_thousand(groups[0]));
    }

    let mut words: Vec<String> = Vec::new();
    for power in (1..groups.len()).rev() {
        match groups[power] {
            0 => {}
            1 if power == 1 => words.push(THOUSAND_NAME.to_string()),
            group => {
                words.push(below_thousand(group));
                words.push(THOUSAND_POWERS[power].to_string());
            }
        }
    }
    if groups[0] > 0 {
        words.push(below_thousand(groups[0]));
    }
    Some(words.join(" "))
}

fn below_thousand(n: u16) -> String {
    let hundreds = n / 100;
    let tens = (n % 100) / 10;
    let ones = n % 10;
    if n < 10 {
        return ONES[n as usize].to_string();
    }

    let mut words: Vec<&str> = Vec::with_capacity(4);
    if hundreds > 0 {
        if hundreds > 1 {
            words.push(ONES[hundreds as usize]);
        }
        words.push(HUNDRED_NAME);
    }
    if tens > 0 {
        words.push(TENS[tens as usize]);
    }
    if ones > 0 {
        words.push(ONES[ones as usize]);
    }
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_small_numbers() {
        assert_eq!(digits_to_text("0").unwrap(), "sıfır");
        assert_eq!(digits_to_text("7").unwrap(), "yedi");
        assert_eq!(digits_to_text("10").unwrap(), "on");
        assert_eq!(digits_to_text("45").unwrap(), "kırk beş");
        assert_eq!(digits_to_text("100").unwrap(), "yüz");
        assert_eq!(digits_to_text("101").unwrap(), "yüz bir");
        assert_eq!(digits_to_text("999").unwrap(), "dokuz yüz doksan dokuz");
    }

    #[test]
    fn test_thousands_and_above() {
        assert_eq!(digits_to_text("1000").unwrap(), "bin");
        assert_eq!(digits_to_text("1.001").unwrap(), "bin bir");
        assert_eq!(digits_to_text("2000").unwrap(), "iki bin");
        assert_eq!(digits_to_text("1000000").unwrap(), "bir milyon");
        assert_eq!(
            digits_to_text("12.345.678").unwrap(),
            "on iki milyon üç yüz kırk beş bin altı yüz yetmiş sekiz"
        );
        assert_eq!(digits_to_text("3000000000").unwrap(), "üç milyar");
    }

    #[test]
    fn test_signs_fractions_and_leading_zeros() {
        assert_eq!(digits_to_text("-5").unwrap(), "eksi beş");
        assert_eq!(digits_to_text("+5").unwrap(), "beş");
        assert_eq!(digits_to_text("-0").unwrap(), "sıfır");
        assert_eq!(digits_to_text("007").unwrap(), "sıfır sıfır yedi");
        assert_eq!(digits_to_text("3,5").unwrap(), "üç virgül beş");
        assert_eq!(digits_to_text("0,25").unwrap(), "sıfır virgül yirmi beş");
    }

    #[test]
    fn test_limits_and_garbage() {
        let largest = "9".repeat(MAX_DIGITS);
        assert!(digits_to_text(&largest).unwrap().ends_with("dokuz yüz doksan dokuz"));
        assert!(digits_to_text(&largest).unwrap().starts_with("dokuz yüz doksan dokuz vigintilyon"));
        assert!(matches!(
            digits_to_text(&"1".repeat(MAX_DIGITS + 1)),
            Err(CoreError::InvalidNumeral(_))
        ));
        assert!(digits_to_text("").is_err());
        assert!(digits_to_text("12a").is_err());
        assert!(digits_to_text("1,2,3").is_err());
    }

    proptest! {
        #[test]
        fn prop_reading_is_deterministic_and_clean(n in any::<u64>()) {
            let digits = n.to_string();
            let first = digits_to_text(&digits).unwrap();
            prop_assert_eq!(&first, &digits_to_text(&digits).unwrap());
            prop_assert!(!first.is_empty());
            prop_assert!(!first.contains("  "));
            prop_assert_eq!(first.trim(), first.as_str());
        }
    }
}
