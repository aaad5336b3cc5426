//! Regexes and character classifiers used by the scanner.
//!
//! The candidate pattern deliberately over-matches; everything it produces
//! is screened by the pre-filters here and the verification gates in
//! [`super::leniency`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::util::{extn_patterns_for_matching, PLUS_CHARS, VALID_PUNCTUATION};

/// Brackets that may open a phone number, as a regex class fragment.
const OPENING_PARENS: &str = "(\\[\u{FF08}\u{FF3B}";
const CLOSING_PARENS: &str = ")\\]\u{FF09}\u{FF3D}";

/// The master permissive pattern: up to two lead characters, digit blocks
/// joined by short punctuation runs, and an optional extension suffix.
pub(crate) fn candidate_pattern() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        let lead_class = format!("[{OPENING_PARENS}{PLUS_CHARS}]");
        let punctuation = format!("[{VALID_PUNCTUATION}]{{0,4}}");
        let digit_sequence = r"\d{1,20}";
        Regex::new(&format!(
            "(?i)(?:{lead_class}{punctuation}){{0,2}}{digit_sequence}\
             (?:{punctuation}{digit_sequence}){{0,20}}(?:{extn})?",
            extn = extn_patterns_for_matching(),
        ))
        .expect("valid candidate regex")
    });
    &PATTERN
}

/// Full-match bracket sanity: at most four bracket pairs, and only the very
/// first character may be an unclosed opener (its partner may have been cut
/// off by the candidate boundary).
pub(crate) fn matching_brackets() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        let non_parens = format!("[^{OPENING_PARENS}{CLOSING_PARENS}]");
        let bracket_pair = format!("[{OPENING_PARENS}]{non_parens}+[{CLOSING_PARENS}]");
        Regex::new(&format!(
            "\\A(?:[{OPENING_PARENS}])?(?:{non_parens}+[{CLOSING_PARENS}])?\
             {non_parens}+(?:{bracket_pair}){{0,3}}{non_parens}*\\z",
        ))
        .expect("valid matching brackets regex")
    });
    &PATTERN
}

/// Publication page references: `211-227 (2003)`.
pub(crate) fn pub_pages() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\d{1,5}-+\d{1,5}\s{0,4}\(\d{1,4}").expect("valid pub pages regex"));
    &PATTERN
}

/// Slash-separated dates: `3/10/2011`, `08/31/95`, day/month or month/day.
pub(crate) fn slash_separated_dates() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?:(?:[0-3]?\d/[01]?\d)|(?:[01]?\d/[0-3]?\d))/(?:[12]\d)?\d{2}")
            .expect("valid slash date regex")
    });
    &PATTERN
}

/// Date-then-hour endings: `2012-01-02 08`. The minutes live just past the
/// candidate and are probed separately with [`time_stamps_suffix`].
pub(crate) fn time_stamps() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"[12]\d{3}[-/]?[01]\d[-/]?[0-3]\d +[0-2]\d$").expect("valid time stamp regex")
    });
    &PATTERN
}

/// `:MM` immediately following a candidate that ended like a timestamp.
pub(crate) fn time_stamps_suffix() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\A:[0-5]\d").expect("valid time stamp suffix regex"));
    &PATTERN
}

/// A space followed by anything that cannot start a number: the boundary
/// between two digit groups of one candidate.
pub(crate) fn group_separator() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(&format!(
            r"\p{{Z}}[^{OPENING_PARENS}{PLUS_CHARS}\p{{Nd}}]*"
        ))
        .expect("valid group separator regex")
    });
    &PATTERN
}

/// True for characters that may legitimately begin a phone number: plus
/// signs and opening brackets. A candidate starting with one of these skips
/// the preceding-character boundary check.
pub(crate) fn is_lead_class_char(c: char) -> bool {
    matches!(c, '(' | '[' | '\u{FF08}' | '\u{FF3B}') || PLUS_CHARS.contains(c)
}

/// True for letters of the Latin blocks and for combining diacritical
/// marks, which are assumed to attach to a preceding Latin letter.
pub(crate) fn is_latin_letter(c: char) -> bool {
    match c as u32 {
        // Combining diacritical marks.
        0x0300..=0x036F => true,
        // Basic Latin, Latin-1, Latin Extended-A/B, Latin Extended Additional.
        0x0000..=0x024F | 0x1E00..=0x1EFF => c.is_alphabetic(),
        _ => false,
    }
}

/// True for `%` and currency symbols: a number glued to one of these is a
/// price or a rate, not a phone number.
pub(crate) fn is_invalid_punctuation(c: char) -> bool {
    static CURRENCY: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\A\p{Sc}\z").expect("valid currency regex"));
    if c == '%' {
        return true;
    }
    let mut buf = [0u8; 4];
    CURRENCY.is_match(c.encode_utf8(&mut buf))
}
