//! Scanning free-form text for phone numbers.
//!
//! [`PhoneNumberMatcher`] drives a deliberately permissive regex over the
//! text, trims each raw candidate, screens it against date/page/timestamp
//! pre-filters, then parses and verifies it at the configured [`Leniency`].
//! When a whole candidate fails, inner slices of it are retried. A caller
//! supplied try budget bounds the total number of parse attempts, so
//! adversarial input cannot make a scan quadratic.

mod leniency;
mod patterns;

pub use leniency::Leniency;

use crate::number::PhoneNumber;
use crate::util::{self, PhoneNumberUtil};

/// One phone number found in the text.
///
/// The raw string is the exact span of the input: `text[start..start +
/// raw_string.len()] == raw_string` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumberMatch {
    start: usize,
    raw_string: String,
    number: PhoneNumber,
}

impl PhoneNumberMatch {
    fn new(start: usize, raw_string: String, number: PhoneNumber) -> Self {
        Self {
            start,
            raw_string,
            number,
        }
    }

    /// Byte offset of the match in the scanned text.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the match.
    pub fn end(&self) -> usize {
        self.start + self.raw_string.len()
    }

    /// The matched span exactly as it appears in the text.
    pub fn raw_string(&self) -> &str {
        &self.raw_string
    }

    /// The parsed number.
    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }

    /// Consumes the match, returning the parsed number.
    pub fn into_number(self) -> PhoneNumber {
        self.number
    }
}

/// A lazy cursor over the phone numbers in a text.
///
/// Construct one per `(text, region, leniency, budget)` tuple and consume it
/// linearly; it is not resettable. Matches come back in strictly ascending
/// start offset and never overlap.
pub struct PhoneNumberMatcher<'a> {
    util: &'a PhoneNumberUtil,
    text: &'a str,
    preferred_region: Option<&'a str>,
    leniency: Leniency,
    /// Remaining parse/verify attempts. Regex misses are free; every
    /// candidate the verifier rejects costs one.
    max_tries: u32,
    search_index: usize,
    last_match: Option<PhoneNumberMatch>,
}

impl<'a> PhoneNumberMatcher<'a> {
    /// Creates a scanner over `text`.
    ///
    /// `preferred_region` is the region assumed for numbers written without
    /// a country code; `"ZZ"` means none. `max_tries` bounds how many
    /// rejected candidates the scan will chew through before giving up.
    pub fn new(
        util: &'a PhoneNumberUtil,
        text: &'a str,
        preferred_region: Option<&'a str>,
        leniency: Leniency,
        max_tries: u32,
    ) -> Self {
        Self {
            util,
            text,
            preferred_region: util::normalize_region(preferred_region),
            leniency,
            max_tries,
            search_index: 0,
            last_match: None,
        }
    }

    /// The match most recently returned by `next()`, if any.
    pub fn current(&self) -> Option<&PhoneNumberMatch> {
        self.last_match.as_ref()
    }

    fn find(&mut self, mut index: usize) -> Option<PhoneNumberMatch> {
        let text = self.text;
        while self.max_tries > 0 {
            let candidate_match = patterns::candidate_pattern().find_at(text, index)?;
            let start = candidate_match.start();
            let candidate =
                util::trim_after_second_number_start(&text[start..candidate_match.end()]);
            if let Some(matched) = self.extract_match(candidate, start) {
                return Some(matched);
            }
            index = start + candidate.len();
            self.max_tries -= 1;
        }
        None
    }

    fn extract_match(&mut self, candidate: &'a str, offset: usize) -> Option<PhoneNumberMatch> {
        if patterns::pub_pages().is_match(candidate)
            || patterns::slash_separated_dates().is_match(candidate)
        {
            return None;
        }
        if patterns::time_stamps().is_match(candidate) {
            // The minutes sit just past the candidate; a truncated tail
            // means this was not a timestamp after all.
            let following_text = &self.text[offset + candidate.len()..];
            if patterns::time_stamps_suffix().is_match(following_text) {
                return None;
            }
        }
        if let Some(matched) = self.parse_and_verify(candidate, offset) {
            return Some(matched);
        }
        self.extract_inner_match(candidate, offset)
    }

    /// Retries slices of a rejected candidate: the first group alone, the
    /// tail after the first group, and the head before the last group. At
    /// most three further verification attempts.
    fn extract_inner_match(
        &mut self,
        candidate: &'a str,
        offset: usize,
    ) -> Option<PhoneNumberMatch> {
        let group_separator = patterns::group_separator();
        let first_separator = group_separator.find(candidate)?;

        let first_group_only = util::trim_after_unwanted_chars(&candidate[..first_separator.start()]);
        if let Some(matched) = self.parse_and_verify(first_group_only, offset) {
            return Some(matched);
        }
        self.max_tries = self.max_tries.saturating_sub(1);

        let without_first_group_start = first_separator.end();
        let without_first_group =
            util::trim_after_unwanted_chars(&candidate[without_first_group_start..]);
        if let Some(matched) =
            self.parse_and_verify(without_first_group, offset + without_first_group_start)
        {
            return Some(matched);
        }
        self.max_tries = self.max_tries.saturating_sub(1);

        if self.max_tries > 0 {
            let mut last_group_start = without_first_group_start;
            for separator in group_separator.find_iter(candidate).skip(1) {
                last_group_start = separator.start();
            }
            let without_last_group =
                util::trim_after_unwanted_chars(&candidate[..last_group_start]);
            if without_last_group == first_group_only {
                // Only two groups; this slice was already tried.
                return None;
            }
            if let Some(matched) = self.parse_and_verify(without_last_group, offset) {
                return Some(matched);
            }
            self.max_tries = self.max_tries.saturating_sub(1);
        }
        None
    }

    fn parse_and_verify(&self, candidate: &str, offset: usize) -> Option<PhoneNumberMatch> {
        // Formatting that survives the master regex but can't appear in a
        // real number, like unbalanced brackets.
        if !patterns::matching_brackets().is_match(candidate) {
            return None;
        }

        if self.leniency >= Leniency::Valid {
            // Numbers glued to Latin words or currency amounts are data,
            // not phone numbers. A candidate starting with its own lead
            // character (plus or bracket) vouches for its left edge.
            let starts_with_lead = candidate
                .chars()
                .next()
                .is_some_and(patterns::is_lead_class_char);
            if offset > 0 && !starts_with_lead {
                if let Some(previous) = self.text[..offset].chars().next_back() {
                    if patterns::is_invalid_punctuation(previous)
                        || patterns::is_latin_letter(previous)
                    {
                        return None;
                    }
                }
            }
            let after = offset + candidate.len();
            if after < self.text.len() {
                if let Some(next) = self.text[after..].chars().next() {
                    if patterns::is_invalid_punctuation(next) || patterns::is_latin_letter(next) {
                        return None;
                    }
                }
            }
        }

        let mut number = self
            .util
            .parse_and_keep_raw_input(candidate, self.preferred_region)
            .ok()?;
        if self.leniency.verify(&number, candidate, self.util) {
            // Raw-input parsing byproducts are not part of a match.
            number.clear_country_code_source();
            number.clear_raw_input();
            number.clear_preferred_domestic_carrier_code();
            return Some(PhoneNumberMatch::new(offset, candidate.to_string(), number));
        }
        None
    }
}

impl Iterator for PhoneNumberMatcher<'_> {
    type Item = PhoneNumberMatch;

    fn next(&mut self) -> Option<PhoneNumberMatch> {
        let matched = self.find(self.search_index)?;
        self.search_index = matched.end();
        self.last_match = Some(matched.clone());
        Some(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher<'a>(text: &'a str, region: &'a str, leniency: Leniency) -> PhoneNumberMatcher<'a> {
        PhoneNumberMatcher::new(PhoneNumberUtil::instance(), text, Some(region), leniency, 1000)
    }

    #[test]
    fn test_single_match() {
        let mut numbers = matcher("Call me at 650-253-0000.", "US", Leniency::Valid);
        let m = numbers.next().unwrap();
        assert_eq!(m.start(), 11);
        assert_eq!(m.raw_string(), "650-253-0000");
        assert_eq!(m.number().national_number(), "6502530000");
        assert!(numbers.next().is_none());
    }

    #[test]
    fn test_current_tracks_last_match() {
        let mut numbers = matcher("650-253-0000 and 800-500-1234", "US", Leniency::Valid);
        assert!(numbers.current().is_none());
        let first = numbers.next().unwrap();
        assert_eq!(numbers.current(), Some(&first));
        let second = numbers.next().unwrap();
        assert_eq!(numbers.current(), Some(&second));
        assert_ne!(first, second);
    }

    #[test]
    fn test_zero_budget_finds_nothing() {
        let mut numbers =
            PhoneNumberMatcher::new(PhoneNumberUtil::instance(), "650-253-0000", Some("US"), Leniency::Valid, 0);
        assert!(numbers.next().is_none());
    }

    #[test]
    fn test_match_number_is_sanitized() {
        let m = matcher("650-253-0000", "US", Leniency::Valid).next().unwrap();
        assert!(m.number().raw_input().is_none());
        assert!(m.number().country_code_source().is_none());
        assert!(m.number().preferred_domestic_carrier_code().is_none());
    }

    #[test]
    fn test_zz_region_is_none() {
        // "ZZ" behaves exactly like no region: only international forms match.
        let mut zz = matcher("650-253-0000 or +41 79 123 45 67", "ZZ", Leniency::Valid);
        let m = zz.next().unwrap();
        assert_eq!(m.raw_string(), "+41 79 123 45 67");
        assert!(zz.next().is_none());
    }

    #[test]
    fn test_inner_match_recovers_tail() {
        // The full candidate includes trailing junk digits; the head before
        // the last group separator is a valid number.
        let mut numbers = matcher("Contact: +41 79 123 45 67 / 68", "CH", Leniency::Valid);
        let m = numbers.next().unwrap();
        assert_eq!(m.raw_string(), "+41 79 123 45 67");
    }
}
