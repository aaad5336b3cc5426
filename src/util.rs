//! Phone number parsing, validation and formatting.
//!
//! [`PhoneNumberUtil`] supplies everything the scanner needs from the rest
//! of the library: the permissive character classes, digit normalization,
//! the raw-input-keeping parser, possible/valid checks, RFC3966 formatting
//! and number comparison. All patterns are metadata-driven; the metadata
//! tables live in [`crate::metadata`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::cache;
use crate::error::{NumberParseError, ParseResult};
use crate::matcher::{Leniency, PhoneNumberMatcher};
use crate::metadata::{self, NumberFormat, PhoneMetadata};
use crate::number::{CountryCodeSource, MatchType, PhoneNumber};

/// Characters accepted as a plus sign.
pub const PLUS_CHARS: &str = "+\u{FF0B}";

/// Punctuation accepted between digit groups, as a regex class fragment.
/// Covers ASCII and fullwidth hyphens, slashes, dots, brackets, tildes and
/// the common space characters. Includes `x`, which some notations use as a
/// group separator.
pub const VALID_PUNCTUATION: &str = "-x\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \
\u{00A0}\u{00AD}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\u{FF3D}.\\[\\]/~\u{2053}\u{223C}\u{FF5E}";

/// Shortest a national significant number can be.
pub(crate) const MIN_LENGTH_FOR_NSN: usize = 2;

/// Longest a national significant number can be.
pub(crate) const MAX_LENGTH_FOR_NSN: usize = 17;

/// Longest a country calling code can be, in digits.
pub(crate) const MAX_LENGTH_COUNTRY_CODE: usize = 3;

/// Output representations supported by [`PhoneNumberUtil::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneNumberFormat {
    /// `+41791234567`
    E164,
    /// `tel:+41-79-123-45-67;ext=12`
    Rfc3966,
}

fn plus_chars_pattern() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(&format!(r"\A[{}]+", PLUS_CHARS)).expect("valid plus chars regex")
    });
    &PATTERN
}

fn valid_start_char_pattern() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(&format!(r"[{}\p{{Nd}}]", PLUS_CHARS)).expect("valid start char regex")
    });
    &PATTERN
}

fn unwanted_end_char_pattern() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"[^\p{N}\p{L}#]+\z").expect("valid unwanted end regex"));
    &PATTERN
}

fn second_number_start_pattern() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"[\\/] *x").expect("valid second number start regex"));
    &PATTERN
}

fn separator_pattern() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(&format!("[{}]+", VALID_PUNCTUATION)).expect("valid separator regex")
    });
    &PATTERN
}

fn non_digits_pattern() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D+").expect("valid non-digit regex"));
    &PATTERN
}

fn capturing_digit_pattern() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(\p{Nd})").expect("valid digit regex"));
    &PATTERN
}

/// Extension notations accepted when scanning prose. Deliberately narrower
/// than the parsing variant: no `,` lead-in and no bare `x`, so a candidate
/// span does not swallow surrounding text the recovery pass could never
/// rescue.
static EXTN_FOR_MATCHING: Lazy<String> = Lazy::new(|| {
    format!(
        ";ext={digits}|[ \u{00A0}\t]*(?:ext(?:ensio)?n?|xtn?)[:.]?[ \u{00A0}\t,-]*{digits}#?|[- ]+(\\d{{1,5}})#",
        digits = r"(\d{1,7})"
    )
});

/// Extension notations accepted when parsing a string that is already known
/// to be a phone number.
static EXTN_FOR_PARSING: Lazy<String> = Lazy::new(|| {
    format!(
        ";ext={digits}|[ \u{00A0}\t,]*(?:ext(?:ensio)?n?|xtn?|anexo|[x#~\u{FF5E}])[:.]?[ \u{00A0}\t,-]*{digits}#?|[- ]+(\\d{{1,5}})#",
        digits = r"(\d{1,7})"
    )
});

fn extn_pattern() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(&format!(r"(?i)(?:{})\z", EXTN_FOR_PARSING.as_str()))
            .expect("valid extension regex")
    });
    &PATTERN
}

fn viable_phone_number_pattern() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        let body = format!(
            r"\d{{2}}|[{plus}]*(?:[{punct}]*\d){{3,}}[{punct}\d]*",
            plus = PLUS_CHARS,
            punct = VALID_PUNCTUATION,
        );
        Regex::new(&format!(
            r"(?i)\A(?:{body})(?:{extn})?\z",
            body = body,
            extn = EXTN_FOR_PARSING.as_str()
        ))
        .expect("valid viability regex")
    });
    &PATTERN
}

/// The regex fragment matching extension suffixes in free text. Consumed by
/// the scanner's master candidate pattern.
pub fn extn_patterns_for_matching() -> &'static str {
    &EXTN_FOR_MATCHING
}

/// Maps a decimal digit in any supported script to its value.
fn unicode_digit(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        '\u{FF10}'..='\u{FF19}' => Some(c as u32 - 0xFF10),
        '\u{0660}'..='\u{0669}' => Some(c as u32 - 0x0660),
        '\u{06F0}'..='\u{06F9}' => Some(c as u32 - 0x06F0),
        _ => None,
    }
}

/// Folds every digit to ASCII. Non-digits are kept verbatim or dropped
/// depending on `keep_non_digits`.
pub fn normalize_digits(text: &str, keep_non_digits: bool) -> String {
    let mut normalized = String::with_capacity(text.len());
    for c in text.chars() {
        match unicode_digit(c) {
            Some(d) => normalized.push(char::from_digit(d, 10).expect("decimal digit")),
            None if keep_non_digits => normalized.push(c),
            None => {}
        }
    }
    normalized
}

/// Folds digits to ASCII and drops everything else.
pub fn normalize_digits_only(text: &str) -> String {
    normalize_digits(text, false)
}

/// Splits on runs of non-digits, dropping trailing empty segments. A leading
/// empty segment is kept so group positions stay stable when the input
/// starts with punctuation.
pub(crate) fn split_digit_groups(text: &str) -> Vec<&str> {
    let mut groups: Vec<&str> = non_digits_pattern().split(text).collect();
    while groups.last() == Some(&"") {
        groups.pop();
    }
    groups
}

/// True if the string has enough of the right characters to possibly be a
/// phone number. This is a shallow gate; real validation needs metadata.
pub fn is_viable_phone_number(number: &str) -> bool {
    number.len() >= MIN_LENGTH_FOR_NSN && viable_phone_number_pattern().is_match(number)
}

/// Cuts the candidate where a second number starts: at a `/` or `\` that is
/// followed, after optional spaces, by `x`. `(530) 583-6985 x302/x2303`
/// keeps only its first extension.
pub fn trim_after_second_number_start(candidate: &str) -> &str {
    match second_number_start_pattern().find(candidate) {
        Some(m) => &candidate[..m.start()],
        None => candidate,
    }
}

/// Right-strips a trailing run of characters that are neither letters,
/// digits nor `#`.
pub(crate) fn trim_after_unwanted_chars(candidate: &str) -> &str {
    match unwanted_end_char_pattern().find(candidate) {
        Some(m) => &candidate[..m.start()],
        None => candidate,
    }
}

/// Slices out the part of `number` that could be a phone number: starts at
/// the first plus or digit, drops trailing junk and anything after a second
/// number start.
pub(crate) fn extract_possible_number(number: &str) -> &str {
    let Some(m) = valid_start_char_pattern().find(number) else {
        return "";
    };
    let candidate = &number[m.start()..];
    trim_after_second_number_start(trim_after_unwanted_chars(candidate))
}

/// Result of checking an NSN's length against a region's possible lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LengthResult {
    TooShort,
    IsPossible,
    InvalidLength,
    TooLong,
}

pub(crate) fn test_number_length(number: &str, metadata: &PhoneMetadata) -> LengthResult {
    let lengths = metadata.general_desc.possible_lengths;
    let len = number.len();
    let min = lengths.iter().copied().min().unwrap_or(MIN_LENGTH_FOR_NSN);
    let max = lengths.iter().copied().max().unwrap_or(MAX_LENGTH_FOR_NSN);
    if len < MIN_LENGTH_FOR_NSN || len < min {
        LengthResult::TooShort
    } else if len > max {
        LengthResult::TooLong
    } else if lengths.contains(&len) {
        LengthResult::IsPossible
    } else {
        LengthResult::InvalidLength
    }
}

pub(crate) fn normalize_region(region: Option<&str>) -> Option<&str> {
    region.filter(|r| !r.is_empty() && *r != metadata::UNKNOWN_REGION)
}

/// Parser, validator, formatter and comparator for phone numbers.
///
/// Stateless; the metadata it consults is embedded. One instance can be
/// shared freely across threads and scanners.
#[derive(Debug, Clone, Default)]
pub struct PhoneNumberUtil;

impl PhoneNumberUtil {
    /// Creates a utility instance.
    pub fn new() -> Self {
        Self
    }

    /// The process-wide shared instance.
    pub fn instance() -> &'static PhoneNumberUtil {
        static INSTANCE: PhoneNumberUtil = PhoneNumberUtil;
        &INSTANCE
    }

    /// Scans `text` for phone numbers at [`Leniency::Valid`] with an
    /// effectively unbounded try budget.
    pub fn find_numbers<'a>(
        &'a self,
        text: &'a str,
        region: Option<&'a str>,
    ) -> PhoneNumberMatcher<'a> {
        PhoneNumberMatcher::new(self, text, region, Leniency::Valid, u32::MAX)
    }

    /// Metadata for a region code, if the library covers it.
    pub fn metadata_for_region(&self, region: &str) -> Option<&'static PhoneMetadata> {
        metadata::metadata_for_region(region)
    }

    /// The main region for a country calling code, or `"ZZ"`.
    pub fn region_code_for_country_code(&self, country_code: u16) -> &'static str {
        metadata::region_code_for_country_code(country_code)
    }

    /// The national significant number of a parsed number as a digit string.
    pub fn national_significant_number(&self, number: &PhoneNumber) -> String {
        number.national_number().to_string()
    }

    /// Parses `number_to_parse` against an optional default region.
    ///
    /// The region is required unless the number starts with a plus sign.
    pub fn parse(&self, number_to_parse: &str, default_region: Option<&str>) -> ParseResult<PhoneNumber> {
        self.parse_helper(number_to_parse, default_region, false)
    }

    /// Like [`parse`](Self::parse), but additionally records the raw input,
    /// how the country code was derived and any carrier selection code.
    pub fn parse_and_keep_raw_input(
        &self,
        number_to_parse: &str,
        default_region: Option<&str>,
    ) -> ParseResult<PhoneNumber> {
        self.parse_helper(number_to_parse, default_region, true)
    }

    fn parse_helper(
        &self,
        number_to_parse: &str,
        default_region: Option<&str>,
        keep_raw_input: bool,
    ) -> ParseResult<PhoneNumber> {
        let default_region = normalize_region(default_region);
        let national_number = extract_possible_number(number_to_parse);
        if !is_viable_phone_number(national_number) {
            return Err(NumberParseError::NotANumber);
        }
        if !self.check_region_for_parsing(national_number, default_region) {
            return Err(NumberParseError::InvalidCountryCode);
        }

        let mut phone = PhoneNumber::default();
        if keep_raw_input {
            phone.set_raw_input(number_to_parse.to_string());
        }
        let mut national = national_number.to_string();
        if let Some(extension) = self.maybe_strip_extension(&mut national) {
            phone.set_extension(extension);
        }

        let mut region_metadata = default_region.and_then(metadata::metadata_for_region);
        let mut normalized_nsn = String::new();
        let country_code = self.maybe_extract_country_code(
            &national,
            region_metadata,
            &mut normalized_nsn,
            keep_raw_input,
            &mut phone,
        )?;
        if country_code != 0 {
            let number_region = metadata::region_code_for_country_code(country_code);
            if Some(number_region) != default_region {
                region_metadata = metadata::metadata_for_country_code(country_code);
            }
        } else {
            // No country code anywhere in the number; it is national.
            normalized_nsn = normalize_digits_only(&national);
            match region_metadata {
                Some(metadata) => phone.set_country_code(metadata.country_code),
                None => return Err(NumberParseError::InvalidCountryCode),
            }
        }
        if normalized_nsn.len() < MIN_LENGTH_FOR_NSN {
            return Err(NumberParseError::TooShortNsn);
        }

        if let Some(region_metadata) = region_metadata {
            let mut carrier_code = String::new();
            let mut potential_nsn = normalized_nsn.clone();
            self.maybe_strip_national_prefix_and_carrier_code(
                &mut potential_nsn,
                region_metadata,
                Some(&mut carrier_code),
            );
            // Keep the stripped form only when it leaves a plausible length.
            match test_number_length(&potential_nsn, region_metadata) {
                LengthResult::TooShort | LengthResult::InvalidLength => {}
                _ => {
                    normalized_nsn = potential_nsn;
                    if keep_raw_input && !carrier_code.is_empty() {
                        phone.set_preferred_domestic_carrier_code(carrier_code);
                    }
                }
            }
        }

        if normalized_nsn.len() < MIN_LENGTH_FOR_NSN {
            return Err(NumberParseError::TooShortNsn);
        }
        if normalized_nsn.len() > MAX_LENGTH_FOR_NSN {
            return Err(NumberParseError::TooLongNsn);
        }
        phone.set_national_number(normalized_nsn);
        Ok(phone)
    }

    fn check_region_for_parsing(&self, number: &str, default_region: Option<&str>) -> bool {
        if default_region
            .and_then(metadata::metadata_for_region)
            .is_some()
        {
            return true;
        }
        plus_chars_pattern().is_match(number)
    }

    /// Strips a leading plus sign or international dialing prefix, leaving
    /// `number` digit-normalized, and reports which form it was written in.
    fn maybe_strip_international_prefix_and_normalize(
        &self,
        number: &mut String,
        possible_idd_prefix: &str,
    ) -> CountryCodeSource {
        if number.is_empty() {
            return CountryCodeSource::FromDefaultCountry;
        }
        if let Some(m) = plus_chars_pattern().find(number) {
            let rest = number[m.end()..].to_string();
            *number = normalize_digits_only(&rest);
            return CountryCodeSource::FromNumberWithPlusSign;
        }
        *number = normalize_digits_only(number);
        let idd = cache::prefix_regex(possible_idd_prefix);
        if let Some(m) = idd.find(number) {
            // The digit right after the prefix must not be zero, or this was
            // not really an international call prefix.
            if let Some(digit) = capturing_digit_pattern().find(&number[m.end()..]) {
                if &number[m.end()..][digit.range()] != "0" {
                    *number = number[m.end()..].to_string();
                    return CountryCodeSource::FromNumberWithIdd;
                }
            }
        }
        CountryCodeSource::FromDefaultCountry
    }

    /// Extracts the country code from the front of `number` into the return
    /// value, pushing the rest onto `national_number`. Returns 0 when the
    /// number carries no recognizable country code.
    fn maybe_extract_country_code(
        &self,
        number: &str,
        default_metadata: Option<&PhoneMetadata>,
        national_number: &mut String,
        keep_raw_input: bool,
        phone: &mut PhoneNumber,
    ) -> ParseResult<u16> {
        if number.is_empty() {
            return Ok(0);
        }
        let mut full_number = number.to_string();
        let idd_prefix = default_metadata.map_or("NonMatch", |m| m.international_prefix);
        let source = self.maybe_strip_international_prefix_and_normalize(&mut full_number, idd_prefix);
        if keep_raw_input {
            phone.set_country_code_source(source);
        }
        if source != CountryCodeSource::FromDefaultCountry {
            if full_number.len() <= MIN_LENGTH_FOR_NSN {
                return Err(NumberParseError::TooShortAfterIdd);
            }
            let country_code = extract_country_code(&full_number, national_number);
            if country_code != 0 {
                phone.set_country_code(country_code);
                return Ok(country_code);
            }
            return Err(NumberParseError::InvalidCountryCode);
        }
        if let Some(metadata) = default_metadata {
            // The number may still start with the default region's country
            // code, written without a plus. Strip it when that reading is
            // clearly better.
            let default_code = metadata.country_code.to_string();
            if let Some(rest) = full_number.strip_prefix(default_code.as_str()) {
                let mut potential = rest.to_string();
                self.maybe_strip_national_prefix_and_carrier_code(&mut potential, metadata, None);
                let general =
                    cache::full_match_regex(metadata.general_desc.national_number_pattern);
                if (!general.is_match(&full_number) && general.is_match(&potential))
                    || test_number_length(&full_number, metadata) == LengthResult::TooLong
                {
                    national_number.push_str(&potential);
                    if keep_raw_input {
                        phone.set_country_code_source(CountryCodeSource::FromNumberWithoutPlusSign);
                    }
                    phone.set_country_code(metadata.country_code);
                    return Ok(metadata.country_code);
                }
            }
        }
        phone.set_country_code(0);
        Ok(0)
    }

    /// Strips the region's national prefix and any carrier selection code
    /// from the front of `number`. Returns whether anything was removed.
    pub fn maybe_strip_national_prefix_and_carrier_code(
        &self,
        number: &mut String,
        metadata: &PhoneMetadata,
        carrier_code: Option<&mut String>,
    ) -> bool {
        let Some(prefix_pattern) = metadata.national_prefix_for_parsing else {
            return false;
        };
        if number.is_empty() {
            return false;
        }
        let prefix = cache::prefix_regex(prefix_pattern);
        let Some(caps) = prefix.captures(number) else {
            return false;
        };
        let general = cache::full_match_regex(metadata.general_desc.national_number_pattern);
        let stripped_start = caps.get(0).expect("whole match").end();
        // Don't strip when the number was valid as written but would not be
        // after stripping.
        if general.is_match(number) && !general.is_match(&number[stripped_start..]) {
            return false;
        }
        if let Some(out) = carrier_code {
            if let Some(group) = caps.get(1) {
                out.push_str(group.as_str());
            }
        }
        *number = number[stripped_start..].to_string();
        true
    }

    /// Strips an extension suffix from `number`, returning its digits.
    fn maybe_strip_extension(&self, number: &mut String) -> Option<String> {
        let (extension_start, extension) = {
            let caps = extn_pattern().captures(number)?;
            let whole = caps.get(0).expect("whole match");
            if !is_viable_phone_number(&number[..whole.start()]) {
                return None;
            }
            let digits = caps
                .iter()
                .skip(1)
                .flatten()
                .next()
                .map(|group| normalize_digits_only(group.as_str()))?;
            (whole.start(), digits)
        };
        number.truncate(extension_start);
        Some(extension)
    }

    /// True if the number's length is possible for its country.
    pub fn is_possible_number(&self, number: &PhoneNumber) -> bool {
        match metadata::metadata_for_country_code(number.country_code()) {
            Some(metadata) => {
                test_number_length(number.national_number(), metadata) == LengthResult::IsPossible
            }
            None => false,
        }
    }

    /// True if the number matches the general pattern and at least one
    /// number-type pattern for its country.
    pub fn is_valid_number(&self, number: &PhoneNumber) -> bool {
        let Some(metadata) = metadata::metadata_for_country_code(number.country_code()) else {
            return false;
        };
        let nsn = number.national_number();
        if !cache::full_match_regex(metadata.general_desc.national_number_pattern).is_match(nsn) {
            return false;
        }
        let mut descs = vec![&metadata.fixed_line, &metadata.mobile];
        if let Some(toll_free) = &metadata.toll_free {
            descs.push(toll_free);
        }
        descs
            .iter()
            .any(|desc| cache::full_match_regex(desc.national_number_pattern).is_match(nsn))
    }

    /// Picks the first formatting pattern whose leading digits and full
    /// pattern both match the NSN.
    pub fn choose_formatting_pattern<'m>(
        &self,
        formats: &'m [NumberFormat],
        nsn: &str,
    ) -> Option<&'m NumberFormat> {
        formats.iter().find(|format| {
            if let Some(leading) = format.leading_digits {
                if !cache::prefix_regex(leading).is_match(nsn) {
                    return false;
                }
            }
            cache::full_match_regex(format.pattern).is_match(nsn)
        })
    }

    /// Formats an NSN with an explicit formatting pattern. For RFC3966 the
    /// pattern's own separators are replaced by `-` and any leading
    /// separator is dropped.
    pub fn format_nsn_using_pattern(
        &self,
        nsn: &str,
        formatting: &NumberFormat,
        number_format: PhoneNumberFormat,
    ) -> String {
        let pattern = cache::full_match_regex(formatting.pattern);
        let mut formatted = pattern.replace(nsn, formatting.format).into_owned();
        if number_format == PhoneNumberFormat::Rfc3966 {
            let separators = separator_pattern();
            if let Some(m) = separators.find(&formatted) {
                if m.start() == 0 {
                    formatted = formatted[m.end()..].to_string();
                }
            }
            formatted = separators.replace_all(&formatted, "-").into_owned();
        }
        formatted
    }

    /// Formats a parsed number.
    pub fn format(&self, number: &PhoneNumber, number_format: PhoneNumberFormat) -> String {
        let nsn = self.national_significant_number(number);
        let country_code = number.country_code();
        match number_format {
            PhoneNumberFormat::E164 => format!("+{country_code}{nsn}"),
            PhoneNumberFormat::Rfc3966 => {
                let region = metadata::region_code_for_country_code(country_code);
                let formatted_nsn = metadata::metadata_for_region(region)
                    .and_then(|m| self.choose_formatting_pattern(m.number_formats, &nsn))
                    .map(|f| self.format_nsn_using_pattern(&nsn, f, PhoneNumberFormat::Rfc3966))
                    .unwrap_or(nsn);
                let mut formatted = format!("tel:+{country_code}-{formatted_nsn}");
                if let Some(extension) = number.extension() {
                    formatted.push_str(";ext=");
                    formatted.push_str(extension);
                }
                formatted
            }
        }
    }

    /// Compares a parsed number with a second number given as text.
    ///
    /// The text is parsed without a region first; if it carries no country
    /// code, it is re-parsed with the first number's region and an exact
    /// match is downgraded to [`MatchType::NsnMatch`].
    pub fn is_number_match(&self, number: &PhoneNumber, second: &str) -> MatchType {
        match self.parse(second, None) {
            Ok(second_number) => self.is_number_match_numbers(number, &second_number),
            Err(NumberParseError::InvalidCountryCode) => {
                let region = metadata::region_code_for_country_code(number.country_code());
                if region == metadata::UNKNOWN_REGION {
                    return MatchType::NotANumber;
                }
                match self.parse(second, Some(region)) {
                    Ok(second_number) => {
                        match self.is_number_match_numbers(number, &second_number) {
                            MatchType::ExactMatch => MatchType::NsnMatch,
                            other => other,
                        }
                    }
                    Err(_) => MatchType::NotANumber,
                }
            }
            Err(_) => MatchType::NotANumber,
        }
    }

    fn is_number_match_numbers(&self, first: &PhoneNumber, second: &PhoneNumber) -> MatchType {
        if let (Some(a), Some(b)) = (first.extension(), second.extension()) {
            if a != b {
                return MatchType::NoMatch;
            }
        }
        if first.country_code() == second.country_code() {
            if first.national_number() == second.national_number()
                && first.extension_or_empty() == second.extension_or_empty()
            {
                return MatchType::ExactMatch;
            }
            let (a, b) = (first.national_number(), second.national_number());
            if a != b && (a.ends_with(b) || b.ends_with(a)) {
                return MatchType::ShortNsnMatch;
            }
        }
        MatchType::NoMatch
    }
}

fn extract_country_code(full_number: &str, national_number: &mut String) -> u16 {
    if full_number.is_empty() || full_number.starts_with('0') {
        // Country codes never begin with zero.
        return 0;
    }
    for digits in 1..=MAX_LENGTH_COUNTRY_CODE.min(full_number.len()) {
        if let Ok(code) = full_number[..digits].parse::<u16>() {
            if metadata::metadata_for_country_code(code).is_some() {
                national_number.push_str(&full_number[digits..]);
                return code;
            }
        }
    }
    0
}
