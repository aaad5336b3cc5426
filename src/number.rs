//! Parsed phone number value type.

/// How the country calling code of a parsed number was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryCodeSource {
    /// The number began with a plus sign (`+41 79 ...`).
    FromNumberWithPlusSign,

    /// The number began with an international dialing prefix (`0041 79 ...`).
    FromNumberWithIdd,

    /// The number began with the country code but no plus (`41 79 ...`).
    FromNumberWithoutPlusSign,

    /// The country code was taken from the default region supplied by the
    /// caller.
    FromDefaultCountry,
}

/// Outcome of comparing two numbers with [`is_number_match`].
///
/// [`is_number_match`]: crate::PhoneNumberUtil::is_number_match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// The second input could not be parsed at all.
    NotANumber,
    /// Country code, national number or extensions differ.
    NoMatch,
    /// One national number is a trailing portion of the other.
    ShortNsnMatch,
    /// National numbers and extensions match, but at least one side carried
    /// no explicit country code.
    NsnMatch,
    /// Country code, national number and extension all match.
    ExactMatch,
}

/// A parsed phone number.
///
/// The national significant number is stored as a digit string, which keeps
/// regions with leading zeros representable without extra bookkeeping.
/// `raw_input`, `country_code_source` and `preferred_domestic_carrier_code`
/// are populated only by raw-input-keeping parses and are cleared from
/// numbers attached to scan matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneNumber {
    country_code: u16,
    national_number: String,
    extension: Option<String>,
    country_code_source: Option<CountryCodeSource>,
    raw_input: Option<String>,
    preferred_domestic_carrier_code: Option<String>,
}

impl PhoneNumber {
    /// The country calling code, e.g. `1` for NANP or `41` for Switzerland.
    pub fn country_code(&self) -> u16 {
        self.country_code
    }

    pub(crate) fn set_country_code(&mut self, country_code: u16) {
        self.country_code = country_code;
    }

    /// The national significant number as a digit string.
    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    pub(crate) fn set_national_number(&mut self, national_number: String) {
        self.national_number = national_number;
    }

    /// The extension, if one was written after the number.
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// The extension, or the empty string when there is none.
    pub fn extension_or_empty(&self) -> &str {
        self.extension.as_deref().unwrap_or("")
    }

    pub(crate) fn set_extension(&mut self, extension: String) {
        self.extension = Some(extension);
    }

    /// How the country code was derived, if this number was parsed with raw
    /// input retention.
    pub fn country_code_source(&self) -> Option<CountryCodeSource> {
        self.country_code_source
    }

    pub(crate) fn set_country_code_source(&mut self, source: CountryCodeSource) {
        self.country_code_source = Some(source);
    }

    /// Clears the country code source field.
    pub fn clear_country_code_source(&mut self) {
        self.country_code_source = None;
    }

    /// The exact input the number was parsed from, if retained.
    pub fn raw_input(&self) -> Option<&str> {
        self.raw_input.as_deref()
    }

    pub(crate) fn set_raw_input(&mut self, raw_input: String) {
        self.raw_input = Some(raw_input);
    }

    /// Clears the raw input field.
    pub fn clear_raw_input(&mut self) {
        self.raw_input = None;
    }

    /// A carrier selection code that prefixed the national number, if any.
    pub fn preferred_domestic_carrier_code(&self) -> Option<&str> {
        self.preferred_domestic_carrier_code.as_deref()
    }

    pub(crate) fn set_preferred_domestic_carrier_code(&mut self, code: String) {
        self.preferred_domestic_carrier_code = Some(code);
    }

    /// Clears the preferred domestic carrier code field.
    pub fn clear_preferred_domestic_carrier_code(&mut self) {
        self.preferred_domestic_carrier_code = None;
    }
}
