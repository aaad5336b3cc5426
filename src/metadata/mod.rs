//! Per-region phone number metadata.
//!
//! Each region carries the validation patterns, possible lengths and
//! formatting rules the parser, validator and grouping checks need. The
//! tables in [`regions`] are embedded statics; accessors here are the only
//! way the rest of the crate reaches them.

mod regions;

/// Validation data for one class of numbers (general, fixed line, mobile,
/// toll free).
#[derive(Debug)]
pub struct PhoneNumberDesc {
    /// Full-match pattern for the national significant number.
    pub national_number_pattern: &'static str,
    /// Digit counts a national significant number of this class may have.
    pub possible_lengths: &'static [usize],
}

/// One way of writing a national significant number in a region.
#[derive(Debug)]
pub struct NumberFormat {
    /// Full-match pattern splitting the NSN into capture groups.
    pub pattern: &'static str,
    /// Replacement template over the capture groups, e.g. `"($1) $2-$3"`.
    pub format: &'static str,
    /// Prefix pattern selecting which numbers this format applies to.
    pub leading_digits: Option<&'static str>,
    /// How the national prefix attaches when formatting nationally, e.g.
    /// `"0$1"`. Absent when the region writes numbers without it.
    pub national_prefix_formatting_rule: Option<&'static str>,
    /// Whether a nationally formatted number is also written without the
    /// prefix.
    pub national_prefix_optional_when_formatting: bool,
}

/// Everything the library knows about one region.
#[derive(Debug)]
pub struct PhoneMetadata {
    pub region: &'static str,
    pub country_code: u16,
    /// Pattern for the prefix that replaces `+` when dialing out of the
    /// region.
    pub international_prefix: &'static str,
    pub national_prefix: Option<&'static str>,
    /// Pattern stripped from the start of a nationally written number. May
    /// capture a carrier selection code.
    pub national_prefix_for_parsing: Option<&'static str>,
    pub general_desc: PhoneNumberDesc,
    pub fixed_line: PhoneNumberDesc,
    pub mobile: PhoneNumberDesc,
    pub toll_free: Option<PhoneNumberDesc>,
    pub number_formats: &'static [NumberFormat],
}

/// Metadata for a CLDR region code, or `None` for regions the library does
/// not cover.
pub fn metadata_for_region(region: &str) -> Option<&'static PhoneMetadata> {
    regions::SUPPORTED
        .iter()
        .copied()
        .find(|m| m.region == region)
}

/// Metadata for a country calling code.
pub fn metadata_for_country_code(country_code: u16) -> Option<&'static PhoneMetadata> {
    regions::SUPPORTED
        .iter()
        .copied()
        .find(|m| m.country_code == country_code)
}

/// The main region for a country calling code, or `"ZZ"` when unknown.
pub fn region_code_for_country_code(country_code: u16) -> &'static str {
    metadata_for_country_code(country_code).map_or(UNKNOWN_REGION, |m| m.region)
}

/// Alternate grouping formats observed in the wild for a country, beyond the
/// canonical ones in its metadata.
pub fn alternate_formats_for_country(country_code: u16) -> Option<&'static [NumberFormat]> {
    regions::ALTERNATE_FORMATS
        .iter()
        .find(|(cc, _)| *cc == country_code)
        .map(|(_, formats)| *formats)
}

/// Region code used when no region applies.
pub const UNKNOWN_REGION: &str = "ZZ";
