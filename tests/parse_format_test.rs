//! Parser and formatter acceptance tests.
//!
//! Exercises every way a country code can be written, national prefix
//! handling across regions, extension notations, and the grouping the
//! RFC3966 renderer produces from the metadata tables.

use phonescan::metadata;
use phonescan::{
    CountryCodeSource, NumberParseError, PhoneNumberFormat, PhoneNumberUtil,
};

fn util() -> &'static PhoneNumberUtil {
    PhoneNumberUtil::instance()
}

#[test]
fn test_country_code_source_forms() {
    let cases = [
        ("+41 79 123 45 67", "CH", CountryCodeSource::FromNumberWithPlusSign),
        ("0041 79 123 45 67", "CH", CountryCodeSource::FromNumberWithIdd),
        ("011 41 79 123 45 67", "US", CountryCodeSource::FromNumberWithIdd),
        ("1 650 253 0000", "US", CountryCodeSource::FromNumberWithoutPlusSign),
        ("650 253 0000", "US", CountryCodeSource::FromDefaultCountry),
    ];
    for (input, region, source) in cases {
        let number = util().parse_and_keep_raw_input(input, Some(region)).unwrap();
        assert_eq!(number.country_code_source(), Some(source), "input {input:?}");
        assert_eq!(number.raw_input(), Some(input));
    }
}

#[test]
fn test_all_forms_agree_on_the_number() {
    let forms = [
        "+41791234567",
        "+41 79 123 45 67",
        "0041 79 123 45 67",
        "079 123 45 67",
    ];
    for form in forms {
        let number = util().parse(form, Some("CH")).unwrap();
        assert_eq!(number.country_code(), 41, "form {form:?}");
        assert_eq!(number.national_number(), "791234567", "form {form:?}");
    }
}

#[test]
fn test_plain_parse_keeps_no_raw_input() {
    let number = util().parse("+41 79 123 45 67", None).unwrap();
    assert!(number.raw_input().is_none());
    assert!(number.country_code_source().is_none());
}

#[test]
fn test_rfc3966_grouping_follows_metadata() {
    let cases = [
        ("650-253-0000", "US", "tel:+1-650-253-0000"),
        ("020 7031 3000", "GB", "tel:+44-20-7031-3000"),
        ("07400 123456", "GB", "tel:+44-7400-123456"),
        ("079 123 45 67", "CH", "tel:+41-79-123-45-67"),
        ("0151 23456789", "DE", "tel:+49-151-23456789"),
    ];
    for (input, region, expected) in cases {
        let number = util().parse(input, Some(region)).unwrap();
        assert_eq!(
            util().format(&number, PhoneNumberFormat::Rfc3966),
            expected,
            "input {input:?}"
        );
    }
}

#[test]
fn test_e164_formatting() {
    let cases = [
        ("650-253-0000", "US", "+16502530000"),
        ("079 123 45 67", "CH", "+41791234567"),
        ("020 7031 3000", "GB", "+442070313000"),
    ];
    for (input, region, expected) in cases {
        let number = util().parse(input, Some(region)).unwrap();
        assert_eq!(util().format(&number, PhoneNumberFormat::E164), expected);
    }
}

#[test]
fn test_rfc3966_extension_suffix() {
    let number = util().parse("650-253-0000 ext 1234", Some("US")).unwrap();
    assert_eq!(
        util().format(&number, PhoneNumberFormat::Rfc3966),
        "tel:+1-650-253-0000;ext=1234"
    );
}

#[test]
fn test_alternate_formats_produce_alternate_grouping() {
    let alternates = metadata::alternate_formats_for_country(49).unwrap();
    let grouped = util().format_nsn_using_pattern(
        "15123456789",
        &alternates[0],
        PhoneNumberFormat::Rfc3966,
    );
    assert_eq!(grouped, "15123-456789");
}

#[test]
fn test_choose_formatting_pattern_respects_leading_digits() {
    let gb = metadata::metadata_for_region("GB").unwrap();
    let london = util()
        .choose_formatting_pattern(gb.number_formats, "2070313000")
        .unwrap();
    assert_eq!(london.leading_digits, Some("2"));
    let mobile = util()
        .choose_formatting_pattern(gb.number_formats, "7400123456")
        .unwrap();
    assert_eq!(mobile.leading_digits, Some("[78]"));
}

#[test]
fn test_validity_across_regions() {
    let valid = [
        ("650-253-0000", "US"),
        ("800-500-1234", "US"),
        ("079 123 45 67", "CH"),
        ("07400 123456", "GB"),
        ("0151 23456789", "DE"),
    ];
    for (input, region) in valid {
        let number = util().parse(input, Some(region)).unwrap();
        assert!(util().is_valid_number(&number), "{input:?} in {region}");
    }

    // Possible length but no matching type pattern.
    let possible_only = util().parse("650-153-0000", Some("US")).unwrap();
    assert!(util().is_possible_number(&possible_only));
    assert!(!util().is_valid_number(&possible_only));

    // Wrong length outright.
    let too_short = util().parse("650-253", Some("US")).unwrap();
    assert!(!util().is_possible_number(&too_short));
}

#[test]
fn test_unknown_region_needs_plus() {
    assert_eq!(
        util().parse("650-253-0000", Some("ZZ")).unwrap_err(),
        NumberParseError::InvalidCountryCode
    );
    assert!(util().parse("+1 650-253-0000", Some("ZZ")).is_ok());
}

#[test]
fn test_fullwidth_input() {
    let number = util()
        .parse("\u{FF0B}\u{FF14}\u{FF11} \u{FF17}\u{FF19} 123 45 67", None)
        .unwrap();
    assert_eq!(number.country_code(), 41);
    assert_eq!(number.national_number(), "791234567");
}
