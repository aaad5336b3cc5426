//! Integration tests for the text scanner.
//!
//! Covers the concrete scanning scenarios, the iterator contract and the
//! invariants the matcher promises: non-overlapping ascending matches,
//! raw-span fidelity, round-trip parsability, budget monotonicity and
//! leniency monotonicity.

use phonescan::{Leniency, PhoneNumberMatch, PhoneNumberMatcher, PhoneNumberUtil};

fn scan_with_budget(
    text: &str,
    region: Option<&str>,
    leniency: Leniency,
    max_tries: u32,
) -> Vec<PhoneNumberMatch> {
    PhoneNumberMatcher::new(PhoneNumberUtil::instance(), text, region, leniency, max_tries)
        .collect()
}

fn scan(text: &str, region: &str, leniency: Leniency) -> Vec<PhoneNumberMatch> {
    scan_with_budget(text, Some(region), leniency, 1000)
}

#[test]
fn test_finds_simple_national_number() {
    let matches = scan("Call me at 650-253-0000.", "US", Leniency::Valid);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].raw_string(), "650-253-0000");
    assert_eq!(matches[0].start(), 11);
    assert_eq!(matches[0].number().national_number(), "6502530000");
    assert_eq!(matches[0].number().country_code(), 1);
}

#[test]
fn test_rejects_publication_pages() {
    let matches = scan("VLDB J. 12(3): 211-227 (2003).", "US", Leniency::Valid);
    assert!(matches.is_empty());
}

#[test]
fn test_rejects_slash_dates() {
    let matches = scan("on 08/31/95 at noon", "US", Leniency::Valid);
    assert!(matches.is_empty());

    let matches = scan("deadline is 3/10/2011 sharp", "US", Leniency::Valid);
    assert!(matches.is_empty());
}

#[test]
fn test_rejects_timestamps_with_colon_tail() {
    let matches = scan("2012-01-02 08:00 log entry", "US", Leniency::Valid);
    assert!(matches.is_empty());
}

#[test]
fn test_timestamp_without_tail_is_not_rejected_as_timestamp() {
    // With no ":MM" following, the timestamp filter does not fire and the
    // digits happen to form a plausible US number, so it matches. Only the
    // colon tail turns a date-plus-hour into a rejected timestamp.
    let matches = scan("2012-01-02 08", "US", Leniency::Valid);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].raw_string(), "2012-01-02 08");
}

#[test]
fn test_recovers_number_before_slash_branch() {
    let matches = scan("Contact: +41 79 123 45 67 / 68, ext 9", "CH", Leniency::Valid);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].raw_string(), "+41 79 123 45 67");
    assert_eq!(matches[0].start(), 9);
    assert_eq!(matches[0].number().country_code(), 41);
    assert_eq!(matches[0].number().national_number(), "791234567");
}

#[test]
fn test_latin_letter_boundary() {
    // Glued to letters: invisible at Valid, found at Possible.
    let matches = scan("abc8005001234def", "US", Leniency::Valid);
    assert!(matches.is_empty());

    let matches = scan("abc8005001234def", "US", Leniency::Possible);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].raw_string(), "8005001234");
}

#[test]
fn test_currency_boundary() {
    let matches = scan("the price is $2025550123 total", "US", Leniency::Valid);
    assert!(matches.is_empty());
}

#[test]
fn test_empty_text() {
    assert!(scan("", "US", Leniency::Valid).is_empty());
}

#[test]
fn test_zero_try_budget() {
    let matches = scan_with_budget("650-253-0000", Some("US"), Leniency::Valid, 0);
    assert!(matches.is_empty());
}

#[test]
fn test_matches_are_ascending_and_disjoint() {
    let text = "650-253-0000 or 800-500-1234 or +41 79 123 45 67 bye";
    let matches = scan(text, "US", Leniency::Valid);
    assert_eq!(matches.len(), 3);
    for pair in matches.windows(2) {
        assert!(pair[1].start() >= pair[0].end(), "overlapping matches");
    }
}

#[test]
fn test_raw_span_fidelity() {
    let texts = [
        "Call me at 650-253-0000.",
        "Contact: +41 79 123 45 67 / 68, ext 9",
        "650-253-0000 or 800-500-1234 or +41 79 123 45 67 bye",
        "ext line: 650-253-0000 x1234 thanks",
    ];
    for text in texts {
        for leniency in [Leniency::Possible, Leniency::Valid] {
            for m in scan(text, "US", leniency) {
                assert_eq!(&text[m.start()..m.end()], m.raw_string(), "in {text:?}");
            }
        }
    }
}

#[test]
fn test_round_trip_reparse() {
    let util = PhoneNumberUtil::instance();
    let text = "Call me at 650-253-0000 or +41 79 123 45 67, ok";
    let matches = scan(text, "US", Leniency::Valid);
    assert_eq!(matches.len(), 2);
    for m in matches {
        let mut reparsed = util
            .parse_and_keep_raw_input(m.raw_string(), Some("US"))
            .unwrap();
        reparsed.clear_country_code_source();
        reparsed.clear_raw_input();
        reparsed.clear_preferred_domestic_carrier_code();
        assert_eq!(&reparsed, m.number());
    }
}

#[test]
fn test_budget_yields_prefix_of_larger_budget() {
    let text = "12 34 56, 650-253-0000, 08/31/95, 800-500-1234";
    for budget in 0..8 {
        let smaller = scan_with_budget(text, Some("US"), Leniency::Valid, budget);
        let larger = scan_with_budget(text, Some("US"), Leniency::Valid, budget + 1);
        assert!(
            smaller.len() <= larger.len(),
            "budget {budget} found more than budget {}",
            budget + 1
        );
        assert_eq!(
            smaller.as_slice(),
            &larger[..smaller.len()],
            "budget {budget} is not a prefix"
        );
    }
    // Enough budget finds both real numbers around the rejects.
    let full = scan_with_budget(text, Some("US"), Leniency::Valid, 1000);
    assert_eq!(full.len(), 2);
}

#[test]
fn test_leniency_monotonicity() {
    let cases = [
        ("Call 650-253-0000 now", "US"),
        ("abc8005001234def", "US"),
        ("79 123 45 67", "CH"),
        ("+41 79 1234567", "CH"),
        ("+41 79 123 45 67", "CH"),
        ("+49 15123 456789 und +49 151 23 456 789", "DE"),
    ];
    let ladder = [
        Leniency::Possible,
        Leniency::Valid,
        Leniency::StrictGrouping,
        Leniency::ExactGrouping,
    ];
    for (text, region) in cases {
        for pair in ladder.windows(2) {
            let looser: Vec<(usize, String)> = scan(text, region, pair[0])
                .iter()
                .map(|m| (m.start(), m.raw_string().to_string()))
                .collect();
            let stricter = scan(text, region, pair[1]);
            for m in stricter {
                assert!(
                    looser.contains(&(m.start(), m.raw_string().to_string())),
                    "{:?} at {:?} missing from {:?} in {text:?}",
                    m.raw_string(),
                    pair[1],
                    pair[0],
                );
            }
        }
    }
}

#[test]
fn test_grouping_leniencies_on_swiss_mobile() {
    // Canonically grouped: passes every level.
    for leniency in [Leniency::StrictGrouping, Leniency::ExactGrouping] {
        let matches = scan("+41 79 123 45 67", "CH", leniency);
        assert_eq!(matches.len(), 1, "at {leniency:?}");
    }
    // Merged groups: still "remain grouped", but not exactly present.
    assert_eq!(scan("+41 79 1234567", "CH", Leniency::StrictGrouping).len(), 1);
    assert!(scan("+41 79 1234567", "CH", Leniency::ExactGrouping).is_empty());
}

#[test]
fn test_alternate_format_match() {
    // German mobile in the 5+6 alternate grouping.
    let matches = scan("+49 15123 456789", "DE", Leniency::ExactGrouping);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].raw_string(), "+49 15123 456789");
}

#[test]
fn test_national_prefix_required_at_valid() {
    // Swiss numbers written nationally need their leading zero.
    assert_eq!(scan("079 123 45 67", "CH", Leniency::Valid).len(), 1);
    assert!(scan("79 123 45 67", "CH", Leniency::Valid).is_empty());
    // US formats carry no prefix rule, so bare numbers are fine.
    assert_eq!(scan("650-253-0000", "US", Leniency::Valid).len(), 1);
}

#[test]
fn test_extension_kept_in_match() {
    let matches = scan("dial 650-253-0000 ext 22 today", "US", Leniency::Valid);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].raw_string(), "650-253-0000 ext 22");
    assert_eq!(matches[0].number().extension(), Some("22"));
}

#[test]
fn test_match_number_fields_are_sanitized() {
    for m in scan("650-253-0000 and +41 79 123 45 67", "US", Leniency::Valid) {
        assert!(m.number().raw_input().is_none());
        assert!(m.number().country_code_source().is_none());
        assert!(m.number().preferred_domestic_carrier_code().is_none());
    }
}

#[test]
fn test_iterator_stays_exhausted() {
    let mut matcher = PhoneNumberMatcher::new(
        PhoneNumberUtil::instance(),
        "650-253-0000",
        Some("US"),
        Leniency::Valid,
        1000,
    );
    assert!(matcher.next().is_some());
    assert!(matcher.next().is_none());
    assert!(matcher.next().is_none());
}

/// Sweep of adversarial inputs in every mode; nothing here may panic, and
/// whatever comes back must satisfy raw-span fidelity.
#[test]
fn test_scan_never_panics() {
    let repeat_digits = "1234567890".repeat(100);
    let repeat_groups = "12 34 56 78 90 ".repeat(50);
    let repeat_opens = "(".repeat(200);
    let repeat_plus = "+".repeat(200);
    let inputs: Vec<&str> = vec![
        "",
        "a",
        "+",
        "()",
        "650",
        &repeat_digits,
        &repeat_groups,
        &repeat_opens,
        &repeat_plus,
        "\n\r\t",
        "🔢📱☎️ 650-253-0000",
        "x x x x x",
        "1/2/3/4/5/6",
        "tel:+1-650-253-0000",
        "＋４１ ７９ １２３ ４５ ６７",
        "%2025550123%",
    ];
    let ladder = [
        Leniency::Possible,
        Leniency::Valid,
        Leniency::StrictGrouping,
        Leniency::ExactGrouping,
    ];
    for input in inputs {
        for leniency in ladder {
            for region in [Some("US"), Some("CH"), None] {
                for m in scan_with_budget(input, region, leniency, 100) {
                    assert_eq!(&input[m.start()..m.end()], m.raw_string());
                }
            }
        }
    }
}
