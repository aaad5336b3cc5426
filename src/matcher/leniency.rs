//! Leniency levels and the verification gates behind them.
//!
//! Levels form a total order; every check a level performs is also
//! performed by the stricter levels above it. The grouping checks compare
//! the digit grouping a candidate was written with against the grouping the
//! formatter would emit, falling back to per-country alternate formats.

use crate::cache;
use crate::metadata;
use crate::number::{CountryCodeSource, MatchType, PhoneNumber};
use crate::util::{self, PhoneNumberFormat, PhoneNumberUtil};

/// How much scrutiny a candidate must survive to become a match.
///
/// The declaration order is the semantic order: `Possible < Valid <
/// StrictGrouping < ExactGrouping`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Leniency {
    /// The number has a possible length for its country. Fast, but offers
    /// no protection against most false positives.
    Possible,
    /// The number is valid for its country, is not glued to surrounding
    /// letters, carries the national prefix when its country requires one,
    /// and uses `x` and `/` plausibly.
    Valid,
    /// `Valid`, and the digit groups written in the text are not split
    /// differently from how the country formats the number.
    StrictGrouping,
    /// `Valid`, and the digit groups written in the text are exactly the
    /// groups the country's formats produce.
    ExactGrouping,
}

impl Leniency {
    /// Runs this level's checks against a parsed candidate.
    pub(crate) fn verify(
        self,
        number: &PhoneNumber,
        candidate: &str,
        util: &PhoneNumberUtil,
    ) -> bool {
        match self {
            Self::Possible => util.is_possible_number(number),
            Self::Valid => verify_valid(number, candidate, util),
            Self::StrictGrouping => {
                verify_valid(number, candidate, util)
                    && check_number_grouping(number, candidate, util, GroupingCheck::RemainGrouped)
            }
            Self::ExactGrouping => {
                verify_valid(number, candidate, util)
                    && check_number_grouping(number, candidate, util, GroupingCheck::ExactlyPresent)
            }
        }
    }
}

fn verify_valid(number: &PhoneNumber, candidate: &str, util: &PhoneNumberUtil) -> bool {
    util.is_possible_number(number)
        && util.is_valid_number(number)
        && contains_only_valid_x_chars(number, candidate, util)
        && !contains_more_than_one_slash(candidate)
        && is_national_prefix_present_if_required(number, util)
}

/// Two slashes mean a second number or a date, never one phone number.
pub(crate) fn contains_more_than_one_slash(candidate: &str) -> bool {
    candidate.matches('/').count() >= 2
}

/// Every `x` in a candidate (except a final one) must be a carrier-code
/// marker (`xx` followed by the number again) or an extension marker whose
/// digits match the parsed extension.
pub(crate) fn contains_only_valid_x_chars(
    number: &PhoneNumber,
    candidate: &str,
    util: &PhoneNumberUtil,
) -> bool {
    let chars: Vec<(usize, char)> = candidate.char_indices().collect();
    let mut index = 0;
    while index + 1 < chars.len() {
        let (_, c) = chars[index];
        if c == 'x' || c == 'X' {
            let (_, next) = chars[index + 1];
            if next == 'x' || next == 'X' {
                // Carrier-code marker; what follows must be the number again.
                index += 1;
                let rest = &candidate[chars[index].0..];
                if util.is_number_match(number, rest) != MatchType::NsnMatch {
                    return false;
                }
            } else {
                let rest = &candidate[chars[index].0..];
                if util::normalize_digits_only(rest) != number.extension_or_empty() {
                    return false;
                }
            }
        }
        index += 1;
    }
    true
}

/// A number written nationally must include the national prefix when the
/// formatting rules of its country demand one.
pub(crate) fn is_national_prefix_present_if_required(
    number: &PhoneNumber,
    util: &PhoneNumberUtil,
) -> bool {
    // Numbers in international form carry their country code instead.
    if number.country_code_source() != Some(CountryCodeSource::FromDefaultCountry) {
        return true;
    }
    let region = metadata::region_code_for_country_code(number.country_code());
    let Some(region_metadata) = metadata::metadata_for_region(region) else {
        return true;
    };
    let nsn = util.national_significant_number(number);
    let Some(format_rule) = util.choose_formatting_pattern(region_metadata.number_formats, &nsn)
    else {
        return true;
    };
    let Some(prefix_rule) = format_rule.national_prefix_formatting_rule else {
        return true;
    };
    if prefix_rule.is_empty() || format_rule.national_prefix_optional_when_formatting {
        return true;
    }
    // Keep only what the rule prepends before the number itself.
    let prefix_digits =
        util::normalize_digits_only(prefix_rule.split("$1").next().unwrap_or(""));
    if prefix_digits.is_empty() {
        return true;
    }
    let mut raw_input = util::normalize_digits_only(number.raw_input().unwrap_or(""));
    util.maybe_strip_national_prefix_and_carrier_code(&mut raw_input, region_metadata, None)
}

/// The two grouping predicates, dispatched by name.
#[derive(Debug, Clone, Copy)]
pub(crate) enum GroupingCheck {
    /// No formatted group may be split across candidate groups.
    RemainGrouped,
    /// The candidate groups must be exactly the formatted groups.
    ExactlyPresent,
}

impl GroupingCheck {
    fn run(
        self,
        util: &PhoneNumberUtil,
        number: &PhoneNumber,
        normalized_candidate: &str,
        formatted_groups: &[String],
    ) -> bool {
        match self {
            Self::RemainGrouped => {
                all_number_groups_remain_grouped(util, number, normalized_candidate, formatted_groups)
            }
            Self::ExactlyPresent => all_number_groups_are_exactly_present(
                util,
                number,
                normalized_candidate,
                formatted_groups,
            ),
        }
    }
}

/// Checks the candidate's grouping against the canonical format, then
/// against each alternate format registered for the country.
pub(crate) fn check_number_grouping(
    number: &PhoneNumber,
    candidate: &str,
    util: &PhoneNumberUtil,
    checker: GroupingCheck,
) -> bool {
    let normalized_candidate = util::normalize_digits(candidate, true);
    let formatted_groups = national_number_groups(util, number);
    if checker.run(util, number, &normalized_candidate, &formatted_groups) {
        return true;
    }
    let nsn = util.national_significant_number(number);
    if let Some(alternates) = metadata::alternate_formats_for_country(number.country_code()) {
        for alternate in alternates {
            if let Some(leading) = alternate.leading_digits {
                if !cache::prefix_regex(leading).is_match(&nsn) {
                    continue;
                }
            }
            let formatted_groups: Vec<String> = util
                .format_nsn_using_pattern(&nsn, alternate, PhoneNumberFormat::Rfc3966)
                .split('-')
                .map(str::to_string)
                .collect();
            if checker.run(util, number, &normalized_candidate, &formatted_groups) {
                return true;
            }
        }
    }
    false
}

/// The groups of the RFC3966 rendering, with country code and extension
/// stripped.
fn national_number_groups(util: &PhoneNumberUtil, number: &PhoneNumber) -> Vec<String> {
    let rfc3966 = util.format(number, PhoneNumberFormat::Rfc3966);
    let end = rfc3966.find(';').unwrap_or(rfc3966.len());
    let start = rfc3966.find('-').map_or(0, |i| i + 1);
    rfc3966[start..end].split('-').map(str::to_string).collect()
}

fn all_number_groups_remain_grouped(
    util: &PhoneNumberUtil,
    number: &PhoneNumber,
    normalized_candidate: &str,
    formatted_groups: &[String],
) -> bool {
    let mut from_index = 0;
    if number.country_code_source() != Some(CountryCodeSource::FromDefaultCountry) {
        // Skip the country code written at the front of the candidate.
        let country_code = number.country_code().to_string();
        match normalized_candidate.find(&country_code) {
            Some(at) => from_index = at + country_code.len(),
            None => return false,
        }
    }
    for (i, group) in formatted_groups.iter().enumerate() {
        let Some(found) = normalized_candidate[from_index..].find(group.as_str()) else {
            return false;
        };
        let group_start = from_index + found;
        from_index = group_start + group.len();
        if i == 0 && from_index < normalized_candidate.len() {
            let next_is_digit = normalized_candidate[from_index..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_digit());
            if next_is_digit {
                // No separator after the area code: only acceptable when the
                // whole number is written as one unformatted block.
                let nsn = util.national_significant_number(number);
                return normalized_candidate[group_start..].starts_with(nsn.as_str());
            }
        }
    }
    normalized_candidate[from_index..].contains(number.extension_or_empty())
}

fn all_number_groups_are_exactly_present(
    util: &PhoneNumberUtil,
    number: &PhoneNumber,
    normalized_candidate: &str,
    formatted_groups: &[String],
) -> bool {
    let candidate_groups = util::split_digit_groups(normalized_candidate);
    if candidate_groups.is_empty() || formatted_groups.is_empty() {
        return false;
    }
    // The extension, if any, occupies the last candidate group.
    let last_group_index = if number.extension().is_some() && candidate_groups.len() >= 2 {
        candidate_groups.len() - 2
    } else {
        candidate_groups.len() - 1
    };
    let nsn = util.national_significant_number(number);
    if candidate_groups.len() == 1 || candidate_groups[last_group_index].contains(nsn.as_str()) {
        return true;
    }
    // Compare from the right, leaving out the first formatted group.
    let mut candidate_index = last_group_index as isize;
    let mut formatted_index = formatted_groups.len() as isize - 1;
    while formatted_index > 0 && candidate_index >= 0 {
        if candidate_groups[candidate_index as usize] != formatted_groups[formatted_index as usize]
        {
            return false;
        }
        formatted_index -= 1;
        candidate_index -= 1;
    }
    // A national prefix may still lead the first group, so a suffix match
    // is enough there.
    candidate_index >= 0
        && candidate_groups[candidate_index as usize].ends_with(formatted_groups[0].as_str())
}
