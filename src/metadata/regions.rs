//! Embedded metadata tables.
//!
//! Patterns are simplified from the respective national numbering plans but
//! keep the structure real numbers exercise: NANP with no prefix in written
//! form, European plans with a required `0`, and German alternate groupings.

use super::{NumberFormat, PhoneMetadata, PhoneNumberDesc};

static US: PhoneMetadata = PhoneMetadata {
    region: "US",
    country_code: 1,
    international_prefix: "011",
    national_prefix: Some("1"),
    national_prefix_for_parsing: Some("1"),
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2-9]\d{9}",
        possible_lengths: &[10],
    },
    fixed_line: PhoneNumberDesc {
        national_number_pattern: r"[2-9]\d{2}[2-9]\d{6}",
        possible_lengths: &[10],
    },
    mobile: PhoneNumberDesc {
        national_number_pattern: r"[2-9]\d{2}[2-9]\d{6}",
        possible_lengths: &[10],
    },
    toll_free: Some(PhoneNumberDesc {
        national_number_pattern: r"8(?:00|33|44|55|66|77|88)[2-9]\d{6}",
        possible_lengths: &[10],
    }),
    number_formats: &[
        NumberFormat {
            pattern: r"(\d{3})(\d{4})",
            format: "$1-$2",
            leading_digits: None,
            national_prefix_formatting_rule: None,
            national_prefix_optional_when_formatting: true,
        },
        NumberFormat {
            pattern: r"(\d{3})(\d{3})(\d{4})",
            format: "($1) $2-$3",
            leading_digits: None,
            national_prefix_formatting_rule: None,
            national_prefix_optional_when_formatting: true,
        },
    ],
};

static GB: PhoneMetadata = PhoneMetadata {
    region: "GB",
    country_code: 44,
    international_prefix: "00",
    national_prefix: Some("0"),
    national_prefix_for_parsing: Some("0"),
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[1-9]\d{8,9}",
        possible_lengths: &[9, 10],
    },
    fixed_line: PhoneNumberDesc {
        national_number_pattern: r"[12]\d{8,9}",
        possible_lengths: &[9, 10],
    },
    mobile: PhoneNumberDesc {
        national_number_pattern: r"7[4-9]\d{8}",
        possible_lengths: &[10],
    },
    toll_free: Some(PhoneNumberDesc {
        national_number_pattern: r"80[08]\d{7}",
        possible_lengths: &[10],
    }),
    number_formats: &[
        NumberFormat {
            pattern: r"(\d{2})(\d{4})(\d{4})",
            format: "$1 $2 $3",
            leading_digits: Some("2"),
            national_prefix_formatting_rule: Some("0$1"),
            national_prefix_optional_when_formatting: false,
        },
        NumberFormat {
            pattern: r"(\d{3})(\d{3})(\d{3,4})",
            format: "$1 $2 $3",
            leading_digits: Some("1"),
            national_prefix_formatting_rule: Some("0$1"),
            national_prefix_optional_when_formatting: false,
        },
        NumberFormat {
            pattern: r"(\d{4})(\d{6})",
            format: "$1 $2",
            leading_digits: Some("[78]"),
            national_prefix_formatting_rule: Some("0$1"),
            national_prefix_optional_when_formatting: false,
        },
    ],
};

static CH: PhoneMetadata = PhoneMetadata {
    region: "CH",
    country_code: 41,
    international_prefix: "00",
    national_prefix: Some("0"),
    national_prefix_for_parsing: Some("0"),
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2-9]\d{8}",
        possible_lengths: &[9],
    },
    fixed_line: PhoneNumberDesc {
        national_number_pattern: r"(?:2[12467]|3[1-4]|4[134]|5[12568]|6[12]|[7-9]1)\d{7}",
        possible_lengths: &[9],
    },
    mobile: PhoneNumberDesc {
        national_number_pattern: r"7[5-9]\d{7}",
        possible_lengths: &[9],
    },
    toll_free: Some(PhoneNumberDesc {
        national_number_pattern: r"800\d{6}",
        possible_lengths: &[9],
    }),
    number_formats: &[NumberFormat {
        pattern: r"(\d{2})(\d{3})(\d{2})(\d{2})",
        format: "$1 $2 $3 $4",
        leading_digits: Some("[2-9]"),
        national_prefix_formatting_rule: Some("0$1"),
        national_prefix_optional_when_formatting: false,
    }],
};

static DE: PhoneMetadata = PhoneMetadata {
    region: "DE",
    country_code: 49,
    international_prefix: "00",
    national_prefix: Some("0"),
    national_prefix_for_parsing: Some("0"),
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[1-9]\d{5,10}",
        possible_lengths: &[6, 7, 8, 9, 10, 11],
    },
    fixed_line: PhoneNumberDesc {
        national_number_pattern: r"[2-9]\d{5,10}",
        possible_lengths: &[6, 7, 8, 9, 10, 11],
    },
    mobile: PhoneNumberDesc {
        national_number_pattern: r"1(?:5\d{9}|6[023]\d{7,8}|7\d{8,9})",
        possible_lengths: &[10, 11],
    },
    toll_free: Some(PhoneNumberDesc {
        national_number_pattern: r"800\d{7,8}",
        possible_lengths: &[10, 11],
    }),
    number_formats: &[
        NumberFormat {
            pattern: r"(\d{3})(\d{7,8})",
            format: "$1 $2",
            leading_digits: Some("1[5-7]"),
            national_prefix_formatting_rule: Some("0$1"),
            national_prefix_optional_when_formatting: false,
        },
        NumberFormat {
            pattern: r"(\d{2})(\d{4,9})",
            format: "$1 $2",
            leading_digits: Some("[2-9]"),
            national_prefix_formatting_rule: Some("0$1"),
            national_prefix_optional_when_formatting: false,
        },
    ],
};

pub(super) static SUPPORTED: &[&PhoneMetadata] = &[&US, &GB, &CH, &DE];

/// Alternate groupings seen in print for German numbers: mobiles written
/// with a four- or five-digit block before the subscriber part.
pub(super) static ALTERNATE_FORMATS: &[(u16, &[NumberFormat])] = &[(
    49,
    &[
        NumberFormat {
            pattern: r"(\d{5})(\d{6})",
            format: "$1 $2",
            leading_digits: Some("1[5-7]"),
            national_prefix_formatting_rule: Some("0$1"),
            national_prefix_optional_when_formatting: false,
        },
        NumberFormat {
            pattern: r"(\d{4})(\d{7})",
            format: "$1 $2",
            leading_digits: Some("1[5-7]"),
            national_prefix_formatting_rule: Some("0$1"),
            national_prefix_optional_when_formatting: false,
        },
    ],
)];
