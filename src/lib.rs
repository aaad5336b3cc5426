//! Phone number discovery in free-form text.
//!
//! This library scans prose, page fragments and emails for substrings that
//! are plausibly telephone numbers, returning for each hit the exact raw
//! span, its offset and a fully parsed number. Scanning is driven by a
//! deliberately permissive regex whose output is screened by tunable
//! verification: date, timestamp and publication-page look-alikes are
//! rejected, surrounding context is checked, and the digit grouping written
//! in the text can be required to agree with how the country actually
//! formats its numbers.
//!
//! # Features
//!
//! - **Lazy scanning**: [`PhoneNumberMatcher`] is an iterator; matching is
//!   on demand and bounded by a caller-supplied try budget
//! - **Tunable strictness**: four [`Leniency`] levels from length-only
//!   plausibility to exact grouping agreement
//! - **Parsing**: international, IDD-prefixed and national notations with
//!   extensions, via [`PhoneNumberUtil::parse`]
//! - **Formatting**: E.164 and RFC3966 rendering
//!
//! # Architecture
//!
//! - [`matcher`]: the scanner, its pre-filters and verification gates
//! - [`util`]: parsing, validation, formatting and normalization
//! - [`metadata`]: embedded per-region patterns and formats
//! - [`error`]: parse error reasons
//!
//! # Quick Start
//!
//! ```
//! use phonescan::PhoneNumberUtil;
//!
//! let util = PhoneNumberUtil::instance();
//! let text = "Call me at 650-253-0000 ext 22, or +41 79 123 45 67.";
//! let matches: Vec<_> = util.find_numbers(text, Some("US")).collect();
//! assert_eq!(matches.len(), 2);
//! assert_eq!(matches[0].raw_string(), "650-253-0000 ext 22");
//! assert_eq!(matches[1].raw_string(), "+41 79 123 45 67");
//! ```
//!
//! # Parsing a single number
//!
//! ```
//! use phonescan::{PhoneNumberFormat, PhoneNumberUtil};
//!
//! let util = PhoneNumberUtil::new();
//! let number = util.parse("044 668 18 00", Some("CH"))?;
//! assert_eq!(util.format(&number, PhoneNumberFormat::E164), "+41446681800");
//! # Ok::<(), phonescan::NumberParseError>(())
//! ```
//!
//! # Bounding work on hostile input
//!
//! ```
//! use phonescan::{Leniency, PhoneNumberMatcher, PhoneNumberUtil};
//!
//! let garbage = "12 34 56 78 90 ".repeat(100);
//! let matcher = PhoneNumberMatcher::new(
//!     PhoneNumberUtil::instance(),
//!     &garbage,
//!     Some("US"),
//!     Leniency::Valid,
//!     10, // give up after ten rejected candidates
//! );
//! assert_eq!(matcher.count(), 0);
//! ```

mod cache;
pub mod error;
pub mod matcher;
pub mod metadata;
pub mod number;
pub mod util;

// Re-exports for convenient access
pub use error::{NumberParseError, ParseResult};
pub use matcher::{Leniency, PhoneNumberMatch, PhoneNumberMatcher};
pub use number::{CountryCodeSource, MatchType, PhoneNumber};
pub use util::{
    normalize_digits, normalize_digits_only, trim_after_second_number_start, PhoneNumberFormat,
    PhoneNumberUtil,
};
