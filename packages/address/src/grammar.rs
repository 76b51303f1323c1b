//! Grammar selection for street splitting.
//!
//! Each supported country convention is a named-group pattern that
//! decomposes a full street line. The Dutch pattern reads right to left:
//! street names may contain digits and spaces, so the house number is
//! anchored near the end of the line. Which pattern applies depends on the
//! origin and destination country of the shipment.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::{BOX_NL, CC_BE, CC_NL};

/// Dutch street pattern, anchored to the end of the line.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DUTCH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?P<street>.*?)",             // the rest belongs to the street
        r"\s?",                         // separator between street and number
        r"(?P<number>\d{1,4})",         // number has at most 4 digits
        r"[/\s\-]{0,2}",                // separators between number and suffix
        r"(?P<number_suffix>",
        r"[a-zA-Z]\d{1,3}",             // a letter followed by 1-3 digits, or
        r"|-\d{1,4}",                   // a dash followed by 1-4 digits, or
        r"|\d{2}\w{1,2}",               // 2 digits followed by 1-2 word chars, or
        r"|[a-zA-Z][a-zA-Z\s]{0,3}",    // up to 4 letters, spaces allowed
        r")?$",
    ))
    .expect("valid regex")
});

/// Belgian street pattern, anchored to the end of the line. House numbers
/// may be alphanumeric and can be followed by a "bus" box number.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BELGIAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        concat!(
            r"(?P<street>.*?)",
            r"\s",
            r"(?P<street_suffix>",
            r"(?P<number>[^\s]{{1,8}})",  // number, up to 8 non-space characters
            r"\s?",
            r"(?P<box_separator>{BOX_NL})?", // optional box marker token
            r"\s?",
            r"(?P<box_number>\d{{0,8}}$)", // box number, digits only
            r")$",
        ),
        BOX_NL = BOX_NL
    );
    Regex::new(&pattern).expect("valid regex")
});

/// A named-group structural pattern for one country convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// Netherlands: numeric house number near the end, optional suffix.
    Dutch,
    /// Belgium: alphanumeric house number, optional "bus" box number.
    Belgian,
}

impl Grammar {
    /// The compiled pattern for this grammar.
    pub fn pattern(&self) -> &'static Regex {
        match self {
            Grammar::Dutch => &DUTCH_PATTERN,
            Grammar::Belgian => &BELGIAN_PATTERN,
        }
    }
}

/// Select the grammar for an origin/destination country pair.
///
/// The Dutch grammar applies to domestic NL shipments and to BE→NL
/// shipments, which use the Dutch addressing convention. The Belgian
/// grammar applies to domestic BE shipments. Every other pair has no
/// structured split available and returns `None`; callers store the
/// street line as-is in that case.
///
/// Comparison is exact: country codes are the two-letter uppercase ISO
/// codes from [`config`](crate::config).
pub fn select_grammar(origin_country: &str, destination_country: &str) -> Option<Grammar> {
    if (origin_country == CC_NL && destination_country == CC_NL)
        || (origin_country == CC_BE && destination_country == CC_NL)
    {
        return Some(Grammar::Dutch);
    }

    if origin_country == CC_BE && destination_country == CC_BE {
        return Some(Grammar::Belgian);
    }

    None
}
