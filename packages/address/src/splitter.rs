//! Splitting a full street line into structured components.
//!
//! The splitter normalizes line breaks, applies the grammar selected for
//! the shipment's country pair and validates that the match reproduces the
//! whole input before extracting the named groups. A match that drops
//! characters is rejected rather than returned partially.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::error::{AddressError, Result};
use crate::grammar::select_grammar;
use crate::types::ParsedAddress;

/// Line break sequences are folded into a single space before matching.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\n|\r").expect("valid regex"));

/// Split a full street line into street name, house number, suffix and
/// box number.
///
/// The applicable grammar follows from the origin and destination country
/// of the shipment. When neither the Dutch nor the Belgian convention
/// applies, the normalized input is returned as the street name with no
/// further components; that path never fails.
///
/// # Errors
///
/// Returns [`AddressError::InvalidFullStreet`] when the grammar does not
/// match the input, and [`AddressError::LossySplit`] when the match does
/// not span the whole input.
///
/// # Examples
///
/// ```
/// use verzendlabel_address::split_street;
///
/// let address = split_street("Kerkstraat 12a", "NL", "NL")?;
/// assert_eq!(address.street, "Kerkstraat");
/// assert_eq!(address.number, Some(12));
/// assert_eq!(address.number_suffix.as_deref(), Some("a"));
/// # Ok::<(), verzendlabel_address::AddressError>(())
/// ```
pub fn split_street(
    full_street: &str,
    origin_country: &str,
    destination_country: &str,
) -> Result<ParsedAddress> {
    let normalized = normalize_line_breaks(full_street);

    let Some(grammar) = select_grammar(origin_country, destination_country) else {
        tracing::debug!(
            origin = %origin_country,
            destination = %destination_country,
            "No street grammar for country pair, keeping street unsplit"
        );
        return Ok(ParsedAddress::unparsed(normalized));
    };

    let captures = grammar
        .pattern()
        .captures(&normalized)
        .ok_or_else(|| AddressError::InvalidFullStreet(normalized.clone()))?;

    // A match that starts past the first character or ends early would
    // silently drop parts of the address.
    let matched = captures.get(0).map(|m| m.as_str()).unwrap_or_default();
    if matched != normalized {
        return Err(AddressError::LossySplit(normalized));
    }

    let street = captures
        .name("street")
        .map(|group| group.as_str().to_string())
        .unwrap_or_else(|| normalized.clone());
    let number = captures
        .name("number")
        .and_then(|group| parse_house_number(group.as_str()));
    let number_suffix = named_group(&captures, "number_suffix");
    let box_number = named_group(&captures, "box_number");

    let address = ParsedAddress::new(street, number, number_suffix, box_number);
    tracing::debug!(
        street = %address.street,
        number = ?address.number,
        "Split full street into components"
    );
    Ok(address)
}

/// Replace every CRLF, LF or CR with a single space and trim.
fn normalize_line_breaks(full_street: &str) -> String {
    LINE_BREAKS.replace_all(full_street, " ").trim().to_string()
}

/// A named group as an owned string; unset and empty groups are `None`.
fn named_group(captures: &Captures<'_>, name: &str) -> Option<String> {
    captures
        .name(name)
        .map(|group| group.as_str())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Parse the leading decimal digits of a house number token. Leading
/// zeros are ignored; a token without leading digits has no numeric part.
fn parse_house_number(raw: &str) -> Option<u32> {
    let digits: String = raw.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
