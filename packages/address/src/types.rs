//! Core data types for the address core.

use serde::{Deserialize, Serialize};

use crate::config::BOX_NL;

/// A street line decomposed into its components.
///
/// Built once per successful [`split_street`](crate::split_street) call and
/// not modified afterwards. When no grammar applies to the country pair,
/// `street` holds the full normalized input and every other field is `None`;
/// that is a valid terminal state, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAddress {
    /// Street name. Empty only when a grammar matched an input that is
    /// nothing but a house number.
    pub street: String,

    /// House or building number, when a grammar matched one. Parsed from
    /// the leading decimal digits of the matched token, so a Belgian
    /// alphanumeric number like "12A" yields 12.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,

    /// Secondary unit marker following the house number ("12a", "14-2").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_suffix: Option<String>,

    /// Belgian box number, the part after the "bus" marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_number: Option<String>,
}

impl ParsedAddress {
    /// Create a fully specified parsed address.
    pub fn new(
        street: impl Into<String>,
        number: Option<u32>,
        number_suffix: Option<String>,
        box_number: Option<String>,
    ) -> Self {
        Self {
            street: street.into(),
            number,
            number_suffix,
            box_number,
        }
    }

    /// Create the unparsed terminal state: the whole input as street.
    pub fn unparsed(street: impl Into<String>) -> Self {
        Self::new(street, None, None, None)
    }

    /// Space-joined rendition of the held components for display and
    /// label use. This is a rendition, not a reconstruction: the original
    /// separators between number and suffix are not preserved.
    pub fn full_street(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if !self.street.is_empty() {
            parts.push(self.street.clone());
        }
        if let Some(number) = self.number {
            parts.push(number.to_string());
        }
        if let Some(suffix) = &self.number_suffix {
            parts.push(suffix.clone());
        }
        if let Some(box_number) = &self.box_number {
            parts.push(format!("{BOX_NL} {box_number}"));
        }
        parts.join(" ")
    }
}
