//! Verzendlabel address core - Split and wrap Dutch and Belgian street addresses.
//!
//! This crate takes the free-text street line of a shipment and splits it
//! into street name, house number, number suffix and Belgian box number,
//! using the addressing convention that applies to the shipment's origin
//! and destination countries. It also wraps overlong street names into
//! printable label lines.
//!
//! # Example
//!
//! ```
//! use verzendlabel_address::{split_street, wrap_street};
//!
//! let address = split_street("Kerkstraat 12a", "NL", "NL")?;
//! assert_eq!(address.street, "Kerkstraat");
//! assert_eq!(address.number, Some(12));
//! assert_eq!(address.number_suffix.as_deref(), Some("a"));
//!
//! let lines = wrap_street("Burgemeester van Walsumweg", 15);
//! assert_eq!(lines, vec!["Burgemeester", "van Walsumweg"]);
//! # Ok::<(), verzendlabel_address::AddressError>(())
//! ```
//!
//! # Architecture
//!
//! - [`config`]: configuration constants (country codes, box marker, label width)
//! - [`types`]: the [`ParsedAddress`] value object
//! - [`error`]: error types and Result alias
//! - [`grammar`]: grammar selection per country pair and the compiled patterns
//! - [`splitter`]: normalization, matching, validation and extraction
//! - [`wrap`]: street wrapping for printed labels

pub mod config;
pub mod error;
pub mod grammar;
pub mod splitter;
pub mod types;
pub mod wrap;

// Re-export commonly used items
pub use config::{BOX_NL, CC_BE, CC_NL, MAX_STREET_LENGTH};
pub use error::{AddressError, Result};
pub use grammar::{select_grammar, Grammar};
pub use splitter::split_street;
pub use types::ParsedAddress;
pub use wrap::{street_parts, wrap_street};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
