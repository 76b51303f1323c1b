//! Error types for the address core.

use thiserror::Error;

/// Main error type for address splitting.
///
/// Both variants carry the normalized input (line breaks replaced by
/// spaces, surrounding whitespace trimmed) for diagnostics.
#[derive(Debug, Error)]
pub enum AddressError {
    /// The grammar did not match the normalized input at all.
    #[error("Invalid full street supplied: {0}")]
    InvalidFullStreet(String),

    /// The grammar matched, but the match does not span the whole input,
    /// so splitting would silently drop characters.
    #[error("Address splitting lost characters: {0}")]
    LossySplit(String),
}

/// Result type alias for address operations.
pub type Result<T> = std::result::Result<T, AddressError>;
