// Codec error type.

use std::fmt;

use thiserror::Error;

use super::alphabet::ALPHABET;

/// Numeric field of a patch record, named in range errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Address,
    Data,
    Comp,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Address => "address",
            Self::Data => "data",
            Self::Comp => "comp",
        })
    }
}

/// Errors returned by `decode`, `encode` and `Patch::new`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The code does not have 6 or 8 symbols.
    #[error("Game Genie code must be either 6 or 8 characters long (got {length})")]
    InvalidLength { length: usize },

    /// A character is not a Game Genie letter (after upper-casing).
    #[error("invalid symbol {symbol:?} at position {position} (expected one of [{}])", ALPHABET)]
    InvalidSymbol { symbol: char, position: usize },

    /// A numeric field is outside its legal interval.
    #[error("'{field}' is not within {min:#X}--{max:#X} ({field} = {value:#X})")]
    OutOfRange {
        field: Field,
        value: u32,
        min: u32,
        max: u32,
    },
}

pub type Result<T> = std::result::Result<T, CodecError>;

/// Check `min <= value <= max`, naming `field` on failure.
pub(crate) fn bounds_check(field: Field, value: u32, min: u32, max: u32) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CodecError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
