// Game Genie decoder: letters -> nibbles -> patch record.
//
// Layout (n[i] is the nibble of the i-th letter):
//
//   address = 0x8000 | n3.210 << 12 | n5.210 << 8 | n4.3 << 8
//                    | n2.210 << 4  | n1.3 << 4   | n4.210 | n3.3
//   data    = n1.210 << 4 | n0.3 << 4 | n0.210 | (n5 | n7).3
//   comp    = n7.210 << 4 | n6.3 << 4 | n6.210 | n5.3          (8 letters)
//
// Bit 3 of data comes from n5 in 6-letter codes and from n7 in 8-letter
// codes, where n5.3 carries bit 3 of comp instead.

use std::fmt;

use super::alphabet::{self, FLAGGED_SYMBOLS};
use super::error::{CodecError, Result};
use super::patch::Patch;

/// Maximum number of letters in a code.
const MAX_SYMBOLS: usize = 8;

/// Non-fatal observation about a code that still decoded successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The 3rd letter does not have bit 0x8 set. Real codes practically
    /// always set it; `Variant::Alternate` clears it on purpose.
    UnflaggedThirdSymbol { symbol: char },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnflaggedThirdSymbol { symbol } => write!(
                f,
                "3rd character {symbol:?} is not one of [{FLAGGED_SYMBOLS}]"
            ),
        }
    }
}

/// A decoded patch together with any diagnostic raised while decoding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub patch: Patch,
    pub diagnostic: Option<Diagnostic>,
}

/// Decode a 6- or 8-letter code, logging any diagnostic at warn level.
///
/// Case is ignored.  See [`inspect`] to receive the diagnostic instead.
pub fn decode(code: &str) -> Result<Patch> {
    let decoded = inspect(code)?;
    if let Some(diagnostic) = decoded.diagnostic {
        log::warn!("{code}: {diagnostic}");
    }
    Ok(decoded.patch)
}

/// Decode a code and return the diagnostic alongside the patch.
///
/// The length is validated before any symbol, so `"QQQ"` reports
/// `InvalidLength` rather than `InvalidSymbol`.
pub fn inspect(code: &str) -> Result<Decoded> {
    let (n, len) = to_nibbles(code)?;
    log::trace!("{code}: nibbles {:X?}", &n[..len]);

    let address = 0x8000
        | (u16::from(n[3] & 0x7) << 12)
        | (u16::from(n[5] & 0x7) << 8)
        | (u16::from(n[4] & 0x8) << 8)
        | (u16::from(n[2] & 0x7) << 4)
        | (u16::from(n[1] & 0x8) << 4)
        | u16::from(n[4] & 0x7)
        | u16::from(n[3] & 0x8);

    let diagnostic = (n[2] & 0x8 == 0).then(|| Diagnostic::UnflaggedThirdSymbol {
        symbol: alphabet::symbol_for(n[2]),
    });

    // Shared by both lengths; bit 3 is filled in per branch.
    let data_base = ((n[1] & 0x7) << 4) | ((n[0] & 0x8) << 4) | (n[0] & 0x7);

    let (data, comp) = if len == 6 {
        (data_base | (n[5] & 0x8), None)
    } else {
        let comp = ((n[7] & 0x7) << 4) | ((n[6] & 0x8) << 4) | (n[6] & 0x7) | (n[5] & 0x8);
        (data_base | (n[7] & 0x8), Some(comp))
    };

    Ok(Decoded {
        patch: Patch {
            address,
            data,
            comp,
        },
        diagnostic,
    })
}

/// Validate `code` and map each letter to its nibble.
///
/// Returns the nibble buffer and the number of letters (6 or 8).
fn to_nibbles(code: &str) -> Result<([u8; MAX_SYMBOLS], usize)> {
    let length = code.chars().count();
    if length != 6 && length != 8 {
        return Err(CodecError::InvalidLength { length });
    }

    let mut nibbles = [0u8; MAX_SYMBOLS];
    for (position, (slot, symbol)) in nibbles.iter_mut().zip(code.chars()).enumerate() {
        *slot = alphabet::nibble_for(symbol.to_ascii_uppercase())
            .ok_or(CodecError::InvalidSymbol { symbol, position })?;
    }
    Ok((nibbles, length))
}
