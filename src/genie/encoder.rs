// Game Genie encoder: patch record -> nibbles -> letters.
//
// Inverse of the decoder layout.  The first six nibbles are shared; the
// 6- and 8-letter codes then place bit 3 of data (and comp) differently:
//
//   6 letters: n5.3 = data.3
//   8 letters: n5.3 = comp.3, n6 = comp low/high, n7 = comp.654 | data.3

use super::alphabet;
use super::error::{Field, Result, bounds_check};
use super::patch::{ADDRESS_MAX, ADDRESS_MIN, Patch};

/// Which form of a code to emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// Bit 0x8 of the 3rd letter set, as on real codes.
    #[default]
    Standard,
    /// Bit 0x8 of the 3rd letter cleared.  Decodes to the same patch but
    /// raises the unflagged-third-symbol diagnostic.
    Alternate,
}

/// Encode raw field values, checking their ranges first.
pub fn encode(address: u32, data: u32, comp: Option<u32>, variant: Variant) -> Result<String> {
    encode_patch(&Patch::new(address, data, comp)?, variant)
}

/// Encode a patch record into a 6-letter code, or 8 letters when it has a
/// compare value.
pub fn encode_patch(patch: &Patch, variant: Variant) -> Result<String> {
    // `u16` admits addresses below the ROM window.
    bounds_check(
        Field::Address,
        u32::from(patch.address),
        u32::from(ADDRESS_MIN),
        u32::from(ADDRESS_MAX),
    )?;

    let address = patch.address;
    let data = patch.data;
    let flag = match variant {
        Variant::Standard => 0x8,
        Variant::Alternate => 0x0,
    };

    let mut n = [0u8; 8];
    n[5] = ((address >> 8) & 0x7) as u8;
    n[4] = (((address >> 8) & 0x8) | (address & 0x7)) as u8;
    n[3] = (((address >> 12) & 0x7) | (address & 0x8)) as u8;
    n[2] = ((address >> 4) & 0x7) as u8 | flag;
    n[1] = ((address >> 4) & 0x8) as u8 | ((data >> 4) & 0x7);
    n[0] = ((data >> 4) & 0x8) | (data & 0x7);

    let len = match patch.comp {
        None => {
            n[5] |= data & 0x8;
            6
        }
        Some(comp) => {
            n[5] |= comp & 0x8;
            n[6] = ((comp >> 4) & 0x8) | (comp & 0x7);
            n[7] = ((comp >> 4) & 0x7) | (data & 0x8);
            8
        }
    };
    log::trace!("{patch:?}: nibbles {:X?}", &n[..len]);

    Ok(n[..len].iter().map(|&nibble| alphabet::symbol_for(nibble)).collect())
}
