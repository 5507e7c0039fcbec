// Patch record: the semantic value behind a Game Genie code.

use std::fmt;
use std::str::FromStr;

use super::decoder;
use super::encoder::{self, Variant};
use super::error::{CodecError, Field, Result, bounds_check};

/// Lowest patchable address (cartridge ROM space starts at 0x8000).
pub const ADDRESS_MIN: u16 = 0x8000;
pub const ADDRESS_MAX: u16 = 0xFFFF;

/// A memory patch: return `data` when the CPU reads `address`, optionally
/// only when the ROM byte there equals `comp`.
///
/// `comp` is present exactly for 8-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Patch {
    pub address: u16,
    pub data: u8,
    pub comp: Option<u8>,
}

impl Patch {
    /// Build a patch from untyped integers, checking every field's range.
    ///
    /// Fields are checked in the order address, data, comp.
    pub fn new(address: u32, data: u32, comp: Option<u32>) -> Result<Self> {
        bounds_check(
            Field::Address,
            address,
            u32::from(ADDRESS_MIN),
            u32::from(ADDRESS_MAX),
        )?;
        bounds_check(Field::Data, data, 0x00, 0xFF)?;
        if let Some(comp) = comp {
            bounds_check(Field::Comp, comp, 0x00, 0xFF)?;
        }
        Ok(Self {
            address: address as u16,
            data: data as u8,
            comp: comp.map(|c| c as u8),
        })
    }

    /// Number of letters in this patch's code: 6, or 8 with a compare value.
    pub fn symbol_count(&self) -> usize {
        if self.comp.is_some() { 8 } else { 6 }
    }

    pub fn encode(&self, variant: Variant) -> Result<String> {
        encoder::encode_patch(self, variant)
    }
}

impl fmt::Display for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&human_readable(self.address, self.data, self.comp))
    }
}

impl FromStr for Patch {
    type Err = CodecError;

    fn from_str(code: &str) -> Result<Self> {
        decoder::decode(code)
    }
}

/// Describe a patch in one line, e.g. `[0x94A7] returns 0x02 if read as 0x03`.
pub fn human_readable(address: u16, data: u8, comp: Option<u8>) -> String {
    let mut s = format!("[{address:#06X}] returns {data:#04X}");
    if let Some(comp) = comp {
        s.push_str(&format!(" if read as {comp:#04X}"));
    }
    s
}
