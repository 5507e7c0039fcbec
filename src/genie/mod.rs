// NES Game Genie code format.
//
// A code is 6 or 8 letters from a 16-letter alphabet; each letter carries
// one nibble, and the address/data/compare fields are scattered across the
// nibbles bit by bit.
//
// # Modules
//
// - `alphabet` — Letter <-> nibble tables
// - `decoder`  — Code string to patch record, with diagnostics
// - `encoder`  — Patch record to code string
// - `patch`    — Patch record type and human-readable formatting
// - `error`    — Codec error type

pub mod alphabet;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod patch;

// Re-export key types for convenience.
pub use alphabet::{ALPHABET, nibble_for, symbol_for};
pub use decoder::{Decoded, Diagnostic, decode, inspect};
pub use encoder::{Variant, encode, encode_patch};
pub use error::{CodecError, Field, Result};
pub use patch::{Patch, human_readable};
