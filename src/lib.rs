//! Gamegenie: NES Game Genie code encoding/decoding in Rust.
//!
//! The crate provides:
//! - The code format itself (`genie`): alphabet, decoder, encoder
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use gamegenie::genie::{self, Variant};
//!
//! let patch = genie::decode("ZEXPYGLA").unwrap();
//! assert_eq!(patch.address, 0x94A7);
//! assert_eq!(patch.data, 0x02);
//! assert_eq!(patch.comp, Some(0x03));
//! assert_eq!(patch.to_string(), "[0x94A7] returns 0x02 if read as 0x03");
//!
//! let code = genie::encode(0x94A7, 0x02, Some(0x03), Variant::Standard).unwrap();
//! assert_eq!(code, "ZEXPYGLA");
//! ```

pub mod genie;

#[cfg(feature = "cli")]
pub mod cli;
