#![no_main]
use libfuzzer_sys::fuzz_target;
use gamegenie::genie::{self, Variant};

fuzz_target!(|data: &[u8]| {
    // The decoder must never panic, only return errors.
    let text = String::from_utf8_lossy(data);
    let Ok(decoded) = genie::inspect(&text) else {
        return;
    };

    // Anything that decodes re-encodes to the same letters (upper-cased).
    let variant = if decoded.diagnostic.is_some() {
        Variant::Alternate
    } else {
        Variant::Standard
    };
    let code = decoded.patch.encode(variant).unwrap();
    assert_eq!(code, text.to_ascii_uppercase());
});
