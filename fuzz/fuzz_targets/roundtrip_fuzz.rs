#![no_main]
use libfuzzer_sys::fuzz_target;
use gamegenie::genie::{self, Variant};

fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }

    // First byte holds control flags, the rest the raw fields.
    let flags = data[0];
    let address = u32::from(u16::from_le_bytes([data[1], data[2]]));
    let value = u32::from(data[3]);
    let comp = (flags & 1 != 0).then_some(u32::from(data[4]));
    let variant = if flags & 2 != 0 {
        Variant::Alternate
    } else {
        Variant::Standard
    };

    let Ok(code) = genie::encode(address, value, comp, variant) else {
        assert!(address < 0x8000);
        return;
    };
    let decoded = genie::inspect(&code).unwrap();
    assert_eq!(u32::from(decoded.patch.address), address);
    assert_eq!(u32::from(decoded.patch.data), value);
    assert_eq!(decoded.patch.comp.map(u32::from), comp);
    assert_eq!(decoded.diagnostic.is_some(), variant == Variant::Alternate);
});
