// Game Genie symbol alphabet.
//
// Sixteen letters, one per nibble value.  The position of a letter in
// `ALPHABET` is the 4-bit value it carries.  The reverse table is built at
// compile time and shared by every decode call.

/// The 16 Game Genie letters in nibble order (`A` = 0x0 .. `N` = 0xF).
pub const ALPHABET: &str = "APZLGITYEOXUKSVN";

/// Letters whose nibble has bit 0x8 set (the upper half of `ALPHABET`).
pub const FLAGGED_SYMBOLS: &str = "EOXUKSVN";

const SYMBOLS: [u8; 16] = *b"APZLGITYEOXUKSVN";

/// Marker for bytes that are not a Game Genie letter.
const INVALID: u8 = 0xFF;

/// Byte -> nibble lookup. Only uppercase letters are populated.
static NIBBLES: [u8; 256] = build_reverse_table();

const fn build_reverse_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < SYMBOLS.len() {
        table[SYMBOLS[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Return the letter for a nibble. Only the low 4 bits of `nibble` are used.
#[inline]
pub fn symbol_for(nibble: u8) -> char {
    char::from(SYMBOLS[usize::from(nibble & 0x0F)])
}

/// Return the nibble for a letter, or `None` if `symbol` is not one of
/// `ALPHABET`.  The lookup is exact: callers normalise case first.
#[inline]
pub fn nibble_for(symbol: char) -> Option<u8> {
    if !symbol.is_ascii() {
        return None;
    }
    match NIBBLES[symbol as usize] {
        INVALID => None,
        nibble => Some(nibble),
    }
}
