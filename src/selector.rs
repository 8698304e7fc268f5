//! The byte <-> variation-selector codepoint mapping.
//!
//! Unicode defines 256 variation selectors across two disjoint blocks:
//! VS1-VS16 (U+FE00..U+FE0F) and VS17-VS256 (U+E0100..U+E01EF). They normally
//! request a presentation variant of the preceding character; here they are
//! repurposed as invisible data units, one selector per payload byte.
//!
//! The mapping is a total bijection over 0..=255: bytes 0-15 land in the low
//! block, bytes 16-255 in the high block.

/// First codepoint of the low selector block (VS1).
pub const LOW_FIRST: u32 = 0xFE00;

/// Last codepoint of the low selector block (VS16).
pub const LOW_LAST: u32 = 0xFE0F;

/// First codepoint of the high selector block (VS17).
pub const HIGH_FIRST: u32 = 0xE0100;

/// Last codepoint of the high selector block (VS256).
pub const HIGH_LAST: u32 = 0xE01EF;

/// Number of byte values carried by the low block.
pub const LOW_CAPACITY: u32 = 16;

/// Maps a payload byte to its variation-selector codepoint.
///
/// Bytes 0-15 map to U+FE00..U+FE0F, bytes 16-255 to U+E0100..U+E01EF.
/// Total over all byte values, so this never fails.
pub fn selector_for_byte(byte: u8) -> char {
    let code = if (byte as u32) < LOW_CAPACITY {
        LOW_FIRST + byte as u32
    } else {
        HIGH_FIRST + (byte as u32 - LOW_CAPACITY)
    };

    // Both blocks lie in assigned scalar-value space, so the conversion
    // cannot fail for any byte.
    char::from_u32(code).expect("selector blocks are valid scalar values")
}

/// Maps a variation-selector codepoint back to its payload byte.
///
/// Returns `None` for any scalar value outside both selector blocks.
pub fn byte_for_selector(c: char) -> Option<u8> {
    let code = c as u32;

    if (LOW_FIRST..=LOW_LAST).contains(&code) {
        Some((code - LOW_FIRST) as u8)
    } else if (HIGH_FIRST..=HIGH_LAST).contains(&code) {
        Some((code - HIGH_FIRST + LOW_CAPACITY) as u8)
    } else {
        None
    }
}

/// Returns true if the scalar value lies in either selector block.
pub fn is_selector(c: char) -> bool {
    byte_for_selector(c).is_some()
}
