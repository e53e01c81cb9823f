//! Seven-segment glyph table for hexadecimal digits.
//!
//! Patterns are active-low (0 = segment lit), matching a common-anode
//! display: bit 0 = segment a through bit 6 = segment g, bit 7 = decimal
//! point. A fully blank position is `0xFF`.
//!
//! The table covers hex digits 0-15 like a hardware hex decoder. Lookup
//! masks the index to four bits, so out-of-range digits wrap instead of
//! panicking; callers that care about decimal semantics must keep their
//! digits in 0-9.

/// All segments off.
pub const BLANK: u8 = 0xFF;

/// Active-low segment patterns for hex digits 0-F.
const DIGIT_GLYPHS: [u8; 16] = [
    0xC0, // 0
    0xF9, // 1
    0xA4, // 2
    0xB0, // 3
    0x99, // 4
    0x92, // 5
    0x82, // 6
    0xF8, // 7
    0x80, // 8
    0x90, // 9
    0x88, // A
    0x83, // b
    0xC6, // C
    0xA1, // d
    0x86, // E
    0x8E, // F
];

/// Look up the segment pattern for a single digit.
///
/// The index wraps modulo 16, mirroring the hex-decoder collaborator the
/// mapping core delegates out-of-range digits to.
#[inline]
pub fn digit_to_glyph(digit: u8) -> u8 {
    DIGIT_GLYPHS[(digit & 0x0F) as usize]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_digit_glyphs() {
        // Spot-check the classic common-anode patterns
        assert_eq!(digit_to_glyph(0), 0xC0, "0 lights all segments but g");
        assert_eq!(digit_to_glyph(1), 0xF9, "1 lights only b and c");
        assert_eq!(digit_to_glyph(8), 0x80, "8 lights every segment");
        assert_eq!(digit_to_glyph(9), 0x90);
    }

    #[test]
    fn test_every_glyph_differs_from_blank() {
        for d in 0..16u8 {
            assert_ne!(digit_to_glyph(d), BLANK, "digit {d} must light something");
        }
    }

    #[test]
    fn test_out_of_range_digit_wraps_like_hex_decoder() {
        assert_eq!(digit_to_glyph(16), digit_to_glyph(0));
        assert_eq!(digit_to_glyph(25), digit_to_glyph(9));
    }
}
