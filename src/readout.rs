//! Digit formatter: scaled voltage reading -> seven-segment readout.
//!
//! A reading `v` (raw volts already scaled x100 by the caller) is rendered as
//! "d.d": the whole digit is `floor(v / 10)`, the fractional digit is
//! `floor(v) mod 10`. Position 2 always shows a literal "0" with its decimal
//! point lit and positions 3-7 stay blank, giving the fixed "0.X.Y" layout.
//!
//! The formatter is a pure function of the reading. It performs no clamping:
//! readings of 100 or more push the whole digit past 9, and what renders then
//! is up to the glyph table (see [`crate::glyphs`]).

use crate::config::{DIGIT_COUNT, FIRST_BLANK_POS, FIXED_DP_MASK, FIXED_ZERO_POS, FRAC_DIGIT_POS, WHOLE_DIGIT_POS};
use crate::glyphs::{BLANK, digit_to_glyph};

// =============================================================================
// Display Capability
// =============================================================================

/// Position-addressable seven-segment display sink.
///
/// Writes are independent and order-free; positions are indexed 0 (rightmost)
/// through [`DIGIT_COUNT`] - 1. Implemented by the MAX7219 driver on target
/// and by recording fakes in tests.
pub trait SevenSegDisplay {
    /// Write one segment pattern (active-low, `0xFF` = blank) to a position.
    fn write_pattern(&mut self, pattern: u8, position: usize);

    /// Set the decimal-point mask, one bit per position.
    fn set_decimal_points(&mut self, mask: u8);
}

// =============================================================================
// Display Pattern
// =============================================================================

/// The full set of per-position glyph/blank assignments for one cycle, plus
/// the decimal-point mask. Index 0 is the rightmost position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayPattern {
    pub patterns: [u8; DIGIT_COUNT],
    pub dp_mask: u8,
}

/// Digit shown left of the decimal point: `floor(v / 10)`.
#[inline]
pub fn whole_digit(reading: f32) -> u8 {
    (reading / 10.0) as u8
}

/// Digit shown right of the decimal point: `floor(v) mod 10`.
#[inline]
pub fn fractional_digit(reading: f32) -> u8 {
    ((reading as u32) % 10) as u8
}

/// Format a reading into the fixed "d.d" display layout.
pub fn format_reading(reading: f32) -> DisplayPattern {
    let mut patterns = [BLANK; DIGIT_COUNT];
    patterns[FIXED_ZERO_POS] = digit_to_glyph(0);
    patterns[WHOLE_DIGIT_POS] = digit_to_glyph(whole_digit(reading));
    patterns[FRAC_DIGIT_POS] = digit_to_glyph(fractional_digit(reading));
    DisplayPattern {
        patterns,
        dp_mask: FIXED_DP_MASK,
    }
}

/// Write a reading to a display sink.
///
/// The write order is fixed: blank the high positions from 7 down to 3,
/// then the fixed "0" and its decimal point, then the whole digit, then the
/// fractional digit. Positions are independent, so the order has no
/// observable effect on the display, but sinks and tests can rely on the
/// deterministic sequence.
pub fn show_reading<D: SevenSegDisplay>(display: &mut D, reading: f32) {
    for position in (FIRST_BLANK_POS..DIGIT_COUNT).rev() {
        display.write_pattern(BLANK, position);
    }

    display.write_pattern(digit_to_glyph(0), FIXED_ZERO_POS);
    display.set_decimal_points(FIXED_DP_MASK);

    display.write_pattern(digit_to_glyph(whole_digit(reading)), WHOLE_DIGIT_POS);
    display.write_pattern(digit_to_glyph(fractional_digit(reading)), FRAC_DIGIT_POS);
}

// =============================================================================
// Unit Tests
// =============================================================================
