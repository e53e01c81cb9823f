//! Blocking MAX7219 seven-segment driver for embassy-rp.
//!
//! The MAX7219 refreshes all eight digits itself; this driver just latches
//! register writes over SPI. It keeps a shadow of the last pattern written
//! per position so the decimal-point mask can be applied without the caller
//! resending glyphs.
//!
//! Segment byte conversion: the mapping core produces common-anode
//! active-low patterns (bit 0 = a .. bit 6 = g, 0 = lit), while the MAX7219
//! wants active-high with bit 6 = a down to bit 0 = g and DP on bit 7.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};

use voltmeter_pico2::config::DIGIT_COUNT;
use voltmeter_pico2::glyphs::BLANK;
use voltmeter_pico2::readout::SevenSegDisplay;

// MAX7219 registers
const DIGIT_BASE: u8 = 0x01; // DIGITn = DIGIT_BASE + n
const DECODE_MODE: u8 = 0x09;
const INTENSITY: u8 = 0x0A;
const SCAN_LIMIT: u8 = 0x0B;
const SHUTDOWN: u8 = 0x0C;
const DISPLAY_TEST: u8 = 0x0F;

/// Mid-range brightness (0x00-0x0F).
const DEFAULT_INTENSITY: u8 = 0x07;

pub struct Max7219<'d> {
    spi: Spi<'d, SPI0, Blocking>,
    cs: Output<'d>,
    /// Shadow of the active-low patterns last written per position.
    patterns: [u8; DIGIT_COUNT],
    dp_mask: u8,
}

impl<'d> Max7219<'d> {
    pub fn new(spi: Spi<'d, SPI0, Blocking>, cs: Output<'d>) -> Self {
        Self {
            spi,
            cs,
            patterns: [BLANK; DIGIT_COUNT],
            dp_mask: 0,
        }
    }

    /// Bring the chip out of shutdown: raw (no-decode) segment mode, all
    /// eight digits scanned, everything blanked.
    pub fn init(&mut self) {
        self.write_reg(DISPLAY_TEST, 0x00);
        self.write_reg(DECODE_MODE, 0x00);
        self.write_reg(SCAN_LIMIT, (DIGIT_COUNT - 1) as u8);
        self.write_reg(INTENSITY, DEFAULT_INTENSITY);
        self.write_reg(SHUTDOWN, 0x01);
        for position in 0..DIGIT_COUNT {
            self.flush_digit(position);
        }
    }

    /// Latch one 16-bit register frame.
    fn write_reg(&mut self, register: u8, data: u8) {
        self.cs.set_low();
        self.spi.blocking_write(&[register, data]).ok();
        self.cs.set_high();
    }

    /// Rewrite one digit register from the shadow state.
    fn flush_digit(&mut self, position: usize) {
        let dp = self.dp_mask & (1 << position) != 0;
        let data = to_segment_byte(self.patterns[position], dp);
        self.write_reg(DIGIT_BASE + position as u8, data);
    }
}

/// Convert an active-low a..g pattern to the MAX7219 segment byte.
fn to_segment_byte(pattern: u8, dp: bool) -> u8 {
    let lit = !pattern;
    let mut out = 0u8;
    // bit 0..6 = a..g maps to bit 6..0
    for segment in 0..7 {
        if lit & (1 << segment) != 0 {
            out |= 1 << (6 - segment);
        }
    }
    if dp {
        out |= 0x80;
    }
    out
}

impl SevenSegDisplay for Max7219<'_> {
    fn write_pattern(&mut self, pattern: u8, position: usize) {
        if position >= DIGIT_COUNT {
            return;
        }
        self.patterns[position] = pattern;
        self.flush_digit(position);
    }

    fn set_decimal_points(&mut self, mask: u8) {
        let changed = self.dp_mask ^ mask;
        self.dp_mask = mask;
        for position in 0..DIGIT_COUNT {
            if changed & (1 << position) != 0 {
                self.flush_digit(position);
            }
        }
    }
}
