//! Centralized deployment constants for the voltage visualizer.
//!
//! All values are compile-time constants with validation assertions.
//! This keeps the display layout, the color wheel geometry, and the sampling
//! cadence consistent between the mapping core and the firmware loop.
//!
//! # Compile-Time Validation
//!
//! Each constant group includes `const` assertions that verify internal
//! consistency at compile time. If the layout is configured incorrectly
//! (e.g., the decimal-point mask not matching the fixed digit position),
//! compilation will fail with a clear error.

// =============================================================================
// Sampling
// =============================================================================

/// Multiplier applied to the raw ADC voltage before it enters the mapping
/// core. With a 3.3 V full scale this puts readings in roughly 0..330.
pub const ADC_SCALE: f32 = 100.0;

/// Delay between sampling cycles in milliseconds.
pub const SAMPLE_PERIOD_MS: u64 = 100;

// =============================================================================
// Seven-Segment Layout
// =============================================================================

/// Number of digit positions on the display, indexed 0 (rightmost) to 7.
pub const DIGIT_COUNT: usize = 8;

/// Position of the fractional digit (right of the decimal point).
pub const FRAC_DIGIT_POS: usize = 0;

/// Position of the whole digit (left of the decimal point).
pub const WHOLE_DIGIT_POS: usize = 1;

/// Position that always renders a literal "0" with its decimal point lit.
/// Together with positions 0 and 1 this produces the "0.X.Y" readout shape;
/// the layout is a cosmetic choice of the display format and is fixed.
pub const FIXED_ZERO_POS: usize = 2;

/// Lowest position that is always blanked (everything from here up to
/// position 7 stays dark).
pub const FIRST_BLANK_POS: usize = 3;

/// Decimal-point mask: one bit per position, bit i = position i.
pub const FIXED_DP_MASK: u8 = 1 << FIXED_ZERO_POS;

// Compile-time validation: layout positions must be distinct and in range
const _: () = assert!(FRAC_DIGIT_POS < WHOLE_DIGIT_POS);
const _: () = assert!(WHOLE_DIGIT_POS < FIXED_ZERO_POS);
const _: () = assert!(FIXED_ZERO_POS < FIRST_BLANK_POS);
const _: () = assert!(FIRST_BLANK_POS < DIGIT_COUNT);
const _: () = assert!(FIXED_DP_MASK == 0x04);

// =============================================================================
// Color Wheel Geometry
// =============================================================================

/// Width of one hue sector in cycle-position units, chosen as ~1000/6 so six
/// sectors tile a nominal 0..999 range.
pub const SECTOR_WIDTH: f32 = 167.0;

/// Number of sectors on the wheel.
pub const SECTOR_COUNT: usize = 6;

const _: () = assert!(SECTOR_WIDTH > 0.0);
const _: () = assert!(SECTOR_WIDTH * (SECTOR_COUNT as f32) >= 999.0);
