//! Voltmeter library - testable mapping core for the voltage visualizer.
//!
//! This library contains the value-to-presentation logic that can be tested
//! on the host machine. The binary (`main.rs`) uses this library and adds the
//! embedded-specific code (ADC sampling, MAX7219 and PWM drivers).
//!
//! - [`config`]: Deployment constants with compile-time validation
//! - [`glyphs`]: Seven-segment glyph table and lookup
//! - [`readout`]: Reading -> per-position display patterns ("d.d" layout)
//! - [`color_wheel`]: Reading -> RGB duty fractions on a six-sector hue wheel
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod color_wheel;
pub mod config;
pub mod glyphs;
pub mod readout;

// Re-export commonly used items
pub use color_wheel::{ColorDuty, RgbChannel, RgbPwm, apply_color, color_for_reading};
pub use config::*;
pub use readout::{DisplayPattern, SevenSegDisplay, format_reading, show_reading};
