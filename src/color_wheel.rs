//! Hue mapper: scaled voltage reading -> RGB PWM duty fractions.
//!
//! The reading traces a six-sector color wheel as it climbs from 0: each
//! sector ramps exactly one channel linearly from 0 to 1 (or back) while the
//! other two sit at their extremes, cycling
//! red -> yellow -> green -> cyan -> blue -> magenta -> red. The ramp formula
//! evaluated at each sector boundary equals the adjacent sector's fixed
//! value, so the traversal is continuous by construction.
//!
//! # Scale quirks
//!
//! The cycle position is `floor(v) * 10` - the reading is truncated to an
//! integer BEFORE the x10 scale, so sub-unit precision never moves the
//! color. And the final sector's blue ramp is not clamped: readings far past
//! the sixth sector drive blue negative. Both behaviors are load-bearing
//! compatibility and kept bit-for-bit in this mapping; hardware sinks clamp
//! at the driver seam via [`ColorDuty::clamped`].

use crate::config::{SECTOR_COUNT, SECTOR_WIDTH};

// =============================================================================
// PWM Capability
// =============================================================================

/// RGB LED channel identifiers. Channel identity, not the discriminant
/// value, is what matters to the mapping; the numbering matches the board's
/// PWM channel order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RgbChannel {
    Blue = 0,
    Green = 1,
    Red = 2,
}

/// Three-channel PWM sink.
///
/// `duty` is the fraction of time the channel is driven high. The mapping
/// hands over raw formula output; implementations backed by real hardware
/// are expected to clamp into [0, 1] before touching registers.
pub trait RgbPwm {
    fn set_duty(&mut self, duty: f32, channel: RgbChannel);
}

// =============================================================================
// Color Duty
// =============================================================================

/// Duty-cycle triple for one cycle, recomputed fully each sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorDuty {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl ColorDuty {
    /// Hard-limit all channels to [0, 1].
    ///
    /// The raw mapping can leave blue below 0 past the end of the wheel;
    /// this is the explicit hardening seam for hardware sinks.
    #[inline]
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            red: self.red.clamp(0.0, 1.0),
            green: self.green.clamp(0.0, 1.0),
            blue: self.blue.clamp(0.0, 1.0),
        }
    }
}

// =============================================================================
// Sector Table
// =============================================================================

/// How one channel behaves across a single sector.
#[derive(Clone, Copy)]
enum Curve {
    /// Held at 0.0 for the whole sector.
    Low,
    /// Held at 1.0 for the whole sector.
    High,
    /// Linear ramp 0 -> 1, reaching 1.0 at the sector's upper bound.
    Rising,
    /// Linear ramp 1 -> 0, reaching 0.0 at the sector's upper bound.
    Falling,
}

impl Curve {
    /// Evaluate the curve at cycle position `x` within a sector ending at
    /// `upper`. Ramps are NOT clamped; the catch-all sector relies on that.
    #[inline]
    fn eval(self, x: f32, upper: f32) -> f32 {
        match self {
            Curve::Low => 0.0,
            Curve::High => 1.0,
            Curve::Rising => 1.0 - (upper - x) / SECTOR_WIDTH,
            Curve::Falling => (upper - x) / SECTOR_WIDTH,
        }
    }
}

/// One entry of the wheel: an upper bound (inclusive) and a curve per
/// channel.
struct Sector {
    upper: f32,
    red: Curve,
    green: Curve,
    blue: Curve,
}

impl Sector {
    #[inline]
    fn eval(&self, x: f32) -> ColorDuty {
        ColorDuty {
            red: self.red.eval(x, self.upper),
            green: self.green.eval(x, self.upper),
            blue: self.blue.eval(x, self.upper),
        }
    }
}

/// The six wheel sectors in traversal order. Selection scans for the first
/// entry with `x <= upper`; the last entry is the catch-all for everything
/// past the fifth boundary, which is where the unclamped blue ramp lives.
static SECTORS: [Sector; SECTOR_COUNT] = [
    // red -> yellow: green rises
    Sector {
        upper: SECTOR_WIDTH,
        red: Curve::High,
        green: Curve::Rising,
        blue: Curve::Low,
    },
    // yellow -> green: red falls
    Sector {
        upper: SECTOR_WIDTH * 2.0,
        red: Curve::Falling,
        green: Curve::High,
        blue: Curve::Low,
    },
    // green -> cyan: blue rises
    Sector {
        upper: SECTOR_WIDTH * 3.0,
        red: Curve::Low,
        green: Curve::High,
        blue: Curve::Rising,
    },
    // cyan -> blue: green falls
    Sector {
        upper: SECTOR_WIDTH * 4.0,
        red: Curve::Low,
        green: Curve::Falling,
        blue: Curve::High,
    },
    // blue -> magenta: red rises
    Sector {
        upper: SECTOR_WIDTH * 5.0,
        red: Curve::Rising,
        green: Curve::Low,
        blue: Curve::High,
    },
    // magenta -> red: blue falls (catch-all, unclamped past 6 sectors)
    Sector {
        upper: SECTOR_WIDTH * 6.0,
        red: Curve::High,
        green: Curve::Low,
        blue: Curve::Falling,
    },
];

// =============================================================================
// Mapping
// =============================================================================

/// Cycle position for a reading: truncate to an integer, THEN scale x10.
/// This maps readings 0..100 onto positions 0..990 in steps of 10.
#[inline]
fn cycle_position(reading: f32) -> f32 {
    ((reading as i32) * 10) as f32
}

/// Map a reading to its raw duty triple on the hue wheel.
///
/// Pure function of the reading; no clamping (see module docs).
pub fn color_for_reading(reading: f32) -> ColorDuty {
    let x = cycle_position(reading);
    let last = SECTOR_COUNT - 1;
    let sector = SECTORS[..last]
        .iter()
        .find(|sector| x <= sector.upper)
        .unwrap_or(&SECTORS[last]);
    sector.eval(x)
}

/// Compute the duty triple for a reading and push it to a PWM sink,
/// fixed channel order red, green, blue.
pub fn apply_color<P: RgbPwm>(pwm: &mut P, reading: f32) {
    let duty = color_for_reading(reading);
    pwm.set_duty(duty.red, RgbChannel::Red);
    pwm.set_duty(duty.green, RgbChannel::Green);
    pwm.set_duty(duty.blue, RgbChannel::Blue);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_close(actual: f32, expected: f32, what: &str) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "{what}: expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_zero_reading_is_pure_red() {
        let duty = color_for_reading(0.0);
        assert_close(duty.red, 1.0, "red at v=0");
        assert_close(duty.green, 0.0, "green at v=0");
        assert_close(duty.blue, 0.0, "blue at v=0");
    }

    #[test]
    fn test_first_sector_green_ramp() {
        // v=16.7 -> x = 16 * 10 = 160, still inside sector 1
        let duty = color_for_reading(16.7);
        assert_close(duty.red, 1.0, "red");
        assert_close(duty.green, 1.0 - (167.0 - 160.0) / 167.0, "green");
        assert_close(duty.blue, 0.0, "blue");
    }

    #[test]
    fn test_third_sector_blue_ramp() {
        // v=50.0 -> x = 500, sector 3 (334 < x <= 501)
        let duty = color_for_reading(50.0);
        assert_close(duty.red, 0.0, "red");
        assert_close(duty.green, 1.0, "green");
        assert_close(duty.blue, 1.0 - (501.0 - 500.0) / 167.0, "blue");
    }

    #[test]
    fn test_final_sector_blue_falls() {
        // v=99.9 -> x = 990, past the fifth boundary (835)
        let duty = color_for_reading(99.9);
        assert_close(duty.red, 1.0, "red");
        assert_close(duty.green, 0.0, "green");
        assert_close(duty.blue, (1002.0 - 990.0) / 167.0, "blue");
    }

    #[test]
    fn test_boundary_continuity() {
        // At every sector boundary the lower sector's formulas must agree
        // with the upper sector's - the wheel has no color jumps. The table
        // representation makes this directly checkable per entry.
        for pair in SECTORS.windows(2) {
            let x = pair[0].upper;
            let below = pair[0].eval(x);
            let above = pair[1].eval(x);
            assert_close(below.red, above.red, "red at boundary");
            assert_close(below.green, above.green, "green at boundary");
            assert_close(below.blue, above.blue, "blue at boundary");
        }
    }

    #[test]
    fn test_duties_in_range_across_the_wheel() {
        // Integer readings 0..=100 cover cycle positions 0..=1000, all
        // inside the six sectors.
        for i in 0..=100u32 {
            let duty = color_for_reading(i as f32);
            for (value, name) in [(duty.red, "red"), (duty.green, "green"), (duty.blue, "blue")] {
                assert!(
                    (0.0..=1.0).contains(&value),
                    "{name} out of range at v={i}: {value}"
                );
            }
        }
    }

    #[test]
    fn test_blue_goes_negative_past_the_wheel() {
        // Documented non-invariant: the catch-all sector's blue ramp is not
        // clamped, so readings far past the wheel drive it negative.
        let duty = color_for_reading(150.0);
        assert!(duty.blue < 0.0, "blue should underflow, got {}", duty.blue);
        assert_close(duty.blue, (1002.0 - 1500.0) / 167.0, "blue underflow value");

        // The hardening seam brings it back into range.
        let clamped = duty.clamped();
        assert_close(clamped.blue, 0.0, "clamped blue");
        assert_close(clamped.red, 1.0, "clamped red");
    }

    #[test]
    fn test_sub_unit_precision_is_discarded() {
        // Truncation happens before the x10 scale: everything below one
        // reading unit never reaches the wheel.
        assert_eq!(color_for_reading(16.0), color_for_reading(16.7));
        assert_eq!(color_for_reading(50.0), color_for_reading(50.999));
    }

    #[test]
    fn test_mapping_is_pure() {
        assert_eq!(color_for_reading(42.0), color_for_reading(42.0));
        assert_eq!(color_for_reading(99.9), color_for_reading(99.9));
    }

    /// Recording fake that captures duty writes in order.
    #[derive(Default)]
    struct FakePwm {
        writes: Vec<(f32, RgbChannel)>,
    }

    impl RgbPwm for FakePwm {
        fn set_duty(&mut self, duty: f32, channel: RgbChannel) {
            self.writes.push((duty, channel));
        }
    }

    #[test]
    fn test_apply_color_write_order_and_values() {
        let mut pwm = FakePwm::default();
        apply_color(&mut pwm, 0.0);

        assert_eq!(pwm.writes.len(), 3);
        assert_eq!(pwm.writes[0].1, RgbChannel::Red);
        assert_eq!(pwm.writes[1].1, RgbChannel::Green);
        assert_eq!(pwm.writes[2].1, RgbChannel::Blue);
        assert_close(pwm.writes[0].0, 1.0, "red write");
        assert_close(pwm.writes[1].0, 0.0, "green write");
        assert_close(pwm.writes[2].0, 0.0, "blue write");
    }

    #[test]
    fn test_apply_color_hands_over_raw_duty() {
        // The mapping does not clamp on the way to the sink; that is the
        // driver's job.
        let mut pwm = FakePwm::default();
        apply_color(&mut pwm, 150.0);
        assert!(pwm.writes[2].0 < 0.0, "raw blue must reach the sink unclamped");
    }
}
