//! RGB LED driver over three RP2350 PWM slices.
//!
//! Each color channel owns one slice configured as a channel-A output. The
//! per-channel `Config` is stored and reapplied on every duty update so the
//! wrap value survives reconfiguration.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};

use voltmeter_pico2::color_wheel::{RgbChannel, RgbPwm};

/// PWM wrap value: 4096 duty steps, ~36 kHz from the 150 MHz system clock.
const DUTY_TOP: u16 = 0x0FFF;

struct PwmChannel<'d> {
    pwm: Pwm<'d>,
    /// Stored so updates keep top/divider intact.
    cfg: PwmConfig,
}

impl PwmChannel<'_> {
    fn set_fraction(&mut self, duty: f32) {
        // The mapping hands over raw formula output, which dips below zero
        // past the end of the wheel; hardware only accepts [0, 1].
        let duty = duty.clamp(0.0, 1.0);
        self.cfg.compare_a = (duty * DUTY_TOP as f32) as u16;
        self.pwm.set_config(&self.cfg);
    }
}

pub struct RgbLed<'d> {
    red: PwmChannel<'d>,
    green: PwmChannel<'d>,
    blue: PwmChannel<'d>,
}

impl<'d> RgbLed<'d> {
    /// Slice configuration every channel must be created with.
    pub fn base_config() -> PwmConfig {
        let mut cfg = PwmConfig::default();
        cfg.top = DUTY_TOP;
        cfg.compare_a = 0;
        cfg
    }

    /// Wrap three PWM slices. Each `Pwm` must be a channel-A output created
    /// with [`Self::base_config`].
    pub fn new(red: Pwm<'d>, green: Pwm<'d>, blue: Pwm<'d>) -> Self {
        let cfg = Self::base_config();
        Self {
            red: PwmChannel { pwm: red, cfg: cfg.clone() },
            green: PwmChannel { pwm: green, cfg: cfg.clone() },
            blue: PwmChannel { pwm: blue, cfg },
        }
    }
}

impl RgbPwm for RgbLed<'_> {
    fn set_duty(&mut self, duty: f32, channel: RgbChannel) {
        let target = match channel {
            RgbChannel::Red => &mut self.red,
            RgbChannel::Green => &mut self.green,
            RgbChannel::Blue => &mut self.blue,
        };
        target.set_fraction(duty);
    }
}
