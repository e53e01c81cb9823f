//! Analog voltage visualizer firmware for Raspberry Pi Pico 2 (RP2350).
//!
//! Samples the voltage on GPIO26 every 100 ms and shows it two ways at once:
//! a "d.d" readout on a MAX7219 seven-segment module and a continuous color
//! on an RGB LED whose hue walks a six-sector wheel as the voltage climbs.
//!
//! # Wiring
//!
//! - ADC input: GPIO26 (ADC channel 0)
//! - MAX7219: SPI0, CLK=GPIO18, MOSI=GPIO19, CS=GPIO17
//! - RGB LED: red=GPIO2 (slice 1A), green=GPIO4 (slice 2A), blue=GPIO8 (slice 4A)
//! - Heartbeat: on-board LED, GPIO25
//!
//! The mapping core lives in the library crate and is tested on the host;
//! this binary only supplies the peripherals behind the core's capability
//! traits and the timing loop.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the binary (hardware drivers, not testable on host)
#[cfg(target_arch = "arm")]
mod max7219;
#[cfg(target_arch = "arm")]
mod rgb_pwm;

#[cfg(target_arch = "arm")]
mod firmware {
    use defmt::{error, info};
    use embassy_executor::Spawner;
    use embassy_rp::adc::{self, Adc, Channel};
    use embassy_rp::bind_interrupts;
    use embassy_rp::gpio::{Level, Output, Pull};
    use embassy_rp::pwm::Pwm;
    use embassy_rp::spi::{self, Spi};
    use embassy_time::{Duration, Instant, Timer};
    use {defmt_rtt as _, panic_probe as _};

    use voltmeter_pico2::color_wheel::{apply_color, color_for_reading};
    use voltmeter_pico2::config::{ADC_SCALE, SAMPLE_PERIOD_MS};
    use voltmeter_pico2::readout::show_reading;

    use crate::max7219::Max7219;
    use crate::rgb_pwm::RgbLed;

    bind_interrupts!(struct Irqs {
        ADC_IRQ_FIFO => adc::InterruptHandler;
    });

    // Program metadata for `picotool info`
    #[unsafe(link_section = ".bi_entries")]
    #[used]
    pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
        embassy_rp::binary_info::rp_program_name!(c"pico2-voltmeter"),
        embassy_rp::binary_info::rp_program_description!(
            c"Analog voltage visualizer: seven-segment readout plus RGB color wheel"
        ),
        embassy_rp::binary_info::rp_cargo_version!(),
        embassy_rp::binary_info::rp_program_build_attribute!(),
    ];

    /// 12-bit ADC against the 3.3 V rail.
    const ADC_COUNTS_PER_VOLT: f32 = 4095.0 / 3.3;

    /// MAX7219 serial clock; the part is specified up to 10 MHz.
    const DISPLAY_SPI_FREQ: u32 = 10_000_000;

    #[embassy_executor::main]
    async fn main(_spawner: Spawner) {
        info!("Voltage visualizer starting...");
        let p = embassy_rp::init(Default::default());

        // ADC input on GPIO26 (channel 0)
        let mut adc = Adc::new(p.ADC, Irqs, adc::Config::default());
        let mut vin = Channel::new_pin(p.PIN_26, Pull::None);

        // MAX7219 seven-segment module on SPI0 (TX-only, CS driven manually)
        let mut spi_config = spi::Config::default();
        spi_config.frequency = DISPLAY_SPI_FREQ;
        let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
        let cs = Output::new(p.PIN_17, Level::High);
        let mut display = Max7219::new(spi, cs);
        display.init();
        info!("Display initialized");

        // RGB LED on three channel-A PWM slices
        let pwm_config = RgbLed::base_config();
        let red = Pwm::new_output_a(p.PWM_SLICE1, p.PIN_2, pwm_config.clone());
        let green = Pwm::new_output_a(p.PWM_SLICE2, p.PIN_4, pwm_config.clone());
        let blue = Pwm::new_output_a(p.PWM_SLICE4, p.PIN_8, pwm_config);
        let mut led = RgbLed::new(red, green, blue);
        info!("RGB PWM initialized");

        // Heartbeat LED so a stalled loop is visible
        let mut heartbeat = Output::new(p.PIN_25, Level::Low);

        info!("Sampling loop starting ({} ms cadence)", SAMPLE_PERIOD_MS);
        let started = Instant::now();
        let mut last_log = Instant::now();

        loop {
            // Sample, format, color - strictly in sequence, one reading per
            // cycle. The reading is not retained; the core is stateless.
            match adc.read(&mut vin).await {
                Ok(raw) => {
                    let volts = f32::from(raw) / ADC_COUNTS_PER_VOLT;
                    let reading = volts * ADC_SCALE;

                    show_reading(&mut display, reading);
                    apply_color(&mut led, reading);

                    if last_log.elapsed() >= Duration::from_secs(2) {
                        let duty = color_for_reading(reading);
                        info!(
                            "reading={} duty r={} g={} b={}",
                            reading, duty.red, duty.green, duty.blue
                        );
                        last_log = Instant::now();
                    }
                }
                Err(e) => {
                    // Skip the cycle; the previous frame stays on the outputs
                    error!("ADC read failed: {:?}", e);
                }
            }

            // Toggle heartbeat at ~1 Hz (time-based)
            if (started.elapsed().as_millis() / 500).is_multiple_of(2) {
                heartbeat.set_high();
            } else {
                heartbeat.set_low();
            }

            Timer::after_millis(SAMPLE_PERIOD_MS).await;
        }
    }
}

// The firmware only targets ARM; this stub keeps host builds (used for
// `cargo test --lib`) linking.
#[cfg(not(target_arch = "arm"))]
fn main() {}
