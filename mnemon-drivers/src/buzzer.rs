//! GPIO square-wave buzzer
//!
//! The passive buzzer has no tone generator of its own; it sounds at
//! whatever frequency its line is toggled. This driver implements the
//! [`ToneEmitter`] trait by busy-wait toggling, the same way every other
//! peripheral here is driven.

use mnemon_core::traits::ToneEmitter;
use mnemon_hal::{DelayUs, OutputPin};

/// Bit-banged square-wave emitter
pub struct GpioBuzzer<P, D> {
    pin: P,
    delay: D,
}

impl<P, D> GpioBuzzer<P, D>
where
    P: OutputPin,
    D: DelayUs,
{
    pub fn new(mut pin: P, delay: D) -> Self {
        pin.set_low();
        Self { pin, delay }
    }
}

impl<P, D> ToneEmitter for GpioBuzzer<P, D>
where
    P: OutputPin,
    D: DelayUs,
{
    fn play(&mut self, freq_hz: u32, duration_ms: u32) {
        let half_period_us = if freq_hz == 0 { 0 } else { 500_000 / freq_hz };
        if half_period_us == 0 {
            // Frequency 0 is a rest: hold silence for the duration
            self.delay.delay_ms(duration_ms);
            return;
        }

        let cycles = duration_ms as u64 * 1_000 / (2 * half_period_us as u64);
        for _ in 0..cycles {
            self.pin.set_high();
            self.delay.delay_us(half_period_us);
            self.pin.set_low();
            self.delay.delay_us(half_period_us);
        }
    }
}
