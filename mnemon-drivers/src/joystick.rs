//! Joystick input
//!
//! Combines the ADC0832 driver with the direction debouncer: the X and Y
//! axes are polled in a cooperative busy-wait loop until the debouncer
//! reports a stable deflection (or a stable re-center). The stick's
//! Z-axis push button is a plain active-low digital line.

use mnemon_core::{Direction, DirectionDebouncer};
use mnemon_hal::{DelayUs, InputPin, IoPin, OutputPin};

use crate::adc0832::Adc0832;

/// ADC channel wired to the X axis
pub const X_CHANNEL: u8 = 0;

/// ADC channel wired to the Y axis
pub const Y_CHANNEL: u8 = 1;

/// Settle time between channel reads and between poll iterations
const POLL_SETTLE_MS: u32 = 25;

/// Joystick reader over an ADC0832 and a button line
pub struct Joystick<Cs, Clk, Io, Btn, D> {
    adc: Adc0832<Cs, Clk, Io, D>,
    button: Btn,
    delay: D,
}

impl<Cs, Clk, Io, Btn, D> Joystick<Cs, Clk, Io, Btn, D>
where
    Cs: OutputPin,
    Clk: OutputPin,
    Io: IoPin,
    Btn: InputPin,
    D: DelayUs,
{
    pub fn new(adc: Adc0832<Cs, Clk, Io, D>, button: Btn, delay: D) -> Self {
        Self { adc, button, delay }
    }

    /// Whether the Z-axis button is currently pushed down
    pub fn button_pressed(&self) -> bool {
        self.button.is_low()
    }

    /// Block until the stick is stably deflected, returning the direction
    pub fn wait_for_direction(&mut self) -> Direction {
        let mut debouncer = DirectionDebouncer::new();
        loop {
            if let Some(direction) = debouncer.feed(self.poll_x(), self.poll_y()) {
                return direction;
            }
        }
    }

    /// Block until both axes are stably centered
    pub fn wait_for_centered(&mut self) {
        // Zero seed: the first poll can never pass the stability test
        let mut debouncer = DirectionDebouncer::seeded(0, 0);
        loop {
            if debouncer.feed_centered(self.poll_x(), self.poll_y()) {
                return;
            }
        }
    }

    fn poll_x(&mut self) -> u8 {
        let x = self.adc.read_channel(X_CHANNEL);
        self.delay.delay_ms(POLL_SETTLE_MS);
        x
    }

    fn poll_y(&mut self) -> u8 {
        let y = self.adc.read_channel(Y_CHANNEL);
        self.delay.delay_ms(POLL_SETTLE_MS);
        y
    }
}
