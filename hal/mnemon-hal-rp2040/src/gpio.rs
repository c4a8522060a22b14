//! GPIO trait implementations over embassy-rp

use embassy_rp::gpio::{AnyPin, Flex, Input, Level, Output, Pull};
use embassy_rp::Peri;

use mnemon_hal::{InputPin, IoPin, OutputPin};

/// Push-pull output line
pub struct RpOutput<'d> {
    inner: Output<'d>,
}

impl<'d> RpOutput<'d> {
    pub fn new(pin: Peri<'d, AnyPin>, initial: Level) -> Self {
        Self {
            inner: Output::new(pin, initial),
        }
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.inner.set_high();
    }

    fn set_low(&mut self) {
        self.inner.set_low();
    }

    fn toggle(&mut self) {
        self.inner.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.inner.is_set_high()
    }
}

/// Line whose direction is switched at runtime
///
/// Starts as a low output; the ADC driver turns it around for the
/// read phase of each transaction.
pub struct RpFlex<'d> {
    inner: Flex<'d>,
}

impl<'d> RpFlex<'d> {
    pub fn new(pin: Peri<'d, AnyPin>) -> Self {
        let mut inner = Flex::new(pin);
        inner.set_low();
        inner.set_as_output();
        Self { inner }
    }
}

impl OutputPin for RpFlex<'_> {
    fn set_high(&mut self) {
        self.inner.set_high();
    }

    fn set_low(&mut self) {
        self.inner.set_low();
    }

    fn toggle(&mut self) {
        self.inner.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.inner.is_set_high()
    }
}

impl InputPin for RpFlex<'_> {
    fn is_high(&self) -> bool {
        self.inner.is_high()
    }
}

impl IoPin for RpFlex<'_> {
    fn set_as_output(&mut self) {
        self.inner.set_as_output();
    }

    fn set_as_input(&mut self) {
        self.inner.set_as_input();
    }
}

/// Input line with an internal pull-up (active-low button)
pub struct RpInput<'d> {
    inner: Input<'d>,
}

impl<'d> RpInput<'d> {
    pub fn new(pin: Peri<'d, AnyPin>) -> Self {
        Self {
            inner: Input::new(pin, Pull::Up),
        }
    }
}

impl InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.inner.is_high()
    }
}
