//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Toggle the pin state
    fn toggle(&mut self) {
        self.set_state(!self.is_set_high());
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Pin whose direction can be switched at runtime
///
/// The ADC0832 shares one DATA line for both halves of a transaction:
/// the controller drives the command bits, then turns the line around to
/// read the sample bits. Drivers call [`set_as_input`](IoPin::set_as_input)
/// for the read phase and [`set_as_output`](IoPin::set_as_output) to hand
/// the line back.
pub trait IoPin: OutputPin + InputPin {
    /// Configure the line as an output, driven by this controller
    fn set_as_output(&mut self);

    /// Configure the line as an input, released to the peripheral
    fn set_as_input(&mut self);
}
