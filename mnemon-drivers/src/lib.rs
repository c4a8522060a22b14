//! Bit-banged peripheral protocol drivers
//!
//! This crate implements the serial protocols for the game's discrete
//! peripherals, generic over the pin and delay traits in `mnemon-hal`:
//!
//! - ADC0832 two-channel ADC (joystick axes)
//! - MY9221 10-segment LED bar
//! - 8x8 dot-matrix on daisy-chained shift registers
//! - GPIO square-wave buzzer
//!
//! None of these chips speak a standard bus; each driver hand-generates
//! its framing on shared digital lines with fixed busy-wait timing. All
//! operations are synchronous and block the caller for the full
//! transmission. There is no acknowledgment channel from any chip, so
//! the only validated conditions are out-of-range arguments, which are
//! rejected without touching the bus.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod adc0832;
pub mod buzzer;
pub mod joystick;
pub mod matrix;
pub mod my9221;

pub use adc0832::Adc0832;
pub use buzzer::GpioBuzzer;
pub use joystick::Joystick;
pub use matrix::Matrix;
pub use my9221::My9221;
