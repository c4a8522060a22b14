//! RP2040-specific HAL for Mnemon firmware
//!
//! Implements the `mnemon-hal` traits over `embassy-rp`'s GPIO types:
//!
//! - [`gpio::RpOutput`] - push-pull output line
//! - [`gpio::RpFlex`] - runtime-switchable line (the ADC DATA wire)
//! - [`gpio::RpInput`] - input line with pull-up (the joystick button)
//! - [`delay::BlockingDelay`] - busy-wait delay off the system timer

#![no_std]

pub mod delay;
pub mod gpio;

pub use delay::BlockingDelay;
pub use gpio::{RpFlex, RpInput, RpOutput};
