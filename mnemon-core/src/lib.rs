//! Board-agnostic core logic for the Mnemon pattern game
//!
//! This crate contains the logic that does not depend on specific
//! hardware implementations:
//!
//! - Direction debouncing (noisy ADC samples -> discrete stick events)
//! - Frame type and the named 8x8 patterns the game displays
//! - The tone emitter trait consumed by the game's sound effects

#![no_std]
#![deny(unsafe_code)]

pub mod debounce;
pub mod frame;
pub mod traits;

pub use debounce::{Direction, DirectionDebouncer};
pub use frame::Frame;
