//! Hardware abstraction traits
//!
//! These traits define the interface between the game logic and
//! hardware-specific implementations.

pub mod tone;

pub use tone::ToneEmitter;
