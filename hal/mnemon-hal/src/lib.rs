//! Mnemon Hardware Abstraction Layer
//!
//! This crate defines the digital-line and delay traits the peripheral
//! protocol drivers are written against. Every protocol in this project
//! is bit-banged: the drivers need nothing from the hardware beyond
//! "drive this line", "read this line" and "busy-wait this long", so
//! this is the entire hardware surface.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (mnemon-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  mnemon-drivers (protocol drivers)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  mnemon-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  mnemon-hal-rp2040 (chip impl)          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`], [`gpio::IoPin`] - Digital I/O
//! - [`delay::DelayUs`] - Busy-wait delays

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use delay::DelayUs;
pub use gpio::{InputPin, IoPin, OutputPin};
