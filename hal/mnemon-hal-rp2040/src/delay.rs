//! Busy-wait delay off the system timer
//!
//! The protocol drivers need real busy-waits: an async timer that yields
//! and resumes late would stretch clock edges past what the chips
//! tolerate. `embassy_time::block_for` spins on the timer without
//! touching the executor.

use embassy_time::{block_for, Duration};

use mnemon_hal::DelayUs;

/// Zero-sized busy-wait delay; construct one wherever needed
#[derive(Clone, Copy, Default)]
pub struct BlockingDelay;

impl DelayUs for BlockingDelay {
    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(us as u64));
    }
}
