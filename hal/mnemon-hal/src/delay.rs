//! Busy-wait delay abstraction
//!
//! The bit-banged protocols have no handshake or readiness signal from
//! any chip: correctness rests entirely on holding lines for fixed
//! durations (tens of microseconds per half bit-period). Implementations
//! must therefore actually busy-wait - a delay that yields to a scheduler
//! and comes back late will corrupt a transaction.

/// Blocking microsecond/millisecond delay
pub trait DelayUs {
    /// Busy-wait for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Busy-wait for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        self.delay_us(ms.saturating_mul(1_000));
    }
}

// Allow borrowed delays to be passed where an owned one is expected
impl<D: DelayUs> DelayUs for &mut D {
    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us);
    }
}
