//! 8x8 dot-matrix multiplexer
//!
//! The matrix sits behind two daisy-chained shift registers: the first
//! byte pushed selects the row (one-hot), the second the column
//! (inverted, a 0 bit enables the column). The hardware cannot address
//! individual LEDs, so a frame is rendered by scanning it cell by cell,
//! lighting at most one LED at any instant and relying on persistence
//! of vision for the full picture. The scan must be re-run continuously;
//! the firmware dedicates a task to it (see `mnemon-firmware`).

use mnemon_core::Frame;
use mnemon_hal::{DelayUs, OutputPin};

/// How long a lit cell is held so the LED visibly turns on
const DWELL_US: u32 = 100;

/// Shift-register driver for the 8x8 matrix
pub struct Matrix<Latch, Clk, Data, D> {
    latch: Latch,
    clk: Clk,
    data: Data,
    delay: D,
}

impl<Latch, Clk, Data, D> Matrix<Latch, Clk, Data, D>
where
    Latch: OutputPin,
    Clk: OutputPin,
    Data: OutputPin,
    D: DelayUs,
{
    /// Take ownership of the register lines
    pub fn new(mut latch: Latch, mut clk: Clk, mut data: Data, delay: D) -> Self {
        latch.set_high();
        clk.set_low();
        data.set_low();
        Self {
            latch,
            clk,
            data,
            delay,
        }
    }

    /// Render one full pass over the frame
    ///
    /// Each row starts by blanking both registers so the previous row's
    /// column pattern cannot ghost into this one. Lit cells get a fixed
    /// dwell; unlit cells are skipped entirely.
    pub fn scan(&mut self, frame: &Frame) {
        for row in 0..8 {
            self.push_byte(0);
            self.push_byte(0);

            for col in 0..8 {
                if frame.cell(row, col) {
                    self.push_byte(0x80 >> row); // one-hot row select
                    self.push_byte(!(0x80u8 >> col)); // one-cold column select
                    self.delay.delay_us(DWELL_US);
                }
            }
        }
    }

    /// Shift one byte into the registers, MSB first, and latch it
    fn push_byte(&mut self, byte: u8) {
        self.latch.set_low();
        for i in (0..8).rev() {
            self.data.set_state(byte >> i & 1 == 1);
            self.clk.set_high();
            self.clk.set_low();
        }
        self.latch.set_high();
    }
}
