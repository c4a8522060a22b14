//! Dot-matrix frames
//!
//! A [`Frame`] is the full 8x8 on/off state of the dot-matrix display,
//! stored as one bitmask per row with bit 7 as the leftmost column. It is
//! `Copy` so the firmware can publish a whole frame atomically: the
//! render loop always works from a complete snapshot, never a
//! half-replaced one.
//!
//! The named constants are the patterns the game displays: the four
//! direction arrows, the failure cross and the ready marker.

/// An 8x8 grid of lit/unlit cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    rows: [u8; 8],
}

impl Frame {
    /// Build a frame from row bitmasks, bit 7 = column 0
    pub const fn from_rows(rows: [u8; 8]) -> Self {
        Self { rows }
    }

    /// Whether the cell at (row, col) is lit
    ///
    /// Out-of-range coordinates read as unlit; no partial frames exist.
    pub fn cell(&self, row: usize, col: usize) -> bool {
        if row >= 8 || col >= 8 {
            return false;
        }
        self.rows[row] & (0x80 >> col) != 0
    }

    /// The row bitmasks
    pub fn rows(&self) -> [u8; 8] {
        self.rows
    }
}

/// All cells unlit
pub const BLANK: Frame = Frame::from_rows([0; 8]);

/// ←
pub const ARROW_LEFT: Frame = Frame::from_rows([
    0b00000000,
    0b00000000,
    0b00010000,
    0b00110000,
    0b01111110,
    0b00110000,
    0b00010000,
    0b00000000,
]);

/// →
pub const ARROW_RIGHT: Frame = Frame::from_rows([
    0b00000000,
    0b00000000,
    0b00001000,
    0b00001100,
    0b01111110,
    0b00001100,
    0b00001000,
    0b00000000,
]);

/// ↑
pub const ARROW_UP: Frame = Frame::from_rows([
    0b00000000,
    0b00001000,
    0b00011100,
    0b00111110,
    0b00001000,
    0b00001000,
    0b00001000,
    0b00000000,
]);

/// ↓
pub const ARROW_DOWN: Frame = Frame::from_rows([
    0b00000000,
    0b00001000,
    0b00001000,
    0b00001000,
    0b00111110,
    0b00011100,
    0b00001000,
    0b00000000,
]);

/// X - wrong input
pub const INCORRECT: Frame = Frame::from_rows([
    0b00000000,
    0b01000010,
    0b00100100,
    0b00011000,
    0b00011000,
    0b00100100,
    0b01000010,
    0b00000000,
]);

/// ʘ - waiting for the player to start
pub const READY: Frame = Frame::from_rows([
    0b00000000,
    0b01111110,
    0b01000010,
    0b01011010,
    0b01011010,
    0b01000010,
    0b01111110,
    0b00000000,
]);
