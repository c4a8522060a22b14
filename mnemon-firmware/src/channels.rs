//! Shared state between the game loop and the render task
//!
//! The only shared mutable resource in the firmware is the dot-matrix
//! frame. It is published as an atomically-replaceable snapshot: the
//! game loop swaps in a whole `Frame` (which is `Copy`) and returns
//! immediately, and the render task copies the current snapshot out
//! once per scan pass. A reader therefore always sees the old frame or
//! the new one in full - never some rows of each - and the writer gets
//! no acknowledgment that the new frame has been rendered yet.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use mnemon_core::{frame, Frame};

/// The frame the render task is currently scanning
static FRAME: Mutex<CriticalSectionRawMutex, Cell<Frame>> = Mutex::new(Cell::new(frame::BLANK));

/// Replace the displayed frame wholesale; returns immediately
pub fn set_frame(frame: Frame) {
    FRAME.lock(|cell| cell.set(frame));
}

/// Snapshot of the frame to render
pub fn current_frame() -> Frame {
    FRAME.lock(|cell| cell.get())
}
