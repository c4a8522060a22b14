//! Tone emitter trait

/// Square-wave tone output
///
/// The game's sound effects are built on this single operation. The call
/// blocks for the full duration and leaves the output silent afterwards.
pub trait ToneEmitter {
    /// Drive a square wave at `freq_hz` for `duration_ms`, then silence
    fn play(&mut self, freq_hz: u32, duration_ms: u32);
}
