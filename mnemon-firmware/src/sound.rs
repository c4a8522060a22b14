//! Game sound effects
//!
//! Short jingles built from single square-wave notes. Rests are played
//! as zero-frequency notes so everything goes through the one
//! [`ToneEmitter`] operation.

use mnemon_core::traits::ToneEmitter;

/// Frequency played while an arrow is shown
pub const PATTERN_TONE_HZ: u32 = 880;

/// Duration of the per-arrow blip
pub const PATTERN_TONE_MS: u32 = 50;

/// Three-beat countdown before a game starts
pub fn play_countdown<T: ToneEmitter>(tone: &mut T) {
    tone.play(784, 120);
    tone.play(0, 480);
    tone.play(784, 120);
    tone.play(0, 480);
    tone.play(784, 480);
}

/// Rising jingle for a correctly repeated pattern
pub fn play_success<T: ToneEmitter>(tone: &mut T) {
    tone.play(659, 220);
    tone.play(523, 220);
    tone.play(784, 300);
}

/// Low triple buzz for a wrong input
pub fn play_incorrect<T: ToneEmitter>(tone: &mut T) {
    for _ in 0..3 {
        tone.play(120, 220);
        tone.play(0, 220);
    }
}
