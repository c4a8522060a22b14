//! Game round logic
//!
//! One call to [`run`] is one full game: grow a random direction
//! pattern, play it back on the matrix, and read it back from the
//! joystick until the player slips up. The LED bar tracks the level.

use defmt::*;
use embassy_rp::clocks::RoscRng;
use embassy_time::Timer;
use heapless::Vec;
use rand_core::RngCore;

use mnemon_core::traits::ToneEmitter;
use mnemon_core::{frame, Direction, Frame};
use mnemon_drivers::my9221::LED_ON;

use crate::{channels, sound};
use crate::{BarDriver, JoystickDriver, ToneDriver};

/// Longest pattern the game stores
const PATTERN_CAPACITY: usize = 20;

/// Gap between arrows during pattern playback
const PLAYBACK_GAP_MS: u64 = 500;

/// Hold on the final screen before returning to the menu
const GAME_OVER_HOLD_MS: u64 = 3_000;

/// Run one game until the player fails (or fills the pattern store)
pub async fn run(
    joystick: &mut JoystickDriver,
    bar: &mut BarDriver,
    tone: &mut ToneDriver,
    rng: &mut RoscRng,
) {
    info!("starting game");
    sound::play_countdown(tone);

    let mut pattern: Vec<Direction, PATTERN_CAPACITY> = Vec::new();
    let mut level: usize = 0;

    loop {
        if pattern.push(random_direction(rng)).is_err() {
            // Pattern store is full: the player has outlasted the game
            break;
        }

        // Play back the pattern so far
        for &direction in &pattern {
            channels::set_frame(arrow_frame(direction));
            tone.play(sound::PATTERN_TONE_HZ, sound::PATTERN_TONE_MS);
            Timer::after_millis(PLAYBACK_GAP_MS).await;
        }
        channels::set_frame(frame::BLANK);

        // The player repeats it back
        let mut failed = false;
        for &expected in &pattern {
            let input = joystick.wait_for_direction();
            info!("input: {}, expected: {}", input, expected);

            if input != expected {
                failed = true;
                break;
            }
            joystick.wait_for_centered();
        }

        if failed {
            bar.clear();
            channels::set_frame(frame::INCORRECT);
            sound::play_incorrect(tone);
            break;
        }

        level += 1;
        info!("level {} cleared", level);
        sound::play_success(tone);

        // Levels past ten overflow the bar; those sets are silent no-ops
        for segment in 0..level {
            bar.set(segment, LED_ON);
        }
    }

    Timer::after_millis(GAME_OVER_HOLD_MS).await;
    bar.clear();
}

fn arrow_frame(direction: Direction) -> Frame {
    match direction {
        Direction::Left => frame::ARROW_LEFT,
        Direction::Right => frame::ARROW_RIGHT,
        Direction::Up => frame::ARROW_UP,
        Direction::Down => frame::ARROW_DOWN,
    }
}

fn random_direction(rng: &mut RoscRng) -> Direction {
    let mut byte = [0u8; 1];
    rng.fill_bytes(&mut byte);
    match byte[0] % 4 {
        0 => Direction::Left,
        1 => Direction::Right,
        2 => Direction::Up,
        _ => Direction::Down,
    }
}
