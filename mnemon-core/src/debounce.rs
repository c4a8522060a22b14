//! Direction debouncing
//!
//! The joystick is read through an ADC with no filtering of its own, so
//! raw samples wander by a few counts and occasionally spike. This module
//! turns repeated two-channel samples into discrete directional events: a
//! reading only counts when it is *stable*, meaning it moved at most
//! [`STABLE_DELTA`] counts since the immediately preceding sample. The
//! comparison window is always the last sample, never a long-term
//! baseline, so the debouncer recovers within one poll of any glitch.
//!
//! The X channel has a known quirk: it likes to jump to 255. A window
//! containing a 255 on X is discarded outright, even if the pair of
//! samples would otherwise pass the stability test.

/// Maximum count difference between consecutive samples for a reading
/// to be considered stable
pub const STABLE_DELTA: u8 = 10;

/// Stable readings above this fire the axis's positive direction
const DIRECTION_HIGH: u8 = 240;

/// Stable readings below this fire the axis's negative direction
const DIRECTION_LOW: u8 = 15;

/// Centered band, exclusive on both ends
const CENTER_LOW: u8 = 120;
const CENTER_HIGH: u8 = 130;

/// Spurious max-value reading the X channel produces under noise
const X_SPIKE: u8 = 255;

/// A discrete joystick direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Two-axis sample window and stability logic
///
/// Holds the last sample per axis. Feed it one sample pair per poll
/// cycle; the window is updated on every call regardless of outcome.
#[derive(Debug, Clone)]
pub struct DirectionDebouncer {
    last_x: u8,
    last_y: u8,
}

impl DirectionDebouncer {
    /// Window seeded at the stick's resting midpoint
    pub const fn new() -> Self {
        Self::seeded(128, 128)
    }

    /// Window seeded with explicit previous samples
    ///
    /// The centered wait seeds at zero so the very first poll can never
    /// pass the stability test against an unknown stick position.
    pub const fn seeded(x: u8, y: u8) -> Self {
        Self {
            last_x: x,
            last_y: y,
        }
    }

    /// Feed one sample pair, returning a direction if one fired
    ///
    /// X is consulted before Y; if a stable X reading is off-center the
    /// Y sample does not produce an event that cycle.
    pub fn feed(&mut self, x: u8, y: u8) -> Option<Direction> {
        let x_stable = self.last_x.abs_diff(x) <= STABLE_DELTA;
        let y_stable = self.last_y.abs_diff(y) <= STABLE_DELTA;
        // A 255 anywhere in the X window is noise, not a real deflection
        let x_spiked = x == X_SPIKE || self.last_x == X_SPIKE;

        let mut direction = None;

        if x_stable && !x_spiked {
            if x > DIRECTION_HIGH {
                direction = Some(Direction::Right);
            } else if x < DIRECTION_LOW {
                direction = Some(Direction::Left);
            }
        }

        if direction.is_none() && y_stable {
            if y > DIRECTION_HIGH {
                direction = Some(Direction::Up);
            } else if y < DIRECTION_LOW {
                direction = Some(Direction::Down);
            }
        }

        self.last_x = x;
        self.last_y = y;
        direction
    }

    /// Feed one sample pair, returning true once both axes are stably
    /// inside the centered band
    pub fn feed_centered(&mut self, x: u8, y: u8) -> bool {
        let x_centered =
            self.last_x.abs_diff(x) <= STABLE_DELTA && x > CENTER_LOW && x < CENTER_HIGH;
        let y_centered =
            self.last_y.abs_diff(y) <= STABLE_DELTA && y > CENTER_LOW && y < CENTER_HIGH;

        self.last_x = x;
        self.last_y = y;
        x_centered && y_centered
    }
}

impl Default for DirectionDebouncer {
    fn default() -> Self {
        Self::new()
    }
}
