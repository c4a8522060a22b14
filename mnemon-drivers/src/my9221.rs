//! MY9221 LED bar protocol
//!
//! The 10-segment bar sits behind a MY9221 LED driver with a 2-wire
//! custom protocol. We run the chip in its 16-bit two-bytes-per-channel
//! mode and map our 8-bit brightness range onto it by duplicating each
//! byte into both halves of the word; no true 16-bit precision exists
//! upstream of this driver. The chip addresses twelve channels but only
//! ten LEDs are wired, so every transmission pads with two zero words.
//!
//! The chip has no partial-update framing: every mutation retransmits
//! the full 10-element vector and latches it in atomically.

use mnemon_hal::{DelayUs, OutputPin};

/// Number of wired LEDs
pub const LED_COUNT: usize = 10;

/// Full brightness
pub const LED_ON: u8 = 0xFF;

/// Off
pub const LED_OFF: u8 = 0x00;

/// Half brightness
pub const LED_HALF: u8 = LED_ON / 2;

/// Hold per shifted bit
const BIT_DELAY_US: u32 = 20;

/// Hold bracketing the latch pulse train
const LATCH_HOLD_US: u32 = 500;

/// Width of each half of a latch pulse
const LATCH_PULSE_US: u32 = 1;

/// MY9221 LED bar driver over clock and data lines
pub struct My9221<Clk, Data, D> {
    clk: Clk,
    data: Data,
    delay: D,
    levels: [u8; LED_COUNT],
    /// Current clock polarity; the protocol toggles it on every bit
    clk_level: bool,
}

impl<Clk, Data, D> My9221<Clk, Data, D>
where
    Clk: OutputPin,
    Data: OutputPin,
    D: DelayUs,
{
    /// Take ownership of the bus lines and clear the bar
    pub fn new(mut clk: Clk, mut data: Data, delay: D) -> Self {
        clk.set_low();
        data.set_low();

        let mut bar = Self {
            clk,
            data,
            delay,
            levels: [LED_OFF; LED_COUNT],
            clk_level: false,
        };

        // Two-byte command mode preamble, then a clean first frame
        bar.push_word(0);
        bar.push_word(0);
        bar.clear();
        bar
    }

    /// Turn every segment off and retransmit
    pub fn clear(&mut self) {
        self.levels = [LED_OFF; LED_COUNT];
        self.refresh();
    }

    /// Set one segment's brightness and retransmit
    ///
    /// Out-of-range indices leave the state untouched and put nothing
    /// on the bus.
    pub fn set(&mut self, led: usize, value: u8) {
        if led >= LED_COUNT {
            return;
        }
        self.levels[led] = value;
        self.refresh();
    }

    /// Retransmit the current 10-element state
    pub fn refresh(&mut self) {
        self.start_frame();
        for i in 0..LED_COUNT {
            self.push_word(self.levels[i]);
        }
        self.finalize_frame();
    }

    /// Leading command preamble
    fn start_frame(&mut self) {
        self.push_word(0);
        self.push_word(0);
    }

    /// Trailing filler for the two unwired channels, then latch
    fn finalize_frame(&mut self) {
        self.push_word(LED_OFF);
        self.push_word(LED_OFF);
        self.latch();
    }

    /// Shift out one 16-bit word formed by duplicating `byte`
    fn push_word(&mut self, byte: u8) {
        let mut bits = (((byte as u32) << 8) | byte as u32) << 16;

        for _ in 0..16 {
            self.data.set_state(bits & 0x8000_0000 != 0);
            self.clk_level = !self.clk_level;
            self.clk.set_state(self.clk_level);

            bits <<= 1;
            self.delay.delay_us(BIT_DELAY_US);
        }
    }

    /// Tell the chip to apply the shifted-in values to its outputs
    fn latch(&mut self) {
        self.data.set_low();
        self.delay.delay_us(LATCH_HOLD_US);

        for _ in 0..8 {
            self.data.set_low();
            self.delay.delay_us(LATCH_PULSE_US);
            self.data.set_high();
            self.delay.delay_us(LATCH_PULSE_US);
        }

        self.data.set_low();
        self.delay.delay_us(LATCH_HOLD_US);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use std::rc::Rc;
    use std::vec;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum BusEvent {
        Clk(bool),
        Data(bool),
    }

    type Trace = Rc<RefCell<Vec<BusEvent>>>;

    struct ClkPin(Trace, bool);
    struct DataPin(Trace, bool);

    impl OutputPin for ClkPin {
        fn set_high(&mut self) {
            self.1 = true;
            self.0.borrow_mut().push(BusEvent::Clk(true));
        }
        fn set_low(&mut self) {
            self.1 = false;
            self.0.borrow_mut().push(BusEvent::Clk(false));
        }
        fn is_set_high(&self) -> bool {
            self.1
        }
    }

    impl OutputPin for DataPin {
        fn set_high(&mut self) {
            self.1 = true;
            self.0.borrow_mut().push(BusEvent::Data(true));
        }
        fn set_low(&mut self) {
            self.1 = false;
            self.0.borrow_mut().push(BusEvent::Data(false));
        }
        fn is_set_high(&self) -> bool {
            self.1
        }
    }

    struct NoDelay;
    impl DelayUs for NoDelay {
        fn delay_us(&mut self, _us: u32) {}
    }

    fn bar() -> (My9221<ClkPin, DataPin, NoDelay>, Trace) {
        let trace: Trace = Rc::new(RefCell::new(Vec::new()));
        let bar = My9221::new(ClkPin(trace.clone(), false), DataPin(trace.clone(), false), NoDelay);
        trace.borrow_mut().clear();
        (bar, trace)
    }

    /// The bit stream: data level at every clock toggle
    fn shifted_bits(trace: &Trace) -> Vec<bool> {
        let mut bits = Vec::new();
        let mut data = false;
        for &event in trace.borrow().iter() {
            match event {
                BusEvent::Data(level) => data = level,
                BusEvent::Clk(_) => bits.push(data),
            }
        }
        bits
    }

    /// The transmitted 16-bit words
    fn shifted_words(trace: &Trace) -> Vec<u16> {
        shifted_bits(trace)
            .chunks(16)
            .filter(|chunk| chunk.len() == 16)
            .map(|chunk| chunk.iter().fold(0u16, |word, &bit| word << 1 | bit as u16))
            .collect()
    }

    /// Data transitions after the final clock toggle (the latch sequence)
    fn latch_sequence(trace: &Trace) -> Vec<bool> {
        let events = trace.borrow();
        let last_clk = events
            .iter()
            .rposition(|e| matches!(e, BusEvent::Clk(_)))
            .unwrap();
        events[last_clk + 1..]
            .iter()
            .map(|e| match e {
                BusEvent::Data(level) => *level,
                BusEvent::Clk(_) => unreachable!(),
            })
            .collect()
    }

    fn word_for(byte: u8) -> u16 {
        u16::from_be_bytes([byte, byte])
    }

    #[test]
    fn test_word_duplicates_byte_into_both_halves() {
        let (mut bar, trace) = bar();
        for byte in 0..=255u8 {
            trace.borrow_mut().clear();
            bar.set(0, byte);
            // Word 0 and 1 are the preamble, word 2 is LED 0
            assert_eq!(shifted_words(&trace)[2], word_for(byte));
        }
    }

    #[test]
    fn test_frame_layout_is_preamble_data_filler() {
        let (mut bar, trace) = bar();
        bar.set(0, LED_ON);
        bar.set(1, LED_ON);
        trace.borrow_mut().clear();
        bar.set(2, LED_ON);

        let mut expected = vec![0, 0]; // command preamble
        expected.extend([word_for(LED_ON); 3]);
        expected.extend([0u16; 7]); // untouched LEDs
        expected.extend([0u16; 2]); // unwired channels
        assert_eq!(shifted_words(&trace), expected);
    }

    #[test]
    fn test_latch_pulses_eight_times_and_rests_low() {
        let (mut bar, trace) = bar();
        trace.borrow_mut().clear();
        bar.refresh();

        let mut expected = vec![false]; // settle low
        for _ in 0..8 {
            expected.extend([false, true]);
        }
        expected.push(false); // rest low
        assert_eq!(latch_sequence(&trace), expected);
    }

    #[test]
    fn test_clock_toggles_once_per_bit_across_transmissions() {
        let (mut bar, trace) = bar();
        trace.borrow_mut().clear();
        bar.refresh();

        let events = trace.borrow();
        let mut clk = false; // polarity left by the init transmissions
        let mut toggles = 0;
        for event in events.iter() {
            if let BusEvent::Clk(level) = event {
                assert_ne!(*level, clk, "clock wrote the same level twice");
                clk = *level;
                toggles += 1;
            }
        }
        assert_eq!(toggles, 14 * 16);
    }

    #[test]
    fn test_out_of_range_index_is_a_silent_no_op() {
        let (mut bar, trace) = bar();
        bar.set(3, LED_HALF);
        trace.borrow_mut().clear();

        bar.set(10, LED_ON);
        bar.set(usize::MAX, LED_ON);
        assert!(trace.borrow().is_empty());

        // The stored vector is unchanged: a refresh still shows LED 3
        bar.refresh();
        let words = shifted_words(&trace);
        assert_eq!(words[2 + 3], word_for(LED_HALF));
        assert_eq!(words[2], 0);
    }
}
