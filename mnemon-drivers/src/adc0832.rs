//! ADC0832 sampling protocol
//!
//! The controller has no analog inputs, so the joystick is read through
//! an external ADC0832. The chip has no standard bus: a transaction is
//! opened by pulling CS low, three command bits (start, mode, channel)
//! are shifted out on a shared DATA line, and the sample is shifted back
//! in on the same line after it is turned around to an input.
//!
//! The chip samples DATA on rising clock edges and has no readiness
//! signal; correctness depends entirely on holding every level for the
//! fixed settle times below.

use mnemon_hal::{DelayUs, IoPin, OutputPin};

/// Half bit-period hold, applied before and after every clock edge
const BIT_DELAY_US: u32 = 20;

/// Hold after pulling CS low, before the first command bit
const OPEN_DELAY_US: u32 = 20;

/// Hold after raising CS, draining the transaction before the next one
const CLOSE_DELAY_MS: u32 = 5;

/// ADC0832 driver over three digital lines
pub struct Adc0832<Cs, Clk, Io, D> {
    cs: Cs,
    clk: Clk,
    data: Io,
    delay: D,
}

impl<Cs, Clk, Io, D> Adc0832<Cs, Clk, Io, D>
where
    Cs: OutputPin,
    Clk: OutputPin,
    Io: IoPin,
    D: DelayUs,
{
    /// Take ownership of the bus lines and put them in their idle state
    /// (CS high, CLK and DATA low)
    pub fn new(mut cs: Cs, mut clk: Clk, mut data: Io, delay: D) -> Self {
        cs.set_high();
        data.set_as_output();
        data.set_low();
        clk.set_low();
        Self {
            cs,
            clk,
            data,
            delay,
        }
    }

    /// Read one channel, returning its 8-bit sample
    ///
    /// Channels other than 0 and 1 return 0 without any bus activity.
    pub fn read_channel(&mut self, channel: u8) -> u8 {
        if channel > 1 {
            return 0;
        }

        // Open the transaction: CS low with CLK already low
        self.clk.set_low();
        self.cs.set_low();
        self.delay.delay_us(OPEN_DELAY_US);

        self.send_bit(true); // Start bit
        self.send_bit(true); // Mode bit (single ended = 1)
        self.send_bit(channel == 1); // Channel bit (0 = ch0, 1 = ch1)

        // The chip needs one idle clock cycle before data is valid
        self.clk.set_high();
        self.delay.delay_us(BIT_DELAY_US);
        self.clk.set_low();
        self.delay.delay_us(BIT_DELAY_US);

        let sample = self.read_byte();

        // End transaction
        self.cs.set_high();
        self.delay.delay_ms(CLOSE_DELAY_MS);

        sample
    }

    /// Shift out a single command bit
    fn send_bit(&mut self, bit: bool) {
        self.data.set_state(bit);
        self.delay.delay_us(BIT_DELAY_US);
        self.clk.set_high();
        self.delay.delay_us(BIT_DELAY_US);
        self.clk.set_low();
        self.delay.delay_us(BIT_DELAY_US);
    }

    /// Clock out the 16-bit reply and assemble the sample
    ///
    /// The chip sends the sample MSB first, then an LSB-first copy. Only
    /// the first 8 bits are kept, but all 16 must be clocked out: leaving
    /// the copy in the chip's buffer corrupts the next transaction.
    fn read_byte(&mut self) -> u8 {
        self.data.set_as_input();
        let mut sample = 0u8;

        for i in 0..16 {
            self.clk.set_high();
            self.delay.delay_us(BIT_DELAY_US);

            if i < 8 {
                let bit = self.data.is_high() as u8;
                sample = (sample << 1) | bit;
            }

            self.clk.set_low();
            self.delay.delay_us(BIT_DELAY_US);
        }

        self.data.set_as_output();
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use mnemon_hal::InputPin;
    use std::rc::Rc;
    use std::vec::Vec;

    /// One recorded bus transition
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum BusEvent {
        Cs(bool),
        Clk(bool),
        Data(bool),
        /// Data line direction switch, true = input
        DataInput(bool),
    }

    type Trace = Rc<RefCell<Vec<BusEvent>>>;

    struct CsPin(Trace);
    struct ClkPin(Trace, bool);

    impl OutputPin for CsPin {
        fn set_high(&mut self) {
            self.0.borrow_mut().push(BusEvent::Cs(true));
        }
        fn set_low(&mut self) {
            self.0.borrow_mut().push(BusEvent::Cs(false));
        }
        fn is_set_high(&self) -> bool {
            matches!(self.0.borrow().last(), Some(BusEvent::Cs(true)))
        }
    }

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

    /// Data line mock: records driven levels, replays scripted sample
    /// bits (MSB first) while configured as an input
    struct DataPin {
        trace: Trace,
        level: bool,
        script: Vec<bool>,
        read_pos: core::cell::Cell<usize>,
    }

    impl DataPin {
        fn scripted(trace: Trace, bytes: &[u8]) -> Self {
            let mut script = Vec::new();
            for &byte in bytes {
                for i in (0..8).rev() {
                    script.push(byte >> i & 1 == 1);
                }
            }
            Self {
                trace,
                level: false,
                script,
                read_pos: core::cell::Cell::new(0),
            }
        }
    }

    impl OutputPin for DataPin {
        fn set_high(&mut self) {
            self.level = true;
            self.trace.borrow_mut().push(BusEvent::Data(true));
        }
        fn set_low(&mut self) {
            self.level = false;
            self.trace.borrow_mut().push(BusEvent::Data(false));
        }
        fn is_set_high(&self) -> bool {
            self.level
        }
    }

    impl InputPin for DataPin {
        fn is_high(&self) -> bool {
            let pos = self.read_pos.get();
            self.read_pos.set(pos + 1);
            self.script[pos % self.script.len()]
        }
    }

    impl IoPin for DataPin {
        fn set_as_output(&mut self) {
            self.trace.borrow_mut().push(BusEvent::DataInput(false));
        }
        fn set_as_input(&mut self) {
            self.trace.borrow_mut().push(BusEvent::DataInput(true));
        }
    }

    struct NoDelay;
    impl DelayUs for NoDelay {
        fn delay_us(&mut self, _us: u32) {}
    }

    fn adc_with_sample(byte: u8) -> (Adc0832<CsPin, ClkPin, DataPin, NoDelay>, Trace) {
        let trace: Trace = Rc::new(RefCell::new(Vec::new()));
        let adc = Adc0832::new(
            CsPin(trace.clone()),
            ClkPin(trace.clone(), false),
            DataPin::scripted(trace.clone(), &[byte]),
            NoDelay,
        );
        trace.borrow_mut().clear(); // drop the init transitions
        (adc, trace)
    }

    /// Data levels at each rising clock edge while the line is an output
    fn command_bits(trace: &Trace) -> Vec<bool> {
        let mut bits = Vec::new();
        let mut data = false;
        for &event in trace.borrow().iter() {
            match event {
                BusEvent::Data(level) => data = level,
                BusEvent::Clk(true) => bits.push(data),
                BusEvent::DataInput(true) => break,
                _ => {}
            }
        }
        bits
    }

    fn rising_edges(trace: &Trace) -> usize {
        trace
            .borrow()
            .iter()
            .filter(|e| matches!(e, BusEvent::Clk(true)))
            .count()
    }

    #[test]
    fn test_invalid_channel_returns_zero_without_bus_activity() {
        for channel in [2u8, 3, 17, 255] {
            let (mut adc, trace) = adc_with_sample(0xAB);
            assert_eq!(adc.read_channel(channel), 0);
            assert!(trace.borrow().is_empty());
        }
    }

    #[test]
    fn test_sample_is_assembled_msb_first() {
        let (mut adc, _trace) = adc_with_sample(0xA7);
        assert_eq!(adc.read_channel(0), 0xA7);

        let (mut adc, _trace) = adc_with_sample(0x01);
        assert_eq!(adc.read_channel(1), 0x01);
    }

    #[test]
    fn test_command_phase_sends_start_mode_and_channel() {
        let (mut adc, trace) = adc_with_sample(0);
        adc.read_channel(0);
        // Fourth rising edge is the idle cycle; DATA still holds the
        // channel bit there
        assert_eq!(&command_bits(&trace)[..3], &[true, true, false]);

        let (mut adc, trace) = adc_with_sample(0);
        adc.read_channel(1);
        assert_eq!(&command_bits(&trace)[..3], &[true, true, true]);
    }

    #[test]
    fn test_transaction_clocks_out_the_echo_byte() {
        let (mut adc, trace) = adc_with_sample(0x55);
        adc.read_channel(0);
        // 3 command bits + 1 idle cycle + 16 reply bits
        assert_eq!(rising_edges(&trace), 20);
    }

    #[test]
    fn test_transaction_brackets_with_chip_select() {
        let (mut adc, trace) = adc_with_sample(0x55);
        adc.read_channel(0);

        let events = trace.borrow();
        let cs: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, BusEvent::Cs(_)))
            .collect();
        assert_eq!(cs, [&BusEvent::Cs(false), &BusEvent::Cs(true)]);
        // The line is handed back to us before CS goes high again
        let turnarounds: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, BusEvent::DataInput(_)))
            .collect();
        assert_eq!(
            turnarounds,
            [&BusEvent::DataInput(true), &BusEvent::DataInput(false)]
        );
    }
}
