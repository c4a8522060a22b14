//! Pin assignment
//!
//! Binds the logical signal names to physical GPIOs. Built once in
//! `main` from the peripherals and never rewired afterwards; each
//! peripheral's lines are used only by its own driver.
//!
//! | Signal        | GPIO | Notes                              |
//! |---------------|------|------------------------------------|
//! | ADC CS        | 5    | idles high                         |
//! | ADC CLK       | 6    |                                    |
//! | ADC DATA      | 7    | direction-switched per transaction |
//! | Joystick Z    | 8    | push button, active low, pulled up |
//! | Bar CLK       | 10   |                                    |
//! | Bar DATA      | 11   |                                    |
//! | Matrix LATCH  | 12   |                                    |
//! | Matrix CLK    | 13   |                                    |
//! | Matrix DATA   | 14   |                                    |
//! | Buzzer        | 15   |                                    |

use mnemon_hal_rp2040::{RpFlex, RpInput, RpOutput};

/// The board's full set of logical signal lines
pub struct PinAssignment {
    pub adc_cs: RpOutput<'static>,
    pub adc_clk: RpOutput<'static>,
    pub adc_data: RpFlex<'static>,
    pub joy_button: RpInput<'static>,
    pub bar_clk: RpOutput<'static>,
    pub bar_data: RpOutput<'static>,
    pub matrix_latch: RpOutput<'static>,
    pub matrix_clk: RpOutput<'static>,
    pub matrix_data: RpOutput<'static>,
    pub buzzer: RpOutput<'static>,
}
